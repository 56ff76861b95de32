//! The timing harness around [fibonacci](../fibonacci/fn.fibonacci.html).

use crate::black_box;
use crate::cli::{self, Args, OutputFormat};
use crate::error::{Error, Result};
use crate::fibonacci::{fibonacci, INPUT, MAX_INPUT};
use crate::measurement::{Measurement, WallTime};
use crate::report::{Report, Reports};
use std::io::{self, Write};

/// The result of one timed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// The input the function was called with.
    pub n: u32,
    /// The computed Fibonacci number.
    pub value: u64,
    /// Elapsed wall-clock time of the call, in seconds.
    pub elapsed_secs: f64,
}

/// The benchmark manager
///
/// Times `fibonacci(n)` once per run and hands each [Outcome](struct.Outcome.html) to the
/// configured report. The defaults run the benchmark input once and print the two-line human
/// report.
///
/// ```rust
/// use fib_bench::Harness;
///
/// let outcome = Harness::default().input(10).measure().unwrap();
/// assert_eq!(outcome.value, 55);
/// ```
pub struct Harness<M: Measurement = WallTime> {
    input: u32,
    iterations: u64,
    verbose: bool,
    output_format: OutputFormat,
    measurement: M,
}

impl Default for Harness {
    /// Creates a harness with the default configuration:
    ///
    /// - Input: 25
    /// - Iterations: 1
    /// - Output format: human
    /// - Verbose: false
    /// - Measurement: wall clock
    fn default() -> Harness {
        Harness {
            input: INPUT,
            iterations: 1,
            verbose: false,
            output_format: OutputFormat::default(),
            measurement: WallTime,
        }
    }
}

impl<M: Measurement> Harness<M> {
    /// Changes the measurement used to time the call. The default is wall-clock time.
    pub fn with_measurement<M2: Measurement>(self, m: M2) -> Harness<M2> {
        // Can't use struct update syntax here because they're technically different types.
        Harness {
            input: self.input,
            iterations: self.iterations,
            verbose: self.verbose,
            output_format: self.output_format,
            measurement: m,
        }
    }

    #[must_use]
    /// Changes the input. Inputs above [MAX_INPUT](../constant.MAX_INPUT.html) are rejected when
    /// measuring.
    pub fn input(mut self, n: u32) -> Harness<M> {
        self.input = n;
        self
    }

    #[must_use]
    /// Changes the number of timed runs.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn iterations(mut self, n: u64) -> Harness<M> {
        assert!(n > 0);

        self.iterations = n;
        self
    }

    #[must_use]
    /// Enables the call count, call rate, and scaled time lines of the human report.
    pub fn verbose(mut self, verbose: bool) -> Harness<M> {
        self.verbose = verbose;
        self
    }

    #[must_use]
    /// Changes the report format.
    pub fn output_format(mut self, format: OutputFormat) -> Harness<M> {
        self.output_format = format;
        self
    }

    /// Configure this harness from the process arguments.
    ///
    /// Exits the process on `--help`, `--version`, or invalid arguments.
    #[must_use]
    pub fn configure_from_args(self) -> Harness<M> {
        self.configure_from(cli::parse_args())
    }

    /// Applies parsed command-line arguments. The input is never taken from the command line.
    #[must_use]
    pub fn configure_from(self, args: Args) -> Harness<M> {
        self.iterations(args.iterations)
            .verbose(args.verbose)
            .output_format(args.output_format)
    }

    /// Times a single call of the benchmarked function.
    pub fn measure(&self) -> Result<Outcome> {
        if self.input > MAX_INPUT {
            return Err(Error::InputOutOfRange {
                n: self.input,
                max: MAX_INPUT,
            });
        }
        let n = black_box(self.input);

        let start = self.measurement.start();
        let value = black_box(fibonacci(n));
        let end = self.measurement.end(start);

        Ok(Outcome {
            n,
            value,
            elapsed_secs: self.measurement.to_seconds(&end),
        })
    }

    /// Performs every configured run, writing each report to `out` as soon as it completes.
    ///
    /// Outcomes are not retained; the last one is returned. A failed write stops the runs.
    pub fn run(&self, out: &mut dyn Write) -> Result<Outcome> {
        let reports = Reports::new(self.output_format, self.verbose);
        let formatter = self.measurement.formatter();

        let mut run = 1;
        loop {
            let outcome = self.measure()?;
            info!(
                "Run {}/{}: fibonacci({}) = {} in {}s",
                run, self.iterations, outcome.n, outcome.value, outcome.elapsed_secs
            );
            reports.measurement_complete(out, &outcome, formatter)?;
            if run >= self.iterations {
                return Ok(outcome);
            }
            run += 1;
        }
    }

    /// Performs every configured run, reporting to stdout.
    pub fn run_to_stdout(&self) -> Result<Outcome> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let outcome = self.run(&mut handle)?;
        handle.flush()?;
        Ok(outcome)
    }
}
