//! Command-line arguments of the benchmark binary. None of them changes the input.

mod error;
mod types;

use error::Error;
pub use types::OutputFormat;

use clap::{App, Arg};
use std::{env, ffi::OsString, process};

/// The parsed command line.
#[derive(Debug, PartialEq)]
pub struct Args {
    /// Print the call count, call rate, and scaled elapsed time after each measurement.
    pub verbose: bool,
    /// Number of timed runs.
    pub iterations: u64,
    /// Format of the report on stdout.
    pub output_format: OutputFormat,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            verbose: false,
            iterations: 1,
            output_format: OutputFormat::default(),
        }
    }
}

/// Parses the process arguments. Prints help or version and exits when asked to; prints the
/// error and exits with status 1 on invalid arguments.
pub fn parse_args() -> Args {
    match try_parse_args(env::args_os()) {
        Ok(args) => args,
        Err(Error::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error parsing CLI args: {}", e);
            eprintln!("For more information try --help");
            process::exit(1);
        }
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("fib-bench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Times one naive recursive evaluation of the 25th Fibonacci number.")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print the call count, call rate, and scaled elapsed time."),
        )
        .arg(
            Arg::with_name("iterations")
                .long("iterations")
                .takes_value(true)
                .value_name("N")
                .help("Repeat the measurement N times, reporting each run. [default: 1]"),
        )
        .arg(
            Arg::with_name("output-format")
                .long("output-format")
                .takes_value(true)
                .value_name("FORMAT")
                .help(
                    "Change the output format. 'human' prints two lines per run, \
                     'json' prints one JSON object per run. [default: human] \
                     [possible values: human, json]",
                ),
        )
        .after_help(
            "To enable debug output, define the environment variable FIB_BENCH_DEBUG.\n\
             Debug output goes to stderr and never alters the report on stdout.",
        )
}

fn try_parse_args<I, T>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app().get_matches_from_safe(args)?;

    let iterations = match matches.value_of("iterations") {
        None => 1,
        Some(value) => match value.parse::<u64>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(Error::InvalidIterations(value.to_owned())),
        },
    };
    let output_format = match matches.value_of("output-format") {
        None => OutputFormat::default(),
        Some(value) => value
            .parse()
            .map_err(|_| Error::InvalidOutputFormat(value.to_owned()))?,
    };
    let verbose = matches.is_present("verbose");

    // Error if there are conflicting args
    if verbose && output_format == OutputFormat::Json {
        return Err(Error::ConflictingFlags(&["--verbose", "--output-format json"]));
    }

    Ok(Args {
        verbose,
        iterations,
        output_format,
    })
}
