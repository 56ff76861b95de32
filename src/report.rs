use crate::cli::OutputFormat;
use crate::error::Result;
use crate::fibonacci::call_count;
use crate::format;
use crate::harness::Outcome;
use crate::measurement::ValueFormatter;
use std::io::Write;

pub(crate) trait Report {
    fn measurement_complete(
        &self,
        out: &mut dyn Write,
        outcome: &Outcome,
        formatter: &dyn ValueFormatter,
    ) -> Result<()>;
}

pub(crate) struct Reports {
    pub(crate) cli_enabled: bool,
    pub(crate) cli: CliReport,
    pub(crate) json_enabled: bool,
    pub(crate) json: JsonReport,
}
impl Reports {
    pub(crate) fn new(output_format: OutputFormat, verbose: bool) -> Reports {
        Reports {
            cli_enabled: output_format == OutputFormat::Human,
            cli: CliReport { verbose },
            json_enabled: output_format == OutputFormat::Json,
            json: JsonReport,
        }
    }
}
impl Report for Reports {
    fn measurement_complete(
        &self,
        out: &mut dyn Write,
        outcome: &Outcome,
        formatter: &dyn ValueFormatter,
    ) -> Result<()> {
        if self.cli_enabled {
            self.cli.measurement_complete(out, outcome, formatter)?;
        }
        if self.json_enabled {
            self.json.measurement_complete(out, outcome, formatter)?;
        }
        Ok(())
    }
}

pub(crate) struct CliReport {
    pub verbose: bool,
}
impl Report for CliReport {
    fn measurement_complete(
        &self,
        out: &mut dyn Write,
        outcome: &Outcome,
        formatter: &dyn ValueFormatter,
    ) -> Result<()> {
        writeln!(out, "Fibonacci number of {} is {}.", outcome.n, outcome.value)?;
        writeln!(out, "Calculation took {}.", outcome.elapsed_secs)?;

        if self.verbose {
            let calls = call_count(outcome.n);
            writeln!(out, "{:<7}{}", "Calls:", format::calls(calls))?;
            writeln!(out, "{:<7}{}", "Time:", formatter.format_value(outcome.elapsed_secs))?;
            writeln!(
                out,
                "{:<7}{}",
                "Rate:",
                formatter.format_call_rate(calls, outcome.elapsed_secs)
            )?;
        }
        Ok(())
    }
}

pub(crate) struct JsonReport;
impl Report for JsonReport {
    fn measurement_complete(
        &self,
        out: &mut dyn Write,
        outcome: &Outcome,
        _: &dyn ValueFormatter,
    ) -> Result<()> {
        // Serialized before writing so a failed write surfaces as an I/O error.
        let line = serde_json::to_string(outcome)?;
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
