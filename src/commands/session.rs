//! Line-oriented driver for a live [`ROICalculator`].
//!
//! Each `set` goes through the input layer (parse, then clamp or reject)
//! before it reaches the calculator, and the refreshed summary is printed
//! right after. Bad lines are reported and skipped; they never end the
//! session.

use super::{write_report, AppContext};
use crate::calculator::ROICalculator;
use crate::config::{DisplayConfig, RangeConfig};
use crate::core::{parse_input_value, InputField, ROIInputs};
use crate::errors::ROIError;
use crate::formatting::{
    format_currency, format_input_value, format_number, formatter_for, FormattingConfig,
    OutputFormatter,
};
use crate::io::OutputFormat;
use crate::observability::{increment_updates, set_command, set_current_field};
use crate::report::ROIReport;
use crate::roi::fte_equivalent;
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  set <field> <value>   Change one input (fractions accept 0.5, 50 or 50%)
  show                  Print the current metrics
  inputs                Print the current inputs
  export <path>         Write the report (.md, .html, .json or .txt)
  reset                 Restore the starting inputs
  help                  Show this help
  quit                  Leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    calculator: ROICalculator,
    starting_inputs: ROIInputs,
    ranges: RangeConfig,
    display: DisplayConfig,
    strict: bool,
    formatter: Box<dyn OutputFormatter>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(ctx: &AppContext, strict: bool, out: W) -> Self {
        let ranges = ctx.config.range_config();
        let mut starting_inputs = ctx.config.starting_inputs();
        for (field, original, clamped) in ranges.clamp_inputs(&mut starting_inputs) {
            tracing::warn!("{field} = {original} is out of range; starting at {clamped}");
        }

        Self {
            calculator: ROICalculator::new(starting_inputs),
            starting_inputs,
            ranges,
            display: ctx.config.display_config(),
            strict,
            formatter: formatter_for(ctx.formatting),
            out,
        }
    }

    pub fn calculator(&self) -> &ROICalculator {
        &self.calculator
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            self.formatter
                .header("Copilot ROI session. Type 'help' for commands.")
        )?;
        self.show()?;

        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();

        match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("set", [field, value]) => self.set(field, value)?,
            ("set", _) => self.problem("usage: set <field> <value>")?,
            ("show", []) => self.show()?,
            ("inputs", []) => self.list_inputs()?,
            ("export", [path]) => self.export(Path::new(path))?,
            ("export", _) => self.problem("usage: export <path>")?,
            ("reset", []) => {
                self.calculator.replace_inputs(self.starting_inputs);
                self.show()?;
            }
            ("help", _) => writeln!(self.out, "{HELP}")?,
            ("quit" | "exit", _) => return Ok(Flow::Quit),
            _ => self.problem(&format!("unknown command '{line}'. Type 'help' for commands."))?,
        }
        Ok(Flow::Continue)
    }

    fn set(&mut self, name: &str, raw: &str) -> Result<()> {
        let field = match name.parse::<InputField>() {
            Ok(field) => field,
            Err(e) => return self.problem(&e.to_string()),
        };
        if !field.is_user_adjustable() {
            return self.problem(&ROIError::ReadOnlyField(field).to_string());
        }
        let value = match parse_input_value(field, raw) {
            Ok(value) => value,
            Err(e) => return self.problem(&e.to_string()),
        };

        let value = if self.strict {
            match self.ranges.check(field, value) {
                Ok(value) => value,
                Err(e) => return self.problem(&e.to_string()),
            }
        } else {
            let clamped = self.ranges.clamp(field, value);
            if clamped != value {
                let note = format!(
                    "{field} is limited to its range; using {}",
                    format_input_value(field, clamped)
                );
                writeln!(self.out, "{}", self.formatter.warning(&note))?;
            }
            clamped
        };

        {
            let _field = set_current_field(field);
            self.calculator.update(field, value);
            increment_updates();
        }
        self.show()
    }

    fn show(&mut self) -> Result<()> {
        let metrics = self.calculator.metrics();
        let savings = format_currency(metrics.annual_savings);
        let savings = if metrics.is_positive_roi() {
            self.formatter.success(&savings)
        } else {
            self.formatter.error(&savings)
        };
        let fte = fte_equivalent(metrics.hours_saved, self.display.hours_per_fte);
        let lines = [
            format!("  Annual Savings:    {savings}"),
            format!("  Break-Even:        {}", metrics.break_even),
            format!(
                "  3-Year Net Value:  {}",
                format_currency(metrics.year3_net_value)
            ),
            format!(
                "  Hours Saved:       {} hrs ({} FTE)",
                format_number(metrics.hours_saved),
                format_number(fte)
            ),
        ];
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn list_inputs(&mut self) -> Result<()> {
        let inputs = *self.calculator.inputs();
        for field in InputField::ALL {
            let marker = if field.is_user_adjustable() {
                ""
            } else {
                "(fixed)"
            };
            writeln!(
                self.out,
                "  {:<20} {:<24} {}",
                field.name(),
                format_input_value(field, inputs.get(field)),
                self.formatter.dim(marker)
            )?;
        }
        Ok(())
    }

    fn export(&mut self, path: &Path) -> Result<()> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(OutputFormat::from_extension)
            .unwrap_or(OutputFormat::Markdown);
        let report = ROIReport::new(self.calculator.snapshot(), Utc::now(), &self.display);

        match write_report(&report, format, Some(path), FormattingConfig::plain()) {
            Ok(()) => {
                let done = format!("Report written to {}", path.display());
                writeln!(self.out, "{}", self.formatter.success(&done))?;
            }
            Err(e) => self.problem(&format!("export failed: {e:#}"))?,
        }
        Ok(())
    }

    fn problem(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", self.formatter.warning(message))?;
        Ok(())
    }
}

/// Run an interactive session over `input`, writing to `out`.
pub fn run_session<R: BufRead, W: Write>(
    ctx: &AppContext,
    strict: bool,
    input: R,
    out: W,
) -> Result<()> {
    let _command = set_command("session");
    let mut session = Session::new(ctx, strict, out);
    session.run(input)?;
    tracing::debug!(
        revision = session.calculator().revision(),
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::core::BreakEven;
    use crate::formatting::ColorMode;
    use tempfile::TempDir;

    fn context() -> AppContext {
        AppContext::new(CalculatorConfig::default(), Some(ColorMode::Never))
    }

    fn run_script(strict: bool, script: &str) -> (Session<Vec<u8>>, String) {
        let mut session = Session::new(&context(), strict, Vec::new());
        session.run(script.as_bytes()).unwrap();
        let output = String::from_utf8(session.out.clone()).unwrap();
        (session, output)
    }

    #[test]
    fn test_set_recomputes_and_prints_summary() {
        let (session, output) = run_script(false, "set hourly_wage 35\nquit\n");

        assert_eq!(session.calculator().inputs().hourly_wage, 35.0);
        assert_eq!(session.calculator().revision(), 2);
        assert!(output.contains("Annual Savings:    $1,870,200"));
    }

    #[test]
    fn test_bad_lines_are_reported_and_ignored() {
        let script = "set head_count 5\nset hourly_wage lots\nset implementation_cost 1\nfrobnicate\n";
        let (session, output) = run_script(false, script);

        assert!(output.contains("Unknown input field 'head_count'"));
        assert!(output.contains("Invalid value 'lots' for hourly_wage"));
        assert!(output.contains("'implementation_cost' is fixed and cannot be adjusted"));
        assert!(output.contains("unknown command 'frobnicate'"));
        assert_eq!(session.calculator().revision(), 1);
        assert_eq!(*session.calculator().inputs(), ROIInputs::default());
    }

    #[test]
    fn test_out_of_range_values_clamp_or_reject() {
        let (session, output) = run_script(false, "set time-reduction 95%\n");
        assert_eq!(session.calculator().inputs().time_reduction, 0.8);
        assert!(output.contains("using 80%"));

        let (session, output) = run_script(true, "set time-reduction 95%\n");
        assert_eq!(session.calculator().inputs().time_reduction, 0.5);
        assert!(output.contains("outside the allowed range"));
    }

    #[test]
    fn test_reset_restores_starting_inputs() {
        let (session, _) = run_script(false, "set monthly_tickets 1000\nreset\n");
        assert_eq!(*session.calculator().inputs(), ROIInputs::default());
        assert_eq!(session.calculator().metrics().break_even, BreakEven::Months(1));
    }

    #[test]
    fn test_export_writes_report_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roi.md");
        let script = format!("export {}\nset hourly_wage 40\n", path.display());

        let (_, output) = run_script(false, &script);
        assert!(output.contains("Report written to"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# AI Copilot ROI Analysis"));
        assert!(contents.contains("$1,765,200"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script(false, "quit\nset hourly_wage 40\n");
        assert_eq!(session.calculator().inputs().hourly_wage, 28.0);
    }
}
