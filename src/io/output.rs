use crate::formatting::FormattingConfig;
use crate::io::writers::{HtmlWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::report::ROIReport;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored summary cards and tables
    Terminal,
    /// Machine-readable report
    Json,
    /// Printable report as Markdown
    Markdown,
    /// Printable two-page HTML document
    Html,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Terminal => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ROIReport) -> anyhow::Result<()>;
}

/// Build the writer for `format` on top of `out`.
///
/// `formatting` only affects the terminal writer.
pub fn create_writer<'a>(
    format: OutputFormat,
    out: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::with_formatting(out, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Html => Box::new(HtmlWriter::new(out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ROICalculator;
    use crate::config::DisplayConfig;
    use chrono::TimeZone;

    fn render(format: OutputFormat) -> String {
        let report = ROIReport::new(
            ROICalculator::default().snapshot(),
            chrono::Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            &DisplayConfig::default(),
        );
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, Box::new(&mut buffer), FormattingConfig::plain());
            writer.write_report(&report).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_every_format_mentions_annual_savings() {
        for format in [
            OutputFormat::Terminal,
            OutputFormat::Markdown,
            OutputFormat::Html,
        ] {
            let output = render(format);
            assert!(output.contains("$1,765,200"), "{format:?}: {output}");
        }
        assert!(render(OutputFormat::Json).contains("\"annual_savings\""));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Html.extension(), "html");
    }
}
