use crate::formatting::format_currency;
use crate::io::output::ReportWriter;
use crate::report::{
    ReportRow, ROIReport, BENCHMARK_DISCLAIMER, INDUSTRY_BENCHMARKS, METHODOLOGY, REPORT_TITLE,
};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_executive_summary(report)?;
        self.write_key_metrics(report)?;
        self.write_value_breakdown(report)?;
        self.write_cost_comparison(report)?;
        self.write_assumptions(report)?;
        self.write_projection(report)?;
        self.write_methodology()?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# {REPORT_TITLE}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", report.generated_date())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_executive_summary(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        for row in report.executive_summary() {
            writeln!(self.writer, "- **{}:** {}", row.label, row.value)?;
        }
        writeln!(self.writer)?;

        if let Some(insight) = report.key_insight() {
            writeln!(self.writer, "> **Key Insight:** {insight}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_key_metrics(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Key Metrics")?;
        writeln!(self.writer)?;
        self.write_two_column_table("Metric", "Value", &report.key_metrics())
    }

    fn write_value_breakdown(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Value Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Component | Amount | How |")?;
        writeln!(self.writer, "|-----------|-------:|-----|")?;
        for component in &report.breakdown {
            writeln!(
                self.writer,
                "| {} | {} {} | {} |",
                component.name,
                component.direction.sign(),
                format_currency(component.amount),
                component.explanation
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_comparison(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Annual Cost Comparison")?;
        writeln!(self.writer)?;
        self.write_two_column_table("Scenario", "Annual Cost", &report.cost_comparison())?;
        if let Some(reduction) = report.cost_reduction_label() {
            writeln!(self.writer, "**{reduction}**")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_assumptions(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Input Assumptions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value | Industry Benchmark |")?;
        writeln!(self.writer, "|-------|-------|--------------------|")?;
        for row in report.assumptions() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                row.input, row.value, row.benchmark
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_projection(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## 3-Year Financial Projection")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Annual Savings | Cumulative Value |")?;
        writeln!(self.writer, "|------|---------------:|-----------------:|")?;
        for row in report.projection_rows() {
            writeln!(
                self.writer,
                "| {} | {} | **{}** |",
                row.year, row.annual_savings, row.cumulative_value
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_methodology(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "## Methodology & Sources")?;
        writeln!(self.writer)?;
        for line in METHODOLOGY {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Industry Benchmarks Used")?;
        writeln!(self.writer)?;
        for benchmark in INDUSTRY_BENCHMARKS {
            writeln!(
                self.writer,
                "- **{}:** {} ({})",
                benchmark.metric, benchmark.range, benchmark.source
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "_{BENCHMARK_DISCLAIMER}_")?;
        Ok(())
    }

    fn write_two_column_table(
        &mut self,
        left: &str,
        right: &str,
        rows: &[ReportRow],
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "| {left} | {right} |")?;
        writeln!(self.writer, "|--------|-------:|")?;
        for row in rows {
            writeln!(self.writer, "| {} | {} |", row.label, row.value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ROICalculator;
    use crate::config::DisplayConfig;
    use chrono::{TimeZone, Utc};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        let report = ROIReport::new(
            ROICalculator::default().snapshot(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            &DisplayConfig::default(),
        );
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_summary() {
        let output = render();
        let expected = indoc! {"
            # AI Copilot ROI Analysis

            Generated: 2024-03-01

            ## Executive Summary

            - **Annual Savings:** $1,765,200
            - **Break-Even:** 1 month
            - **3-Year Net Value:** $5,245,600

            > **Key Insight:** Your investment pays back in 1 month. By Year 3, you've created $5,245,600 in cumulative value.
        "};
        assert_eq!(&output[..expected.len()], expected);
    }

    #[test]
    fn test_projection_table() {
        let output = render();
        assert!(output.contains("| Year 0 | - | **-$50,000** |"));
        assert!(output.contains("| Year 3 | $1,765,200 | **$5,245,600** |"));
    }

    #[test]
    fn test_assumptions_and_methodology() {
        let output = render();
        assert!(output.contains("| AI Cost per Ticket | $0.040 |"));
        assert!(output.contains("| Expected Time Reduction | 50% | 35-60% (Forrester 2024) |"));
        assert!(output.contains("## Methodology & Sources"));
        assert!(output.contains("**210.1% reduction in annual support costs**"));
    }
}
