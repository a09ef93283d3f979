use crate::formatting::{
    emoji_or_fallback, format_axis_value, format_currency, format_number, formatter_for,
    FormattingConfig, OutputFormatter,
};
use crate::io::output::ReportWriter;
use crate::report::{ROIReport, REPORT_TITLE};
use crate::roi::{ai_cost_ratio, Trend, ValueDirection};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

const CHART_WIDTH: usize = 40;
const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    use_color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_formatting(writer, FormattingConfig::from_env())
    }

    pub fn with_formatting(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
            use_color: config.color.should_use_color(),
        }
    }

    fn icon(&self, emoji: &str) -> String {
        let (emoji, fallback) = emoji_or_fallback(emoji);
        self.formatter.emoji(emoji, fallback)
    }

    fn new_table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.use_color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table.set_header(
            header
                .iter()
                .map(|title| Cell::new(title).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
        table
    }

    fn write_header(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header(RULE))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .header(&format!("          {}", REPORT_TITLE.to_uppercase()))
        )?;
        writeln!(self.writer, "{}", self.formatter.header(RULE))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .dim(&format!("Generated: {}", report.generated_date()))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_hero(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        let savings = format_currency(report.metrics.annual_savings);
        let painted = if report.metrics.is_positive_roi() {
            self.formatter.success(&savings)
        } else {
            self.formatter.error(&savings)
        };
        writeln!(self.writer, "{}", self.formatter.bold("Annual Savings"))?;
        writeln!(self.writer, "  {}", self.formatter.bold(&painted))?;
        writeln!(
            self.writer,
            "  {}",
            self.formatter.dim("Net value after AI operational costs")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cards(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        let cards = [
            (
                self.icon("⏱"),
                format!("{} hrs", format_number(m.hours_saved)),
                "Hours Saved Annually",
                format!("Equivalent to {} FTE", format_number(report.fte_equivalent)),
            ),
            (
                self.icon("📊"),
                m.break_even.to_string(),
                "Break-Even Timeline",
                report.break_even_context(),
            ),
            (
                self.icon("📈"),
                format_currency(m.year3_net_value),
                "3-Year Net Value",
                format!(
                    "Cumulative value after {} implementation",
                    format_currency(m.implementation_cost)
                ),
            ),
        ];

        for (icon, value, label, context) in cards {
            writeln!(
                self.writer,
                "{} {}  {}",
                icon,
                self.formatter.bold(&value),
                label
            )?;
            writeln!(self.writer, "   {}", self.formatter.dim(&context))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Value Breakdown (Show Your Work)")
        )?;

        let mut table = self.new_table(&["COMPONENT", "AMOUNT", "HOW"]);
        for component in &report.breakdown {
            let color = match component.direction {
                ValueDirection::Gain => Color::Green,
                ValueDirection::Cost => Color::Red,
                ValueDirection::OneTime => Color::Grey,
            };
            table.add_row(vec![
                Cell::new(component.name),
                Cell::new(format!(
                    "{} {}",
                    component.direction.sign(),
                    format_currency(component.amount)
                ))
                .fg(color),
                Cell::new(component.explanation),
            ]);
        }
        if let Some(column) = table.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_comparison(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Annual Cost Comparison"))?;

        let ratio = ai_cost_ratio(&report.metrics).unwrap_or(0.0);
        let rows = [
            ("Current State", 1.0, report.metrics.current_annual_cost),
            ("With AI Copilot", ratio, report.metrics.ai_enabled_cost),
        ];
        for (label, share, cost) in rows {
            writeln!(
                self.writer,
                "  {:<16} {} {}",
                label,
                proportional_bar(share, CHART_WIDTH),
                format_currency(cost)
            )?;
        }

        if let Some(reduction) = report.cost_reduction_label() {
            let check = self.icon("✓");
            writeln!(
                self.writer,
                "  {} {}",
                check,
                self.formatter.success(&reduction)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_projection(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("3-Year Cumulative Value"))?;
        writeln!(
            self.writer,
            "  {}",
            self.formatter
                .dim("Shows when you break even and total value created over time")
        )?;

        let (lo, hi) = report.projection.bounds();
        let scale = lo.abs().max(hi.abs());
        for point in &report.projection.points {
            let bar = magnitude_bar(point.cumulative_value, scale, CHART_WIDTH);
            let bar = if point.cumulative_value < 0.0 {
                self.formatter.error(&bar)
            } else {
                self.formatter.success(&bar)
            };
            writeln!(
                self.writer,
                "  {:<7} {:>8} {}",
                point.label,
                format_axis_value(point.cumulative_value),
                bar
            )?;
        }

        let mut table = self.new_table(&["YEAR", "ANNUAL SAVINGS", "CUMULATIVE VALUE"]);
        for row in report.projection_rows() {
            table.add_row(vec![
                Cell::new(row.year),
                Cell::new(row.annual_savings),
                Cell::new(row.cumulative_value),
            ]);
        }
        for index in [1, 2] {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        writeln!(self.writer, "{table}")?;

        if report.projection.trend() == Trend::Positive {
            if let Some(insight) = report.key_insight() {
                let idea = self.icon("💡");
                writeln!(
                    self.writer,
                    "{} {} {}",
                    idea,
                    self.formatter.bold("Key Insight:"),
                    insight
                )?;
            }
        } else {
            let warn = self.icon("⚠");
            writeln!(
                self.writer,
                "{} {}",
                warn,
                self.formatter
                    .warning("The investment is not recovered within three years.")
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ROIReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_hero(report)?;
        self.write_cards(report)?;
        self.write_breakdown(report)?;
        self.write_comparison(report)?;
        self.write_projection(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Bar whose length is `|value| / scale` of `width`.
fn magnitude_bar(value: f64, scale: f64, width: usize) -> String {
    if scale <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let fill = if value < 0.0 { '░' } else { '█' };
    let length = ((value.abs() / scale) * width as f64).round() as usize;
    fill.to_string().repeat(length.min(width))
}

/// Bar filled to `share` of `width`; shares outside 0..=1 are pinned.
fn proportional_bar(share: f64, width: usize) -> String {
    let share = if share.is_nan() { 0.0 } else { share.clamp(0.0, 1.0) };
    let filled = (share * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ROICalculator;
    use crate::config::DisplayConfig;
    use crate::core::InputField;
    use chrono::{TimeZone, Utc};

    fn render(calc: &ROICalculator) -> String {
        let report = ROIReport::new(
            calc.snapshot(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            &DisplayConfig::default(),
        );
        let mut buffer = Vec::new();
        TerminalWriter::with_formatting(&mut buffer, FormattingConfig::plain())
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_magnitude_bar() {
        assert_eq!(magnitude_bar(50.0, 100.0, 10), "█████");
        assert_eq!(magnitude_bar(-100.0, 100.0, 4), "░░░░");
        assert_eq!(magnitude_bar(10.0, 0.0, 4), "");
        assert_eq!(magnitude_bar(f64::NAN, 10.0, 4), "");
    }

    #[test]
    fn test_proportional_bar_pins_out_of_range_shares() {
        assert_eq!(proportional_bar(0.5, 4), "██··");
        assert_eq!(proportional_bar(-1.1, 4), "····");
        assert_eq!(proportional_bar(3.0, 4), "████");
    }

    #[test]
    fn test_plain_output_has_no_ansi_codes() {
        let output = render(&ROICalculator::default());
        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("[TIME] 15,000 hrs  Hours Saved Annually"));
        assert!(output.contains("1 mo"));
        assert!(output.contains("Key Insight:"));
    }

    #[test]
    fn test_negative_scenario_warns() {
        let mut calc = ROICalculator::default();
        calc.update(InputField::AiCostPerTicket, 1_000.0);
        let output = render(&calc);
        assert!(output.contains("N/A"));
        assert!(output.contains("Adjust inputs to achieve positive ROI"));
        assert!(output.contains("not recovered within three years"));
    }
}
