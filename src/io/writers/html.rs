use crate::formatting::format_currency;
use crate::io::output::ReportWriter;
use crate::report::{ReportRow, ROIReport, METHODOLOGY, REPORT_TITLE};
use crate::roi::ValueDirection;
use anyhow::Result;
use html_escape::encode_text;
use std::io::Write;

/// Printable two-page report. Page 2 starts at the input assumptions.
pub struct HtmlWriter<W: Write> {
    writer: W,
    template: &'static str,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/report.html"),
        }
    }

    fn render_html(&self, report: &ROIReport) -> String {
        self.template
            .replace("{{{TITLE}}}", &encode_text(REPORT_TITLE))
            .replace("{{{GENERATED}}}", &encode_text(&report.generated_date()))
            .replace("{{{SUMMARY_ITEMS}}}", &summary_items(&report.executive_summary()))
            .replace("{{{KEY_INSIGHT}}}", &key_insight(report))
            .replace("{{{KEY_METRICS_ROWS}}}", &label_rows(&report.key_metrics()))
            .replace("{{{BREAKDOWN_ROWS}}}", &breakdown_rows(report))
            .replace("{{{COMPARISON_ROWS}}}", &label_rows(&report.cost_comparison()))
            .replace("{{{COST_REDUCTION}}}", &cost_reduction(report))
            .replace("{{{ASSUMPTION_ROWS}}}", &assumption_rows(report))
            .replace("{{{PROJECTION_ROWS}}}", &projection_rows(report))
            .replace("{{{METHODOLOGY}}}", &methodology())
    }
}

impl<W: Write> ReportWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &ROIReport) -> Result<()> {
        let html = self.render_html(report);
        write!(self.writer, "{}", html)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn summary_items(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "      <li><strong>{}:</strong> {}</li>",
                encode_text(row.label),
                encode_text(&row.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn key_insight(report: &ROIReport) -> String {
    report
        .key_insight()
        .map(|insight| {
            format!(
                "  <div class=\"insight\"><strong>Key Insight:</strong> {}</div>",
                encode_text(&insight)
            )
        })
        .unwrap_or_default()
}

fn label_rows(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "        <tr><td>{}</td><td class=\"num\">{}</td></tr>",
                encode_text(row.label),
                encode_text(&row.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn breakdown_rows(report: &ROIReport) -> String {
    report
        .breakdown
        .iter()
        .map(|component| {
            let class = match component.direction {
                ValueDirection::Gain => "gain",
                ValueDirection::Cost => "cost",
                ValueDirection::OneTime => "onetime",
            };
            format!(
                "        <tr><td>{}</td><td class=\"num {}\">{} {}</td><td>{}</td></tr>",
                encode_text(component.name),
                class,
                component.direction.sign(),
                encode_text(&format_currency(component.amount)),
                encode_text(component.explanation)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cost_reduction(report: &ROIReport) -> String {
    report
        .cost_reduction_label()
        .map(|label| format!("    <p class=\"callout\">{}</p>", encode_text(&label)))
        .unwrap_or_default()
}

fn assumption_rows(report: &ROIReport) -> String {
    report
        .assumptions()
        .iter()
        .map(|row| {
            format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(row.input),
                encode_text(&row.value),
                encode_text(row.benchmark)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn projection_rows(report: &ROIReport) -> String {
    report
        .projection_rows()
        .iter()
        .map(|row| {
            format!(
                "        <tr><td>{}</td><td class=\"num\">{}</td><td class=\"num strong\">{}</td></tr>",
                encode_text(&row.year),
                encode_text(&row.annual_savings),
                encode_text(&row.cumulative_value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn methodology() -> String {
    METHODOLOGY
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| format!("      <p>{}</p>", encode_text(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ROICalculator;
    use crate::config::DisplayConfig;
    use chrono::{TimeZone, Utc};

    fn render(calc: &ROICalculator) -> String {
        let report = ROIReport::new(
            calc.snapshot(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            &DisplayConfig::default(),
        );
        let mut buffer = Vec::new();
        HtmlWriter::new(&mut buffer).write_report(&report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_no_placeholders_left() {
        let html = render(&ROICalculator::default());
        assert!(!html.contains("{{{"), "unreplaced placeholder in:\n{html}");
        assert!(html.contains("<title>AI Copilot ROI Analysis</title>"));
    }

    #[test]
    fn test_two_pages() {
        let html = render(&ROICalculator::default());
        let summary = html.find("Executive Summary").unwrap();
        let page_two = html.find("<section class=\"page-break\">").unwrap();
        let assumptions = html.find("Input Assumptions").unwrap();
        assert!(summary < page_two && page_two < assumptions);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(&ROICalculator::default());
        assert!(html.contains("Methodology &amp; Sources"));
        assert!(html.contains("<td class=\"num\">-</td><td class=\"num strong\">-$50,000</td>"));
        assert!(html.contains("<td>L2 agent cost × 45 min</td>"));
    }

    #[test]
    fn test_key_insight_omitted_when_negative() {
        let mut calc = ROICalculator::default();
        calc.update(crate::core::InputField::MonthlyTickets, 0.0);
        let html = render(&calc);
        assert!(!html.contains("Key Insight"));
        assert!(html.contains("N/A"));
    }
}
