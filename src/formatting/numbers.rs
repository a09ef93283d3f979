//! US-dollar and number formatting for every output format.
//!
//! Rounding is half away from zero (what `f64::round` does), matching how
//! spreadsheet users expect currency to round. Values are only rounded here;
//! the engine never rounds.

use crate::core::InputField;

/// `$1,765,200`, `-$925,200`. Whole dollars.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    if rounded == 0.0 {
        return "$0".to_string();
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs()))
}

/// `15,000`. Whole numbers.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(rounded.abs()))
}

/// Fraction to whole percent: `0.15` → `15%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_number(fraction * 100.0))
}

/// Compact label for a chart axis: `$1.8M`, `$50K`, `-$50K`.
pub fn format_axis_value(value: f64) -> String {
    match value {
        v if v == 0.0 => "$0".to_string(),
        v if v >= 1_000_000.0 => format!("${:.1}M", v / 1_000_000.0),
        v if v >= 1_000.0 => format!("${}K", (v / 1_000.0).round()),
        v if v <= -1_000_000.0 => format!("-${:.1}M", (v / 1_000_000.0).abs()),
        v if v <= -1_000.0 => format!("-${}K", (v / 1_000.0).abs().round()),
        v => format!("${v}"),
    }
}

/// How an input value is shown next to its label.
pub fn format_input_value(field: InputField, value: f64) -> String {
    match field {
        InputField::AgentCount => format!("{} agents", format_number(value)),
        InputField::MonthlyTickets => format!("{} tickets", format_number(value)),
        InputField::AvgHandleTime => format!("{value} minutes"),
        InputField::HourlyWage => format!("${value}/hr"),
        InputField::AiCostPerTicket => format!("${value:.3}"),
        InputField::TimeReduction | InputField::FcrImprovement => format_percent(value),
        InputField::EscalationCost => format!("${value}"),
        InputField::ImplementationCost => format_currency(value),
    }
}

/// Insert thousands separators into a non-negative whole number.
fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_765_200.0), "$1,765,200");
        assert_eq!(format_currency(-925_200.0), "-$925,200");
        assert_eq!(format_currency(4_800.000_000_1), "$4,800");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(-0.2), "$0");
        assert_eq!(format_currency(12.0), "$12");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15_000.0), "15,000");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1_234_567.4), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(0.15), "15%");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(0.0), "$0");
        assert_eq!(format_axis_value(5_245_600.0), "$5.2M");
        assert_eq!(format_axis_value(50_000.0), "$50K");
        assert_eq!(format_axis_value(-50_000.0), "-$50K");
        assert_eq!(format_axis_value(-1_500_000.0), "-$1.5M");
        assert_eq!(format_axis_value(500.0), "$500");
    }

    #[test]
    fn test_format_input_value() {
        assert_eq!(format_input_value(InputField::AgentCount, 50.0), "50 agents");
        assert_eq!(
            format_input_value(InputField::MonthlyTickets, 10_000.0),
            "10,000 tickets"
        );
        assert_eq!(format_input_value(InputField::AvgHandleTime, 15.0), "15 minutes");
        assert_eq!(format_input_value(InputField::HourlyWage, 28.0), "$28/hr");
        assert_eq!(format_input_value(InputField::TimeReduction, 0.5), "50%");
        assert_eq!(format_input_value(InputField::AiCostPerTicket, 0.04), "$0.040");
        assert_eq!(format_input_value(InputField::EscalationCost, 75.0), "$75");
        assert_eq!(
            format_input_value(InputField::ImplementationCost, 50_000.0),
            "$50,000"
        );
    }
}
