//! Reading input values the way people type them.
//!
//! Fractions accept `0.5`, `50` or `50%`. Money accepts a leading `$` and
//! thousands separators.

use super::InputField;
use crate::errors::{ROIError, ROIResult};

/// Parse a fraction written either as a fraction or as a percentage.
///
/// Values above 1 are read as percentages, so `1` means 100% and `1.5`
/// means 1.5%.
pub fn parse_fraction(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    let (number, is_percent) = match trimmed.strip_suffix('%') {
        Some(number) => (number.trim(), true),
        None => (trimmed, false),
    };

    let value: f64 = number
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{raw}' is not a finite number"));
    }

    if is_percent || value.abs() > 1.0 {
        Ok(value / 100.0)
    } else {
        Ok(value)
    }
}

/// Parse a value for `field`.
pub fn parse_input_value(field: InputField, raw: &str) -> ROIResult<f64> {
    let invalid = || ROIError::InvalidValue {
        field: field.name().to_string(),
        value: raw.to_string(),
    };

    if field.is_fraction() {
        return parse_fraction(raw).map_err(|_| invalid());
    }

    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction_forms() {
        assert_eq!(parse_fraction("0.5"), Ok(0.5));
        assert_eq!(parse_fraction("50"), Ok(0.5));
        assert_eq!(parse_fraction("50%"), Ok(0.5));
        assert_eq!(parse_fraction(" 15 % "), Ok(0.15));
        assert_eq!(parse_fraction("1"), Ok(1.0));
        assert!(parse_fraction("half").is_err());
        assert!(parse_fraction("inf").is_err());
    }

    #[test]
    fn test_parse_money_and_counts() {
        assert_eq!(
            parse_input_value(InputField::MonthlyTickets, "25,000").unwrap(),
            25_000.0
        );
        assert_eq!(
            parse_input_value(InputField::EscalationCost, "$90").unwrap(),
            90.0
        );
        assert_eq!(
            parse_input_value(InputField::TimeReduction, "60%").unwrap(),
            0.6
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_input_value(InputField::HourlyWage, "lots").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value 'lots' for hourly_wage");
        assert!(parse_input_value(InputField::HourlyWage, "NaN").is_err());
    }
}
