//! Calculator configuration: starting inputs, slider ranges, display and
//! output preferences, read from `.copilot-roi.toml`.
//!
//! ```toml
//! [inputs]
//! monthly_tickets = 25000
//! implementation_cost = 75000
//!
//! [ranges.hourly_wage]
//! max = 120
//!
//! [display]
//! hours_per_fte = 1880
//!
//! [output]
//! default_format = "markdown"
//! ```

mod core;
mod loader;
pub mod ranges;
pub mod validation;

pub use self::core::{
    default_hours_per_fte, CalculatorConfig, DisplayConfig, InputOverrides, OutputConfig,
};
pub use loader::{
    config_candidates, directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
pub use ranges::{default_range, validate_inputs, FieldRange, RangeConfig, RangeOverride, RangeOverrides};
pub use validation::validate_config;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputField;
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use std::path::Path;

    #[test]
    fn test_parse_full_config() {
        let contents = indoc! {r#"
            [inputs]
            monthly_tickets = 25000
            implementation_cost = 75000

            [ranges.hourly_wage]
            max = 120

            [display]
            hours_per_fte = 1880
            color = "never"

            [output]
            default_format = "markdown"
        "#};

        let config = parse_and_validate_config(contents, Path::new("test.toml")).unwrap();
        let inputs = config.starting_inputs();
        assert_eq!(inputs.monthly_tickets, 25_000.0);
        assert_eq!(inputs.implementation_cost, 75_000.0);
        assert_eq!(inputs.hourly_wage, 28.0);

        assert_eq!(
            config.range_config().get(InputField::HourlyWage),
            Some(FieldRange::new(15.0, 120.0, 1.0))
        );
        assert_eq!(config.display_config().hours_per_fte, 1880.0);
        assert_eq!(config.default_format(), Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let contents = indoc! {r#"
            [inputs]
            head_count = 12
        "#};

        let err = parse_and_validate_config(contents, Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_invalid_values_surface_as_config_errors() {
        let contents = indoc! {r#"
            [ranges.time_reduction]
            min = 0.9
            max = 0.1
        "#};

        let err = parse_and_validate_config(contents, Path::new("ranges.toml")).unwrap_err();
        assert!(err.to_string().contains("ranges.time_reduction"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.starting_inputs(), crate::core::ROIInputs::default());
    }
}
