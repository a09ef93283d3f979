use super::AppContext;
use crate::config::RangeConfig;
use crate::core::{InputField, ROIInputs};
use crate::formatting::format_input_value;
use crate::observability::set_command;
use crate::report::helper_text;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::Write;

/// Print the effective range of every adjustable input.
pub fn show_ranges<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let _command = set_command("ranges");

    let table = ranges_table(
        &ctx.config.range_config(),
        &ctx.config.starting_inputs(),
        ctx.formatting.color.should_use_color(),
    );
    writeln!(out, "{table}")?;
    out.flush()?;
    Ok(())
}

fn ranges_table(ranges: &RangeConfig, starting: &ROIInputs, use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    table.set_header(vec![
        Cell::new("INPUT").fg(Color::Cyan),
        Cell::new("MIN").fg(Color::Cyan),
        Cell::new("MAX").fg(Color::Cyan),
        Cell::new("STEP").fg(Color::Cyan),
        Cell::new("START").fg(Color::Cyan),
        Cell::new("NOTES").fg(Color::Cyan),
    ]);

    for field in InputField::ALL {
        let start = format_input_value(field, starting.get(field));
        let row = match ranges.get(field) {
            Some(range) => vec![
                Cell::new(field.name()),
                Cell::new(format_input_value(field, range.min)),
                Cell::new(format_input_value(field, range.max)),
                Cell::new(range.step),
                Cell::new(start),
                Cell::new(helper_text(field)),
            ],
            None => vec![
                Cell::new(field.name()),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new("-"),
                Cell::new(start),
                Cell::new(helper_text(field)),
            ],
        };
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::formatting::ColorMode;

    #[test]
    fn test_ranges_table_lists_every_field() {
        let ctx = AppContext::new(CalculatorConfig::default(), Some(ColorMode::Never));
        let mut out = Vec::new();
        show_ranges(&ctx, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        for field in InputField::ALL {
            assert!(output.contains(field.name()), "missing {field}");
        }
        assert!(output.contains("$15/hr"));
        assert!(output.contains("$50/hr"));
        assert!(output.contains("$50,000"));
    }
}
