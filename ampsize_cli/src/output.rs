//! Rendering of results, errors and tables for the terminal.

use std::io::{self, Write};

use ampsize_core::format::{format_significant, ResultDisplay, NO_MATCH_NOTE, PLACEHOLDER};
use ampsize_core::tables::{busbar_table, wire_table};
use ampsize_core::{CalcError, CalculationMode, CalculationResult, VoltageConfig};
use serde::Serialize;

const RULE: &str = "═══════════════════════════════════════";

/// JSON document printed for a successful calculation
#[derive(Serialize)]
struct CalcOutput<'a> {
    config: &'a VoltageConfig,
    mode: &'a CalculationMode,
    result: &'a CalculationResult,
    display: ResultDisplay,
}

/// Print a calculation result as aligned text
pub fn print_result_human(
    out: &mut impl Write,
    system_label: &str,
    config: &VoltageConfig,
    mode: &CalculationMode,
    result: &CalculationResult,
) -> io::Result<()> {
    let display = ResultDisplay::from_result(result);

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  SIZING RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(
        out,
        "  System:     {} (V = {}, wire factor {})",
        system_label,
        format_significant(config.voltage.value()),
        config.wire_factor
    )?;
    match mode {
        CalculationMode::Forward { power_w } => writeln!(out, "  Power:      {} W", format_significant(*power_w))?,
        CalculationMode::Backward { current_a } => writeln!(out, "  Current:    {} A", format_significant(*current_a))?,
    }
    writeln!(out)?;
    writeln!(out, "{}:", display.label)?;
    writeln!(out, "  {} {}", display.value, display.unit)?;
    writeln!(out)?;
    writeln!(out, "Recommended:")?;
    writeln!(out, "  Wire size:  {}", with_note(&display.wire_size))?;
    writeln!(out, "  Busbar:     {}", with_note(&display.busbar))?;
    if !result.fully_covered() {
        writeln!(out, "  Consider a larger or parallel configuration.")?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

fn with_note(value: &str) -> String {
    if value == PLACEHOLDER {
        format!("{} ({})", PLACEHOLDER, NO_MATCH_NOTE)
    } else {
        value.to_string()
    }
}

/// Print a calculation result as pretty JSON
pub fn print_result_json(
    out: &mut impl Write,
    config: &VoltageConfig,
    mode: &CalculationMode,
    result: &CalculationResult,
) -> io::Result<()> {
    let doc = CalcOutput {
        config,
        mode,
        result,
        display: ResultDisplay::from_result(result),
    };
    let json = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

/// Print an error for people
pub fn print_error_human(err: &mut impl Write, error: &CalcError) -> io::Result<()> {
    writeln!(err, "Error: {}", error)
}

/// Print an error as a `{kind, message}` JSON object
pub fn print_error_json(out: &mut impl Write, error: &CalcError) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&serde_json::json!({ "error": error.report() }))
        .map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

fn capacity_cell(capacity: Option<f64>) -> String {
    capacity.map_or_else(|| PLACEHOLDER.to_string(), format_significant)
}

/// Print the wire ampacity table
pub fn print_wire_table(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Wire ampacity (A), lookup order")?;
    writeln!(out, "{:<8} {:>8} {:>10} {:>10}", "Size", "Parallel", "3-wire", "4-wire")?;
    for entry in wire_table() {
        writeln!(
            out,
            "{:<8} {:>8} {:>10} {:>10}",
            entry.size,
            entry.parallel_count(),
            capacity_cell(entry.capacity_three_wire),
            capacity_cell(entry.capacity_four_wire)
        )?;
    }
    Ok(())
}

/// Print the busbar ampacity table
pub fn print_busbar_table(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Copper busbar ampacity (A), W×T×pieces in mm")?;
    writeln!(out, "{:<12} {:>8} {:>8}", "Busbar", "DC", "AC")?;
    for entry in busbar_table() {
        writeln!(
            out,
            "{:<12} {:>8} {:>8}",
            entry.spec().display_name(),
            format_significant(entry.dc_capacity),
            capacity_cell(entry.ac_capacity)
        )?;
    }
    Ok(())
}

/// Print the selected tables as text
pub fn print_tables_human(out: &mut impl Write, wire: bool, busbar: bool) -> io::Result<()> {
    if wire {
        print_wire_table(out)?;
    }
    if wire && busbar {
        writeln!(out)?;
    }
    if busbar {
        print_busbar_table(out)?;
    }
    Ok(())
}

/// Print both tables (or one of them) as JSON
pub fn print_tables_json(out: &mut impl Write, wire: bool, busbar: bool) -> io::Result<()> {
    let mut doc = serde_json::Map::new();
    if wire {
        doc.insert("wire".to_string(), serde_json::to_value(wire_table()).map_err(io::Error::other)?);
    }
    if busbar {
        doc.insert("busbar".to_string(), serde_json::to_value(busbar_table()).map_err(io::Error::other)?);
    }
    let json = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampsize_core::{calculate, SizingInput, VoltageSystem};

    fn render(system: VoltageSystem, mode: CalculationMode) -> String {
        let config = ampsize_core::resolve(Some(&system)).unwrap();
        let result = calculate(&SizingInput { voltage_system: Some(system), mode }).unwrap();
        let mut buf = Vec::new();
        print_result_human(&mut buf, &system.display_name(), &config, &mode, &result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_forward() {
        let text = render(VoltageSystem::ThreeWire220, CalculationMode::Forward { power_w: 50_000.0 });
        assert!(text.contains("164.02 AMPS"));
        assert!(text.contains("Wire size:  60"));
        assert!(text.contains("Busbar:     20×3×1"));
        assert!(!text.contains("Consider a larger"));
    }

    #[test]
    fn test_human_no_match() {
        let text = render(VoltageSystem::ThreeWire220, CalculationMode::Backward { current_a: 5000.0 });
        assert!(text.contains("kW"));
        assert!(text.contains("Wire size:  -- (no matching specification)"));
        assert!(text.contains("Busbar:     100×10×3"));
        assert!(text.contains("Consider a larger or parallel configuration."));
    }

    #[test]
    fn test_error_json() {
        let mut buf = Vec::new();
        print_error_json(&mut buf, &CalcError::missing_selection("voltage_system")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["error"]["kind"], "MISSING_SELECTION");
    }

    #[test]
    fn test_tables_text() {
        let mut buf = Vec::new();
        print_tables_human(&mut buf, true, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("150*2"));
        assert!(text.contains("120×10×4"));
        let row = text.lines().find(|l| l.starts_with("125*4")).unwrap();
        assert_eq!(row.split_whitespace().collect::<Vec<_>>(), ["125*4", "4", "1000", "--"]);
    }
}
