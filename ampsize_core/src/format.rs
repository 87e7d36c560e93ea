//! # Result Formatting
//!
//! Presentation helpers for calculation results. Values are rounded to six
//! significant digits and written as the shortest decimal string for that
//! rounded value, so `164.020` prints as `164.02` and `100.000` as `100`.
//!
//! Formatting is one-way: nothing here feeds back into the arithmetic.

use crate::calculations::{CalculationResult, PrimaryUnit};
use crate::tables::BusbarSpec;
use crate::units::Kilowatts;

/// Significant digits kept in displayed values
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Placeholder for an absent value
pub const PLACEHOLDER: &str = "--";

/// Note shown when a lookup finds no adequate table row
pub const NO_MATCH_NOTE: &str = "no matching specification";

/// Magnitudes below this print in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Magnitudes from this up print in exponent form
const EXPONENT_FROM: f64 = 1e21;

/// Round to six significant digits and render minimally.
///
/// Plain decimal between 1e-6 and 1e21, exponent form outside that range.
/// Non-finite input renders as `NaN`.
///
/// ```rust
/// use ampsize_core::format::format_significant;
///
/// assert_eq!(format_significant(164.019962837), "164.02");
/// assert_eq!(format_significant(1234567.0), "1234570");
/// assert_eq!(format_significant(3.3e22), "3.3e+22");
/// assert_eq!(format_significant(f64::INFINITY), "NaN");
/// ```
pub fn format_significant(x: f64) -> String {
    if !x.is_finite() {
        return "NaN".to_string();
    }
    let rounded: f64 = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, x)
        .parse()
        .unwrap_or(x);
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    let magnitude = rounded.abs();
    if magnitude < EXPONENT_BELOW || magnitude >= EXPONENT_FROM {
        // exponent always signed: 3.3e+22, 1.89935e-8
        let text = format!("{:e}", rounded);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    format!("{}", rounded)
}

/// Format a current in amperes
pub fn format_amperage(current_a: f64) -> String {
    format_significant(current_a)
}

/// Format a power in kilowatts
pub fn format_power_kw(power: Kilowatts) -> String {
    format_significant(power.value())
}

/// Wire size label, or the placeholder
pub fn format_wire_size(wire_size: Option<&str>) -> String {
    wire_size.unwrap_or(PLACEHOLDER).to_string()
}

/// Busbar as `W×T×P`, or the placeholder
pub fn format_busbar(busbar: Option<&BusbarSpec>) -> String {
    busbar
        .map(BusbarSpec::display_name)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Display strings for one calculation result
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResultDisplay {
    /// "Calculated current" or "Calculated power"
    pub label: &'static str,
    /// Rounded primary value
    pub value: String,
    /// "AMPS" or "kW"
    pub unit: &'static str,
    /// Wire size label or placeholder
    pub wire_size: String,
    /// Busbar designation or placeholder
    pub busbar: String,
}

impl ResultDisplay {
    /// Build display strings for a result
    pub fn from_result(result: &CalculationResult) -> Self {
        let (label, value, unit) = match result.primary_unit {
            PrimaryUnit::Amperes => ("Calculated current", format_amperage(result.primary_value), "AMPS"),
            PrimaryUnit::Kilowatts => (
                "Calculated power",
                format_power_kw(Kilowatts(result.primary_value)),
                "kW",
            ),
        };
        Self {
            label,
            value,
            unit,
            wire_size: format_wire_size(result.wire_size.as_deref()),
            busbar: format_busbar(result.busbar.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_digits() {
        assert_eq!(format_significant(164.01996283796188), "164.02");
        assert_eq!(format_significant(56.81818181818181), "56.8182");
        assert_eq!(format_significant(100.0), "100");
        assert_eq!(format_significant(2.5), "2.5");
        assert_eq!(format_significant(0.000123456789), "0.000123457");
        assert_eq!(format_significant(999999.7), "1000000");
    }

    #[test]
    fn test_exponent_form_outside_plain_range() {
        assert_eq!(format_significant(1.8993515e-8), "1.89935e-8");
        assert_eq!(format_significant(-2.5e-7), "-2.5e-7");
        assert_eq!(format_significant(3.3e22), "3.3e+22");
        assert_eq!(format_significant(1e21), "1e+21");
        assert_eq!(format_significant(0.000001), "0.000001");
        assert_eq!(format_significant(999999999999999900000.0), "1e+21");
        assert_eq!(format_significant(123456789012345678901.0), "123457000000000000000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_significant(f64::NAN), "NaN");
        assert_eq!(format_significant(f64::NEG_INFINITY), "NaN");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_significant(0.0), "0");
        assert_eq!(format_significant(-0.0), "0");
    }

    #[test]
    fn test_power_kw() {
        use crate::units::Watts;

        assert_eq!(format_power_kw(Watts(52654.34455009387).into()), "52.6543");
        assert_eq!(format_power_kw(Kilowatts(1.0)), "1");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(format_wire_size(None), "--");
        assert_eq!(format_wire_size(Some("80*2")), "80*2");
        assert_eq!(format_busbar(None), "--");
        let spec = BusbarSpec { width: 100, thickness: 10, pieces_per_phase: 4 };
        assert_eq!(format_busbar(Some(&spec)), "100×10×4");
    }
}
