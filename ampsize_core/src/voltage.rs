//! # Voltage Resolver
//!
//! Turns a voltage-system choice into a normalized [`VoltageConfig`]: line
//! voltage, phase count and wire factor. Resolution is a pure classification;
//! the same input always yields the same config.
//!
//! ## Presets
//!
//! | Token      | System                  | V   | Phase  | Wire factor |
//! |------------|-------------------------|-----|--------|-------------|
//! | `4W_380`   | three-phase four-wire   | 380 | three  | 4           |
//! | `3W_220`   | three-phase three-wire  | 220 | three  | 3           |
//! | `1P3W_220` | single-phase three-wire | 220 | single | 2           |
//! | `custom`   | user-supplied voltage   | any | either | 3 or 2      |
//!
//! ## Example
//!
//! ```rust
//! use ampsize_core::voltage::{resolve, VoltageSystem, WireFactor};
//!
//! let config = resolve(Some(&VoltageSystem::FourWire380)).unwrap();
//! assert_eq!(config.voltage.0, 380.0);
//! assert!(config.is_three_phase);
//! assert_eq!(config.wire_factor, WireFactor::Four);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::Volts;

/// Field name reported when no voltage system is selected
pub const VOLTAGE_SYSTEM_FIELD: &str = "voltage_system";

/// Field name reported for an invalid custom voltage
pub const VOLTAGE_FIELD: &str = "voltage";

// ============================================================================
// WIRE FACTOR
// ============================================================================

/// Number of current-carrying conductors.
///
/// Selects the ampacity column of the wire table: four-wire systems use the
/// four-wire column, everything else the three-wire column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WireFactor {
    /// Single-phase
    Two,
    /// Three-phase three-wire
    Three,
    /// Three-phase four-wire
    Four,
}

impl WireFactor {
    /// Get the numeric conductor count
    pub fn count(&self) -> u8 {
        match self {
            WireFactor::Two => 2,
            WireFactor::Three => 3,
            WireFactor::Four => 4,
        }
    }

    /// True when the four-wire ampacity column applies
    pub fn is_four_wire(&self) -> bool {
        matches!(self, WireFactor::Four)
    }
}

impl From<WireFactor> for u8 {
    fn from(factor: WireFactor) -> Self {
        factor.count()
    }
}

impl TryFrom<u8> for WireFactor {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            2 => Ok(WireFactor::Two),
            3 => Ok(WireFactor::Three),
            4 => Ok(WireFactor::Four),
            other => Err(format!("wire factor must be 2, 3 or 4, got {}", other)),
        }
    }
}

impl std::fmt::Display for WireFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

// ============================================================================
// VOLTAGE SYSTEM (user choice)
// ============================================================================

/// A voltage-system selection as made by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VoltageSystem {
    /// 380 V three-phase four-wire
    #[serde(rename = "4W_380")]
    FourWire380,
    /// 220 V three-phase three-wire
    #[serde(rename = "3W_220")]
    ThreeWire220,
    /// 220 V single-phase three-wire
    #[serde(rename = "1P3W_220")]
    SinglePhase3Wire220,
    /// User-supplied line voltage and phase count
    #[serde(rename = "custom")]
    Custom { voltage: f64, three_phase: bool },
}

impl VoltageSystem {
    /// The preset systems, in the order they are offered to users
    pub const PRESETS: [VoltageSystem; 3] = [
        VoltageSystem::FourWire380,
        VoltageSystem::ThreeWire220,
        VoltageSystem::SinglePhase3Wire220,
    ];

    /// Selection token (e.g. "4W_380", "custom")
    pub fn token(&self) -> &'static str {
        match self {
            VoltageSystem::FourWire380 => "4W_380",
            VoltageSystem::ThreeWire220 => "3W_220",
            VoltageSystem::SinglePhase3Wire220 => "1P3W_220",
            VoltageSystem::Custom { .. } => "custom",
        }
    }

    /// Get display label
    pub fn display_name(&self) -> String {
        match self {
            VoltageSystem::FourWire380 => "3φ4W 380V".to_string(),
            VoltageSystem::ThreeWire220 => "3φ3W 220V".to_string(),
            VoltageSystem::SinglePhase3Wire220 => "1φ3W 220V".to_string(),
            VoltageSystem::Custom { voltage, three_phase } => {
                format!("{} {}V (custom)", if *three_phase { "3φ" } else { "1φ" }, voltage)
            }
        }
    }
}

impl std::fmt::Display for VoltageSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// VOLTAGE CONFIG (resolved)
// ============================================================================

/// Normalized electrical configuration for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageConfig {
    /// Line voltage, always finite and positive
    pub voltage: Volts,
    /// Three-phase system
    pub is_three_phase: bool,
    /// Conductor count used for wire column selection
    pub wire_factor: WireFactor,
}

impl VoltageConfig {
    /// Phase multiplier: √3 for three-phase, 1 otherwise
    pub fn sqrt_factor(&self) -> f64 {
        if self.is_three_phase {
            3f64.sqrt()
        } else {
            1.0
        }
    }
}

/// Resolve a voltage-system selection.
///
/// # Errors
///
/// * `MissingSelection` - `system` is `None`
/// * `InvalidInput` - custom voltage is not a finite positive number
pub fn resolve(system: Option<&VoltageSystem>) -> CalcResult<VoltageConfig> {
    let system = system.ok_or_else(|| CalcError::missing_selection(VOLTAGE_SYSTEM_FIELD))?;

    let config = match *system {
        VoltageSystem::FourWire380 => VoltageConfig {
            voltage: Volts(380.0),
            is_three_phase: true,
            wire_factor: WireFactor::Four,
        },
        VoltageSystem::ThreeWire220 => VoltageConfig {
            voltage: Volts(220.0),
            is_three_phase: true,
            wire_factor: WireFactor::Three,
        },
        VoltageSystem::SinglePhase3Wire220 => VoltageConfig {
            voltage: Volts(220.0),
            is_three_phase: false,
            wire_factor: WireFactor::Two,
        },
        VoltageSystem::Custom { voltage, three_phase } => {
            let voltage = Volts(voltage);
            if !voltage.is_positive_finite() {
                return Err(CalcError::invalid_input(
                    VOLTAGE_FIELD,
                    voltage.value().to_string(),
                    "Custom voltage must be a positive number",
                ));
            }
            VoltageConfig {
                voltage,
                is_three_phase: three_phase,
                wire_factor: if three_phase { WireFactor::Three } else { WireFactor::Two },
            }
        }
    };

    debug!(system = system.token(), voltage = config.voltage.value(), wire_factor = config.wire_factor.count(), "resolved voltage system");
    Ok(config)
}

/// Parse a raw selection token into a [`VoltageSystem`].
///
/// An empty (or whitespace) token means nothing was selected and yields
/// `Ok(None)`. For `custom`, a missing voltage value is reported as
/// `InvalidInput`; range checks are left to [`resolve`].
pub fn parse_token(token: &str, custom_voltage: Option<f64>, three_phase: bool) -> CalcResult<Option<VoltageSystem>> {
    let token = token.trim();
    let system = match token {
        "" => return Ok(None),
        "4W_380" => VoltageSystem::FourWire380,
        "3W_220" => VoltageSystem::ThreeWire220,
        "1P3W_220" => VoltageSystem::SinglePhase3Wire220,
        "custom" => {
            let voltage = custom_voltage.ok_or_else(|| {
                CalcError::invalid_input(VOLTAGE_FIELD, "", "Custom voltage selected but no value entered")
            })?;
            VoltageSystem::Custom { voltage, three_phase }
        }
        other => return Err(CalcError::unknown_voltage_system(other)),
    };
    Ok(Some(system))
}

/// Resolve directly from raw UI tokens.
///
/// Equivalent to [`parse_token`] followed by [`resolve`].
pub fn resolve_token(token: &str, custom_voltage: Option<f64>, three_phase: bool) -> CalcResult<VoltageConfig> {
    let system = parse_token(token, custom_voltage, three_phase)?;
    resolve(system.as_ref())
}
