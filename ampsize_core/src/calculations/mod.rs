//! # Sizing Calculations
//!
//! The sizing engine follows the pattern:
//!
//! - [`SizingInput`] - voltage system plus calculation mode (JSON-serializable)
//! - [`CalculationResult`] - primary value, wire size, busbar (JSON-serializable)
//! - [`calculate`] - pure function from input to result
//!
//! ## Modes
//!
//! The mode is part of each input, never ambient state:
//!
//! - `Forward { power_w }` - power to current; primary value in amperes
//! - `Backward { current_a }` - current to power; primary value in kilowatts
//!
//! ## Example
//!
//! ```rust
//! use ampsize_core::calculations::{calculate, CalculationMode, SizingInput};
//! use ampsize_core::voltage::VoltageSystem;
//!
//! let input = SizingInput {
//!     voltage_system: Some(VoltageSystem::ThreeWire220),
//!     mode: CalculationMode::Forward { power_w: 50_000.0 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.wire_size.as_deref(), Some("60"));
//! assert_eq!(result.busbar.unwrap().to_string(), "20×3×1");
//! ```

pub mod selection;
pub mod sizing;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::tables::BusbarSpec;
use crate::units::{Amperes, Kilowatts, Watts};
use crate::voltage::{resolve, VoltageConfig, VoltageSystem};

pub use selection::{select_busbar, select_wire_size};
pub use sizing::{backward_power, forward_current, SAFETY_FACTOR};

/// Which quantity the user supplied.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "forward", "power_w": 50000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalculationMode {
    /// Power (W) to current
    Forward { power_w: f64 },
    /// Current (A) to power
    Backward { current_a: f64 },
}

impl CalculationMode {
    /// Mode kind without its value
    pub fn kind(&self) -> ModeKind {
        match self {
            CalculationMode::Forward { .. } => ModeKind::Forward,
            CalculationMode::Backward { .. } => ModeKind::Backward,
        }
    }
}

/// Mode without its input value, for settings and UI selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// Power to current
    #[default]
    Forward,
    /// Current to power
    Backward,
}

impl ModeKind {
    /// Attach an input value to this mode
    pub fn with_value(self, value: f64) -> CalculationMode {
        match self {
            ModeKind::Forward => CalculationMode::Forward { power_w: value },
            ModeKind::Backward => CalculationMode::Backward { current_a: value },
        }
    }

    /// Get display label
    pub fn display_name(&self) -> &'static str {
        match self {
            ModeKind::Forward => "Power → Current",
            ModeKind::Backward => "Current → Power",
        }
    }
}

/// Input for one sizing calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "voltage_system": "4W_380",
///   "mode": { "mode": "backward", "current_a": 100.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    /// Selected voltage system, `None` if the user has not chosen one
    pub voltage_system: Option<VoltageSystem>,
    /// Calculation direction and its input value
    pub mode: CalculationMode,
}

/// Unit of [`CalculationResult::primary_value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryUnit {
    #[serde(rename = "A")]
    Amperes,
    #[serde(rename = "kW")]
    Kilowatts,
}

/// Result of one sizing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Current (forward mode) or power in kW (backward mode), unrounded
    pub primary_value: f64,
    /// Unit of `primary_value`
    pub primary_unit: PrimaryUnit,
    /// Current used for the table lookups (A)
    pub current_a: f64,
    /// Smallest adequate wire size, `None` if the table has no match
    pub wire_size: Option<String>,
    /// Smallest adequate busbar, `None` if the table has no match
    pub busbar: Option<BusbarSpec>,
}

impl CalculationResult {
    /// True when both lookups found a row
    pub fn fully_covered(&self) -> bool {
        self.wire_size.is_some() && self.busbar.is_some()
    }
}

/// Run the calculation for an already-resolved voltage configuration.
///
/// Validates the mode value, converts to the complementary quantity and
/// performs both table lookups.
pub fn calculate_with_config(config: &VoltageConfig, mode: CalculationMode) -> CalcResult<CalculationResult> {
    let (current, primary_value, primary_unit) = match mode {
        CalculationMode::Forward { power_w } => {
            let current = forward_current(Watts(power_w), config)?;
            (current, current.value(), PrimaryUnit::Amperes)
        }
        CalculationMode::Backward { current_a } => {
            let power = backward_power(Amperes(current_a), config)?;
            let kw: Kilowatts = power.into();
            (Amperes(current_a), kw.value(), PrimaryUnit::Kilowatts)
        }
    };

    let wire_size = select_wire_size(current, config.wire_factor).map(|entry| entry.size.to_string());
    let busbar = select_busbar(current);

    debug!(
        mode = ?mode.kind(),
        current_a = current.value(),
        primary_value,
        wire_size = wire_size.as_deref(),
        "sizing calculation complete"
    );

    Ok(CalculationResult {
        primary_value,
        primary_unit,
        current_a: current.value(),
        wire_size,
        busbar,
    })
}

/// Run a sizing calculation.
///
/// The voltage system is resolved first, then the mode value is checked.
/// Any error aborts the calculation; no partial result is produced.
///
/// # Errors
///
/// * `MissingSelection` - no voltage system
/// * `InvalidInput` - bad custom voltage, power or current
pub fn calculate(input: &SizingInput) -> CalcResult<CalculationResult> {
    let config = resolve(input.voltage_system.as_ref())?;
    calculate_with_config(&config, input.mode)
}
