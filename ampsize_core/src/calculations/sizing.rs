//! # Power / Current Conversion
//!
//! The two conversion directions share a fixed 1.25 safety factor and the
//! phase multiplier from [`VoltageConfig::sqrt_factor`]:
//!
//! ```text
//! forward:  I = (P / V) / k * 1.25
//! backward: P = (I / 1.25) * V * k        k = √3 (three-phase) or 1
//! ```
//!
//! The two are algebraic inverses; a round trip reproduces the input up to
//! floating-point rounding.
//!
//! ## Example
//!
//! ```rust
//! use ampsize_core::calculations::sizing::{backward_power, forward_current};
//! use ampsize_core::units::{Amperes, Watts};
//! use ampsize_core::voltage::{resolve, VoltageSystem};
//!
//! let config = resolve(Some(&VoltageSystem::SinglePhase3Wire220)).unwrap();
//! let current = forward_current(Watts(11_000.0), &config).unwrap();
//! assert!((current.0 - 62.5).abs() < 1e-9);
//!
//! let power = backward_power(current, &config).unwrap();
//! assert!((power.0 - 11_000.0).abs() < 1e-6);
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::units::{Amperes, Watts};
use crate::voltage::VoltageConfig;

/// Fixed safety factor between nominal and sizing current
pub const SAFETY_FACTOR: f64 = 1.25;

/// Field name reported for an invalid power input
pub const POWER_FIELD: &str = "power";

/// Field name reported for an invalid current input
pub const CURRENT_FIELD: &str = "current";

/// Sizing current for a given power (power to current).
///
/// # Errors
///
/// `InvalidInput` (field `power`) if `power` is not finite or not positive.
pub fn forward_current(power: Watts, config: &VoltageConfig) -> CalcResult<Amperes> {
    if !power.is_positive_finite() {
        return Err(CalcError::invalid_input(
            POWER_FIELD,
            power.value().to_string(),
            "Power must be a positive number",
        ));
    }
    let current = (power.value() / config.voltage.value()) / config.sqrt_factor() * SAFETY_FACTOR;
    Ok(Amperes(current))
}

/// Power supported by a given sizing current (current to power).
///
/// # Errors
///
/// `InvalidInput` (field `current`) if `current` is not finite or not positive.
pub fn backward_power(current: Amperes, config: &VoltageConfig) -> CalcResult<Watts> {
    if !current.is_positive_finite() {
        return Err(CalcError::invalid_input(
            CURRENT_FIELD,
            current.value().to_string(),
            "Current must be a positive number",
        ));
    }
    let power = (current.value() / SAFETY_FACTOR) * config.voltage.value() * config.sqrt_factor();
    Ok(Watts(power))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voltage::{resolve, VoltageSystem};

    fn config(system: VoltageSystem) -> VoltageConfig {
        resolve(Some(&system)).unwrap()
    }

    #[test]
    fn test_forward_three_wire_220() {
        // (50000 / 220) / √3 * 1.25 ≈ 164.02
        let current = forward_current(Watts(50_000.0), &config(VoltageSystem::ThreeWire220)).unwrap();
        assert!((current.0 - 164.01996).abs() < 1e-4);
    }

    #[test]
    fn test_backward_four_wire_380() {
        // (100 / 1.25) * 380 * √3 ≈ 52654.3
        let power = backward_power(Amperes(100.0), &config(VoltageSystem::FourWire380)).unwrap();
        assert!((power.0 - 52_654.3446).abs() < 1e-3);
    }

    #[test]
    fn test_single_phase_has_no_root_three() {
        let current = forward_current(Watts(10_000.0), &config(VoltageSystem::SinglePhase3Wire220)).unwrap();
        assert!((current.0 - 10_000.0 / 220.0 * 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let systems = [
            VoltageSystem::FourWire380,
            VoltageSystem::ThreeWire220,
            VoltageSystem::SinglePhase3Wire220,
            VoltageSystem::Custom { voltage: 415.0, three_phase: true },
            VoltageSystem::Custom { voltage: 12.0, three_phase: false },
        ];
        let powers = [0.001, 1.0, 750.0, 50_000.0, 1.0e7, 3.3e12];
        for system in systems {
            let cfg = config(system);
            for p in powers {
                let current = forward_current(Watts(p), &cfg).unwrap();
                let back = backward_power(current, &cfg).unwrap();
                assert!(((back.0 - p) / p).abs() < 1e-6, "{:?} at {} W", system, p);
            }
        }
    }

    #[test]
    fn test_invalid_power() {
        let cfg = config(VoltageSystem::ThreeWire220);
        for p in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = forward_current(Watts(p), &cfg).unwrap_err();
            assert_eq!(err.field(), Some(POWER_FIELD));
        }
    }

    #[test]
    fn test_invalid_current() {
        let cfg = config(VoltageSystem::ThreeWire220);
        for i in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            let err = backward_power(Amperes(i), &cfg).unwrap_err();
            assert_eq!(err.field(), Some(CURRENT_FIELD));
        }
    }
}
