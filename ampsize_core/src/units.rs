//! # Unit Types
//!
//! Type-safe wrappers for electrical units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Units
//!
//! - Potential: volts (V)
//! - Current: amperes (A)
//! - Power: watts (W), kilowatts (kW = 1000 W)
//!
//! ## Example
//!
//! ```rust
//! use ampsize_core::units::{Kilowatts, Watts};
//!
//! let power = Watts(52_654.4);
//! let kw: Kilowatts = power.into();
//! assert!((kw.0 - 52.6544).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Potential
// ============================================================================

/// Line voltage in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

// ============================================================================
// Current
// ============================================================================

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

// ============================================================================
// Power
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts (1 kW = 1000 W)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

/// Raw-value access and the positivity check every engine input goes through
macro_rules! impl_magnitude {
    ($($type:ty),+) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }

                /// True when the value is finite and strictly positive
                pub fn is_positive_finite(self) -> bool {
                    self.0.is_finite() && self.0 > 0.0
                }
            }
        )+
    };
}

impl_magnitude!(Volts, Amperes, Watts, Kilowatts);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watts_to_kilowatts() {
        let w = Watts(1500.0);
        let kw: Kilowatts = w.into();
        assert_eq!(kw.value(), 1.5);
    }

    #[test]
    fn test_positive_finite() {
        assert!(Volts(220.0).is_positive_finite());
        assert!(!Volts(0.0).is_positive_finite());
        assert!(!Volts(-380.0).is_positive_finite());
        assert!(!Amperes(f64::NAN).is_positive_finite());
        assert!(!Watts(f64::INFINITY).is_positive_finite());
    }

    #[test]
    fn test_serialization() {
        let v = Volts(380.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "380.0");

        let roundtrip: Volts = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }
}
