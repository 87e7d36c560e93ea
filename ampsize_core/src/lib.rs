//! # ampsize_core - Wire and Busbar Sizing Engine
//!
//! `ampsize_core` converts between load power and sizing current for a given
//! voltage system and looks up the smallest adequate wire gauge and copper
//! busbar from fixed ampacity tables. All inputs and outputs are
//! JSON-serializable so any front end (CLI, GUI, web) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Mode**: The calculation direction travels with each input
//!
//! ## Quick Start
//!
//! ```rust
//! use ampsize_core::{calculate, CalculationMode, SizingInput, VoltageSystem};
//! use ampsize_core::format::ResultDisplay;
//!
//! let input = SizingInput {
//!     voltage_system: Some(VoltageSystem::FourWire380),
//!     mode: CalculationMode::Backward { current_a: 100.0 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! let display = ResultDisplay::from_result(&result);
//! assert_eq!(display.value, "52.6543");
//! assert_eq!(display.unit, "kW");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Power/current conversion and table selection
//! - [`voltage`] - Voltage-system resolution
//! - [`tables`] - Wire and busbar ampacity tables
//! - [`format`] - Display formatting of results
//! - [`units`] - Type-safe unit wrappers
//! - [`settings`] - User defaults
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings file load and atomic save

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod format;
pub mod settings;
pub mod tables;
pub mod units;
pub mod voltage;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with_config, CalculationMode, CalculationResult, ModeKind, PrimaryUnit, SizingInput};
pub use errors::{CalcError, CalcResult, ErrorReport};
pub use file_io::{load_settings, load_settings_or_default, save_settings};
pub use settings::{OutputStyle, Settings};
pub use tables::{BusbarSpec, TableIssue};
pub use voltage::{resolve, resolve_token, VoltageConfig, VoltageSystem, WireFactor};
