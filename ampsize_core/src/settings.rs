//! # Settings
//!
//! User defaults for front ends: which voltage system and mode to start
//! with and how to print results. Settings are stored as JSON (see
//! [`file_io`](crate::file_io) for loading and atomic saves).
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "default_voltage_system": "3W_220",
//!   "default_mode": "forward",
//!   "output": "human"
//! }
//! ```
//!
//! Every field has a default, so a partial file (or `{}`) is accepted.

use serde::{Deserialize, Serialize};

use crate::calculations::ModeKind;
use crate::voltage::VoltageSystem;

/// Current schema version for settings files
pub const SETTINGS_VERSION: &str = "0.1.0";

/// Persisted user defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version of the file
    pub version: String,

    /// Voltage system used when none is given on the command line
    pub default_voltage_system: Option<VoltageSystem>,

    /// Mode offered first in interactive use
    pub default_mode: ModeKind,

    /// Output style for results
    pub output: OutputStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SETTINGS_VERSION.to_string(),
            default_voltage_system: None,
            default_mode: ModeKind::Forward,
            output: OutputStyle::Human,
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    /// Aligned text for people
    #[default]
    Human,
    /// JSON for scripts
    Json,
}
