//! # File I/O Module
//!
//! Reads and writes settings files:
//! - **Atomic saves**: write to `.tmp`, sync, rename to prevent corruption
//! - **Version validation**: reject files from an incompatible schema
//! - **Missing file is not an error** for [`load_settings_or_default`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use ampsize_core::file_io::{load_settings, save_settings};
//! use ampsize_core::settings::Settings;
//! use std::path::Path;
//!
//! let path = Path::new("ampsize.json");
//! save_settings(&Settings::default(), path)?;
//! let settings = load_settings(path)?;
//! # Ok::<(), ampsize_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::settings::{Settings, SETTINGS_VERSION};

/// Save settings to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize settings to JSON
/// 2. Write to a temporary file (`<ext>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - I/O error, including a missing file
/// * `Err(CalcError::SerializationError)` - invalid JSON
/// * `Err(CalcError::VersionMismatch)` - incompatible schema version
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings.version)?;

    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Load settings, falling back to defaults when the file does not exist.
///
/// Other failures (unreadable file, bad JSON, wrong version) still error.
pub fn load_settings_or_default(path: &Path) -> CalcResult<Settings> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        _ => load_settings(path),
    }
}

/// Temporary file path used during an atomic save
fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SETTINGS_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SETTINGS_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
