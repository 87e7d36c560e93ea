//! # Reference Tables
//!
//! Fixed ampacity data used by the sizing engine:
//!
//! - [`wire`] - conductor sizes with three-wire and four-wire ampacity
//! - [`busbar`] - copper busbar sections with DC and AC ampacity
//!
//! Both tables are process-wide immutable statics and may be read from any
//! thread without synchronization.

pub mod busbar;
pub mod wire;

use serde::Serialize;

pub use busbar::{busbar_by_ac_capacity, validate_busbar_table, BusbarSpec, BusbarTableEntry, BUSBAR_TABLE};
pub use wire::{validate_wire_table, WireTableEntry, WIRE_TABLE};

/// A problem found while checking table data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableIssue {
    /// Which table ("wire" or "busbar")
    pub table: &'static str,
    /// Which column
    pub column: &'static str,
    /// Zero-based row index in authored order
    pub row: usize,
    /// Human-readable description
    pub message: String,
}

impl std::fmt::Display for TableIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} table, {} column, row {}: {}", self.table, self.column, self.row, self.message)
    }
}

/// The wire ampacity table in lookup order
pub fn wire_table() -> &'static [WireTableEntry] {
    &WIRE_TABLE
}

/// The busbar ampacity table in authored order
pub fn busbar_table() -> &'static [BusbarTableEntry] {
    &BUSBAR_TABLE
}

/// Check both built-in tables and return every issue found
pub fn validate_tables() -> Vec<TableIssue> {
    let mut issues = validate_wire_table(wire_table());
    issues.extend(validate_busbar_table(busbar_table()));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert!(validate_tables().is_empty());
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(wire_table().len(), 23);
        assert_eq!(busbar_table().len(), 34);
    }
}
