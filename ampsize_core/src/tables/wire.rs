//! Wire Ampacity Table
//!
//! Conductor sizes (mm²) with their allowable current for three-wire and
//! four-wire circuits. Parallel runs are written `size*count` (e.g. `125*2`
//! is two 125 mm² conductors per phase).
//!
//! ## Lookup Order
//!
//! Rows are authored ascending by ampacity, which is not the same as
//! ascending by size label (`60*2` follows `150`). Selection scans in this
//! order and takes the first adequate row, so the order is part of the data.
//!
//! Some parallel configurations apply to only one column; the other is
//! `None`, meaning "not applicable", never zero.

use serde::Serialize;

use super::TableIssue;
use crate::voltage::WireFactor;

/// One row of the wire ampacity table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WireTableEntry {
    /// Size label as printed in the reference table (e.g. "22", "80*2")
    pub size: &'static str,
    /// Ampacity for three-wire circuits (A)
    pub capacity_three_wire: Option<f64>,
    /// Ampacity for four-wire circuits (A)
    pub capacity_four_wire: Option<f64>,
}

impl WireTableEntry {
    const fn new(size: &'static str, three_wire: Option<f64>, four_wire: Option<f64>) -> Self {
        Self {
            size,
            capacity_three_wire: three_wire,
            capacity_four_wire: four_wire,
        }
    }

    /// Ampacity column that applies to the given wire factor.
    ///
    /// Four-wire circuits read the four-wire column; everything else reads
    /// the three-wire column.
    pub fn capacity_for(&self, wire_factor: WireFactor) -> Option<f64> {
        if wire_factor.is_four_wire() {
            self.capacity_four_wire
        } else {
            self.capacity_three_wire
        }
    }

    /// Number of parallel conductors encoded in the label (1 when absent)
    pub fn parallel_count(&self) -> u8 {
        self.size
            .split_once('*')
            .and_then(|(_, n)| n.parse().ok())
            .unwrap_or(1)
    }
}

impl std::fmt::Display for WireTableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.size)
    }
}

/// The wire ampacity table in authored lookup order
pub static WIRE_TABLE: [WireTableEntry; 23] = [
    WireTableEntry::new("3.5", Some(30.0), Some(27.0)),
    WireTableEntry::new("5.5", Some(39.0), Some(35.0)),
    WireTableEntry::new("8", Some(51.0), Some(46.0)),
    WireTableEntry::new("14", Some(74.0), Some(67.0)),
    WireTableEntry::new("22", Some(93.0), Some(84.0)),
    WireTableEntry::new("30", Some(116.0), Some(104.0)),
    WireTableEntry::new("38", Some(130.0), Some(117.0)),
    WireTableEntry::new("50", Some(155.0), Some(140.0)),
    WireTableEntry::new("60", Some(176.0), Some(159.0)),
    WireTableEntry::new("80", Some(208.0), Some(187.0)),
    WireTableEntry::new("100", Some(242.0), Some(218.0)),
    WireTableEntry::new("125", Some(277.0), Some(249.0)),
    WireTableEntry::new("150", Some(309.0), Some(278.0)),
    WireTableEntry::new("60*2", Some(350.0), Some(300.0)),
    WireTableEntry::new("80*2", Some(400.0), Some(400.0)),
    WireTableEntry::new("125*2", Some(500.0), None),
    WireTableEntry::new("150*2", None, Some(500.0)),
    WireTableEntry::new("80*3", Some(600.0), None),
    WireTableEntry::new("100*3", None, Some(600.0)),
    WireTableEntry::new("125*3", Some(800.0), None),
    WireTableEntry::new("150*3", None, Some(800.0)),
    WireTableEntry::new("125*4", Some(1000.0), None),
    WireTableEntry::new("150*4", None, Some(1000.0)),
];

/// Check that both ampacity columns are non-decreasing in table order.
///
/// Absent capacities are skipped. A decreasing column makes first-match
/// selection return something other than the smallest adequate size.
pub fn validate_wire_table(table: &[WireTableEntry]) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    for (column, factor) in [("three_wire", WireFactor::Three), ("four_wire", WireFactor::Four)] {
        let mut previous: Option<(usize, f64)> = None;
        for (row, entry) in table.iter().enumerate() {
            let Some(capacity) = entry.capacity_for(factor) else {
                continue;
            };
            if let Some((prev_row, prev_capacity)) = previous {
                if capacity < prev_capacity {
                    issues.push(TableIssue {
                        table: "wire",
                        column,
                        row,
                        message: format!(
                            "size {} ({} A) is below row {} ({} A)",
                            entry.size, capacity, prev_row, prev_capacity
                        ),
                    });
                }
            }
            previous = Some((row, capacity));
        }
    }
    issues
}
