//! Copper Busbar Ampacity Table
//!
//! Copper busbar sections (width x thickness in mm, pieces per phase) with
//! their DC and AC current ratings. Selection uses the AC rating only; the DC
//! rating is carried for display.
//!
//! The authored order groups rows by width, not by capacity, so selection
//! works on [`busbar_by_ac_capacity`], a stable AC-ascending view computed
//! once on first use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::TableIssue;

/// One row of the busbar ampacity table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusbarTableEntry {
    /// Bar width (mm)
    pub width: u16,
    /// Bar thickness (mm)
    pub thickness: u16,
    /// Number of bars per phase
    pub pieces_per_phase: u8,
    /// DC current rating (A)
    pub dc_capacity: f64,
    /// AC current rating (A), `None` when not rated for AC
    pub ac_capacity: Option<f64>,
}

impl BusbarTableEntry {
    const fn new(width: u16, thickness: u16, pieces_per_phase: u8, dc_capacity: f64, ac_capacity: Option<f64>) -> Self {
        Self {
            width,
            thickness,
            pieces_per_phase,
            dc_capacity,
            ac_capacity,
        }
    }

    /// The dimensional part of this row
    pub fn spec(&self) -> BusbarSpec {
        BusbarSpec {
            width: self.width,
            thickness: self.thickness,
            pieces_per_phase: self.pieces_per_phase,
        }
    }

    /// AC capacity used as a sort key; absent ratings sort last
    fn ac_sort_key(&self) -> f64 {
        self.ac_capacity.unwrap_or(f64::INFINITY)
    }
}

/// Busbar dimensions returned by a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusbarSpec {
    /// Bar width (mm)
    pub width: u16,
    /// Bar thickness (mm)
    pub thickness: u16,
    /// Number of bars per phase
    pub pieces_per_phase: u8,
}

impl BusbarSpec {
    /// Get display name (e.g., "20×3×1")
    pub fn display_name(&self) -> String {
        format!("{}×{}×{}", self.width, self.thickness, self.pieces_per_phase)
    }
}

impl std::fmt::Display for BusbarSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The busbar ampacity table as authored
pub static BUSBAR_TABLE: [BusbarTableEntry; 34] = [
    BusbarTableEntry::new(15, 2, 1, 30.0, Some(130.0)),
    BusbarTableEntry::new(15, 3, 1, 45.0, Some(150.0)),
    BusbarTableEntry::new(20, 2, 1, 40.0, Some(155.0)),
    BusbarTableEntry::new(20, 3, 1, 60.0, Some(175.0)),
    BusbarTableEntry::new(20, 5, 1, 100.0, Some(220.0)),
    BusbarTableEntry::new(25, 2, 1, 50.0, Some(200.0)),
    BusbarTableEntry::new(25, 3, 1, 75.0, Some(250.0)),
    BusbarTableEntry::new(25, 5, 1, 125.0, Some(330.0)),
    BusbarTableEntry::new(30, 3, 1, 90.0, Some(305.0)),
    BusbarTableEntry::new(30, 5, 1, 150.0, Some(370.0)),
    BusbarTableEntry::new(30, 5, 2, 300.0, Some(820.0)),
    BusbarTableEntry::new(40, 3, 1, 120.0, Some(420.0)),
    BusbarTableEntry::new(40, 5, 1, 200.0, Some(715.0)),
    BusbarTableEntry::new(40, 5, 2, 400.0, Some(1230.0)),
    BusbarTableEntry::new(50, 5, 1, 250.0, Some(585.0)),
    BusbarTableEntry::new(50, 10, 1, 500.0, Some(875.0)),
    BusbarTableEntry::new(50, 10, 2, 1000.0, Some(1600.0)),
    BusbarTableEntry::new(60, 5, 1, 300.0, Some(700.0)),
    BusbarTableEntry::new(60, 8, 1, 480.0, Some(875.0)),
    BusbarTableEntry::new(60, 10, 1, 600.0, Some(1170.0)),
    BusbarTableEntry::new(60, 10, 2, 1200.0, Some(1790.0)),
    BusbarTableEntry::new(80, 5, 1, 400.0, Some(1230.0)),
    BusbarTableEntry::new(80, 10, 1, 800.0, Some(1300.0)),
    BusbarTableEntry::new(80, 10, 2, 1600.0, Some(1920.0)),
    BusbarTableEntry::new(80, 10, 3, 2400.0, Some(3310.0)),
    BusbarTableEntry::new(80, 10, 4, 3200.0, Some(4250.0)),
    BusbarTableEntry::new(100, 5, 1, 500.0, Some(1650.0)),
    BusbarTableEntry::new(100, 10, 1, 1000.0, Some(2735.0)),
    BusbarTableEntry::new(100, 10, 2, 2000.0, Some(3950.0)),
    BusbarTableEntry::new(100, 10, 3, 3000.0, Some(5010.0)),
    BusbarTableEntry::new(100, 10, 4, 4000.0, Some(5280.0)),
    BusbarTableEntry::new(120, 10, 2, 2400.0, Some(3100.0)),
    BusbarTableEntry::new(120, 10, 3, 3600.0, Some(4200.0)),
    BusbarTableEntry::new(120, 10, 4, 4800.0, Some(5280.0)),
];

static BUSBAR_BY_AC: Lazy<Vec<&'static BusbarTableEntry>> = Lazy::new(|| sorted_by_ac(&BUSBAR_TABLE));

/// The busbar table ordered by AC capacity ascending.
///
/// Rows with equal AC capacity keep their authored relative order; rows
/// without an AC rating come last.
pub fn busbar_by_ac_capacity() -> &'static [&'static BusbarTableEntry] {
    &BUSBAR_BY_AC
}

/// Stable AC-ascending ordering of an arbitrary busbar table
pub fn sorted_by_ac(table: &[BusbarTableEntry]) -> Vec<&BusbarTableEntry> {
    let mut rows: Vec<&BusbarTableEntry> = table.iter().collect();
    // Vec::sort_by is stable; ties keep authored order
    rows.sort_by(|a, b| a.ac_sort_key().total_cmp(&b.ac_sort_key()));
    rows
}

/// Report rows whose AC capacity is not a positive finite number.
///
/// Order does not matter for busbars since selection sorts first, so only
/// the values themselves are checked.
pub fn validate_busbar_table(table: &[BusbarTableEntry]) -> Vec<TableIssue> {
    table
        .iter()
        .enumerate()
        .filter_map(|(row, entry)| match entry.ac_capacity {
            Some(ac) if !ac.is_finite() || ac <= 0.0 => Some(TableIssue {
                table: "busbar",
                column: "ac_capacity",
                row,
                message: format!("{} has AC capacity {}", entry.spec(), ac),
            }),
            _ => None,
        })
        .collect()
}
