//! # Table Selection
//!
//! Picks the smallest adequate wire size and busbar for a sizing current.
//!
//! - Wire: scan [`WIRE_TABLE`](crate::tables::WIRE_TABLE) in authored order,
//!   reading the column for the wire factor, skipping absent capacities, and
//!   take the first row whose capacity is at least the current.
//! - Busbar: scan the AC-ascending view of the busbar table and take the
//!   first row whose AC capacity is at least the current.
//!
//! `None` means the requirement exceeds table coverage (consider a larger
//! or parallel configuration). It is a valid result, not an error.

use tracing::debug;

use crate::tables::{busbar_by_ac_capacity, wire_table, BusbarSpec, BusbarTableEntry, WireTableEntry};
use crate::units::Amperes;
use crate::voltage::WireFactor;

/// First row of `table` whose capacity for `wire_factor` covers `current`
pub fn select_wire_from<'a>(
    table: &'a [WireTableEntry],
    current: Amperes,
    wire_factor: WireFactor,
) -> Option<&'a WireTableEntry> {
    table.iter().find(|entry| {
        entry
            .capacity_for(wire_factor)
            .is_some_and(|capacity| capacity >= current.value())
    })
}

/// Smallest adequate wire size from the built-in table
pub fn select_wire_size(current: Amperes, wire_factor: WireFactor) -> Option<&'static WireTableEntry> {
    let selected = select_wire_from(wire_table(), current, wire_factor);
    debug!(current = current.value(), wire_factor = wire_factor.count(), size = selected.map(|e| e.size), "wire selection");
    selected
}

/// First row of an AC-ascending busbar view whose AC capacity covers `current`
pub fn select_busbar_from<'a>(sorted: &[&'a BusbarTableEntry], current: Amperes) -> Option<&'a BusbarTableEntry> {
    sorted
        .iter()
        .copied()
        .find(|entry| entry.ac_capacity.is_some_and(|ac| ac >= current.value()))
}

/// Smallest adequate busbar from the built-in table
pub fn select_busbar(current: Amperes) -> Option<BusbarSpec> {
    let selected = select_busbar_from(busbar_by_ac_capacity(), current).map(BusbarTableEntry::spec);
    debug!(current = current.value(), busbar = ?selected, "busbar selection");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::busbar::sorted_by_ac;
    use crate::tables::BUSBAR_TABLE;

    fn wire(current: f64, factor: WireFactor) -> Option<&'static str> {
        select_wire_size(Amperes(current), factor).map(|e| e.size)
    }

    fn bar(current: f64) -> Option<String> {
        select_busbar(Amperes(current)).map(|b| b.display_name())
    }

    #[test]
    fn test_wire_three_wire_column() {
        assert_eq!(wire(1.0, WireFactor::Three), Some("3.5"));
        assert_eq!(wire(30.0, WireFactor::Three), Some("3.5"));
        assert_eq!(wire(30.01, WireFactor::Three), Some("5.5"));
        assert_eq!(wire(164.02, WireFactor::Three), Some("60"));
        assert_eq!(wire(164.02, WireFactor::Two), Some("60"));
    }

    #[test]
    fn test_wire_four_wire_column_skips_absent() {
        // 125*2 has no four-wire rating; 150*2 is the first at 500 A
        assert_eq!(wire(450.0, WireFactor::Four), Some("150*2"));
        assert_eq!(wire(450.0, WireFactor::Three), Some("125*2"));
        assert_eq!(wire(1000.0, WireFactor::Four), Some("150*4"));
        assert_eq!(wire(1000.0, WireFactor::Three), Some("125*4"));
    }

    #[test]
    fn test_wire_no_match() {
        assert_eq!(wire(1000.01, WireFactor::Four), None);
        assert_eq!(wire(5000.0, WireFactor::Three), None);
    }

    #[test]
    fn test_wire_selection_is_monotonic() {
        for factor in [WireFactor::Two, WireFactor::Three, WireFactor::Four] {
            let mut last_capacity = 0.0;
            let mut current = 0.5;
            while current <= 1100.0 {
                if let Some(entry) = select_wire_size(Amperes(current), factor) {
                    let capacity = entry.capacity_for(factor).unwrap();
                    assert!(capacity >= current);
                    assert!(capacity >= last_capacity);
                    last_capacity = capacity;
                } else {
                    assert!(current > 1000.0);
                }
                current += 0.5;
            }
        }
    }

    #[test]
    fn test_busbar_selection() {
        assert_eq!(bar(1.0).as_deref(), Some("15×2×1"));
        assert_eq!(bar(164.02).as_deref(), Some("20×3×1"));
        assert_eq!(bar(175.0).as_deref(), Some("20×3×1"));
        assert_eq!(bar(200.0).as_deref(), Some("25×2×1"));
        assert_eq!(bar(5280.0).as_deref(), Some("100×10×4"));
        assert_eq!(bar(5280.5), None);
    }

    #[test]
    fn test_busbar_ties_keep_authored_order() {
        assert_eq!(bar(860.0).as_deref(), Some("50×10×1"));
        assert_eq!(bar(1200.0).as_deref(), Some("40×5×2"));
    }

    #[test]
    fn test_busbar_is_globally_minimal() {
        let mut current = 1.0;
        while current <= 5300.0 {
            let expected = BUSBAR_TABLE
                .iter()
                .filter_map(|e| e.ac_capacity)
                .filter(|ac| *ac >= current)
                .fold(None, |best: Option<f64>, ac| Some(best.map_or(ac, |b| b.min(ac))));
            let selected = select_busbar_from(busbar_by_ac_capacity(), Amperes(current));
            assert_eq!(selected.and_then(|e| e.ac_capacity), expected);
            current += 7.5;
        }
    }

    #[test]
    fn test_busbar_absent_ac_never_selected() {
        let table = [
            BusbarTableEntry {
                width: 200,
                thickness: 20,
                pieces_per_phase: 1,
                dc_capacity: 9000.0,
                ac_capacity: None,
            },
            BUSBAR_TABLE[0],
        ];
        let sorted = sorted_by_ac(&table);
        assert_eq!(select_busbar_from(&sorted, Amperes(100.0)).map(|e| e.width), Some(15));
        assert_eq!(select_busbar_from(&sorted, Amperes(500.0)), None);
    }
}
