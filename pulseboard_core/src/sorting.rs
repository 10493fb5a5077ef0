//! Sort-toggle protocol for the data table.
//!
//! The engine computes the next sort state and reports it upward; the
//! caller owns the actual comparison and reorder and supplies sorted
//! data back in.

use crate::columns::ColumnSpec;
use crate::types::{SortDirection, SortState};

/// Next sort state after a header click
///
/// Rules:
/// - a non-sortable column leaves the state unchanged
/// - the current column, ascending, flips to descending
/// - anything else starts the clicked column ascending
///
/// There is no third "unsorted" state; a third click on the same column
/// returns to ascending.
pub fn toggle_sort(current: Option<&SortState>, column: &ColumnSpec) -> Option<SortState> {
    if !column.sortable {
        return current.cloned();
    }

    let next = match current {
        Some(state) if state.column_id == column.id && state.direction == SortDirection::Asc => {
            SortState::new(column.id.clone(), SortDirection::Desc)
        }
        _ => SortState::new(column.id.clone(), SortDirection::Asc),
    };

    tracing::debug!("Sort toggle on {}: {:?}", column.id, next.direction);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sortable(id: &str) -> ColumnSpec {
        ColumnSpec::field(id, id).sortable()
    }

    #[test]
    fn test_click_cycle() {
        let age = sortable("age");
        let name = sortable("name");

        // Never-sorted column starts ascending
        let s1 = toggle_sort(None, &age).unwrap();
        assert_eq!(s1, SortState::new("age", SortDirection::Asc));

        // Second click flips to descending
        let s2 = toggle_sort(Some(&s1), &age).unwrap();
        assert_eq!(s2, SortState::new("age", SortDirection::Desc));

        // Different column restarts ascending
        let s3 = toggle_sort(Some(&s2), &name).unwrap();
        assert_eq!(s3, SortState::new("name", SortDirection::Asc));

        // Third click on the same column returns to ascending
        let s4 = toggle_sort(Some(&s2), &age).unwrap();
        assert_eq!(s4, SortState::new("age", SortDirection::Asc));
    }

    #[test]
    fn test_unsortable_column_is_a_noop() {
        let plain = ColumnSpec::field("notes", "Notes");

        assert_eq!(toggle_sort(None, &plain), None);

        let current = SortState::new("age", SortDirection::Desc);
        assert_eq!(toggle_sort(Some(&current), &plain), Some(current.clone()));
    }
}
