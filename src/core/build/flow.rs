//! Flow-order grid builders

use crate::core::grid::Grid;
use crate::utils::error::{LayoutError, LayoutResult};

/// Build a 2-column grid from source order
///
/// The distinguished `full_width_id` always occupies a full merged row
/// at its arrival position. Every other identifier is paired
/// left/right in arrival order; a pending left cell waits for its
/// partner across full-width rows, and an odd remainder spans both
/// columns of its own row.
pub fn grid_from_flow_pair(order: &[String], full_width_id: &str) -> LayoutResult<Grid> {
    if order.is_empty() {
        return Err(LayoutError::empty_input("no cells in source order"));
    }

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut pending: Option<&str> = None;

    for id in order {
        if id == full_width_id {
            rows.push(vec![Some(id.clone()), Some(id.clone())]);
        } else if let Some(left) = pending.take() {
            rows.push(vec![Some(left.to_string()), Some(id.clone())]);
        } else {
            pending = Some(id.as_str());
        }
    }
    if let Some(last) = pending {
        // Odd remainder spans both columns.
        rows.push(vec![Some(last.to_string()), Some(last.to_string())]);
    }

    Grid::from_rows(rows)
}

/// Build a 1-column grid from source order
pub fn grid_from_flow_single(order: &[String]) -> LayoutResult<Grid> {
    if order.is_empty() {
        return Err(LayoutError::empty_input("no cells in source order"));
    }
    let rows = order.iter().map(|id| vec![Some(id.clone())]).collect();
    Grid::from_rows(rows)
}
