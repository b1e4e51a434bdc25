//! Span placement grid builder

use indexmap::IndexMap;

use crate::core::grid::Grid;
use crate::utils::error::{LayoutError, LayoutResult};

/// 1-indexed, half-open row and column ranges for one cell
///
/// Matches CSS grid line numbers: `grid-row: 1 / 3` covers grid rows
/// 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPlacement {
    /// Row range as (start line, end line)
    pub row: (usize, usize),
    /// Column range as (start line, end line)
    pub col: (usize, usize),
}

impl CellPlacement {
    /// Create a placement from row and column line ranges
    pub fn new(row: (usize, usize), col: (usize, usize)) -> Self {
        CellPlacement { row, col }
    }
}

/// Build a grid by stamping each identifier over its placed region
///
/// The grid is sized to the maximum row/column extents; slots covered
/// by no placement stay empty. Placements are stamped in map order, so
/// overlapping regions resolve to the identifier declared last.
pub fn grid_from_placements(placements: &IndexMap<String, CellPlacement>) -> LayoutResult<Grid> {
    if placements.is_empty() {
        return Err(LayoutError::empty_input("no cell placements"));
    }

    for (id, p) in placements {
        if p.row.0 == 0 || p.col.0 == 0 || p.row.1 <= p.row.0 || p.col.1 <= p.col.0 {
            return Err(LayoutError::invalid_grid(format!(
                "placement for '{}' has an empty or 0-based range (rows {}/{}, cols {}/{})",
                id, p.row.0, p.row.1, p.col.0, p.col.1
            )));
        }
    }

    let row_count = placements.values().map(|p| p.row.1 - 1).max().unwrap_or(0);
    let col_count = placements.values().map(|p| p.col.1 - 1).max().unwrap_or(0);

    let mut slots = vec![vec![None; col_count]; row_count];
    for (id, p) in placements {
        for r in p.row.0 - 1..p.row.1 - 1 {
            for c in p.col.0 - 1..p.col.1 - 1 {
                slots[r][c] = Some(id.clone());
            }
        }
    }

    Grid::from_rows(slots)
}
