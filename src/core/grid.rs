//! Rectangular cell grid model
//!
//! A grid is a matrix of slots, each either empty or holding a short
//! cell identifier. A cell spanning several rows or columns repeats
//! its identifier in every slot it covers.

use crate::utils::error::{LayoutError, LayoutResult};

/// Rectangular matrix of optional cell identifiers
///
/// Invariant: every row has the same number of slots, enforced at
/// construction. Occupied regions must additionally be axis-aligned
/// rectangles (no L-shapes); the renderer assumes this and does not
/// check it, so builders are responsible for only producing
/// rectangular spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    slots: Vec<Vec<Option<String>>>,
    col_count: usize,
}

impl Grid {
    /// Build a grid from rows of slots, rejecting ragged row lengths
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> LayoutResult<Self> {
        let col_count = rows.first().map(|row| row.len()).unwrap_or(0);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(LayoutError::invalid_grid(format!(
                    "row {} has {} slots, expected {}",
                    idx,
                    row.len(),
                    col_count
                )));
            }
        }
        Ok(Grid {
            slots: rows,
            col_count,
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of columns (0 for a grid with no rows)
    pub fn col_count(&self) -> usize {
        if self.slots.is_empty() {
            0
        } else {
            self.col_count
        }
    }

    /// Identifier at (row, col), or `None` for an empty slot
    pub fn slot(&self, row: usize, col: usize) -> Option<&str> {
        self.slots
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|s| s.as_deref())
    }

    /// Identifier at a possibly out-of-range position
    ///
    /// Out-of-range reads come back as `None`, same as an empty slot:
    /// the renderer inspects the four cells meeting at each corner,
    /// and positions beyond the grid edge behave like empty neighbors.
    pub(crate) fn slot_signed(&self, row: isize, col: isize) -> Option<&str> {
        if row < 0 || col < 0 {
            return None;
        }
        self.slot(row as usize, col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_grid_accepted() {
        let grid = Grid::from_rows(vec![
            vec![Some("a".to_string()), None],
            vec![Some("a".to_string()), Some("b".to_string())],
        ])
        .unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.col_count(), 2);
        assert_eq!(grid.slot(0, 0), Some("a"));
        assert_eq!(grid.slot(0, 1), None);
        assert_eq!(grid.slot(1, 1), Some("b"));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_rows(vec![
            vec![Some("a".to_string())],
            vec![Some("b".to_string()), Some("c".to_string())],
        ])
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGridShape { .. }));
    }

    #[test]
    fn test_empty_grids() {
        let no_rows = Grid::from_rows(vec![]).unwrap();
        assert_eq!(no_rows.row_count(), 0);
        assert_eq!(no_rows.col_count(), 0);

        let no_cols = Grid::from_rows(vec![vec![]]).unwrap();
        assert_eq!(no_cols.row_count(), 1);
        assert_eq!(no_cols.col_count(), 0);
    }

    #[test]
    fn test_out_of_range_reads_as_empty() {
        let grid = Grid::from_rows(vec![vec![Some("a".to_string())]]).unwrap();
        assert_eq!(grid.slot_signed(-1, 0), None);
        assert_eq!(grid.slot_signed(0, -1), None);
        assert_eq!(grid.slot_signed(1, 0), None);
        assert_eq!(grid.slot_signed(0, 0), Some("a"));
    }
}
