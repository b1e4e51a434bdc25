//! Tests for the box-drawing grid renderer

use pretty_assertions::assert_eq;

use super::render_grid;
use crate::core::grid::Grid;
use crate::core::labels::LabelMap;

/// Build a grid from string rows, `""` marking an empty slot
fn grid(rows: &[&[&str]]) -> Grid {
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|id| {
                    if id.is_empty() {
                        None
                    } else {
                        Some((*id).to_string())
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_single_cell_truncates_labels() {
    let mut labels = LabelMap::new();
    labels.insert("a", "Alpha", "A");
    let rendered = render_grid(&grid(&[&["a"]]), &labels, 4);
    assert_eq!(rendered, "┌────┐\n│  Al│\n│  [A│\n└────┘");
}

#[test]
fn test_two_by_two_distinct_junctions() {
    let rendered = render_grid(&grid(&[&["a", "b"], &["c", "d"]]), &LabelMap::new(), 3);
    assert_eq!(
        rendered,
        "┌───┬───┐\n\
         │  A│  B│\n\
         │  [│  [│\n\
         ├───┼───┤\n\
         │  C│  D│\n\
         │  [│  [│\n\
         └───┴───┘"
    );
}

#[test]
fn test_vertical_merge_drops_border() {
    let rendered = render_grid(&grid(&[&["a", "b"], &["a", "c"]]), &LabelMap::new(), 3);
    assert_eq!(
        rendered,
        "┌───┬───┐\n\
         │  A│  B│\n\
         │  [│  [│\n\
         │   ├───┤\n\
         │   │  C│\n\
         │   │  [│\n\
         └───┴───┘"
    );
}

#[test]
fn test_horizontal_merge_widens_cell() {
    let rendered = render_grid(&grid(&[&["a", "a", "b"]]), &LabelMap::new(), 3);
    assert_eq!(
        rendered,
        "┌───────┬───┐\n\
         │  A    │  B│\n\
         │  [A]  │  [│\n\
         └───────┴───┘"
    );
}

#[test]
fn test_uniform_region_merges_into_single_block() {
    let rendered = render_grid(&grid(&[&["x", "x"], &["x", "x"]]), &LabelMap::new(), 4);
    assert_eq!(
        rendered,
        "┌─────────┐\n\
         │  X      │\n\
         │  [X]    │\n\
         │         │\n\
         │         │\n\
         │         │\n\
         └─────────┘"
    );

    // Outer boundary matches an equivalent single-cell grid of the
    // same total width.
    let scaled = render_grid(&grid(&[&["x"]]), &LabelMap::new(), 9);
    let block: Vec<&str> = rendered.lines().collect();
    let single: Vec<&str> = scaled.lines().collect();
    assert_eq!(block.first(), single.first());
    assert_eq!(block.last(), single.last());
}

#[test]
fn test_every_line_has_equal_width() {
    let layout = grid(&[&["a", "b", "b", "e"], &["a", "c", "d", "e"]]);
    let width = 6;
    let rendered = render_grid(&layout, &LabelMap::with_defaults(), width);
    let expected = 4 * (width + 1) + 1;
    for line in rendered.lines() {
        assert_eq!(line.chars().count(), expected, "line: {}", line);
    }
}

#[test]
fn test_mirrored_grid_flips_borders() {
    fn flip_vertical(ch: char) -> char {
        match ch {
            '┌' => '└',
            '└' => '┌',
            '┐' => '┘',
            '┘' => '┐',
            '┬' => '┴',
            '┴' => '┬',
            other => other,
        }
    }

    fn border_lines(diagram: &str) -> Vec<String> {
        diagram.lines().step_by(3).map(str::to_string).collect()
    }

    let labels = LabelMap::new();
    let forward = render_grid(&grid(&[&["a", "b"], &["a", "c"]]), &labels, 3);
    let mirrored = render_grid(&grid(&[&["a", "c"], &["a", "b"]]), &labels, 3);

    let flipped: Vec<String> = border_lines(&mirrored)
        .into_iter()
        .rev()
        .map(|line| line.chars().map(flip_vertical).collect())
        .collect();
    assert_eq!(border_lines(&forward), flipped);
}

#[test]
fn test_empty_slot_renders_blank() {
    let rendered = render_grid(&grid(&[&["a", ""]]), &LabelMap::new(), 3);
    assert_eq!(
        rendered,
        "┌───┬───┐\n\
         │  A│   │\n\
         │  [│   │\n\
         └───┴───┘"
    );
}

#[test]
fn test_empty_grid_renders_empty() {
    let no_rows = Grid::from_rows(vec![]).unwrap();
    assert_eq!(render_grid(&no_rows, &LabelMap::new(), 4), "");

    let no_cols = Grid::from_rows(vec![vec![]]).unwrap();
    assert_eq!(render_grid(&no_cols, &LabelMap::new(), 4), "");
}

#[test]
fn test_wide_column_pads_label() {
    let rendered = render_grid(&grid(&[&["b"]]), &LabelMap::with_defaults(), 16);
    assert_eq!(
        rendered,
        "┌────────────────┐\n\
         │  INPUT_STREAM  │\n\
         │  [B]           │\n\
         └────────────────┘"
    );
}

#[test]
fn test_junction_table_prefers_more_connected_glyphs() {
    use super::junction::junction_glyph;

    assert_eq!(junction_glyph(true, true, true, true), '┼');
    assert_eq!(junction_glyph(true, true, true, false), '├');
    assert_eq!(junction_glyph(true, false, true, true), '┤');
    assert_eq!(junction_glyph(true, true, false, true), '┴');
    assert_eq!(junction_glyph(false, true, true, true), '┬');
    assert_eq!(junction_glyph(false, true, false, true), '─');
    assert_eq!(junction_glyph(true, false, true, false), '│');
    assert_eq!(junction_glyph(true, true, false, false), '└');
    assert_eq!(junction_glyph(false, false, true, true), '┐');
    assert_eq!(junction_glyph(true, false, false, false), '╵');
    assert_eq!(junction_glyph(false, false, false, false), ' ');
}
