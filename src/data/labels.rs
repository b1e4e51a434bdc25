//! Built-in cell labels
//!
//! Default identifier → (long label, short label) pairs for the stock
//! dashboard layout. Callers diagramming a different page inject their
//! own `LabelMap` instead of relying on these.

use phf::phf_map;

/// Default cell labels keyed by identifier
pub static DEFAULT_LABELS: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "a" => ("STATUS", "A"),
    "b" => ("INPUT_STREAM", "B"),
    "c" => ("GH_STATS", "C"),
    "d" => ("CORRUPT_DATA", "D"),
    "e" => ("RECENT_COMMITS", "E"),
};

/// Look up the default labels for an identifier
pub fn default_labels(id: &str) -> Option<(&'static str, &'static str)> {
    DEFAULT_LABELS.get(id).copied()
}
