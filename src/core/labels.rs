//! Cell label lookup
//!
//! Maps a cell identifier to the display strings shown inside its
//! rendered cell: a long label for the first content line and a short
//! label for the bracketed second line. The map is injected
//! configuration so the renderer can diagram any subject; identifiers
//! without an entry fall back to the uppercased identifier itself.

use fxhash::FxHashMap;

use crate::data::labels::DEFAULT_LABELS;
use crate::utils::error::{LayoutError, LayoutResult};

/// Identifier → (long label, short label) mapping
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: FxHashMap<String, (String, String)>,
}

impl LabelMap {
    /// Create an empty map (every lookup falls back to the identifier)
    pub fn new() -> Self {
        LabelMap {
            entries: FxHashMap::default(),
        }
    }

    /// Create a map preloaded with the built-in default labels
    pub fn with_defaults() -> Self {
        let mut map = LabelMap::new();
        for (id, (long, short)) in DEFAULT_LABELS.entries() {
            map.insert(*id, *long, *short);
        }
        map
    }

    /// Insert or replace the labels for an identifier
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        long: impl Into<String>,
        short: impl Into<String>,
    ) {
        self.entries
            .insert(id.into(), (long.into(), short.into()));
    }

    /// Long label for an identifier (uppercased identifier if absent)
    pub fn long(&self, id: &str) -> String {
        match self.entries.get(id) {
            Some((long, _)) => long.clone(),
            None => id.to_uppercase(),
        }
    }

    /// Short label for an identifier (uppercased identifier if absent)
    pub fn short(&self, id: &str) -> String {
        match self.entries.get(id) {
            Some((_, short)) => short.clone(),
            None => id.to_uppercase(),
        }
    }

    /// Number of explicit entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no explicit entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a label file
    ///
    /// One entry per line: `id = LONG` or `id = LONG, SHORT`. Blank
    /// lines and `#` comments are skipped. When no short label is
    /// given it defaults to the uppercased identifier.
    pub fn parse(src: &str) -> LayoutResult<Self> {
        let mut map = LabelMap::new();
        for (line_no, line) in src.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (id, rest) = line.split_once('=').ok_or_else(|| {
                LayoutError::parse(format!("line {}: expected `id = LABEL`", line_no + 1))
            })?;
            let id = id.trim();
            if id.is_empty() {
                return Err(LayoutError::parse(format!(
                    "line {}: empty identifier",
                    line_no + 1
                )));
            }
            let (long, short) = match rest.split_once(',') {
                Some((long, short)) => (long.trim().to_string(), short.trim().to_string()),
                None => (rest.trim().to_string(), id.to_uppercase()),
            };
            map.insert(id, long, short);
        }
        Ok(map)
    }
}
