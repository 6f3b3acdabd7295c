use std::collections::BTreeMap;

use klass_model::LevelDescriptor;

use crate::error::{Result, TableError};

/// Mapping between hierarchy level numbers and their display names.
///
/// Built once from the `levels` list of a version or variant response
/// and immutable afterwards. Level numbers are kept in their
/// string-encoded form since that is how the `level` column of every
/// code table carries them.
#[derive(Debug, Clone, Default)]
pub struct LevelMap {
    by_number: BTreeMap<String, String>,
}

impl LevelMap {
    pub fn new(levels: &[LevelDescriptor]) -> Self {
        let by_number = levels
            .iter()
            .map(|level| (level.level_number.to_string(), level.level_name.clone()))
            .collect();
        Self { by_number }
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// The display name for a string-encoded level number, if known.
    pub fn name_of(&self, level: &str) -> Option<&str> {
        self.by_number.get(level).map(String::as_str)
    }

    /// Resolves a level selector to a string-encoded level number.
    ///
    /// A digit string passes through untouched (the caller may select a
    /// level the map has never heard of; the filter will simply match
    /// nothing). Anything else is treated as a level name and resolved
    /// through the reverse mapping; an unknown name is an error, never
    /// a silent default.
    pub fn resolve_selector(&self, selector: &str) -> Result<String> {
        let trimmed = selector.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(trimmed.to_string());
        }
        self.by_number
            .iter()
            .find(|(_, name)| name.as_str() == trimmed)
            .map(|(number, _)| number.clone())
            .ok_or_else(|| TableError::UnknownLevel {
                selector: selector.to_string(),
            })
    }
}
