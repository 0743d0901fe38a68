//! Character traits - a string-keyed bag of boolean flags with a tri-state lookup
//!
//! "Never set" and "set to false" are different answers: the eligibility
//! rules only accept an explicit `true`, while reports distinguish a member
//! who *is not* brave from one nobody has assessed yet.

use serde::{Deserialize, Serialize};

/// The trait key that lets a pupil learn spells above their year.
///
/// Matched exactly and case-sensitively.
pub const HIGHLY_INTELLIGENT: &str = "Highly Intelligent";

/// Result of asking whether a member exhibits a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum TraitQuery {
    /// The trait was recorded with this value
    Present(bool),
    /// The trait was never recorded
    Unknown,
}

impl TraitQuery {
    /// Returns true only for `Present(true)`.
    #[inline]
    pub fn is_exhibited(self) -> bool {
        matches!(self, TraitQuery::Present(true))
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, TraitQuery::Unknown)
    }
}

/// Trait flags in insertion order. Re-adding a key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitMap {
    entries: Vec<(String, bool)>,
}

impl TraitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a trait. No validation of the key.
    pub fn insert(&mut self, name: impl Into<String>, value: bool) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn query(&self, name: &str) -> TraitQuery {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map_or(TraitQuery::Unknown, |(_, value)| TraitQuery::Present(*value))
    }

    /// Traits recorded as `true`, in insertion order.
    pub fn positive(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, value)| *value)
            .map(|(key, _)| key.as_str())
    }

    /// Traits recorded as `false`, in insertion order.
    pub fn negative(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, value)| !*value)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
