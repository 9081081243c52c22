//! Item identity types.
//!
//! Widgets never own list content. Callers hand an ordered collection to the
//! synchronizer on every update cycle, and the only thing the synchronizer is
//! allowed to remember about an item across cycles is its [`Key`].

use serde::{Deserialize, Serialize};

/// Stable identifier of an item within its collection, independent of
/// position. Two items in the same collection must never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Text(String),
    Number(u64),
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Number(value)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Text(text) => write!(f, "{text}"),
            Key::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Interface the synchronizer requires from list items: a stable identity
/// accessor plus value comparison for content-equality checks.
///
/// Items are treated as opaque content. The synchronizer never mutates them
/// and never compares them by reference.
pub trait SlotItem: PartialEq {
    /// The item's stable identity within its collection.
    fn key(&self) -> Key;
}

/// Plain text item for callers without their own item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: Key,
    pub label: String,
}

impl Entry {
    pub fn new(key: impl Into<Key>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl SlotItem for Entry {
    fn key(&self) -> Key {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_str_and_number() {
        assert_eq!(Key::from("fan"), Key::Text("fan".to_string()));
        assert_eq!(Key::from(3u64), Key::Number(3));
    }

    #[test]
    fn entry_exposes_its_key() {
        let entry = Entry::new("auto", "Auto");
        assert_eq!(entry.key(), Key::Text("auto".to_string()));
    }

    #[test]
    fn keys_of_different_kinds_are_unequal() {
        assert_ne!(Key::Text("3".to_string()), Key::Number(3));
    }
}
