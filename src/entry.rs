use std::cmp::Ordering;

/// The key type every record is ordered by.
pub type Key = i64;

/// A value that can be stored in one of the trees.
///
/// The key is the sole ordering and equality criterion. Everything else about the record is
/// opaque to the trees and moves together with the key.
pub trait Record {
    fn key(&self) -> Key;
}

impl Record for Key {
    fn key(&self) -> Key {
        *self
    }
}

/// A key paired with an arbitrary payload.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Entry<U> {
    pub key: Key,
    pub value: U,
}

impl<U> Entry<U> {
    pub fn new(key: Key, value: U) -> Self {
        Entry { key, value }
    }
}

impl<U> Record for Entry<U> {
    fn key(&self) -> Key {
        self.key
    }
}

impl<U> Ord for Entry<U> {
    fn cmp(&self, other: &Entry<U>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<U> PartialOrd for Entry<U> {
    fn partial_cmp(&self, other: &Entry<U>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U> PartialEq for Entry<U> {
    fn eq(&self, other: &Entry<U>) -> bool {
        self.key == other.key
    }
}

impl<U> Eq for Entry<U> {}
