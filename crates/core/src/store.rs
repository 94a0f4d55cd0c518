//! Typed outcome of a single-key storage read.
//!
//! Every key in the persisted namespace is read independently, and a read
//! can find a value, find nothing, or find text that no longer parses.
//! Services pick their fallback per key instead of relying on an implicit
//! catch-and-default somewhere below them.

/// Result of reading one key from the persistent store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StoreValue<T> {
    /// The key existed and its value decoded cleanly.
    Present(T),
    /// The key has never been written (or was deleted).
    Absent,
    /// The key existed but its value failed to decode. The stored bytes
    /// are left untouched; only the caller decides whether to overwrite.
    Corrupt,
}

impl<T> StoreValue<T> {
    /// Maps the `Present` payload, preserving `Absent`/`Corrupt`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> StoreValue<U> {
        match self {
            StoreValue::Present(v) => StoreValue::Present(f(v)),
            StoreValue::Absent => StoreValue::Absent,
            StoreValue::Corrupt => StoreValue::Corrupt,
        }
    }

    /// Collapses to the payload, substituting `fallback` for both the
    /// absent and the corrupt case.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            StoreValue::Present(v) => v,
            StoreValue::Absent | StoreValue::Corrupt => fallback,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreValue::Corrupt)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, StoreValue::Absent)
    }
}
