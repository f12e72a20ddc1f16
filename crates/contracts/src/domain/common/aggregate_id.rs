use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of aggregates.
///
/// The backend hands out SQLite row ids, so every aggregate id wraps an `i64`
/// and serializes as a bare number.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw row id
    fn value(&self) -> i64;

    /// Convert the id to a string (for keys and URLs)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an id from a string (path segment, form value)
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn value(&self) -> i64 {
        *self
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id: {}", e))
    }
}
