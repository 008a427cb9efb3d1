use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a backend-owned entity.
///
/// Ids travel as plain JSON numbers but also appear in route segments
/// (`/review/{id}`), so every id type must round-trip through a string.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}
