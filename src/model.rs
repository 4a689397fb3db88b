//! The movie record and its validation rule.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the `movies` table. The id is chosen by the caller, never generated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    /// Update bodies usually omit the id; the path segment is authoritative there.
    #[serde(default)]
    pub id: i64,
    /// Missing names decode as empty and are rejected by [`Movie::validate`].
    #[serde(default)]
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} is missing")]
pub struct ValidationError {
    pub field: &'static str,
}

impl Movie {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Movie {
            id,
            name: name.into(),
        }
    }

    /// A movie is accepted only with a non-empty name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError { field: "name" });
        }
        Ok(())
    }
}
