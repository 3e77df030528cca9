//! Document identifiers
//!
//! Every collection handler goes through [`DocumentId`] to turn the `{id}`
//! path segment into a store key and back into the `_id` string returned
//! to clients. Nothing else in the workspace formats or parses ids.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Allocate a fresh identifier for an inserted document
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied identifier.
    ///
    /// `None` means the string cannot name any stored document; handlers
    /// treat that the same as an unknown id.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for DocumentId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| CoreError::InvalidDocument {
                message: format!("invalid document id '{}': {}", s, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
