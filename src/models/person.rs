//! People directory entry.
//!
//! The external directory provides sparse person records used only for
//! cleanup crew balancing. Actors absent from the directory are treated as
//! "unknown" for balancing purposes, never excluded.

use serde::{Deserialize, Serialize};

/// Binary gender attribute used by the crew-balance heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

/// A person record from the external directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Actor name (the join key against scene cast lists).
    pub name: String,
    /// Balancing attribute; `None` falls into the "unknown" bucket.
    pub gender: Option<Gender>,
}

impl Person {
    /// Creates a person with no gender attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
        }
    }

    /// Sets the gender attribute.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}
