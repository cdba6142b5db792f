//! Input validation for scheduling runs.
//!
//! Checks structural integrity of scenes and the people directory before
//! scheduling. Detects:
//! - Duplicate scene IDs
//! - Scenes with no cast
//! - Scenes requiring no tracks (unrecognized type labels would otherwise
//!   be silently unschedulable)
//! - Duplicate person names in the directory
//!
//! All problems are accumulated and returned together rather than failing
//! on the first.

use std::collections::HashSet;

use crate::models::{Person, Scene};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two scenes share the same ID.
    DuplicateSceneId,
    /// A scene has no cast members.
    EmptyCast,
    /// A scene requires no tracks and can never be scheduled.
    NoRequiredTracks,
    /// Two directory entries share the same name.
    DuplicatePerson,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(scenes: &[Scene], people: &[Person]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut scene_ids = HashSet::new();
    for scene in scenes {
        if !scene_ids.insert(scene.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSceneId,
                format!("Duplicate scene ID: {}", scene.id),
            ));
        }

        if scene.cast.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCast,
                format!("Scene '{}' has no cast", scene.id),
            ));
        }

        if scene.required_tracks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoRequiredTracks,
                format!(
                    "Scene '{}' requires no tracks and will never be scheduled",
                    scene.id
                ),
            ));
        }
    }

    let mut names = HashSet::new();
    for person in people {
        if !names.insert(person.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePerson,
                format!("Duplicate person: {}", person.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
