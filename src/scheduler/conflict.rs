//! Actor conflict lookups.
//!
//! Built once per run from the full scene list. The per-slot "busy actors"
//! working set is owned by the scheduler and reset at the start of each
//! slot; this index only answers membership questions against it.

use std::collections::{HashMap, HashSet};

use crate::models::Scene;

/// Scene-to-cast lookup for conflict checks.
#[derive(Debug, Clone)]
pub struct ConflictIndex {
    cast_by_scene: HashMap<String, Vec<String>>,
}

impl ConflictIndex {
    /// Builds the index from the full scene list.
    pub fn new(scenes: &[Scene]) -> Self {
        let cast_by_scene = scenes
            .iter()
            .map(|s| (s.id.clone(), s.cast.clone()))
            .collect();
        Self { cast_by_scene }
    }

    /// Cast of a scene, empty if the scene is unknown.
    pub fn cast(&self, scene_id: &str) -> &[String] {
        self.cast_by_scene
            .get(scene_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether an actor is already busy in the current slot.
    #[inline]
    pub fn is_busy(actor: &str, busy: &HashSet<String>) -> bool {
        busy.contains(actor)
    }

    /// Whether any of a scene's cast is busy in the current slot.
    pub fn any_busy(&self, scene_id: &str, busy: &HashSet<String>) -> bool {
        self.cast(scene_id)
            .iter()
            .any(|actor| Self::is_busy(actor, busy))
    }
}
