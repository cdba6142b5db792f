//! Scene model.
//!
//! A scene is the unit of rehearsal work: a named piece of the show with a
//! resolved cast list, a completion status, and the rehearsal tracks it
//! requires. Track requirements are explicit on the entity — the free-text
//! type field from the external directory is converted once at ingestion
//! via [`Track::infer_from_label`], not re-inferred at scheduling time.

use serde::{Deserialize, Serialize};

/// A rehearsal discipline that runs in parallel with others in the same
/// time slot, each effectively a separate room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Track {
    Music,
    Dance,
    Acting,
}

impl Track {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Track::Music => "Music",
            Track::Dance => "Dance",
            Track::Acting => "Acting",
        }
    }

    /// Infers track requirements from a free-text scene type label.
    ///
    /// Substring match, case-insensitive: "song" requires Music, "dance"
    /// requires Dance, "mixed" requires both. A label matching nothing
    /// yields an empty set; such scenes are flagged by
    /// [`crate::validation::validate_input`] rather than silently skipped.
    pub fn infer_from_label(label: &str) -> Vec<Track> {
        let lower = label.to_lowercase();
        if lower.contains("mixed") {
            return vec![Track::Music, Track::Dance];
        }
        let mut tracks = Vec::new();
        if lower.contains("song") {
            tracks.push(Track::Music);
        }
        if lower.contains("dance") {
            tracks.push(Track::Dance);
        }
        tracks
    }
}

/// Rehearsal completion status.
///
/// New scenes weigh highest in scheduling priority; clearing one counts
/// toward the run's burn velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneStatus {
    /// Not yet rehearsed.
    New,
    /// Rehearsed at least once.
    Worked,
    /// Performance-ready.
    Polished,
}

/// A scene to be scheduled.
///
/// Cast members are referenced by name (the join key against the people
/// directory). A scene may be scheduled at most once per required track in
/// a single run; completions on different tracks are independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Act grouping label (display only, not used for scheduling).
    pub act: String,
    /// Tracks this scene must be rehearsed on.
    pub required_tracks: Vec<Track>,
    /// Completion status.
    pub status: SceneStatus,
    /// Resolved cast member names, in billing order.
    pub cast: Vec<String>,
}

impl Scene {
    /// Creates a new scene with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            act: String::new(),
            required_tracks: Vec::new(),
            status: SceneStatus::New,
            cast: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the act label.
    pub fn with_act(mut self, act: impl Into<String>) -> Self {
        self.act = act.into();
        self
    }

    /// Adds a required track.
    pub fn with_track(mut self, track: Track) -> Self {
        self.required_tracks.push(track);
        self
    }

    /// Sets required tracks from a free-text type label.
    pub fn with_type_label(mut self, label: &str) -> Self {
        self.required_tracks = Track::infer_from_label(label);
        self
    }

    /// Sets the completion status.
    pub fn with_status(mut self, status: SceneStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a cast member.
    pub fn with_cast_member(mut self, name: impl Into<String>) -> Self {
        self.cast.push(name.into());
        self
    }

    /// Sets the full cast list.
    pub fn with_cast(mut self, cast: Vec<String>) -> Self {
        self.cast = cast;
        self
    }

    /// Whether this scene requires the given track.
    #[inline]
    pub fn requires(&self, track: Track) -> bool {
        self.required_tracks.contains(&track)
    }

    /// Cast size.
    #[inline]
    pub fn cast_size(&self) -> usize {
        self.cast.len()
    }
}
