//! Greedy multi-track scheduler.
//!
//! # Algorithm
//!
//! For each slot in chronological order:
//! 1. Reset the slot's busy-actor set.
//! 2. For each track in the caller's priority order, score every scene that
//!    requires the track and has not yet been completed for it this run:
//!    - any candidate with a cast member already busy in the slot scores
//!      negative infinity and counts as a conflict avoided;
//!    - otherwise: status bonus + fresh-face bonus per cast member not yet
//!      scheduled this run + cast size.
//! 3. Schedule the single best candidate (ties break to earliest input
//!    index); a best score of zero or below schedules nothing.
//!
//! The fresh-face bonus is what keeps a small clique of lead-heavy scenes
//! from monopolizing every slot. Scoring is deterministic for a given input
//! order, so identical inputs reproduce identical schedules.
//!
//! # Complexity
//! O(slots * tracks * scenes * cast).

use std::collections::HashSet;

use super::ConflictIndex;
use crate::models::{
    RehearsalSchedule, Scene, SceneStatus, ScheduleAssignment, TimeGrid, Track,
};

/// Greedy slot-by-slot, track-by-track scheduler.
///
/// A pure function of its inputs: all working state (the per-slot busy set,
/// the run-wide ever-scheduled set, per-track completions) is allocated per
/// call, so concurrent runs never interfere.
///
/// # Example
///
/// ```
/// use stagecall::models::{Scene, TimeGrid, Track};
/// use stagecall::scheduler::GreedyTrackScheduler;
///
/// let scenes = vec![
///     Scene::new("S1")
///         .with_track(Track::Music)
///         .with_cast(vec!["Alice".into(), "Bob".into()]),
/// ];
/// let grid = TimeGrid::weekend(60);
///
/// let scheduler = GreedyTrackScheduler::new();
/// let schedule = scheduler.schedule(&grid, &scenes, &[Track::Music, Track::Dance]);
/// assert_eq!(schedule.assignment_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyTrackScheduler {
    new_bonus: f64,
    worked_bonus: f64,
    polished_bonus: f64,
    fresh_face_bonus: f64,
}

impl GreedyTrackScheduler {
    /// Creates a scheduler with the default scoring weights.
    pub fn new() -> Self {
        Self {
            new_bonus: 30.0,
            worked_bonus: 15.0,
            polished_bonus: 5.0,
            fresh_face_bonus: 15.0,
        }
    }

    /// Sets the per-status scoring bonuses.
    ///
    /// Callers should keep `new > worked > polished` so incomplete scenes
    /// stay ahead in priority.
    pub fn with_status_bonuses(mut self, new: f64, worked: f64, polished: f64) -> Self {
        self.new_bonus = new;
        self.worked_bonus = worked;
        self.polished_bonus = polished;
        self
    }

    /// Sets the per-actor bonus for cast members not yet scheduled this run.
    pub fn with_fresh_face_bonus(mut self, bonus: f64) -> Self {
        self.fresh_face_bonus = bonus;
        self
    }

    /// Schedules scenes onto the grid.
    ///
    /// Empty scenes or an empty grid yield an empty schedule; no input
    /// raises an error.
    pub fn schedule(
        &self,
        grid: &TimeGrid,
        scenes: &[Scene],
        track_priority: &[Track],
    ) -> RehearsalSchedule {
        let index = ConflictIndex::new(scenes);
        let mut schedule = RehearsalSchedule::new();
        // (scene index, track) pairs completed this run.
        let mut completed: HashSet<(usize, Track)> = HashSet::new();

        for slot in grid.slots() {
            let mut busy: HashSet<String> = HashSet::new();

            for &track in track_priority {
                let mut best: Option<usize> = None;
                let mut best_score = f64::NEG_INFINITY;

                for (i, scene) in scenes.iter().enumerate() {
                    if !scene.requires(track) || completed.contains(&(i, track)) {
                        continue;
                    }

                    let score = if index.any_busy(&scene.id, &busy) {
                        // Actively avoided near-miss, not just a skip.
                        schedule.conflicts_avoided += 1;
                        f64::NEG_INFINITY
                    } else {
                        self.score(scene, &schedule.scheduled_actors)
                    };

                    // Strict comparison keeps ties on the earliest input index.
                    if score > best_score {
                        best_score = score;
                        best = Some(i);
                    }
                }

                let Some(i) = best else { continue };
                if best_score <= 0.0 {
                    continue;
                }

                let scene = &scenes[i];
                schedule.add_assignment(ScheduleAssignment::new(
                    &scene.id,
                    track,
                    *slot,
                    grid.slot_minutes(),
                    scene.cast_size(),
                ));
                for actor in &scene.cast {
                    busy.insert(actor.clone());
                    schedule.scheduled_actors.insert(actor.clone());
                }
                completed.insert((i, track));
                if scene.status == SceneStatus::New {
                    schedule.points_cleared += 1;
                }
            }
        }

        schedule
    }

    fn score(&self, scene: &Scene, ever_scheduled: &std::collections::BTreeSet<String>) -> f64 {
        let status_bonus = match scene.status {
            SceneStatus::New => self.new_bonus,
            SceneStatus::Worked => self.worked_bonus,
            SceneStatus::Polished => self.polished_bonus,
        };
        let fresh_faces = scene
            .cast
            .iter()
            .filter(|actor| !ever_scheduled.contains(*actor))
            .count();
        status_bonus + self.fresh_face_bonus * fresh_faces as f64 + scene.cast_size() as f64
    }
}

impl Default for GreedyTrackScheduler {
    fn default() -> Self {
        Self::new()
    }
}
