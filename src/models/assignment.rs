//! Schedule output models.
//!
//! A [`RehearsalSchedule`] is the complete output of one scheduling run:
//! the flat assignment list plus the run-wide counters the statistics
//! module reports on. Assignments are created only by the scheduler and
//! are immutable within a run; a full run discards and regenerates
//! everything (no incremental patching).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{RehearsalDay, TimeSlot, Track};

/// One scheduled track-in-slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    /// Scheduled scene.
    pub scene_id: String,
    /// Track (room) the scene occupies.
    pub track: Track,
    /// Slot the scene occupies.
    pub slot: TimeSlot,
    /// Rehearsal duration in minutes (the run's slot duration).
    pub duration_minutes: u32,
    /// Cached cast count for reporting.
    pub cast_size: usize,
}

impl ScheduleAssignment {
    /// Creates a new assignment.
    pub fn new(
        scene_id: impl Into<String>,
        track: Track,
        slot: TimeSlot,
        duration_minutes: u32,
        cast_size: usize,
    ) -> Self {
        Self {
            scene_id: scene_id.into(),
            track,
            slot,
            duration_minutes,
            cast_size,
        }
    }

    /// Assignment end as a fractional-hour clock value.
    #[inline]
    pub fn end_hour(&self) -> f64 {
        self.slot.end_hour(self.duration_minutes)
    }
}

/// The complete output of one scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RehearsalSchedule {
    /// Assignments in slot order.
    pub assignments: Vec<ScheduleAssignment>,
    /// Candidates actively disqualified for a cast conflict.
    pub conflicts_avoided: u32,
    /// New-status scenes cleared this run (burn velocity numerator).
    pub points_cleared: u32,
    /// Every actor scheduled at least once this run.
    pub scheduled_actors: BTreeSet<String>,
}

impl RehearsalSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: ScheduleAssignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    #[inline]
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// All assignments on a given day.
    pub fn assignments_for_day(&self, day: RehearsalDay) -> Vec<&ScheduleAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.slot.day == day)
            .collect()
    }

    /// All assignments for a given scene.
    pub fn assignments_for_scene(&self, scene_id: &str) -> Vec<&ScheduleAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.scene_id == scene_id)
            .collect()
    }

    /// Latest assignment end on a day, if anything is scheduled.
    pub fn latest_end_hour(&self, day: RehearsalDay) -> Option<f64> {
        self.assignments
            .iter()
            .filter(|a| a.slot.day == day)
            .map(|a| a.end_hour())
            .fold(None, |acc, end| match acc {
                Some(best) if best >= end => Some(best),
                _ => Some(end),
            })
    }

    /// Count of distinct actors scheduled this run.
    #[inline]
    pub fn unique_actors(&self) -> usize {
        self.scheduled_actors.len()
    }
}
