//! Schedule summary statistics.
//!
//! Computed once over a completed run's output.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Slots | Count of assignments |
//! | Unique Actors | Distinct actors scheduled this run |
//! | Cast Coverage | Unique actors / distinct actors across input scenes, % |
//! | Concurrency | Mean tracks filled per grid slot (unfilled slots count) |
//! | Conflicts Avoided | Candidates disqualified for a cast conflict |
//! | Points Cleared | New-status completions (burn velocity) |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{RehearsalSchedule, Scene, TimeGrid};

/// Aggregate metrics for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStatistics {
    /// Number of assignments.
    pub total_slots: usize,
    /// Distinct actors scheduled at least once.
    pub unique_actors: usize,
    /// Percentage of the full cast universe that got a slot, rounded to
    /// the nearest integer. Zero when the cast universe is empty.
    pub cast_coverage: u32,
    /// Average tracks filled per slot across the whole grid, one decimal.
    pub concurrency: f64,
    /// Candidates actively disqualified for a cast conflict.
    pub conflicts_avoided: u32,
    /// New-status completions this run.
    pub points_cleared: u32,
    /// Caller-supplied burn velocity goal.
    pub velocity_target: u32,
    /// Whether points cleared met the velocity target.
    pub is_on_track: bool,
}

impl ScheduleStatistics {
    /// Computes statistics from a completed schedule.
    ///
    /// `scenes` supplies the cast universe for the coverage denominator;
    /// `grid` supplies the slot count for the concurrency denominator
    /// (unfilled slots included).
    pub fn calculate(
        schedule: &RehearsalSchedule,
        scenes: &[Scene],
        grid: &TimeGrid,
        velocity_target: u32,
    ) -> Self {
        let cast_universe: HashSet<&str> = scenes
            .iter()
            .flat_map(|s| s.cast.iter().map(String::as_str))
            .collect();

        let unique_actors = schedule.unique_actors();
        let cast_coverage = if cast_universe.is_empty() {
            0
        } else {
            (unique_actors as f64 / cast_universe.len() as f64 * 100.0).round() as u32
        };

        let concurrency = if grid.is_empty() {
            0.0
        } else {
            let raw = schedule.assignment_count() as f64 / grid.len() as f64;
            (raw * 10.0).round() / 10.0
        };

        Self {
            total_slots: schedule.assignment_count(),
            unique_actors,
            cast_coverage,
            concurrency,
            conflicts_avoided: schedule.conflicts_avoided,
            points_cleared: schedule.points_cleared,
            velocity_target,
            is_on_track: schedule.points_cleared >= velocity_target,
        }
    }
}
