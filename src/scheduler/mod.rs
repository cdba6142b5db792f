//! Greedy track scheduling.
//!
//! The core algorithm: for each slot in chronological order, and for each
//! track in a caller-supplied priority order, select the best-scoring
//! unscheduled candidate scene, rejecting any candidate whose cast overlaps
//! the actors already busy in that slot.
//!
//! Track priority lets callers bias a short rehearsal weekend toward the
//! scarcest resource (a visiting choreographer, say) without a full
//! optimizer.

mod conflict;
mod greedy;
mod stats;

pub use conflict::ConflictIndex;
pub use greedy::GreedyTrackScheduler;
pub use stats::ScheduleStatistics;
