//! Derived callboard views.
//!
//! Post-processes a run's flat assignment list into the human-facing
//! callboard: per-actor merged call windows, cleanup crew suggestions for
//! each day, and a printable per-actor summary table.

mod crew;
mod report;
mod windows;

pub use crew::{CleanupCrew, CleanupCrewSelector};
pub use report::{format_clock, CallboardRow, CallboardTable};
pub use windows::{build_call_sheets, merge_windows, ActorCallSheet, CallSegment, CallWindow};
