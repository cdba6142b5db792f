//! Rehearsal scheduling core for theater productions.
//!
//! Given a set of scenes (each with a cast list, required rehearsal tracks,
//! and a completion status) and a weekend grid of rehearsal slots, this crate
//! greedily assigns scenes to slots across parallel tracks while avoiding
//! double-booking any actor within a slot, then derives the human-facing
//! callboard: per-actor call windows, cleanup crew suggestions, and a
//! printable summary table.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Scene`, `Track`, `TimeGrid`, `TimeSlot`,
//!   `ScheduleAssignment`, `RehearsalSchedule`, `Person`
//! - **`scheduler`**: The greedy track scheduler, conflict index, and
//!   schedule statistics
//! - **`callboard`**: Derived views — call-window merging, cleanup crew
//!   selection, printable callboard table
//! - **`validation`**: Input integrity checks (duplicate IDs, empty casts,
//!   unschedulable scenes)
//! - **`plan`**: Single request/response facade over the whole pipeline
//!
//! # Design
//!
//! The entire core is a synchronous, pure computation over in-memory inputs:
//! no I/O, no shared mutable state. Each scheduling run allocates its own
//! working sets, so concurrent runs never interfere. Fetching scenes/people
//! and persisting the committed schedule are external collaborators. The one
//! deliberately non-deterministic step, cleanup crew selection, takes an
//! injectable RNG.

pub mod callboard;
pub mod models;
pub mod plan;
pub mod scheduler;
pub mod validation;
