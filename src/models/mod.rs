//! Rehearsal scheduling domain models.
//!
//! Provides the core data types for representing a scheduling run's inputs
//! and outputs. All entities are transient: derived once per "generate"
//! action and discarded on the next run or on commit to external persistence.
//!
//! # Domain Mappings
//!
//! | stagecall | Generic scheduling |
//! |-----------|-------------------|
//! | Scene | Job |
//! | Track | Machine / Room |
//! | TimeSlot | Time bucket |
//! | ScheduleAssignment | Job-machine-time assignment |
//! | RehearsalSchedule | Solution |

mod assignment;
mod grid;
mod person;
mod scene;

pub use assignment::{RehearsalSchedule, ScheduleAssignment};
pub use grid::{DayBounds, ExcludedRange, RehearsalDay, TimeGrid, TimeSlot};
pub use person::{Gender, Person};
pub use scene::{Scene, SceneStatus, Track};
