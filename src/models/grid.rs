//! Weekend time grid.
//!
//! Enumerates the discrete bookable slots for a rehearsal weekend: per-day
//! start/end bounds, a fixed slot duration, and excluded ranges (the
//! Saturday lunch gap). Slot generation is deterministic; the output
//! ordering is all of one day's slots before the next, ascending start time.
//!
//! # Time Model
//! Clock values are fractional hours (18.5 == 6:30 PM), which keeps
//! non-integer-hour durations (15/20/45-minute slots) representable.
//! Generation is performed in integer minutes internally so quarter-hour
//! grids stay exact.

use serde::{Deserialize, Serialize};

/// A rehearsal day in the weekend template.
///
/// Ordered chronologically: Friday < Saturday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RehearsalDay {
    Friday,
    Saturday,
}

impl RehearsalDay {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RehearsalDay::Friday => "Friday",
            RehearsalDay::Saturday => "Saturday",
        }
    }
}

/// A single bookable unit of time in the weekend grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day this slot belongs to.
    pub day: RehearsalDay,
    /// Slot start as a fractional-hour clock value.
    pub start_hour: f64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: RehearsalDay, start_hour: f64) -> Self {
        Self { day, start_hour }
    }

    /// Slot end given a duration in minutes.
    #[inline]
    pub fn end_hour(&self, slot_minutes: u32) -> f64 {
        self.start_hour + slot_minutes as f64 / 60.0
    }
}

/// Bookable bounds for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayBounds {
    /// Day these bounds apply to.
    pub day: RehearsalDay,
    /// First bookable hour (inclusive).
    pub start_hour: f64,
    /// Last bookable hour (exclusive; slots must end at or before this).
    pub end_hour: f64,
}

impl DayBounds {
    /// Creates day bounds.
    pub fn new(day: RehearsalDay, start_hour: f64, end_hour: f64) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
        }
    }
}

/// A range of time excluded from slot generation (e.g. a lunch break).
///
/// Half-open: a slot is suppressed when its start falls in
/// `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExcludedRange {
    /// Day the exclusion applies to.
    pub day: RehearsalDay,
    /// Exclusion start (inclusive).
    pub start_hour: f64,
    /// Exclusion end (exclusive).
    pub end_hour: f64,
}

impl ExcludedRange {
    /// Creates an excluded range.
    pub fn new(day: RehearsalDay, start_hour: f64, end_hour: f64) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
        }
    }

    /// Whether a slot starting at `hour` on `day` is suppressed.
    #[inline]
    pub fn contains(&self, day: RehearsalDay, hour: f64) -> bool {
        day == self.day && hour >= self.start_hour && hour < self.end_hour
    }
}

/// The ordered set of bookable slots for a scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeGrid {
    slots: Vec<TimeSlot>,
    slot_minutes: u32,
}

impl TimeGrid {
    /// Generates the slot grid from per-day bounds.
    ///
    /// Slots are spaced exactly `slot_minutes` apart within each day's
    /// bounds and must fit entirely before `end_hour`. Slots starting
    /// inside an excluded range are omitted. Bounds order is preserved in
    /// the output, so callers supply days chronologically. Malformed bounds
    /// (end <= start) or a zero duration yield no slots for that day.
    pub fn generate(bounds: &[DayBounds], slot_minutes: u32, excluded: &[ExcludedRange]) -> Self {
        let mut slots = Vec::new();
        if slot_minutes == 0 {
            return Self {
                slots,
                slot_minutes,
            };
        }

        for b in bounds {
            let start_min = (b.start_hour * 60.0).round() as i64;
            let end_min = (b.end_hour * 60.0).round() as i64;
            let step = slot_minutes as i64;

            let mut t = start_min;
            while t + step <= end_min {
                let start_hour = t as f64 / 60.0;
                if !excluded.iter().any(|ex| ex.contains(b.day, start_hour)) {
                    slots.push(TimeSlot::new(b.day, start_hour));
                }
                t += step;
            }
        }

        Self {
            slots,
            slot_minutes,
        }
    }

    /// The standard weekend template: Friday 18:00-21:00 and Saturday
    /// 10:00-17:00 minus the 13:00-14:00 lunch gap.
    pub fn weekend(slot_minutes: u32) -> Self {
        Self::generate(
            &[
                DayBounds::new(RehearsalDay::Friday, 18.0, 21.0),
                DayBounds::new(RehearsalDay::Saturday, 10.0, 17.0),
            ],
            slot_minutes,
            &[ExcludedRange::new(RehearsalDay::Saturday, 13.0, 14.0)],
        )
    }

    /// The slots, in scheduling order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Slot duration in minutes.
    #[inline]
    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// Number of slots in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_friday_evening() {
        let grid = TimeGrid::generate(
            &[DayBounds::new(RehearsalDay::Friday, 18.0, 21.0)],
            60,
            &[],
        );
        let starts: Vec<f64> = grid.slots().iter().map(|s| s.start_hour).collect();
        assert_eq!(starts, vec![18.0, 19.0, 20.0]);
    }

    #[test]
    fn test_lunch_gap_excluded() {
        let grid = TimeGrid::generate(
            &[DayBounds::new(RehearsalDay::Saturday, 10.0, 17.0)],
            60,
            &[ExcludedRange::new(RehearsalDay::Saturday, 13.0, 14.0)],
        );
        let starts: Vec<f64> = grid.slots().iter().map(|s| s.start_hour).collect();
        assert_eq!(starts, vec![10.0, 11.0, 12.0, 14.0, 15.0, 16.0]);
    }

    #[test]
    fn test_half_hour_slots() {
        let grid = TimeGrid::generate(
            &[DayBounds::new(RehearsalDay::Friday, 18.5, 20.0)],
            30,
            &[],
        );
        let starts: Vec<f64> = grid.slots().iter().map(|s| s.start_hour).collect();
        assert_eq!(starts, vec![18.5, 19.0, 19.5]);
    }

    #[test]
    fn test_slot_must_fit_in_bounds() {
        // 45-minute slots in a 2-hour window: 18:00 and 18:45 fit; a
        // 19:30 slot would end past 20:00.
        let grid = TimeGrid::generate(
            &[DayBounds::new(RehearsalDay::Friday, 18.0, 20.0)],
            45,
            &[],
        );
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.slots()[1].start_hour, 18.75);
    }

    #[test]
    fn test_day_ordering_preserved() {
        let grid = TimeGrid::weekend(60);
        let fri: Vec<&TimeSlot> = grid
            .slots()
            .iter()
            .filter(|s| s.day == RehearsalDay::Friday)
            .collect();
        let sat: Vec<&TimeSlot> = grid
            .slots()
            .iter()
            .filter(|s| s.day == RehearsalDay::Saturday)
            .collect();
        assert_eq!(fri.len(), 3); // 18, 19, 20
        assert_eq!(sat.len(), 6); // 10..12, 14..16
        // All Friday slots precede all Saturday slots
        assert!(grid.slots()[..3].iter().all(|s| s.day == RehearsalDay::Friday));
        assert!(grid.slots()[3..].iter().all(|s| s.day == RehearsalDay::Saturday));
    }

    #[test]
    fn test_malformed_bounds_yield_empty() {
        let grid = TimeGrid::generate(
            &[DayBounds::new(RehearsalDay::Friday, 21.0, 18.0)],
            60,
            &[],
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_duration_yields_empty() {
        let grid = TimeGrid::generate(
            &[DayBounds::new(RehearsalDay::Friday, 18.0, 21.0)],
            0,
            &[],
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn test_slot_end_hour() {
        let slot = TimeSlot::new(RehearsalDay::Friday, 18.5);
        assert!((slot.end_hour(30) - 19.0).abs() < 1e-10);
        assert!((slot.end_hour(45) - 19.25).abs() < 1e-10);
    }

    #[test]
    fn test_day_ordering() {
        assert!(RehearsalDay::Friday < RehearsalDay::Saturday);
        assert_eq!(RehearsalDay::Friday.label(), "Friday");
    }
}
