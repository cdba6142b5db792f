//! Cleanup crew selection.
//!
//! Finds the actors still present at a day's final slot and suggests a
//! bounded-size crew, balancing by the directory's gender attribute. The
//! draw is random by design — a shuffle suggestion, not a stable
//! assignment — so repeated calls with identical inputs may return
//! different crews. Tests seed the injected RNG.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::models::{Gender, Person, RehearsalDay, RehearsalSchedule, Scene};

/// A suggested cleanup crew for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupCrew {
    /// Day the crew applies to.
    pub day: RehearsalDay,
    /// Selected actor names.
    pub members: Vec<String>,
}

/// Selects a gender-balanced cleanup crew from the day's closing pool.
#[derive(Debug, Clone)]
pub struct CleanupCrewSelector {
    closing_tolerance_hours: f64,
}

impl CleanupCrewSelector {
    /// Creates a selector with the default 15-minute closing tolerance.
    pub fn new() -> Self {
        Self {
            closing_tolerance_hours: 0.25,
        }
    }

    /// Sets how close to the day's latest end an assignment must finish
    /// for its cast to count as "already there at closing".
    pub fn with_closing_tolerance(mut self, hours: f64) -> Self {
        self.closing_tolerance_hours = hours;
        self
    }

    /// Selects a crew of up to `crew_size` from the actors present at the
    /// day's final slot.
    ///
    /// Roughly half the seats (rounded up) are drawn from the Female
    /// partition, the rest from Male plus actors absent from the directory
    /// (the "unknown" bucket); leftover seats backfill from whichever
    /// partition still has people. The result never exceeds the eligible
    /// pool.
    ///
    /// Returns `None` when nothing is scheduled on the day or the closing
    /// pool is empty — the explicit "no one is available" sentinel, never a
    /// silent empty list.
    pub fn select<R: Rng>(
        &self,
        day: RehearsalDay,
        schedule: &RehearsalSchedule,
        scenes: &[Scene],
        people: &[Person],
        crew_size: usize,
        rng: &mut R,
    ) -> Option<CleanupCrew> {
        let max_end = schedule.latest_end_hour(day)?;

        let cast_by_scene: HashMap<&str, &[String]> = scenes
            .iter()
            .map(|s| (s.id.as_str(), s.cast.as_slice()))
            .collect();

        // Sorted pool keeps the draw deterministic under a seeded RNG.
        let mut pool: BTreeSet<&str> = BTreeSet::new();
        for assignment in &schedule.assignments {
            if assignment.slot.day != day {
                continue;
            }
            if max_end - assignment.end_hour() < self.closing_tolerance_hours {
                if let Some(cast) = cast_by_scene.get(assignment.scene_id.as_str()) {
                    pool.extend(cast.iter().map(String::as_str));
                }
            }
        }
        if pool.is_empty() || crew_size == 0 {
            return None;
        }

        let gender_of: HashMap<&str, Gender> = people
            .iter()
            .filter_map(|p| p.gender.map(|g| (p.name.as_str(), g)))
            .collect();

        let mut first: Vec<&str> = Vec::new();
        let mut rest: Vec<&str> = Vec::new();
        for actor in pool {
            match gender_of.get(actor) {
                Some(Gender::Female) => first.push(actor),
                // Male and unknown share the second partition.
                _ => rest.push(actor),
            }
        }

        let first_target = crew_size.div_ceil(2).min(first.len());
        let mut members: Vec<String> = first
            .choose_multiple(rng, first_target)
            .map(|s| s.to_string())
            .collect();

        let remaining = (crew_size - members.len()).min(rest.len());
        members.extend(rest.choose_multiple(rng, remaining).map(|s| s.to_string()));

        // Backfill from the first partition when the second runs short.
        if members.len() < crew_size && first.len() > first_target {
            let leftover: Vec<&str> = first
                .iter()
                .copied()
                .filter(|a| !members.iter().any(|m| m == a))
                .collect();
            let shortfall = (crew_size - members.len()).min(leftover.len());
            members.extend(
                leftover
                    .choose_multiple(rng, shortfall)
                    .map(|s| s.to_string()),
            );
        }

        Some(CleanupCrew { day, members })
    }
}

impl Default for CleanupCrewSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleAssignment, TimeSlot, Track};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn scene(id: &str, cast: &[&str]) -> Scene {
        Scene::new(id)
            .with_track(Track::Music)
            .with_cast(cast.iter().map(|s| s.to_string()).collect())
    }

    fn assignment(scene_id: &str, day: RehearsalDay, start: f64) -> ScheduleAssignment {
        ScheduleAssignment::new(scene_id, Track::Music, TimeSlot::new(day, start), 60, 1)
    }

    fn closing_schedule() -> (RehearsalSchedule, Vec<Scene>) {
        let scenes = vec![
            scene("early", &["Early Bird"]),
            scene("late", &["Alice", "Beth", "Cara", "Dan", "Ed", "Frank"]),
        ];
        let mut schedule = RehearsalSchedule::new();
        schedule.add_assignment(assignment("early", RehearsalDay::Friday, 18.0));
        schedule.add_assignment(assignment("late", RehearsalDay::Friday, 20.0));
        (schedule, scenes)
    }

    fn directory() -> Vec<Person> {
        vec![
            Person::new("Alice").with_gender(Gender::Female),
            Person::new("Beth").with_gender(Gender::Female),
            Person::new("Cara").with_gender(Gender::Female),
            Person::new("Dan").with_gender(Gender::Male),
            Person::new("Ed").with_gender(Gender::Male),
            // Frank absent from the directory: unknown bucket.
        ]
    }

    #[test]
    fn test_only_closing_actors_eligible() {
        let (schedule, scenes) = closing_schedule();
        let mut rng = SmallRng::seed_from_u64(7);
        let crew = CleanupCrewSelector::new()
            .select(
                RehearsalDay::Friday,
                &schedule,
                &scenes,
                &directory(),
                6,
                &mut rng,
            )
            .unwrap();
        assert!(!crew.members.iter().any(|m| m == "Early Bird"));
        assert_eq!(crew.members.len(), 6);
    }

    #[test]
    fn test_balanced_draw() {
        let (schedule, scenes) = closing_schedule();
        let mut rng = SmallRng::seed_from_u64(42);
        let crew = CleanupCrewSelector::new()
            .select(
                RehearsalDay::Friday,
                &schedule,
                &scenes,
                &directory(),
                4,
                &mut rng,
            )
            .unwrap();

        let female = ["Alice", "Beth", "Cara"];
        let from_first = crew.members.iter().filter(|m| female.contains(&m.as_str())).count();
        assert_eq!(crew.members.len(), 4);
        assert_eq!(from_first, 2); // ceil(4/2) from the Female partition
    }

    #[test]
    fn test_crew_never_exceeds_pool() {
        let scenes = vec![scene("last", &["Alice", "Beth", "Cara"])];
        let mut schedule = RehearsalSchedule::new();
        schedule.add_assignment(assignment("last", RehearsalDay::Friday, 20.0));

        let mut rng = SmallRng::seed_from_u64(1);
        let crew = CleanupCrewSelector::new()
            .select(
                RehearsalDay::Friday,
                &schedule,
                &scenes,
                &directory(),
                4,
                &mut rng,
            )
            .unwrap();
        assert_eq!(crew.members.len(), 3);
    }

    #[test]
    fn test_members_unique() {
        let (schedule, scenes) = closing_schedule();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let crew = CleanupCrewSelector::new()
                .select(
                    RehearsalDay::Friday,
                    &schedule,
                    &scenes,
                    &directory(),
                    5,
                    &mut rng,
                )
                .unwrap();
            let mut unique = crew.members.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), crew.members.len());
        }
    }

    #[test]
    fn test_unknown_actors_included_not_excluded() {
        // Frank is absent from the directory; with everyone known drawn,
        // a full-size crew must include him.
        let (schedule, scenes) = closing_schedule();
        let mut rng = SmallRng::seed_from_u64(3);
        let crew = CleanupCrewSelector::new()
            .select(
                RehearsalDay::Friday,
                &schedule,
                &scenes,
                &directory(),
                6,
                &mut rng,
            )
            .unwrap();
        assert!(crew.members.iter().any(|m| m == "Frank"));
    }

    #[test]
    fn test_empty_day_is_sentinel_none() {
        let (schedule, scenes) = closing_schedule();
        let mut rng = SmallRng::seed_from_u64(0);
        let crew = CleanupCrewSelector::new().select(
            RehearsalDay::Saturday,
            &schedule,
            &scenes,
            &directory(),
            4,
            &mut rng,
        );
        assert!(crew.is_none());
    }

    #[test]
    fn test_tolerance_excludes_earlier_finishers() {
        // 19:00 finisher is 1h before the 20:00-21:00 closer, outside the
        // 15-minute tolerance.
        let scenes = vec![scene("a", &["Alice"]), scene("b", &["Beth"])];
        let mut schedule = RehearsalSchedule::new();
        schedule.add_assignment(assignment("a", RehearsalDay::Friday, 18.0));
        schedule.add_assignment(assignment("b", RehearsalDay::Friday, 20.0));

        let mut rng = SmallRng::seed_from_u64(0);
        let crew = CleanupCrewSelector::new()
            .select(
                RehearsalDay::Friday,
                &schedule,
                &scenes,
                &directory(),
                2,
                &mut rng,
            )
            .unwrap();
        assert_eq!(crew.members, vec!["Beth".to_string()]);
    }
}
