//! Request/response facade over the whole pipeline.
//!
//! One scheduling run per request: the request carries scenes, people, and
//! grid configuration; the response carries the flat assignment list, the
//! summary statistics, the per-actor call sheets, and the cleanup crew
//! suggestions. No shared state between runs — everything is allocated per
//! call.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::callboard::{build_call_sheets, ActorCallSheet, CleanupCrew, CleanupCrewSelector};
use crate::models::{
    DayBounds, ExcludedRange, Person, RehearsalDay, RehearsalSchedule, Scene, TimeGrid, Track,
};
use crate::scheduler::{GreedyTrackScheduler, ScheduleStatistics};

/// One scheduling run's full configuration and inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Scenes with resolved casts and explicit track requirements.
    pub scenes: Vec<Scene>,
    /// People directory for crew balancing.
    pub people: Vec<Person>,
    /// Per-day bookable bounds, chronological.
    pub day_bounds: Vec<DayBounds>,
    /// Ranges excluded from slot generation (the lunch gap).
    pub excluded: Vec<ExcludedRange>,
    /// Slot duration in minutes.
    pub slot_minutes: u32,
    /// Ranked track order; earlier tracks claim contested slots first.
    pub track_priority: Vec<Track>,
    /// Burn velocity goal (New-status completions).
    pub velocity_target: u32,
    /// Gap below which an actor's segments merge into one call window.
    pub gap_threshold_hours: f64,
    /// Cleanup crew size per day, independently adjustable.
    pub crew_sizes: Vec<(RehearsalDay, usize)>,
}

impl PlanRequest {
    /// Creates a request with the standard weekend template: hour slots,
    /// Music-first priority, a 1.5-hour merge gap, and a crew of four per
    /// day.
    pub fn new(scenes: Vec<Scene>, people: Vec<Person>) -> Self {
        Self {
            scenes,
            people,
            day_bounds: vec![
                DayBounds::new(RehearsalDay::Friday, 18.0, 21.0),
                DayBounds::new(RehearsalDay::Saturday, 10.0, 17.0),
            ],
            excluded: vec![ExcludedRange::new(RehearsalDay::Saturday, 13.0, 14.0)],
            slot_minutes: 60,
            track_priority: vec![Track::Music, Track::Dance, Track::Acting],
            velocity_target: 0,
            gap_threshold_hours: 1.5,
            crew_sizes: vec![(RehearsalDay::Friday, 4), (RehearsalDay::Saturday, 4)],
        }
    }

    /// Sets the slot duration.
    pub fn with_slot_minutes(mut self, minutes: u32) -> Self {
        self.slot_minutes = minutes;
        self
    }

    /// Sets the track priority order.
    pub fn with_track_priority(mut self, priority: Vec<Track>) -> Self {
        self.track_priority = priority;
        self
    }

    /// Sets the burn velocity goal.
    pub fn with_velocity_target(mut self, target: u32) -> Self {
        self.velocity_target = target;
        self
    }

    /// Sets the call-window merge threshold.
    pub fn with_gap_threshold(mut self, hours: f64) -> Self {
        self.gap_threshold_hours = hours;
        self
    }

    /// Sets the crew size for one day.
    pub fn with_crew_size(mut self, day: RehearsalDay, size: usize) -> Self {
        if let Some(entry) = self.crew_sizes.iter_mut().find(|(d, _)| *d == day) {
            entry.1 = size;
        } else {
            self.crew_sizes.push((day, size));
        }
        self
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekendPlan {
    /// The raw run output: assignments and counters. Suitable for the
    /// external persistence collaborator's commit operation.
    pub schedule: RehearsalSchedule,
    /// Summary statistics for reporting.
    pub statistics: ScheduleStatistics,
    /// Per-actor merged call windows, ordered by actor then day.
    pub call_sheets: Vec<ActorCallSheet>,
    /// Crew suggestions for days where anyone is present at closing; days
    /// with an empty closing pool are omitted (the selector's sentinel).
    pub cleanup_crews: Vec<CleanupCrew>,
}

/// Runs the full pipeline: grid generation, greedy scheduling, statistics,
/// call-window merging, and crew selection.
///
/// Degrades gracefully: an empty grid or scene list yields an empty plan,
/// never an error. The RNG feeds only crew selection; everything else is
/// deterministic for a given request.
pub fn plan_weekend<R: Rng>(request: &PlanRequest, rng: &mut R) -> WeekendPlan {
    let grid = TimeGrid::generate(&request.day_bounds, request.slot_minutes, &request.excluded);

    let schedule =
        GreedyTrackScheduler::new().schedule(&grid, &request.scenes, &request.track_priority);

    let statistics =
        ScheduleStatistics::calculate(&schedule, &request.scenes, &grid, request.velocity_target);

    let call_sheets = build_call_sheets(&schedule, &request.scenes, request.gap_threshold_hours);

    let selector = CleanupCrewSelector::new();
    let cleanup_crews = request
        .crew_sizes
        .iter()
        .filter_map(|&(day, size)| {
            selector.select(day, &schedule, &request.scenes, &request.people, size, rng)
        })
        .collect();

    WeekendPlan {
        schedule,
        statistics,
        call_sheets,
        cleanup_crews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, SceneStatus};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use serde::Deserialize;

    fn sample_request() -> PlanRequest {
        let scenes = vec![
            Scene::new("A")
                .with_name("Opening Number")
                .with_track(Track::Music)
                .with_status(SceneStatus::New)
                .with_cast(vec!["Alice".into(), "Bob".into()]),
            Scene::new("B")
                .with_name("Tango")
                .with_track(Track::Dance)
                .with_status(SceneStatus::New)
                .with_cast(vec!["Bob".into(), "Carol".into()]),
        ];
        let people = vec![
            Person::new("Alice").with_gender(Gender::Female),
            Person::new("Bob").with_gender(Gender::Male),
            Person::new("Carol").with_gender(Gender::Female),
        ];
        PlanRequest::new(scenes, people).with_velocity_target(2)
    }

    #[test]
    fn test_end_to_end_weekend_plan() {
        let request = sample_request();
        let mut rng = SmallRng::seed_from_u64(11);
        let plan = plan_weekend(&request, &mut rng);

        // Bob is contested at 18:00: Music wins, Dance defers to 19:00.
        assert_eq!(plan.schedule.assignment_count(), 2);
        assert_eq!(plan.schedule.assignments[0].scene_id, "A");
        assert_eq!(plan.schedule.assignments[0].slot.start_hour, 18.0);
        assert_eq!(plan.schedule.assignments[1].scene_id, "B");
        assert_eq!(plan.schedule.assignments[1].slot.start_hour, 19.0);

        assert_eq!(plan.statistics.conflicts_avoided, 1);
        assert_eq!(plan.statistics.points_cleared, 2);
        assert!(plan.statistics.is_on_track);
        assert_eq!(plan.statistics.cast_coverage, 100);

        // Bob's two hours merge into one call window; the others get one
        // window each.
        let bob = plan
            .call_sheets
            .iter()
            .find(|s| s.actor == "Bob")
            .unwrap();
        assert_eq!(bob.windows.len(), 1);
        assert!((bob.windows[0].start_hour - 18.0).abs() < 1e-10);
        assert!((bob.windows[0].end_hour - 20.0).abs() < 1e-10);

        // Friday has a closing pool; Saturday is empty and omitted.
        assert_eq!(plan.cleanup_crews.len(), 1);
        assert_eq!(plan.cleanup_crews[0].day, RehearsalDay::Friday);
        assert!(!plan.cleanup_crews[0].members.is_empty());
    }

    #[test]
    fn test_empty_request_degrades_gracefully() {
        let request = PlanRequest::new(Vec::new(), Vec::new());
        let mut rng = SmallRng::seed_from_u64(0);
        let plan = plan_weekend(&request, &mut rng);

        assert_eq!(plan.schedule.assignment_count(), 0);
        assert_eq!(plan.statistics.cast_coverage, 0);
        assert!(plan.call_sheets.is_empty());
        assert!(plan.cleanup_crews.is_empty());
    }

    #[test]
    fn test_crew_size_override_per_day() {
        let request = sample_request()
            .with_crew_size(RehearsalDay::Friday, 2)
            .with_crew_size(RehearsalDay::Saturday, 6);
        assert_eq!(
            request.crew_sizes,
            vec![(RehearsalDay::Friday, 2), (RehearsalDay::Saturday, 6)]
        );

        let mut rng = SmallRng::seed_from_u64(5);
        let plan = plan_weekend(&request, &mut rng);
        assert!(plan.cleanup_crews[0].members.len() <= 2);
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = sample_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: PlanRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenes.len(), 2);
        assert_eq!(back.track_priority, request.track_priority);
        assert_eq!(back.crew_sizes, request.crew_sizes);
    }

    #[test]
    fn test_directory_payload_ingestion() {
        // The external directory delivers free-text type fields; track
        // requirements are inferred once at the edge.
        #[derive(Deserialize)]
        struct RawCastMember {
            name: String,
        }
        #[derive(Deserialize)]
        struct RawScene {
            id: String,
            name: String,
            act: String,
            #[serde(rename = "type")]
            scene_type: String,
            cast: Vec<RawCastMember>,
        }

        let payload = r#"[
            {"id": "S1", "name": "Overture", "act": "Act I",
             "type": "Song", "cast": [{"name": "Alice"}]},
            {"id": "S2", "name": "Ballroom", "act": "Act I",
             "type": "Mixed", "cast": [{"name": "Bob"}, {"name": "Carol"}]}
        ]"#;

        let raw: Vec<RawScene> = serde_json::from_str(payload).unwrap();
        let scenes: Vec<Scene> = raw
            .into_iter()
            .map(|r| {
                Scene::new(r.id)
                    .with_name(r.name)
                    .with_act(r.act)
                    .with_type_label(&r.scene_type)
                    .with_cast(r.cast.into_iter().map(|c| c.name).collect())
            })
            .collect();

        assert_eq!(scenes[0].required_tracks, vec![Track::Music]);
        assert_eq!(scenes[1].required_tracks, vec![Track::Music, Track::Dance]);

        let request = PlanRequest::new(scenes, Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        let plan = plan_weekend(&request, &mut rng);
        // S1 on Music, S2 on Music and Dance.
        assert_eq!(plan.schedule.assignment_count(), 3);
    }
}
