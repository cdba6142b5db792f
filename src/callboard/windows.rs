//! Call-window merging.
//!
//! Collapses an actor's scheduled segments into the merged call windows a
//! callboard displays: temporally-contiguous or near-contiguous segments
//! become one continuous call, larger gaps become separate calls with a
//! break between them.
//!
//! # Threshold semantics
//! The gap comparison is a strict `<` everywhere: a gap exactly equal to
//! the threshold does NOT merge and starts a new window.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{RehearsalDay, RehearsalSchedule, Scene, Track};

/// One scheduled piece of work contributing to a call window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSegment {
    /// Scene being rehearsed.
    pub scene_id: String,
    /// Scene display name.
    pub scene_name: String,
    /// Track label for the breakdown display.
    pub track: Track,
    /// Segment start (fractional hours).
    pub start_hour: f64,
    /// Segment end (fractional hours).
    pub end_hour: f64,
}

/// A merged, human-facing block of time an actor must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallWindow {
    /// Window start (fractional hours).
    pub start_hour: f64,
    /// Window end (fractional hours).
    pub end_hour: f64,
    /// Original segments contributing to this window, in start order.
    pub segments: Vec<CallSegment>,
}

/// All call windows for one actor on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorCallSheet {
    /// Actor name.
    pub actor: String,
    /// Day the windows apply to.
    pub day: RehearsalDay,
    /// Merged windows, chronological and non-overlapping.
    pub windows: Vec<CallWindow>,
}

/// Merges scheduled segments into call windows.
///
/// Segments are stably sorted by start time, then swept: a segment whose
/// start is less than `gap_threshold_hours` after the current window's end
/// extends it (`end = max(end, segment.end)`, which also absorbs segments
/// fully contained in the window); anything else closes the window and
/// opens a new one. Merging is idempotent: re-merging an already-merged
/// result with the same threshold changes nothing.
///
/// Zero segments yield no windows (the caller renders "No Call").
pub fn merge_windows(mut segments: Vec<CallSegment>, gap_threshold_hours: f64) -> Vec<CallWindow> {
    segments.sort_by(|a, b| {
        a.start_hour
            .partial_cmp(&b.start_hour)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut windows: Vec<CallWindow> = Vec::new();
    for segment in segments {
        match windows.last_mut() {
            Some(current) if segment.start_hour - current.end_hour < gap_threshold_hours => {
                current.end_hour = current.end_hour.max(segment.end_hour);
                current.segments.push(segment);
            }
            _ => windows.push(CallWindow {
                start_hour: segment.start_hour,
                end_hour: segment.end_hour,
                segments: vec![segment],
            }),
        }
    }
    windows
}

/// Builds per-actor, per-day call sheets from a completed schedule.
///
/// Sheets are ordered by actor name, then day. Within one sheet the windows
/// are non-overlapping and chronological, and the gap between consecutive
/// windows is always at least the merge threshold.
pub fn build_call_sheets(
    schedule: &RehearsalSchedule,
    scenes: &[Scene],
    gap_threshold_hours: f64,
) -> Vec<ActorCallSheet> {
    let scene_by_id: HashMap<&str, &Scene> = scenes.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut segments: BTreeMap<(String, RehearsalDay), Vec<CallSegment>> = BTreeMap::new();
    for assignment in &schedule.assignments {
        let Some(scene) = scene_by_id.get(assignment.scene_id.as_str()) else {
            continue;
        };
        for actor in &scene.cast {
            segments
                .entry((actor.clone(), assignment.slot.day))
                .or_default()
                .push(CallSegment {
                    scene_id: scene.id.clone(),
                    scene_name: scene.name.clone(),
                    track: assignment.track,
                    start_hour: assignment.slot.start_hour,
                    end_hour: assignment.end_hour(),
                });
        }
    }

    segments
        .into_iter()
        .map(|((actor, day), segs)| ActorCallSheet {
            actor,
            day,
            windows: merge_windows(segs, gap_threshold_hours),
        })
        .collect()
}
