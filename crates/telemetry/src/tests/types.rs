// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, CohortStats, MemoryRecorder, OperationEvent, Recorder};
use clinic_rota_domain::CohortTag;

fn event(operation: &str, duration_ms: u64, success: bool, cohort: &str) -> OperationEvent {
    OperationEvent::new(
        operation.to_string(),
        duration_ms,
        success,
        Some(CohortTag::new(cohort)),
    )
}

#[test]
fn test_actor_carries_cohort() {
    let actor: Actor = Actor::new(
        String::from("u1"),
        String::from("admin"),
        Some(CohortTag::new("A_STABLE")),
    );

    assert_eq!(actor.id, "u1");
    assert_eq!(actor.actor_type, "admin");
    assert_eq!(actor.cohort, Some(CohortTag::new("A_STABLE")));
}

#[test]
fn test_recorder_keeps_events_in_order() {
    let mut recorder: MemoryRecorder = MemoryRecorder::new();
    recorder.record(event("assign_shift", 3, true, "A_STABLE"));
    recorder.record(event("auto_assign", 40, true, "A_STABLE"));

    let operations: Vec<&str> = recorder
        .events()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(operations, ["assign_shift", "auto_assign"]);
}

#[test]
fn test_recorder_drops_oldest_at_capacity() {
    let mut recorder: MemoryRecorder = MemoryRecorder::with_capacity(2);
    recorder.record(event("first", 1, true, "A_STABLE"));
    recorder.record(event("second", 1, true, "A_STABLE"));
    recorder.record(event("third", 1, true, "A_STABLE"));

    assert_eq!(recorder.events().len(), 2);
    assert_eq!(recorder.events()[0].operation, "second");
    assert_eq!(recorder.events()[1].operation, "third");
}

#[test]
fn test_stats_split_by_cohort() {
    let mut recorder: MemoryRecorder = MemoryRecorder::new();
    recorder.record(event("assign_shift", 10, true, "A_STABLE"));
    recorder.record(event("assign_shift", 30, false, "A_STABLE"));
    recorder.record(event("assign_shift", 100, true, "B_CANARY"));

    let stable: CohortStats = recorder.stats_for(&CohortTag::new("A_STABLE"));
    assert_eq!(stable.total, 2);
    assert_eq!(stable.errors, 1);
    assert_eq!(stable.avg_duration_ms, 20);

    let canary: CohortStats = recorder.stats_for(&CohortTag::new("B_CANARY"));
    assert_eq!(canary.total, 1);
    assert_eq!(canary.errors, 0);
    assert_eq!(canary.avg_duration_ms, 100);
}

#[test]
fn test_stats_for_unknown_cohort_are_zero() {
    let recorder: MemoryRecorder = MemoryRecorder::new();
    let stats: CohortStats = recorder.stats_for(&CohortTag::new("B_CANARY"));

    assert_eq!(stats.total, 0);
    assert_eq!(stats.errors, 0);
    assert_eq!(stats.avg_duration_ms, 0);
}

#[test]
fn test_events_without_cohort_are_excluded_from_cohort_stats() {
    let mut recorder: MemoryRecorder = MemoryRecorder::new();
    recorder.record(OperationEvent::new(
        String::from("get_schedule"),
        5,
        true,
        None,
    ));

    let stats: CohortStats = recorder.stats_for(&CohortTag::new("A_STABLE"));
    assert_eq!(stats.total, 0);
}
