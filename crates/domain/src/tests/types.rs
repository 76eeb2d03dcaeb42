// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentOrigin, ConstraintKind, OrgRole, ScheduleStatus, ShiftPeriod, StaffRole,
};
use std::str::FromStr;

#[test]
fn test_org_role_string_round_trip() {
    for role in [OrgRole::Admin, OrgRole::Worker] {
        let parsed: OrgRole = OrgRole::from_str(role.as_str()).unwrap();
        assert_eq!(role, parsed);
    }
}

#[test]
fn test_org_role_rejects_unknown_string() {
    assert!(OrgRole::from_str("MANAGER").is_err());
}

#[test]
fn test_staff_role_string_round_trip() {
    for role in [StaffRole::Vet, StaffRole::Assistant] {
        let parsed: StaffRole = StaffRole::from_str(role.as_str()).unwrap();
        assert_eq!(role, parsed);
    }
}

#[test]
fn test_staff_role_fill_order_is_vet_first() {
    assert_eq!(StaffRole::FILL_ORDER, [StaffRole::Vet, StaffRole::Assistant]);
}

#[test]
fn test_period_string_round_trip() {
    for period in [ShiftPeriod::Morning, ShiftPeriod::Evening] {
        let parsed: ShiftPeriod = ShiftPeriod::from_str(period.as_str()).unwrap();
        assert_eq!(period, parsed);
    }
}

#[test]
fn test_schedule_status_modeled_transitions() {
    assert!(ScheduleStatus::Draft.can_transition_to(ScheduleStatus::Locked));
    assert!(ScheduleStatus::Locked.can_transition_to(ScheduleStatus::Published));
}

#[test]
fn test_schedule_status_rejects_unmodeled_transitions() {
    assert!(!ScheduleStatus::Draft.can_transition_to(ScheduleStatus::Published));
    assert!(!ScheduleStatus::Locked.can_transition_to(ScheduleStatus::Draft));
    assert!(!ScheduleStatus::Published.can_transition_to(ScheduleStatus::Draft));
    // Archived is terminal and also not a modeled target
    assert!(!ScheduleStatus::Draft.can_transition_to(ScheduleStatus::Archived));
    assert!(!ScheduleStatus::Archived.can_transition_to(ScheduleStatus::Draft));
}

#[test]
fn test_only_draft_allows_assignment_changes() {
    assert!(ScheduleStatus::Draft.allows_assignment_changes());
    assert!(!ScheduleStatus::Locked.allows_assignment_changes());
    assert!(!ScheduleStatus::Published.allows_assignment_changes());
    assert!(!ScheduleStatus::Archived.allows_assignment_changes());
}

#[test]
fn test_constraint_kind_coverage() {
    assert!(ConstraintKind::AllDay.covers(ShiftPeriod::Morning));
    assert!(ConstraintKind::AllDay.covers(ShiftPeriod::Evening));
    assert!(ConstraintKind::MorningOnly.covers(ShiftPeriod::Morning));
    assert!(!ConstraintKind::MorningOnly.covers(ShiftPeriod::Evening));
    assert!(ConstraintKind::EveningOnly.covers(ShiftPeriod::Evening));
    assert!(!ConstraintKind::EveningOnly.covers(ShiftPeriod::Morning));
    assert!(!ConstraintKind::None.covers(ShiftPeriod::Morning));
    assert!(!ConstraintKind::None.covers(ShiftPeriod::Evening));
}

#[test]
fn test_constraint_kind_string_round_trip() {
    for kind in [
        ConstraintKind::None,
        ConstraintKind::MorningOnly,
        ConstraintKind::EveningOnly,
        ConstraintKind::AllDay,
    ] {
        let parsed: ConstraintKind = ConstraintKind::from_str(kind.as_str()).unwrap();
        assert_eq!(kind, parsed);
    }
}

#[test]
fn test_assignment_origin_display() {
    assert_eq!(AssignmentOrigin::Manual.as_str(), "MANUAL");
    assert_eq!(AssignmentOrigin::Automatic.as_str(), "AUTOMATIC");
}
