// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Constraint, ConstraintKind, Requirements, Shift, ShiftId, ShiftPeriod, StaffId, StaffRole,
    has_open_slot, is_unavailable,
};
use time::macros::{date, time};

fn create_test_shift(period: ShiftPeriod) -> Shift {
    Shift::new(
        ShiftId::new("s-2026-03-02-AM"),
        date!(2026 - 03 - 02),
        period,
        time!(09:00),
        time!(15:00),
        Requirements::new(1, 2),
    )
}

fn all_day_constraint(staff_id: &str) -> Constraint {
    Constraint::new(
        StaffId::new(staff_id),
        date!(2026 - 03 - 02),
        ConstraintKind::AllDay,
        Some(String::from("Personal leave")),
    )
}

#[test]
fn test_no_constraint_means_available() {
    let shift: Shift = create_test_shift(ShiftPeriod::Morning);
    let constraints: Vec<Constraint> = Vec::new();

    assert!(!is_unavailable(&constraints, &StaffId::new("u2"), &shift));
}

#[test]
fn test_all_day_constraint_blocks_both_periods() {
    let constraints: Vec<Constraint> = vec![all_day_constraint("u2")];

    let morning: Shift = create_test_shift(ShiftPeriod::Morning);
    let evening: Shift = create_test_shift(ShiftPeriod::Evening);

    assert!(is_unavailable(&constraints, &StaffId::new("u2"), &morning));
    assert!(is_unavailable(&constraints, &StaffId::new("u2"), &evening));
}

#[test]
fn test_morning_only_constraint_blocks_morning_only() {
    let constraints: Vec<Constraint> = vec![Constraint::new(
        StaffId::new("u2"),
        date!(2026 - 03 - 02),
        ConstraintKind::MorningOnly,
        None,
    )];

    let morning: Shift = create_test_shift(ShiftPeriod::Morning);
    let evening: Shift = create_test_shift(ShiftPeriod::Evening);

    assert!(is_unavailable(&constraints, &StaffId::new("u2"), &morning));
    assert!(!is_unavailable(&constraints, &StaffId::new("u2"), &evening));
}

#[test]
fn test_evening_only_constraint_blocks_evening_only() {
    let constraints: Vec<Constraint> = vec![Constraint::new(
        StaffId::new("u2"),
        date!(2026 - 03 - 02),
        ConstraintKind::EveningOnly,
        None,
    )];

    let morning: Shift = create_test_shift(ShiftPeriod::Morning);
    let evening: Shift = create_test_shift(ShiftPeriod::Evening);

    assert!(!is_unavailable(&constraints, &StaffId::new("u2"), &morning));
    assert!(is_unavailable(&constraints, &StaffId::new("u2"), &evening));
}

#[test]
fn test_constraint_on_other_date_is_ignored() {
    let constraints: Vec<Constraint> = vec![Constraint::new(
        StaffId::new("u2"),
        date!(2026 - 03 - 03),
        ConstraintKind::AllDay,
        None,
    )];

    let shift: Shift = create_test_shift(ShiftPeriod::Morning);

    assert!(!is_unavailable(&constraints, &StaffId::new("u2"), &shift));
}

#[test]
fn test_constraint_on_other_staff_is_ignored() {
    let constraints: Vec<Constraint> = vec![all_day_constraint("u3")];

    let shift: Shift = create_test_shift(ShiftPeriod::Morning);

    assert!(!is_unavailable(&constraints, &StaffId::new("u2"), &shift));
}

#[test]
fn test_empty_shift_has_open_slots() {
    let shift: Shift = create_test_shift(ShiftPeriod::Morning);

    assert!(has_open_slot(&shift, StaffRole::Vet));
    assert!(has_open_slot(&shift, StaffRole::Assistant));
}

#[test]
fn test_full_role_has_no_open_slot() {
    use crate::{Assignment, AssignmentId, AssignmentOrigin};

    let mut shift: Shift = create_test_shift(ShiftPeriod::Morning);
    shift.assignments.push(Assignment::new(
        AssignmentId::new(1),
        shift.id.clone(),
        StaffId::new("u2"),
        StaffRole::Vet,
        AssignmentOrigin::Manual,
    ));

    // Requirement is 1 vet / 2 assistants
    assert!(!has_open_slot(&shift, StaffRole::Vet));
    assert!(has_open_slot(&shift, StaffRole::Assistant));
}

#[test]
fn test_zero_requirement_never_has_open_slot() {
    let mut shift: Shift = create_test_shift(ShiftPeriod::Morning);
    shift.requirements = Requirements::new(0, 0);

    assert!(!has_open_slot(&shift, StaffRole::Vet));
    assert!(!has_open_slot(&shift, StaffRole::Assistant));
}

#[test]
fn test_other_role_assignments_do_not_consume_slots() {
    use crate::{Assignment, AssignmentId, AssignmentOrigin};

    let mut shift: Shift = create_test_shift(ShiftPeriod::Morning);
    for (n, staff) in ["u4", "u5"].iter().enumerate() {
        shift.assignments.push(Assignment::new(
            AssignmentId::new(n as u64 + 1),
            shift.id.clone(),
            StaffId::new(staff),
            StaffRole::Assistant,
            AssignmentOrigin::Manual,
        ));
    }

    // Both assistant slots full; the vet slot stays open
    assert!(!has_open_slot(&shift, StaffRole::Assistant));
    assert!(has_open_slot(&shift, StaffRole::Vet));
}
