// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_ledger;
use crate::{Command, CoreError, Ledger, Outcome, TransitionResult, apply};
use clinic_rota_domain::{
    AssignmentOrigin, Constraint, ConstraintKind, DomainError, ShiftId, StaffId, StaffRole,
};
use time::macros::date;

fn assign(shift: &str, staff: &str, role: StaffRole, force: bool) -> Command {
    Command::AssignShift {
        shift_id: ShiftId::new(shift),
        staff_id: StaffId::new(staff),
        role,
        force,
    }
}

#[test]
fn test_assign_appends_manual_assignment() {
    let ledger: Ledger = create_test_ledger();

    let result: TransitionResult = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap();

    let shift = result
        .new_ledger
        .schedule
        .find_shift(&ShiftId::new("s-2026-03-02-AM"))
        .unwrap();
    assert_eq!(shift.assignments.len(), 1);
    assert_eq!(shift.assignments[0].staff_id, StaffId::new("u2"));
    assert_eq!(shift.assignments[0].role, StaffRole::Vet);
    assert_eq!(shift.assignments[0].origin, AssignmentOrigin::Manual);
    assert!(matches!(result.outcome, Outcome::Assigned { .. }));
}

#[test]
fn test_assign_does_not_mutate_input_ledger() {
    let ledger: Ledger = create_test_ledger();

    let _ = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap();

    let shift = ledger
        .schedule
        .find_shift(&ShiftId::new("s-2026-03-02-AM"))
        .unwrap();
    assert!(shift.assignments.is_empty());
}

#[test]
fn test_assign_unknown_shift_fails() {
    let ledger: Ledger = create_test_ledger();

    let err: CoreError = apply(&ledger, assign("s-nope", "u2", StaffRole::Vet, false)).unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::ShiftNotFound { .. })
    ));
}

#[test]
fn test_assign_unknown_staff_fails() {
    let ledger: Ledger = create_test_ledger();

    let err: CoreError = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u99", StaffRole::Vet, false),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::StaffNotFound { .. })
    ));
}

#[test]
fn test_role_mismatch_fails_without_force() {
    let ledger: Ledger = create_test_ledger();

    // u4 is an assistant
    let err: CoreError = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u4", StaffRole::Vet, false),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::RoleMismatch { .. })
    ));
}

#[test]
fn test_role_mismatch_fails_even_with_force() {
    let ledger: Ledger = create_test_ledger();

    let err: CoreError = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u4", StaffRole::Vet, true),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::RoleMismatch { .. })
    ));
}

#[test]
fn test_duplicate_assignment_fails_even_with_force() {
    let ledger: Ledger = create_test_ledger();
    let ledger: Ledger = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap()
    .new_ledger;

    let err: CoreError = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, true),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::AlreadyAssigned { .. })
    ));
}

#[test]
fn test_capacity_exceeded_fails_without_force() {
    let ledger: Ledger = create_test_ledger();
    // Fill the single vet slot
    let ledger: Ledger = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap()
    .new_ledger;

    let err: CoreError = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u3", StaffRole::Vet, false),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::CapacityExceeded { .. })
    ));
}

#[test]
fn test_force_overrides_capacity() {
    let ledger: Ledger = create_test_ledger();
    let ledger: Ledger = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap()
    .new_ledger;

    let result: TransitionResult = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u3", StaffRole::Vet, true),
    )
    .unwrap();

    let shift = result
        .new_ledger
        .schedule
        .find_shift(&ShiftId::new("s-2026-03-02-AM"))
        .unwrap();
    assert_eq!(shift.assigned_count(StaffRole::Vet), 2);
}

#[test]
fn test_constraint_violation_fails_without_force_and_succeeds_with_force() {
    let mut ledger: Ledger = create_test_ledger();
    ledger.constraints.push(Constraint::new(
        StaffId::new("u2"),
        date!(2026 - 03 - 02),
        ConstraintKind::AllDay,
        None,
    ));

    let err: CoreError = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::ConstraintViolation { .. })
    ));

    let result: TransitionResult = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, true),
    )
    .unwrap();
    let shift = result
        .new_ledger
        .schedule
        .find_shift(&ShiftId::new("s-2026-03-02-AM"))
        .unwrap();
    assert_eq!(shift.assigned_count(StaffRole::Vet), 1);
}

#[test]
fn test_assignment_ids_are_unique_across_commands() {
    let ledger: Ledger = create_test_ledger();
    let ledger: Ledger = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap()
    .new_ledger;
    let ledger: Ledger = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u4", StaffRole::Assistant, false),
    )
    .unwrap()
    .new_ledger;

    let shift = ledger
        .schedule
        .find_shift(&ShiftId::new("s-2026-03-02-AM"))
        .unwrap();
    assert_ne!(shift.assignments[0].id, shift.assignments[1].id);
}

#[test]
fn test_remove_deletes_matching_assignment() {
    let ledger: Ledger = create_test_ledger();
    let ledger: Ledger = apply(
        &ledger,
        assign("s-2026-03-02-AM", "u2", StaffRole::Vet, false),
    )
    .unwrap()
    .new_ledger;

    let result: TransitionResult = apply(
        &ledger,
        Command::RemoveAssignment {
            shift_id: ShiftId::new("s-2026-03-02-AM"),
            staff_id: StaffId::new("u2"),
        },
    )
    .unwrap();

    assert_eq!(result.outcome, Outcome::Removed { removed: true });
    let shift = result
        .new_ledger
        .schedule
        .find_shift(&ShiftId::new("s-2026-03-02-AM"))
        .unwrap();
    assert!(shift.assignments.is_empty());
}

#[test]
fn test_remove_is_idempotent_for_unassigned_staff() {
    let ledger: Ledger = create_test_ledger();

    let result: TransitionResult = apply(
        &ledger,
        Command::RemoveAssignment {
            shift_id: ShiftId::new("s-2026-03-02-AM"),
            staff_id: StaffId::new("u2"),
        },
    )
    .unwrap();

    assert_eq!(result.outcome, Outcome::Removed { removed: false });
}

#[test]
fn test_remove_unknown_shift_fails() {
    let ledger: Ledger = create_test_ledger();

    let err: CoreError = apply(
        &ledger,
        Command::RemoveAssignment {
            shift_id: ShiftId::new("s-nope"),
            staff_id: StaffId::new("u2"),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::ShiftNotFound { .. })
    ));
}
