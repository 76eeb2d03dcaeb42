// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::ledger::{Ledger, Outcome, TransitionResult};
use crate::solver::{FillReport, fill_open_slots};
use clinic_rota_domain::{
    Assignment, AssignmentId, AssignmentOrigin, ConstraintKind, DomainError, OfferId, SwapOffer,
    SwapStatus, has_open_slot, is_unavailable,
};

/// Applies a command to the current ledger, producing a new ledger and a
/// typed outcome.
///
/// The transition is atomic: every validation runs against the input
/// ledger before anything is written, and a failure returns with the input
/// untouched. Callers are responsible for serializing mutating commands
/// against each other (see [`Ledger`]).
///
/// # Arguments
///
/// * `ledger` - The current ledger (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ledger and outcome
/// * `Err(CoreError)` if the command violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - An assignment-mutating command arrives while the cycle is not Draft
/// - A referenced shift, staff member, or swap does not exist
/// - The command violates an assignment, constraint, or swap rule
pub fn apply(ledger: &Ledger, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AssignShift {
            shift_id,
            staff_id,
            role,
            force,
        } => {
            require_draft(ledger)?;

            let shift = ledger
                .schedule
                .find_shift(&shift_id)
                .ok_or_else(|| DomainError::ShiftNotFound {
                    shift_id: shift_id.value().to_string(),
                })?;
            let staff = ledger
                .find_staff(&staff_id)
                .ok_or_else(|| DomainError::StaffNotFound {
                    staff_id: staff_id.value().to_string(),
                })?;

            // Hard checks. Force never bypasses these: an admin may staff an
            // over-capacity or inconvenienced shift, but never place a
            // wrong-skill person or double-book the same one.
            if staff.staff_role != role {
                return Err(CoreError::DomainViolation(DomainError::RoleMismatch {
                    staff_id: staff_id.value().to_string(),
                    staff_role: staff.staff_role,
                    requested: role,
                }));
            }
            if shift.is_assigned(&staff_id) {
                return Err(CoreError::DomainViolation(DomainError::AlreadyAssigned {
                    staff_id: staff_id.value().to_string(),
                    shift_id: shift_id.value().to_string(),
                }));
            }

            // Soft checks, skipped under force.
            if !force && !has_open_slot(shift, role) {
                return Err(CoreError::DomainViolation(DomainError::CapacityExceeded {
                    shift_id: shift_id.value().to_string(),
                    role,
                }));
            }
            if !force && is_unavailable(&ledger.constraints, &staff_id, shift) {
                return Err(CoreError::DomainViolation(
                    DomainError::ConstraintViolation {
                        staff_id: staff_id.value().to_string(),
                        shift_id: shift_id.value().to_string(),
                    },
                ));
            }

            let mut new_ledger: Ledger = ledger.clone();
            let assignment_id: AssignmentId = new_ledger.next_assignment_id();
            let target = new_ledger
                .schedule
                .find_shift_mut(&shift_id)
                .ok_or_else(|| {
                    CoreError::Internal(format!("shift '{shift_id}' vanished during transition"))
                })?;
            target.assignments.push(Assignment::new(
                assignment_id,
                shift_id,
                staff_id,
                role,
                AssignmentOrigin::Manual,
            ));

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::Assigned { assignment_id },
            })
        }
        Command::RemoveAssignment { shift_id, staff_id } => {
            require_draft(ledger)?;

            // Resolve against the input ledger so a missing shift fails
            // before any clone is written.
            if ledger.schedule.find_shift(&shift_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::ShiftNotFound {
                    shift_id: shift_id.value().to_string(),
                }));
            }

            let mut new_ledger: Ledger = ledger.clone();
            let target = new_ledger
                .schedule
                .find_shift_mut(&shift_id)
                .ok_or_else(|| {
                    CoreError::Internal(format!("shift '{shift_id}' vanished during transition"))
                })?;

            let before: usize = target.assignments.len();
            target.assignments.retain(|a| a.staff_id != staff_id);
            let removed: bool = target.assignments.len() < before;

            // Removing a staff member who holds no assignment is a no-op
            // that still succeeds.
            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::Removed { removed },
            })
        }
        Command::AutoAssign => {
            require_draft(ledger)?;

            let mut new_ledger: Ledger = ledger.clone();
            let report: FillReport = fill_open_slots(&mut new_ledger);

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::AutoAssigned {
                    assignments_created: report.created,
                    slots_unfilled: report.unfilled,
                },
            })
        }
        Command::UpsertConstraint { constraint } => {
            if ledger.find_staff(&constraint.staff_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::StaffNotFound {
                    staff_id: constraint.staff_id.value().to_string(),
                }));
            }

            let mut new_ledger: Ledger = ledger.clone();
            new_ledger
                .constraints
                .retain(|c| !(c.staff_id == constraint.staff_id && c.date == constraint.date));

            // Kind `None` is the delete form: the row above is gone and
            // nothing replaces it.
            let cleared: bool = constraint.kind == ConstraintKind::None;
            if !cleared {
                new_ledger.constraints.push(constraint);
            }

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::ConstraintUpserted { cleared },
            })
        }
        Command::UpdateScheduleStatus { status } => {
            let current = ledger.schedule.status;
            if !current.can_transition_to(status) {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidScheduleTransition {
                        from: current,
                        to: status,
                    },
                ));
            }

            let mut new_ledger: Ledger = ledger.clone();
            new_ledger.schedule.status = status;

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::StatusUpdated { status },
            })
        }
        Command::SubmitSwapOffer { swap_id, staff_id } => {
            let staff = ledger
                .find_staff(&staff_id)
                .ok_or_else(|| DomainError::StaffNotFound {
                    staff_id: staff_id.value().to_string(),
                })?;
            let swap = ledger
                .find_swap(&swap_id)
                .ok_or_else(|| DomainError::SwapNotFound {
                    swap_id: swap_id.value().to_string(),
                })?;

            if swap.requester_id == staff_id {
                return Err(CoreError::DomainViolation(DomainError::OwnSwapOffer {
                    swap_id: swap_id.value().to_string(),
                }));
            }
            swap.status
                .validate_transition(SwapStatus::Offered)
                .map_err(CoreError::DomainViolation)?;

            let staff_name: String = staff.name.clone();
            let mut new_ledger: Ledger = ledger.clone();
            let offer_id: OfferId = new_ledger.next_offer_id();
            let target = new_ledger.find_swap_mut(&swap_id).ok_or_else(|| {
                CoreError::Internal(format!("swap '{swap_id}' vanished during transition"))
            })?;
            target
                .offers
                .push(SwapOffer::new(offer_id, staff_id, staff_name));
            target.status = SwapStatus::Offered;

            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::OfferSubmitted { offer_id },
            })
        }
        Command::ApproveSwap { swap_id } => {
            let swap = ledger
                .find_swap(&swap_id)
                .ok_or_else(|| DomainError::SwapNotFound {
                    swap_id: swap_id.value().to_string(),
                })?;

            // Only the AdminApproval -> Approved edge is legal; any other
            // current status fails and leaves the swap unchanged.
            swap.status
                .validate_transition(SwapStatus::Approved)
                .map_err(CoreError::DomainViolation)?;

            let mut new_ledger: Ledger = ledger.clone();
            let target = new_ledger.find_swap_mut(&swap_id).ok_or_else(|| {
                CoreError::Internal(format!("swap '{swap_id}' vanished during transition"))
            })?;
            target.status = SwapStatus::Approved;

            // Approval records the decision only; reconciling the underlying
            // assignments is an external concern.
            Ok(TransitionResult {
                new_ledger,
                outcome: Outcome::SwapApproved,
            })
        }
    }
}

/// Assignment-mutating commands require the cycle to be in Draft.
fn require_draft(ledger: &Ledger) -> Result<(), CoreError> {
    let status = ledger.schedule.status;
    if status.allows_assignment_changes() {
        Ok(())
    } else {
        Err(CoreError::DomainViolation(DomainError::ScheduleNotDraft {
            status,
        }))
    }
}
