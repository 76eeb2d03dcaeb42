// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation functions for the engine contract.
//!
//! Every function runs the same shape: request guard (authorization, then
//! rate limiting for mutating operations), translation of the request into
//! a core command, `apply`, and translation of the result back into a
//! response DTO. Errors are translated explicitly and never leaked.
//!
//! The caller owns serialization of mutating operations: the ledger passed
//! in must not change between validation and the commit of `new_ledger`.

use std::str::FromStr;
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::guard::{AuthenticatedActor, Operation, authorize};
use crate::rate_limit::RateLimiter;
use crate::request_response::{
    ApproveSwapResponse, AssignShiftRequest, AssignShiftResponse, AutoAssignResponse,
    ConstraintView, RemoveAssignmentRequest, RemoveAssignmentResponse, ScheduleView, StaffView,
    SubmitSwapOfferRequest, SubmitSwapOfferResponse, SwapView, UpdateScheduleStatusRequest,
    UpdateScheduleStatusResponse, UpsertConstraintRequest, UpsertConstraintResponse,
};
use clinic_rota::{Command, Ledger, Outcome, TransitionResult, apply};
use clinic_rota_domain::{
    Constraint, ConstraintKind, OrgRole, ScheduleStatus, ShiftId, StaffId, StaffRole, SwapId,
};

/// The result of a mutating API operation.
///
/// The caller commits `new_ledger` as the authoritative state after a
/// success; on failure nothing was produced and nothing changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new ledger after the operation.
    pub new_ledger: Ledger,
}

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date from a request field.
fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Failed to parse date '{value}': {e}"),
    })
}

/// Reads the current cycle.
///
/// # Errors
///
/// Returns an error if the actor is absent.
pub fn get_schedule(
    ledger: &Ledger,
    actor: Option<&AuthenticatedActor>,
) -> Result<ScheduleView, ApiError> {
    authorize(actor, Operation::GetSchedule)?;

    Ok(ScheduleView::from_domain(&ledger.schedule))
}

/// Moves the cycle to a new lifecycle status.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the status string is
/// invalid, or the transition is not permitted by the lifecycle.
pub fn update_schedule_status(
    ledger: &Ledger,
    request: &UpdateScheduleStatusRequest,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<UpdateScheduleStatusResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::UpdateScheduleStatus)?;
    limiter.check(Operation::UpdateScheduleStatus, &actor.id, now)?;

    let status: ScheduleStatus =
        ScheduleStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let result: TransitionResult = apply(ledger, Command::UpdateScheduleStatus { status })
        .map_err(translate_core_error)?;

    Ok(ApiResult {
        response: UpdateScheduleStatusResponse {
            status: status.as_str().to_string(),
            message: format!("Schedule is now {status}"),
        },
        new_ledger: result.new_ledger,
    })
}

/// Reads one staff member's constraints.
///
/// Admins may read anyone's; a worker is restricted to their own.
///
/// # Errors
///
/// Returns an error if the actor is absent, or a worker queries another
/// staff member's constraints.
pub fn get_constraints(
    ledger: &Ledger,
    staff_id: &str,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<Vec<ConstraintView>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::GetConstraints)?;
    limiter.check(Operation::GetConstraints, &actor.id, now)?;

    let target: StaffId = StaffId::new(staff_id);
    require_self_or_admin(actor, &target, Operation::GetConstraints)?;

    Ok(ledger
        .constraints_for(&target)
        .iter()
        .map(ConstraintView::from_domain)
        .collect())
}

/// Stores, replaces, or clears (kind `NONE`) a constraint.
///
/// Admins may write anyone's; a worker is restricted to their own.
///
/// # Errors
///
/// Returns an error if the actor is absent, a worker targets another staff
/// member, the kind or date fails to parse, or the staff member does not
/// exist.
pub fn upsert_constraint(
    ledger: &Ledger,
    request: &UpsertConstraintRequest,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<UpsertConstraintResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::UpsertConstraint)?;
    limiter.check(Operation::UpsertConstraint, &actor.id, now)?;

    let target: StaffId = StaffId::new(&request.staff_id);
    require_self_or_admin(actor, &target, Operation::UpsertConstraint)?;

    let kind: ConstraintKind =
        ConstraintKind::from_str(&request.kind).map_err(translate_domain_error)?;
    let date: Date = parse_date("date", &request.date)?;

    let constraint: Constraint = Constraint::new(target, date, kind, request.note.clone());
    let result: TransitionResult =
        apply(ledger, Command::UpsertConstraint { constraint }).map_err(translate_core_error)?;

    let Outcome::ConstraintUpserted { cleared } = result.outcome else {
        return Err(unexpected_outcome(Operation::UpsertConstraint));
    };

    Ok(ApiResult {
        response: UpsertConstraintResponse {
            cleared,
            message: if cleared {
                format!("Cleared constraint for {} on {}", request.staff_id, request.date)
            } else {
                format!("Stored constraint for {} on {}", request.staff_id, request.date)
            },
        },
        new_ledger: result.new_ledger,
    })
}

/// Manually places a staff member on a shift.
///
/// With `force`, the soft capacity and availability checks are skipped;
/// the role-mismatch and duplicate-assignment checks always apply.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the rate limit is
/// exhausted, a referenced entity is missing, or a validation step fails.
pub fn assign_shift(
    ledger: &Ledger,
    request: &AssignShiftRequest,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<AssignShiftResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::AssignShift)?;
    limiter.check(Operation::AssignShift, &actor.id, now)?;

    let role: StaffRole = StaffRole::from_str(&request.role).map_err(translate_domain_error)?;

    let command: Command = Command::AssignShift {
        shift_id: ShiftId::new(&request.shift_id),
        staff_id: StaffId::new(&request.staff_id),
        role,
        force: request.force,
    };
    let result: TransitionResult = apply(ledger, command).map_err(translate_core_error)?;

    let Outcome::Assigned { assignment_id } = result.outcome else {
        return Err(unexpected_outcome(Operation::AssignShift));
    };

    debug!(
        shift_id = %request.shift_id,
        staff_id = %request.staff_id,
        role = %role,
        force = request.force,
        "Assignment created"
    );

    Ok(ApiResult {
        response: AssignShiftResponse {
            assignment_id: assignment_id.value(),
            message: format!(
                "Assigned {} to shift {} as {role}",
                request.staff_id, request.shift_id
            ),
        },
        new_ledger: result.new_ledger,
    })
}

/// Removes a staff member's assignment from a shift. Idempotent: removing
/// a staff member who holds no assignment still succeeds.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the shift does not
/// exist.
pub fn remove_assignment(
    ledger: &Ledger,
    request: &RemoveAssignmentRequest,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<RemoveAssignmentResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::RemoveAssignment)?;
    limiter.check(Operation::RemoveAssignment, &actor.id, now)?;

    let command: Command = Command::RemoveAssignment {
        shift_id: ShiftId::new(&request.shift_id),
        staff_id: StaffId::new(&request.staff_id),
    };
    let result: TransitionResult = apply(ledger, command).map_err(translate_core_error)?;

    let Outcome::Removed { removed } = result.outcome else {
        return Err(unexpected_outcome(Operation::RemoveAssignment));
    };

    Ok(ApiResult {
        response: RemoveAssignmentResponse {
            removed,
            message: if removed {
                format!(
                    "Removed {} from shift {}",
                    request.staff_id, request.shift_id
                )
            } else {
                format!(
                    "{} held no assignment on shift {}",
                    request.staff_id, request.shift_id
                )
            },
        },
        new_ledger: result.new_ledger,
    })
}

/// Runs the greedy solver over every open slot in the cycle.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the stricter auto-assign
/// rate limit is exhausted, or the cycle is not in Draft.
pub fn auto_assign(
    ledger: &Ledger,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<AutoAssignResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::AutoAssign)?;
    limiter.check(Operation::AutoAssign, &actor.id, now)?;

    let result: TransitionResult =
        apply(ledger, Command::AutoAssign).map_err(translate_core_error)?;

    let Outcome::AutoAssigned {
        assignments_created,
        slots_unfilled,
    } = result.outcome
    else {
        return Err(unexpected_outcome(Operation::AutoAssign));
    };

    debug!(assignments_created, slots_unfilled, "Auto-assign pass finished");

    Ok(ApiResult {
        response: AutoAssignResponse {
            assignments_created,
            slots_unfilled,
            message: format!(
                "Created {assignments_created} assignments ({slots_unfilled} slots unfilled)"
            ),
        },
        new_ledger: result.new_ledger,
    })
}

/// Lists swap requests, role-scoped: an admin sees all, a worker sees only
/// swaps they requested or offered on.
///
/// # Errors
///
/// Returns an error if the actor is absent.
pub fn get_swaps(
    ledger: &Ledger,
    actor: Option<&AuthenticatedActor>,
) -> Result<Vec<SwapView>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::GetSwaps)?;

    let swaps: Vec<SwapView> = ledger
        .swaps
        .iter()
        .filter(|swap| actor.org_role == OrgRole::Admin || swap.involves(&actor.id))
        .map(SwapView::from_domain)
        .collect();

    Ok(swaps)
}

/// Offers to take over the shift of a `Requested` swap. The offerer is the
/// authenticated actor.
///
/// # Errors
///
/// Returns an error if the actor is not a worker, the swap does not exist,
/// the actor is the requester, or the swap is not in `Requested`.
pub fn submit_swap_offer(
    ledger: &Ledger,
    request: &SubmitSwapOfferRequest,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<SubmitSwapOfferResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::SubmitSwapOffer)?;
    limiter.check(Operation::SubmitSwapOffer, &actor.id, now)?;

    let command: Command = Command::SubmitSwapOffer {
        swap_id: SwapId::new(&request.swap_id),
        staff_id: actor.id.clone(),
    };
    let result: TransitionResult = apply(ledger, command).map_err(translate_core_error)?;

    let Outcome::OfferSubmitted { offer_id } = result.outcome else {
        return Err(unexpected_outcome(Operation::SubmitSwapOffer));
    };

    Ok(ApiResult {
        response: SubmitSwapOfferResponse {
            offer_id: offer_id.value(),
            message: format!("Offer recorded on swap {}", request.swap_id),
        },
        new_ledger: result.new_ledger,
    })
}

/// Approves a swap awaiting an admin decision. Only the exact
/// `ADMIN_APPROVAL` status can be approved; approval is terminal and does
/// not touch the underlying assignments.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the swap does not exist,
/// or its status is not `ADMIN_APPROVAL`.
pub fn approve_swap(
    ledger: &Ledger,
    swap_id: &str,
    actor: Option<&AuthenticatedActor>,
    limiter: &mut RateLimiter,
    now: OffsetDateTime,
) -> Result<ApiResult<ApproveSwapResponse>, ApiError> {
    let actor: &AuthenticatedActor = authorize(actor, Operation::ApproveSwap)?;
    limiter.check(Operation::ApproveSwap, &actor.id, now)?;

    let command: Command = Command::ApproveSwap {
        swap_id: SwapId::new(swap_id),
    };
    let result: TransitionResult = apply(ledger, command).map_err(translate_core_error)?;

    if result.outcome != Outcome::SwapApproved {
        return Err(unexpected_outcome(Operation::ApproveSwap));
    }

    Ok(ApiResult {
        response: ApproveSwapResponse {
            message: format!("Swap {swap_id} approved"),
        },
        new_ledger: result.new_ledger,
    })
}

/// Reads the staff roster.
///
/// # Errors
///
/// Returns an error if the actor is absent.
pub fn get_roster(
    ledger: &Ledger,
    actor: Option<&AuthenticatedActor>,
) -> Result<Vec<StaffView>, ApiError> {
    authorize(actor, Operation::GetRoster)?;

    Ok(ledger.roster.iter().map(StaffView::from_domain).collect())
}

/// Workers may only target themselves; admins may target anyone.
fn require_self_or_admin(
    actor: &AuthenticatedActor,
    target: &StaffId,
    operation: Operation,
) -> Result<(), ApiError> {
    if actor.org_role == OrgRole::Admin || &actor.id == target {
        Ok(())
    } else {
        Err(ApiError::Forbidden {
            operation: operation.name().to_string(),
            message: format!(
                "Forbidden: '{operation}' on another staff member requires the {} role",
                OrgRole::Admin
            ),
        })
    }
}

/// A command produced an outcome the operation did not expect. This marks
/// a broken invariant between the command and apply layers.
fn unexpected_outcome(operation: Operation) -> ApiError {
    tracing::warn!(operation = %operation, "Command produced an unexpected outcome");
    ApiError::Internal {
        message: format!("Unexpected outcome for '{operation}'"),
    }
}
