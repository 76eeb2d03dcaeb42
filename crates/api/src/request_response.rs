// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects, and the uniform result
//! envelope every operation returns.

use crate::error::ApiError;
use clinic_rota_domain::{
    Assignment, Constraint, Schedule, Shift, StaffMember, SwapOffer, SwapRequest,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// The error body carried inside a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Stable error kind (e.g. `CAPACITY_EXCEEDED`).
    pub kind: String,
    /// Human-readable message.
    pub message: String,
    /// True for soft failures an admin may override by retrying the
    /// assignment with `force`.
    pub overridable: bool,
}

/// The uniform result shape of every engine operation: a success flag, an
/// optional payload, and an optional typed error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// The error, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wraps a typed failure.
    #[must_use]
    pub fn err(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                kind: error.kind().to_string(),
                message: error.to_string(),
                overridable: error.is_force_overridable(),
            }),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(&err),
        }
    }
}

/// API request to manually assign a staff member to a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignShiftRequest {
    /// The target shift identifier.
    pub shift_id: String,
    /// The staff member identifier.
    pub staff_id: String,
    /// The role slot to fill (VET or ASSISTANT).
    pub role: String,
    /// Admin override for the soft capacity/availability checks.
    #[serde(default)]
    pub force: bool,
}

/// API response for a successful manual assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignShiftResponse {
    /// The new assignment's identifier.
    pub assignment_id: u64,
    /// A success message.
    pub message: String,
}

/// API request to remove an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveAssignmentRequest {
    /// The target shift identifier.
    pub shift_id: String,
    /// The staff member identifier.
    pub staff_id: String,
}

/// API response for an assignment removal. Removal is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveAssignmentResponse {
    /// Whether an assignment was actually removed.
    pub removed: bool,
    /// A success message.
    pub message: String,
}

/// API response for a solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAssignResponse {
    /// Assignments created across the whole cycle.
    pub assignments_created: u32,
    /// Required slots left unfilled for lack of eligible candidates.
    pub slots_unfilled: u32,
    /// A success message.
    pub message: String,
}

/// API request to store, replace, or clear a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertConstraintRequest {
    /// The staff member the constraint belongs to.
    pub staff_id: String,
    /// The date, ISO 8601 (`YYYY-MM-DD`).
    pub date: String,
    /// The constraint kind; `NONE` clears the row.
    pub kind: String,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response for a constraint upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertConstraintResponse {
    /// True when the upsert kind was `NONE` and the row was cleared.
    pub cleared: bool,
    /// A success message.
    pub message: String,
}

/// API request to move the cycle to a new lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScheduleStatusRequest {
    /// The requested status.
    pub status: String,
}

/// API response for a lifecycle update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScheduleStatusResponse {
    /// The new status.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API request to offer on a swap. The offerer is the authenticated actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSwapOfferRequest {
    /// The target swap identifier.
    pub swap_id: String,
}

/// API response for a submitted swap offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSwapOfferResponse {
    /// The new offer's identifier.
    pub offer_id: u64,
    /// A success message.
    pub message: String,
}

/// API response for an approved swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveSwapResponse {
    /// A success message.
    pub message: String,
}

/// Per-role requirement view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsView {
    /// Required number of vets.
    pub vet: u32,
    /// Required number of assistants.
    pub assistant: u32,
}

/// Assignment view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentView {
    /// Ledger-issued identifier.
    pub id: u64,
    /// The owning shift.
    pub shift_id: String,
    /// The assigned staff member.
    pub staff_id: String,
    /// The role filled.
    pub role: String,
    /// MANUAL or AUTOMATIC.
    pub origin: String,
}

impl AssignmentView {
    pub(crate) fn from_domain(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id.value(),
            shift_id: assignment.shift_id.value().to_string(),
            staff_id: assignment.staff_id.value().to_string(),
            role: assignment.role.as_str().to_string(),
            origin: assignment.origin.as_str().to_string(),
        }
    }
}

/// Shift view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftView {
    /// The shift identifier.
    pub id: String,
    /// Calendar date.
    pub date: Date,
    /// MORNING or EVENING.
    pub period: String,
    /// Start time of day (`HH:MM`).
    pub start: String,
    /// End time of day (`HH:MM`).
    pub end: String,
    /// Required headcount per role.
    pub requirements: RequirementsView,
    /// Current assignments, in placement order.
    pub assignments: Vec<AssignmentView>,
}

impl ShiftView {
    pub(crate) fn from_domain(shift: &Shift) -> Self {
        Self {
            id: shift.id.value().to_string(),
            date: shift.date,
            period: shift.period.as_str().to_string(),
            start: format!("{:02}:{:02}", shift.start.hour(), shift.start.minute()),
            end: format!("{:02}:{:02}", shift.end.hour(), shift.end.minute()),
            requirements: RequirementsView {
                vet: shift.requirements.vet,
                assistant: shift.requirements.assistant,
            },
            assignments: shift
                .assignments
                .iter()
                .map(AssignmentView::from_domain)
                .collect(),
        }
    }
}

/// Schedule (cycle) view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    /// The cycle identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// First day of the cycle.
    pub start_date: Date,
    /// Last day of the cycle (inclusive).
    pub end_date: Date,
    /// Lifecycle status.
    pub status: String,
    /// Constraint submission deadline.
    pub submission_deadline: Date,
    /// The cycle's shifts, in generator order.
    pub shifts: Vec<ShiftView>,
}

impl ScheduleView {
    pub(crate) fn from_domain(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.value().to_string(),
            title: schedule.title.clone(),
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            status: schedule.status.as_str().to_string(),
            submission_deadline: schedule.submission_deadline,
            shifts: schedule.shifts.iter().map(ShiftView::from_domain).collect(),
        }
    }
}

/// Constraint view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintView {
    /// The staff member the constraint belongs to.
    pub staff_id: String,
    /// The date the constraint applies to.
    pub date: Date,
    /// The constraint kind.
    pub kind: String,
    /// Optional free-text note.
    pub note: Option<String>,
}

impl ConstraintView {
    pub(crate) fn from_domain(constraint: &Constraint) -> Self {
        Self {
            staff_id: constraint.staff_id.value().to_string(),
            date: constraint.date,
            kind: constraint.kind.as_str().to_string(),
            note: constraint.note.clone(),
        }
    }
}

/// Swap offer view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferView {
    /// Ledger-issued identifier.
    pub id: u64,
    /// The offering staff member.
    pub staff_id: String,
    /// Display name of the offering staff member.
    pub staff_name: String,
}

impl OfferView {
    pub(crate) fn from_domain(offer: &SwapOffer) -> Self {
        Self {
            id: offer.id.value(),
            staff_id: offer.staff_id.value().to_string(),
            staff_name: offer.staff_name.clone(),
        }
    }
}

/// Swap request view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapView {
    /// The swap identifier.
    pub id: String,
    /// The shift being traded away.
    pub shift_id: String,
    /// The requesting staff member.
    pub requester_id: String,
    /// Display name of the requester.
    pub requester_name: String,
    /// Date of the shift.
    pub shift_date: Date,
    /// Period of the shift.
    pub shift_period: String,
    /// Current status.
    pub status: String,
    /// Offers received, in submission order.
    pub offers: Vec<OfferView>,
}

impl SwapView {
    pub(crate) fn from_domain(swap: &SwapRequest) -> Self {
        Self {
            id: swap.id.value().to_string(),
            shift_id: swap.shift_id.value().to_string(),
            requester_id: swap.requester_id.value().to_string(),
            requester_name: swap.requester_name.clone(),
            shift_date: swap.shift_date,
            shift_period: swap.shift_period.as_str().to_string(),
            status: swap.status.as_str().to_string(),
            offers: swap.offers.iter().map(OfferView::from_domain).collect(),
        }
    }
}

/// Roster member view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffView {
    /// The staff member's identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Organizational role.
    pub org_role: String,
    /// Clinical staff role.
    pub staff_role: String,
    /// Optional experiment cohort tag.
    pub cohort: Option<String>,
}

impl StaffView {
    pub(crate) fn from_domain(member: &StaffMember) -> Self {
        Self {
            id: member.id.value().to_string(),
            name: member.name.clone(),
            email: member.email.clone(),
            org_role: member.org_role.as_str().to_string(),
            staff_role: member.staff_role.as_str().to_string(),
            cohort: member.cohort.as_ref().map(|c| c.value().to_string()),
        }
    }
}
