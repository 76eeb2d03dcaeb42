// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ScheduleStatus, StaffRole};
use crate::swap::SwapStatus;

/// Errors raised by domain rules.
///
/// Every variant is a recoverable, caller-reportable outcome; none of them
/// indicate a broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced shift does not exist in the cycle.
    ShiftNotFound {
        /// The shift identifier that failed to resolve.
        shift_id: String,
    },
    /// The referenced staff member is not on the roster.
    StaffNotFound {
        /// The staff identifier that failed to resolve.
        staff_id: String,
    },
    /// The referenced swap request does not exist.
    SwapNotFound {
        /// The swap identifier that failed to resolve.
        swap_id: String,
    },
    /// The staff member's staff role does not match the requested role.
    /// This check is always hard: force cannot bypass it.
    RoleMismatch {
        /// The staff member.
        staff_id: String,
        /// The role the staff member actually holds.
        staff_role: StaffRole,
        /// The role requested for the assignment.
        requested: StaffRole,
    },
    /// The staff member already holds an assignment on this shift.
    /// This check is always hard: force cannot bypass it.
    AlreadyAssigned {
        /// The staff member.
        staff_id: String,
        /// The shift.
        shift_id: String,
    },
    /// No open slot remains for the role on this shift. Soft: an admin may
    /// force past it.
    CapacityExceeded {
        /// The shift.
        shift_id: String,
        /// The role whose slots are full.
        role: StaffRole,
    },
    /// The staff member is unavailable for the shift's date and period.
    /// Soft: an admin may force past it.
    ConstraintViolation {
        /// The staff member.
        staff_id: String,
        /// The shift.
        shift_id: String,
    },
    /// Assignment mutations are only permitted while the cycle is in Draft.
    ScheduleNotDraft {
        /// The cycle's current status.
        status: ScheduleStatus,
    },
    /// The requested schedule lifecycle transition is not permitted.
    InvalidScheduleTransition {
        /// The current status.
        from: ScheduleStatus,
        /// The requested status.
        to: ScheduleStatus,
    },
    /// The requested swap status transition is not permitted.
    InvalidSwapTransition {
        /// The current status.
        from: SwapStatus,
        /// The requested status.
        to: SwapStatus,
    },
    /// A requester may not offer on their own swap.
    OwnSwapOffer {
        /// The swap.
        swap_id: String,
    },
    /// An organizational role string failed to parse.
    InvalidOrgRole(String),
    /// A staff role string failed to parse.
    InvalidStaffRole(String),
    /// A shift period string failed to parse.
    InvalidPeriod(String),
    /// A schedule status string failed to parse.
    InvalidScheduleStatus(String),
    /// A constraint kind string failed to parse.
    InvalidConstraintKind(String),
    /// A swap status string failed to parse.
    InvalidSwapStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShiftNotFound { shift_id } => {
                write!(f, "Shift '{shift_id}' not found")
            }
            Self::StaffNotFound { staff_id } => {
                write!(f, "Staff member '{staff_id}' not found")
            }
            Self::SwapNotFound { swap_id } => {
                write!(f, "Swap request '{swap_id}' not found")
            }
            Self::RoleMismatch {
                staff_id,
                staff_role,
                requested,
            } => {
                write!(
                    f,
                    "Staff member '{staff_id}' is a {staff_role} and cannot fill a {requested} slot"
                )
            }
            Self::AlreadyAssigned { staff_id, shift_id } => {
                write!(
                    f,
                    "Staff member '{staff_id}' is already assigned to shift '{shift_id}'"
                )
            }
            Self::CapacityExceeded { shift_id, role } => {
                write!(f, "Shift '{shift_id}' has no open {role} slot")
            }
            Self::ConstraintViolation { staff_id, shift_id } => {
                write!(
                    f,
                    "Staff member '{staff_id}' is unavailable for shift '{shift_id}'"
                )
            }
            Self::ScheduleNotDraft { status } => {
                write!(
                    f,
                    "Assignments can only change while the schedule is DRAFT (current: {status})"
                )
            }
            Self::InvalidScheduleTransition { from, to } => {
                write!(f, "Schedule cannot move from {from} to {to}")
            }
            Self::InvalidSwapTransition { from, to } => {
                write!(f, "Swap cannot move from {from} to {to}")
            }
            Self::OwnSwapOffer { swap_id } => {
                write!(f, "Cannot offer on own swap request '{swap_id}'")
            }
            Self::InvalidOrgRole(s) => write!(f, "Invalid organizational role: '{s}'"),
            Self::InvalidStaffRole(s) => write!(f, "Invalid staff role: '{s}'"),
            Self::InvalidPeriod(s) => write!(f, "Invalid shift period: '{s}'"),
            Self::InvalidScheduleStatus(s) => write!(f, "Invalid schedule status: '{s}'"),
            Self::InvalidConstraintKind(s) => write!(f, "Invalid constraint kind: '{s}'"),
            Self::InvalidSwapStatus(s) => write!(f, "Invalid swap status: '{s}'"),
        }
    }
}

impl std::error::Error for DomainError {}
