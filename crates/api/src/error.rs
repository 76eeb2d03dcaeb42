// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::guard::GuardError;
use crate::rate_limit::RateLimitError;
use clinic_rota::CoreError;
use clinic_rota_domain::DomainError;

/// API-level errors.
///
/// These are the typed failures of the engine contract. Every variant is a
/// recoverable, caller-reportable outcome returned inside the uniform
/// result envelope; only `Internal` marks a broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No actor was resolved for the request.
    Unauthorized {
        /// The operation that was attempted.
        operation: String,
    },
    /// The actor's role is not allowed to invoke the operation.
    Forbidden {
        /// The operation that was attempted.
        operation: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The actor exhausted the operation's rate-limit window. The only
    /// failure that implies the caller should back off and retry later.
    RateLimited {
        /// The operation that was attempted.
        operation: String,
        /// A human-readable description of the limit.
        message: String,
    },
    /// A referenced shift, staff member, or swap does not exist.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The staff member's skill does not match the requested role slot.
    /// Hard: force cannot bypass it.
    RoleMismatch {
        /// A human-readable description of the mismatch.
        message: String,
    },
    /// The staff member already holds an assignment on the shift. Hard.
    AlreadyAssigned {
        /// A human-readable description.
        message: String,
    },
    /// No open slot remains for the role. Soft: overridable with force.
    CapacityExceeded {
        /// A human-readable description.
        message: String,
    },
    /// The staff member is unavailable for the shift. Soft: overridable
    /// with force.
    ConstraintViolation {
        /// A human-readable description.
        message: String,
    },
    /// The operation is not legal in the target's current state (swap
    /// status, schedule lifecycle).
    InvalidState {
        /// A human-readable description.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A broken internal invariant.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable error kind carried in the result envelope.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::AlreadyAssigned { .. } => "ALREADY_ASSIGNED",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    /// Returns true for the soft failures an admin may override by
    /// retrying the assignment with `force`.
    #[must_use]
    pub const fn is_force_overridable(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::ConstraintViolation { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { operation } => {
                write!(f, "Unauthorized: '{operation}' requires an authenticated actor")
            }
            Self::Forbidden { message, .. }
            | Self::RateLimited { message, .. }
            | Self::RoleMismatch { message }
            | Self::AlreadyAssigned { message }
            | Self::CapacityExceeded { message }
            | Self::ConstraintViolation { message }
            | Self::InvalidState { message }
            | Self::Internal { message } => write!(f, "{message}"),
            Self::NotFound {
                resource_type,
                message,
            } => write!(f, "{resource_type} not found: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<GuardError> for ApiError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Unauthorized { operation } => Self::Unauthorized {
                operation: operation.to_string(),
            },
            GuardError::Forbidden { operation, .. } => Self::Forbidden {
                operation: operation.to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl From<RateLimitError> for ApiError {
    fn from(err: RateLimitError) -> Self {
        let message: String = err.to_string();
        let RateLimitError::Exceeded { operation, .. } = err;
        Self::RateLimited {
            operation: operation.to_string(),
            message,
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly across the boundary.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::ShiftNotFound { .. } => ApiError::NotFound {
            resource_type: String::from("Shift"),
            message: err.to_string(),
        },
        DomainError::StaffNotFound { .. } => ApiError::NotFound {
            resource_type: String::from("Staff member"),
            message: err.to_string(),
        },
        DomainError::SwapNotFound { .. } => ApiError::NotFound {
            resource_type: String::from("Swap request"),
            message: err.to_string(),
        },
        DomainError::RoleMismatch { .. } => ApiError::RoleMismatch {
            message: err.to_string(),
        },
        DomainError::AlreadyAssigned { .. } => ApiError::AlreadyAssigned {
            message: err.to_string(),
        },
        DomainError::CapacityExceeded { .. } => ApiError::CapacityExceeded {
            message: err.to_string(),
        },
        DomainError::ConstraintViolation { .. } => ApiError::ConstraintViolation {
            message: err.to_string(),
        },
        DomainError::ScheduleNotDraft { .. }
        | DomainError::InvalidScheduleTransition { .. }
        | DomainError::InvalidSwapTransition { .. }
        | DomainError::OwnSwapOffer { .. } => ApiError::InvalidState {
            message: err.to_string(),
        },
        DomainError::InvalidOrgRole(_) => ApiError::InvalidInput {
            field: String::from("org_role"),
            message: err.to_string(),
        },
        DomainError::InvalidStaffRole(_) => ApiError::InvalidInput {
            field: String::from("role"),
            message: err.to_string(),
        },
        DomainError::InvalidPeriod(_) => ApiError::InvalidInput {
            field: String::from("period"),
            message: err.to_string(),
        },
        DomainError::InvalidScheduleStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidConstraintKind(_) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: err.to_string(),
        },
        DomainError::InvalidSwapStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly across the boundary.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}
