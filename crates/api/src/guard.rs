// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request guard: declarative role-based authorization.
//!
//! Every engine operation declares its allowed organizational roles in one
//! table instead of scattering role conditionals through the operation
//! bodies. An absent actor fails `Unauthorized`; a present actor with a
//! non-matching role fails `Forbidden`.

use clinic_rota_domain::{CohortTag, OrgRole, StaffId, StaffMember, StaffRole};
use clinic_rota_telemetry::Actor;

/// The engine operations guarded at the API boundary.
///
/// The operation name doubles as the rate-limit bucket key and the
/// telemetry operation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read the current cycle.
    GetSchedule,
    /// Move the cycle to a new lifecycle status.
    UpdateScheduleStatus,
    /// Read one staff member's constraints.
    GetConstraints,
    /// Store, replace, or clear a constraint.
    UpsertConstraint,
    /// Manually place a staff member on a shift.
    AssignShift,
    /// Remove a staff member's assignment from a shift.
    RemoveAssignment,
    /// Run the greedy solver over the cycle.
    AutoAssign,
    /// List swap requests, role-scoped.
    GetSwaps,
    /// Offer to take over a requested swap.
    SubmitSwapOffer,
    /// Approve a swap awaiting an admin decision.
    ApproveSwap,
    /// Read the staff roster.
    GetRoster,
    /// Read aggregated telemetry, per cohort.
    GetTelemetryStats,
}

impl Operation {
    /// Returns the operation name used for rate-limit buckets and
    /// telemetry events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetSchedule => "get_schedule",
            Self::UpdateScheduleStatus => "update_schedule_status",
            Self::GetConstraints => "get_constraints",
            Self::UpsertConstraint => "upsert_constraint",
            Self::AssignShift => "assign_shift",
            Self::RemoveAssignment => "remove_assignment",
            Self::AutoAssign => "auto_assign",
            Self::GetSwaps => "get_swaps",
            Self::SubmitSwapOffer => "submit_swap_offer",
            Self::ApproveSwap => "approve_swap",
            Self::GetRoster => "get_roster",
            Self::GetTelemetryStats => "get_telemetry_stats",
        }
    }

    /// Returns the organizational roles allowed to invoke this operation.
    ///
    /// Self-scoping (a worker reading or writing only their own
    /// constraints) is enforced inside the operation bodies; this table
    /// only answers "may this role call at all".
    #[must_use]
    pub const fn allowed_roles(&self) -> &'static [OrgRole] {
        match self {
            Self::GetSchedule
            | Self::GetConstraints
            | Self::UpsertConstraint
            | Self::GetSwaps
            | Self::GetRoster => &[OrgRole::Admin, OrgRole::Worker],
            Self::UpdateScheduleStatus
            | Self::AssignShift
            | Self::RemoveAssignment
            | Self::AutoAssign
            | Self::ApproveSwap
            | Self::GetTelemetryStats => &[OrgRole::Admin],
            Self::SubmitSwapOffer => &[OrgRole::Worker],
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An authenticated actor, resolved by the external session collaborator.
///
/// The engine never authenticates; it receives the already-resolved actor
/// and checks roles against the operation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The staff member's identifier.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// Organizational role.
    pub org_role: OrgRole,
    /// Clinical staff role.
    pub staff_role: StaffRole,
    /// Opaque experiment cohort tag, propagated into telemetry.
    pub cohort: Option<CohortTag>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(
        id: StaffId,
        name: String,
        org_role: OrgRole,
        staff_role: StaffRole,
        cohort: Option<CohortTag>,
    ) -> Self {
        Self {
            id,
            name,
            org_role,
            staff_role,
            cohort,
        }
    }

    /// Builds an actor from a roster record.
    #[must_use]
    pub fn from_staff(member: &StaffMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            org_role: member.org_role,
            staff_role: member.staff_role,
            cohort: member.cohort.clone(),
        }
    }

    /// Converts this actor into a telemetry actor for attribution.
    #[must_use]
    pub fn to_telemetry_actor(&self) -> Actor {
        let actor_type: String = match self.org_role {
            OrgRole::Admin => String::from("admin"),
            OrgRole::Worker => String::from("worker"),
        };
        Actor::new(self.id.value().to_string(), actor_type, self.cohort.clone())
    }
}

/// Authorization errors raised by the request guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// No actor was resolved for the request.
    Unauthorized {
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// The actor's organizational role is not in the operation's
    /// allowed-roles set.
    Forbidden {
        /// The operation that was attempted.
        operation: &'static str,
        /// The actor's role.
        actor_role: OrgRole,
    },
}

impl std::fmt::Display for GuardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { operation } => {
                write!(f, "Unauthorized: '{operation}' requires an authenticated actor")
            }
            Self::Forbidden {
                operation,
                actor_role,
            } => {
                write!(f, "Forbidden: '{operation}' is not permitted for role {actor_role}")
            }
        }
    }
}

impl std::error::Error for GuardError {}

/// Checks that an actor is present and holds an allowed role for the
/// operation.
///
/// # Arguments
///
/// * `actor` - The resolved actor, if any
/// * `operation` - The operation being attempted
///
/// # Returns
///
/// The actor, for convenient chaining into the operation body.
///
/// # Errors
///
/// Returns `GuardError::Unauthorized` when no actor is present, and
/// `GuardError::Forbidden` when the actor's role is not allowed.
pub fn authorize<'a>(
    actor: Option<&'a AuthenticatedActor>,
    operation: Operation,
) -> Result<&'a AuthenticatedActor, GuardError> {
    let actor: &AuthenticatedActor = actor.ok_or(GuardError::Unauthorized {
        operation: operation.name(),
    })?;

    if operation.allowed_roles().contains(&actor.org_role) {
        Ok(actor)
    } else {
        Err(GuardError::Forbidden {
            operation: operation.name(),
            actor_role: actor.org_role,
        })
    }
}
