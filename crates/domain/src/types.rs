// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Organizational roles for access control.
///
/// The organizational role determines what operations a staff member may
/// invoke. It is independent of the staff role (the clinical skill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrgRole {
    /// Admin: builds the rota, assigns staff, approves swaps.
    Admin,
    /// Worker: manages their own constraints and swap offers.
    Worker,
}

impl OrgRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Worker => "WORKER",
        }
    }
}

impl FromStr for OrgRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "WORKER" => Ok(Self::Worker),
            _ => Err(DomainError::InvalidOrgRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clinical staff roles.
///
/// Each shift declares a required headcount per staff role, and an
/// assignment records the role the staff member was placed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    /// Veterinarian.
    Vet,
    /// Veterinary assistant.
    Assistant,
}

impl StaffRole {
    /// The fixed fill order used by the auto-assignment solver.
    pub const FILL_ORDER: [Self; 2] = [Self::Vet, Self::Assistant];

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vet => "VET",
            Self::Assistant => "ASSISTANT",
        }
    }
}

impl FromStr for StaffRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VET" => Ok(Self::Vet),
            "ASSISTANT" => Ok(Self::Assistant),
            _ => Err(DomainError::InvalidStaffRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The period of day a shift covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftPeriod {
    /// Morning shift.
    Morning,
    /// Evening shift.
    Evening,
}

impl ShiftPeriod {
    /// Returns the string representation of the period.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Evening => "EVENING",
        }
    }
}

impl FromStr for ShiftPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MORNING" => Ok(Self::Morning),
            "EVENING" => Ok(Self::Evening),
            _ => Err(DomainError::InvalidPeriod(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle states of a scheduling cycle.
///
/// Assignment-mutating operations are only permitted while the cycle is in
/// `Draft`. `Archived` is terminal and is not reachable through the modeled
/// transitions; it exists for cycles retired by an external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    /// Cycle under construction. Assignments may change.
    #[default]
    Draft,
    /// Cycle frozen for review. Assignments are read-only.
    Locked,
    /// Cycle visible to all staff. Assignments are read-only.
    Published,
    /// Cycle retired. Terminal.
    Archived,
}

impl ScheduleStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Locked => "LOCKED",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Locked
    /// - Locked → Published
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Locked) | (Self::Locked, Self::Published)
        )
    }

    /// Returns whether assignment mutations (manual assign/remove,
    /// auto-assign) are permitted in this status.
    #[must_use]
    pub const fn allows_assignment_changes(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl FromStr for ScheduleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "LOCKED" => Ok(Self::Locked),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(DomainError::InvalidScheduleStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kinds of unavailability a staff member may declare for a date.
///
/// `None` is equivalent to the absence of a constraint: upserting it
/// deletes any stored row for that (staff, date) pair, and it is never
/// persisted itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintKind {
    /// No restriction. Upserting this kind clears the stored constraint.
    None,
    /// Unavailable for morning shifts only.
    MorningOnly,
    /// Unavailable for evening shifts only.
    EveningOnly,
    /// Unavailable for the whole day.
    AllDay,
}

impl ConstraintKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::MorningOnly => "MORNING_ONLY",
            Self::EveningOnly => "EVENING_ONLY",
            Self::AllDay => "ALL_DAY",
        }
    }

    /// Returns true if this kind makes the staff member unavailable for
    /// a shift in the given period.
    #[must_use]
    pub const fn covers(&self, period: ShiftPeriod) -> bool {
        match self {
            Self::None => false,
            Self::MorningOnly => matches!(period, ShiftPeriod::Morning),
            Self::EveningOnly => matches!(period, ShiftPeriod::Evening),
            Self::AllDay => true,
        }
    }
}

impl FromStr for ConstraintKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "MORNING_ONLY" => Ok(Self::MorningOnly),
            "EVENING_ONLY" => Ok(Self::EveningOnly),
            "ALL_DAY" => Ok(Self::AllDay),
            _ => Err(DomainError::InvalidConstraintKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provenance of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentOrigin {
    /// Placed by an admin through the manual assignment path.
    Manual,
    /// Placed by the auto-assignment solver.
    Automatic,
}

impl AssignmentOrigin {
    /// Returns the string representation of the origin.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "MANUAL",
            Self::Automatic => "AUTOMATIC",
        }
    }
}

impl std::fmt::Display for AssignmentOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a staff member, issued by the external roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId {
    value: String,
}

impl StaffId {
    /// Creates a new `StaffId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifier of a shift, issued by the cycle generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId {
    value: String,
}

impl ShiftId {
    /// Creates a new `ShiftId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ShiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifier of a scheduling cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId {
    value: String,
}

impl ScheduleId {
    /// Creates a new `ScheduleId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifier of a swap request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapId {
    value: String,
}

impl SwapId {
    /// Creates a new `SwapId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for SwapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Canonical numeric identifier of an assignment, issued by the ledger's
/// monotonic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId {
    value: u64,
}

impl AssignmentId {
    /// Creates a new `AssignmentId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl std::fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Canonical numeric identifier of a swap offer, issued by the ledger's
/// monotonic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId {
    value: u64,
}

impl OfferId {
    /// Creates a new `OfferId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Opaque experiment-cohort label attached to a staff member.
///
/// The engine never computes cohorts; it only propagates the tag into
/// telemetry events. Cohort assignment is an external, swappable strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortTag {
    value: String,
}

impl CohortTag {
    /// Creates a new `CohortTag`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the tag value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CohortTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A member of the clinic roster.
///
/// Staff records are owned by the external roster collaborator; the engine
/// holds a snapshot and references members by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// The staff member's identifier.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Organizational role (access control).
    pub org_role: OrgRole,
    /// Clinical staff role (assignment skill).
    pub staff_role: StaffRole,
    /// Optional opaque experiment cohort tag.
    pub cohort: Option<CohortTag>,
}

impl StaffMember {
    /// Creates a new `StaffMember`.
    #[must_use]
    pub const fn new(
        id: StaffId,
        name: String,
        email: String,
        org_role: OrgRole,
        staff_role: StaffRole,
        cohort: Option<CohortTag>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            org_role,
            staff_role,
            cohort,
        }
    }
}
