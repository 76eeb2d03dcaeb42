// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AssignmentId, AssignmentOrigin, ShiftId, ShiftPeriod, StaffId, StaffRole};
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Required headcount per staff role for a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// Required number of vets.
    pub vet: u32,
    /// Required number of assistants.
    pub assistant: u32,
}

impl Requirements {
    /// Creates new `Requirements`.
    #[must_use]
    pub const fn new(vet: u32, assistant: u32) -> Self {
        Self { vet, assistant }
    }

    /// Returns the required headcount for the given role.
    #[must_use]
    pub const fn required(&self, role: StaffRole) -> u32 {
        match role {
            StaffRole::Vet => self.vet,
            StaffRole::Assistant => self.assistant,
        }
    }

    /// Returns the total required headcount across all roles.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.vet + self.assistant
    }
}

/// A placement of one staff member on one shift.
///
/// The role recorded here equals the staff member's staff role at the time
/// of placement; a mismatch is rejected at creation and never corrected
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Ledger-issued identifier.
    pub id: AssignmentId,
    /// The shift this assignment belongs to.
    pub shift_id: ShiftId,
    /// The assigned staff member.
    pub staff_id: StaffId,
    /// The role the staff member fills on this shift.
    pub role: StaffRole,
    /// Whether the placement was manual or solver-made.
    pub origin: AssignmentOrigin,
}

impl Assignment {
    /// Creates a new `Assignment`.
    #[must_use]
    pub const fn new(
        id: AssignmentId,
        shift_id: ShiftId,
        staff_id: StaffId,
        role: StaffRole,
        origin: AssignmentOrigin,
    ) -> Self {
        Self {
            id,
            shift_id,
            staff_id,
            role,
            origin,
        }
    }
}

/// A single work shift within a scheduling cycle.
///
/// Shifts are created once per cycle by the generator and never deleted by
/// the engine. Assignments are owned by their shift: removing a shift would
/// remove its assignments with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Generator-issued identifier.
    pub id: ShiftId,
    /// Calendar date of the shift.
    pub date: Date,
    /// Period of day.
    pub period: ShiftPeriod,
    /// Start time of day.
    pub start: Time,
    /// End time of day.
    pub end: Time,
    /// Required headcount per role.
    pub requirements: Requirements,
    /// Current assignments, in placement order.
    pub assignments: Vec<Assignment>,
}

impl Shift {
    /// Creates a new, unassigned `Shift`.
    #[must_use]
    pub const fn new(
        id: ShiftId,
        date: Date,
        period: ShiftPeriod,
        start: Time,
        end: Time,
        requirements: Requirements,
    ) -> Self {
        Self {
            id,
            date,
            period,
            start,
            end,
            requirements,
            assignments: Vec::new(),
        }
    }

    /// Counts current assignments holding the given role.
    #[must_use]
    pub fn assigned_count(&self, role: StaffRole) -> usize {
        self.assignments.iter().filter(|a| a.role == role).count()
    }

    /// Returns true if the staff member already holds an assignment on
    /// this shift, regardless of role.
    #[must_use]
    pub fn is_assigned(&self, staff_id: &StaffId) -> bool {
        self.assignments.iter().any(|a| &a.staff_id == staff_id)
    }
}
