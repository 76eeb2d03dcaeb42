// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::constraint::Constraint;
use crate::shift::Shift;
use crate::types::{StaffId, StaffRole};

/// Reports whether a staff member is unavailable for a shift.
///
/// Looks up the single constraint for (staff, shift date) and checks
/// whether its kind covers the shift's period. No constraint means
/// available. Pure, no side effects, no errors.
///
/// # Arguments
///
/// * `constraints` - The full constraint list for the cycle
/// * `staff_id` - The staff member to check
/// * `shift` - The shift being considered
#[must_use]
pub fn is_unavailable(constraints: &[Constraint], staff_id: &StaffId, shift: &Shift) -> bool {
    constraints
        .iter()
        .find(|c| &c.staff_id == staff_id && c.date == shift.date)
        .is_some_and(|c| c.kind.covers(shift.period))
}

/// Reports whether a shift still has an open slot for a role.
///
/// Counts the shift's current assignments holding `role` and compares
/// against the required headcount. Pure.
///
/// # Arguments
///
/// * `shift` - The shift being considered
/// * `role` - The role to check capacity for
#[must_use]
pub fn has_open_slot(shift: &Shift, role: StaffRole) -> bool {
    (shift.assigned_count(role) as u64) < u64::from(shift.requirements.required(role))
}
