// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The greedy auto-assignment pass.
//!
//! This is a single-pass fill, not a constraint-satisfaction search: it
//! walks shifts in cycle order, fills roles in the fixed order (vet before
//! assistant), never reconsiders a placement, and never moves staff between
//! shifts to improve global coverage. Under-fill is reported through the
//! returned counts only.

use crate::ledger::Ledger;
use clinic_rota_domain::{
    Assignment, AssignmentId, AssignmentOrigin, StaffId, StaffRole, is_unavailable,
};

/// Counts produced by one solver pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct FillReport {
    /// Assignments created across the cycle.
    pub created: u32,
    /// Required slots left open for lack of eligible candidates.
    pub unfilled: u32,
}

/// Fills every open role slot in the cycle with the first eligible
/// candidates in roster order.
///
/// Existing assignments (manual or automatic) are never removed or
/// reordered; the pass only appends.
pub(crate) fn fill_open_slots(ledger: &mut Ledger) -> FillReport {
    let mut report: FillReport = FillReport::default();

    for idx in 0..ledger.schedule.shifts.len() {
        for role in StaffRole::FILL_ORDER {
            let (needed, picked) = eligible_candidates(ledger, idx, role);
            report.unfilled += needed - u32::try_from(picked.len()).unwrap_or(u32::MAX);

            for staff_id in picked {
                let id: AssignmentId = ledger.next_assignment_id();
                let shift = &mut ledger.schedule.shifts[idx];
                shift.assignments.push(Assignment::new(
                    id,
                    shift.id.clone(),
                    staff_id,
                    role,
                    AssignmentOrigin::Automatic,
                ));
                report.created += 1;
            }
        }
    }

    report
}

/// Computes the open slot count for one (shift, role) pair and picks up to
/// that many candidates: matching staff role, not already on the shift,
/// available per the constraint list, in roster order.
fn eligible_candidates(ledger: &Ledger, shift_idx: usize, role: StaffRole) -> (u32, Vec<StaffId>) {
    let shift = &ledger.schedule.shifts[shift_idx];

    let required: u32 = shift.requirements.required(role);
    let current: u32 = u32::try_from(shift.assigned_count(role)).unwrap_or(u32::MAX);
    let needed: u32 = required.saturating_sub(current);
    if needed == 0 {
        return (0, Vec::new());
    }

    let picked: Vec<StaffId> = ledger
        .roster
        .iter()
        .filter(|s| s.staff_role == role)
        .filter(|s| !shift.is_assigned(&s.id))
        .filter(|s| !is_unavailable(&ledger.constraints, &s.id, shift))
        .take(needed as usize)
        .map(|s| s.id.clone())
        .collect();

    (needed, picked)
}
