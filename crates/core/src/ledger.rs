// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clinic_rota_domain::{
    AssignmentId, Constraint, OfferId, Schedule, ScheduleStatus, StaffId, StaffMember, SwapId,
    SwapRequest,
};

/// The authoritative in-memory store for one scheduling cycle.
///
/// The ledger owns the schedule (which owns its shifts and their
/// assignments), the constraint list, the swap-request list, and a snapshot
/// of the roster. All mutation flows through [`crate::apply`]; callers are
/// expected to serialize mutating operations (one logical writer per cycle)
/// so that the validate-then-write span of each command is atomic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// The cycle being staffed.
    pub schedule: Schedule,
    /// Roster snapshot, in roster order. The solver picks candidates in
    /// this order; it never scores or ranks.
    pub roster: Vec<StaffMember>,
    /// Declared unavailability, at most one entry per (staff, date).
    pub constraints: Vec<Constraint>,
    /// Swap requests for the cycle.
    pub swaps: Vec<SwapRequest>,
    /// Monotonic sequence for ledger-issued identifiers.
    next_id: u64,
}

impl Ledger {
    /// Creates a ledger for a cycle with no constraints or swaps yet.
    ///
    /// # Arguments
    ///
    /// * `schedule` - The cycle to staff
    /// * `roster` - The staff roster, in roster order
    #[must_use]
    pub const fn new(schedule: Schedule, roster: Vec<StaffMember>) -> Self {
        Self {
            schedule,
            roster,
            constraints: Vec::new(),
            swaps: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a ledger pre-populated with constraints and swaps, as handed
    /// over by the cycle generator.
    #[must_use]
    pub const fn with_seed(
        schedule: Schedule,
        roster: Vec<StaffMember>,
        constraints: Vec<Constraint>,
        swaps: Vec<SwapRequest>,
    ) -> Self {
        Self {
            schedule,
            roster,
            constraints,
            swaps,
            next_id: 1,
        }
    }

    /// Finds a roster member by id.
    #[must_use]
    pub fn find_staff(&self, staff_id: &StaffId) -> Option<&StaffMember> {
        self.roster.iter().find(|s| &s.id == staff_id)
    }

    /// Finds a swap request by id.
    #[must_use]
    pub fn find_swap(&self, swap_id: &SwapId) -> Option<&SwapRequest> {
        self.swaps.iter().find(|s| &s.id == swap_id)
    }

    /// Finds a swap request by id, mutably.
    pub(crate) fn find_swap_mut(&mut self, swap_id: &SwapId) -> Option<&mut SwapRequest> {
        self.swaps.iter_mut().find(|s| &s.id == swap_id)
    }

    /// Returns the constraints declared by one staff member.
    #[must_use]
    pub fn constraints_for(&self, staff_id: &StaffId) -> Vec<Constraint> {
        self.constraints
            .iter()
            .filter(|c| &c.staff_id == staff_id)
            .cloned()
            .collect()
    }

    /// Issues the next assignment identifier from the sequence.
    pub(crate) const fn next_assignment_id(&mut self) -> AssignmentId {
        let id: u64 = self.next_id;
        self.next_id += 1;
        AssignmentId::new(id)
    }

    /// Issues the next offer identifier from the sequence.
    pub(crate) const fn next_offer_id(&mut self) -> OfferId {
        let id: u64 = self.next_id;
        self.next_id += 1;
        OfferId::new(id)
    }
}

/// The typed outcome of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A manual assignment was created.
    Assigned {
        /// The new assignment's identifier.
        assignment_id: AssignmentId,
    },
    /// An assignment removal completed. Removal is idempotent: `removed`
    /// is false when the staff member held no assignment on the shift.
    Removed {
        /// Whether an assignment was actually removed.
        removed: bool,
    },
    /// The solver finished a fill pass.
    AutoAssigned {
        /// Assignments created across the whole cycle.
        assignments_created: u32,
        /// Required slots the solver could not fill.
        slots_unfilled: u32,
    },
    /// A constraint row was stored or cleared.
    ConstraintUpserted {
        /// True when the upsert kind was `None` and the row was cleared.
        cleared: bool,
    },
    /// The cycle moved to a new lifecycle status.
    StatusUpdated {
        /// The new status.
        status: ScheduleStatus,
    },
    /// A swap offer was recorded and the swap moved to `Offered`.
    OfferSubmitted {
        /// The new offer's identifier.
        offer_id: OfferId,
    },
    /// A swap moved from `AdminApproval` to `Approved`.
    SwapApproved,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects, leaving the input ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new ledger after the transition.
    pub new_ledger: Ledger,
    /// What the command did.
    pub outcome: Outcome,
}
