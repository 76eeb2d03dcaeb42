// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shift::Shift;
use crate::types::{ScheduleId, ScheduleStatus, ShiftId};
use serde::{Deserialize, Serialize};
use time::Date;

/// One scheduling cycle: the ordered set of shifts to be staffed over a
/// date range, plus its lifecycle status and submission deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Identifier of the cycle.
    pub id: ScheduleId,
    /// Human-readable title.
    pub title: String,
    /// First day of the cycle.
    pub start_date: Date,
    /// Last day of the cycle (inclusive).
    pub end_date: Date,
    /// Lifecycle status.
    pub status: ScheduleStatus,
    /// Deadline for staff to submit constraints.
    pub submission_deadline: Date,
    /// Shifts in the cycle, in generator order. The solver iterates them
    /// in this order and never re-sorts.
    pub shifts: Vec<Shift>,
}

impl Schedule {
    /// Creates a new cycle in `Draft` status.
    #[must_use]
    pub const fn new(
        id: ScheduleId,
        title: String,
        start_date: Date,
        end_date: Date,
        submission_deadline: Date,
        shifts: Vec<Shift>,
    ) -> Self {
        Self {
            id,
            title,
            start_date,
            end_date,
            status: ScheduleStatus::Draft,
            submission_deadline,
            shifts,
        }
    }

    /// Finds a shift by id.
    #[must_use]
    pub fn find_shift(&self, shift_id: &ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|s| &s.id == shift_id)
    }

    /// Finds a shift by id, mutably.
    #[must_use]
    pub fn find_shift_mut(&mut self, shift_id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == shift_id)
    }
}
