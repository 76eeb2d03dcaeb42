// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ConstraintKind, StaffId};
use serde::{Deserialize, Serialize};
use time::Date;

/// A staff member's declared unavailability for one date.
///
/// At most one constraint exists per (staff, date) pair; upserts replace.
/// A constraint of kind `None` is never stored: it is the upsert form of
/// "delete my constraint for this date".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// The staff member this constraint belongs to.
    pub staff_id: StaffId,
    /// The date the constraint applies to.
    pub date: Date,
    /// The kind of unavailability.
    pub kind: ConstraintKind,
    /// Optional free-text note (e.g. "Personal leave").
    pub note: Option<String>,
}

impl Constraint {
    /// Creates a new `Constraint`.
    #[must_use]
    pub const fn new(
        staff_id: StaffId,
        date: Date,
        kind: ConstraintKind,
        note: Option<String>,
    ) -> Self {
        Self {
            staff_id,
            date,
            kind,
            note,
        }
    }
}
