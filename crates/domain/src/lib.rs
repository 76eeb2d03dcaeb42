// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod constraint;
mod error;
mod schedule;
mod shift;
mod swap;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use constraint::Constraint;
pub use error::DomainError;
pub use schedule::Schedule;
pub use shift::{Assignment, Requirements, Shift};
pub use swap::{SwapOffer, SwapRequest, SwapStatus};
pub use types::{
    AssignmentId, AssignmentOrigin, CohortTag, ConstraintKind, OfferId, OrgRole, ScheduleId,
    ScheduleStatus, ShiftId, ShiftPeriod, StaffId, StaffMember, StaffRole, SwapId,
};
pub use validation::{has_open_slot, is_unavailable};
