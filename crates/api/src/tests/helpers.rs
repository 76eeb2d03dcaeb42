// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::guard::AuthenticatedActor;
use crate::rate_limit::RateLimiter;
use clinic_rota::Ledger;
use clinic_rota_domain::{
    CohortTag, OrgRole, Requirements, Schedule, ScheduleId, Shift, ShiftId, ShiftPeriod,
    StaffId, StaffMember, StaffRole, SwapId, SwapRequest, SwapStatus,
};
use time::OffsetDateTime;
use time::macros::{date, time};

pub fn now() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

pub fn create_test_schedule() -> Schedule {
    let shifts: Vec<Shift> = vec![
        Shift::new(
            ShiftId::new("s-2026-03-02-AM"),
            date!(2026 - 03 - 02),
            ShiftPeriod::Morning,
            time!(09:00),
            time!(15:00),
            Requirements::new(1, 2),
        ),
        Shift::new(
            ShiftId::new("s-2026-03-02-PM"),
            date!(2026 - 03 - 02),
            ShiftPeriod::Evening,
            time!(15:00),
            time!(21:00),
            Requirements::new(1, 2),
        ),
    ];

    Schedule::new(
        ScheduleId::new("sch_1"),
        String::from("Test Cycle"),
        date!(2026 - 03 - 02),
        date!(2026 - 03 - 15),
        date!(2026 - 03 - 01),
        shifts,
    )
}

fn staff(id: &str, name: &str, org_role: OrgRole, staff_role: StaffRole) -> StaffMember {
    StaffMember::new(
        StaffId::new(id),
        name.to_string(),
        format!("{id}@clinic.example"),
        org_role,
        staff_role,
        Some(CohortTag::new("A_STABLE")),
    )
}

pub fn create_test_roster() -> Vec<StaffMember> {
    vec![
        staff("u1", "Admin User", OrgRole::Admin, StaffRole::Vet),
        staff("u2", "Vet One", OrgRole::Worker, StaffRole::Vet),
        staff("u4", "Assistant One", OrgRole::Worker, StaffRole::Assistant),
        staff("u5", "Assistant Two", OrgRole::Worker, StaffRole::Assistant),
    ]
}

pub fn create_test_ledger() -> Ledger {
    Ledger::new(create_test_schedule(), create_test_roster())
}

/// A ledger with one swap from u4 in the given status.
pub fn create_test_ledger_with_swap(status: SwapStatus) -> Ledger {
    let mut ledger: Ledger = create_test_ledger();
    let mut swap: SwapRequest = SwapRequest::new(
        SwapId::new("sw1"),
        ShiftId::new("s-2026-03-02-AM"),
        StaffId::new("u4"),
        String::from("Assistant One"),
        date!(2026 - 03 - 02),
        ShiftPeriod::Morning,
    );
    swap.status = status;
    ledger.swaps.push(swap);
    ledger
}

pub fn admin_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(
        StaffId::new("u1"),
        String::from("Admin User"),
        OrgRole::Admin,
        StaffRole::Vet,
        Some(CohortTag::new("A_STABLE")),
    )
}

pub fn worker_actor(id: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(
        StaffId::new(id),
        format!("Worker {id}"),
        OrgRole::Worker,
        StaffRole::Assistant,
        Some(CohortTag::new("B_CANARY")),
    )
}

/// A limiter with no configured limits, for tests not about rate limiting.
pub fn unlimited() -> RateLimiter {
    RateLimiter::new(std::collections::HashMap::new())
}
