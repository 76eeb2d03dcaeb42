// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Ledger;
use clinic_rota_domain::{
    CohortTag, OrgRole, Requirements, Schedule, ScheduleId, Shift, ShiftId, ShiftPeriod,
    StaffId, StaffMember, StaffRole, SwapId, SwapRequest,
};
use time::macros::{date, time};

/// Two shifts on one day plus a morning shift the next day, each requiring
/// 1 vet and 2 assistants.
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
        Shift::new(
            ShiftId::new("s-2026-03-03-AM"),
            date!(2026 - 03 - 03),
            ShiftPeriod::Morning,
            time!(09:00),
            time!(15:00),
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

/// One admin vet, two worker vets, three worker assistants, roster order
/// u1..u6.
pub fn create_test_roster() -> Vec<StaffMember> {
    vec![
        staff("u1", "Admin User", OrgRole::Admin, StaffRole::Vet),
        staff("u2", "Vet One", OrgRole::Worker, StaffRole::Vet),
        staff("u3", "Vet Two", OrgRole::Worker, StaffRole::Vet),
        staff("u4", "Assistant One", OrgRole::Worker, StaffRole::Assistant),
        staff("u5", "Assistant Two", OrgRole::Worker, StaffRole::Assistant),
        staff("u6", "Assistant Three", OrgRole::Worker, StaffRole::Assistant),
    ]
}

pub fn staff(id: &str, name: &str, org_role: OrgRole, staff_role: StaffRole) -> StaffMember {
    StaffMember::new(
        StaffId::new(id),
        name.to_string(),
        format!("{id}@clinic.example"),
        org_role,
        staff_role,
        Some(CohortTag::new("A_STABLE")),
    )
}

pub fn create_test_ledger() -> Ledger {
    Ledger::new(create_test_schedule(), create_test_roster())
}

/// A swap from u4 for the first morning shift, in the initial Requested
/// status.
pub fn create_test_swap() -> SwapRequest {
    SwapRequest::new(
        SwapId::new("sw1"),
        ShiftId::new("s-2026-03-02-AM"),
        StaffId::new("u4"),
        String::from("Assistant One"),
        date!(2026 - 03 - 02),
        ShiftPeriod::Morning,
    )
}
