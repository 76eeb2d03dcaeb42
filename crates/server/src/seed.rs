// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo-cycle seeding.
//!
//! The engine never creates shifts; a cycle generator hands it a populated
//! ledger. This module is that generator for the demo deployment: a
//! two-week cycle starting on the Sunday of the current week, morning and
//! evening shifts, closed Saturdays, no evening shift on Fridays, and a
//! small roster with a couple of starter constraints and one swap awaiting
//! approval.
//!
//! Cohort tags are assigned here, at the edge: the engine treats them as
//! opaque and only propagates them into telemetry.

use clinic_rota::Ledger;
use clinic_rota_domain::{
    CohortTag, Constraint, ConstraintKind, OfferId, OrgRole, Requirements, Schedule, ScheduleId,
    Shift, ShiftId, ShiftPeriod, StaffId, StaffMember, StaffRole, SwapId, SwapOffer, SwapRequest,
    SwapStatus,
};
use time::{Date, Duration, Weekday};
use time::macros::time;

/// Number of days the demo cycle spans.
const CYCLE_DAYS: i64 = 14;

/// Builds the demo ledger for the cycle containing `today`.
#[must_use]
pub fn demo_ledger(today: Date) -> Ledger {
    let start: Date = start_of_week(today);
    let schedule: Schedule = demo_schedule(start, today);
    let roster: Vec<StaffMember> = demo_roster();
    let constraints: Vec<Constraint> = demo_constraints(start);
    let swaps: Vec<SwapRequest> = demo_swaps(today);

    Ledger::with_seed(schedule, roster, constraints, swaps)
}

/// The Sunday on or before the given date.
fn start_of_week(date: Date) -> Date {
    let back: i64 = i64::from(date.weekday().number_days_from_sunday());
    date.saturating_sub(Duration::days(back))
}

fn demo_schedule(start: Date, today: Date) -> Schedule {
    let mut shifts: Vec<Shift> = Vec::new();

    for offset in 0..CYCLE_DAYS {
        let date: Date = start.saturating_add(Duration::days(offset));
        if date.weekday() == Weekday::Saturday {
            // Clinic closed on Saturdays
            continue;
        }

        shifts.push(Shift::new(
            ShiftId::new(&format!("s-{date}-AM")),
            date,
            ShiftPeriod::Morning,
            time!(09:00),
            time!(15:00),
            Requirements::new(1, 2),
        ));

        // Short day on Fridays: no evening shift
        if date.weekday() != Weekday::Friday {
            shifts.push(Shift::new(
                ShiftId::new(&format!("s-{date}-PM")),
                date,
                ShiftPeriod::Evening,
                time!(15:00),
                time!(21:00),
                Requirements::new(1, 2),
            ));
        }
    }

    Schedule::new(
        ScheduleId::new("sch_1"),
        String::from("Current Cycle"),
        start,
        start.saturating_add(Duration::days(CYCLE_DAYS - 1)),
        today.saturating_add(Duration::days(2)),
        shifts,
    )
}

fn demo_roster() -> Vec<StaffMember> {
    vec![
        member("u1", "Admin User", OrgRole::Admin, StaffRole::Vet),
        member("u2", "Vet User 1", OrgRole::Worker, StaffRole::Vet),
        member("u3", "Vet User 2", OrgRole::Worker, StaffRole::Vet),
        member("u4", "Assistant 1", OrgRole::Worker, StaffRole::Assistant),
        member("u5", "Assistant 2", OrgRole::Worker, StaffRole::Assistant),
        member("u6", "Assistant 3", OrgRole::Worker, StaffRole::Assistant),
        member("u7", "Assistant 4", OrgRole::Worker, StaffRole::Assistant),
    ]
}

fn member(id: &str, name: &str, org_role: OrgRole, staff_role: StaffRole) -> StaffMember {
    StaffMember::new(
        StaffId::new(id),
        name.to_string(),
        format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        org_role,
        staff_role,
        Some(cohort_for(id)),
    )
}

/// Deterministic cohort split so the same member always lands in the same
/// group across restarts. This strategy lives at the seed edge and is
/// swappable without touching the engine.
fn cohort_for(id: &str) -> CohortTag {
    let sum: u32 = id.chars().map(u32::from).sum();
    if sum % 2 == 0 {
        CohortTag::new("A_STABLE")
    } else {
        CohortTag::new("B_CANARY")
    }
}

fn demo_constraints(start: Date) -> Vec<Constraint> {
    vec![
        Constraint::new(
            StaffId::new("u2"),
            start.saturating_add(Duration::days(1)),
            ConstraintKind::MorningOnly,
            None,
        ),
        Constraint::new(
            StaffId::new("u4"),
            start.saturating_add(Duration::days(2)),
            ConstraintKind::AllDay,
            Some(String::from("Personal leave")),
        ),
    ]
}

fn demo_swaps(today: Date) -> Vec<SwapRequest> {
    let shift_date: Date = today.saturating_add(Duration::days(3));
    let mut swap: SwapRequest = SwapRequest::new(
        SwapId::new("sw1"),
        ShiftId::new(&format!("s-{shift_date}-AM")),
        StaffId::new("u4"),
        String::from("Assistant 1"),
        shift_date,
        ShiftPeriod::Morning,
    );
    swap.status = SwapStatus::AdminApproval;
    swap.offers.push(SwapOffer::new(
        OfferId::new(1),
        StaffId::new("u5"),
        String::from("Assistant 2"),
    ));
    vec![swap]
}
