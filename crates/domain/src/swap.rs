// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift-swap requests and their status lifecycle.
//!
//! A swap moves from `Requested` through `Offered` and `AdminApproval` to a
//! terminal outcome. The engine drives the offer submission and the
//! admin-approval edge; the accepted-offer transition (`Offered` →
//! `AdminApproval`) belongs to an external collaborator.

use crate::error::DomainError;
use crate::types::{OfferId, ShiftId, ShiftPeriod, StaffId, SwapId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Status of a swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapStatus {
    /// The requester has asked to give up the shift; no offers yet.
    Requested,
    /// At least one colleague has offered to take the shift.
    Offered,
    /// The requester accepted an offer; awaiting admin decision.
    AdminApproval,
    /// Approved by an admin. Terminal.
    Approved,
    /// Rejected by an admin. Terminal.
    Rejected,
    /// Withdrawn by the requester. Terminal.
    Canceled,
}

impl SwapStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Offered => "OFFERED",
            Self::AdminApproval => "ADMIN_APPROVAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Canceled)
    }

    /// Validates a transition from this status to another.
    ///
    /// The full machine is:
    /// - `Requested` → `Offered` (first offer submitted)
    /// - `Offered` → `AdminApproval` (requester accepts an offer)
    /// - `AdminApproval` → `Approved` | `Rejected` (admin decision)
    /// - `Requested` | `Offered` → `Canceled` (requester withdraws)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSwapTransition` if the transition is
    /// not permitted.
    pub fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidSwapTransition {
                from: *self,
                to: target,
            });
        }

        let valid = match self {
            Self::Requested => matches!(target, Self::Offered | Self::Canceled),
            Self::Offered => matches!(target, Self::AdminApproval | Self::Canceled),
            Self::AdminApproval => matches!(target, Self::Approved | Self::Rejected),
            Self::Approved | Self::Rejected | Self::Canceled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidSwapTransition {
                from: *self,
                to: target,
            })
        }
    }
}

impl FromStr for SwapStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REQUESTED" => Ok(Self::Requested),
            "OFFERED" => Ok(Self::Offered),
            "ADMIN_APPROVAL" => Ok(Self::AdminApproval),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidSwapStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A colleague's offer to take over the requested shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOffer {
    /// Ledger-issued identifier.
    pub id: OfferId,
    /// The offering staff member.
    pub staff_id: StaffId,
    /// Display name of the offering staff member (denormalized).
    pub staff_name: String,
}

impl SwapOffer {
    /// Creates a new `SwapOffer`.
    #[must_use]
    pub const fn new(id: OfferId, staff_id: StaffId, staff_name: String) -> Self {
        Self {
            id,
            staff_id,
            staff_name,
        }
    }
}

/// A request to trade away one shift.
///
/// The shift date and period are denormalized onto the request for display,
/// so the swap board renders without resolving shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Identifier of the swap request.
    pub id: SwapId,
    /// The shift being traded away.
    pub shift_id: ShiftId,
    /// The staff member requesting the trade.
    pub requester_id: StaffId,
    /// Display name of the requester (denormalized).
    pub requester_name: String,
    /// Date of the shift (denormalized).
    pub shift_date: Date,
    /// Period of the shift (denormalized).
    pub shift_period: ShiftPeriod,
    /// Current status.
    pub status: SwapStatus,
    /// Offers received, in submission order.
    pub offers: Vec<SwapOffer>,
}

impl SwapRequest {
    /// Creates a new swap request in the initial `Requested` status.
    #[must_use]
    pub const fn new(
        id: SwapId,
        shift_id: ShiftId,
        requester_id: StaffId,
        requester_name: String,
        shift_date: Date,
        shift_period: ShiftPeriod,
    ) -> Self {
        Self {
            id,
            shift_id,
            requester_id,
            requester_name,
            shift_date,
            shift_period,
            status: SwapStatus::Requested,
            offers: Vec::new(),
        }
    }

    /// Returns true if the staff member has submitted an offer on this swap.
    #[must_use]
    pub fn has_offer_from(&self, staff_id: &StaffId) -> bool {
        self.offers.iter().any(|o| &o.staff_id == staff_id)
    }

    /// Returns true if the staff member is involved in this swap, either as
    /// the requester or as an offerer. Used for worker-scoped listing.
    #[must_use]
    pub fn involves(&self, staff_id: &StaffId) -> bool {
        &self.requester_id == staff_id || self.has_offer_from(staff_id)
    }
}
