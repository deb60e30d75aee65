// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ad request statuses.
//!
//! Legality of moves between statuses lives in [`crate::transitions`];
//! the methods here are thin views over that table.

use crate::action::{AdAction, ExternalEvent};
use crate::error::DomainError;
use crate::transitions;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The status of an ad request.
///
/// Every ad request holds exactly one of these values at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdStatus {
    /// Created by the intake process, waiting for an administrator.
    Submitted,
    /// Picked up by an administrator for review.
    UnderReview,
    /// Approved and priced, waiting for the advertiser to pay.
    PendingPayment,
    /// Payment confirmed, waiting for a schedule.
    Paid,
    /// Dates assigned, waiting for the start date.
    Scheduled,
    /// Showing on stations.
    Running,
    /// Temporarily withdrawn from stations.
    Paused,
    /// Finished its run.
    Completed,
    /// Turned down during review.
    Rejected,
    /// Withdrawn before completion.
    Cancelled,
}

impl AdStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 10] = [
        Self::Submitted,
        Self::UnderReview,
        Self::PendingPayment,
        Self::Paid,
        Self::Scheduled,
        Self::Running,
        Self::Paused,
        Self::Completed,
        Self::Rejected,
        Self::Cancelled,
    ];

    /// Returns the wire representation used by the backend.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::UnderReview => "UNDER_REVIEW",
            Self::PendingPayment => "PENDING_PAYMENT",
            Self::Paid => "PAID",
            Self::Scheduled => "SCHEDULED",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidStatus {
                status: s.to_string(),
            })
    }

    /// Returns true if no action or event can move the ad out of this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected | Self::Cancelled)
    }

    /// Returns true if a record in this status must have stations assigned.
    ///
    /// Every status reached through approval qualifies. Rejected and
    /// cancelled requests may never have been configured.
    #[must_use]
    pub const fn requires_stations(&self) -> bool {
        matches!(
            self,
            Self::PendingPayment
                | Self::Paid
                | Self::Scheduled
                | Self::Running
                | Self::Paused
                | Self::Completed
        )
    }

    /// Returns the operator actions offered for this status, in table order.
    #[must_use]
    pub fn available_actions(self) -> Vec<AdAction> {
        transitions::actions_from(self)
    }

    /// Returns true if `action` is offered for this status.
    #[must_use]
    pub fn permits(self, action: AdAction) -> bool {
        transitions::lookup(self, action).is_some()
    }

    /// Resolves the status reached by applying `action`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the transition table
    /// has no row for this status and action.
    pub fn next_status(self, action: AdAction) -> Result<Self, DomainError> {
        transitions::lookup(self, action)
            .map(|rule| rule.to)
            .ok_or(DomainError::InvalidTransition { from: self, action })
    }

    /// Resolves the status reached when an external event is reported.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEventTransition` if the event cannot
    /// occur in this status.
    pub fn apply_event(self, event: ExternalEvent) -> Result<Self, DomainError> {
        transitions::lookup_event(self, event)
            .map(|rule| rule.to)
            .ok_or(DomainError::InvalidEventTransition { from: self, event })
    }
}

impl FromStr for AdStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for AdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
