// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An operator-initiated intent against an ad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdAction {
    /// Accept the reviewed request and ask the advertiser to pay.
    Approve,
    /// Turn the request down with a reason.
    Reject,
    /// Assign display dates to a paid request.
    Schedule,
    /// Amend the dates of a scheduled request.
    UpdateSchedule,
    /// Withdraw a running ad from stations.
    Pause,
    /// Put a paused ad back on stations.
    Resume,
    /// Close a running or paused ad.
    Complete,
    /// Withdraw the request before completion.
    Cancel,
}

impl AdAction {
    /// Every operator action.
    pub const ALL: [Self; 8] = [
        Self::Approve,
        Self::Reject,
        Self::Schedule,
        Self::UpdateSchedule,
        Self::Pause,
        Self::Resume,
        Self::Complete,
        Self::Cancel,
    ];

    /// Returns the action name used by the dashboard.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Schedule => "schedule",
            Self::UpdateSchedule => "update-schedule",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        // The dashboard historically sent both `update-schedule` and `update_schedule`.
        let normalized: String = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidAction {
                action: s.to_string(),
            })
    }
}

impl FromStr for AdAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for AdAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status change that originates outside the dashboard.
///
/// External events are never offered to operators; the commit service
/// reports them when the payment gateway or the display scheduler fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalEvent {
    /// The advertiser's payment was confirmed.
    PaymentConfirmed,
    /// The scheduled start date was reached.
    CampaignStarted,
}

impl ExternalEvent {
    /// Every external event.
    pub const ALL: [Self; 2] = [Self::PaymentConfirmed, Self::CampaignStarted];

    /// Returns the event name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentConfirmed => "payment-confirmed",
            Self::CampaignStarted => "campaign-started",
        }
    }
}

impl FromStr for ExternalEvent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidEvent {
                event: s.to_string(),
            })
    }
}

impl std::fmt::Display for ExternalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
