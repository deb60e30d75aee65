// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{AdAction, ExternalEvent};
use crate::status::AdStatus;

/// Errors raised by the ad lifecycle domain rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The action is not offered for the current status.
    InvalidTransition {
        /// The status the ad request is in.
        from: AdStatus,
        /// The action that was requested.
        action: AdAction,
    },
    /// An external event arrived for a status that cannot accept it.
    InvalidEventTransition {
        /// The status the ad request is in.
        from: AdStatus,
        /// The external event that was reported.
        event: ExternalEvent,
    },
    /// A status string does not name a known status.
    InvalidStatus {
        /// The rejected status string.
        status: String,
    },
    /// An action string does not name a known action.
    InvalidAction {
        /// The rejected action string.
        action: String,
    },
    /// An event string does not name a known external event.
    InvalidEvent {
        /// The rejected event string.
        event: String,
    },
    /// A stored ad request breaks a data model invariant.
    InvariantViolation {
        /// The field holding the offending value.
        field: &'static str,
        /// A human-readable description of the violation.
        message: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, action } => {
                write!(
                    f,
                    "Action '{action}' is not available for ads in status {from}"
                )
            }
            Self::InvalidEventTransition { from, event } => {
                write!(
                    f,
                    "Event '{event}' cannot be applied to ads in status {from}"
                )
            }
            Self::InvalidStatus { status } => write!(f, "Invalid ad status: '{status}'"),
            Self::InvalidAction { action } => write!(f, "Invalid ad action: '{action}'"),
            Self::InvalidEvent { event } => write!(f, "Invalid external event: '{event}'"),
            Self::InvariantViolation { field, message } => {
                write!(f, "Invariant violated on '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
