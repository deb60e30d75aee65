// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ad lifecycle transition table.
//!
//! Validation, the dashboard's action lists and the tests all read
//! from [`TRANSITIONS`] and [`EVENT_TRANSITIONS`]; nothing else encodes
//! which status may move where.

use crate::action::{AdAction, ExternalEvent};
use crate::status::AdStatus;
use serde::Serialize;

/// One row of the operator transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionRule {
    /// Statuses from which the action is offered.
    pub from: &'static [AdStatus],
    /// The action that triggers the transition.
    pub action: AdAction,
    /// The status reached.
    pub to: AdStatus,
}

/// One row of the external event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventRule {
    /// The only status in which the event is accepted.
    pub from: AdStatus,
    /// The external trigger.
    pub event: ExternalEvent,
    /// The status reached.
    pub to: AdStatus,
}

/// Operator transitions.
pub static TRANSITIONS: &[TransitionRule] = &[
    TransitionRule {
        from: &[AdStatus::Submitted],
        action: AdAction::Approve,
        to: AdStatus::PendingPayment,
    },
    TransitionRule {
        from: &[AdStatus::Submitted, AdStatus::UnderReview],
        action: AdAction::Reject,
        to: AdStatus::Rejected,
    },
    TransitionRule {
        from: &[
            AdStatus::Submitted,
            AdStatus::UnderReview,
            AdStatus::PendingPayment,
        ],
        action: AdAction::Cancel,
        to: AdStatus::Cancelled,
    },
    TransitionRule {
        from: &[AdStatus::Paid],
        action: AdAction::Schedule,
        to: AdStatus::Scheduled,
    },
    // Date amendment; the status is unchanged.
    TransitionRule {
        from: &[AdStatus::Scheduled],
        action: AdAction::UpdateSchedule,
        to: AdStatus::Scheduled,
    },
    TransitionRule {
        from: &[AdStatus::Running],
        action: AdAction::Pause,
        to: AdStatus::Paused,
    },
    TransitionRule {
        from: &[AdStatus::Paused],
        action: AdAction::Resume,
        to: AdStatus::Running,
    },
    TransitionRule {
        from: &[AdStatus::Running, AdStatus::Paused],
        action: AdAction::Complete,
        to: AdStatus::Completed,
    },
    TransitionRule {
        from: &[AdStatus::Running, AdStatus::Paused],
        action: AdAction::Cancel,
        to: AdStatus::Cancelled,
    },
];

/// Transitions driven by the payment gateway and the display scheduler.
pub static EVENT_TRANSITIONS: &[EventRule] = &[
    EventRule {
        from: AdStatus::PendingPayment,
        event: ExternalEvent::PaymentConfirmed,
        to: AdStatus::Paid,
    },
    EventRule {
        from: AdStatus::Scheduled,
        event: ExternalEvent::CampaignStarted,
        to: AdStatus::Running,
    },
];

/// Finds the row that permits `action` from `from`.
///
/// `cancel` appears in two rows with disjoint source sets, so at most one
/// row ever matches.
#[must_use]
pub fn lookup(from: AdStatus, action: AdAction) -> Option<&'static TransitionRule> {
    TRANSITIONS
        .iter()
        .find(|rule| rule.action == action && rule.from.contains(&from))
}

/// Finds the row that accepts `event` in `from`.
#[must_use]
pub fn lookup_event(from: AdStatus, event: ExternalEvent) -> Option<&'static EventRule> {
    EVENT_TRANSITIONS
        .iter()
        .find(|rule| rule.event == event && rule.from == from)
}

/// Lists the actions offered for `from`, in table order, without duplicates.
#[must_use]
pub fn actions_from(from: AdStatus) -> Vec<AdAction> {
    let mut actions: Vec<AdAction> = Vec::new();
    for rule in TRANSITIONS.iter().filter(|rule| rule.from.contains(&from)) {
        if !actions.contains(&rule.action) {
            actions.push(rule.action);
        }
    }
    actions
}
