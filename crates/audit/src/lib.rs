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
    clippy::all
)]

use ad_lifecycle_domain::{AdAction, AdId, AdStatus, ExternalEvent};
use serde::{Deserialize, Serialize};

/// Represents the entity requesting a transition.
///
/// For operator actions this is the dashboard administrator; for
/// external events it is the payment gateway or the display scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "admin", "payment-gateway", "scheduler").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, webhook ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this transition
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// An audit field the commit service must stamp when applying a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStamp {
    /// Set `reviewed_by` to the acting administrator.
    ReviewedBy,
    /// Set `approved_by` to the acting administrator.
    ApprovedBy,
    /// Set `paid_at` to the commit time.
    PaidAt,
}

/// What moved the ad request: an operator action or an external event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TransitionTrigger {
    Action(AdAction),
    Event(ExternalEvent),
}

impl TransitionTrigger {
    /// Returns the audit fields this trigger stamps.
    #[must_use]
    pub const fn stamps(&self) -> &'static [AuditStamp] {
        match self {
            Self::Action(AdAction::Approve) => &[AuditStamp::ReviewedBy, AuditStamp::ApprovedBy],
            Self::Action(AdAction::Reject) => &[AuditStamp::ReviewedBy],
            Self::Event(ExternalEvent::PaymentConfirmed) => &[AuditStamp::PaidAt],
            Self::Action(_) | Self::Event(_) => &[],
        }
    }

    /// Returns the trigger name as recorded in audit logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Action(action) => action.as_str(),
            Self::Event(event) => event.as_str(),
        }
    }
}

impl std::fmt::Display for TransitionTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable record of one accepted transition.
///
/// Every committed transition must produce exactly one record capturing:
/// - Who requested it (actor)
/// - Why it was requested (cause)
/// - What triggered it (trigger)
/// - The status before and after
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The ad request that moved.
    pub ad_id: AdId,
    /// The actor who requested the transition.
    pub actor: Actor,
    /// The cause or reason for the transition.
    pub cause: Cause,
    /// The action or event that triggered it.
    pub trigger: TransitionTrigger,
    /// The status before the transition.
    pub from: AdStatus,
    /// The status after the transition.
    pub to: AdStatus,
}

impl TransitionRecord {
    /// Creates a new `TransitionRecord`.
    ///
    /// # Arguments
    ///
    /// * `ad_id` - The ad request that moved
    /// * `actor` - The actor who requested the transition
    /// * `cause` - The reason for the transition
    /// * `trigger` - The action or event
    /// * `from` - The status before the transition
    /// * `to` - The status after the transition
    #[must_use]
    pub const fn new(
        ad_id: AdId,
        actor: Actor,
        cause: Cause,
        trigger: TransitionTrigger,
        from: AdStatus,
        to: AdStatus,
    ) -> Self {
        Self {
            ad_id,
            actor,
            cause,
            trigger,
            from,
            to,
        }
    }

    /// Returns the audit fields the commit service must stamp.
    #[must_use]
    pub const fn stamps(&self) -> &'static [AuditStamp] {
        self.trigger.stamps()
    }
}

#[cfg(test)]
mod tests;
