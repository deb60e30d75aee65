// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ad_lifecycle_audit::{Actor, AuditStamp, Cause, TransitionRecord, TransitionTrigger};
use ad_lifecycle_domain::{AdAction, AdFields, AdId, AdRequest, AdStatus};
use serde::Serialize;

/// The verdict for an accepted `(status, action, fields)` triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    /// The status validated against.
    pub from: AdStatus,
    /// The accepted action.
    pub action: AdAction,
    /// The status the record moves to once committed.
    pub next_status: AdStatus,
    /// The fields to submit, stripped to the action's contract.
    pub normalized_fields: AdFields,
}

/// A validated transition handed to the commit service.
///
/// The service must check that the record is still in
/// `expected_status`, apply `next_status` and `fields`, and stamp every
/// field listed in `stamps`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRequest {
    pub ad_id: AdId,
    pub expected_status: AdStatus,
    pub trigger: TransitionTrigger,
    pub next_status: AdStatus,
    pub fields: AdFields,
    pub stamps: Vec<AuditStamp>,
    pub actor: Actor,
    pub cause: Cause,
}

impl TransitionRequest {
    /// Builds the audit record describing this request.
    #[must_use]
    pub fn to_record(&self) -> TransitionRecord {
        TransitionRecord::new(
            self.ad_id.clone(),
            self.actor.clone(),
            self.cause.clone(),
            self.trigger,
            self.expected_status,
            self.next_status,
        )
    }
}

/// The result of a successful commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    /// The record as persisted after the transition.
    pub record: AdRequest,
    /// The normalized fields written with the transition.
    pub fields: AdFields,
    /// The audit record of the transition.
    pub audit: TransitionRecord,
}
