// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for UI gating.
//!
//! Capabilities tell the dashboard which action buttons to enable without
//! leaking the transition table. They are advisory only and do not
//! replace validation on submit.

use crate::request_response::{ActionCapabilities, Capability};
use ad_lifecycle::available_actions;
use ad_lifecycle_domain::{AdAction, AdStatus};

/// Computes the action capabilities for an ad in `status`.
///
/// Derived solely from [`available_actions`], so a capability is
/// `Allowed` exactly when the action is offered.
#[must_use]
pub fn compute_action_capabilities(status: AdStatus) -> ActionCapabilities {
    let offered: Vec<AdAction> = available_actions(status);
    let capability = |action: AdAction| Capability::from_bool(offered.contains(&action));

    ActionCapabilities {
        can_approve: capability(AdAction::Approve),
        can_reject: capability(AdAction::Reject),
        can_schedule: capability(AdAction::Schedule),
        can_update_schedule: capability(AdAction::UpdateSchedule),
        can_pause: capability(AdAction::Pause),
        can_resume: capability(AdAction::Resume),
        can_complete: capability(AdAction::Complete),
        can_cancel: capability(AdAction::Cancel),
    }
}
