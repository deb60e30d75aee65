// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ad_lifecycle_domain::{AdAction, AdFields, ExternalEvent};

/// A command represents operator or system intent as data only.
///
/// Commands are the only way to request a status change.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// An operator action from the dashboard.
    Perform {
        /// The requested action.
        action: AdAction,
        /// The candidate fields submitted with it.
        fields: AdFields,
    },
    /// A status change reported by the payment gateway or scheduler.
    Report {
        /// The external event.
        event: ExternalEvent,
    },
}

impl Command {
    /// An operator action with no payload.
    #[must_use]
    pub fn perform(action: AdAction) -> Self {
        Self::Perform {
            action,
            fields: AdFields::new(),
        }
    }
}
