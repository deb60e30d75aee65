// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.

use ad_lifecycle::{CommitOutcome, StationChoice};
use ad_lifecycle_domain::{AdAction, AdFields, AdId, AdStatus, FieldErrors};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// An action submitted from the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionRequest {
    /// The action name, e.g. `reject` or `update-schedule`.
    pub action: String,
    /// The raw form values. Missing or `null` means no fields.
    #[serde(default)]
    pub fields: serde_json::Value,
}

impl ActionRequest {
    /// Creates a request with no fields.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: serde_json::Value::Null,
        }
    }

    /// Replaces the raw fields.
    #[must_use]
    pub fn with_fields(mut self, fields: serde_json::Value) -> Self {
        self.fields = fields;
        self
    }
}

/// The verdict for an action request.
///
/// Serializes as `{"ok": true, "next_status": ..., "normalized_fields": ...}`
/// or `{"ok": false, "errors": {...}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResponse {
    /// The action may be submitted.
    Accepted {
        next_status: AdStatus,
        normalized_fields: AdFields,
    },
    /// The action was refused; errors are keyed by field, `_form` or
    /// `_transition`.
    Rejected { errors: FieldErrors },
}

impl ActionResponse {
    /// Returns true if the action was accepted.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the errors of a rejected response.
    #[must_use]
    pub const fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { errors } => Some(errors),
        }
    }
}

impl Serialize for ActionResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Accepted {
                next_status,
                normalized_fields,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("next_status", next_status)?;
                map.serialize_entry("normalized_fields", normalized_fields)?;
                map.end()
            }
            Self::Rejected { errors } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("errors", errors)?;
                map.end()
            }
        }
    }
}

/// The result of performing an action against a stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// The verdict shown to the operator.
    pub response: ActionResponse,
    /// The persisted record and its audit entry, when the commit succeeded.
    pub committed: Option<CommitOutcome>,
}

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(matches!(self, Self::Allowed))
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// Which action buttons the dashboard should enable for an ad.
///
/// Advisory only; every submission is validated again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCapabilities {
    pub can_approve: Capability,
    pub can_reject: Capability,
    pub can_schedule: Capability,
    pub can_update_schedule: Capability,
    pub can_pause: Capability,
    pub can_resume: Capability,
    pub can_complete: Capability,
    pub can_cancel: Capability,
}

impl ActionCapabilities {
    /// Returns the capability for one action.
    #[must_use]
    pub const fn get(&self, action: AdAction) -> Capability {
        match action {
            AdAction::Approve => self.can_approve,
            AdAction::Reject => self.can_reject,
            AdAction::Schedule => self.can_schedule,
            AdAction::UpdateSchedule => self.can_update_schedule,
            AdAction::Pause => self.can_pause,
            AdAction::Resume => self.can_resume,
            AdAction::Complete => self.can_complete,
            AdAction::Cancel => self.can_cancel,
        }
    }
}

/// Response for listing the actions offered for a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableActionsResponse {
    pub status: AdStatus,
    /// Offered actions in transition table order.
    pub actions: Vec<AdAction>,
    pub capabilities: ActionCapabilities,
}

/// Response for the review form's station picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPickerResponse {
    pub ad_id: AdId,
    pub stations: Vec<StationChoice>,
}
