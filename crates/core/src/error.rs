// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ad_lifecycle_domain::{AdAction, AdId, AdStatus, DomainError, ExternalEvent, FieldErrors};

/// Message shown when an action is not offered for the record's status.
pub const ACTION_UNAVAILABLE_MESSAGE: &str = "This action is not available in the current state";

/// Errors that can occur while validating or committing a transition.
///
/// None of these leave a record mutated. `InvalidTransition` and
/// `FieldValidation` are fixed by resubmitting different input;
/// `ConflictingState` requires re-reading the record first.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The action is not offered for the current status.
    InvalidTransition {
        /// The status validated against.
        from: AdStatus,
        /// The requested action.
        action: AdAction,
    },
    /// The external event cannot occur in the current status.
    InvalidEvent {
        /// The status validated against.
        from: AdStatus,
        /// The reported event.
        event: ExternalEvent,
    },
    /// One or more fields failed the action's contract.
    FieldValidation(FieldErrors),
    /// The persisted status changed between validation and commit.
    ConflictingState {
        /// The record that moved underneath us.
        ad_id: AdId,
        /// The status the transition was validated against.
        expected: AdStatus,
        /// The status actually persisted.
        actual: AdStatus,
    },
    /// The commit service failed for a reason other than a conflict.
    CommitFailed {
        /// The record being committed.
        ad_id: AdId,
        /// A description of the failure.
        reason: String,
    },
    /// The station directory could not be read.
    DirectoryUnavailable {
        /// A description of the failure.
        reason: String,
    },
    /// Any other domain rule was violated.
    DomainViolation(DomainError),
}

impl CoreError {
    /// Renders the error as the keyed map shown to operators.
    ///
    /// State machine rejections use the `_transition` key, field failures
    /// keep their own keys, and everything else lands under `_form`.
    #[must_use]
    pub fn to_field_errors(&self) -> FieldErrors {
        let mut errors: FieldErrors = FieldErrors::new();
        match self {
            Self::InvalidTransition { .. } | Self::InvalidEvent { .. } => {
                errors.add_key(FieldErrors::TRANSITION_KEY, ACTION_UNAVAILABLE_MESSAGE);
            }
            Self::FieldValidation(field_errors) => errors.merge(field_errors.clone()),
            Self::ConflictingState { .. }
            | Self::CommitFailed { .. }
            | Self::DirectoryUnavailable { .. }
            | Self::DomainViolation(_) => errors.add_form(self.to_string()),
        }
        errors
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, action } => {
                write!(f, "Invalid transition: '{action}' is not permitted from {from}")
            }
            Self::InvalidEvent { from, event } => {
                write!(f, "Invalid transition: '{event}' cannot occur in {from}")
            }
            Self::FieldValidation(errors) => write!(f, "Field validation failed: {errors}"),
            Self::ConflictingState {
                ad_id,
                expected,
                actual,
            } => write!(
                f,
                "Ad {ad_id} changed concurrently: expected {expected}, found {actual}"
            ),
            Self::CommitFailed { ad_id, reason } => {
                write!(f, "Failed to commit transition for ad {ad_id}: {reason}")
            }
            Self::DirectoryUnavailable { reason } => {
                write!(f, "Station directory unavailable: {reason}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidTransition { from, action } => {
                Self::InvalidTransition { from, action }
            }
            DomainError::InvalidEventTransition { from, event } => {
                Self::InvalidEvent { from, event }
            }
            other => Self::DomainViolation(other),
        }
    }
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        Self::FieldValidation(errors)
    }
}
