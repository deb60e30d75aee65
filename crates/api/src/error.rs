// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use ad_lifecycle::CoreError;
use ad_lifecycle_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These cover requests the boundary cannot turn into a verdict at all.
/// Ordinary rejections (an unavailable action, a bad field) are not
/// errors here; they come back as [`crate::ActionResponse::Rejected`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The `fields` member was present but not a JSON object.
    #[error("Fields must be a JSON object, got {found}")]
    FieldsNotObject {
        /// The JSON type that was supplied.
        found: &'static str,
    },

    /// A status string did not name a known status.
    #[error("Invalid ad status: '{status}'")]
    InvalidStatus { status: String },

    /// An event name did not name a known external event.
    #[error("Unknown external event: '{event}'")]
    UnknownEvent { event: String },

    /// The external event cannot occur in the record's current status.
    #[error("Event rejected: {message}")]
    EventRejected { message: String },

    /// The record changed between read and commit.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The commit service failed.
    #[error("Commit failed: {message}")]
    CommitFailed { message: String },

    /// The station directory could not be read.
    #[error("Station directory unavailable: {message}")]
    DirectoryUnavailable { message: String },

    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatus { status } => ApiError::InvalidStatus { status },
        DomainError::InvalidEvent { event } => ApiError::UnknownEvent { event },
        DomainError::InvalidEventTransition { .. } => ApiError::EventRejected {
            message: err.to_string(),
        },
        DomainError::InvalidTransition { .. }
        | DomainError::InvalidAction { .. }
        | DomainError::InvariantViolation { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// Used where a failure cannot be shown as a keyed form error, such as
/// events reported by the payment or scheduling backends.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidEvent { .. } | CoreError::InvalidTransition { .. } => {
            ApiError::EventRejected {
                message: err.to_string(),
            }
        }
        CoreError::ConflictingState { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        CoreError::CommitFailed { ad_id, reason } => ApiError::CommitFailed {
            message: format!("ad {ad_id}: {reason}"),
        },
        CoreError::DirectoryUnavailable { reason } => {
            ApiError::DirectoryUnavailable { message: reason }
        }
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::FieldValidation(errors) => ApiError::Internal {
            message: errors.to_string(),
        },
    }
}
