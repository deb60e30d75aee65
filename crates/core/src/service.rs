// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborators the core consumes but does not implement.

use crate::apply::apply;
use crate::clock::Clock;
use crate::command::Command;
use crate::error::CoreError;
use crate::transition::{CommitOutcome, TransitionRequest};
use ad_lifecycle_audit::{Actor, Cause};
use ad_lifecycle_domain::{AdRequest, AdStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Failures reported by the commit service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// The persisted status no longer matches the expected status.
    ConflictingState {
        /// The status actually persisted.
        actual: AdStatus,
    },
    /// The record does not exist.
    NotFound,
    /// Any other backend failure.
    Backend {
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for CommitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConflictingState { actual } => {
                write!(f, "Record status changed concurrently to {actual}")
            }
            Self::NotFound => write!(f, "Record not found"),
            Self::Backend { message } => write!(f, "Backend error: {message}"),
        }
    }
}

impl std::error::Error for CommitError {}

/// Persists validated transitions.
///
/// Implementations must apply a request atomically: compare the stored
/// status with `expected_status`, and only if they match write
/// `next_status`, the submitted fields and the requested audit stamps.
pub trait TransitionCommitService {
    /// Commits one transition and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `CommitError::ConflictingState` if the record is no longer in
    /// the expected status.
    fn commit(&mut self, request: &TransitionRequest) -> Result<AdRequest, CommitError>;
}

/// Validates a command against `record` and hands it to the commit service.
///
/// # Arguments
///
/// * `service` - The commit service
/// * `clock` - Supplies the reference date
/// * `record` - The record as last read
/// * `command` - The action or event to apply
/// * `actor` - The actor requesting the transition
/// * `cause` - The cause or reason for the transition
///
/// # Errors
///
/// Returns an error if:
/// - Validation fails (nothing is sent to the service)
/// - The service reports a conflict; the caller must re-read the record
///   and validate again rather than resubmit the same request
/// - The service fails or returns a record in an unexpected status
pub fn submit<S>(
    service: &mut S,
    clock: &dyn Clock,
    record: &AdRequest,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<CommitOutcome, CoreError>
where
    S: TransitionCommitService + ?Sized,
{
    let request: TransitionRequest = match apply(record, command, clock.today(), actor, cause) {
        Ok(request) => request,
        Err(err) => {
            debug!(ad_id = %record.id, status = %record.status, error = %err, "Transition rejected");
            return Err(err);
        }
    };

    info!(
        ad_id = %request.ad_id,
        trigger = %request.trigger,
        from = %request.expected_status,
        to = %request.next_status,
        "Submitting transition"
    );

    let updated: AdRequest = service.commit(&request).map_err(|err| match err {
        CommitError::ConflictingState { actual } => {
            warn!(
                ad_id = %request.ad_id,
                expected = %request.expected_status,
                actual = %actual,
                "Transition conflicted with a concurrent change"
            );
            CoreError::ConflictingState {
                ad_id: request.ad_id.clone(),
                expected: request.expected_status,
                actual,
            }
        }
        other => CoreError::CommitFailed {
            ad_id: request.ad_id.clone(),
            reason: other.to_string(),
        },
    })?;

    if updated.status != request.next_status {
        return Err(CoreError::CommitFailed {
            ad_id: request.ad_id.clone(),
            reason: format!(
                "service stored status {}, expected {}",
                updated.status, request.next_status
            ),
        });
    }

    info!(ad_id = %request.ad_id, status = %updated.status, "Transition committed");

    Ok(CommitOutcome {
        record: updated,
        audit: request.to_record(),
        fields: request.fields,
    })
}

/// Failure reading the station directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryError(pub String);

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DirectoryError {}

/// A charging station that can display ads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub address: String,
    pub online: bool,
}

/// Lists the stations an ad can be assigned to.
pub trait StationDirectory {
    /// Returns every candidate station.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn stations(&self) -> Result<Vec<Station>, DirectoryError>;
}

/// A station as offered in the review form's picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationChoice {
    #[serde(flatten)]
    pub station: Station,
    pub selected: bool,
}

/// Builds the station picker for a record: online stations first, then
/// by name, with the record's current assignment pre-selected.
///
/// Station ids are opaque here; assigned ids missing from the directory
/// are simply not listed.
///
/// # Errors
///
/// Returns `CoreError::DirectoryUnavailable` if the directory fails.
pub fn station_choices(
    directory: &dyn StationDirectory,
    record: &AdRequest,
) -> Result<Vec<StationChoice>, CoreError> {
    let mut stations: Vec<Station> =
        directory
            .stations()
            .map_err(|err| CoreError::DirectoryUnavailable {
                reason: err.to_string(),
            })?;
    stations.sort_by(|a, b| b.online.cmp(&a.online).then_with(|| a.name.cmp(&b.name)));

    Ok(stations
        .into_iter()
        .map(|station| StationChoice {
            selected: record.station_ids.contains(&station.id),
            station,
        })
        .collect())
}
