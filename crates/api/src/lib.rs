// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transport-agnostic boundary between the dashboard and the lifecycle
//! core.
//!
//! Requests arrive as loosely typed JSON; this crate converts them to
//! domain types, runs the core, and shapes the verdict the dashboard
//! renders.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod capabilities;
mod error;
mod parse;
mod request_response;

#[cfg(test)]
mod tests;

use ad_lifecycle::{
    Clock, Command, CommitOutcome, CoreError, StationDirectory, Transition,
    TransitionCommitService, available_actions, station_choices, submit, validate_and_transition,
    validate_for_record,
};
use ad_lifecycle_audit::{Actor, Cause};
use ad_lifecycle_domain::{
    AdAction, AdFields, AdRequest, AdStatus, ExternalEvent, FieldErrors, ValidationContext,
};
use tracing::{debug, info};

pub use capabilities::compute_action_capabilities;
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use parse::{parse_date, parse_fields};
pub use request_response::{
    ActionCapabilities, ActionOutcome, ActionRequest, ActionResponse, AvailableActionsResponse,
    Capability, StationPickerResponse,
};

/// Parses a status string as sent by the backend.
///
/// # Errors
///
/// Returns `ApiError::InvalidStatus` if the string names no status.
pub fn parse_status(status: &str) -> Result<AdStatus, ApiError> {
    status.parse::<AdStatus>().map_err(translate_domain_error)
}

/// Lists the actions offered for `status`, with matching capabilities.
#[must_use]
pub fn list_available_actions(status: AdStatus) -> AvailableActionsResponse {
    AvailableActionsResponse {
        status,
        actions: available_actions(status),
        capabilities: compute_action_capabilities(status),
    }
}

/// Dry-runs an action request against a status.
///
/// Nothing is committed. The state machine is consulted before any field
/// is looked at, so an unavailable action is reported alone under
/// `_transition`. Field conversion errors are reported together with rule
/// errors; a field that failed conversion keeps its conversion message.
///
/// # Arguments
///
/// * `status` - The record's current status
/// * `request` - The submitted action and raw fields
/// * `context` - The reference date and the stored schedule
///
/// # Errors
///
/// Returns `ApiError::FieldsNotObject` if `fields` is not a JSON object.
pub fn evaluate_action(
    status: AdStatus,
    request: &ActionRequest,
    context: &ValidationContext,
) -> Result<ActionResponse, ApiError> {
    let (action, fields, parse_errors) = match prepare(status, request)? {
        Prepared::Ready {
            action,
            fields,
            parse_errors,
        } => (action, fields, parse_errors),
        Prepared::Refused(response) => return Ok(response),
    };

    let verdict: Result<Transition, CoreError> =
        validate_and_transition(status, action, &fields, context);
    Ok(into_response(verdict, parse_errors))
}

/// Validates an action request against a stored record and commits it.
///
/// The returned [`ActionOutcome`] carries the verdict for the operator
/// and, when the commit went through, the persisted record and its audit
/// entry. A concurrent change is reported as a `_form` error asking the
/// operator to reload.
///
/// # Arguments
///
/// * `service` - The commit service
/// * `clock` - Supplies the reference date
/// * `record` - The record as last read
/// * `request` - The submitted action and raw fields
/// * `actor` - The operator performing the action
/// * `cause` - The cause or reason for the action
///
/// # Errors
///
/// Returns an error if:
/// - `fields` is not a JSON object
/// - The commit service fails for a reason other than a conflict
pub fn perform_action<S>(
    service: &mut S,
    clock: &dyn Clock,
    record: &AdRequest,
    request: &ActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ActionOutcome, ApiError>
where
    S: TransitionCommitService + ?Sized,
{
    let (action, fields, parse_errors) = match prepare(record.status, request)? {
        Prepared::Ready {
            action,
            fields,
            parse_errors,
        } => (action, fields, parse_errors),
        Prepared::Refused(response) => {
            return Ok(ActionOutcome {
                response,
                committed: None,
            });
        }
    };

    if !parse_errors.is_empty() {
        let verdict: Result<Transition, CoreError> =
            validate_for_record(record, action, &fields, clock.today());
        return Ok(ActionOutcome {
            response: into_response(verdict, parse_errors),
            committed: None,
        });
    }

    match submit(
        service,
        clock,
        record,
        Command::Perform { action, fields },
        actor,
        cause,
    ) {
        Ok(outcome) => Ok(ActionOutcome {
            response: ActionResponse::Accepted {
                next_status: outcome.record.status,
                normalized_fields: outcome.fields.clone(),
            },
            committed: Some(outcome),
        }),
        Err(err @ CoreError::CommitFailed { .. }) => Err(translate_core_error(err)),
        Err(err) => Ok(ActionOutcome {
            response: ActionResponse::Rejected {
                errors: err.to_field_errors(),
            },
            committed: None,
        }),
    }
}

/// Applies an event reported by the payment gateway or display scheduler.
///
/// # Errors
///
/// Returns an error if:
/// - The event name is unknown
/// - The event cannot occur in the record's status
/// - The commit conflicts or fails
pub fn report_event<S>(
    service: &mut S,
    clock: &dyn Clock,
    record: &AdRequest,
    event: &str,
    actor: Actor,
    cause: Cause,
) -> Result<CommitOutcome, ApiError>
where
    S: TransitionCommitService + ?Sized,
{
    let event: ExternalEvent = event.parse().map_err(translate_domain_error)?;

    let outcome: CommitOutcome = submit(
        service,
        clock,
        record,
        Command::Report { event },
        actor,
        cause,
    )
    .map_err(translate_core_error)?;
    info!(ad_id = %record.id, event = %event, "External event applied");
    Ok(outcome)
}

/// Builds the station picker for a record's review form.
///
/// # Errors
///
/// Returns `ApiError::DirectoryUnavailable` if the directory fails.
pub fn list_station_choices(
    directory: &dyn StationDirectory,
    record: &AdRequest,
) -> Result<StationPickerResponse, ApiError> {
    let stations = station_choices(directory, record).map_err(translate_core_error)?;
    Ok(StationPickerResponse {
        ad_id: record.id.clone(),
        stations,
    })
}

enum Prepared {
    Ready {
        action: AdAction,
        fields: AdFields,
        parse_errors: FieldErrors,
    },
    Refused(ActionResponse),
}

/// Resolves the action and converts the raw fields, refusing early when
/// the action is unknown or not offered.
fn prepare(status: AdStatus, request: &ActionRequest) -> Result<Prepared, ApiError> {
    let Ok(action) = request.action.parse::<AdAction>() else {
        debug!(action = %request.action, "Unknown action requested");
        let mut errors: FieldErrors = FieldErrors::new();
        errors.add_key(
            FieldErrors::TRANSITION_KEY,
            format!("Unknown action '{}'", request.action),
        );
        return Ok(Prepared::Refused(ActionResponse::Rejected { errors }));
    };

    if !status.permits(action) {
        let err: CoreError = CoreError::InvalidTransition {
            from: status,
            action,
        };
        return Ok(Prepared::Refused(ActionResponse::Rejected {
            errors: err.to_field_errors(),
        }));
    }

    let (fields, parse_errors) = parse_fields(&request.fields)?;
    Ok(Prepared::Ready {
        action,
        fields,
        parse_errors,
    })
}

fn into_response(
    verdict: Result<Transition, CoreError>,
    parse_errors: FieldErrors,
) -> ActionResponse {
    match verdict {
        Ok(transition) if parse_errors.is_empty() => ActionResponse::Accepted {
            next_status: transition.next_status,
            normalized_fields: transition.normalized_fields,
        },
        Ok(_) => ActionResponse::Rejected {
            errors: parse_errors,
        },
        Err(err) => {
            let mut errors: FieldErrors = parse_errors;
            errors.merge(err.to_field_errors());
            ActionResponse::Rejected { errors }
        }
    }
}
