// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::transition::{Transition, TransitionRequest};
use ad_lifecycle_audit::{Actor, Cause, TransitionTrigger};
use ad_lifecycle_domain::{
    AdAction, AdFields, AdRequest, AdStatus, FieldErrors, FieldName, ValidationContext,
    validate_action_fields,
};
use time::Date;

/// Returns the actions an operator may pick for a record in `status`.
///
/// This is read straight from the transition table; terminal statuses
/// yield an empty list.
#[must_use]
pub fn available_actions(status: AdStatus) -> Vec<AdAction> {
    status.available_actions()
}

/// Checks an action against the state machine, then its fields against
/// the action's contract.
///
/// The state machine check runs first: fields are never inspected for an
/// action the status does not offer.
///
/// # Arguments
///
/// * `status` - The record's current status
/// * `action` - The requested action
/// * `fields` - The candidate fields
/// * `context` - The reference date and the stored schedule
///
/// # Errors
///
/// Returns an error if:
/// - The status does not offer the action (`InvalidTransition`)
/// - Any field fails the action's contract (`FieldValidation`)
pub fn validate_and_transition(
    status: AdStatus,
    action: AdAction,
    fields: &AdFields,
    context: &ValidationContext,
) -> Result<Transition, CoreError> {
    let next_status: AdStatus = status.next_status(action)?;
    let normalized_fields: AdFields = validate_action_fields(action, fields, context)?;

    Ok(Transition {
        from: status,
        action,
        next_status,
        normalized_fields,
    })
}

/// Validates an action against a stored record.
///
/// On top of [`validate_and_transition`], this uses the record's stored
/// schedule for date amendments and refuses to move a record without
/// stations into a status that requires them.
///
/// # Errors
///
/// Returns the same errors as [`validate_and_transition`]. A missing
/// station assignment is reported as a `station_ids` field error.
pub fn validate_for_record(
    record: &AdRequest,
    action: AdAction,
    fields: &AdFields,
    today: Date,
) -> Result<Transition, CoreError> {
    let context: ValidationContext = record.validation_context(today);
    let transition: Transition = validate_and_transition(record.status, action, fields, &context)?;

    let assigns_stations: bool = transition
        .normalized_fields
        .station_ids
        .as_ref()
        .is_some_and(|ids| !ids.is_empty());
    if transition.next_status.requires_stations()
        && record.station_ids.is_empty()
        && !assigns_stations
    {
        let mut errors: FieldErrors = FieldErrors::new();
        errors.add(
            FieldName::StationIds,
            "At least one station must be selected",
        );
        return Err(CoreError::FieldValidation(errors));
    }

    Ok(transition)
}

/// Applies a command to a record, producing the request for the commit
/// service.
///
/// This does not mutate anything; the record changes only when the
/// commit service accepts the returned request.
///
/// # Arguments
///
/// * `record` - The record as last read
/// * `command` - The action or event to apply
/// * `today` - The reference date for date checks
/// * `actor` - The actor requesting the transition
/// * `cause` - The cause or reason for the transition
///
/// # Errors
///
/// Returns an error if:
/// - The action or event is not permitted from the record's status
/// - The submitted fields fail the action's contract
pub fn apply(
    record: &AdRequest,
    command: Command,
    today: Date,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionRequest, CoreError> {
    let (trigger, next_status, fields): (TransitionTrigger, AdStatus, AdFields) = match command {
        Command::Perform { action, fields } => {
            let transition: Transition = validate_for_record(record, action, &fields, today)?;
            (
                TransitionTrigger::Action(action),
                transition.next_status,
                transition.normalized_fields,
            )
        }
        Command::Report { event } => {
            let next_status: AdStatus = record.status.apply_event(event)?;
            (TransitionTrigger::Event(event), next_status, AdFields::new())
        }
    };

    Ok(TransitionRequest {
        ad_id: record.id.clone(),
        expected_status: record.status,
        trigger,
        next_status,
        fields,
        stamps: trigger.stamps().to_vec(),
        actor,
        cause,
    })
}
