// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::context;
use crate::{
    ActionRequest, ActionResponse, ApiError, AvailableActionsResponse, evaluate_action,
    list_available_actions, parse_status, translate_domain_error,
};
use ad_lifecycle_domain::{
    AdAction, AdStatus, DomainError, ExternalEvent, FieldErrors, ValidationContext,
};
use serde_json::{Value, json};
use time::macros::date;

fn evaluate(status: AdStatus, action: &str, fields: Value) -> ActionResponse {
    let request: ActionRequest = ActionRequest::new(action).with_fields(fields);
    evaluate_action(status, &request, &context()).unwrap()
}

#[test]
fn test_parse_status_accepts_wire_names() {
    assert_eq!(parse_status("PENDING_PAYMENT"), Ok(AdStatus::PendingPayment));
    assert_eq!(parse_status("running"), Ok(AdStatus::Running));
    assert_eq!(
        parse_status("ARCHIVED"),
        Err(ApiError::InvalidStatus {
            status: String::from("ARCHIVED")
        })
    );
}

#[test]
fn test_unknown_event_translates_to_unknown_event() {
    let err: DomainError = "refund-issued".parse::<ExternalEvent>().unwrap_err();
    assert_eq!(
        translate_domain_error(err),
        ApiError::UnknownEvent {
            event: String::from("refund-issued")
        }
    );
}

#[test]
fn test_list_available_actions_matches_capabilities() {
    let response: AvailableActionsResponse = list_available_actions(AdStatus::Paused);

    assert_eq!(
        response.actions,
        vec![AdAction::Resume, AdAction::Complete, AdAction::Cancel]
    );
    for action in AdAction::ALL {
        assert_eq!(
            response.capabilities.get(action).is_allowed(),
            response.actions.contains(&action)
        );
    }

    let value: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["status"], "PAUSED");
    assert_eq!(value["actions"], json!(["resume", "complete", "cancel"]));
    assert_eq!(value["capabilities"]["can_resume"], true);
    assert_eq!(value["capabilities"]["can_pause"], false);
}

#[test]
fn test_reject_with_short_reason() {
    let response: ActionResponse = evaluate(
        AdStatus::Submitted,
        "reject",
        json!({ "rejection_reason": "too short" }),
    );

    let errors: &FieldErrors = response.errors().unwrap();
    assert_eq!(
        errors.get("rejection_reason"),
        Some("Rejection reason must be at least 10 characters")
    );
}

#[test]
fn test_reject_with_valid_reason_serializes_accepted() {
    let response: ActionResponse = evaluate(
        AdStatus::Submitted,
        "reject",
        json!({ "rejection_reason": "  Incomplete advertiser documentation ", "title": "ignored" }),
    );

    assert!(response.is_ok());
    let value: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "ok": true,
            "next_status": "REJECTED",
            "normalized_fields": { "rejection_reason": "Incomplete advertiser documentation" }
        })
    );
}

#[test]
fn test_schedule_in_the_past() {
    let response: ActionResponse = evaluate(
        AdStatus::Paid,
        "schedule",
        json!({ "start_date": "2026-10-17", "end_date": "2026-11-01" }),
    );

    assert_eq!(
        response.errors().unwrap().get("start_date"),
        Some("Start date cannot be in the past")
    );
}

#[test]
fn test_schedule_with_equal_dates() {
    let response: ActionResponse = evaluate(
        AdStatus::Paid,
        "schedule",
        json!({ "start_date": "2026-10-19", "end_date": "2026-10-19" }),
    );

    assert_eq!(
        response.errors().unwrap().get("end_date"),
        Some("End date must be after start date")
    );
}

#[test]
fn test_unavailable_action_is_reported_under_transition_key() {
    let response: ActionResponse = evaluate(AdStatus::Running, "approve", json!({}));

    let value: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "ok": false,
            "errors": { "_transition": "This action is not available in the current state" }
        })
    );
}

#[test]
fn test_unavailable_action_ignores_malformed_fields() {
    let request: ActionRequest = ActionRequest::new("approve").with_fields(json!("oops"));

    let response: ActionResponse =
        evaluate_action(AdStatus::Completed, &request, &context()).unwrap();

    assert!(
        response
            .errors()
            .unwrap()
            .get(FieldErrors::TRANSITION_KEY)
            .is_some()
    );
}

#[test]
fn test_unknown_action_name() {
    let response: ActionResponse = evaluate(AdStatus::Submitted, "archive", json!({}));

    assert_eq!(
        response.errors().unwrap().get(FieldErrors::TRANSITION_KEY),
        Some("Unknown action 'archive'")
    );
}

#[test]
fn test_update_schedule_without_changes() {
    let stored: ValidationContext = context()
        .with_stored_schedule(Some(date!(2026 - 11 - 01)), Some(date!(2026 - 11 - 30)));
    let request: ActionRequest = ActionRequest::new("update_schedule").with_fields(json!({}));

    let response: ActionResponse =
        evaluate_action(AdStatus::Scheduled, &request, &stored).unwrap();

    let value: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({ "ok": false, "errors": { "_form": "At least one date must change" } })
    );
}

#[test]
fn test_conversion_errors_take_precedence_over_rule_errors() {
    let response: ActionResponse = evaluate(
        AdStatus::Paid,
        "schedule",
        json!({ "start_date": "19/10/2026", "end_date": "2026-10-25" }),
    );

    let errors: &FieldErrors = response.errors().unwrap();
    assert_eq!(
        errors.get("start_date"),
        Some("Must be a date in YYYY-MM-DD format")
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_approve_review_fields_are_validated_together() {
    let response: ActionResponse = evaluate(
        AdStatus::Submitted,
        "approve",
        json!({
            "title": "Ads",
            "duration_days": "400",
            "admin_price": -5,
            "duration_seconds": 2,
            "display_order": "first",
            "station_ids": []
        }),
    );

    let errors: &FieldErrors = response.errors().unwrap();
    assert_eq!(errors.get("title"), Some("Title must be at least 5 characters"));
    assert_eq!(
        errors.get("duration_days"),
        Some("Duration must be between 1 and 365 days")
    );
    assert_eq!(errors.get("admin_price"), Some("Price cannot be negative"));
    assert_eq!(
        errors.get("duration_seconds"),
        Some("Display duration must be between 3 and 30 seconds")
    );
    assert_eq!(errors.get("display_order"), Some("Must be a whole number"));
    assert_eq!(
        errors.get("station_ids"),
        Some("At least one station must be selected")
    );
}

#[test]
fn test_fields_must_be_an_object() {
    let request: ActionRequest = ActionRequest::new("reject").with_fields(json!([1, 2]));

    let result = evaluate_action(AdStatus::Submitted, &request, &context());

    assert_eq!(result, Err(ApiError::FieldsNotObject { found: "an array" }));
}

#[test]
fn test_action_request_deserializes_without_fields() {
    let request: ActionRequest = serde_json::from_str(r#"{ "action": "pause" }"#).unwrap();

    let response: ActionResponse =
        evaluate_action(AdStatus::Running, &request, &context()).unwrap();

    assert_eq!(
        response,
        ActionResponse::Accepted {
            next_status: AdStatus::Paused,
            normalized_fields: ad_lifecycle_domain::AdFields::new(),
        }
    );
}
