// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State machine and validator behaviour through the public operations.

use super::helpers::{TODAY, TOMORROW, YESTERDAY, context};
use crate::{CoreError, Transition, available_actions, validate_and_transition};
use ad_lifecycle_domain::{AdAction, AdFields, AdStatus, FieldErrors, FieldName};
use time::macros::date;

fn reject_with(reason: &str) -> AdFields {
    AdFields {
        rejection_reason: Some(String::from(reason)),
        ..AdFields::new()
    }
}

// ============================================================================
// available_actions
// ============================================================================

#[test]
fn test_available_actions_per_status() {
    let expected: [(AdStatus, &[AdAction]); 10] = [
        (
            AdStatus::Submitted,
            &[AdAction::Approve, AdAction::Reject, AdAction::Cancel],
        ),
        (AdStatus::UnderReview, &[AdAction::Reject, AdAction::Cancel]),
        (AdStatus::PendingPayment, &[AdAction::Cancel]),
        (AdStatus::Paid, &[AdAction::Schedule]),
        (AdStatus::Scheduled, &[AdAction::UpdateSchedule]),
        (
            AdStatus::Running,
            &[AdAction::Pause, AdAction::Complete, AdAction::Cancel],
        ),
        (
            AdStatus::Paused,
            &[AdAction::Resume, AdAction::Complete, AdAction::Cancel],
        ),
        (AdStatus::Completed, &[]),
        (AdStatus::Rejected, &[]),
        (AdStatus::Cancelled, &[]),
    ];

    for (status, actions) in expected {
        assert_eq!(available_actions(status), actions.to_vec(), "{status}");
    }
}

#[test]
fn test_unavailable_actions_are_rejected_for_every_status() {
    for status in AdStatus::ALL {
        let offered: Vec<AdAction> = available_actions(status);
        for action in AdAction::ALL {
            let result = validate_and_transition(status, action, &AdFields::new(), &context());
            if offered.contains(&action) {
                assert!(
                    !matches!(result, Err(CoreError::InvalidTransition { .. })),
                    "{status} should offer {action}"
                );
            } else {
                assert_eq!(
                    result,
                    Err(CoreError::InvalidTransition {
                        from: status,
                        action
                    })
                );
            }
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_reject_with_short_reason_fails_on_rejection_reason() {
    let result =
        validate_and_transition(AdStatus::Submitted, AdAction::Reject, &reject_with("too short"), &context());

    let Err(CoreError::FieldValidation(errors)) = result else {
        panic!("expected field validation error, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors.field(FieldName::RejectionReason).is_some());
}

#[test]
fn test_reject_with_valid_reason_moves_to_rejected() {
    let transition: Transition = validate_and_transition(
        AdStatus::Submitted,
        AdAction::Reject,
        &reject_with("Incomplete advertiser documentation"),
        &context(),
    )
    .unwrap();

    assert_eq!(transition.next_status, AdStatus::Rejected);
    assert_eq!(
        transition.normalized_fields.rejection_reason.as_deref(),
        Some("Incomplete advertiser documentation")
    );
}

#[test]
fn test_schedule_in_the_past_fails_on_start_date() {
    let fields: AdFields = AdFields {
        start_date: Some(YESTERDAY),
        ..AdFields::new()
    };
    let result = validate_and_transition(AdStatus::Paid, AdAction::Schedule, &fields, &context());

    let Err(CoreError::FieldValidation(errors)) = result else {
        panic!("expected field validation error, got {result:?}");
    };
    assert_eq!(
        errors.field(FieldName::StartDate),
        Some("Start date cannot be in the past")
    );
}

#[test]
fn test_schedule_with_end_equal_to_start_fails_on_end_date() {
    let fields: AdFields = AdFields {
        start_date: Some(TOMORROW),
        end_date: Some(TOMORROW),
        ..AdFields::new()
    };
    let result = validate_and_transition(AdStatus::Paid, AdAction::Schedule, &fields, &context());

    let Err(CoreError::FieldValidation(errors)) = result else {
        panic!("expected field validation error, got {result:?}");
    };
    assert_eq!(
        errors.field(FieldName::EndDate),
        Some("End date must be after start date")
    );
}

#[test]
fn test_approve_from_running_is_invalid_transition() {
    let result =
        validate_and_transition(AdStatus::Running, AdAction::Approve, &AdFields::new(), &context());

    assert_eq!(
        result,
        Err(CoreError::InvalidTransition {
            from: AdStatus::Running,
            action: AdAction::Approve
        })
    );
    let errors: FieldErrors = result.unwrap_err().to_field_errors();
    assert_eq!(
        errors.get(FieldErrors::TRANSITION_KEY),
        Some("This action is not available in the current state")
    );
}

#[test]
fn test_update_schedule_without_dates_is_rejected() {
    let stored = context().with_stored_schedule(
        Some(date!(2026 - 11 - 01)),
        Some(date!(2026 - 11 - 30)),
    );
    let result =
        validate_and_transition(AdStatus::Scheduled, AdAction::UpdateSchedule, &AdFields::new(), &stored);

    let Err(CoreError::FieldValidation(errors)) = result else {
        panic!("expected field validation error, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FieldErrors::FORM_KEY),
        Some("At least one date must change")
    );
}

#[test]
fn test_invalid_action_skips_field_validation() {
    // A bad payload must not mask the state machine rejection.
    let result =
        validate_and_transition(AdStatus::Completed, AdAction::Reject, &reject_with("no"), &context());
    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
}

#[test]
fn test_actions_without_fields_pass_with_empty_payload() {
    let cases: [(AdStatus, AdAction, AdStatus); 4] = [
        (AdStatus::Submitted, AdAction::Approve, AdStatus::PendingPayment),
        (AdStatus::Running, AdAction::Pause, AdStatus::Paused),
        (AdStatus::Paused, AdAction::Resume, AdStatus::Running),
        (AdStatus::Paused, AdAction::Complete, AdStatus::Completed),
    ];
    for (from, action, to) in cases {
        let transition: Transition =
            validate_and_transition(from, action, &AdFields::new(), &context()).unwrap();
        assert_eq!(transition.next_status, to);
        assert!(transition.normalized_fields.is_empty());
    }
}

#[test]
fn test_cancel_reaches_cancelled_from_every_offering_status() {
    for status in [
        AdStatus::Submitted,
        AdStatus::UnderReview,
        AdStatus::PendingPayment,
        AdStatus::Running,
        AdStatus::Paused,
    ] {
        let transition: Transition =
            validate_and_transition(status, AdAction::Cancel, &AdFields::new(), &context())
                .unwrap();
        assert_eq!(transition.next_status, AdStatus::Cancelled);
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_validate_and_transition_is_pure() {
    let inputs: [(AdStatus, AdAction, AdFields); 3] = [
        (AdStatus::Submitted, AdAction::Reject, reject_with("too short")),
        (
            AdStatus::Paid,
            AdAction::Schedule,
            AdFields {
                start_date: Some(TODAY),
                end_date: Some(date!(2026 - 11 - 18)),
                ..AdFields::new()
            },
        ),
        (AdStatus::Running, AdAction::Approve, AdFields::new()),
    ];
    for (status, action, fields) in inputs {
        let first = validate_and_transition(status, action, &fields, &context());
        let second = validate_and_transition(status, action, &fields, &context());
        assert_eq!(first, second);
    }
}

#[test]
fn test_accepted_transition_offers_exactly_next_status_actions() {
    for status in AdStatus::ALL {
        for action in available_actions(status) {
            let fields: AdFields = AdFields {
                start_date: Some(TOMORROW),
                end_date: Some(date!(2026 - 12 - 31)),
                rejection_reason: Some(String::from("Incomplete advertiser documentation")),
                ..AdFields::new()
            };
            let Ok(transition) = validate_and_transition(status, action, &fields, &context())
            else {
                continue;
            };
            let mut next_actions: Vec<AdAction> = available_actions(transition.next_status);
            next_actions.sort();
            let table_row: Vec<AdAction> = AdAction::ALL
                .into_iter()
                .filter(|candidate| transition.next_status.permits(*candidate))
                .collect();
            assert_eq!(next_actions, table_row, "{status} --{action}-->");
        }
    }
}
