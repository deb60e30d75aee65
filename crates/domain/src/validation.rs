// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-action field contracts.
//!
//! Each action owns one [`FieldContract`]: the fields it accepts and a
//! list of small rules over the field bag. Every rule runs, so a caller
//! receives all failures at once. Rules never read the system clock;
//! "today" arrives through [`ValidationContext`].

use crate::action::AdAction;
use crate::fields::{AdFields, FieldErrors, FieldName};
use time::Date;

pub const MIN_REJECTION_REASON_CHARS: usize = 10;
pub const MIN_TITLE_CHARS: usize = 5;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const DURATION_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=365;
pub const DURATION_SECONDS_RANGE: std::ops::RangeInclusive<i64> = 3..=30;

/// Inputs that rules need besides the field bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// The reference date for "not in the past" checks.
    pub today: Date,
    /// The start date currently stored on the ad request.
    pub stored_start_date: Option<Date>,
    /// The end date currently stored on the ad request.
    pub stored_end_date: Option<Date>,
}

impl ValidationContext {
    /// Creates a context with no stored schedule.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self {
            today,
            stored_start_date: None,
            stored_end_date: None,
        }
    }

    /// Sets the schedule currently stored on the ad request.
    #[must_use]
    pub const fn with_stored_schedule(
        mut self,
        start_date: Option<Date>,
        end_date: Option<Date>,
    ) -> Self {
        self.stored_start_date = start_date;
        self.stored_end_date = end_date;
        self
    }
}

type Rule = fn(&AdFields, &ValidationContext, &mut FieldErrors);

/// The fields an action accepts and the rules they must satisfy.
#[derive(Clone, Copy)]
pub struct FieldContract {
    /// The action this contract belongs to.
    pub action: AdAction,
    /// Fields kept in the normalized output; anything else is dropped.
    pub fields: &'static [FieldName],
    rules: &'static [Rule],
}

const REVIEW_FIELDS: &[FieldName] = &[
    FieldName::Title,
    FieldName::Description,
    FieldName::DurationDays,
    FieldName::AdminPrice,
    FieldName::AdminNotes,
    FieldName::StartDate,
    FieldName::DurationSeconds,
    FieldName::DisplayOrder,
    FieldName::StationIds,
];

const REVIEW_RULES: &[Rule] = &[
    title_min_length,
    description_min_length,
    duration_days_in_range,
    admin_price_non_negative,
    optional_start_date_not_past,
    duration_seconds_in_range,
    display_order_non_negative,
    station_ids_non_empty,
];

const APPROVE: FieldContract = FieldContract {
    action: AdAction::Approve,
    fields: REVIEW_FIELDS,
    rules: REVIEW_RULES,
};

const REJECT: FieldContract = FieldContract {
    action: AdAction::Reject,
    fields: &[FieldName::RejectionReason],
    rules: &[rejection_reason_present],
};

const SCHEDULE: FieldContract = FieldContract {
    action: AdAction::Schedule,
    fields: &[FieldName::StartDate, FieldName::EndDate],
    rules: &[start_date_required_not_past, end_date_after_start],
};

const UPDATE_SCHEDULE: FieldContract = FieldContract {
    action: AdAction::UpdateSchedule,
    fields: &[FieldName::StartDate, FieldName::EndDate],
    rules: &[schedule_amendment],
};

const PAUSE: FieldContract = FieldContract {
    action: AdAction::Pause,
    fields: &[],
    rules: &[],
};

const RESUME: FieldContract = FieldContract {
    action: AdAction::Resume,
    fields: &[],
    rules: &[],
};

const COMPLETE: FieldContract = FieldContract {
    action: AdAction::Complete,
    fields: &[],
    rules: &[],
};

// The reason is free text; nothing to check beyond trimming.
const CANCEL: FieldContract = FieldContract {
    action: AdAction::Cancel,
    fields: &[FieldName::Reason],
    rules: &[],
};

/// Returns the contract for `action`.
#[must_use]
pub const fn contract_for(action: AdAction) -> &'static FieldContract {
    match action {
        AdAction::Approve => &APPROVE,
        AdAction::Reject => &REJECT,
        AdAction::Schedule => &SCHEDULE,
        AdAction::UpdateSchedule => &UPDATE_SCHEDULE,
        AdAction::Pause => &PAUSE,
        AdAction::Resume => &RESUME,
        AdAction::Complete => &COMPLETE,
        AdAction::Cancel => &CANCEL,
    }
}

/// Validates the field bag submitted with `action`.
///
/// Fields not declared by the action's contract are dropped, text is
/// trimmed, and station ids are trimmed and de-duplicated before the
/// rules run.
///
/// # Errors
///
/// Returns every failing field, keyed by field name.
pub fn validate_action_fields(
    action: AdAction,
    fields: &AdFields,
    context: &ValidationContext,
) -> Result<AdFields, FieldErrors> {
    apply_contract(contract_for(action), fields, context)
}

/// Validates the review/configure step that fills in content before the
/// approve or reject decision. Approve carries the same contract.
///
/// # Errors
///
/// Returns every failing field, keyed by field name.
pub fn validate_review(
    fields: &AdFields,
    context: &ValidationContext,
) -> Result<AdFields, FieldErrors> {
    apply_contract(&APPROVE, fields, context)
}

fn apply_contract(
    contract: &FieldContract,
    fields: &AdFields,
    context: &ValidationContext,
) -> Result<AdFields, FieldErrors> {
    let normalized: AdFields = normalize(&fields.retain(contract.fields));
    let mut errors: FieldErrors = FieldErrors::new();
    for rule in contract.rules {
        rule(&normalized, context, &mut errors);
    }
    errors.into_result(normalized)
}

fn normalize(fields: &AdFields) -> AdFields {
    let station_ids: Option<Vec<String>> = fields.station_ids.as_ref().map(|ids| {
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            if !unique.iter().any(|existing| existing == id) {
                unique.push(id.to_string());
            }
        }
        unique
    });

    AdFields {
        title: trimmed(fields.title.as_deref()),
        description: trimmed(fields.description.as_deref()),
        admin_notes: trimmed(fields.admin_notes.as_deref()),
        rejection_reason: trimmed(fields.rejection_reason.as_deref()),
        reason: trimmed(fields.reason.as_deref()),
        station_ids,
        ..fields.clone()
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

fn rejection_reason_present(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    match fields.rejection_reason.as_deref() {
        None => errors.add(FieldName::RejectionReason, "Rejection reason is required"),
        Some(reason) if char_count(reason) < MIN_REJECTION_REASON_CHARS => errors.add(
            FieldName::RejectionReason,
            format!("Rejection reason must be at least {MIN_REJECTION_REASON_CHARS} characters"),
        ),
        Some(_) => {}
    }
}

fn start_date_required_not_past(
    fields: &AdFields,
    context: &ValidationContext,
    errors: &mut FieldErrors,
) {
    match fields.start_date {
        None => errors.add(FieldName::StartDate, "Start date is required"),
        Some(start) if start < context.today => {
            errors.add(FieldName::StartDate, "Start date cannot be in the past");
        }
        Some(_) => {}
    }
}

fn optional_start_date_not_past(
    fields: &AdFields,
    context: &ValidationContext,
    errors: &mut FieldErrors,
) {
    if fields.start_date.is_some_and(|start| start < context.today) {
        errors.add(FieldName::StartDate, "Start date cannot be in the past");
    }
}

fn end_date_after_start(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if let (Some(start), Some(end)) = (fields.start_date, fields.end_date) {
        if end <= start {
            errors.add(FieldName::EndDate, "End date must be after start date");
        }
    }
}

fn schedule_amendment(fields: &AdFields, context: &ValidationContext, errors: &mut FieldErrors) {
    let start_changed: bool = fields
        .start_date
        .is_some_and(|start| Some(start) != context.stored_start_date);
    let end_changed: bool = fields
        .end_date
        .is_some_and(|end| Some(end) != context.stored_end_date);
    if !start_changed && !end_changed {
        errors.add_form("At least one date must change");
        return;
    }

    if let Some(start) = fields.start_date {
        if start < context.today {
            errors.add(FieldName::StartDate, "Start date cannot be in the past");
        } else if fields.end_date.is_none()
            && context.stored_end_date.is_some_and(|end| end <= start)
        {
            errors.add(FieldName::StartDate, "Start date must be before end date");
        }
    }

    if let Some(end) = fields.end_date {
        let effective_start: Option<Date> = fields.start_date.or(context.stored_start_date);
        if end < context.today {
            errors.add(FieldName::EndDate, "End date cannot be in the past");
        } else if effective_start.is_some_and(|start| end <= start) {
            errors.add(FieldName::EndDate, "End date must be after start date");
        }
    }
}

fn title_min_length(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if fields
        .title
        .as_deref()
        .is_some_and(|title| char_count(title) < MIN_TITLE_CHARS)
    {
        errors.add(
            FieldName::Title,
            format!("Title must be at least {MIN_TITLE_CHARS} characters"),
        );
    }
}

fn description_min_length(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if fields
        .description
        .as_deref()
        .is_some_and(|description| char_count(description) < MIN_DESCRIPTION_CHARS)
    {
        errors.add(
            FieldName::Description,
            format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"),
        );
    }
}

fn duration_days_in_range(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if fields
        .duration_days
        .is_some_and(|days| !DURATION_DAYS_RANGE.contains(&days))
    {
        errors.add(
            FieldName::DurationDays,
            "Duration must be between 1 and 365 days",
        );
    }
}

fn admin_price_non_negative(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    match fields.admin_price {
        Some(price) if !price.is_finite() => {
            errors.add(FieldName::AdminPrice, "Price must be a number");
        }
        Some(price) if price < 0.0 => errors.add(FieldName::AdminPrice, "Price cannot be negative"),
        _ => {}
    }
}

fn duration_seconds_in_range(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if fields
        .duration_seconds
        .is_some_and(|seconds| !DURATION_SECONDS_RANGE.contains(&seconds))
    {
        errors.add(
            FieldName::DurationSeconds,
            "Display duration must be between 3 and 30 seconds",
        );
    }
}

fn display_order_non_negative(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if fields.display_order.is_some_and(|order| order < 0) {
        errors.add(FieldName::DisplayOrder, "Display order cannot be negative");
    }
}

fn station_ids_non_empty(fields: &AdFields, _: &ValidationContext, errors: &mut FieldErrors) {
    if fields.station_ids.as_ref().is_some_and(Vec::is_empty) {
        errors.add(FieldName::StationIds, "At least one station must be selected");
    }
}
