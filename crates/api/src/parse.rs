// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of raw dashboard form values into typed fields.
//!
//! Form inputs arrive loosely typed: numbers may be strings, empty inputs
//! are empty strings, and date pickers may send a full timestamp. Values
//! that cannot be converted are reported per field and left unset, so the
//! conversion never aborts the whole request.

use crate::error::ApiError;
use ad_lifecycle_domain::{AdFields, FieldErrors, FieldName};
use serde_json::{Map, Value};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Converts a raw `fields` value into an [`AdFields`] bag.
///
/// `null` is treated as an empty object. Unknown keys are ignored.
///
/// # Errors
///
/// Returns `ApiError::FieldsNotObject` if `raw` is neither an object nor
/// `null`. Per-field conversion failures are returned alongside the bag.
pub fn parse_fields(raw: &Value) -> Result<(AdFields, FieldErrors), ApiError> {
    let empty: Map<String, Value> = Map::new();
    let object: &Map<String, Value> = match raw {
        Value::Object(object) => object,
        Value::Null => &empty,
        other => {
            return Err(ApiError::FieldsNotObject {
                found: json_type(other),
            });
        }
    };

    let mut errors: FieldErrors = FieldErrors::new();
    let mut parser = FieldParser {
        object,
        errors: &mut errors,
    };

    let fields: AdFields = AdFields {
        title: parser.text(FieldName::Title),
        description: parser.text(FieldName::Description),
        duration_days: parser.integer(FieldName::DurationDays),
        admin_price: parser.number(FieldName::AdminPrice),
        admin_notes: parser.text(FieldName::AdminNotes),
        start_date: parser.date(FieldName::StartDate),
        end_date: parser.date(FieldName::EndDate),
        duration_seconds: parser.integer(FieldName::DurationSeconds),
        display_order: parser.integer(FieldName::DisplayOrder),
        station_ids: parser.string_list(FieldName::StationIds),
        rejection_reason: parser.text(FieldName::RejectionReason),
        reason: parser.text(FieldName::Reason),
    };

    Ok((fields, errors))
}

/// Parses a `YYYY-MM-DD` date, accepting a trailing time component.
#[must_use]
pub fn parse_date(value: &str) -> Option<Date> {
    let day: &str = value.trim().split(['T', ' ']).next().unwrap_or_default();
    Date::parse(day, DATE_FORMAT).ok()
}

struct FieldParser<'a> {
    object: &'a Map<String, Value>,
    errors: &'a mut FieldErrors,
}

/// Returns the raw value, treating `null` and blank strings as absent.
fn present<'a>(object: &'a Map<String, Value>, name: FieldName) -> Option<&'a Value> {
    match object.get(name.as_str())? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        value => Some(value),
    }
}

impl FieldParser<'_> {
    fn text(&mut self, name: FieldName) -> Option<String> {
        match present(self.object, name)? {
            Value::String(text) => Some(text.clone()),
            _ => {
                self.errors.add(name, "Must be text");
                None
            }
        }
    }

    fn integer(&mut self, name: FieldName) -> Option<i64> {
        let parsed: Option<i64> = match present(self.object, name)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.add(name, "Must be a whole number");
        }
        parsed
    }

    fn number(&mut self, name: FieldName) -> Option<f64> {
        let parsed: Option<f64> = match present(self.object, name)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.add(name, "Must be a number");
        }
        parsed
    }

    fn date(&mut self, name: FieldName) -> Option<Date> {
        let parsed: Option<Date> = match present(self.object, name)? {
            Value::String(text) => parse_date(text),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.add(name, "Must be a date in YYYY-MM-DD format");
        }
        parsed
    }

    fn string_list(&mut self, name: FieldName) -> Option<Vec<String>> {
        let object: &Map<String, Value> = self.object;
        let parsed: Option<Vec<String>> = match object.get(name.as_str())? {
            Value::Null => return None,
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(String::from))
                .collect(),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.add(name, "Must be a list of station ids");
        }
        parsed
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
