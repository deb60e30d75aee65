// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The field bag submitted alongside an action, and the keyed errors
//! produced when it fails validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use time::Date;

/// The names of every field an action may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Title,
    Description,
    DurationDays,
    AdminPrice,
    AdminNotes,
    StartDate,
    EndDate,
    DurationSeconds,
    DisplayOrder,
    StationIds,
    RejectionReason,
    Reason,
}

impl FieldName {
    /// Every field name.
    pub const ALL: [Self; 12] = [
        Self::Title,
        Self::Description,
        Self::DurationDays,
        Self::AdminPrice,
        Self::AdminNotes,
        Self::StartDate,
        Self::EndDate,
        Self::DurationSeconds,
        Self::DisplayOrder,
        Self::StationIds,
        Self::RejectionReason,
        Self::Reason,
    ];

    /// Returns the key used in request payloads and error maps.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DurationDays => "duration_days",
            Self::AdminPrice => "admin_price",
            Self::AdminNotes => "admin_notes",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::DurationSeconds => "duration_seconds",
            Self::DisplayOrder => "display_order",
            Self::StationIds => "station_ids",
            Self::RejectionReason => "rejection_reason",
            Self::Reason => "reason",
        }
    }

    /// Looks up a field by its payload key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == key)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidate field values supplied with an action.
///
/// Every field is optional; which ones are required, and what they must
/// look like, depends on the action (see [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(
        default,
        with = "crate::iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Date>,
    #[serde(
        default,
        with = "crate::iso_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AdFields {
    /// Creates an empty field bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.into_iter().all(|name| !self.has(name))
    }

    /// Returns true if `name` carries a value.
    #[must_use]
    pub const fn has(&self, name: FieldName) -> bool {
        match name {
            FieldName::Title => self.title.is_some(),
            FieldName::Description => self.description.is_some(),
            FieldName::DurationDays => self.duration_days.is_some(),
            FieldName::AdminPrice => self.admin_price.is_some(),
            FieldName::AdminNotes => self.admin_notes.is_some(),
            FieldName::StartDate => self.start_date.is_some(),
            FieldName::EndDate => self.end_date.is_some(),
            FieldName::DurationSeconds => self.duration_seconds.is_some(),
            FieldName::DisplayOrder => self.display_order.is_some(),
            FieldName::StationIds => self.station_ids.is_some(),
            FieldName::RejectionReason => self.rejection_reason.is_some(),
            FieldName::Reason => self.reason.is_some(),
        }
    }

    /// Returns a copy holding only the fields listed in `keep`.
    #[must_use]
    pub fn retain(&self, keep: &[FieldName]) -> Self {
        let kept = |name: FieldName| keep.contains(&name);
        Self {
            title: self.title.clone().filter(|_| kept(FieldName::Title)),
            description: self
                .description
                .clone()
                .filter(|_| kept(FieldName::Description)),
            duration_days: self.duration_days.filter(|_| kept(FieldName::DurationDays)),
            admin_price: self.admin_price.filter(|_| kept(FieldName::AdminPrice)),
            admin_notes: self
                .admin_notes
                .clone()
                .filter(|_| kept(FieldName::AdminNotes)),
            start_date: self.start_date.filter(|_| kept(FieldName::StartDate)),
            end_date: self.end_date.filter(|_| kept(FieldName::EndDate)),
            duration_seconds: self
                .duration_seconds
                .filter(|_| kept(FieldName::DurationSeconds)),
            display_order: self.display_order.filter(|_| kept(FieldName::DisplayOrder)),
            station_ids: self
                .station_ids
                .clone()
                .filter(|_| kept(FieldName::StationIds)),
            rejection_reason: self
                .rejection_reason
                .clone()
                .filter(|_| kept(FieldName::RejectionReason)),
            reason: self.reason.clone().filter(|_| kept(FieldName::Reason)),
        }
    }
}

/// Validation failures keyed by field name.
///
/// Holds at most one message per key; the first failure recorded for a
/// key wins. Non-field failures use [`FieldErrors::FORM_KEY`] and state
/// machine rejections use [`FieldErrors::TRANSITION_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Key for errors that concern the submission as a whole.
    pub const FORM_KEY: &'static str = "_form";
    /// Key for an action the current status does not offer.
    pub const TRANSITION_KEY: &'static str = "_transition";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for a field.
    pub fn add(&mut self, field: FieldName, message: impl Into<String>) {
        self.add_key(field.as_str(), message);
    }

    /// Records a failure for an arbitrary key.
    pub fn add_key(&mut self, key: &str, message: impl Into<String>) {
        if let Entry::Vacant(slot) = self.errors.entry(key.to_string()) {
            slot.insert(message.into());
        }
    }

    /// Records a failure that is not tied to one field.
    pub fn add_form(&mut self, message: impl Into<String>) {
        self.add_key(Self::FORM_KEY, message);
    }

    /// Folds another error set into this one, keeping existing messages.
    pub fn merge(&mut self, other: Self) {
        for (key, message) in other.errors {
            self.add_key(&key, message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message recorded for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// Returns the message recorded for a field, if any.
    #[must_use]
    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Iterates over `(key, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }

    /// Returns `Ok(value)` when no failure was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one failure was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for (key, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{key}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
