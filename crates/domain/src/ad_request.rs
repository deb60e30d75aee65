// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::AdStatus;
use crate::validation::{DURATION_DAYS_RANGE, DURATION_SECONDS_RANGE, ValidationContext};
use serde::{Deserialize, Serialize};
use time::Date;

/// Opaque identifier of an ad request, assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdId(String);

impl AdId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AdId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An advertising campaign moving through the lifecycle.
///
/// Records are created in `SUBMITTED` by the intake process and mutated
/// only by the commit service after a transition has been validated.
/// Audit fields (`submitted_at`, `reviewed_by`, `approved_by`, `paid_at`)
/// are stamped by that service and are opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRequest {
    pub id: AdId,
    pub status: AdStatus,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub admin_price: Option<f64>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default, with = "crate::iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(default, with = "crate::iso_date::option")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub display_order: Option<i64>,
    #[serde(default)]
    pub station_ids: Vec<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl AdRequest {
    /// Creates a freshly submitted request with no content yet.
    #[must_use]
    pub fn submitted(id: AdId) -> Self {
        Self {
            id,
            status: AdStatus::Submitted,
            title: None,
            description: None,
            duration_days: None,
            admin_price: None,
            admin_notes: None,
            start_date: None,
            end_date: None,
            duration_seconds: None,
            display_order: None,
            station_ids: Vec::new(),
            submitted_at: None,
            reviewed_by: None,
            approved_by: None,
            paid_at: None,
        }
    }

    /// Builds the validation context for this record on `today`.
    #[must_use]
    pub const fn validation_context(&self, today: Date) -> ValidationContext {
        ValidationContext::new(today).with_stored_schedule(self.start_date, self.end_date)
    }

    /// Checks the stored record against the data model invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` for the first broken
    /// invariant found.
    pub fn validate_invariants(&self) -> Result<(), DomainError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end <= start {
                return Err(violation(
                    "end_date",
                    format!("end date {end} is not after start date {start}"),
                ));
            }
        }
        if let Some(order) = self.display_order {
            if order < 0 {
                return Err(violation(
                    "display_order",
                    format!("display order {order} is negative"),
                ));
            }
        }
        if let Some(seconds) = self.duration_seconds {
            if !DURATION_SECONDS_RANGE.contains(&seconds) {
                return Err(violation(
                    "duration_seconds",
                    format!("display duration {seconds}s is outside 3..=30"),
                ));
            }
        }
        if let Some(days) = self.duration_days {
            if !DURATION_DAYS_RANGE.contains(&days) {
                return Err(violation(
                    "duration_days",
                    format!("duration {days} days is outside 1..=365"),
                ));
            }
        }
        if let Some(price) = self.admin_price {
            if !price.is_finite() || price < 0.0 {
                return Err(violation(
                    "admin_price",
                    format!("price {price} is not a non-negative number"),
                ));
            }
        }
        if self.status.requires_stations() && self.station_ids.is_empty() {
            return Err(violation(
                "station_ids",
                format!("no stations assigned while in status {}", self.status),
            ));
        }
        Ok(())
    }
}

fn violation(field: &'static str, message: String) -> DomainError {
    DomainError::InvariantViolation { field, message }
}
