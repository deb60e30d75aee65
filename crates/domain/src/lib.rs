// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for the advertising-campaign lifecycle.
//!
//! Everything in this crate is pure: no I/O, no clock reads, no shared
//! state. The transition table in [`transitions`] is the only place where
//! status legality is defined, and the field contracts in [`validation`]
//! are the only place where per-action input rules are defined.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod action;
mod ad_request;
mod error;
mod fields;
mod status;
pub mod transitions;
pub mod validation;

#[cfg(test)]
mod tests;

use time::Date;

// Dates travel as `YYYY-MM-DD`, matching the dashboard's date inputs.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub use action::{AdAction, ExternalEvent};
pub use ad_request::{AdId, AdRequest};
pub use error::DomainError;
pub use fields::{AdFields, FieldErrors, FieldName};
pub use status::AdStatus;
pub use transitions::{EventRule, TransitionRule};
pub use validation::{ValidationContext, validate_action_fields, validate_review};
