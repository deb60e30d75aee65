// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ad lifecycle core.
//!
//! [`available_actions`] and [`validate_and_transition`] are pure
//! functions of their inputs. [`apply`] turns a validated command into a
//! [`TransitionRequest`] for the commit service, and [`submit`] drives
//! that service through the [`TransitionCommitService`] trait. Nothing
//! in this crate stores records or reads the wall clock except
//! [`SystemClock`].

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

mod apply;
mod clock;
mod command;
mod error;
mod service;
mod transition;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, available_actions, validate_and_transition, validate_for_record};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use error::CoreError;
pub use service::{
    CommitError, DirectoryError, Station, StationChoice, StationDirectory,
    TransitionCommitService, station_choices, submit,
};
pub use transition::{CommitOutcome, Transition, TransitionRequest};
