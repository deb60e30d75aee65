// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # ad-lifecycle
//!
//! Operator tool for the ad lifecycle rules. It never talks to the
//! backend: every subcommand reads the transition table or dry-runs the
//! validator.
//!
//! - `ad-lifecycle table` prints the transition table
//! - `ad-lifecycle actions PAID` lists the actions offered for a status
//! - `ad-lifecycle evaluate --status PAID --action schedule --fields form.json`
//!   prints the verdict the dashboard would show, exiting with status 2
//!   when the action is refused

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod render;

use ad_lifecycle::{Clock, SystemClock};
use ad_lifecycle_api::{
    ActionRequest, ActionResponse, AvailableActionsResponse, evaluate_action,
    list_available_actions, parse_date, parse_status,
};
use ad_lifecycle_domain::{AdStatus, ValidationContext};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Exit status when `evaluate` refuses the action.
const EXIT_REJECTED: i32 = 2;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(0) => (),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(name = "ad-lifecycle", version, about, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<i32> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the transition table
    #[command(visible_alias = "t")]
    Table {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the actions offered for a status
    #[command(visible_alias = "a")]
    Actions {
        /// The current status, e.g. `PENDING_PAYMENT`
        #[arg(value_parser = status_arg)]
        status: AdStatus,
    },

    /// Dry-run an action and print the verdict
    #[command(visible_alias = "e")]
    Evaluate {
        /// The current status
        #[arg(long, value_parser = status_arg)]
        status: AdStatus,

        /// The action name, e.g. `reject` or `update-schedule`
        #[arg(long)]
        action: String,

        /// JSON object with the form fields; `-` reads standard input
        #[arg(long)]
        fields: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD); defaults to today in UTC
        #[arg(long, value_parser = date_arg)]
        today: Option<Date>,

        /// The record's stored start date, for `update-schedule`
        #[arg(long, value_parser = date_arg)]
        stored_start: Option<Date>,

        /// The record's stored end date, for `update-schedule`
        #[arg(long, value_parser = date_arg)]
        stored_end: Option<Date>,
    },
}

impl Command {
    fn run(self) -> Result<i32> {
        match self {
            Self::Table { json } => {
                println!("{}", render::transition_table(json)?);
                Ok(0)
            }
            Self::Actions { status } => {
                let response: AvailableActionsResponse = list_available_actions(status);
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(0)
            }
            Self::Evaluate {
                status,
                action,
                fields,
                today,
                stored_start,
                stored_end,
            } => {
                let today: Date = today.unwrap_or_else(|| SystemClock.today());
                let context: ValidationContext =
                    ValidationContext::new(today).with_stored_schedule(stored_start, stored_end);
                let request: ActionRequest = ActionRequest::new(action)
                    .with_fields(render::read_fields(fields.as_deref())?);
                tracing::debug!(%status, action = %request.action, %today, "Evaluating action");

                let response: ActionResponse = evaluate_action(status, &request, &context)
                    .wrap_err("Could not evaluate the request")?;
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(if response.is_ok() { 0 } else { EXIT_REJECTED })
            }
        }
    }
}

fn status_arg(value: &str) -> Result<AdStatus, String> {
    parse_status(value).map_err(|err| err.to_string())
}

fn date_arg(value: &str) -> Result<Date, String> {
    parse_date(value).ok_or_else(|| format!("'{value}' is not a date in YYYY-MM-DD format"))
}
