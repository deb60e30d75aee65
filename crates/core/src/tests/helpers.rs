// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CommitError, DirectoryError, Station, StationDirectory, TransitionCommitService,
    TransitionRequest,
};
use ad_lifecycle_audit::{Actor, AuditStamp, Cause};
use ad_lifecycle_domain::{AdFields, AdId, AdRequest, AdStatus, ValidationContext};
use std::collections::HashMap;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 10 - 18);
pub const YESTERDAY: Date = date!(2026 - 10 - 17);
pub const TOMORROW: Date = date!(2026 - 10 - 19);
pub const COMMIT_TIME: &str = "2026-10-18T09:30:00Z";

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Dashboard action"))
}

pub fn context() -> ValidationContext {
    ValidationContext::new(TODAY)
}

/// A record in `status` with content and one station assigned.
pub fn create_test_ad(status: AdStatus) -> AdRequest {
    AdRequest {
        status,
        title: Some(String::from("Summer promo")),
        description: Some(String::from("Discounted rentals all of August")),
        duration_days: Some(30),
        admin_price: Some(1500.0),
        duration_seconds: Some(10),
        display_order: Some(0),
        station_ids: vec![String::from("st-1")],
        ..AdRequest::submitted(AdId::new("ad-1"))
    }
}

/// Commit service double that behaves like the backend: compare the
/// stored status, then write status, fields and stamps.
#[derive(Debug, Default)]
pub struct InMemoryAdStore {
    pub records: HashMap<AdId, AdRequest>,
    pub committed: Vec<TransitionRequest>,
}

impl InMemoryAdStore {
    pub fn with(record: AdRequest) -> Self {
        let mut store: Self = Self::default();
        store.records.insert(record.id.clone(), record);
        store
    }

    pub fn get(&self, id: &str) -> &AdRequest {
        &self.records[&AdId::new(id)]
    }

    /// Simulates another operator moving the record.
    pub fn force_status(&mut self, id: &str, status: AdStatus) {
        self.records.get_mut(&AdId::new(id)).unwrap().status = status;
    }
}

impl TransitionCommitService for InMemoryAdStore {
    fn commit(&mut self, request: &TransitionRequest) -> Result<AdRequest, CommitError> {
        let record: &mut AdRequest = self
            .records
            .get_mut(&request.ad_id)
            .ok_or(CommitError::NotFound)?;
        if record.status != request.expected_status {
            return Err(CommitError::ConflictingState {
                actual: record.status,
            });
        }

        merge_fields(record, &request.fields);
        record.status = request.next_status;
        for stamp in &request.stamps {
            match stamp {
                AuditStamp::ReviewedBy => record.reviewed_by = Some(request.actor.id.clone()),
                AuditStamp::ApprovedBy => record.approved_by = Some(request.actor.id.clone()),
                AuditStamp::PaidAt => record.paid_at = Some(String::from(COMMIT_TIME)),
            }
        }

        self.committed.push(request.clone());
        Ok(record.clone())
    }
}

fn merge_fields(record: &mut AdRequest, fields: &AdFields) {
    if let Some(title) = &fields.title {
        record.title = Some(title.clone());
    }
    if let Some(description) = &fields.description {
        record.description = Some(description.clone());
    }
    if let Some(days) = fields.duration_days {
        record.duration_days = Some(days);
    }
    if let Some(price) = fields.admin_price {
        record.admin_price = Some(price);
    }
    if let Some(notes) = &fields.admin_notes {
        record.admin_notes = Some(notes.clone());
    }
    if let Some(start) = fields.start_date {
        record.start_date = Some(start);
    }
    if let Some(end) = fields.end_date {
        record.end_date = Some(end);
    }
    if let Some(seconds) = fields.duration_seconds {
        record.duration_seconds = Some(seconds);
    }
    if let Some(order) = fields.display_order {
        record.display_order = Some(order);
    }
    if let Some(ids) = &fields.station_ids {
        record.station_ids = ids.clone();
    }
}

/// Commit service double that always fails.
pub struct FailingStore;

impl TransitionCommitService for FailingStore {
    fn commit(&mut self, _request: &TransitionRequest) -> Result<AdRequest, CommitError> {
        Err(CommitError::Backend {
            message: String::from("connection reset"),
        })
    }
}

pub struct StaticDirectory(pub Result<Vec<Station>, DirectoryError>);

impl StationDirectory for StaticDirectory {
    fn stations(&self) -> Result<Vec<Station>, DirectoryError> {
        self.0.clone()
    }
}

pub fn station(id: &str, name: &str, online: bool) -> Station {
    Station {
        id: String::from(id),
        name: String::from(name),
        address: format!("{name} Mall, Level 1"),
        online,
    }
}
