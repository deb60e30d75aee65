// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use ad_lifecycle::{CommitError, FixedClock, TransitionCommitService, TransitionRequest};
use ad_lifecycle_audit::{Actor, AuditStamp, Cause};
use ad_lifecycle_domain::{AdId, AdRequest, AdStatus, ValidationContext};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 10 - 18);
pub const CLOCK: FixedClock = FixedClock(TODAY);

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn context() -> ValidationContext {
    ValidationContext::new(TODAY)
}

pub fn create_test_ad(status: AdStatus) -> AdRequest {
    AdRequest {
        status,
        title: Some(String::from("Summer promo")),
        station_ids: vec![String::from("st-1")],
        ..AdRequest::submitted(AdId::new("ad-1"))
    }
}

/// Single-record commit service double.
pub struct SingleRecordStore {
    pub record: AdRequest,
    pub commits: usize,
    pub fail_with: Option<CommitError>,
}

impl SingleRecordStore {
    pub const fn new(record: AdRequest) -> Self {
        Self {
            record,
            commits: 0,
            fail_with: None,
        }
    }
}

impl TransitionCommitService for SingleRecordStore {
    fn commit(&mut self, request: &TransitionRequest) -> Result<AdRequest, CommitError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        if self.record.status != request.expected_status {
            return Err(CommitError::ConflictingState {
                actual: self.record.status,
            });
        }
        self.record.status = request.next_status;
        if let Some(start) = request.fields.start_date {
            self.record.start_date = Some(start);
        }
        if let Some(end) = request.fields.end_date {
            self.record.end_date = Some(end);
        }
        if request.stamps.contains(&AuditStamp::PaidAt) {
            self.record.paid_at = Some(String::from("2026-10-18T12:00:00Z"));
        }
        self.commits += 1;
        Ok(self.record.clone())
    }
}
