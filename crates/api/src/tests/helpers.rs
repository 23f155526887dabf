// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Arc;
use super_lottery::{Clock, ManualClock};
use super_lottery_persistence::{LotteryRepository, SqliteBlobStore};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{ClientNameService, LotteryService, NextExtractionRequest, ParticipantService};

pub const OWNER: &str = "owner-1";
pub const LOTTERY: &str = "summer-draw";

/// Services sharing one in-memory store and one manual clock.
pub struct TestContext {
    pub clock: Arc<ManualClock>,
    pub repository: LotteryRepository,
    pub lotteries: LotteryService,
    pub participants: ParticipantService,
    pub client_names: ClientNameService,
}

impl TestContext {
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00:00 UTC)
}

pub fn create_test_context() -> TestContext {
    let store: SqliteBlobStore =
        SqliteBlobStore::new_in_memory().expect("Failed to create in-memory blob store");
    let repository: LotteryRepository = LotteryRepository::new(Arc::new(store));
    let clock: Arc<ManualClock> = Arc::new(ManualClock::new(test_now()));
    let shared_clock: Arc<dyn Clock> = clock.clone();

    TestContext {
        lotteries: LotteryService::new(repository.clone(), Arc::clone(&shared_clock)),
        participants: ParticipantService::new(repository.clone(), shared_clock),
        client_names: ClientNameService::new(repository.clone()),
        repository,
        clock,
    }
}

/// Ten distinct numbers in no particular order.
pub fn create_test_winning_numbers() -> Vec<i64> {
    vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
}

pub fn create_test_extraction_request(extraction_time: OffsetDateTime) -> NextExtractionRequest {
    NextExtractionRequest {
        extraction_time,
        winning_numbers: Some(create_test_winning_numbers()),
    }
}

/// Creates [`LOTTERY`] owned by [`OWNER`].
pub async fn create_test_lottery(ctx: &TestContext) {
    ctx.lotteries
        .create_lottery(OWNER, LOTTERY)
        .await
        .expect("Failed to create lottery");
}

/// Schedules an extraction 30 minutes from now and returns its draw time.
pub async fn schedule_test_extraction(ctx: &TestContext) -> OffsetDateTime {
    let extraction_time: OffsetDateTime = ctx.now() + Duration::minutes(30);
    ctx.lotteries
        .create_next_extraction(
            LOTTERY,
            OWNER,
            &create_test_extraction_request(extraction_time),
        )
        .await
        .expect("Failed to schedule extraction");
    extraction_time
}
