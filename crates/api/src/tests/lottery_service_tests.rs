// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super_lottery_domain::{Extraction, Lottery};
use time::{Duration, OffsetDateTime};

use super::helpers::{
    LOTTERY, OWNER, TestContext, create_test_context, create_test_extraction_request,
    create_test_lottery, schedule_test_extraction,
};
use crate::{ApiError, NextExtractionRequest};

#[tokio::test]
async fn test_load_lotteries_without_owner_record_is_empty() {
    let ctx: TestContext = create_test_context();

    let lotteries: Vec<Lottery> = ctx.lotteries.load_lotteries("stranger").await.unwrap();
    assert!(lotteries.is_empty());
}

#[tokio::test]
async fn test_create_lottery_is_listed_for_owner() {
    let ctx: TestContext = create_test_context();

    let created: Lottery = ctx.lotteries.create_lottery(OWNER, "abc").await.unwrap();
    assert_eq!(created.name, "abc");
    assert_eq!(created.owner.as_deref(), Some(OWNER));
    assert!(created.participants.is_empty());
    assert!(created.previous_extractions.is_empty());

    ctx.lotteries.create_lottery(OWNER, "def-2").await.unwrap();

    let names: Vec<String> = ctx
        .lotteries
        .load_lotteries(OWNER)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec![String::from("abc"), String::from("def-2")]);
}

#[tokio::test]
async fn test_create_lottery_twice_is_conflict() {
    let ctx: TestContext = create_test_context();
    ctx.lotteries.create_lottery(OWNER, "abc").await.unwrap();

    let err: ApiError = ctx
        .lotteries
        .create_lottery("someone-else", "abc")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Conflict {
            message: String::from("Lottery abc already exists")
        }
    );
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_create_lottery_rejects_invalid_names() {
    let ctx: TestContext = create_test_context();

    let err: ApiError = ctx
        .lotteries
        .create_lottery(OWNER, "Invalid Name!")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            message: String::from("Invalid Name! is an invalid name")
        }
    );

    let err: ApiError = ctx.lotteries.create_lottery(OWNER, "").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            message: String::from("Missing name")
        }
    );

    assert!(ctx.lotteries.load_lotteries(OWNER).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_lottery_checks_existence_and_ownership() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;

    let err: ApiError = ctx.lotteries.get_lottery("nope", OWNER).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::NotFound {
            message: String::from("Lottery nope not found")
        }
    );

    let err: ApiError = ctx
        .lotteries
        .get_lottery(LOTTERY, "intruder")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Forbidden {
            message: format!("You are not allowed to see {LOTTERY}")
        }
    );

    let lottery: Lottery = ctx.lotteries.get_lottery(LOTTERY, OWNER).await.unwrap();
    assert_eq!(lottery.name, LOTTERY);
}

#[tokio::test]
async fn test_schedule_extraction_too_soon_fails() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;

    for offset in [Duration::ZERO, Duration::minutes(14)] {
        let err: ApiError = ctx
            .lotteries
            .create_next_extraction(
                LOTTERY,
                OWNER,
                &create_test_extraction_request(ctx.now() + offset),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::InvalidInput {
                message: String::from(
                    "Invalid extraction time. It must be at least 15 minutes in the future"
                )
            }
        );
    }
}

#[tokio::test]
async fn test_schedule_extraction_is_visible_and_sorted() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;

    let extraction_time: OffsetDateTime = schedule_test_extraction(&ctx).await;

    let lottery: Lottery = ctx.lotteries.get_lottery(LOTTERY, OWNER).await.unwrap();
    let next: Extraction = lottery.next_extraction.expect("pending extraction");
    assert_eq!(next.extraction_time, extraction_time);
    assert_eq!(next.lottery_id.as_deref(), Some(LOTTERY));
    assert_eq!(next.winning_numbers, Some((1..=10).collect()));
    assert!(lottery.previous_extractions.is_empty());
}

#[tokio::test]
async fn test_schedule_extraction_exactly_at_buffer_is_accepted() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;

    let result = ctx
        .lotteries
        .create_next_extraction(
            LOTTERY,
            OWNER,
            &create_test_extraction_request(ctx.now() + Duration::minutes(15)),
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_schedule_extraction_validates_winning_numbers() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;
    let extraction_time: OffsetDateTime = ctx.now() + Duration::minutes(30);

    let missing: NextExtractionRequest = NextExtractionRequest {
        extraction_time,
        winning_numbers: None,
    };
    let err: ApiError = ctx
        .lotteries
        .create_next_extraction(LOTTERY, OWNER, &missing)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            message: String::from("Missing winning numbers")
        }
    );

    let short: NextExtractionRequest = NextExtractionRequest {
        extraction_time,
        winning_numbers: Some(vec![1, 2, 3]),
    };
    let err: ApiError = ctx
        .lotteries
        .create_next_extraction(LOTTERY, OWNER, &short)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            message: String::from("Invalid numbers length 3. It must be 10.")
        }
    );

    let duplicated: NextExtractionRequest = NextExtractionRequest {
        extraction_time,
        winning_numbers: Some(vec![1, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
    };
    let err: ApiError = ctx
        .lotteries
        .create_next_extraction(LOTTERY, OWNER, &duplicated)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            message: String::from("Invalid winning numbers. They must be unique.")
        }
    );
}

#[tokio::test]
async fn test_schedule_extraction_by_non_owner_is_forbidden() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;

    let err: ApiError = ctx
        .lotteries
        .create_next_extraction(
            LOTTERY,
            "intruder",
            &create_test_extraction_request(ctx.now() + Duration::minutes(30)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_rescheduling_replaces_pending_extraction() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;
    schedule_test_extraction(&ctx).await;

    let later: OffsetDateTime = ctx.now() + Duration::hours(2);
    let lottery: Lottery = ctx
        .lotteries
        .create_next_extraction(LOTTERY, OWNER, &create_test_extraction_request(later))
        .await
        .unwrap();

    assert_eq!(
        lottery.next_extraction.map(|e| e.extraction_time),
        Some(later)
    );
    assert!(lottery.previous_extractions.is_empty());
}

#[tokio::test]
async fn test_due_extraction_is_rolled_over_on_read_and_persisted() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;
    let extraction_time: OffsetDateTime = schedule_test_extraction(&ctx).await;

    // The draw is now 10 minutes away, inside the closing window.
    ctx.advance(Duration::minutes(20));

    let lottery: Lottery = ctx.lotteries.get_lottery(LOTTERY, OWNER).await.unwrap();
    assert!(lottery.next_extraction.is_none());
    assert_eq!(lottery.previous_extractions.len(), 1);
    assert_eq!(lottery.previous_extractions[0].extraction_time, extraction_time);

    let stored: Lottery = ctx.repository.get_lottery(LOTTERY).await.unwrap().unwrap();
    assert!(stored.next_extraction.is_none());
    assert_eq!(stored.previous_extractions.len(), 1);

    let again: Lottery = ctx.lotteries.get_lottery(LOTTERY, OWNER).await.unwrap();
    assert_eq!(again.previous_extractions.len(), 1);
}

#[tokio::test]
async fn test_pending_extraction_outside_window_stays_pending() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;
    schedule_test_extraction(&ctx).await;

    ctx.advance(Duration::minutes(10));

    let lottery: Lottery = ctx.lotteries.get_lottery(LOTTERY, OWNER).await.unwrap();
    assert!(lottery.next_extraction.is_some());
    assert!(lottery.previous_extractions.is_empty());
}

#[tokio::test]
async fn test_owner_view_shows_participant_names() {
    let ctx: TestContext = create_test_context();
    create_test_lottery(&ctx).await;

    ctx.client_names
        .save_client_name("alice-id", "Alice")
        .await
        .unwrap();
    ctx.participants
        .join_lottery("alice-id", LOTTERY)
        .await
        .unwrap();
    ctx.participants
        .join_lottery("nameless-id", LOTTERY)
        .await
        .unwrap();

    let lottery: Lottery = ctx.lotteries.get_lottery(LOTTERY, OWNER).await.unwrap();
    assert_eq!(
        lottery.participants,
        vec![String::from("Alice"), String::from("Anonymous participant")]
    );

    let listed: Vec<Lottery> = ctx.lotteries.load_lotteries(OWNER).await.unwrap();
    assert_eq!(listed[0].participants, lottery.participants);

    let stored: Lottery = ctx.repository.get_lottery(LOTTERY).await.unwrap().unwrap();
    assert_eq!(
        stored.participants,
        vec![String::from("alice-id"), String::from("nameless-id")]
    );
}
