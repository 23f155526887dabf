// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super_lottery_domain::{Extraction, Lottery, LotteryMembership};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00:00 UTC)
}

pub fn create_test_winning_numbers() -> Vec<i64> {
    vec![3, 8, 15, 22, 31, 40, 47, 56, 63, 77]
}

pub fn create_test_extraction(extraction_time: OffsetDateTime) -> Extraction {
    Extraction::new(
        Some(String::from("summer")),
        extraction_time,
        Some(create_test_winning_numbers()),
    )
}

pub fn create_test_lottery() -> Lottery {
    Lottery::new(String::from("summer"), String::from("owner-1"))
}

pub fn create_test_membership(
    chosen_numbers: Vec<i64>,
    last_update: Option<OffsetDateTime>,
) -> LotteryMembership {
    let mut membership: LotteryMembership = LotteryMembership::new(String::from("summer"));
    membership.chosen_numbers = chosen_numbers;
    membership.last_update_chosen_numbers = last_update;
    membership
}
