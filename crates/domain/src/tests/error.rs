// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingLotteryName;
    assert_eq!(format!("{err}"), "Missing name");

    let err: DomainError = DomainError::InvalidLotteryName(String::from("Invalid Name!"));
    assert_eq!(format!("{err}"), "Invalid Name! is an invalid name");

    let err: DomainError = DomainError::InvalidNumbersLength { length: 3 };
    assert_eq!(format!("{err}"), "Invalid numbers length 3. It must be 10.");

    let err: DomainError = DomainError::DuplicateNumbers;
    assert_eq!(
        format!("{err}"),
        "Invalid winning numbers. They must be unique."
    );

    let err: DomainError = DomainError::ExtractionTooSoon;
    assert_eq!(
        format!("{err}"),
        "Invalid extraction time. It must be at least 15 minutes in the future"
    );

    let err: DomainError = DomainError::LotteryNotFound(String::from("abc"));
    assert_eq!(format!("{err}"), "Lottery abc not found");

    let err: DomainError = DomainError::DuplicateLottery(String::from("abc"));
    assert_eq!(format!("{err}"), "Lottery abc already exists");

    let err: DomainError = DomainError::NotLotteryOwner(String::from("abc"));
    assert_eq!(format!("{err}"), "You are not allowed to see abc");

    let err: DomainError = DomainError::LotteryNotJoined(String::from("abc"));
    assert_eq!(format!("{err}"), "You did not join lottery abc");

    let err: DomainError = DomainError::ExtractionNotFound(String::from("MjAyNg=="));
    assert_eq!(format!("{err}"), "Extraction MjAyNg== not found");
}
