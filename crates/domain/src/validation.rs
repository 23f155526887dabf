// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::{EXTRACTION_BUFFER, NUMBERS_COUNT};
use std::collections::HashSet;
use time::OffsetDateTime;

/// Validates a chosen or winning numbers set.
///
/// # Arguments
///
/// * `numbers` - The numbers as supplied by the client
///
/// # Returns
///
/// The same numbers sorted ascending.
///
/// # Errors
///
/// Returns an error if:
/// - The set does not contain exactly ten values
/// - The set contains duplicates
pub fn validate_numbers(numbers: &[i64]) -> Result<Vec<i64>, DomainError> {
    if numbers.len() != NUMBERS_COUNT {
        return Err(DomainError::InvalidNumbersLength {
            length: numbers.len(),
        });
    }

    let unique: HashSet<&i64> = numbers.iter().collect();
    if unique.len() != NUMBERS_COUNT {
        return Err(DomainError::DuplicateNumbers);
    }

    let mut sorted: Vec<i64> = numbers.to_vec();
    sorted.sort_unstable();
    Ok(sorted)
}

/// Validates a lottery name.
///
/// Names are one or more runs of ASCII letters and digits joined by single
/// hyphens. Leading, trailing and doubled hyphens are rejected.
///
/// # Errors
///
/// Returns an error if the name is empty or malformed.
pub fn validate_lottery_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::MissingLotteryName);
    }

    let well_formed: bool = name
        .split('-')
        .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));

    if !well_formed {
        return Err(DomainError::InvalidLotteryName(name.to_string()));
    }
    Ok(())
}

/// Validates that an extraction is scheduled outside the closing buffer.
///
/// # Errors
///
/// Returns an error if `extraction_time` is earlier than `now` plus
/// [`EXTRACTION_BUFFER`].
pub fn validate_extraction_time(
    extraction_time: OffsetDateTime,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    if extraction_time < now + EXTRACTION_BUFFER {
        return Err(DomainError::ExtractionTooSoon);
    }
    Ok(())
}

/// Validates and normalizes a client display name.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn validate_client_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidClientName);
    }
    Ok(trimmed.to_string())
}
