// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod extraction_id;
mod types;
mod validation;

#[cfg(test)]
mod tests;

use time::Duration;

pub use error::DomainError;
pub use extraction_id::{decode_extraction_id, encode_extraction_id};
pub use types::{
    ArchivedGuess, Extraction, Lottery, LotteryMembership, LotteryOwner, Participant,
    ParticipantStats, UpcomingExtraction,
};
pub use validation::{
    validate_client_name, validate_extraction_time, validate_lottery_name, validate_numbers,
};

/// Number of values in every chosen or winning numbers set.
pub const NUMBERS_COUNT: usize = 10;

/// Lead time that closes an extraction before its nominal draw time.
///
/// A new extraction must be scheduled at least this far in the future, and a
/// pending extraction becomes historical once it is closer than this.
pub const EXTRACTION_BUFFER: Duration = Duration::minutes(15);

/// Display name used when a client never chose one.
pub const ANONYMOUS_PARTICIPANT: &str = "Anonymous participant";
