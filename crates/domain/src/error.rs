// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The lottery name was empty.
    MissingLotteryName,
    /// The lottery name does not match the allowed pattern.
    InvalidLotteryName(String),
    /// A numbers set does not contain exactly ten values.
    InvalidNumbersLength {
        /// The number of values that were supplied.
        length: usize,
    },
    /// A numbers set contains the same value more than once.
    DuplicateNumbers,
    /// An extraction was scheduled without winning numbers.
    MissingWinningNumbers,
    /// An extraction was scheduled inside the closing buffer.
    ExtractionTooSoon,
    /// An extraction identifier could not be decoded.
    InvalidExtractionId {
        /// The identifier as received.
        extraction_id: String,
        /// Why decoding failed.
        reason: String,
    },
    /// The lottery does not exist.
    LotteryNotFound(String),
    /// A lottery with the same name already exists.
    DuplicateLottery(String),
    /// The client does not own the lottery.
    NotLotteryOwner(String),
    /// The client has not joined the lottery.
    LotteryNotJoined(String),
    /// No finalized extraction matches the identifier.
    ExtractionNotFound(String),
    /// The client display name was empty.
    InvalidClientName,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLotteryName | Self::InvalidClientName => write!(f, "Missing name"),
            Self::InvalidLotteryName(name) => write!(f, "{name} is an invalid name"),
            Self::InvalidNumbersLength { length } => {
                write!(f, "Invalid numbers length {length}. It must be 10.")
            }
            Self::DuplicateNumbers => write!(f, "Invalid winning numbers. They must be unique."),
            Self::MissingWinningNumbers => write!(f, "Missing winning numbers"),
            Self::ExtractionTooSoon => write!(
                f,
                "Invalid extraction time. It must be at least 15 minutes in the future"
            ),
            Self::InvalidExtractionId {
                extraction_id,
                reason,
            } => write!(f, "Invalid extraction id '{extraction_id}': {reason}"),
            Self::LotteryNotFound(name) => write!(f, "Lottery {name} not found"),
            Self::DuplicateLottery(name) => write!(f, "Lottery {name} already exists"),
            Self::NotLotteryOwner(name) => write!(f, "You are not allowed to see {name}"),
            Self::LotteryNotJoined(name) => write!(f, "You did not join lottery {name}"),
            Self::ExtractionNotFound(id) => write!(f, "Extraction {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
