// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use super_lottery_domain::DomainError;
use super_lottery_persistence::PersistenceError;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// contract the request layer maps onto HTTP statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// A human-readable description of the error.
        message: String,
    },
    /// The client may not access the resource.
    Forbidden {
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The resource already exists.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The numeric HTTP status this error maps to.
    ///
    /// Conflicts are reported as 400 to stay compatible with existing clients.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } | Self::Conflict { .. } => 400,
            Self::Forbidden { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::Internal { .. } => 500,
        }
    }

    /// The client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingLotteryName
        | DomainError::InvalidLotteryName(_)
        | DomainError::InvalidNumbersLength { .. }
        | DomainError::DuplicateNumbers
        | DomainError::MissingWinningNumbers
        | DomainError::ExtractionTooSoon
        | DomainError::InvalidExtractionId { .. }
        | DomainError::InvalidClientName => ApiError::InvalidInput { message },
        DomainError::NotLotteryOwner(_) | DomainError::LotteryNotJoined(_) => {
            ApiError::Forbidden { message }
        }
        DomainError::LotteryNotFound(_) | DomainError::ExtractionNotFound(_) => {
            ApiError::NotFound { message }
        }
        DomainError::DuplicateLottery(_) => ApiError::Conflict { message },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Record store failure");
        Self::Internal {
            message: format!("Persistence error: {err}"),
        }
    }
}
