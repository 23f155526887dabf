// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display names chosen by clients.

use super_lottery_domain::{ANONYMOUS_PARTICIPANT, validate_client_name};
use super_lottery_persistence::LotteryRepository;
use tracing::info;

use crate::error::ApiError;

/// Reads and writes client display names.
#[derive(Clone)]
pub struct ClientNameService {
    repository: LotteryRepository,
}

impl ClientNameService {
    /// Creates a service over `repository`.
    #[must_use]
    pub const fn new(repository: LotteryRepository) -> Self {
        Self { repository }
    }

    /// Returns the stored display name of `client_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store fails.
    pub async fn get_client_name(&self, client_id: &str) -> Result<Option<String>, ApiError> {
        Ok(self.repository.get_client_name(client_id).await?)
    }

    /// Stores a trimmed display name for `client_id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - The record store fails
    pub async fn save_client_name(&self, client_id: &str, name: &str) -> Result<String, ApiError> {
        let name: String = validate_client_name(name)?;
        self.repository.save_client_name(client_id, &name).await?;
        info!(client_id, name = %name, "Saved client name");
        Ok(name)
    }

    /// Returns the name shown for `client_id` to other clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store fails.
    pub async fn display_name(&self, client_id: &str) -> Result<String, ApiError> {
        Ok(self
            .get_client_name(client_id)
            .await?
            .unwrap_or_else(|| ANONYMOUS_PARTICIPANT.to_string()))
    }
}
