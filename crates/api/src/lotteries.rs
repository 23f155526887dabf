// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Owner-facing lottery operations.
//!
//! Every read goes through [`LotteryService::get_lottery_with_rollover`], so a
//! pending extraction that entered its closing window is finalized before
//! anyone sees the lottery.

use futures::future::try_join_all;
use std::sync::Arc;
use super_lottery::{Clock, apply_rollover};
use super_lottery_domain::{
    DomainError, Extraction, Lottery, LotteryOwner, validate_extraction_time,
    validate_lottery_name, validate_numbers,
};
use super_lottery_persistence::LotteryRepository;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::client_names::ClientNameService;
use crate::error::ApiError;
use crate::request_response::NextExtractionRequest;

/// Lottery creation, scheduling and owner views.
#[derive(Clone)]
pub struct LotteryService {
    repository: LotteryRepository,
    clock: Arc<dyn Clock>,
    client_names: ClientNameService,
}

impl LotteryService {
    /// Creates a service over `repository` reading time from `clock`.
    #[must_use]
    pub fn new(repository: LotteryRepository, clock: Arc<dyn Clock>) -> Self {
        let client_names: ClientNameService = ClientNameService::new(repository.clone());
        Self {
            repository,
            clock,
            client_names,
        }
    }

    /// Lists the lotteries created by `client_id`, oldest first.
    ///
    /// A client that never created a lottery gets an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store fails.
    pub async fn load_lotteries(&self, client_id: &str) -> Result<Vec<Lottery>, ApiError> {
        let Some(owner) = self.repository.get_owner(client_id).await? else {
            debug!(client_id, "No owner record");
            return Ok(Vec::new());
        };

        let lotteries: Vec<Option<Lottery>> = try_join_all(
            owner
                .lotteries
                .iter()
                .map(|name| self.get_lottery_with_rollover(name)),
        )
        .await?;

        try_join_all(
            lotteries
                .into_iter()
                .flatten()
                .map(|lottery| self.owner_view(lottery)),
        )
        .await
    }

    /// Creates a lottery owned by `client_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty or malformed
    /// - A lottery with the same name already exists
    /// - The record store fails
    pub async fn create_lottery(
        &self,
        client_id: &str,
        lottery_name: &str,
    ) -> Result<Lottery, ApiError> {
        validate_lottery_name(lottery_name)?;

        if self.repository.get_lottery(lottery_name).await?.is_some() {
            return Err(DomainError::DuplicateLottery(lottery_name.to_string()).into());
        }

        let mut owner: LotteryOwner = self
            .repository
            .get_owner(client_id)
            .await?
            .unwrap_or_else(|| LotteryOwner::new(client_id.to_string()));
        owner.lotteries.push(lottery_name.to_string());

        let lottery: Lottery = Lottery::new(lottery_name.to_string(), client_id.to_string());

        futures::try_join!(
            self.repository.save_owner(&owner),
            self.repository.save_lottery(&lottery),
        )?;

        info!(client_id, lottery = lottery_name, "Created lottery");
        Ok(lottery)
    }

    /// Returns a lottery to its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lottery does not exist
    /// - `client_id` is not the owner
    /// - The record store fails
    pub async fn get_lottery(&self, lottery_id: &str, client_id: &str) -> Result<Lottery, ApiError> {
        let lottery: Lottery = self.require_owned_lottery(lottery_id, client_id).await?;
        self.owner_view(lottery).await
    }

    /// Schedules the next extraction, replacing any pending one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lottery does not exist
    /// - `client_id` is not the owner
    /// - The extraction time is inside the closing window
    /// - The winning numbers are missing or invalid
    /// - The record store fails
    pub async fn create_next_extraction(
        &self,
        lottery_id: &str,
        client_id: &str,
        request: &NextExtractionRequest,
    ) -> Result<Lottery, ApiError> {
        let mut lottery: Lottery = self.require_owned_lottery(lottery_id, client_id).await?;

        let now: OffsetDateTime = self.clock.now();
        validate_extraction_time(request.extraction_time, now)?;

        let winning_numbers: Vec<i64> = validate_numbers(
            request
                .winning_numbers
                .as_deref()
                .ok_or(DomainError::MissingWinningNumbers)?,
        )?;

        lottery.next_extraction = Some(Extraction::new(
            Some(lottery.name.clone()),
            request.extraction_time,
            Some(winning_numbers),
        ));
        self.repository.save_lottery(&lottery).await?;

        info!(
            client_id,
            lottery = lottery_id,
            extraction_time = %request.extraction_time,
            "Scheduled next extraction"
        );
        self.owner_view(lottery).await
    }

    /// Loads a lottery, finalizing a due pending extraction first.
    ///
    /// The lottery is written back only when the rollover changed it.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store fails.
    pub async fn get_lottery_with_rollover(
        &self,
        lottery_id: &str,
    ) -> Result<Option<Lottery>, ApiError> {
        let Some(mut lottery) = self.repository.get_lottery(lottery_id).await? else {
            return Ok(None);
        };

        if apply_rollover(&mut lottery, self.clock.now()) {
            self.repository.save_lottery(&lottery).await?;
            info!(lottery = lottery_id, "Finalized due extraction");
        }

        Ok(Some(lottery))
    }

    /// Like [`Self::get_lottery_with_rollover`], failing when the lottery is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the lottery does not exist or the record store fails.
    pub async fn require_lottery(&self, lottery_id: &str) -> Result<Lottery, ApiError> {
        self.get_lottery_with_rollover(lottery_id)
            .await?
            .ok_or_else(|| DomainError::LotteryNotFound(lottery_id.to_string()).into())
    }

    async fn require_owned_lottery(
        &self,
        lottery_id: &str,
        client_id: &str,
    ) -> Result<Lottery, ApiError> {
        let lottery: Lottery = self.require_lottery(lottery_id).await?;
        if !lottery.is_owned_by(client_id) {
            return Err(DomainError::NotLotteryOwner(lottery.name).into());
        }
        Ok(lottery)
    }

    // Participant ids are replaced by display names. Never persisted.
    async fn owner_view(&self, mut lottery: Lottery) -> Result<Lottery, ApiError> {
        lottery.participants = try_join_all(
            lottery
                .participants
                .iter()
                .map(|participant_id| self.client_names.display_name(participant_id)),
        )
        .await?;
        Ok(lottery)
    }
}
