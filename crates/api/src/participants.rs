// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Participant-facing lottery operations.
//!
//! Participants are reconciled on every load: a guess saved for an
//! extraction that has since been finalized is archived against it before
//! the participant is used. The record is written back only when
//! reconciliation changed something.

use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;
use super_lottery::{
    Clock, count_winning_numbers, project_membership, rank_participants, reconcile_membership,
};
use super_lottery_domain::{
    DomainError, Extraction, Lottery, LotteryMembership, Participant, ParticipantStats,
    decode_extraction_id, validate_numbers,
};
use super_lottery_persistence::LotteryRepository;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::client_names::ClientNameService;
use crate::error::ApiError;
use crate::lotteries::LotteryService;

/// A participant after reconciliation, with the lotteries it was checked against.
struct ReconciledParticipant {
    participant: Participant,
    lotteries: HashMap<String, Lottery>,
}

impl ReconciledParticipant {
    fn enrich(&self, membership: &LotteryMembership) -> LotteryMembership {
        self.lotteries.get(&membership.name).map_or_else(
            || membership.clone(),
            |lottery| project_membership(membership, lottery),
        )
    }

    fn enriched_memberships(&self) -> Vec<LotteryMembership> {
        self.participant
            .joined_lotteries
            .iter()
            .map(|membership| self.enrich(membership))
            .collect()
    }

    fn enriched_participant(&self) -> Participant {
        Participant {
            participant_id: self.participant.participant_id.clone(),
            joined_lotteries: self.enriched_memberships(),
        }
    }
}

/// Joining lotteries, playing numbers and reading results.
#[derive(Clone)]
pub struct ParticipantService {
    repository: LotteryRepository,
    clock: Arc<dyn Clock>,
    lotteries: LotteryService,
    client_names: ClientNameService,
}

impl ParticipantService {
    /// Creates a service over `repository` reading time from `clock`.
    #[must_use]
    pub fn new(repository: LotteryRepository, clock: Arc<dyn Clock>) -> Self {
        let lotteries: LotteryService = LotteryService::new(repository.clone(), Arc::clone(&clock));
        let client_names: ClientNameService = ClientNameService::new(repository.clone());
        Self {
            repository,
            clock,
            lotteries,
            client_names,
        }
    }

    /// Lists the memberships of `client_id` with history and next extraction.
    ///
    /// A client that never joined a lottery gets an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store fails.
    pub async fn get_joined_lotteries(
        &self,
        client_id: &str,
    ) -> Result<Vec<LotteryMembership>, ApiError> {
        Ok(self
            .load_participant(client_id)
            .await?
            .map(|reconciled| reconciled.enriched_memberships())
            .unwrap_or_default())
    }

    /// Joins `client_id` to a lottery. Joining twice changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lottery does not exist
    /// - The record store fails
    pub async fn join_lottery(
        &self,
        client_id: &str,
        lottery_name: &str,
    ) -> Result<Participant, ApiError> {
        let mut lottery: Lottery = self.lotteries.require_lottery(lottery_name).await?;

        let mut reconciled: ReconciledParticipant = self
            .load_participant(client_id)
            .await?
            .unwrap_or_else(|| ReconciledParticipant {
                participant: Participant::new(client_id.to_string()),
                lotteries: HashMap::new(),
            });

        let joined: bool = reconciled.participant.join(&lottery.name);
        lottery.add_participant(client_id);

        futures::try_join!(
            self.repository.save_lottery(&lottery),
            self.repository.save_participant(&reconciled.participant),
        )?;

        if joined {
            info!(client_id, lottery = lottery_name, "Joined lottery");
        }

        reconciled.lotteries.insert(lottery.name.clone(), lottery);
        Ok(reconciled.enriched_participant())
    }

    /// Returns the membership of `client_id` in one lottery.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `client_id` did not join the lottery
    /// - The record store fails
    pub async fn get_joined_lottery(
        &self,
        lottery_id: &str,
        client_id: &str,
    ) -> Result<LotteryMembership, ApiError> {
        let reconciled: Option<ReconciledParticipant> = self.load_participant(client_id).await?;
        reconciled
            .as_ref()
            .and_then(|r| r.participant.membership(lottery_id).map(|m| r.enrich(m)))
            .ok_or_else(|| DomainError::LotteryNotJoined(lottery_id.to_string()).into())
    }

    /// Replaces the in-flight guess of `client_id` for one lottery.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `client_id` did not join the lottery
    /// - The numbers are not ten distinct values
    /// - The record store fails
    pub async fn save_chosen_numbers(
        &self,
        client_id: &str,
        lottery_id: &str,
        chosen_numbers: &[i64],
    ) -> Result<Participant, ApiError> {
        let not_joined = || ApiError::from(DomainError::LotteryNotJoined(lottery_id.to_string()));

        let mut reconciled: ReconciledParticipant =
            self.load_participant(client_id).await?.ok_or_else(not_joined)?;

        let now: OffsetDateTime = self.clock.now();
        let membership: &mut LotteryMembership = reconciled
            .participant
            .membership_mut(lottery_id)
            .ok_or_else(not_joined)?;
        membership.chosen_numbers = validate_numbers(chosen_numbers)?;
        membership.last_update_chosen_numbers = Some(now);

        self.repository
            .save_participant(&reconciled.participant)
            .await?;

        info!(client_id, lottery = lottery_id, "Saved chosen numbers");
        Ok(reconciled.enriched_participant())
    }

    /// Returns a finalized extraction.
    ///
    /// Winning numbers are withheld until the draw time has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The extraction id cannot be decoded
    /// - The lottery or the extraction does not exist
    /// - The record store fails
    pub async fn get_extraction(
        &self,
        lottery_id: &str,
        client_id: &str,
        extraction_id: &str,
    ) -> Result<Extraction, ApiError> {
        let extraction_time: OffsetDateTime = decode_extraction_id(extraction_id)?;
        let lottery: Lottery = self.lotteries.require_lottery(lottery_id).await?;

        let extraction: &Extraction = lottery
            .find_previous_extraction(extraction_time)
            .ok_or_else(|| DomainError::ExtractionNotFound(extraction_id.to_string()))?;

        debug!(client_id, lottery = lottery_id, extraction_id, "Read extraction");

        if self.clock.now() > extraction.extraction_time {
            Ok(extraction.clone())
        } else {
            Ok(extraction.without_winning_numbers())
        }
    }

    /// Ranks the participants of a lottery by matches on one extraction.
    ///
    /// Participants with no match are left out. Ties keep participant order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The extraction id cannot be decoded
    /// - The lottery or the extraction does not exist
    /// - The extraction has no winning numbers
    /// - The record store fails
    pub async fn get_extraction_stats(
        &self,
        lottery_id: &str,
        client_id: &str,
        extraction_id: &str,
    ) -> Result<Vec<ParticipantStats>, ApiError> {
        let extraction_time: OffsetDateTime = decode_extraction_id(extraction_id)?;
        let lottery: Lottery = self.lotteries.require_lottery(lottery_id).await?;

        let winning_numbers: &[i64] = lottery
            .find_previous_extraction(extraction_time)
            .and_then(|extraction| extraction.winning_numbers.as_deref())
            .ok_or_else(|| DomainError::ExtractionNotFound(extraction_id.to_string()))?;

        let mut entries: Vec<ParticipantStats> = Vec::with_capacity(lottery.participants.len());
        for participant_id in &lottery.participants {
            let Some(reconciled) = self.load_participant(participant_id).await? else {
                continue;
            };
            let Some(guess) = reconciled
                .participant
                .membership(lottery_id)
                .and_then(|membership| membership.archived_guess(extraction_time))
            else {
                continue;
            };

            entries.push(ParticipantStats {
                participant_name: self.client_names.display_name(participant_id).await?,
                count_winning_numbers: count_winning_numbers(&guess.chosen_numbers, winning_numbers),
            });
        }

        debug!(client_id, lottery = lottery_id, extraction_id, "Computed stats");
        Ok(rank_participants(entries))
    }

    async fn load_participant(
        &self,
        client_id: &str,
    ) -> Result<Option<ReconciledParticipant>, ApiError> {
        let Some(mut participant) = self.repository.get_participant(client_id).await? else {
            return Ok(None);
        };

        let lotteries: Vec<Option<Lottery>> = try_join_all(
            participant
                .joined_lotteries
                .iter()
                .map(|membership| self.lotteries.get_lottery_with_rollover(&membership.name)),
        )
        .await?;
        let lotteries: HashMap<String, Lottery> = lotteries
            .into_iter()
            .flatten()
            .map(|lottery| (lottery.name.clone(), lottery))
            .collect();

        let mut changed: bool = false;
        for membership in &mut participant.joined_lotteries {
            if let Some(lottery) = lotteries.get(&membership.name) {
                changed |= reconcile_membership(membership, lottery);
            }
        }

        if changed {
            self.repository.save_participant(&participant).await?;
            debug!(client_id, "Archived stale guesses");
        }

        Ok(Some(ReconciledParticipant {
            participant,
            lotteries,
        }))
    }
}
