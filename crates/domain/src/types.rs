// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A draw event of a lottery.
///
/// While pending it lives in [`Lottery::next_extraction`]; once finalized it
/// moves to [`Lottery::previous_extractions`] and its `extraction_time`
/// becomes its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// The owning lottery, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lottery_id: Option<String>,
    /// Nominal draw time.
    #[serde(with = "time::serde::rfc3339")]
    pub extraction_time: OffsetDateTime,
    /// Validated winning numbers, sorted ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_numbers: Option<Vec<i64>>,
}

impl Extraction {
    /// Creates a new extraction.
    #[must_use]
    pub const fn new(
        lottery_id: Option<String>,
        extraction_time: OffsetDateTime,
        winning_numbers: Option<Vec<i64>>,
    ) -> Self {
        Self {
            lottery_id,
            extraction_time,
            winning_numbers,
        }
    }

    /// Returns a copy of this extraction with the winning numbers removed.
    #[must_use]
    pub fn without_winning_numbers(&self) -> Self {
        Self {
            lottery_id: self.lottery_id.clone(),
            extraction_time: self.extraction_time,
            winning_numbers: None,
        }
    }

    /// Returns the participant-facing projection of this extraction.
    #[must_use]
    pub fn upcoming(&self) -> UpcomingExtraction {
        UpcomingExtraction {
            lottery_id: self.lottery_id.clone(),
            extraction_time: self.extraction_time,
        }
    }
}

/// What a participant may see of a pending extraction.
///
/// Winning numbers are never part of this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingExtraction {
    /// The owning lottery, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lottery_id: Option<String>,
    /// Nominal draw time.
    #[serde(with = "time::serde::rfc3339")]
    pub extraction_time: OffsetDateTime,
}

/// A lottery, keyed by its globally unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lottery {
    /// Unique name, also the storage key.
    pub name: String,
    /// Client id of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Client ids of everyone who joined.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Finalized extractions, oldest first.
    #[serde(default)]
    pub previous_extractions: Vec<Extraction>,
    /// The single pending extraction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_extraction: Option<Extraction>,
}

impl Lottery {
    /// Creates an empty lottery owned by `owner`.
    #[must_use]
    pub const fn new(name: String, owner: String) -> Self {
        Self {
            name,
            owner: Some(owner),
            participants: Vec::new(),
            previous_extractions: Vec::new(),
            next_extraction: None,
        }
    }

    /// Returns true if `client_id` created this lottery.
    #[must_use]
    pub fn is_owned_by(&self, client_id: &str) -> bool {
        self.owner.as_deref() == Some(client_id)
    }

    /// Adds a participant unless already present.
    ///
    /// Returns true if the participant list changed.
    pub fn add_participant(&mut self, client_id: &str) -> bool {
        if self.participants.iter().any(|p| p == client_id) {
            return false;
        }
        self.participants.push(client_id.to_string());
        true
    }

    /// The most recently finalized extraction.
    #[must_use]
    pub fn last_extraction(&self) -> Option<&Extraction> {
        self.previous_extractions.last()
    }

    /// Finds a finalized extraction by its draw time.
    #[must_use]
    pub fn find_previous_extraction(&self, extraction_time: OffsetDateTime) -> Option<&Extraction> {
        self.previous_extractions
            .iter()
            .find(|e| e.extraction_time == extraction_time)
    }
}

/// Index of the lotteries a client created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryOwner {
    /// The owner's client id.
    pub id: String,
    /// Names of the lotteries created, in creation order.
    #[serde(default)]
    pub lotteries: Vec<String>,
}

impl LotteryOwner {
    /// Creates an owner index with no lotteries.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            lotteries: Vec::new(),
        }
    }
}

/// A participant's guess archived against a finalized extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedGuess {
    /// Draw time of the extraction the guess was played on.
    #[serde(with = "time::serde::rfc3339")]
    pub extraction_id: OffsetDateTime,
    /// The numbers played; empty when the participant did not play.
    #[serde(default)]
    pub chosen_numbers: Vec<i64>,
}

/// A participant's record for one lottery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryMembership {
    /// The lottery name.
    pub name: String,
    /// The in-flight guess for the pending extraction.
    #[serde(default)]
    pub chosen_numbers: Vec<i64>,
    /// When `chosen_numbers` was last edited.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update_chosen_numbers: Option<OffsetDateTime>,
    /// Guesses archived against finalized extractions.
    #[serde(default)]
    pub previous_extractions: Vec<ArchivedGuess>,
    /// Projection of the lottery's pending extraction. Only set on responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_extraction: Option<UpcomingExtraction>,
}

impl LotteryMembership {
    /// Creates a membership with no guess.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            chosen_numbers: Vec::new(),
            last_update_chosen_numbers: None,
            previous_extractions: Vec::new(),
            next_extraction: None,
        }
    }

    /// Finds the guess archived against the extraction drawn at `extraction_id`.
    #[must_use]
    pub fn archived_guess(&self, extraction_id: OffsetDateTime) -> Option<&ArchivedGuess> {
        self.previous_extractions
            .iter()
            .find(|g| g.extraction_id == extraction_id)
    }
}

/// A client that joined at least one lottery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// The participant's client id.
    pub participant_id: String,
    /// One membership per joined lottery.
    #[serde(default)]
    pub joined_lotteries: Vec<LotteryMembership>,
}

impl Participant {
    /// Creates a participant with no memberships.
    #[must_use]
    pub const fn new(participant_id: String) -> Self {
        Self {
            participant_id,
            joined_lotteries: Vec::new(),
        }
    }

    /// Returns the membership for `lottery_id`.
    #[must_use]
    pub fn membership(&self, lottery_id: &str) -> Option<&LotteryMembership> {
        self.joined_lotteries.iter().find(|m| m.name == lottery_id)
    }

    /// Returns the membership for `lottery_id` mutably.
    pub fn membership_mut(&mut self, lottery_id: &str) -> Option<&mut LotteryMembership> {
        self.joined_lotteries
            .iter_mut()
            .find(|m| m.name == lottery_id)
    }

    /// Adds a membership unless one already exists.
    ///
    /// Returns true if a membership was added.
    pub fn join(&mut self, lottery_id: &str) -> bool {
        if self.membership(lottery_id).is_some() {
            return false;
        }
        self.joined_lotteries
            .push(LotteryMembership::new(lottery_id.to_string()));
        true
    }
}

/// How many winning numbers a participant matched on one extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    /// Display name of the participant.
    pub participant_name: String,
    /// Number of chosen numbers found among the winning numbers.
    pub count_winning_numbers: usize,
}
