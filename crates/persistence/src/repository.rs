// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed access to the lottery namespaces.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use super_lottery_domain::{Lottery, LotteryOwner, Participant};

use crate::error::PersistenceError;
use crate::{BlobStore, Namespace};

/// Reads and writes lottery entities as JSON blobs.
///
/// A missing key is `Ok(None)`, never an error.
#[derive(Clone)]
pub struct LotteryRepository {
    store: Arc<dyn BlobStore>,
}

impl LotteryRepository {
    /// Creates a repository over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> Result<Option<T>, PersistenceError> {
        let Some(raw) = self.store.get(namespace, key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| PersistenceError::MalformedBlob {
                namespace,
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn set_json<T: Serialize + Sync>(
        &self,
        namespace: Namespace,
        key: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(value)
            .map_err(|e| PersistenceError::EncodingFailed(e.to_string()))?;
        self.store.set(namespace, key, &raw).await
    }

    // ========================================================================
    // Lotteries
    // ========================================================================

    /// Loads a lottery by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the blob is not a lottery.
    pub async fn get_lottery(&self, name: &str) -> Result<Option<Lottery>, PersistenceError> {
        self.get_json(Namespace::Lotteries, name).await
    }

    /// Stores a lottery under its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn save_lottery(&self, lottery: &Lottery) -> Result<(), PersistenceError> {
        self.set_json(Namespace::Lotteries, &lottery.name, lottery)
            .await
    }

    // ========================================================================
    // Owners
    // ========================================================================

    /// Loads the lottery index of a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the blob is malformed.
    pub async fn get_owner(&self, client_id: &str) -> Result<Option<LotteryOwner>, PersistenceError> {
        self.get_json(Namespace::LotteryOwners, client_id).await
    }

    /// Stores the lottery index of a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn save_owner(&self, owner: &LotteryOwner) -> Result<(), PersistenceError> {
        self.set_json(Namespace::LotteryOwners, &owner.id, owner)
            .await
    }

    // ========================================================================
    // Participants
    // ========================================================================

    /// Loads a participant by client id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the blob is malformed.
    pub async fn get_participant(
        &self,
        client_id: &str,
    ) -> Result<Option<Participant>, PersistenceError> {
        self.get_json(Namespace::Participants, client_id).await
    }

    /// Stores a participant under its client id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn save_participant(&self, participant: &Participant) -> Result<(), PersistenceError> {
        self.set_json(
            Namespace::Participants,
            &participant.participant_id,
            participant,
        )
        .await
    }

    // ========================================================================
    // Client names
    // ========================================================================

    /// Loads the display name of a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn get_client_name(&self, client_id: &str) -> Result<Option<String>, PersistenceError> {
        self.store.get(Namespace::ClientNames, client_id).await
    }

    /// Stores the display name of a client as plain text.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn save_client_name(&self, client_id: &str, name: &str) -> Result<(), PersistenceError> {
        self.store.set(Namespace::ClientNames, client_id, name).await
    }
}
