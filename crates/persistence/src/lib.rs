// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record store access for the Super Lottery.
//!
//! Entities are kept as JSON (or plain text) blobs addressed by a
//! `(namespace, key)` pair. The [`BlobStore`] trait is the only contract the
//! services depend on; [`SqliteBlobStore`] implements it on top of Diesel and
//! [`LotteryRepository`] adds typed access for each namespace.
//!
//! ## Consistency
//!
//! Every read and write is strongly consistent per key. Writes are
//! last-writer-wins and there is no multi-key transaction: callers that write
//! two keys for one logical operation accept that a failure between the two
//! writes leaves them inconsistent.
//!
//! ## Testing Philosophy
//!
//! - Tests run against isolated in-memory `SQLite` databases
//! - Each `new_in_memory()` call receives its own database

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

use async_trait::async_trait;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::info;

use crate::connection::Journal;

mod connection;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use repository::LotteryRepository;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The four partitions of the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `lotteries[name] -> Lottery`
    Lotteries,
    /// `lottery-owners[clientId] -> LotteryOwner`
    LotteryOwners,
    /// `participants[clientId] -> Participant`
    Participants,
    /// `client-names[clientId] -> display name`
    ClientNames,
}

impl Namespace {
    /// The stable storage name of this namespace.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lotteries => "lotteries",
            Self::LotteryOwners => "lottery-owners",
            Self::Participants => "participants",
            Self::ClientNames => "client-names",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A namespaced key-value store of text blobs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn get(&self, namespace: Namespace, key: &str)
    -> Result<Option<String>, PersistenceError>;

    /// Writes `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn set(&self, namespace: Namespace, key: &str, value: &str)
    -> Result<(), PersistenceError>;
}

/// [`BlobStore`] backed by a single `SQLite` table.
///
/// The connection is guarded by an async mutex, so concurrent operations on
/// one store are serialized.
#[derive(Clone)]
pub struct SqliteBlobStore {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl SqliteBlobStore {
    /// Creates a store over a fresh in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_lottery_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = connection::open(&shared_memory_url, Journal::Default)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Creates a store over a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InvalidPath(path.as_ref().to_string_lossy().into_owned())
        })?;

        let conn: SqliteConnection = connection::open(path_str, Journal::Wal)?;

        info!(path = path_str, "Opened file-based blob store");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn get(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> Result<Option<String>, PersistenceError> {
        let mut conn = self.conn.lock().await;
        queries::blobs::get_blob(&mut conn, namespace.as_str(), key)
    }

    async fn set(
        &self,
        namespace: Namespace,
        key: &str,
        value: &str,
    ) -> Result<(), PersistenceError> {
        let mut conn = self.conn.lock().await;
        mutations::blobs::set_blob(&mut conn, namespace.as_str(), key, value)
    }
}
