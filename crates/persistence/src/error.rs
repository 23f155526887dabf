// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Namespace;

/// Record store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database could not be opened.
    ConnectionFailed(String),
    /// The blob schema could not be created or upgraded.
    MigrationFailed(String),
    /// A read or write failed.
    QueryFailed(String),
    /// The database path is not usable.
    InvalidPath(String),
    /// A stored blob is not a valid record for its namespace.
    MalformedBlob {
        /// Namespace the blob was read from.
        namespace: Namespace,
        /// Key the blob was read from.
        key: String,
        /// Why decoding failed.
        reason: String,
    },
    /// A record could not be encoded for storage.
    EncodingFailed(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Database connection failed: {msg}"),
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InvalidPath(path) => write!(f, "Invalid database path: {path}"),
            Self::MalformedBlob {
                namespace,
                key,
                reason,
            } => write!(f, "Malformed record {namespace}/{key}: {reason}"),
            Self::EncodingFailed(msg) => write!(f, "Could not encode record: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::QueryFailed(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::ConnectionFailed(err.to_string())
    }
}
