// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening `SQLite` databases for the blob store.

use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema of the blob table.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How a database is journaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Journal {
    /// `SQLite` default; used for in-memory databases.
    Default,
    /// Write-ahead logging; used for database files.
    Wal,
}

/// Opens the database at `url`, brings its schema up to date and applies
/// the journal mode.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, migrated or configured.
pub fn open(url: &str, journal: Journal) -> Result<SqliteConnection, PersistenceError> {
    debug!(url, ?journal, "Opening blob database");

    let mut conn: SqliteConnection = SqliteConnection::establish(url)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    if !applied.is_empty() {
        info!(url, migrations = applied.len(), "Applied blob schema migrations");
    }

    if journal == Journal::Wal {
        // PRAGMA has no Diesel DSL.
        diesel::sql_query("PRAGMA journal_mode = WAL").execute(&mut conn)?;
    }

    Ok(conn)
}
