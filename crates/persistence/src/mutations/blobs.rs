// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blob writes.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::blobs;
use crate::error::PersistenceError;

/// Stores `value` under `(namespace, key)`, replacing any previous value.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn set_blob(
    conn: &mut SqliteConnection,
    namespace: &str,
    key: &str,
    value: &str,
) -> Result<(), PersistenceError> {
    debug!(namespace, key, bytes = value.len(), "Storing blob");

    diesel::replace_into(blobs::table)
        .values((
            blobs::namespace.eq(namespace),
            blobs::blob_key.eq(key),
            blobs::value.eq(value),
        ))
        .execute(conn)?;

    Ok(())
}
