// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blob lookups.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::blobs;
use crate::error::PersistenceError;

/// Retrieves the value stored under `(namespace, key)`.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if nothing is stored under the key.
pub fn get_blob(
    conn: &mut SqliteConnection,
    namespace: &str,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    debug!(namespace, key, "Looking up blob");

    let value: Option<String> = blobs::table
        .filter(blobs::namespace.eq(namespace))
        .filter(blobs::blob_key.eq(key))
        .select(blobs::value)
        .first::<String>(conn)
        .optional()?;

    Ok(value)
}
