// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON request bodies.
//!
//! The browser client posts `JSON.stringify(...)` without a `Content-Type`
//! header, so bodies are parsed as JSON whatever the declared media type.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::HttpError;

/// Extractor for a JSON body that ignores `Content-Type`.
///
/// Unreadable or malformed bodies are rejected with 400 and the usual
/// `{ "data": message }` error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes: Bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Could not read request body");
            HttpError {
                status: e.status(),
                message: e.body_text(),
            }
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            debug!(error = %e, "Malformed request body");
            HttpError {
                status: StatusCode::BAD_REQUEST,
                message: format!("Invalid request body: {e}"),
            }
        })
    }
}
