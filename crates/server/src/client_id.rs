// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client identification for the server.
//!
//! Every browser is identified by an opaque id kept in the
//! `super-lottery-client-id` cookie. There is no authentication: whoever
//! presents the cookie is that client.

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponseParts, ResponseParts},
};
use std::convert::Infallible;
use tracing::{debug, warn};
use uuid::Uuid;

/// Name of the cookie carrying the client id.
pub const CLIENT_ID_COOKIE: &str = "super-lottery-client-id";

/// Cookie lifetime in seconds (one year).
const CLIENT_ID_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Extractor for the calling client's id.
///
/// When the request carries no id cookie a fresh UUID v4 is issued. Return
/// the extractor as part of the response so the new cookie reaches the
/// browser:
///
/// ```ignore
/// async fn my_handler(client: ClientId) -> (ClientId, Json<Response>) {
///     let body = do_something(&client.id);
///     (client, Json(body))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId {
    /// The client id.
    pub id: String,
    issued: bool,
}

impl ClientId {
    /// Returns true if the id was generated for this request.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.issued
    }

    fn set_cookie_header(&self) -> String {
        format!(
            "{CLIENT_ID_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={CLIENT_ID_MAX_AGE}",
            self.id
        )
    }
}

/// Finds the client id among the request's `Cookie` headers.
fn client_id_from_cookies(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| {
            value
                .to_str()
                .map_err(|_| warn!("Ignoring Cookie header with invalid encoding"))
                .ok()
        })
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == CLIENT_ID_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

impl<S: Send + Sync> FromRequestParts<S> for ClientId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = client_id_from_cookies(parts) {
            return Ok(Self { id, issued: false });
        }

        let id: String = Uuid::new_v4().to_string();
        debug!(client_id = %id, "Issued new client id");
        Ok(Self { id, issued: true })
    }
}

impl IntoResponseParts for ClientId {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.is_new() {
            match HeaderValue::from_str(&self.set_cookie_header()) {
                Ok(value) => {
                    res.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => warn!(error = %e, "Could not encode client id cookie"),
            }
        }
        Ok(res)
    }
}
