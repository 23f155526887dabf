// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! External identifiers for finalized extractions.
//!
//! An extraction is identified by its draw time. Clients address it with the
//! standard base64 encoding of the RFC 3339 timestamp string.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::DomainError;

/// Encodes an extraction time as an external identifier.
///
/// # Errors
///
/// Returns an error if the time cannot be formatted as RFC 3339.
pub fn encode_extraction_id(extraction_time: OffsetDateTime) -> Result<String, DomainError> {
    let formatted: String =
        extraction_time
            .format(&Rfc3339)
            .map_err(|e| DomainError::InvalidExtractionId {
                extraction_id: extraction_time.to_string(),
                reason: e.to_string(),
            })?;
    Ok(STANDARD.encode(formatted))
}

/// Decodes an external identifier back to the extraction time.
///
/// # Errors
///
/// Returns an error if the identifier is not base64, not UTF-8, or not an
/// RFC 3339 timestamp.
pub fn decode_extraction_id(extraction_id: &str) -> Result<OffsetDateTime, DomainError> {
    let invalid = |reason: String| DomainError::InvalidExtractionId {
        extraction_id: extraction_id.to_string(),
        reason,
    };

    let bytes: Vec<u8> = STANDARD
        .decode(extraction_id)
        .map_err(|e| invalid(e.to_string()))?;
    let text: String = String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;

    OffsetDateTime::parse(&text, &Rfc3339).map_err(|e| invalid(e.to_string()))
}
