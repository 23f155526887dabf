// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{DomainError, decode_extraction_id, encode_extraction_id};

#[test]
fn test_encode_extraction_id_is_base64_of_rfc3339() {
    let id: String = encode_extraction_id(datetime!(2026-03-01 20:00:00 UTC)).unwrap();
    // base64("2026-03-01T20:00:00Z")
    assert_eq!(id, "MjAyNi0wMy0wMVQyMDowMDowMFo=");
}

#[test]
fn test_decode_extraction_id_accepts_browser_timestamps() {
    // base64("2026-03-01T20:00:00.000Z"), as produced by btoa(Date#toISOString())
    let decoded = decode_extraction_id("MjAyNi0wMy0wMVQyMDowMDowMC4wMDBa").unwrap();
    assert_eq!(decoded, datetime!(2026-03-01 20:00:00 UTC));
}

#[test]
fn test_decode_extraction_id_round_trips_encoded_id() {
    let time = datetime!(2026-07-14 09:30:15 UTC);
    let id: String = encode_extraction_id(time).unwrap();
    assert_eq!(decode_extraction_id(&id).unwrap(), time);
}

#[test]
fn test_decode_extraction_id_rejects_invalid_base64() {
    let result = decode_extraction_id("not base64!");
    assert!(matches!(
        result,
        Err(DomainError::InvalidExtractionId { .. })
    ));
}

#[test]
fn test_decode_extraction_id_rejects_non_timestamp_payload() {
    // base64("hello")
    let result = decode_extraction_id("aGVsbG8=");
    assert!(matches!(
        result,
        Err(DomainError::InvalidExtractionId { .. })
    ));
}
