// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request bodies accepted by the services.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of a lottery creation or join request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryNameRequest {
    /// The lottery name.
    #[serde(default)]
    pub name: String,
}

/// Body of a next-extraction scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextExtractionRequest {
    /// When the draw happens.
    #[serde(with = "time::serde::rfc3339")]
    pub extraction_time: OffsetDateTime,
    /// The ten winning numbers, in any order.
    #[serde(default)]
    pub winning_numbers: Option<Vec<i64>>,
}

/// Body of a chosen-numbers update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenNumbersRequest {
    /// The participant's ten numbers, in any order.
    #[serde(default)]
    pub chosen_numbers: Vec<i64>,
}

/// Body of a display-name update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientNameRequest {
    /// The new display name.
    #[serde(default)]
    pub name: String,
}
