// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Services behind the Super Lottery HTTP endpoints.
//!
//! Each service receives its collaborators explicitly: a
//! [`LotteryRepository`](super_lottery_persistence::LotteryRepository) over
//! the record store and a [`Clock`](super_lottery::Clock). Services return
//! plain values or an [`ApiError`]; turning those into HTTP responses is the
//! server's job.

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

mod client_names;
mod error;
mod lotteries;
mod participants;
mod request_response;

#[cfg(test)]
mod tests;

pub use client_names::ClientNameService;
pub use error::{ApiError, translate_domain_error};
pub use lotteries::LotteryService;
pub use participants::ParticipantService;
pub use request_response::{
    ChosenNumbersRequest, ClientNameRequest, LotteryNameRequest, NextExtractionRequest,
};
