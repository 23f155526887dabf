// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle transitions for lotteries and participants.
//!
//! Everything here is a pure function of the entities and a point in time.
//! Loading and persisting entities is the caller's concern.

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

mod clock;
mod projection;
mod reconcile;
mod rollover;
mod stats;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, ManualClock, SystemClock};
pub use projection::project_membership;
pub use reconcile::{reconcile_membership, should_archive};
pub use rollover::{apply_rollover, is_due};
pub use stats::{count_winning_numbers, rank_participants};
