// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super_lottery_domain::{EXTRACTION_BUFFER, Extraction, Lottery};
use time::OffsetDateTime;

/// Returns true once a pending extraction has entered the closing buffer.
///
/// An extraction closes [`EXTRACTION_BUFFER`] before its nominal draw time,
/// so submissions stop early and the result becomes historical shortly
/// before the draw.
#[must_use]
pub fn is_due(extraction: &Extraction, now: OffsetDateTime) -> bool {
    extraction.extraction_time < now + EXTRACTION_BUFFER
}

/// Moves a due pending extraction into the lottery's history.
///
/// # Arguments
///
/// * `lottery` - The lottery to update in place
/// * `now` - The current instant
///
/// # Returns
///
/// True if the lottery changed and must be persisted.
pub fn apply_rollover(lottery: &mut Lottery, now: OffsetDateTime) -> bool {
    let due: bool = lottery
        .next_extraction
        .as_ref()
        .is_some_and(|next| is_due(next, now));
    if !due {
        return false;
    }

    if let Some(next) = lottery.next_extraction.take() {
        lottery.previous_extractions.push(next);
    }
    true
}
