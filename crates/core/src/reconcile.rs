// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super_lottery_domain::{
    ArchivedGuess, EXTRACTION_BUFFER, Extraction, Lottery, LotteryMembership,
};

/// Returns true if the membership's in-flight guess was played on `extraction`.
///
/// A guess belongs to an extraction when it was last edited no later than
/// the extraction closed, i.e. its draw time minus [`EXTRACTION_BUFFER`].
/// The extraction is still pending at that instant (see `is_due`).
/// Memberships with no recorded edit have nothing to archive.
#[must_use]
pub fn should_archive(membership: &LotteryMembership, extraction: &Extraction) -> bool {
    let Some(last_update) = membership.last_update_chosen_numbers else {
        return false;
    };
    if membership.archived_guess(extraction.extraction_time).is_some() {
        return false;
    }
    last_update <= extraction.extraction_time - EXTRACTION_BUFFER
}

/// Archives a stale in-flight guess against the lottery's latest extraction.
///
/// The lottery must already have had its rollover applied. After archiving,
/// the in-flight guess and its timestamp are cleared, so running this again
/// is a no-op.
///
/// # Arguments
///
/// * `membership` - The participant's membership for `lottery`
/// * `lottery` - The lottery the membership refers to
///
/// # Returns
///
/// True if the membership changed and must be persisted.
pub fn reconcile_membership(membership: &mut LotteryMembership, lottery: &Lottery) -> bool {
    let Some(last_extraction) = lottery.last_extraction() else {
        return false;
    };
    if !should_archive(membership, last_extraction) {
        return false;
    }

    membership.previous_extractions.push(ArchivedGuess {
        extraction_id: last_extraction.extraction_time,
        chosen_numbers: std::mem::take(&mut membership.chosen_numbers),
    });
    membership.last_update_chosen_numbers = None;
    true
}
