// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super_lottery_domain::{ArchivedGuess, Lottery, LotteryMembership};

/// Builds the participant-facing view of a membership.
///
/// The view carries the lottery's pending extraction without winning numbers
/// and exactly one history entry per finalized extraction of the lottery, in
/// lottery order. Extractions the participant never played on get an empty
/// guess.
#[must_use]
pub fn project_membership(membership: &LotteryMembership, lottery: &Lottery) -> LotteryMembership {
    let previous_extractions: Vec<ArchivedGuess> = lottery
        .previous_extractions
        .iter()
        .map(|extraction| {
            membership
                .archived_guess(extraction.extraction_time)
                .cloned()
                .unwrap_or_else(|| ArchivedGuess {
                    extraction_id: extraction.extraction_time,
                    chosen_numbers: Vec::new(),
                })
        })
        .collect();

    LotteryMembership {
        name: membership.name.clone(),
        chosen_numbers: membership.chosen_numbers.clone(),
        last_update_chosen_numbers: membership.last_update_chosen_numbers,
        previous_extractions,
        next_extraction: lottery.next_extraction.as_ref().map(|e| e.upcoming()),
    }
}
