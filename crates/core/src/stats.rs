// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super_lottery_domain::ParticipantStats;

/// Counts how many chosen numbers appear among the winning numbers.
#[must_use]
pub fn count_winning_numbers(chosen_numbers: &[i64], winning_numbers: &[i64]) -> usize {
    chosen_numbers
        .iter()
        .filter(|n| winning_numbers.contains(n))
        .count()
}

/// Drops participants with no match and orders the rest by match count.
///
/// The sort is stable: ties keep the order in which participants joined.
#[must_use]
pub fn rank_participants(mut stats: Vec<ParticipantStats>) -> Vec<ParticipantStats> {
    stats.retain(|s| s.count_winning_numbers > 0);
    stats.sort_by(|a, b| b.count_winning_numbers.cmp(&a.count_winning_numbers));
    stats
}
