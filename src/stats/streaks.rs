//! Streak calculation
//!
//! Derives the current and longest run of consecutive observing days from the
//! set of calendar days present in the log.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Current and best daily streaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    /// Consecutive days ending today or yesterday
    pub current_days: u32,
    /// Best run of consecutive days ever reached
    pub longest_days: u32,
}

/// Compute streaks from observed calendar days.
///
/// Duplicate days collapse to one. `today` anchors the current streak: it only
/// counts when the most recent observed day is today or yesterday, so the
/// result changes across a day boundary and must not be cached.
pub fn calculate_streaks<I>(days: I, today: NaiveDate) -> StreakSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    let unique: BTreeSet<NaiveDate> = days.into_iter().collect();
    // Most recent first
    let sorted: Vec<NaiveDate> = unique.into_iter().rev().collect();

    StreakSummary {
        current_days: current_streak(&sorted, today),
        longest_days: longest_streak(&sorted),
    }
}

fn current_streak(sorted_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&most_recent) = sorted_desc.first() else {
        return 0;
    };

    let days_since = (today - most_recent).num_days();
    // Future-dated entries do not anchor a streak
    if !(0..=1).contains(&days_since) {
        return 0;
    }

    let mut streak = 1;
    for pair in sorted_desc.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

fn longest_streak(sorted_desc: &[NaiveDate]) -> u32 {
    if sorted_desc.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut running = 1;
    for pair in sorted_desc.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            running += 1;
            longest = longest.max(running);
        } else {
            running = 1;
        }
    }
    longest
}
