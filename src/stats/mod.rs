//! Observation statistics and achievement progress
//!
//! Everything here is a pure function of an observation log snapshot.
//!
//! # Data flow
//!
//! ```text
//! observation log snapshot
//!          │
//!          ▼
//!   aggregate()  ──►  DerivedStatistics
//!                            │
//!                            ▼
//!   AchievementEvaluator ──► ProgressReport
//!   (validated RuleTable)     ├─ entries()          ranked list
//!                             ├─ next_to_earn(n)
//!                             └─ recently_earned(n)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let evaluator = AchievementEvaluator::standard()?;
//! let snapshot = store.snapshot()?;
//! let (stats, report) = evaluate_log(&evaluator, &snapshot, Local::now().date_naive());
//! ```

pub mod achievements;
mod aggregator;
mod nearby;
mod streaks;
mod time_bucket;

pub use achievements::{AchievementEvaluator, AchievementProgress, ProgressReport};
pub use aggregator::{
    DerivedStatistics, aggregate, is_messier_id, is_space_station_id, recent_observations,
};
pub use nearby::{NearbyStats, nearby_stats};
pub use streaks::{StreakSummary, calculate_streaks};
pub use time_bucket::{TimeOfDay, day_bucket, day_key, parse_local_timestamp};

use chrono::NaiveDate;

use crate::domain::ObservationRecord;

/// Aggregate a snapshot and evaluate it in one step.
///
/// `today` anchors the current streak; pass the caller's local date.
pub fn evaluate_log(
    evaluator: &AchievementEvaluator,
    records: &[ObservationRecord],
    today: NaiveDate,
) -> (DerivedStatistics, ProgressReport) {
    let stats = aggregate(records, today);
    let report = evaluator.evaluate(&stats);
    (stats, report)
}
