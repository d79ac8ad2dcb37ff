//! Achievement evaluation and progress ranking
//!
//! Progress is recomputed from scratch on every call. Nothing is persisted, so
//! deleting the observation that satisfied an achievement makes it unearned
//! again on the next evaluation.

use std::cmp::Reverse;

use serde::Serialize;

use super::definitions::{Achievement, AchievementCategory};
use super::rules::{CatalogError, RuleTable};
use crate::stats::aggregator::DerivedStatistics;

/// Progress towards a single achievement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementProgress {
    pub achievement: &'static Achievement,
    pub current_value: u64,
    pub earned: bool,
    /// 0-100, clamped
    pub percent_complete: u8,
    /// Position in the rule table
    #[serde(skip)]
    catalog_index: usize,
}

impl AchievementProgress {
    fn new(achievement: &'static Achievement, current_value: u64, catalog_index: usize) -> Self {
        let requirement = u64::from(achievement.requirement);
        Self {
            achievement,
            current_value,
            earned: current_value >= requirement,
            percent_complete: percent_complete(current_value, requirement),
            catalog_index,
        }
    }
}

/// `min(100, round(current / requirement * 100))`
fn percent_complete(current: u64, requirement: u64) -> u8 {
    if requirement == 0 {
        return 100;
    }
    let percent = (current as f64 / requirement as f64 * 100.0).round();
    percent.min(100.0) as u8
}

/// Ranked progress for the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    entries: Vec<AchievementProgress>,
}

impl ProgressReport {
    /// Earned first, then by descending completion; catalog order on ties
    pub fn entries(&self) -> &[AchievementProgress] {
        &self.entries
    }

    pub fn earned_count(&self) -> usize {
        self.entries.iter().filter(|p| p.earned).count()
    }

    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Unearned achievements that have been started, closest first
    pub fn next_to_earn(&self, limit: usize) -> Vec<&AchievementProgress> {
        let mut next: Vec<&AchievementProgress> = self
            .entries
            .iter()
            .filter(|p| !p.earned && p.percent_complete > 0)
            .collect();
        next.sort_by_key(|p| Reverse(p.percent_complete));
        next.truncate(limit);
        next
    }

    /// Earned achievements for a showcase, highest tier first.
    ///
    /// Within a tier the catalog order is kept. This is independent of the
    /// main ranking in `entries()`.
    pub fn recently_earned(&self, limit: usize) -> Vec<&AchievementProgress> {
        let mut earned: Vec<&AchievementProgress> = self.entries.iter().filter(|p| p.earned).collect();
        earned.sort_by_key(|p| (Reverse(p.achievement.tier), p.catalog_index));
        earned.truncate(limit);
        earned
    }

    /// Entries grouped by category (category order), ranked within each group
    pub fn by_category(&self) -> Vec<(AchievementCategory, Vec<&AchievementProgress>)> {
        let mut groups: Vec<(AchievementCategory, Vec<&AchievementProgress>)> = Vec::new();
        for progress in &self.entries {
            let category = progress.achievement.category;
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, items)) => items.push(progress),
                None => groups.push((category, vec![progress])),
            }
        }
        groups.sort_by_key(|(category, _)| *category);
        groups
    }
}

/// Maps derived statistics onto the rule table
#[derive(Debug, Clone)]
pub struct AchievementEvaluator {
    rules: RuleTable,
}

impl AchievementEvaluator {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Evaluator over the built-in catalog; fails if the catalog is defective
    pub fn standard() -> Result<Self, CatalogError> {
        Ok(Self::new(RuleTable::standard()?))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Compute progress for every rule and rank the result
    pub fn evaluate(&self, stats: &DerivedStatistics) -> ProgressReport {
        let mut entries: Vec<AchievementProgress> = self
            .rules
            .rules()
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                AchievementProgress::new(rule.achievement, rule.statistic.extract(stats), index)
            })
            .collect();

        // Stable sort keeps catalog order on ties
        entries.sort_by_key(|p| (!p.earned, Reverse(p.percent_complete)));

        ProgressReport { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Equipment;
    use crate::stats::achievements::definitions::{ACHIEVEMENTS, AchievementId, Tier};

    fn evaluator() -> AchievementEvaluator {
        AchievementEvaluator::standard().unwrap()
    }

    fn progress_for(report: &ProgressReport, id: AchievementId) -> &AchievementProgress {
        report
            .entries()
            .iter()
            .find(|p| p.achievement.id == id)
            .unwrap()
    }

    #[test]
    fn test_percent_complete_rounding_and_clamp() {
        assert_eq!(percent_complete(0, 10), 0);
        assert_eq!(percent_complete(9, 10), 90);
        assert_eq!(percent_complete(1, 3), 33);
        assert_eq!(percent_complete(2, 3), 67);
        assert_eq!(percent_complete(1, 200), 1);
        assert_eq!(percent_complete(9, 5), 100);
    }

    #[test]
    fn test_empty_statistics() {
        let report = evaluator().evaluate(&DerivedStatistics::default());
        assert_eq!(report.total_count(), ACHIEVEMENTS.len());
        assert_eq!(report.earned_count(), 0);
        for progress in report.entries() {
            assert_eq!(progress.current_value, 0);
            assert!(!progress.earned);
            assert_eq!(progress.percent_complete, 0);
        }
        assert!(report.next_to_earn(3).is_empty());
        assert!(report.recently_earned(5).is_empty());
    }

    #[test]
    fn test_milestone_thresholds() {
        let stats = DerivedStatistics {
            total_observations: 9,
            ..Default::default()
        };
        let report = evaluator().evaluate(&stats);
        assert!(progress_for(&report, AchievementId::FirstLight).earned);
        let ten = progress_for(&report, AchievementId::TenObservations);
        assert!(!ten.earned);
        assert_eq!(ten.percent_complete, 90);

        let stats = DerivedStatistics {
            total_observations: 10,
            ..Default::default()
        };
        let report = evaluator().evaluate(&stats);
        assert!(progress_for(&report, AchievementId::TenObservations).earned);
    }

    #[test]
    fn test_over_requirement_is_clamped() {
        let stats = DerivedStatistics {
            total_observations: 900,
            ..Default::default()
        };
        let report = evaluator().evaluate(&stats);
        let five_hundred = progress_for(&report, AchievementId::FiveHundredObservations);
        assert_eq!(five_hundred.current_value, 900);
        assert_eq!(five_hundred.percent_complete, 100);
    }

    #[test]
    fn test_earned_entries_precede_unearned() {
        let mut stats = DerivedStatistics {
            total_observations: 12,
            longest_streak_days: 4,
            late_night_count: 1,
            ..Default::default()
        };
        stats.equipment_used.insert(Equipment::Binoculars);
        let report = evaluator().evaluate(&stats);

        let first_unearned = report
            .entries()
            .iter()
            .position(|p| !p.earned)
            .unwrap();
        assert!(report.entries()[..first_unearned].iter().all(|p| p.earned));
        assert!(report.entries()[first_unearned..].iter().all(|p| !p.earned));

        // Unearned part sorted by descending completion
        let unearned = &report.entries()[first_unearned..];
        assert!(
            unearned
                .windows(2)
                .all(|w| w[0].percent_complete >= w[1].percent_complete)
        );
    }

    #[test]
    fn test_next_to_earn_view() {
        let stats = DerivedStatistics {
            total_observations: 45,
            longest_streak_days: 6,
            late_night_count: 3,
            ..Default::default()
        };
        let report = evaluator().evaluate(&stats);
        let next = report.next_to_earn(3);
        assert_eq!(next.len(), 3);
        // fifty_observations 90%, streak_7 86%, hundred_observations 45%
        assert_eq!(next[0].achievement.id, AchievementId::FiftyObservations);
        assert_eq!(next[1].achievement.id, AchievementId::Streak7);
        assert_eq!(next[2].achievement.id, AchievementId::HundredObservations);
        assert!(next.iter().all(|p| !p.earned && p.percent_complete > 0));
    }

    #[test]
    fn test_recently_earned_orders_by_tier() {
        let mut stats = DerivedStatistics {
            total_observations: 120,
            ..Default::default()
        };
        stats.equipment_used.insert(Equipment::Telescope);
        let report = evaluator().evaluate(&stats);

        let showcase = report.recently_earned(10);
        let tiers: Vec<Tier> = showcase.iter().map(|p| p.achievement.tier).collect();
        assert!(tiers.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(showcase[0].achievement.id, AchievementId::HundredObservations);

        assert_eq!(report.recently_earned(2).len(), 2);
    }

    #[test]
    fn test_by_category_groups_every_entry() {
        let report = evaluator().evaluate(&DerivedStatistics::default());
        let groups = report.by_category();
        assert_eq!(groups[0].0, AchievementCategory::Milestone);
        let grouped: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(grouped, report.total_count());
    }
}
