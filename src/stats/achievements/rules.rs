//! Validated rule table
//!
//! Pairs every catalog definition with its statistic. Construction fails on
//! any catalog defect so a broken table never produces a progress report.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::definitions::{ACHIEVEMENTS, Achievement, AchievementId, EvaluationKind};
use super::mapping::{STATISTIC_MAP, Statistic};

/// Catalog configuration defects
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Achievement '{0}' is defined more than once")]
    DuplicateId(AchievementId),

    #[error("Achievement '{0}' has a non-positive requirement")]
    NonPositiveRequirement(AchievementId),

    #[error("Achievement '{0}' has no statistic mapping")]
    MissingStatistic(AchievementId),

    #[error("Achievement '{0}' is mapped to more than one statistic")]
    AmbiguousStatistic(AchievementId),

    #[error("Achievement '{id}' is declared {declared:?} but its statistic yields {actual:?}")]
    KindMismatch {
        id: AchievementId,
        declared: EvaluationKind,
        actual: EvaluationKind,
    },
}

/// A catalog definition bound to its statistic
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub achievement: &'static Achievement,
    pub statistic: Statistic,
}

/// Validated, ordered set of rules (catalog order)
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Validate `catalog` against `mapping`.
    ///
    /// Every definition needs a positive requirement and exactly one mapping
    /// whose statistic kind matches the declared evaluation kind. Mapping
    /// entries for ids outside the catalog are ignored.
    pub fn new(
        catalog: &'static [Achievement],
        mapping: &[(AchievementId, Statistic)],
    ) -> Result<Self, CatalogError> {
        let mut by_id: HashMap<AchievementId, Statistic> = HashMap::new();
        let mut ambiguous: HashSet<AchievementId> = HashSet::new();
        for (id, statistic) in mapping {
            if by_id.insert(*id, *statistic).is_some() {
                ambiguous.insert(*id);
            }
        }

        let mut seen: HashSet<AchievementId> = HashSet::new();
        let mut rules = Vec::with_capacity(catalog.len());

        for achievement in catalog {
            let id = achievement.id;
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if achievement.requirement == 0 {
                return Err(CatalogError::NonPositiveRequirement(id));
            }
            if ambiguous.contains(&id) {
                return Err(CatalogError::AmbiguousStatistic(id));
            }
            let Some(statistic) = by_id.get(&id).copied() else {
                return Err(CatalogError::MissingStatistic(id));
            };
            if statistic.kind() != achievement.kind {
                return Err(CatalogError::KindMismatch {
                    id,
                    declared: achievement.kind,
                    actual: statistic.kind(),
                });
            }

            rules.push(Rule {
                achievement,
                statistic,
            });
        }

        debug!(rules = rules.len(), "Achievement rule table validated");
        Ok(Self { rules })
    }

    /// The built-in catalog and mapping
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(ACHIEVEMENTS, STATISTIC_MAP)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::achievements::definitions::{AchievementCategory, Tier};

    const fn def(id: AchievementId, requirement: u32, kind: EvaluationKind) -> Achievement {
        Achievement {
            id,
            name: "Test",
            description: "Test achievement",
            icon: "*",
            category: AchievementCategory::Milestone,
            tier: Tier::Bronze,
            requirement,
            kind,
        }
    }

    static VALID: &[Achievement] = &[
        def(AchievementId::FirstLight, 1, EvaluationKind::Count),
        def(AchievementId::Streak3, 3, EvaluationKind::Streak),
    ];
    static DUPLICATE: &[Achievement] = &[
        def(AchievementId::FirstLight, 1, EvaluationKind::Count),
        def(AchievementId::FirstLight, 10, EvaluationKind::Count),
    ];
    static ZERO_REQUIREMENT: &[Achievement] = &[def(AchievementId::FirstLight, 0, EvaluationKind::Count)];
    static WRONG_KIND: &[Achievement] = &[def(AchievementId::Streak3, 3, EvaluationKind::Count)];

    #[test]
    fn test_standard_catalog_is_valid() {
        let table = RuleTable::standard().unwrap();
        assert_eq!(table.len(), ACHIEVEMENTS.len());
        for (rule, achievement) in table.rules().iter().zip(ACHIEVEMENTS) {
            assert_eq!(rule.achievement.id, achievement.id);
        }
    }

    #[test]
    fn test_valid_custom_catalog() {
        let mapping = [
            (AchievementId::FirstLight, Statistic::TotalObservations),
            (AchievementId::Streak3, Statistic::LongestStreak),
            // Not in this catalog, ignored
            (AchievementId::NightOwl, Statistic::LateNightObservations),
        ];
        let table = RuleTable::new(VALID, &mapping).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_mapping_fails_fast() {
        let mapping = [(AchievementId::FirstLight, Statistic::TotalObservations)];
        let err = RuleTable::new(VALID, &mapping).unwrap_err();
        assert_eq!(err, CatalogError::MissingStatistic(AchievementId::Streak3));
    }

    #[test]
    fn test_ambiguous_mapping_rejected() {
        let mapping = [
            (AchievementId::FirstLight, Statistic::TotalObservations),
            (AchievementId::FirstLight, Statistic::LateNightObservations),
            (AchievementId::Streak3, Statistic::LongestStreak),
        ];
        let err = RuleTable::new(VALID, &mapping).unwrap_err();
        assert_eq!(err, CatalogError::AmbiguousStatistic(AchievementId::FirstLight));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = RuleTable::new(DUPLICATE, STATISTIC_MAP).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(AchievementId::FirstLight));
    }

    #[test]
    fn test_zero_requirement_rejected() {
        let err = RuleTable::new(ZERO_REQUIREMENT, STATISTIC_MAP).unwrap_err();
        assert_eq!(err, CatalogError::NonPositiveRequirement(AchievementId::FirstLight));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let err = RuleTable::new(WRONG_KIND, STATISTIC_MAP).unwrap_err();
        assert!(matches!(err, CatalogError::KindMismatch { id: AchievementId::Streak3, .. }));
        assert!(err.to_string().contains("streak_3"));
    }
}
