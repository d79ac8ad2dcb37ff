//! Achievements: static rule table, statistic mapping and progress evaluation

mod definitions;
mod evaluator;
mod mapping;
mod rules;

pub use definitions::{
    ACHIEVEMENTS, Achievement, AchievementCategory, AchievementId, EvaluationKind, Tier,
};
pub use evaluator::{AchievementEvaluator, AchievementProgress, ProgressReport};
pub use mapping::{STATISTIC_MAP, Statistic};
pub use rules::{CatalogError, Rule, RuleTable};
