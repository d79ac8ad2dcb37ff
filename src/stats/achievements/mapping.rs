//! Statistic mapping for achievements
//!
//! Each achievement reads exactly one value out of `DerivedStatistics`. The
//! association lives in `STATISTIC_MAP` as plain data and is checked against
//! the catalog by `RuleTable::new`.

use serde::Serialize;

use super::definitions::{AchievementId, EvaluationKind};
use crate::domain::Equipment;
use crate::stats::aggregator::DerivedStatistics;

/// A single value extracted from `DerivedStatistics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Statistic {
    TotalObservations,
    SpaceStationSightings,
    LateNightObservations,
    EarlyMorningObservations,
    UniqueMessier,
    UniquePlanets,
    UniqueObjects,
    UniqueMeteorShowers,
    LongestStreak,
    MoonObserved,
    UsedEquipment(Equipment),
    EquipmentKinds,
}

impl Statistic {
    /// Current value of this statistic
    pub fn extract(&self, stats: &DerivedStatistics) -> u64 {
        match self {
            Self::TotalObservations => stats.total_observations,
            Self::SpaceStationSightings => stats.satellite_station_observation_count,
            Self::LateNightObservations => stats.late_night_count,
            Self::EarlyMorningObservations => stats.early_morning_count,
            Self::UniqueMessier => stats.unique_messier_ids.len() as u64,
            Self::UniquePlanets => stats.unique_planet_names.len() as u64,
            Self::UniqueObjects => stats.unique_object_ids.len() as u64,
            Self::UniqueMeteorShowers => stats.meteor_shower_ids.len() as u64,
            Self::LongestStreak => u64::from(stats.longest_streak_days),
            Self::MoonObserved => u64::from(stats.moon_observed),
            Self::UsedEquipment(equipment) => u64::from(stats.used_equipment(*equipment)),
            Self::EquipmentKinds => stats.equipment_used.len() as u64,
        }
    }

    /// Evaluation kind an achievement must declare to use this statistic
    pub fn kind(&self) -> EvaluationKind {
        match self {
            Self::TotalObservations
            | Self::SpaceStationSightings
            | Self::LateNightObservations
            | Self::EarlyMorningObservations => EvaluationKind::Count,
            Self::UniqueMessier
            | Self::UniquePlanets
            | Self::UniqueObjects
            | Self::UniqueMeteorShowers => EvaluationKind::Unique,
            Self::LongestStreak => EvaluationKind::Streak,
            Self::MoonObserved | Self::UsedEquipment(_) | Self::EquipmentKinds => {
                EvaluationKind::CustomFlag
            }
        }
    }
}

/// Achievement id to statistic, one entry per catalog definition
pub static STATISTIC_MAP: &[(AchievementId, Statistic)] = &[
    (AchievementId::FirstLight, Statistic::TotalObservations),
    (AchievementId::TenObservations, Statistic::TotalObservations),
    (AchievementId::FiftyObservations, Statistic::TotalObservations),
    (AchievementId::HundredObservations, Statistic::TotalObservations),
    (AchievementId::FiveHundredObservations, Statistic::TotalObservations),
    (AchievementId::FirstMessier, Statistic::UniqueMessier),
    (AchievementId::TenMessier, Statistic::UniqueMessier),
    (AchievementId::FiftyMessier, Statistic::UniqueMessier),
    (AchievementId::MessierMarathon, Statistic::UniqueMessier),
    (AchievementId::FirstPlanet, Statistic::UniquePlanets),
    (AchievementId::NakedEyeFive, Statistic::UniquePlanets),
    (AchievementId::GrandTour, Statistic::UniquePlanets),
    (AchievementId::Explorer25, Statistic::UniqueObjects),
    (AchievementId::Explorer100, Statistic::UniqueObjects),
    (AchievementId::StationSpotter, Statistic::SpaceStationSightings),
    (AchievementId::OrbitalRegular, Statistic::SpaceStationSightings),
    (AchievementId::ShootingStar, Statistic::UniqueMeteorShowers),
    (AchievementId::ShowerChaser, Statistic::UniqueMeteorShowers),
    (AchievementId::LunarObserver, Statistic::MoonObserved),
    (AchievementId::NakedEye, Statistic::UsedEquipment(Equipment::NakedEye)),
    (AchievementId::Binoculars, Statistic::UsedEquipment(Equipment::Binoculars)),
    (AchievementId::Telescope, Statistic::UsedEquipment(Equipment::Telescope)),
    (AchievementId::FullArsenal, Statistic::EquipmentKinds),
    (AchievementId::NightOwl, Statistic::LateNightObservations),
    (AchievementId::Insomniac, Statistic::LateNightObservations),
    (AchievementId::DawnPatrol, Statistic::EarlyMorningObservations),
    (AchievementId::Streak3, Statistic::LongestStreak),
    (AchievementId::Streak7, Statistic::LongestStreak),
    (AchievementId::Streak30, Statistic::LongestStreak),
    (AchievementId::Streak100, Statistic::LongestStreak),
];
