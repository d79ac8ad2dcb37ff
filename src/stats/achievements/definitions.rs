//! Achievement definitions and metadata
//!
//! The catalog is static data. Its order is the default display priority;
//! evaluation does not depend on it.

use serde::{Serialize, Serializer};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // Milestone achievements
    FirstLight,
    TenObservations,
    FiftyObservations,
    HundredObservations,
    FiveHundredObservations,

    // Deep sky achievements
    FirstMessier,
    TenMessier,
    FiftyMessier,
    MessierMarathon,

    // Planet achievements
    FirstPlanet,
    NakedEyeFive,
    GrandTour,

    // Explorer achievements
    Explorer25,
    Explorer100,

    // Satellite achievements
    StationSpotter,
    OrbitalRegular,

    // Meteor achievements
    ShootingStar,
    ShowerChaser,

    // Moon achievements
    LunarObserver,

    // Equipment achievements
    NakedEye,
    Binoculars,
    Telescope,
    FullArsenal,

    // Time achievements
    NightOwl,
    Insomniac,
    DawnPatrol,

    // Streak achievements
    Streak3,
    Streak7,
    Streak30,
    Streak100,
}

impl AchievementId {
    /// Get the stable string ID
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLight => "first_light",
            Self::TenObservations => "ten_observations",
            Self::FiftyObservations => "fifty_observations",
            Self::HundredObservations => "hundred_observations",
            Self::FiveHundredObservations => "five_hundred_observations",
            Self::FirstMessier => "first_messier",
            Self::TenMessier => "ten_messier",
            Self::FiftyMessier => "fifty_messier",
            Self::MessierMarathon => "messier_marathon",
            Self::FirstPlanet => "first_planet",
            Self::NakedEyeFive => "naked_eye_five",
            Self::GrandTour => "grand_tour",
            Self::Explorer25 => "explorer_25",
            Self::Explorer100 => "explorer_100",
            Self::StationSpotter => "station_spotter",
            Self::OrbitalRegular => "orbital_regular",
            Self::ShootingStar => "shooting_star",
            Self::ShowerChaser => "shower_chaser",
            Self::LunarObserver => "lunar_observer",
            Self::NakedEye => "naked_eye",
            Self::Binoculars => "binoculars",
            Self::Telescope => "telescope",
            Self::FullArsenal => "full_arsenal",
            Self::NightOwl => "night_owl",
            Self::Insomniac => "insomniac",
            Self::DawnPatrol => "dawn_patrol",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak30 => "streak_30",
            Self::Streak100 => "streak_100",
        }
    }

    /// Parse from the stable string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_light" => Some(Self::FirstLight),
            "ten_observations" => Some(Self::TenObservations),
            "fifty_observations" => Some(Self::FiftyObservations),
            "hundred_observations" => Some(Self::HundredObservations),
            "five_hundred_observations" => Some(Self::FiveHundredObservations),
            "first_messier" => Some(Self::FirstMessier),
            "ten_messier" => Some(Self::TenMessier),
            "fifty_messier" => Some(Self::FiftyMessier),
            "messier_marathon" => Some(Self::MessierMarathon),
            "first_planet" => Some(Self::FirstPlanet),
            "naked_eye_five" => Some(Self::NakedEyeFive),
            "grand_tour" => Some(Self::GrandTour),
            "explorer_25" => Some(Self::Explorer25),
            "explorer_100" => Some(Self::Explorer100),
            "station_spotter" => Some(Self::StationSpotter),
            "orbital_regular" => Some(Self::OrbitalRegular),
            "shooting_star" => Some(Self::ShootingStar),
            "shower_chaser" => Some(Self::ShowerChaser),
            "lunar_observer" => Some(Self::LunarObserver),
            "naked_eye" => Some(Self::NakedEye),
            "binoculars" => Some(Self::Binoculars),
            "telescope" => Some(Self::Telescope),
            "full_arsenal" => Some(Self::FullArsenal),
            "night_owl" => Some(Self::NightOwl),
            "insomniac" => Some(Self::Insomniac),
            "dawn_patrol" => Some(Self::DawnPatrol),
            "streak_3" => Some(Self::Streak3),
            "streak_7" => Some(Self::Streak7),
            "streak_30" => Some(Self::Streak30),
            "streak_100" => Some(Self::Streak100),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstLight,
            Self::TenObservations,
            Self::FiftyObservations,
            Self::HundredObservations,
            Self::FiveHundredObservations,
            Self::FirstMessier,
            Self::TenMessier,
            Self::FiftyMessier,
            Self::MessierMarathon,
            Self::FirstPlanet,
            Self::NakedEyeFive,
            Self::GrandTour,
            Self::Explorer25,
            Self::Explorer100,
            Self::StationSpotter,
            Self::OrbitalRegular,
            Self::ShootingStar,
            Self::ShowerChaser,
            Self::LunarObserver,
            Self::NakedEye,
            Self::Binoculars,
            Self::Telescope,
            Self::FullArsenal,
            Self::NightOwl,
            Self::Insomniac,
            Self::DawnPatrol,
            Self::Streak3,
            Self::Streak7,
            Self::Streak30,
            Self::Streak100,
        ]
    }
}

impl Serialize for AchievementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementCategory {
    Milestone,
    DeepSky,
    Planets,
    Explorer,
    Satellites,
    Meteors,
    Moon,
    Equipment,
    Time,
    Streak,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milestone => "Milestones",
            Self::DeepSky => "Deep Sky",
            Self::Planets => "Planets",
            Self::Explorer => "Explorer",
            Self::Satellites => "Satellites",
            Self::Meteors => "Meteors",
            Self::Moon => "Moon",
            Self::Equipment => "Equipment",
            Self::Time => "Time",
            Self::Streak => "Streaks",
        }
    }
}

/// Achievement tier, ordered bronze < silver < gold < platinum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

/// How an achievement's current value is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationKind {
    /// Number of matching observations
    Count,
    /// Size of a uniqueness set
    Unique,
    /// Longest daily streak ever reached
    Streak,
    /// Boolean-derived 0/1 or a small derived count
    CustomFlag,
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub tier: Tier,
    /// Value the mapped statistic must reach
    pub requirement: u32,
    pub kind: EvaluationKind,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === MILESTONE ===
    Achievement {
        id: AchievementId::FirstLight,
        name: "First Light",
        description: "Log your first observation",
        icon: "🔭",
        category: AchievementCategory::Milestone,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::TenObservations,
        name: "Getting Started",
        description: "Log 10 observations",
        icon: "📈",
        category: AchievementCategory::Milestone,
        tier: Tier::Bronze,
        requirement: 10,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::FiftyObservations,
        name: "Dedicated Observer",
        description: "Log 50 observations",
        icon: "📓",
        category: AchievementCategory::Milestone,
        tier: Tier::Silver,
        requirement: 50,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::HundredObservations,
        name: "Century of Stars",
        description: "Log 100 observations",
        icon: "💯",
        category: AchievementCategory::Milestone,
        tier: Tier::Gold,
        requirement: 100,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::FiveHundredObservations,
        name: "Sky Veteran",
        description: "Log 500 observations",
        icon: "🏛️",
        category: AchievementCategory::Milestone,
        tier: Tier::Platinum,
        requirement: 500,
        kind: EvaluationKind::Count,
    },
    // === DEEP SKY ===
    Achievement {
        id: AchievementId::FirstMessier,
        name: "Faint Fuzzy",
        description: "Observe your first Messier object",
        icon: "🌫️",
        category: AchievementCategory::DeepSky,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::TenMessier,
        name: "Messier Hunter",
        description: "Observe 10 different Messier objects",
        icon: "🎯",
        category: AchievementCategory::DeepSky,
        tier: Tier::Silver,
        requirement: 10,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::FiftyMessier,
        name: "Deep Sky Diver",
        description: "Observe 50 different Messier objects",
        icon: "🌌",
        category: AchievementCategory::DeepSky,
        tier: Tier::Gold,
        requirement: 50,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::MessierMarathon,
        name: "Messier Marathon",
        description: "Observe all 110 Messier objects",
        icon: "🏃",
        category: AchievementCategory::DeepSky,
        tier: Tier::Platinum,
        requirement: 110,
        kind: EvaluationKind::Unique,
    },
    // === PLANETS ===
    Achievement {
        id: AchievementId::FirstPlanet,
        name: "Wanderer",
        description: "Observe your first planet",
        icon: "🪐",
        category: AchievementCategory::Planets,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::NakedEyeFive,
        name: "Classical Five",
        description: "Observe 5 different planets",
        icon: "✋",
        category: AchievementCategory::Planets,
        tier: Tier::Silver,
        requirement: 5,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::GrandTour,
        name: "Grand Tour",
        description: "Observe all 7 other planets",
        icon: "🚀",
        category: AchievementCategory::Planets,
        tier: Tier::Gold,
        requirement: 7,
        kind: EvaluationKind::Unique,
    },
    // === EXPLORER ===
    Achievement {
        id: AchievementId::Explorer25,
        name: "Explorer",
        description: "Observe 25 different objects",
        icon: "🧭",
        category: AchievementCategory::Explorer,
        tier: Tier::Silver,
        requirement: 25,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::Explorer100,
        name: "Sky Cartographer",
        description: "Observe 100 different objects",
        icon: "🗺️",
        category: AchievementCategory::Explorer,
        tier: Tier::Gold,
        requirement: 100,
        kind: EvaluationKind::Unique,
    },
    // === SATELLITES ===
    Achievement {
        id: AchievementId::StationSpotter,
        name: "Station Spotter",
        description: "Watch a space station pass overhead",
        icon: "🛰️",
        category: AchievementCategory::Satellites,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::OrbitalRegular,
        name: "Orbital Regular",
        description: "Watch 10 space station passes",
        icon: "📡",
        category: AchievementCategory::Satellites,
        tier: Tier::Silver,
        requirement: 10,
        kind: EvaluationKind::Count,
    },
    // === METEORS ===
    Achievement {
        id: AchievementId::ShootingStar,
        name: "Shooting Star",
        description: "Watch a meteor shower",
        icon: "🌠",
        category: AchievementCategory::Meteors,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Unique,
    },
    Achievement {
        id: AchievementId::ShowerChaser,
        name: "Shower Chaser",
        description: "Watch 3 different meteor showers",
        icon: "☄️",
        category: AchievementCategory::Meteors,
        tier: Tier::Silver,
        requirement: 3,
        kind: EvaluationKind::Unique,
    },
    // === MOON ===
    Achievement {
        id: AchievementId::LunarObserver,
        name: "Lunar Observer",
        description: "Observe the Moon",
        icon: "🌙",
        category: AchievementCategory::Moon,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::CustomFlag,
    },
    // === EQUIPMENT ===
    Achievement {
        id: AchievementId::NakedEye,
        name: "Naked Eye",
        description: "Log an observation without optical aid",
        icon: "👁️",
        category: AchievementCategory::Equipment,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::CustomFlag,
    },
    Achievement {
        id: AchievementId::Binoculars,
        name: "Binocular Astronomer",
        description: "Log an observation with binoculars",
        icon: "🔍",
        category: AchievementCategory::Equipment,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::CustomFlag,
    },
    Achievement {
        id: AchievementId::Telescope,
        name: "Scope Jockey",
        description: "Log an observation with a telescope",
        icon: "🔭",
        category: AchievementCategory::Equipment,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::CustomFlag,
    },
    Achievement {
        id: AchievementId::FullArsenal,
        name: "Full Arsenal",
        description: "Use naked eye, binoculars and a telescope",
        icon: "🧰",
        category: AchievementCategory::Equipment,
        tier: Tier::Silver,
        requirement: 3,
        kind: EvaluationKind::CustomFlag,
    },
    // === TIME ===
    Achievement {
        id: AchievementId::NightOwl,
        name: "Night Owl",
        description: "Log an observation between midnight and 4 AM",
        icon: "🦉",
        category: AchievementCategory::Time,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::Insomniac,
        name: "Insomniac",
        description: "Log 10 observations between midnight and 4 AM",
        icon: "🌃",
        category: AchievementCategory::Time,
        tier: Tier::Silver,
        requirement: 10,
        kind: EvaluationKind::Count,
    },
    Achievement {
        id: AchievementId::DawnPatrol,
        name: "Dawn Patrol",
        description: "Log an observation between 4 AM and 6 AM",
        icon: "🌅",
        category: AchievementCategory::Time,
        tier: Tier::Bronze,
        requirement: 1,
        kind: EvaluationKind::Count,
    },
    // === STREAK ===
    Achievement {
        id: AchievementId::Streak3,
        name: "Clear Skies",
        description: "Observe on 3 consecutive days",
        icon: "🔥",
        category: AchievementCategory::Streak,
        tier: Tier::Bronze,
        requirement: 3,
        kind: EvaluationKind::Streak,
    },
    Achievement {
        id: AchievementId::Streak7,
        name: "Week of Wonders",
        description: "Observe on 7 consecutive days",
        icon: "📅",
        category: AchievementCategory::Streak,
        tier: Tier::Silver,
        requirement: 7,
        kind: EvaluationKind::Streak,
    },
    Achievement {
        id: AchievementId::Streak30,
        name: "Lunar Cycle",
        description: "Observe on 30 consecutive days",
        icon: "🌕",
        category: AchievementCategory::Streak,
        tier: Tier::Gold,
        requirement: 30,
        kind: EvaluationKind::Streak,
    },
    Achievement {
        id: AchievementId::Streak100,
        name: "Celestial Devotion",
        description: "Observe on 100 consecutive days",
        icon: "👑",
        category: AchievementCategory::Streak,
        tier: Tier::Platinum,
        requirement: 100,
        kind: EvaluationKind::Streak,
    },
];

impl Achievement {
    /// Look up a definition in the built-in catalog
    pub fn get(id: AchievementId) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
