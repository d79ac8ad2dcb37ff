//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Override for the observation database location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Achievement report settings
    #[serde(default)]
    pub report: ReportSettings,

    /// Defaults for the nearby activity query
    #[serde(default)]
    pub nearby: NearbySettings,
}

/// Limits for the derived achievement views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Entries in the "next to earn" view
    #[serde(default = "default_next_to_earn_limit")]
    pub next_to_earn_limit: usize,

    /// Entries in the earned showcase
    #[serde(default = "default_showcase_limit")]
    pub showcase_limit: usize,

    /// Observations listed by `log list` when no limit is given
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            next_to_earn_limit: default_next_to_earn_limit(),
            showcase_limit: default_showcase_limit(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_next_to_earn_limit() -> usize {
    3
}

fn default_showcase_limit() -> usize {
    5
}

fn default_recent_limit() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySettings {
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Look-back window in days
    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for NearbySettings {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            days: default_days(),
        }
    }
}

fn default_radius_km() -> f64 {
    50.0
}

fn default_days() -> u32 {
    30
}
