//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod log;
pub mod nearby;
pub mod stats;

use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use tracing::debug;

use starlog::config::Config;
use starlog::stats::AchievementEvaluator;
use starlog::store::ObservationStore;

/// Shared state for commands that read or write the log
pub struct Context {
    pub config: Config,
    pub store: ObservationStore,
    pub evaluator: AchievementEvaluator,
}

impl Context {
    /// Validate the achievement catalog, load config and open the store.
    ///
    /// The catalog is checked first so a defective rule table stops every
    /// command before any report is produced.
    pub fn load(config_path: Option<&Path>, db_override: Option<&Path>) -> Result<Self> {
        let evaluator =
            AchievementEvaluator::standard().context("Achievement catalog is invalid")?;
        let config = Config::load_or_default(config_path)?;

        let db_path = db_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.database_path());
        debug!(db = %db_path.display(), "Opening observation store");
        let store = ObservationStore::open(&db_path)?;

        Ok(Self {
            config,
            store,
            evaluator,
        })
    }

    /// The caller's calendar date, anchoring the current streak
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
impl Context {
    /// Default config over an empty in-memory log
    pub fn in_memory() -> Self {
        Self {
            config: Config::with_defaults(),
            store: ObservationStore::open_in_memory().expect("in-memory store"),
            evaluator: AchievementEvaluator::standard().expect("valid catalog"),
        }
    }
}
