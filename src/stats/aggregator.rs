//! Statistics aggregation over an observation log snapshot
//!
//! `aggregate` is a pure function: it never mutates or retains the records it
//! is given, and two calls on the same snapshot produce equal results.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::streaks::calculate_streaks;
use super::time_bucket::{TimeOfDay, day_key, parse_local_timestamp};
use crate::domain::{Equipment, ObjectCategory, ObservationRecord};

/// Messier catalog key: optional `dso-` prefix, `M`, then 1-3 digits
static MESSIER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:dso-)?M\d{1,3}$").expect("valid Messier regex"));

/// Crewed stations counted for the station achievements
const STATION_KEYS: &[&str] = &["iss", "css", "tiangong"];

/// Statistics derived from the full observation log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedStatistics {
    pub total_observations: u64,
    pub unique_object_ids: BTreeSet<String>,
    pub unique_messier_ids: BTreeSet<String>,
    pub unique_planet_names: BTreeSet<String>,
    pub equipment_used: BTreeSet<Equipment>,
    pub category_counts: BTreeMap<ObjectCategory, u64>,
    pub satellite_station_observation_count: u64,
    pub meteor_shower_ids: BTreeSet<String>,
    pub moon_observed: bool,
    pub late_night_count: u64,
    pub early_morning_count: u64,
    pub observed_days: u64,
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
    /// Records excluded from streak and time-of-day calculations
    pub unparseable_timestamps: u64,
}

impl DerivedStatistics {
    pub fn category_count(&self, category: ObjectCategory) -> u64 {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    pub fn used_equipment(&self, equipment: Equipment) -> bool {
        self.equipment_used.contains(&equipment)
    }
}

/// Whether an object id follows the Messier key convention
pub fn is_messier_id(object_id: &str) -> bool {
    MESSIER_ID.is_match(object_id.trim())
}

/// Whether a satellite object id names a crewed space station
pub fn is_space_station_id(object_id: &str) -> bool {
    let id = object_id.trim().to_lowercase();
    let key = id.strip_prefix("satellite-").unwrap_or(&id);
    STATION_KEYS.contains(&key)
}

/// Derive statistics from a snapshot of the observation log.
///
/// Storage order is irrelevant. A record whose timestamp cannot be parsed
/// still counts towards totals and uniqueness sets, but is left out of the
/// streak and time-of-day figures.
pub fn aggregate(records: &[ObservationRecord], today: NaiveDate) -> DerivedStatistics {
    let mut stats = DerivedStatistics::default();
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();

    for record in records {
        stats.total_observations += 1;
        *stats.category_counts.entry(record.category()).or_insert(0) += 1;
        stats.equipment_used.insert(record.equipment);

        let object_id = record.object.object_id.trim();
        stats.unique_object_ids.insert(object_id.to_string());

        match record.category() {
            ObjectCategory::DeepSky if is_messier_id(object_id) => {
                stats.unique_messier_ids.insert(object_id.to_string());
            }
            ObjectCategory::Planet => {
                stats
                    .unique_planet_names
                    .insert(record.object.display_name.trim().to_string());
            }
            ObjectCategory::SatellitePass if is_space_station_id(object_id) => {
                stats.satellite_station_observation_count += 1;
            }
            ObjectCategory::MeteorShower => {
                stats.meteor_shower_ids.insert(object_id.to_string());
            }
            ObjectCategory::Moon => stats.moon_observed = true,
            _ => {}
        }

        let Some(local) = parse_local_timestamp(&record.timestamp) else {
            debug!(
                id = %record.id,
                timestamp = %record.timestamp,
                "Skipping unparseable timestamp for streak and time buckets"
            );
            stats.unparseable_timestamps += 1;
            continue;
        };

        days.insert(day_key(local));
        match TimeOfDay::of(local) {
            TimeOfDay::LateNight => stats.late_night_count += 1,
            TimeOfDay::EarlyMorning => stats.early_morning_count += 1,
            TimeOfDay::Other => {}
        }
    }

    stats.observed_days = days.len() as u64;
    let streaks = calculate_streaks(days, today);
    stats.current_streak_days = streaks.current_days;
    stats.longest_streak_days = streaks.longest_days;

    stats
}

/// Most recent observations first, limited to `limit` entries.
///
/// The log carries no ordering guarantee, so this sorts explicitly. Records
/// with unparseable timestamps sort last; ties fall back to the id.
pub fn recent_observations(records: &[ObservationRecord], limit: usize) -> Vec<&ObservationRecord> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &ObservationRecord)> = records
        .iter()
        .map(|r| (parse_local_timestamp(&r.timestamp), r))
        .collect();

    keyed.sort_by(|(a_ts, a), (b_ts, b)| {
        let by_time = match (a_ts, b_ts) {
            (Some(a_ts), Some(b_ts)) => b_ts.cmp(a_ts),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_time.then_with(|| a.id.cmp(&b.id))
    });

    keyed.into_iter().take(limit).map(|(_, r)| r).collect()
}
