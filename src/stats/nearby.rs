//! Per-object activity around a location
//!
//! Aggregated figures only, never individual observations.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::time_bucket::parse_local_timestamp;
use crate::domain::{Equipment, ObjectCategory, ObservationRecord};

/// Approximate kilometres per degree (at the equator)
const KM_PER_DEGREE: f64 = 111.0;

/// Statistics for one object observed near a location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyStats {
    pub object_id: String,
    pub object_name: String,
    pub category: ObjectCategory,
    pub observation_count: u64,
    pub latest_observation: NaiveDateTime,
    pub equipment_breakdown: BTreeMap<Equipment, u64>,
}

/// Aggregate observations inside a square box of `radius_km` around
/// (`lat`, `lon`) made on or after `since`.
///
/// Records whose timestamp cannot be parsed are skipped since they cannot be
/// placed in the time window. Results are ordered by observation count
/// (highest first), then object id.
pub fn nearby_stats(
    records: &[ObservationRecord],
    lat: f64,
    lon: f64,
    radius_km: f64,
    since: NaiveDate,
) -> Vec<NearbyStats> {
    let degree_radius = radius_km / KM_PER_DEGREE;
    let mut by_object: HashMap<&str, NearbyStats> = HashMap::new();

    for record in records {
        if (record.location.lat - lat).abs() > degree_radius
            || (record.location.lon - lon).abs() > degree_radius
        {
            continue;
        }

        let Some(observed_at) = parse_local_timestamp(&record.timestamp) else {
            continue;
        };
        if observed_at.date() < since {
            continue;
        }

        let object_id = record.object.object_id.trim();
        let entry = by_object
            .entry(object_id)
            .or_insert_with(|| NearbyStats {
                object_id: object_id.to_string(),
                object_name: record.object.display_name.clone(),
                category: record.category(),
                observation_count: 0,
                latest_observation: observed_at,
                equipment_breakdown: BTreeMap::new(),
            });

        entry.observation_count += 1;
        if observed_at > entry.latest_observation {
            entry.latest_observation = observed_at;
        }
        *entry.equipment_breakdown.entry(record.equipment).or_insert(0) += 1;
    }

    let mut stats: Vec<NearbyStats> = by_object.into_values().collect();
    stats.sort_by(|a, b| {
        b.observation_count
            .cmp(&a.observation_count)
            .then_with(|| a.object_id.cmp(&b.object_id))
    });
    stats
}
