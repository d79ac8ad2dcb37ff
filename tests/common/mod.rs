//! Shared fixtures for observation log tests

#![allow(dead_code)]

use chrono::NaiveDate;
use starlog::{Equipment, Location, ObjectCategory, ObservationRecord, ObservedObject};

pub const NYC_LAT: f64 = 40.7128;
pub const NYC_LON: f64 = -74.0060;

/// Fixed evaluation date used across tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

/// RFC 3339 timestamp `days_ago` days before `today()` at `hour`:00 New York time
pub fn at(days_ago: i64, hour: u32) -> String {
    let day = today() - chrono::Duration::days(days_ago);
    format!("{}T{:02}:00:00-05:00", day.format("%Y-%m-%d"), hour)
}

/// Builds observation records with sensible defaults
pub struct ObservationBuilder {
    record: ObservationRecord,
}

impl ObservationBuilder {
    pub fn new(id: &str, category: ObjectCategory, object_id: &str, name: &str) -> Self {
        Self {
            record: ObservationRecord {
                id: id.to_string(),
                object: ObservedObject {
                    category,
                    object_id: object_id.to_string(),
                    display_name: name.to_string(),
                },
                timestamp: at(0, 21),
                location: Location {
                    lat: NYC_LAT,
                    lon: NYC_LON,
                    place_name: Some("Brooklyn Bridge Park".to_string()),
                },
                equipment: Equipment::NakedEye,
                notes: None,
            },
        }
    }

    pub fn moon(id: &str) -> Self {
        Self::new(id, ObjectCategory::Moon, "moon", "Moon")
    }

    pub fn messier(id: &str, number: u32) -> Self {
        Self::new(
            id,
            ObjectCategory::DeepSky,
            &format!("dso-M{number}"),
            &format!("Messier {number}"),
        )
        .equipment(Equipment::Telescope)
    }

    pub fn planet(id: &str, name: &str) -> Self {
        Self::new(
            id,
            ObjectCategory::Planet,
            &format!("planet-{}", name.to_lowercase()),
            name,
        )
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.record.timestamp = timestamp.into();
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.record.equipment = equipment;
        self
    }

    pub fn build(self) -> ObservationRecord {
        self.record
    }
}

/// `count` moon observations, one per hour of the current evening
pub fn moon_observations(count: usize) -> Vec<ObservationRecord> {
    (0..count)
        .map(|i| {
            ObservationBuilder::moon(&format!("moon-{i}"))
                .timestamp(format!("2025-01-15T20:{:02}:00-05:00", i % 60))
                .build()
        })
        .collect()
}
