//! Integration tests for the on-disk observation log feeding the statistics

mod common;

use common::{NYC_LAT, NYC_LON, ObservationBuilder, at, today};
use starlog::stats::{aggregate, nearby_stats, recent_observations};
use starlog::store::ObservationStore;
use starlog::{Equipment, ObjectCategory, ObservationRecord};
use tempfile::TempDir;

fn open_store() -> (TempDir, ObservationStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ObservationStore::open(&dir.path().join("observations.db"))
        .expect("Failed to open store");
    (dir, store)
}

#[test]
fn test_snapshot_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("observations.db");

    {
        let store = ObservationStore::open(&db_path).unwrap();
        store
            .add(&ObservationBuilder::messier("m45", 45).timestamp(at(0, 20)).build())
            .unwrap();
        store
            .add(&ObservationBuilder::moon("moon").timestamp(at(1, 20)).build())
            .unwrap();
    }

    let store = ObservationStore::open(&db_path).unwrap();
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);

    let stats = aggregate(&snapshot, today());
    assert_eq!(stats.unique_messier_ids.len(), 1);
    assert!(stats.moon_observed);
    assert_eq!(stats.current_streak_days, 2);
}

#[test]
fn test_import_json_then_remove() {
    let (_dir, store) = open_store();
    let json = r#"[
        {
            "id": "obs-1",
            "object": { "category": "planet", "object_id": "planet-jupiter", "display_name": "Jupiter" },
            "timestamp": "2025-01-14T21:00:00-05:00",
            "location": { "lat": 40.7128, "lon": -74.006, "place_name": "Home" },
            "equipment": "telescope",
            "notes": "Four moons lined up"
        },
        {
            "id": "obs-2",
            "object": { "category": "meteor-shower", "object_id": "quadrantids", "display_name": "Quadrantids" },
            "timestamp": "2025-01-04T03:30:00-05:00",
            "location": { "lat": 40.7128, "lon": -74.006 },
            "equipment": "naked-eye"
        }
    ]"#;
    let records: Vec<ObservationRecord> = serde_json::from_str(json).unwrap();

    assert_eq!(store.sync(&records).unwrap(), 2);
    // Re-importing the same file only updates
    assert_eq!(store.sync(&records).unwrap(), 0);
    assert_eq!(store.count().unwrap(), 2);

    let stats = aggregate(&store.snapshot().unwrap(), today());
    assert_eq!(stats.unique_planet_names.len(), 1);
    assert_eq!(stats.meteor_shower_ids.len(), 1);
    assert_eq!(stats.late_night_count, 1);

    assert!(store.remove("obs-2").unwrap());
    let stats = aggregate(&store.snapshot().unwrap(), today());
    assert!(stats.meteor_shower_ids.is_empty());
    assert_eq!(stats.late_night_count, 0);
}

#[test]
fn test_recent_and_nearby_views() {
    let (_dir, store) = open_store();
    let records = vec![
        ObservationBuilder::planet("a", "Saturn").timestamp(at(3, 19)).equipment(Equipment::Telescope).build(),
        ObservationBuilder::planet("b", "Saturn").timestamp(at(1, 19)).equipment(Equipment::Binoculars).build(),
        ObservationBuilder::new("c", ObjectCategory::Event, "eclipse-2025", "Lunar Eclipse")
            .timestamp(at(2, 23))
            .build(),
    ];
    store.sync(&records).unwrap();
    let snapshot = store.snapshot().unwrap();

    let recent: Vec<&str> = recent_observations(&snapshot, 2)
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(recent, vec!["b", "c"]);

    let since = today() - chrono::Duration::days(30);
    let nearby = nearby_stats(&snapshot, NYC_LAT, NYC_LON, 50.0, since);
    assert_eq!(nearby.len(), 2);
    assert_eq!(nearby[0].object_id, "planet-saturn");
    assert_eq!(nearby[0].observation_count, 2);
    assert_eq!(nearby[0].equipment_breakdown.len(), 2);
}
