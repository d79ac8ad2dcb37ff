//! Observation log storage
//!
//! The store owns every mutation of the log. Statistics code only ever sees
//! the `Vec<ObservationRecord>` returned by [`ObservationStore::snapshot`].

mod db;

pub use db::ObservationDb;

use std::path::Path;

use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::domain::{Equipment, Location, ObjectCategory, ObservationRecord, ObservedObject};

const SELECT_COLUMNS: &str = "id, object_type, object_id, object_name, timestamp, \
     lat, lon, place_name, equipment, notes";

/// Read/write access to the observation log
#[derive(Clone)]
pub struct ObservationStore {
    db: ObservationDb,
}

impl ObservationStore {
    pub fn new(db: ObservationDb) -> Self {
        Self { db }
    }

    /// Open the store at a custom database path
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(ObservationDb::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(ObservationDb::open_in_memory()?))
    }

    /// Append a new observation. Fails if the id is already stored.
    pub fn add(&self, record: &ObservationRecord) -> Result<()> {
        let conn = self.db.conn();
        if Self::exists(&conn, &record.id)? {
            bail!("Observation '{}' already exists", record.id);
        }
        Self::insert(&conn, record)?;
        debug!(id = %record.id, object = %record.object.object_id, "Observation added");
        Ok(())
    }

    /// Upsert a batch of observations, returning how many were new.
    ///
    /// Existing ids are overwritten with the incoming values.
    pub fn sync(&self, records: &[ObservationRecord]) -> Result<usize> {
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;
        let mut inserted = 0;

        for record in records {
            if Self::exists(&tx, &record.id)? {
                tx.execute(
                    r#"UPDATE observations SET object_type = ?2, object_id = ?3, object_name = ?4,
                           timestamp = ?5, lat = ?6, lon = ?7, place_name = ?8, equipment = ?9, notes = ?10
                       WHERE id = ?1"#,
                    params![
                        record.id,
                        record.object.category.as_str(),
                        record.object.object_id,
                        record.object.display_name,
                        record.timestamp,
                        record.location.lat,
                        record.location.lon,
                        record.location.place_name,
                        record.equipment.as_str(),
                        record.notes,
                    ],
                )?;
            } else {
                Self::insert(&tx, record)?;
                inserted += 1;
            }
        }

        tx.commit()?;
        info!(received = records.len(), inserted, "Observations synced");
        Ok(inserted)
    }

    /// Remove an observation by id. Returns whether anything was deleted.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let conn = self.db.conn();
        let deleted = conn.execute("DELETE FROM observations WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }

    pub fn get(&self, id: &str) -> Result<Option<ObservationRecord>> {
        let conn = self.db.conn();
        let sql = format!("SELECT {SELECT_COLUMNS} FROM observations WHERE id = ?1");
        let row = conn
            .query_row(&sql, [id], read_row)
            .optional()?
            .transpose()?;
        Ok(row)
    }

    /// Every stored observation. Callers must not rely on the order.
    pub fn snapshot(&self) -> Result<Vec<ObservationRecord>> {
        let conn = self.db.conn();
        let sql = format!("SELECT {SELECT_COLUMNS} FROM observations");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], read_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row??);
        }
        Ok(records)
    }

    pub fn count(&self) -> Result<u64> {
        let conn = self.db.conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM observations", [], |r| r.get(0))?;
        Ok(count as u64)
    }

    /// Delete all observations, returning how many were removed
    pub fn reset_all(&self) -> Result<usize> {
        let deleted = self.db.reset_all()?;
        info!(deleted, "Observation log reset");
        Ok(deleted)
    }

    fn exists(conn: &Connection, id: &str) -> Result<bool> {
        let found = conn
            .query_row("SELECT 1 FROM observations WHERE id = ?1", [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    fn insert(conn: &Connection, record: &ObservationRecord) -> Result<()> {
        conn.execute(
            r#"INSERT INTO observations
               (id, object_type, object_id, object_name, timestamp, lat, lon,
                place_name, equipment, notes, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"#,
            params![
                record.id,
                record.object.category.as_str(),
                record.object.object_id,
                record.object.display_name,
                record.timestamp,
                record.location.lat,
                record.location.lon,
                record.location.place_name,
                record.equipment.as_str(),
                record.notes,
                Utc::now().timestamp_millis(),
            ],
        )?;
        Ok(())
    }
}

/// Decode a row; unknown enum strings surface as errors rather than being dropped
fn read_row(row: &Row<'_>) -> rusqlite::Result<Result<ObservationRecord>> {
    let id: String = row.get(0)?;
    let object_type: String = row.get(1)?;
    let raw_equipment: String = row.get(8)?;

    let Some(category) = ObjectCategory::from_str(&object_type) else {
        return Ok(Err(anyhow!("Unknown object type '{object_type}' for observation {id}")));
    };
    let Some(equipment) = Equipment::from_str(&raw_equipment) else {
        return Ok(Err(anyhow!("Unknown equipment '{raw_equipment}' for observation {id}")));
    };

    Ok(Ok(ObservationRecord {
        id,
        object: ObservedObject {
            category,
            object_id: row.get(2)?,
            display_name: row.get(3)?,
        },
        timestamp: row.get(4)?,
        location: Location {
            lat: row.get(5)?,
            lon: row.get(6)?,
            place_name: row.get(7)?,
        },
        equipment,
        notes: row.get(9)?,
    }))
}
