//! Observation log commands

use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow, bail};
use chrono::Local;
use clap::Subcommand;
use tracing::info;

use starlog::stats::{parse_local_timestamp, recent_observations};
use starlog::{Equipment, Location, ObjectCategory, ObservationRecord, ObservedObject};

use super::Context;

#[derive(Subcommand)]
pub enum LogCommand {
    /// Record a new observation
    Add {
        /// planet, moon, deep-sky, meteor-shower, satellite-pass or event
        #[arg(long)]
        category: String,

        /// Stable object key, e.g. planet-mars or dso-M31
        #[arg(long)]
        object_id: String,

        /// Display name, e.g. "Andromeda Galaxy"
        #[arg(long)]
        name: String,

        /// naked-eye, binoculars or telescope
        #[arg(long)]
        equipment: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long)]
        place: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Observation time (RFC 3339); defaults to now in local time
        #[arg(long)]
        at: Option<String>,
    },

    /// List observations, most recent first
    List {
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Remove an observation by id
    Remove { id: String },

    /// Import observations from a JSON array (existing ids are updated)
    Import { file: PathBuf },

    /// Export all observations as JSON (stdout when no file is given)
    Export { file: Option<PathBuf> },

    /// Delete every observation in the log
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn log_command(ctx: &Context, command: LogCommand) -> Result<()> {
    match command {
        LogCommand::Add {
            category,
            object_id,
            name,
            equipment,
            lat,
            lon,
            place,
            notes,
            at,
        } => {
            let category = ObjectCategory::from_str(&category)
                .ok_or_else(|| anyhow!("Unknown category: {}", category))?;
            let equipment = Equipment::from_str(&equipment)
                .ok_or_else(|| anyhow!("Unknown equipment: {}", equipment))?;
            let timestamp = match at {
                Some(at) => {
                    if parse_local_timestamp(&at).is_none() {
                        bail!(
                            "Unreadable --at timestamp '{}'. Use RFC 3339, e.g. 2025-01-15T21:30:00-05:00",
                            at
                        );
                    }
                    at
                }
                None => Local::now().to_rfc3339(),
            };

            let record = ObservationRecord::new(
                ObservedObject {
                    category,
                    object_id,
                    display_name: name,
                },
                timestamp,
                Location {
                    lat,
                    lon,
                    place_name: place,
                },
                equipment,
                notes,
            );
            ctx.store.add(&record)?;
            println!("Logged {} ({})", record.object.display_name, record.id);
        }
        LogCommand::List { limit } => {
            let limit = limit.unwrap_or(ctx.config.settings.report.recent_limit);
            let snapshot = ctx.store.snapshot()?;
            if snapshot.is_empty() {
                println!("No observations logged yet.");
                return Ok(());
            }

            println!("Observations ({} of {}):\n", limit.min(snapshot.len()), snapshot.len());
            for record in recent_observations(&snapshot, limit) {
                println!(
                    "  {} [{}] {} - {} with {}",
                    record.timestamp,
                    record.object.category,
                    record.object.display_name,
                    record.location.place_name.as_deref().unwrap_or("unknown place"),
                    record.equipment.label(),
                );
                println!("    id: {}", record.id);
                if let Some(notes) = &record.notes {
                    println!("    {}", notes);
                }
            }
        }
        LogCommand::Remove { id } => {
            if ctx.store.remove(&id)? {
                println!("Removed observation {}", id);
            } else {
                println!("No observation with id {}", id);
            }
        }
        LogCommand::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read import file: {}", file.display()))?;
            let records: Vec<ObservationRecord> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse import file: {}", file.display()))?;
            let inserted = ctx.store.sync(&records)?;
            info!(file = %file.display(), inserted, "Import finished");
            println!(
                "Imported {} observations ({} new, {} updated)",
                records.len(),
                inserted,
                records.len() - inserted
            );
        }
        LogCommand::Export { file } => {
            let snapshot = ctx.store.snapshot()?;
            let json = serde_json::to_string_pretty(&snapshot)?;
            match file {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write export: {}", path.display()))?;
                    println!("Exported {} observations to {}", snapshot.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        LogCommand::Reset { yes } => {
            if !yes {
                bail!(
                    "Refusing to delete {} observations without --yes",
                    ctx.store.count()?
                );
            }
            let deleted = ctx.store.reset_all()?;
            println!("Deleted {} observations", deleted);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_command(at: Option<&str>) -> LogCommand {
        LogCommand::Add {
            category: "planet".to_string(),
            object_id: "planet-saturn".to_string(),
            name: "Saturn".to_string(),
            equipment: "scope".to_string(),
            lat: 40.7128,
            lon: -74.006,
            place: None,
            notes: None,
            at: at.map(str::to_string),
        }
    }

    #[test]
    fn test_add_rejects_unreadable_timestamp() {
        let ctx = Context::in_memory();
        let err = log_command(&ctx, add_command(Some("yesterday"))).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
        assert_eq!(ctx.store.count().unwrap(), 0);
    }

    #[test]
    fn test_add_keeps_timestamp_as_given() {
        let ctx = Context::in_memory();
        log_command(&ctx, add_command(Some("2025-01-15T21:30:00-05:00"))).unwrap();
        log_command(&ctx, add_command(None)).unwrap();

        let snapshot = ctx.store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(
            snapshot
                .iter()
                .any(|r| r.timestamp == "2025-01-15T21:30:00-05:00")
        );
        assert!(snapshot.iter().all(|r| parse_local_timestamp(&r.timestamp).is_some()));
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let ctx = Context::in_memory();
        log_command(&ctx, add_command(None)).unwrap();

        assert!(log_command(&ctx, LogCommand::Reset { yes: false }).is_err());
        assert_eq!(ctx.store.count().unwrap(), 1);

        log_command(&ctx, LogCommand::Reset { yes: true }).unwrap();
        assert_eq!(ctx.store.count().unwrap(), 0);
    }
}
