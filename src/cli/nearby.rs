//! Nearby command implementation

use anyhow::{Result, anyhow};
use chrono::Duration;

use starlog::stats::nearby_stats;

use super::Context;

pub fn nearby_command(
    ctx: &Context,
    lat: f64,
    lon: f64,
    radius_km: Option<f64>,
    days: Option<u32>,
) -> Result<()> {
    let defaults = &ctx.config.settings.nearby;
    let radius_km = radius_km.unwrap_or(defaults.radius_km);
    let days = days.unwrap_or(defaults.days);
    let since = ctx
        .today()
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| anyhow!("--days {days} is out of range"))?;

    let snapshot = ctx.store.snapshot()?;
    let stats = nearby_stats(&snapshot, lat, lon, radius_km, since);

    if stats.is_empty() {
        println!("No observations within {} km in the last {} days.", radius_km, days);
        return Ok(());
    }

    println!("Observed within {} km in the last {} days:\n", radius_km, days);
    for entry in stats {
        let breakdown: Vec<String> = entry
            .equipment_breakdown
            .iter()
            .map(|(equipment, count)| format!("{} {}", equipment.as_str(), count))
            .collect();
        println!(
            "  {} [{}] x{} (latest {}) - {}",
            entry.object_name,
            entry.category,
            entry.observation_count,
            entry.latest_observation.format("%Y-%m-%d %H:%M"),
            breakdown.join(", "),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_lookback_is_an_error() {
        let ctx = Context::in_memory();
        let err = nearby_command(&ctx, 40.0, -74.0, None, Some(u32::MAX)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_default_window_on_empty_log() {
        let ctx = Context::in_memory();
        assert!(nearby_command(&ctx, 40.0, -74.0, None, None).is_ok());
        assert!(nearby_command(&ctx, 40.0, -74.0, Some(5.0), Some(365)).is_ok());
    }
}
