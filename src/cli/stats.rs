//! Stats command implementation

use anyhow::Result;

use starlog::ObjectCategory;
use starlog::stats::aggregate;

use super::Context;

pub fn stats_command(ctx: &Context, json: bool) -> Result<()> {
    let snapshot = ctx.store.snapshot()?;
    let stats = aggregate(&snapshot, ctx.today());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Observations:       {}", stats.total_observations);
    println!("Unique objects:     {}", stats.unique_object_ids.len());
    println!("Messier objects:    {}", stats.unique_messier_ids.len());
    println!("Planets:            {}", stats.unique_planet_names.len());
    println!("Meteor showers:     {}", stats.meteor_shower_ids.len());
    println!("Station passes:     {}", stats.satellite_station_observation_count);
    println!("Moon observed:      {}", if stats.moon_observed { "yes" } else { "no" });
    println!();

    let equipment: Vec<&str> = stats.equipment_used.iter().map(|e| e.label()).collect();
    println!(
        "Equipment used:     {}",
        if equipment.is_empty() { "-".to_string() } else { equipment.join(", ") }
    );
    println!("Late night (0-4h):  {}", stats.late_night_count);
    println!("Early morning (4-6h): {}", stats.early_morning_count);
    println!();

    println!("By category:");
    for category in ObjectCategory::all() {
        println!("  {:<16} {}", category.as_str(), stats.category_count(*category));
    }
    println!();

    println!("Observing days:     {}", stats.observed_days);
    println!("Current streak:     {} days", stats.current_streak_days);
    println!("Longest streak:     {} days", stats.longest_streak_days);

    if stats.unparseable_timestamps > 0 {
        println!();
        println!(
            "Note: {} observation(s) have unreadable timestamps and are left out of streaks and time-of-day counts.",
            stats.unparseable_timestamps
        );
    }

    Ok(())
}
