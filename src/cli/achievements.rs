//! Achievements command implementation

use anyhow::Result;

use starlog::stats::{AchievementProgress, evaluate_log};

use super::Context;

pub fn achievements_command(ctx: &Context, next: bool, showcase: bool, json: bool) -> Result<()> {
    let snapshot = ctx.store.snapshot()?;
    let (_, report) = evaluate_log(&ctx.evaluator, &snapshot, ctx.today());
    let limits = &ctx.config.settings.report;

    if next {
        let entries = report.next_to_earn(limits.next_to_earn_limit);
        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else if entries.is_empty() {
            println!("Nothing in progress yet. Log an observation to get started.");
        } else {
            println!("Next to earn:\n");
            entries.into_iter().for_each(print_progress);
        }
        return Ok(());
    }

    if showcase {
        let entries = report.recently_earned(limits.showcase_limit);
        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else if entries.is_empty() {
            println!("No achievements earned yet.");
        } else {
            println!("Showcase:\n");
            entries.into_iter().for_each(print_progress);
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Achievements: {}/{} earned\n",
        report.earned_count(),
        report.total_count()
    );
    for (category, entries) in report.by_category() {
        println!("{}", category.label());
        entries.into_iter().for_each(print_progress);
        println!();
    }

    Ok(())
}

fn print_progress(progress: &AchievementProgress) {
    let achievement = progress.achievement;
    let mark = if progress.earned { "x" } else { " " };
    println!(
        "  [{}] {} {} ({}) - {}/{} {:>3}%",
        mark,
        achievement.icon,
        achievement.name,
        achievement.tier.label(),
        progress.current_value.min(u64::from(achievement.requirement)),
        achievement.requirement,
        progress.percent_complete,
    );
    println!("      {}", achievement.description);
}
