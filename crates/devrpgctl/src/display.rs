//! Output formatting - clean, ASCII-only terminal output
//!
//! No emojis. Colors mark tiers and podium ranks only. Each formatter
//! builds a string so rendering is testable; the print wrappers just
//! write it out.

use devrpg_common::{
    achievements::{format_achievement_unlock, format_achievements, Achievement},
    health::MAX_BOSS_HP,
    rank_tier, LeaderboardEntry, LevelProgress, RankTier, ServiceStatus, Tier,
};
use owo_colors::OwoColorize;
use std::fmt::Write;

const HR: &str = "----------------------------------------";

/// Print level progression for an XP total.
pub fn print_level(xp: u64, progress: &LevelProgress) {
    println!("{}", format_level(xp, progress));
}

pub fn format_level(xp: u64, progress: &LevelProgress) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    writeln!(out, "{}", format!("xp {}", xp).dimmed()).unwrap();
    writeln!(out, "level          {}", progress.level.to_string().bright_green()).unwrap();
    writeln!(
        out,
        "progress       {} / {} xp into level",
        progress.xp_into_level, progress.xp_to_next_level
    )
    .unwrap();
    writeln!(
        out,
        "to next level  {} xp",
        progress.xp_to_next_level - progress.xp_into_level
    )
    .unwrap();
    out
}

/// Print the requirement table for the leveling curve.
pub fn print_curve(rows: &[(u32, u64)]) {
    println!("{}", format_curve(rows));
}

pub fn format_curve(rows: &[(u32, u64)]) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    writeln!(out, "{:>6}  {:>12}", "level", "xp required").unwrap();
    writeln!(out, "{}", HR.dimmed()).unwrap();
    for (level, required) in rows {
        writeln!(out, "{level:>6}  {required:>12}").unwrap();
    }
    out
}

/// Print a classified score with its damage value.
pub fn print_tier(score: u8, tier: Tier, damage: u8) {
    println!("{}", format_tier(score, tier, damage));
}

pub fn format_tier(score: u8, tier: Tier, damage: u8) -> String {
    let tier_colored = match tier {
        Tier::Stable => tier.to_string().bright_green().to_string(),
        Tier::Warning => tier.to_string().yellow().to_string(),
        Tier::Critical => tier.to_string().bright_red().to_string(),
    };
    let mut out = String::new();
    writeln!(out).unwrap();
    writeln!(out, "score   {score}").unwrap();
    writeln!(out, "tier    {tier_colored}").unwrap();
    writeln!(out, "damage  {damage}").unwrap();
    out
}

/// Print aggregate boss HP.
pub fn print_boss_hp(statuses: &[ServiceStatus], hp: u64) {
    println!("{}", format_boss_hp(statuses, hp));
}

pub fn format_boss_hp(statuses: &[ServiceStatus], hp: u64) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    for status in statuses {
        let marker = match status {
            ServiceStatus::Healthy => "[OK]".bright_green().to_string(),
            ServiceStatus::Degraded => "[PARTIAL]".yellow().to_string(),
            ServiceStatus::Unavailable => "[DOWN]".bright_red().to_string(),
        };
        writeln!(out, "  {marker} {status}").unwrap();
    }
    if !statuses.is_empty() {
        writeln!(out, "{}", HR.dimmed()).unwrap();
    }
    writeln!(out, "boss hp  {} / {}", hp, MAX_BOSS_HP).unwrap();
    out
}

/// Print the achievement catalog with unlock markers.
pub fn print_achievements(xp: u64, achievements: &[Achievement]) {
    println!("{}", format_achievement_list(xp, achievements));
}

pub fn format_achievement_list(xp: u64, achievements: &[Achievement]) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    writeln!(out, "{}", format!("xp {}", xp).dimmed()).unwrap();
    for ach in achievements {
        let marker = if ach.unlocked {
            "[x]".bright_green().to_string()
        } else {
            "[ ]".dimmed().to_string()
        };
        writeln!(
            out,
            "  {marker} {:<6} {:<18} {}",
            ach.badge,
            ach.name,
            ach.description.dimmed()
        )
        .unwrap();
    }
    let summary = format_achievements(achievements, 8);
    if !summary.is_empty() {
        writeln!(out, "{}", HR.dimmed()).unwrap();
        writeln!(out, "unlocked: {summary}").unwrap();
    }
    out
}

/// Print unlock notifications for achievements earned by an XP award.
pub fn print_unlocks(unlocks: &[Achievement]) {
    let rendered = format_unlocks(unlocks);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}

pub fn format_unlocks(unlocks: &[Achievement]) -> String {
    let mut out = String::new();
    for ach in unlocks {
        writeln!(out, "{}", format_achievement_unlock(ach).bright_green()).unwrap();
    }
    out
}

/// Print a ranked leaderboard with podium colors.
pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("{}", format_leaderboard(entries));
}

pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    if entries.is_empty() {
        writeln!(out, "{}", "leaderboard is empty".dimmed()).unwrap();
        return out;
    }
    writeln!(out, "{:>4}  {:<20} {:>10}  {:>5}", "rank", "id", "xp", "level").unwrap();
    writeln!(out, "{}", HR.dimmed()).unwrap();
    for entry in entries {
        let row = format!(
            "{:>4}  {:<20} {:>10}  {:>5}",
            entry.rank, entry.id, entry.xp_total, entry.level
        );
        let colored = match rank_tier(entry.rank) {
            RankTier::Gold => row.bright_yellow().to_string(),
            RankTier::Silver => row.bright_white().to_string(),
            RankTier::Bronze => row.yellow().to_string(),
            RankTier::Default => row,
        };
        writeln!(out, "{colored}").unwrap();
    }
    out
}

/// Print a derived analysis report.
pub fn print_report(report: &devrpg_common::AnalysisReport) {
    println!("{}", format_report(report));
}

pub fn format_report(report: &devrpg_common::AnalysisReport) -> String {
    let mut out = String::new();
    writeln!(out).unwrap();
    writeln!(out, "report  {}", report.report_id).unwrap();
    writeln!(out, "{}", HR.dimmed()).unwrap();
    write_sub_score(&mut out, "code_quality", report.sub_scores.code_quality);
    write_sub_score(&mut out, "architecture", report.sub_scores.architecture);
    write_sub_score(&mut out, "event_loop", report.sub_scores.event_loop);
    write_sub_score(&mut out, "cost", report.sub_scores.cost);
    writeln!(out, "{}", HR.dimmed()).unwrap();
    writeln!(out, "overall  {}  ({})", report.overall_score, report.status).unwrap();
    writeln!(out, "xp       +{}", report.rpg_summary.xp_earned).unwrap();
    if report.rpg_summary.level_up {
        writeln!(out, "{}", "LEVEL UP".bright_green()).unwrap();
    }
    if !report.rpg_summary.badges_earned.is_empty() {
        writeln!(out, "badges   {}", report.rpg_summary.badges_earned.join(", ")).unwrap();
    }
    out
}

fn write_sub_score(out: &mut String, name: &str, score: Option<u8>) {
    match score {
        Some(s) => writeln!(out, "{name:<14} {s:>3}").unwrap(),
        None => writeln!(out, "{name:<14} {}", "not analyzed".dimmed()).unwrap(),
    }
}
