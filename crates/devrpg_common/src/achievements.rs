//! Achievement badges for the Dev-RPG progression system.
//!
//! The catalog is a fixed, ordered list. XP milestones are monotonic:
//! once unlocked at some XP total they stay unlocked at every higher
//! total. Report badges are pure functions of a single report's
//! sub-scores with no cross-report memory. Nothing here persists
//! unlock state; callers re-derive it from current XP on every read.

use crate::leveling::LevelCurve;
use crate::report::{AnalysisReport, SubScores};
use serde::{Deserialize, Serialize};

/// Achievement badge with ASCII symbol and description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    /// Unique identifier
    pub id: &'static str,
    /// ASCII badge symbol (e.g., "[*]", "<+>", "(!)")
    pub badge: &'static str,
    /// Short name
    pub name: &'static str,
    /// Description of how to earn it
    pub description: &'static str,
    /// Whether it's been unlocked
    pub unlocked: bool,
}

impl Achievement {
    const fn new(
        id: &'static str,
        badge: &'static str,
        name: &'static str,
        desc: &'static str,
    ) -> Self {
        Self {
            id,
            badge,
            name,
            description: desc,
            unlocked: false,
        }
    }
}

/// All available achievements, in presentation order.
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        // XP milestones
        Achievement::new("first_sync", "[1]", "First Sync", "Earn your first 100 XP"),
        Achievement::new("street_samurai", "[1k]", "Street Samurai", "Reach 1,000 XP"),
        Achievement::new("netrunner", "[5k]", "Netrunner", "Reach 5,000 XP"),
        Achievement::new("console_cowboy", "[25k]", "Console Cowboy", "Reach 25,000 XP"),
        Achievement::new("double_digits", "<10>", "Double Digits", "Reach level 10"),
        // Per-report badges
        Achievement::new("clean_coder", "(cq)", "Clean Coder", "Score 90+ on code quality"),
        Achievement::new("architect_master", "(ar)", "Architect Master", "Score 90+ on architecture"),
        Achievement::new("async_ninja", "(ev)", "Async Ninja", "Score 90+ on event-loop safety"),
        Achievement::new("optimizer", "($$)", "Optimizer", "Score 90+ on cost efficiency"),
        Achievement::new("code_legend", "(!!)", "Code Legend", "Score 95+ overall"),
    ]
}

/// Evaluate the whole catalog against a user's XP total and,
/// optionally, their latest report. Output preserves catalog order.
pub fn evaluate(
    xp_total: u64,
    report: Option<&AnalysisReport>,
    curve: &LevelCurve,
) -> Vec<Achievement> {
    let mut achievements = all_achievements();
    for ach in &mut achievements {
        ach.unlocked = is_unlocked(ach.id, xp_total, report, curve);
    }
    achievements
}

/// Get only unlocked achievements.
pub fn unlocked_only(
    xp_total: u64,
    report: Option<&AnalysisReport>,
    curve: &LevelCurve,
) -> Vec<Achievement> {
    evaluate(xp_total, report, curve)
        .into_iter()
        .filter(|a| a.unlocked)
        .collect()
}

/// Achievements that unlock when moving from `old_xp` to `new_xp`
/// (for notifications). The report, if any, arrived with the new XP,
/// so it only counts toward the new state.
pub fn newly_unlocked(
    old_xp: u64,
    new_xp: u64,
    report: Option<&AnalysisReport>,
    curve: &LevelCurve,
) -> Vec<Achievement> {
    let old_unlocked: Vec<_> = unlocked_only(old_xp, None, curve)
        .iter()
        .map(|a| a.id)
        .collect();
    unlocked_only(new_xp, report, curve)
        .into_iter()
        .filter(|a| !old_unlocked.contains(&a.id))
        .collect()
}

/// Badge names earned by a single report, in catalog order.
pub fn report_badges(sub: &SubScores, overall: u8) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if sub.code_quality.is_some_and(|s| s >= 90) {
        badges.push("Clean Coder");
    }
    if sub.architecture.is_some_and(|s| s >= 90) {
        badges.push("Architect Master");
    }
    if sub.event_loop.is_some_and(|s| s >= 90) {
        badges.push("Async Ninja");
    }
    if sub.cost.is_some_and(|s| s >= 90) {
        badges.push("Optimizer");
    }
    if overall >= 95 {
        badges.push("Code Legend");
    }
    badges
}

fn is_unlocked(
    id: &str,
    xp_total: u64,
    report: Option<&AnalysisReport>,
    curve: &LevelCurve,
) -> bool {
    match id {
        // XP milestones
        "first_sync" => xp_total >= 100,
        "street_samurai" => xp_total >= 1_000,
        "netrunner" => xp_total >= 5_000,
        "console_cowboy" => xp_total >= 25_000,
        "double_digits" => curve.level_for_xp(xp_total).level >= 10,

        // Per-report badges
        "clean_coder" => report_sub(report, |s| s.code_quality),
        "architect_master" => report_sub(report, |s| s.architecture),
        "async_ninja" => report_sub(report, |s| s.event_loop),
        "optimizer" => report_sub(report, |s| s.cost),
        "code_legend" => report.is_some_and(|r| r.overall_score >= 95),

        _ => false,
    }
}

fn report_sub(report: Option<&AnalysisReport>, get: fn(&SubScores) -> Option<u8>) -> bool {
    report.is_some_and(|r| get(&r.sub_scores).is_some_and(|s| s >= 90))
}

/// Format achievements for display (ASCII style).
pub fn format_achievements(achievements: &[Achievement], max_display: usize) -> String {
    let unlocked: Vec<_> = achievements.iter().filter(|a| a.unlocked).collect();
    if unlocked.is_empty() {
        return String::new();
    }

    let display: Vec<_> = unlocked.iter().take(max_display).collect();
    let badges: String = display.iter().map(|a| a.badge).collect::<Vec<_>>().join(" ");

    if unlocked.len() > max_display {
        format!("{} +{} more", badges, unlocked.len() - max_display)
    } else {
        badges
    }
}

/// Format a single achievement for notification (ASCII style).
pub fn format_achievement_unlock(ach: &Achievement) -> String {
    format!(
        "{} Achievement unlocked: {} - {}",
        ach.badge, ach.name, ach.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SubScores;
    use chrono::{TimeZone, Utc};

    fn report_with(sub: SubScores) -> AnalysisReport {
        let at = Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).unwrap();
        AnalysisReport::derive(sub, at).unwrap()
    }

    #[test]
    fn first_sync_unlocks_at_100_xp() {
        let curve = LevelCurve::default();
        let locked = evaluate(99, None, &curve);
        assert!(!locked.iter().find(|a| a.id == "first_sync").unwrap().unlocked);
        let unlocked = evaluate(100, None, &curve);
        assert!(unlocked.iter().find(|a| a.id == "first_sync").unwrap().unlocked);
    }

    #[test]
    fn milestones_are_monotonic() {
        let curve = LevelCurve::default();
        let mut unlocked_so_far: Vec<&'static str> = Vec::new();
        for xp in [0, 50, 100, 999, 1_000, 4_999, 5_000, 30_000, 1_000_000] {
            let now: Vec<_> = unlocked_only(xp, None, &curve)
                .iter()
                .map(|a| a.id)
                .collect();
            for id in &unlocked_so_far {
                assert!(now.contains(id), "{id} re-locked at xp {xp}");
            }
            unlocked_so_far = now;
        }
    }

    #[test]
    fn level_milestone_uses_the_curve() {
        let curve = LevelCurve::default();
        // Level 10 needs the sum of requirements for levels 1..=9.
        let mut needed = 0u64;
        for level in 1..=9 {
            needed += curve.xp_required_for_level(level).unwrap();
        }
        let at_level_10 = evaluate(needed, None, &curve);
        assert!(at_level_10.iter().find(|a| a.id == "double_digits").unwrap().unlocked);
        let below = evaluate(needed - 1, None, &curve);
        assert!(!below.iter().find(|a| a.id == "double_digits").unwrap().unlocked);
    }

    #[test]
    fn report_badges_require_a_report() {
        let curve = LevelCurve::default();
        let without = evaluate(50_000, None, &curve);
        assert!(!without.iter().find(|a| a.id == "clean_coder").unwrap().unlocked);

        let report = report_with(SubScores {
            code_quality: Some(91),
            ..Default::default()
        });
        let with = evaluate(50_000, Some(&report), &curve);
        assert!(with.iter().find(|a| a.id == "clean_coder").unwrap().unlocked);
        assert!(!with.iter().find(|a| a.id == "optimizer").unwrap().unlocked);
    }

    #[test]
    fn code_legend_needs_95_overall() {
        let report = report_with(SubScores {
            code_quality: Some(96),
            architecture: Some(96),
            event_loop: Some(95),
            cost: Some(95),
        });
        assert!(report.overall_score >= 95);
        let curve = LevelCurve::default();
        let achievements = evaluate(0, Some(&report), &curve);
        assert!(achievements.iter().find(|a| a.id == "code_legend").unwrap().unlocked);
    }

    #[test]
    fn missing_sub_report_is_locked_not_a_panic() {
        let report = report_with(SubScores {
            code_quality: Some(92),
            architecture: None,
            event_loop: None,
            cost: None,
        });
        let badges = report_badges(&report.sub_scores, report.overall_score);
        assert_eq!(badges, vec!["Clean Coder"]);
    }

    #[test]
    fn newly_unlocked_reports_the_difference() {
        let curve = LevelCurve::default();
        let new = newly_unlocked(900, 1_100, None, &curve);
        let ids: Vec<_> = new.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["street_samurai"]);
    }

    #[test]
    fn catalog_order_is_preserved() {
        let curve = LevelCurve::default();
        let evaluated = evaluate(1_000_000, None, &curve);
        let catalog = all_achievements();
        let ids: Vec<_> = evaluated.iter().map(|a| a.id).collect();
        let expected: Vec<_> = catalog.iter().map(|a| a.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn format_shows_overflow_count() {
        let curve = LevelCurve::default();
        let achievements = evaluate(1_000_000, None, &curve);
        let formatted = format_achievements(&achievements, 2);
        assert!(formatted.contains("+3 more")); // 5 milestones unlocked, 2 shown
    }
}
