use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{EventDescription, RecommendationTier, ScoreResult, UserProfile};

const BAR_CELLS: usize = 20;
const NARROW_BAR_CELLS: usize = 10;
const NARROW_TERMINAL: usize = 60;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Narrow terminals get a shorter bar; pipes get the full one.
fn bar_cells() -> usize {
    match terminal_size() {
        Some((Width(w), _)) if (w as usize) < NARROW_TERMINAL => NARROW_BAR_CELLS,
        _ => BAR_CELLS,
    }
}

/// Render a 0-100 value as a fixed-width bar, e.g. `[#####.....]`
pub fn score_bar(value: u32, cells: usize) -> String {
    let filled = (value.min(100) as usize * cells + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(cells - filled))
}

fn tier_label(tier: RecommendationTier, use_colors: bool) -> String {
    let label = tier.label();
    if !use_colors {
        return label.to_string();
    }
    match tier {
        RecommendationTier::Attend => label.green().bold().to_string(),
        RecommendationTier::Consider => label.yellow().bold().to_string(),
        RecommendationTier::Skip => label.red().bold().to_string(),
    }
}

/// Format a full analysis for the terminal
pub fn format_result(
    event: &EventDescription,
    profile: &UserProfile,
    result: &ScoreResult,
    use_colors: bool,
) -> String {
    format_result_with_width(event, profile, result, use_colors, bar_cells())
}

fn format_result_with_width(
    event: &EventDescription,
    profile: &UserProfile,
    result: &ScoreResult,
    use_colors: bool,
    cells: usize,
) -> String {
    let mut lines = Vec::new();

    let title = if use_colors {
        event.name.bold().to_string()
    } else {
        event.name.clone()
    };
    lines.push(format!(
        "{} ({}, {})",
        title,
        event.event_type.label(),
        event.industry.label()
    ));
    lines.push(format!(
        "Score: {}/100  {}",
        result.overall_score,
        tier_label(result.tier, use_colors)
    ));
    lines.push(result.recommendation.clone());
    lines.push(String::new());

    let b = &result.breakdown;
    for (name, value) in [
        ("Career", b.career),
        ("Networking", b.networking),
        ("Skills", b.skills),
        ("Time", b.time),
    ] {
        lines.push(format!(
            "  {:<11}{:>3}  {}",
            name,
            value,
            score_bar(value, cells)
        ));
    }

    if !result.insights.is_empty() {
        lines.push(String::new());
        lines.push("Insights:".to_string());
        for insight in &result.insights {
            lines.push(format!("  - {}", insight));
        }
    }

    lines.push(String::new());
    let footer = format!(
        "{}h of {}h weekly event budget ({}, {})",
        event.total_hours(),
        profile.hours_per_week,
        profile.mba_year.label(),
        profile.event_budget.label()
    );
    if use_colors {
        lines.push(footer.dimmed().to_string());
    } else {
        lines.push(footer);
    }

    lines.join("\n")
}
