use super::types::{EventDescription, UserProfile};
use crate::catalog;

pub const DURATION_RANGE: (u32, u32) = (1, 24);
pub const COST_RANGE: (u32, u32) = (0, 5000);
pub const TRAVEL_RANGE: (u32, u32) = (0, 20);
pub const HOURS_PER_WEEK_RANGE: (u32, u32) = (2, 20);

/// Validate an event before scoring.
/// Returns all validation errors at once (not just the first).
///
/// Only problems that cannot be corrected are errors. Out-of-range numbers
/// are reported by [`range_warnings`] and fixed by [`EventDescription::clamped`].
pub fn validate_event(event: &EventDescription) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if event.name.trim().is_empty() {
        errors.push("event.name: must not be empty".to_string());
    }

    for (field, tags) in [
        ("case_topics", &event.case_topics),
        ("speaker_qualities", &event.speaker_qualities),
        ("networking_features", &event.networking_features),
    ] {
        if tags.iter().any(|t| t.trim().is_empty()) {
            errors.push(format!("event.{}: tags must not be empty", field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_range(warnings: &mut Vec<String>, field: &str, value: u32, (low, high): (u32, u32)) {
    if value < low || value > high {
        warnings.push(format!(
            "{}: {} is outside {}-{}, using {}",
            field,
            value,
            low,
            high,
            value.clamp(low, high)
        ));
    }
}

/// Describe every numeric field that [`EventDescription::clamped`] or
/// [`UserProfile::clamped`] would change.
pub fn range_warnings(event: &EventDescription, profile: &UserProfile) -> Vec<String> {
    let mut warnings = Vec::new();

    check_range(&mut warnings, "event.duration_hours", event.duration_hours, DURATION_RANGE);
    check_range(&mut warnings, "event.cost_dollars", event.cost_dollars, COST_RANGE);
    if event.requires_travel {
        check_range(&mut warnings, "event.travel_hours", event.travel_hours, TRAVEL_RANGE);
    } else if event.travel_hours > 0 {
        warnings.push(format!(
            "event.travel_hours: {} ignored because requires_travel is false",
            event.travel_hours
        ));
    }
    check_range(
        &mut warnings,
        "profile.hours_per_week",
        profile.hours_per_week,
        HOURS_PER_WEEK_RANGE,
    );

    warnings
}

/// List tags that are not part of the fixed catalogs.
///
/// Unknown tags are still scored; they only miss any bonus their text does
/// not match.
pub fn unknown_tags(event: &EventDescription, profile: &UserProfile) -> Vec<String> {
    let checks: [(&str, &[&str], Vec<&String>); 5] = [
        ("event.case_topics", catalog::CASE_TOPICS, event.case_topics.iter().collect()),
        (
            "event.speaker_qualities",
            catalog::SPEAKER_QUALITIES,
            event.speaker_qualities.iter().collect(),
        ),
        (
            "event.networking_features",
            catalog::NETWORKING_FEATURES,
            event.networking_features.iter().collect(),
        ),
        ("profile.target_firms", catalog::TARGET_FIRMS, profile.target_firms.iter().collect()),
        (
            "profile.target_industries",
            catalog::TARGET_INDUSTRIES,
            profile.target_industries.iter().collect(),
        ),
    ];

    checks
        .into_iter()
        .flat_map(|(field, known, tags)| {
            tags.into_iter()
                .filter(move |tag| !catalog::contains(known, tag))
                .map(move |tag| format!("{}: unknown tag '{}'", field, tag))
        })
        .collect()
}

impl EventDescription {
    /// Copy with numeric fields clamped into range and travel hours zeroed
    /// when no travel is required.
    pub fn clamped(&self) -> Self {
        let (min_duration, max_duration) = DURATION_RANGE;
        let (min_cost, max_cost) = COST_RANGE;
        let (min_travel, max_travel) = TRAVEL_RANGE;
        Self {
            duration_hours: self.duration_hours.clamp(min_duration, max_duration),
            cost_dollars: self.cost_dollars.clamp(min_cost, max_cost),
            travel_hours: if self.requires_travel {
                self.travel_hours.clamp(min_travel, max_travel)
            } else {
                0
            },
            ..self.clone()
        }
    }
}

impl UserProfile {
    pub fn clamped(&self) -> Self {
        let (low, high) = HOURS_PER_WEEK_RANGE;
        Self {
            hours_per_week: self.hours_per_week.clamp(low, high),
            ..self.clone()
        }
    }
}
