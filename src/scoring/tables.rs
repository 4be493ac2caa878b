//! Fixed lookup tables and constants behind the four sub-scores.
//!
//! Multipliers are stored as integer percentages so the time sub-score can be
//! computed exactly and rounded once.

use super::types::{EventBudget, EventType, RecruitingPhase};

pub const MAX_SUB_SCORE: u32 = 100;

pub const CAREER_BASE: u32 = 35;
pub const CAREER_PER_CASE_TOPIC: u32 = 8;
pub const CAREER_MANY_TOPICS_THRESHOLD: usize = 3;
pub const CAREER_MANY_TOPICS_BONUS: u32 = 15;
pub const CAREER_TARGET_INDUSTRY_BONUS: u32 = 20;
pub const CAREER_CONSULTING_INDUSTRY_BONUS: u32 = 25;
pub const CAREER_EXPERIENCE_FIT_BONUS: u32 = 15;

pub const NETWORKING_BASE: u32 = 30;
pub const NETWORKING_PER_FEATURE: u32 = 10;
pub const NETWORKING_MBB_MATCH_BONUS: u32 = 15;

pub const SKILLS_BASE: u32 = 40;
pub const SKILLS_CASE_BONUS: u32 = 20;
pub const SKILLS_INDUSTRY_BONUS: u32 = 15;
pub const SKILLS_NETWORKING_BONUS: u32 = 15;
pub const SKILLS_PRESENTATION_BONUS: u32 = 15;

pub const TIME_START: u32 = 100;
pub const TIME_PENALTY_PER_HOUR: u32 = 2;
pub const TIME_FLOOR: u32 = 20;
pub const OVER_BUDGET_PERCENT: u32 = 70;

/// Sub-score weights in tenths: career 0.4, networking 0.3, skills 0.2, time 0.1.
pub const CAREER_WEIGHT: u32 = 4;
pub const NETWORKING_WEIGHT: u32 = 3;
pub const SKILLS_WEIGHT: u32 = 2;
pub const TIME_WEIGHT: u32 = 1;

pub const EVENT_TYPE_BONUS: [(EventType, u32); 6] = [
    (EventType::CaseWorkshop, 25),
    (EventType::FirmInfoSession, 20),
    (EventType::AlumniPanel, 15),
    (EventType::IndustryConference, 12),
    (EventType::SkillsTraining, 10),
    (EventType::NetworkingEvent, 8),
];

/// `None` means no ceiling.
pub const BUDGET_CEILING: [(EventBudget, Option<u32>); 4] = [
    (EventBudget::Zero, Some(0)),
    (EventBudget::UpTo500, Some(500)),
    (EventBudget::UpTo2000, Some(2000)),
    (EventBudget::NoLimit, None),
];

pub const PHASE_TIME_PERCENT: [(RecruitingPhase, u32); 3] = [
    (RecruitingPhase::PrePrep, 100),
    (RecruitingPhase::ActiveRecruiting, 120),
    (RecruitingPhase::InterviewSeason, 110),
];

/// Speaker tiers, checked in order. A tag earns the bonus of the first tier
/// with a matching substring.
pub const SPEAKER_TIERS: [(&[&str], u32); 3] = [
    (&["MBB"], 20),
    (&["Big 4", "Consulting"], 12),
    (&["CEO"], 8),
];

fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn event_type_bonus(event_type: EventType) -> u32 {
    lookup(&EVENT_TYPE_BONUS, event_type).unwrap_or(0)
}

pub fn budget_ceiling(budget: EventBudget) -> Option<u32> {
    lookup(&BUDGET_CEILING, budget).flatten()
}

pub fn phase_time_percent(phase: RecruitingPhase) -> u32 {
    lookup(&PHASE_TIME_PERCENT, phase).unwrap_or(100)
}

pub fn speaker_bonus(tag: &str) -> u32 {
    SPEAKER_TIERS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| tag.contains(n)))
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Whether `cost` is above what `budget` allows.
pub fn exceeds_budget(cost: u32, budget: EventBudget) -> bool {
    budget_ceiling(budget).is_some_and(|ceiling| cost > ceiling)
}
