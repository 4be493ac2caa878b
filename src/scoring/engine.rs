use log::{debug, trace};

use super::tables::{self, *};
use super::types::{
    Breakdown, CaseExperience, EventDescription, EventType, FocusPriority, Industry, Insight,
    RecommendationTier, RecruitingPhase, ScoreResult, UserProfile,
};

/// Score an event against a profile.
///
/// Pure and deterministic. Callers must clamp numeric fields and reject
/// empty event names first (see [`crate::scoring::validation`]); nothing is
/// checked here.
pub fn score(event: &EventDescription, profile: &UserProfile) -> ScoreResult {
    let time_scaled = time_score_scaled(event, profile);
    let breakdown = Breakdown {
        career: career_score(event, profile),
        networking: networking_score(event, profile),
        skills: skills_score(event, profile),
        time: round_time(time_scaled),
    };
    let overall_score = weighted_total(&breakdown, time_scaled);
    let tier = RecommendationTier::from_score(overall_score);

    debug!(
        "scored '{}': career={} networking={} skills={} time={} -> {} ({})",
        event.name,
        breakdown.career,
        breakdown.networking,
        breakdown.skills,
        breakdown.time,
        overall_score,
        tier.label()
    );

    ScoreResult {
        overall_score,
        tier,
        recommendation: recommendation_text(tier, profile),
        breakdown,
        insights: collect_insights(event, profile, overall_score),
    }
}

/// Fixed-point scale of the unrounded time sub-score (percent of percent).
const TIME_SCALE: u32 = 100 * 100;

/// Weighted overall score, rounded half-up exactly once.
///
/// The time component enters unrounded (`time_scaled` is in units of
/// 1/[`TIME_SCALE`]) so an overall score never inherits the rounding of the
/// displayed time value. Everything is summed in integer units, so a total
/// of exactly `x.5` always rounds up.
fn weighted_total(breakdown: &Breakdown, time_scaled: u32) -> u32 {
    let whole = breakdown.career * CAREER_WEIGHT
        + breakdown.networking * NETWORKING_WEIGHT
        + breakdown.skills * SKILLS_WEIGHT;
    let units = whole * TIME_SCALE + time_scaled * TIME_WEIGHT;
    let divisor = 10 * TIME_SCALE;
    (units + divisor / 2) / divisor
}

fn round_time(time_scaled: u32) -> u32 {
    (time_scaled + TIME_SCALE / 2) / TIME_SCALE
}

fn clamp_sub_score(raw: u32) -> u32 {
    raw.min(MAX_SUB_SCORE)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn career_score(event: &EventDescription, profile: &UserProfile) -> u32 {
    let topics = event.case_topics.len();
    let mut score = CAREER_BASE + CAREER_PER_CASE_TOPIC.saturating_mul(count(topics));

    if topics >= CAREER_MANY_TOPICS_THRESHOLD {
        score += CAREER_MANY_TOPICS_BONUS;
    }

    if event.industry == Industry::ConsultingSpecific {
        score += CAREER_CONSULTING_INDUSTRY_BONUS;
    } else if profile.targets_industry(event.industry) {
        score += CAREER_TARGET_INDUSTRY_BONUS;
    }

    score += tables::event_type_bonus(event.event_type);

    let fits_experience = match profile.case_experience {
        CaseExperience::Beginner => matches!(
            event.event_type,
            EventType::CaseWorkshop | EventType::SkillsTraining
        ),
        CaseExperience::Advanced => matches!(
            event.event_type,
            EventType::FirmInfoSession | EventType::NetworkingEvent
        ),
        CaseExperience::SomePractice => false,
    };
    if fits_experience {
        score += CAREER_EXPERIENCE_FIT_BONUS;
    }

    trace!("career raw={}", score);
    clamp_sub_score(score)
}

fn networking_score(event: &EventDescription, profile: &UserProfile) -> u32 {
    let mut score = NETWORKING_BASE
        + NETWORKING_PER_FEATURE.saturating_mul(count(event.networking_features.len()));

    score += event
        .speaker_qualities
        .iter()
        .map(|tag| tables::speaker_bonus(tag))
        .sum::<u32>();

    if profile.targets_mbb() && event.has_mbb_speaker() {
        score += NETWORKING_MBB_MATCH_BONUS;
    }

    trace!("networking raw={}", score);
    clamp_sub_score(score)
}

fn skills_score(event: &EventDescription, profile: &UserProfile) -> u32 {
    let mut score = SKILLS_BASE;

    if profile.has_priority(FocusPriority::CaseSkills) && !event.case_topics.is_empty() {
        score += SKILLS_CASE_BONUS;
    }
    if profile.has_priority(FocusPriority::IndustryKnowledge)
        && profile.targets_industry(event.industry)
    {
        score += SKILLS_INDUSTRY_BONUS;
    }
    if profile.has_priority(FocusPriority::Networking) && event.networking_features.len() > 1 {
        score += SKILLS_NETWORKING_BONUS;
    }
    if profile.has_priority(FocusPriority::PresentationSkills)
        && event.event_type == EventType::SkillsTraining
    {
        score += SKILLS_PRESENTATION_BONUS;
    }

    trace!("skills raw={}", score);
    clamp_sub_score(score)
}

/// Time sub-score before rounding, in units of 1/[`TIME_SCALE`].
fn time_score_scaled(event: &EventDescription, profile: &UserProfile) -> u32 {
    let penalty = TIME_PENALTY_PER_HOUR.saturating_mul(event.total_hours());
    let base = TIME_START.saturating_sub(penalty).max(TIME_FLOOR);

    let budget_percent = if tables::exceeds_budget(event.cost_dollars, profile.event_budget) {
        OVER_BUDGET_PERCENT
    } else {
        100
    };

    let scaled = base * tables::phase_time_percent(profile.recruiting_phase) * budget_percent;

    trace!(
        "time total_hours={} base={} budget%={} scaled={}",
        event.total_hours(),
        base,
        budget_percent,
        scaled
    );
    scaled.min(MAX_SUB_SCORE * TIME_SCALE)
}

fn recommendation_text(tier: RecommendationTier, profile: &UserProfile) -> String {
    match tier {
        RecommendationTier::Attend => format!(
            "Highly recommended: this event is a strong fit for your {} case level.",
            profile.case_experience.label().to_lowercase()
        ),
        RecommendationTier::Consider => format!(
            "Worth considering during {}: attend if your calendar allows.",
            profile.recruiting_phase.label().to_lowercase()
        ),
        RecommendationTier::Skip => {
            "Skip this one: limited impact on your consulting recruiting goals.".to_string()
        }
    }
}

fn collect_insights(
    event: &EventDescription,
    profile: &UserProfile,
    overall_score: u32,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if event.case_topics.len() >= CAREER_MANY_TOPICS_THRESHOLD {
        insights.push(Insight::StrongCasePrep);
    }
    if event.has_mbb_speaker() {
        insights.push(Insight::DirectMbbAccess);
    }
    if profile.targets_industry(event.industry) {
        insights.push(Insight::BuildsExpertise(event.industry));
    }
    if profile.recruiting_phase == RecruitingPhase::ActiveRecruiting && overall_score > 65 {
        insights.push(Insight::HighPriorityWhileRecruiting);
    }
    if event.cost_dollars == 0 {
        insights.push(Insight::FreeEvent);
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{EventBudget, FocusPriority};
    use std::collections::BTreeSet;

    fn tags(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_event() -> EventDescription {
        EventDescription {
            name: "Test Event".to_string(),
            event_type: EventType::AlumniPanel,
            industry: Industry::CrossIndustry,
            duration_hours: 2,
            cost_dollars: 0,
            requires_travel: false,
            travel_hours: 0,
            case_topics: BTreeSet::new(),
            speaker_qualities: BTreeSet::new(),
            networking_features: BTreeSet::new(),
        }
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            case_experience: CaseExperience::SomePractice,
            recruiting_phase: RecruitingPhase::PrePrep,
            target_firms: BTreeSet::new(),
            target_industries: tags(&["Healthcare"]),
            event_budget: EventBudget::NoLimit,
            focus_priorities: BTreeSet::new(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_healthcare_case_workshop_for_beginner() {
        let event = EventDescription {
            name: "Healthcare Case Bootcamp".to_string(),
            event_type: EventType::CaseWorkshop,
            industry: Industry::Healthcare,
            duration_hours: 6,
            cost_dollars: 0,
            requires_travel: false,
            travel_hours: 0,
            case_topics: tags(&["Market Entry", "Profitability", "Pricing"]),
            speaker_qualities: tags(&["MBB Partners"]),
            networking_features: tags(&["Alumni Mixer", "Mentorship"]),
        };
        let profile = UserProfile {
            case_experience: CaseExperience::Beginner,
            target_industries: tags(&["Healthcare"]),
            target_firms: tags(&["McKinsey"]),
            recruiting_phase: RecruitingPhase::ActiveRecruiting,
            focus_priorities: [FocusPriority::CaseSkills, FocusPriority::Networking]
                .into_iter()
                .collect(),
            event_budget: EventBudget::Zero,
            ..UserProfile::default()
        };

        let result = score(&event, &profile);

        // 35 + 24 + 15 + 20 + 25 + 15 = 134, clamped
        assert_eq!(result.breakdown.career, 100);
        // 30 + 20 + 20 (MBB speaker) + 15 (MBB target)
        assert_eq!(result.breakdown.networking, 85);
        // 40 + 20 (case skills) + 15 (networking)
        assert_eq!(result.breakdown.skills, 75);
        // 88 * 1.2 = 105.6, clamped
        assert_eq!(result.breakdown.time, 100);
        // 40 + 25.5 + 15 + 10 = 90.5, rounds up
        assert_eq!(result.overall_score, 91);
        assert_eq!(result.tier, RecommendationTier::Attend);
        assert_eq!(
            result.insights,
            vec![
                Insight::StrongCasePrep,
                Insight::DirectMbbAccess,
                Insight::BuildsExpertise(Industry::Healthcare),
                Insight::HighPriorityWhileRecruiting,
                Insight::FreeEvent,
            ]
        );
        let text: Vec<String> = result.insights.iter().map(|i| i.to_string()).collect();
        assert!(text.contains(&"Builds Healthcare expertise".to_string()));
        assert!(result.recommendation.contains("beginner"));
    }

    #[test]
    fn test_expensive_networking_event_over_budget() {
        let event = EventDescription {
            name: "Tech Networking Gala".to_string(),
            event_type: EventType::NetworkingEvent,
            industry: Industry::Technology,
            duration_hours: 3,
            cost_dollars: 3000,
            networking_features: tags(&["Alumni Mixer"]),
            ..sample_event()
        };
        let profile = UserProfile {
            case_experience: CaseExperience::Beginner,
            target_industries: tags(&["Healthcare"]),
            event_budget: EventBudget::UpTo500,
            ..sample_profile()
        };

        let result = score(&event, &profile);

        assert_eq!(result.breakdown.career, 35 + 8);
        assert_eq!(result.breakdown.networking, 40);
        assert_eq!(result.breakdown.skills, 40);
        // 94 * 0.7 = 65.8
        assert_eq!(result.breakdown.time, 66);
        // 17.2 + 12 + 8 + 6.6 = 43.8
        assert_eq!(result.overall_score, 44);
        assert_eq!(result.tier, RecommendationTier::Skip);
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_time_floor_before_multipliers() {
        let event = EventDescription {
            duration_hours: 24,
            requires_travel: true,
            travel_hours: 16,
            ..sample_event()
        };
        let result = score(&event, &sample_profile());
        // 100 - 40 * 2 = 20
        assert_eq!(result.breakdown.time, 20);
    }

    #[test]
    fn test_time_floor_holds_past_forty_hours() {
        let event = EventDescription {
            duration_hours: 24,
            requires_travel: true,
            travel_hours: 20,
            ..sample_event()
        };
        let mut profile = sample_profile();
        assert_eq!(score(&event, &profile).breakdown.time, 20);

        profile.recruiting_phase = RecruitingPhase::InterviewSeason;
        assert_eq!(score(&event, &profile).breakdown.time, 22);

        profile.event_budget = EventBudget::Zero;
        let paid = EventDescription {
            cost_dollars: 10,
            ..event
        };
        // 20 * 1.1 * 0.7 = 15.4
        assert_eq!(score(&paid, &profile).breakdown.time, 15);
    }

    #[test]
    fn test_stray_travel_hours_ignored() {
        let without_travel = EventDescription {
            requires_travel: false,
            travel_hours: 12,
            ..sample_event()
        };
        let baseline = sample_event();
        let profile = sample_profile();
        assert_eq!(score(&without_travel, &profile), score(&baseline, &profile));
    }

    #[test]
    fn test_travel_hours_count_when_required() {
        let event = EventDescription {
            duration_hours: 4,
            requires_travel: true,
            travel_hours: 6,
            ..sample_event()
        };
        assert_eq!(score(&event, &sample_profile()).breakdown.time, 80);
    }

    #[test]
    fn test_consulting_specific_bonus_without_target() {
        let event = EventDescription {
            industry: Industry::ConsultingSpecific,
            ..sample_event()
        };
        // 35 + 25 + 15 (alumni panel)
        assert_eq!(score(&event, &sample_profile()).breakdown.career, 75);
    }

    #[test]
    fn test_target_industry_bonus() {
        let event = EventDescription {
            industry: Industry::Healthcare,
            ..sample_event()
        };
        // 35 + 20 + 15
        assert_eq!(score(&event, &sample_profile()).breakdown.career, 70);
    }

    #[test]
    fn test_many_topics_bonus_starts_at_three() {
        let profile = sample_profile();
        let two = EventDescription {
            case_topics: tags(&["Pricing", "M&A"]),
            ..sample_event()
        };
        let three = EventDescription {
            case_topics: tags(&["Pricing", "M&A", "Operations"]),
            ..sample_event()
        };
        assert_eq!(score(&two, &profile).breakdown.career, 35 + 16 + 15);
        assert_eq!(score(&three, &profile).breakdown.career, 35 + 24 + 15 + 15);
    }

    #[test]
    fn test_advanced_bonus_for_firm_sessions() {
        let event = EventDescription {
            event_type: EventType::FirmInfoSession,
            ..sample_event()
        };
        let mut profile = sample_profile();
        assert_eq!(score(&event, &profile).breakdown.career, 35 + 20);

        profile.case_experience = CaseExperience::Advanced;
        assert_eq!(score(&event, &profile).breakdown.career, 35 + 20 + 15);

        // Beginner bonus does not apply to info sessions
        profile.case_experience = CaseExperience::Beginner;
        assert_eq!(score(&event, &profile).breakdown.career, 35 + 20);
    }

    #[test]
    fn test_speaker_bonuses_accumulate() {
        let event = EventDescription {
            speaker_qualities: tags(&["MBB Partners", "MBB Consultants", "Big 4 Partners"]),
            ..sample_event()
        };
        // 30 + 20 + 20 + 12, no MBB target firm
        assert_eq!(score(&event, &sample_profile()).breakdown.networking, 82);
    }

    #[test]
    fn test_mbb_cross_bonus_needs_both_sides() {
        let mut profile = sample_profile();
        profile.target_firms = tags(&["BCG"]);

        let no_mbb_speaker = EventDescription {
            speaker_qualities: tags(&["Fortune 500 CEOs"]),
            ..sample_event()
        };
        assert_eq!(score(&no_mbb_speaker, &profile).breakdown.networking, 38);

        let mbb_speaker = EventDescription {
            speaker_qualities: tags(&["MBB Consultants"]),
            ..sample_event()
        };
        assert_eq!(score(&mbb_speaker, &profile).breakdown.networking, 65);
    }

    #[test]
    fn test_networking_clamps_at_100() {
        let event = EventDescription {
            networking_features: tags(&[
                "Alumni Mixer",
                "Mentorship",
                "Small Group Sessions",
                "Coffee Chats",
                "Recruiter Booths",
                "Resume Book",
            ]),
            speaker_qualities: tags(&["MBB Partners", "MBB Consultants"]),
            ..sample_event()
        };
        assert_eq!(score(&event, &sample_profile()).breakdown.networking, 100);
    }

    #[test]
    fn test_skills_priorities() {
        let event = EventDescription {
            event_type: EventType::SkillsTraining,
            industry: Industry::Healthcare,
            case_topics: tags(&["Market Sizing"]),
            networking_features: tags(&["Mentorship"]),
            ..sample_event()
        };
        let mut profile = sample_profile();
        assert_eq!(score(&event, &profile).breakdown.skills, 40);

        profile.focus_priorities = FocusPriority::ALL.into_iter().collect();
        // +20 case, +15 industry, +0 networking (only one feature), +15 presentation
        assert_eq!(score(&event, &profile).breakdown.skills, 90);
    }

    #[test]
    fn test_recommendation_templates() {
        let mut profile = sample_profile();
        profile.case_experience = CaseExperience::Advanced;
        profile.recruiting_phase = RecruitingPhase::InterviewSeason;

        let attend = recommendation_text(RecommendationTier::Attend, &profile);
        assert!(attend.contains("advanced"));

        let consider = recommendation_text(RecommendationTier::Consider, &profile);
        assert!(consider.contains("interview season"));

        let skip = recommendation_text(RecommendationTier::Skip, &profile);
        profile.case_experience = CaseExperience::Beginner;
        assert_eq!(skip, recommendation_text(RecommendationTier::Skip, &profile));
    }

    #[test]
    fn test_high_priority_insight_needs_score_above_65() {
        let mut profile = sample_profile();
        profile.recruiting_phase = RecruitingPhase::ActiveRecruiting;

        let weak = sample_event();
        let result = score(&weak, &profile);
        assert!(result.overall_score <= 65);
        assert!(!result.insights.contains(&Insight::HighPriorityWhileRecruiting));

        let strong = EventDescription {
            event_type: EventType::CaseWorkshop,
            industry: Industry::ConsultingSpecific,
            case_topics: tags(&["Pricing", "M&A", "Operations"]),
            speaker_qualities: tags(&["MBB Partners"]),
            networking_features: tags(&["Alumni Mixer", "Mentorship"]),
            ..sample_event()
        };
        let result = score(&strong, &profile);
        assert!(result.overall_score > 65);
        assert!(result.insights.contains(&Insight::HighPriorityWhileRecruiting));
    }

    #[test]
    fn test_paid_event_has_no_free_insight() {
        let event = EventDescription {
            cost_dollars: 25,
            ..sample_event()
        };
        assert!(!score(&event, &sample_profile())
            .insights
            .contains(&Insight::FreeEvent));
    }

    #[test]
    fn test_weighted_total_rounds_half_up() {
        let breakdown = Breakdown {
            career: 100,
            networking: 85,
            skills: 75,
            time: 100,
        };
        assert_eq!(weighted_total(&breakdown, 100 * TIME_SCALE), 91);

        let breakdown = Breakdown {
            career: 50,
            networking: 50,
            skills: 50,
            time: 55,
        };
        // 50.5
        assert_eq!(weighted_total(&breakdown, 55 * TIME_SCALE), 51);
        // 50.4
        assert_eq!(weighted_total(&breakdown, 54 * TIME_SCALE), 50);
    }

    #[test]
    fn test_weighted_total_uses_unrounded_time() {
        let breakdown = Breakdown {
            career: 100,
            networking: 52,
            skills: 60,
            time: 69,
        };
        // 74.46 with time 68.6; rounding time to 69 first would give 74.5
        assert_eq!(weighted_total(&breakdown, 686_000), 74);
        assert_eq!(round_time(686_000), 69);
        assert_eq!(round_time(685_000), 69);
        assert_eq!(round_time(684_999), 68);
    }

    #[test]
    fn test_weighted_total_bounds() {
        let max = Breakdown {
            career: 100,
            networking: 100,
            skills: 100,
            time: 100,
        };
        assert_eq!(weighted_total(&max, 100 * TIME_SCALE), 100);
        let min = Breakdown {
            career: 0,
            networking: 0,
            skills: 0,
            time: 0,
        };
        assert_eq!(weighted_total(&min, 0), 0);
    }

    #[test]
    fn test_time_rounding_does_not_lift_tier() {
        let event = EventDescription {
            name: "Healthcare Strategy Summit".to_string(),
            event_type: EventType::IndustryConference,
            industry: Industry::Healthcare,
            duration_hours: 1,
            cost_dollars: 100,
            case_topics: tags(&["Market Entry", "Pricing", "Operations"]),
            speaker_qualities: tags(&["Big 4 Partners"]),
            networking_features: tags(&["Alumni Mixer"]),
            ..sample_event()
        };
        let profile = UserProfile {
            focus_priorities: [FocusPriority::CaseSkills].into_iter().collect(),
            event_budget: EventBudget::Zero,
            ..sample_profile()
        };

        let result = score(&event, &profile);

        // 35 + 24 + 15 + 20 + 12 = 106, clamped
        assert_eq!(result.breakdown.career, 100);
        // 30 + 10 + 12 (Big 4)
        assert_eq!(result.breakdown.networking, 52);
        assert_eq!(result.breakdown.skills, 60);
        // 98 * 0.7 = 68.6
        assert_eq!(result.breakdown.time, 69);
        // 40 + 15.6 + 12 + 6.86 = 74.46
        assert_eq!(result.overall_score, 74);
        assert_eq!(result.tier, RecommendationTier::Consider);
    }

    #[test]
    fn test_score_is_idempotent() {
        let event = EventDescription {
            case_topics: tags(&["Pricing", "M&A", "Operations"]),
            speaker_qualities: tags(&["MBB Partners", "Faculty"]),
            ..sample_event()
        };
        let profile = sample_profile();
        assert_eq!(score(&event, &profile), score(&event, &profile));
    }
}
