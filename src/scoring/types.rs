use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MbaYear {
    #[default]
    #[serde(rename = "year_1")]
    Year1,
    #[serde(rename = "year_2")]
    Year2,
}

impl MbaYear {
    pub const ALL: [MbaYear; 2] = [MbaYear::Year1, MbaYear::Year2];

    pub fn label(self) -> &'static str {
        match self {
            MbaYear::Year1 => "1st Year",
            MbaYear::Year2 => "2nd Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseExperience {
    #[default]
    Beginner,
    SomePractice,
    Advanced,
}

impl CaseExperience {
    pub const ALL: [CaseExperience; 3] = [
        CaseExperience::Beginner,
        CaseExperience::SomePractice,
        CaseExperience::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CaseExperience::Beginner => "Beginner",
            CaseExperience::SomePractice => "Some Practice",
            CaseExperience::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitingPhase {
    #[default]
    PrePrep,
    ActiveRecruiting,
    InterviewSeason,
}

impl RecruitingPhase {
    pub const ALL: [RecruitingPhase; 3] = [
        RecruitingPhase::PrePrep,
        RecruitingPhase::ActiveRecruiting,
        RecruitingPhase::InterviewSeason,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecruitingPhase::PrePrep => "Pre-Prep",
            RecruitingPhase::ActiveRecruiting => "Active Recruiting",
            RecruitingPhase::InterviewSeason => "Interview Season",
        }
    }
}

/// Spending ceiling for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum EventBudget {
    #[default]
    #[serde(rename = "zero")]
    Zero,
    #[serde(rename = "up_to_500")]
    UpTo500,
    #[serde(rename = "up_to_2000")]
    UpTo2000,
    #[serde(rename = "no_limit")]
    NoLimit,
}

impl EventBudget {
    pub const ALL: [EventBudget; 4] = [
        EventBudget::Zero,
        EventBudget::UpTo500,
        EventBudget::UpTo2000,
        EventBudget::NoLimit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventBudget::Zero => "$0",
            EventBudget::UpTo500 => "$0-500",
            EventBudget::UpTo2000 => "$500-2000",
            EventBudget::NoLimit => "No Limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusPriority {
    CaseSkills,
    IndustryKnowledge,
    Networking,
    PresentationSkills,
}

impl FocusPriority {
    pub const ALL: [FocusPriority; 4] = [
        FocusPriority::CaseSkills,
        FocusPriority::IndustryKnowledge,
        FocusPriority::Networking,
        FocusPriority::PresentationSkills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FocusPriority::CaseSkills => "Case Skills",
            FocusPriority::IndustryKnowledge => "Industry Knowledge",
            FocusPriority::Networking => "Networking",
            FocusPriority::PresentationSkills => "Presentation Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    IndustryConference,
    CaseWorkshop,
    NetworkingEvent,
    FirmInfoSession,
    AlumniPanel,
    SkillsTraining,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::IndustryConference,
        EventType::CaseWorkshop,
        EventType::NetworkingEvent,
        EventType::FirmInfoSession,
        EventType::AlumniPanel,
        EventType::SkillsTraining,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventType::IndustryConference => "Industry Conference",
            EventType::CaseWorkshop => "Case Workshop",
            EventType::NetworkingEvent => "Networking Event",
            EventType::FirmInfoSession => "Firm Info Session",
            EventType::AlumniPanel => "Alumni Panel",
            EventType::SkillsTraining => "Skills Training",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Healthcare,
    Technology,
    FinancialServices,
    ConsumerProducts,
    CrossIndustry,
    ConsultingSpecific,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Healthcare,
        Industry::Technology,
        Industry::FinancialServices,
        Industry::ConsumerProducts,
        Industry::CrossIndustry,
        Industry::ConsultingSpecific,
    ];

    /// Name as it appears in a profile's target industry list.
    pub fn label(self) -> &'static str {
        match self {
            Industry::Healthcare => "Healthcare",
            Industry::Technology => "Technology",
            Industry::FinancialServices => "Financial Services",
            Industry::ConsumerProducts => "Consumer Products",
            Industry::CrossIndustry => "Cross-Industry",
            Industry::ConsultingSpecific => "Consulting-Specific",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's recruiting profile, entered once and reused for every event.
///
/// Example YAML:
/// ```yaml
/// profile:
///   mba_year: year_1
///   case_experience: beginner
///   target_firms: [McKinsey, BCG, Bain]
///   recruiting_phase: active_recruiting
///   target_industries: [Healthcare, Technology]
///   event_budget: up_to_500
///   focus_priorities: [case_skills, networking]
///   hours_per_week: 8
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserProfile {
    pub mba_year: MbaYear,
    pub case_experience: CaseExperience,
    pub target_firms: BTreeSet<String>,
    pub recruiting_phase: RecruitingPhase,
    pub target_industries: BTreeSet<String>,
    pub event_budget: EventBudget,
    pub focus_priorities: BTreeSet<FocusPriority>,
    /// Informational only; scoring does not read it.
    pub hours_per_week: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            mba_year: MbaYear::Year1,
            case_experience: CaseExperience::Beginner,
            target_firms: ["McKinsey", "BCG", "Bain"]
                .into_iter()
                .map(String::from)
                .collect(),
            recruiting_phase: RecruitingPhase::PrePrep,
            target_industries: ["Healthcare", "Technology"]
                .into_iter()
                .map(String::from)
                .collect(),
            event_budget: EventBudget::Zero,
            focus_priorities: [FocusPriority::CaseSkills, FocusPriority::Networking]
                .into_iter()
                .collect(),
            hours_per_week: 8,
        }
    }
}

impl UserProfile {
    /// Whether the event's industry is one the user is targeting.
    pub fn targets_industry(&self, industry: Industry) -> bool {
        self.target_industries
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(industry.label()))
    }

    pub fn has_priority(&self, priority: FocusPriority) -> bool {
        self.focus_priorities.contains(&priority)
    }

    /// Whether any of McKinsey, BCG or Bain is a target firm.
    pub fn targets_mbb(&self) -> bool {
        self.target_firms
            .iter()
            .any(|firm| crate::catalog::contains(crate::catalog::MBB_FIRMS, firm))
    }
}

/// A single event to analyze.
///
/// Example YAML:
/// ```yaml
/// name: Healthcare Case Bootcamp
/// event_type: case_workshop
/// industry: healthcare
/// duration_hours: 6
/// cost_dollars: 0
/// case_topics: [Market Entry, Profitability, Pricing]
/// speaker_qualities: [MBB Partners]
/// networking_features: [Alumni Mixer, Mentorship]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EventDescription {
    pub name: String,
    pub event_type: EventType,
    pub industry: Industry,
    pub duration_hours: u32,
    #[serde(default)]
    pub cost_dollars: u32,
    #[serde(default)]
    pub requires_travel: bool,
    /// Ignored unless `requires_travel` is set.
    #[serde(default)]
    pub travel_hours: u32,
    #[serde(default)]
    pub case_topics: BTreeSet<String>,
    #[serde(default)]
    pub speaker_qualities: BTreeSet<String>,
    #[serde(default)]
    pub networking_features: BTreeSet<String>,
}

impl EventDescription {
    /// Travel hours that actually count: zero unless travel is required.
    pub fn effective_travel_hours(&self) -> u32 {
        if self.requires_travel {
            self.travel_hours
        } else {
            0
        }
    }

    /// Event duration plus effective travel time.
    pub fn total_hours(&self) -> u32 {
        self.duration_hours
            .saturating_add(self.effective_travel_hours())
    }

    pub fn has_mbb_speaker(&self) -> bool {
        self.speaker_qualities.iter().any(|s| s.contains("MBB"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationTier {
    Attend,
    Consider,
    Skip,
}

impl RecommendationTier {
    pub const ATTEND_THRESHOLD: u32 = 75;
    pub const CONSIDER_THRESHOLD: u32 = 55;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::ATTEND_THRESHOLD {
            RecommendationTier::Attend
        } else if score >= Self::CONSIDER_THRESHOLD {
            RecommendationTier::Consider
        } else {
            RecommendationTier::Skip
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecommendationTier::Attend => "ATTEND",
            RecommendationTier::Consider => "CONSIDER",
            RecommendationTier::Skip => "SKIP",
        }
    }
}

/// Per-factor sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub career: u32,
    pub networking: u32,
    pub skills: u32,
    pub time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    StrongCasePrep,
    DirectMbbAccess,
    BuildsExpertise(Industry),
    HighPriorityWhileRecruiting,
    FreeEvent,
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::StrongCasePrep => f.write_str("Strong case-prep value"),
            Insight::DirectMbbAccess => f.write_str("Direct MBB access"),
            Insight::BuildsExpertise(industry) => write!(f, "Builds {} expertise", industry),
            Insight::HighPriorityWhileRecruiting => f.write_str("High priority during recruiting"),
            Insight::FreeEvent => f.write_str("Excellent value: free event"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub overall_score: u32,
    pub tier: RecommendationTier,
    pub recommendation: String,
    pub breakdown: Breakdown,
    pub insights: Vec<Insight>,
}
