//! Fixed catalogs the profile and event forms pick from.
//!
//! Scoring never requires a tag to be listed here. Tags outside the catalogs
//! are reported as warnings and score through the same substring rules.

pub const TARGET_FIRMS: &[&str] = &["McKinsey", "BCG", "Bain", "Deloitte", "PwC", "EY", "Boutique"];

/// The three strategy firms that make up "MBB".
pub const MBB_FIRMS: &[&str] = &["McKinsey", "BCG", "Bain"];

pub const TARGET_INDUSTRIES: &[&str] = &[
    "Healthcare",
    "Technology",
    "Financial Services",
    "Consumer Products",
    "Energy",
];

pub const CASE_TOPICS: &[&str] = &[
    "Market Entry",
    "Profitability",
    "Pricing",
    "M&A",
    "Growth Strategy",
    "Market Sizing",
    "Operations",
];

pub const SPEAKER_QUALITIES: &[&str] = &[
    "MBB Partners",
    "MBB Consultants",
    "Big 4 Partners",
    "Consulting Alumni",
    "Fortune 500 CEOs",
    "Industry Executives",
    "Faculty",
];

pub const NETWORKING_FEATURES: &[&str] = &[
    "Alumni Mixer",
    "Mentorship",
    "Small Group Sessions",
    "Coffee Chats",
    "Recruiter Booths",
    "Resume Book",
];

/// Case-insensitive catalog membership.
pub fn contains(catalog: &[&str], tag: &str) -> bool {
    catalog.iter().any(|entry| entry.eq_ignore_ascii_case(tag.trim()))
}
