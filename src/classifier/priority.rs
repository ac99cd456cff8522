// src/classifier/priority.rs
// Priority estimation for issue reports

use serde::{Deserialize, Serialize};

use super::keywords::{self, KeywordGroup};

/// Urgency of a report
///
/// Variants are declared least to most severe so the derived `Ord` ranks
/// `Urgent > High > Medium > Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Urgent,
}

const GROUPS: [KeywordGroup<Priority>; 3] = [
    KeywordGroup::new(Priority::Urgent, keywords::URGENT),
    KeywordGroup::new(Priority::High, keywords::HIGH),
    KeywordGroup::new(Priority::Medium, keywords::MEDIUM),
];

impl Priority {
    /// Most severe first
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "urgent" | "critical" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "medium" | "normal" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimate how urgent a report is from its title and description
pub fn estimate_priority(title: &str, description: &str) -> Priority {
    estimate_priority_explained(title, description).0
}

/// Like [`estimate_priority`], also returning the keyword that decided it
pub fn estimate_priority_explained(
    title: &str,
    description: &str,
) -> (Priority, Option<&'static str>) {
    let text = keywords::combined_text(title, description);
    match keywords::first_matching_group(&GROUPS, &text) {
        Some((priority, keyword)) => (priority, Some(keyword)),
        None => (Priority::Low, None),
    }
}
