// src/classifier/keywords.rs
// Fixed keyword groups, listed in the order they are checked

/// A label paired with the substrings that select it
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup<L> {
    pub label: L,
    pub keywords: &'static [&'static str],
}

impl<L: Copy> KeywordGroup<L> {
    pub const fn new(label: L, keywords: &'static [&'static str]) -> Self {
        Self { label, keywords }
    }

    /// First keyword (in list order) contained in `text`
    ///
    /// `text` must already be lowercased.
    pub fn first_match(&self, text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| text.contains(kw))
    }

    /// Number of distinct keywords contained in `text`, repeats ignored
    pub fn count_matches(&self, text: &str) -> usize {
        self.keywords.iter().filter(|kw| text.contains(*kw)).count()
    }
}

/// Walk groups in order and return the first one with any hit
pub fn first_matching_group<L: Copy>(
    groups: &[KeywordGroup<L>],
    text: &str,
) -> Option<(L, &'static str)> {
    groups
        .iter()
        .find_map(|group| group.first_match(text).map(|kw| (group.label, kw)))
}

pub const TECHNICAL: &[&str] = &["wifi", "internet", "connection", "computer", "printer", "login"];

pub const ACADEMIC: &[&str] = &["class", "course", "professor", "lecture", "exam", "grade"];

// "ac" also hits "package", "back", "access"... kept as-is, see tests.
pub const FACILITIES: &[&str] = &[
    "bathroom",
    "ac",
    "air conditioning",
    "light",
    "door",
    "chair",
    "desk",
    "room",
];

pub const ADMINISTRATIVE: &[&str] = &[
    "registration",
    "payment",
    "form",
    "office",
    "staff",
    "administration",
];

pub const URGENT: &[&str] = &[
    "emergency",
    "urgent",
    "immediately",
    "dangerous",
    "safety",
    "fire",
    "flood",
];

pub const HIGH: &[&str] = &[
    "broken",
    "not working",
    "malfunction",
    "can't access",
    "important",
    "deadline",
];

pub const MEDIUM: &[&str] = &["issue", "problem", "difficult", "slow"];

pub const POSITIVE: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "best",
    "love",
    "happy",
    "satisfied",
    "helpful",
    "impressive",
    "thank",
    "pleased",
    "appreciate",
];

pub const NEGATIVE: &[&str] = &[
    "bad",
    "terrible",
    "poor",
    "awful",
    "worst",
    "hate",
    "unhappy",
    "unsatisfied",
    "useless",
    "disappointing",
    "frustrating",
    "angry",
    "disappointed",
    "problem",
    "issue",
    "complaint",
];

/// Lowercased `title` and `description` joined by a single space
pub fn combined_text(title: &str, description: &str) -> String {
    format!("{} {}", title.to_lowercase(), description.to_lowercase())
}
