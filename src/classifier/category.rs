// src/classifier/category.rs
// Subject-area categorization of issue reports

use serde::{Deserialize, Serialize};

use super::keywords::{self, KeywordGroup};

/// Subject-matter area of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Network, computers, printers, accounts
    Technical,
    /// Classes, courses, exams, grades
    Academic,
    /// Rooms, furniture, lighting, climate
    Facilities,
    /// Registration, payments, offices
    Administrative,
    #[default]
    Other,
}

/// Checked top to bottom; the first group with a hit decides
const GROUPS: [KeywordGroup<Category>; 4] = [
    KeywordGroup::new(Category::Technical, keywords::TECHNICAL),
    KeywordGroup::new(Category::Academic, keywords::ACADEMIC),
    KeywordGroup::new(Category::Facilities, keywords::FACILITIES),
    KeywordGroup::new(Category::Administrative, keywords::ADMINISTRATIVE),
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Academic,
        Category::Facilities,
        Category::Administrative,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Academic => "academic",
            Category::Facilities => "facilities",
            Category::Administrative => "administrative",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "technical" | "tech" => Some(Category::Technical),
            "academic" => Some(Category::Academic),
            "facilities" | "facility" => Some(Category::Facilities),
            "administrative" | "admin" => Some(Category::Administrative),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorize a report from its title and description
pub fn categorize(title: &str, description: &str) -> Category {
    categorize_explained(title, description).0
}

/// Like [`categorize`], also returning the keyword that decided it
///
/// The keyword is `None` only when the result is [`Category::Other`].
pub fn categorize_explained(title: &str, description: &str) -> (Category, Option<&'static str>) {
    let text = keywords::combined_text(title, description);
    match keywords::first_matching_group(&GROUPS, &text) {
        Some((category, keyword)) => (category, Some(keyword)),
        None => (Category::Other, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wifi_report_is_technical() {
        assert_eq!(
            categorize("Wifi down", "Cannot connect to internet in library"),
            Category::Technical
        );
    }

    #[test]
    fn test_empty_is_other() {
        assert_eq!(categorize("", ""), Category::Other);
        assert_eq!(categorize_explained("", ""), (Category::Other, None));
    }

    #[test]
    fn test_technical_beats_academic() {
        assert_eq!(categorize("wifi during exam", ""), Category::Technical);
    }

    #[test]
    fn test_each_group() {
        assert_eq!(categorize("Professor missed lecture", ""), Category::Academic);
        assert_eq!(categorize("Broken chair", "third floor"), Category::Facilities);
        assert_eq!(
            categorize("Registration fee", "double charged for payment"),
            Category::Administrative
        );
        assert_eq!(categorize("Lost umbrella", "blue one"), Category::Other);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("PRINTER JAM", ""), Category::Technical);
    }

    #[test]
    fn test_short_ac_keyword_matches_inside_words() {
        // "back" contains "ac"
        let (category, keyword) = categorize_explained("Come back later", "");
        assert_eq!(category, Category::Facilities);
        assert_eq!(keyword, Some("ac"));
    }

    #[test]
    fn test_explained_reports_deciding_keyword() {
        let (category, keyword) = categorize_explained("Login page", "my computer freezes");
        assert_eq!(category, Category::Technical);
        assert_eq!(keyword, Some("computer"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Category::from_str("Facilities"), Some(Category::Facilities));
        assert_eq!(Category::from_str("admin"), Some(Category::Administrative));
        assert_eq!(Category::from_str("plumbing"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Administrative).unwrap();
        assert_eq!(json, "\"administrative\"");
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }
}
