// src/triage.rs
// Draft-level analysis: when to ask the classifier and how to apply its answer

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::{
    Category, Priority, Sentiment, SentimentResult, analyze_sentiment, categorize_explained,
    estimate_priority_explained,
};

/// Minimum input sizes before analysis is attempted (in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisThresholds {
    pub min_title_len: usize,
    pub min_description_len: usize,
    pub min_feedback_len: usize,
    /// Negative feedback at least this long is flagged for priority review
    pub priority_review_min_len: usize,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            min_title_len: 3,
            min_description_len: 10,
            min_feedback_len: 10,
            priority_review_min_len: 21,
        }
    }
}

/// Classifier output for a report draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: Category,
    pub priority: Priority,
}

impl Suggestion {
    /// Classify without any length gate, as the chat flow does
    pub fn for_text(title: &str, description: &str) -> Self {
        let (category, category_kw) = categorize_explained(title, description);
        let (priority, priority_kw) = estimate_priority_explained(title, description);
        debug!(
            category = %category,
            category_keyword = category_kw.unwrap_or("-"),
            priority = %priority,
            priority_keyword = priority_kw.unwrap_or("-"),
            "Classified report text"
        );
        Self { category, priority }
    }

    /// Confirmation line shown to the reporter
    pub fn summary(&self) -> String {
        format!(
            "Based on your description, I've categorized this as a {} issue with {} priority.",
            self.category.as_str().to_uppercase(),
            self.priority.as_str().to_uppercase()
        )
    }
}

/// An issue report being filled in
///
/// `category` and `priority` are the reporter's own picks, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
}

impl ReportDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True once both fields are long enough to be worth classifying
    pub fn ready_for_analysis(&self, thresholds: &AnalysisThresholds) -> bool {
        let title_len = self.title.chars().count();
        let description_len = self.description.chars().count();
        title_len > 0
            && description_len > 0
            && title_len >= thresholds.min_title_len
            && description_len >= thresholds.min_description_len
    }

    /// Classify the draft, or `None` while it is still too short
    pub fn suggest(&self, thresholds: &AnalysisThresholds) -> Option<Suggestion> {
        if !self.ready_for_analysis(thresholds) {
            debug!(
                title_len = self.title.chars().count(),
                description_len = self.description.chars().count(),
                "Draft too short for analysis"
            );
            return None;
        }

        Some(Suggestion::for_text(&self.title, &self.description))
    }

    /// Fill in whichever of category/priority the reporter left unset
    ///
    /// Returns the suggestion that was consulted, if the draft was ready.
    pub fn apply_suggestion(&mut self, thresholds: &AnalysisThresholds) -> Option<Suggestion> {
        let suggestion = self.suggest(thresholds)?;
        if self.category.is_none() {
            self.category = Some(suggestion.category);
        }
        if self.priority.is_none() {
            self.priority = Some(suggestion.priority);
        }
        Some(suggestion)
    }
}

/// A feedback message being written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub body: String,
}

impl FeedbackDraft {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Sentiment of the body, or `None` while it is too short
    pub fn analyze(&self, thresholds: &AnalysisThresholds) -> Option<SentimentResult> {
        let len = self.body.chars().count();
        if len == 0 || len < thresholds.min_feedback_len {
            return None;
        }
        let result = analyze_sentiment(&self.body);
        debug!(score = result.score, sentiment = %result.sentiment, "Analyzed feedback");
        Some(result)
    }

    /// Negative feedback long enough to be prioritized for review
    pub fn needs_priority_review(&self, thresholds: &AnalysisThresholds) -> bool {
        self.body.chars().count() >= thresholds.priority_review_min_len
            && self
                .analyze(thresholds)
                .is_some_and(|r| r.sentiment == Sentiment::Negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_draft_gets_no_suggestion() {
        let t = AnalysisThresholds::default();
        assert_eq!(ReportDraft::new("Wi", "wifi is down in the dorm").suggest(&t), None);
        assert_eq!(ReportDraft::new("Wifi", "down").suggest(&t), None);
        assert_eq!(ReportDraft::new("", "").suggest(&t), None);
    }

    #[test]
    fn test_ready_draft_is_classified() {
        let t = AnalysisThresholds::default();
        let suggestion = ReportDraft::new("Wifi down", "Connection drops every few minutes")
            .suggest(&t)
            .unwrap();
        assert_eq!(suggestion.category, Category::Technical);
        assert_eq!(suggestion.priority, Priority::Low);
    }

    #[test]
    fn test_apply_keeps_reporter_choices() {
        let t = AnalysisThresholds::default();
        let mut draft = ReportDraft::new("Broken projector", "The class projector is broken")
            .with_priority(Priority::Urgent);
        let suggestion = draft.apply_suggestion(&t).unwrap();

        assert_eq!(suggestion.priority, Priority::High);
        assert_eq!(draft.priority, Some(Priority::Urgent));
        assert_eq!(draft.category, Some(Category::Academic));
    }

    #[test]
    fn test_apply_on_short_draft_leaves_fields_unset() {
        let t = AnalysisThresholds::default();
        let mut draft = ReportDraft::new("Help", "now");
        assert_eq!(draft.apply_suggestion(&t), None);
        assert_eq!(draft.category, None);
        assert_eq!(draft.priority, None);
    }

    #[test]
    fn test_zero_thresholds_still_need_text() {
        let t = AnalysisThresholds {
            min_title_len: 0,
            min_description_len: 0,
            min_feedback_len: 0,
            priority_review_min_len: 0,
        };
        assert_eq!(ReportDraft::new("", "x").suggest(&t), None);
        assert_eq!(FeedbackDraft::new("").analyze(&t), None);
        assert!(ReportDraft::new("a", "b").suggest(&t).is_some());
    }

    #[test]
    fn test_lengths_count_characters() {
        let t = AnalysisThresholds::default();
        // 3 characters, 6 bytes
        assert!(ReportDraft::new("ééé", "0123456789").ready_for_analysis(&t));
        assert!(!ReportDraft::new("éé", "0123456789").ready_for_analysis(&t));
    }

    #[test]
    fn test_summary_text() {
        let suggestion = Suggestion {
            category: Category::Facilities,
            priority: Priority::High,
        };
        assert_eq!(
            suggestion.summary(),
            "Based on your description, I've categorized this as a FACILITIES issue with HIGH priority."
        );
    }

    #[test]
    fn test_feedback_threshold() {
        let t = AnalysisThresholds::default();
        assert_eq!(FeedbackDraft::new("great").analyze(&t), None);
        let result = FeedbackDraft::new("great and helpful staff").analyze(&t).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_chat_path_is_not_length_gated() {
        let t = AnalysisThresholds::default();
        let draft = ReportDraft::new("AC", "hot");
        assert_eq!(draft.suggest(&t), None);

        let suggestion = Suggestion::for_text("AC", "hot");
        assert_eq!(suggestion.category, Category::Facilities);
        assert_eq!(suggestion.priority, Priority::Low);
    }

    #[test]
    fn test_priority_review_length_boundary() {
        let t = AnalysisThresholds::default();
        // 20 characters, negative
        let short = FeedbackDraft::new("terrible and useless");
        assert_eq!(short.body.chars().count(), 20);
        assert_eq!(short.analyze(&t).unwrap().sentiment, Sentiment::Negative);
        assert!(!short.needs_priority_review(&t));

        // 21 characters, negative
        let long = FeedbackDraft::new("terrible and useless!");
        assert!(long.needs_priority_review(&t));
    }

    #[test]
    fn test_priority_review_needs_negative_sentiment() {
        let t = AnalysisThresholds::default();
        // one positive and one negative keyword -> neutral
        let neutral = FeedbackDraft::new("the food was good but the service was bad");
        assert_eq!(neutral.analyze(&t).unwrap().sentiment, Sentiment::Neutral);
        assert!(!neutral.needs_priority_review(&t));

        let positive = FeedbackDraft::new("wonderful and helpful staff at the front desk");
        assert!(!positive.needs_priority_review(&t));
    }

    #[test]
    fn test_priority_review_threshold_configurable() {
        let t = AnalysisThresholds {
            priority_review_min_len: 100,
            ..Default::default()
        };
        assert!(!FeedbackDraft::new("terrible and useless service").needs_priority_review(&t));
    }
}
