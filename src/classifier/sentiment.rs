// src/classifier/sentiment.rs
// Keyword-balance sentiment scoring for feedback text

use serde::{Deserialize, Serialize};

use super::keywords::{self, KeywordGroup};

/// Scores above this are positive, below its negation negative
pub const NEUTRAL_BAND: f64 = 0.2;

const POSITIVE: KeywordGroup<Sentiment> =
    KeywordGroup::new(Sentiment::Positive, keywords::POSITIVE);
const NEGATIVE: KeywordGroup<Sentiment> =
    KeywordGroup::new(Sentiment::Negative, keywords::NEGATIVE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Label for a score in [-1, 1]
    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            Sentiment::Positive
        } else if score < -NEUTRAL_BAND {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score plus derived label, serialized as `{"score": .., "sentiment": ".."}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SentimentResult {
    /// In [-1.0, 1.0], two decimal places
    pub score: f64,
    pub sentiment: Sentiment,
}

/// Score `text` by the balance of positive and negative keywords present
///
/// Each keyword counts once no matter how often it repeats. Text without
/// any keyword scores 0.0 (neutral).
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let lower = text.to_lowercase();
    let positive = POSITIVE.count_matches(&lower);
    let negative = NEGATIVE.count_matches(&lower);

    let score = balance_score(positive, negative);
    SentimentResult {
        score,
        sentiment: Sentiment::from_score(score),
    }
}

/// (P - N) / (P + N) rounded half away from zero to two decimals
///
/// Done in integers so exact halves like 1/8 round up to 0.13.
fn balance_score(positive: usize, negative: usize) -> f64 {
    let total = (positive + negative) as i64;
    if total == 0 {
        return 0.0;
    }
    let diff = positive as i64 - negative as i64;
    let hundredths = (diff.abs() * 200 + total) / (2 * total);
    (diff.signum() * hundredths) as f64 / 100.0
}
