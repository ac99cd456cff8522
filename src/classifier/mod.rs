//! Keyword-based text classification for issue reports and feedback
//!
//! Three independent, pure operations:
//! - [`categorize`] - subject-area category of a report
//! - [`estimate_priority`] - urgency of a report
//! - [`analyze_sentiment`] - positive/negative balance of feedback
//!
//! Every operation is total: any input, including empty text, yields a
//! valid label. Keyword groups are fixed and checked in a fixed order.

pub mod category;
pub mod keywords;
pub mod priority;
pub mod sentiment;

pub use category::{Category, categorize, categorize_explained};
pub use priority::{Priority, estimate_priority, estimate_priority_explained};
pub use sentiment::{Sentiment, SentimentResult, analyze_sentiment};
