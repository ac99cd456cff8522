// src/lib.rs
// campus-triage - keyword classification for campus issue reports and feedback

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod triage;

pub use classifier::{
    Category, Priority, Sentiment, SentimentResult, analyze_sentiment, categorize,
    estimate_priority,
};
pub use error::{Result, TriageError};
