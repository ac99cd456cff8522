// src/cli/mod.rs
// Command-line front end for the classifier

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::classifier::{
    Category, Priority, SentimentResult, analyze_sentiment, categorize_explained,
    estimate_priority_explained,
};
use crate::config::OutputFormat;
use crate::error::{Result, TriageError};
use crate::triage::{AnalysisThresholds, FeedbackDraft, ReportDraft, Suggestion};

#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(about = "Keyword triage for campus issue reports and feedback")]
#[command(version)]
pub struct Cli {
    /// Output format (overrides TRIAGE_OUTPUT and config.toml)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a category for a report
    Categorize {
        #[arg(short, long, default_value = "")]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Estimate the priority of a report
    Priority {
        #[arg(short, long, default_value = "")]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Score the sentiment of a piece of text
    Sentiment {
        #[arg(index = 1)]
        text: String,
    },

    /// Run the report-form flow: suggest, then fill unset fields
    Report {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        /// Category chosen by the reporter
        #[arg(long)]
        category: Option<String>,
        /// Priority chosen by the reporter
        #[arg(long)]
        priority: Option<String>,
    },

    /// Classify a report as the chat assistant does, with no length gate
    Chat {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
    },

    /// Analyze feedback once it is long enough
    Feedback {
        #[arg(index = 1)]
        text: String,
    },
}

/// Result of one command, ready to render
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Outcome {
    Category {
        category: Category,
        keyword: Option<&'static str>,
    },
    Priority {
        priority: Priority,
        keyword: Option<&'static str>,
    },
    Sentiment(SentimentResult),
    Report {
        ready: bool,
        category: Option<Category>,
        priority: Option<Priority>,
        suggestion: Option<Suggestion>,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
    },
    Chat {
        suggestion: Suggestion,
        summary: String,
    },
    Feedback {
        ready: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<SentimentResult>,
        priority_review: bool,
    },
}

/// Execute a command without printing anything
pub fn execute(
    command: &Commands,
    thresholds: &AnalysisThresholds,
    quiet: bool,
) -> Result<Outcome> {
    let outcome = match command {
        Commands::Categorize { title, description } => {
            let (category, keyword) = categorize_explained(title, description);
            Outcome::Category { category, keyword }
        }
        Commands::Priority { title, description } => {
            let (priority, keyword) = estimate_priority_explained(title, description);
            Outcome::Priority { priority, keyword }
        }
        Commands::Sentiment { text } => Outcome::Sentiment(analyze_sentiment(text)),
        Commands::Report {
            title,
            description,
            category,
            priority,
        } => {
            let mut draft = ReportDraft::new(title.as_str(), description.as_str());
            if let Some(c) = category {
                draft.category = Some(parse_category(c)?);
            }
            if let Some(p) = priority {
                draft.priority = Some(parse_priority(p)?);
            }
            let suggestion = draft.apply_suggestion(thresholds);
            Outcome::Report {
                ready: suggestion.is_some(),
                category: draft.category,
                priority: draft.priority,
                summary: suggestion.filter(|_| !quiet).map(|s| s.summary()),
                suggestion,
            }
        }
        Commands::Chat { title, description } => {
            let suggestion = Suggestion::for_text(title, description);
            Outcome::Chat {
                suggestion,
                summary: suggestion.summary(),
            }
        }
        Commands::Feedback { text } => {
            let draft = FeedbackDraft::new(text.as_str());
            let result = draft.analyze(thresholds);
            Outcome::Feedback {
                ready: result.is_some(),
                result,
                priority_review: draft.needs_priority_review(thresholds),
            }
        }
    };
    Ok(outcome)
}

fn parse_category(value: &str) -> Result<Category> {
    Category::from_str(value)
        .ok_or_else(|| TriageError::InvalidInput(format!("unknown category '{}'", value)))
}

fn parse_priority(value: &str) -> Result<Priority> {
    Priority::from_str(value)
        .ok_or_else(|| TriageError::InvalidInput(format!("unknown priority '{}'", value)))
}

/// Render an outcome in the requested format
pub fn render(
    outcome: &Outcome,
    format: OutputFormat,
    thresholds: &AnalysisThresholds,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let text = match outcome {
        Outcome::Category { category, .. } => category.to_string(),
        Outcome::Priority { priority, .. } => priority.to_string(),
        Outcome::Sentiment(result) => format_sentiment(result),
        Outcome::Report { ready: false, .. } => format!(
            "Report too short for analysis (title needs {} characters, description {})",
            thresholds.min_title_len, thresholds.min_description_len
        ),
        Outcome::Report {
            category,
            priority,
            summary,
            ..
        } => {
            let mut lines = vec![
                format!("category: {}", category.unwrap_or_default()),
                format!("priority: {}", priority.unwrap_or_default()),
            ];
            if let Some(summary) = summary {
                lines.push(summary.clone());
            }
            lines.join("\n")
        }
        Outcome::Chat { summary, .. } => summary.clone(),
        Outcome::Feedback {
            result: Some(result),
            priority_review,
            ..
        } => {
            if *priority_review {
                format!("{}\npriority review: flagged", format_sentiment(result))
            } else {
                format_sentiment(result)
            }
        }
        Outcome::Feedback { result: None, .. } => format!(
            "Feedback too short for analysis (needs {} characters)",
            thresholds.min_feedback_len
        ),
    };
    Ok(text)
}

fn format_sentiment(result: &SentimentResult) -> String {
    format!("{} ({:.2})", result.sentiment, result.score)
}
