// src/config/env.rs
// Environment-based configuration - all TRIAGE_* variables are read here

use tracing::{Level, warn};

use super::file::{OutputFormat, TriageConfig};

/// Settings taken from environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    /// TRIAGE_OUTPUT - text or json
    pub output: Option<OutputFormat>,
    /// TRIAGE_LOG - tracing level (error, warn, info, debug, trace)
    pub log_level: Option<Level>,
    /// TRIAGE_QUIET - suppress the chat-style summary line
    pub quiet: bool,
    /// Variables that were set but could not be parsed, as (name, value)
    pub rejected: Vec<(&'static str, String)>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    ///
    /// Nothing is logged here since the subscriber depends on the result;
    /// call [`EnvConfig::log_rejected`] once logging is up.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        let output = parse_var(&lookup, &mut rejected, "TRIAGE_OUTPUT", OutputFormat::from_str);
        let log_level = parse_var(&lookup, &mut rejected, "TRIAGE_LOG", |v| {
            v.trim().parse::<Level>().ok()
        });
        let quiet = parse_var(&lookup, &mut rejected, "TRIAGE_QUIET", parse_bool).unwrap_or(false);

        Self {
            output,
            log_level,
            quiet,
            rejected,
        }
    }

    /// Warn about every variable that was ignored
    pub fn log_rejected(&self) {
        for (name, value) in &self.rejected {
            warn!(%name, %value, "Ignoring invalid {}", name);
        }
    }

    /// Level for the subscriber; `verbose` raises it to at least INFO
    pub fn resolve_log_level(&self, verbose: bool) -> Level {
        match (self.log_level, verbose) {
            (Some(level), true) => level.max(Level::INFO),
            (None, true) => Level::INFO,
            (Some(level), false) => level,
            (None, false) => Level::WARN,
        }
    }

    /// Output format with env taking precedence over the file
    pub fn resolve_output(&self, file: &TriageConfig) -> OutputFormat {
        self.output.unwrap_or_else(|| file.output_format())
    }
}

/// Parse one variable; blank counts as unset, unparseable is recorded
fn parse_var<F, T>(
    lookup: &F,
    rejected: &mut Vec<(&'static str, String)>,
    name: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).filter(|v| !v.trim().is_empty())?;
    let parsed = parse(&value);
    if parsed.is_none() {
        rejected.push((name, value));
    }
    parsed
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
