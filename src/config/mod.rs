// src/config/mod.rs
// Configuration: ~/.campus-triage/config.toml overlaid with environment

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::{OutputFormat, TriageConfig};

use std::path::PathBuf;

/// Directory holding config.toml and .env (~/.campus-triage)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".campus-triage")
}
