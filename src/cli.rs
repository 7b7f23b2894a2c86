//! CLI interface for the resume ATS checker

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(version)]
#[command(about = "ATS readiness scoring and job keyword matching for structured resumes")]
#[command(long_about = "Score a structured resume (JSON or TOML) for ATS readiness, and compare it against a job description by keyword coverage")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume for ATS readiness
    Score {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file; without a path, a timestamped name is derived from the resume
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },

    /// Score a resume and match it against a job description
    Match {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file; without a path, a timestamped name is derived from the resume
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },

    /// List the keywords extracted from a job description
    Keywords {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "output.format", "lexicon.extra_tech_terms")
        key: String,

        /// Configuration value; lists are comma-separated
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    format.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
