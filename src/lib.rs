//! Resume ATS library: readiness scoring and job keyword matching for
//! structured resumes

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeAtsError};
pub use processing::analyzer::{AnalysisEngine, AnalysisResult};
pub use processing::ats_scorer::{AtsScorer, ScoreBreakdown, ScoreResult};
pub use processing::keyword_matcher::{JobMatchResult, KeywordMatcher};
pub use processing::resume::ResumeRecord;
