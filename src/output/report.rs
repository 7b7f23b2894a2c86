//! Report structures assembled from an analysis, ready for formatting

use crate::processing::analyzer::{AnalysisResult, RankedKeyword};
use crate::processing::ats_scorer::{CategoryBand, ScoreBand, ScoreBreakdown, ScoreResult};
use crate::processing::keyword_matcher::{JobMatchResult, MatchBand};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one run of the tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    /// ATS readiness; absent for keyword-only reports
    pub score_summary: Option<ScoreSummary>,

    /// Job-description comparison; present only when a job was supplied
    pub job_match: Option<JobMatchSummary>,

    /// Ranked job-description keywords with occurrence counts
    pub job_keywords: Vec<RankedKeyword>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub overall: u8,
    pub label: String,
    pub band: ScoreBand,
    pub breakdown: ScoreBreakdown,
    pub categories: Vec<CategoryRow>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub label: String,
    pub value: u8,
    pub max: u8,
    pub percentage: u8,
    pub band: CategoryBand,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchSummary {
    pub match_percentage: u8,
    pub band: MatchBand,
    pub verdict: String,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub resume_file: Option<String>,
    pub job_file: Option<String>,
    pub processing_time_ms: u64,
}

impl AtsReport {
    pub fn from_analysis(analysis: &AnalysisResult, resume_file: Option<&str>, job_file: Option<&str>) -> Self {
        Self {
            score_summary: Some(ScoreSummary::new(&analysis.score, &analysis.suggestions)),
            job_match: analysis.job_match.as_ref().map(JobMatchSummary::from),
            job_keywords: analysis.job_keywords.clone(),
            metadata: ReportMetadata::new(resume_file, job_file, analysis.processing_time_ms),
        }
    }

    /// Report listing job-description keywords only
    pub fn keywords_only(job_keywords: Vec<RankedKeyword>, job_file: Option<&str>, processing_time_ms: u64) -> Self {
        Self {
            score_summary: None,
            job_match: None,
            job_keywords,
            metadata: ReportMetadata::new(None, job_file, processing_time_ms),
        }
    }
}

impl ScoreSummary {
    pub fn new(score: &ScoreResult, suggestions: &[String]) -> Self {
        let categories = score
            .breakdown
            .categories()
            .into_iter()
            .map(|category| CategoryRow {
                percentage: category.percentage(),
                band: category.band(),
                label: category.label.to_string(),
                value: category.value,
                max: category.max,
                tip: category.tip.to_string(),
            })
            .collect();

        Self {
            overall: score.overall,
            label: score.label().to_string(),
            band: score.band(),
            breakdown: score.breakdown,
            categories,
            suggestions: suggestions.to_vec(),
        }
    }
}

impl From<&JobMatchResult> for JobMatchSummary {
    fn from(result: &JobMatchResult) -> Self {
        let band = result.band();
        Self {
            match_percentage: result.match_percentage,
            band,
            verdict: band.verdict().to_string(),
            found_keywords: result.found_keywords.clone(),
            missing_keywords: result.missing_keywords.clone(),
            suggestions: result.suggestions.clone(),
        }
    }
}

impl JobMatchSummary {
    pub fn total_keywords(&self) -> usize {
        self.found_keywords.len() + self.missing_keywords.len()
    }
}

impl ReportMetadata {
    fn new(resume_file: Option<&str>, job_file: Option<&str>, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.map(str::to_string),
            job_file: job_file.map(str::to_string),
            processing_time_ms,
        }
    }
}
