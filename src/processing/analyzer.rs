//! Analysis engine running ATS scoring and, when a job description is given,
//! keyword matching over one resume

use crate::config::Config;
use crate::error::Result;
use crate::processing::ats_scorer::{AtsScorer, ScoreResult};
use crate::processing::keyword_matcher::{JobMatchResult, KeywordMatcher};
use crate::processing::resume::ResumeRecord;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Coordinates the scorer and the keyword matcher
pub struct AnalysisEngine {
    scorer: AtsScorer,
    matcher: KeywordMatcher,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: ScoreResult,
    pub suggestions: Vec<String>,
    /// Present only when a job description was supplied
    pub job_match: Option<JobMatchResult>,
    /// Ranked keywords with occurrence counts in the job description
    pub job_keywords: Vec<RankedKeyword>,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeyword {
    pub keyword: String,
    pub occurrences: usize,
    pub technical: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEngineStats {
    pub tech_terms: usize,
    pub stop_words: usize,
}

impl AnalysisEngine {
    /// Build an engine whose lexicon honours the configured extensions
    pub fn new(config: &Config) -> Result<Self> {
        let lexicon = config.build_lexicon()?;
        Ok(Self::with_matcher(KeywordMatcher::with_lexicon(lexicon)))
    }

    pub fn with_matcher(matcher: KeywordMatcher) -> Self {
        Self {
            scorer: AtsScorer::new(),
            matcher,
        }
    }

    pub fn analyze(&self, resume: &ResumeRecord, job_text: Option<&str>) -> AnalysisResult {
        let start_time = Instant::now();

        let duplicates = resume.duplicate_ids();
        if !duplicates.is_empty() {
            warn!("Resume has duplicate entry ids: {}", duplicates.join(", "));
        }

        let score = self.scorer.calculate_score(resume);
        let suggestions = self.scorer.suggestions(resume, &score.breakdown);

        let (job_match, job_keywords) = match job_text {
            Some(text) => {
                let job_keywords = self.rank_keywords(text);
                let keywords: Vec<String> = job_keywords.iter().map(|k| k.keyword.clone()).collect();
                (Some(self.matcher.match_keywords(resume, &keywords)), job_keywords)
            }
            None => (None, Vec::new()),
        };

        let processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Analysis finished in {}ms: ATS score {}{}",
            processing_time_ms,
            score.overall,
            job_match
                .as_ref()
                .map(|m| format!(", job match {}%", m.match_percentage))
                .unwrap_or_default()
        );

        AnalysisResult {
            score,
            suggestions,
            job_match,
            job_keywords,
            processing_time_ms,
        }
    }

    /// Keywords of a job description without a resume to compare against
    pub fn rank_keywords(&self, job_text: &str) -> Vec<RankedKeyword> {
        self.matcher
            .ranked_keywords(job_text)
            .into_iter()
            .map(|(keyword, occurrences)| RankedKeyword {
                technical: self.matcher.lexicon().is_tech_term(&keyword),
                keyword,
                occurrences,
            })
            .collect()
    }

    pub fn get_stats(&self) -> AnalysisEngineStats {
        let lexicon = self.matcher.lexicon();
        AnalysisEngineStats {
            tech_terms: lexicon.tech_terms().len(),
            stop_words: lexicon.stop_word_count(),
        }
    }
}
