//! Job-description keyword extraction and resume matching
//!
//! Matching is purely lexical: candidates are ranked by how often they occur
//! as substrings of the job text, and a keyword counts as found when it
//! occurs anywhere in the resume text.

use crate::error::Result;
use crate::processing::lexicon::Lexicon;
use crate::processing::resume::ResumeRecord;
use crate::processing::text_processor::{count_occurrences, resume_text, TextProcessor};
use log::{debug, warn};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

pub const MAX_KEYWORDS: usize = 30;
pub const MAX_MATCH_SUGGESTIONS: usize = 5;

/// Keyword matcher over a fixed lexicon
pub struct KeywordMatcher {
    lexicon: Lexicon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    pub match_percentage: u8,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Great,
    Good,
    Fair,
    Low,
}

impl KeywordMatcher {
    /// Create a keyword matcher with the built-in lexicon
    pub fn new() -> Result<Self> {
        Ok(Self::with_lexicon(Lexicon::new()?))
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Up to 30 distinct keywords, most frequent first; ties keep the order
    /// in which candidates were first collected
    pub fn extract_keywords(&self, job_text: &str) -> Vec<String> {
        self.ranked_keywords(job_text)
            .into_iter()
            .map(|(keyword, _)| keyword)
            .collect()
    }

    /// Like [`extract_keywords`](Self::extract_keywords), keeping each
    /// keyword's occurrence count
    pub fn ranked_keywords(&self, job_text: &str) -> Vec<(String, usize)> {
        if job_text.trim().is_empty() {
            return Vec::new();
        }

        let normalized = job_text.to_lowercase();
        let processor = TextProcessor::new(&self.lexicon);

        let mut ranked: Vec<(String, usize)> = processor
            .candidates(&normalized)
            .into_iter()
            .map(|candidate| {
                let count = count_occurrences(&normalized, &candidate);
                (candidate, count)
            })
            .collect();

        // Stable: equal counts stay in candidate order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(MAX_KEYWORDS);

        debug!("Extracted {} keywords from job description", ranked.len());
        ranked
    }

    /// Compare a resume against a job description
    pub fn match_job(&self, resume: &ResumeRecord, job_text: &str) -> JobMatchResult {
        if job_text.trim().is_empty() {
            return JobMatchResult::default();
        }

        self.match_keywords(resume, &self.extract_keywords(job_text))
    }

    /// Partition already extracted job keywords by presence in the resume,
    /// keeping their order
    pub fn match_keywords(&self, resume: &ResumeRecord, keywords: &[String]) -> JobMatchResult {
        let text = resume_text(resume);

        let (found_keywords, missing_keywords): (Vec<String>, Vec<String>) = keywords
            .iter()
            .cloned()
            .partition(|keyword| Self::contains_keyword(&text, keyword));

        let match_percentage = if keywords.is_empty() {
            0
        } else {
            (found_keywords.len() as f64 / keywords.len() as f64 * 100.0).round() as u8
        };

        let suggestions = missing_keywords
            .iter()
            .take(MAX_MATCH_SUGGESTIONS)
            .map(|keyword| {
                if self.lexicon.is_tech_term(keyword) {
                    format!("Add \"{}\" to your skills section", keyword)
                } else {
                    format!("Consider mentioning \"{}\" in your experience or summary", keyword)
                }
            })
            .collect();

        debug!(
            "Job match {}%: {} found, {} missing",
            match_percentage,
            found_keywords.len(),
            missing_keywords.len()
        );

        JobMatchResult {
            match_percentage,
            found_keywords,
            missing_keywords,
            suggestions,
        }
    }

    /// Case-insensitive literal search for `keyword` in the resume text
    fn contains_keyword(haystack: &str, keyword: &str) -> bool {
        match RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern.is_match(haystack),
            Err(e) => {
                warn!("Falling back to plain search for '{}': {}", keyword, e);
                haystack.contains(&keyword.to_lowercase())
            }
        }
    }
}

impl JobMatchResult {
    pub fn total_keywords(&self) -> usize {
        self.found_keywords.len() + self.missing_keywords.len()
    }

    pub fn band(&self) -> MatchBand {
        MatchBand::from_percentage(self.match_percentage)
    }
}

impl MatchBand {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            70.. => MatchBand::Great,
            50..=69 => MatchBand::Good,
            30..=49 => MatchBand::Fair,
            _ => MatchBand::Low,
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            MatchBand::Great => "Great match! Your resume aligns well with this job.",
            MatchBand::Good => "Good match. Consider adding a few more relevant keywords.",
            MatchBand::Fair => "Fair match. Review the missing keywords below.",
            MatchBand::Low => "Low match. You may need to tailor your resume for this role.",
        }
    }
}
