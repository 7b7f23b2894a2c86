//! Fixed vocabularies used by keyword extraction: known technical terms and
//! stop words

use crate::error::{Result, ResumeAtsError};
use aho_corasick::AhoCorasick;
use log::debug;
use std::collections::HashSet;

/// Immutable lexicon owned by a keyword matcher
pub struct Lexicon {
    tech_terms: Vec<String>,
    tech_set: HashSet<String>,
    stop_words: HashSet<String>,
    phrase_matcher: AhoCorasick,
}

impl Lexicon {
    /// Create a lexicon from the built-in tables
    pub fn new() -> Result<Self> {
        Self::with_extensions(Vec::new(), Vec::new())
    }

    /// Create a lexicon with additional technical terms and stop words.
    ///
    /// Extra terms are lower-cased and appended after the built-in terms, so
    /// the built-in iteration order is kept for the phrase pass.
    pub fn with_extensions(extra_tech_terms: Vec<String>, extra_stop_words: Vec<String>) -> Result<Self> {
        let mut tech_terms: Vec<String> = Vec::new();
        let mut tech_set = HashSet::new();

        let builtin = TECH_TERMS.iter().map(|s| s.to_string());
        let extra = extra_tech_terms.into_iter().map(|s| s.trim().to_lowercase());
        for term in builtin.chain(extra) {
            if !term.is_empty() && tech_set.insert(term.clone()) {
                tech_terms.push(term);
            }
        }

        let mut stop_words: HashSet<String> = STOP_WORDS.iter().map(|s| s.to_string()).collect();
        stop_words.extend(
            extra_stop_words
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );

        // Overlapping search needs the default (standard) match kind
        let phrase_matcher = AhoCorasick::new(&tech_terms)
            .map_err(|e| ResumeAtsError::Lexicon(format!("Failed to build phrase matcher: {}", e)))?;

        debug!(
            "Lexicon built with {} technical terms and {} stop words",
            tech_terms.len(),
            stop_words.len()
        );

        Ok(Self {
            tech_terms,
            tech_set,
            stop_words,
            phrase_matcher,
        })
    }

    /// Technical terms occurring anywhere in `lowercased` as literal
    /// substrings, in lexicon order
    pub fn phrases_in(&self, lowercased: &str) -> Vec<&str> {
        let mut present = vec![false; self.tech_terms.len()];
        for mat in self.phrase_matcher.find_overlapping_iter(lowercased) {
            present[mat.pattern().as_usize()] = true;
        }

        self.tech_terms
            .iter()
            .zip(present)
            .filter(|(_, found)| *found)
            .map(|(term, _)| term.as_str())
            .collect()
    }

    pub fn is_tech_term(&self, word: &str) -> bool {
        self.tech_set.contains(word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn tech_terms(&self) -> &[String] {
        &self.tech_terms
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

/// Known technical terms, in phrase-pass order
const TECH_TERMS: &[&str] = &[
    "javascript", "typescript", "python", "java", "c++", "c#", "go", "rust", "ruby",
    "php", "swift", "kotlin", "scala", "react", "angular", "vue", "node", "nodejs",
    "express", "django", "flask", "spring", "rails", "laravel", "nextjs", "next.js",
    "aws", "azure", "gcp", "docker", "kubernetes", "k8s", "terraform", "ansible",
    "jenkins", "github", "gitlab", "ci/cd", "devops", "agile", "scrum", "jira",
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "graphql",
    "rest", "api", "microservices", "serverless", "lambda", "cloud", "linux",
    "git", "html", "css", "sass", "tailwind", "bootstrap", "webpack", "vite",
    "testing", "jest", "mocha", "cypress", "selenium", "machine learning", "ml",
    "ai", "deep learning", "tensorflow", "pytorch", "data science", "analytics",
    "figma", "sketch", "adobe", "ui/ux", "design", "frontend", "backend", "fullstack",
];

/// English function words and resume filler
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
    "shall", "can", "need", "dare", "ought", "used", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "whom",
    "if", "then", "else", "when", "where", "why", "how", "all", "each", "every",
    "both", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "just", "also", "now",
    "about", "after", "before", "above", "below", "between", "into", "through",
    "during", "under", "again", "further", "once", "here", "there", "any", "our",
    "your", "their", "its", "my", "his", "her", "up", "down", "out", "off", "over",
    "work", "working", "experience", "team", "teams", "years", "year", "ability",
    "required", "requirements", "looking", "seeking", "job", "position", "role",
    "including", "based", "well", "good", "great", "excellent", "strong", "proven",
    "skills", "skill", "knowledge", "understanding", "familiar", "using",
];
