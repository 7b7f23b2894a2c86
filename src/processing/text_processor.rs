//! Text normalization, tokenization and occurrence counting for keyword
//! extraction

use crate::processing::lexicon::Lexicon;
use crate::processing::resume::ResumeRecord;
use std::collections::HashSet;

pub struct TextProcessor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TextProcessor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Replace every character outside `[a-z0-9\s\-/+#.]` with a space.
    ///
    /// Expects already lower-cased input; upper-case letters are not kept.
    pub fn clean_text(&self, lowercased: &str) -> String {
        lowercased
            .chars()
            .map(|c| if Self::is_token_char(c) { c } else { ' ' })
            .collect()
    }

    /// Split cleaned text into candidate tokens, dropping short tokens,
    /// stop words and pure numbers. Duplicates are kept.
    pub fn tokenize(&self, lowercased: &str) -> Vec<String> {
        self.clean_text(lowercased)
            .split_whitespace()
            .filter(|word| word.chars().count() >= 2)
            .filter(|word| !self.lexicon.is_stop_word(word))
            .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .collect()
    }

    /// Phrase pass followed by token pass: lexicon terms present in the
    /// text, then first-seen tokens not already collected
    pub fn candidates(&self, lowercased: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for phrase in self.lexicon.phrases_in(lowercased) {
            if seen.insert(phrase.to_string()) {
                candidates.push(phrase.to_string());
            }
        }

        for token in self.tokenize(lowercased) {
            if seen.insert(token.clone()) {
                candidates.push(token);
            }
        }

        candidates
    }

    fn is_token_char(c: char) -> bool {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c.is_whitespace()
            || matches!(c, '-' | '/' | '+' | '#' | '.')
    }
}

/// Non-overlapping literal occurrences of `needle` in `haystack`.
///
/// Counts matches inside longer words too ("java" in "javascript").
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Assemble all matchable resume text, space-separated, lower-cased
pub fn resume_text(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.push(&resume.personal_info.full_name);
    parts.push(&resume.summary.text);

    for exp in &resume.experience {
        parts.push(&exp.job_title);
        parts.push(&exp.company);
        parts.extend(exp.bullets.iter().map(String::as_str));
    }

    for edu in &resume.education {
        parts.push(&edu.degree);
        parts.push(&edu.institution);
        parts.push(&edu.achievements);
    }

    parts.extend(resume.skills.items.iter().map(String::as_str));

    for cert in &resume.certifications {
        parts.push(&cert.name);
        parts.push(&cert.issuer);
    }

    for project in &resume.projects {
        parts.push(&project.name);
        parts.push(&project.description);
    }

    parts.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resume::{ExperienceEntry, ProjectEntry};

    #[test]
    fn test_clean_text() {
        let lexicon = Lexicon::new().unwrap();
        let processor = TextProcessor::new(&lexicon);

        assert_eq!(processor.clean_text("c++, c# & node.js!"), "c++  c#   node.js ");
        assert_eq!(processor.clean_text("ci/cd (k8s)"), "ci/cd  k8s ");
    }

    #[test]
    fn test_tokenization() {
        let lexicon = Lexicon::new().unwrap();
        let processor = TextProcessor::new(&lexicon);

        let tokens = processor.tokenize("we need 5 years of rust and go experience in 2024");

        assert_eq!(tokens, vec!["rust", "go"]);
    }

    #[test]
    fn test_non_ascii_letters_split_tokens() {
        let lexicon = Lexicon::new().unwrap();
        let processor = TextProcessor::new(&lexicon);

        let tokens = processor.tokenize("café résumé");

        assert_eq!(tokens, vec!["caf", "sum"]);
    }

    #[test]
    fn test_candidates_phrases_first() {
        let lexicon = Lexicon::new().unwrap();
        let processor = TextProcessor::new(&lexicon);

        let candidates = processor.candidates("kafka and python, plus python tooling");

        assert_eq!(candidates, vec!["python", "kafka", "plus", "tooling"]);
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("java and javascript", "java"), 2);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("c++ c++", "c++"), 2);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_resume_text_order() {
        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "Ada".to_string();
        resume.summary.text = "Summary".to_string();
        resume.experience.push(ExperienceEntry {
            job_title: "Dev".to_string(),
            company: "Acme".to_string(),
            bullets: vec!["Built X".to_string()],
            ..Default::default()
        });
        resume.skills.items = vec!["Rust".to_string()];
        resume.projects.push(ProjectEntry {
            name: "Tool".to_string(),
            description: "CLI".to_string(),
            link: "https://example.com".to_string(),
            ..Default::default()
        });

        assert_eq!(resume_text(&resume), "ada summary dev acme built x rust tool cli");
    }
}
