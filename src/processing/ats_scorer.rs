//! ATS readiness scoring: a deterministic 0-100 completeness and structure
//! score for a structured resume, with a per-category breakdown and
//! improvement suggestions

use crate::processing::resume::ResumeRecord;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONTACT_INFO_MAX: u8 = 20;
pub const SECTIONS_MAX: u8 = 55;
pub const LENGTH_MAX: u8 = 15;
pub const FORMATTING_MAX: u8 = 10;
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum trimmed length for a bullet to count as detailed
const DETAILED_BULLET_LEN: usize = 20;

pub struct AtsScorer {
    email_regex: Regex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub contact_info: u8,
    pub sections: u8,
    pub length: u8,
    pub formatting: u8,
    /// Reserved for a caller-side job-match combination; always zero here
    pub keywords: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Excellent,
    Good,
    Fair,
    NeedsWork,
    GettingStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Green,
    Yellow,
    Orange,
    Red,
}

/// One display row of the breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownCategory {
    pub label: &'static str,
    pub value: u8,
    pub max: u8,
    pub tip: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryBand {
    Strong,
    Moderate,
    Weak,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .expect("Invalid email regex");

        Self { email_regex }
    }

    /// Score a resume. Never fails; empty fields simply earn nothing.
    pub fn calculate_score(&self, resume: &ResumeRecord) -> ScoreResult {
        let breakdown = ScoreBreakdown {
            contact_info: self.contact_score(resume),
            sections: Self::sections_score(resume),
            length: Self::length_score(resume),
            formatting: Self::formatting_score(resume),
            keywords: 0,
        };

        let overall = breakdown.total().min(100) as u8;
        debug!("ATS score {} ({:?})", overall, breakdown);

        ScoreResult { overall, breakdown }
    }

    /// Up to five improvement suggestions, highest priority first
    pub fn suggestions(&self, resume: &ResumeRecord, breakdown: &ScoreBreakdown) -> Vec<String> {
        let mut suggestions: Vec<&str> = Vec::new();
        let info = &resume.personal_info;

        if breakdown.contact_info < CONTACT_INFO_MAX {
            if is_blank(&info.full_name) {
                suggestions.push("Add your full name");
            }
            if is_blank(&info.email) {
                suggestions.push("Add your email address");
            }
            if is_blank(&info.phone) {
                suggestions.push("Add your phone number");
            }
            if is_blank(&info.linkedin_url) && is_blank(&info.portfolio_url) {
                suggestions.push("Add a LinkedIn profile or portfolio URL");
            }
        }

        if is_blank(&resume.summary.text) {
            suggestions.push("Add a professional summary (2-3 sentences)");
        } else if resume.summary.text.chars().count() < 100 {
            suggestions.push("Expand your professional summary");
        }

        if resume.experience.is_empty() {
            suggestions.push("Add work experience");
        } else {
            let incomplete = resume
                .experience
                .iter()
                .any(|exp| exp.job_title.is_empty() || exp.company.is_empty() || exp.start_date.is_empty());
            if incomplete {
                suggestions.push("Complete all experience entries with job title, company, and dates");
            }

            let missing_detail = resume
                .experience
                .iter()
                .any(|exp| !exp.bullets.iter().any(|b| is_detailed_bullet(b)));
            if missing_detail {
                suggestions.push("Add detailed bullet points to describe your achievements");
            }
        }

        if resume.education.is_empty() {
            suggestions.push("Add your education");
        }

        let skill_count = resume.skills.items.len();
        if skill_count == 0 {
            suggestions.push("Add your skills");
        } else if skill_count < 5 {
            suggestions.push("Add more skills (aim for 8-12)");
        }

        suggestions
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(str::to_string)
            .collect()
    }

    fn contact_score(&self, resume: &ResumeRecord) -> u8 {
        let info = &resume.personal_info;
        let mut score = 0;

        if !is_blank(&info.full_name) {
            score += 6;
        }

        if !is_blank(&info.email) {
            score += 4;
            if self.email_regex.is_match(&info.email) {
                score += 2;
            }
        }

        if !is_blank(&info.phone) {
            score += 4;
        }

        if !is_blank(&info.location) {
            score += 2;
        }

        if !is_blank(&info.linkedin_url) || !is_blank(&info.portfolio_url) {
            score += 2;
        }

        score.min(CONTACT_INFO_MAX)
    }

    fn sections_score(resume: &ResumeRecord) -> u8 {
        let mut score = 0;

        let qualified_experience = resume
            .experience
            .iter()
            .filter(|exp| !exp.job_title.is_empty() && !exp.company.is_empty() && !exp.start_date.is_empty())
            .count();
        score += match qualified_experience {
            0 if resume.experience.is_empty() => 0,
            0 => 5,
            1 => 15,
            _ => 25,
        };

        let qualified_education = resume
            .education
            .iter()
            .filter(|edu| !edu.degree.is_empty() && !edu.institution.is_empty())
            .count();
        score += match qualified_education {
            0 if resume.education.is_empty() => 0,
            0 => 5,
            _ => 15,
        };

        let summary_len = trimmed_len(&resume.summary.text);
        score += if summary_len >= 50 {
            10
        } else if summary_len > 0 {
            5
        } else {
            0
        };

        if !resume.certifications.is_empty() {
            score += 3;
        }

        if !resume.projects.is_empty() {
            score += 2;
        }

        score.min(SECTIONS_MAX)
    }

    fn length_score(resume: &ResumeRecord) -> u8 {
        let mut score = 0;

        let summary_len = trimmed_len(&resume.summary.text);
        score += if (100..=500).contains(&summary_len) {
            5
        } else if summary_len >= 50 {
            3
        } else if summary_len > 0 {
            1
        } else {
            0
        };

        // Raw bullet length, whitespace included
        let bullet_chars: usize = resume
            .experience
            .iter()
            .flat_map(|exp| exp.bullets.iter())
            .map(|b| b.chars().count())
            .sum();
        score += if bullet_chars >= 500 {
            5
        } else if bullet_chars >= 200 {
            3
        } else if bullet_chars > 0 {
            1
        } else {
            0
        };

        score += match resume.skills.items.len() {
            0 => 0,
            1 => 1,
            2..=4 => 2,
            5..=7 => 3,
            _ => 5,
        };

        score.min(LENGTH_MAX)
    }

    fn formatting_score(resume: &ResumeRecord) -> u8 {
        let mut score = 0;

        if !resume.experience.is_empty() || !resume.education.is_empty() {
            score += 4;
        }

        let has_detailed_bullets = resume
            .experience
            .iter()
            .any(|exp| exp.bullets.iter().any(|b| is_detailed_bullet(b)));
        if has_detailed_bullets {
            score += 3;
        }

        if resume.skills.items.len() >= 3 {
            score += 3;
        }

        score.min(FORMATTING_MAX)
    }
}

impl ScoreBreakdown {
    /// Sum of the four scored categories; `keywords` is not included
    pub fn total(&self) -> u32 {
        self.contact_info as u32 + self.sections as u32 + self.length as u32 + self.formatting as u32
    }

    pub fn categories(&self) -> Vec<BreakdownCategory> {
        vec![
            BreakdownCategory {
                label: "Contact Info",
                value: self.contact_info,
                max: CONTACT_INFO_MAX,
                tip: "Name, email, phone, location",
            },
            BreakdownCategory {
                label: "Content Sections",
                value: self.sections,
                max: SECTIONS_MAX,
                tip: "Experience, education, summary",
            },
            BreakdownCategory {
                label: "Content Depth",
                value: self.length,
                max: LENGTH_MAX,
                tip: "Detail in summaries and bullets",
            },
            BreakdownCategory {
                label: "Structure",
                value: self.formatting,
                max: FORMATTING_MAX,
                tip: "Completeness and organization",
            },
        ]
    }
}

impl BreakdownCategory {
    pub fn percentage(&self) -> u8 {
        if self.max == 0 {
            return 0;
        }
        (self.value as f64 / self.max as f64 * 100.0).round() as u8
    }

    pub fn band(&self) -> CategoryBand {
        match self.percentage() {
            70.. => CategoryBand::Strong,
            40..=69 => CategoryBand::Moderate,
            _ => CategoryBand::Weak,
        }
    }
}

impl ScoreResult {
    pub fn label(&self) -> ScoreLabel {
        ScoreLabel::from_score(self.overall)
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall)
    }
}

impl ScoreLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreLabel::Excellent,
            60..=79 => ScoreLabel::Good,
            40..=59 => ScoreLabel::Fair,
            20..=39 => ScoreLabel::NeedsWork,
            _ => ScoreLabel::GettingStarted,
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreLabel::Excellent => "Excellent",
            ScoreLabel::Good => "Good",
            ScoreLabel::Fair => "Fair",
            ScoreLabel::NeedsWork => "Needs Work",
            ScoreLabel::GettingStarted => "Getting Started",
        };
        write!(f, "{}", label)
    }
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Green,
            60..=79 => ScoreBand::Yellow,
            40..=59 => ScoreBand::Orange,
            _ => ScoreBand::Red,
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

fn is_detailed_bullet(bullet: &str) -> bool {
    trimmed_len(bullet) > DETAILED_BULLET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resume::{CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry};

    fn experience(title: &str, company: &str, start: &str, bullets: &[&str]) -> ExperienceEntry {
        ExperienceEntry {
            job_title: title.to_string(),
            company: company.to_string(),
            start_date: start.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    fn skills(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("skill-{}", i)).collect()
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let scorer = AtsScorer::new();
        let result = scorer.calculate_score(&ResumeRecord::default());

        assert_eq!(result.overall, 0);
        assert_eq!(result.breakdown, ScoreBreakdown::default());
        assert_eq!(result.label(), ScoreLabel::GettingStarted);
    }

    #[test]
    fn test_full_contact_info() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@x.com".to_string();
        resume.personal_info.phone = "555-1111".to_string();
        resume.personal_info.location = "NYC".to_string();
        resume.personal_info.linkedin_url = "linkedin.com/in/jane".to_string();

        let result = scorer.calculate_score(&resume);

        assert_eq!(result.breakdown.contact_info, 20);
        assert_eq!(result.overall, 20);
    }

    #[test]
    fn test_malformed_email_loses_bonus() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.personal_info.email = "jane.at.example".to_string();

        assert_eq!(scorer.calculate_score(&resume).breakdown.contact_info, 4);

        resume.personal_info.email = " jane@x.com".to_string();
        assert_eq!(scorer.calculate_score(&resume).breakdown.contact_info, 4);
    }

    #[test]
    fn test_whitespace_only_contact_fields_are_blank() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "   ".to_string();
        resume.personal_info.portfolio_url = "\t".to_string();

        assert_eq!(scorer.calculate_score(&resume).breakdown.contact_info, 0);
    }

    #[test]
    fn test_experience_tiers() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();

        resume.experience = vec![experience("Dev", "", "2020-01", &[])];
        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 5);

        resume.experience = vec![experience("Dev", "Acme", "2020-01", &[])];
        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 15);

        resume.experience.push(experience("Lead", "Initech", "2022-03", &[]));
        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 25);
    }

    #[test]
    fn test_education_and_bonuses() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.education.push(EducationEntry {
            degree: "BSc".to_string(),
            ..Default::default()
        });
        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 5);

        resume.education[0].institution = "MIT".to_string();
        resume.certifications.push(CertificationEntry::default());
        resume.certifications.push(CertificationEntry::default());
        resume.projects.push(ProjectEntry::default());

        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 15 + 3 + 2);
    }

    #[test]
    fn test_single_space_fields_count_as_filled() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();

        resume.experience = vec![experience(" ", " ", " ", &[])];
        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 15);

        resume.education.push(EducationEntry {
            degree: " ".to_string(),
            institution: " ".to_string(),
            ..Default::default()
        });
        let result = scorer.calculate_score(&resume);
        assert_eq!(result.breakdown.sections, 15 + 15);

        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@x.com".to_string();
        resume.personal_info.phone = "555-1111".to_string();
        resume.personal_info.location = "NYC".to_string();
        resume.personal_info.linkedin_url = "linkedin.com/in/jane".to_string();
        let result = scorer.calculate_score(&resume);
        let suggestions = scorer.suggestions(&resume, &result.breakdown);
        assert_eq!(
            suggestions,
            vec![
                "Add a professional summary (2-3 sentences)",
                "Add detailed bullet points to describe your achievements",
                "Add your skills",
            ]
        );
    }

    #[test]
    fn test_expand_summary_uses_raw_length() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        let expand = "Expand your professional summary".to_string();

        // 90 visible characters padded to 105
        resume.summary.text = format!("{}{}", "x".repeat(90), " ".repeat(15));
        let result = scorer.calculate_score(&resume);
        assert!(!scorer.suggestions(&resume, &result.breakdown).contains(&expand));

        resume.summary.text = "x".repeat(90);
        let result = scorer.calculate_score(&resume);
        assert!(scorer.suggestions(&resume, &result.breakdown).contains(&expand));
    }

    #[test]
    fn test_sections_capped() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.experience = vec![
            experience("Dev", "Acme", "2020-01", &[]),
            experience("Lead", "Initech", "2022-03", &[]),
        ];
        resume.education.push(EducationEntry {
            degree: "BSc".to_string(),
            institution: "MIT".to_string(),
            ..Default::default()
        });
        resume.summary.text = "x".repeat(60);
        resume.certifications.push(CertificationEntry::default());
        resume.projects.push(ProjectEntry::default());

        // 25 + 15 + 10 + 3 + 2 = 55
        assert_eq!(scorer.calculate_score(&resume).breakdown.sections, 55);
    }

    #[test]
    fn test_length_score_summary_bands() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();

        resume.summary.text = "short".to_string();
        assert_eq!(scorer.calculate_score(&resume).breakdown.length, 1);

        resume.summary.text = "y".repeat(60);
        assert_eq!(scorer.calculate_score(&resume).breakdown.length, 3);

        resume.summary.text = format!("   {}   ", "y".repeat(150));
        assert_eq!(scorer.calculate_score(&resume).breakdown.length, 5);

        resume.summary.text = "y".repeat(501);
        assert_eq!(scorer.calculate_score(&resume).breakdown.length, 3);
    }

    #[test]
    fn test_bullet_length_counts_raw_text() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        let padded = format!("{}{}", " ".repeat(150), "z".repeat(50));
        resume.experience = vec![experience("", "", "", &[padded.as_str()])];

        // 200 raw characters reach the middle tier even though most are spaces
        assert_eq!(scorer.calculate_score(&resume).breakdown.length, 3);
    }

    #[test]
    fn test_skill_count_tiers() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();

        for (count, expected_length) in [(1, 1), (2, 2), (4, 2), (5, 3), (7, 3), (8, 5), (20, 5)] {
            resume.skills.items = skills(count);
            assert_eq!(
                scorer.calculate_score(&resume).breakdown.length,
                expected_length,
                "skill count {}",
                count
            );
        }
    }

    #[test]
    fn test_formatting_score() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.experience = vec![experience("", "", "", &["too short", "  still short   "])];
        assert_eq!(scorer.calculate_score(&resume).breakdown.formatting, 4);

        resume.experience[0]
            .bullets
            .push("Reduced p99 latency by 40% across services".to_string());
        resume.skills.items = skills(3);

        assert_eq!(scorer.calculate_score(&resume).breakdown.formatting, 10);
    }

    #[test]
    fn test_keywords_field_stays_zero() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.skills.items = skills(10);
        assert_eq!(scorer.calculate_score(&resume).breakdown.keywords, 0);
    }

    #[test]
    fn test_suggestions_for_empty_resume() {
        let scorer = AtsScorer::new();
        let resume = ResumeRecord::default();
        let result = scorer.calculate_score(&resume);

        let suggestions = scorer.suggestions(&resume, &result.breakdown);

        assert_eq!(
            suggestions,
            vec![
                "Add your full name",
                "Add your email address",
                "Add your phone number",
                "Add a LinkedIn profile or portfolio URL",
                "Add a professional summary (2-3 sentences)",
            ]
        );
    }

    #[test]
    fn test_suggestions_after_contact_complete() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@x.com".to_string();
        resume.personal_info.phone = "555-1111".to_string();
        resume.personal_info.location = "NYC".to_string();
        resume.personal_info.portfolio_url = "jane.dev".to_string();
        resume.summary.text = "Backend engineer.".to_string();
        resume.experience = vec![experience("Dev", "", "2020-01", &["Did work"])];
        resume.skills.items = skills(3);

        let result = scorer.calculate_score(&resume);
        let suggestions = scorer.suggestions(&resume, &result.breakdown);

        assert_eq!(
            suggestions,
            vec![
                "Expand your professional summary",
                "Complete all experience entries with job title, company, and dates",
                "Add detailed bullet points to describe your achievements",
                "Add your education",
                "Add more skills (aim for 8-12)",
            ]
        );
    }

    #[test]
    fn test_no_suggestions_for_complete_resume() {
        let scorer = AtsScorer::new();
        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@x.com".to_string();
        resume.personal_info.phone = "555-1111".to_string();
        resume.personal_info.location = "NYC".to_string();
        resume.personal_info.linkedin_url = "linkedin.com/in/jane".to_string();
        resume.summary.text = "s".repeat(120);
        resume.experience = vec![experience(
            "Dev",
            "Acme",
            "2020-01",
            &["Migrated billing to an event-driven design"],
        )];
        resume.education.push(EducationEntry::default());
        resume.skills.items = skills(8);

        let result = scorer.calculate_score(&resume);

        assert!(scorer.suggestions(&resume, &result.breakdown).is_empty());
    }

    #[test]
    fn test_labels_and_bands() {
        assert_eq!(ScoreLabel::from_score(100), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(80), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(79), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(40), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(20), ScoreLabel::NeedsWork);
        assert_eq!(ScoreLabel::from_score(19), ScoreLabel::GettingStarted);
        assert_eq!(ScoreLabel::NeedsWork.to_string(), "Needs Work");

        assert_eq!(ScoreBand::from_score(80), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Yellow);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Orange);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Red);
    }

    #[test]
    fn test_breakdown_categories() {
        let breakdown = ScoreBreakdown {
            contact_info: 14,
            sections: 20,
            length: 0,
            formatting: 10,
            keywords: 0,
        };

        let categories = breakdown.categories();

        assert_eq!(categories.len(), 4);
        assert_eq!(categories.iter().map(|c| c.max as u32).sum::<u32>(), 100);
        assert_eq!(categories[0].percentage(), 70);
        assert_eq!(categories[0].band(), CategoryBand::Strong);
        assert_eq!(categories[1].percentage(), 36);
        assert_eq!(categories[1].band(), CategoryBand::Weak);
        assert_eq!(categories[2].band(), CategoryBand::Weak);
        assert_eq!(categories[3].percentage(), 100);
    }
}
