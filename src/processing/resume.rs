//! Structured resume record, as exported by the resume editor
//!
//! Every text field uses the empty string as its "unset" value, and every
//! collection may be empty. Missing fields in the serialized form fall back
//! to those defaults, so a partially filled export still deserializes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: Summary,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`, or empty while `is_current_role` is set
    pub end_date: String,
    pub is_current_role: bool,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
}

impl ResumeRecord {
    /// Parse the editor's JSON export
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Parse a hand-written TOML resume
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Duplicate `id`s within any one collection
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut duplicates = Vec::new();
        collect_duplicates(self.experience.iter().map(|e| e.id.as_str()), &mut duplicates);
        collect_duplicates(self.education.iter().map(|e| e.id.as_str()), &mut duplicates);
        collect_duplicates(self.certifications.iter().map(|c| c.id.as_str()), &mut duplicates);
        collect_duplicates(self.projects.iter().map(|p| p.id.as_str()), &mut duplicates);
        duplicates
    }
}

fn collect_duplicates<'a>(ids: impl Iterator<Item = &'a str>, out: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    for id in ids.filter(|id| !id.is_empty()) {
        if !seen.insert(id) && !out.iter().any(|d| d == id) {
            out.push(id.to_string());
        }
    }
}
