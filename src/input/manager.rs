//! Input manager for resumes and job descriptions

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::resume::ResumeRecord;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    markdown: MarkdownExtractor,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            markdown: MarkdownExtractor::new(),
        }
    }

    /// Load a structured resume from a `.json` or `.toml` file
    pub async fn load_resume(&self, path: &Path) -> Result<ResumeRecord> {
        Self::ensure_exists(path)?;

        let file_type = Self::detect_file_type(path)?;
        if !file_type.is_structured() {
            return Err(ResumeAtsError::UnsupportedFormat(format!(
                "Resume must be a .json or .toml file: {}",
                path.display()
            )));
        }

        info!("Loading resume: {}", path.display());
        let content = fs::read_to_string(path).await?;

        let resume = match file_type {
            FileType::Json => ResumeRecord::from_json(&content).map_err(|e| {
                ResumeAtsError::ResumeParsing(format!("Invalid resume JSON in '{}': {}", path.display(), e))
            })?,
            _ => ResumeRecord::from_toml(&content).map_err(|e| {
                ResumeAtsError::ResumeParsing(format!("Invalid resume TOML in '{}': {}", path.display(), e))
            })?,
        };

        if resume.is_empty() {
            warn!("Resume {} has no content", path.display());
        }
        debug!(
            "Resume loaded: {} experience, {} education, {} skills",
            resume.experience.len(),
            resume.education.len(),
            resume.skills.items.len()
        );

        Ok(resume)
    }

    /// Extract plain text from a job description document
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            debug!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        Self::ensure_exists(path)?;

        let text = match Self::detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                self.markdown.extract(path).await?
            }
            FileType::Json | FileType::Toml | FileType::Unknown => {
                return Err(ResumeAtsError::UnsupportedFormat(format!(
                    "Unsupported job description format: {}",
                    path.display()
                )));
            }
        };

        if text.trim().is_empty() {
            warn!("No text found in {}", path.display());
        }

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(ResumeAtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )))
        }
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ResumeAtsError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
