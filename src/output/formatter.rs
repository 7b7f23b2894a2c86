//! Output formatters: colored console, JSON and Markdown renderings of an
//! [`AtsReport`]

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::ats_scorer::{CategoryBand, ScoreBand};
use crate::processing::keyword_matcher::MatchBand;
use colored::{Color, Colorize};
use std::path::Path;

const BAR_WIDTH: usize = 20;
const KEYWORD_PREVIEW: usize = 10;

/// Trait for formatting ATS reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
}

/// Console formatter with colors and progress bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, label: &str, band: ScoreBand) -> String {
        let badge = label.to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(score_band_color(band)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_bar(&self, value: u8, max: u8, color: Color) -> String {
        let filled = if max == 0 {
            0
        } else {
            (value as usize * BAR_WIDTH / max as usize).min(BAR_WIDTH)
        };
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        self.colorize(&bar, color)
    }

    fn format_score(&self, summary: &ScoreSummary, output: &mut String) {
        output.push_str(&self.format_header("ATS Score", 2));
        output.push_str(&format!(
            "Overall: {}/100 {}\n",
            self.colorize(&summary.overall.to_string(), score_band_color(summary.band)),
            self.format_score_badge(&summary.label, summary.band)
        ));
        output.push_str(&format!("{}\n", self.format_bar(summary.overall, 100, score_band_color(summary.band))));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for category in &summary.categories {
            output.push_str(&format!(
                "{:<18} {:>2}/{:<2} {} {:>3}%\n",
                category.label,
                category.value,
                category.max,
                self.format_bar(category.value, category.max, category_band_color(category.band)),
                category.percentage
            ));
            if self.detailed {
                output.push_str(&format!("{}\n", self.colorize(&format!("  {}", category.tip), Color::BrightBlack)));
            }
        }

        if !summary.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 3));
            for (i, suggestion) in summary.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, self.colorize(suggestion, Color::Yellow)));
            }
        }
    }

    fn format_job_match(&self, job_match: &JobMatchSummary, output: &mut String) {
        let color = match_band_color(job_match.band);
        output.push_str(&self.format_header("Job Match", 2));
        output.push_str(&format!(
            "Match: {} ({} of {} keywords)\n",
            self.colorize(&format!("{}%", job_match.match_percentage), color),
            job_match.found_keywords.len(),
            job_match.total_keywords()
        ));
        output.push_str(&format!("{}\n", self.format_bar(job_match.match_percentage, 100, color)));
        output.push_str(&format!("{}\n", self.colorize(&job_match.verdict, Color::Cyan)));

        let limit = if self.detailed { usize::MAX } else { KEYWORD_PREVIEW };

        if !job_match.found_keywords.is_empty() {
            output.push_str(&self.format_header("✅ Found Keywords", 3));
            output.push_str(&format!("  {}\n", self.keyword_list(&job_match.found_keywords, limit, Color::Green)));
        }

        if !job_match.missing_keywords.is_empty() {
            output.push_str(&self.format_header("❌ Missing Keywords", 3));
            output.push_str(&format!("  {}\n", self.keyword_list(&job_match.missing_keywords, limit, Color::Red)));
        }

        if !job_match.suggestions.is_empty() {
            output.push_str(&self.format_header("💡 Keyword Suggestions", 3));
            for suggestion in &job_match.suggestions {
                output.push_str(&format!("  • {}\n", suggestion));
            }
        }
    }

    fn keyword_list(&self, keywords: &[String], limit: usize, color: Color) -> String {
        let mut shown: Vec<String> = keywords
            .iter()
            .take(limit)
            .map(|keyword| self.colorize(keyword, color))
            .collect();
        if keywords.len() > limit {
            shown.push(format!("(+{} more)", keywords.len() - limit));
        }
        shown.join(", ")
    }

    fn format_keyword_table(&self, report: &AtsReport, output: &mut String) {
        output.push_str(&self.format_header("Job Description Keywords", 2));
        if report.job_keywords.is_empty() {
            output.push_str("No keywords found\n");
            return;
        }
        for (i, keyword) in report.job_keywords.iter().enumerate() {
            let marker = if keyword.technical { "tech" } else { "" };
            output.push_str(&format!(
                "{:>3}. {:<24} {:>3}x {}\n",
                i + 1,
                keyword.keyword,
                keyword.occurrences,
                self.colorize(marker, Color::Cyan)
            ));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ATS REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        if let Some(summary) = &report.score_summary {
            self.format_score(summary, &mut output);
        }

        if let Some(job_match) = &report.job_match {
            self.format_job_match(job_match, &mut output);
        }

        // Keyword-only reports always list the table; match reports only in detail
        if report.score_summary.is_none() || (self.detailed && !report.job_keywords.is_empty()) {
            self.format_keyword_table(report, &mut output);
        }

        output.push_str(&format!(
            "\n{} Generated by resume-ats v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.tool_version
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Green => "🟢",
            ScoreBand::Yellow => "🟡",
            ScoreBand::Orange => "🟠",
            ScoreBand::Red => "🔴",
        }
    }

    fn file_name(path: &str) -> String {
        Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Resume ATS Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            let mut files = Vec::new();
            if let Some(resume_file) = &report.metadata.resume_file {
                files.push(format!("**Resume:** `{}`", Self::file_name(resume_file)));
            }
            if let Some(job_file) = &report.metadata.job_file {
                files.push(format!("**Job:** `{}`", Self::file_name(job_file)));
            }
            if !files.is_empty() {
                output.push_str(&format!("{}\n", files.join(" | ")));
            }
            output.push('\n');
        }

        if let Some(summary) = &report.score_summary {
            output.push_str("## ATS Score\n\n");
            output.push_str(&format!(
                "**Overall:** {}/100 {} {}\n\n",
                summary.overall,
                Self::markdown_score_badge(summary.band),
                summary.label
            ));

            output.push_str("| Category | Score | Percent | Covers |\n");
            output.push_str("|----------|-------|---------|--------|\n");
            for category in &summary.categories {
                output.push_str(&format!(
                    "| {} | {}/{} | {}% | {} |\n",
                    category.label, category.value, category.max, category.percentage, category.tip
                ));
            }
            output.push('\n');

            if !summary.suggestions.is_empty() {
                output.push_str("### Suggestions\n\n");
                for (i, suggestion) in summary.suggestions.iter().enumerate() {
                    output.push_str(&format!("{}. {}\n", i + 1, suggestion));
                }
                output.push('\n');
            }
        }

        if let Some(job_match) = &report.job_match {
            output.push_str("## Job Match\n\n");
            output.push_str(&format!(
                "**Match:** {}% ({} of {} keywords)\n\n",
                job_match.match_percentage,
                job_match.found_keywords.len(),
                job_match.total_keywords()
            ));
            output.push_str(&format!("> {}\n\n", job_match.verdict));

            if !job_match.found_keywords.is_empty() {
                output.push_str(&format!("**✅ Found:** `{}`\n\n", job_match.found_keywords.join("`, `")));
            }
            if !job_match.missing_keywords.is_empty() {
                output.push_str(&format!("**❌ Missing:** `{}`\n\n", job_match.missing_keywords.join("`, `")));
            }
            if !job_match.suggestions.is_empty() {
                output.push_str("### 💡 Keyword Suggestions\n\n");
                for suggestion in &job_match.suggestions {
                    output.push_str(&format!("- {}\n", suggestion));
                }
                output.push('\n');
            }
        }

        if !report.job_keywords.is_empty() {
            output.push_str("## Job Description Keywords\n\n");
            output.push_str("| # | Keyword | Occurrences | Technical |\n");
            output.push_str("|---|---------|-------------|-----------|\n");
            for (i, keyword) in report.job_keywords.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | `{}` | {} | {} |\n",
                    i + 1,
                    keyword.keyword,
                    keyword.occurrences,
                    if keyword.technical { "yes" } else { "" }
                ));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by resume-ats v{}*\n", report.metadata.tool_version));
        }

        Ok(output)
    }
}

fn score_band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Green => Color::Green,
        ScoreBand::Yellow => Color::Yellow,
        ScoreBand::Orange => Color::BrightYellow,
        ScoreBand::Red => Color::Red,
    }
}

fn category_band_color(band: CategoryBand) -> Color {
    match band {
        CategoryBand::Strong => Color::Green,
        CategoryBand::Moderate => Color::Yellow,
        CategoryBand::Weak => Color::Red,
    }
}

fn match_band_color(band: MatchBand) -> Color {
    match band {
        MatchBand::Great => Color::Green,
        MatchBand::Good => Color::Yellow,
        MatchBand::Fair => Color::BrightYellow,
        MatchBand::Low => Color::Red,
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AtsReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}
