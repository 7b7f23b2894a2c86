//! resume-ats: ATS readiness scoring and job keyword matching for resumes

use clap::Parser;
use log::{error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction, JOB_EXTENSIONS, RESUME_EXTENSIONS};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::InputManager;
use resume_ats::output::{save_report_to_file, suggest_filename, AtsReport, ReportGenerator};
use resume_ats::processing::analyzer::AnalysisEngine;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Err(e) = run_command(cli.command, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_path: &Path) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            output,
            detailed,
            save,
        } => {
            let config = Config::load_from(config_path)?;
            let format = resolve_format(output.as_deref(), &config)?;
            validate(&resume, RESUME_EXTENSIONS, "Resume file")?;

            let input_manager = InputManager::new();
            let record = input_manager.load_resume(&resume).await?;

            let engine = AnalysisEngine::new(&config)?;
            let analysis = engine.analyze(&record, None);
            info!("ATS score: {} ({})", analysis.score.overall, analysis.score.label());

            let report = AtsReport::from_analysis(&analysis, Some(&path_string(&resume)), None);
            let save = save.map(|path| path.unwrap_or_else(|| default_save_path(&format, &resume)));
            emit(&report, &format, detailed, save.as_deref(), &config)?;
        }

        Commands::Match {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            let config = Config::load_from(config_path)?;
            let format = resolve_format(output.as_deref(), &config)?;
            validate(&resume, RESUME_EXTENSIONS, "Resume file")?;
            validate(&job, JOB_EXTENSIONS, "Job description file")?;

            let mut input_manager = InputManager::new();
            let record = input_manager.load_resume(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let engine = AnalysisEngine::new(&config)?;
            let analysis = engine.analyze(&record, Some(&job_text));

            let report = AtsReport::from_analysis(
                &analysis,
                Some(&path_string(&resume)),
                Some(&path_string(&job)),
            );
            let save = save.map(|path| path.unwrap_or_else(|| default_save_path(&format, &resume)));
            emit(&report, &format, detailed, save.as_deref(), &config)?;
        }

        Commands::Keywords { job, output } => {
            let config = Config::load_from(config_path)?;
            let format = resolve_format(output.as_deref(), &config)?;
            validate(&job, JOB_EXTENSIONS, "Job description file")?;

            let start_time = Instant::now();
            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;

            let engine = AnalysisEngine::new(&config)?;
            let keywords = engine.rank_keywords(&job_text);
            info!("Extracted {} keywords", keywords.len());

            let report = AtsReport::keywords_only(
                keywords,
                Some(&path_string(&job)),
                start_time.elapsed().as_millis() as u64,
            );
            emit(&report, &format, false, None, &config)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let config = Config::load_from(config_path)?;
                let engine = AnalysisEngine::new(&config)?;
                let stats = engine.get_stats();

                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Output:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
                println!("  Pretty JSON: {}", config.output.pretty_json);
                println!("\nLexicon:");
                println!("  Technical terms: {}", stats.tech_terms);
                println!("  Stop words: {}", stats.stop_words);
                if !config.lexicon.extra_tech_terms.is_empty() {
                    println!("  Extra technical terms: {}", config.lexicon.extra_tech_terms.join(", "));
                }
                if !config.lexicon.extra_stop_words.is_empty() {
                    println!("  Extra stop words: {}", config.lexicon.extra_stop_words.join(", "));
                }
            }

            // Overwrites without parsing the existing file
            Some(ConfigAction::Reset) => {
                Config::reset_to(config_path)?;
                println!("✅ Configuration reset to defaults");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = Config::load_from(config_path)?;
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeAtsError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn validate(path: &Path, allowed: &[&str], what: &str) -> Result<()> {
    cli::validate_file_extension(path, allowed)
        .map_err(|e| ResumeAtsError::InvalidInput(format!("{}: {}", what, e)))
}

fn emit(
    report: &AtsReport,
    format: &OutputFormat,
    detailed: bool,
    save: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed || config.output.detailed,
        config.output.pretty_json,
        true,
    );
    let content = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            save_report_to_file(&content, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Timestamped report name in the working directory, derived from the resume file name
fn default_save_path(format: &OutputFormat, resume: &Path) -> PathBuf {
    PathBuf::from(suggest_filename(format, &path_string(resume), true))
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
