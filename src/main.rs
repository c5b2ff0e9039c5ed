//! resume-intel: deterministic resume and job description analysis

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_intel::cli::{self, Cli, Commands, ConfigAction, ReportArgs};
use resume_intel::config::Config;
use resume_intel::content::reference::ProfileLinks;
use resume_intel::input::InputManager;
use resume_intel::output::formatter::{default_report_path, save_report_to_file, ReportGenerator};
use resume_intel::output::report::{Report, ReportBody};
use resume_intel::processing::analyzer::{IntelligenceRequest, ResumeAnalyzer};
use std::path::Path;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze { resume, job, report } => {
            check_extension(&resume, cli::RESUME_EXTENSIONS, "Resume file")?;
            check_extension(&job, cli::TEXT_EXTENSIONS, "Job description file")?;

            let started = Instant::now();
            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;
            info!(
                "Extracted {} resume characters and {} job characters",
                resume_text.len(),
                job_text.len()
            );

            let analyzer = build_analyzer(&config)?;
            let body = ReportBody::Match(analyzer.analyze_match(&resume_text, &job_text));
            let sources = vec![display_path(&resume), display_path(&job)];
            emit(Report::new(body, sources, elapsed_ms(started)), &report, &config)?;
        }

        Commands::Evaluate { answer, report } => {
            let started = Instant::now();
            let analyzer = build_analyzer(&config)?;
            let body = ReportBody::Answer(analyzer.evaluate_answer(&answer));
            emit(
                Report::new(body, Vec::new(), elapsed_ms(started)),
                &report,
                &config,
            )?;
        }

        Commands::Reference {
            job,
            profile,
            portfolio,
            story,
            linkedin,
            github,
            portfolio_url,
            report,
        } => {
            check_extension(&job, cli::TEXT_EXTENSIONS, "Job description file")?;
            if let Some(profile) = &profile {
                check_extension(profile, cli::RESUME_EXTENSIONS, "Profile file")?;
            }
            if let Some(portfolio) = &portfolio {
                check_extension(portfolio, cli::TEXT_EXTENSIONS, "Portfolio file")?;
            }

            let started = Instant::now();
            let mut input_manager = InputManager::new();
            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;
            let profile_text = input_manager
                .extract_optional(profile.as_deref())
                .await
                .context("Failed to read profile")?;
            let portfolio_text = input_manager
                .extract_optional(portfolio.as_deref())
                .await
                .context("Failed to read portfolio")?;

            let request = IntelligenceRequest {
                job_text,
                profile_text,
                portfolio_text,
                interview_story: story.unwrap_or_default(),
                links: ProfileLinks {
                    linkedin: linkedin.unwrap_or_default(),
                    github: github.unwrap_or_default(),
                    portfolio: portfolio_url.unwrap_or_default(),
                },
            };

            let analyzer = build_analyzer(&config)?;
            let body = ReportBody::Intelligence(Box::new(analyzer.build_resume_intelligence(&request)));
            let sources: Vec<String> = std::iter::once(&job)
                .chain(profile.as_ref())
                .chain(portfolio.as_ref())
                .map(|p| display_path(p))
                .collect();
            emit(Report::new(body, sources, elapsed_ms(started)), &report, &config)?;
        }

        Commands::Links { resume, report } => {
            check_extension(&resume, cli::RESUME_EXTENSIONS, "Resume file")?;

            let started = Instant::now();
            let resume_text = InputManager::new()
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;

            let analyzer = build_analyzer(&config)?;
            let body = ReportBody::Links(analyzer.extract_profile_links(&resume_text));
            emit(
                Report::new(body, vec![display_path(&resume)], elapsed_ms(started)),
                &report,
                &config,
            )?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(config_path)
                    .context("Failed to write default configuration")?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn build_analyzer(config: &Config) -> Result<ResumeAnalyzer> {
    ResumeAnalyzer::new(&config.analysis).context("Failed to build skill lexicon")
}

fn check_extension(path: &Path, allowed: &[&str], label: &str) -> Result<()> {
    cli::validate_file_extension(path, allowed).map_err(|e| anyhow::anyhow!("{}: {}", label, e))
}

/// Render the report and print it, or write it when `--save` is given
fn emit(report: Report, args: &ReportArgs, config: &Config) -> Result<()> {
    let format = args.output.unwrap_or(config.output.format);
    let use_colors = config.output.color_output && args.save.is_none();
    let generator = ReportGenerator::with_options(use_colors, args.detailed || config.output.detailed, true, true);

    let rendered = generator
        .generate_report(&report, format)
        .context("Failed to render report")?;

    let save_path = args
        .save
        .as_ref()
        .map(|path| path.clone().unwrap_or_else(|| default_report_path(&report, format)));

    match save_path {
        Some(path) => {
            save_report_to_file(&rendered, &path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
