//! CLI interface for resume-intel

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-intel")]
#[command(version)]
#[command(about = "Deterministic resume and job description analysis")]
#[command(
    long_about = "Score a resume against a job posting, evaluate interview answers and build an ATS-friendly resume reference with recruiter-style review"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Rendering options shared by every report-producing command
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format: console, json, markdown (defaults to the configured format)
    #[arg(short, long, value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    /// Save output to file; without a path a timestamped name is chosen
    #[arg(short, long, num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Show every bullet row and the evidence checklist
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Score an interview answer, optionally prefixed with "Question: ... Answer: ..."
    Evaluate {
        /// Answer text
        #[arg(short, long)]
        answer: String,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Build a resume reference with review, evidence and benchmark panels
    Reference {
        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Existing resume or profile text to pull links from (PDF, TXT, MD)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Portfolio description used for the consistency check (TXT, MD)
        #[arg(long)]
        portfolio: Option<PathBuf>,

        /// Interview story converted into experience bullets
        #[arg(long)]
        story: Option<String>,

        #[arg(long)]
        linkedin: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        portfolio_url: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Detect LinkedIn, GitHub and portfolio links in a resume
    Links {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::parse_from([
            "resume-intel", "analyze", "--resume", "cv.pdf", "--job", "job.txt", "--output", "json",
        ]);

        match cli.command {
            Commands::Analyze { resume, job, report } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(job, PathBuf::from("job.txt"));
                assert_eq!(report.output, Some(OutputFormat::Json));
                assert!(report.save.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_save_path_is_optional() {
        let cli = Cli::parse_from(["resume-intel", "links", "--resume", "cv.md", "--save"]);
        match cli.command {
            Commands::Links { report, .. } => assert_eq!(report.save, Some(None)),
            _ => panic!("expected links command"),
        }

        let cli = Cli::parse_from(["resume-intel", "links", "--resume", "cv.md", "--save", "out/links.json"]);
        match cli.command {
            Commands::Links { report, .. } => {
                assert_eq!(report.save, Some(Some(PathBuf::from("out/links.json"))))
            }
            _ => panic!("expected links command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume.PDF"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), TEXT_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("job"), TEXT_EXTENSIONS).is_err());
    }
}
