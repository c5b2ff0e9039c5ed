//! Configuration management for resume-intel

use crate::error::{Result, ResumeIntelError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of keywords kept for a job profile and for generated content
    pub job_keyword_limit: usize,
    /// Number of job keywords the recruiter review and gap plan look at
    pub review_keyword_limit: usize,
    /// Number of frequency-ranked keywords kept for a resume profile
    pub resume_keyword_limit: usize,
    /// Skills appended after the built-in taxonomy
    #[serde(default)]
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            job_keyword_limit: 14,
            review_keyword_limit: 12,
            resume_keyword_limit: 40,
            extra_skills: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load `config_path`, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeIntelError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeIntelError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-intel")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;
        if analysis.job_keyword_limit == 0 || analysis.review_keyword_limit == 0 {
            return Err(ResumeIntelError::Configuration(
                "keyword limits must be greater than zero".to_string(),
            ));
        }
        if analysis.extra_skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ResumeIntelError::Configuration(
                "extra_skills must not contain blank entries".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.analysis.job_keyword_limit, 14);
        assert_eq!(config.analysis.review_keyword_limit, 12);
        assert!(config.analysis.extra_skills.is_empty());
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_toml_roundtrip_keeps_extra_skills() {
        let mut config = Config::default();
        config.analysis.extra_skills = vec!["Rust".to_string()];

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.analysis.extra_skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::default();
        config.analysis.job_keyword_limit = 0;
        assert!(config.validate().is_err());
    }
}
