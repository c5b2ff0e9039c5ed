//! Resume and job profiles extracted from raw text

use crate::config::AnalysisConfig;
use crate::processing::role_classifier::{RoleClassifier, RoleFamily};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub skills: Vec<String>,
    pub role_title: String,
    pub role_family: RoleFamily,
}

impl ResumeProfile {
    pub fn new(skills: Vec<String>) -> Self {
        Self {
            skills: dedup_skills(&skills),
        }
    }
}

impl JobProfile {
    pub fn new(skills: Vec<String>, role_title: String, role_family: RoleFamily) -> Self {
        Self {
            skills: dedup_skills(&skills),
            role_title,
            role_family,
        }
    }
}

/// Drop case-insensitive duplicates, keeping the first spelling and order
pub fn dedup_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| seen.insert(s.to_lowercase()))
        .cloned()
        .collect()
}

/// Builds profiles from raw resume and job text
pub struct ProfileExtractor<'a> {
    text_processor: &'a TextProcessor,
    role_classifier: &'a RoleClassifier,
    job_keyword_limit: usize,
    resume_keyword_limit: usize,
}

impl<'a> ProfileExtractor<'a> {
    pub fn new(
        text_processor: &'a TextProcessor,
        role_classifier: &'a RoleClassifier,
        config: &AnalysisConfig,
    ) -> Self {
        Self {
            text_processor,
            role_classifier,
            job_keyword_limit: config.job_keyword_limit,
            resume_keyword_limit: config.resume_keyword_limit,
        }
    }

    /// Taxonomy skills named in the resume followed by its most frequent terms
    pub fn analyze_resume(&self, resume_text: &str) -> ResumeProfile {
        let mut skills = self.text_processor.lexicon().taxonomy_hits(resume_text);
        skills.extend(
            self.text_processor
                .extract_general_keywords(resume_text, self.resume_keyword_limit),
        );

        let profile = ResumeProfile::new(skills);
        debug!("resume profile: {} skills", profile.skills.len());
        profile
    }

    pub fn analyze_job(&self, job_text: &str) -> JobProfile {
        let skills = self
            .text_processor
            .extract_role_keywords(job_text, self.job_keyword_limit);
        let role_title = self.role_classifier.extract_role_title(job_text);
        let role_family = self.role_classifier.detect_role_family(job_text, &role_title);

        debug!(
            "job profile: title={:?} family={} skills={}",
            role_title,
            role_family,
            skills.len()
        );
        JobProfile::new(skills, role_title, role_family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::lexicon::Lexicon;
    use std::sync::Arc;

    #[test]
    fn test_dedup_skills_case_insensitive() {
        let skills = vec!["SQL".to_string(), "Python".to_string(), "sql".to_string()];
        assert_eq!(dedup_skills(&skills), vec!["SQL".to_string(), "Python".to_string()]);
    }

    #[test]
    fn test_profiles_from_text() {
        let processor = TextProcessor::new(Arc::new(Lexicon::new().unwrap()));
        let classifier = RoleClassifier::new();
        let extractor = ProfileExtractor::new(&processor, &classifier, &AnalysisConfig::default());

        let job = extractor.analyze_job("Looking for a Data Analyst with SQL and Python skills");
        assert_eq!(job.role_title, "Data Analyst");
        assert_eq!(job.role_family, RoleFamily::Data);
        assert_eq!(job.skills, vec!["Python", "SQL", "Analyst", "Data"]);

        let resume = extractor.analyze_resume("Python developer. Python and sql reporting.");
        assert_eq!(resume.skills[0], "Python");
        assert_eq!(resume.skills[1], "SQL");
        let lowered: Vec<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();
        let unique: HashSet<&String> = lowered.iter().collect();
        assert_eq!(unique.len(), lowered.len());
    }

    #[test]
    fn test_empty_job_has_no_skills() {
        let processor = TextProcessor::new(Arc::new(Lexicon::new().unwrap()));
        let classifier = RoleClassifier::new();
        let extractor = ProfileExtractor::new(&processor, &classifier, &AnalysisConfig::default());

        let job = extractor.analyze_job("");
        assert!(job.skills.is_empty());
        assert_eq!(job.role_family, RoleFamily::General);
    }
}
