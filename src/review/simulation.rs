//! Three simulated evaluators scoring the same resume reference

use crate::content::reference::{format_resume_reference, ResumeReference};
use crate::processing::quality::BulletQualityReport;
use log::debug;
use serde::{Deserialize, Serialize};

const INTERVIEW_READY_THRESHOLD: u32 = 75;
const COMPLETE_SECTIONS_BONUS: u32 = 100;
const INCOMPLETE_SECTIONS_BONUS: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "ATS Parser")]
    AtsParser,
    #[serde(rename = "Recruiter")]
    Recruiter,
    #[serde(rename = "Hiring Manager")]
    HiringManager,
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Persona::AtsParser => write!(f, "ATS Parser"),
            Persona::Recruiter => write!(f, "Recruiter"),
            Persona::HiringManager => write!(f, "Hiring Manager"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Interview Ready")]
    InterviewReady,
    #[serde(rename = "Needs Strengthening")]
    NeedsStrengthening,
}

impl Verdict {
    pub fn from_overall(overall: u32) -> Self {
        if overall >= INTERVIEW_READY_THRESHOLD {
            Verdict::InterviewReady
        } else {
            Verdict::NeedsStrengthening
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InterviewReady => write!(f, "Interview Ready"),
            Verdict::NeedsStrengthening => write!(f, "Needs Strengthening"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaScore {
    pub persona: Persona,
    pub score: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterSimulation {
    pub overall_score: u32,
    pub verdict: Verdict,
    /// Always ATS Parser, Recruiter, Hiring Manager in that order
    pub personas: Vec<PersonaScore>,
}

impl RecruiterSimulation {
    pub fn persona_score(&self, persona: Persona) -> u32 {
        self.personas
            .iter()
            .find(|p| p.persona == persona)
            .map(|p| p.score)
            .unwrap_or(0)
    }
}

/// Percentage of `job_keywords` found in the rendered resume, rounded down
pub fn keyword_coverage(resume_text: &str, job_keywords: &[String]) -> u32 {
    let lowered = resume_text.to_lowercase();
    let hits = job_keywords
        .iter()
        .filter(|k| lowered.contains(&k.to_lowercase()))
        .count();
    (100 * hits / job_keywords.len().max(1)) as u32
}

/// Score the reference as an ATS parser, a recruiter and a hiring manager.
/// `job_keywords` are the posting's top review keywords.
pub fn simulate_recruiter_review(
    reference: &ResumeReference,
    job_keywords: &[String],
    bullet_quality: &BulletQualityReport,
) -> RecruiterSimulation {
    let coverage = keyword_coverage(&format_resume_reference(reference), job_keywords);
    let bullet_average = f64::from(bullet_quality.average_score);
    let section_bonus = if reference.has_complete_sections() {
        COMPLETE_SECTIONS_BONUS
    } else {
        INCOMPLETE_SECTIONS_BONUS
    };
    let depth = (35 * reference.projects.len() + 30 * reference.experience.len()).min(100) as f64;

    let ats = (0.6 * f64::from(coverage) + 0.4 * f64::from(section_bonus)) as u32;
    let recruiter = (0.55 * bullet_average + 0.45 * f64::from(coverage)) as u32;
    let hiring_manager = (0.6 * bullet_average + 0.4 * depth) as u32;

    let overall_score = (ats + recruiter + hiring_manager) / 3;
    let verdict = Verdict::from_overall(overall_score);
    debug!(
        "recruiter simulation: coverage={} ats={} recruiter={} hiring_manager={} overall={}",
        coverage, ats, recruiter, hiring_manager, overall_score
    );

    RecruiterSimulation {
        overall_score,
        verdict,
        personas: vec![
            PersonaScore {
                persona: Persona::AtsParser,
                score: ats,
                reason: format!("Keyword coverage: {}% across target JD terms.", coverage),
            },
            PersonaScore {
                persona: Persona::Recruiter,
                score: recruiter,
                reason: "Assesses readability, relevance, and impact language.".to_string(),
            },
            PersonaScore {
                persona: Persona::HiringManager,
                score: hiring_manager,
                reason: "Assesses project depth, execution, and technical signal.".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reference::{ProfileLinks, ReferenceGenerator};
    use crate::processing::lexicon::Lexicon;
    use std::sync::Arc;

    fn reference() -> ResumeReference {
        ReferenceGenerator::new(Arc::new(Lexicon::new().unwrap()), 14).generate(
            "Looking for a Data Analyst with SQL and Python skills",
            "",
            &ProfileLinks::default(),
        )
    }

    fn quality(average_score: u32) -> BulletQualityReport {
        BulletQualityReport {
            average_score,
            bullets: Vec::new(),
        }
    }

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_persona_formulas() {
        let reference = reference();
        let job_keywords = keywords(&["Python", "SQL", "Analyst", "Kubernetes"]);
        let result = simulate_recruiter_review(&reference, &job_keywords, &quality(50));

        // coverage 75, all sections present, 2 projects + 1 experience entry
        assert_eq!(result.persona_score(Persona::AtsParser), 85);
        assert_eq!(result.persona_score(Persona::Recruiter), 61);
        assert_eq!(result.persona_score(Persona::HiringManager), 70);
        assert_eq!(result.overall_score, (85 + 61 + 70) / 3);
        assert_eq!(result.verdict, Verdict::NeedsStrengthening);
        assert_eq!(result.personas[0].reason, "Keyword coverage: 75% across target JD terms.");
    }

    #[test]
    fn test_overall_is_floored_mean() {
        let reference = reference();
        for average in [0, 33, 58, 71, 90, 100] {
            let result = simulate_recruiter_review(&reference, &keywords(&["Python", "Tableau"]), &quality(average));
            let sum: u32 = result.personas.iter().map(|p| p.score).sum();
            assert_eq!(result.overall_score, sum / 3);
            assert_eq!(result.verdict == Verdict::InterviewReady, result.overall_score >= 75);
        }
    }

    #[test]
    fn test_verdict_threshold() {
        assert_eq!(Verdict::from_overall(75), Verdict::InterviewReady);
        assert_eq!(Verdict::from_overall(74), Verdict::NeedsStrengthening);
        assert_eq!(
            serde_json::to_string(&Verdict::InterviewReady).unwrap(),
            "\"Interview Ready\""
        );
    }

    #[test]
    fn test_incomplete_reference_gets_lower_section_bonus() {
        let mut reference = reference();
        reference.projects.clear();
        let result = simulate_recruiter_review(&reference, &keywords(&["Python"]), &quality(0));

        // coverage 100 -> 0.6 * 100 + 0.4 * 70
        assert_eq!(result.persona_score(Persona::AtsParser), 88);
    }

    #[test]
    fn test_keyword_coverage_empty_keywords() {
        assert_eq!(keyword_coverage("anything", &[]), 0);
        assert_eq!(keyword_coverage("Python and SQL", &keywords(&["python", "sql", "aws"])), 66);
    }
}
