//! Match score and skill gap between a resume profile and a job profile

use crate::processing::profile::{dedup_skills, JobProfile, ResumeProfile};
use crate::processing::skill_matcher::{matched_skills, SkillMatcher};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 when the job lists no skills
    pub score: u32,
    /// Subset of the job skills, in job order
    pub matched: Vec<String>,
    /// Job skills minus `matched`, in job order
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub match_explanation: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HireabilityStatus {
    #[serde(rename = "TOP CANDIDATE")]
    TopCandidate,
    #[serde(rename = "STRONG POTENTIAL")]
    StrongPotential,
    #[serde(rename = "NEEDS IMPROVEMENT")]
    NeedsImprovement,
}

impl HireabilityStatus {
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            HireabilityStatus::TopCandidate
        } else if score >= 65 {
            HireabilityStatus::StrongPotential
        } else {
            HireabilityStatus::NeedsImprovement
        }
    }

    pub fn recruiter_decision(&self) -> &'static str {
        match self {
            HireabilityStatus::TopCandidate => "Highly Recommended for Interview",
            HireabilityStatus::StrongPotential => "Consider After Skill Improvement",
            HireabilityStatus::NeedsImprovement => "Needs Training Before Hiring",
        }
    }
}

impl std::fmt::Display for HireabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HireabilityStatus::TopCandidate => write!(f, "TOP CANDIDATE"),
            HireabilityStatus::StrongPotential => write!(f, "STRONG POTENTIAL"),
            HireabilityStatus::NeedsImprovement => write!(f, "NEEDS IMPROVEMENT"),
        }
    }
}

pub struct MatchEngine<'a> {
    matcher: &'a dyn SkillMatcher,
}

impl<'a> MatchEngine<'a> {
    pub fn new(matcher: &'a dyn SkillMatcher) -> Self {
        Self { matcher }
    }

    pub fn matched_skills(&self, resume: &ResumeProfile, job: &JobProfile) -> Vec<String> {
        matched_skills(self.matcher, &resume.skills, &job.skills)
    }

    /// `floor(100 * matched / job skills)`, 0 for a job without skills
    pub fn calculate_match(&self, resume: &ResumeProfile, job: &JobProfile) -> u32 {
        let total = dedup_skills(&job.skills).len();
        if total == 0 {
            return 0;
        }
        let matched = self.matched_skills(resume, job).len();
        (100 * matched / total) as u32
    }

    /// Job skills no resume skill matches, in job order
    pub fn detect_skill_gap(&self, resume: &ResumeProfile, job: &JobProfile) -> Vec<String> {
        let matched: HashSet<String> = self
            .matched_skills(resume, job)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        dedup_skills(&job.skills)
            .into_iter()
            .filter(|s| !matched.contains(&s.to_lowercase()))
            .collect()
    }

    pub fn compute(&self, resume: &ResumeProfile, job: &JobProfile) -> MatchResult {
        MatchResult {
            score: self.calculate_match(resume, job),
            matched: self.matched_skills(resume, job),
            missing: self.detect_skill_gap(resume, job),
        }
    }
}

pub fn generate_explanation(score: u32) -> MatchExplanation {
    let text = if score >= 80 {
        "Strong match."
    } else if score >= 50 {
        "Moderate match."
    } else {
        "Low match."
    };

    MatchExplanation {
        match_explanation: text.to_string(),
        confidence: f64::from(score) / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::role_classifier::RoleFamily;
    use crate::processing::skill_matcher::FuzzySkillMatcher;

    fn job(skills: &[&str]) -> JobProfile {
        JobProfile::new(
            skills.iter().map(|s| s.to_string()).collect(),
            "Data Analyst".to_string(),
            RoleFamily::Data,
        )
    }

    fn resume(skills: &[&str]) -> ResumeProfile {
        ResumeProfile::new(skills.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let engine = MatchEngine::new(&FuzzySkillMatcher);
        let result = engine.compute(&resume(&["Python"]), &job(&[]));

        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_score_floors() {
        let engine = MatchEngine::new(&FuzzySkillMatcher);
        let result = engine.compute(&resume(&["Python", "SQL"]), &job(&["Python", "SQL", "Tableau"]));

        assert_eq!(result.score, 66);
        assert_eq!(result.matched, vec!["Python", "SQL"]);
        assert_eq!(result.missing, vec!["Tableau"]);
    }

    #[test]
    fn test_matched_and_missing_partition_job_skills() {
        let engine = MatchEngine::new(&FuzzySkillMatcher);
        let job = job(&["Corporate Law", "Litigation", "corporate law", "Drafting", "Research"]);
        let resume = resume(&["Employment Law", "Legal Research"]);

        let result = engine.compute(&resume, &job);
        let deduped = dedup_skills(&job.skills);

        let mut union: Vec<String> = result.matched.iter().chain(&result.missing).cloned().collect();
        union.sort();
        let mut expected = deduped.clone();
        expected.sort();
        assert_eq!(union, expected);
        assert!(result.matched.iter().all(|m| !result.missing.contains(m)));
        assert_eq!(result.matched, vec!["Corporate Law", "Research"]);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_full_match_is_hundred() {
        let engine = MatchEngine::new(&FuzzySkillMatcher);
        let result = engine.compute(&resume(&["python", "sql"]), &job(&["Python", "SQL"]));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_explanation_bands() {
        assert_eq!(generate_explanation(80).match_explanation, "Strong match.");
        assert_eq!(generate_explanation(50).match_explanation, "Moderate match.");
        assert_eq!(generate_explanation(49).match_explanation, "Low match.");
        assert_eq!(generate_explanation(66).confidence, 0.66);
    }

    #[test]
    fn test_hireability_tiers() {
        assert_eq!(HireabilityStatus::from_score(85), HireabilityStatus::TopCandidate);
        assert_eq!(HireabilityStatus::from_score(65), HireabilityStatus::StrongPotential);
        assert_eq!(HireabilityStatus::from_score(64), HireabilityStatus::NeedsImprovement);
        assert_eq!(
            HireabilityStatus::NeedsImprovement.recruiter_decision(),
            "Needs Training Before Hiring"
        );
    }
}
