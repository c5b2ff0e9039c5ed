//! Analysis engine coordinating profile extraction, matching, content
//! generation and recruiter review

use crate::config::AnalysisConfig;
use crate::content::evidence::{generate_evidence_links, EvidenceAnalyzer, EvidenceLink, PortfolioConsistency};
use crate::content::planning::{
    generate_career_roadmap, generate_gap_autopilot_plan, generate_improvement_suggestions,
    generate_interview_questions, generate_role_variants, GapAutopilotPlan, RoleVariant,
};
use crate::content::reference::{format_resume_reference, ProfileLinks, ReferenceGenerator, ResumeReference};
use crate::error::Result;
use crate::processing::lexicon::Lexicon;
use crate::processing::match_engine::{generate_explanation, HireabilityStatus, MatchEngine};
use crate::processing::profile::{JobProfile, ProfileExtractor, ResumeProfile};
use crate::processing::quality::{AnswerScore, BulletQualityReport, QualityScorer};
use crate::processing::role_classifier::{RoleClassifier, RoleFamily};
use crate::processing::skill_matcher::{FuzzySkillMatcher, SkillMatcher};
use crate::processing::text_processor::TextProcessor;
use crate::review::benchmark::{benchmark_against_top_candidates, BenchmarkResult};
use crate::review::simulation::{simulate_recruiter_review, RecruiterSimulation};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const EXTRACTION_FAILED_EXPLANATION: &str =
    "Could not extract text from the uploaded resume PDF. If this is a scanned/image PDF, upload a text-based PDF.";

/// Result of comparing one resume against one job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Absent when the resume text could not be extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_family: Option<RoleFamily>,
    pub match_score: u32,
    pub match_explanation: String,
    pub confidence: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub career_roadmap: Vec<String>,
    pub hireability_status: HireabilityStatus,
    pub recruiter_decision: String,
    pub interview_questions: Vec<String>,
}

impl MatchReport {
    /// Fixed report for a resume whose text came back empty
    pub fn extraction_failed() -> Self {
        Self {
            role_title: None,
            role_family: None,
            match_score: 0,
            match_explanation: EXTRACTION_FAILED_EXPLANATION.to_string(),
            confidence: 0.0,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            improvement_suggestions: vec!["Upload a selectable-text PDF resume for accurate analysis.".to_string()],
            career_roadmap: vec!["Re-upload resume in text-based PDF format and try again.".to_string()],
            hireability_status: HireabilityStatus::NeedsImprovement,
            recruiter_decision: "Resume parsing failed".to_string(),
            interview_questions: vec!["Tell me about yourself.".to_string()],
        }
    }
}

/// Inputs for the resume intelligence pipeline; every field may be blank
#[derive(Debug, Clone, Default)]
pub struct IntelligenceRequest {
    pub job_text: String,
    pub profile_text: String,
    pub portfolio_text: String,
    pub interview_story: String,
    /// Explicit URLs; blank fields fall back to links found in `profile_text`
    pub links: ProfileLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceReport {
    pub resume_reference: ResumeReference,
    pub resume_text: String,
    pub evidence_links: Vec<EvidenceLink>,
    pub gap_autopilot: GapAutopilotPlan,
    pub recruiter_simulation: RecruiterSimulation,
    pub bullet_quality: BulletQualityReport,
    pub role_variants: Vec<RoleVariant>,
    pub interview_bullets: Vec<String>,
    pub portfolio_consistency: PortfolioConsistency,
    pub benchmark_panel: BenchmarkResult,
}

/// Main analysis engine. Holds only immutable state, so one instance can
/// serve any number of concurrent calls.
pub struct ResumeAnalyzer {
    text_processor: TextProcessor,
    role_classifier: RoleClassifier,
    matcher: Box<dyn SkillMatcher>,
    quality_scorer: QualityScorer,
    reference_generator: ReferenceGenerator,
    evidence_analyzer: EvidenceAnalyzer,
    config: AnalysisConfig,
}

impl ResumeAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let lexicon = Arc::new(Lexicon::from_config(config)?);
        Ok(Self::with_lexicon(lexicon, config.clone()))
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: AnalysisConfig) -> Self {
        debug!("analyzer taxonomy size: {}", lexicon.taxonomy().len());

        Self {
            text_processor: TextProcessor::new(Arc::clone(&lexicon)),
            role_classifier: RoleClassifier::new(),
            matcher: Box::new(FuzzySkillMatcher),
            quality_scorer: QualityScorer::new(Arc::clone(&lexicon), config.job_keyword_limit),
            reference_generator: ReferenceGenerator::new(Arc::clone(&lexicon), config.job_keyword_limit),
            evidence_analyzer: EvidenceAnalyzer::new(lexicon),
            config,
        }
    }

    /// Replace the skill matching strategy
    pub fn with_matcher(mut self, matcher: Box<dyn SkillMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    pub fn text_processor(&self) -> &TextProcessor {
        &self.text_processor
    }

    pub fn role_classifier(&self) -> &RoleClassifier {
        &self.role_classifier
    }

    pub fn quality_scorer(&self) -> &QualityScorer {
        &self.quality_scorer
    }

    pub fn evidence_analyzer(&self) -> &EvidenceAnalyzer {
        &self.evidence_analyzer
    }

    fn profile_extractor(&self) -> ProfileExtractor<'_> {
        ProfileExtractor::new(&self.text_processor, &self.role_classifier, &self.config)
    }

    pub fn analyze_resume(&self, resume_text: &str) -> ResumeProfile {
        self.profile_extractor().analyze_resume(resume_text)
    }

    pub fn analyze_job(&self, job_text: &str) -> JobProfile {
        self.profile_extractor().analyze_job(job_text)
    }

    /// Score, gap, suggestions and interview questions for a resume/job pair.
    /// Blank resume text yields [`MatchReport::extraction_failed`].
    pub fn analyze_match(&self, resume_text: &str, job_text: &str) -> MatchReport {
        if resume_text.trim().is_empty() {
            debug!("resume text is empty, returning degraded report");
            return MatchReport::extraction_failed();
        }

        let resume = self.analyze_resume(resume_text);
        let job = self.analyze_job(job_text);

        let engine = MatchEngine::new(self.matcher.as_ref());
        let result = engine.compute(&resume, &job);
        let explanation = generate_explanation(result.score);
        let status = HireabilityStatus::from_score(result.score);

        let question_seed = if result.matched.is_empty() { &job.skills } else { &result.matched };
        let interview_questions = generate_interview_questions(question_seed, job.role_family);

        debug!(
            "match: score={} matched={} missing={} matcher={}",
            result.score,
            result.matched.len(),
            result.missing.len(),
            self.matcher.name()
        );

        MatchReport {
            improvement_suggestions: generate_improvement_suggestions(&result.missing, &job.role_title),
            career_roadmap: generate_career_roadmap(&result.missing, &job.role_title),
            role_title: Some(job.role_title),
            role_family: Some(job.role_family),
            match_score: result.score,
            match_explanation: explanation.match_explanation,
            confidence: explanation.confidence,
            matched_skills: result.matched,
            missing_skills: result.missing,
            hireability_status: status,
            recruiter_decision: status.recruiter_decision().to_string(),
            interview_questions,
        }
    }

    pub fn evaluate_answer(&self, raw: &str) -> AnswerScore {
        self.quality_scorer.evaluate_answer(raw)
    }

    pub fn extract_profile_links(&self, text: &str) -> ProfileLinks {
        self.reference_generator.extract_profile_links(text)
    }

    pub fn generate_resume_reference(&self, job_text: &str, profile_text: &str, links: &ProfileLinks) -> ResumeReference {
        self.reference_generator.generate(job_text, profile_text, links)
    }

    pub fn score_resume_bullets(&self, reference: &ResumeReference, job_text: &str) -> BulletQualityReport {
        self.quality_scorer.score_resume_bullets(reference, job_text)
    }

    /// Full pipeline: reference, interview bullets, quality, evidence, gap plan,
    /// recruiter simulation, variants, portfolio check and benchmark
    pub fn build_resume_intelligence(&self, request: &IntelligenceRequest) -> IntelligenceReport {
        let job_text = request.job_text.as_str();

        let mut reference = self.generate_resume_reference(job_text, &request.profile_text, &request.links);
        let interview_bullets = self
            .evidence_analyzer
            .convert_interview_to_bullets(&request.interview_story);
        reference.prepend_experience_bullets(&interview_bullets);

        let review_keywords = self
            .text_processor
            .extract_role_keywords_or_default(job_text, self.config.review_keyword_limit);

        let resume_text = format_resume_reference(&reference);
        let bullet_quality = self.score_resume_bullets(&reference, job_text);
        let evidence_links = generate_evidence_links(&reference);
        let gap_autopilot = generate_gap_autopilot_plan(&review_keywords, &reference);
        let recruiter_simulation = simulate_recruiter_review(&reference, &review_keywords, &bullet_quality);
        let role_variants = generate_role_variants(&reference, &reference.headline);
        let portfolio_consistency = self
            .evidence_analyzer
            .check_portfolio_consistency(&reference, &request.portfolio_text);
        let benchmark_panel = benchmark_against_top_candidates(&reference, &bullet_quality, &recruiter_simulation);

        debug!(
            "intelligence: bullets={} average={} overall={} percentile={}",
            bullet_quality.bullets.len(),
            bullet_quality.average_score,
            recruiter_simulation.overall_score,
            benchmark_panel.estimated_percentile
        );

        IntelligenceReport {
            resume_reference: reference,
            resume_text,
            evidence_links,
            gap_autopilot,
            recruiter_simulation,
            bullet_quality,
            role_variants,
            interview_bullets,
            portfolio_consistency,
            benchmark_panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::skill_matcher::JaroWinklerSkillMatcher;

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::new(&AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_blank_resume_gives_degraded_report() {
        let report = analyzer().analyze_match("  \n\t", "Looking for a Data Analyst with SQL");

        assert_eq!(report, MatchReport::extraction_failed());
        assert_eq!(report.match_score, 0);
        assert_eq!(report.recruiter_decision, "Resume parsing failed");
        assert_eq!(report.interview_questions, vec!["Tell me about yourself."]);
    }

    #[test]
    fn test_analyze_match() {
        let report = analyzer().analyze_match(
            "Analyst skilled in Python and SQL dashboards.",
            "Looking for a Data Analyst with SQL and Python skills",
        );

        assert_eq!(report.role_title.as_deref(), Some("Data Analyst"));
        assert_eq!(report.role_family, Some(RoleFamily::Data));
        assert_eq!(report.matched_skills, vec!["Python", "SQL", "Analyst"]);
        assert_eq!(report.missing_skills, vec!["Data"]);
        assert_eq!(report.match_score, 75);
        assert_eq!(report.match_explanation, "Moderate match.");
        assert_eq!(report.confidence, 0.75);
        assert_eq!(report.hireability_status, HireabilityStatus::StrongPotential);
        assert_eq!(report.interview_questions[0], "Explain your experience with Python.");
        assert_eq!(report.interview_questions.len(), 4);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let report = analyzer().analyze_match("Python developer", "");

        assert_eq!(report.match_score, 0);
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.improvement_suggestions, vec!["Your resume matches the job requirements well."]);
        assert_eq!(report.interview_questions[0], "Tell me about yourself.");
    }

    #[test]
    fn test_matcher_is_swappable() {
        let analyzer = analyzer().with_matcher(Box::new(JaroWinklerSkillMatcher::default()));
        assert_eq!(analyzer.matcher_name(), "jaro-winkler");

        let report = analyzer.analyze_match("Employment Law", "Seeking counsel for Corporate Law matters");
        assert!(!report.matched_skills.contains(&"Corporate Law".to_string()));
    }

    #[test]
    fn test_build_resume_intelligence() {
        let request = IntelligenceRequest {
            job_text: "Looking for a Data Analyst with SQL and Python skills".to_string(),
            interview_story: "I led a redesign. It cut load time by 40%.".to_string(),
            ..Default::default()
        };
        let report = analyzer().build_resume_intelligence(&request);

        assert_eq!(report.interview_bullets.len(), 2);
        assert_eq!(report.resume_reference.experience[0].bullets[0], "I led a redesign.");
        assert_eq!(report.bullet_quality.bullets.len(), 12);
        assert_eq!(report.evidence_links.len(), 12);
        assert_eq!(report.role_variants.len(), 3);
        assert_eq!(report.portfolio_consistency.consistency_score, 45);
        assert_eq!(report.recruiter_simulation.personas.len(), 3);
        assert!(report.resume_text.contains("I led a redesign."));
        assert!(report.benchmark_panel.estimated_percentile <= 99);
    }

    #[test]
    fn test_build_resume_intelligence_is_deterministic() {
        let analyzer = analyzer();
        let request = IntelligenceRequest {
            job_text: "Hiring for a Marketing Manager. SEO, content marketing and social media.".to_string(),
            profile_text: "https://linkedin.com/in/someone".to_string(),
            portfolio_text: "Campaign launch case study with A/B tests".to_string(),
            ..Default::default()
        };

        assert_eq!(
            analyzer.build_resume_intelligence(&request),
            analyzer.build_resume_intelligence(&request)
        );
    }
}
