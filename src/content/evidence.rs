//! Evidence around resume claims: interview stories turned into bullets,
//! portfolio cross-checks and proof-link placeholders.

use crate::content::reference::ResumeReference;
use crate::processing::lexicon::Lexicon;
use crate::processing::quality::{BulletSection, BulletSource};
use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_STORY_BULLETS: usize = 3;
const STORY_PREFIX: &str = "Delivered impact by";

const MAX_CLAIM_TOKENS: usize = 4;
const MIN_CLAIM_TOKEN_CHARS: usize = 5;
const MAX_LISTED_CLAIMS: usize = 6;
const NO_PORTFOLIO_SCORE: u32 = 45;

const EVIDENCE_TYPES: &[(&str, &str)] = &[
    ("GitHub commit/PR", "Link to exact commit or pull request"),
    ("Demo/video", "Short demo proving functionality"),
    ("Metrics screenshot", "Dashboard/report showing impact"),
    ("Certificate/document", "Training or credential proof"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConsistency {
    pub consistency_score: u32,
    pub matched_claims: Vec<String>,
    pub unverified_claims: Vec<String>,
    pub risk_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceLink {
    pub claim: String,
    pub section: BulletSection,
    pub evidence_type: String,
    pub suggested_artifact: String,
    pub proof_link_placeholder: String,
}

pub struct EvidenceAnalyzer {
    text_processor: TextProcessor,
    sentence_split: Regex,
    story_verb_regex: Regex,
}

impl EvidenceAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            text_processor: TextProcessor::new(lexicon),
            sentence_split: Regex::new(r"[.\n]+").expect("Invalid sentence split regex"),
            story_verb_regex: Regex::new(r"\b(improved|increased|reduced|delivered|built|implemented|led)\b")
                .expect("Invalid story verb regex"),
        }
    }

    /// Up to three bullets from an interview story. Sentences without an
    /// action or outcome verb get the "Delivered impact by" prefix.
    pub fn convert_interview_to_bullets(&self, story: &str) -> Vec<String> {
        self.sentence_split
            .split(story)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .take(MAX_STORY_BULLETS)
            .map(|chunk| {
                let mut sentence = capitalize_first(chunk);
                if !self.story_verb_regex.is_match(&sentence.to_lowercase()) {
                    sentence = format!("{} {}.", STORY_PREFIX, sentence.to_lowercase());
                }
                if !sentence.ends_with('.') {
                    sentence.push('.');
                }
                sentence
            })
            .collect()
    }

    /// Share of resume bullets whose key terms show up in the portfolio text
    pub fn check_portfolio_consistency(&self, reference: &ResumeReference, portfolio_text: &str) -> PortfolioConsistency {
        let bullets = reference.bullets();

        if portfolio_text.trim().is_empty() {
            return PortfolioConsistency {
                consistency_score: NO_PORTFOLIO_SCORE,
                matched_claims: Vec::new(),
                unverified_claims: bullets.into_iter().map(|b| b.text).collect(),
                risk_note: "No portfolio evidence provided; resume claims are not currently verifiable.".to_string(),
            };
        }

        let portfolio = portfolio_text.to_lowercase();
        let (matched, unverified): (Vec<String>, Vec<String>) = bullets
            .iter()
            .map(|b| b.text.clone())
            .partition(|text| {
                self.text_processor
                    .tokenize(text)
                    .into_iter()
                    .filter(|t| t.chars().count() >= MIN_CLAIM_TOKEN_CHARS)
                    .take(MAX_CLAIM_TOKENS)
                    .any(|t| portfolio.contains(&t))
            });

        let consistency_score = (100 * matched.len() / bullets.len().max(1)) as u32;

        PortfolioConsistency {
            consistency_score,
            matched_claims: matched.into_iter().take(MAX_LISTED_CLAIMS).collect(),
            unverified_claims: unverified.into_iter().take(MAX_LISTED_CLAIMS).collect(),
            risk_note: "Align portfolio artifacts to each critical resume claim to improve recruiter trust.".to_string(),
        }
    }
}

/// One proof suggestion per bullet, cycling through the evidence types
pub fn generate_evidence_links(reference: &ResumeReference) -> Vec<EvidenceLink> {
    reference
        .bullets()
        .into_iter()
        .enumerate()
        .map(|(idx, bullet)| {
            let (evidence_type, artifact) = EVIDENCE_TYPES[idx % EVIDENCE_TYPES.len()];
            EvidenceLink {
                proof_link_placeholder: format!("https://add-your-proof-link/{}/{}", bullet.section, idx + 1),
                claim: bullet.text,
                section: bullet.section,
                evidence_type: evidence_type.to_string(),
                suggested_artifact: artifact.to_string(),
            }
        })
        .collect()
}

fn capitalize_first(chunk: &str) -> String {
    let mut chars = chunk.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reference::{ProfileLinks, ReferenceGenerator};

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::new().unwrap())
    }

    fn reference() -> ResumeReference {
        ReferenceGenerator::new(lexicon(), 14).generate(
            "Looking for a Data Analyst with SQL and Python skills",
            "",
            &ProfileLinks::default(),
        )
    }

    #[test]
    fn test_interview_story_to_bullets() {
        let analyzer = EvidenceAnalyzer::new(lexicon());
        let bullets = analyzer.convert_interview_to_bullets("I led a redesign. It cut load time by 40%.");

        assert_eq!(
            bullets,
            vec![
                "I led a redesign.".to_string(),
                "Delivered impact by it cut load time by 40%.".to_string(),
            ]
        );
    }

    #[test]
    fn test_interview_story_limits_and_blank() {
        let analyzer = EvidenceAnalyzer::new(lexicon());
        assert!(analyzer.convert_interview_to_bullets("  \n ").is_empty());

        let bullets = analyzer.convert_interview_to_bullets("built a tool\nreduced costs. improved uptime. shipped docs.");
        assert_eq!(bullets, vec!["Built a tool.", "Reduced costs.", "Improved uptime."]);
    }

    #[test]
    fn test_portfolio_blank_lists_every_bullet() {
        let analyzer = EvidenceAnalyzer::new(lexicon());
        let reference = reference();
        let result = analyzer.check_portfolio_consistency(&reference, "   ");

        assert_eq!(result.consistency_score, 45);
        assert!(result.matched_claims.is_empty());
        assert_eq!(result.unverified_claims.len(), reference.bullets().len());
    }

    #[test]
    fn test_portfolio_matches_key_terms() {
        let analyzer = EvidenceAnalyzer::new(lexicon());
        let reference = reference();
        let total = reference.bullets().len();
        // "automated" is among the first key terms of exactly one bullet
        let result = analyzer.check_portfolio_consistency(&reference, "Repo: automated nightly jobs");

        assert_eq!(result.matched_claims.len(), 1);
        assert!(result.matched_claims[0].starts_with("Automated repetitive workflows"));
        assert_eq!(result.consistency_score, (100 / total) as u32);
        assert!(result.unverified_claims.len() <= 6);
    }

    #[test]
    fn test_evidence_links_cycle_types() {
        let reference = reference();
        let links = generate_evidence_links(&reference);

        assert_eq!(links.len(), reference.bullets().len());
        assert_eq!(links[0].evidence_type, "GitHub commit/PR");
        assert_eq!(links[4].evidence_type, "GitHub commit/PR");
        assert_eq!(links[0].proof_link_placeholder, "https://add-your-proof-link/experience/1");
        let last = links.last().unwrap();
        assert_eq!(
            last.proof_link_placeholder,
            format!("https://add-your-proof-link/projects/{}", links.len())
        );
    }
}
