//! Rule-based quality scoring for interview answers and resume bullets

use crate::processing::lexicon::Lexicon;
use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

const MIN_ANSWER_WORDS: usize = 8;
const SHORT_ANSWER_SCORE: u32 = 25;
const SHORT_ANSWER_FEEDBACK: &str =
    "Insufficient answer. It is too short to assess the question properly.";

/// Relevance assumed when no question accompanies the answer
const UNANCHORED_RELEVANCE: u32 = 20;
const MAX_RELEVANCE: f64 = 45.0;
/// Below this relevance the total is capped at `LOW_RELEVANCE_CAP`
const RELEVANCE_GATE: u32 = 12;
const LOW_RELEVANCE_CAP: u32 = 45;
const SKILL_NAMED_BONUS: f64 = 0.2;
const SKILL_HINT_BONUS: f64 = 0.45;

const CONTEXT_WORDS: &[&str] = &["project", "role", "team", "situation", "task", "challenge", "client"];
const ACTION_WORDS: &[&str] = &[
    "built", "implemented", "designed", "led", "managed", "created", "improved",
    "optimized", "wrote", "developed", "launched", "automated",
];
const OUTCOME_WORDS: &[&str] = &["result", "impact", "improved", "reduced", "increased", "delivered", "achieved"];

/// Only the first few job keywords count toward a bullet's keyword score
const BULLET_KEYWORD_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerScore {
    /// 20..=100, or exactly 25 for answers too short to assess
    pub score: u32,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletRating {
    Strong,
    Good,
    Weak,
}

impl BulletRating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            BulletRating::Strong
        } else if score >= 60 {
            BulletRating::Good
        } else {
            BulletRating::Weak
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            BulletRating::Strong => "Keep this bullet; it is action-oriented and role-aligned.",
            BulletRating::Good => "Add one concrete metric to move this bullet to top-tier quality.",
            BulletRating::Weak => "Add a measurable outcome and one JD keyword for stronger recruiter impact.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletScore {
    pub score: u32,
    pub rating: BulletRating,
    pub has_action: bool,
    pub has_metric: bool,
    pub has_impact: bool,
    pub keyword_hits: usize,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletSection {
    Experience,
    Projects,
}

impl std::fmt::Display for BulletSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulletSection::Experience => write!(f, "experience"),
            BulletSection::Projects => write!(f, "projects"),
        }
    }
}

/// A single achievement line with the entry it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeBullet {
    pub section: BulletSection,
    pub title: String,
    pub text: String,
}

/// Anything that can list its experience and project bullets
pub trait BulletSource {
    fn bullets(&self) -> Vec<ResumeBullet>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredBullet {
    pub section: BulletSection,
    pub title: String,
    pub bullet: String,
    #[serde(flatten)]
    pub scoring: BulletScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletQualityReport {
    /// Floor of the mean bullet score, 0 without bullets
    pub average_score: u32,
    pub bullets: Vec<ScoredBullet>,
}

pub struct QualityScorer {
    text_processor: TextProcessor,
    job_keyword_limit: usize,
    question_marker: Regex,
    answer_marker: Regex,
    metric_regex: Regex,
    action_regex: Regex,
    impact_regex: Regex,
}

impl QualityScorer {
    pub fn new(lexicon: Arc<Lexicon>, job_keyword_limit: usize) -> Self {
        Self {
            text_processor: TextProcessor::new(lexicon),
            job_keyword_limit,
            question_marker: Regex::new(r"(?i)question:").expect("Invalid question marker regex"),
            answer_marker: Regex::new(r"(?i)answer:").expect("Invalid answer marker regex"),
            metric_regex: Regex::new(r"\b\d+(\.\d+)?%?\b").expect("Invalid metric regex"),
            action_regex: Regex::new(r"\b(built|implemented|designed|led|optimized|automated|delivered|improved)\b")
                .expect("Invalid action verb regex"),
            impact_regex: Regex::new(r"\b(result|impact|reduced|increased|improved|achieved|delivered)\b")
                .expect("Invalid impact regex"),
        }
    }

    /// Score a free-text interview answer, optionally prefixed by
    /// `Question: ... Answer: ...` markers.
    pub fn evaluate_answer(&self, raw: &str) -> AnswerScore {
        let (question, answer) = self.split_question_and_answer(raw);
        let word_count = answer.split_whitespace().count();

        if word_count < MIN_ANSWER_WORDS {
            return AnswerScore {
                score: SHORT_ANSWER_SCORE,
                feedback: SHORT_ANSWER_FEEDBACK.to_string(),
            };
        }

        let (relevance, relevance_note) = if question.is_empty() {
            (
                UNANCHORED_RELEVANCE,
                " The answer may not be aligned with the selected question.",
            )
        } else {
            let ratio = self.relevance_ratio(question, answer);
            let note = if ratio < 0.2 {
                " The answer is not aligned with the selected question."
            } else if ratio < 0.4 {
                " The answer is partially aligned with the selected question."
            } else {
                " The answer is aligned with the selected question."
            };
            (relevance_points(ratio), note)
        };

        let completeness = self.completeness_score(answer);
        let depth = depth_score(word_count);

        let mut score = (relevance + completeness + depth).clamp(20, 100);
        if relevance < RELEVANCE_GATE {
            score = score.min(LOW_RELEVANCE_CAP);
        }

        let (sufficiency, feedback) = if score >= 80 {
            (
                "Sufficient answer for this question.",
                "Strong response with good alignment, concrete actions, and measurable impact.",
            )
        } else if score >= 60 {
            (
                "Mostly sufficient, but can be improved.",
                "Answer is reasonably aligned. Add clearer outcomes and stronger specifics.",
            )
        } else if score >= 45 {
            (
                "Partially sufficient.",
                "Some relevant content is present, but details and impact are limited.",
            )
        } else {
            (
                "Not sufficient for this question.",
                "Answer does not adequately address the asked question.",
            )
        };

        AnswerScore {
            score,
            feedback: format!("{} {}{}", sufficiency, feedback, relevance_note),
        }
    }

    /// Score one bullet: base 20, keyword hits, action verb, impact word, metric
    pub fn score_bullet(&self, bullet: &str, job_keywords: &[String]) -> BulletScore {
        let lowered = bullet.to_lowercase();
        let has_action = self.action_regex.is_match(&lowered);
        let has_metric = self.metric_regex.is_match(bullet);
        let has_impact = self.impact_regex.is_match(&lowered);

        let keyword_hits = job_keywords
            .iter()
            .take(BULLET_KEYWORD_WINDOW)
            .filter(|k| lowered.contains(&k.to_lowercase()))
            .count();
        let keyword_score = (keyword_hits as u32 * 7).min(35);

        let mut score = 20 + keyword_score;
        for flag in [has_action, has_impact, has_metric] {
            if flag {
                score += 20;
            }
        }
        let score = score.min(100);
        let rating = BulletRating::from_score(score);

        BulletScore {
            score,
            rating,
            has_action,
            has_metric,
            has_impact,
            keyword_hits,
            suggestion: rating.suggestion().to_string(),
        }
    }

    /// Score every experience and project bullet against the job's keywords
    pub fn score_resume_bullets(&self, source: &impl BulletSource, job_text: &str) -> BulletQualityReport {
        let job_keywords = self
            .text_processor
            .extract_role_keywords_or_default(job_text, self.job_keyword_limit);

        let bullets: Vec<ScoredBullet> = source
            .bullets()
            .into_iter()
            .map(|b| ScoredBullet {
                scoring: self.score_bullet(&b.text, &job_keywords),
                section: b.section,
                title: b.title,
                bullet: b.text,
            })
            .collect();

        let average_score = if bullets.is_empty() {
            0
        } else {
            bullets.iter().map(|b| b.scoring.score).sum::<u32>() / bullets.len() as u32
        };

        BulletQualityReport {
            average_score,
            bullets,
        }
    }

    fn split_question_and_answer<'t>(&self, raw: &'t str) -> (&'t str, &'t str) {
        if let (Some(q), Some(a)) = (self.question_marker.find(raw), self.answer_marker.find(raw)) {
            let question = raw.get(q.end()..a.start()).unwrap_or("").trim();
            let answer = raw[a.end()..].trim();
            return (question, answer);
        }
        ("", raw.trim())
    }

    /// Share of question tokens echoed by the answer plus skill bonuses, capped at 1.0
    fn relevance_ratio(&self, question: &str, answer: &str) -> f64 {
        let q_tokens: HashSet<String> = self.text_processor.tokenize(question).into_iter().collect();
        let a_tokens: HashSet<String> = self.text_processor.tokenize(answer).into_iter().collect();

        let exact_overlap = q_tokens.intersection(&a_tokens).count();
        let fuzzy_overlap = q_tokens
            .iter()
            .filter(|qt| !a_tokens.contains(*qt))
            .filter(|qt| a_tokens.iter().any(|at| tokens_related(qt, at)))
            .count();

        let denominator = q_tokens.len().clamp(1, 8);
        let mut ratio = (exact_overlap + fuzzy_overlap) as f64 / denominator as f64;

        let question_lower = question.to_lowercase();
        let answer_lower = answer.to_lowercase();
        let lexicon = self.text_processor.lexicon();

        let skill_named = lexicon.taxonomy().iter().any(|skill| {
            let skill = skill.to_lowercase();
            question_lower.contains(&skill) && answer_lower.contains(&skill)
        });
        if skill_named {
            ratio += SKILL_NAMED_BONUS;
        }

        let hinted = lexicon.skill_hints().iter().any(|(skill, hints)| {
            question_lower.contains(skill.as_str()) && hints.iter().any(|h| answer_lower.contains(h.as_str()))
        });
        if hinted {
            ratio += SKILL_HINT_BONUS;
        }

        ratio.min(1.0)
    }

    fn completeness_score(&self, answer: &str) -> u32 {
        let lowered = answer.to_lowercase();
        let contains_any = |words: &[&str]| words.iter().any(|w| lowered.contains(w));

        let mut score = 0;
        if contains_any(CONTEXT_WORDS) {
            score += 10;
        }
        if contains_any(ACTION_WORDS) {
            score += 12;
        }
        if contains_any(OUTCOME_WORDS) {
            score += 8;
        }
        if self.metric_regex.is_match(answer) {
            score += 5;
        }
        score
    }
}

fn depth_score(word_count: usize) -> u32 {
    match word_count {
        70.. => 20,
        40..=69 => 16,
        25..=39 => 12,
        _ => 8,
    }
}

/// Close variants: same four-character prefix, or one contains the other
fn tokens_related(a: &str, b: &str) -> bool {
    let prefix = |s: &str| s.chars().take(4).collect::<String>();
    prefix(a) == prefix(b) || a.contains(b) || b.contains(a)
}

/// Relevance ratio scaled to points, halves rounded to even
fn relevance_points(ratio: f64) -> u32 {
    (ratio * MAX_RELEVANCE).round_ties_even().min(MAX_RELEVANCE) as u32
}
