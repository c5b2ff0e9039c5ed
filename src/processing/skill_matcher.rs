//! Skill equivalence strategies
//!
//! Callers only see the [`SkillMatcher`] trait, so the permissive default can
//! be swapped for a stricter strategy without touching the match engine.
//!
//! The default [`FuzzySkillMatcher`] accepts exact, substring and shared-word
//! matches. It is deliberately loose: "Law" matches both "Corporate Law" and
//! "Employment Law", and "Data" matches "Data Analysis".

use crate::processing::profile::dedup_skills;
use strsim::jaro_winkler;

/// Decides whether two skill labels denote the same capability.
/// Implementations must be symmetric.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, a: &str, b: &str) -> bool;

    fn name(&self) -> &'static str;
}

/// Exact, substring or token-overlap matching on normalized labels
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzySkillMatcher;

impl SkillMatcher for FuzzySkillMatcher {
    fn matches(&self, a: &str, b: &str) -> bool {
        is_match(a, b)
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

/// Stricter alternative: normalized labels must be near-identical strings
#[derive(Debug, Clone, Copy)]
pub struct JaroWinklerSkillMatcher {
    threshold: f64,
}

impl JaroWinklerSkillMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }
}

impl Default for JaroWinklerSkillMatcher {
    fn default() -> Self {
        Self::new(0.92)
    }
}

impl SkillMatcher for JaroWinklerSkillMatcher {
    fn matches(&self, a: &str, b: &str) -> bool {
        let (a, b) = (normalize(a), normalize(b));
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a == b || jaro_winkler(&a, &b) >= self.threshold
    }

    fn name(&self) -> &'static str {
        "jaro-winkler"
    }
}

/// Lowercase, collapse every non-alphanumeric run into one space, trim
pub fn normalize(skill: &str) -> String {
    let mut normalized = String::with_capacity(skill.len());
    let mut pending_space = false;

    for c in skill.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.push(c);
        } else {
            pending_space = true;
        }
    }

    normalized
}

/// Equal, containing one another, or sharing at least one word once normalized.
/// Blank labels never match.
pub fn is_match(a: &str, b: &str) -> bool {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }

    a.split_whitespace()
        .any(|word| b.split_whitespace().any(|other| other == word))
}

/// Job skills (deduplicated, job order) that some resume skill matches
pub fn matched_skills(
    matcher: &dyn SkillMatcher,
    resume_skills: &[String],
    job_skills: &[String],
) -> Vec<String> {
    dedup_skills(job_skills)
        .into_iter()
        .filter(|job_skill| resume_skills.iter().any(|r| matcher.matches(r, job_skill)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Node.js / React!! "), "node js react");
        assert_eq!(normalize("C++"), "c");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_is_match_rules() {
        assert!(is_match("SQL", "sql"));
        assert!(is_match("Power BI", "power-bi"));
        assert!(is_match("Data", "Data Analysis"));
        assert!(is_match("Financial Modeling", "Financial Analysis"));
        assert!(!is_match("Python", "Java"));
        assert!(!is_match("", "Python"));
    }

    #[test]
    fn test_law_matches_every_law_skill() {
        assert!(is_match("Law", "Corporate Law"));
        assert!(is_match("Law", "Employment Law"));
        assert!(is_match("Corporate Law", "Employment Law"));
    }

    #[test]
    fn test_is_match_symmetric() {
        let samples = [
            "Python", "SQL", "Data Analysis", "Law", "Corporate Law", "node.js",
            "JavaScript", "Java", "", "Power BI", "Project Management",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(is_match(a, b), is_match(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_matched_skills_keep_job_order_and_dedup() {
        let resume = skills(&["python", "Corporate Law"]);
        let job = skills(&["Law", "Docker", "Python", "PYTHON", "Litigation"]);

        let matched = matched_skills(&FuzzySkillMatcher, &resume, &job);

        assert_eq!(matched, skills(&["Law", "Python"]));
    }

    #[test]
    fn test_jaro_winkler_is_stricter() {
        let strict = JaroWinklerSkillMatcher::default();
        assert!(strict.matches("Javascript", "JavaScript"));
        assert!(!strict.matches("Law", "Corporate Law"));
        assert!(FuzzySkillMatcher.matches("Law", "Corporate Law"));
    }
}
