//! Immutable vocabulary shared by every analysis component: the skill
//! taxonomy, stop-word sets, skill hints and acronym aliases.
//!
//! A `Lexicon` is built once at start-up and handed to each component by
//! reference. Nothing in it changes after construction.

use crate::config::AnalysisConfig;
use crate::error::{Result, ResumeIntelError};
use aho_corasick::AhoCorasick;
use std::collections::{HashMap, HashSet};

pub struct Lexicon {
    taxonomy: Vec<String>,
    taxonomy_scanner: AhoCorasick,
    stop_words: HashSet<String>,
    keyword_stop_words: HashSet<String>,
    skill_hints: Vec<(String, Vec<String>)>,
    aliases: HashMap<String, String>,
}

impl Lexicon {
    /// Lexicon with the built-in taxonomy only
    pub fn new() -> Result<Self> {
        Self::with_extra_skills(Vec::new())
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Self::with_extra_skills(config.extra_skills.clone())
    }

    /// Build a lexicon whose taxonomy is the built-in list followed by `extra_skills`
    pub fn with_extra_skills(extra_skills: Vec<String>) -> Result<Self> {
        let mut taxonomy: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        let defaults = Self::default_taxonomy().iter().map(|s| s.to_string());

        for skill in defaults.chain(extra_skills) {
            let trimmed = skill.trim();
            if trimmed.is_empty() || !seen.insert(trimmed.to_lowercase()) {
                continue;
            }
            taxonomy.push(trimmed.to_string());
        }

        let taxonomy_scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&taxonomy)
            .map_err(|e| ResumeIntelError::Processing(format!("Failed to build taxonomy scanner: {}", e)))?;

        let stop_words = Self::create_stop_words();
        let mut keyword_stop_words = stop_words.clone();
        keyword_stop_words.extend(Self::posting_filler_words().iter().map(|s| s.to_string()));

        Ok(Self {
            taxonomy,
            taxonomy_scanner,
            stop_words,
            keyword_stop_words,
            skill_hints: Self::default_skill_hints(),
            aliases: Self::default_aliases(),
        })
    }

    pub fn taxonomy(&self) -> &[String] {
        &self.taxonomy
    }

    /// Taxonomy entries occurring anywhere in `text` (case-insensitive), in taxonomy order
    pub fn taxonomy_hits(&self, text: &str) -> Vec<String> {
        let mut found = vec![false; self.taxonomy.len()];
        for mat in self.taxonomy_scanner.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }

        self.taxonomy
            .iter()
            .zip(found)
            .filter_map(|(skill, hit)| hit.then(|| skill.clone()))
            .collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn is_keyword_stop_word(&self, token: &str) -> bool {
        self.keyword_stop_words.contains(token)
    }

    /// Skill keyword → words that signal the skill without naming it, in priority order
    pub fn skill_hints(&self) -> &[(String, Vec<String>)] {
        &self.skill_hints
    }

    /// Canonical uppercase form for acronym tokens such as `sql` or `hr`
    pub fn alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(token).map(|s| s.as_str())
    }

    fn default_taxonomy() -> &'static [&'static str] {
        &[
            // Software and data
            "Python", "Java", "JavaScript", "TypeScript", "React", "Node.js", "SQL",
            "FastAPI", "Django", "AWS", "Docker", "Kubernetes", "Machine Learning",
            "Data Analysis", "Tableau", "Power BI",
            // Marketing
            "Digital Marketing", "SEO", "Content Marketing", "Social Media",
            // Finance
            "Financial Analysis", "Financial Modeling", "Accounting", "Budgeting", "Auditing",
            // Legal
            "Corporate Law", "Contract Drafting", "Legal Research", "Litigation",
            "Compliance", "Employment Law",
            // People
            "Recruitment", "Talent Acquisition", "Onboarding", "Employee Relations",
            // Operations
            "Supply Chain", "Logistics", "Project Management", "Operations Management",
            // Core
            "Leadership", "Communication", "Teamwork", "Problem Solving",
            "Stakeholder Management",
        ]
    }

    /// Articles, conjunctions, auxiliaries and interview-prompt filler
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "the", "and", "for", "with", "that", "this", "from", "into", "about",
            "than", "then", "but", "nor", "yet", "also", "are", "was", "were", "been",
            "being", "have", "has", "had", "having", "does", "did", "doing", "can",
            "will", "would", "could", "should", "shall", "may", "might", "must",
            "you", "they", "them", "its", "any", "all", "each", "such", "very",
            "explain", "experience", "use", "used", "using",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }

    /// Generic job-posting vocabulary that never makes a useful keyword
    fn posting_filler_words() -> &'static [&'static str] {
        &[
            "job", "role", "responsibilities", "requirements", "candidate", "candidates",
            "apply", "application", "ability", "preferred", "plus", "minimum", "years",
            "year", "work", "working", "strong", "excellent", "knowledge", "understanding",
            "proficiency", "familiarity", "responsible", "including", "across", "within",
            "build", "building", "develop", "developing", "internship", "intern", "entry",
            "level", "looking", "seeking", "hiring", "need", "needed", "skills", "team",
            "join", "company", "opportunity", "required", "our", "your", "their", "who",
            "what", "will", "good", "great", "new", "other", "etc",
        ]
    }

    fn default_skill_hints() -> Vec<(String, Vec<String>)> {
        let table: &[(&str, &[&str])] = &[
            ("leadership", &["lead", "led", "manage", "managed", "mentor", "mentored", "ownership", "initiative"]),
            ("communication", &["communicate", "communication", "present", "presentation", "collaborate", "stakeholder"]),
            ("teamwork", &["team", "collaborate", "pair", "cross-functional", "support"]),
            ("sql", &["query", "queries", "join", "joins", "index", "indexes", "schema", "database"]),
            ("python", &["python", "pandas", "fastapi", "flask", "script", "automation"]),
            ("digital marketing", &["campaign", "ctr", "cpc", "conversion", "audience", "funnel"]),
            ("seo", &["keyword", "backlink", "ranking", "serp", "on-page", "organic"]),
            ("law", &["contract", "clause", "statute", "case law", "precedent", "due diligence"]),
            ("financial", &["forecast", "variance", "valuation", "model", "budget", "ledger"]),
            ("recruit", &["sourcing", "screening", "pipeline", "offer", "interview"]),
        ];

        table
            .iter()
            .map(|(skill, hints)| {
                (
                    skill.to_string(),
                    hints.iter().map(|h| h.to_string()).collect(),
                )
            })
            .collect()
    }

    fn default_aliases() -> HashMap<String, String> {
        [
            ("api", "API"), ("apis", "API"), ("aws", "AWS"), ("seo", "SEO"),
            ("sql", "SQL"), ("etl", "ETL"), ("ui", "UI"), ("ux", "UX"), ("hr", "HR"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_hits_follow_taxonomy_order() {
        let lexicon = Lexicon::new().unwrap();
        let hits = lexicon.taxonomy_hits("Strong sql and PYTHON, plus corporate law exposure");

        assert_eq!(hits, vec!["Python", "SQL", "Corporate Law"]);
    }

    #[test]
    fn test_overlapping_entries_are_all_reported() {
        let lexicon = Lexicon::new().unwrap();
        let hits = lexicon.taxonomy_hits("JavaScript developer");

        assert!(hits.contains(&"Java".to_string()));
        assert!(hits.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_extra_skills_appended_without_duplicates() {
        let lexicon = Lexicon::with_extra_skills(vec![
            "Rust".to_string(),
            "python".to_string(),
            "  ".to_string(),
        ])
        .unwrap();

        assert_eq!(lexicon.taxonomy().last().map(String::as_str), Some("Rust"));
        let pythons = lexicon.taxonomy().iter().filter(|s| s.eq_ignore_ascii_case("python")).count();
        assert_eq!(pythons, 1);
    }

    #[test]
    fn test_stop_word_sets() {
        let lexicon = Lexicon::new().unwrap();
        assert!(lexicon.is_stop_word("the"));
        assert!(!lexicon.is_stop_word("your"));
        assert!(lexicon.is_keyword_stop_word("your"));
        assert!(lexicon.is_keyword_stop_word("responsibilities"));
        assert!(!lexicon.is_keyword_stop_word("analyst"));
    }

    #[test]
    fn test_aliases() {
        let lexicon = Lexicon::new().unwrap();
        assert_eq!(lexicon.alias("apis"), Some("API"));
        assert_eq!(lexicon.alias("hr"), Some("HR"));
        assert_eq!(lexicon.alias("python"), None);
    }
}
