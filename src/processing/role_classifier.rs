//! Role title extraction and coarse role-family classification

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const FALLBACK_ROLE_TITLE: &str = "Target Role Candidate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleFamily {
    Legal,
    Finance,
    Marketing,
    Hr,
    Data,
    Software,
    Operations,
    General,
}

impl RoleFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFamily::Legal => "legal",
            RoleFamily::Finance => "finance",
            RoleFamily::Marketing => "marketing",
            RoleFamily::Hr => "hr",
            RoleFamily::Data => "data",
            RoleFamily::Software => "software",
            RoleFamily::Operations => "operations",
            RoleFamily::General => "general",
        }
    }
}

impl std::fmt::Display for RoleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Families in detection priority order with the phrases that select them
const FAMILY_KEYWORDS: &[(RoleFamily, &[&str])] = &[
    (RoleFamily::Legal, &[
        "lawyer", "attorney", "paralegal", "litigation", "corporate law", "counsel",
        "contract drafting", "legal research", "legal associate", "legal analyst",
        "llb", "law firm",
    ]),
    (RoleFamily::Finance, &[
        "finance", "financial", "accounting", "accountant", "audit", "investment",
        "banking", "valuation", "budget", "cpa", "ledger",
    ]),
    (RoleFamily::Marketing, &[
        "marketing", "seo", "campaign", "brand", "social media", "content strategy",
    ]),
    (RoleFamily::Hr, &[
        "human resources", "recruiter", "recruiting", "recruitment", "talent acquisition",
        "people operations", "hr generalist", "hr manager", "hr executive", "onboarding",
        "payroll",
    ]),
    (RoleFamily::Data, &[
        "data analyst", "data scientist", "data science", "data engineer", "data analysis",
        "analytics", "machine learning", "tableau", "power bi", "statistics", "sql",
    ]),
    (RoleFamily::Software, &[
        "software", "developer", "engineer", "programming", "backend", "frontend",
        "full stack", "devops", "python", "java", "react", "api", "cloud",
    ]),
    (RoleFamily::Operations, &[
        "operations", "supply chain", "logistics", "procurement", "inventory",
        "vendor management", "process improvement",
    ]),
];

/// Known titles checked against the posting in list order
const KNOWN_TITLES: &[&str] = &[
    "machine learning engineer", "backend engineer", "frontend engineer",
    "full stack developer", "devops engineer", "cloud engineer", "qa engineer",
    "software engineer", "data analyst", "data scientist", "business analyst",
    "product manager", "ui ux designer", "cybersecurity analyst",
    "digital marketing specialist", "seo specialist", "marketing manager",
    "legal associate", "corporate lawyer", "paralegal", "financial analyst",
    "accountant", "hr generalist", "talent acquisition specialist",
    "operations manager", "supply chain analyst",
];

/// Words kept uppercase when a title is title-cased
const TITLE_ACRONYMS: &[&str] = &["hr", "seo", "ui", "ux", "qa", "api", "aws", "sql", "etl"];

/// Leading words that show a hiring phrase did not capture a title
const NON_TITLE_WORDS: &[&str] = &[
    "to", "someone", "somebody", "you", "people", "candidates", "candidate",
    "individuals", "applicants", "help", "more", "of", "our", "your", "their",
    "this", "these", "across", "strong",
];

/// Connectives left lowercase inside a title-cased phrase
const TITLE_CONNECTIVES: &[&str] = &["and", "of", "for", "the"];

const MAX_TITLE_WORDS: usize = 6;

pub struct RoleClassifier {
    hiring_regex: Regex,
    label_regex: Regex,
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleClassifier {
    pub fn new() -> Self {
        let hiring_regex = Regex::new(
            r"(?i)\b(?:hiring\s+for|looking\s+for|seeking|needed|need)\s+(?:an?\s+|the\s+)?([a-z][a-z0-9/&+\-]*(?:[ \t]+[a-z0-9/&+\-]+)*?)(?:[ \t]+(?:with|who|to|for|in|at|that|having|on|from|based|will|must|able)\b|[.,;:!?()\n\r]|$)",
        )
        .expect("Invalid hiring phrase regex");

        let label_regex = Regex::new(r"(?im)\b(?:job\s*title|title|position|role)\s*:\s*([^\n\r,|]+)")
            .expect("Invalid title label regex");

        Self {
            hiring_regex,
            label_regex,
        }
    }

    /// Infer a human-readable role title; the first rule that yields one wins
    pub fn extract_role_title(&self, job_text: &str) -> String {
        if let Some(title) = self.title_from_hiring_phrase(job_text) {
            debug!("role title from hiring phrase: {}", title);
            return title;
        }

        if let Some(title) = self.title_from_label(job_text) {
            debug!("role title from explicit label: {}", title);
            return title;
        }

        let lowered = job_text.to_lowercase();
        if let Some(hint) = KNOWN_TITLES.iter().find(|hint| lowered.contains(*hint)) {
            debug!("role title from known title list: {}", hint);
            return title_case(hint);
        }

        if let Some(line) = first_nonempty_line(job_text) {
            debug!("role title from first line");
            return line;
        }

        FALLBACK_ROLE_TITLE.to_string()
    }

    /// Coarse family for the posting; `General` when no bucket matches
    pub fn detect_role_family(&self, job_text: &str, title: &str) -> RoleFamily {
        let haystack = format!("{} {}", job_text, title).to_lowercase();

        FAMILY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
            .map(|(family, _)| *family)
            .unwrap_or(RoleFamily::General)
    }

    fn title_from_hiring_phrase(&self, job_text: &str) -> Option<String> {
        self.hiring_regex
            .captures_iter(job_text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|phrase| is_plausible_title(phrase))
            .map(title_case)
    }

    fn title_from_label(&self, job_text: &str) -> Option<String> {
        self.label_regex
            .captures(job_text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
    }
}

fn is_plausible_title(phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    match words.first() {
        Some(first) => {
            words.len() <= MAX_TITLE_WORDS
                && phrase.chars().count() >= 3
                && !NON_TITLE_WORDS.contains(&first.to_lowercase().as_str())
        }
        None => false,
    }
}

/// Title-case each word, keeping known acronyms uppercase
pub fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .enumerate()
        .map(|(idx, word)| {
            let lowered = word.to_lowercase();
            if idx > 0 && TITLE_CONNECTIVES.contains(&lowered.as_str()) {
                lowered
            } else if TITLE_ACRONYMS.contains(&lowered.as_str()) {
                lowered.to_uppercase()
            } else {
                crate::processing::text_processor::capitalize(&lowered)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_nonempty_line(text: &str) -> Option<String> {
    const MARKUP: &[char] = &[' ', '\t', '-', '*', '•', '#', '>', '|', ':'];

    text.lines()
        .map(|line| line.trim_matches(MARKUP))
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiring_phrase_title_and_family() {
        let classifier = RoleClassifier::new();
        let text = "Looking for a Data Analyst with SQL and Python skills";

        let title = classifier.extract_role_title(text);
        assert_eq!(title, "Data Analyst");
        assert_eq!(classifier.detect_role_family(text, &title), RoleFamily::Data);
    }

    #[test]
    fn test_hiring_phrase_skips_non_titles() {
        let classifier = RoleClassifier::new();
        let text = "You will need to draft memos.\nWe are seeking a Paralegal to support litigation.";

        assert_eq!(classifier.extract_role_title(text), "Paralegal");
    }

    #[test]
    fn test_explicit_label() {
        let classifier = RoleClassifier::new();
        let text = "Acme Corp\nPosition: Junior Tax Associate, Remote\nDuties include filings.";

        assert_eq!(classifier.extract_role_title(text), "Junior Tax Associate");
    }

    #[test]
    fn test_known_title_list() {
        let classifier = RoleClassifier::new();
        let text = "Our platform group wants an experienced hr generalist for onboarding.";

        assert_eq!(classifier.extract_role_title(text), "HR Generalist");
    }

    #[test]
    fn test_first_line_fallback() {
        let classifier = RoleClassifier::new();
        let text = "\n  ## Growth Associate ##\nRun experiments weekly.";

        assert_eq!(classifier.extract_role_title(text), "Growth Associate");
    }

    #[test]
    fn test_blank_text_fallback() {
        let classifier = RoleClassifier::new();
        assert_eq!(classifier.extract_role_title("   \n\t"), FALLBACK_ROLE_TITLE);
        assert_eq!(classifier.detect_role_family("", FALLBACK_ROLE_TITLE), RoleFamily::General);
    }

    #[test]
    fn test_family_priority_order() {
        let classifier = RoleClassifier::new();
        // legal outranks software even though "engineer" is present
        let family = classifier.detect_role_family("Legal engineer drafting with counsel", "Legal Engineer");
        assert_eq!(family, RoleFamily::Legal);

        let family = classifier.detect_role_family("Maintain the general ledger", "Accountant");
        assert_eq!(family, RoleFamily::Finance);

        let family = classifier.detect_role_family("Own procurement and inventory", "Coordinator");
        assert_eq!(family, RoleFamily::Operations);
    }

    #[test]
    fn test_title_case_keeps_acronyms() {
        assert_eq!(title_case("ui ux designer"), "UI UX Designer");
        assert_eq!(title_case("seo specialist"), "SEO Specialist");
        assert_eq!(title_case("head of people and culture"), "Head of People and Culture");
    }

    #[test]
    fn test_label_wins_over_posting_prose() {
        let classifier = RoleClassifier::new();

        assert_eq!(
            classifier.extract_role_title("Title: Data Engineer\nWe are hiring across teams."),
            "Data Engineer"
        );
        assert_eq!(
            classifier.extract_role_title("Position: Data Engineer\nThis role needs strong SQL skills."),
            "Data Engineer"
        );
        assert_eq!(
            classifier.extract_role_title("Role: Staff Accountant\nThe team needs of our clients come first."),
            "Staff Accountant"
        );
    }

    #[test]
    fn test_hiring_phrase_requires_explicit_trigger() {
        let classifier = RoleClassifier::new();

        assert_eq!(classifier.extract_role_title("We are hiring for a Backend Engineer."), "Backend Engineer");
        assert_eq!(
            classifier.extract_role_title("Urgently need a Payroll Specialist with ADP experience"),
            "Payroll Specialist"
        );
        // a determiner after the trigger never starts a title
        assert_eq!(
            classifier.extract_role_title("Title: Buyer\nWe need our vendors paid on time."),
            "Buyer"
        );
    }

    #[test]
    fn test_hiring_phrase_keeps_conjoined_titles() {
        let classifier = RoleClassifier::new();

        assert_eq!(
            classifier.extract_role_title("Looking for a Sales and Marketing Manager"),
            "Sales and Marketing Manager"
        );
        assert_eq!(
            classifier.extract_role_title("Seeking a Head of Data and Analytics to lead reporting"),
            "Head of Data and Analytics"
        );
    }

    #[test]
    fn test_role_family_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RoleFamily::Hr).unwrap(), "\"hr\"");
        assert_eq!(RoleFamily::Operations.to_string(), "operations");
    }
}
