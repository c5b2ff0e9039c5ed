//! Improvement suggestions, learning roadmap, interview questions,
//! 30/60/90-day gap plan and role-targeted resume variants

use crate::content::reference::ResumeReference;
use crate::processing::role_classifier::RoleFamily;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MAX_GAP_PRIORITIES: usize = 6;
const DEFAULT_GAP_PRIORITIES: &[&str] = &[
    "Advanced system design",
    "Interview storytelling",
    "Portfolio evidence packaging",
];

/// One scenario question per family, asked after the skill questions
const SCENARIO_QUESTIONS: &[(RoleFamily, &str)] = &[
    (RoleFamily::Legal, "Walk me through how you would research and summarize a legal issue for a supervising attorney."),
    (RoleFamily::Finance, "How would you explain a large budget variance to a non-finance manager?"),
    (RoleFamily::Marketing, "Describe a campaign you would run for this role and how you would measure its success."),
    (RoleFamily::Hr, "How would you improve the candidate experience in a high-volume hiring pipeline?"),
    (RoleFamily::Data, "Tell me about a time your analysis changed a business decision."),
    (RoleFamily::Software, "Describe a system you built and the tradeoffs you made in its design."),
    (RoleFamily::Operations, "How would you find and remove the bottleneck in a recurring process?"),
];
const GENERAL_SCENARIO_QUESTION: &str = "Describe a project where you turned an ambiguous goal into a measurable result.";

struct VariantTrack {
    name: &'static str,
    focus: &'static [&'static str],
    role: &'static str,
}

const VARIANT_TRACKS: &[VariantTrack] = &[
    VariantTrack {
        name: "Backend Variant",
        focus: &["Python", "FastAPI", "SQL", "API", "AWS"],
        role: "Backend Engineer",
    },
    VariantTrack {
        name: "Data Variant",
        focus: &["Python", "SQL", "Analytics", "Dashboard", "ETL"],
        role: "Data Analyst",
    },
    VariantTrack {
        name: "Product Variant",
        focus: &["Communication", "Stakeholder", "Ownership", "Prioritization"],
        role: "Product Associate",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasePlan {
    #[serde(rename = "30_days")]
    pub days_30: Vec<String>,
    #[serde(rename = "60_days")]
    pub days_60: Vec<String>,
    #[serde(rename = "90_days")]
    pub days_90: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAutopilotPlan {
    pub missing_priorities: Vec<String>,
    pub plan_30_60_90: PhasePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleVariant {
    pub variant_name: String,
    pub headline: String,
    pub summary: String,
    pub skills_focus: Vec<String>,
}

pub fn generate_improvement_suggestions(missing: &[String], role_title: &str) -> Vec<String> {
    if missing.is_empty() {
        return vec!["Your resume matches the job requirements well.".to_string()];
    }

    missing
        .iter()
        .map(|skill| format!("Add concrete evidence of {} to your resume for the {} role.", skill, role_title))
        .collect()
}

pub fn generate_career_roadmap(missing: &[String], role_title: &str) -> Vec<String> {
    if missing.is_empty() {
        return vec!["Build advanced projects and prepare for interviews.".to_string()];
    }

    missing
        .iter()
        .flat_map(|skill| {
            [
                format!("Learn {}", skill),
                format!("Build a {} project using {}", role_title, skill),
            ]
        })
        .collect()
}

/// Skill questions for the first three skills, then one family scenario question
pub fn generate_interview_questions(skills: &[String], family: RoleFamily) -> Vec<String> {
    let mut questions: Vec<String> = skills
        .iter()
        .take(3)
        .map(|skill| format!("Explain your experience with {}.", skill))
        .collect();

    if questions.is_empty() {
        questions.push("Tell me about yourself.".to_string());
    }
    questions.push(scenario_question(family).to_string());
    questions
}

fn scenario_question(family: RoleFamily) -> &'static str {
    SCENARIO_QUESTIONS
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, question)| *question)
        .unwrap_or(GENERAL_SCENARIO_QUESTION)
}

/// Job keywords the reference does not list, mapped onto a 30/60/90-day plan
pub fn generate_gap_autopilot_plan(job_keywords: &[String], reference: &ResumeReference) -> GapAutopilotPlan {
    let current: HashSet<String> = reference.skills.iter().map(|s| s.to_lowercase()).collect();
    let mut missing: Vec<String> = job_keywords
        .iter()
        .filter(|k| !current.contains(&k.to_lowercase()))
        .take(MAX_GAP_PRIORITIES)
        .cloned()
        .collect();

    if missing.is_empty() {
        missing = DEFAULT_GAP_PRIORITIES.iter().map(|s| s.to_string()).collect();
    }

    let first = &missing[0];
    let second = missing.get(1).unwrap_or(first);
    let third = missing.get(2).unwrap_or(first);

    let plan = PhasePlan {
        days_30: vec![
            format!("Complete focused learning sprint on {}.", first),
            format!("Ship one mini project using {} and document outcomes.", first),
        ],
        days_60: vec![
            format!("Add production-style project depth with {}.", second),
            "Improve resume bullets with quantified impact and proof links.".to_string(),
        ],
        days_90: vec![
            format!("Deliver showcase project integrating {} with measurable KPI gains.", third),
            "Run mock interviews and refine role-specific resume variants.".to_string(),
        ],
    };

    GapAutopilotPlan {
        missing_priorities: missing,
        plan_30_60_90: plan,
    }
}

/// Three fixed tracks re-targeting the reference headline and summary
pub fn generate_role_variants(reference: &ResumeReference, role_title: &str) -> Vec<RoleVariant> {
    let technical = &reference.skills_grouped.technical;

    VARIANT_TRACKS
        .iter()
        .map(|track| {
            let focus: HashSet<String> = track.focus.iter().map(|f| f.to_lowercase()).collect();
            let mut focused: Vec<String> = technical
                .iter()
                .filter(|s| focus.contains(&s.to_lowercase()))
                .cloned()
                .collect();
            if focused.is_empty() {
                focused = track.focus.iter().take(4).map(|s| s.to_string()).collect();
            }

            RoleVariant {
                variant_name: track.name.to_string(),
                headline: format!("{} Candidate ({} alignment)", track.role, role_title),
                summary: format!(
                    "{} This variant emphasizes {} for {} opportunities.",
                    reference.summary,
                    focused.iter().take(3).cloned().collect::<Vec<_>>().join(", "),
                    track.role.to_lowercase()
                ),
                skills_focus: focused.into_iter().take(6).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reference::{ProfileLinks, ReferenceGenerator};
    use crate::processing::lexicon::Lexicon;
    use std::sync::Arc;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn reference(job: &str) -> ResumeReference {
        ReferenceGenerator::new(Arc::new(Lexicon::new().unwrap()), 14).generate(job, "", &ProfileLinks::default())
    }

    #[test]
    fn test_suggestions_and_roadmap() {
        let missing = strings(&["Tableau"]);
        assert_eq!(
            generate_improvement_suggestions(&missing, "Data Analyst"),
            vec!["Add concrete evidence of Tableau to your resume for the Data Analyst role."]
        );
        assert_eq!(
            generate_career_roadmap(&missing, "Data Analyst"),
            vec!["Learn Tableau", "Build a Data Analyst project using Tableau"]
        );
    }

    #[test]
    fn test_no_gap_fallbacks() {
        assert_eq!(
            generate_improvement_suggestions(&[], "Any"),
            vec!["Your resume matches the job requirements well."]
        );
        assert_eq!(
            generate_career_roadmap(&[], "Any"),
            vec!["Build advanced projects and prepare for interviews."]
        );
    }

    #[test]
    fn test_interview_questions() {
        let questions = generate_interview_questions(&strings(&["SQL", "Python", "Tableau", "Excel"]), RoleFamily::Data);
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0], "Explain your experience with SQL.");
        assert_eq!(questions[3], scenario_question(RoleFamily::Data));

        let questions = generate_interview_questions(&[], RoleFamily::General);
        assert_eq!(questions, vec!["Tell me about yourself.", GENERAL_SCENARIO_QUESTION]);
    }

    #[test]
    fn test_gap_plan_defaults_when_nothing_missing() {
        let reference = reference("Looking for a Data Analyst with SQL and Python skills");
        let plan = generate_gap_autopilot_plan(&reference.skills.clone(), &reference);

        assert_eq!(plan.missing_priorities, strings(DEFAULT_GAP_PRIORITIES));
        assert_eq!(
            plan.plan_30_60_90.days_90[0],
            "Deliver showcase project integrating Portfolio evidence packaging with measurable KPI gains."
        );
    }

    #[test]
    fn test_gap_plan_repeats_first_item() {
        let reference = reference("Looking for a Data Analyst with SQL and Python skills");
        let plan = generate_gap_autopilot_plan(&strings(&["Python", "Tableau"]), &reference);

        assert_eq!(plan.missing_priorities, strings(&["Tableau"]));
        assert_eq!(plan.plan_30_60_90.days_60[0], "Add production-style project depth with Tableau.");
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json["plan_30_60_90"]["30_days"].is_array());
    }

    #[test]
    fn test_role_variants() {
        let reference = reference("Looking for a Data Analyst with SQL and Python skills");
        let variants = generate_role_variants(&reference, "Data Analyst");

        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0].variant_name, "Backend Variant");
        assert_eq!(variants[0].skills_focus, strings(&["Python", "SQL"]));
        assert_eq!(variants[0].headline, "Backend Engineer Candidate (Data Analyst alignment)");
        assert!(variants[0].summary.ends_with("This variant emphasizes Python, SQL for backend engineer opportunities."));
        assert_eq!(
            variants[2].skills_focus,
            strings(&["Communication", "Stakeholder", "Ownership", "Prioritization"])
        );
    }
}
