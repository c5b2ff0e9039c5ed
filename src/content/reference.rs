//! Structured resume reference built from a job posting

use crate::content::templates::{
    template_for, TemplateParams, EXPERIENCE_DURATION, INSTITUTE_PLACEHOLDER, YEAR_PLACEHOLDER,
};
use crate::processing::lexicon::Lexicon;
use crate::processing::quality::{BulletSection, BulletSource, ResumeBullet};
use crate::processing::role_classifier::{RoleClassifier, RoleFamily};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const NAME_PLACEHOLDER: &str = "Your Name";
const EMAIL_PLACEHOLDER: &str = "youremail@example.com";
const PHONE_PLACEHOLDER: &str = "+1 (000) 000-0000";
const LOCATION_PLACEHOLDER: &str = "Your City, ST";

const TECHNICAL_MARKERS: &[&str] = &[
    "python", "java", "react", "sql", "fastapi", "aws", "docker", "api", "etl",
    "excel", "tableau", "powerbi", "javascript", "typescript", "node", "flask",
    "django", "git", "kubernetes", "spark", "pandas", "numpy",
];
const CORE_MARKERS: &[&str] = &[
    "communication", "teamwork", "leadership", "stakeholder", "collaboration",
    "analytics", "problem", "ownership", "prioritization", "presentation",
];
const DEFAULT_CORE_SKILLS: &[&str] = &["Communication", "Collaboration", "Problem Solving"];
const MAX_TECHNICAL: usize = 10;
const MAX_CORE: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

impl ProfileLinks {
    /// A portfolio link that repeats the LinkedIn or GitHub link is dropped
    fn without_duplicate_portfolio(mut self) -> Self {
        if !self.portfolio.is_empty() && (self.portfolio == self.linkedin || self.portfolio == self.github) {
            self.portfolio.clear();
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroups {
    pub technical: Vec<String>,
    pub core: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub org: String,
    pub duration: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReference {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub headline: String,
    pub role_family: RoleFamily,
    pub summary: String,
    pub skills: Vec<String>,
    pub skills_grouped: SkillGroups,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub guidance_notes: Vec<String>,
}

impl ResumeReference {
    /// Insert bullets ahead of the first experience entry's bullets.
    /// No-op when there is no experience entry.
    pub fn prepend_experience_bullets(&mut self, bullets: &[String]) {
        if bullets.is_empty() {
            return;
        }
        if let Some(first) = self.experience.first_mut() {
            first.bullets.splice(0..0, bullets.iter().cloned());
        }
    }

    pub fn work_samples_label(&self) -> &'static str {
        template_for(self.role_family).work_samples_label
    }

    /// All five sections carry content
    pub fn has_complete_sections(&self) -> bool {
        !self.summary.is_empty()
            && !self.skills.is_empty()
            && !self.experience.is_empty()
            && !self.projects.is_empty()
            && !self.education.is_empty()
    }
}

impl BulletSource for ResumeReference {
    fn bullets(&self) -> Vec<ResumeBullet> {
        let experience = self.experience.iter().flat_map(|exp| {
            exp.bullets.iter().map(move |text| ResumeBullet {
                section: BulletSection::Experience,
                title: exp.role.clone(),
                text: text.clone(),
            })
        });
        let projects = self.projects.iter().flat_map(|project| {
            project.bullets.iter().map(move |text| ResumeBullet {
                section: BulletSection::Projects,
                title: project.title.clone(),
                text: text.clone(),
            })
        });

        experience.chain(projects).collect()
    }
}

pub struct ReferenceGenerator {
    text_processor: TextProcessor,
    role_classifier: RoleClassifier,
    url_regex: Regex,
    keyword_limit: usize,
}

impl ReferenceGenerator {
    pub fn new(lexicon: Arc<Lexicon>, keyword_limit: usize) -> Self {
        Self {
            text_processor: TextProcessor::new(lexicon),
            role_classifier: RoleClassifier::new(),
            url_regex: Regex::new(r#"(?i)https?://[^\s\])>,"']+"#).expect("Invalid URL regex"),
            keyword_limit,
        }
    }

    /// LinkedIn, GitHub and portfolio URLs found in free text
    pub fn extract_profile_links(&self, text: &str) -> ProfileLinks {
        let urls: Vec<&str> = self.url_regex.find_iter(text).map(|m| m.as_str()).collect();
        let first_with = |hint: &str| {
            urls.iter()
                .find(|url| url.to_lowercase().contains(hint))
                .map(|url| url.to_string())
                .unwrap_or_default()
        };

        ProfileLinks {
            linkedin: first_with("linkedin.com"),
            github: first_with("github.com"),
            portfolio: urls.first().map(|url| url.to_string()).unwrap_or_default(),
        }
        .without_duplicate_portfolio()
    }

    /// Build a fresh reference. Explicit `links` win over URLs found in `profile_text`.
    pub fn generate(&self, job_text: &str, profile_text: &str, links: &ProfileLinks) -> ResumeReference {
        let role_title = self.role_classifier.extract_role_title(job_text);
        let role_family = self.role_classifier.detect_role_family(job_text, &role_title);
        let keywords = self
            .text_processor
            .extract_role_keywords_or_default(job_text, self.keyword_limit);
        let buckets = bucket_skills(&keywords);

        let technical = if buckets.technical.is_empty() {
            keywords.iter().take(8).cloned().collect()
        } else {
            buckets.technical
        };
        let core = if buckets.core.is_empty() {
            DEFAULT_CORE_SKILLS.iter().map(|s| s.to_string()).collect()
        } else {
            buckets.core
        };

        let top_keywords: Vec<String> = keywords.iter().take(5).cloned().collect();
        let mut summary = format!(
            "{} profile with a track record of {}. Demonstrates alignment with target requirements in {}. \
             Builds outcomes-focused projects and communicates impact with clear, measurable results.",
            role_title,
            role_focus_sentence(&role_title),
            top_keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", "),
        );
        let background = profile_text.trim();
        if !background.is_empty() {
            summary.push_str(&format!(" Background context to incorporate: {}", background));
        }

        let template = template_for(role_family);
        let params = TemplateParams::new(&role_title, &technical, &core);

        let mut experience_bullets: Vec<String> =
            template.experience_bullets.iter().map(|b| params.render(b)).collect();
        if params.tech3.is_some() {
            experience_bullets.push(params.render(template.tech_bullet));
        }

        let projects = template
            .projects
            .iter()
            .map(|project| ProjectEntry {
                title: params.render(project.title),
                bullets: project.bullets.iter().map(|b| params.render(b)).collect(),
            })
            .collect();

        let guidance_notes = vec![
            "Replace placeholders with real achievements, including quantifiable metrics (%, time saved, revenue, accuracy, scale).".to_string(),
            format!("Prioritize bullets that mirror JD keywords: {}.", top_keywords.join(", ")),
            "Keep each bullet action-first and outcome-focused to maximize recruiter readability and ATS relevance.".to_string(),
        ];

        let links = self.resolve_links(profile_text, links);
        debug!(
            "reference: title={:?} family={} keywords={} technical={} core={}",
            role_title,
            role_family,
            keywords.len(),
            technical.len(),
            core.len()
        );

        ResumeReference {
            name: NAME_PLACEHOLDER.to_string(),
            email: EMAIL_PLACEHOLDER.to_string(),
            phone: PHONE_PLACEHOLDER.to_string(),
            location: LOCATION_PLACEHOLDER.to_string(),
            linkedin: links.linkedin,
            github: links.github,
            portfolio: links.portfolio,
            headline: role_title.clone(),
            role_family,
            summary,
            skills: keywords,
            skills_grouped: SkillGroups { technical, core },
            experience: vec![ExperienceEntry {
                role: params.render(template.experience_role),
                org: template.experience_org.to_string(),
                duration: EXPERIENCE_DURATION.to_string(),
                bullets: experience_bullets,
            }],
            projects,
            education: vec![EducationEntry {
                degree: template.degree.to_string(),
                institute: INSTITUTE_PLACEHOLDER.to_string(),
                year: YEAR_PLACEHOLDER.to_string(),
            }],
            guidance_notes,
        }
    }

    fn resolve_links(&self, profile_text: &str, explicit: &ProfileLinks) -> ProfileLinks {
        let detected = self.extract_profile_links(profile_text);
        let pick = |given: &str, found: String| {
            let given = given.trim();
            if given.is_empty() {
                found
            } else {
                given.to_string()
            }
        };

        ProfileLinks {
            linkedin: pick(&explicit.linkedin, detected.linkedin),
            github: pick(&explicit.github, detected.github),
            portfolio: pick(&explicit.portfolio, detected.portfolio),
        }
        .without_duplicate_portfolio()
    }
}

/// Split keywords into technical and core groups by marker substrings.
/// Terms matching neither group count as technical.
pub fn bucket_skills(keywords: &[String]) -> SkillGroups {
    let mut groups = SkillGroups::default();

    for skill in keywords {
        let lowered = skill.to_lowercase();
        let is_marked = |markers: &[&str]| markers.iter().any(|m| lowered.contains(m));

        if is_marked(TECHNICAL_MARKERS) || !is_marked(CORE_MARKERS) {
            groups.technical.push(skill.clone());
        } else {
            groups.core.push(skill.clone());
        }
    }

    groups.technical.truncate(MAX_TECHNICAL);
    groups.core.truncate(MAX_CORE);
    groups
}

fn role_focus_sentence(role_title: &str) -> &'static str {
    let lowered = role_title.to_lowercase();
    let has_word = |w: &str| lowered.split(|c: char| !c.is_alphanumeric()).any(|t| t == w);

    if lowered.contains("data") || lowered.contains("analyst") {
        "translating data into business decisions"
    } else if lowered.contains("marketing") || has_word("seo") {
        "driving measurable growth through campaign optimization"
    } else if lowered.contains("product") {
        "aligning product priorities with user and business outcomes"
    } else if lowered.contains("design") || has_word("ui") || has_word("ux") {
        "crafting user-centered experiences with clear usability outcomes"
    } else {
        "delivering reliable, scalable solutions in collaborative teams"
    }
}

/// Plain-text rendering in a fixed section order
pub fn format_resume_reference(reference: &ResumeReference) -> String {
    let mut lines: Vec<String> = vec![
        reference.name.clone(),
        reference.headline.clone(),
        String::new(),
        "CONTACT".to_string(),
        format!("{} | {} | {}", reference.email, reference.phone, reference.location),
        format!("{} | {} | {}", reference.linkedin, reference.github, reference.portfolio),
        String::new(),
        "SUMMARY".to_string(),
        reference.summary.clone(),
        String::new(),
        "SKILLS".to_string(),
    ];

    let groups = &reference.skills_grouped;
    if !groups.technical.is_empty() {
        lines.push(format!("Technical: {}", groups.technical.join(", ")));
    }
    if !groups.core.is_empty() {
        lines.push(format!("Core: {}", groups.core.join(", ")));
    }
    if groups.technical.is_empty() && groups.core.is_empty() {
        lines.push(reference.skills.join(", "));
    }

    lines.push(String::new());
    lines.push("EXPERIENCE".to_string());
    for exp in &reference.experience {
        lines.push(format!("{} - {} ({})", exp.role, exp.org, exp.duration));
        lines.extend(exp.bullets.iter().map(|b| format!("- {}", b)));
        lines.push(String::new());
    }

    lines.push(reference.work_samples_label().to_string());
    for project in &reference.projects {
        lines.push(project.title.clone());
        lines.extend(project.bullets.iter().map(|b| format!("- {}", b)));
        lines.push(String::new());
    }

    lines.push("EDUCATION".to_string());
    for edu in &reference.education {
        lines.push(format!("{} - {} ({})", edu.degree, edu.institute, edu.year));
    }

    lines.join("\n").trim().to_string()
}
