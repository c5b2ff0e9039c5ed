//! Per-family resume templates
//!
//! Families without a bespoke entry share [`GENERIC_TEMPLATE`], which is
//! parameterized by the top technical skills. Adding a family means adding
//! a row to `FAMILY_TEMPLATES`.
//!
//! Placeholders: `{title}`, `{title_lower}`, `{tech1}`, `{tech2}`, `{tech3}`, `{core}`.

use crate::processing::role_classifier::RoleFamily;

#[derive(Debug)]
pub struct ProjectTemplate {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug)]
pub struct FamilyTemplate {
    pub experience_role: &'static str,
    pub experience_org: &'static str,
    pub experience_bullets: &'static [&'static str],
    /// Appended only when a third technical skill exists
    pub tech_bullet: &'static str,
    pub projects: &'static [ProjectTemplate],
    pub degree: &'static str,
    /// Heading for the projects section in the rendered text
    pub work_samples_label: &'static str,
}

pub const EXPERIENCE_DURATION: &str = "MM/YYYY - Present";
pub const INSTITUTE_PLACEHOLDER: &str = "Your University";
pub const YEAR_PLACEHOLDER: &str = "Expected YYYY";

pub const GENERIC_TEMPLATE: FamilyTemplate = FamilyTemplate {
    experience_role: "{title} Intern / Project Contributor",
    experience_org: "Company / Lab / Student Organization",
    experience_bullets: &[
        "Executed {title_lower} responsibilities using {tech1} and {tech2} to deliver scoped milestones on schedule.",
        "Converted ambiguous requirements into implementation plans, prioritized deliverables, and maintained quality through testing and peer review.",
        "Communicated progress, risks, and tradeoffs with stakeholders, improving delivery predictability and team alignment.",
    ],
    tech_bullet: "Used {tech3} to improve performance, reliability, or reporting quality and document repeatable best practices.",
    projects: &[
        ProjectTemplate {
            title: "{title} Capstone Project",
            bullets: &[
                "Built an end-to-end solution aligned to JD priorities, integrating {tech1} and {tech2}.",
                "Defined success metrics early, then iterated on architecture and implementation to improve measurable outcomes.",
                "Presented project decisions, business impact, and next-step roadmap in recruiter-friendly case-study format.",
            ],
        },
        ProjectTemplate {
            title: "Automation and Impact Tracking Project",
            bullets: &[
                "Automated repetitive workflows to reduce manual effort and improve turnaround time for recurring tasks.",
                "Implemented dashboards or reporting views to track quality, adoption, and performance trends.",
                "Applied core skills in {core} to collaborate across functions and close delivery gaps.",
            ],
        },
    ],
    degree: "B.S. / B.Tech in Relevant Discipline",
    work_samples_label: "PROJECTS",
};

const LEGAL_TEMPLATE: FamilyTemplate = FamilyTemplate {
    experience_role: "{title} / Legal Intern",
    experience_org: "Law Firm / Legal Aid Clinic / Corporate Legal Team",
    experience_bullets: &[
        "Researched {tech1} and {tech2} questions, summarizing statutes and case law into concise memos for supervising attorneys.",
        "Drafted and reviewed contracts, clauses, and correspondence, flagging risk items and tracking revisions through sign-off.",
        "Maintained matter files, deadlines, and due-diligence checklists so filings stayed accurate and on schedule.",
    ],
    tech_bullet: "Applied {tech3} knowledge to compliance reviews and documented repeatable research workflows.",
    projects: &[
        ProjectTemplate {
            title: "{title} Case Analysis",
            bullets: &[
                "Analyzed a fact pattern, identified controlling precedent, and built arguments for both sides.",
                "Prepared a written brief and oral submission, then refined reasoning based on reviewer feedback.",
                "Summarized the outcome and open risks in a structured case note.",
            ],
        },
        ProjectTemplate {
            title: "Contract Review Playbook",
            bullets: &[
                "Built a clause checklist covering indemnity, termination, confidentiality, and liability caps.",
                "Reviewed sample agreements against the checklist and documented negotiation positions.",
                "Applied {core} to explain legal risk in plain language to non-lawyer stakeholders.",
            ],
        },
    ],
    degree: "LL.B. / J.D. or Pre-Law Degree",
    work_samples_label: "CASEWORK",
};

const FINANCE_TEMPLATE: FamilyTemplate = FamilyTemplate {
    experience_role: "{title} Intern / Finance Analyst",
    experience_org: "Finance Team / Investment Firm / Student Fund",
    experience_bullets: &[
        "Built financial models and variance analyses using {tech1} and {tech2} to support budgeting and forecasting decisions.",
        "Reconciled ledgers and reporting data, resolving discrepancies ahead of month-end close.",
        "Presented cost drivers and performance trends to managers with clear, prioritized recommendations.",
    ],
    tech_bullet: "Used {tech3} to automate recurring reports and improve the accuracy of financial statements.",
    projects: &[
        ProjectTemplate {
            title: "{title} Valuation Case Study",
            bullets: &[
                "Built a discounted cash flow model from public filings and stress-tested key assumptions.",
                "Compared the result against trading comparables and documented the valuation range.",
                "Presented the investment thesis and downside risks in a one-page memo.",
            ],
        },
        ProjectTemplate {
            title: "Budget Forecasting Model",
            bullets: &[
                "Designed a rolling forecast that reduced manual spreadsheet consolidation each month.",
                "Tracked budget-versus-actual variance and flagged overspend early for follow-up.",
                "Applied {core} to walk non-finance stakeholders through the numbers.",
            ],
        },
    ],
    degree: "B.Com / B.S. in Finance, Accounting, or Economics",
    work_samples_label: "ANALYSES",
};

const MARKETING_TEMPLATE: FamilyTemplate = FamilyTemplate {
    experience_role: "{title} Intern / Marketing Associate",
    experience_org: "Marketing Team / Agency / Student Brand",
    experience_bullets: &[
        "Planned and executed campaigns using {tech1} and {tech2}, tracking reach, CTR, and conversion against targets.",
        "Produced content calendars and copy tailored to audience segments across channels.",
        "Reviewed campaign performance weekly and shared optimization recommendations with the team.",
    ],
    tech_bullet: "Used {tech3} to improve organic visibility and documented repeatable campaign playbooks.",
    projects: &[
        ProjectTemplate {
            title: "{title} Campaign Launch",
            bullets: &[
                "Designed a multi-channel launch plan with audience personas, messaging, and budget split.",
                "Ran A/B tests on creatives and landing pages to improve conversion.",
                "Reported results and learnings in a campaign retrospective for stakeholders.",
            ],
        },
        ProjectTemplate {
            title: "SEO and Content Audit",
            bullets: &[
                "Audited site pages for keyword gaps, broken links, and on-page issues.",
                "Prioritized fixes by traffic potential and tracked ranking changes over time.",
                "Applied {core} to align writers and designers on a shared content plan.",
            ],
        },
    ],
    degree: "BBA / B.A. in Marketing, Communications, or Business",
    work_samples_label: "CAMPAIGNS",
};

const HR_TEMPLATE: FamilyTemplate = FamilyTemplate {
    experience_role: "{title} Intern / People Operations Associate",
    experience_org: "HR Team / Talent Acquisition Function",
    experience_bullets: &[
        "Supported end-to-end hiring using {tech1} and {tech2}, from sourcing and screening to interview scheduling and offers.",
        "Coordinated onboarding for new hires, preparing documentation and first-week plans to shorten ramp-up time.",
        "Maintained employee records and HR trackers with attention to accuracy and confidentiality.",
    ],
    tech_bullet: "Applied {tech3} practices to improve candidate experience and documented repeatable hiring workflows.",
    projects: &[
        ProjectTemplate {
            title: "Hiring Pipeline Improvement Initiative",
            bullets: &[
                "Mapped each hiring stage and measured time-to-fill and drop-off between stages.",
                "Introduced structured interview scorecards to make candidate evaluation consistent.",
                "Shared pipeline insights with hiring managers in a weekly summary.",
            ],
        },
        ProjectTemplate {
            title: "Employee Engagement Pulse Survey",
            bullets: &[
                "Designed a short engagement survey and ran it across teams.",
                "Analyzed responses to surface retention risks and recurring concerns.",
                "Applied {core} to present findings and agree follow-up actions with leadership.",
            ],
        },
    ],
    degree: "BBA / B.A. in Human Resources, Psychology, or Business",
    work_samples_label: "PEOPLE INITIATIVES",
};

const OPERATIONS_TEMPLATE: FamilyTemplate = FamilyTemplate {
    experience_role: "{title} Intern / Operations Associate",
    experience_org: "Operations Team / Supply Chain Function",
    experience_bullets: &[
        "Streamlined workflows using {tech1} and {tech2}, mapping bottlenecks and implementing process fixes.",
        "Tracked inventory, vendor, and fulfillment metrics to keep service levels on target.",
        "Coordinated with cross-functional teams to resolve escalations and keep delivery timelines predictable.",
    ],
    tech_bullet: "Applied {tech3} to improve reporting quality and documented standard operating procedures.",
    projects: &[
        ProjectTemplate {
            title: "Process Improvement Sprint",
            bullets: &[
                "Mapped a recurring process end to end and identified waste and handoff delays.",
                "Implemented a leaner workflow and measured cycle time before and after the change.",
                "Documented the new procedure so other teams could adopt it.",
            ],
        },
        ProjectTemplate {
            title: "Vendor and Inventory Tracker",
            bullets: &[
                "Built a tracker for vendor lead times, stock levels, and reorder points.",
                "Flagged low-stock and late-delivery risks ahead of time for the purchasing team.",
                "Applied {core} to coordinate vendors and internal teams on corrective actions.",
            ],
        },
    ],
    degree: "BBA / B.S. in Operations, Supply Chain, or Industrial Engineering",
    work_samples_label: "PROCESS IMPROVEMENTS",
};

const FAMILY_TEMPLATES: &[(RoleFamily, &FamilyTemplate)] = &[
    (RoleFamily::Legal, &LEGAL_TEMPLATE),
    (RoleFamily::Finance, &FINANCE_TEMPLATE),
    (RoleFamily::Marketing, &MARKETING_TEMPLATE),
    (RoleFamily::Hr, &HR_TEMPLATE),
    (RoleFamily::Operations, &OPERATIONS_TEMPLATE),
];

pub fn template_for(family: RoleFamily) -> &'static FamilyTemplate {
    FAMILY_TEMPLATES
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, template)| *template)
        .unwrap_or(&GENERIC_TEMPLATE)
}

/// Values substituted into template placeholders
#[derive(Debug, Clone)]
pub struct TemplateParams {
    pub title: String,
    pub tech1: String,
    pub tech2: String,
    pub tech3: Option<String>,
    pub core: String,
}

impl TemplateParams {
    /// `technical` and `core` must be the already-defaulted, non-empty skill buckets
    pub fn new(title: &str, technical: &[String], core: &[String]) -> Self {
        let tech1 = technical.first().cloned().unwrap_or_default();
        let tech2 = technical.get(1).cloned().unwrap_or_else(|| tech1.clone());

        Self {
            title: title.to_string(),
            tech1,
            tech2,
            tech3: technical.get(2).cloned(),
            core: core.iter().take(2).cloned().collect::<Vec<_>>().join(", "),
        }
    }

    pub fn render(&self, template: &str) -> String {
        template
            .replace("{title_lower}", &self.title.to_lowercase())
            .replace("{title}", &self.title)
            .replace("{tech1}", &self.tech1)
            .replace("{tech2}", &self.tech2)
            .replace("{tech3}", self.tech3.as_deref().unwrap_or(&self.tech1))
            .replace("{core}", &self.core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bespoke_and_shared_templates() {
        assert_eq!(template_for(RoleFamily::Legal).work_samples_label, "CASEWORK");
        assert_eq!(template_for(RoleFamily::Finance).work_samples_label, "ANALYSES");
        assert_eq!(template_for(RoleFamily::Hr).work_samples_label, "PEOPLE INITIATIVES");
        for family in [RoleFamily::Data, RoleFamily::Software, RoleFamily::General] {
            assert_eq!(template_for(family).work_samples_label, "PROJECTS");
            assert_eq!(template_for(family).degree, GENERIC_TEMPLATE.degree);
        }
    }

    #[test]
    fn test_render_placeholders() {
        let params = TemplateParams::new(
            "Data Analyst",
            &strings(&["SQL"]),
            &strings(&["Communication", "Teamwork", "Leadership"]),
        );

        assert_eq!(params.tech2, "SQL");
        assert!(params.tech3.is_none());
        assert_eq!(
            params.render(GENERIC_TEMPLATE.experience_bullets[0]),
            "Executed data analyst responsibilities using SQL and SQL to deliver scoped milestones on schedule."
        );
        assert_eq!(
            params.render("Applied core skills in {core}."),
            "Applied core skills in Communication, Teamwork."
        );
    }

    #[test]
    fn test_every_template_has_two_projects() {
        for family in [
            RoleFamily::Legal,
            RoleFamily::Finance,
            RoleFamily::Marketing,
            RoleFamily::Hr,
            RoleFamily::Operations,
            RoleFamily::General,
        ] {
            let template = template_for(family);
            assert_eq!(template.projects.len(), 2);
            assert!(template.experience_bullets.len() >= 3);
        }
    }
}
