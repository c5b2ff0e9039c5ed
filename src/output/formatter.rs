//! Console, JSON and Markdown rendering of reports

use crate::config::OutputFormat;
use crate::content::reference::ProfileLinks;
use crate::error::{Result, ResumeIntelError};
use crate::output::report::{Report, ReportBody};
use crate::processing::analyzer::{IntelligenceReport, MatchReport};
use crate::processing::match_engine::HireabilityStatus;
use crate::processing::quality::{AnswerScore, BulletRating};
use crate::review::simulation::Verdict;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let (badge, color) = match score {
            s if s >= 85 => ("EXCELLENT", Color::Green),
            65..=84 => ("GOOD", Color::BrightGreen),
            45..=64 => ("FAIR", Color::Yellow),
            _ => ("LOW", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn push_list(&self, output: &mut String, items: &[String], color: Color) {
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }

    fn format_match(&self, report: &MatchReport, output: &mut String) {
        if let Some(title) = &report.role_title {
            let family = report.role_family.map(|f| f.to_string()).unwrap_or_default();
            output.push_str(&format!("Role: {} ({})\n", title, family));
        }
        output.push_str(&format!(
            "Match Score: {}% {}\n",
            report.match_score,
            self.format_score_badge(report.match_score)
        ));
        output.push_str(&format!(
            "{} (confidence {:.2})\n",
            report.match_explanation, report.confidence
        ));

        let status_color = match report.hireability_status {
            HireabilityStatus::TopCandidate => Color::Green,
            HireabilityStatus::StrongPotential => Color::Yellow,
            HireabilityStatus::NeedsImprovement => Color::Red,
        };
        output.push_str(&format!(
            "Status: {} | {}\n",
            self.colorize(&report.hireability_status.to_string(), status_color),
            report.recruiter_decision
        ));

        if !report.matched_skills.is_empty() {
            output.push_str(&self.format_header("✅ Matched Skills", 3));
            self.push_list(output, &report.matched_skills, Color::Green);
        }
        if !report.missing_skills.is_empty() {
            output.push_str(&self.format_header("🎯 Missing Skills", 3));
            self.push_list(output, &report.missing_skills, Color::Yellow);
        }

        output.push_str(&self.format_header("📋 Suggestions", 2));
        self.push_list(output, &report.improvement_suggestions, Color::White);

        output.push_str(&self.format_header("🗺️  Career Roadmap", 2));
        for (i, step) in report.career_roadmap.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, step));
        }

        output.push_str(&self.format_header("🎤 Interview Questions", 2));
        self.push_list(output, &report.interview_questions, Color::Cyan);
    }

    fn format_answer(&self, score: &AnswerScore, output: &mut String) {
        output.push_str(&format!("Score: {}/100 {}\n", score.score, self.format_score_badge(score.score)));
        output.push_str(&format!("{}\n", score.feedback));
    }

    fn format_links(&self, links: &ProfileLinks, output: &mut String) {
        output.push_str(&format!("LinkedIn:  {}\n", display_or_dash(&links.linkedin)));
        output.push_str(&format!("GitHub:    {}\n", display_or_dash(&links.github)));
        output.push_str(&format!("Portfolio: {}\n", display_or_dash(&links.portfolio)));
    }

    fn format_intelligence(&self, report: &IntelligenceReport, output: &mut String) {
        let simulation = &report.recruiter_simulation;
        let verdict_color = match simulation.verdict {
            Verdict::InterviewReady => Color::Green,
            Verdict::NeedsStrengthening => Color::Yellow,
        };

        output.push_str(&self.format_header("👥 Recruiter Simulation", 2));
        output.push_str(&format!(
            "Overall: {}% {} | {}\n",
            simulation.overall_score,
            self.format_score_badge(simulation.overall_score),
            self.colorize(&simulation.verdict.to_string(), verdict_color)
        ));
        for persona in &simulation.personas {
            output.push_str(&format!("  • {:<15} {:>3}  {}\n", persona.persona.to_string(), persona.score, persona.reason));
        }

        let benchmark = &report.benchmark_panel;
        output.push_str(&self.format_header("📈 Benchmark", 2));
        output.push_str(&format!(
            "Estimated percentile: {} ({})\n",
            benchmark.estimated_percentile, benchmark.benchmark_tier
        ));
        self.push_list(output, &benchmark.gaps, Color::Yellow);

        output.push_str(&self.format_header("✍️  Bullet Quality", 2));
        output.push_str(&format!("Average: {}\n", report.bullet_quality.average_score));
        let rows = report
            .bullet_quality
            .bullets
            .iter()
            .filter(|row| self.detailed || row.scoring.rating == BulletRating::Weak);
        for row in rows {
            let color = match row.scoring.rating {
                BulletRating::Strong => Color::Green,
                BulletRating::Good => Color::Yellow,
                BulletRating::Weak => Color::Red,
            };
            output.push_str(&format!(
                "  [{}] {}\n      {}\n",
                self.colorize(&row.scoring.score.to_string(), color),
                row.bullet,
                row.scoring.suggestion
            ));
        }

        output.push_str(&self.format_header("🧭 Gap Autopilot", 2));
        output.push_str(&format!("Priorities: {}\n", report.gap_autopilot.missing_priorities.join(", ")));
        let plan = &report.gap_autopilot.plan_30_60_90;
        for (label, steps) in [("30 days", &plan.days_30), ("60 days", &plan.days_60), ("90 days", &plan.days_90)] {
            output.push_str(&format!("  {}:\n", label));
            for step in steps.iter() {
                output.push_str(&format!("    - {}\n", step));
            }
        }

        let consistency = &report.portfolio_consistency;
        output.push_str(&self.format_header("🔗 Portfolio Consistency", 2));
        output.push_str(&format!("Score: {} | {}\n", consistency.consistency_score, consistency.risk_note));

        if !report.interview_bullets.is_empty() {
            output.push_str(&self.format_header("🎤 Interview Bullets", 3));
            self.push_list(output, &report.interview_bullets, Color::Cyan);
        }

        output.push_str(&self.format_header("🔀 Role Variants", 3));
        for variant in &report.role_variants {
            output.push_str(&format!(
                "  • {}: {} [{}]\n",
                variant.variant_name,
                variant.headline,
                variant.skills_focus.join(", ")
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("🧾 Evidence Checklist", 3));
            for link in &report.evidence_links {
                output.push_str(&format!(
                    "  • {} -> {} ({})\n",
                    link.evidence_type, link.proof_link_placeholder, link.suggested_artifact
                ));
            }
        }

        output.push_str(&self.format_header("📄 Resume Reference", 2));
        output.push_str(&report.resume_text);
        output.push('\n');
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("📊 {}", report.body.title()), 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        match &report.body {
            ReportBody::Match(body) => self.format_match(body, &mut output),
            ReportBody::Answer(body) => self.format_answer(body, &mut output),
            ReportBody::Intelligence(body) => self.format_intelligence(body, &mut output),
            ReportBody::Links(body) => self.format_links(body, &mut output),
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_list(items: &[String]) -> String {
        items.iter().map(|item| format!("- {}\n", item)).collect()
    }

    fn format_match(report: &MatchReport, output: &mut String) {
        output.push_str("## Match Summary\n\n");
        output.push_str("| Field | Value |\n|-------|-------|\n");
        if let Some(title) = &report.role_title {
            output.push_str(&format!("| Role | {} |\n", title));
        }
        if let Some(family) = report.role_family {
            output.push_str(&format!("| Family | {} |\n", family));
        }
        output.push_str(&format!("| Match score | {}% |\n", report.match_score));
        output.push_str(&format!("| Explanation | {} |\n", report.match_explanation));
        output.push_str(&format!("| Confidence | {:.2} |\n", report.confidence));
        output.push_str(&format!("| Status | {} |\n", report.hireability_status));
        output.push_str(&format!("| Decision | {} |\n\n", report.recruiter_decision));

        output.push_str("### Matched Skills\n\n");
        output.push_str(&Self::bullet_list(&report.matched_skills));
        output.push_str("\n### Missing Skills\n\n");
        output.push_str(&Self::bullet_list(&report.missing_skills));
        output.push_str("\n## Suggestions\n\n");
        output.push_str(&Self::bullet_list(&report.improvement_suggestions));
        output.push_str("\n## Career Roadmap\n\n");
        for (i, step) in report.career_roadmap.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, step));
        }
        output.push_str("\n## Interview Questions\n\n");
        output.push_str(&Self::bullet_list(&report.interview_questions));
    }

    fn format_intelligence(report: &IntelligenceReport, output: &mut String) {
        let simulation = &report.recruiter_simulation;
        output.push_str("## Recruiter Simulation\n\n");
        output.push_str(&format!(
            "**Overall:** {}% | **Verdict:** {}\n\n",
            simulation.overall_score, simulation.verdict
        ));
        output.push_str("| Persona | Score | Reason |\n|---------|-------|--------|\n");
        for persona in &simulation.personas {
            output.push_str(&format!("| {} | {} | {} |\n", persona.persona, persona.score, persona.reason));
        }

        let benchmark = &report.benchmark_panel;
        output.push_str(&format!(
            "\n## Benchmark\n\n**Estimated percentile:** {} ({})\n\n",
            benchmark.estimated_percentile, benchmark.benchmark_tier
        ));
        output.push_str(&Self::bullet_list(&benchmark.gaps));

        output.push_str(&format!(
            "\n## Bullet Quality\n\n**Average:** {}\n\n| Section | Score | Rating | Bullet |\n|---------|-------|--------|--------|\n",
            report.bullet_quality.average_score
        ));
        for row in &report.bullet_quality.bullets {
            output.push_str(&format!(
                "| {} | {} | {:?} | {} |\n",
                row.section, row.scoring.score, row.scoring.rating, row.bullet
            ));
        }

        let plan = &report.gap_autopilot.plan_30_60_90;
        output.push_str("\n## Gap Autopilot\n\n");
        output.push_str(&format!(
            "**Priorities:** {}\n\n",
            report.gap_autopilot.missing_priorities.join(", ")
        ));
        for (label, steps) in [("30 days", &plan.days_30), ("60 days", &plan.days_60), ("90 days", &plan.days_90)] {
            output.push_str(&format!("**{}**\n\n", label));
            output.push_str(&Self::bullet_list(steps));
            output.push('\n');
        }

        output.push_str(&format!(
            "## Portfolio Consistency\n\n**Score:** {}\n\n{}\n\n",
            report.portfolio_consistency.consistency_score, report.portfolio_consistency.risk_note
        ));

        output.push_str("## Role Variants\n\n");
        for variant in &report.role_variants {
            output.push_str(&format!("### {}\n\n**{}**\n\n{}\n\n", variant.variant_name, variant.headline, variant.summary));
        }

        output.push_str("## Resume Reference\n\n```text\n");
        output.push_str(&report.resume_text);
        output.push_str("\n```\n");
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# 📊 {}\n\n", report.body.title()));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Version:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms,
                report.metadata.tool_version
            ));
            if !report.metadata.sources.is_empty() {
                let sources: Vec<String> = report
                    .metadata
                    .sources
                    .iter()
                    .map(|s| format!("`{}`", s))
                    .collect();
                output.push_str(&format!("**Sources:** {}\n\n", sources.join(" | ")));
            }
        }

        match &report.body {
            ReportBody::Match(body) => Self::format_match(body, &mut output),
            ReportBody::Answer(body) => {
                output.push_str(&format!("**Score:** {}/100\n\n{}\n", body.score, body.feedback));
            }
            ReportBody::Intelligence(body) => Self::format_intelligence(body, &mut output),
            ReportBody::Links(body) => {
                output.push_str("| Link | URL |\n|------|-----|\n");
                output.push_str(&format!("| LinkedIn | {} |\n", display_or_dash(&body.linkedin)));
                output.push_str(&format!("| GitHub | {} |\n", display_or_dash(&body.github)));
                output.push_str(&format!("| Portfolio | {} |\n", display_or_dash(&body.portfolio)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatters(&self) -> [&dyn OutputFormatter; 3] {
        [
            &self.console_formatter as &dyn OutputFormatter,
            &self.json_formatter,
            &self.markdown_formatter,
        ]
    }

    pub fn generate_report(&self, report: &Report, format: OutputFormat) -> Result<String> {
        self.formatters()
            .into_iter()
            .find(|formatter| formatter.supports_format() == format)
            .ok_or_else(|| ResumeIntelError::OutputFormatting(format!("No formatter for {:?}", format)))?
            .format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, base_name: &str, timestamp: bool) -> String {
    let stem = Path::new(base_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_analysis{}.{}", stem, timestamp_suffix, extension)
}

/// Target for `--save` without a path: named after the first source, or the report kind
pub fn default_report_path(report: &Report, format: OutputFormat) -> PathBuf {
    let base_name = report
        .metadata
        .sources
        .first()
        .map(String::as_str)
        .unwrap_or_else(|| report.body.kind());
    PathBuf::from(suggest_filename(format, base_name, true))
}
