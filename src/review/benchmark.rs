//! Percentile estimate against an implicit top-candidate population

use crate::content::reference::ResumeReference;
use crate::processing::quality::{BulletQualityReport, BulletSource};
use crate::review::simulation::{Persona, RecruiterSimulation};
use serde::{Deserialize, Serialize};

const MAX_PERCENTILE: u32 = 99;

const TOP_TIER_GAPS: &[&str] = &[
    "Increase quantified outcomes per bullet.",
    "Attach direct evidence links to major claims.",
    "Show deeper project complexity tied to JD priorities.",
];
const MAINTENANCE_NOTE: &str = "Maintain evidence-backed impact language and interview readiness.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenchmarkTier {
    #[serde(rename = "Top 10%")]
    Top10,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Developing")]
    Developing,
}

impl BenchmarkTier {
    pub fn from_percentile(percentile: u32) -> Self {
        if percentile >= 90 {
            BenchmarkTier::Top10
        } else if percentile >= 70 {
            BenchmarkTier::AboveAverage
        } else {
            BenchmarkTier::Developing
        }
    }
}

impl std::fmt::Display for BenchmarkTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchmarkTier::Top10 => write!(f, "Top 10%"),
            BenchmarkTier::AboveAverage => write!(f, "Above Average"),
            BenchmarkTier::Developing => write!(f, "Developing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub estimated_percentile: u32,
    pub benchmark_tier: BenchmarkTier,
    pub gaps: Vec<String>,
}

/// Weighted composite of bullet quality, ATS score, proof slots and project depth
pub fn benchmark_against_top_candidates(
    reference: &ResumeReference,
    bullet_quality: &BulletQualityReport,
    simulation: &RecruiterSimulation,
) -> BenchmarkResult {
    let bullet_average = f64::from(bullet_quality.average_score);
    let ats = f64::from(simulation.persona_score(Persona::AtsParser));
    // one proof slot per bullet
    let evidence = (8 * reference.bullets().len()).min(100) as f64;
    let projects = (35 * reference.projects.len()).min(100) as f64;

    let composite = 0.4 * bullet_average + 0.35 * ats + 0.15 * evidence + 0.10 * projects;
    let estimated_percentile = (composite as u32).min(MAX_PERCENTILE);
    let benchmark_tier = BenchmarkTier::from_percentile(estimated_percentile);

    let gaps = if benchmark_tier == BenchmarkTier::Top10 {
        vec![MAINTENANCE_NOTE.to_string()]
    } else {
        TOP_TIER_GAPS.iter().map(|s| s.to_string()).collect()
    };

    BenchmarkResult {
        estimated_percentile,
        benchmark_tier,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::reference::{ProfileLinks, ReferenceGenerator};
    use crate::processing::lexicon::Lexicon;
    use crate::review::simulation::PersonaScore;
    use crate::review::simulation::Verdict;
    use std::sync::Arc;

    fn reference() -> ResumeReference {
        ReferenceGenerator::new(Arc::new(Lexicon::new().unwrap()), 14).generate(
            "Looking for a Data Analyst with SQL and Python skills",
            "",
            &ProfileLinks::default(),
        )
    }

    fn simulation(ats: u32) -> RecruiterSimulation {
        RecruiterSimulation {
            overall_score: ats,
            verdict: Verdict::from_overall(ats),
            personas: vec![PersonaScore {
                persona: Persona::AtsParser,
                score: ats,
                reason: String::new(),
            }],
        }
    }

    fn quality(average_score: u32) -> BulletQualityReport {
        BulletQualityReport {
            average_score,
            bullets: Vec::new(),
        }
    }

    #[test]
    fn test_percentile_formula() {
        // 10 bullets -> evidence 80, 2 projects -> 70
        let result = benchmark_against_top_candidates(&reference(), &quality(61), &simulation(81));

        // 24.4 + 28.35 + 12 + 7
        assert_eq!(result.estimated_percentile, 71);
        assert_eq!(result.benchmark_tier, BenchmarkTier::AboveAverage);
        assert_eq!(result.gaps.len(), 3);
    }

    #[test]
    fn test_percentile_caps_at_99() {
        let mut reference = reference();
        reference.projects.push(reference.projects[0].clone());
        reference.projects.push(reference.projects[0].clone());
        let result = benchmark_against_top_candidates(&reference, &quality(100), &simulation(100));

        assert_eq!(result.estimated_percentile, 99);
        assert_eq!(result.benchmark_tier, BenchmarkTier::Top10);
        assert_eq!(result.gaps, vec![MAINTENANCE_NOTE.to_string()]);
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(BenchmarkTier::from_percentile(90), BenchmarkTier::Top10);
        assert_eq!(BenchmarkTier::from_percentile(89), BenchmarkTier::AboveAverage);
        assert_eq!(BenchmarkTier::from_percentile(70), BenchmarkTier::AboveAverage);
        assert_eq!(BenchmarkTier::from_percentile(69), BenchmarkTier::Developing);
        assert_eq!(BenchmarkTier::Top10.to_string(), "Top 10%");
    }
}
