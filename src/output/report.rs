//! Report envelope shared by every output format

use crate::content::reference::ProfileLinks;
use crate::processing::analyzer::{IntelligenceReport, MatchReport};
use crate::processing::quality::AnswerScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub body: ReportBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    /// Input files or labels the report was produced from
    pub sources: Vec<String>,
    pub tool_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Match(MatchReport),
    Answer(AnswerScore),
    Intelligence(Box<IntelligenceReport>),
    Links(ProfileLinks),
}

impl ReportBody {
    pub fn kind(&self) -> &'static str {
        match self {
            ReportBody::Match(_) => "match",
            ReportBody::Answer(_) => "answer",
            ReportBody::Intelligence(_) => "intelligence",
            ReportBody::Links(_) => "links",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportBody::Match(_) => "RESUME MATCH ANALYSIS",
            ReportBody::Answer(_) => "INTERVIEW ANSWER EVALUATION",
            ReportBody::Intelligence(_) => "RESUME INTELLIGENCE",
            ReportBody::Links(_) => "PROFILE LINKS",
        }
    }
}

impl Report {
    pub fn new(body: ReportBody, sources: Vec<String>, processing_time_ms: u64) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                processing_time_ms,
                sources,
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_tagged_by_kind() {
        let report = Report::new(
            ReportBody::Answer(AnswerScore {
                score: 25,
                feedback: "short".to_string(),
            }),
            vec!["inline answer".to_string()],
            3,
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["body"]["kind"], "answer");
        assert_eq!(json["body"]["score"], 25);
        assert_eq!(json["metadata"]["sources"][0], "inline answer");
    }
}
