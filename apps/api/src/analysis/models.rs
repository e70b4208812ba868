//! The fixed analysis schema returned by `POST /api/analyze-job`.
//!
//! These structs mirror the JSON shape the prompt instructs the model to emit;
//! anything the model returns outside this shape is a parse failure, not a
//! partial result.

use serde::{Deserialize, Serialize};

/// What the posting reveals about the company itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInsights {
    pub name: String,
    pub industry: String,
    /// Notable signals read from the posting: stack choices, team shape,
    /// growth stage, pain points stated between the lines.
    pub signals: Vec<String>,
}

/// The single most exploitable gap identified in the posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub gap: String,
    /// Where in the posting the gap shows.
    pub evidence: String,
    /// How a candidate can turn the gap into an interview advantage.
    pub opportunity: String,
}

/// Effort tier for a project idea.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Buildable in a weekend.
    Weekend,
    /// Roughly a week of evenings.
    Week,
    /// A stretch project; impressive but risky to promise.
    Ambitious,
}

/// One interview project idea derived from the posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    /// Why this project speaks to this specific posting.
    pub rationale: String,
    pub complexity: Complexity,
    pub tech: Vec<String>,
}

/// Full structured output of a job-posting analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub company: CompanyInsights,
    pub gap: GapAnalysis,
    pub project_ideas: Vec<ProjectIdea>,
    pub talking_points: Vec<String>,
    /// One-sentence positioning strategy for the application.
    pub strategy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Complexity::Weekend).unwrap(),
            r#""weekend""#
        );
        assert_eq!(
            serde_json::to_string(&Complexity::Ambitious).unwrap(),
            r#""ambitious""#
        );
    }

    #[test]
    fn test_complexity_rejects_unknown_tier() {
        let result = serde_json::from_str::<Complexity>(r#""monumental""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_job_analysis_full_deserializes_correctly() {
        let json = r#"{
            "company": {
                "name": "Ferrous Systems",
                "industry": "developer tooling",
                "signals": ["hiring first platform engineer", "mentions migration off a monolith"]
            },
            "gap": {
                "gap": "No observability story",
                "evidence": "Posting asks for 'debugging production issues' but lists no tracing stack",
                "opportunity": "Demo a minimal tracing pipeline for their stack"
            },
            "project_ideas": [
                {
                    "title": "Request-trace explorer",
                    "description": "A small web UI over OTLP traces",
                    "rationale": "Directly addresses their stated debugging pain",
                    "complexity": "week",
                    "tech": ["Rust", "axum", "OpenTelemetry"]
                }
            ],
            "talking_points": ["Ask how they debug cross-service failures today"],
            "strategy": "Position as the engineer who makes their migration observable."
        }"#;

        let analysis: JobAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.company.name, "Ferrous Systems");
        assert_eq!(analysis.company.signals.len(), 2);
        assert_eq!(analysis.project_ideas.len(), 1);
        assert_eq!(analysis.project_ideas[0].complexity, Complexity::Week);
        assert_eq!(analysis.project_ideas[0].tech[1], "axum");
        assert_eq!(analysis.talking_points.len(), 1);
        assert!(analysis.strategy.starts_with("Position"));
    }
}
