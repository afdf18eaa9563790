//! External AI judgment seam.
//!
//! The blending layer talks to a `dyn AiJudge` and pattern-matches on the
//! returned `Result`; no exception-style propagation crosses this boundary.
//! The production implementation is the Claude-backed [`client::ClaudeJudge`];
//! tests substitute hand-rolled judges.

mod client;
mod credentials;
pub mod prompts;

pub use client::ClaudeJudge;
pub use credentials::CredentialPool;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CandidateProfile, ConfidenceLevel, JobRequirement, ScoringResult};

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("AI returned empty content")]
    EmptyContent,

    #[error("no usable credentials available")]
    NoCredentials,
}

/// The judgment body the external service is contracted to return.
/// Everything beyond `overallScore` is optional: a partial body degrades
/// field-by-field instead of discarding the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssessment {
    pub overall_score: u8,
    #[serde(default)]
    pub skill_match: Option<u8>,
    #[serde(default)]
    pub experience_score: Option<u8>,
    #[serde(default)]
    pub education_score: Option<u8>,
    #[serde(default)]
    pub project_alignment_score: Option<u8>,
    #[serde(default)]
    pub confidence_level: Option<ConfidenceLevel>,
    #[serde(default)]
    pub confidence: Option<u8>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub gaps: Vec<String>,
    /// Advisory only: the blend recomputes the recommendation from the
    /// blended score and the merged risk list.
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub interview_questions: Vec<String>,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
}

/// Pluggable external judge. Held behind `Option<Arc<dyn AiJudge>>` in the
/// blender; `None` is the disabled state.
#[async_trait]
pub trait AiJudge: Send + Sync {
    async fn assess(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        deterministic: &ScoringResult,
    ) -> Result<AiAssessment, AiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_deserializes_from_full_body() {
        let body = r#"{
            "overallScore": 82,
            "skillMatch": 90,
            "experienceScore": 75,
            "educationScore": 60,
            "projectAlignmentScore": 70,
            "confidenceLevel": "high",
            "confidence": 78,
            "riskFactors": ["Limited cloud exposure"],
            "strengths": ["Deep React experience"],
            "gaps": ["Kubernetes experience"],
            "recommendation": "select",
            "summary": "Strong frontend candidate.",
            "interviewQuestions": ["Describe a React performance issue you fixed."],
            "improvementSuggestions": ["Complete a Kubernetes certification."]
        }"#;
        let assessment: AiAssessment = serde_json::from_str(body).unwrap();
        assert_eq!(assessment.overall_score, 82);
        assert_eq!(assessment.confidence_level, Some(ConfidenceLevel::High));
        assert_eq!(assessment.risk_factors.len(), 1);
        assert_eq!(assessment.interview_questions.len(), 1);
    }

    #[test]
    fn test_assessment_tolerates_partial_body() {
        let assessment: AiAssessment = serde_json::from_str(r#"{"overallScore": 55}"#).unwrap();
        assert_eq!(assessment.overall_score, 55);
        assert!(assessment.confidence_level.is_none());
        assert!(assessment.strengths.is_empty());
        assert!(assessment.summary.is_none());
    }

    #[test]
    fn test_assessment_without_overall_score_is_malformed() {
        let result: Result<AiAssessment, _> =
            serde_json::from_str(r#"{"summary": "looks fine"}"#);
        assert!(result.is_err());
    }
}
