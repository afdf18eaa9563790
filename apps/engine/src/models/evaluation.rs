use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Risk-factor severity, in descending order of how strongly it should
/// block a `select` recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Concern,
    Blocker,
}

impl Severity {
    /// Higher rank sorts first when the merged risk list is capped.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Severity::Blocker => 2,
            Severity::Concern => 1,
            Severity::Warning => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Skills,
    Experience,
    Activity,
    Profile,
}

/// A single rule-generated risk. Created fresh per evaluation and carried
/// inside the result, never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub severity: Severity,
    pub message: String,
    pub category: RiskCategory,
}

impl RiskFactor {
    pub fn new(severity: Severity, category: RiskCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Maps a raw 0-100 confidence number onto a level.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            ConfidenceLevel::High
        } else if score >= 45 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Select,
    Review,
    Reject,
}

/// Per-factor sub-scores, each clamped to 0-100. A factor the category does
/// not weight is present with value 0, never omitted, so the breakdown shape
/// is stable across categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub skill_match: u8,
    pub code_activity: u8,
    pub algorithmic: u8,
    pub experience_fit: u8,
    pub education: u8,
    pub profile_completeness: u8,
    pub project_relevance: u8,
    pub readiness: u8,
}

impl ScoringBreakdown {
    /// Factor scores in weight-table order: skills, activity, algorithmic,
    /// experience, projects, education, profile, readiness.
    pub fn factor_scores(&self) -> [u8; 8] {
        [
            self.skill_match,
            self.code_activity,
            self.algorithmic,
            self.experience_fit,
            self.project_relevance,
            self.education,
            self.profile_completeness,
            self.readiness,
        ]
    }
}

/// Output of the deterministic scoring engine. Reproducible for identical
/// inputs and always well-formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringResult {
    pub overall_score: u8,
    pub confidence: ConfidenceLevel,
    pub confidence_score: u8,
    pub risk_factors: Vec<RiskFactor>,
    pub breakdown: ScoringBreakdown,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: Recommendation,
}

/// Unified evaluation returned to the caller: the deterministic result,
/// optionally blended with the external AI judgment. Created once per
/// request and not mutated afterward; persistence is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendedEvaluation {
    pub overall_score: u8,
    pub confidence: ConfidenceLevel,
    pub confidence_score: u8,
    pub risk_factors: Vec<RiskFactor>,
    pub breakdown: ScoringBreakdown,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: Recommendation,
    pub summary: String,
    pub interview_questions: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    /// Whether the external AI judgment contributed to this evaluation.
    pub ai_assisted: bool,
}

/// One successfully evaluated candidate inside a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub candidate_id: Uuid,
    pub evaluation: BlendedEvaluation,
}

/// Outcome of a batch run. Failures are counted, never propagated.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub evaluated: usize,
    pub failed: usize,
    pub evaluations: Vec<BatchItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_level_tiers() {
        assert_eq!(ConfidenceLevel::from_score(70), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(69), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(45), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(44), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_severity_rank_orders_blocker_first() {
        assert!(Severity::Blocker.rank() > Severity::Concern.rank());
        assert!(Severity::Concern.rank() > Severity::Warning.rank());
    }

    #[test]
    fn test_severity_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Blocker).unwrap(), r#""blocker""#);
        let sev: Severity = serde_json::from_str(r#""concern""#).unwrap();
        assert_eq!(sev, Severity::Concern);
    }

    #[test]
    fn test_breakdown_factor_scores_order_matches_weight_table() {
        let breakdown = ScoringBreakdown {
            skill_match: 1,
            code_activity: 2,
            algorithmic: 3,
            experience_fit: 4,
            education: 6,
            profile_completeness: 7,
            project_relevance: 5,
            readiness: 8,
        };
        assert_eq!(breakdown.factor_scores(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
