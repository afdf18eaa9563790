mod candidate;
mod evaluation;
mod job;

pub use candidate::{CandidateProfile, Education, Project, WorkExperience};
pub use evaluation::{
    BatchItem, BatchReport, BlendedEvaluation, ConfidenceLevel, Recommendation, RiskCategory,
    RiskFactor, ScoringBreakdown, ScoringResult, Severity,
};
pub use job::{ExperienceLevel, JobCategory, JobRequirement};
