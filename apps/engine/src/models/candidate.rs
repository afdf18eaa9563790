use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single work-experience entry from the parsed resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
}

/// An education entry from the parsed resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// A candidate project with its declared tech stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// Everything the engine knows about a candidate. Assembled at the boundary
/// from the resume parser and external signal collaborators; optional fields
/// stay `None` rather than erroring, and the scorer treats absence as a gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub years_of_experience: Option<f64>,
    /// Public code-activity signal, 0-100, from the activity collaborator.
    #[serde(default)]
    pub code_activity_score: Option<u8>,
    /// Algorithmic problem-solving signal, 0-100.
    #[serde(default)]
    pub algorithmic_score: Option<u8>,
    /// Latest completed readiness assessment, 0-100. Scoring substitutes a
    /// neutral 50 when absent.
    #[serde(default)]
    pub readiness_score: Option<u8>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
}

impl CandidateProfile {
    /// Years of experience used for scoring: the explicit field when present,
    /// otherwise approximated from the number of experience entries.
    pub fn effective_years(&self) -> f64 {
        self.years_of_experience
            .unwrap_or(self.experience.len() as f64)
    }

    pub fn resume_text_len(&self) -> usize {
        self.resume_text.as_deref().map_or(0, |t| t.trim().len())
    }
}
