use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job category. Selects the factor weight row used for the overall score.
/// Unrecognized categories deserialize to `Software`, the broadest row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobCategory {
    DataScience,
    QaAutomation,
    NonTechnical,
    Business,
    #[default]
    #[serde(other)]
    Software,
}

impl JobCategory {
    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::Software => "software",
            JobCategory::DataScience => "data-science",
            JobCategory::QaAutomation => "qa-automation",
            JobCategory::NonTechnical => "non-technical",
            JobCategory::Business => "business",
        }
    }
}

/// Required experience level for a job. Legacy records use "entry" and
/// "lead", which map onto the fresher/senior bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[serde(alias = "entry")]
    Fresher,
    Junior,
    #[default]
    Mid,
    #[serde(alias = "lead")]
    Senior,
}

impl ExperienceLevel {
    /// Expected years-of-experience band. `None` for the upper bound means
    /// open-ended (senior roles).
    pub fn year_range(&self) -> (f64, Option<f64>) {
        match self {
            ExperienceLevel::Fresher => (0.0, Some(1.0)),
            ExperienceLevel::Junior => (1.0, Some(3.0)),
            ExperienceLevel::Mid => (3.0, Some(6.0)),
            ExperienceLevel::Senior => (6.0, None),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

/// A job's requirements as consumed by the evaluation engine.
/// Immutable input; skill order is irrelevant for matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub category: JobCategory,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_kebab_case() {
        let cat: JobCategory = serde_json::from_str(r#""data-science""#).unwrap();
        assert_eq!(cat, JobCategory::DataScience);
        let cat: JobCategory = serde_json::from_str(r#""qa-automation""#).unwrap();
        assert_eq!(cat, JobCategory::QaAutomation);
    }

    #[test]
    fn test_unknown_category_falls_back_to_software() {
        let cat: JobCategory = serde_json::from_str(r#""devops-wizardry""#).unwrap();
        assert_eq!(cat, JobCategory::Software);
    }

    #[test]
    fn test_legacy_experience_aliases() {
        let level: ExperienceLevel = serde_json::from_str(r#""entry""#).unwrap();
        assert_eq!(level, ExperienceLevel::Fresher);
        let level: ExperienceLevel = serde_json::from_str(r#""lead""#).unwrap();
        assert_eq!(level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_year_ranges() {
        assert_eq!(ExperienceLevel::Fresher.year_range(), (0.0, Some(1.0)));
        assert_eq!(ExperienceLevel::Junior.year_range(), (1.0, Some(3.0)));
        assert_eq!(ExperienceLevel::Mid.year_range(), (3.0, Some(6.0)));
        assert_eq!(ExperienceLevel::Senior.year_range(), (6.0, None));
    }

    #[test]
    fn test_job_requirement_deserializes_with_defaults() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "title": "Backend Engineer"
        });
        let job: JobRequirement = serde_json::from_value(json).unwrap();
        assert_eq!(job.category, JobCategory::Software);
        assert_eq!(job.experience_level, ExperienceLevel::Mid);
        assert!(job.required_skills.is_empty());
    }
}
