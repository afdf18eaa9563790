use crate::models::JobCategory;

/// Percentage weights for the eight scoring factors. Every row sums to 100;
/// a zero weight means the factor is computed as 0 for that category, not
/// omitted from the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorWeights {
    pub skills: u8,
    pub activity: u8,
    pub algorithmic: u8,
    pub experience: u8,
    pub projects: u8,
    pub education: u8,
    pub profile: u8,
    pub readiness: u8,
}

impl FactorWeights {
    pub const fn sum(&self) -> u16 {
        self.skills as u16
            + self.activity as u16
            + self.algorithmic as u16
            + self.experience as u16
            + self.projects as u16
            + self.education as u16
            + self.profile as u16
            + self.readiness as u16
    }

    /// Weights in breakdown order: skills, activity, algorithmic,
    /// experience, projects, education, profile, readiness.
    pub fn as_array(&self) -> [u8; 8] {
        [
            self.skills,
            self.activity,
            self.algorithmic,
            self.experience,
            self.projects,
            self.education,
            self.profile,
            self.readiness,
        ]
    }
}

pub const SOFTWARE_WEIGHTS: FactorWeights = FactorWeights {
    skills: 25,
    activity: 15,
    algorithmic: 10,
    experience: 15,
    projects: 15,
    education: 5,
    profile: 5,
    readiness: 10,
};

pub const DATA_SCIENCE_WEIGHTS: FactorWeights = FactorWeights {
    skills: 25,
    activity: 10,
    algorithmic: 15,
    experience: 15,
    projects: 15,
    education: 5,
    profile: 5,
    readiness: 10,
};

pub const QA_AUTOMATION_WEIGHTS: FactorWeights = FactorWeights {
    skills: 30,
    activity: 10,
    algorithmic: 10,
    experience: 15,
    projects: 15,
    education: 5,
    profile: 5,
    readiness: 10,
};

pub const NON_TECHNICAL_WEIGHTS: FactorWeights = FactorWeights {
    skills: 35,
    activity: 0,
    algorithmic: 0,
    experience: 25,
    projects: 0,
    education: 15,
    profile: 15,
    readiness: 10,
};

pub const BUSINESS_WEIGHTS: FactorWeights = FactorWeights {
    skills: 30,
    activity: 0,
    algorithmic: 0,
    experience: 30,
    projects: 0,
    education: 15,
    profile: 15,
    readiness: 10,
};

/// Weight row for a job category. Unknown categories already collapsed to
/// `Software` at the deserialization boundary.
pub const fn weights_for(category: JobCategory) -> &'static FactorWeights {
    match category {
        JobCategory::Software => &SOFTWARE_WEIGHTS,
        JobCategory::DataScience => &DATA_SCIENCE_WEIGHTS,
        JobCategory::QaAutomation => &QA_AUTOMATION_WEIGHTS,
        JobCategory::NonTechnical => &NON_TECHNICAL_WEIGHTS,
        JobCategory::Business => &BUSINESS_WEIGHTS,
    }
}
