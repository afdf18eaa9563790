//! Deterministic scoring: produces a complete `ScoringResult` from a job
//! and a candidate profile with no network dependency. Total by design:
//! missing inputs drive sub-scores to 0 and surface as risk factors, never
//! as errors.

use tracing::debug;

use crate::models::{
    CandidateProfile, ConfidenceLevel, JobRequirement, Recommendation, RiskCategory, RiskFactor,
    ScoringBreakdown, ScoringResult, Severity,
};
use crate::scoring::factors;
use crate::scoring::weights::{weights_for, FactorWeights};
use crate::skills::{self, SkillSetMatch};

/// Resume text shorter than this is treated as too thin to assess.
const MIN_RESUME_TEXT_LEN: usize = 100;
/// At most this many missing skills are reported as gaps.
const MAX_GAPS: usize = 5;

/// Scores a candidate against a job. Reproducible: identical inputs always
/// produce identical results.
pub fn score(candidate: &CandidateProfile, job: &JobRequirement) -> ScoringResult {
    let weights = weights_for(job.category);
    let skill_set = skills::match_set(&job.required_skills, &candidate.skills);

    let breakdown = ScoringBreakdown {
        skill_match: factors::bucket_signal(skill_set.score),
        code_activity: factors::signal_factor(candidate.code_activity_score, weights.activity),
        algorithmic: factors::signal_factor(candidate.algorithmic_score, weights.algorithmic),
        experience_fit: factors::experience_factor(
            job.experience_level,
            candidate.effective_years(),
        ),
        education: factors::education_factor(&candidate.education, &candidate.certifications),
        profile_completeness: factors::completeness_factor(candidate),
        project_relevance: if weights.projects == 0 {
            0
        } else {
            factors::project_relevance_factor(&job.required_skills, &candidate.projects)
        },
        readiness: factors::readiness_factor(candidate.readiness_score),
    };

    let overall_score = weighted_overall(&breakdown, weights);
    let confidence_score = confidence_score(candidate, &breakdown);
    let confidence = ConfidenceLevel::from_score(confidence_score);

    let risk_factors = collect_risks(candidate, job, &breakdown, &skill_set, weights);
    let strengths = collect_strengths(job, &breakdown, &skill_set);
    let gaps = collect_gaps(&skill_set);

    let blockers = count_blockers(&risk_factors);
    let recommendation = recommend(overall_score, blockers);

    debug!(
        job = %job.title,
        category = job.category.label(),
        overall_score,
        confidence_score,
        risks = risk_factors.len(),
        "deterministic scoring complete"
    );

    ScoringResult {
        overall_score,
        confidence,
        confidence_score,
        risk_factors,
        breakdown,
        strengths,
        gaps,
        recommendation,
    }
}

/// Weighted sum of the eight factors, rounded. Weights sum to 100, so the
/// result is bounded by the factor range itself.
fn weighted_overall(breakdown: &ScoringBreakdown, weights: &FactorWeights) -> u8 {
    let total: f64 = breakdown
        .factor_scores()
        .iter()
        .zip(weights.as_array())
        .map(|(score, weight)| *score as f64 * weight as f64 / 100.0)
        .sum();
    total.round().clamp(0.0, 100.0) as u8
}

/// Recommendation thresholds, shared with the blending layer which
/// recomputes the recommendation against the blended score.
pub(crate) fn recommend(overall: u8, blockers: usize) -> Recommendation {
    if overall >= 75 && blockers == 0 {
        Recommendation::Select
    } else if overall >= 50 || blockers <= 1 {
        Recommendation::Review
    } else {
        Recommendation::Reject
    }
}

pub(crate) fn count_blockers(risks: &[RiskFactor]) -> usize {
    risks
        .iter()
        .filter(|r| r.severity == Severity::Blocker)
        .count()
}

/// Confidence in the evaluation itself, independent of the score: how much
/// data was available (40), how many factors actually fired (20), and how
/// strong the firing factors were (30).
fn confidence_score(candidate: &CandidateProfile, breakdown: &ScoringBreakdown) -> u8 {
    let mut score = 0u8;

    // Data completeness, up to 40.
    if candidate.resume_text_len() > MIN_RESUME_TEXT_LEN {
        score += 15;
    }
    if candidate.skills.len() >= 3 {
        score += 10;
    }
    if !candidate.experience.is_empty() {
        score += 10;
    }
    if candidate.code_activity_score.is_some() {
        score += 5;
    }

    // Factor consistency, up to 20.
    let non_zero: Vec<u8> = breakdown
        .factor_scores()
        .into_iter()
        .filter(|s| *s > 0)
        .collect();
    if non_zero.len() >= 3 {
        score += 20;
    } else if non_zero.len() >= 2 {
        score += 10;
    }

    // Quality of the non-zero factors, up to 30.
    let mean = if non_zero.is_empty() {
        0.0
    } else {
        non_zero.iter().map(|s| *s as f64).sum::<f64>() / non_zero.len() as f64
    };
    score += if mean >= 70.0 {
        30
    } else if mean >= 50.0 {
        20
    } else {
        10
    };

    score.min(100)
}

/// Rule-based risk checks, one rule per factor. Signal and project rules
/// only fire for categories that weight those factors.
fn collect_risks(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    breakdown: &ScoringBreakdown,
    skill_set: &SkillSetMatch,
    weights: &FactorWeights,
) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if breakdown.skill_match < 50 {
        risks.push(RiskFactor::new(
            Severity::Blocker,
            RiskCategory::Skills,
            format!(
                "Significant skill gap: {} of {} required skills matched",
                skill_set.matched.len(),
                skill_set.matched.len() + skill_set.missing.len()
            ),
        ));
    } else if breakdown.skill_match < 70 {
        risks.push(RiskFactor::new(
            Severity::Warning,
            RiskCategory::Skills,
            format!(
                "Partial skill match: missing {}",
                skill_set.missing.join(", ")
            ),
        ));
    }

    if weights.activity > 0 && breakdown.code_activity == 0 {
        risks.push(RiskFactor::new(
            Severity::Concern,
            RiskCategory::Activity,
            "No code activity signal available",
        ));
    }

    if weights.algorithmic > 0 && breakdown.algorithmic == 0 {
        risks.push(RiskFactor::new(
            Severity::Concern,
            RiskCategory::Activity,
            "No algorithmic problem-solving signal available",
        ));
    }

    if breakdown.experience_fit <= 40 {
        risks.push(RiskFactor::new(
            Severity::Blocker,
            RiskCategory::Experience,
            format!(
                "Experience does not meet the {} level requirement",
                job.experience_level.label()
            ),
        ));
    }

    if breakdown.profile_completeness < 60 {
        risks.push(RiskFactor::new(
            Severity::Warning,
            RiskCategory::Profile,
            "Profile is missing key sections",
        ));
    }

    if weights.projects > 0 {
        if candidate.projects.is_empty() {
            risks.push(RiskFactor::new(
                Severity::Concern,
                RiskCategory::Profile,
                "No projects listed",
            ));
        } else if breakdown.project_relevance < 30 {
            risks.push(RiskFactor::new(
                Severity::Warning,
                RiskCategory::Skills,
                "Project tech stacks do not align with the role requirements",
            ));
        }
    }

    if candidate.resume_text_len() < MIN_RESUME_TEXT_LEN {
        risks.push(RiskFactor::new(
            Severity::Concern,
            RiskCategory::Profile,
            "Resume text missing or too short to assess",
        ));
    }

    risks
}

/// Mirror image of the risk thresholds: high sub-scores become positive
/// statements.
fn collect_strengths(
    job: &JobRequirement,
    breakdown: &ScoringBreakdown,
    skill_set: &SkillSetMatch,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if breakdown.skill_match >= 80 {
        strengths.push(format!(
            "Strong skill coverage: {} of {} required skills matched",
            skill_set.matched.len(),
            skill_set.matched.len() + skill_set.missing.len()
        ));
    }
    if breakdown.code_activity >= 80 {
        strengths.push("Strong public code activity".to_string());
    }
    if breakdown.algorithmic >= 80 {
        strengths.push("Strong algorithmic problem-solving record".to_string());
    }
    if breakdown.experience_fit >= 90 {
        strengths.push(format!(
            "Experience aligns with the {} level",
            job.experience_level.label()
        ));
    }
    if breakdown.education >= 70 {
        strengths.push("Solid educational background".to_string());
    }
    if breakdown.profile_completeness >= 80 {
        strengths.push("Complete, well-rounded profile".to_string());
    }
    if breakdown.project_relevance >= 70 {
        strengths.push("Projects closely match the role's tech stack".to_string());
    }
    if breakdown.readiness >= 70 {
        strengths.push("High readiness assessment score".to_string());
    }

    strengths
}

/// Missing required skills become gaps, capped and rendered uniformly.
fn collect_gaps(skill_set: &SkillSetMatch) -> Vec<String> {
    skill_set
        .missing
        .iter()
        .take(MAX_GAPS)
        .map(|skill| format!("{skill} experience"))
        .collect()
}
