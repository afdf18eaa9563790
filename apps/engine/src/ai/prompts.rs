//! Prompt constants for the external judgment call.

use crate::models::JobCategory;

/// System prompt: enforces JSON-only output so the response can be parsed
/// without scraping prose.
pub const ASSESSMENT_SYSTEM: &str =
    "You are an expert technical recruiter evaluating a job candidate. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Confidence contract the external service is expected to honor when it
/// produces its own confidence number and level.
pub const CONFIDENCE_RULES: &str = "\
    Compute `confidence` (0-100) as follows: \
    start from the percentage of the job's required skills the candidate covers; \
    adjust by experience alignment tier (within the expected band: +15, \
    near it: +5, far outside it: -10); \
    adjust by signal reliability tier (both code-activity and algorithmic \
    signals present: +10, one present: +5, none: -5); \
    subtract 10 points for every risk factor you identify. \
    Clamp to 0-100 and set `confidenceLevel` to high (>=70), medium (>=50) or low.";

/// Assessment prompt template. Replace `{category_instructions}`,
/// `{confidence_rules}`, `{job_json}`, `{candidate_json}` and
/// `{deterministic_json}` before sending.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Evaluate the candidate below against the job requirements.

{category_instructions}

{confidence_rules}

JOB:
{job_json}

CANDIDATE:
{candidate_json}

RULE-BASED SCREEN (computed independently; use it as context, not as ground truth):
{deterministic_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "overallScore": 72,
  "skillMatch": 80,
  "experienceScore": 70,
  "educationScore": 60,
  "projectAlignmentScore": 55,
  "confidenceLevel": "medium",
  "confidence": 62,
  "riskFactors": ["No production Kubernetes experience"],
  "strengths": ["Five years of backend API work"],
  "gaps": ["Kubernetes experience"],
  "recommendation": "review",
  "summary": "Two or three sentences on overall fit.",
  "interviewQuestions": ["One targeted question per major gap or strength."],
  "improvementSuggestions": ["Concrete, actionable steps for the candidate."]
}

All scores are integers 0-100. `recommendation` is one of "select", "review", "reject"."#;

/// Category-specific evaluation guidance injected into the prompt.
pub fn category_instructions(category: JobCategory) -> &'static str {
    match category {
        JobCategory::Software => {
            "This is a software engineering role. Weight hands-on coding \
            evidence, shipped projects and depth in the required stack over \
            credentials."
        }
        JobCategory::DataScience => {
            "This is a data science role. Weight statistical and modeling \
            depth, algorithmic problem-solving and evidence of real datasets \
            over framework name-dropping."
        }
        JobCategory::QaAutomation => {
            "This is a QA automation role. Weight test framework experience, \
            automation coverage thinking and tooling breadth; manual-only \
            testing backgrounds are a gap."
        }
        JobCategory::NonTechnical => {
            "This is a non-technical role. Ignore missing code signals; weight \
            domain experience, communication evidence and education instead."
        }
        JobCategory::Business => {
            "This is a business role. Ignore missing code signals; weight \
            commercial experience, stakeholder work and measurable outcomes."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_instructions() {
        for category in [
            JobCategory::Software,
            JobCategory::DataScience,
            JobCategory::QaAutomation,
            JobCategory::NonTechnical,
            JobCategory::Business,
        ] {
            assert!(!category_instructions(category).is_empty());
        }
    }

    #[test]
    fn test_template_has_all_placeholders() {
        for placeholder in [
            "{category_instructions}",
            "{confidence_rules}",
            "{job_json}",
            "{candidate_json}",
            "{deterministic_json}",
        ] {
            assert!(ASSESSMENT_PROMPT_TEMPLATE.contains(placeholder));
        }
    }
}
