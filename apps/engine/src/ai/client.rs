//! Claude-backed judge: the single point of contact with the external AI
//! service. Rotates across the credential pool, retries with a short
//! backoff, and converts every failure mode into an `AiError` for the
//! blending layer to pattern-match on.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::prompts::{
    category_instructions, ASSESSMENT_PROMPT_TEMPLATE, ASSESSMENT_SYSTEM, CONFIDENCE_RULES,
};
use crate::ai::{AiAssessment, AiError, AiJudge, CredentialPool};
use crate::config::EngineConfig;
use crate::models::{CandidateProfile, JobRequirement, ScoringResult};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded on purpose: one model for every judgment call prevents drift
/// between evaluations.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl ApiResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

/// Production `AiJudge` backed by the Anthropic Messages API.
pub struct ClaudeJudge {
    http: Client,
    pool: CredentialPool,
    backoff: std::time::Duration,
}

impl ClaudeJudge {
    /// Builds a judge from configuration. Returns `None` when no API keys
    /// are configured: the caller treats that as the disabled state.
    pub fn from_config(config: &EngineConfig) -> Option<Self> {
        if !config.ai_enabled() {
            return None;
        }
        let http = Client::builder()
            .timeout(config.ai_timeout)
            .build()
            .expect("failed to build HTTP client");
        Some(Self {
            http,
            pool: CredentialPool::new(config.api_keys.clone(), config.credential_cooldown),
            backoff: config.retry_backoff,
        })
    }

    async fn call_once(&self, api_key: &str, prompt: &str) -> Result<AiAssessment, AiError> {
        let request = ApiRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: ASSESSMENT_SYSTEM,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ApiResponse = response.json().await?;
        debug!(
            input_tokens = body.usage.input_tokens,
            output_tokens = body.usage.output_tokens,
            "judgment call succeeded"
        );

        let text = body.text().ok_or(AiError::EmptyContent)?;
        serde_json::from_str(strip_json_fences(text)).map_err(AiError::Parse)
    }
}

#[async_trait]
impl AiJudge for ClaudeJudge {
    /// Tries each available credential at most once, with a short backoff
    /// between attempts. A 429 puts the credential into cooldown; any other
    /// failure counts against it and rotation moves on.
    async fn assess(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        deterministic: &ScoringResult,
    ) -> Result<AiAssessment, AiError> {
        let prompt = build_assessment_prompt(candidate, job, deterministic);

        let mut last_error = AiError::NoCredentials;
        for attempt in 0..self.pool.len() {
            let Some((index, key)) = self.pool.checkout() else {
                break;
            };
            if attempt > 0 {
                tokio::time::sleep(self.backoff).await;
            }

            match self.call_once(&key, &prompt).await {
                Ok(assessment) => {
                    self.pool.report_success(index);
                    return Ok(assessment);
                }
                Err(err) => {
                    if matches!(err, AiError::Api { status: 429, .. }) {
                        self.pool.report_rate_limited(index);
                    } else {
                        self.pool.report_error(index);
                    }
                    warn!(attempt, credential = index, "judgment attempt failed: {err}");
                    last_error = err;
                }
            }
        }
        Err(last_error)
    }
}

/// Fills the assessment template with the serialized job, candidate and
/// rule-based screen.
fn build_assessment_prompt(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    deterministic: &ScoringResult,
) -> String {
    let job_json =
        serde_json::to_string_pretty(job).unwrap_or_else(|_| "{}".to_string());
    let candidate_json =
        serde_json::to_string_pretty(candidate).unwrap_or_else(|_| "{}".to_string());
    let deterministic_json =
        serde_json::to_string_pretty(deterministic).unwrap_or_else(|_| "{}".to_string());

    ASSESSMENT_PROMPT_TEMPLATE
        .replace("{category_instructions}", category_instructions(job.category))
        .replace("{confidence_rules}", CONFIDENCE_RULES)
        .replace("{job_json}", &job_json)
        .replace("{candidate_json}", &candidate_json)
        .replace("{deterministic_json}", &deterministic_json)
}

/// Strips a leading/trailing markdown code fence when the model wraps its
/// JSON despite the system prompt.
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}
