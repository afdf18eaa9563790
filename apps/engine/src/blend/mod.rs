//! Blending layer: always computes the deterministic result first, then
//! optionally folds in the external AI judgment.
//!
//! Flow per request: score -> {disabled | AI success | AI failure} -> done.
//! `evaluate` is infallible by signature; the deterministic result is the
//! resilience floor and every external failure lands back on it.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::ai::{AiAssessment, AiJudge, ClaudeJudge};
use crate::collaborators::ProfileStore;
use crate::config::EngineConfig;
use crate::errors::StoreError;
use crate::models::{
    BatchItem, BatchReport, BlendedEvaluation, CandidateProfile, ConfidenceLevel, JobRequirement,
    RiskCategory, RiskFactor, ScoringResult, Severity,
};
use crate::scoring;

/// Strengths, gaps and risks are capped at this many entries after merging.
const MAX_LIST_ITEMS: usize = 5;
/// Fixed blend ratio: external judgment 60%, rule-based screen 40%.
const AI_BLEND_WEIGHT: f64 = 0.6;
const RULE_BLEND_WEIGHT: f64 = 0.4;

/// Combines the deterministic scoring engine with an optional external AI
/// judge. Guarantees a complete evaluation for every well-formed
/// candidate/job pair.
pub struct Blender {
    judge: Option<Arc<dyn AiJudge>>,
}

impl Blender {
    pub fn new(judge: Option<Arc<dyn AiJudge>>) -> Self {
        Self { judge }
    }

    /// A blender that never attempts the external call.
    pub fn deterministic_only() -> Self {
        Self::new(None)
    }

    /// Builds the production blender: AI-assisted when credentials are
    /// configured, deterministic-only otherwise.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(ClaudeJudge::from_config(config).map(|judge| Arc::new(judge) as Arc<dyn AiJudge>))
    }

    /// Evaluates one candidate against one job. Never fails: the external
    /// call is attempted at most once per request and any failure falls
    /// back to the deterministic result.
    pub async fn evaluate(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> BlendedEvaluation {
        let deterministic = scoring::score(candidate, job);

        match &self.judge {
            None => {
                debug!("AI judgment disabled, returning rule-based result");
                deterministic_fallback(deterministic)
            }
            Some(judge) => match judge.assess(candidate, job, &deterministic).await {
                Ok(assessment) => {
                    info!(
                        ai_score = assessment.overall_score,
                        rule_score = deterministic.overall_score,
                        "blending external judgment with rule-based screen"
                    );
                    blend(deterministic, assessment)
                }
                Err(err) => {
                    warn!("external judgment failed, falling back to rule-based result: {err}");
                    deterministic_fallback(deterministic)
                }
            },
        }
    }

    /// Persistence-layer entry point: resolves both records by id, fills the
    /// readiness score from the latest completed assessment, and evaluates.
    /// Returns `Ok(None)` when either record is missing; translating that
    /// into a not-found response is the caller's concern.
    pub async fn evaluate_by_id(
        &self,
        store: &dyn ProfileStore,
        job_id: Uuid,
        candidate_id: Uuid,
    ) -> Result<Option<BlendedEvaluation>, StoreError> {
        let Some(job) = store.fetch_job(job_id).await? else {
            return Ok(None);
        };
        let Some(mut candidate) = store.fetch_candidate(candidate_id).await? else {
            return Ok(None);
        };
        fill_readiness(store, candidate_id, &mut candidate).await;
        Ok(Some(self.evaluate(&candidate, &job).await))
    }

    /// Evaluates many candidates for one job. Each candidate is isolated:
    /// a missing profile or store failure increments `failed` and the batch
    /// moves on. Nothing escapes this call.
    pub async fn evaluate_batch(
        &self,
        store: &dyn ProfileStore,
        job: &JobRequirement,
        candidate_ids: &[Uuid],
    ) -> BatchReport {
        let mut evaluations = Vec::new();
        let mut failed = 0usize;

        for &candidate_id in candidate_ids {
            let mut candidate = match store.fetch_candidate(candidate_id).await {
                Ok(Some(profile)) => profile,
                Ok(None) => {
                    warn!(%candidate_id, "candidate profile not found, skipping");
                    failed += 1;
                    continue;
                }
                Err(err) => {
                    warn!(%candidate_id, "candidate lookup failed, skipping: {err}");
                    failed += 1;
                    continue;
                }
            };

            fill_readiness(store, candidate_id, &mut candidate).await;
            let evaluation = self.evaluate(&candidate, job).await;
            evaluations.push(BatchItem {
                candidate_id,
                evaluation,
            });
        }

        let report = BatchReport {
            total: candidate_ids.len(),
            evaluated: evaluations.len(),
            failed,
            evaluations,
        };
        info!(
            job = %job.title,
            total = report.total,
            evaluated = report.evaluated,
            failed = report.failed,
            "batch evaluation complete"
        );
        report
    }
}

/// Fills a missing readiness score from the latest completed assessment.
/// A lookup failure leaves the neutral default in place rather than failing
/// the candidate.
async fn fill_readiness(store: &dyn ProfileStore, candidate_id: Uuid, profile: &mut CandidateProfile) {
    if profile.readiness_score.is_some() {
        return;
    }
    match store.latest_readiness(candidate_id).await {
        Ok(score) => profile.readiness_score = score,
        Err(err) => {
            warn!(%candidate_id, "readiness lookup failed, using neutral default: {err}");
        }
    }
}

/// Merges the external judgment into the deterministic result.
fn blend(deterministic: ScoringResult, assessment: AiAssessment) -> BlendedEvaluation {
    let ai_overall = assessment.overall_score.min(100);
    let overall_score = (AI_BLEND_WEIGHT * ai_overall as f64
        + RULE_BLEND_WEIGHT * deterministic.overall_score as f64)
        .round()
        .clamp(0.0, 100.0) as u8;

    let strengths = merge_capped(&deterministic.strengths, &assessment.strengths);
    let gaps = merge_capped(&deterministic.gaps, &assessment.gaps);
    let risk_factors = merge_risks(deterministic.risk_factors, &assessment.risk_factors);

    // Prefer the AI's self-reported level; else derive one from its number;
    // else keep the deterministic level.
    let confidence = assessment
        .confidence_level
        .or_else(|| assessment.confidence.map(ai_confidence_level))
        .unwrap_or(deterministic.confidence);
    let confidence_score = assessment
        .confidence
        .unwrap_or(deterministic.confidence_score)
        .min(100);

    let recommendation = scoring::recommend(overall_score, scoring::count_blockers(&risk_factors));

    let summary = assessment
        .summary
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| synthesize_summary(overall_score, &strengths));
    let interview_questions = non_empty_or(assessment.interview_questions, || {
        synthesize_questions(&gaps)
    });
    let improvement_suggestions = non_empty_or(assessment.improvement_suggestions, || {
        synthesize_improvements(&gaps)
    });

    BlendedEvaluation {
        overall_score,
        confidence,
        confidence_score,
        risk_factors,
        breakdown: deterministic.breakdown,
        strengths,
        gaps,
        recommendation,
        summary,
        interview_questions,
        improvement_suggestions,
        ai_assisted: true,
    }
}

/// Maps the deterministic result into the blended shape, synthesizing the
/// narrative fields.
fn deterministic_fallback(deterministic: ScoringResult) -> BlendedEvaluation {
    let summary = synthesize_summary(deterministic.overall_score, &deterministic.strengths);
    let interview_questions = synthesize_questions(&deterministic.gaps);
    let improvement_suggestions = synthesize_improvements(&deterministic.gaps);

    BlendedEvaluation {
        overall_score: deterministic.overall_score,
        confidence: deterministic.confidence,
        confidence_score: deterministic.confidence_score,
        risk_factors: deterministic.risk_factors,
        breakdown: deterministic.breakdown,
        strengths: deterministic.strengths,
        gaps: deterministic.gaps,
        recommendation: deterministic.recommendation,
        summary,
        interview_questions,
        improvement_suggestions,
        ai_assisted: false,
    }
}

/// AI confidence numbers map onto levels with the thresholds the judgment
/// prompt contracts: >=70 high, >=50 medium, else low.
fn ai_confidence_level(score: u8) -> ConfidenceLevel {
    if score >= 70 {
        ConfidenceLevel::High
    } else if score >= 50 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Union of two string lists, case-insensitively de-duplicated, original
/// order preserved (rule-based entries first), capped.
fn merge_capped(primary: &[String], secondary: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for item in primary.iter().chain(secondary) {
        let key = item.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        merged.push(item.trim().to_string());
        if merged.len() == MAX_LIST_ITEMS {
            break;
        }
    }
    merged
}

/// Union of deterministic risks with AI-supplied risk strings. External
/// narrative may add cautions but never blockers, so it cannot veto a
/// selection the rules allowed. Blockers sort first so the cap never drops
/// one.
fn merge_risks(deterministic: Vec<RiskFactor>, ai_risks: &[String]) -> Vec<RiskFactor> {
    let mut seen: HashSet<String> = deterministic
        .iter()
        .map(|r| r.message.trim().to_lowercase())
        .collect();

    let mut merged = deterministic;
    for message in ai_risks {
        let key = message.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        merged.push(RiskFactor::new(
            Severity::Warning,
            RiskCategory::Profile,
            message.trim(),
        ));
    }

    merged.sort_by_key(|r| std::cmp::Reverse(r.severity.rank()));
    merged.truncate(MAX_LIST_ITEMS);
    merged
}

fn synthesize_summary(overall_score: u8, strengths: &[String]) -> String {
    match strengths.first() {
        Some(top) => format!("Scored {overall_score}/100 by rule-based screening. {top}."),
        None => format!(
            "Scored {overall_score}/100 by rule-based screening with no standout strengths."
        ),
    }
}

fn synthesize_questions(gaps: &[String]) -> Vec<String> {
    if gaps.is_empty() {
        return vec!["Walk through the candidate's most relevant recent work.".to_string()];
    }
    gaps.iter()
        .take(3)
        .map(|gap| format!("Ask the candidate about their {gap}."))
        .collect()
}

fn synthesize_improvements(gaps: &[String]) -> Vec<String> {
    gaps.iter()
        .take(3)
        .map(|gap| format!("Build demonstrable {gap}."))
        .collect()
}

fn non_empty_or(list: Vec<String>, fallback: impl FnOnce() -> Vec<String>) -> Vec<String> {
    if list.is_empty() {
        fallback()
    } else {
        list
    }
}
