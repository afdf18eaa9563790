//! End-to-end evaluation flow through the public API: store-backed lookup,
//! batch isolation, and the deterministic floor under a failing AI judge.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use engine::ai::{AiAssessment, AiError, AiJudge};
use engine::collaborators::ProfileStore;
use engine::errors::StoreError;
use engine::models::{
    CandidateProfile, ExperienceLevel, JobCategory, JobRequirement, Recommendation, ScoringResult,
};
use engine::Blender;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

struct FixtureStore {
    jobs: HashMap<Uuid, JobRequirement>,
    candidates: HashMap<Uuid, CandidateProfile>,
    readiness: HashMap<Uuid, u8>,
}

#[async_trait]
impl ProfileStore for FixtureStore {
    async fn fetch_job(&self, id: Uuid) -> Result<Option<JobRequirement>, StoreError> {
        Ok(self.jobs.get(&id).cloned())
    }

    async fn fetch_candidate(&self, id: Uuid) -> Result<Option<CandidateProfile>, StoreError> {
        Ok(self.candidates.get(&id).cloned())
    }

    async fn latest_readiness(&self, candidate_id: Uuid) -> Result<Option<u8>, StoreError> {
        Ok(self.readiness.get(&candidate_id).copied())
    }
}

struct AlwaysFailingJudge;

#[async_trait]
impl AiJudge for AlwaysFailingJudge {
    async fn assess(
        &self,
        _candidate: &CandidateProfile,
        _job: &JobRequirement,
        _deterministic: &ScoringResult,
    ) -> Result<AiAssessment, AiError> {
        Err(AiError::EmptyContent)
    }
}

fn software_job() -> JobRequirement {
    JobRequirement {
        id: Uuid::new_v4(),
        title: "Full Stack Engineer".to_string(),
        category: JobCategory::Software,
        experience_level: ExperienceLevel::Mid,
        required_skills: vec!["React".to_string(), "Node.js".to_string()],
    }
}

fn matching_candidate() -> CandidateProfile {
    CandidateProfile {
        id: Uuid::new_v4(),
        skills: vec![
            "react".to_string(),
            "nodejs".to_string(),
            "python".to_string(),
        ],
        years_of_experience: Some(4.0),
        ..Default::default()
    }
}

#[tokio::test]
async fn evaluation_survives_a_judge_that_always_fails() {
    init_tracing();
    let job = software_job();
    let candidate = matching_candidate();

    let with_failing_judge = Blender::new(Some(Arc::new(AlwaysFailingJudge)));
    let deterministic_only = Blender::deterministic_only();

    let fallback = with_failing_judge.evaluate(&candidate, &job).await;
    let baseline = deterministic_only.evaluate(&candidate, &job).await;

    assert!(!fallback.ai_assisted);
    assert_eq!(fallback.overall_score, baseline.overall_score);
    assert_eq!(fallback.recommendation, baseline.recommendation);
    assert_eq!(fallback.breakdown, baseline.breakdown);
    assert_eq!(fallback.risk_factors, baseline.risk_factors);
}

#[tokio::test]
async fn batch_reports_counts_and_keeps_going_past_missing_profiles() {
    init_tracing();
    let job = software_job();
    let known: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let unknown = Uuid::new_v4();

    let store = FixtureStore {
        jobs: HashMap::from([(job.id, job.clone())]),
        candidates: known
            .iter()
            .map(|id| (*id, matching_candidate()))
            .collect(),
        readiness: HashMap::from([(known[0], 90)]),
    };

    let ids: Vec<Uuid> = known.iter().copied().chain([unknown]).collect();
    let report = Blender::deterministic_only()
        .evaluate_batch(&store, &job, &ids)
        .await;

    assert_eq!(report.total, 4);
    assert_eq!(report.evaluated, 3);
    assert_eq!(report.failed, 1);

    // The stored readiness assessment flows into that candidate's breakdown;
    // the others keep the neutral default.
    let by_id: HashMap<Uuid, u8> = report
        .evaluations
        .iter()
        .map(|item| (item.candidate_id, item.evaluation.breakdown.readiness))
        .collect();
    assert_eq!(by_id[&known[0]], 90);
    assert_eq!(by_id[&known[1]], 50);
}

#[tokio::test]
async fn id_based_evaluation_resolves_records_and_reports_missing_ones() {
    init_tracing();
    let job = software_job();
    let candidate = matching_candidate();
    let candidate_id = candidate.id;

    let store = FixtureStore {
        jobs: HashMap::from([(job.id, job.clone())]),
        candidates: HashMap::from([(candidate_id, candidate)]),
        readiness: HashMap::new(),
    };

    let blender = Blender::deterministic_only();

    let evaluation = blender
        .evaluate_by_id(&store, job.id, candidate_id)
        .await
        .expect("store should not fail")
        .expect("both records exist");
    assert!(!evaluation.summary.is_empty());
    assert_eq!(evaluation.recommendation, Recommendation::Review);

    let missing_candidate = blender
        .evaluate_by_id(&store, job.id, Uuid::new_v4())
        .await
        .expect("store should not fail");
    assert!(missing_candidate.is_none());
}
