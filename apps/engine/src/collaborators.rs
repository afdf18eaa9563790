//! Seams to the excluded outer layers. The engine never talks to a database
//! or an assessment service directly; callers hand it an implementation of
//! this trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{CandidateProfile, JobRequirement};

/// Supplies job and candidate records by identifier, plus the latest
/// completed readiness assessment for a candidate when one exists.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch_job(&self, id: Uuid) -> Result<Option<JobRequirement>, StoreError>;

    async fn fetch_candidate(&self, id: Uuid) -> Result<Option<CandidateProfile>, StoreError>;

    /// Most recent completed readiness score for the candidate, if any.
    /// Scoring substitutes the neutral 50 when this returns `None`.
    async fn latest_readiness(&self, candidate_id: Uuid) -> Result<Option<u8>, StoreError>;
}
