use thiserror::Error;

/// Failure reported by a persistence collaborator. A store error inside a
/// batch fails that candidate only; the batch itself keeps going.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record lookup failed: {0}")]
    Lookup(String),

    #[error("store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}
