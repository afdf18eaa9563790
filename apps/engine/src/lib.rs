//! Candidate evaluation engine.
//!
//! Scores a candidate profile against a job's requirements and produces a
//! bounded, auditable evaluation: overall score, confidence, risk factors,
//! per-factor breakdown, strengths, gaps and a recommendation.
//!
//! Three layers, leaf-first:
//! - [`skills`]: canonicalizes free-text skill names and computes
//!   set-overlap match scores.
//! - [`scoring`]: the deterministic engine. Total and reproducible; missing
//!   inputs become zero sub-scores and risk factors, never errors.
//! - [`blend`]: runs the deterministic engine, optionally folds in the
//!   external AI judgment, and always returns a complete evaluation.
//!
//! HTTP routing, persistence and resume parsing are outside this crate;
//! they plug in through [`collaborators::ProfileStore`] and store the
//! returned [`models::BlendedEvaluation`] against the application record.

pub mod ai;
pub mod blend;
pub mod collaborators;
pub mod config;
pub mod errors;
pub mod models;
pub mod scoring;
pub mod skills;

pub use blend::Blender;
pub use config::EngineConfig;
pub use models::{
    BatchReport, BlendedEvaluation, CandidateProfile, JobRequirement, ScoringResult,
};
