mod engine;
mod factors;
mod weights;

pub use engine::score;
pub use weights::{weights_for, FactorWeights};

pub(crate) use engine::{count_blockers, recommend};
