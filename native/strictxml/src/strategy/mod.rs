//! Validation strategies
//!
//! - Single pass: `crate::validate` over a whole buffer
//! - Streaming: `core::Validator::feed` over chunks
//! - Parallel: independent documents across a Rayon pool

pub mod parallel;

pub use parallel::{validate_batch, validate_batch_detailed};
