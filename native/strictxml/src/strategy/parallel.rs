//! Parallel batch validation
//!
//! Uses Rayon to validate many independent documents at once. Each document
//! gets its own validator, so no state is shared between items.

use rayon::prelude::*;

use crate::core::ValidatorConfig;
use crate::error::ValidationError;
use crate::validate_bytes_with_config;

/// Validate multiple documents in parallel, preserving input order
pub fn validate_batch(inputs: &[&[u8]], config: ValidatorConfig) -> Vec<bool> {
    inputs
        .par_iter()
        .map(|input| validate_bytes_with_config(input, config).is_ok())
        .collect()
}

/// Like `validate_batch`, keeping the first violation of each document
pub fn validate_batch_detailed(
    inputs: &[&[u8]],
    config: ValidatorConfig,
) -> Vec<Result<(), ValidationError>> {
    inputs
        .par_iter()
        .map(|input| validate_bytes_with_config(input, config))
        .collect()
}
