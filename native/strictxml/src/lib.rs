//! StrictXML - single-pass validation of simplified XML under strict tag rules
//!
//! A document is valid when every tag is opened and closed in order and:
//! 1. no tag directly contains a tag of the same name
//! 2. no tag is immediately followed by a sibling of the same name
//! 3. nothing nests more than 2 levels below a top-level tag
//!
//! Attributes, declarations, comments, CDATA, entities and namespaces are
//! not supported; off-grammar bytes inside a tag are dropped from its name.
//!
//! Strategies:
//! - Single pass over a buffer (is_valid, validate)
//! - Streaming over chunks (core::Validator)
//! - Parallel batches (strategy::validate_batch)

pub mod core;
pub mod dom;
pub mod error;
pub mod strategy;

#[cfg(feature = "nif")]
mod nif;
#[cfg(feature = "nif")]
mod resource;
#[cfg(feature = "nif")]
mod term;

pub use crate::core::{Validator, ValidatorConfig};
pub use crate::error::ValidationError;
pub use crate::strategy::{validate_batch, validate_batch_detailed};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Single Pass
// ============================================================================

/// Check whether `input` is a valid document
#[inline]
pub fn is_valid(input: &str) -> bool {
    is_valid_bytes(input.as_bytes())
}

/// Byte-oriented `is_valid`; non-ASCII bytes are never part of a name
#[inline]
pub fn is_valid_bytes(input: &[u8]) -> bool {
    validate_bytes(input).is_ok()
}

/// Validate `input`, reporting the first violation
pub fn validate(input: &str) -> Result<(), ValidationError> {
    validate_bytes(input.as_bytes())
}

pub fn validate_bytes(input: &[u8]) -> Result<(), ValidationError> {
    validate_bytes_with_config(input, ValidatorConfig::default())
}

pub fn validate_bytes_with_config(
    input: &[u8],
    config: ValidatorConfig,
) -> Result<(), ValidationError> {
    let mut validator = Validator::new(config);
    validator.feed(input)?;
    validator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert!(is_valid("<a />"));
        assert!(is_valid("<a></a>"));
        assert!(is_valid("<a>test</a>"));
        assert!(is_valid("<a><b></b></a>"));
        assert!(is_valid("<a></a><b></b>"));

        assert!(!is_valid("<a>"));
        assert!(!is_valid("<<a></a>"));
        assert!(!is_valid("<a><b></a></b>"));
    }

    #[test]
    fn test_custom_rules() {
        assert!(!is_valid("<a><a></a></a>"));
        assert!(!is_valid("<a></a><a></a>"));
        assert!(!is_valid("<a><b><c><d></d></c></b></a>"));
        assert!(is_valid("<a><b><c></c></b></a>"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!is_valid(""));
        assert_eq!(validate(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validate_reports_kind() {
        let err = validate("<a><b></a></b>").unwrap_err();
        assert_eq!(err.kind(), "interleaved_close");
        assert_eq!(err.offset(), Some(6));
    }

    #[test]
    fn test_bytes_api() {
        assert!(is_valid_bytes(b"<a>\xff\xfe</a>"));
        assert!(!is_valid_bytes(b"<a>\xff"));
    }

    #[test]
    fn test_with_config() {
        let shallow = ValidatorConfig::default().with_max_depth(1);
        assert!(validate_bytes_with_config(b"<a><b></b></a>", shallow).is_ok());
        assert!(validate_bytes_with_config(b"<a><b><c></c></b></a>", shallow).is_err());
    }
}
