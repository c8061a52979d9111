//! Core validation primitives
//!
//! - Scanner: SIMD-accelerated markup detection using memchr
//! - Config: validator limits
//! - Validator: the single-pass state machine enforcing the tag rules

pub mod config;
pub mod scanner;
pub mod validator;

pub use config::ValidatorConfig;
pub use validator::Validator;
