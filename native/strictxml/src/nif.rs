//! NIF bindings for `Elixir.StrictXml.Native`

use rustler::{Binary, Encoder, Env, NifResult, ResourceArc, Term};

use crate::core::ValidatorConfig;
use crate::resource::{StreamingValidatorRef, StreamingValidatorResource};
use crate::strategy::validate_batch;
use crate::term::{resource_error_to_term, result_to_term};

// ============================================================================
// Single Pass
// ============================================================================

/// Validate a whole binary, boolean only
#[rustler::nif]
fn is_valid(input: Binary) -> bool {
    crate::is_valid_bytes(input.as_slice())
}

/// Validate a whole binary (returns :ok or {:error, {kind, offset, message}})
#[rustler::nif]
fn validate<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    result_to_term(env, crate::validate_bytes(input.as_slice()))
}

#[rustler::nif]
fn validate_with_depth<'a>(env: Env<'a>, input: Binary<'a>, max_depth: u32) -> NifResult<Term<'a>> {
    let config = ValidatorConfig::default().with_max_depth(max_depth);
    result_to_term(env, crate::validate_bytes_with_config(input.as_slice(), config))
}

// ============================================================================
// Batch
// ============================================================================

/// Validate many binaries in parallel; results follow input order
#[rustler::nif(schedule = "DirtyCpu")]
fn is_valid_batch<'a>(inputs: Vec<Binary<'a>>) -> Vec<bool> {
    let slices: Vec<&[u8]> = inputs.iter().map(|b| b.as_slice()).collect();
    validate_batch(&slices, ValidatorConfig::default())
}

// ============================================================================
// Streaming
// ============================================================================

#[rustler::nif]
fn streaming_new() -> StreamingValidatorRef {
    ResourceArc::new(StreamingValidatorResource::default())
}

#[rustler::nif]
fn streaming_new_with_depth(max_depth: u32) -> StreamingValidatorRef {
    let config = ValidatorConfig::default().with_max_depth(max_depth);
    ResourceArc::new(StreamingValidatorResource::new(config))
}

/// Feed a chunk; errors are sticky for the rest of the stream
#[rustler::nif]
fn streaming_feed<'a>(
    env: Env<'a>,
    validator: StreamingValidatorRef,
    chunk: Binary<'a>,
) -> NifResult<Term<'a>> {
    match validator.with_validator(|v| v.feed(chunk.as_slice())) {
        Ok(result) => result_to_term(env, result),
        Err(reason) => resource_error_to_term(env, reason),
    }
}

/// Finish the stream; the resource cannot be fed afterwards
#[rustler::nif]
fn streaming_finish<'a>(env: Env<'a>, validator: StreamingValidatorRef) -> NifResult<Term<'a>> {
    match validator.take() {
        Ok(v) => result_to_term(env, v.finish()),
        Err(reason) => resource_error_to_term(env, reason),
    }
}

/// {bytes_consumed, element_count, failed?}
#[rustler::nif]
fn streaming_status<'a>(env: Env<'a>, validator: StreamingValidatorRef) -> NifResult<Term<'a>> {
    let status = validator.with_validator(|v| (v.bytes_consumed(), v.element_count(), v.is_failed()));
    match status {
        Ok(status) => Ok(status.encode(env)),
        Err(reason) => resource_error_to_term(env, reason),
    }
}

rustler::init!("Elixir.StrictXml.Native");
