//! Elixir term conversion utilities
//!
//! Results become `:ok` or `{:error, {kind, offset | nil, message}}`.

use rustler::{Atom, Encoder, Env, NifResult, Term};

use crate::error::ValidationError;

rustler::atoms! {
    ok,
    error,
}

/// Convert a validation result to an Elixir term
pub fn result_to_term<'a>(env: Env<'a>, result: Result<(), ValidationError>) -> NifResult<Term<'a>> {
    match result {
        Ok(()) => Ok(ok().encode(env)),
        Err(err) => error_to_term(env, &err),
    }
}

/// `{:error, {kind, offset, message}}`
pub fn error_to_term<'a>(env: Env<'a>, err: &ValidationError) -> NifResult<Term<'a>> {
    let kind = Atom::from_str(env, err.kind())?;
    let detail = (kind, err.offset(), err.to_string());
    Ok((error(), detail).encode(env))
}

/// `{:error, reason}` for resource failures (finished validator, poisoned mutex)
pub fn resource_error_to_term<'a>(env: Env<'a>, reason: &str) -> NifResult<Term<'a>> {
    let reason = Atom::from_str(env, reason)?;
    Ok((error(), reason).encode(env))
}
