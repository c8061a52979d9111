//! ResourceArc wrappers
//!
//! Persistent state for streaming validators held by BEAM processes.

use crate::core::{Validator, ValidatorConfig};
use rustler::ResourceArc;
use std::sync::Mutex;

/// Wrapper for a Validator that can be stored in a ResourceArc.
/// `finish` consumes the validator, leaving `None` behind.
pub struct StreamingValidatorResource {
    pub inner: Mutex<Option<Validator>>,
}

impl StreamingValidatorResource {
    pub fn new(config: ValidatorConfig) -> Self {
        StreamingValidatorResource {
            inner: Mutex::new(Some(Validator::new(config))),
        }
    }

    /// Run `f` against the live validator.
    ///
    /// # Errors
    ///
    /// Returns `"mutex_poisoned"` if the mutex is poisoned,
    /// or `"finished"` if the validator was already finished.
    pub fn with_validator<F, R>(&self, f: F) -> Result<R, &'static str>
    where
        F: FnOnce(&mut Validator) -> R,
    {
        let mut guard = self.inner.lock().map_err(|_| "mutex_poisoned")?;
        let validator = guard.as_mut().ok_or("finished")?;
        Ok(f(validator))
    }

    /// Take the validator out for finishing
    pub fn take(&self) -> Result<Validator, &'static str> {
        let mut guard = self.inner.lock().map_err(|_| "mutex_poisoned")?;
        guard.take().ok_or("finished")
    }
}

#[rustler::resource_impl]
impl rustler::Resource for StreamingValidatorResource {}

impl Default for StreamingValidatorResource {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Type alias for the ResourceArc
pub type StreamingValidatorRef = ResourceArc<StreamingValidatorResource>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_then_finish() {
        let resource = StreamingValidatorResource::default();
        let fed = resource.with_validator(|v| v.feed(b"<a></a>"));
        assert_eq!(fed, Ok(Ok(())));

        let validator = resource.take().unwrap();
        assert!(validator.finish().is_ok());
    }

    #[test]
    fn test_use_after_finish() {
        let resource = StreamingValidatorResource::default();
        assert!(resource.take().is_ok());
        assert_eq!(resource.take().err(), Some("finished"));
        assert_eq!(
            resource.with_validator(|v| v.bytes_consumed()),
            Err("finished")
        );
    }
}
