//! Validator configuration

/// Levels of nesting allowed below a top-level element
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Limits applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// How many levels may nest below a top-level element.
    /// With the default of 2, `<a><b><c/></b></a>` is the deepest legal shape.
    pub max_depth: u32,
}

impl ValidatorConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Largest reconciled depth a closing tag may reach.
    /// Top-level elements sit at depth 1, so the limit is one above `max_depth`.
    #[inline]
    pub fn depth_limit(&self) -> u32 {
        self.max_depth.saturating_add(1)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.depth_limit(), 3);
    }

    #[test]
    fn test_with_max_depth() {
        let config = ValidatorConfig::default().with_max_depth(0);
        assert_eq!(config.depth_limit(), 1);
        assert_eq!(ValidatorConfig::default().with_max_depth(u32::MAX).depth_limit(), u32::MAX);
    }
}
