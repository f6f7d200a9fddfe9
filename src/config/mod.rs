//! Configuration for mapper execution.

/// Configuration for the runtime-typed mapping path
///
/// The statically typed [`FieldMapper`](crate::FieldMapper) has no failure
/// modes to configure; these settings only affect
/// [`DynFieldMapper::apply`](crate::DynFieldMapper::apply).
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Whether the first failing rule aborts the whole application
    pub fail_fast: bool,
    /// Log each rule failure before reporting it
    pub log_rule_failures: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            fail_fast: true,
            log_rule_failures: true,
        }
    }
}

impl MapperConfig {
    /// Set whether the first failing rule aborts the whole application
    #[must_use] pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Set whether rule failures are logged before being reported
    #[must_use] pub fn with_log_rule_failures(mut self, log_rule_failures: bool) -> Self {
        self.log_rule_failures = log_rule_failures;
        self
    }
}
