//! Runtime-typed mapping rules.
//!
//! Rules on this path are still registered explicitly, but the value crosses
//! the extractor/setter boundary as `Box<dyn Any>`, so the two halves of a
//! rule can disagree about the value type. That disagreement cannot be
//! rejected at registration time; it surfaces from
//! [`DynFieldMapper::apply`] as
//! [`MapperError::IncompatibleTypes`](crate::MapperError::IncompatibleTypes)
//! instead of being dropped.
//!
//! An extractor returning `None` means the field is absent from the source
//! record, and the rule is skipped for that record.

pub mod json;

use std::any::Any;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::MapperConfig;
use crate::error::{MapperError, Result, RuleFailure};

/// Outcome of offering a runtime-typed value to a setter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value matched the expected type and was written
    Written,
    /// The value was not of the expected type; nothing was written
    TypeMismatch {
        /// The value type the setter expected
        expected: &'static str,
    },
}

/// A trait for setters that receive a runtime-typed value
pub trait DynSetter<D>: Fn(&mut D, Box<dyn Any>) -> SetOutcome + Send + Sync + 'static {}

// Implement the trait for all compatible function types
impl<F, D> DynSetter<D> for F where
    F: Fn(&mut D, Box<dyn Any>) -> SetOutcome + Send + Sync + 'static
{
}

/// Extractor closure reading one field out of a source record
pub type DynExtractor<S> = Arc<dyn Fn(&S) -> Option<Box<dyn Any>> + Send + Sync>;

/// Type-safe setter factory for the runtime-typed path
pub struct DynSetters;

impl DynSetters {
    /// Build a setter from a closure expecting a value of type `V`
    ///
    /// The returned setter downcasts the boxed value and reports a mismatch
    /// instead of writing anything.
    pub fn typed<D, V, F>(setter_fn: F) -> Arc<dyn DynSetter<D>>
    where
        V: 'static,
        F: Fn(&mut D, V) + Send + Sync + 'static,
    {
        Arc::new(
            move |destination: &mut D, value: Box<dyn Any>| match value.downcast::<V>() {
                Ok(value) => {
                    setter_fn(destination, *value);
                    SetOutcome::Written
                }
                Err(_) => SetOutcome::TypeMismatch {
                    expected: std::any::type_name::<V>(),
                },
            },
        )
    }
}

/// A labeled runtime-typed rule
pub struct DynRule<S, D> {
    /// Name of the source field this rule reads
    pub field: String,
    /// Function extracting the field value from a source record
    extractor: DynExtractor<S>,
    /// Function writing the extracted value onto the destination
    setter: Arc<dyn DynSetter<D>>,
}

impl<S, D> DynRule<S, D> {
    /// Create a new rule for the named field
    pub fn new(
        field: impl Into<String>,
        extractor: DynExtractor<S>,
        setter: Arc<dyn DynSetter<D>>,
    ) -> Self {
        Self {
            field: field.into(),
            extractor,
            setter,
        }
    }

    /// Run this rule against one source/destination pair
    fn run(&self, source: &S, destination: &mut D) -> std::result::Result<(), RuleFailure> {
        let Some(value) = (self.extractor)(source) else {
            // Absent field, nothing to transfer
            return Ok(());
        };
        match (self.setter)(destination, value) {
            SetOutcome::Written => Ok(()),
            SetOutcome::TypeMismatch { expected } => Err(RuleFailure {
                field: self.field.clone(),
                expected,
            }),
        }
    }
}

impl<S, D> Clone for DynRule<S, D> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            extractor: self.extractor.clone(),
            setter: self.setter.clone(),
        }
    }
}

/// An ordered table of runtime-typed rules transferring fields from `S` into `D`
///
/// The execution contract matches [`FieldMapper`](crate::FieldMapper): rules
/// run in registration order against a destination built once per call, and
/// the mapper itself holds no per-execution state. The difference is that
/// application can fail, with the policy chosen by [`MapperConfig`].
pub struct DynFieldMapper<S, D> {
    /// Registered rules, in registration order
    rules: Vec<DynRule<S, D>>,
    /// Error policy for application
    config: MapperConfig,
}

impl<S, D> DynFieldMapper<S, D> {
    /// Create an empty mapper with the default configuration
    #[must_use] pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    /// Create an empty mapper with an explicit configuration
    #[must_use] pub fn with_config(config: MapperConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Register a rule for the named field
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        extractor: DynExtractor<S>,
        setter: Arc<dyn DynSetter<D>>,
    ) {
        self.rules.push(DynRule::new(field, extractor, setter));
    }

    /// Look up a rule by field name
    #[must_use] pub fn rule(&self, field: &str) -> Option<&DynRule<S, D>> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Check whether a rule is registered for the named field
    #[must_use] pub fn has_field(&self, field: &str) -> bool {
        self.rule(field).is_some()
    }

    /// Number of registered rules
    #[must_use] pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether no rules have been registered
    #[must_use] pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule, in registration order, against a fresh destination
    ///
    /// With `fail_fast` set, the first incompatible rule aborts the call.
    /// Otherwise every rule runs and all failures are reported together as
    /// [`MapperError::RuleFailures`]; the partially populated destination is
    /// discarded either way.
    pub fn apply<F>(&self, source: &S, make_destination: F) -> Result<D>
    where
        F: FnOnce() -> D,
    {
        debug!("applying {} runtime-typed rule(s)", self.rules.len());
        let mut destination = make_destination();
        let mut failures = Vec::new();
        for rule in &self.rules {
            if let Err(failure) = rule.run(source, &mut destination) {
                if self.config.log_rule_failures {
                    warn!("mapping rule failed: {failure}");
                }
                if self.config.fail_fast {
                    return Err(MapperError::IncompatibleTypes {
                        field: failure.field,
                        expected: failure.expected,
                    });
                }
                failures.push(failure);
            }
        }

        if failures.is_empty() {
            Ok(destination)
        } else {
            Err(MapperError::RuleFailures(failures))
        }
    }
}

impl<S, D> Default for DynFieldMapper<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D> Clone for DynFieldMapper<S, D> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            config: self.config.clone(),
        }
    }
}
