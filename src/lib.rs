//! A Rust library for declarative, type-checked field mapping between source
//! and destination models.
//!
//! A mapper is an ordered table of field-transfer rules bound to one
//! (source, destination) type pair. Each rule reads one field out of the
//! source, optionally transforms the value, and writes it into the
//! destination. Applying the mapper folds every rule, in registration order,
//! over a destination built by a caller-supplied factory, so one definition
//! can be replayed against any number of independent source instances.
//!
//! Two rule tables are provided:
//!
//! - [`FieldMapper`]: rules built from typed closures; mismatched value types
//!   are rejected by the compiler at the registration call site and
//!   application cannot fail.
//! - [`DynFieldMapper`]: rules whose values cross as `Box<dyn Any>`, for
//!   mappings assembled from field names at runtime; type disagreements
//!   surface as [`MapperError::IncompatibleTypes`].

pub mod config;
pub mod dynamic;
pub mod error;
pub mod mapper;

mod macros;

// Re-export the most common types for easier use
// Core types
pub use config::MapperConfig;
pub use error::{MapperError, Result, RuleFailure};
pub use mapper::{FieldMapper, MapRule};

// Runtime-typed mapping
pub use dynamic::json::JsonExtractors;
pub use dynamic::{DynExtractor, DynFieldMapper, DynRule, DynSetter, DynSetters, SetOutcome};
