//! Keyed field extractors over JSON records.
//!
//! These build the extractor half of a runtime-typed rule for sources that
//! are `serde_json::Value` objects. A missing key, a JSON `null`, a value of
//! the wrong JSON type, or a number outside the target range all yield
//! `None`, which skips the rule for that record.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use super::DynExtractor;

/// Factory for creating JSON field extractors
pub struct JsonExtractors;

impl JsonExtractors {
    /// Create a string extractor for a field
    ///
    /// Extracted values are boxed as `String`.
    #[must_use] pub fn string(field_name: &str) -> DynExtractor<Value> {
        let field_name = field_name.to_string();
        Arc::new(move |record: &Value| {
            record
                .get(field_name.as_str())
                .and_then(Value::as_str)
                .map(|value| Box::new(value.to_string()) as Box<dyn Any>)
        })
    }

    /// Create an integer extractor for a field
    ///
    /// Extracted values are boxed as `i64`.
    #[must_use] pub fn integer(field_name: &str) -> DynExtractor<Value> {
        let field_name = field_name.to_string();
        Arc::new(move |record: &Value| {
            record
                .get(field_name.as_str())
                .and_then(Value::as_i64)
                .map(|value| Box::new(value) as Box<dyn Any>)
        })
    }

    /// Create a float extractor for a field
    ///
    /// Extracted values are boxed as `f64`.
    #[must_use] pub fn float(field_name: &str) -> DynExtractor<Value> {
        let field_name = field_name.to_string();
        Arc::new(move |record: &Value| {
            record
                .get(field_name.as_str())
                .and_then(Value::as_f64)
                .map(|value| Box::new(value) as Box<dyn Any>)
        })
    }

    /// Create a boolean extractor for a field
    ///
    /// Extracted values are boxed as `bool`.
    #[must_use] pub fn boolean(field_name: &str) -> DynExtractor<Value> {
        let field_name = field_name.to_string();
        Arc::new(move |record: &Value| {
            record
                .get(field_name.as_str())
                .and_then(Value::as_bool)
                .map(|value| Box::new(value) as Box<dyn Any>)
        })
    }
}
