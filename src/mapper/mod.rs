//! Typed field mapping between a source and a destination model.
//!
//! This module defines the statically typed rule table. Each rule is built
//! from plain closures supplied at registration time: an accessor reading one
//! field out of the source, a mutator writing one field of the destination,
//! and optionally a transform bridging the two value types. Mismatched value
//! types are rejected by the compiler at the registration call site, so
//! execution never fails.

use std::sync::Arc;

use log::{debug, trace};

/// A trait for functions that transfer one field from a source to a destination
pub trait MapRule<S, D>: Fn(&S, &mut D) + Send + Sync + 'static {}

// Implement the trait for all compatible function types
impl<F, S, D> MapRule<S, D> for F where F: Fn(&S, &mut D) + Send + Sync + 'static {}

/// An ordered rule table transferring fields from `S` into `D`
///
/// Rules run in registration order; a later rule targeting the same
/// destination field overwrites the earlier write. The mapper holds no
/// per-execution state, so one definition can be applied to any number of
/// independent source instances.
///
/// Registration takes `&mut self` and execution takes `&self`, so a mapper
/// parked in a shared or static slot can no longer be mutated, and concurrent
/// `apply` calls on the same instance are safe.
pub struct FieldMapper<S, D> {
    /// Registered rules, in registration order
    rules: Vec<Arc<dyn MapRule<S, D>>>,
}

impl<S, D> FieldMapper<S, D> {
    /// Create an empty mapper
    #[must_use] pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a direct field rule
    ///
    /// The accessor and mutator must agree on the value type `V`.
    pub fn add_mapping<V, A, M>(&mut self, accessor: A, mutator: M)
    where
        A: Fn(&S) -> V + Send + Sync + 'static,
        M: Fn(&mut D, V) + Send + Sync + 'static,
    {
        trace!("registering direct rule {}", self.rules.len());
        let rule: Arc<dyn MapRule<S, D>> = Arc::new(move |source: &S, destination: &mut D| {
            mutator(destination, accessor(source));
        });
        self.rules.push(rule);
    }

    /// Register a field rule with an explicit value conversion
    pub fn add_mapping_with<V1, V2, A, M, T>(&mut self, accessor: A, mutator: M, transform: T)
    where
        A: Fn(&S) -> V1 + Send + Sync + 'static,
        M: Fn(&mut D, V2) + Send + Sync + 'static,
        T: Fn(V1) -> V2 + Send + Sync + 'static,
    {
        trace!("registering transforming rule {}", self.rules.len());
        let rule: Arc<dyn MapRule<S, D>> = Arc::new(move |source: &S, destination: &mut D| {
            mutator(destination, transform(accessor(source)));
        });
        self.rules.push(rule);
    }

    /// Register a rule writing a present source value into an optional
    /// destination field
    ///
    /// The identity transform lifted into `Option`: the mutator always
    /// receives `Some(value)`.
    pub fn add_optional_mapping<V: 'static, A, M>(&mut self, accessor: A, mutator: M)
    where
        A: Fn(&S) -> V + Send + Sync + 'static,
        M: Fn(&mut D, Option<V>) + Send + Sync + 'static,
    {
        self.add_mapping_with(accessor, mutator, Some);
    }

    /// Builder form of [`add_mapping`](Self::add_mapping)
    #[must_use] pub fn with_mapping<V, A, M>(mut self, accessor: A, mutator: M) -> Self
    where
        A: Fn(&S) -> V + Send + Sync + 'static,
        M: Fn(&mut D, V) + Send + Sync + 'static,
    {
        self.add_mapping(accessor, mutator);
        self
    }

    /// Builder form of [`add_mapping_with`](Self::add_mapping_with)
    #[must_use] pub fn with_mapping_with<V1, V2, A, M, T>(
        mut self,
        accessor: A,
        mutator: M,
        transform: T,
    ) -> Self
    where
        A: Fn(&S) -> V1 + Send + Sync + 'static,
        M: Fn(&mut D, V2) + Send + Sync + 'static,
        T: Fn(V1) -> V2 + Send + Sync + 'static,
    {
        self.add_mapping_with(accessor, mutator, transform);
        self
    }

    /// Builder form of [`add_optional_mapping`](Self::add_optional_mapping)
    #[must_use] pub fn with_optional_mapping<V: 'static, A, M>(mut self, accessor: A, mutator: M) -> Self
    where
        A: Fn(&S) -> V + Send + Sync + 'static,
        M: Fn(&mut D, Option<V>) + Send + Sync + 'static,
    {
        self.add_optional_mapping(accessor, mutator);
        self
    }

    /// Apply every rule, in registration order, against a fresh destination
    ///
    /// The destination is constructed exactly once per call and every rule
    /// runs exactly once; nothing is skipped conditionally.
    pub fn apply<F>(&self, source: &S, make_destination: F) -> D
    where
        F: FnOnce() -> D,
    {
        debug!("applying {} mapping rule(s)", self.rules.len());
        let mut destination = make_destination();
        for rule in &self.rules {
            rule(source, &mut destination);
        }
        destination
    }

    /// Apply the mapper to each source, producing one destination per source
    pub fn apply_all<'s, I, F>(&self, sources: I, make_destination: F) -> Vec<D>
    where
        S: 's,
        I: IntoIterator<Item = &'s S>,
        F: Fn() -> D,
    {
        sources
            .into_iter()
            .map(|source| self.apply(source, &make_destination))
            .collect()
    }

    /// Number of registered rules
    #[must_use] pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether no rules have been registered
    #[must_use] pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S, D> Default for FieldMapper<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

// Not derived: a derive would require S: Clone and D: Clone, which the shared
// rule storage does not need.
impl<S, D> Clone for FieldMapper<S, D> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}
