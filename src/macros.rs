//! Macros for declaring field mappers.
//!
//! This module provides a macro to reduce boilerplate when declaring a mapper
//! as one literal block.

/// Macro to declare a typed field mapper
///
/// Each rule entry pairs a `get` accessor with a `set` mutator and may carry
/// an optional `transform` bridging their value types. Entries run in the
/// order they are written.
///
/// # Example
///
/// ```rust
/// use model_mapper::field_mapper;
///
/// struct Episode {
///     id: i32,
///     title: String,
/// }
///
/// #[derive(Default)]
/// struct EpisodeModel {
///     id: Option<i32>,
///     title: Option<String>,
///     summary: String,
/// }
///
/// let mapper = field_mapper! {
///     source: Episode,
///     destination: EpisodeModel,
///     rules: [
///         { get: |e| e.id, set: |m, v| m.id = Some(v) },
///         { get: |e| e.title.clone(), set: |m, v| m.title = Some(v) },
///         {
///             get: |e| e.title.clone(),
///             set: |m, v| m.summary = v,
///             transform: |title: String| title.to_uppercase(),
///         },
///     ]
/// };
///
/// let episode = Episode { id: 1, title: "First Episode".to_string() };
/// let model = mapper.apply(&episode, EpisodeModel::default);
/// assert_eq!(model.summary, "FIRST EPISODE");
/// ```
#[macro_export]
macro_rules! field_mapper {
    (
        source: $source:ty,
        destination: $destination:ty,
        rules: [
            $(
                { get: $accessor:expr, set: $mutator:expr $(, transform: $transform:expr)? $(,)? }
            ),* $(,)?
        ] $(,)?
    ) => {{
        let mut mapper = $crate::FieldMapper::<$source, $destination>::new();
        $(
            $crate::__field_mapper_rule!(mapper, $accessor, $mutator $(, $transform)?);
        )*
        mapper
    }};
}

/// Registers one rule entry for [`field_mapper!`]; not part of the public API
#[doc(hidden)]
#[macro_export]
macro_rules! __field_mapper_rule {
    ($mapper:ident, $accessor:expr, $mutator:expr) => {
        $mapper.add_mapping($accessor, $mutator);
    };
    ($mapper:ident, $accessor:expr, $mutator:expr, $transform:expr) => {
        $mapper.add_mapping_with($accessor, $mutator, $transform);
    };
}
