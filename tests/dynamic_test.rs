//! Integration tests for the runtime-typed mapping path.

use model_mapper::{
    DynFieldMapper, DynSetters, JsonExtractors, MapperConfig, MapperError, Result,
};
use serde_json::{Value, json};

#[derive(Debug, Default, PartialEq)]
struct EpisodeModel {
    id: Option<i64>,
    title: Option<String>,
    rating: Option<f64>,
    explicit: Option<bool>,
}

fn episode_record() -> Value {
    json!({
        "id": 1,
        "title": "First Episode",
        "rating": 4.5,
        "explicit": false,
    })
}

fn episode_mapper() -> DynFieldMapper<Value, EpisodeModel> {
    let mut mapper = DynFieldMapper::new();
    mapper.add_rule(
        "id",
        JsonExtractors::integer("id"),
        DynSetters::typed(|m: &mut EpisodeModel, v: i64| m.id = Some(v)),
    );
    mapper.add_rule(
        "title",
        JsonExtractors::string("title"),
        DynSetters::typed(|m: &mut EpisodeModel, v: String| m.title = Some(v)),
    );
    mapper.add_rule(
        "rating",
        JsonExtractors::float("rating"),
        DynSetters::typed(|m: &mut EpisodeModel, v: f64| m.rating = Some(v)),
    );
    mapper.add_rule(
        "explicit",
        JsonExtractors::boolean("explicit"),
        DynSetters::typed(|m: &mut EpisodeModel, v: bool| m.explicit = Some(v)),
    );
    mapper
}

#[test]
fn test_json_record_populates_model() -> Result<()> {
    let mapper = episode_mapper();
    let model = mapper.apply(&episode_record(), EpisodeModel::default)?;

    assert_eq!(model.id, Some(1));
    assert_eq!(model.title, Some("First Episode".to_string()));
    assert_eq!(model.rating, Some(4.5));
    assert_eq!(model.explicit, Some(false));
    Ok(())
}

#[test]
fn test_mapper_is_reusable_across_records() -> Result<()> {
    let mapper = episode_mapper();

    let first = mapper.apply(&episode_record(), EpisodeModel::default)?;
    let second = mapper.apply(
        &json!({ "id": 2, "title": "Second Episode" }),
        EpisodeModel::default,
    )?;

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    // Fields absent from the second record stay at the factory default
    assert_eq!(second.rating, None);
    assert_eq!(second.explicit, None);
    Ok(())
}

#[test]
fn test_incompatible_rule_fails_fast() {
    let mut mapper = episode_mapper();
    // Extractor boxes an i64, setter expects a String
    mapper.add_rule(
        "id",
        JsonExtractors::integer("id"),
        DynSetters::typed(|m: &mut EpisodeModel, v: String| m.title = Some(v)),
    );

    let result = mapper.apply(&episode_record(), EpisodeModel::default);
    match result {
        Err(MapperError::IncompatibleTypes { field, expected }) => {
            assert_eq!(field, "id");
            assert!(expected.contains("String"));
        }
        other => panic!("expected an incompatible-types error, got {other:?}"),
    }
}

#[test]
fn test_collect_policy_reports_every_failure() {
    let config = MapperConfig::default()
        .with_fail_fast(false)
        .with_log_rule_failures(false);

    let mut mapper: DynFieldMapper<Value, EpisodeModel> = DynFieldMapper::with_config(config);
    mapper.add_rule(
        "id",
        JsonExtractors::integer("id"),
        DynSetters::typed(|m: &mut EpisodeModel, v: String| m.title = Some(v)),
    );
    mapper.add_rule(
        "title",
        JsonExtractors::string("title"),
        DynSetters::typed(|m: &mut EpisodeModel, v: String| m.title = Some(v)),
    );
    mapper.add_rule(
        "rating",
        JsonExtractors::float("rating"),
        DynSetters::typed(|m: &mut EpisodeModel, v: bool| m.explicit = Some(v)),
    );

    let result = mapper.apply(&episode_record(), EpisodeModel::default);
    match result {
        Err(MapperError::RuleFailures(failures)) => {
            // Failures are reported in registration order
            assert_eq!(failures.len(), 2);
            assert_eq!(failures[0].field, "id");
            assert_eq!(failures[1].field, "rating");
        }
        other => panic!("expected a collected failure report, got {other:?}"),
    }
}

#[test]
fn test_absent_fields_are_skipped() -> Result<()> {
    let mapper = episode_mapper();
    let model = mapper.apply(&json!({}), EpisodeModel::default)?;

    assert_eq!(model, EpisodeModel::default());
    Ok(())
}

#[test]
fn test_later_rule_overwrites_earlier_write() -> Result<()> {
    let mut mapper = episode_mapper();
    mapper.add_rule(
        "title",
        JsonExtractors::string("title"),
        DynSetters::typed(|m: &mut EpisodeModel, v: String| m.title = Some(v.to_uppercase())),
    );

    let model = mapper.apply(&episode_record(), EpisodeModel::default)?;
    assert_eq!(model.title, Some("FIRST EPISODE".to_string()));
    Ok(())
}
