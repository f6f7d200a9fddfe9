//! Populates a typed model from JSON records using runtime-typed rules.
//!
//! Run with `cargo run --example dynamic_json`.

use model_mapper::{DynFieldMapper, DynSetters, JsonExtractors};
use serde_json::json;

#[derive(Debug, Default)]
struct EpisodeModel {
    id: Option<i64>,
    title: Option<String>,
    explicit: Option<bool>,
}

fn main() {
    env_logger::init();

    let mut mapper = DynFieldMapper::new();
    mapper.add_rule(
        "id",
        JsonExtractors::integer("id"),
        DynSetters::typed(|model: &mut EpisodeModel, value: i64| model.id = Some(value)),
    );
    mapper.add_rule(
        "title",
        JsonExtractors::string("title"),
        DynSetters::typed(|model: &mut EpisodeModel, value: String| model.title = Some(value)),
    );
    mapper.add_rule(
        "explicit",
        JsonExtractors::boolean("explicit"),
        DynSetters::typed(|model: &mut EpisodeModel, value: bool| model.explicit = Some(value)),
    );

    let records = vec![
        json!({ "id": 1, "title": "First Episode", "explicit": false }),
        // "explicit" missing, that rule is skipped
        json!({ "id": 2, "title": "Second Episode" }),
    ];

    for record in &records {
        match mapper.apply(record, EpisodeModel::default) {
            Ok(model) => println!("{model:?}"),
            Err(error) => eprintln!("failed to map record: {error}"),
        }
    }
}
