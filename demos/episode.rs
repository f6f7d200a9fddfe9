//! Maps a podcast `Episode` into its serialization-friendly model.
//!
//! Run with `cargo run --example episode`.

use model_mapper::FieldMapper;
use serde::Serialize;
use url::Url;

struct Episode {
    id: i32,
    title: String,
    episode_url: Url,
}

#[derive(Debug, Default, Serialize)]
struct EpisodeModel {
    id: Option<i32>,
    title: Option<String>,
    episode_url: Option<String>,
}

/// Reusable mapper definition for `Episode` -> `EpisodeModel`
fn episode_model_mapper() -> FieldMapper<Episode, EpisodeModel> {
    let mut mapper = FieldMapper::new();
    mapper.add_optional_mapping(|e: &Episode| e.id, |m: &mut EpisodeModel, v| m.id = v);
    mapper.add_optional_mapping(
        |e: &Episode| e.title.clone(),
        |m: &mut EpisodeModel, v| m.title = v,
    );
    mapper.add_mapping_with(
        |e: &Episode| e.episode_url.clone(),
        |m: &mut EpisodeModel, v| m.episode_url = Some(v),
        |url: Url| url.to_string(),
    );
    mapper
}

fn main() {
    env_logger::init();

    let episode = Episode {
        id: 1,
        title: "First Episode".to_string(),
        episode_url: Url::parse("https://example.com").expect("static URL parses"),
    };

    let mapper = episode_model_mapper();
    let model = mapper.apply(&episode, EpisodeModel::default);

    println!(
        "{}",
        serde_json::to_string_pretty(&model).expect("model serializes")
    );
}
