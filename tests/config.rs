use std::fs;

use procgen::config::TemplateSelection;
use procgen::{ConfigError, Engine, EngineConfig, GenerationParams, Generator, GenreRegistry};
use rstest::{fixture, rstest};
use tempfile::{TempDir, tempdir};

#[fixture]
fn dir() -> TempDir {
    tempdir().unwrap()
}

#[rstest]
fn loads_toml_file_and_drives_generators(dir: TempDir) {
    let path = dir.path().join("engine.toml");
    fs::write(
        &path,
        r#"
        [terrain]
        default_width = 30
        default_height = 20

        [entity]
        default_count = 4
        selection = "uniform"

        [skill_tree]
        tier_sizes = [9, 7, 6, 4, 3, 2, 1]
        "#,
    )
    .unwrap();

    let config = EngineConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.entity.selection, TemplateSelection::Uniform);
    assert_eq!(config.spell, EngineConfig::default().spell);

    let engine = Engine::new(config, GenreRegistry::with_defaults()).unwrap();
    let params = GenerationParams::new(3, 0.5, "fantasy");

    let terrain = engine.terrain.generate_validated(8, &params).unwrap();
    assert_eq!((terrain.width, terrain.height), (30, 20));

    assert_eq!(engine.entities.generate_validated(8, &params).unwrap().len(), 4);

    let trees = engine.skill_trees.generate_validated(8, &params).unwrap();
    let first_tier = trees[0].nodes.iter().filter(|n| n.skill.tier == 0).count();
    assert_eq!(first_tier, 9);
    assert_eq!(trees[0].nodes.len(), 32);
}

#[rstest]
fn missing_file_is_an_io_error(dir: TempDir) {
    let result = EngineConfig::from_toml_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[rstest]
fn broken_file_is_a_parse_error(dir: TempDir) {
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[rarity]\nthresholds = \"high\"\n").unwrap();
    assert!(matches!(
        EngineConfig::from_toml_file(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[rstest]
#[case::fill_probability("[terrain]\nfill_probability = 1.5")]
#[case::leaf_too_small("[terrain]\nmin_leaf_size = 4\nmin_room_size = 3")]
#[case::thresholds_over_eight("[terrain]\nbirth_threshold = 9")]
#[case::too_few_tiers("[skill_tree]\ntier_sizes = [6, 5, 4, 3, 2, 1]")]
#[case::flat_tiers("[skill_tree]\ntier_sizes = [7, 7, 5, 4, 3, 2, 1]")]
#[case::dual_chance("[skill_tree]\ndual_prerequisite_chance = -0.5")]
#[case::negative_weight("[rarity]\ndepth_weight = -1.0")]
#[case::unordered_thresholds("[rarity]\nthresholds = [0.9, 0.8, 0.95, 1.05]")]
#[case::negative_depth_step("[item]\ndepth_step = -0.1")]
fn inconsistent_values_are_rejected(#[case] contents: &str) {
    assert!(matches!(
        EngineConfig::from_toml_str(contents),
        Err(ConfigError::Invalid(_))
    ));
}

#[rstest]
fn engine_rejects_unvalidated_config() {
    let mut config = EngineConfig::default();
    config.terrain.default_width = 0;
    assert!(matches!(
        Engine::new(config, GenreRegistry::with_defaults()),
        Err(ConfigError::Invalid(_))
    ));
}
