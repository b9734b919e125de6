use procgen::{Engine, GenerationParams, Generator};
use rstest::{fixture, rstest};
use serde::Serialize;

#[fixture]
fn engine() -> Engine {
    Engine::with_defaults()
}

/// Два прогона одного генератора дают побайтно одинаковый JSON
fn assert_reproducible<G>(generator: &G, seed: i64, params: &GenerationParams)
where
    G: Generator,
    G::Output: Serialize,
{
    let first = generator.generate(seed, params).unwrap();
    let second = generator.generate(seed, params).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[rstest]
#[case("fantasy")]
#[case("scifi")]
#[case("horror")]
#[case("cyberpunk")]
#[case("postapoc")]
fn every_domain_is_reproducible(engine: Engine, #[case] genre: &str) {
    let params = GenerationParams::new(7, 0.6, genre);

    assert_reproducible(&engine.terrain, 42, &params);
    assert_reproducible(&engine.entities, 42, &params);
    assert_reproducible(&engine.items, 42, &params);
    assert_reproducible(&engine.spells, 42, &params);
    assert_reproducible(&engine.skill_trees, 42, &params);
}

#[rstest]
#[case("bsp", 40, 25)]
#[case("bsp", 80, 50)]
#[case("cellular", 40, 25)]
#[case("cellular", 64, 64)]
fn terrain_is_reproducible_for_each_algorithm(
    engine: Engine,
    #[case] algorithm: &str,
    #[case] width: i64,
    #[case] height: i64,
) {
    let params = GenerationParams::new(3, 0.5, "horror")
        .with_custom("algorithm", algorithm)
        .with_custom("width", width)
        .with_custom("height", height);
    assert_reproducible(&engine.terrain, -9_000_000_000, &params);
}

#[rstest]
fn different_seeds_give_different_content(engine: Engine) {
    let params = GenerationParams::new(5, 0.5, "fantasy");
    let a = engine.entities.generate(1, &params).unwrap();
    let b = engine.entities.generate(2, &params).unwrap();
    assert_ne!(a, b);
}

#[rstest]
fn count_does_not_change_earlier_elements(engine: Engine) {
    let short = GenerationParams::new(5, 0.5, "scifi").with_custom("count", 3);
    let long = GenerationParams::new(5, 0.5, "scifi").with_custom("count", 12);

    let entities = engine.entities.generate(77, &long).unwrap();
    assert_eq!(engine.entities.generate(77, &short).unwrap()[..], entities[..3]);

    let items = engine.items.generate(77, &long).unwrap();
    assert_eq!(engine.items.generate(77, &short).unwrap()[..], items[..3]);

    let spells = engine.spells.generate(77, &long).unwrap();
    assert_eq!(engine.spells.generate(77, &short).unwrap()[..], spells[..3]);

    let trees = engine.skill_trees.generate(77, &long).unwrap();
    assert_eq!(engine.skill_trees.generate(77, &short).unwrap()[..], trees[..3]);
}

#[rstest]
fn rarity_never_drops_with_depth(engine: Engine) {
    for seed in [1_i64, 100, 4096] {
        let shallow = GenerationParams::new(2, 0.5, "fantasy").with_custom("count", 20);
        let deep = GenerationParams::new(25, 0.5, "fantasy").with_custom("count", 20);

        let a = engine.entities.generate(seed, &shallow).unwrap();
        let b = engine.entities.generate(seed, &deep).unwrap();
        for (lo, hi) in a.iter().zip(&b) {
            assert!(hi.rarity >= lo.rarity, "{} -> {}", lo.rarity, hi.rarity);
        }

        let a = engine.items.generate(seed, &shallow).unwrap();
        let b = engine.items.generate(seed, &deep).unwrap();
        for (lo, hi) in a.iter().zip(&b) {
            assert!(hi.rarity >= lo.rarity, "{} -> {}", lo.rarity, hi.rarity);
        }

        let a = engine.spells.generate(seed, &shallow).unwrap();
        let b = engine.spells.generate(seed, &deep).unwrap();
        for (lo, hi) in a.iter().zip(&b) {
            assert!(hi.rarity >= lo.rarity, "{} -> {}", lo.rarity, hi.rarity);
        }
    }
}
