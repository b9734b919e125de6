use std::collections::{HashSet, VecDeque};

use procgen::{Engine, GenError, GenerationParams, Generator, Rarity, Terrain};
use rstest::{fixture, rstest};

#[fixture]
fn engine() -> Engine {
    Engine::with_defaults()
}

/// Обход в ширину по проходимым клеткам, независимый от кода генератора
fn reachable_from_first_floor(terrain: &Terrain) -> (usize, usize) {
    let width = terrain.width as usize;
    let height = terrain.height as usize;
    let walkable: Vec<bool> = terrain.tiles.iter().map(|t| t.is_walkable()).collect();
    let total = walkable.iter().filter(|&&w| w).count();
    let Some(start) = walkable.iter().position(|&w| w) else {
        return (0, 0);
    };

    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(i) = queue.pop_front() {
        let (x, y) = (i % width, i / width);
        let mut neighbours = Vec::with_capacity(4);
        if x > 0 {
            neighbours.push(i - 1);
        }
        if x + 1 < width {
            neighbours.push(i + 1);
        }
        if y > 0 {
            neighbours.push(i - width);
        }
        if y + 1 < height {
            neighbours.push(i + width);
        }
        for n in neighbours {
            if walkable[n] && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    (seen.len(), total)
}

#[rstest]
fn bsp_map_is_identical_across_runs(engine: Engine) {
    let params = GenerationParams::new(1, 0.5, "fantasy")
        .with_custom("algorithm", "bsp")
        .with_custom("width", 40)
        .with_custom("height", 25);

    let first = engine.terrain.generate_validated(12345, &params).unwrap();
    let second = engine.terrain.generate_validated(12345, &params).unwrap();

    assert_eq!(first.tiles, second.tiles);
    assert_eq!(first.rooms, second.rooms);
    assert_eq!(first.tiles.len(), 40 * 25);
    assert!(first.tiles.iter().any(|t| t.is_walkable()));
}

#[rstest]
fn deeper_entities_are_stronger_and_rarer(engine: Engine) {
    let shallow = GenerationParams::new(1, 0.5, "fantasy").with_custom("count", 10);
    let deep = GenerationParams::new(30, 0.5, "fantasy").with_custom("count", 10);

    let a = engine.entities.generate_validated(100, &shallow).unwrap();
    let b = engine.entities.generate_validated(100, &deep).unwrap();
    assert_eq!(a.len(), 10);
    assert_eq!(b.len(), 10);

    let mean = |entities: &[procgen::GeneratedEntity]| {
        entities.iter().map(|e| e.stats.total() as f64).sum::<f64>() / entities.len() as f64
    };
    assert!(mean(&b) > mean(&a), "{} <= {}", mean(&b), mean(&a));

    let legendary = |entities: &[procgen::GeneratedEntity]| {
        entities.iter().filter(|e| e.rarity == Rarity::Legendary).count()
    };
    assert!(legendary(&b) > legendary(&a));
}

#[rstest]
fn skill_trees_validate_until_a_prerequisite_is_lost(engine: Engine) {
    let params = GenerationParams::new(5, 0.5, "fantasy").with_custom("count", 3);
    let mut trees = engine.skill_trees.generate(5, &params).unwrap();
    assert_eq!(trees.len(), 3);
    engine.skill_trees.validate(&trees).unwrap();

    let node = trees[1]
        .nodes
        .iter_mut()
        .find(|n| n.skill.tier >= 1)
        .expect("tree has nodes above the root tier");
    node.prerequisites.clear();

    let err = engine.skill_trees.validate(&trees).unwrap_err();
    assert!(matches!(err, GenError::InvariantViolation(_)), "{err}");
}

#[rstest]
fn unknown_genre_is_rejected_everywhere(engine: Engine) {
    let params = GenerationParams::new(1, 0.5, "nonexistent");

    assert!(matches!(
        engine.terrain.generate(1, &params),
        Err(GenError::InvalidParameter(_))
    ));
    assert!(matches!(
        engine.entities.generate(1, &params),
        Err(GenError::InvalidParameter(_))
    ));
    assert!(matches!(
        engine.items.generate(1, &params),
        Err(GenError::InvalidParameter(_))
    ));
    assert!(matches!(
        engine.spells.generate(1, &params),
        Err(GenError::InvalidParameter(_))
    ));
    assert!(matches!(
        engine.skill_trees.generate(1, &params),
        Err(GenError::InvalidParameter(_))
    ));
}

#[rstest]
#[case(-1, 0.5)]
#[case(0, -0.1)]
#[case(0, f64::NAN)]
fn bad_depth_or_difficulty_is_rejected(engine: Engine, #[case] depth: i64, #[case] difficulty: f64) {
    let params = GenerationParams::new(depth, difficulty, "fantasy");
    assert!(matches!(
        engine.items.generate(1, &params),
        Err(GenError::InvalidParameter(_))
    ));
}

#[rstest]
#[case("bsp")]
#[case("cellular")]
fn every_walkable_tile_is_reachable(engine: Engine, #[case] algorithm: &str) {
    for seed in 0..20 {
        let params = GenerationParams::new(2, 0.5, "postapoc")
            .with_custom("algorithm", algorithm)
            .with_custom("width", 48)
            .with_custom("height", 32);
        let terrain = engine.terrain.generate(seed, &params).unwrap();
        let (reached, total) = reachable_from_first_floor(&terrain);
        assert!(total > 0, "seed {seed}: no floor");
        assert_eq!(reached, total, "seed {seed}");
    }
}

#[rstest]
#[case("fantasy")]
#[case("cyberpunk")]
fn generated_numbers_are_sane(engine: Engine, #[case] genre: &str) {
    let params = GenerationParams::new(12, 0.9, genre).with_custom("count", 25);

    for entity in engine.entities.generate_validated(9, &params).unwrap() {
        assert!(entity.level >= 1);
        assert!(entity.stats.health >= 1);
    }
    for item in engine.items.generate_validated(9, &params).unwrap() {
        assert!(item.stats.power() >= 0.0 && item.stats.power().is_finite());
        assert_eq!(item.stats.category(), item.category);
    }
    for spell in engine.spells.generate_validated(9, &params).unwrap() {
        assert!(spell.stats.cooldown >= 0.0 && spell.stats.cooldown.is_finite());
        assert!(!spell.description.contains('{'), "{}", spell.description);
        assert_eq!(spell.stats.area_radius.is_some(), spell.target.has_area());
    }
}

#[rstest]
fn prerequisites_close_over_the_tree(engine: Engine) {
    let params = GenerationParams::new(8, 0.5, "scifi").with_custom("count", 4);
    for tree in engine.skill_trees.generate_validated(31, &params).unwrap() {
        let ids: HashSet<&str> = tree.nodes.iter().map(|n| n.id.as_str()).collect();
        for node in &tree.nodes {
            for prerequisite in &node.prerequisites {
                assert!(ids.contains(prerequisite.as_str()));
                let parent = tree.node(prerequisite).unwrap();
                assert!(parent.skill.tier < node.skill.tier);
            }
        }

        let order = tree.unlock_order().unwrap();
        assert_eq!(order.len(), tree.nodes.len());
        let position = |id: &str| order.iter().position(|&o| o == id).unwrap();
        for node in &tree.nodes {
            for prerequisite in &node.prerequisites {
                assert!(position(prerequisite.as_str()) < position(node.id.as_str()));
            }
        }
    }
}
