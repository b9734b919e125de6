// src/entity/mod.rs
//! Генерация существ
//!
//! Каждое существо строится из собственного под-сида `derive_seed(seed, "entity", i)`,
//! поэтому результат не зависит от порядка сборки коллекции. Порядок бросков
//! внутри элемента фиксирован:
//!
//! 1. бросок редкости `U(0,1)` (первым, чтобы при том же сиде он совпадал на любой глубине);
//! 2. выбор шаблона;
//! 3. базовые характеристики внутри диапазонов шаблона;
//! 4. разброс уровня;
//! 5. префикс и суффикс имени.
//!
//! Характеристики масштабируются один раз: `(1 + (level - 1) * 0.15) * rarity.multiplier()`.

pub mod templates;

use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{EntitySettings, RaritySettings};
use crate::error::{GenError, Invariant, Result};
use crate::generator::{Generator, generate_indexed};
use crate::genre::{Genre, GenreRegistry};
use crate::naming::{compose_name, pick, select_template, uniform_u32, unit};
use crate::params::{GenerationParams, keys};
use crate::rarity::{Rarity, level_for, level_scale, roll_rarity, scale_stat};
use crate::seed::{derive_seed, rng_for, tags};

use templates::EntityTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Monster,
    Boss,
    Minion,
    Npc,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Monster,
        EntityType::Boss,
        EntityType::Minion,
        EntityType::Npc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Monster => "monster",
            EntityType::Boss => "boss",
            EntityType::Minion => "minion",
            EntityType::Npc => "npc",
        }
    }
}

impl FromStr for EntityType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        EntityType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| GenError::invalid(format!("unknown entity type {s:?}")))
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStats {
    pub health: u32,
    pub damage: u32,
    pub defense: u32,
    pub speed: u32,
}

impl EntityStats {
    /// Сумма характеристик, удобна для сравнения популяций
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.health) + u64::from(self.damage) + u64::from(self.defense) + u64::from(self.speed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEntity {
    pub name: String,
    pub archetype: String,
    pub entity_type: EntityType,
    pub rarity: Rarity,
    pub level: u32,
    pub stats: EntityStats,
    /// Под-сид, из которого построено существо
    pub seed: i64,
    pub tags: Vec<String>,
}

pub struct EntityGenerator {
    settings: EntitySettings,
    rarity: RaritySettings,
    registry: Arc<GenreRegistry>,
}

impl EntityGenerator {
    #[must_use]
    pub fn new(settings: EntitySettings, rarity: RaritySettings, registry: Arc<GenreRegistry>) -> Self {
        Self {
            settings,
            rarity,
            registry,
        }
    }

    /// Шаблоны жанра после фильтра по типу. Шаблоны с `min_depth` выше текущей
    /// глубины отбрасываются, если после этого пул не пустеет.
    fn pool(
        genre: &Genre,
        depth: u32,
        filter: Option<EntityType>,
    ) -> Result<Vec<&'static EntityTemplate>> {
        let typed: Vec<&'static EntityTemplate> = templates::for_genre(&genre.id)
            .iter()
            .filter(|t| filter.is_none_or(|ty| t.entity_type == ty))
            .collect();
        if typed.is_empty() {
            return Err(GenError::invalid(format!(
                "genre {:?} has no entity templates of the requested type",
                genre.id
            )));
        }

        let reachable: Vec<_> = typed.iter().copied().filter(|t| t.min_depth <= depth).collect();
        Ok(if reachable.is_empty() { typed } else { reachable })
    }

    fn entity(
        &self,
        seed: i64,
        index: u64,
        depth: u32,
        difficulty: f64,
        genre: &Genre,
        pool: &[&'static EntityTemplate],
    ) -> GeneratedEntity {
        let sub_seed = derive_seed(seed, tags::ENTITY, index);
        let mut rng = rng_for(sub_seed);

        let rarity_draw = unit(&mut rng);
        let template = select_template(&mut rng, pool, self.settings.selection, |t| t.weight);
        let health = uniform_u32(&mut rng, template.health);
        let damage = uniform_u32(&mut rng, template.damage);
        let defense = uniform_u32(&mut rng, template.defense);
        let speed = uniform_u32(&mut rng, template.speed);
        let spread = self.settings.level_jitter as i32;
        let jitter = rng.gen_range(-spread..=spread);
        let prefix = pick(&mut rng, template.prefixes);
        let suffix = pick(&mut rng, template.suffixes);

        let rarity = roll_rarity(&self.rarity, depth, difficulty, rarity_draw);
        let level = level_for(depth, difficulty, jitter);
        let factor = level_scale(level) * rarity.multiplier();

        let mut entity_tags: Vec<String> = template.tags.iter().map(|t| (*t).to_string()).collect();
        entity_tags.push(template.entity_type.as_str().to_string());

        GeneratedEntity {
            name: compose_name(
                prefix,
                suffix,
                rarity.is_notable().then_some(genre.entity_prefix.as_str()),
            ),
            archetype: template.archetype.to_string(),
            entity_type: template.entity_type,
            rarity,
            level,
            stats: EntityStats {
                health: scale_stat(health, factor),
                damage: scale_stat(damage, factor),
                defense: scale_stat(defense, factor),
                speed: scale_stat(speed, factor),
            },
            seed: sub_seed,
            tags: entity_tags,
        }
    }
}

impl Generator for EntityGenerator {
    type Output = Vec<GeneratedEntity>;

    fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Vec<GeneratedEntity>> {
        let (depth, genre) = params.resolve(&self.registry)?;
        let count = params.count_or(self.settings.default_count)?;
        let filter = params
            .custom_str(keys::TYPE)?
            .map(str::parse::<EntityType>)
            .transpose()?;
        let pool = Self::pool(genre, depth, filter)?;

        let entities = generate_indexed(count, |i| {
            self.entity(seed, i, depth, params.difficulty, genre, &pool)
        });

        log::debug!(
            "Существа ({}, сид {seed}, глубина {depth}): {} шт., шаблонов в пуле {}",
            genre.id,
            entities.len(),
            pool.len()
        );
        Ok(entities)
    }

    fn validate(&self, entities: &Vec<GeneratedEntity>) -> Result<()> {
        if entities.is_empty() {
            return Err(Invariant::EmptyCollection { what: "entities" }.into());
        }
        for (i, entity) in entities.iter().enumerate() {
            if entity.name.trim().is_empty() {
                return Err(Invariant::OutOfRange {
                    field: format!("entities[{i}].name"),
                    value: format!("{:?}", entity.name),
                }
                .into());
            }
            if entity.level == 0 {
                return Err(Invariant::OutOfRange {
                    field: format!("entities[{i}].level"),
                    value: "0".to_string(),
                }
                .into());
            }
            if entity.stats.health == 0 {
                return Err(Invariant::OutOfRange {
                    field: format!("entities[{i}].stats.health"),
                    value: "0".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> EntityGenerator {
        EntityGenerator::new(
            EntitySettings::default(),
            RaritySettings::default(),
            Arc::new(GenreRegistry::with_defaults()),
        )
    }

    #[test]
    fn same_seed_same_population() {
        let generator = generator();
        let params = GenerationParams::new(3, 0.5, "fantasy").with_custom(keys::COUNT, 25);
        let a = generator.generate(42, &params).unwrap();
        let b = generator.generate(42, &params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
        generator.validate(&a).unwrap();
    }

    #[test]
    fn prefix_of_collection_is_stable() {
        // элемент i зависит только от (seed, i), а не от размера коллекции
        let generator = generator();
        let small = generator
            .generate(9, &GenerationParams::default().with_custom(keys::COUNT, 3))
            .unwrap();
        let large = generator
            .generate(9, &GenerationParams::default().with_custom(keys::COUNT, 12))
            .unwrap();
        assert_eq!(small[..], large[..3]);
    }

    #[test]
    fn type_filter_restricts_output() {
        let generator = generator();
        for genre in ["fantasy", "scifi", "horror", "cyberpunk", "postapoc"] {
            let params = GenerationParams::new(0, 0.5, genre)
                .with_custom(keys::COUNT, 15)
                .with_custom(keys::TYPE, "boss");
            let entities = generator.generate(77, &params).unwrap();
            assert!(entities.iter().all(|e| e.entity_type == EntityType::Boss), "{genre}");
        }
    }

    #[test]
    fn unknown_type_is_invalid() {
        let params = GenerationParams::default().with_custom(keys::TYPE, "dragonkin");
        assert!(matches!(
            generator().generate(1, &params),
            Err(GenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn notable_entities_carry_genre_prefix() {
        let generator = generator();
        let params = GenerationParams::new(40, 1.0, "horror").with_custom(keys::COUNT, 30);
        let entities = generator.generate(3, &params).unwrap();
        let notable: Vec<_> = entities.iter().filter(|e| e.rarity.is_notable()).collect();
        assert!(!notable.is_empty());
        for entity in notable {
            assert!(entity.name.starts_with("Accursed "), "{}", entity.name);
        }
        for entity in entities.iter().filter(|e| !e.rarity.is_notable()) {
            assert!(!entity.name.starts_with("Accursed "));
        }
    }

    #[test]
    fn level_follows_depth() {
        let generator = generator();
        let params = GenerationParams::new(10, 0.5, "scifi").with_custom(keys::COUNT, 20);
        for entity in generator.generate(5, &params).unwrap() {
            // 1 + 10 + floor(1.5) ± 1
            assert!((11..=13).contains(&entity.level), "level {}", entity.level);
        }
    }

    #[test]
    fn extreme_depth_and_difficulty_stay_in_range() {
        let generator = generator();
        let huge = GenerationParams::new(1, 1e19, "fantasy").with_custom(keys::COUNT, 3);
        for entity in generator.generate_validated(1, &huge).unwrap() {
            assert_eq!(entity.level, u32::MAX);
        }

        let deepest =
            GenerationParams::new(i64::from(u32::MAX), 0.5, "fantasy").with_custom(keys::COUNT, 5);
        let shallow = GenerationParams::new(10, 0.5, "fantasy").with_custom(keys::COUNT, 5);
        let deep = generator.generate_validated(7, &deepest).unwrap();
        let near = generator.generate(7, &shallow).unwrap();
        for (d, n) in deep.iter().zip(&near) {
            assert!(d.level > n.level);
            assert!(d.stats.total() > n.stats.total());
        }
    }

    #[test]
    fn empty_and_broken_results_fail_validation() {
        let generator = generator();
        assert!(matches!(
            generator.validate(&Vec::new()),
            Err(GenError::InvariantViolation(Invariant::EmptyCollection { .. }))
        ));

        let mut entities = generator.generate(8, &GenerationParams::default()).unwrap();
        entities[0].level = 0;
        assert!(matches!(
            generator.validate(&entities),
            Err(GenError::InvariantViolation(Invariant::OutOfRange { .. }))
        ));
    }

    #[test]
    fn entity_type_parses_case_insensitively() {
        assert_eq!("NPC".parse::<EntityType>().unwrap(), EntityType::Npc);
        assert_eq!(EntityType::Minion.to_string(), "minion");
    }
}
