pub mod config;
pub mod entity;
pub mod error;
pub mod generator;
pub mod genre;
pub mod item;
pub mod naming;
pub mod params;
pub mod rarity;
pub mod seed;
pub mod skill;
pub mod spell;
pub mod terrain;

use std::sync::Arc;

pub use config::EngineConfig;
pub use entity::{EntityGenerator, EntityType, GeneratedEntity};
pub use error::{ConfigError, GenError, Invariant, Result};
pub use generator::Generator;
pub use genre::{Genre, GenreRegistry};
pub use item::{GeneratedItem, ItemCategory, ItemGenerator, ItemStats};
pub use params::GenerationParams;
pub use rarity::Rarity;
pub use seed::derive_seed;
pub use skill::{SkillTree, SkillTreeGenerator};
pub use spell::{Element, GeneratedSpell, SpellCategory, SpellGenerator, TargetPattern};
pub use terrain::{Terrain, TerrainAlgorithm, TerrainGenerator, Tile};

/// Версия формул, таблиц и порядка бросков.
///
/// Сохраняется вместе с сидом и параметрами; увеличивается при любом изменении,
/// после которого тот же сид даёт другой контент.
pub const GENERATION_VERSION: u32 = 1;

/// Все пять генераторов над одним реестром жанров и одной конфигурацией
pub struct Engine {
    pub terrain: TerrainGenerator,
    pub entities: EntityGenerator,
    pub items: ItemGenerator,
    pub spells: SpellGenerator,
    pub skill_trees: SkillTreeGenerator,
    registry: Arc<GenreRegistry>,
}

impl Engine {
    /// Проверяет конфигурацию и строит генераторы
    pub fn new(config: EngineConfig, registry: GenreRegistry) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Arc::new(registry)))
    }

    /// Настройки по умолчанию и встроенные жанры
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::build(EngineConfig::default(), Arc::new(GenreRegistry::with_defaults()))
    }

    fn build(config: EngineConfig, registry: Arc<GenreRegistry>) -> Self {
        let rarity = config.rarity;
        Self {
            terrain: TerrainGenerator::new(config.terrain, Arc::clone(&registry)),
            entities: EntityGenerator::new(config.entity, rarity.clone(), Arc::clone(&registry)),
            items: ItemGenerator::new(config.item, rarity.clone(), Arc::clone(&registry)),
            spells: SpellGenerator::new(config.spell, rarity.clone(), Arc::clone(&registry)),
            skill_trees: SkillTreeGenerator::new(config.skill_tree, rarity, Arc::clone(&registry)),
            registry,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &GenreRegistry {
        &self.registry
    }
}
