// src/config.rs
//! Конфигурация движка генерации
//!
//! Этот модуль определяет все настраиваемые константы генераторов:
//! - Размеры карт и параметры BSP / клеточного автомата
//! - Количество существ, предметов и заклинаний по умолчанию
//! - Форму деревьев навыков (размеры ярусов, шанс двойной зависимости)
//! - Веса и пороги броска редкости
//!
//! Конфигурация входит в «договор» между участниками сессии: разные значения дают
//! разный контент, поэтому она передаётся вместе с сидом так же, как и версия движка.
//!
//! Все структуры поддерживают сериализацию в TOML, у каждого поля есть значение по умолчанию.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Количество ярусов дерева навыков (0..=6)
pub const SKILL_TIER_COUNT: usize = 7;

/// Настройки генерации рельефа
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TerrainSettings {
    /// Ширина карты, если `width` не задан в параметрах
    #[serde(default = "default_map_width")]
    pub default_width: u32,

    /// Высота карты, если `height` не задан в параметрах
    #[serde(default = "default_map_height")]
    pub default_height: u32,

    /// Нижняя граница стороны листа BSP: лист короче `2 * min_leaf_size` не делится
    #[serde(default = "default_min_leaf_size")]
    pub min_leaf_size: u32,

    /// Верхняя граница стороны листа BSP: листы крупнее делятся всегда
    #[serde(default = "default_max_leaf_size")]
    pub max_leaf_size: u32,

    /// Минимальная сторона комнаты
    #[serde(default = "default_min_room_size")]
    pub min_room_size: u32,

    /// Доля клеток, изначально ставших полом (клеточный автомат)
    #[serde(default = "default_fill_probability")]
    pub fill_probability: f64,

    /// Количество шагов автомата
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Стена становится полом при `≥ birth_threshold` соседях-полах
    #[serde(default = "default_birth_threshold")]
    pub birth_threshold: u8,

    /// Пол становится стеной при `≤ death_threshold` соседях-полах
    #[serde(default = "default_death_threshold")]
    pub death_threshold: u8,

    /// Минимальная доля пола для прохождения `validate`
    #[serde(default = "default_min_floor_fraction")]
    pub min_floor_fraction: f64,
}

fn default_map_width() -> u32 {
    80
}
fn default_map_height() -> u32 {
    50
}
fn default_min_leaf_size() -> u32 {
    6
}
fn default_max_leaf_size() -> u32 {
    14
}
fn default_min_room_size() -> u32 {
    3
}
fn default_fill_probability() -> f64 {
    0.4
}
fn default_iterations() -> u32 {
    5
}
fn default_birth_threshold() -> u8 {
    4
}
fn default_death_threshold() -> u8 {
    2
}
fn default_min_floor_fraction() -> f64 {
    0.30
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            default_width: 80,
            default_height: 50,
            min_leaf_size: 6,
            max_leaf_size: 14,
            min_room_size: 3,
            fill_probability: 0.4,
            iterations: 5,
            birth_threshold: 4,
            death_threshold: 2,
            min_floor_fraction: 0.30,
        }
    }
}

/// Способ выбора шаблона из пула архетипов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSelection {
    /// С учётом `weight` шаблона
    #[default]
    Weighted,
    /// Все применимые шаблоны равновероятны
    Uniform,
}

/// Настройки генерации существ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntitySettings {
    #[serde(default = "default_entity_count")]
    pub default_count: usize,

    #[serde(default)]
    pub selection: TemplateSelection,

    /// Разброс уровня: `level = base ± level_jitter`
    #[serde(default = "default_level_jitter")]
    pub level_jitter: u32,
}

fn default_entity_count() -> usize {
    10
}
fn default_level_jitter() -> u32 {
    1
}

impl Default for EntitySettings {
    fn default() -> Self {
        Self {
            default_count: 10,
            selection: TemplateSelection::Weighted,
            level_jitter: 1,
        }
    }
}

/// Настройки генерации предметов
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSettings {
    #[serde(default = "default_item_count")]
    pub default_count: usize,

    /// Прирост характеристик за уровень глубины (0.1 = +10%)
    #[serde(default = "default_depth_step")]
    pub depth_step: f64,
}

fn default_item_count() -> usize {
    10
}
fn default_depth_step() -> f64 {
    0.1
}

impl Default for ItemSettings {
    fn default() -> Self {
        Self {
            default_count: 10,
            depth_step: 0.1,
        }
    }
}

/// Настройки генерации заклинаний
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpellSettings {
    #[serde(default = "default_spell_count")]
    pub default_count: usize,
}

fn default_spell_count() -> usize {
    8
}

impl Default for SpellSettings {
    fn default() -> Self {
        Self { default_count: 8 }
    }
}

/// Настройки генерации деревьев навыков
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillTreeSettings {
    /// Количество деревьев, если `count` не задан
    #[serde(default = "default_tree_count")]
    pub default_count: usize,

    /// Количество навыков на ярусах 0..=6, строго убывает (пирамида)
    #[serde(default = "default_tier_sizes")]
    pub tier_sizes: Vec<usize>,

    /// Шанс второй зависимости для ярусов ≥ 3
    #[serde(default = "default_dual_prerequisite_chance")]
    pub dual_prerequisite_chance: f64,
}

fn default_tree_count() -> usize {
    1
}
fn default_tier_sizes() -> Vec<usize> {
    vec![7, 6, 5, 4, 3, 2, 1]
}
fn default_dual_prerequisite_chance() -> f64 {
    0.25
}

impl Default for SkillTreeSettings {
    fn default() -> Self {
        Self {
            default_count: 1,
            tier_sizes: default_tier_sizes(),
            dual_prerequisite_chance: 0.25,
        }
    }
}

/// Веса и пороги общего броска редкости
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaritySettings {
    /// `k1`: сдвиг броска за уровень глубины
    #[serde(default = "default_depth_weight")]
    pub depth_weight: f64,

    /// `k2`: сдвиг броска за единицу сложности
    #[serde(default = "default_difficulty_weight")]
    pub difficulty_weight: f64,

    /// Пороги Uncommon / Rare / Epic / Legendary, строго возрастают
    #[serde(default = "default_thresholds")]
    pub thresholds: [f64; 4],
}

fn default_depth_weight() -> f64 {
    0.02
}
fn default_difficulty_weight() -> f64 {
    0.1
}
fn default_thresholds() -> [f64; 4] {
    [0.55, 0.80, 0.95, 1.05]
}

impl Default for RaritySettings {
    fn default() -> Self {
        Self {
            depth_weight: 0.02,
            difficulty_weight: 0.1,
            thresholds: default_thresholds(),
        }
    }
}

/// Полная конфигурация движка. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub terrain: TerrainSettings,

    #[serde(default)]
    pub entity: EntitySettings,

    #[serde(default)]
    pub item: ItemSettings,

    #[serde(default)]
    pub spell: SpellSettings,

    #[serde(default)]
    pub skill_tree: SkillTreeSettings,

    #[serde(default)]
    pub rarity: RaritySettings,
}

impl EngineConfig {
    /// Загружает конфигурацию из TOML-файла и проверяет её
    ///
    /// # Пример
    /// ```toml
    /// # engine.toml
    /// [terrain]
    /// default_width = 60
    /// iterations = 4
    ///
    /// [skill_tree]
    /// tier_sizes = [9, 7, 6, 4, 3, 2, 1]
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Проверяет согласованность значений
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.terrain;
        check_probability("terrain.fill_probability", t.fill_probability)?;
        check_probability("terrain.min_floor_fraction", t.min_floor_fraction)?;
        if t.default_width == 0 || t.default_height == 0 {
            return invalid("terrain default size must be positive");
        }
        if t.min_room_size == 0 || t.min_leaf_size < t.min_room_size + 2 {
            return invalid("terrain.min_leaf_size must leave room for a walled room");
        }
        if t.max_leaf_size < 2 * t.min_leaf_size {
            return invalid("terrain.max_leaf_size must be at least twice min_leaf_size");
        }
        if t.birth_threshold > 8 || t.death_threshold > 8 {
            return invalid("cellular thresholds must be within 0..=8");
        }

        let s = &self.skill_tree;
        check_probability("skill_tree.dual_prerequisite_chance", s.dual_prerequisite_chance)?;
        if s.tier_sizes.len() != SKILL_TIER_COUNT {
            return invalid(format!(
                "skill_tree.tier_sizes must list {SKILL_TIER_COUNT} tiers, got {}",
                s.tier_sizes.len()
            ));
        }
        if s.tier_sizes.last() == Some(&0) || s.tier_sizes.windows(2).any(|w| w[0] <= w[1]) {
            return invalid("skill_tree.tier_sizes must be strictly decreasing and positive");
        }

        let r = &self.rarity;
        if r.depth_weight < 0.0 || r.difficulty_weight < 0.0 {
            return invalid("rarity weights must be non-negative");
        }
        if r.thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return invalid("rarity.thresholds must be strictly ascending");
        }

        if self.item.depth_step < 0.0 {
            return invalid("item.depth_step must be non-negative");
        }

        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        invalid(format!("{name} must be within [0, 1], got {value}"))
    }
}

fn invalid<T>(message: impl Into<String>) -> Result<T, ConfigError> {
    Err(ConfigError::Invalid(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [terrain]
            default_width = 60

            [entity]
            selection = "uniform"
            "#,
        )
        .unwrap();
        assert_eq!(config.terrain.default_width, 60);
        assert_eq!(config.terrain.default_height, 50);
        assert_eq!(config.entity.selection, TemplateSelection::Uniform);
        assert_eq!(config.skill_tree, SkillTreeSettings::default());
    }

    #[test]
    fn non_pyramid_tiers_are_rejected() {
        let result = EngineConfig::from_toml_str(
            r#"
            [skill_tree]
            tier_sizes = [3, 3, 2, 2, 1, 1, 1]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn descending_thresholds_are_rejected() {
        let result = EngineConfig::from_toml_str(
            r#"
            [rarity]
            thresholds = [0.9, 0.8, 0.95, 1.05]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = EngineConfig::from_toml_str("[terrain\nwidth = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
