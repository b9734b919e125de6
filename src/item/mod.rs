// src/item/mod.rs
//! Генерация предметов
//!
//! Масштабирование то же, что у существ, но вместо уровня используется глубина:
//! `(1 + depth * depth_step) * rarity.multiplier()`. Набор характеристик задаётся
//! категорией через [`ItemStats`], поэтому «оружие без прочности» невыразимо при генерации
//! и ловится `validate` для данных, пришедших извне.
//!
//! Прочность масштабируется только редкостью, скорость атаки не масштабируется.

pub mod templates;

use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ItemSettings, RaritySettings, TemplateSelection};
use crate::error::{GenError, Invariant, Result};
use crate::generator::{Generator, generate_indexed};
use crate::genre::{Genre, GenreRegistry};
use crate::naming::{compose_name, pick, select_template, uniform_f64, uniform_u32, unit};
use crate::params::{GenerationParams, keys};
use crate::rarity::{Rarity, quantize, roll_rarity, scale_stat};
use crate::seed::{derive_seed, rng_for, tags};

use templates::ItemTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
    Accessory,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Weapon,
        ItemCategory::Armor,
        ItemCategory::Consumable,
        ItemCategory::Accessory,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Weapon => "weapon",
            ItemCategory::Armor => "armor",
            ItemCategory::Consumable => "consumable",
            ItemCategory::Accessory => "accessory",
        }
    }
}

impl FromStr for ItemCategory {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        ItemCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| GenError::invalid(format!("unknown item category {s:?}")))
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Вторичный модификатор аксессуара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemStats {
    Weapon {
        damage: u32,
        attack_speed: f64,
        durability: u32,
    },
    Armor {
        defense: u32,
        durability: u32,
    },
    /// Без прочности
    Consumable { magnitude: u32, effect: String },
    /// Только вторичные модификаторы
    Accessory { modifiers: Vec<StatModifier> },
}

impl ItemStats {
    #[must_use]
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemStats::Weapon { .. } => ItemCategory::Weapon,
            ItemStats::Armor { .. } => ItemCategory::Armor,
            ItemStats::Consumable { .. } => ItemCategory::Consumable,
            ItemStats::Accessory { .. } => ItemCategory::Accessory,
        }
    }

    /// Основная величина: урон, защита, сила эффекта или сумма модификаторов
    #[must_use]
    pub fn power(&self) -> f64 {
        match self {
            ItemStats::Weapon { damage, .. } => f64::from(*damage),
            ItemStats::Armor { defense, .. } => f64::from(*defense),
            ItemStats::Consumable { magnitude, .. } => f64::from(*magnitude),
            ItemStats::Accessory { modifiers } => modifiers.iter().map(|m| m.value).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub name: String,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub stats: ItemStats,
    /// Цена в золоте
    pub value: u32,
    pub seed: i64,
    pub tags: Vec<String>,
}

pub struct ItemGenerator {
    settings: ItemSettings,
    rarity: RaritySettings,
    registry: Arc<GenreRegistry>,
}

impl ItemGenerator {
    #[must_use]
    pub fn new(settings: ItemSettings, rarity: RaritySettings, registry: Arc<GenreRegistry>) -> Self {
        Self {
            settings,
            rarity,
            registry,
        }
    }

    fn item(
        &self,
        seed: i64,
        index: u64,
        depth: u32,
        difficulty: f64,
        genre: &Genre,
        pool: &[&'static ItemTemplate],
    ) -> GeneratedItem {
        let sub_seed = derive_seed(seed, tags::ITEM, index);
        let mut rng = rng_for(sub_seed);

        let rarity_draw = unit(&mut rng);
        let template = select_template(&mut rng, pool, TemplateSelection::Weighted, |t| t.weight);
        let power = uniform_u32(&mut rng, template.power);
        let attack_speed = uniform_f64(&mut rng, template.attack_speed);
        let durability = uniform_u32(&mut rng, template.durability);
        let value = uniform_u32(&mut rng, template.value);
        let prefix = pick(&mut rng, template.prefixes);
        let noun = pick(&mut rng, template.nouns);

        let rarity = roll_rarity(&self.rarity, depth, difficulty, rarity_draw);
        let scale = (1.0 + f64::from(depth) * self.settings.depth_step) * rarity.multiplier();

        let stats = match template.category {
            ItemCategory::Weapon => ItemStats::Weapon {
                damage: scale_stat(power, scale),
                attack_speed: quantize(attack_speed),
                durability: scale_stat(durability, rarity.multiplier()),
            },
            ItemCategory::Armor => ItemStats::Armor {
                defense: scale_stat(power, scale),
                durability: scale_stat(durability, rarity.multiplier()),
            },
            ItemCategory::Consumable => ItemStats::Consumable {
                magnitude: scale_stat(power, scale),
                effect: template.effect.to_string(),
            },
            ItemCategory::Accessory => {
                // число модификаторов растёт с редкостью: 1, 1, 2, 2, 3
                let available = template.modifiers.len();
                let wanted = (1 + usize::from(rarity.tier()) / 2).min(available);
                let start = rng.gen_range(0..available.max(1));
                let modifiers = (0..wanted)
                    .map(|k| StatModifier {
                        stat: template.modifiers[(start + k) % available].to_string(),
                        value: quantize(f64::from(uniform_u32(&mut rng, template.power)) * scale),
                    })
                    .collect();
                ItemStats::Accessory { modifiers }
            }
        };

        let mut item_tags: Vec<String> = template.tags.iter().map(|t| (*t).to_string()).collect();
        item_tags.push(template.category.as_str().to_string());

        GeneratedItem {
            name: compose_name(
                prefix,
                noun,
                rarity.is_notable().then_some(genre.item_prefix.as_str()),
            ),
            category: template.category,
            rarity,
            stats,
            value: scale_stat(value, scale),
            seed: sub_seed,
            tags: item_tags,
        }
    }
}

impl Generator for ItemGenerator {
    type Output = Vec<GeneratedItem>;

    fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Vec<GeneratedItem>> {
        let (depth, genre) = params.resolve(&self.registry)?;
        let count = params.count_or(self.settings.default_count)?;
        let filter = params
            .custom_str(keys::CATEGORY)?
            .map(str::parse::<ItemCategory>)
            .transpose()?;

        let pool: Vec<&'static ItemTemplate> = templates::for_genre(&genre.id)
            .iter()
            .filter(|t| filter.is_none_or(|c| t.category == c))
            .collect();
        if pool.is_empty() {
            return Err(GenError::invalid(format!(
                "genre {:?} has no item templates of the requested category",
                genre.id
            )));
        }

        let items = generate_indexed(count, |i| {
            self.item(seed, i, depth, params.difficulty, genre, &pool)
        });

        log::debug!(
            "Предметы ({}, сид {seed}, глубина {depth}): {} шт.",
            genre.id,
            items.len()
        );
        Ok(items)
    }

    fn validate(&self, items: &Vec<GeneratedItem>) -> Result<()> {
        if items.is_empty() {
            return Err(Invariant::EmptyCollection { what: "items" }.into());
        }

        for (i, item) in items.iter().enumerate() {
            let mismatch = |reason: &str| -> GenError {
                Invariant::StatMismatch {
                    name: item.name.clone(),
                    reason: reason.to_string(),
                }
                .into()
            };

            if item.name.trim().is_empty() {
                return Err(Invariant::OutOfRange {
                    field: format!("items[{i}].name"),
                    value: format!("{:?}", item.name),
                }
                .into());
            }
            if item.stats.category() != item.category {
                return Err(mismatch(&format!(
                    "{} stats on a {} item",
                    item.stats.category(),
                    item.category
                )));
            }

            match &item.stats {
                ItemStats::Weapon {
                    attack_speed,
                    durability,
                    ..
                } => {
                    if *durability == 0 {
                        return Err(mismatch("weapon without durability"));
                    }
                    if !attack_speed.is_finite() || *attack_speed <= 0.0 {
                        return Err(Invariant::OutOfRange {
                            field: format!("items[{i}].attack_speed"),
                            value: attack_speed.to_string(),
                        }
                        .into());
                    }
                }
                ItemStats::Armor { durability, .. } => {
                    if *durability == 0 {
                        return Err(mismatch("armor without durability"));
                    }
                }
                ItemStats::Consumable { effect, .. } => {
                    if effect.is_empty() {
                        return Err(mismatch("consumable without an effect"));
                    }
                }
                ItemStats::Accessory { modifiers } => {
                    if modifiers.is_empty() {
                        return Err(mismatch("accessory without modifiers"));
                    }
                    if let Some(bad) = modifiers.iter().find(|m| !m.value.is_finite() || m.value < 0.0) {
                        return Err(Invariant::OutOfRange {
                            field: format!("items[{i}].modifiers.{}", bad.stat),
                            value: bad.value.to_string(),
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ItemGenerator {
        ItemGenerator::new(
            ItemSettings::default(),
            RaritySettings::default(),
            Arc::new(GenreRegistry::with_defaults()),
        )
    }

    #[test]
    fn items_are_deterministic_and_valid() {
        let generator = generator();
        let params = GenerationParams::new(4, 0.3, "scifi").with_custom(keys::COUNT, 40);
        let a = generator.generate(2024, &params).unwrap();
        let b = generator.generate(2024, &params).unwrap();
        assert_eq!(a, b);
        generator.validate(&a).unwrap();
    }

    #[test]
    fn stats_match_category() {
        let generator = generator();
        for genre in ["fantasy", "scifi", "horror", "cyberpunk", "postapoc"] {
            let params = GenerationParams::new(2, 0.5, genre).with_custom(keys::COUNT, 50);
            for item in generator.generate(11, &params).unwrap() {
                assert_eq!(item.stats.category(), item.category, "{}", item.name);
            }
        }
    }

    #[test]
    fn category_filter_restricts_output() {
        let generator = generator();
        let params = GenerationParams::default()
            .with_custom(keys::COUNT, 20)
            .with_custom(keys::CATEGORY, "accessory");
        let items = generator.generate(6, &params).unwrap();
        assert!(items.iter().all(|i| i.category == ItemCategory::Accessory));
        for item in &items {
            let ItemStats::Accessory { modifiers } = &item.stats else {
                panic!("expected accessory stats");
            };
            assert!(!modifiers.is_empty());
        }
    }

    #[test]
    fn deeper_items_are_stronger() {
        // бросок редкости и шаблон совпадают при том же сиде, меняется только масштаб
        let generator = generator();
        let shallow = GenerationParams::new(0, 0.0, "fantasy")
            .with_custom(keys::COUNT, 30)
            .with_custom(keys::CATEGORY, "weapon");
        let deep = GenerationParams::new(20, 0.0, "fantasy")
            .with_custom(keys::COUNT, 30)
            .with_custom(keys::CATEGORY, "weapon");
        let shallow = generator.generate(13, &shallow).unwrap();
        let deep = generator.generate(13, &deep).unwrap();
        for (s, d) in shallow.iter().zip(&deep) {
            assert!(d.stats.power() >= s.stats.power());
            assert!(d.rarity >= s.rarity);
        }
    }

    #[test]
    fn mismatched_stats_fail_validation() {
        let generator = generator();
        let mut items = generator
            .generate(1, &GenerationParams::default().with_custom(keys::CATEGORY, "weapon"))
            .unwrap();
        items[0].stats = ItemStats::Armor {
            defense: 3,
            durability: 10,
        };
        assert!(matches!(
            generator.validate(&items),
            Err(GenError::InvariantViolation(Invariant::StatMismatch { .. }))
        ));
    }

    #[test]
    fn unknown_category_is_invalid() {
        let params = GenerationParams::default().with_custom(keys::CATEGORY, "vehicle");
        assert!(matches!(
            generator().generate(1, &params),
            Err(GenError::InvalidParameter(_))
        ));
    }
}
