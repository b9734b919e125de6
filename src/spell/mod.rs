// src/spell/mod.rs
//! Генерация заклинаний
//!
//! Заклинание: сочетание категории, стихии и шаблона цели. Сила умножается на три
//! независимых множителя:
//!
//! | множитель   | формула                   |
//! |-------------|---------------------------|
//! | глубина     | `1 + depth * 0.1`         |
//! | сложность   | `0.8 + difficulty * 0.4`  |
//! | редкость    | `1 + tier * 0.25`         |
//!
//! Стоимость маны растёт с глубиной и редкостью, но не со сложностью.

pub mod templates;

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{RaritySettings, SpellSettings, TemplateSelection};
use crate::error::{GenError, Invariant, Result};
use crate::generator::{Generator, generate_indexed};
use crate::genre::GenreRegistry;
use crate::naming::{compose_name, pick, select_template, uniform_f64, uniform_u32, unit};
use crate::params::{GenerationParams, keys};
use crate::rarity::{Rarity, quantize, roll_rarity, scale_stat};
use crate::seed::{derive_seed, rng_for, tags};

use templates::SpellTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellCategory {
    Offensive,
    Defensive,
    Healing,
    Buff,
    Debuff,
    Utility,
    Summon,
}

impl SpellCategory {
    pub const ALL: [SpellCategory; 7] = [
        SpellCategory::Offensive,
        SpellCategory::Defensive,
        SpellCategory::Healing,
        SpellCategory::Buff,
        SpellCategory::Debuff,
        SpellCategory::Utility,
        SpellCategory::Summon,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpellCategory::Offensive => "offensive",
            SpellCategory::Defensive => "defensive",
            SpellCategory::Healing => "healing",
            SpellCategory::Buff => "buff",
            SpellCategory::Debuff => "debuff",
            SpellCategory::Utility => "utility",
            SpellCategory::Summon => "summon",
        }
    }
}

impl FromStr for SpellCategory {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        SpellCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| GenError::invalid(format!("unknown spell category {s:?}")))
    }
}

impl std::fmt::Display for SpellCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Стихия заклинания; `None` означает отсутствие стихии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    None,
    Fire,
    Ice,
    Lightning,
    Earth,
    Wind,
    Water,
    Light,
    Dark,
}

impl Element {
    pub const ALL: [Element; 9] = [
        Element::None,
        Element::Fire,
        Element::Ice,
        Element::Lightning,
        Element::Earth,
        Element::Wind,
        Element::Water,
        Element::Light,
        Element::Dark,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Element::None => "none",
            Element::Fire => "fire",
            Element::Ice => "ice",
            Element::Lightning => "lightning",
            Element::Earth => "earth",
            Element::Wind => "wind",
            Element::Water => "water",
            Element::Light => "light",
            Element::Dark => "dark",
        }
    }

    /// Слово для описаний
    #[must_use]
    pub fn adjective(self) -> &'static str {
        match self {
            Element::None => "pure",
            other => other.as_str(),
        }
    }

    /// Первое слово имени; у `None` его нет
    #[must_use]
    pub fn title(self) -> Option<&'static str> {
        match self {
            Element::None => None,
            Element::Fire => Some("Fire"),
            Element::Ice => Some("Ice"),
            Element::Lightning => Some("Lightning"),
            Element::Earth => Some("Earth"),
            Element::Wind => Some("Wind"),
            Element::Water => Some("Water"),
            Element::Light => Some("Light"),
            Element::Dark => Some("Shadow"),
        }
    }
}

impl FromStr for Element {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str() == lower)
            .ok_or_else(|| GenError::invalid(format!("unknown element {s:?}")))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPattern {
    #[serde(rename = "self")]
    SelfOnly,
    Single,
    Area,
    Cone,
    Line,
    AllAllies,
    AllEnemies,
}

impl TargetPattern {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TargetPattern::SelfOnly => "self",
            TargetPattern::Single => "single",
            TargetPattern::Area => "area",
            TargetPattern::Cone => "cone",
            TargetPattern::Line => "line",
            TargetPattern::AllAllies => "all_allies",
            TargetPattern::AllEnemies => "all_enemies",
        }
    }

    /// Шаблон задаёт форму поражения и требует радиуса
    #[must_use]
    pub fn has_area(self) -> bool {
        matches!(self, TargetPattern::Area | TargetPattern::Cone | TargetPattern::Line)
    }

    fn phrase(self) -> &'static str {
        match self {
            TargetPattern::SelfOnly => "the caster",
            TargetPattern::Single => "a single target",
            TargetPattern::Area => "an area",
            TargetPattern::Cone => "a cone",
            TargetPattern::Line => "a line",
            TargetPattern::AllAllies => "all allies",
            TargetPattern::AllEnemies => "all enemies",
        }
    }
}

impl std::fmt::Display for TargetPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellStats {
    /// Урон или лечение
    pub power: u32,
    pub mana_cost: u32,
    /// Секунды, округлены до сотых
    pub cooldown: f64,
    /// В клетках; у заклинаний на себя 0
    pub range: u32,
    /// Только для area/cone/line
    pub area_radius: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSpell {
    pub name: String,
    pub category: SpellCategory,
    pub element: Element,
    pub target: TargetPattern,
    pub rarity: Rarity,
    pub stats: SpellStats,
    pub description: String,
    pub seed: i64,
    pub tags: Vec<String>,
}

/// Подставляет значения в формат описания шаблона
fn render_description(
    format: &str,
    element: Element,
    target: TargetPattern,
    stats: &SpellStats,
) -> String {
    format
        .replace("{element}", element.adjective())
        .replace("{target}", target.phrase())
        .replace("{power}", &stats.power.to_string())
        .replace("{cost}", &stats.mana_cost.to_string())
        .replace("{cooldown}", &format!("{:.2}", stats.cooldown))
        .replace("{range}", &stats.range.to_string())
        .replace("{radius}", &stats.area_radius.unwrap_or(0).to_string())
}

pub struct SpellGenerator {
    settings: SpellSettings,
    rarity: RaritySettings,
    registry: Arc<GenreRegistry>,
}

impl SpellGenerator {
    #[must_use]
    pub fn new(settings: SpellSettings, rarity: RaritySettings, registry: Arc<GenreRegistry>) -> Self {
        Self {
            settings,
            rarity,
            registry,
        }
    }

    fn spell(
        &self,
        seed: i64,
        index: u64,
        depth: u32,
        difficulty: f64,
        pool: &[&'static SpellTemplate],
        element_filter: Option<Element>,
    ) -> GeneratedSpell {
        let sub_seed = derive_seed(seed, tags::SPELL, index);
        let mut rng = rng_for(sub_seed);

        let rarity_draw = unit(&mut rng);
        let template = select_template(&mut rng, pool, TemplateSelection::Weighted, |t| t.weight);
        let drawn_element = *pick(&mut rng, template.elements);
        let target = *pick(&mut rng, template.targets);
        let power = uniform_u32(&mut rng, template.power);
        let mana = uniform_u32(&mut rng, template.mana_cost);
        let cooldown = uniform_f64(&mut rng, template.cooldown);
        let range = uniform_u32(&mut rng, template.range);
        let radius = uniform_u32(&mut rng, template.radius);
        let prefix = pick(&mut rng, template.prefixes);
        let noun = pick(&mut rng, template.nouns);

        // бросок стихии тратится всегда, фильтр лишь заменяет результат
        let element = element_filter.unwrap_or(drawn_element);
        let rarity = roll_rarity(&self.rarity, depth, difficulty, rarity_draw);

        let depth_scale = 1.0 + f64::from(depth) * 0.1;
        let difficulty_scale = 0.8 + difficulty * 0.4;
        let rarity_scale = rarity.tier_scale();

        let stats = SpellStats {
            power: scale_stat(power, depth_scale * difficulty_scale * rarity_scale),
            mana_cost: scale_stat(mana, depth_scale * rarity_scale),
            cooldown: quantize(cooldown),
            range: if target == TargetPattern::SelfOnly { 0 } else { range },
            area_radius: target.has_area().then_some(radius.max(1)),
        };

        GeneratedSpell {
            name: compose_name(element.title().unwrap_or(prefix), noun, None),
            category: template.category,
            element,
            target,
            rarity,
            description: render_description(template.description, element, target, &stats),
            stats,
            seed: sub_seed,
            tags: vec![
                template.category.as_str().to_string(),
                element.as_str().to_string(),
                target.as_str().to_string(),
            ],
        }
    }
}

impl Generator for SpellGenerator {
    type Output = Vec<GeneratedSpell>;

    fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Vec<GeneratedSpell>> {
        let (depth, genre) = params.resolve(&self.registry)?;
        let count = params.count_or(self.settings.default_count)?;
        let category = params
            .custom_str(keys::CATEGORY)?
            .map(str::parse::<SpellCategory>)
            .transpose()?;
        let element = params
            .custom_str(keys::ELEMENT)?
            .map(str::parse::<Element>)
            .transpose()?;

        let pool: Vec<&'static SpellTemplate> = templates::for_genre(&genre.id)
            .iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| element.is_none_or(|e| t.elements.contains(&e)))
            .collect();
        if pool.is_empty() {
            return Err(GenError::invalid(format!(
                "genre {:?} has no spell templates for category {} and element {}",
                genre.id,
                category.map_or("any", SpellCategory::as_str),
                element.map_or("any", Element::as_str),
            )));
        }

        let spells = generate_indexed(count, |i| {
            self.spell(seed, i, depth, params.difficulty, &pool, element)
        });

        log::debug!(
            "Заклинания ({}, сид {seed}, глубина {depth}): {} шт. из {} шаблонов",
            genre.id,
            spells.len(),
            pool.len()
        );
        Ok(spells)
    }

    fn validate(&self, spells: &Vec<GeneratedSpell>) -> Result<()> {
        if spells.is_empty() {
            return Err(Invariant::EmptyCollection { what: "spells" }.into());
        }

        for (i, spell) in spells.iter().enumerate() {
            if spell.name.trim().is_empty() {
                return Err(Invariant::OutOfRange {
                    field: format!("spells[{i}].name"),
                    value: format!("{:?}", spell.name),
                }
                .into());
            }
            if spell.description.is_empty() || spell.description.contains('{') {
                return Err(Invariant::OutOfRange {
                    field: format!("spells[{i}].description"),
                    value: format!("{:?}", spell.description),
                }
                .into());
            }
            if spell.stats.area_radius.is_some() != spell.target.has_area() {
                return Err(Invariant::StatMismatch {
                    name: spell.name.clone(),
                    reason: format!("area radius does not fit target pattern {}", spell.target),
                }
                .into());
            }
            if spell.target == TargetPattern::SelfOnly && spell.stats.range != 0 {
                return Err(Invariant::StatMismatch {
                    name: spell.name.clone(),
                    reason: "self-targeted spell with non-zero range".to_string(),
                }
                .into());
            }
            if !spell.stats.cooldown.is_finite() || spell.stats.cooldown < 0.0 {
                return Err(Invariant::OutOfRange {
                    field: format!("spells[{i}].cooldown"),
                    value: spell.stats.cooldown.to_string(),
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

    fn generator() -> SpellGenerator {
        SpellGenerator::new(
            SpellSettings::default(),
            RaritySettings::default(),
            Arc::new(GenreRegistry::with_defaults()),
        )
    }

    #[test]
    fn spells_are_deterministic_and_valid() {
        let generator = generator();
        for genre in ["fantasy", "scifi", "horror", "cyberpunk", "postapoc"] {
            let params = GenerationParams::new(6, 0.7, genre).with_custom(keys::COUNT, 30);
            let a = generator.generate(99, &params).unwrap();
            let b = generator.generate(99, &params).unwrap();
            assert_eq!(a, b);
            generator.validate(&a).unwrap();
        }
    }

    #[test]
    fn category_and_element_filters() {
        let generator = generator();
        let params = GenerationParams::default()
            .with_custom(keys::COUNT, 20)
            .with_custom(keys::CATEGORY, "offensive")
            .with_custom(keys::ELEMENT, "fire");
        for spell in generator.generate(4, &params).unwrap() {
            assert_eq!(spell.category, SpellCategory::Offensive);
            assert_eq!(spell.element, Element::Fire);
            assert!(spell.name.starts_with("Fire "));
        }
    }

    #[test]
    fn impossible_filter_combination_is_invalid() {
        // у фэнтезийного лечения нет огненных шаблонов
        let params = GenerationParams::default()
            .with_custom(keys::CATEGORY, "healing")
            .with_custom(keys::ELEMENT, "fire");
        assert!(matches!(
            generator().generate(1, &params),
            Err(GenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn difficulty_raises_power_not_cost() {
        let generator = generator();
        let easy = GenerationParams::new(3, 0.0, "fantasy").with_custom(keys::COUNT, 20);
        let hard = GenerationParams::new(3, 1.0, "fantasy").with_custom(keys::COUNT, 20);
        let easy = generator.generate(21, &easy).unwrap();
        let hard = generator.generate(21, &hard).unwrap();
        for (e, h) in easy.iter().zip(&hard) {
            assert!(h.stats.power >= e.stats.power);
            if h.rarity == e.rarity {
                assert_eq!(h.stats.mana_cost, e.stats.mana_cost);
            }
        }
    }

    #[test]
    fn description_is_fully_rendered() {
        let generator = generator();
        let spells = generator
            .generate(8, &GenerationParams::default().with_custom(keys::COUNT, 40))
            .unwrap();
        for spell in &spells {
            assert!(!spell.description.contains('{'), "{}", spell.description);
            assert!(spell.description.contains(&spell.stats.power.to_string()));
        }
    }

    #[test]
    fn area_radius_follows_target() {
        let generator = generator();
        let spells = generator
            .generate(17, &GenerationParams::default().with_custom(keys::COUNT, 50))
            .unwrap();
        for spell in &spells {
            assert_eq!(spell.stats.area_radius.is_some(), spell.target.has_area());
        }

        let mut broken = spells;
        let victim = broken
            .iter_mut()
            .find(|s| !s.target.has_area())
            .expect("a non-area spell in 50 draws");
        victim.stats.area_radius = Some(2);
        assert!(matches!(
            generator.validate(&broken),
            Err(GenError::InvariantViolation(Invariant::StatMismatch { .. }))
        ));
    }

    #[test]
    fn names_parse_back() {
        for element in Element::ALL {
            assert_eq!(element.as_str().parse::<Element>().unwrap(), element);
        }
        for category in SpellCategory::ALL {
            assert_eq!(category.to_string().parse::<SpellCategory>().unwrap(), category);
        }
    }
}
