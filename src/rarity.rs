// src/rarity.rs
//! Общая логика редкости и масштабирования
//!
//! Один модуль на все домены: «редкий» монстр и «редкий» предмет должны означать
//! сопоставимую относительную силу.
//!
//! ## Бросок редкости
//!
//! `roll = U(0,1) + depth * k1 + difficulty * k2`, результат сравнивается с
//! возрастающими порогами Uncommon / Rare / Epic / Legendary. При фиксированном
//! `U` рост глубины или сложности никогда не понижает редкость.
//!
//! ## Числовой формат
//!
//! Все масштабирования считаются в `f64` и сразу квантуются: целые характеристики
//! округляются до целого, дробные до сотых ([`quantize`]). Результат: неотрицательные
//! значения, одинаковые на любых IEEE-754 платформах.

use serde::{Deserialize, Serialize};

use crate::config::RaritySettings;

/// Пять упорядоченных уровней редкости
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Порядковый номер уровня: 0 (Common) … 4 (Legendary)
    #[must_use]
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Множитель характеристик существ и предметов.
    ///
    /// # Примеры
    /// ```
    /// use procgen::rarity::Rarity;
    /// assert_eq!(Rarity::Common.multiplier(), 1.0);
    /// assert_eq!(Rarity::Legendary.multiplier(), 3.0);
    /// ```
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.25,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
        }
    }

    /// Линейный множитель `1 + tier * 0.25` для заклинаний и навыков
    #[must_use]
    pub fn tier_scale(self) -> f64 {
        1.0 + f64::from(self.tier()) * 0.25
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Эпические и легендарные экземпляры получают жанровый префикс в имени
    #[must_use]
    pub fn is_notable(self) -> bool {
        self >= Rarity::Epic
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Определяет редкость по готовому броску `draw ∈ [0, 1)`.
#[must_use]
pub fn roll_rarity(settings: &RaritySettings, depth: u32, difficulty: f64, draw: f64) -> Rarity {
    let roll = draw + f64::from(depth) * settings.depth_weight + difficulty * settings.difficulty_weight;
    let [uncommon, rare, epic, legendary] = settings.thresholds;

    if roll >= legendary {
        Rarity::Legendary
    } else if roll >= epic {
        Rarity::Epic
    } else if roll >= rare {
        Rarity::Rare
    } else if roll >= uncommon {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Уровень существа: `1 + depth + floor(difficulty * 3) + jitter` в пределах `1..=u32::MAX`.
///
/// Сложение насыщающее: при огромной сложности или глубине уровень упирается
/// в потолок, а не переполняется.
#[must_use]
pub fn level_for(depth: u32, difficulty: f64, jitter: i32) -> u32 {
    let level = i64::from(depth)
        .saturating_add(1)
        .saturating_add((difficulty * 3.0).floor() as i64)
        .saturating_add(i64::from(jitter));
    level.clamp(1, i64::from(u32::MAX)) as u32
}

/// Множитель уровня `1 + (level - 1) * 0.15`
#[must_use]
pub fn level_scale(level: u32) -> f64 {
    1.0 + f64::from(level.saturating_sub(1)) * 0.15
}

/// Округление до сотых, отрицательные значения обрезаются до нуля
#[must_use]
pub fn quantize(value: f64) -> f64 {
    ((value.max(0.0) * 100.0).round()) / 100.0
}

/// Масштабирует целую характеристику с округлением
#[must_use]
pub fn scale_stat(base: u32, factor: f64) -> u32 {
    (f64::from(base) * factor.max(0.0)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].multiplier() < pair[1].multiplier());
            assert!(pair[0].tier_scale() < pair[1].tier_scale());
        }
    }

    #[test]
    fn zero_shift_uses_raw_draw() {
        let settings = RaritySettings::default();
        assert_eq!(roll_rarity(&settings, 0, 0.0, 0.0), Rarity::Common);
        assert_eq!(roll_rarity(&settings, 0, 0.0, 0.999), Rarity::Epic);
    }

    #[test]
    fn deeper_is_never_rarer_less() {
        let settings = RaritySettings::default();
        for step in 0..100 {
            let draw = f64::from(step) / 100.0;
            let mut previous = Rarity::Common;
            for depth in 0..60 {
                let rarity = roll_rarity(&settings, depth, 0.5, draw);
                assert!(rarity >= previous, "depth {depth} draw {draw}");
                previous = rarity;
            }
        }
    }

    #[test]
    fn harder_is_never_rarer_less() {
        let settings = RaritySettings::default();
        for step in 0..100 {
            let draw = f64::from(step) / 100.0;
            let easy = roll_rarity(&settings, 5, 0.0, draw);
            let hard = roll_rarity(&settings, 5, 1.0, draw);
            assert!(hard >= easy);
        }
    }

    #[test]
    fn level_never_drops_below_one() {
        assert_eq!(level_for(0, 0.0, -1), 1);
        assert_eq!(level_for(10, 0.5, 1), 13);
        assert_eq!(level_scale(1), 1.0);
    }

    #[test]
    fn level_saturates_instead_of_overflowing() {
        assert_eq!(level_for(1, 1e19, 1), u32::MAX);
        assert_eq!(level_for(u32::MAX, 0.5, 1), u32::MAX);
        assert!(level_for(u32::MAX, 0.5, -1) >= level_for(10, 0.5, 1));
    }

    #[test]
    fn quantize_rounds_to_hundredths() {
        assert_eq!(quantize(1.234_9), 1.23);
        assert_eq!(quantize(-3.0), 0.0);
        assert_eq!(scale_stat(10, 1.25), 13);
    }
}
