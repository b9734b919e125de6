// src/naming.rs
//! Вспомогательные функции выбора из шаблонных таблиц и сборки имён
//!
//! Каждая функция потребляет фиксированное число бросков ГСЧ, чтобы последовательность
//! бросков элемента не зависела от уже выбранных значений.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::config::TemplateSelection;

/// Равновероятный выбор. Пустой срез недопустим (шаблонные таблицы непусты).
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty(), "template table must not be empty");
    &items[rng.gen_range(0..items.len())]
}

/// Выбор индекса с весами; при нулевых весах равновероятный.
///
/// Всегда ровно один бросок.
pub fn pick_weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[u32]) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.gen_range(0..weights.len().max(1)),
    }
}

/// Выбор шаблона из пула согласно [`TemplateSelection`]
pub fn select_template<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'a T],
    selection: TemplateSelection,
    weight: impl Fn(&T) -> u32,
) -> &'a T {
    debug_assert!(!pool.is_empty(), "template pool must not be empty");
    let index = match selection {
        TemplateSelection::Weighted => {
            let weights: Vec<u32> = pool.iter().map(|t| weight(t)).collect();
            pick_weighted_index(rng, &weights)
        }
        TemplateSelection::Uniform => rng.gen_range(0..pool.len()),
    };
    pool[index]
}

/// Равномерная величина в `[min, max]` (включительно); перевёрнутый диапазон схлопывается.
pub fn uniform_u32<R: Rng + ?Sized>(rng: &mut R, (min, max): (u32, u32)) -> u32 {
    rng.gen_range(min.min(max)..=max.max(min))
}

/// Равномерная величина в `[min, max)`; пустой диапазон даёт `min`, но бросок всё равно тратится.
pub fn uniform_f64<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    let t: f64 = rng.gen_range(0.0..1.0);
    min + (max - min).max(0.0) * t
}

/// Бросок `U(0,1)` для редкости и вероятностных решений
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0)
}

/// Имя из префикса и суффикса шаблона, с жанровым префиксом для заметной редкости
#[must_use]
pub fn compose_name(prefix: &str, suffix: &str, genre_prefix: Option<&str>) -> String {
    let base = if suffix.is_empty() {
        prefix.to_string()
    } else if prefix.is_empty() {
        suffix.to_string()
    } else {
        format!("{prefix} {suffix}")
    };
    match genre_prefix {
        Some(p) if !p.is_empty() => format!("{p} {base}"),
        _ => base,
    }
}
