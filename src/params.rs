// src/params.rs
//! Параметры одного вызова `generate`
//!
//! Общие поля (глубина, сложность, жанр) плюс мешок доменных настроек `custom`
//! (`count`, фильтры типа/категории, алгоритм рельефа и т.д.).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GenError, Result};
use crate::genre::{Genre, GenreRegistry};

/// Ключи `custom`, которые понимают генераторы
pub mod keys {
    pub const COUNT: &str = "count";
    pub const TYPE: &str = "type";
    pub const CATEGORY: &str = "category";
    pub const ELEMENT: &str = "element";
    pub const ALGORITHM: &str = "algorithm";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const ARCHETYPE: &str = "archetype";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Прогресс по миру (≥ 0)
    #[serde(default)]
    pub depth: i64,

    /// Номинально [0, 1], большие значения допустимы
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,

    /// Идентификатор жанра из [`GenreRegistry`]
    #[serde(rename = "genre", default = "default_genre")]
    pub genre_id: String,

    /// Доменные настройки. `BTreeMap`: порядок ключей стабилен при сериализации.
    #[serde(default)]
    pub custom: BTreeMap<String, Value>,
}

fn default_difficulty() -> f64 {
    0.5
}
fn default_genre() -> String {
    "fantasy".to_string()
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            depth: 0,
            difficulty: 0.5,
            genre_id: "fantasy".to_string(),
            custom: BTreeMap::new(),
        }
    }
}

impl GenerationParams {
    #[must_use]
    pub fn new(depth: i64, difficulty: f64, genre_id: impl Into<String>) -> Self {
        Self {
            depth,
            difficulty,
            genre_id: genre_id.into(),
            custom: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_custom(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.custom.insert(key.to_string(), value.into());
        self
    }

    /// Проверяет общие поля и разрешает жанр.
    ///
    /// Возвращает глубину как `u32`; отрицательная и гигантская глубина отсекаются здесь.
    pub fn resolve<'r>(&self, registry: &'r GenreRegistry) -> Result<(u32, &'r Genre)> {
        if self.depth < 0 {
            return Err(GenError::invalid(format!(
                "depth must be non-negative, got {}",
                self.depth
            )));
        }
        let depth = u32::try_from(self.depth)
            .map_err(|_| GenError::invalid(format!("depth {} is too large", self.depth)))?;

        if !self.difficulty.is_finite() || self.difficulty < 0.0 {
            return Err(GenError::invalid(format!(
                "difficulty must be a finite non-negative number, got {}",
                self.difficulty
            )));
        }

        let genre = registry
            .get(&self.genre_id)
            .map_err(|_| GenError::invalid(format!("unknown genre id {:?}", self.genre_id)))?;

        Ok((depth, genre))
    }

    /// Целое неотрицательное значение `custom[key]`, если задано.
    pub fn custom_usize(&self, key: &str) -> Result<Option<usize>> {
        match self.custom.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| usize::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| {
                    GenError::invalid(format!("{key} must be a non-negative integer, got {n}"))
                }),
            Some(other) => Err(GenError::invalid(format!(
                "{key} must be a non-negative integer, got {other}"
            ))),
        }
    }

    /// Целое значение `custom[key]` со знаком (размеры карты, где 0 и минус считаются ошибкой уровнем выше).
    pub fn custom_i64(&self, key: &str) -> Result<Option<i64>> {
        match self.custom.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| GenError::invalid(format!("{key} must be an integer, got {n}"))),
            Some(other) => Err(GenError::invalid(format!(
                "{key} must be an integer, got {other}"
            ))),
        }
    }

    /// Строковое значение `custom[key]`, если задано.
    pub fn custom_str(&self, key: &str) -> Result<Option<&str>> {
        match self.custom.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(GenError::invalid(format!(
                "{key} must be a string, got {other}"
            ))),
        }
    }

    /// `count` с значением по умолчанию; ноль считается ошибкой.
    pub fn count_or(&self, default: usize) -> Result<usize> {
        let count = self.custom_usize(keys::COUNT)?.unwrap_or(default);
        if count == 0 {
            return Err(GenError::invalid("count must be at least 1"));
        }
        Ok(count)
    }
}
