// src/genre.rs
//! Реестр жанров
//!
//! Жанр задаёт тематику всего контента: ключевые слова, палитру и префиксы имён.
//! Реестр заполняется один раз при старте (`register` требует `&mut self`), после чего
//! только читается, поэтому его можно разделять между потоками через `Arc` без блокировок.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Три цвета жанра (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenrePalette {
    pub primary: [u8; 3],
    pub secondary: [u8; 3],
    pub accent: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub description: String,
    pub theme_keywords: Vec<String>,
    pub palette: GenrePalette,
    /// Префикс имён существ высокой редкости
    pub entity_prefix: String,
    /// Префикс имён предметов высокой редкости
    pub item_prefix: String,
    /// Префикс названий локаций
    pub location_prefix: String,
}

impl Genre {
    /// Проверяет инварианты жанра: непустые id/name/description и хотя бы одно ключевое слово
    pub fn check(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GenError::invalid("genre id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(GenError::invalid(format!("genre {} has an empty name", self.id)));
        }
        if self.description.trim().is_empty() {
            return Err(GenError::invalid(format!(
                "genre {} has an empty description",
                self.id
            )));
        }
        if self.theme_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(GenError::invalid(format!(
                "genre {} needs at least one theme keyword",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenreRegistry {
    genres: BTreeMap<String, Genre>,
}

impl GenreRegistry {
    /// Пустой реестр
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Реестр со встроенными жанрами: fantasy, scifi, horror, cyberpunk, postapoc
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for genre in builtin_genres() {
            // встроенные жанры заведомо корректны и уникальны
            registry.genres.insert(genre.id.clone(), genre);
        }
        registry
    }

    /// Добавляет жанр. Некорректный или повторный id даёт ошибку.
    pub fn register(&mut self, genre: Genre) -> Result<()> {
        genre.check()?;
        if self.genres.contains_key(&genre.id) {
            return Err(GenError::invalid(format!(
                "genre {} is already registered",
                genre.id
            )));
        }
        log::debug!("Зарегистрирован жанр {}", genre.id);
        self.genres.insert(genre.id.clone(), genre);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Genre> {
        self.genres
            .get(id)
            .ok_or_else(|| GenError::invalid(format!("unknown genre id {id:?}")))
    }

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.genres.contains_key(id)
    }

    /// Все жанры в порядке возрастания id
    #[must_use]
    pub fn all(&self) -> Vec<&Genre> {
        self.genres.values().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genres.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn genre(
    id: &str,
    name: &str,
    description: &str,
    keywords: &[&str],
    palette: GenrePalette,
    entity_prefix: &str,
    item_prefix: &str,
    location_prefix: &str,
) -> Genre {
    Genre {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        theme_keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        palette,
        entity_prefix: entity_prefix.to_string(),
        item_prefix: item_prefix.to_string(),
        location_prefix: location_prefix.to_string(),
    }
}

fn builtin_genres() -> Vec<Genre> {
    vec![
        genre(
            "fantasy",
            "Fantasy",
            "Swords, sorcery and the ruins of fallen kingdoms",
            &["magic", "medieval", "dragons", "ruins"],
            GenrePalette {
                primary: [92, 64, 51],
                secondary: [34, 102, 68],
                accent: [212, 175, 55],
            },
            "Dread",
            "Enchanted",
            "Old",
        ),
        genre(
            "scifi",
            "Science Fiction",
            "Derelict starships, alien worlds and rogue machines",
            &["space", "technology", "aliens", "starships"],
            GenrePalette {
                primary: [40, 60, 90],
                secondary: [180, 190, 200],
                accent: [0, 200, 255],
            },
            "Xeno",
            "Quantum",
            "Sector",
        ),
        genre(
            "horror",
            "Horror",
            "Haunted halls where the dead do not rest",
            &["dread", "undead", "occult", "madness"],
            GenrePalette {
                primary: [30, 20, 25],
                secondary: [90, 10, 10],
                accent: [200, 200, 170],
            },
            "Accursed",
            "Bloodstained",
            "Forsaken",
        ),
        genre(
            "cyberpunk",
            "Cyberpunk",
            "Neon megacities ruled by corporations and street gangs",
            &["neon", "implants", "corporations", "hackers"],
            GenrePalette {
                primary: [20, 10, 40],
                secondary: [255, 0, 128],
                accent: [0, 255, 200],
            },
            "Chrome",
            "Black-market",
            "Neo",
        ),
        genre(
            "postapoc",
            "Post-Apocalyptic",
            "A scorched wasteland picked over by scavengers",
            &["wasteland", "radiation", "scavengers", "ruins"],
            GenrePalette {
                primary: [120, 100, 70],
                secondary: [70, 80, 50],
                accent: [230, 120, 20],
            },
            "Irradiated",
            "Salvaged",
            "Ruined",
        ),
    ]
}
