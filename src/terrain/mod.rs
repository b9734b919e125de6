// src/terrain/mod.rs
//! Генерация рельефа подземелий
//!
//! Два взаимозаменяемых алгоритма с общей моделью данных [`Terrain`]:
//! - **BSP** ([`bsp`]) — рекурсивное деление прямоугольника, комнаты в листьях,
//!   Г-образные коридоры между соседними поддеревьями;
//! - **клеточный автомат** ([`cellular`]) — пещеры с последующим удалением
//!   недостижимых участков пола.
//!
//! Сетка хранится плоским вектором `y * width + x`; все обходы итеративные по индексам.

pub mod bsp;
pub mod cellular;
pub mod png;

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::TerrainSettings;
use crate::error::{GenError, Invariant, Result};
use crate::generator::Generator;
use crate::genre::GenreRegistry;
use crate::naming::pick;
use crate::params::{GenerationParams, keys};
use crate::seed::{element_rng, rng_for};

/// Сторона карты, выше которой параметры считаются ошибочными
pub const MAX_DIMENSION: u32 = 4096;

const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Wall,
    Floor,
    Corridor,
    Door,
}

impl Tile {
    /// По клетке можно пройти
    #[must_use]
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// Прямоугольная комната BSP-карты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Room {
    #[must_use]
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainAlgorithm {
    #[default]
    Bsp,
    Cellular,
}

impl FromStr for TerrainAlgorithm {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bsp" | "rooms" => Ok(TerrainAlgorithm::Bsp),
            "cellular" | "cave" | "caves" => Ok(TerrainAlgorithm::Cellular),
            other => Err(GenError::invalid(format!("unknown terrain algorithm {other:?}"))),
        }
    }
}

impl std::fmt::Display for TerrainAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TerrainAlgorithm::Bsp => "bsp",
            TerrainAlgorithm::Cellular => "cellular",
        })
    }
}

/// Сгенерированная карта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub name: String,
    pub genre_id: String,
    pub algorithm: TerrainAlgorithm,
    pub seed: i64,
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Tile>,
    /// Только для BSP; у пещер пусто
    pub rooms: Vec<Room>,
}

impl Terrain {
    /// Клетка `(x, y)`; `None` за пределами карты
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Tile> {
        if x < self.width && y < self.height {
            self.tiles.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_walkable(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_some_and(Tile::is_walkable)
    }

    /// Доля клеток пола (`Tile::Floor`) от всей карты
    #[must_use]
    pub fn floor_fraction(&self) -> f64 {
        if self.tiles.is_empty() {
            return 0.0;
        }
        let floors = self.tiles.iter().filter(|&&t| t == Tile::Floor).count();
        floors as f64 / self.tiles.len() as f64
    }

    /// Количество проходимых клеток
    #[must_use]
    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }
}

/// Отмечает клетки, достижимые из `start` по 4 направлениям через клетки, где `passable`.
pub(crate) fn flood_fill(
    tiles: &[Tile],
    width: usize,
    height: usize,
    start: usize,
    passable: impl Fn(Tile) -> bool,
) -> Vec<bool> {
    let mut visited = vec![false; tiles.len()];
    if start >= tiles.len() || !passable(tiles[start]) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(idx) = queue.pop_front() {
        let x = (idx % width) as i32;
        let y = (idx / width) as i32;
        for &(dx, dy) in &DIRECTIONS {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                continue;
            }
            let nidx = ny as usize * width + nx as usize;
            if !visited[nidx] && passable(tiles[nidx]) {
                visited[nidx] = true;
                queue.push_back(nidx);
            }
        }
    }
    visited
}

const ROOM_NOUNS: [&str; 5] = ["Halls", "Keep", "Vaults", "Barracks", "Crypts"];
const CAVE_NOUNS: [&str; 5] = ["Caverns", "Grotto", "Hollows", "Depths", "Warrens"];

pub struct TerrainGenerator {
    settings: TerrainSettings,
    registry: Arc<GenreRegistry>,
}

impl TerrainGenerator {
    #[must_use]
    pub fn new(settings: TerrainSettings, registry: Arc<GenreRegistry>) -> Self {
        Self { settings, registry }
    }

    #[must_use]
    pub fn settings(&self) -> &TerrainSettings {
        &self.settings
    }

    fn dimension(&self, params: &GenerationParams, key: &str, default: u32) -> Result<u32> {
        let Some(value) = params.custom_i64(key)? else {
            return Ok(default);
        };
        if value <= 0 {
            return Err(GenError::invalid(format!("{key} must be positive, got {value}")));
        }
        u32::try_from(value)
            .ok()
            .filter(|&v| v <= MAX_DIMENSION)
            .ok_or_else(|| {
                GenError::invalid(format!("{key} must not exceed {MAX_DIMENSION}, got {value}"))
            })
    }
}

impl Generator for TerrainGenerator {
    type Output = Terrain;

    fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Terrain> {
        let (_, genre) = params.resolve(&self.registry)?;
        let algorithm = params
            .custom_str(keys::ALGORITHM)?
            .map(str::parse::<TerrainAlgorithm>)
            .transpose()?
            .unwrap_or_default();
        let width = self.dimension(params, keys::WIDTH, self.settings.default_width)?;
        let height = self.dimension(params, keys::HEIGHT, self.settings.default_height)?;

        let minimum = match algorithm {
            TerrainAlgorithm::Bsp => self.settings.min_room_size + 2,
            TerrainAlgorithm::Cellular => 3,
        };
        if width < minimum || height < minimum {
            return Err(GenError::invalid(format!(
                "{algorithm} terrain needs at least {minimum}x{minimum} tiles, got {width}x{height}"
            )));
        }

        let mut rng = rng_for(seed);
        let (tiles, rooms) = match algorithm {
            TerrainAlgorithm::Bsp => bsp::generate(&mut rng, width, height, &self.settings),
            TerrainAlgorithm::Cellular => (
                cellular::generate(&mut rng, width, height, &self.settings),
                Vec::new(),
            ),
        };

        // Имя берётся из отдельного потока, чтобы не влиять на структуру карты
        let mut name_rng = element_rng(seed, "terrain_name", 0);
        let noun = match algorithm {
            TerrainAlgorithm::Bsp => pick(&mut name_rng, &ROOM_NOUNS),
            TerrainAlgorithm::Cellular => pick(&mut name_rng, &CAVE_NOUNS),
        };

        let terrain = Terrain {
            name: format!("{} {}", genre.location_prefix, noun),
            genre_id: genre.id.clone(),
            algorithm,
            seed,
            width,
            height,
            tiles,
            rooms,
        };

        log::debug!(
            "Карта {} ({algorithm}, {width}×{height}, сид {seed}): комнат {}, доля пола {:.2}",
            terrain.name,
            terrain.rooms.len(),
            terrain.floor_fraction()
        );
        if algorithm == TerrainAlgorithm::Cellular
            && terrain.floor_fraction() < self.settings.min_floor_fraction
        {
            log::warn!(
                "Пещера с сидом {seed} слишком тесная: доля пола {:.2} < {:.2}",
                terrain.floor_fraction(),
                self.settings.min_floor_fraction
            );
        }

        Ok(terrain)
    }

    fn validate(&self, terrain: &Terrain) -> Result<()> {
        let width = terrain.width as usize;
        let height = terrain.height as usize;
        if width == 0 || height == 0 {
            return Err(Invariant::EmptyCollection { what: "terrain grid" }.into());
        }
        if terrain.tiles.len() != width * height {
            return Err(Invariant::SizeMismatch {
                what: "terrain grid",
                expected: width * height,
                actual: terrain.tiles.len(),
            }
            .into());
        }

        for (i, room) in terrain.rooms.iter().enumerate() {
            if room.width == 0
                || room.height == 0
                || room.x + room.width > terrain.width
                || room.y + room.height > terrain.height
            {
                return Err(Invariant::OutOfBounds {
                    what: format!("room {i} at ({}, {})", room.x, room.y),
                }
                .into());
            }
        }
        if terrain.algorithm == TerrainAlgorithm::Bsp && terrain.rooms.is_empty() {
            return Err(Invariant::EmptyCollection { what: "rooms" }.into());
        }

        let Some(start) = terrain.tiles.iter().position(|t| t.is_walkable()) else {
            return Err(Invariant::EmptyCollection {
                what: "walkable tiles",
            }
            .into());
        };
        let reached = flood_fill(&terrain.tiles, width, height, start, Tile::is_walkable);
        let unreachable = terrain.walkable_count() - reached.iter().filter(|&&r| r).count();
        if unreachable > 0 {
            return Err(Invariant::DisconnectedTerrain { unreachable }.into());
        }

        if terrain.algorithm == TerrainAlgorithm::Cellular {
            let fraction = terrain.floor_fraction();
            if fraction < self.settings.min_floor_fraction {
                return Err(Invariant::FloorFractionTooLow {
                    fraction,
                    minimum: self.settings.min_floor_fraction,
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

    fn generator() -> TerrainGenerator {
        TerrainGenerator::new(
            TerrainSettings::default(),
            Arc::new(GenreRegistry::with_defaults()),
        )
    }

    fn params(algorithm: &str, width: i64, height: i64) -> GenerationParams {
        GenerationParams::default()
            .with_custom(keys::ALGORITHM, algorithm)
            .with_custom(keys::WIDTH, width)
            .with_custom(keys::HEIGHT, height)
    }

    #[test]
    fn bsp_is_deterministic() {
        let generator = generator();
        let a = generator.generate(12345, &params("bsp", 40, 25)).unwrap();
        let b = generator.generate(12345, &params("bsp", 40, 25)).unwrap();
        assert_eq!(a.tiles, b.tiles);
        assert_eq!(a.rooms, b.rooms);
        assert!(!a.rooms.is_empty());
    }

    #[test]
    fn bsp_maps_validate() {
        let generator = generator();
        for seed in 0..20 {
            let terrain = generator.generate(seed, &params("bsp", 60, 40)).unwrap();
            generator.validate(&terrain).unwrap();
            assert_eq!(terrain.name.split(' ').next(), Some("Old"));
        }
    }

    #[test]
    fn cellular_output_is_always_connected() {
        let generator = generator();
        for seed in 0..20 {
            let terrain = generator.generate(seed, &params("cellular", 50, 30)).unwrap();
            let width = terrain.width as usize;
            let start = terrain.tiles.iter().position(|t| t.is_walkable());
            if let Some(start) = start {
                let reached =
                    flood_fill(&terrain.tiles, width, terrain.height as usize, start, Tile::is_walkable);
                for (tile, reached) in terrain.tiles.iter().zip(reached) {
                    assert!(!tile.is_walkable() || reached, "seed {seed}");
                }
            }
            match generator.validate(&terrain) {
                Ok(()) => {}
                Err(GenError::InvariantViolation(Invariant::FloorFractionTooLow { .. })) => {}
                Err(other) => panic!("seed {seed}: {other}"),
            }
        }
    }

    #[test]
    fn cellular_borders_are_walls() {
        let generator = generator();
        let terrain = generator.generate(7, &params("cellular", 30, 20)).unwrap();
        for x in 0..terrain.width {
            assert_eq!(terrain.get(x, 0), Some(Tile::Wall));
            assert_eq!(terrain.get(x, terrain.height - 1), Some(Tile::Wall));
        }
        for y in 0..terrain.height {
            assert_eq!(terrain.get(0, y), Some(Tile::Wall));
            assert_eq!(terrain.get(terrain.width - 1, y), Some(Tile::Wall));
        }
        assert!(terrain.rooms.is_empty());
    }

    #[test]
    fn unreachable_floor_is_reported() {
        let generator = generator();
        let mut tiles = vec![Tile::Wall; 25];
        tiles[5 + 1] = Tile::Floor;
        tiles[5 + 2] = Tile::Corridor;
        tiles[3 * 5 + 3] = Tile::Floor;
        let terrain = Terrain {
            name: "Test".to_string(),
            genre_id: "fantasy".to_string(),
            algorithm: TerrainAlgorithm::Cellular,
            seed: 0,
            width: 5,
            height: 5,
            tiles,
            rooms: Vec::new(),
        };
        assert_eq!(terrain.walkable_count(), 3);
        assert!(matches!(
            generator.validate(&terrain),
            Err(GenError::InvariantViolation(Invariant::DisconnectedTerrain { unreachable: 1 }))
        ));
    }

    #[test]
    fn low_floor_fraction_fails_validation_only() {
        let settings = TerrainSettings {
            min_floor_fraction: 0.99,
            ..TerrainSettings::default()
        };
        let generator = TerrainGenerator::new(settings, Arc::new(GenreRegistry::with_defaults()));
        let terrain = generator.generate(11, &params("cellular", 30, 20)).unwrap();
        assert!(matches!(
            generator.validate(&terrain),
            Err(GenError::InvariantViolation(Invariant::FloorFractionTooLow { .. }))
        ));
    }

    #[test]
    fn cramped_caves_fail_only_on_floor_fraction() {
        let generator = generator();
        let mut valid = 0;
        for seed in 0..40 {
            let terrain = generator.generate(seed, &params("cellular", 80, 50)).unwrap();
            match generator.validate(&terrain) {
                Ok(()) => valid += 1,
                Err(GenError::InvariantViolation(Invariant::FloorFractionTooLow { .. })) => {}
                Err(other) => panic!("seed {seed}: {other}"),
            }
        }
        assert!(valid > 0);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let generator = generator();
        for (w, h) in [(0, 10), (10, -3), (-1, -1)] {
            assert!(matches!(
                generator.generate(1, &params("bsp", w, h)),
                Err(GenError::InvalidParameter(_))
            ));
        }
        assert!(generator.generate(1, &params("maze", 20, 20)).is_err());
    }

    #[test]
    fn truncated_grid_is_reported() {
        let generator = generator();
        let mut terrain = generator.generate(5, &params("bsp", 40, 25)).unwrap();
        terrain.tiles.pop();
        assert!(matches!(
            generator.validate(&terrain),
            Err(GenError::InvariantViolation(Invariant::SizeMismatch { .. }))
        ));
    }

    #[test]
    fn algorithm_names_parse() {
        assert_eq!("BSP".parse::<TerrainAlgorithm>().unwrap(), TerrainAlgorithm::Bsp);
        assert_eq!("cave".parse::<TerrainAlgorithm>().unwrap(), TerrainAlgorithm::Cellular);
    }
}
