// src/seed.rs
//! Детерминированное выведение под-сидов
//!
//! Каждый вызов генератора получает собственный поток случайных чисел, выведенный
//! из мастер-сида чистой функцией `(master, tag, index) → i64`. Глобального
//! источника случайности нет.
//!
//! ## Формат хеша
//!
//! Функция зафиксирована и не зависит от платформы и версии компилятора
//! (стандартный `DefaultHasher` для этого не подходит):
//!
//! 1. FNV-1a 64 по байтам: `master` (little-endian, 8 байт), `tag` (UTF-8),
//!    разделитель `0xFF`, `index` (little-endian, 8 байт).
//! 2. Финализатор SplitMix64 поверх состояния FNV.
//!
//! Любое изменение этой функции меняет весь контент и требует увеличения
//! [`crate::GENERATION_VERSION`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Теги доменов для выведения под-сидов
pub mod tags {
    pub const TERRAIN: &str = "terrain";
    pub const ENTITY: &str = "entity";
    pub const ITEM: &str = "item";
    pub const SPELL: &str = "spell";
    pub const SKILL_TREE: &str = "skill_tree";
    pub const SKILL: &str = "skill";
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const TAG_SEPARATOR: u8 = 0xFF;

/// Выводит под-сид из мастер-сида, тега домена и порядкового индекса.
///
/// # Примеры
/// ```
/// use procgen::seed::derive_seed;
/// assert_eq!(derive_seed(42, "entity", 0), derive_seed(42, "entity", 0));
/// assert_ne!(derive_seed(42, "entity", 0), derive_seed(42, "entity", 1));
/// ```
#[must_use]
pub fn derive_seed(master: i64, domain_tag: &str, index: u64) -> i64 {
    let mut state = FNV_OFFSET;
    let mut feed = |bytes: &[u8]| {
        for &b in bytes {
            state ^= u64::from(b);
            state = state.wrapping_mul(FNV_PRIME);
        }
    };

    feed(&master.to_le_bytes());
    feed(domain_tag.as_bytes());
    feed(&[TAG_SEPARATOR]);
    feed(&index.to_le_bytes());

    splitmix64(state) as i64
}

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Единственный тип ГСЧ движка: `ChaCha8` с документированным потоком.
#[must_use]
pub fn rng_for(seed: i64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed as u64)
}

/// ГСЧ для `index`-го элемента коллекции внутри одного вызова `generate`.
///
/// Элементы не зависят от порядка генерации соседей.
#[must_use]
pub fn element_rng(seed: i64, domain_tag: &str, index: u64) -> ChaCha8Rng {
    rng_for(derive_seed(seed, domain_tag, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_inputs_same_seed() {
        assert_eq!(derive_seed(12345, "terrain", 3), derive_seed(12345, "terrain", 3));
    }

    #[test]
    fn every_component_changes_the_seed() {
        let base = derive_seed(12345, "terrain", 3);
        assert_ne!(base, derive_seed(12346, "terrain", 3));
        assert_ne!(base, derive_seed(12345, "entity", 3));
        assert_ne!(base, derive_seed(12345, "terrain", 4));
    }

    #[test]
    fn tag_and_index_do_not_alias() {
        // "a" + index 0x31.. не должен совпасть с "a1" + другим индексом
        assert_ne!(derive_seed(0, "a", 1), derive_seed(0, "a1", 0));
    }

    #[test]
    fn hash_is_pinned() {
        // Значения зафиксированы: изменение означает смену контента у всех игроков
        assert_eq!(derive_seed(0, "", 0), PINNED_EMPTY);
        assert_eq!(derive_seed(12345, "terrain", 0), PINNED_TERRAIN);
        assert_eq!(derive_seed(-1, "entity", 7), PINNED_ENTITY);
    }

    const PINNED_EMPTY: i64 = -6_786_154_022_432_666_890;
    const PINNED_TERRAIN: i64 = 4_582_757_683_527_916_437;
    const PINNED_ENTITY: i64 = 3_794_192_445_128_112_856;

    #[test]
    fn rng_streams_are_reproducible() {
        let mut a = element_rng(99, tags::ITEM, 5);
        let mut b = element_rng(99, tags::ITEM, 5);
        let va: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let vb: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(va, vb);
    }
}
