// src/entity/templates.rs
//! Шаблоны существ по жанрам
//!
//! Статические таблицы только для чтения. Диапазоны задают базовые значения до
//! масштабирования уровнем и редкостью.

use super::EntityType;

#[derive(Debug)]
pub struct EntityTemplate {
    pub archetype: &'static str,
    pub entity_type: EntityType,
    /// Вес при выборе `TemplateSelection::Weighted`
    pub weight: u32,
    pub health: (u32, u32),
    pub damage: (u32, u32),
    pub defense: (u32, u32),
    pub speed: (u32, u32),
    /// С какой глубины шаблон попадает в пул
    pub min_depth: u32,
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// Таблица жанра; для жанров без собственной таблицы берётся фэнтезийная
#[must_use]
pub fn for_genre(genre_id: &str) -> &'static [EntityTemplate] {
    match genre_id {
        "scifi" => SCIFI,
        "horror" => HORROR,
        "cyberpunk" => CYBERPUNK,
        "postapoc" => POSTAPOC,
        _ => FANTASY,
    }
}

pub const FANTASY: &[EntityTemplate] = &[
    EntityTemplate {
        archetype: "goblin",
        entity_type: EntityType::Minion,
        weight: 30,
        health: (8, 14),
        damage: (2, 4),
        defense: (0, 2),
        speed: (8, 12),
        min_depth: 0,
        prefixes: &["Goblin", "Kobold", "Gremlin"],
        suffixes: &["Skirmisher", "Sneak", "Cutthroat"],
        tags: &["humanoid", "melee"],
    },
    EntityTemplate {
        archetype: "wolf",
        entity_type: EntityType::Monster,
        weight: 25,
        health: (12, 20),
        damage: (3, 6),
        defense: (1, 2),
        speed: (10, 14),
        min_depth: 0,
        prefixes: &["Dire", "Grey", "Frost"],
        suffixes: &["Wolf", "Warg", "Hound"],
        tags: &["beast", "pack"],
    },
    EntityTemplate {
        archetype: "skeleton",
        entity_type: EntityType::Monster,
        weight: 20,
        health: (15, 25),
        damage: (4, 7),
        defense: (2, 4),
        speed: (6, 9),
        min_depth: 2,
        prefixes: &["Bone", "Ashen", "Rattling"],
        suffixes: &["Skeleton", "Warrior", "Archer"],
        tags: &["undead", "melee"],
    },
    EntityTemplate {
        archetype: "troll",
        entity_type: EntityType::Monster,
        weight: 10,
        health: (40, 60),
        damage: (8, 12),
        defense: (3, 6),
        speed: (4, 7),
        min_depth: 4,
        prefixes: &["Cave", "Hill", "Moss"],
        suffixes: &["Troll", "Brute", "Ogre"],
        tags: &["giant", "regenerating"],
    },
    EntityTemplate {
        archetype: "merchant",
        entity_type: EntityType::Npc,
        weight: 8,
        health: (10, 16),
        damage: (0, 1),
        defense: (0, 1),
        speed: (5, 7),
        min_depth: 0,
        prefixes: &["Wandering", "Dwarven", "Elven"],
        suffixes: &["Merchant", "Tinker", "Herbalist"],
        tags: &["npc", "trader"],
    },
    EntityTemplate {
        archetype: "lich",
        entity_type: EntityType::Boss,
        weight: 3,
        health: (120, 180),
        damage: (25, 35),
        defense: (6, 10),
        speed: (6, 8),
        min_depth: 6,
        prefixes: &["Forgotten", "Hollow", "Undying"],
        suffixes: &["Lich", "Necromancer", "Bonelord"],
        tags: &["undead", "caster", "boss"],
    },
    EntityTemplate {
        archetype: "dragon",
        entity_type: EntityType::Boss,
        weight: 2,
        health: (200, 300),
        damage: (20, 30),
        defense: (10, 15),
        speed: (8, 12),
        min_depth: 8,
        prefixes: &["Ancient", "Crimson", "Elder"],
        suffixes: &["Dragon", "Wyrm", "Drake"],
        tags: &["dragon", "flying", "boss"],
    },
];

pub const SCIFI: &[EntityTemplate] = &[
    EntityTemplate {
        archetype: "drone",
        entity_type: EntityType::Minion,
        weight: 30,
        health: (6, 10),
        damage: (2, 5),
        defense: (1, 3),
        speed: (12, 16),
        min_depth: 0,
        prefixes: &["Scout", "Repair", "Sentry"],
        suffixes: &["Drone", "Bot", "Probe"],
        tags: &["machine", "ranged"],
    },
    EntityTemplate {
        archetype: "xenohound",
        entity_type: EntityType::Monster,
        weight: 25,
        health: (14, 22),
        damage: (4, 7),
        defense: (1, 3),
        speed: (11, 15),
        min_depth: 0,
        prefixes: &["Acid", "Void", "Chitin"],
        suffixes: &["Stalker", "Hound", "Crawler"],
        tags: &["alien", "melee"],
    },
    EntityTemplate {
        archetype: "security_mech",
        entity_type: EntityType::Monster,
        weight: 12,
        health: (45, 65),
        damage: (7, 11),
        defense: (6, 9),
        speed: (4, 6),
        min_depth: 3,
        prefixes: &["Heavy", "Rogue", "Patrol"],
        suffixes: &["Mech", "Walker", "Sentinel"],
        tags: &["machine", "armored"],
    },
    EntityTemplate {
        archetype: "android",
        entity_type: EntityType::Npc,
        weight: 8,
        health: (12, 18),
        damage: (0, 2),
        defense: (1, 2),
        speed: (6, 8),
        min_depth: 0,
        prefixes: &["Salvage", "Medical", "Trade"],
        suffixes: &["Android", "Synth", "Unit"],
        tags: &["npc", "trader", "machine"],
    },
    EntityTemplate {
        archetype: "brood_queen",
        entity_type: EntityType::Boss,
        weight: 3,
        health: (180, 260),
        damage: (22, 32),
        defense: (8, 12),
        speed: (5, 8),
        min_depth: 6,
        prefixes: &["Hive", "Brood", "Matriarch"],
        suffixes: &["Queen", "Mother", "Overmind"],
        tags: &["alien", "boss"],
    },
];

pub const HORROR: &[EntityTemplate] = &[
    EntityTemplate {
        archetype: "ghoul",
        entity_type: EntityType::Minion,
        weight: 30,
        health: (10, 16),
        damage: (3, 5),
        defense: (0, 1),
        speed: (7, 10),
        min_depth: 0,
        prefixes: &["Ravenous", "Pallid", "Gaunt"],
        suffixes: &["Ghoul", "Feaster", "Husk"],
        tags: &["undead", "melee"],
    },
    EntityTemplate {
        archetype: "cultist",
        entity_type: EntityType::Monster,
        weight: 25,
        health: (12, 18),
        damage: (4, 8),
        defense: (1, 2),
        speed: (7, 9),
        min_depth: 0,
        prefixes: &["Hooded", "Chanting", "Masked"],
        suffixes: &["Cultist", "Zealot", "Acolyte"],
        tags: &["humanoid", "caster"],
    },
    EntityTemplate {
        archetype: "wraith",
        entity_type: EntityType::Monster,
        weight: 15,
        health: (20, 30),
        damage: (6, 9),
        defense: (2, 5),
        speed: (9, 12),
        min_depth: 2,
        prefixes: &["Weeping", "Shrouded", "Hungry"],
        suffixes: &["Wraith", "Shade", "Spectre"],
        tags: &["undead", "incorporeal"],
    },
    EntityTemplate {
        archetype: "survivor",
        entity_type: EntityType::Npc,
        weight: 8,
        health: (10, 14),
        damage: (1, 3),
        defense: (0, 1),
        speed: (6, 8),
        min_depth: 0,
        prefixes: &["Frightened", "Wounded", "Lost"],
        suffixes: &["Survivor", "Priest", "Doctor"],
        tags: &["npc", "human"],
    },
    EntityTemplate {
        archetype: "abomination",
        entity_type: EntityType::Boss,
        weight: 3,
        health: (160, 240),
        damage: (24, 34),
        defense: (5, 9),
        speed: (4, 7),
        min_depth: 6,
        prefixes: &["Stitched", "Writhing", "Nameless"],
        suffixes: &["Abomination", "Horror", "Thing"],
        tags: &["aberration", "boss"],
    },
];

pub const CYBERPUNK: &[EntityTemplate] = &[
    EntityTemplate {
        archetype: "punk",
        entity_type: EntityType::Minion,
        weight: 30,
        health: (9, 14),
        damage: (3, 5),
        defense: (0, 2),
        speed: (8, 11),
        min_depth: 0,
        prefixes: &["Street", "Neon", "Wired"],
        suffixes: &["Punk", "Ganger", "Runner"],
        tags: &["humanoid", "ranged"],
    },
    EntityTemplate {
        archetype: "cyberhound",
        entity_type: EntityType::Monster,
        weight: 22,
        health: (15, 22),
        damage: (4, 7),
        defense: (2, 3),
        speed: (12, 15),
        min_depth: 0,
        prefixes: &["Chrome", "Rabid", "Tracker"],
        suffixes: &["Hound", "Dog", "Hunter"],
        tags: &["machine", "beast"],
    },
    EntityTemplate {
        archetype: "enforcer",
        entity_type: EntityType::Monster,
        weight: 15,
        health: (30, 45),
        damage: (7, 10),
        defense: (4, 7),
        speed: (6, 8),
        min_depth: 3,
        prefixes: &["Corporate", "Arasaki", "Militech"],
        suffixes: &["Enforcer", "Agent", "Trooper"],
        tags: &["humanoid", "armored"],
    },
    EntityTemplate {
        archetype: "fixer",
        entity_type: EntityType::Npc,
        weight: 8,
        health: (10, 15),
        damage: (1, 2),
        defense: (1, 2),
        speed: (6, 8),
        min_depth: 0,
        prefixes: &["Shady", "Veteran", "Backalley"],
        suffixes: &["Fixer", "Ripperdoc", "Broker"],
        tags: &["npc", "trader"],
    },
    EntityTemplate {
        archetype: "war_mech",
        entity_type: EntityType::Boss,
        weight: 3,
        health: (200, 280),
        damage: (20, 30),
        defense: (12, 16),
        speed: (5, 7),
        min_depth: 6,
        prefixes: &["Prototype", "Black-ICE", "Titan"],
        suffixes: &["Mech", "Warframe", "Dreadnought"],
        tags: &["machine", "boss"],
    },
];

pub const POSTAPOC: &[EntityTemplate] = &[
    EntityTemplate {
        archetype: "rad_rat",
        entity_type: EntityType::Minion,
        weight: 30,
        health: (6, 10),
        damage: (2, 4),
        defense: (0, 1),
        speed: (10, 13),
        min_depth: 0,
        prefixes: &["Glowing", "Mangy", "Swollen"],
        suffixes: &["Rat", "Roach", "Vermin"],
        tags: &["beast", "irradiated"],
    },
    EntityTemplate {
        archetype: "raider",
        entity_type: EntityType::Monster,
        weight: 25,
        health: (14, 20),
        damage: (4, 7),
        defense: (1, 3),
        speed: (7, 10),
        min_depth: 0,
        prefixes: &["Scrap", "Dust", "Rust"],
        suffixes: &["Raider", "Marauder", "Bandit"],
        tags: &["humanoid", "ranged"],
    },
    EntityTemplate {
        archetype: "mutant",
        entity_type: EntityType::Monster,
        weight: 15,
        health: (35, 55),
        damage: (7, 11),
        defense: (2, 5),
        speed: (5, 7),
        min_depth: 3,
        prefixes: &["Hulking", "Twisted", "Feral"],
        suffixes: &["Mutant", "Brute", "Behemoth"],
        tags: &["mutant", "melee"],
    },
    EntityTemplate {
        archetype: "scavenger",
        entity_type: EntityType::Npc,
        weight: 8,
        health: (10, 15),
        damage: (1, 3),
        defense: (0, 2),
        speed: (6, 8),
        min_depth: 0,
        prefixes: &["Old", "Scarred", "Nomad"],
        suffixes: &["Scavenger", "Trader", "Mechanic"],
        tags: &["npc", "trader"],
    },
    EntityTemplate {
        archetype: "warlord",
        entity_type: EntityType::Boss,
        weight: 3,
        health: (150, 220),
        damage: (22, 30),
        defense: (8, 12),
        speed: (6, 8),
        min_depth: 6,
        prefixes: &["Iron", "Warboy", "Bloodied"],
        suffixes: &["Warlord", "Overlord", "Khan"],
        tags: &["humanoid", "boss"],
    },
];
