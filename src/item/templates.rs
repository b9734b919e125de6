// src/item/templates.rs
//! Шаблоны предметов по жанрам
//!
//! Смысл `power` зависит от категории: урон оружия, защита брони, сила эффекта
//! расходника, величина модификатора аксессуара.

use super::ItemCategory;

#[derive(Debug)]
pub struct ItemTemplate {
    pub category: ItemCategory,
    pub weight: u32,
    pub power: (u32, u32),
    /// Атак в секунду, только для оружия
    pub attack_speed: (f64, f64),
    /// Для расходников и аксессуаров не используется
    pub durability: (u32, u32),
    /// Цена в золоте до масштабирования
    pub value: (u32, u32),
    /// Эффект расходника
    pub effect: &'static str,
    /// Характеристики, которые может менять аксессуар
    pub modifiers: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub tags: &'static [&'static str],
}

/// Таблица жанра; для жанров без собственной таблицы берётся фэнтезийная
#[must_use]
pub fn for_genre(genre_id: &str) -> &'static [ItemTemplate] {
    match genre_id {
        "scifi" => SCIFI,
        "horror" => HORROR,
        "cyberpunk" => CYBERPUNK,
        "postapoc" => POSTAPOC,
        _ => FANTASY,
    }
}

const NO_MODIFIERS: &[&str] = &[];

pub const FANTASY: &[ItemTemplate] = &[
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 20,
        power: (5, 9),
        attack_speed: (1.0, 1.4),
        durability: (60, 90),
        value: (20, 40),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Iron", "Steel", "Runed"],
        nouns: &["Sword", "Axe", "Mace"],
        tags: &["melee"],
    },
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 12,
        power: (4, 7),
        attack_speed: (0.7, 1.0),
        durability: (40, 70),
        value: (25, 45),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Yew", "Elven", "Hunter's"],
        nouns: &["Bow", "Crossbow", "Sling"],
        tags: &["ranged"],
    },
    ItemTemplate {
        category: ItemCategory::Armor,
        weight: 18,
        power: (3, 6),
        attack_speed: (0.0, 0.0),
        durability: (80, 120),
        value: (30, 50),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Leather", "Chain", "Plate"],
        nouns: &["Armor", "Hauberk", "Cuirass"],
        tags: &["body"],
    },
    ItemTemplate {
        category: ItemCategory::Armor,
        weight: 12,
        power: (1, 3),
        attack_speed: (0.0, 0.0),
        durability: (50, 80),
        value: (15, 25),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Oaken", "Iron", "Tower"],
        nouns: &["Shield", "Buckler", "Helm"],
        tags: &["offhand"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 25,
        power: (15, 30),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (5, 15),
        effect: "heal",
        modifiers: NO_MODIFIERS,
        prefixes: &["Minor", "Red", "Bitter"],
        nouns: &["Potion", "Tonic", "Draught"],
        tags: &["potion"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 10,
        power: (10, 20),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (15, 30),
        effect: "restore_mana",
        modifiers: NO_MODIFIERS,
        prefixes: &["Blue", "Arcane", "Glowing"],
        nouns: &["Elixir", "Phial", "Essence"],
        tags: &["potion", "magic"],
    },
    ItemTemplate {
        category: ItemCategory::Accessory,
        weight: 8,
        power: (1, 4),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (40, 80),
        effect: "",
        modifiers: &["strength", "agility", "intellect", "luck"],
        prefixes: &["Silver", "Golden", "Jeweled"],
        nouns: &["Ring", "Amulet", "Circlet"],
        tags: &["jewelry"],
    },
];

pub const SCIFI: &[ItemTemplate] = &[
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 20,
        power: (6, 10),
        attack_speed: (1.2, 1.8),
        durability: (70, 100),
        value: (40, 70),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Pulse", "Plasma", "Ion"],
        nouns: &["Rifle", "Carbine", "Pistol"],
        tags: &["ranged", "energy"],
    },
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 10,
        power: (7, 11),
        attack_speed: (0.9, 1.2),
        durability: (50, 80),
        value: (35, 60),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Mono", "Vibro", "Phase"],
        nouns: &["Blade", "Knife", "Saber"],
        tags: &["melee"],
    },
    ItemTemplate {
        category: ItemCategory::Armor,
        weight: 18,
        power: (4, 7),
        attack_speed: (0.0, 0.0),
        durability: (90, 130),
        value: (45, 75),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Composite", "Ceramic", "Exo"],
        nouns: &["Suit", "Vest", "Plating"],
        tags: &["body"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 25,
        power: (15, 30),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (10, 20),
        effect: "heal",
        modifiers: NO_MODIFIERS,
        prefixes: &["Nano", "Field", "Trauma"],
        nouns: &["Medkit", "Injector", "Patch"],
        tags: &["medical"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 10,
        power: (20, 40),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (15, 25),
        effect: "shield",
        modifiers: NO_MODIFIERS,
        prefixes: &["Barrier", "Overshield", "Deflector"],
        nouns: &["Cell", "Capacitor", "Charge"],
        tags: &["energy"],
    },
    ItemTemplate {
        category: ItemCategory::Accessory,
        weight: 8,
        power: (1, 4),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (60, 100),
        effect: "",
        modifiers: &["targeting", "reflexes", "shielding", "hacking"],
        prefixes: &["Neural", "Quantum", "Tactical"],
        nouns: &["Implant", "Module", "Chip"],
        tags: &["augment"],
    },
];

pub const HORROR: &[ItemTemplate] = &[
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 20,
        power: (4, 8),
        attack_speed: (1.0, 1.5),
        durability: (40, 70),
        value: (10, 25),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Rusty", "Blessed", "Silver"],
        nouns: &["Knife", "Cleaver", "Hatchet"],
        tags: &["melee"],
    },
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 10,
        power: (8, 12),
        attack_speed: (0.5, 0.8),
        durability: (30, 50),
        value: (30, 50),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Double-barrel", "Old", "Sawn-off"],
        nouns: &["Shotgun", "Revolver", "Musket"],
        tags: &["ranged"],
    },
    ItemTemplate {
        category: ItemCategory::Armor,
        weight: 15,
        power: (2, 4),
        attack_speed: (0.0, 0.0),
        durability: (40, 70),
        value: (15, 30),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Tattered", "Padded", "Priest's"],
        nouns: &["Coat", "Vestments", "Jacket"],
        tags: &["body"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 25,
        power: (10, 25),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (5, 12),
        effect: "heal",
        modifiers: NO_MODIFIERS,
        prefixes: &["Stale", "Clean", "Laudanum"],
        nouns: &["Bandage", "Tincture", "Salve"],
        tags: &["medical"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 12,
        power: (10, 20),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (10, 20),
        effect: "restore_sanity",
        modifiers: NO_MODIFIERS,
        prefixes: &["Holy", "Soothing", "Blessed"],
        nouns: &["Water", "Candle", "Incense"],
        tags: &["ritual"],
    },
    ItemTemplate {
        category: ItemCategory::Accessory,
        weight: 8,
        power: (1, 4),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (30, 70),
        effect: "",
        modifiers: &["willpower", "perception", "stealth", "faith"],
        prefixes: &["Tarnished", "Bone", "Black"],
        nouns: &["Locket", "Rosary", "Talisman"],
        tags: &["charm"],
    },
];

pub const CYBERPUNK: &[ItemTemplate] = &[
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 20,
        power: (5, 9),
        attack_speed: (1.4, 2.0),
        durability: (60, 90),
        value: (35, 60),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Smart", "Tech", "Power"],
        nouns: &["SMG", "Pistol", "Rifle"],
        tags: &["ranged"],
    },
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 10,
        power: (7, 11),
        attack_speed: (1.1, 1.5),
        durability: (50, 80),
        value: (40, 65),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Thermal", "Mono", "Shock"],
        nouns: &["Katana", "Wire", "Baton"],
        tags: &["melee"],
    },
    ItemTemplate {
        category: ItemCategory::Armor,
        weight: 18,
        power: (3, 6),
        attack_speed: (0.0, 0.0),
        durability: (70, 100),
        value: (40, 70),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Kevlar", "Armored", "Subdermal"],
        nouns: &["Jacket", "Weave", "Plating"],
        tags: &["body"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 25,
        power: (15, 30),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (10, 20),
        effect: "heal",
        modifiers: NO_MODIFIERS,
        prefixes: &["Bounce-back", "Trauma", "Street"],
        nouns: &["Inhaler", "Injector", "Stim"],
        tags: &["drug"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 10,
        power: (10, 25),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (20, 35),
        effect: "overclock",
        modifiers: NO_MODIFIERS,
        prefixes: &["Black", "Synth", "Neuro"],
        nouns: &["Lace", "Booster", "Shard"],
        tags: &["drug", "cyberware"],
    },
    ItemTemplate {
        category: ItemCategory::Accessory,
        weight: 8,
        power: (1, 4),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (70, 120),
        effect: "",
        modifiers: &["reflexes", "netrunning", "cool", "technical"],
        prefixes: &["Kiroshi", "Sandevistan", "Militech"],
        nouns: &["Optics", "Deck", "Chipware"],
        tags: &["cyberware"],
    },
];

pub const POSTAPOC: &[ItemTemplate] = &[
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 20,
        power: (4, 8),
        attack_speed: (0.9, 1.3),
        durability: (30, 60),
        value: (10, 25),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Pipe", "Rebar", "Spiked"],
        nouns: &["Club", "Machete", "Wrench"],
        tags: &["melee", "makeshift"],
    },
    ItemTemplate {
        category: ItemCategory::Weapon,
        weight: 12,
        power: (6, 10),
        attack_speed: (0.6, 1.0),
        durability: (40, 60),
        value: (25, 45),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Hunting", "Pipe", "Scoped"],
        nouns: &["Rifle", "Pistol", "Shotgun"],
        tags: &["ranged"],
    },
    ItemTemplate {
        category: ItemCategory::Armor,
        weight: 18,
        power: (3, 5),
        attack_speed: (0.0, 0.0),
        durability: (50, 90),
        value: (20, 40),
        effect: "",
        modifiers: NO_MODIFIERS,
        prefixes: &["Tire", "Scrap-metal", "Road"],
        nouns: &["Armor", "Leathers", "Pauldron"],
        tags: &["body", "makeshift"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 25,
        power: (10, 25),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (5, 15),
        effect: "heal",
        modifiers: NO_MODIFIERS,
        prefixes: &["Canned", "Pre-war", "Mystery"],
        nouns: &["Beans", "Ration", "Meat"],
        tags: &["food"],
    },
    ItemTemplate {
        category: ItemCategory::Consumable,
        weight: 12,
        power: (15, 30),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (15, 30),
        effect: "purge_radiation",
        modifiers: NO_MODIFIERS,
        prefixes: &["Rad", "Iodine", "Military"],
        nouns: &["Pills", "Flush", "Away"],
        tags: &["medical"],
    },
    ItemTemplate {
        category: ItemCategory::Accessory,
        weight: 8,
        power: (1, 4),
        attack_speed: (0.0, 0.0),
        durability: (0, 0),
        value: (30, 60),
        effect: "",
        modifiers: &["endurance", "scavenging", "rad_resistance", "barter"],
        prefixes: &["Lucky", "Rusted", "Pre-war"],
        nouns: &["Dog Tags", "Compass", "Charm"],
        tags: &["trinket"],
    },
];
