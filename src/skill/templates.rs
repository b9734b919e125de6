// src/skill/templates.rs
//! Архетипы деревьев навыков по жанрам
//!
//! Каждый архетип представляет собой набор шаблонов навыков с диапазоном допустимых ярусов. Набор
//! подобран так, чтобы на любом ярусе 0..=6 был хотя бы один применимый шаблон.

use super::SkillType;

#[derive(Debug)]
pub struct EffectTemplate {
    pub stat: &'static str,
    pub base: (f64, f64),
}

#[derive(Debug)]
pub struct SkillTemplate {
    pub skill_type: SkillType,
    /// Включительный диапазон ярусов
    pub tiers: (u8, u8),
    pub adjectives: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub effects: &'static [EffectTemplate],
}

impl SkillTemplate {
    #[must_use]
    pub fn fits_tier(&self, tier: u8) -> bool {
        (self.tiers.0..=self.tiers.1).contains(&tier)
    }
}

#[derive(Debug)]
pub struct Archetype {
    pub id: &'static str,
    pub name: &'static str,
    pub skills: &'static [SkillTemplate],
}

/// Архетипы жанра; для жанров без собственной таблицы берутся фэнтезийные
#[must_use]
pub fn for_genre(genre_id: &str) -> &'static [Archetype] {
    match genre_id {
        "scifi" => SCIFI,
        "horror" => HORROR,
        "cyberpunk" => CYBERPUNK,
        "postapoc" => POSTAPOC,
        _ => FANTASY,
    }
}

const fn effect(stat: &'static str, min: f64, max: f64) -> EffectTemplate {
    EffectTemplate {
        stat,
        base: (min, max),
    }
}

pub const FANTASY: &[Archetype] = &[
    Archetype {
        id: "warrior",
        name: "Warrior",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 2),
                adjectives: &["Heavy", "Brutal", "Quick"],
                nouns: &["Strike", "Cleave", "Bash"],
                effects: &[effect("damage", 4.0, 8.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 3),
                adjectives: &["Iron", "Thick", "Hardened"],
                nouns: &["Skin", "Hide", "Resolve"],
                effects: &[effect("defense", 2.0, 4.0), effect("health", 5.0, 10.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (2, 5),
                adjectives: &["Whirlwind", "Crushing", "Sundering"],
                nouns: &["Assault", "Blow", "Charge"],
                effects: &[effect("damage", 8.0, 14.0), effect("stun", 0.5, 1.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Aura,
                tiers: (3, 5),
                adjectives: &["Rallying", "Commanding", "Stalwart"],
                nouns: &["Banner", "Shout", "Presence"],
                effects: &[effect("ally_defense", 2.0, 5.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (5, 6),
                adjectives: &["Titan's", "Unstoppable", "Last"],
                nouns: &["Wrath", "Stand", "Fury"],
                effects: &[effect("damage", 15.0, 25.0), effect("defense", 4.0, 8.0)],
            },
        ],
    },
    Archetype {
        id: "mage",
        name: "Mage",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 2),
                adjectives: &["Arcane", "Flickering", "Focused"],
                nouns: &["Spark", "Missile", "Bolt"],
                effects: &[effect("spell_damage", 5.0, 9.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 4),
                adjectives: &["Deep", "Scholarly", "Clear"],
                nouns: &["Study", "Mind", "Insight"],
                effects: &[effect("mana", 5.0, 12.0), effect("mana_regen", 0.5, 1.5)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (2, 5),
                adjectives: &["Chain", "Frozen", "Searing"],
                nouns: &["Lightning", "Orb", "Inferno"],
                effects: &[effect("spell_damage", 10.0, 16.0), effect("area", 1.0, 2.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (5, 6),
                adjectives: &["Cataclysmic", "Astral", "Primordial"],
                nouns: &["Meteor", "Rift", "Convergence"],
                effects: &[effect("spell_damage", 20.0, 30.0)],
            },
        ],
    },
    Archetype {
        id: "rogue",
        name: "Rogue",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 3),
                adjectives: &["Sneaky", "Twin", "Poisoned"],
                nouns: &["Stab", "Slash", "Dagger"],
                effects: &[effect("damage", 3.0, 6.0), effect("crit_chance", 0.02, 0.05)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 4),
                adjectives: &["Light", "Silent", "Nimble"],
                nouns: &["Feet", "Shadow", "Fingers"],
                effects: &[effect("evasion", 0.02, 0.05)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (3, 5),
                adjectives: &["Shadow", "Vanishing", "Lethal"],
                nouns: &["Step", "Act", "Ambush"],
                effects: &[effect("damage", 9.0, 15.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (5, 6),
                adjectives: &["Thousand", "Perfect", "Death's"],
                nouns: &["Cuts", "Assassination", "Mark"],
                effects: &[effect("damage", 18.0, 28.0), effect("crit_chance", 0.1, 0.2)],
            },
        ],
    },
];

pub const SCIFI: &[Archetype] = &[
    Archetype {
        id: "soldier",
        name: "Soldier",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 2),
                adjectives: &["Burst", "Suppressing", "Aimed"],
                nouns: &["Fire", "Shot", "Volley"],
                effects: &[effect("damage", 4.0, 8.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 4),
                adjectives: &["Combat", "Veteran", "Armored"],
                nouns: &["Training", "Instinct", "Plating"],
                effects: &[effect("defense", 2.0, 4.0), effect("accuracy", 0.02, 0.05)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (3, 5),
                adjectives: &["Orbital", "Heavy", "Cluster"],
                nouns: &["Grenade", "Barrage", "Strike"],
                effects: &[effect("damage", 10.0, 16.0), effect("area", 1.0, 2.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (5, 6),
                adjectives: &["Total", "Final", "Full"],
                nouns: &["Annihilation", "Protocol", "Assault"],
                effects: &[effect("damage", 20.0, 30.0)],
            },
        ],
    },
    Archetype {
        id: "engineer",
        name: "Engineer",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 3),
                adjectives: &["Quick", "Field", "Improvised"],
                nouns: &["Repair", "Patch", "Weld"],
                effects: &[effect("repair", 5.0, 10.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Aura,
                tiers: (0, 4),
                adjectives: &["Power", "Shield", "Sensor"],
                nouns: &["Relay", "Grid", "Net"],
                effects: &[effect("ally_shield", 2.0, 5.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (3, 6),
                adjectives: &["Autonomous", "Heavy", "Tesla"],
                nouns: &["Turret", "Drone", "Coil"],
                effects: &[effect("summon_power", 8.0, 14.0)],
            },
        ],
    },
];

pub const HORROR: &[Archetype] = &[
    Archetype {
        id: "occultist",
        name: "Occultist",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 2),
                adjectives: &["Whispered", "Bleeding", "Forbidden"],
                nouns: &["Word", "Sign", "Rite"],
                effects: &[effect("spell_damage", 4.0, 8.0), effect("sanity_cost", 1.0, 3.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 4),
                adjectives: &["Unblinking", "Scarred", "Hollow"],
                nouns: &["Mind", "Eye", "Soul"],
                effects: &[effect("sanity", 5.0, 10.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (3, 6),
                adjectives: &["Elder", "Nameless", "Opened"],
                nouns: &["Gate", "Pact", "Invocation"],
                effects: &[effect("spell_damage", 12.0, 22.0)],
            },
        ],
    },
    Archetype {
        id: "survivor",
        name: "Survivor",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 3),
                adjectives: &["Steady", "Wary", "Stubborn"],
                nouns: &["Hands", "Nerves", "Heart"],
                effects: &[effect("accuracy", 0.02, 0.05), effect("sanity", 3.0, 6.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 4),
                adjectives: &["Desperate", "Frantic", "Cornered"],
                nouns: &["Swing", "Shove", "Sprint"],
                effects: &[effect("damage", 4.0, 9.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (4, 6),
                adjectives: &["Final", "Dawn's", "Unbroken"],
                nouns: &["Girl", "Light", "Will"],
                effects: &[effect("health", 15.0, 25.0)],
            },
        ],
    },
];

pub const CYBERPUNK: &[Archetype] = &[
    Archetype {
        id: "netrunner",
        name: "Netrunner",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 3),
                adjectives: &["Ping", "Breach", "Worm"],
                nouns: &["Protocol", "Script", "Daemon"],
                effects: &[effect("hack_damage", 4.0, 8.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 4),
                adjectives: &["Overclocked", "Cold", "Extended"],
                nouns: &["Deck", "RAM", "Buffer"],
                effects: &[effect("ram", 1.0, 3.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (4, 6),
                adjectives: &["System", "Total", "Blackwall"],
                nouns: &["Collapse", "Crash", "Contact"],
                effects: &[effect("hack_damage", 15.0, 25.0)],
            },
        ],
    },
    Archetype {
        id: "solo",
        name: "Solo",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 3),
                adjectives: &["Double", "Point-blank", "Ricochet"],
                nouns: &["Tap", "Blast", "Shot"],
                effects: &[effect("damage", 4.0, 8.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Aura,
                tiers: (1, 5),
                adjectives: &["Cool", "Street", "Killer"],
                nouns: &["Rep", "Instinct", "Edge"],
                effects: &[effect("crit_chance", 0.02, 0.06)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (4, 6),
                adjectives: &["Berserk", "Blade", "Chrome"],
                nouns: &["Rampage", "Dance", "Frenzy"],
                effects: &[effect("damage", 15.0, 25.0), effect("speed", 1.0, 2.0)],
            },
        ],
    },
];

pub const POSTAPOC: &[Archetype] = &[
    Archetype {
        id: "scavenger",
        name: "Scavenger",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 3),
                adjectives: &["Keen", "Lucky", "Thorough"],
                nouns: &["Eye", "Find", "Search"],
                effects: &[effect("loot_bonus", 0.05, 0.1)],
            },
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 4),
                adjectives: &["Jury-rigged", "Scrap", "Salvaged"],
                nouns: &["Trap", "Bomb", "Gadget"],
                effects: &[effect("damage", 5.0, 9.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (4, 6),
                adjectives: &["Pre-war", "Master", "Wasteland"],
                nouns: &["Tech", "Craft", "Legend"],
                effects: &[effect("crafting", 10.0, 18.0)],
            },
        ],
    },
    Archetype {
        id: "wastelander",
        name: "Wastelander",
        skills: &[
            SkillTemplate {
                skill_type: SkillType::Active,
                tiers: (0, 3),
                adjectives: &["Dirty", "Savage", "Rusty"],
                nouns: &["Swing", "Headbutt", "Stomp"],
                effects: &[effect("damage", 5.0, 9.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Passive,
                tiers: (0, 5),
                adjectives: &["Rad", "Iron", "Leathered"],
                nouns: &["Blood", "Gut", "Skin"],
                effects: &[effect("rad_resistance", 0.05, 0.1), effect("health", 5.0, 10.0)],
            },
            SkillTemplate {
                skill_type: SkillType::Ultimate,
                tiers: (5, 6),
                adjectives: &["Road", "Atomic", "Dust"],
                nouns: &["Warrior", "Fury", "King"],
                effects: &[effect("damage", 16.0, 26.0)],
            },
        ],
    },
];
