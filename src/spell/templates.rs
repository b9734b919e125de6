// src/spell/templates.rs
//! Шаблоны заклинаний по жанрам
//!
//! Строка `description` задаёт формат с подстановками `{element}`, `{target}`, `{power}`,
//! `{cost}`, `{cooldown}`, `{range}`, `{radius}`.

use super::Element as E;
use super::SpellCategory as C;
use super::TargetPattern as T;

#[derive(Debug)]
pub struct SpellTemplate {
    pub category: C,
    pub weight: u32,
    /// Допустимые стихии, выбор равновероятный
    pub elements: &'static [E],
    pub targets: &'static [T],
    /// Урон или лечение до масштабирования
    pub power: (u32, u32),
    pub mana_cost: (u32, u32),
    /// Секунды
    pub cooldown: (f64, f64),
    pub range: (u32, u32),
    /// Используется только для area/cone/line
    pub radius: (u32, u32),
    /// Первое слово имени для заклинаний без стихии
    pub prefixes: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub description: &'static str,
}

#[must_use]
pub fn for_genre(genre_id: &str) -> &'static [SpellTemplate] {
    match genre_id {
        "scifi" => SCIFI,
        "horror" => HORROR,
        "cyberpunk" => CYBERPUNK,
        "postapoc" => POSTAPOC,
        _ => FANTASY,
    }
}

pub const FANTASY: &[SpellTemplate] = &[
    SpellTemplate {
        category: C::Offensive,
        weight: 20,
        elements: &[E::Fire, E::Ice, E::Lightning, E::Dark],
        targets: &[T::Single, T::Line],
        power: (8, 14),
        mana_cost: (5, 10),
        cooldown: (1.0, 3.0),
        range: (6, 10),
        radius: (1, 2),
        prefixes: &["Arcane", "Eldritch", "Mystic"],
        nouns: &["Bolt", "Lance", "Missile"],
        description: "Hurls {element} energy at {target} for {power} damage. Costs {cost} mana, \
                      recharges in {cooldown}s, reaches {range} tiles.",
    },
    SpellTemplate {
        category: C::Offensive,
        weight: 10,
        elements: &[E::Fire, E::Ice, E::Earth, E::Wind],
        targets: &[T::Area, T::Cone],
        power: (10, 18),
        mana_cost: (12, 20),
        cooldown: (4.0, 8.0),
        range: (0, 4),
        radius: (2, 4),
        prefixes: &["Arcane", "Raging", "Wild"],
        nouns: &["Nova", "Storm", "Burst"],
        description: "Unleashes a {element} blast over {target} (radius {radius}) for {power} damage. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Defensive,
        weight: 12,
        elements: &[E::None, E::Earth, E::Water, E::Light],
        targets: &[T::SelfOnly, T::Single, T::AllAllies],
        power: (6, 12),
        mana_cost: (8, 14),
        cooldown: (6.0, 12.0),
        range: (0, 5),
        radius: (1, 1),
        prefixes: &["Warding", "Stalwart", "Sacred"],
        nouns: &["Ward", "Barrier", "Aegis"],
        description: "Shields {target} with a {element} ward absorbing {power} damage. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Healing,
        weight: 14,
        elements: &[E::Light, E::Water, E::None],
        targets: &[T::Single, T::Area, T::AllAllies],
        power: (10, 20),
        mana_cost: (10, 16),
        cooldown: (3.0, 6.0),
        range: (4, 8),
        radius: (2, 3),
        prefixes: &["Gentle", "Radiant", "Blessed"],
        nouns: &["Mending", "Renewal", "Touch"],
        description: "Restores {power} health to {target} with {element} magic. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Buff,
        weight: 10,
        elements: &[E::None, E::Fire, E::Wind, E::Light],
        targets: &[T::SelfOnly, T::Single, T::AllAllies],
        power: (3, 6),
        mana_cost: (6, 12),
        cooldown: (8.0, 15.0),
        range: (0, 6),
        radius: (1, 2),
        prefixes: &["Heroic", "Swift", "Valiant"],
        nouns: &["Blessing", "Haste", "Might"],
        description: "Empowers {target} with {element} vigor, granting +{power} to attributes. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Debuff,
        weight: 10,
        elements: &[E::Dark, E::Ice, E::Water, E::None],
        targets: &[T::Single, T::Cone, T::AllEnemies],
        power: (3, 7),
        mana_cost: (6, 12),
        cooldown: (6.0, 12.0),
        range: (5, 9),
        radius: (2, 3),
        prefixes: &["Withering", "Binding", "Creeping"],
        nouns: &["Curse", "Hex", "Blight"],
        description: "Afflicts {target} with a {element} curse, reducing attributes by {power}. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Utility,
        weight: 8,
        elements: &[E::None, E::Wind, E::Light],
        targets: &[T::SelfOnly, T::Single],
        power: (1, 3),
        mana_cost: (4, 8),
        cooldown: (10.0, 20.0),
        range: (0, 12),
        radius: (1, 1),
        prefixes: &["Hidden", "Far", "Clear"],
        nouns: &["Sight", "Step", "Light"],
        description: "Bends {element} forces around {target} for {power} turns. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Summon,
        weight: 6,
        elements: &[E::None, E::Earth, E::Dark, E::Fire],
        targets: &[T::Area, T::Single],
        power: (12, 20),
        mana_cost: (20, 30),
        cooldown: (20.0, 40.0),
        range: (3, 6),
        radius: (1, 2),
        prefixes: &["Conjured", "Bound", "Spectral"],
        nouns: &["Familiar", "Elemental", "Servant"],
        description: "Calls a {element} servant to {target} with {power} strength. \
                      Costs {cost} mana, recharges in {cooldown}s.",
    },
];

pub const SCIFI: &[SpellTemplate] = &[
    SpellTemplate {
        category: C::Offensive,
        weight: 20,
        elements: &[E::Fire, E::Lightning, E::Light],
        targets: &[T::Single, T::Line],
        power: (9, 15),
        mana_cost: (6, 10),
        cooldown: (1.0, 2.5),
        range: (8, 14),
        radius: (1, 1),
        prefixes: &["Kinetic", "Gauss", "Rail"],
        nouns: &["Beam", "Discharge", "Shot"],
        description: "Fires a {element} beam at {target} for {power} damage. Draws {cost} energy, \
                      cycles in {cooldown}s, range {range}.",
    },
    SpellTemplate {
        category: C::Defensive,
        weight: 12,
        elements: &[E::None, E::Lightning],
        targets: &[T::SelfOnly, T::AllAllies],
        power: (8, 14),
        mana_cost: (10, 15),
        cooldown: (8.0, 14.0),
        range: (0, 4),
        radius: (1, 1),
        prefixes: &["Deflector", "Hardlight", "Kinetic"],
        nouns: &["Shield", "Field", "Screen"],
        description: "Projects a {element} field around {target} absorbing {power} damage. \
                      Draws {cost} energy, cycles in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Healing,
        weight: 12,
        elements: &[E::None, E::Water],
        targets: &[T::Single, T::AllAllies],
        power: (10, 18),
        mana_cost: (8, 14),
        cooldown: (4.0, 7.0),
        range: (3, 6),
        radius: (1, 1),
        prefixes: &["Nanite", "Regen", "Med"],
        nouns: &["Swarm", "Pulse", "Infusion"],
        description: "Repairs {target} for {power} health using {element} nanites. \
                      Draws {cost} energy, cycles in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Buff,
        weight: 10,
        elements: &[E::None, E::Lightning],
        targets: &[T::SelfOnly, T::Single],
        power: (3, 6),
        mana_cost: (6, 10),
        cooldown: (10.0, 16.0),
        range: (0, 5),
        radius: (1, 1),
        prefixes: &["Combat", "Reflex", "Target"],
        nouns: &["Overdrive", "Boost", "Uplink"],
        description: "Overclocks {target} with {element} power, +{power} to systems. \
                      Draws {cost} energy, cycles in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Debuff,
        weight: 10,
        elements: &[E::Lightning, E::Ice, E::Dark],
        targets: &[T::Single, T::Cone, T::AllEnemies],
        power: (3, 7),
        mana_cost: (6, 12),
        cooldown: (6.0, 12.0),
        range: (6, 10),
        radius: (2, 3),
        prefixes: &["EMP", "Jamming", "Stasis"],
        nouns: &["Pulse", "Field", "Wave"],
        description: "Disrupts {target} with a {element} wave, -{power} to systems. \
                      Draws {cost} energy, cycles in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Utility,
        weight: 8,
        elements: &[E::None, E::Light],
        targets: &[T::SelfOnly],
        power: (1, 3),
        mana_cost: (4, 8),
        cooldown: (12.0, 20.0),
        range: (0, 0),
        radius: (1, 1),
        prefixes: &["Cloaking", "Scanner", "Blink"],
        nouns: &["Array", "Sweep", "Jump"],
        description: "Activates a {element} device on {target} for {power} turns. \
                      Draws {cost} energy, cycles in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Summon,
        weight: 6,
        elements: &[E::None, E::Lightning],
        targets: &[T::Area, T::Single],
        power: (12, 20),
        mana_cost: (20, 30),
        cooldown: (20.0, 40.0),
        range: (3, 6),
        radius: (1, 2),
        prefixes: &["Combat", "Sentry", "Hunter"],
        nouns: &["Drone", "Turret", "Bot"],
        description: "Deploys a {element} unit at {target} with {power} integrity. \
                      Draws {cost} energy, cycles in {cooldown}s.",
    },
];

pub const HORROR: &[SpellTemplate] = &[
    SpellTemplate {
        category: C::Offensive,
        weight: 20,
        elements: &[E::Dark, E::Fire],
        targets: &[T::Single, T::Cone],
        power: (8, 14),
        mana_cost: (5, 10),
        cooldown: (1.5, 3.0),
        range: (5, 8),
        radius: (2, 3),
        prefixes: &["Unholy", "Vile", "Rotting"],
        nouns: &["Word", "Grasp", "Touch"],
        description: "Tears at {target} with {element} will for {power} damage. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Defensive,
        weight: 12,
        elements: &[E::Light, E::None],
        targets: &[T::SelfOnly, T::AllAllies],
        power: (6, 12),
        mana_cost: (8, 14),
        cooldown: (8.0, 14.0),
        range: (0, 4),
        radius: (1, 1),
        prefixes: &["Salt", "Warding", "Chalk"],
        nouns: &["Circle", "Sigil", "Seal"],
        description: "Draws a {element} circle around {target} warding {power} damage. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Healing,
        weight: 10,
        elements: &[E::Light, E::Water],
        targets: &[T::Single, T::AllAllies],
        power: (8, 16),
        mana_cost: (10, 16),
        cooldown: (4.0, 8.0),
        range: (2, 4),
        radius: (1, 1),
        prefixes: &["Whispered", "Desperate", "Holy"],
        nouns: &["Prayer", "Rite", "Litany"],
        description: "Mends {target} for {power} health through {element} faith. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Buff,
        weight: 8,
        elements: &[E::None, E::Dark],
        targets: &[T::SelfOnly, T::Single],
        power: (3, 6),
        mana_cost: (6, 12),
        cooldown: (10.0, 16.0),
        range: (0, 3),
        radius: (1, 1),
        prefixes: &["Steeled", "Feverish", "Blood"],
        nouns: &["Resolve", "Frenzy", "Oath"],
        description: "Fills {target} with {element} resolve, +{power} to attributes. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Debuff,
        weight: 14,
        elements: &[E::Dark, E::Ice, E::None],
        targets: &[T::Single, T::Area, T::AllEnemies],
        power: (4, 8),
        mana_cost: (6, 12),
        cooldown: (6.0, 12.0),
        range: (5, 9),
        radius: (2, 4),
        prefixes: &["Maddening", "Choking", "Creeping"],
        nouns: &["Dread", "Whispers", "Miasma"],
        description: "Haunts {target} with {element} dread, -{power} to attributes. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Utility,
        weight: 8,
        elements: &[E::None, E::Dark],
        targets: &[T::SelfOnly, T::Single],
        power: (1, 3),
        mana_cost: (4, 8),
        cooldown: (10.0, 20.0),
        range: (0, 10),
        radius: (1, 1),
        prefixes: &["Second", "Hollow", "Silent"],
        nouns: &["Sight", "Step", "Veil"],
        description: "Wraps {target} in {element} silence for {power} turns. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Summon,
        weight: 6,
        elements: &[E::Dark, E::None],
        targets: &[T::Area, T::Single],
        power: (12, 20),
        mana_cost: (20, 30),
        cooldown: (25.0, 45.0),
        range: (2, 5),
        radius: (1, 2),
        prefixes: &["Restless", "Hungry", "Bound"],
        nouns: &["Spirit", "Thrall", "Shade"],
        description: "Summons a {element} thing at {target} with {power} strength. \
                      Costs {cost} sanity, returns in {cooldown}s.",
    },
];

pub const CYBERPUNK: &[SpellTemplate] = &[
    SpellTemplate {
        category: C::Offensive,
        weight: 20,
        elements: &[E::Lightning, E::Fire, E::None],
        targets: &[T::Single, T::AllEnemies],
        power: (8, 14),
        mana_cost: (5, 10),
        cooldown: (1.0, 3.0),
        range: (8, 14),
        radius: (1, 1),
        prefixes: &["Short", "Synapse", "Overheat"],
        nouns: &["Circuit", "Burnout", "Spike"],
        description: "Uploads a {element} quickhack to {target} for {power} damage. \
                      Uses {cost} RAM, cools in {cooldown}s, range {range}.",
    },
    SpellTemplate {
        category: C::Defensive,
        weight: 10,
        elements: &[E::None, E::Lightning],
        targets: &[T::SelfOnly],
        power: (6, 12),
        mana_cost: (8, 14),
        cooldown: (8.0, 14.0),
        range: (0, 0),
        radius: (1, 1),
        prefixes: &["ICE", "Firewall", "Counter"],
        nouns: &["Wall", "Breach", "Trace"],
        description: "Raises {element} ICE on {target} blocking {power} damage. \
                      Uses {cost} RAM, cools in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Healing,
        weight: 10,
        elements: &[E::None],
        targets: &[T::SelfOnly, T::Single],
        power: (10, 18),
        mana_cost: (8, 14),
        cooldown: (4.0, 8.0),
        range: (0, 3),
        radius: (1, 1),
        prefixes: &["Biomonitor", "Med", "Trauma"],
        nouns: &["Flush", "Protocol", "Patch"],
        description: "Runs a {element} med protocol on {target} for {power} health. \
                      Uses {cost} RAM, cools in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Buff,
        weight: 10,
        elements: &[E::None, E::Lightning],
        targets: &[T::SelfOnly, T::Single],
        power: (3, 6),
        mana_cost: (6, 10),
        cooldown: (10.0, 16.0),
        range: (0, 5),
        radius: (1, 1),
        prefixes: &["Kerenzikov", "Sandevistan", "Berserk"],
        nouns: &["Surge", "Mode", "Rush"],
        description: "Boosts {target} with {element} chrome, +{power} to reflexes. \
                      Uses {cost} RAM, cools in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Debuff,
        weight: 12,
        elements: &[E::Lightning, E::Dark, E::None],
        targets: &[T::Single, T::Area, T::AllEnemies],
        power: (3, 7),
        mana_cost: (6, 12),
        cooldown: (6.0, 12.0),
        range: (8, 12),
        radius: (2, 3),
        prefixes: &["Optics", "Cripple", "Weapon"],
        nouns: &["Reset", "Movement", "Glitch"],
        description: "Infects {target} with {element} malware, -{power} to systems. \
                      Uses {cost} RAM, cools in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Utility,
        weight: 8,
        elements: &[E::None],
        targets: &[T::SelfOnly, T::Single, T::Line],
        power: (1, 3),
        mana_cost: (4, 8),
        cooldown: (10.0, 20.0),
        range: (0, 15),
        radius: (1, 1),
        prefixes: &["Ping", "Camera", "Door"],
        nouns: &["Scan", "Loop", "Override"],
        description: "Hijacks {element} systems near {target} for {power} turns. \
                      Uses {cost} RAM, cools in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Summon,
        weight: 6,
        elements: &[E::None, E::Lightning],
        targets: &[T::Area, T::Single],
        power: (12, 20),
        mana_cost: (20, 30),
        cooldown: (20.0, 40.0),
        range: (3, 8),
        radius: (1, 2),
        prefixes: &["Turret", "Drone", "Mech"],
        nouns: &["Hijack", "Takeover", "Control"],
        description: "Takes over a {element} unit at {target} with {power} integrity. \
                      Uses {cost} RAM, cools in {cooldown}s.",
    },
];

pub const POSTAPOC: &[SpellTemplate] = &[
    SpellTemplate {
        category: C::Offensive,
        weight: 20,
        elements: &[E::Fire, E::None, E::Earth],
        targets: &[T::Single, T::Cone, T::Area],
        power: (8, 14),
        mana_cost: (5, 10),
        cooldown: (1.5, 3.5),
        range: (4, 8),
        radius: (2, 3),
        prefixes: &["Molotov", "Scrap", "Nail"],
        nouns: &["Throw", "Bomb", "Volley"],
        description: "Launches a {element} contraption at {target} for {power} damage. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Defensive,
        weight: 12,
        elements: &[E::None, E::Earth],
        targets: &[T::SelfOnly, T::AllAllies],
        power: (6, 12),
        mana_cost: (8, 14),
        cooldown: (8.0, 14.0),
        range: (0, 3),
        radius: (1, 1),
        prefixes: &["Sandbag", "Scrap", "Car-door"],
        nouns: &["Cover", "Barricade", "Bulwark"],
        description: "Throws up {element} cover for {target} stopping {power} damage. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Healing,
        weight: 12,
        elements: &[E::None, E::Water],
        targets: &[T::SelfOnly, T::Single],
        power: (8, 16),
        mana_cost: (8, 14),
        cooldown: (4.0, 8.0),
        range: (0, 2),
        radius: (1, 1),
        prefixes: &["Field", "Boiled", "Stitch"],
        nouns: &["Dressing", "Water", "Job"],
        description: "Patches up {target} for {power} health with {element} supplies. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Buff,
        weight: 10,
        elements: &[E::None, E::Fire],
        targets: &[T::SelfOnly, T::AllAllies],
        power: (3, 6),
        mana_cost: (6, 10),
        cooldown: (10.0, 16.0),
        range: (0, 4),
        radius: (1, 1),
        prefixes: &["Chem", "War", "Adrenaline"],
        nouns: &["Rush", "Cry", "Shot"],
        description: "Pumps {target} full of {element} chems, +{power} to attributes. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Debuff,
        weight: 10,
        elements: &[E::Dark, E::Earth, E::None],
        targets: &[T::Single, T::Area],
        power: (3, 7),
        mana_cost: (6, 12),
        cooldown: (6.0, 12.0),
        range: (4, 8),
        radius: (2, 3),
        prefixes: &["Rad", "Smoke", "Caltrop"],
        nouns: &["Cloud", "Screen", "Scatter"],
        description: "Blankets {target} in {element} hazard, -{power} to attributes. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Utility,
        weight: 8,
        elements: &[E::None],
        targets: &[T::SelfOnly, T::Line],
        power: (1, 3),
        mana_cost: (4, 8),
        cooldown: (10.0, 20.0),
        range: (0, 10),
        radius: (1, 1),
        prefixes: &["Geiger", "Grapple", "Scout"],
        nouns: &["Sweep", "Hook", "Ahead"],
        description: "Uses {element} gear on {target} for {power} turns. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
    SpellTemplate {
        category: C::Summon,
        weight: 6,
        elements: &[E::None, E::Earth],
        targets: &[T::Area, T::Single],
        power: (12, 20),
        mana_cost: (20, 30),
        cooldown: (20.0, 40.0),
        range: (2, 5),
        radius: (1, 2),
        prefixes: &["Guard", "Attack", "Pack"],
        nouns: &["Dog", "Hound", "Mongrel"],
        description: "Whistles a {element} companion to {target} with {power} strength. \
                      Burns {cost} fuel, reloads in {cooldown}s.",
    },
];
