// src/skill/mod.rs
//! Генерация деревьев навыков
//!
//! ## Алгоритм
//!
//! 1. Для дерева `t` выводится сид `derive_seed(seed, "skill_tree", t)` и выбирается архетип
//!    жанра (явно через `archetype` или по кругу по индексу дерева).
//! 2. Навыки строятся по ярусам 0..=6, размеры ярусов строго убывают (пирамида).
//!    Каждый узел получает свой поток `derive_seed(tree_seed, "skill", n)`.
//! 3. Эффекты масштабируются: `(1 + depth * 0.05) * (1 + tier * 0.3) * (1 + rarity * 0.25)`.
//! 4. Когда все узлы построены, связываются пререквизиты: каждый узел яруса ≥ 1 получает
//!    один узел предыдущего яруса, на ярусах ≥ 3 с вероятностью `dual_prerequisite_chance`
//!    добавляется второй, отличный от первого.
//!
//! Пререквизиты только из яруса `tier - 1`, поэтому граф ацикличен по построению.
//! `validate` всё равно проверяет ацикличность через `petgraph`.

pub mod templates;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{RaritySettings, SKILL_TIER_COUNT, SkillTreeSettings};
use crate::error::{GenError, Invariant, Result};
use crate::generator::{Generator, generate_indexed};
use crate::genre::{Genre, GenreRegistry};
use crate::naming::{compose_name, pick, uniform_f64, unit};
use crate::params::{GenerationParams, keys};
use crate::rarity::{Rarity, quantize, roll_rarity};
use crate::seed::{derive_seed, element_rng, rng_for, tags};

use templates::{Archetype, SkillTemplate};

/// Старший ярус дерева
pub const MAX_TIER: u8 = (SKILL_TIER_COUNT - 1) as u8;

const PREREQUISITE_TAG: &str = "skill_prerequisites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Active,
    Passive,
    Aura,
    Ultimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEffect {
    pub stat: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub skill_type: SkillType,
    pub tier: u8,
    pub level_cap: u8,
    pub rarity: Rarity,
    pub effects: Vec<SkillEffect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub id: String,
    pub skill: Skill,
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTree {
    pub id: String,
    pub genre_id: String,
    pub archetype: String,
    pub seed: i64,
    pub nodes: Vec<SkillNode>,
}

impl SkillTree {
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SkillNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Узлы яруса 0
    pub fn roots(&self) -> impl Iterator<Item = &SkillNode> {
        self.nodes.iter().filter(|n| n.skill.tier == 0)
    }

    /// Граф «пререквизит → навык». Висячие ссылки пропускаются.
    fn graph(&self) -> DiGraph<&str, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.nodes.len());
        let indices: BTreeMap<&str, NodeIndex> = self
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), graph.add_node(n.id.as_str())))
            .collect();
        for node in &self.nodes {
            for prerequisite in &node.prerequisites {
                if let Some(&from) = indices.get(prerequisite.as_str()) {
                    graph.add_edge(from, indices[node.id.as_str()], ());
                }
            }
        }
        graph
    }

    /// Порядок, в котором навыки можно открыть: каждый идёт после всех своих пререквизитов.
    pub fn unlock_order(&self) -> Result<Vec<&str>> {
        let graph = self.graph();
        toposort(&graph, None)
            .map(|order| order.into_iter().map(|idx| graph[idx]).collect())
            .map_err(|cycle| {
                GenError::from(Invariant::CyclicPrerequisites {
                    node: graph[cycle.node_id()].to_string(),
                })
            })
    }
}

/// Предел уровня: 5 на нижних ярусах, 2 на вершине; у ультимативных навыков 1
fn level_cap(skill_type: SkillType, tier: u8) -> u8 {
    match skill_type {
        SkillType::Ultimate => 1,
        _ => 5u8.saturating_sub(tier / 2).max(1),
    }
}

pub struct SkillTreeGenerator {
    settings: SkillTreeSettings,
    rarity: RaritySettings,
    registry: Arc<GenreRegistry>,
}

impl SkillTreeGenerator {
    #[must_use]
    pub fn new(
        settings: SkillTreeSettings,
        rarity: RaritySettings,
        registry: Arc<GenreRegistry>,
    ) -> Self {
        Self {
            settings,
            rarity,
            registry,
        }
    }

    fn skill(
        &self,
        tree_seed: i64,
        ordinal: u64,
        tier: u8,
        depth: u32,
        difficulty: f64,
        archetype: &Archetype,
    ) -> Skill {
        let mut rng = element_rng(tree_seed, tags::SKILL, ordinal);

        let rarity_draw = unit(&mut rng);
        let fitting: Vec<&SkillTemplate> =
            archetype.skills.iter().filter(|t| t.fits_tier(tier)).collect();
        let template: &SkillTemplate = if fitting.is_empty() {
            pick(&mut rng, archetype.skills)
        } else {
            *pick(&mut rng, &fitting)
        };
        let adjective = pick(&mut rng, template.adjectives);
        let noun = pick(&mut rng, template.nouns);

        let rarity = roll_rarity(&self.rarity, depth, difficulty, rarity_draw);
        let scale = (1.0 + f64::from(depth) * 0.05)
            * (1.0 + f64::from(tier) * 0.3)
            * rarity.tier_scale();

        let effects = template
            .effects
            .iter()
            .map(|effect| SkillEffect {
                stat: effect.stat.to_string(),
                value: quantize(uniform_f64(&mut rng, effect.base) * scale),
            })
            .collect();

        Skill {
            name: compose_name(adjective, noun, None),
            skill_type: template.skill_type,
            tier,
            level_cap: level_cap(template.skill_type, tier),
            rarity,
            effects,
        }
    }

    fn tree(
        &self,
        seed: i64,
        index: u64,
        depth: u32,
        difficulty: f64,
        genre: &Genre,
        archetype: &Archetype,
    ) -> SkillTree {
        let tree_seed = derive_seed(seed, tags::SKILL_TREE, index);
        let tree_id = format!("{}-{}-{index}", genre.id, archetype.id);

        // ярусы: узлы в порядке (tier, n)
        let mut tiers: Vec<Vec<SkillNode>> = Vec::with_capacity(SKILL_TIER_COUNT);
        let mut ordinal = 0u64;
        for (tier, &size) in self.settings.tier_sizes.iter().enumerate() {
            let tier = tier as u8;
            let nodes = (0..size)
                .map(|n| {
                    let skill = self.skill(tree_seed, ordinal + n as u64, tier, depth, difficulty, archetype);
                    SkillNode {
                        id: format!("{tree_id}-t{tier}-{n}"),
                        skill,
                        prerequisites: Vec::new(),
                    }
                })
                .collect();
            ordinal += size as u64;
            tiers.push(nodes);
        }

        self.link_prerequisites(tree_seed, &mut tiers);

        SkillTree {
            id: tree_id,
            genre_id: genre.id.clone(),
            archetype: archetype.id.to_string(),
            seed: tree_seed,
            nodes: tiers.into_iter().flatten().collect(),
        }
    }

    fn link_prerequisites(&self, tree_seed: i64, tiers: &mut [Vec<SkillNode>]) {
        let mut rng = rng_for(derive_seed(tree_seed, PREREQUISITE_TAG, 0));

        for tier in 1..tiers.len() {
            let (lower, upper) = tiers.split_at_mut(tier);
            let previous = &lower[tier - 1];
            if previous.is_empty() {
                continue;
            }
            for node in &mut upper[0] {
                let first = rng.gen_range(0..previous.len());
                node.prerequisites.push(previous[first].id.clone());

                if tier >= 3
                    && previous.len() >= 2
                    && unit(&mut rng) < self.settings.dual_prerequisite_chance
                {
                    let mut second = rng.gen_range(0..previous.len() - 1);
                    if second >= first {
                        second += 1;
                    }
                    node.prerequisites.push(previous[second].id.clone());
                }
            }
        }
    }

    fn validate_tree(tree: &SkillTree) -> Result<()> {
        if tree.nodes.is_empty() {
            return Err(Invariant::EmptyCollection {
                what: "skill tree nodes",
            }
            .into());
        }

        let mut by_id: BTreeMap<&str, &SkillNode> = BTreeMap::new();
        for node in &tree.nodes {
            if by_id.insert(node.id.as_str(), node).is_some() {
                return Err(Invariant::DuplicateId {
                    id: node.id.clone(),
                }
                .into());
            }
        }

        for node in &tree.nodes {
            let tier = node.skill.tier;
            if tier > MAX_TIER {
                return Err(Invariant::OutOfRange {
                    field: format!("{}.tier", node.id),
                    value: tier.to_string(),
                }
                .into());
            }
            if let Some(effect) = node
                .skill
                .effects
                .iter()
                .find(|e| !e.value.is_finite() || e.value < 0.0)
            {
                return Err(Invariant::OutOfRange {
                    field: format!("{}.effects.{}", node.id, effect.stat),
                    value: effect.value.to_string(),
                }
                .into());
            }

            if tier == 0 {
                if !node.prerequisites.is_empty() {
                    return Err(Invariant::RootWithPrerequisites {
                        node: node.id.clone(),
                    }
                    .into());
                }
                continue;
            }
            if node.prerequisites.is_empty() {
                return Err(Invariant::MissingPrerequisite {
                    node: node.id.clone(),
                }
                .into());
            }

            let mut seen = BTreeSet::new();
            for prerequisite in &node.prerequisites {
                if !seen.insert(prerequisite.as_str()) {
                    return Err(Invariant::DuplicatePrerequisite {
                        node: node.id.clone(),
                        prerequisite: prerequisite.clone(),
                    }
                    .into());
                }
                let Some(required) = by_id.get(prerequisite.as_str()) else {
                    return Err(Invariant::DanglingPrerequisite {
                        node: node.id.clone(),
                        prerequisite: prerequisite.clone(),
                    }
                    .into());
                };
                if required.skill.tier + 1 != tier {
                    return Err(Invariant::PrerequisiteTier {
                        node: node.id.clone(),
                        node_tier: tier,
                        prerequisite: prerequisite.clone(),
                        prerequisite_tier: required.skill.tier,
                    }
                    .into());
                }
            }
        }

        tree.unlock_order().map(|_| ())
    }
}

impl Generator for SkillTreeGenerator {
    type Output = Vec<SkillTree>;

    fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Vec<SkillTree>> {
        let (depth, genre) = params.resolve(&self.registry)?;
        let count = params.count_or(self.settings.default_count)?;
        let archetypes = templates::for_genre(&genre.id);

        let requested = params
            .custom_str(keys::ARCHETYPE)?
            .map(|id| {
                archetypes
                    .iter()
                    .find(|a| a.id.eq_ignore_ascii_case(id))
                    .ok_or_else(|| {
                        GenError::invalid(format!(
                            "genre {:?} has no archetype {id:?}",
                            genre.id
                        ))
                    })
            })
            .transpose()?;

        let trees = generate_indexed(count, |i| {
            let archetype = requested.unwrap_or(&archetypes[i as usize % archetypes.len()]);
            self.tree(seed, i, depth, params.difficulty, genre, archetype)
        });

        log::debug!(
            "Деревья навыков ({}, сид {seed}, глубина {depth}): {} шт. по {} узлов",
            genre.id,
            trees.len(),
            self.settings.tier_sizes.iter().sum::<usize>()
        );
        Ok(trees)
    }

    fn validate(&self, trees: &Vec<SkillTree>) -> Result<()> {
        if trees.is_empty() {
            return Err(Invariant::EmptyCollection { what: "skill trees" }.into());
        }
        trees.iter().try_for_each(Self::validate_tree)
    }
}
