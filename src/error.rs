// src/error.rs
//! Ошибки генерации и валидации
//!
//! - [`GenError::InvalidParameter`] — некорректный вход `generate` (отрицательная глубина,
//!   неизвестный жанр, битый параметр в `custom`). Возвращается сразу, без повторов.
//! - [`GenError::InvariantViolation`] — только из `validate`, с указанием конкретного
//!   нарушенного инварианта ([`Invariant`]).

use thiserror::Error;

/// Результат операций движка
pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("structural invariant violated: {0}")]
    InvariantViolation(#[from] Invariant),
}

impl GenError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GenError::InvalidParameter(message.into())
    }
}

/// Конкретный нарушенный инвариант результата генерации
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Invariant {
    #[error("{what} is empty")]
    EmptyCollection { what: &'static str },

    #[error("{what} has size {actual}, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what} is out of bounds")]
    OutOfBounds { what: String },

    #[error("{field} = {value} is out of range")]
    OutOfRange { field: String, value: String },

    #[error("stat block of {name} does not match its category: {reason}")]
    StatMismatch { name: String, reason: String },

    #[error("{unreachable} walkable tiles are not reachable from the rest of the map")]
    DisconnectedTerrain { unreachable: usize },

    #[error("floor fraction {fraction:.3} is below the minimum {minimum:.3}")]
    FloorFractionTooLow { fraction: f64, minimum: f64 },

    #[error("duplicate id {id}")]
    DuplicateId { id: String },

    #[error("node {node} references unknown prerequisite {prerequisite}")]
    DanglingPrerequisite { node: String, prerequisite: String },

    #[error("node {node} lists prerequisite {prerequisite} more than once")]
    DuplicatePrerequisite { node: String, prerequisite: String },

    #[error(
        "node {node} (tier {node_tier}) requires {prerequisite} (tier {prerequisite_tier}); \
         prerequisites must come from the previous tier"
    )]
    PrerequisiteTier {
        node: String,
        node_tier: u8,
        prerequisite: String,
        prerequisite_tier: u8,
    },

    #[error("root node {node} must not have prerequisites")]
    RootWithPrerequisites { node: String },

    #[error("node {node} above tier 0 has no prerequisites")]
    MissingPrerequisite { node: String },

    #[error("prerequisite graph contains a cycle through {node}")]
    CyclicPrerequisites { node: String },
}

/// Ошибки загрузки конфигурации движка
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
