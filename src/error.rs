//! Engine error types.
//!
//! Mutating operations on the pool and the component stores return
//! [`EngineResult`]. Per-frame system passes never produce errors: a missing
//! optional component is skipped, not reported.

use thiserror::Error;

use crate::ecs::component::ComponentKind;
use crate::ecs::entity::EntityId;

/// Errors surfaced to the caller of a mutating operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The entity pool or a component store is at its fixed ceiling.
    #[error("{what} is full: capacity {capacity}")]
    CapacityExceeded {
        /// Which container ran out of room.
        what: &'static str,
        /// The fixed capacity that was hit.
        capacity: usize,
    },

    /// The entity already carries a component of this type.
    #[error("entity {entity} already has a {kind} component")]
    DuplicateComponent { entity: EntityId, kind: ComponentKind },

    /// No live entity at this id.
    #[error("entity {0} does not exist")]
    EntityNotFound(EntityId),

    /// No live entity with this name.
    #[error("no entity named '{0}'")]
    NameNotFound(String),

    /// The entity does not carry a component of this type.
    #[error("entity {entity} has no {kind} component")]
    ComponentNotPresent { entity: EntityId, kind: ComponentKind },

    /// A required input was empty or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Configuration file could not be read or written.
    #[error("config error: {0}")]
    Config(String),

    /// Serialized animation table is malformed.
    #[error("invalid animation data: {0}")]
    AnimationData(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::AnimationData(err.to_string())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
