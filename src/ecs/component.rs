//! Component type tags and the trait every stored record implements.
//!
//! Component types form a closed set known at compile time. Each one has a
//! [`ComponentKind`] tag, used by [`Entity`](super::entity::Entity) to index
//! its slot table, and a dedicated [`ComponentStore`] inside [`Stores`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::store::ComponentStore;
use super::world::Stores;

/// Tag for each component type the engine knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Movement,
    SpriteRenderer,
    Animator,
    ParticleGenerator,
    Text,
}

impl ComponentKind {
    /// Number of component types.
    pub const COUNT: usize = 5;

    /// Every kind, in tag order.
    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::Movement,
        ComponentKind::SpriteRenderer,
        ComponentKind::Animator,
        ComponentKind::ParticleGenerator,
        ComponentKind::Text,
    ];

    /// Position of this kind in an entity's slot table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Movement => "Movement",
            ComponentKind::SpriteRenderer => "SpriteRenderer",
            ComponentKind::Animator => "Animator",
            ComponentKind::ParticleGenerator => "ParticleGenerator",
            ComponentKind::Text => "Text",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record that lives in one of the world's component stores.
///
/// Records carry a back-reference to the owning entity and an `enabled`
/// flag; the store writes the entity id through [`Component::bind`] when the
/// record is allocated.
///
/// # Example
///
/// ```rust,ignore
/// let id = world.spawn("Player")?;
/// world.insert(id, Movement::at(100.0, 150.0))?;
/// ```
pub trait Component: Sized {
    /// Tag of this component type.
    const KIND: ComponentKind;

    /// Entity that owns this record.
    fn entity_id(&self) -> EntityId;

    /// Whether systems should process this record.
    fn is_enabled(&self) -> bool;

    /// Attach the record to its owning entity.
    fn bind(&mut self, entity: EntityId);

    /// The store holding records of this type.
    fn store(stores: &Stores) -> &ComponentStore<Self>;

    /// Mutable access to the store holding records of this type.
    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self>;
}
