//! Entity identity and its component slot table.
//!
//! An entity does not own component data. It holds, for each
//! [`ComponentKind`], the slot index of its record in that kind's store, or
//! nothing when it does not carry that component.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::component::ComponentKind;
use super::store::SlotIndex;

/// Index of an entity in the scene's fixed-size array.
///
/// Stable for the lifetime of the entity and reused after it is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Id of an entity that has not been added to a scene.
    pub const NULL: Self = Self(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("#null")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// A named identity plus one optional slot index per component type.
#[derive(Clone, Debug)]
pub struct Entity {
    pub(crate) id: EntityId,
    pub name: String,
    /// Inactive entities are skipped by every system pass.
    pub active: bool,
    pub(crate) destroyed: bool,
    slots: [Option<SlotIndex>; ComponentKind::COUNT],
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::NULL,
            name: name.into(),
            active: true,
            destroyed: false,
            slots: [None; ComponentKind::COUNT],
        }
    }

    /// Id assigned by the scene, or [`EntityId::NULL`] before it is added.
    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// True once the entity has been removed from its scene.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Slot of this entity's `kind` record, if it carries one.
    #[inline]
    pub fn slot(&self, kind: ComponentKind) -> Option<SlotIndex> {
        self.slots[kind.index()]
    }

    #[inline]
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub(crate) fn set_slot(&mut self, kind: ComponentKind, slot: Option<SlotIndex>) {
        self.slots[kind.index()] = slot;
    }

    /// Kinds of every component this entity carries.
    pub fn components(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter(|kind| self.has_component(*kind))
    }

    /// True when no slot is recorded for any component type.
    pub fn is_bare(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new("Entity")
    }
}
