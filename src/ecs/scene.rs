//! Fixed-capacity entity pool.
//!
//! Entities live in a boxed array indexed by their id. Removed ids go on a
//! LIFO stack and are handed out again before any fresh id, so the most
//! recently freed slot is always the next one used.

use log::debug;

use super::entity::{Entity, EntityId};
use crate::error::{EngineError, EngineResult};

/// Default pool size.
pub const MAX_ENTITIES: usize = 1000;

/// Largest pool size; `u32::MAX` is reserved for [`EntityId::NULL`].
const MAX_CAPACITY: usize = u32::MAX as usize - 1;

/// The entity pool.
///
/// # Invariants
///
/// - A live entity's id equals its array index.
/// - An id below `next_free_id` is either occupied by exactly one live
///   entity or sits in `freed_ids`, never both.
#[derive(Debug)]
pub struct Scene {
    pub name: String,
    entities: Box<[Option<Entity>]>,
    freed_ids: Vec<EntityId>,
    next_free_id: usize,
}

impl Scene {
    /// Create an empty scene with room for `capacity` entities.
    ///
    /// The capacity is clamped to at least one and to the largest count an
    /// [`EntityId`] can address.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);

        Self {
            name: name.into(),
            entities: (0..capacity).map(|_| None).collect(),
            freed_ids: Vec::new(),
            next_free_id: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entities.len()
    }

    /// Number of live entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.next_free_id - self.freed_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register `entity`, assign it an id and return that id.
    ///
    /// Reuses the most recently freed id when there is one. The pool is left
    /// untouched on failure.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidArgument`] if the entity still records
    ///   component slots from a previous life.
    /// - [`EngineError::CapacityExceeded`] if every id is in use.
    pub fn add_entity(&mut self, mut entity: Entity) -> EngineResult<EntityId> {
        if !entity.is_bare() {
            return Err(EngineError::InvalidArgument(
                "entity still references component slots",
            ));
        }

        let id = if let Some(id) = self.freed_ids.pop() {
            id
        } else if self.next_free_id < self.capacity() {
            let id = EntityId::new(self.next_free_id as u32);
            self.next_free_id += 1;
            id
        } else {
            return Err(EngineError::CapacityExceeded {
                what: "entity pool",
                capacity: self.capacity(),
            });
        };

        entity.id = id;
        entity.destroyed = false;
        debug!("Entity '{}' added as {}", entity.name, id);
        self.entities[id.index()] = Some(entity);
        Ok(id)
    }

    /// Unregister the entity at `id`, mark it destroyed and hand it back.
    ///
    /// Component slots are not touched here; use
    /// [`World::remove_entity`](super::world::World::remove_entity) to release
    /// them as well.
    ///
    /// # Errors
    ///
    /// [`EngineError::EntityNotFound`] if no live entity has this id.
    pub fn remove_entity(&mut self, id: EntityId) -> EngineResult<Entity> {
        let mut entity = self
            .entities
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(EngineError::EntityNotFound(id))?;

        self.freed_ids.push(id);
        entity.destroyed = true;
        debug!("Entity '{}' ({}) removed", entity.name, id);
        Ok(entity)
    }

    /// O(1) lookup by id.
    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Like [`Scene::get`], but reports a missing entity as an error.
    pub fn get_by_id(&self, id: EntityId) -> EngineResult<&Entity> {
        self.get(id).ok_or(EngineError::EntityNotFound(id))
    }

    pub fn get_by_id_mut(&mut self, id: EntityId) -> EngineResult<&mut Entity> {
        self.get_mut(id).ok_or(EngineError::EntityNotFound(id))
    }

    /// O(n) lookup by name. When several entities share a name, the one with
    /// the lowest id wins.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidArgument`] for an empty name.
    /// - [`EngineError::NameNotFound`] if no live entity has this name.
    pub fn get_by_name(&self, name: &str) -> EngineResult<&Entity> {
        if name.is_empty() {
            return Err(EngineError::InvalidArgument("entity name must not be empty"));
        }
        self.iter()
            .find(|entity| entity.name == name)
            .ok_or_else(|| EngineError::NameNotFound(name.to_string()))
    }

    #[inline]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Live entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut().flatten()
    }

    /// Ids waiting for reuse, oldest first.
    pub fn freed_ids(&self) -> &[EntityId] {
        &self.freed_ids
    }

    /// Drop every entity and reset id allocation.
    pub fn clear(&mut self) {
        self.entities.iter_mut().for_each(|slot| *slot = None);
        self.freed_ids.clear();
        self.next_free_id = 0;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("Default Scene", MAX_ENTITIES)
    }
}
