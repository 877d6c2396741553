//! Dense, fixed-capacity storage for one component type.
//!
//! Records live in a contiguous array. Slot indices are handed out from a
//! LIFO free list first, then from the high-water mark, so add and remove
//! are both O(1) and a released slot is the next one reused.
//!
//! Each slot carries an explicit liveness flag. A released slot keeps its
//! old record until it is reallocated, but the flag keeps systems from ever
//! reading it.

use log::debug;

use super::component::Component;
use super::entity::Entity;
use super::scene::Scene;
use crate::error::{EngineError, EngineResult};

/// Position of a record inside its store's dense array.
pub type SlotIndex = usize;

/// Pre-sized storage for a single component type.
///
/// # Invariants
///
/// - `records.len()` is the high-water mark: every slot below it has been
///   handed out at least once.
/// - A slot below the high-water mark is either live or sits exactly once in
///   `free_slots`, never both.
#[derive(Debug, Clone)]
pub struct ComponentStore<C> {
    records: Vec<C>,
    live: Vec<bool>,
    free_slots: Vec<SlotIndex>,
    capacity: usize,
}

impl<C: Component> ComponentStore<C> {
    /// Create an empty store that can hold at most `capacity` live records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            live: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// One past the highest slot ever allocated; bounds every pass.
    #[inline]
    pub fn high_water_mark(&self) -> usize {
        self.records.len()
    }

    /// Number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len() - self.free_slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Released slots waiting for reuse, oldest first.
    pub fn free_slots(&self) -> &[SlotIndex] {
        &self.free_slots
    }

    #[inline]
    pub fn is_live(&self, slot: SlotIndex) -> bool {
        self.live.get(slot).copied().unwrap_or(false)
    }

    /// Store `record` for `entity` and record the slot in the entity.
    ///
    /// Reuses the most recently released slot when there is one. Nothing is
    /// written on failure.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DuplicateComponent`] if the entity already has a
    ///   record of this type.
    /// - [`EngineError::CapacityExceeded`] if no slot is free and the store
    ///   is full.
    pub fn allocate(&mut self, entity: &mut Entity, mut record: C) -> EngineResult<SlotIndex> {
        if entity.has_component(C::KIND) {
            return Err(EngineError::DuplicateComponent {
                entity: entity.id(),
                kind: C::KIND,
            });
        }

        record.bind(entity.id());

        let slot = if let Some(slot) = self.free_slots.pop() {
            self.records[slot] = record;
            self.live[slot] = true;
            slot
        } else if self.records.len() < self.capacity {
            self.records.push(record);
            self.live.push(true);
            self.records.len() - 1
        } else {
            return Err(EngineError::CapacityExceeded {
                what: C::KIND.name(),
                capacity: self.capacity,
            });
        };

        entity.set_slot(C::KIND, Some(slot));
        debug!("{} slot {} allocated for entity {}", C::KIND, slot, entity.id());
        Ok(slot)
    }

    /// Release the entity's record of this type and clear its slot entry.
    ///
    /// The record's data is left in place; only the liveness flag changes.
    ///
    /// # Errors
    ///
    /// [`EngineError::ComponentNotPresent`] if the entity has no record here.
    pub fn release(&mut self, entity: &mut Entity) -> EngineResult<SlotIndex> {
        let slot = entity
            .slot(C::KIND)
            .filter(|slot| self.is_live(*slot))
            .ok_or(EngineError::ComponentNotPresent {
                entity: entity.id(),
                kind: C::KIND,
            })?;

        self.live[slot] = false;
        self.free_slots.push(slot);
        entity.set_slot(C::KIND, None);
        debug!("{} slot {} released by entity {}", C::KIND, slot, entity.id());
        Ok(slot)
    }

    /// Live record at `slot`.
    #[inline]
    pub fn get(&self, slot: SlotIndex) -> Option<&C> {
        if self.is_live(slot) {
            self.records.get(slot)
        } else {
            None
        }
    }

    /// Mutable live record at `slot`.
    #[inline]
    pub fn get_mut(&mut self, slot: SlotIndex) -> Option<&mut C> {
        if self.is_live(slot) {
            self.records.get_mut(slot)
        } else {
            None
        }
    }

    /// Live records with their slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &C)> {
        self.records
            .iter()
            .zip(self.live.iter())
            .enumerate()
            .filter_map(|(slot, (record, live))| live.then_some((slot, record)))
    }

    /// Mutable live records with their slots, in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotIndex, &mut C)> {
        self.records
            .iter_mut()
            .zip(self.live.iter())
            .enumerate()
            .filter_map(|(slot, (record, live))| live.then_some((slot, record)))
    }

    /// Records a system pass should process, paired with their entity.
    ///
    /// A record qualifies when it is live and enabled and its entity is live,
    /// active and still points at this slot. Records orphaned by
    /// [`Scene::remove_entity`] fail the last check, even after their old id
    /// is handed to a new entity.
    pub fn iter_owned<'a>(&'a self, scene: &'a Scene) -> impl Iterator<Item = (&'a Entity, &'a C)> {
        self.iter().filter_map(move |(slot, record)| {
            owner(scene, slot, record).map(|entity| (entity, record))
        })
    }

    /// Mutable form of [`ComponentStore::iter_owned`].
    pub fn iter_owned_mut<'a>(
        &'a mut self,
        scene: &'a Scene,
    ) -> impl Iterator<Item = (&'a Entity, &'a mut C)> {
        self.iter_mut().filter_map(move |(slot, record)| {
            owner(scene, slot, record).map(|entity| (entity, record))
        })
    }

    /// Drop every record and forget every slot.
    ///
    /// Entities that still point into this store must be cleared by the
    /// caller.
    pub fn clear(&mut self) {
        self.records.clear();
        self.live.clear();
        self.free_slots.clear();
    }
}

/// The active entity that owns the record at `slot`, if the record is enabled.
fn owner<'a, C: Component>(scene: &'a Scene, slot: SlotIndex, record: &C) -> Option<&'a Entity> {
    if !record.is_enabled() {
        return None;
    }
    scene
        .get(record.entity_id())
        .filter(|entity| entity.active && entity.slot(C::KIND) == Some(slot))
}
