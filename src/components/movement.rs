use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::EntityId;
use crate::ecs::store::ComponentStore;
use crate::ecs::world::Stores;
use crate::math::Vector2;

/// World-space position plus a pending per-tick displacement.
///
/// `delta` is an input accumulator, not a velocity: the movement pass adds it
/// to `position` once and zeroes it, so callers set it again every tick they
/// want the entity to keep moving.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub entity_id: EntityId,
    pub enabled: bool,
    pub position: Vector2,
    pub delta: Vector2,
}

impl Movement {
    /// Movement at the origin.
    pub fn new() -> Self {
        Self::at(0.0, 0.0)
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            entity_id: EntityId::NULL,
            enabled: true,
            position: Vector2::new(x, y),
            delta: Vector2::ZERO,
        }
    }

    /// Queue a displacement for the next movement pass.
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        self.delta += Vector2::new(dx, dy);
    }
}

impl Default for Movement {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Movement {
    const KIND: ComponentKind = ComponentKind::Movement;

    fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn bind(&mut self, entity: EntityId) {
        self.entity_id = entity;
    }

    fn store(stores: &Stores) -> &ComponentStore<Self> {
        &stores.movements
    }

    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self> {
        &mut stores.movements
    }
}
