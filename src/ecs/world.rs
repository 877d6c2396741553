//! The world aggregate.
//!
//! A [`World`] owns the entity pool, one [`ComponentStore`] per component
//! type and the random source used by particle generators. Nothing is global:
//! every operation goes through an explicit `&World` or `&mut World`.
//!
//! # Frame order
//!
//! [`World::update`] runs movement, then animation, then particles.
//! [`World::draw`] submits sprites, then particle quads, then text.

use fastrand::Rng;
use log::{debug, info};

use super::component::{Component, ComponentKind};
use super::entity::{Entity, EntityId};
use super::scene::Scene;
use super::store::{ComponentStore, SlotIndex};
use crate::components::animator::Animator;
use crate::components::movement::Movement;
use crate::components::particlegenerator::{MAX_PARTICLES, ParticleGenerator};
use crate::components::spriterenderer::SpriteRenderer;
use crate::components::text::Text;
use crate::error::EngineResult;
use crate::math::Rectangle;
use crate::render::Renderer;
use crate::resources::engineconfig::EngineConfig;
use crate::systems;

/// One store per component type.
#[derive(Debug, Clone)]
pub struct Stores {
    pub movements: ComponentStore<Movement>,
    pub sprites: ComponentStore<SpriteRenderer>,
    pub animators: ComponentStore<Animator>,
    pub particles: ComponentStore<ParticleGenerator>,
    pub texts: ComponentStore<Text>,
}

impl Stores {
    /// Stores sized for `capacity` entities each.
    pub fn new(capacity: usize) -> Self {
        Self {
            movements: ComponentStore::new(capacity),
            sprites: ComponentStore::new(capacity),
            animators: ComponentStore::new(capacity),
            particles: ComponentStore::new(capacity),
            texts: ComponentStore::new(capacity),
        }
    }

    /// Release the entity's `kind` record from the matching store.
    pub fn release(&mut self, kind: ComponentKind, entity: &mut Entity) -> EngineResult<SlotIndex> {
        match kind {
            ComponentKind::Movement => self.movements.release(entity),
            ComponentKind::SpriteRenderer => self.sprites.release(entity),
            ComponentKind::Animator => self.animators.release(entity),
            ComponentKind::ParticleGenerator => self.particles.release(entity),
            ComponentKind::Text => self.texts.release(entity),
        }
    }

    /// Live record count of the `kind` store.
    pub fn live_count(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Movement => self.movements.len(),
            ComponentKind::SpriteRenderer => self.sprites.len(),
            ComponentKind::Animator => self.animators.len(),
            ComponentKind::ParticleGenerator => self.particles.len(),
            ComponentKind::Text => self.texts.len(),
        }
    }

    pub fn clear(&mut self) {
        self.movements.clear();
        self.sprites.clear();
        self.animators.clear();
        self.particles.clear();
        self.texts.clear();
    }
}

#[derive(Debug)]
pub struct World {
    pub scene: Scene,
    pub stores: Stores,
    rng: Rng,
    max_particles: usize,
}

impl World {
    /// Empty world with room for `capacity` entities and as many records of
    /// each component type.
    pub fn new(capacity: usize) -> Self {
        let scene = Scene::new("Default Scene", capacity);
        Self {
            stores: Stores::new(scene.capacity()),
            scene,
            rng: Rng::new(),
            max_particles: MAX_PARTICLES,
        }
    }

    /// World sized and seeded from `config`. A seed of 0 picks a random one.
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            0 => Rng::new(),
            seed => Rng::with_seed(seed),
        };
        info!(
            "World '{}' created: {} entities, {} particles per generator",
            config.scene_name, config.max_entities, config.max_particles
        );
        let scene = Scene::new(config.scene_name.clone(), config.max_entities);
        Self {
            stores: Stores::new(scene.capacity()),
            scene,
            rng,
            max_particles: config.max_particles,
        }
    }

    /// Register a bare entity called `name`.
    pub fn spawn(&mut self, name: impl Into<String>) -> EngineResult<EntityId> {
        self.scene.add_entity(Entity::new(name))
    }

    pub fn add_entity(&mut self, entity: Entity) -> EngineResult<EntityId> {
        self.scene.add_entity(entity)
    }

    /// Release every component of the entity, then return its id to the pool.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::EntityNotFound`] if no live entity has this id.
    pub fn remove_entity(&mut self, id: EntityId) -> EngineResult<Entity> {
        let entity = self.scene.get_by_id_mut(id)?;
        let kinds: Vec<ComponentKind> = entity.components().collect();
        for kind in kinds {
            self.stores.release(kind, entity)?;
        }
        self.scene.remove_entity(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.scene.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.scene.get_mut(id)
    }

    pub fn entity_by_name(&self, name: &str) -> EngineResult<&Entity> {
        self.scene.get_by_name(name)
    }

    pub fn set_active(&mut self, id: EntityId, active: bool) -> EngineResult<()> {
        self.scene.get_by_id_mut(id)?.active = active;
        Ok(())
    }

    /// Attach `component` to the entity and return the slot it landed in.
    ///
    /// # Errors
    ///
    /// - [`crate::error::EngineError::EntityNotFound`] if no live entity has this id.
    /// - [`crate::error::EngineError::DuplicateComponent`] if it already has a `C`.
    /// - [`crate::error::EngineError::CapacityExceeded`] if the `C` store is full.
    pub fn insert<C: Component>(&mut self, id: EntityId, component: C) -> EngineResult<SlotIndex> {
        let entity = self.scene.get_by_id_mut(id)?;
        C::store_mut(&mut self.stores).allocate(entity, component)
    }

    pub fn get<C: Component>(&self, id: EntityId) -> Option<&C> {
        let slot = self.scene.get(id)?.slot(C::KIND)?;
        C::store(&self.stores).get(slot)
    }

    pub fn get_mut<C: Component>(&mut self, id: EntityId) -> Option<&mut C> {
        let slot = self.scene.get(id)?.slot(C::KIND)?;
        C::store_mut(&mut self.stores).get_mut(slot)
    }

    /// Detach the entity's `C` record, freeing its slot for reuse.
    pub fn remove_component<C: Component>(&mut self, id: EntityId) -> EngineResult<SlotIndex> {
        let entity = self.scene.get_by_id_mut(id)?;
        C::store_mut(&mut self.stores).release(entity)
    }

    /// A generator confined to `bounds`, sized from the world settings and
    /// drawing from its own fork of the world's random source.
    pub fn new_particle_generator(&mut self, bounds: Rectangle) -> ParticleGenerator {
        ParticleGenerator::new(bounds, self.max_particles, self.rng.fork())
    }

    /// Run one simulation tick of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        systems::movement::movement(&self.scene, &mut self.stores.movements);
        systems::animation::animation(&self.scene, &mut self.stores, dt);
        systems::particlegenerator::particles(&self.scene, &mut self.stores.particles, dt);
    }

    /// Submit everything visible to `renderer`.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        systems::render::render(&self.scene, &self.stores, renderer);
    }

    /// Destroy every entity and empty every store.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.stores.clear();
        debug!("World '{}' cleared", self.scene.name);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(super::scene::MAX_ENTITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_insert_and_get() {
        let mut world = World::new(8);
        let id = world.spawn("Player").unwrap();
        assert_eq!(world.insert(id, Movement::at(100.0, 150.0)).unwrap(), 0);

        let m = world.get::<Movement>(id).unwrap();
        assert_eq!(m.entity_id, id);
        assert_eq!(m.position.x, 100.0);
        assert!(world.get::<SpriteRenderer>(id).is_none());

        world.get_mut::<Movement>(id).unwrap().nudge(1.0, 0.0);
        assert_eq!(world.get::<Movement>(id).unwrap().delta.x, 1.0);
    }

    #[test]
    fn test_zero_capacity_world_holds_one_entity() {
        let mut world = World::new(0);
        let id = world.spawn("only").unwrap();
        assert_eq!(world.insert(id, Movement::default()).unwrap(), 0);
        assert!(world.spawn("extra").is_err());
    }

    #[test]
    fn test_insert_on_missing_entity() {
        let mut world = World::new(2);
        let ghost = EntityId::new(1);
        assert_eq!(
            world.insert(ghost, Movement::default()).unwrap_err(),
            EngineError::EntityNotFound(ghost)
        );
        assert!(world.stores.movements.is_empty());
    }

    #[test]
    fn test_remove_entity_releases_every_slot() {
        let mut world = World::new(4);
        let id = world.spawn("Example").unwrap();
        world.insert(id, Movement::default()).unwrap();
        world.insert(id, SpriteRenderer::new("TileSet1")).unwrap();
        world.insert(id, Animator::new()).unwrap();

        let removed = world.remove_entity(id).unwrap();
        assert!(removed.is_destroyed());
        assert!(removed.is_bare());
        for kind in ComponentKind::ALL {
            assert_eq!(world.stores.live_count(kind), 0);
        }
        assert_eq!(world.stores.movements.free_slots(), &[0]);
        assert!(world.entity(id).is_none());
    }

    #[test]
    fn test_remove_component_then_reinsert() {
        let mut world = World::new(4);
        let id = world.spawn("Label").unwrap();
        world.insert(id, Text::new("mono", "hi", Default::default())).unwrap();
        assert_eq!(world.remove_component::<Text>(id).unwrap(), 0);
        assert!(world.get::<Text>(id).is_none());
        assert!(matches!(
            world.remove_component::<Text>(id),
            Err(EngineError::ComponentNotPresent { .. })
        ));
        assert_eq!(world.insert(id, Text::new("mono", "again", Default::default())).unwrap(), 0);
    }

    #[test]
    fn test_clear_resets_pool_and_stores() {
        let mut world = World::new(4);
        for name in ["a", "b", "c"] {
            let id = world.spawn(name).unwrap();
            world.insert(id, Movement::default()).unwrap();
        }
        world.clear();
        assert!(world.scene.is_empty());
        assert_eq!(world.stores.movements.high_water_mark(), 0);
        assert_eq!(world.spawn("fresh").unwrap(), EntityId::new(0));
    }
}
