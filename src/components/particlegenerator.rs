//! Particle generator component.
//!
//! A [`ParticleGenerator`] owns a fixed array of [`Particle`]s confined to a
//! bounds rectangle. Each tick the particle pass
//! ([`crate::systems::particlegenerator`]) integrates positions, applies the
//! [`CullPolicy`] to particles that left the bounds, and rasterizes the
//! survivors into the generator's draw buffer. The draw pass submits that
//! buffer unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! let rain = world
//!     .new_particle_generator(Rectangle::new(0.0, 0.0, 800.0, 480.0))
//!     .with_speed_range(50.0, 200.0)
//!     .with_policy(CullPolicy::Recycle);
//! world.insert(id, rain)?;
//! ```

use std::f32::consts::TAU;

use fastrand::Rng;

use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::EntityId;
use crate::ecs::store::ComponentStore;
use crate::ecs::world::Stores;
use crate::math::{Color, Rectangle, Vector2};
use crate::render::RectDraw;

/// Default particle count per generator.
pub const MAX_PARTICLES: usize = 5000;

/// What happens to a particle that leaves the generator bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CullPolicy {
    /// Respawn inside the bounds with a fresh velocity and age.
    #[default]
    Recycle,
    /// Mark as died and never update or draw it again.
    Retire,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub rotation: f32,
    pub size: Vector2,
    pub color: Color,
    /// Seconds since spawn.
    pub age: f32,
    /// Seconds over which the color fades from spawn to fade color.
    pub lifetime: f32,
    pub died: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vector2::ZERO,
            velocity: Vector2::new(10.0, 10.0),
            rotation: 0.0,
            size: Vector2::new(1.0, 3.0),
            color: Color::WHITE,
            age: 0.0,
            lifetime: 1.0,
            died: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleGenerator {
    pub entity_id: EntityId,
    pub enabled: bool,
    pub particles: Vec<Particle>,
    /// Number of particles [`ParticleGenerator::populate`] fills up to.
    pub max_particles: usize,
    /// Particles outside this rectangle are culled.
    pub bounds: Rectangle,
    /// Pick a random heading per particle instead of `direction`.
    pub random_direction: bool,
    pub direction: Vector2,
    /// Speed in units per second, sampled uniformly as (min, max).
    pub speed_range: (f32, f32),
    pub spawn_color: Color,
    pub fade_color: Color,
    pub lifetime: f32,
    pub particle_size: Vector2,
    /// Depth of the particle quads, same scale as sprite layers.
    pub layer: f32,
    pub policy: CullPolicy,
    pub(crate) buffer: Vec<RectDraw>,
    rng: Rng,
}

impl ParticleGenerator {
    /// Empty generator; particles are spawned by [`ParticleGenerator::populate`],
    /// which the particle pass calls on its first tick.
    pub fn new(bounds: Rectangle, max_particles: usize, rng: Rng) -> Self {
        Self {
            entity_id: EntityId::NULL,
            enabled: true,
            particles: Vec::with_capacity(max_particles),
            max_particles,
            bounds,
            random_direction: false,
            direction: Vector2::UNIT_Y,
            speed_range: (50.0, 200.0),
            spawn_color: Color::WHITE,
            fade_color: Color::BLACK,
            lifetime: 1.0,
            particle_size: Vector2::new(1.0, 3.0),
            layer: 0.5,
            policy: CullPolicy::default(),
            buffer: Vec::with_capacity(max_particles),
            rng,
        }
    }

    pub fn with_direction(mut self, direction: Vector2) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_random_direction(mut self, random: bool) -> Self {
        self.random_direction = random;
        self
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_range = (min.min(max), min.max(max));
        self
    }

    pub fn with_colors(mut self, spawn: Color, fade: Color) -> Self {
        self.spawn_color = spawn;
        self.fade_color = fade;
        self
    }

    pub fn with_policy(mut self, policy: CullPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Spawn particles until there are `max_particles` of them.
    pub fn populate(&mut self) {
        while self.particles.len() < self.max_particles {
            let particle = self.spawn_particle();
            self.particles.push(particle);
        }
    }

    /// Fresh particle at a random point inside the bounds.
    pub(crate) fn spawn_particle(&mut self) -> Particle {
        let position = Vector2::new(
            self.bounds.x + self.rng.f32() * self.bounds.width.max(0.0),
            self.bounds.y + self.rng.f32() * self.bounds.height.max(0.0),
        );

        let heading = if self.random_direction {
            let theta = self.rng.f32() * TAU;
            Vector2::new(theta.cos(), theta.sin())
        } else {
            self.direction.normalized()
        };
        let (min, max) = self.speed_range;
        let speed = min + self.rng.f32() * (max - min);

        Particle {
            position,
            velocity: heading * speed,
            size: self.particle_size,
            color: self.spawn_color,
            lifetime: self.lifetime,
            ..Particle::default()
        }
    }

    /// Particles still being simulated.
    pub fn live_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.died).count()
    }

    /// Quads produced by the last particle pass.
    pub fn draw_buffer(&self) -> &[RectDraw] {
        &self.buffer
    }
}

impl Component for ParticleGenerator {
    const KIND: ComponentKind = ComponentKind::ParticleGenerator;

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
        &stores.particles
    }

    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self> {
        &mut stores.particles
    }
}
