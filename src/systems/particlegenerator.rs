//! Particle pass.
//!
//! Moves every live particle by `velocity * dt`, ages it, applies the
//! generator's [`CullPolicy`] to particles that left the bounds and
//! rasterizes the survivors into the generator's draw buffer. The buffer is
//! rebuilt from scratch every tick and submitted as-is by the render pass.

use crate::components::particlegenerator::{CullPolicy, ParticleGenerator};
use crate::ecs::scene::Scene;
use crate::ecs::store::ComponentStore;
use crate::math::Rectangle;
use crate::render::RectDraw;

pub fn particles(scene: &Scene, generators: &mut ComponentStore<ParticleGenerator>, dt: f32) {
    for (_, generator) in generators.iter_owned_mut(scene) {
        step(generator, dt);
    }
}

/// Advance one generator by `dt` seconds and rebuild its draw buffer.
pub fn step(generator: &mut ParticleGenerator, dt: f32) {
    generator.populate();
    generator.buffer.clear();

    for i in 0..generator.particles.len() {
        let mut particle = generator.particles[i];
        if particle.died {
            continue;
        }

        particle.position += particle.velocity * dt;
        particle.age += dt;

        if !generator.bounds.contains(particle.position) {
            match generator.policy {
                CullPolicy::Retire => {
                    particle.died = true;
                    generator.particles[i] = particle;
                    continue;
                }
                CullPolicy::Recycle => particle = generator.spawn_particle(),
            }
        }

        let t = if particle.lifetime > 0.0 {
            particle.age / particle.lifetime
        } else {
            1.0
        };
        particle.color = generator.spawn_color.lerp(generator.fade_color, t);

        generator.buffer.push(RectDraw {
            rect: Rectangle::new(
                particle.position.x,
                particle.position.y,
                particle.size.x,
                particle.size.y,
            ),
            color: particle.color,
            layer: generator.layer,
        });
        generator.particles[i] = particle;
    }
}
