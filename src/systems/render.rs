//! Draw pass.
//!
//! Turns live components into draw requests for a [`Renderer`], in this
//! order: sprites, particle quads, text. Submission order is kept; depth
//! sorting is the renderer's job.

use log::trace;

use crate::ecs::component::ComponentKind;
use crate::ecs::scene::Scene;
use crate::ecs::world::Stores;
use crate::render::{Renderer, SpriteDraw, TextDraw};

pub fn render<R: Renderer>(scene: &Scene, stores: &Stores, renderer: &mut R) {
    sprites(scene, stores, renderer);
    particles(scene, stores, renderer);
    texts(scene, stores, renderer);
}

/// Submit every enabled sprite whose entity is active and has a Movement.
///
/// The sprite is placed at the Movement position; entities without one are
/// skipped.
pub fn sprites<R: Renderer>(scene: &Scene, stores: &Stores, renderer: &mut R) {
    for (entity, sprite) in stores.sprites.iter_owned(scene) {
        let Some(movement) = entity
            .slot(ComponentKind::Movement)
            .and_then(|slot| stores.movements.get(slot))
        else {
            trace!("Entity {} has a sprite but no Movement, skipping", entity.id());
            continue;
        };

        renderer.draw_sprite(&SpriteDraw {
            tex_key: sprite.tex_key.clone(),
            source: sprite.source,
            position: movement.position,
            rotation: sprite.rotation,
            origin: sprite.origin,
            scale: sprite.scale,
            effects: sprite.effects,
            color: sprite.color,
            layer: sprite.layer,
        });
    }
}

/// Submit the quads each generator rasterized during the last update.
pub fn particles<R: Renderer>(scene: &Scene, stores: &Stores, renderer: &mut R) {
    for (_, generator) in stores.particles.iter_owned(scene) {
        for rect in generator.draw_buffer() {
            renderer.draw_rect(rect);
        }
    }
}

pub fn texts<R: Renderer>(scene: &Scene, stores: &Stores, renderer: &mut R) {
    for (_, text) in stores.texts.iter_owned(scene) {
        renderer.draw_text(&TextDraw {
            font: text.font.clone(),
            text: text.content.clone(),
            position: text.position,
            rotation: text.rotation,
            origin: text.origin,
            scale: text.scale,
            effects: text.effects,
            color: text.color,
        });
    }
}
