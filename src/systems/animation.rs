//! Animation pass.
//!
//! Advances every playing [`Animation`] by the tick's elapsed time and copies
//! the current frame's source rectangle into the entity's
//! [`SpriteRenderer`](crate::components::spriterenderer::SpriteRenderer),
//! if it has one.
//!
//! # Frame advance
//!
//! The accumulator collects `dt * speed`. Once it reaches `frame_delay` it is
//! reset to zero and the frame moves one step toward the end. At most one
//! frame is advanced per tick; extra elapsed time is dropped. Stepping past
//! the end restarts a looping animation and sends any other back to Idle.

use log::debug;

use crate::components::animation::Animation;
use crate::ecs::component::ComponentKind;
use crate::ecs::scene::Scene;
use crate::ecs::world::Stores;

/// What one tick did to an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Not playing, or still below the frame delay.
    Held,
    /// Moved one frame.
    Advanced,
    /// Ran past the end and started over.
    Restarted,
    /// Ran past the end of a non-looping animation.
    Finished,
}

/// Advance `animation` by `dt` seconds.
pub fn advance(animation: &mut Animation, dt: f32) -> FrameStep {
    if !animation.is_playing {
        return FrameStep::Held;
    }

    animation.accumulator += dt * animation.speed;
    if animation.accumulator < animation.frame_delay {
        return FrameStep::Held;
    }
    animation.accumulator = 0.0;

    let finished = if animation.reversed {
        animation.current_frame == 0
    } else {
        animation.current_frame + 1 >= animation.frames.len()
    };

    if finished {
        if animation.looped {
            animation.restart();
            FrameStep::Restarted
        } else {
            animation.is_playing = false;
            FrameStep::Finished
        }
    } else {
        if animation.reversed {
            animation.current_frame -= 1;
        } else {
            animation.current_frame += 1;
        }
        FrameStep::Advanced
    }
}

/// Run the animation pass over every animator its entity still owns.
pub fn animation(scene: &Scene, stores: &mut Stores, dt: f32) {
    let Stores {
        animators, sprites, ..
    } = stores;

    for (entity, animator) in animators.iter_owned_mut(scene) {
        if let Some(current) = animator.current_mut()
            && advance(current, dt) == FrameStep::Finished
        {
            debug!("Animation '{}' finished on entity {}", current.name, entity.id());
            animator.clear_current();
        }

        let Some(source) = animator.current_frame_rect() else {
            continue;
        };
        if let Some(sprite) = entity
            .slot(ComponentKind::SpriteRenderer)
            .and_then(|slot| sprites.get_mut(slot))
        {
            sprite.source = source;
        }
    }
}
