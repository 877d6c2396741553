//! Demo scene setup.
//!
//! Builds the scene the demo binary runs: one animated, movable sprite, a
//! rain particle field and a text label.

use log::info;

use crate::components::animation::Animation;
use crate::components::animator::Animator;
use crate::components::movement::Movement;
use crate::components::particlegenerator::CullPolicy;
use crate::components::spriterenderer::SpriteRenderer;
use crate::components::text::Text;
use crate::ecs::entity::EntityId;
use crate::ecs::world::World;
use crate::error::EngineResult;
use crate::math::{Color, Rectangle, Vector2};

/// Units per second the demo sprite drifts right.
const DRIFT_SPEED: f32 = 50.0;

/// Ids of the entities [`setup`] creates.
#[derive(Debug, Clone, Copy)]
pub struct DemoScene {
    pub example: EntityId,
    pub rain: EntityId,
    pub label: EntityId,
}

/// The five-frame looping "Acid" strip from the TileSet1 sheet.
pub fn acid_animation() -> Animation {
    Animation::from_strip("Acid", 0.0, 0.0, 64.0, 64.0, 5)
        .looping(true)
        .with_speed(2.0)
}

/// Animator holding every demo animation, nothing playing.
pub fn demo_animator() -> EngineResult<Animator> {
    Animator::new().with_animation(acid_animation())
}

pub fn setup(world: &mut World) -> EngineResult<DemoScene> {
    let example = world.spawn("Example")?;
    world.insert(example, Movement::at(100.0, 150.0))?;
    world.insert(
        example,
        SpriteRenderer::with_texture_size("TileSet1", 320.0, 64.0).with_scale(2.0, 2.0),
    )?;
    world.insert(example, demo_animator()?)?;
    if let Some(animator) = world.get_mut::<Animator>(example) {
        animator.play("Acid");
    }

    let rain = world.spawn("Rain")?;
    let generator = world
        .new_particle_generator(Rectangle::new(0.0, 0.0, 800.0, 480.0))
        .with_colors(Color::WHITE, Color::from_argb(0xff181818))
        .with_policy(CullPolicy::Recycle);
    world.insert(rain, generator)?;

    let label = world.spawn("Label")?;
    world.insert(
        label,
        Text::new("mono", "Data Oriented Engine", Vector2::new(8.0, 8.0)),
    )?;

    info!("Demo scene ready with {} entities", world.scene.len());
    Ok(DemoScene {
        example,
        rain,
        label,
    })
}

/// Per-tick input stand-in: push the example sprite right.
pub fn drive(world: &mut World, scene: &DemoScene, dt: f32) {
    if let Some(movement) = world.get_mut::<Movement>(scene.example) {
        movement.nudge(dt * DRIFT_SPEED, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_builds_three_entities() {
        let mut world = World::new(8);
        let demo = setup(&mut world).unwrap();

        assert_eq!(world.entity_by_name("Example").unwrap().id(), demo.example);
        assert_eq!(world.entity_by_name("Rain").unwrap().id(), demo.rain);
        assert_eq!(world.entity_by_name("Label").unwrap().id(), demo.label);
        assert!(world.get::<Animator>(demo.example).unwrap().is_something_playing());
    }

    #[test]
    fn test_drive_moves_example() {
        let mut world = World::new(8);
        let demo = setup(&mut world).unwrap();
        drive(&mut world, &demo, 0.5);
        world.update(0.5);
        let m = world.get::<Movement>(demo.example).unwrap();
        assert!((m.position.x - 125.0).abs() < 1e-4);
    }
}
