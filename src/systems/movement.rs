use crate::components::movement::Movement;
use crate::ecs::scene::Scene;
use crate::ecs::store::ComponentStore;
use crate::math::Vector2;

/// Apply each pending delta to its position once, then zero it.
///
/// Disabled records and records of inactive entities keep their delta for a
/// later tick.
pub fn movement(scene: &Scene, movements: &mut ComponentStore<Movement>) {
    for (_, movement) in movements.iter_owned_mut(scene) {
        movement.position += movement.delta;
        movement.delta = Vector2::ZERO;
    }
}
