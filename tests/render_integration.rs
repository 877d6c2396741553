//! Draw submission, particle policies and config-driven world setup.

use dataorientedengine::components::movement::Movement;
use dataorientedengine::components::particlegenerator::{CullPolicy, ParticleGenerator};
use dataorientedengine::components::spriterenderer::SpriteRenderer;
use dataorientedengine::components::text::Text;
use dataorientedengine::ecs::world::World;
use dataorientedengine::error::EngineError;
use dataorientedengine::math::{Color, Rectangle, Vector2};
use dataorientedengine::render::{DrawCommand, DrawList};
use dataorientedengine::resources::engineconfig::EngineConfig;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn draw(world: &World) -> DrawList {
    let mut list = DrawList::new();
    world.draw(&mut list);
    list
}

fn seeded_world(max_particles: usize) -> World {
    let config = EngineConfig {
        max_entities: 8,
        max_particles,
        seed: 42,
        ..EngineConfig::new()
    };
    World::from_config(&config)
}

#[test]
fn sprite_uses_movement_position() {
    let mut world = World::new(4);
    let id = world.spawn("Example").unwrap();
    world.insert(id, Movement::at(100.0, 150.0)).unwrap();
    world
        .insert(
            id,
            SpriteRenderer::with_texture_size("TileSet1", 64.0, 64.0).with_scale(2.0, 2.0),
        )
        .unwrap();

    let list = draw(&world);
    let sprite = list.sprites().next().unwrap();
    assert_eq!(sprite.tex_key, "TileSet1");
    assert!(approx_eq(sprite.position.x, 100.0));
    assert!(approx_eq(sprite.position.y, 150.0));
    assert_eq!(sprite.scale, Vector2::new(2.0, 2.0));
    assert_eq!(sprite.source, Rectangle::new(0.0, 0.0, 64.0, 64.0));
}

#[test]
fn sprite_without_movement_is_skipped() {
    let mut world = World::new(4);
    let placed = world.spawn("placed").unwrap();
    world.insert(placed, Movement::new()).unwrap();
    world.insert(placed, SpriteRenderer::new("a")).unwrap();
    let floating = world.spawn("floating").unwrap();
    world.insert(floating, SpriteRenderer::new("b")).unwrap();

    world.update(0.016);
    let list = draw(&world);
    let keys: Vec<&str> = list.sprites().map(|s| s.tex_key.as_str()).collect();
    assert_eq!(keys, vec!["a"]);
}

#[test]
fn orphaned_records_do_not_follow_a_reused_id() {
    let mut world = World::new(4);
    let a = world.spawn("A").unwrap();
    world.insert(a, Movement::at(5.0, 5.0)).unwrap();
    world.insert(a, SpriteRenderer::new("ghost_of_A")).unwrap();
    world
        .insert(a, Text::new("mono", "ghost text", Vector2::ZERO))
        .unwrap();

    // Pool-level removal keeps the component slots live.
    world.scene.remove_entity(a).unwrap();
    let b = world.spawn("B").unwrap();
    assert_eq!(b, a);
    world.insert(b, Movement::at(1.0, 1.0)).unwrap();
    world.insert(b, SpriteRenderer::new("B_own")).unwrap();

    let list = draw(&world);
    let keys: Vec<&str> = list.sprites().map(|s| s.tex_key.as_str()).collect();
    assert_eq!(keys, vec!["B_own"]);
    assert_eq!(list.texts().count(), 0);
    assert_eq!(list.sprites().next().unwrap().position, Vector2::new(1.0, 1.0));
}

#[test]
fn orphaned_movement_is_not_updated() {
    let mut world = World::new(4);
    let a = world.spawn("A").unwrap();
    world.insert(a, Movement::at(0.0, 0.0)).unwrap();
    world.get_mut::<Movement>(a).unwrap().nudge(3.0, 0.0);
    world.scene.remove_entity(a).unwrap();
    let b = world.spawn("B").unwrap();
    world.insert(b, Movement::at(10.0, 0.0)).unwrap();

    world.update(0.1);

    let orphan = world.stores.movements.get(0).unwrap();
    assert_eq!(orphan.position, Vector2::ZERO);
    assert_eq!(orphan.delta, Vector2::new(3.0, 0.0));
    assert_eq!(world.get::<Movement>(b).unwrap().position, Vector2::new(10.0, 0.0));
}

#[test]
fn inactive_or_disabled_components_draw_nothing() {
    let mut world = World::new(4);
    let hidden = world.spawn("hidden").unwrap();
    world.insert(hidden, Movement::new()).unwrap();
    world.insert(hidden, SpriteRenderer::new("a")).unwrap();
    world.set_active(hidden, false).unwrap();

    let muted = world.spawn("muted").unwrap();
    let mut text = Text::new("mono", "quiet", Vector2::ZERO);
    text.enabled = false;
    world.insert(muted, text).unwrap();

    assert!(draw(&world).is_empty());

    world.set_active(hidden, true).unwrap();
    assert_eq!(draw(&world).len(), 1);
}

#[test]
fn draw_order_is_sprites_particles_text() {
    let mut world = seeded_world(2);
    let label = world.spawn("Label").unwrap();
    world
        .insert(label, Text::new("mono", "Score", Vector2::new(4.0, 4.0)))
        .unwrap();
    let rain = world.spawn("Rain").unwrap();
    let generator = world.new_particle_generator(Rectangle::new(0.0, 0.0, 800.0, 480.0));
    world.insert(rain, generator).unwrap();
    let hero = world.spawn("Hero").unwrap();
    world.insert(hero, Movement::new()).unwrap();
    world.insert(hero, SpriteRenderer::new("hero")).unwrap();

    world.update(0.0);
    let list = draw(&world);
    let kinds: Vec<&str> = list
        .commands
        .iter()
        .map(|cmd| match cmd {
            DrawCommand::Sprite(_) => "sprite",
            DrawCommand::Rect(_) => "rect",
            DrawCommand::Text(_) => "text",
        })
        .collect();
    assert_eq!(kinds, vec!["sprite", "rect", "rect", "text"]);
    assert_eq!(list.texts().next().unwrap().text, "Score");
}

#[test]
fn recycled_particles_stay_in_bounds() {
    let mut world = seeded_world(32);
    let rain = world.spawn("Rain").unwrap();
    let bounds = Rectangle::new(0.0, 0.0, 50.0, 50.0);
    let generator = world
        .new_particle_generator(bounds)
        .with_policy(CullPolicy::Recycle);
    world.insert(rain, generator).unwrap();

    for _ in 0..20 {
        world.update(0.1);
    }
    let generator = world.get::<ParticleGenerator>(rain).unwrap();
    assert_eq!(generator.live_count(), 32);
    assert!(generator.particles.iter().all(|p| bounds.contains(p.position)));
    assert_eq!(draw(&world).rects().count(), 32);
}

#[test]
fn retired_particles_stop_drawing() {
    let mut world = seeded_world(32);
    let rain = world.spawn("Rain").unwrap();
    let generator = world
        .new_particle_generator(Rectangle::new(0.0, 0.0, 50.0, 50.0))
        .with_policy(CullPolicy::Retire);
    world.insert(rain, generator).unwrap();

    world.update(0.0);
    assert_eq!(draw(&world).rects().count(), 32);

    // Slowest particles move 50 units per second, so one second clears the box.
    world.update(1.0);
    assert_eq!(world.get::<ParticleGenerator>(rain).unwrap().live_count(), 0);
    assert!(draw(&world).rects().next().is_none());
}

#[test]
fn particle_colors_fade_toward_fade_color() {
    let mut world = seeded_world(4);
    let rain = world.spawn("Rain").unwrap();
    let generator = world
        .new_particle_generator(Rectangle::new(0.0, 0.0, 10_000.0, 10_000.0))
        .with_speed_range(0.0, 0.0)
        .with_colors(Color::WHITE, Color::BLACK);
    world.insert(rain, generator).unwrap();

    world.update(2.0);
    let list = draw(&world);
    assert!(list.rects().all(|r| r.color == Color::BLACK));
}

#[test]
fn same_seed_gives_same_particles() {
    let run = || {
        let mut world = seeded_world(16);
        let rain = world.spawn("Rain").unwrap();
        let generator = world.new_particle_generator(Rectangle::new(0.0, 0.0, 100.0, 100.0));
        world.insert(rain, generator).unwrap();
        world.update(0.3);
        world.get::<ParticleGenerator>(rain).unwrap().particles.clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn config_file_sizes_the_world() {
    let path = std::env::temp_dir().join(format!(
        "dataorientedengine_config_{}.ini",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "[scene]\nname = Main Scene\nmax_entities = 2\n\n[particles]\nmax_particles = 3\nseed = 7\n\n[time]\ntime_scale = 0.5\n",
    )
    .unwrap();

    let mut config = EngineConfig::with_path(&path);
    config.load_from_file().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.scene_name, "Main Scene");
    assert_eq!(config.max_entities, 2);
    assert_eq!(config.max_particles, 3);
    assert_eq!(config.seed, 7);
    assert!(approx_eq(config.time_scale, 0.5));
    assert_eq!(config.frames, 120);

    let mut world = World::from_config(&config);
    assert_eq!(world.scene.name, "Main Scene");
    world.spawn("a").unwrap();
    let b = world.spawn("b").unwrap();
    assert!(matches!(
        world.spawn("c"),
        Err(EngineError::CapacityExceeded { capacity: 2, .. })
    ));

    let generator = world.new_particle_generator(Rectangle::new(0.0, 0.0, 10.0, 10.0));
    world.insert(b, generator).unwrap();
    world.update(0.0);
    assert_eq!(world.get::<ParticleGenerator>(b).unwrap().particles.len(), 3);
}

#[test]
fn config_round_trips_through_file() {
    let path = std::env::temp_dir().join(format!(
        "dataorientedengine_save_{}.ini",
        std::process::id()
    ));
    let saved = EngineConfig {
        scene_name: "Saved".to_string(),
        max_entities: 64,
        seed: 9,
        ..EngineConfig::with_path(&path)
    };
    saved.save_to_file().unwrap();

    let mut loaded = EngineConfig::with_path(&path);
    loaded.load_from_file().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.scene_name, "Saved");
    assert_eq!(loaded.max_entities, 64);
    assert_eq!(loaded.seed, 9);
    assert!(approx_eq(loaded.delta, saved.delta));
}
