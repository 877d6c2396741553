//! Data Oriented Engine demo driver.
//!
//! Runs the demo scene headless for a fixed number of ticks, recording every
//! draw request into a [`DrawList`] instead of a window.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), apply CLI overrides
//! 2. Build the world and the demo scene
//! 3. Per tick: advance [`WorldTime`], nudge the example sprite, update, draw
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 300
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use dataorientedengine::components::movement::Movement;
use dataorientedengine::ecs::world::World;
use dataorientedengine::error::EngineResult;
use dataorientedengine::game;
use dataorientedengine::render::DrawList;
use dataorientedengine::resources::engineconfig::EngineConfig;
use dataorientedengine::resources::worldtime::WorldTime;
use dataorientedengine::systems::time::update_world_time;

#[derive(Parser)]
#[command(
    version,
    about = "Headless demo of the Data Oriented Engine entity/component runtime."
)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of ticks to run; overrides [demo] frames.
    #[arg(long, value_name = "N")]
    frames: Option<u32>,

    /// Fixed tick length in seconds; overrides [demo] delta.
    #[arg(long, value_name = "SECS")]
    delta: Option<f32>,

    /// Print the demo animation table as JSON and exit.
    #[arg(long)]
    dump_animations: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> EngineResult<()> {
    // Early-exit: dump animations and quit
    if cli.dump_animations {
        println!("{}", game::demo_animator()?.animations_to_json()?);
        return Ok(());
    }

    let mut config = EngineConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{e}; using defaults");
    }
    let frames = cli.frames.unwrap_or(config.frames);
    let delta = cli.delta.unwrap_or(config.delta);

    let mut world = World::from_config(&config);
    let demo = game::setup(&mut world)?;
    let mut time = WorldTime::default().with_time_scale(config.time_scale);
    let mut draw_list = DrawList::new();

    for _ in 0..frames {
        update_world_time(&mut time, delta);
        game::drive(&mut world, &demo, time.delta);
        world.update(time.delta);

        draw_list.clear();
        world.draw(&mut draw_list);
        draw_list.sort_back_to_front();
    }

    info!(
        "Ran {} frames ({:.2}s): last frame submitted {} sprites, {} particles, {} texts",
        time.frame_count,
        time.elapsed,
        draw_list.sprites().count(),
        draw_list.rects().count(),
        draw_list.texts().count()
    );
    if let Some(movement) = world.get::<Movement>(demo.example) {
        info!(
            "Example ended at ({:.1}, {:.1})",
            movement.position.x, movement.position.y
        );
    }
    Ok(())
}
