//! Engine configuration resource.
//!
//! Settings loaded from an INI file. Every field has a safe default so the
//! engine can start without a file, and missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scene]
//! name = Default Scene
//! max_entities = 1000
//!
//! [particles]
//! max_particles = 5000
//! seed = 0
//!
//! [time]
//! time_scale = 1.0
//!
//! [demo]
//! frames = 120
//! delta = 0.016666668
//! ```

use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::info;

use crate::components::particlegenerator::MAX_PARTICLES;
use crate::ecs::scene::MAX_ENTITIES;
use crate::error::{EngineError, EngineResult};

const DEFAULT_SCENE_NAME: &str = "Default Scene";
const DEFAULT_SEED: u64 = 0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_FRAMES: u32 = 120;
const DEFAULT_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub scene_name: String,
    /// Entity pool size, also the capacity of every component store.
    pub max_entities: usize,
    /// Particles per generator.
    pub max_particles: usize,
    /// Seed for particle randomness; 0 means seed from entropy.
    pub seed: u64,
    /// Multiplier the frame driver applies to every delta.
    pub time_scale: f32,
    /// Ticks the demo driver runs.
    pub frames: u32,
    /// Fixed tick length of the demo driver, in seconds.
    pub delta: f32,
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            scene_name: DEFAULT_SCENE_NAME.to_string(),
            max_entities: MAX_ENTITIES,
            max_particles: MAX_PARTICLES,
            seed: DEFAULT_SEED,
            time_scale: DEFAULT_TIME_SCALE,
            frames: DEFAULT_FRAMES,
            delta: DEFAULT_DELTA,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load settings from the INI file at `config_path`.
    ///
    /// Missing or unparsable values keep their current value. A zero entity
    /// count is ignored.
    pub fn load_from_file(&mut self) -> EngineResult<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to load config file: {}", e)))?;

        // [scene] section
        if let Some(name) = config.get("scene", "name").filter(|n| !n.is_empty()) {
            self.scene_name = name;
        }
        if let Some(max) = config.getuint("scene", "max_entities").ok().flatten()
            && max > 0
        {
            self.max_entities = max as usize;
        }

        // [particles] section
        if let Some(max) = config.getuint("particles", "max_particles").ok().flatten() {
            self.max_particles = max as usize;
        }
        if let Some(seed) = config.getuint("particles", "seed").ok().flatten() {
            self.seed = seed;
        }

        // [time] section
        if let Some(scale) = config.getfloat("time", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        // [demo] section
        if let Some(frames) = config.getuint("demo", "frames").ok().flatten() {
            self.frames = frames as u32;
        }
        if let Some(delta) = config.getfloat("demo", "delta").ok().flatten() {
            self.delta = delta as f32;
        }

        info!(
            "Loaded config: scene '{}', {} entities, {} particles, seed={}, time_scale={}",
            self.scene_name, self.max_entities, self.max_particles, self.seed, self.time_scale
        );

        Ok(())
    }

    /// Save settings to the INI file at `config_path`, creating it if needed.
    pub fn save_to_file(&self) -> EngineResult<()> {
        let mut config = Ini::new();

        config.set("scene", "name", Some(self.scene_name.clone()));
        config.set("scene", "max_entities", Some(self.max_entities.to_string()));
        config.set("particles", "max_particles", Some(self.max_particles.to_string()));
        config.set("particles", "seed", Some(self.seed.to_string()));
        config.set("time", "time_scale", Some(self.time_scale.to_string()));
        config.set("demo", "frames", Some(self.frames.to_string()));
        config.set("demo", "delta", Some(self.delta.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
