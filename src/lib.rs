//! Data Oriented Engine library.
//!
//! A small entity/component runtime: a fixed-capacity entity pool, dense
//! per-type component stores with O(1) add and remove, and per-frame system
//! passes for movement, animation, particles and draw submission.
//!
//! - [`ecs`] – entity pool, component stores and the [`World`](ecs::world::World) aggregate
//! - [`components`] – component payloads
//! - [`systems`] – per-frame passes
//! - [`render`] – renderer boundary and a recording renderer
//! - [`resources`] – configuration and the frame clock
//! - [`game`] – demo scene setup

pub mod components;
pub mod ecs;
pub mod error;
pub mod game;
pub mod math;
pub mod render;
pub mod resources;
pub mod systems;
