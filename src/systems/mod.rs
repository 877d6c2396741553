//! Per-frame system passes.
//!
//! Each pass is a plain function over the live records of one or more
//! component stores. [`World::update`](crate::ecs::world::World::update) runs
//! [`movement`], [`animation`] and [`particlegenerator`];
//! [`World::draw`](crate::ecs::world::World::draw) runs [`render`].
//! [`time`] is driven by the frame loop, outside the world.

pub mod animation;
pub mod movement;
pub mod particlegenerator;
pub mod render;
pub mod time;
