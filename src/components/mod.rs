//! Component payloads.
//!
//! - [`movement`]: position plus a per-tick displacement.
//! - [`spriterenderer`]: texture region and transform for a sprite.
//! - [`animation`] / [`animator`]: frame sequences and their playback.
//! - [`particlegenerator`]: a bounded cloud of moving particles.
//! - [`text`]: a run of text drawn with a named font.

pub mod animation;
pub mod animator;
pub mod movement;
pub mod particlegenerator;
pub mod spriterenderer;
pub mod text;
