//! Resources owned by the frame driver rather than by entities.
//!
//! - [`engineconfig`]: INI-backed engine settings.
//! - [`worldtime`]: the scaled frame clock.

pub mod engineconfig;
pub mod worldtime;
