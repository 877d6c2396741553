//! Entity/component storage.
//!
//! - [`scene`]: the fixed-capacity entity pool with LIFO id reuse.
//! - [`store`]: dense per-type component storage with LIFO slot reuse.
//! - [`world`]: the aggregate tying the pool, the stores and the system
//!   passes together.

pub mod component;
pub mod entity;
pub mod scene;
pub mod store;
pub mod world;

pub use component::{Component, ComponentKind};
pub use entity::{Entity, EntityId};
pub use scene::Scene;
pub use store::{ComponentStore, SlotIndex};
pub use world::{Stores, World};
