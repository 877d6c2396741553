//! Sprite rendering parameters.
//!
//! A [`SpriteRenderer`] names a texture by key and selects the region of it
//! to draw. It carries no position of its own: the sprite pass reads the
//! position from the entity's [`Movement`](crate::components::movement::Movement)
//! and skips entities that have none.

use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::EntityId;
use crate::ecs::store::ComponentStore;
use crate::ecs::world::Stores;
use crate::math::{Color, Rectangle, SpriteEffects, Vector2};

/// Everything the renderer needs to place one sprite, except its position.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteRenderer {
    pub entity_id: EntityId,
    pub enabled: bool,
    /// Texture key; loading is up to the renderer.
    pub tex_key: String,
    /// Region of the texture to draw. The animation pass overwrites this
    /// while an animation is current.
    pub source: Rectangle,
    pub effects: SpriteEffects,
    /// Pivot in texture pixels for placement, rotation and scaling.
    pub origin: Vector2,
    /// Depth from 0 to 1; 1 is drawn first, 0 last.
    pub layer: f32,
    pub color: Color,
    pub scale: Vector2,
    /// In radians.
    pub rotation: f32,
}

impl SpriteRenderer {
    /// Sprite with no known texture size; the source region is empty until
    /// set explicitly or by an animation.
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            entity_id: EntityId::NULL,
            enabled: true,
            tex_key: tex_key.into(),
            source: Rectangle::EMPTY,
            effects: SpriteEffects::None,
            origin: Vector2::ZERO,
            layer: 1.0,
            color: Color::WHITE,
            scale: Vector2::ONE,
            rotation: 0.0,
        }
    }

    /// Sprite drawing the whole `width` x `height` texture.
    pub fn with_texture_size(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: Rectangle::new(0.0, 0.0, width, height),
            ..Self::new(tex_key)
        }
    }

    pub fn with_scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = Vector2::new(sx, sy);
        self
    }

    pub fn with_layer(mut self, layer: f32) -> Self {
        self.layer = layer.clamp(0.0, 1.0);
        self
    }

    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_flip(&mut self, flip_h: bool, flip_v: bool) {
        self.effects = SpriteEffects::from_flags(flip_h, flip_v);
    }
}

impl Component for SpriteRenderer {
    const KIND: ComponentKind = ComponentKind::SpriteRenderer;

    fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn bind(&mut self, entity: EntityId) {
        self.entity_id = entity;
    }

    fn store(stores: &Stores) -> &ComponentStore<Self> {
        &stores.sprites
    }

    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self> {
        &mut stores.sprites
    }
}
