use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::EntityId;
use crate::ecs::store::ComponentStore;
use crate::ecs::world::Stores;
use crate::math::{Color, SpriteEffects, Vector2};

/// Screen-space text drawn with a font referenced by key.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub entity_id: EntityId,
    pub enabled: bool,
    pub font: String,
    pub content: String,
    pub effects: SpriteEffects,
    pub position: Vector2,
    pub origin: Vector2,
    pub scale: Vector2,
    pub color: Color,
    /// In radians.
    pub rotation: f32,
}

impl Text {
    pub fn new(font: impl Into<String>, content: impl Into<String>, position: Vector2) -> Self {
        Self {
            entity_id: EntityId::NULL,
            enabled: true,
            font: font.into(),
            content: content.into(),
            effects: SpriteEffects::None,
            position,
            origin: Vector2::ZERO,
            scale: Vector2::ONE,
            color: Color::WHITE,
            rotation: 0.0,
        }
    }

    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replace the text content.
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Append to the text content.
    pub fn push_str(&mut self, more: &str) {
        self.content.push_str(more);
    }
}

impl Component for Text {
    const KIND: ComponentKind = ComponentKind::Text;

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
        &stores.texts
    }

    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self> {
        &mut stores.texts
    }
}
