//! Renderer boundary.
//!
//! The engine never touches a graphics API. The draw pass turns live
//! components into plain draw requests and hands them to a [`Renderer`].
//! Textures and fonts are referenced by key; loading them is the renderer's
//! business.
//!
//! [`DrawList`] is a recording renderer: it keeps every request in
//! submission order, which is what tests and the headless demo need.

use std::cmp::Ordering;

use crate::math::{Color, Rectangle, SpriteEffects, Vector2};

/// A textured quad.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub tex_key: String,
    pub source: Rectangle,
    pub position: Vector2,
    pub rotation: f32,
    pub origin: Vector2,
    pub scale: Vector2,
    pub effects: SpriteEffects,
    pub color: Color,
    /// 1 is the back, 0 the front.
    pub layer: f32,
}

/// A run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub font: String,
    pub text: String,
    pub position: Vector2,
    pub rotation: f32,
    pub origin: Vector2,
    pub scale: Vector2,
    pub effects: SpriteEffects,
    pub color: Color,
}

/// A solid rectangle, used for particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectDraw {
    pub rect: Rectangle,
    pub color: Color,
    pub layer: f32,
}

pub trait Renderer {
    fn draw_sprite(&mut self, sprite: &SpriteDraw);
    fn draw_text(&mut self, text: &TextDraw);
    fn draw_rect(&mut self, rect: &RectDraw);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite(SpriteDraw),
    Text(TextDraw),
    Rect(RectDraw),
}

impl DrawCommand {
    /// Depth of the command; text has none and sorts to the front.
    pub fn layer(&self) -> f32 {
        match self {
            DrawCommand::Sprite(sprite) => sprite.layer,
            DrawCommand::Rect(rect) => rect.layer,
            DrawCommand::Text(_) => 0.0,
        }
    }
}

/// Renderer that records what it is asked to draw.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Stable sort by layer, highest first, so layer 1 is drawn before 0.
    pub fn sort_back_to_front(&mut self) {
        self.commands
            .sort_by(|a, b| b.layer().partial_cmp(&a.layer()).unwrap_or(Ordering::Equal));
    }

    pub fn sprites(&self) -> impl Iterator<Item = &SpriteDraw> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Sprite(sprite) => Some(sprite),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextDraw> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectDraw> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        self.commands.push(DrawCommand::Sprite(sprite.clone()));
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }

    fn draw_rect(&mut self, rect: &RectDraw) {
        self.commands.push(DrawCommand::Rect(*rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(key: &str, layer: f32) -> SpriteDraw {
        SpriteDraw {
            tex_key: key.to_string(),
            source: Rectangle::new(0.0, 0.0, 8.0, 8.0),
            position: Vector2::ZERO,
            rotation: 0.0,
            origin: Vector2::ZERO,
            scale: Vector2::ONE,
            effects: SpriteEffects::None,
            color: Color::WHITE,
            layer,
        }
    }

    #[test]
    fn test_records_in_submission_order() {
        let mut list = DrawList::new();
        list.draw_sprite(&sprite("a", 0.2));
        list.draw_rect(&RectDraw {
            rect: Rectangle::new(1.0, 1.0, 1.0, 3.0),
            color: Color::WHITE,
            layer: 0.5,
        });
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands[0], DrawCommand::Sprite(_)));
        assert_eq!(list.rects().count(), 1);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_sort_back_to_front_is_stable() {
        let mut list = DrawList::new();
        list.draw_sprite(&sprite("front", 0.0));
        list.draw_sprite(&sprite("back", 1.0));
        list.draw_sprite(&sprite("mid-a", 0.5));
        list.draw_sprite(&sprite("mid-b", 0.5));
        list.sort_back_to_front();

        let keys: Vec<&str> = list.sprites().map(|s| s.tex_key.as_str()).collect();
        assert_eq!(keys, vec!["back", "mid-a", "mid-b", "front"]);
    }
}
