//! Plain 2D math and color types shared by components and draw requests.
//!
//! These stand in for the renderer's own types: the core only produces draw
//! parameters, so it needs values that are `Copy`, comparable and
//! serializable, nothing more.

use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 2D vector in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`.
    pub fn scale_by(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            Self::ZERO
        } else {
            self.scale_by(1.0 / len)
        }
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale_by(rhs)
    }
}

/// Axis-aligned rectangle, used both for spritesheet source regions and
/// for particle bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Point-in-rectangle test; the right and bottom edges are exclusive.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed `0xAARRGGBB` value, e.g. `0xff181818` for a dark grey.
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1). `t` is clamped.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Sprite/text mirroring flags handed to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteEffects {
    #[default]
    None,
    FlipHorizontally,
    FlipVertically,
    FlipBoth,
}

impl SpriteEffects {
    pub fn from_flags(flip_h: bool, flip_v: bool) -> Self {
        match (flip_h, flip_v) {
            (false, false) => Self::None,
            (true, false) => Self::FlipHorizontally,
            (false, true) => Self::FlipVertically,
            (true, true) => Self::FlipBoth,
        }
    }

    pub fn flip_h(self) -> bool {
        matches!(self, Self::FlipHorizontally | Self::FlipBoth)
    }

    pub fn flip_v(self) -> bool {
        matches!(self, Self::FlipVertically | Self::FlipBoth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_vector_ops() {
        let v = Vector2::new(1.0, 2.0) + Vector2::new(3.0, 4.0);
        assert!(approx_eq(v.x, 4.0));
        assert!(approx_eq(v.y, 6.0));
        let s = v * 0.5;
        assert!(approx_eq(s.x, 2.0));
        assert!(approx_eq(s.y, 3.0));
    }

    #[test]
    fn test_normalized_zero_stays_zero() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
        let n = Vector2::new(3.0, 4.0).normalized();
        assert!(approx_eq(n.length(), 1.0));
    }

    #[test]
    fn test_rectangle_contains_edges() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 5.0);
        assert!(r.contains(Vector2::new(0.0, 0.0)));
        assert!(r.contains(Vector2::new(9.9, 4.9)));
        assert!(!r.contains(Vector2::new(10.0, 2.0)));
        assert!(!r.contains(Vector2::new(2.0, -0.1)));
    }

    #[test]
    fn test_color_from_argb() {
        let c = Color::from_argb(0xff18_1818);
        assert_eq!(c, Color::new(0x18, 0x18, 0x18, 0xff));
    }

    #[test]
    fn test_color_lerp_endpoints_and_clamp() {
        assert_eq!(Color::WHITE.lerp(Color::BLACK, 0.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp(Color::BLACK, 1.0), Color::BLACK);
        assert_eq!(Color::WHITE.lerp(Color::BLACK, 7.0), Color::BLACK);
        let mid = Color::WHITE.lerp(Color::BLACK, 0.5);
        assert_eq!(mid.r, 128);
        assert_eq!(mid.a, 255);
    }

    #[test]
    fn test_sprite_effects_flags() {
        let e = SpriteEffects::from_flags(true, true);
        assert_eq!(e, SpriteEffects::FlipBoth);
        assert!(e.flip_h() && e.flip_v());
        assert!(!SpriteEffects::None.flip_h());
    }
}
