use serde::{Deserialize, Serialize};

use crate::math::Rectangle;

fn default_frame_delay() -> f32 {
    0.5
}

fn default_speed() -> f32 {
    1.0
}

/// A named sequence of spritesheet regions plus its playback state.
///
/// Only the definition (name, timing, flags, frames) is serialized; the
/// playback fields start zeroed and are driven by
/// [`Animator`](crate::components::animator::Animator) and the animation
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    /// Seconds each frame stays on screen at speed 1.
    #[serde(default = "default_frame_delay")]
    pub frame_delay: f32,
    /// Multiplier applied to elapsed time.
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default, rename = "loop")]
    pub looped: bool,
    /// Play from the last frame down to the first.
    #[serde(default)]
    pub reversed: bool,
    pub frames: Vec<Rectangle>,
    #[serde(skip)]
    pub current_frame: usize,
    #[serde(skip)]
    pub accumulator: f32,
    #[serde(skip)]
    pub is_playing: bool,
}

impl Animation {
    pub fn new(name: impl Into<String>, frames: Vec<Rectangle>) -> Self {
        Self {
            name: name.into(),
            frame_delay: default_frame_delay(),
            speed: default_speed(),
            looped: false,
            reversed: false,
            frames,
            current_frame: 0,
            accumulator: 0.0,
            is_playing: false,
        }
    }

    /// Frames laid out left to right on one spritesheet row.
    pub fn from_strip(
        name: impl Into<String>,
        x: f32,
        y: f32,
        frame_width: f32,
        frame_height: f32,
        frame_count: usize,
    ) -> Self {
        let frames = (0..frame_count)
            .map(|i| Rectangle::new(x + i as f32 * frame_width, y, frame_width, frame_height))
            .collect();
        Self::new(name, frames)
    }

    pub fn with_frame_delay(mut self, seconds: f32) -> Self {
        self.frame_delay = seconds;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn looping(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Frame playback starts from: the first, or the last when reversed.
    pub fn start_frame(&self) -> usize {
        if self.reversed {
            self.frames.len().saturating_sub(1)
        } else {
            0
        }
    }

    /// Rewind to the start frame and begin playing.
    pub fn restart(&mut self) {
        self.accumulator = 0.0;
        self.current_frame = self.start_frame();
        self.is_playing = true;
    }

    /// Source region of the current frame.
    pub fn frame_rect(&self) -> Option<Rectangle> {
        self.frames.get(self.current_frame).copied()
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
    fn test_defaults() {
        let a = Animation::new("idle", vec![Rectangle::new(0.0, 0.0, 8.0, 8.0)]);
        assert!(approx_eq(a.frame_delay, 0.5));
        assert!(approx_eq(a.speed, 1.0));
        assert!(!a.looped);
        assert!(!a.reversed);
        assert!(!a.is_playing);
    }

    #[test]
    fn test_from_strip() {
        let a = Animation::from_strip("Acid", 0.0, 0.0, 64.0, 64.0, 5);
        assert_eq!(a.frames.len(), 5);
        assert_eq!(a.frames[4], Rectangle::new(256.0, 0.0, 64.0, 64.0));
    }

    #[test]
    fn test_restart_picks_end_by_direction() {
        let mut a = Animation::from_strip("walk", 0.0, 0.0, 16.0, 16.0, 3);
        a.accumulator = 0.3;
        a.current_frame = 1;
        a.restart();
        assert_eq!(a.current_frame, 0);
        assert!(approx_eq(a.accumulator, 0.0));
        assert!(a.is_playing);

        let mut r = a.clone().reversed(true);
        r.restart();
        assert_eq!(r.current_frame, 2);
        assert_eq!(r.frame_rect(), Some(Rectangle::new(32.0, 0.0, 16.0, 16.0)));
    }

    #[test]
    fn test_deserialize_fills_defaults_and_skips_state() {
        let json = r#"{
            "name": "blink",
            "loop": true,
            "frames": [{"x": 0.0, "y": 0.0, "width": 4.0, "height": 4.0}]
        }"#;
        let a: Animation = serde_json::from_str(json).unwrap();
        assert!(a.looped);
        assert!(approx_eq(a.frame_delay, 0.5));
        assert!(approx_eq(a.speed, 1.0));
        assert_eq!(a.current_frame, 0);
        assert!(!a.is_playing);

        let back = serde_json::to_string(&a).unwrap();
        assert!(back.contains("\"loop\":true"));
        assert!(!back.contains("accumulator"));
    }
}
