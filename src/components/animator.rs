//! Animation playback component.
//!
//! An [`Animator`] owns a table of [`Animation`]s keyed by name and at most
//! one current animation, referenced by key.
//!
//! # States
//!
//! - **Idle**: no current animation.
//! - **Playing**: current animation set and `is_playing`.
//! - **Paused**: current animation set, `is_playing` cleared by [`Animator::stop`].
//!
//! [`Animator::play`] always restarts from the start frame, even when the
//! same animation is already running. Frame advance happens in
//! [`crate::systems::animation`].

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::components::animation::Animation;
use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::EntityId;
use crate::ecs::store::ComponentStore;
use crate::ecs::world::Stores;
use crate::error::{EngineError, EngineResult};
use crate::math::Rectangle;

#[derive(Debug, Clone)]
pub struct Animator {
    pub entity_id: EntityId,
    pub enabled: bool,
    animations: FxHashMap<String, Animation>,
    current: Option<String>,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            entity_id: EntityId::NULL,
            enabled: true,
            animations: FxHashMap::default(),
            current: None,
        }
    }

    /// Add `animation` to the table, replacing any animation with the same
    /// name. Replacing the current animation leaves it current but stopped.
    ///
    /// # Errors
    ///
    /// [`EngineError::AnimationData`] if the animation has no frames.
    pub fn add_animation(&mut self, animation: Animation) -> EngineResult<()> {
        if animation.frames.is_empty() {
            return Err(EngineError::AnimationData(format!(
                "animation '{}' has no frames",
                animation.name
            )));
        }
        self.animations.insert(animation.name.clone(), animation);
        Ok(())
    }

    /// Builder form of [`Animator::add_animation`].
    pub fn with_animation(mut self, animation: Animation) -> EngineResult<Self> {
        self.add_animation(animation)?;
        Ok(self)
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn animation_names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    /// Start `name` from its start frame. Unknown names are ignored and leave
    /// the current animation as it was.
    pub fn play(&mut self, name: &str) {
        let Some(animation) = self.animations.get_mut(name) else {
            warn!("Animation '{}' not found, ignoring play request", name);
            return;
        };
        animation.restart();
        debug!("Playing animation '{}' on entity {}", name, self.entity_id);
        if self.current.as_deref() != Some(name) {
            self.current = Some(name.to_string());
        }
    }

    /// Pause the current animation, keeping its frame and accumulator.
    pub fn stop(&mut self) {
        if let Some(animation) = self.current_mut() {
            animation.is_playing = false;
        }
    }

    /// Continue the current animation from where it was stopped.
    pub fn resume(&mut self) {
        if let Some(animation) = self.current_mut() {
            animation.is_playing = true;
        }
    }

    pub fn is_something_playing(&self) -> bool {
        self.current().is_some_and(|animation| animation.is_playing)
    }

    pub fn current(&self) -> Option<&Animation> {
        self.current
            .as_deref()
            .and_then(|name| self.animations.get(name))
    }

    pub fn current_mut(&mut self) -> Option<&mut Animation> {
        self.current
            .as_deref()
            .and_then(|name| self.animations.get_mut(name))
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Source region the sprite should show while an animation is current.
    pub fn current_frame_rect(&self) -> Option<Rectangle> {
        self.current().and_then(Animation::frame_rect)
    }

    /// Drop the current animation, going back to Idle.
    pub fn clear_current(&mut self) {
        if let Some(animation) = self.current_mut() {
            animation.is_playing = false;
        }
        self.current = None;
    }

    /// Add every animation from a JSON array of animation definitions.
    /// Returns how many were loaded. Nothing is added if any entry is invalid.
    ///
    /// ```json
    /// [{ "name": "Acid", "speed": 2.0, "loop": true,
    ///    "frames": [{ "x": 0, "y": 0, "width": 64, "height": 64 }] }]
    /// ```
    pub fn load_animations_json(&mut self, json: &str) -> EngineResult<usize> {
        let animations: Vec<Animation> = serde_json::from_str(json)?;
        if let Some(empty) = animations.iter().find(|a| a.frames.is_empty()) {
            return Err(EngineError::AnimationData(format!(
                "animation '{}' has no frames",
                empty.name
            )));
        }
        let count = animations.len();
        for animation in animations {
            self.add_animation(animation)?;
        }
        Ok(count)
    }

    /// The animation table as a JSON array sorted by name.
    pub fn animations_to_json(&self) -> EngineResult<String> {
        let mut animations: Vec<&Animation> = self.animations.values().collect();
        animations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(serde_json::to_string_pretty(&animations)?)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Animator {
    const KIND: ComponentKind = ComponentKind::Animator;

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
        &stores.animators
    }

    fn store_mut(stores: &mut Stores) -> &mut ComponentStore<Self> {
        &mut stores.animators
    }
}
