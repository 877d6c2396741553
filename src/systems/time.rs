//! Frame clock update.
//!
//! Advances the driver's [`WorldTime`](crate::resources::worldtime::WorldTime)
//! once per frame, applying `time_scale` to the provided delta.

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds and count the frame.
///
/// `dt` is the unscaled frame delta in seconds. Negative values are treated
/// as zero.
pub fn update_world_time(time: &mut WorldTime, dt: f32) {
    let scaled_dt = dt.max(0.0) * time.time_scale;
    time.elapsed += scaled_dt;
    time.delta = scaled_dt;
    time.frame_count += 1;
}
