//! Astro Drift - deterministic simulation core for a tilt-controlled
//! asteroid dodging game.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world state)
//! - `config`: Data-driven tuning knobs
//! - `rng`: Seeded random source
//! - `input`: Thread-safe input mailboxes
//! - `render`: Draw-command interface to the presentation layer
//!
//! Platform concerns (windowing, bitmaps, sensors, audio output, frame
//! pacing) live in external collaborators: they post input snapshots into
//! the mailboxes, drive `World::update`/`World::draw` at whatever cadence
//! they measure, and turn the emitted collision events and draw commands
//! into sound and pixels.

pub mod config;
pub mod input;
pub mod render;
pub mod rng;
pub mod sim;

pub use config::Config;
pub use rng::GameRng;

use glam::Vec2;

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta), theta in (-π, π]
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
