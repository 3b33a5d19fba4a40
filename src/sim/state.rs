//! Entities and world state
//!
//! Everything the simulation owns lives here: the player ship, the
//! fixed-capacity asteroid field, in-flight rockets, and the collision
//! events emitted for the current tick.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

use glam::Vec2;
use serde::Serialize;

use super::alpha::DynamicAlpha;
use crate::config::Config;
use crate::render::{Canvas, Sprite};
use crate::rng::GameRng;

/// Rocket body color (ARGB)
const ROCKET_COLOR: u32 = 0xFFFF_0800;

/// Rocket blink oscillator parameters
const ROCKET_ALPHA_BRIGHT: f32 = 0.9;
const ROCKET_ALPHA_DIM: f32 = 0.25;
const ROCKET_BLINK_PHASE: f32 = 0.3;

/// Collision loudness class; the audio collaborator picks the sample by
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Small,
    Large,
}

/// A collision that happened this tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameEvent {
    /// Contact point relative to the camera
    pub contact: Vec2,
    pub severity: Severity,
}

impl GameEvent {
    /// Positional audio gain at the listener (the camera): full volume
    /// inside the clear hearing range, linear falloff across the decay
    /// band, silent beyond. A NaN distance yields silence.
    pub fn gain(&self, config: &Config) -> f32 {
        let distance = self.contact.length();
        if distance < config.clear_hearing_range {
            1.0
        } else if distance < config.clear_hearing_range + config.decaying_hearing_space_range {
            (config.clear_hearing_range + config.decaying_hearing_space_range - distance)
                / config.decaying_hearing_space_range
        } else {
            0.0
        }
    }
}

/// The player's ship. Exactly one exists; it persists after death (the
/// wreck keeps drifting and the camera stays with it).
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    alive: bool,
}

impl PlayerShip {
    pub fn new(config: &Config) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: config.player_radius,
            alive: true,
        }
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Integrate one tick of tilt-driven motion. Runs dead or alive; the
    /// ship never despawns and only collisions stop it.
    pub fn update(&mut self, tilt: Vec2, dt: f32, config: &Config) {
        let acceleration = tilt.clamp_length_max(1.0) * config.player_max_acceleration;
        self.velocity =
            (self.velocity + acceleration * dt).clamp_length_max(config.player_max_velocity);
        self.position += self.velocity * dt;
    }

    /// Draw the motion trail farthest ghost first, then the hull.
    pub fn draw(&self, canvas: &mut dyn Canvas, config: &Config) {
        if !self.alive {
            return;
        }

        for i in (0..config.trail_count).rev() {
            let offset =
                self.velocity * (config.trail_offset / config.player_max_velocity * i as f32);
            let scale = 1.0 + config.trail_scale_factor * i as f32;
            let alpha = if i != 0 {
                config.trail_alpha_factor / i as f32
            } else {
                1.0
            };
            canvas.draw_sprite(Sprite::Ship, self.position - offset, scale, 0.0, alpha);
        }
    }
}

/// One asteroid slot. Slots are never deallocated; a dead asteroid is
/// overwritten in place by the next spawn.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Rotation of the sprite, wrapped to [0, 2π)
    pub angular_position: f32,
    pub angular_velocity: f32,
    pub radius: f32,
    /// Which asteroid image the renderer shows
    pub variant: u32,
    alive: bool,
}

impl Asteroid {
    /// An inert slot; `spawn` brings it to life.
    pub fn dormant() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angular_position: 0.0,
            angular_velocity: 0.0,
            radius: 0.0,
            variant: 0,
            alive: false,
        }
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// (Re)initialize this slot at `position`, drifting loosely toward
    /// the camera with a randomized speed, heading and spin.
    pub fn spawn(&mut self, position: Vec2, camera: Vec2, config: &Config, rng: &mut GameRng) {
        let speed = config.asteroid_max_velocity
            - (rng.gaussian_clamped(3.0) * config.asteroid_max_velocity / 3.0).abs();
        let heading = (camera - position).to_angle() + rng.gaussian_clamped(3.0) * FRAC_PI_3;

        self.position = position;
        self.velocity = crate::polar_to_cartesian(speed, heading);
        self.angular_velocity = rng.gaussian_clamped(8.0) * FRAC_PI_2;
        self.angular_position = rng.angle();
        self.radius = config.asteroid_radius;
        self.variant = rng.integer_in(0..config.asteroid_variants.max(1));
        self.alive = true;
    }

    /// Integrate one tick; culls itself once it leaves the kill range
    /// around the camera. The world recycles dead slots in its cleanup
    /// pass, not here.
    pub fn update(&mut self, dt: f32, camera: Vec2, config: &Config) {
        if !self.alive {
            return;
        }

        self.position += self.velocity * dt;
        self.angular_position =
            (self.angular_position + self.angular_velocity * dt).rem_euclid(TAU);

        let relative = self.position - camera;
        if relative.x.abs() > config.killing_range || relative.y.abs() > config.killing_range {
            self.alive = false;
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.alive || !canvas.visible(self.position, self.radius) {
            return;
        }
        canvas.draw_sprite(
            Sprite::Asteroid(self.variant),
            self.position,
            1.0,
            self.angular_position,
            1.0,
        );
    }
}

/// A fired rocket: homes on the tap point until it has flown the original
/// tap distance, then coasts ballistically.
#[derive(Debug, Clone)]
pub struct Rocket {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub initial_position: Vec2,
    pub target_position: Vec2,
    /// Squared launch-to-target distance; traveling past it ends homing
    pub homing_horizon_sq: f32,
    pub radius: f32,
    homing: bool,
    alpha: DynamicAlpha,
    alive: bool,
}

impl Rocket {
    /// Launch from the player toward `target` (world coordinates),
    /// inheriting the ship's heading. A ship at rest fires straight at
    /// the target.
    pub fn fire(player: &PlayerShip, target: Vec2, config: &Config) -> Self {
        let mut heading = player.velocity.normalize_or_zero();
        if heading == Vec2::ZERO {
            heading = (target - player.position).normalize_or(Vec2::X);
        }

        Self {
            position: player.position,
            velocity: heading * config.rocket_max_velocity,
            acceleration: Vec2::ZERO,
            initial_position: player.position,
            target_position: target,
            homing_horizon_sq: target.distance_squared(player.position),
            radius: config.rocket_radius,
            homing: true,
            alpha: DynamicAlpha::new(ROCKET_ALPHA_BRIGHT, ROCKET_ALPHA_DIM, ROCKET_BLINK_PHASE),
            alive: true,
        }
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Whether the rocket is still steering toward its target.
    pub fn homing(&self) -> bool {
        self.homing
    }

    pub fn update(&mut self, dt: f32, camera: Vec2, config: &Config) {
        if !self.alive {
            return;
        }

        self.alpha.update(dt);

        if self.homing {
            self.acceleration = (self.target_position - self.position).normalize_or_zero()
                * config.rocket_max_acceleration;

            // Checked after steering: the crossing tick still homes, the
            // flip takes effect from the next tick and never reverts.
            if self.position.distance_squared(self.initial_position) > self.homing_horizon_sq {
                self.homing = false;
            }
        } else {
            self.acceleration =
                self.velocity.normalize_or_zero() * config.rocket_max_acceleration;
        }

        self.velocity = (self.velocity + self.acceleration * dt)
            .clamp_length_max(config.rocket_max_velocity);
        self.position += self.velocity * dt;

        let relative = self.position - camera;
        if relative.x.abs() > config.killing_range || relative.y.abs() > config.killing_range {
            self.alive = false;
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.alive || !canvas.visible(self.position, self.radius) {
            return;
        }
        canvas.draw_circle(self.radius, self.position, self.alpha.get(), ROCKET_COLOR);
    }
}

/// The simulation world: one ship, a fixed field of asteroid slots, and
/// whatever rockets are in flight.
#[derive(Debug, Clone)]
pub struct World {
    pub config: Config,
    pub player: PlayerShip,
    pub asteroids: Vec<Asteroid>,
    pub rockets: Vec<Rocket>,
    /// Seconds until the next rocket may fire
    pub fire_cooldown: f32,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: GameRng,
}

impl World {
    /// Spawn/despawn, kill-range and audio-distance calculations are all
    /// relative to this point.
    pub fn camera_position(&self) -> Vec2 {
        self.player.position
    }

    /// Collisions that happened during the last `update`.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Render order: player (trail then hull), asteroids, rockets.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.player.draw(canvas, &self.config);
        for asteroid in &self.asteroids {
            asteroid.draw(canvas);
        }
        for rocket in &self.rockets {
            rocket.draw(canvas);
        }
    }
}
