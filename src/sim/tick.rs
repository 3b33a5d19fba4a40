//! Per-tick world orchestration
//!
//! Fixed update order - fire gating, motion, collision passes, cleanup -
//! so an identical seed and input sequence replays an identical run.

use glam::Vec2;

use super::collision;
use super::state::{Asteroid, GameEvent, PlayerShip, Rocket, Severity, World};
use crate::config::Config;
use crate::input::TouchSample;
use crate::rng::GameRng;

/// Input snapshot for one tick, assembled by the driving loop from the
/// platform mailboxes.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized tilt control vector, each component in [-1, 1]
    pub tilt: Vec2,
    /// Pending tap, if any (camera-relative position)
    pub touch: Option<TouchSample>,
}

impl World {
    /// Build a world with a full asteroid field already drifting around
    /// the starting ship.
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = GameRng::from_seed(seed);
        let player = PlayerShip::new(&config);
        let camera = player.position;

        let mut asteroids = vec![Asteroid::dormant(); config.asteroid_limit];
        for asteroid in &mut asteroids {
            let position = spawn_position(camera, &config, &mut rng);
            asteroid.spawn(position, camera, &config, &mut rng);
        }

        Self {
            config,
            player,
            asteroids,
            rockets: Vec::new(),
            fire_cooldown: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    /// Advance the world one tick.
    ///
    /// Sequence: fire gating, motion (player, asteroids, rockets),
    /// collision resolution, then cleanup (recycle dead asteroids, drop
    /// dead rockets).
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        let dt = dt.max(0.0);
        self.events.clear();

        // 1. Fire gating
        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
        if self.fire_cooldown <= 0.0 && self.player.alive() {
            if let Some(touch) = input.touch {
                let target = self.player.position + touch.position;
                log::debug!("rocket fired at {target:?} (held {:.2}s)", touch.held_for);
                self.rockets.push(Rocket::fire(&self.player, target, &self.config));
                self.fire_cooldown = self.config.rocket_fire_cooldown;
            }
        }

        // 2. Motion: player first (it carries the camera), then the
        // field, then rockets
        self.player.update(input.tilt, dt, &self.config);
        let camera = self.player.position;
        for asteroid in &mut self.asteroids {
            asteroid.update(dt, camera, &self.config);
        }
        for rocket in &mut self.rockets {
            rocket.update(dt, camera, &self.config);
        }

        // 3. Collisions over post-motion state
        self.resolve_collisions();

        // 4. Cleanup
        let World {
            config,
            player,
            asteroids,
            rockets,
            rng,
            ..
        } = self;
        let camera = player.position;
        for asteroid in asteroids.iter_mut() {
            if !asteroid.alive() {
                let position = spawn_position(camera, config, rng);
                asteroid.spawn(position, camera, config, rng);
            }
        }
        rockets.retain(|rocket| rocket.alive());
    }

    /// Three passes: player-asteroid, asteroid-asteroid, asteroid-rocket.
    ///
    /// Alive flags are the only coupling between passes; each pairing
    /// tests the flags as they stand when it comes up, so one contact
    /// does not shield an entity from the rest of the tick.
    pub(crate) fn resolve_collisions(&mut self) {
        let camera = self.player.position;

        if self.player.alive() {
            for index in 0..self.asteroids.len() {
                if !self.asteroids[index].alive() {
                    continue;
                }
                let hit = collision::contact(
                    self.player.position,
                    self.player.radius,
                    self.asteroids[index].position,
                    self.asteroids[index].radius,
                );
                if let Some(contact) = hit {
                    self.player.kill();
                    self.asteroids[index].kill();
                    self.events.push(GameEvent {
                        contact: contact - camera,
                        severity: Severity::Large,
                    });
                    log::debug!("player ship destroyed at {contact:?}");
                }
            }
        }

        for i in 0..self.asteroids.len() {
            if !self.asteroids[i].alive() {
                continue;
            }
            for j in (i + 1)..self.asteroids.len() {
                if !self.asteroids[j].alive() {
                    continue;
                }
                let hit = collision::contact(
                    self.asteroids[i].position,
                    self.asteroids[i].radius,
                    self.asteroids[j].position,
                    self.asteroids[j].radius,
                );
                if let Some(contact) = hit {
                    self.asteroids[i].kill();
                    self.asteroids[j].kill();
                    self.events.push(GameEvent {
                        contact: contact - camera,
                        severity: Severity::Small,
                    });
                }
            }
        }

        for i in 0..self.asteroids.len() {
            if !self.asteroids[i].alive() {
                continue;
            }
            for j in 0..self.rockets.len() {
                if !self.rockets[j].alive() {
                    continue;
                }
                let hit = collision::contact(
                    self.asteroids[i].position,
                    self.asteroids[i].radius,
                    self.rockets[j].position,
                    self.rockets[j].radius,
                );
                if let Some(contact) = hit {
                    self.asteroids[i].kill();
                    self.rockets[j].kill();
                    self.events.push(GameEvent {
                        contact: contact - camera,
                        severity: Severity::Small,
                    });
                }
            }
        }
    }
}

/// Where a fresh asteroid enters: a uniform angle around the camera, at a
/// uniform distance inside the spawn band (past the visible range, inside
/// the kill range).
fn spawn_position(camera: Vec2, config: &Config, rng: &mut GameRng) -> Vec2 {
    let radius = config.min_spawn_range + rng.linear() * config.spawn_space_range;
    camera + crate::polar_to_cartesian(radius, rng.angle())
}
