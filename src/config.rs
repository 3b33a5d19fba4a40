//! Game tuning configuration
//!
//! All gameplay-affecting numeric knobs live here. The values are fixed
//! for the lifetime of a run; nothing in the simulation mutates them.

use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Read-only tuning knobs for the simulation.
///
/// `Default` carries the shipped game balance; a JSON file can override
/// any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Input mapping ===
    /// Device tilt (radians) that maps to full control deflection
    pub device_rotation_limit: f32,

    // === Spawn / despawn ranges ===
    /// Inner edge of the asteroid spawn band, from the camera
    pub min_spawn_range: f32,
    /// Width of the spawn band beyond `min_spawn_range`
    pub spawn_space_range: f32,
    /// Per-axis offset from the camera past which entities despawn
    pub killing_range: f32,

    // === Positional audio ===
    /// Distance within which collision sounds play at full volume
    pub clear_hearing_range: f32,
    /// Width of the linear falloff band past the clear range
    pub decaying_hearing_space_range: f32,

    // === Player ship ===
    pub player_max_velocity: f32,
    pub player_max_acceleration: f32,
    pub player_radius: f32,
    /// Number of motion-trail ghost images behind the ship
    pub trail_count: u32,
    /// Spacing of trail ghosts along the velocity vector, at full speed
    pub trail_offset: f32,
    pub trail_scale_factor: f32,
    pub trail_alpha_factor: f32,

    // === Rockets ===
    pub rocket_max_velocity: f32,
    pub rocket_max_acceleration: f32,
    /// Seconds between shots
    pub rocket_fire_cooldown: f32,
    pub rocket_radius: f32,

    // === Asteroids ===
    /// Fixed population of the asteroid field
    pub asteroid_limit: usize,
    pub asteroid_max_velocity: f32,
    pub asteroid_radius: f32,
    /// Number of distinct asteroid sprite variants the renderer provides
    pub asteroid_variants: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_rotation_limit: PI / 8.0,

            min_spawn_range: 1100.0,
            spawn_space_range: 400.0,
            killing_range: 1500.0,

            clear_hearing_range: 300.0,
            decaying_hearing_space_range: 400.0,

            player_max_velocity: 100.0,
            player_max_acceleration: 75.0,
            player_radius: 40.0,
            trail_count: 4,
            trail_offset: 50.0,
            trail_scale_factor: 0.5,
            trail_alpha_factor: 0.25,

            rocket_max_velocity: 300.0,
            rocket_max_acceleration: 500.0,
            rocket_fire_cooldown: 2.0,
            rocket_radius: 5.0,

            asteroid_limit: 100,
            asteroid_max_velocity: 80.0,
            asteroid_radius: 45.0,
            asteroid_variants: 4,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults on a
    /// missing or malformed file.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(error) => {
                    log::warn!("malformed config {}: {error}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(error) => {
                log::warn!("cannot read config {}: {error}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged, not returned.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(error) = fs::write(path, json) {
                    log::warn!("cannot write config {}: {error}", path.display());
                }
            }
            Err(error) => log::warn!("cannot serialize config: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = Config::default();
        assert!(config.min_spawn_range > 0.0);
        assert!(config.killing_range > config.min_spawn_range);
        assert!(config.asteroid_limit > 0);
        assert!(config.rocket_fire_cooldown > 0.0);
        assert!(config.device_rotation_limit > 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.asteroid_limit, config.asteroid_limit);
        assert_eq!(back.rocket_max_velocity, config.rocket_max_velocity);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"asteroid_limit": 7}"#).unwrap();
        assert_eq!(config.asteroid_limit, 7);
        assert_eq!(config.killing_range, Config::default().killing_range);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = Config::load(Path::new("/nonexistent/astro-drift.json"));
        assert_eq!(config.asteroid_limit, Config::default().asteroid_limit);
    }
}
