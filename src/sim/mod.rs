//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Stable iteration order (player, asteroids, rockets)
//! - No rendering or platform dependencies beyond the `Canvas` sink

pub mod alpha;
pub mod collision;
pub mod state;
pub mod tick;

pub use alpha::DynamicAlpha;
pub use collision::contact;
pub use state::{Asteroid, GameEvent, PlayerShip, Rocket, Severity, World};
pub use tick::TickInput;
