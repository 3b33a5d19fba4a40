//! Input snapshots from platform collaborators
//!
//! Sensor and touch callbacks arrive on platform threads; the simulation
//! reads them at most once per tick. A `Mailbox` is a single-slot,
//! overwrite-on-post handoff - only the latest value matters, so there is
//! no queue, no blocking and no cancellation.

use std::sync::{Mutex, PoisonError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Single-slot, latest-value-wins handoff between a callback thread and
/// the simulation driver. Share it with `Arc`.
#[derive(Debug, Default)]
pub struct Mailbox<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Replace whatever is pending with `value`.
    pub fn post(&self, value: T) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    /// Take the pending value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

/// A tap captured by the touch collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TouchSample {
    /// Tap position relative to the camera, in game units (the screen
    /// mapping already applied by the platform layer)
    pub position: Vec2,
    /// How long the pointer has been down, in seconds
    pub held_for: f32,
}

/// Raw device orientation captured by the sensor collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TiltSample {
    pub pitch: f32,
    pub roll: f32,
}

impl TiltSample {
    /// Map device orientation to the in-game control vector.
    ///
    /// Roll steers x and pitch steers y (tilting the top of the device
    /// away is negative pitch, which should push the ship up). The vector
    /// is magnitude-limited to `rotation_limit` and rescaled so each
    /// component lands in [-1, 1].
    pub fn control_vector(&self, rotation_limit: f32) -> Vec2 {
        if rotation_limit <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.roll, -self.pitch).clamp_length_max(rotation_limit) / rotation_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;
    use std::sync::Arc;

    #[test]
    fn test_mailbox_latest_wins() {
        let mailbox = Mailbox::new();
        mailbox.post(1);
        mailbox.post(2);
        assert_eq!(mailbox.take(), Some(2));
    }

    #[test]
    fn test_mailbox_take_drains() {
        let mailbox = Mailbox::new();
        mailbox.post(5);
        assert_eq!(mailbox.take(), Some(5));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_mailbox_cross_thread_post() {
        let mailbox = Arc::new(Mailbox::new());
        let poster = Arc::clone(&mailbox);
        std::thread::spawn(move || poster.post(42))
            .join()
            .unwrap();
        assert_eq!(mailbox.take(), Some(42));
    }

    #[test]
    fn test_control_vector_within_unit_bounds() {
        let limit = PI / 8.0;
        // Way past the rotation limit on both axes
        let sample = TiltSample {
            pitch: PI,
            roll: -PI,
        };
        let control = sample.control_vector(limit);
        assert!(control.length() <= 1.0 + 1e-6);
        assert!(control.x.abs() <= 1.0 + 1e-6);
        assert!(control.y.abs() <= 1.0 + 1e-6);
    }

    #[test]
    fn test_control_vector_scales_linearly_inside_limit() {
        let limit = PI / 8.0;
        let sample = TiltSample {
            pitch: 0.0,
            roll: limit / 2.0,
        };
        let control = sample.control_vector(limit);
        assert!((control.x - 0.5).abs() < 1e-6);
        assert!(control.y.abs() < 1e-6);
    }

    #[test]
    fn test_control_vector_zero_limit_is_inert() {
        let sample = TiltSample {
            pitch: 1.0,
            roll: 1.0,
        };
        assert_eq!(sample.control_vector(0.0), Vec2::ZERO);
    }
}
