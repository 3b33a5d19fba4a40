//! Circle-circle collision detection
//!
//! Two-phase test: a cheap per-axis bounding check, then an exact
//! squared-distance comparison. No square roots on the hot path.

use glam::Vec2;

/// Test two circles for overlap, returning the contact point if they
/// touch.
///
/// The contact point lies on the segment between the centers, `radius_b`
/// away from `position_b`, which makes the result symmetric under
/// swapping the arguments.
pub fn contact(position_a: Vec2, radius_a: f32, position_b: Vec2, radius_b: f32) -> Option<Vec2> {
    let delta = position_a - position_b;
    let radius_sum = radius_a + radius_b;

    // Bounding phase: centers at least a radius sum apart on either axis
    // cannot overlap.
    if delta.x.abs() >= radius_sum || delta.y.abs() >= radius_sum {
        return None;
    }

    if delta.length_squared() >= radius_sum * radius_sum {
        return None;
    }

    Some(position_b + delta * (radius_b / radius_sum))
}
