//! Property suites for the math primitives

use std::f32::consts::PI;

use glam::Vec2;
use proptest::prelude::*;

use astro_drift::sim::contact;
use astro_drift::{cartesian_to_polar, normalize_angle, polar_to_cartesian};

proptest! {
    #[test]
    fn normalized_vectors_are_unit_length(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
    ) {
        let v = Vec2::new(x, y);
        prop_assume!(v.length() > 1e-3);
        prop_assert!((v.normalize_or_zero().length() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn limited_vectors_respect_the_limit(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        max in 0.0f32..500.0,
    ) {
        let limited = Vec2::new(x, y).clamp_length_max(max);
        prop_assert!(limited.length() <= max + 1e-3);
    }

    #[test]
    fn limit_leaves_short_vectors_alone(
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
    ) {
        let v = Vec2::new(x, y);
        prop_assert_eq!(v.clamp_length_max(1000.0), v);
    }

    #[test]
    fn polar_round_trips(r in 0.1f32..1000.0, theta in -PI..PI) {
        let v = polar_to_cartesian(r, theta);
        let (radius, angle) = cartesian_to_polar(v);
        prop_assert!((radius - r).abs() < r * 1e-3 + 1e-3);
        prop_assert!(normalize_angle(angle - theta).abs() < 1e-3);
    }

    #[test]
    fn contact_is_symmetric(
        ax in -500.0f32..500.0,
        ay in -500.0f32..500.0,
        bx in -500.0f32..500.0,
        by in -500.0f32..500.0,
        ra in 1.0f32..100.0,
        rb in 1.0f32..100.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        match (contact(a, ra, b, rb), contact(b, rb, a, ra)) {
            (Some(p), Some(q)) => {
                prop_assert!((p - q).length() < 1e-2 * (1.0 + p.length()))
            }
            (None, None) => {}
            _ => prop_assert!(false, "hit/miss must not depend on argument order"),
        }
    }

    #[test]
    fn separated_circles_never_collide(
        ax in -500.0f32..500.0,
        ay in -500.0f32..500.0,
        ra in 1.0f32..100.0,
        rb in 1.0f32..100.0,
        margin in 0.1f32..200.0,
        theta in -PI..PI,
    ) {
        let a = Vec2::new(ax, ay);
        // Place B strictly beyond the radius sum along a random bearing
        let b = a + polar_to_cartesian(ra + rb + margin, theta);
        prop_assert!(contact(a, ra, b, rb).is_none());
    }

    #[test]
    fn overlapping_circles_always_collide(
        ax in -500.0f32..500.0,
        ay in -500.0f32..500.0,
        ra in 1.0f32..100.0,
        rb in 1.0f32..100.0,
        fraction in 0.0f32..0.9,
        theta in -PI..PI,
    ) {
        let a = Vec2::new(ax, ay);
        let b = a + polar_to_cartesian((ra + rb) * fraction, theta);
        let point = contact(a, ra, b, rb);
        prop_assert!(point.is_some());
        // The contact point sits between the centers
        let point = point.unwrap();
        prop_assert!((point - a).length() <= ra + rb + 1e-2);
        prop_assert!((point - b).length() <= ra + rb + 1e-2);
    }
}
