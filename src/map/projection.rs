//! World-space to map-space projection
//!
//! Pure math, no state: every projected point is recomputed per frame
//! from the observer pose and the target's live position.

use glam::{Vec2, Vec3, Vec3Swizzles};

use crate::core::types::MapViewport;

/// Straight-line distance on the horizontal plane, ignoring height
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    a.xz().distance(b.xz())
}

/// Project a world position onto the map viewport
///
/// The bearing is taken on the horizontal (x, z) plane and rotated so
/// the observer's facing points up the map; the -270° offset aligns
/// world-forward with map-up under the engine's axis convention.
/// Planar distance is rounded to whole world units before the trig
/// conversion, which quantizes marker motion on the map. Each axis is
/// scaled by `(viewport size / range) / 2` independently, so
/// non-square viewports stretch rather than crop.
///
/// No clamping: targets beyond `range` project outside the viewport
/// rectangle and are the draw sink's clip region's problem.
pub fn find_map_point(
    observer: Vec3,
    target: Vec3,
    observer_yaw_deg: f32,
    viewport: &MapViewport,
) -> Vec2 {
    let delta_x = observer.x - target.x;
    let delta_z = observer.z - target.z;
    let heading_deg = delta_x.atan2(delta_z).to_degrees() - 270.0 - observer_yaw_deg;

    let distance = planar_distance(observer, target).round();
    let heading = heading_deg.to_radians();

    let offset = Vec2::new(
        distance * heading.cos() * (viewport.width / viewport.range) / 2.0,
        distance * heading.sin() * (viewport.height / viewport.range) / 2.0,
    );
    viewport.center() + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn viewport() -> MapViewport {
        MapViewport::new(0.0, 0.0, 200.0, 200.0, 100.0).unwrap()
    }

    fn assert_close(point: Vec2, expected: Vec2) {
        assert!(
            (point - expected).length() < 1e-3,
            "expected {expected:?}, got {point:?}"
        );
    }

    #[test]
    fn test_observer_projects_to_center() {
        let observer = Vec3::new(12.5, 3.0, -40.0);
        let point = find_map_point(observer, observer, 137.0, &viewport());
        // Distance 0 zeroes both trig terms, so the center is exact
        assert_eq!(point, viewport().center());
    }

    #[test]
    fn test_target_north_of_observer() {
        // Target 50 units forward of an unrotated observer lands
        // halfway between center and the bottom viewport edge.
        let point = find_map_point(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -50.0),
            0.0,
            &viewport(),
        );
        assert_close(point, Vec2::new(100.0, 150.0));
    }

    #[test]
    fn test_target_west_of_observer() {
        let point = find_map_point(
            Vec3::ZERO,
            Vec3::new(-50.0, 0.0, 0.0),
            0.0,
            &viewport(),
        );
        assert_close(point, Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_observer_yaw_rotates_map() {
        // Same world target, observer turned 90°: the blip swings from
        // below center to the right of center.
        let point = find_map_point(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -50.0),
            90.0,
            &viewport(),
        );
        assert_close(point, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn test_height_difference_is_ignored() {
        let ground = find_map_point(Vec3::ZERO, Vec3::new(0.0, 0.0, -50.0), 0.0, &viewport());
        let rooftop = find_map_point(Vec3::ZERO, Vec3::new(0.0, 30.0, -50.0), 0.0, &viewport());
        assert_eq!(ground, rooftop);
    }

    #[test]
    fn test_distance_rounds_to_whole_units() {
        let a = find_map_point(Vec3::ZERO, Vec3::new(0.0, 0.0, -49.6), 0.0, &viewport());
        let b = find_map_point(Vec3::ZERO, Vec3::new(0.0, 0.0, -50.4), 0.0, &viewport());
        // Both round to 50 world units, so they share a map point
        assert_eq!(a, b);
        assert_close(a, Vec2::new(100.0, 150.0));
    }

    #[test]
    fn test_points_beyond_range_are_not_clamped() {
        let point = find_map_point(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -300.0),
            0.0,
            &viewport(),
        );
        // 300 units at range 100 lands well past the viewport edge
        assert!(point.y > 200.0);
    }

    #[test]
    fn test_non_square_viewport_scales_axes_independently() {
        let wide = MapViewport::new(0.0, 0.0, 400.0, 200.0, 100.0).unwrap();
        let north = find_map_point(Vec3::ZERO, Vec3::new(0.0, 0.0, -50.0), 0.0, &wide);
        let west = find_map_point(Vec3::ZERO, Vec3::new(-50.0, 0.0, 0.0), 0.0, &wide);
        assert_close(north, Vec2::new(200.0, 150.0));
        assert_close(west, Vec2::new(100.0, 100.0));
    }

    proptest! {
        #[test]
        fn test_projection_is_deterministic(
            ox in -1000.0f32..1000.0,
            oz in -1000.0f32..1000.0,
            tx in -1000.0f32..1000.0,
            tz in -1000.0f32..1000.0,
            yaw in -360.0f32..360.0,
        ) {
            let observer = Vec3::new(ox, 1.7, oz);
            let target = Vec3::new(tx, 0.0, tz);
            let first = find_map_point(observer, target, yaw, &viewport());
            let second = find_map_point(observer, target, yaw, &viewport());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_zero_distance_always_hits_center(
            x in -1000.0f32..1000.0,
            z in -1000.0f32..1000.0,
            yaw in -360.0f32..360.0,
        ) {
            let observer = Vec3::new(x, 0.0, z);
            let point = find_map_point(observer, observer, yaw, &viewport());
            prop_assert_eq!(point, viewport().center());
        }
    }
}
