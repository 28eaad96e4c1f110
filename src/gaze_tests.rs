#[cfg(test)]
mod tests {
    use crate::gaze::{classify_direction, direction_distance, Geometry, ANGLE_MARGIN, PUPIL_RADIUS};
    use crate::types::{CameraFacing, Direction, Point};

    // =========================================================================
    // Regression Tests: Direction Classification
    // Convention: angle is measured from the frame origin (0,0), in degrees.
    // Front-facing capture is mirrored, so "inward" reads as Left on Front
    // and Right on Back.
    // =========================================================================

    fn geometry_with(angle: f32, hypotenuse: f32, hypotenuse_center: f32) -> Geometry {
        Geometry {
            distance_to_center: 0.0,
            hypotenuse_center,
            opposite: 0.0,
            adjacent: 0.0,
            hypotenuse,
            angle,
        }
    }

    #[test]
    fn test_inward_gaze_front_facing() {
        // angle 10 < average 45 -> inward; 10 < margin 30 -> top variant
        let g = geometry_with(10.0, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 45.0),
            Direction::TopLeft
        );

        // angle 40: inward but above the margin -> bottom variant
        let g = geometry_with(40.0, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 45.0),
            Direction::BottomLeft
        );
    }

    #[test]
    fn test_inward_gaze_back_facing_mirrors() {
        let g = geometry_with(10.0, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Back, 45.0),
            Direction::TopRight
        );

        let g = geometry_with(40.0, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Back, 45.0),
            Direction::BottomRight
        );
    }

    #[test]
    fn test_exact_margin_keeps_base_direction() {
        // angle == ANGLE_MARGIN matches neither refinement bound
        let g = geometry_with(ANGLE_MARGIN, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 45.0),
            Direction::Left
        );
        assert_eq!(
            classify_direction(&g, CameraFacing::Back, 45.0),
            Direction::Right
        );
    }

    #[test]
    fn test_center_band_resolves_by_hypotenuse() {
        // angle 50 vs average 45: |50-45| = 5 <= 50, so center band.
        // Pupil reach (hypotenuse + radius) shorter than the center's own
        // hypotenuse means the eye sits above its rest position.
        let g = geometry_with(50.0, 100.0, 200.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 45.0),
            Direction::Top
        );

        let g = geometry_with(50.0, 300.0, 200.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 45.0),
            Direction::Bottom
        );

        // Exact tie degenerates to Center
        let g = geometry_with(50.0, 200.0 - PUPIL_RADIUS, 200.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 45.0),
            Direction::Center
        );
    }

    #[test]
    fn test_outward_gaze() {
        // angle 80 vs average 30: not inward, |80-30| = 50 > 35 -> outward.
        // Front facing reads outward as Right; above the margin -> bottom.
        let g = geometry_with(80.0, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 30.0),
            Direction::BottomRight
        );
        assert_eq!(
            classify_direction(&g, CameraFacing::Back, 30.0),
            Direction::BottomLeft
        );
    }

    #[test]
    fn test_outward_gaze_below_margin_is_top_variant() {
        // Small average angle pushes a sub-margin angle out of the center
        // band: |25 - 8| = 17 > 8 + 5, and 25 < margin 30.
        let g = geometry_with(25.0, 100.0, 150.0);
        assert_eq!(
            classify_direction(&g, CameraFacing::Front, 8.0),
            Direction::TopRight
        );
    }

    #[test]
    fn test_geometry_derivation() {
        let g = Geometry::derive(Point::new(30.0, 40.0), Point::new(60.0, 80.0));
        assert!((g.hypotenuse - 50.0).abs() < 1e-4);
        assert!((g.hypotenuse_center - 100.0).abs() < 1e-4);
        assert!((g.distance_to_center - 50.0).abs() < 1e-4);
        assert_eq!(g.opposite, 30.0);
        assert_eq!(g.adjacent, 40.0);
        // atan(30/40) = 36.87 degrees
        assert!((g.angle - 36.8699).abs() < 1e-3);
    }

    #[test]
    fn test_direction_distance() {
        let d = direction_distance(Direction::Center, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(d.direction, Direction::Center);
        assert!((d.distance - 5.0).abs() < 1e-4);
    }
}
