/// Absolute distance between two scalar coordinates.
pub fn distance(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

/// Euclidean hypotenuse of two legs.
pub fn hypotenuse(opposite: f32, adjacent: f32) -> f32 {
    (opposite * opposite + adjacent * adjacent).sqrt()
}

/// Angle in degrees from the tangent of opposite over adjacent.
/// A zero adjacent leg degenerates to a vertical 90 degrees,
/// which atan handles for us (atan(inf) = pi/2).
pub fn angle_tangent(opposite: f32, adjacent: f32) -> f32 {
    (opposite / adjacent).atan().to_degrees()
}
