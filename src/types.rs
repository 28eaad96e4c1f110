use serde::{Deserialize, Serialize};

/// A single 2D point in frame-pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The nine discrete gaze directions (compass + center).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    /// Spoken / printed form of the direction.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Center => "center",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::TopLeft => "top left",
            Direction::TopRight => "top right",
            Direction::BottomLeft => "bottom left",
            Direction::BottomRight => "bottom right",
        }
    }
}

/// A candidate direction ranked by Euclidean distance from a reference point.
/// Transient: only lives long enough to pick the nearest candidate.
#[derive(Debug, Clone, Copy)]
pub struct DirectionDistance {
    pub direction: Direction,
    pub distance: f32,
}

/// Which way the camera faces. Front-facing capture is mirrored horizontally,
/// so inward/outward gaze swaps left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    #[default]
    Front,
    Back,
}
