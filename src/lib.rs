//! Gaze calibration and direction classification for assistive input.
//!
//! A short calibration phase establishes a personal center point and a
//! baseline gaze angle from tracked pupil positions; after that, each pupil
//! sample is classified into one of nine discrete directions (compass +
//! center) with debounced, single-in-flight dispatch. Detection, capture,
//! and rendering live outside this crate; it only consumes pupil points.

pub mod args;
pub mod buffer;
pub mod calibration;
pub mod config;
pub mod dispatch;
pub mod gaze;
pub mod profile;
pub mod smoothing;
pub mod speech;
pub mod trig;
pub mod types;

#[cfg(test)]
mod gaze_tests;
