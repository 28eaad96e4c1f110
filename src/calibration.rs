use crate::buffer::SampleBuffer;
use crate::types::Point;

/// Lifecycle of a calibration session.
/// `Idle` covers both a fresh session and the gap where the center is
/// finalized but the angle baseline is still accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Calibrating,
    Ready,
}

/// One calibration cycle: accumulates pupil positions into a center-point
/// baseline, then angle samples into an average-angle baseline. Created
/// fresh per reset rather than living as ambient mutable state, so the
/// classifier always works against an explicit session handle.
pub struct CalibrationSession {
    window: usize,
    calibrating: bool,
    generation: u64,
    positions: SampleBuffer<Point>,
    angles: SampleBuffer<f32>,
    center: Option<Point>,
    average_angle: Option<f32>,
}

impl CalibrationSession {
    /// `frames_per_second` sizes the rolling calibration window (~2 seconds).
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            window: (frames_per_second * 2) as usize,
            calibrating: false,
            generation: 0,
            positions: SampleBuffer::new(),
            angles: SampleBuffer::new(),
            center: None,
            average_angle: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.calibrating {
            SessionState::Calibrating
        } else if self.average_angle.is_some() {
            SessionState::Ready
        } else {
            SessionState::Idle
        }
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibrating
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    pub fn average_angle(&self) -> Option<f32> {
        self.average_angle
    }

    /// Bumped on every reset; lets callers detect that a session was torn
    /// down underneath an in-flight classification and discard its result.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Adopts a center baseline saved by a previous session. The angle
    /// baseline is runtime-only and still has to be re-collected.
    pub fn restore_center(&mut self, center: Point) {
        self.center = Some(center);
    }

    /// Discards both baselines and all buffered samples and starts a new
    /// calibration cycle.
    pub fn reset(&mut self) {
        self.center = None;
        self.average_angle = None;
        self.positions.clear();
        self.angles.clear();
        self.calibrating = true;
        self.generation += 1;
    }

    /// Feeds one pupil position into the calibration window. Returns the
    /// finalized center point on the call that fills the window; the caller
    /// owns persistence and cue emission.
    pub fn observe_position(&mut self, point: Point) -> Option<Point> {
        if !self.calibrating {
            return None;
        }

        self.positions.insert(point);
        if !self.positions.is_full(self.window) {
            return None;
        }

        let center = self.positions.finalize_average();
        self.center = Some(center);
        self.calibrating = false;
        Some(center)
    }

    /// Feeds one angle sample. Angle samples are meaningless before the
    /// center baseline exists, and the average is computed exactly once;
    /// anything outside that window is ignored.
    pub fn observe_angle(&mut self, angle: f32) -> Option<f32> {
        if self.center.is_none() || self.average_angle.is_some() {
            return None;
        }

        self.angles.insert(angle);
        if !self.angles.is_full(self.window) {
            return None;
        }

        let average = self.angles.finalize_average();
        self.average_angle = Some(average);
        Some(average)
    }

    #[cfg(test)]
    pub(crate) fn angle_sample_count(&self) -> usize {
        self.angles.len()
    }
}
