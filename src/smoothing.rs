use crate::types::Point;

// =========================================================================
// Smoothing Helper (Exponential Moving Average)
// =========================================================================
// Raw pupil detections jitter frame to frame; callers run each sample
// through this filter before feeding calibration or classification.
pub struct PointSmoother {
    x: f32,
    y: f32,
    alpha: f32,
    initialized: bool,
}

impl PointSmoother {
    pub fn new(alpha: f32) -> Self {
        Self { x: 0.0, y: 0.0, alpha, initialized: false }
    }

    pub fn filter(&mut self, point: Point) -> Point {
        if !self.initialized {
            self.x = point.x;
            self.y = point.y;
            self.initialized = true;
            return point;
        }
        self.x = self.alpha * point.x + (1.0 - self.alpha) * self.x;
        self.y = self.alpha * point.y + (1.0 - self.alpha) * self.y;
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_passes_through() {
        let mut smoother = PointSmoother::new(0.4);
        assert_eq!(smoother.filter(Point::new(10.0, 20.0)), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_ema_pulls_toward_new_sample() {
        let mut smoother = PointSmoother::new(0.5);
        smoother.filter(Point::new(0.0, 0.0));
        let p = smoother.filter(Point::new(10.0, 10.0));
        assert_eq!(p, Point::new(5.0, 5.0));
        let p = smoother.filter(Point::new(10.0, 10.0));
        assert_eq!(p, Point::new(7.5, 7.5));
    }
}
