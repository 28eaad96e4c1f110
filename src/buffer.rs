use crate::types::Point;

/// A sample type that can be averaged component-wise.
pub trait Sample: Copy {
    fn mean(samples: &[Self]) -> Self;
}

impl Sample for f32 {
    fn mean(samples: &[Self]) -> Self {
        let sum: f32 = samples.iter().sum();
        sum / samples.len() as f32
    }
}

impl Sample for Point {
    fn mean(samples: &[Self]) -> Self {
        let n = samples.len() as f32;
        let sx: f32 = samples.iter().map(|p| p.x).sum();
        let sy: f32 = samples.iter().map(|p| p.y).sum();
        Point::new(sx / n, sy / n)
    }
}

/// Bounded, time-windowed sample accumulator used for both the spatial and
/// the angular calibration baseline. Append-only until finalize: the first
/// half of the window is assumed to be unstable startup jitter and is thrown
/// away before the average is taken.
#[derive(Debug, Default)]
pub struct SampleBuffer<T: Sample> {
    samples: Vec<T>,
}

impl<T: Sample> SampleBuffer<T> {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn insert(&mut self, sample: T) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self, target: usize) -> bool {
        self.samples.len() >= target
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Drops the oldest `count / 2` samples and returns the arithmetic mean
    /// of the retained suffix. For an odd count the larger half is retained.
    /// Caller finalizes exactly once per calibration cycle, only when full.
    pub fn finalize_average(&mut self) -> T {
        let cut = self.samples.len() / 2;
        self.samples.drain(..cut);
        T::mean(&self.samples)
    }
}
