use crate::circular_queue::CircularQueue;
use nalgebra as na;

/// Number of raw velocity samples kept for smoothing.
pub const WINDOW: usize = 50;

/// One velocity value per marker corner, in pixels/frame.
pub type CornerVelocities = [na::Vector2<f32>; 4];

/// Bounded moving average over per-corner velocity samples.
#[derive(Debug, Clone)]
pub struct VelocityWindow {
    average: CornerVelocities,
    history: CircularQueue<CornerVelocities>,
}

impl VelocityWindow {
    pub fn new() -> Self {
        Self {
            average: [na::Vector2::zeros(); 4],
            history: CircularQueue::with_capacity(WINDOW),
        }
    }

    /// Appends a raw sample, evicting the oldest one once the window is
    /// full, and recomputes the per-corner mean.
    pub fn push(&mut self, sample: CornerVelocities) {
        self.history.push(sample);

        let n = self.history.len() as f32;
        let mut sums = [na::Vector2::zeros(); 4];

        for sample in self.history.iter() {
            for (sum, v) in sums.iter_mut().zip(sample.iter()) {
                *sum += *v;
            }
        }

        for (avg, sum) in self.average.iter_mut().zip(sums) {
            *avg = sum / n;
        }
    }

    /// Drops the sample history without touching the average. Predicted
    /// corner positions never feed back into the estimate, so a marker
    /// keeps moving with its last confirmed velocity while occluded.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    #[inline]
    pub fn average(&self) -> &CornerVelocities {
        &self.average
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for VelocityWindow {
    fn default() -> Self {
        Self::new()
    }
}
