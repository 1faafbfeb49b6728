use crate::marker::MarkerDetection;
use crate::pose::Pose;
use crate::track::TrackedMarker;
use crate::velocity::VelocityWindow;

use nalgebra as na;

/// Corner-velocity axis values above this are treated as detector jitter
/// and the whole sample is discarded. The gate is one-sided: a marker
/// moving fast in the negative direction is never flagged.
pub const MAX_CORNER_SPEED: f32 = 40.0;

/// Consecutive undetected frames after which a marker is dropped for good.
pub const MAX_FRAMES_UNSEEN: u32 = 100;

/// Registry entry for one marker id: its current (observed or predicted)
/// corners, the velocity estimate and the detection bookkeeping.
#[derive(Debug, Clone)]
pub struct MarkerEntry {
    pub id: i32,
    pub vertices: [na::Point2<f32>; 4],
    pub velocity: VelocityWindow,
    pub pose: Option<Pose>,
    pub seen: bool,
    pub frames_unseen: u32,
}

impl MarkerEntry {
    pub fn new(det: &MarkerDetection) -> Self {
        Self {
            id: det.id,
            vertices: det.corner_points(),
            velocity: VelocityWindow::new(),
            pose: Some(det.pose()),
            seen: true,
            frames_unseen: 0,
        }
    }

    /// Folds a fresh detection into the entry. The raw velocity sample is
    /// the per-corner delta against the current vertices; a sample with any
    /// axis above `MAX_CORNER_SPEED` is discarded and the smoothed estimate
    /// keeps its previous value.
    pub fn observe(&mut self, det: &MarkerDetection) {
        let corners = det.corner_points();

        let mut sample = [na::Vector2::zeros(); 4];
        let mut shaky = false;

        for (slot, (corner, vertex)) in sample
            .iter_mut()
            .zip(corners.iter().zip(self.vertices.iter()))
        {
            let v = corner - vertex;

            if v.x > MAX_CORNER_SPEED || v.y > MAX_CORNER_SPEED {
                shaky = true;
                break;
            }

            *slot = v;
        }

        if !shaky {
            self.velocity.push(sample);
        }

        self.vertices = corners;
        self.pose = Some(det.pose());
        self.seen = true;
        self.frames_unseen = 0;
    }

    /// Advances the entry one frame without a detection: corners follow the
    /// smoothed velocity and the sample history is dropped. The stored pose
    /// is invalidated, the consumer re-estimates it from the predicted
    /// corners.
    pub fn extrapolate(&mut self) {
        self.frames_unseen += 1;

        for (vertex, v) in self.vertices.iter_mut().zip(self.velocity.average()) {
            *vertex += *v;
        }

        self.velocity.clear();
        self.pose = None;
    }
}

impl From<&MarkerEntry> for TrackedMarker {
    fn from(e: &MarkerEntry) -> TrackedMarker {
        TrackedMarker {
            id: e.id,
            vertices: e.vertices,
            velocity: *e.velocity.average(),
            frames_unseen: e.frames_unseen,
            pose: e.pose,
        }
    }
}
