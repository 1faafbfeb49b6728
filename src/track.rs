use crate::pose::Pose;
use nalgebra as na;

/// Snapshot of one live marker as emitted after an update cycle.
#[derive(Debug, Clone)]
pub struct TrackedMarker {
    pub id: i32,

    /// Current corner positions, observed or predicted, in pixels.
    pub vertices: [na::Point2<f32>; 4],

    /// Smoothed per-corner velocity, in pixels/frame.
    pub velocity: [na::Vector2<f32>; 4],

    /// Consecutive frames without a direct detection.
    pub frames_unseen: u32,

    /// Pose vectors of this frame's direct detection. `None` while the
    /// marker is predicted; its pose must then be re-estimated from
    /// `vertices`.
    pub pose: Option<Pose>,
}

impl TrackedMarker {
    #[inline]
    pub fn is_predicted(&self) -> bool {
        self.pose.is_none()
    }
}
