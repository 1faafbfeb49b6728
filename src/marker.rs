use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::pose::Pose;

/// One raw detector observation: the marker id, its four corner points in
/// image-plane pixels (fixed winding order) and the estimated pose vectors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct MarkerDetection {
    pub id: i32,
    pub corners: [[f32; 2]; 4],
    #[serde(rename = "r")]
    pub rvec: [f32; 3],
    #[serde(rename = "t")]
    pub tvec: [f32; 3],
}

impl MarkerDetection {
    #[inline]
    pub fn corner_points(&self) -> [na::Point2<f32>; 4] {
        self.corners.map(|[x, y]| na::Point2::new(x, y))
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::new(na::Vector3::from(self.rvec), na::Vector3::from(self.tvec))
    }

    /// A detection carrying any non-finite component is detector garbage.
    pub fn is_finite(&self) -> bool {
        self.corners
            .iter()
            .flatten()
            .chain(self.rvec.iter())
            .chain(self.tvec.iter())
            .all(|v| v.is_finite())
    }

    /// Area of the axis-aligned bounding rectangle of the corner quad.
    pub fn bounding_area(&self) -> f32 {
        let mut min = self.corners[0];
        let mut max = self.corners[0];

        for c in &self.corners[1..] {
            min[0] = min[0].min(c[0]);
            min[1] = min[1].min(c[1]);
            max[0] = max[0].max(c[0]);
            max[1] = max[1].max(c[1]);
        }

        (max[0] - min[0]) * (max[1] - min[1])
    }
}
