use nalgebra as na;
use num_traits::Float;

use crate::calibration::CameraIntrinsics;
use crate::error::Error;

/// Rotation and translation vectors as handed over by the marker detector:
/// axis-angle rotation, camera-space translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub rvec: na::Vector3<f32>,
    pub tvec: na::Vector3<f32>,
}

impl Pose {
    #[inline]
    pub fn new(rvec: na::Vector3<f32>, tvec: na::Vector3<f32>) -> Self {
        Self { rvec, tvec }
    }

    pub fn from_slices(rvec: &[f32], tvec: &[f32]) -> Result<Self, Error> {
        if rvec.len() != 3 || tvec.len() != 3 {
            return Err(Error::InvalidPoseInput(
                "rotation and translation must be 3-vectors",
            ));
        }

        Ok(Self::new(
            na::Vector3::new(rvec[0], rvec[1], rvec[2]),
            na::Vector3::new(tvec[0], tvec[1], tvec[2]),
        ))
    }

    /// Flips the signs that differ between the detector's camera frame and
    /// the renderer's convention: y and z of the translation, y of the
    /// rotation.
    pub fn corrected(&self) -> Pose {
        Pose {
            rvec: na::Vector3::new(self.rvec.x, -self.rvec.y, self.rvec.z),
            tvec: na::Vector3::new(self.tvec.x, -self.tvec.y, -self.tvec.z),
        }
    }

    /// Expands the axis-angle rotation and composes the 4x4 model-view
    /// matrix for the renderer.
    pub fn model_view(&self) -> Result<na::Matrix4<f32>, Error> {
        let rot = na::Rotation3::from_scaled_axis(self.rvec);

        compose(rot.matrix(), &self.tvec)
    }
}

/// Builds the homogeneous transform from a rotation matrix and a
/// translation: rotation in the upper-left 3x3 block, translation in the
/// rightmost column, `[0, 0, 0, 1]` as the last row.
pub fn compose<T: na::RealField + Float>(
    rot: &na::Matrix3<T>,
    t: &na::Vector3<T>,
) -> Result<na::Matrix4<T>, Error> {
    if rot.iter().chain(t.iter()).any(|v| !Float::is_finite(*v)) {
        return Err(Error::InvalidPoseInput(
            "non-finite rotation or translation",
        ));
    }

    Ok(na::Matrix4::new(
        rot[(0, 0)], rot[(0, 1)], rot[(0, 2)], t.x,
        rot[(1, 0)], rot[(1, 1)], rot[(1, 2)], t.y,
        rot[(2, 0)], rot[(2, 1)], rot[(2, 2)], t.z,
        T::zero(), T::zero(), T::zero(), T::one(),
    ))
}

/// Perspective projection matrix matching the camera intrinsics, for
/// overlaying geometry onto the video frame.
pub fn projection(intr: &CameraIntrinsics, near: f32, far: f32) -> na::Matrix4<f32> {
    na::Matrix4::new(
        intr.fx / intr.cx, 0.0, 0.0, 0.0,
        0.0, intr.fy / intr.cy, 0.0, 0.0,
        0.0, 0.0, -(far + near) / (far - near), -2.0 * far * near / (far - near),
        0.0, 0.0, -1.0, 0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_places_blocks() {
        let rot = na::Matrix3::new(
            0.0, -1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let t = na::Vector3::new(4.0, 5.0, 6.0);

        let m = compose(&rot, &t).unwrap();

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], rot[(i, j)]);
            }
            assert_eq!(m[(i, 3)], t[i]);
            assert_eq!(m[(3, i)], 0.0);
        }
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn compose_rejects_non_finite_input() {
        let rot = na::Matrix3::identity();
        let t = na::Vector3::new(0.0, f32::NAN, 0.0);

        assert!(matches!(
            compose(&rot, &t),
            Err(Error::InvalidPoseInput(_))
        ));
    }

    #[test]
    fn from_slices_rejects_wrong_shapes() {
        assert!(matches!(
            Pose::from_slices(&[0.0, 0.0], &[0.0, 0.0, 0.0]),
            Err(Error::InvalidPoseInput(_))
        ));
        assert!(matches!(
            Pose::from_slices(&[0.0, 0.0, 0.0], &[0.0; 4]),
            Err(Error::InvalidPoseInput(_))
        ));
        assert!(Pose::from_slices(&[0.0; 3], &[0.0; 3]).is_ok());
    }

    #[test]
    fn corrected_flips_y_and_z() {
        let pose = Pose::new(
            na::Vector3::new(0.1, 0.2, 0.3),
            na::Vector3::new(1.0, 2.0, 3.0),
        );

        let fixed = pose.corrected();

        assert_eq!(fixed.rvec, na::Vector3::new(0.1, -0.2, 0.3));
        assert_eq!(fixed.tvec, na::Vector3::new(1.0, -2.0, -3.0));
    }

    #[test]
    fn correction_is_an_involution() {
        let pose = Pose::new(
            na::Vector3::new(0.4, -0.5, 0.6),
            na::Vector3::new(-1.0, 2.0, -3.0),
        );

        assert_eq!(pose.corrected().corrected(), pose);
    }

    #[test]
    fn model_view_of_zero_rotation_is_translation() {
        let pose = Pose::new(na::Vector3::zeros(), na::Vector3::new(1.0, 2.0, 3.0));

        let m = pose.model_view().unwrap();

        let eps = 1e-6;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m[(i, j)] - expected).abs() < eps);
            }
        }
        assert!((m[(0, 3)] - 1.0).abs() < eps);
        assert!((m[(1, 3)] - 2.0).abs() < eps);
        assert!((m[(2, 3)] - 3.0).abs() < eps);
    }

    #[test]
    fn model_view_rejects_non_finite_pose() {
        let pose = Pose::new(
            na::Vector3::new(f32::NAN, 0.0, 0.0),
            na::Vector3::zeros(),
        );

        assert!(pose.model_view().is_err());
    }

    #[test]
    fn projection_from_intrinsics() {
        let intr = CameraIntrinsics {
            fx: 800.0,
            fy: 600.0,
            cx: 400.0,
            cy: 300.0,
            distortion: vec![],
        };

        let m = projection(&intr, 1.0, 1000.0);

        let eps = 1e-4;
        assert!((m[(0, 0)] - 2.0).abs() < eps);
        assert!((m[(1, 1)] - 2.0).abs() < eps);
        assert!((m[(2, 2)] + 1001.0 / 999.0).abs() < eps);
        assert!((m[(2, 3)] + 2000.0 / 999.0).abs() < eps);
        assert_eq!(m[(3, 2)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);
    }
}
