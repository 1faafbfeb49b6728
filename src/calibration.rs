use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Intrinsic camera parameters produced by an offline calibration run,
/// loaded once at startup and constant for the session.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CameraIntrinsics {
    /// Focal lengths, in pixels.
    pub fx: f32,
    pub fy: f32,

    /// Principal point.
    pub cx: f32,
    pub cy: f32,

    /// Distortion coefficients, passed through to the external pose
    /// estimator untouched.
    #[serde(default)]
    pub distortion: Vec<f32>,
}

impl CameraIntrinsics {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let intrinsics = serde_json::from_str(&content)?;

        Ok(intrinsics)
    }
}
