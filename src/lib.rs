pub mod calibration;
pub mod error;
pub mod frame;
pub mod marker;
pub mod pose;
pub mod tracker;
pub mod velocity;

mod circular_queue;
mod track;

pub use frame::Frame;
pub use marker::MarkerDetection;
pub use pose::Pose;
pub use track::TrackedMarker;

use log::debug;
use nalgebra as na;
use std::collections::HashMap;
use std::{fmt, rc::Rc};

use tracker::{MarkerEntry, MAX_FRAMES_UNSEEN};

pub trait Float:
    num_traits::FromPrimitive + na::ComplexField + Copy + fmt::Debug + PartialEq + 'static
{
}

impl<T> Float for T where
    T: num_traits::FromPrimitive + na::ComplexField + Copy + fmt::Debug + PartialEq + 'static
{
}

pub trait Tracking {
    fn update(&mut self, frame: &Frame);
    fn markers(&self) -> Rc<[TrackedMarker]>;
}

/// Per-session marker registry. Owns every marker ever observed and keeps
/// occluded ones alive by extrapolating their corners until they age out.
pub struct MarkerTracker {
    registry: HashMap<i32, MarkerEntry>,
}

impl MarkerTracker {
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }
}

impl Default for MarkerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Tracking for MarkerTracker {
    fn update(&mut self, frame: &Frame) {
        for det in frame.iter() {
            if !det.is_finite() {
                debug!("marker {}: dropping non-finite detection", det.id);
                continue;
            }

            if let Some(entry) = self.registry.get_mut(&det.id) {
                entry.observe(det);
            } else {
                self.registry.insert(det.id, MarkerEntry::new(det));
            }
        }

        for entry in self.registry.values_mut() {
            if !entry.seen {
                entry.extrapolate();
            }
        }

        self.registry.retain(|id, entry| {
            if entry.frames_unseen >= MAX_FRAMES_UNSEEN {
                debug!("marker {}: unseen for {} frames, dropping", id, entry.frames_unseen);
                false
            } else {
                true
            }
        });

        for entry in self.registry.values_mut() {
            entry.seen = false;
        }
    }

    fn markers(&self) -> Rc<[TrackedMarker]> {
        let markers: Vec<TrackedMarker> = self.registry.values().map(Into::into).collect();

        markers.into_boxed_slice().into()
    }
}
