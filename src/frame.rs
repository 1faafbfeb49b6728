use crate::marker::MarkerDetection;

pub struct Frame {
    pub dims: (u32, u32),
    pub markers: Vec<MarkerDetection>,
}

impl Frame {
    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &MarkerDetection> {
        self.markers.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
