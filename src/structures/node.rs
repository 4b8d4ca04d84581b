use std::fmt::Display;

use crate::structures::{GeoPoint, LatLng};

#[derive(Debug, Clone)]
pub struct NodeData {
    pub eid: String,
    pub lat_lng: LatLng,
    pub elevation: Option<f64>,
}

impl NodeData {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat_lng: self.lat_lng,
            elevation: self.elevation,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeID(pub usize);

impl Display for NodeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
