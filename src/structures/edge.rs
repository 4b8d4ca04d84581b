use crate::{
    encoding::EdgeFlags,
    structures::{NodeID, PointList},
};

#[derive(Debug, Clone)]
pub struct Edge {
    pub origin: NodeID,
    pub destination: NodeID,
    pub way_id: i64,
    pub geometry: PointList,
    /// Planar length in metres.
    pub distance: f64,
    pub flags: EdgeFlags,
}

impl Edge {
    pub fn new(
        origin: NodeID,
        destination: NodeID,
        way_id: i64,
        geometry: PointList,
        flags: EdgeFlags,
    ) -> Self {
        let distance = geometry.distance();
        Self {
            origin,
            destination,
            way_id,
            geometry,
            distance,
            flags,
        }
    }
}
