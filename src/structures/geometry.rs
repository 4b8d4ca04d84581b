use crate::structures::LatLng;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_lng: LatLng,
    pub elevation: Option<f64>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            lat_lng: LatLng::new(latitude, longitude),
            elevation: None,
        }
    }

    pub fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            lat_lng: LatLng::new(latitude, longitude),
            elevation: Some(elevation),
        }
    }
}

/// Ordered samples along an edge, optionally carrying elevation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointList {
    points: Vec<GeoPoint>,
}

impl PointList {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// True when every sample has an elevation.
    pub fn is_3d(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(|p| p.elevation.is_some())
    }

    pub fn elevation(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.elevation)
    }

    /// Planar length in metres, summed over consecutive samples.
    pub fn distance(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].lat_lng.dist(pair[1].lat_lng))
            .sum()
    }
}
