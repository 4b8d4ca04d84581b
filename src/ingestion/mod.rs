pub mod cache;
pub mod osm;
