mod config;
mod edge;
mod geo;
mod geometry;
mod graph;
mod network;
mod node;
mod priority;
mod tags;

pub use config::*;
pub use edge::*;
pub use geo::*;
pub use geometry::*;
pub use graph::*;
pub use network::*;
pub use node::*;
pub use priority::*;
pub use tags::*;
