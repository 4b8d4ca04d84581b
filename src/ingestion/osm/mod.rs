mod pbf;

pub use pbf::*;
