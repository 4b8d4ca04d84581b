//! Edge encoders for the running profile.

mod config;
mod error;
mod flags;
pub mod foot;
pub mod priority;
mod run;
pub mod slope;
pub mod speed;

pub use config::*;
pub use error::*;
pub use flags::*;
pub use foot::{Access, Capability, FootEncoder};
pub use run::*;
