pub mod build;
pub mod summary;
