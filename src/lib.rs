pub mod encoding;
pub mod ingestion;
pub mod services;
pub mod structures;
