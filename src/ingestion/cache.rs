use crate::structures::{ConfigError, Ingestor};

#[derive(Debug)]
pub enum SourceLocation {
    Local(String),
    Remote(String),
}

pub fn resolve_path(input: &Ingestor) -> Result<String, ConfigError> {
    match input.location()? {
        SourceLocation::Local(path) => Ok(path),
        SourceLocation::Remote(url) => Err(ConfigError::RemoteSource(url)),
    }
}
