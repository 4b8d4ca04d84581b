use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{encoding::EncoderConfig, ingestion::cache::SourceLocation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("Unknown URL scheme for '{label}': {url}")]
    UnknownScheme { label: String, url: String },
    #[error("Remote download not yet implemented: {0}")]
    RemoteSource(String),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub build: BuildConfig,
    #[serde(default)]
    pub encoder: EncoderConfig,
}

#[derive(Debug, Deserialize)]
pub struct BuildConfig {
    pub inputs: Vec<Ingestor>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "ingestor")]
pub enum Ingestor {
    #[serde(rename = "osm/pbf")]
    OsmPbf(OsmPbfIngestor),
}

#[derive(Debug, Deserialize)]
pub struct OsmPbfIngestor {
    pub url: String,
    pub phase: Option<u8>,
}

impl Ingestor {
    pub fn label(&self) -> &str {
        match self {
            Ingestor::OsmPbf(_) => "osm/pbf",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Ingestor::OsmPbf(c) => &c.url,
        }
    }

    pub fn location(&self) -> Result<SourceLocation, ConfigError> {
        let url = self.url();
        if let Some(path) = url.strip_prefix("path:") {
            Ok(SourceLocation::Local(path.to_string()))
        } else if url.starts_with("http://") || url.starts_with("https://") {
            Ok(SourceLocation::Remote(url.to_string()))
        } else {
            Err(ConfigError::UnknownScheme {
                label: self.label().to_string(),
                url: url.to_string(),
            })
        }
    }

    pub fn phase(&self) -> u8 {
        match self {
            Ingestor::OsmPbf(i) => i.phase.unwrap_or(0),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
build:
  inputs:
    - ingestor: osm/pbf
      url: path:data/region.osm.pbf
encoder:
  speed_bits: 5
  speed_factor: 0.5
  block_fords: false
"#;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.build.inputs.len(), 1);
        assert_eq!(config.build.inputs[0].label(), "osm/pbf");
        assert_eq!(config.build.inputs[0].phase(), 0);
        assert_eq!(config.encoder.speed_bits, 5);
        assert_eq!(config.encoder.speed_factor, 0.5);
        assert!(!config.encoder.block_fords);
    }

    #[test]
    fn test_encoder_section_defaults() {
        let config = Config::from_yaml(
            "build:\n  inputs:\n    - ingestor: osm/pbf\n      url: path:a.pbf\n      phase: 2\n",
        )
        .unwrap();
        assert_eq!(config.encoder, EncoderConfig::default());
        assert_eq!(config.build.inputs[0].phase(), 2);
    }

    #[test]
    fn test_location_schemes() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        assert!(matches!(
            config.build.inputs[0].location(),
            Ok(SourceLocation::Local(p)) if p == "data/region.osm.pbf"
        ));

        let remote = Ingestor::OsmPbf(OsmPbfIngestor {
            url: "https://example.org/a.pbf".to_string(),
            phase: None,
        });
        assert!(matches!(remote.location(), Ok(SourceLocation::Remote(_))));

        let unknown = Ingestor::OsmPbf(OsmPbfIngestor {
            url: "ftp://example.org/a.pbf".to_string(),
            phase: None,
        });
        assert!(matches!(
            unknown.location(),
            Err(ConfigError::UnknownScheme { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.encoder.speed_bits, 5);

        assert!(matches!(
            Config::load("/nonexistent/trailrun.yml"),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_ingestor() {
        let result = Config::from_yaml(
            "build:\n  inputs:\n    - ingestor: gtfs/generic\n      url: path:a.zip\n",
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
