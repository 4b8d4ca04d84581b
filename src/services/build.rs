use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::{
    encoding::{EncoderError, RunEncoder},
    ingestion::{cache::resolve_path, osm},
    structures::{Config, ConfigError, Graph, Ingestor},
};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Encoder(#[from] EncoderError),
    #[error("Failed to ingest '{label}': {source}")]
    Ingest {
        label: String,
        #[source]
        source: osmpbf::Error,
    },
}

pub fn build_graph(config: &Config) -> Result<(Graph, RunEncoder), BuildError> {
    let encoder = RunEncoder::new(&config.encoder)?;
    info!("Encoding with '{}' v{}", encoder, encoder.version());

    let mut g = Graph::new();

    let mut ordered: Vec<&Ingestor> = config.build.inputs.iter().collect();
    ordered.sort_by_key(|i| i.phase());

    for input in ordered {
        info!("Loading '{}'...", input.label());
        let before = Instant::now();

        let path = resolve_path(input)?;

        match input {
            Ingestor::OsmPbf(_) => {
                osm::load_pbf_file(&path, &mut g, &encoder).map_err(|source| {
                    BuildError::Ingest {
                        label: input.label().to_string(),
                        source,
                    }
                })?;
            }
        }

        info!(
            "Loaded '{}' in {}ms",
            input.label(),
            before.elapsed().as_millis()
        );
    }

    Ok((g, encoder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_encoder_config_fails_before_ingest() {
        let config = Config::from_yaml(
            "build:\n  inputs: []\nencoder:\n  speed_bits: 0\n",
        )
        .unwrap();
        assert!(matches!(
            build_graph(&config),
            Err(BuildError::Encoder(EncoderError::InvalidSpeedBits { .. }))
        ));
    }

    #[test]
    fn test_remote_sources_are_rejected() {
        let config = Config::from_yaml(
            "build:\n  inputs:\n    - ingestor: osm/pbf\n      url: https://example.org/a.pbf\n",
        )
        .unwrap();
        assert!(matches!(
            build_graph(&config),
            Err(BuildError::Config(ConfigError::RemoteSource(_)))
        ));
    }

    #[test]
    fn test_missing_file_is_an_ingest_error() {
        let config = Config::from_yaml(
            "build:\n  inputs:\n    - ingestor: osm/pbf\n      url: path:/nonexistent/region.osm.pbf\n",
        )
        .unwrap();
        assert!(matches!(
            build_graph(&config),
            Err(BuildError::Ingest { .. })
        ));
    }

    #[test]
    fn test_empty_build() {
        let config = Config::from_yaml("build:\n  inputs: []\n").unwrap();
        let (graph, encoder) = build_graph(&config).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(encoder.version(), RunEncoder::VERSION);
    }
}
