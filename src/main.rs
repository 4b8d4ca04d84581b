use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trailrun::{
    encoding::{EncoderConfig, RunEncoder},
    services::{build::build_graph, summary::EncodingSummary},
    structures::{Config, OsmWay, RouteNetwork},
};

#[derive(Parser)]
#[command(name = "trailrun")]
#[command(about = "Running priorities and slope-aware speeds for OSM edges", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode every input of a build config and print a summary
    Build {
        /// YAML config file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Classify a single way given on the command line
    Classify {
        /// Way tag as key=value, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Walking network of the way (iwn, nwn, rwn, lwn)
        #[arg(long)]
        network: Option<String>,
        /// Encoder properties, e.g. speed_bits=4|speed_factor=1
        #[arg(long, default_value = "")]
        encoder: String,
    },
}

fn parse_tag(s: &str) -> Result<(&str, &str)> {
    s.split_once('=')
        .with_context(|| format!("Tag must be in format 'key=value', got '{s}'"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config } => {
            let config = Config::load(&config)
                .with_context(|| format!("Loading {}", config.display()))?;
            let (graph, encoder) = build_graph(&config)?;
            let summary = EncodingSummary::from_graph(&graph, encoder.layout());
            info!("Build finished");
            print!("{summary}");
        }
        Commands::Classify {
            tags,
            network,
            encoder,
        } => {
            let config: EncoderConfig = encoder.parse()?;
            let encoder = RunEncoder::new(&config)?;

            let pairs = tags
                .iter()
                .map(|t| parse_tag(t))
                .collect::<Result<Vec<_>>>()?;
            let way = OsmWay::from_tags(0, pairs);
            let network = network
                .as_deref()
                .map_or(RouteNetwork::Other, RouteNetwork::from_tag);

            match encoder.encode(&way, network) {
                Some(flags) => {
                    let layout = encoder.layout();
                    println!("priority: {}", layout.priority(flags));
                    println!("speed:    {} km/h", layout.speed(flags));
                    println!(
                        "access:   forward={} backward={}",
                        layout.access(flags, false),
                        layout.access(flags, true)
                    );
                }
                None => println!("not accessible for running"),
            }
        }
    }

    Ok(())
}
