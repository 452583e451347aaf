use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use super::cli::Cli;
use crate::domain::models::SolverConfig;

/// Read a JSON solver config; missing fields fall back to their defaults
pub fn read_config(path: &Path) -> Result<SolverConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

/// Config file (or defaults) with command line overrides applied
pub fn resolve_config(args: &Cli) -> Result<SolverConfig> {
    let mut config = match &args.config_file {
        None => {
            warn!("No config file provided, use --config-file to provide a custom config");
            SolverConfig::default()
        }
        Some(path) => read_config(path)?,
    };

    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(limit) = args.max_items {
        config.max_items = Some(limit);
    }

    info!("Using solver config: {config:?}");
    Ok(config)
}
