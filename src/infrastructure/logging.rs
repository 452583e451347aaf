use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Log to stderr so stdout only carries the solution. `RUST_LOG` still wins over `level`
pub fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init()
        .context("could not initialize logger")
}
