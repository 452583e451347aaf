// Infrastructure: command line, config file and logger setup for the binary

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::Cli;
pub use config::{read_config, resolve_config};
pub use logging::init_logger;
