pub mod config;
pub mod paths;

pub use config::{CatalogConfig, Config, LoggingConfig};
pub use paths::PathManager;
