mod config_loader;
mod nodeboot_config;

pub use config_loader::*;
pub use nodeboot_config::*;
pub use schematic::{Config, ConfigError, Format};
