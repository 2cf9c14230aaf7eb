use crate::nodeboot_config::NodebootConfig;
use nodeboot_common::consts::CONFIG_FILENAME;
use schematic::{ConfigLoader as BaseLoader, Format};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn get_config_file(&self, root: &Path) -> PathBuf {
        root.join(CONFIG_FILENAME)
    }

    /// Load configuration for the provided install root. The config file
    /// is optional; when missing, only defaults and environment variables
    /// are applied.
    #[instrument(skip(self))]
    pub fn load_config(&self, root: &Path) -> miette::Result<NodebootConfig> {
        let path = self.get_config_file(root);
        let mut loader = BaseLoader::<NodebootConfig>::new();

        if path.exists() {
            debug!(file = ?path, "Loading configuration file");

            loader.file(path.as_path())?;
        } else {
            debug!(file = ?path, "No configuration file found, using defaults");
        }

        Ok(loader.load()?.config)
    }

    pub fn load_config_from_code(&self, code: &str) -> miette::Result<NodebootConfig> {
        let mut loader = BaseLoader::<NodebootConfig>::new();

        loader.code(code, Format::Yaml)?;

        Ok(loader.load()?.config)
    }
}
