use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::Config;

/// Application lifecycle manager.
///
/// Owns the validated configuration; front ends build their weather session
/// from it.
pub struct App {
    config: Arc<Config>,
}

impl App {
    /// Create a new application instance from the on-disk configuration
    pub fn new() -> Result<Self> {
        let (config, _validation) = Config::load_validated()?;
        Ok(Self::with_config(config))
    }

    /// Create an application instance from an already loaded configuration
    pub fn with_config(config: Config) -> Self {
        tracing::debug!("Using config directory {}", config.config_dir.display());
        Self {
            config: Arc::new(config),
        }
    }

    /// Location of the persisted key-value store
    pub fn storage_path(&self) -> PathBuf {
        self.config.storage_path()
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_path_is_inside_config_dir() {
        let mut config = Config::default();
        config.config_dir = PathBuf::from("/tmp/citycast-test");
        let app = App::with_config(config);
        assert_eq!(
            app.storage_path(),
            PathBuf::from("/tmp/citycast-test/storage.json")
        );
    }
}
