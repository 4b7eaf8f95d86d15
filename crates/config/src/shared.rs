//! Process-wide handle to the resolved configuration.
//!
//! Responsibilities:
//! - Hold the current `AppConfig` behind an atomically swappable pointer.
//! - Re-run a full resolution on `reload()` and publish it in one step.
//!
//! Does NOT handle:
//! - Watching files for changes. Callers decide when to reload.
//!
//! Invariants:
//! - Readers see either the previous or the new configuration, never a mix.
//! - A failed reload leaves the previous configuration in place.
//! - Published configurations are never mutated.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::loader::{ConfigError, ConfigLoader, ResolutionReport};
use crate::types::AppConfig;

/// Shared, reloadable configuration.
///
/// Construct once at startup and clone the handle into each consumer; all
/// clones observe the same published configuration.
#[derive(Clone)]
pub struct SharedConfig {
    loader: ConfigLoader,
    current: Arc<ArcSwap<AppConfig>>,
}

impl SharedConfig {
    /// Resolve with `loader` and publish the result.
    pub fn load(loader: ConfigLoader) -> Result<Self, ConfigError> {
        let config = loader.resolve()?;
        Ok(Self::from_config(loader, config))
    }

    /// Publish an already resolved configuration; `reload()` will use `loader`.
    pub fn from_config(loader: ConfigLoader, config: AppConfig) -> Self {
        Self {
            loader,
            current: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> Arc<AppConfig> {
        self.current.load_full()
    }

    /// Run a new resolution and publish it.
    ///
    /// On error the previously published configuration stays current.
    pub fn reload(&self) -> Result<ResolutionReport, ConfigError> {
        let (config, report) = self.loader.resolve_with_report().inspect_err(|err| {
            tracing::warn!(
                path = %err.path().display(),
                "Configuration reload failed; keeping previous configuration"
            );
        })?;
        self.current.store(Arc::new(config));
        tracing::info!("Configuration reloaded");
        Ok(report)
    }
}

impl std::fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedConfig")
            .field("loader", &self.loader)
            .field("current", &self.current.load_full())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loader(dir: &TempDir) -> ConfigLoader {
        ConfigLoader::new()
            .with_base_dir(dir.path().to_path_buf())
            .with_environment(Vec::<(String, String)>::new())
    }

    #[test]
    fn test_reload_publishes_new_values() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.yaml"), "email:\n  domain: one.com\n").unwrap();

        let shared = SharedConfig::load(loader(&temp_dir)).unwrap();
        let before = shared.current();
        assert_eq!(before.email.domain, "one.com");

        fs::write(temp_dir.path().join("config.yaml"), "email:\n  domain: two.com\n").unwrap();
        shared.reload().unwrap();

        assert_eq!(shared.current().email.domain, "two.com");
        // Snapshots taken before the reload are unchanged.
        assert_eq!(before.email.domain, "one.com");
    }

    #[test]
    fn test_failed_reload_keeps_previous_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.yaml"), "email:\n  domain: one.com\n").unwrap();

        let shared = SharedConfig::load(loader(&temp_dir)).unwrap();

        fs::write(temp_dir.path().join("config.yaml"), "email: [broken\n").unwrap();
        let err = shared.reload().unwrap_err();

        assert!(matches!(err, ConfigError::Format { .. }));
        assert_eq!(err.path(), temp_dir.path().join("config.yaml").as_path());
        assert_eq!(shared.current().email.domain, "one.com");
    }

    #[test]
    fn test_clones_share_published_config() {
        let temp_dir = TempDir::new().unwrap();
        let shared = SharedConfig::load(loader(&temp_dir)).unwrap();
        let consumer = shared.clone();

        fs::write(temp_dir.path().join("config.yaml"), "password:\n  length: 24\n").unwrap();
        shared.reload().unwrap();

        assert_eq!(consumer.current().password.length, 24);
    }
}
