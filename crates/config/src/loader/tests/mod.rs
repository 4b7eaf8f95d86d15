//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test defaults when no source is present.
//! - Test structured file discovery, partial overlays and fatal parse errors.
//! - Test dotenv discovery and override application.
//! - Test process environment precedence and integer coercion fallback.
//!
//! Invariants:
//! - Tests that read the real process environment use `serial_test` and `env_lock()`.
//! - Other tests inject the environment with `ConfigLoader::with_environment`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

use super::builder::ConfigLoader;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Loader rooted at `dir` with the given environment instead of the process one.
pub fn isolated_loader(dir: &TempDir, env: &[(&str, &str)]) -> ConfigLoader {
    ConfigLoader::new()
        .with_base_dir(dir.path().to_path_buf())
        .with_environment(env.iter().map(|(k, v)| (k.to_string(), v.to_string())))
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write test file");
}
