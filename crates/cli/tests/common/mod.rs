//! Shared test utilities for autoreg CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a temporary directory.
//!
//! Invariants / Assumptions:
//! - Every override key is removed from the child environment so host
//!   variables cannot leak into assertions.
//! - `RUST_LOG` is pinned so stderr diagnostics are predictable.

use assert_cmd::Command;
use autoreg_config::FIELDS;
use std::path::Path;

/// Returns a hermetic `autoreg` command that searches `base_dir`.
pub fn autoreg_cmd(base_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("autoreg");

    cmd.env("RUST_LOG", "info")
        .env_remove("DOTENV_DISABLED")
        .env_remove("AUTOREG_CONFIG_PATH")
        .env_remove("AUTOREG_BASE_DIR")
        .arg("--base-dir")
        .arg(base_dir);

    for spec in FIELDS {
        cmd.env_remove(spec.env_key);
    }

    cmd
}
