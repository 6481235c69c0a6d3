// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.

use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tempfile::tempdir;

/// Serializes tests that redirect the config directory through the
/// environment, so concurrent test threads never observe each other's
/// temporary settings files.
fn config_env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Runs `test` with the config directory pointed at a fresh temp dir.
pub fn with_temp_config_dir<F>(test: F)
where
    F: FnOnce(&Path),
{
    let _guard = config_env_lock().lock().expect("failed to lock mutex");
    let temp_dir = tempdir().expect("failed to create temp dir");
    let previous = std::env::var(crate::config::CONFIG_DIR_ENV).ok();
    std::env::set_var(crate::config::CONFIG_DIR_ENV, temp_dir.path());

    test(temp_dir.path());

    if let Some(value) = previous {
        std::env::set_var(crate::config::CONFIG_DIR_ENV, value);
    } else {
        std::env::remove_var(crate::config::CONFIG_DIR_ENV);
    }
}
