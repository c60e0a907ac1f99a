pub mod delete;
pub mod deploy;
pub mod envs;
pub mod logs;
pub mod outputs;

use anyhow::Context;
use saverr_core::config::{Config, WarnLevel};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Load `.saverr/config.yaml` and surface validation findings as log lines.
pub fn load_config(root: &Path) -> anyhow::Result<Config> {
    let config = Config::load(root).context("failed to load .saverr/config.yaml")?;
    for w in config.validate() {
        match w.level {
            WarnLevel::Error => tracing::error!("config: {}", w.message),
            WarnLevel::Warning => tracing::warn!("config: {}", w.message),
        }
    }
    Ok(config)
}

/// Ctrl-C sets `interrupted` instead of killing saverr; the provider child
/// still receives the signal and stops. Armed only once the provider starts
/// a sync or log tail, so earlier prompts keep the default Ctrl-C.
pub fn install_interrupt_handler(interrupted: Arc<AtomicBool>) {
    let installed = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    });
    if let Err(e) = installed {
        tracing::warn!("failed to install Ctrl-C handler: {e}");
    }
}
