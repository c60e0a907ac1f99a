use crate::environment::Environment;
use crate::error::{Result, SaverrError};
use crate::io;
use crate::paths;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::debug;

/// Exclusive advisory lock on one environment, held for the whole of a
/// deploy or delete workflow. Released on drop.
#[derive(Debug)]
pub struct EnvironmentLock {
    file: File,
    env: Environment,
}

impl EnvironmentLock {
    /// Take the lock without waiting. Contention is [`SaverrError::EnvironmentLocked`].
    pub fn acquire(root: &Path, env: Environment) -> Result<Self> {
        let path = paths::lock_path(root, env);
        if let Some(parent) = path.parent() {
            io::ensure_dir(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        file.try_lock_exclusive()
            .map_err(|_| SaverrError::EnvironmentLocked(env.as_str().to_string()))?;
        debug!(env = %env, path = %path.display(), "environment lock acquired");
        Ok(Self { file, env })
    }
}

impl Drop for EnvironmentLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        debug!(env = %self.env, "environment lock released");
    }
}
