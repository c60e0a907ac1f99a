//! Stack output extraction and the per-environment output record store.

use crate::config::Config;
use crate::environment::Environment;
use crate::error::Result;
use crate::io;
use crate::paths;
use crate::provider::Provider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// StackOutputRecord
// ---------------------------------------------------------------------------

/// Normalized deployment result consumed by client configuration tooling.
/// Missing values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackOutputRecord {
    pub environment: Environment,
    pub stack_name: String,
    pub api_endpoint: String,
    pub user_pool_id: String,
    pub user_pool_client_id: String,
    pub region: String,
    pub deployed_at: DateTime<Utc>,
}

impl StackOutputRecord {
    /// Record with every output blank, as for a stack that does not exist.
    pub fn empty(env: Environment, stack_name: String, region: String) -> Self {
        Self {
            environment: env,
            stack_name,
            api_endpoint: String::new(),
            user_pool_id: String::new(),
            user_pool_client_id: String::new(),
            region,
            deployed_at: Utc::now(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.api_endpoint.is_empty()
            && !self.user_pool_id.is_empty()
            && !self.user_pool_client_id.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Query `provider` for the environment's stack outputs.
///
/// A missing stack or a missing key is not an error: the affected fields are
/// left empty and a warning is logged. Query failures other than a missing
/// stack propagate.
pub fn extract(
    provider: &dyn Provider,
    config: &Config,
    env: Environment,
) -> Result<StackOutputRecord> {
    let stack = config.stack_name(env);
    let mut record = StackOutputRecord::empty(env, stack.clone(), config.resolve_region());

    if !provider.stack_exists(&stack)? {
        warn!(env = %env, stack = %stack, "stack does not exist; recording empty outputs");
        return Ok(record);
    }

    let outputs = provider.describe_outputs(&stack)?;
    debug!(stack = %stack, count = outputs.len(), "stack outputs received");

    let keys = &config.outputs;
    for (key, slot) in [
        (&keys.api_endpoint, &mut record.api_endpoint),
        (&keys.user_pool_id, &mut record.user_pool_id),
        (&keys.user_pool_client_id, &mut record.user_pool_client_id),
    ] {
        match outputs.get(key) {
            Some(value) => *slot = value.clone(),
            None => warn!(stack = %stack, key = %key, "stack output missing; recorded as empty"),
        }
    }

    Ok(record)
}

// ---------------------------------------------------------------------------
// OutputStore
// ---------------------------------------------------------------------------

/// File-backed store keyed by environment: `.saverr/outputs/<env>.json`.
/// Each write replaces the whole record.
#[derive(Debug, Clone)]
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn path(&self, env: Environment) -> PathBuf {
        paths::output_record_path(&self.root, env)
    }

    pub fn write(&self, record: &StackOutputRecord) -> Result<PathBuf> {
        let path = self.path(record.environment);
        let mut data = serde_json::to_string_pretty(record)?;
        data.push('\n');
        io::atomic_write(&path, data.as_bytes())?;
        debug!(path = %path.display(), "output record written");
        Ok(path)
    }
}
