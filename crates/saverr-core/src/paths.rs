use crate::environment::Environment;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SAVERR_DIR: &str = ".saverr";
pub const OUTPUTS_DIR: &str = ".saverr/outputs";
pub const LOCKS_DIR: &str = ".saverr/locks";
pub const CONFIG_FILE: &str = ".saverr/config.yaml";

/// CloudWatch log groups for Lambda functions live under this prefix.
pub const LAMBDA_LOG_GROUP_PREFIX: &str = "/aws/lambda";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn outputs_dir(root: &Path) -> PathBuf {
    root.join(OUTPUTS_DIR)
}

pub fn output_record_path(root: &Path, env: Environment) -> PathBuf {
    outputs_dir(root).join(format!("{}.json", env.as_str()))
}

pub fn locks_dir(root: &Path) -> PathBuf {
    root.join(LOCKS_DIR)
}

pub fn lock_path(root: &Path, env: Environment) -> PathBuf {
    locks_dir(root).join(format!("{}.lock", env.as_str()))
}

pub fn log_group(function_name: &str) -> String {
    format!("{LAMBDA_LOG_GROUP_PREFIX}/{function_name}")
}
