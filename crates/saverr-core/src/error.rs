use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaverrError {
    #[error("invalid environment '{0}': expected one of development, staging, production")]
    InvalidEnvironment(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("build failed: {0}")]
    BuildFailed(String),

    #[error("deploy failed: {0}")]
    DeployFailed(String),

    #[error("sync failed: {0}")]
    SyncFailed(String),

    #[error("stack query failed: {0}")]
    StackQueryFailed(String),

    #[error("teardown failed: {0}")]
    TeardownFailed(String),

    #[error("log tail failed: {0}")]
    LogsFailed(String),

    #[error("'{0}' not found on PATH: install it or set provider.{0} in .saverr/config.yaml")]
    ProviderNotInstalled(String),

    #[error("failed to run provider command: {0}")]
    ProviderSpawn(String),

    #[error("environment '{0}' is locked by another lifecycle operation")]
    EnvironmentLocked(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SaverrError>;
