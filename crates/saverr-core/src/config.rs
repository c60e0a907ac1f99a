use crate::environment::Environment;
use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PREFIX: &str = "saverr";
pub const DEFAULT_REGION: &str = "us-east-1";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Prefix shared by stack names and function names.
    #[serde(default = "default_prefix")]
    pub name: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_prefix(),
        }
    }
}

// ---------------------------------------------------------------------------
// ProviderConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// `sam` binary name or absolute path.
    #[serde(default = "default_sam")]
    pub sam: String,
    /// `aws` binary name or absolute path.
    #[serde(default = "default_aws")]
    pub aws: String,
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_sam() -> String {
    "sam".to_string()
}

fn default_aws() -> String {
    "aws".to_string()
}

fn default_template() -> String {
    "template.yaml".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            sam: default_sam(),
            aws: default_aws(),
            template: default_template(),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputKeys
// ---------------------------------------------------------------------------

/// Names of the stack outputs copied into the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputKeys {
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default = "default_user_pool_id")]
    pub user_pool_id: String,
    #[serde(default = "default_user_pool_client_id")]
    pub user_pool_client_id: String,
}

fn default_api_endpoint() -> String {
    "ApiEndpoint".to_string()
}

fn default_user_pool_id() -> String {
    "UserPoolId".to_string()
}

fn default_user_pool_client_id() -> String {
    "UserPoolClientId".to_string()
}

impl Default for OutputKeys {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            user_pool_id: default_user_pool_id(),
            user_pool_client_id: default_user_pool_client_id(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub outputs: OutputKeys,
}

impl Config {
    /// Load `.saverr/config.yaml`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn prefix(&self) -> &str {
        &self.project.name
    }

    /// Deterministic stack name: `<prefix>-<environment>`.
    pub fn stack_name(&self, env: Environment) -> String {
        format!("{}-{}", self.project.name, env.as_str())
    }

    /// Config value, then `AWS_REGION`, then `AWS_DEFAULT_REGION`, then
    /// [`DEFAULT_REGION`].
    pub fn resolve_region(&self) -> String {
        self.region
            .clone()
            .filter(|r| !r.trim().is_empty())
            .or_else(|| std::env::var("AWS_REGION").ok().filter(|r| !r.is_empty()))
            .or_else(|| {
                std::env::var("AWS_DEFAULT_REGION")
                    .ok()
                    .filter(|r| !r.is_empty())
            })
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let prefix = &self.project.name;
        if prefix.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "project.name is empty; stack and function names need a prefix"
                    .to_string(),
            });
        } else if prefix
            .chars()
            .any(|c| c.is_ascii_uppercase() || c.is_whitespace())
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "project.name '{prefix}' contains uppercase or whitespace characters"
                ),
            });
        }

        for (field, key) in [
            ("outputs.api_endpoint", &self.outputs.api_endpoint),
            ("outputs.user_pool_id", &self.outputs.user_pool_id),
            ("outputs.user_pool_client_id", &self.outputs.user_pool_client_id),
        ] {
            if key.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{field} is empty; that record field will always be blank"),
                });
            }
        }

        for (field, bin) in [
            ("provider.sam", &self.provider.sam),
            ("provider.aws", &self.provider.aws),
        ] {
            if bin.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("{field} is empty"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
