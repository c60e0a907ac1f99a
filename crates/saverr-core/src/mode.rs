//! Deploy mode selection.
//!
//! Mode flags are resolved against [`MODE_PRECEDENCE`], a single ordered list:
//! the first matching entry wins and standard deploy is the fallback. Redundant
//! flags are not an error, but are reported.

use crate::environment::Environment;
use crate::error::{Result, SaverrError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

// ---------------------------------------------------------------------------
// DeployMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployMode {
    Standard,
    Guided,
    Sync,
    BuildOnly,
}

impl DeployMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeployMode::Standard => "standard",
            DeployMode::Guided => "guided",
            DeployMode::Sync => "sync",
            DeployMode::BuildOnly => "build_only",
        }
    }

    /// Modes that finish with a deployed stack worth reading outputs from.
    pub fn produces_outputs(self) -> bool {
        matches!(self, DeployMode::Standard | DeployMode::Guided)
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeployFlags
// ---------------------------------------------------------------------------

/// Raw, independently settable operator flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployFlags {
    pub build_only: bool,
    pub skip_build: bool,
    pub guided: bool,
    pub sync: bool,
}

fn wants_build_only(flags: &DeployFlags) -> bool {
    flags.build_only
}

fn wants_sync(flags: &DeployFlags) -> bool {
    flags.sync
}

fn wants_guided(flags: &DeployFlags) -> bool {
    flags.guided
}

type ModeCheck = (fn(&DeployFlags) -> bool, DeployMode);

/// Highest precedence first. Build-only overrides every provider mode,
/// then sync > guided; anything else is a standard deploy.
pub const MODE_PRECEDENCE: &[ModeCheck] = &[
    (wants_build_only, DeployMode::BuildOnly),
    (wants_sync, DeployMode::Sync),
    (wants_guided, DeployMode::Guided),
];

// ---------------------------------------------------------------------------
// DeploymentRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub environment: Environment,
    pub skip_build: bool,
    pub mode: DeployMode,
    /// Set only once the production safeguard has passed.
    pub confirmed: bool,
}

impl DeploymentRequest {
    pub fn runs_build(&self) -> bool {
        !self.skip_build
    }
}

/// Turn operator flags into a request for `environment`.
///
/// The only rejected combination is `build_only` with `skip_build`, which
/// leaves nothing to do. It is rejected here, before any side effect.
pub fn select_mode(environment: Environment, flags: DeployFlags) -> Result<DeploymentRequest> {
    if flags.build_only && flags.skip_build {
        return Err(SaverrError::Config(
            "--build-only and --skip-build together leave nothing to do".to_string(),
        ));
    }

    let mut matches = MODE_PRECEDENCE
        .iter()
        .filter(|(check, _)| check(&flags))
        .map(|(_, mode)| *mode);

    let mode = matches.next().unwrap_or(DeployMode::Standard);
    let ignored: Vec<&str> = matches.map(|m| m.as_str()).collect();
    if !ignored.is_empty() {
        warn!(
            selected = %mode,
            ignored = %ignored.join(", "),
            "multiple deploy modes requested; using the highest precedence"
        );
    }

    Ok(DeploymentRequest {
        environment,
        skip_build: flags.skip_build,
        mode,
        confirmed: false,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
