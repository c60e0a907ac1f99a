//! The closed set of deployment tiers and the policy that differs between them.
//!
//! Every lifecycle operation resolves its target through [`validate`] before
//! doing anything else. Unknown identifiers are a hard failure; the only
//! fallback is the documented CLI default, [`Environment::DEFAULT`].

use crate::error::{Result, SaverrError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const DEFAULT: Environment = Environment::Development;

    pub fn all() -> &'static [Environment] {
        &[
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Sync works against any stack, but hot-reloading is meant for development.
    pub fn sync_recommended(self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn confirmation_policy(self, operation: Operation) -> ConfirmationPolicy {
        match (operation, self) {
            (Operation::Deploy, Environment::Production) => ConfirmationPolicy::SimpleYes,
            (Operation::Deploy, _) => ConfirmationPolicy::None,
            (Operation::Teardown, Environment::Production) => ConfirmationPolicy::TypedPhrase,
            (Operation::Teardown, _) => ConfirmationPolicy::SimpleYes,
        }
    }

    /// Comma-separated list of valid identifiers, for error output.
    pub fn valid_list() -> String {
        Environment::all()
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = SaverrError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(SaverrError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Resolve an operator-supplied identifier to exactly one [`Environment`].
///
/// Pure: accepts only the canonical identifiers, with no aliases, trimming or
/// case folding.
pub fn validate(identifier: &str) -> Result<Environment> {
    identifier.parse()
}

// ---------------------------------------------------------------------------
// Operation / ConfirmationPolicy
// ---------------------------------------------------------------------------

/// Risk class of a lifecycle operation, used to pick the confirmation phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Deploy,
    Teardown,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Deploy => "deploy",
            Operation::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationPolicy {
    /// Proceeds without asking.
    None,
    /// Operator must type the affirmative literal.
    SimpleYes,
    /// Operator must type the long teardown phrase.
    TypedPhrase,
}

pub const AFFIRMATIVE_PHRASE: &str = "yes";
pub const PRODUCTION_TEARDOWN_PHRASE: &str = "delete production";

impl ConfirmationPolicy {
    pub fn required_phrase(self) -> Option<&'static str> {
        match self {
            ConfirmationPolicy::None => None,
            ConfirmationPolicy::SimpleYes => Some(AFFIRMATIVE_PHRASE),
            ConfirmationPolicy::TypedPhrase => Some(PRODUCTION_TEARDOWN_PHRASE),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfirmationPolicy::None => "none",
            ConfirmationPolicy::SimpleYes => "simple_yes",
            ConfirmationPolicy::TypedPhrase => "typed_phrase",
        }
    }
}

impl fmt::Display for ConfirmationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
