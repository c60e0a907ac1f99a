//! Typed-phrase gate in front of risky operations.
//!
//! The gate compares the operator's answer byte-for-byte with the phrase the
//! environment's [`crate::environment::ConfirmationPolicy`] requires. Case variants and stray
//! whitespace do not match. A declined gate is [`Authorization::Cancelled`],
//! which callers treat as a clean exit rather than an error.

use crate::environment::{Environment, Operation};
use crate::error::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    Cancelled,
}

/// Source of operator answers. The terminal implementation lives in the CLI;
/// tests and CI use [`FixedAnswer`].
pub trait ConfirmationProvider {
    /// Show `prompt` and return the raw answer. Implementations strip only the
    /// line terminator.
    fn ask(&self, prompt: &str) -> Result<String>;
}

/// Answers every prompt with the same pre-supplied text.
#[derive(Debug, Clone)]
pub struct FixedAnswer(pub String);

impl FixedAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self(answer.into())
    }
}

impl ConfirmationProvider for FixedAnswer {
    fn ask(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

pub fn prompt_for(env: Environment, operation: Operation, phrase: &str) -> String {
    let what = match operation {
        Operation::Deploy => format!("deploy to {}", env.as_str().to_uppercase()),
        Operation::Teardown => format!(
            "DELETE the entire {} stack and all of its resources",
            env.as_str()
        ),
    };
    format!("You are about to {what}. Type '{phrase}' to continue:")
}

/// Decide whether `operation` may proceed against `env`.
///
/// Environments whose policy is [`crate::environment::ConfirmationPolicy::None`] are authorized
/// without consulting `provider`.
pub fn authorize(
    env: Environment,
    operation: Operation,
    provider: &dyn ConfirmationProvider,
) -> Result<Authorization> {
    let policy = env.confirmation_policy(operation);
    let Some(phrase) = policy.required_phrase() else {
        debug!(env = %env, operation = %operation, "no confirmation required");
        return Ok(Authorization::Authorized);
    };

    let answer = provider.ask(&prompt_for(env, operation, phrase))?;
    if answer == phrase {
        info!(env = %env, operation = %operation, policy = %policy, "operator confirmed");
        Ok(Authorization::Authorized)
    } else {
        info!(env = %env, operation = %operation, policy = %policy, "operator declined");
        Ok(Authorization::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{AFFIRMATIVE_PHRASE, PRODUCTION_TEARDOWN_PHRASE};
    use std::cell::Cell;

    /// Fails the test if consulted.
    struct NeverAsked;

    impl ConfirmationProvider for NeverAsked {
        fn ask(&self, prompt: &str) -> Result<String> {
            panic!("unexpected prompt: {prompt}");
        }
    }

    struct Counting {
        answer: &'static str,
        asked: Cell<u32>,
    }

    impl ConfirmationProvider for Counting {
        fn ask(&self, _prompt: &str) -> Result<String> {
            self.asked.set(self.asked.get() + 1);
            Ok(self.answer.to_string())
        }
    }

    fn auth(env: Environment, op: Operation, answer: &str) -> Authorization {
        authorize(env, op, &FixedAnswer::new(answer)).unwrap()
    }

    #[test]
    fn non_production_deploy_is_automatic() {
        for env in [Environment::Development, Environment::Staging] {
            assert_eq!(
                authorize(env, Operation::Deploy, &NeverAsked).unwrap(),
                Authorization::Authorized
            );
        }
    }

    #[test]
    fn production_deploy_accepts_exact_yes() {
        assert_eq!(
            auth(Environment::Production, Operation::Deploy, AFFIRMATIVE_PHRASE),
            Authorization::Authorized
        );
    }

    #[test]
    fn production_deploy_rejects_variants() {
        for answer in ["", "y", "Yes", "YES", "yes ", " yes", "yes\n", "no"] {
            assert_eq!(
                auth(Environment::Production, Operation::Deploy, answer),
                Authorization::Cancelled,
                "answer {answer:?} should cancel"
            );
        }
    }

    #[test]
    fn production_deploy_asks_exactly_once() {
        let provider = Counting {
            answer: "yes",
            asked: Cell::new(0),
        };
        authorize(Environment::Production, Operation::Deploy, &provider).unwrap();
        assert_eq!(provider.asked.get(), 1);
    }

    #[test]
    fn non_production_teardown_needs_yes() {
        assert_eq!(
            auth(Environment::Staging, Operation::Teardown, "yes"),
            Authorization::Authorized
        );
        assert_eq!(
            auth(Environment::Development, Operation::Teardown, ""),
            Authorization::Cancelled
        );
    }

    #[test]
    fn production_teardown_rejects_the_weaker_phrase() {
        assert_eq!(
            auth(Environment::Production, Operation::Teardown, AFFIRMATIVE_PHRASE),
            Authorization::Cancelled
        );
        assert_eq!(
            auth(
                Environment::Production,
                Operation::Teardown,
                PRODUCTION_TEARDOWN_PHRASE
            ),
            Authorization::Authorized
        );
        assert_eq!(
            auth(Environment::Production, Operation::Teardown, "DELETE PRODUCTION"),
            Authorization::Cancelled
        );
    }

    #[test]
    fn prompt_names_the_phrase() {
        let p = prompt_for(
            Environment::Production,
            Operation::Teardown,
            PRODUCTION_TEARDOWN_PHRASE,
        );
        assert!(p.contains("'delete production'"));
        assert!(p.contains("production stack"));
    }
}
