//! Short function aliases and their fully qualified Lambda names.
//!
//! A qualified name is `<prefix>-<domain>-<action>-<environment>`. Aliases
//! not in [`CATALOG`] resolve to themselves, so provider-native names can be
//! passed straight through.

use crate::environment::Environment;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionAlias {
    pub domain: &'static str,
    pub alias: &'static str,
    pub action: &'static str,
}

const fn entry(domain: &'static str, alias: &'static str, action: &'static str) -> FunctionAlias {
    FunctionAlias {
        domain,
        alias,
        action,
    }
}

/// Domain display order.
pub const DOMAINS: &[&str] = &["auth", "accounts", "goals", "plans", "chat", "analytics"];

pub const CATALOG: &[FunctionAlias] = &[
    // auth
    entry("auth", "login", "login"),
    entry("auth", "signup", "signup"),
    entry("auth", "confirm", "confirm"),
    entry("auth", "refresh", "refresh"),
    entry("auth", "forgot-password", "forgot-password"),
    entry("auth", "reset-password", "reset-password"),
    entry("auth", "resend-code", "resend-code"),
    // accounts
    entry("accounts", "link-token", "create-link-token"),
    entry("accounts", "link-account", "link-account"),
    entry("accounts", "list-accounts", "list-accounts"),
    entry("accounts", "get-account", "get-account"),
    entry("accounts", "delete-account", "delete-account"),
    entry("accounts", "refresh-account", "refresh-account"),
    entry("accounts", "sync-transactions", "sync-transactions"),
    entry("accounts", "transactions", "get-transactions"),
    // goals
    entry("goals", "create-goal", "create-goal"),
    entry("goals", "list-goals", "list-goals"),
    entry("goals", "get-goal", "get-goal"),
    entry("goals", "update-goal", "update-goal"),
    entry("goals", "delete-goal", "delete-goal"),
    entry("goals", "contribute", "contribute-to-goal"),
    // plans
    entry("plans", "create-plan", "create-plan"),
    entry("plans", "list-plans", "list-plans"),
    entry("plans", "deactivate-plan", "deactivate-plan"),
    // chat
    entry("chat", "chat", "send-message"),
    entry("chat", "suggest-goals", "suggest-goals"),
    entry("chat", "generate-plan", "generate-plan"),
    // analytics
    entry("analytics", "spending", "spending-by-category"),
    entry("analytics", "cash-flow", "cash-flow"),
    entry("analytics", "budget", "budget-comparison"),
    entry("analytics", "savings", "savings-progress"),
];

pub fn lookup(alias: &str) -> Option<&'static FunctionAlias> {
    CATALOG.iter().find(|f| f.alias == alias)
}

/// Catalog entries grouped by domain, in [`DOMAINS`] order.
pub fn catalog_by_domain() -> Vec<(&'static str, Vec<&'static FunctionAlias>)> {
    DOMAINS
        .iter()
        .map(|domain| {
            let entries: Vec<&'static FunctionAlias> =
                CATALOG.iter().filter(|f| f.domain == *domain).collect();
            (*domain, entries)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct FunctionResolver {
    prefix: String,
}

impl FunctionResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn qualified_name(&self, function: &FunctionAlias, env: Environment) -> String {
        format!(
            "{}-{}-{}-{}",
            self.prefix,
            function.domain,
            function.action,
            env.as_str()
        )
    }

    pub fn resolve(&self, alias: &str, env: Environment) -> String {
        match lookup(alias) {
            Some(function) => self.qualified_name(function, env),
            None => alias.to_string(),
        }
    }
}
