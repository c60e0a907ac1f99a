use crate::environment::Environment;
use crate::error::Result;
use std::collections::BTreeMap;

/// Narrow command interface to the infrastructure provider.
///
/// Every method blocks until the provider finishes. `sync` and `tail_logs`
/// run until the operator interrupts them; an interrupt is `Ok(())`.
pub trait Provider {
    /// Build deployable artifacts with the environment-scoped profile.
    fn build(&self, env: Environment) -> Result<()>;

    /// Standard deploy. `auto_confirm` skips the provider's own changeset prompt.
    fn deploy(&self, env: Environment, stack: &str, auto_confirm: bool) -> Result<()>;

    /// Operator-interactive deploy; the provider asks for every parameter.
    fn deploy_guided(&self) -> Result<()>;

    fn sync(&self, env: Environment, stack: &str) -> Result<()>;

    fn stack_exists(&self, stack: &str) -> Result<bool>;

    /// Output key to value. A stack without outputs yields an empty map.
    fn describe_outputs(&self, stack: &str) -> Result<BTreeMap<String, String>>;

    fn delete_stack(&self, stack: &str) -> Result<()>;

    /// Block until the provider reports the stack gone.
    fn await_deletion(&self, stack: &str) -> Result<()>;

    fn tail_logs(&self, log_group: &str) -> Result<()>;
}
