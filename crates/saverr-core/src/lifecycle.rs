//! Deploy, delete and outputs workflows.
//!
//! Each workflow validates the environment first, then walks a fixed
//! sequence of states. Fatal conditions end the walk with `Err`; an operator
//! declining a confirmation ends it with a `Cancelled` outcome. Nothing is
//! retried.
//!
//! The production safeguard is consulted before the first provider call, so
//! a declined confirmation leaves the provider untouched. Build-only runs skip
//! the safeguard entirely because they never reach the stack.

use crate::config::Config;
use crate::environment::{self, Environment, Operation};
use crate::error::Result;
use crate::lock::EnvironmentLock;
use crate::mode::{self, DeployFlags, DeployMode, DeploymentRequest};
use crate::outputs::{self, OutputStore, StackOutputRecord};
use crate::provider::Provider;
use crate::safeguard::{self, Authorization, ConfirmationProvider};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

// ---------------------------------------------------------------------------
// States and outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployState {
    Idle,
    Validated,
    ModeSelected,
    Authorized,
    Built,
    Invoked,
    OutputsExtracted,
    Persisted,
    Done,
    Cancelled,
    Failed,
}

impl DeployState {
    pub fn as_str(self) -> &'static str {
        match self {
            DeployState::Idle => "idle",
            DeployState::Validated => "validated",
            DeployState::ModeSelected => "mode_selected",
            DeployState::Authorized => "authorized",
            DeployState::Built => "built",
            DeployState::Invoked => "invoked",
            DeployState::OutputsExtracted => "outputs_extracted",
            DeployState::Persisted => "persisted",
            DeployState::Done => "done",
            DeployState::Cancelled => "cancelled",
            DeployState::Failed => "failed",
        }
    }
}

impl fmt::Display for DeployState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeployOutcome {
    Deployed {
        record: StackOutputRecord,
        path: PathBuf,
    },
    BuiltOnly,
    SyncStopped,
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub request: DeploymentRequest,
    pub stack_name: String,
    pub trail: Vec<DeployState>,
    pub outcome: DeployOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteState {
    Idle,
    Validated,
    Authorized,
    TeardownInvoked,
    AwaitingCompletion,
    Done,
    Cancelled,
    Failed,
}

impl DeleteState {
    pub fn as_str(self) -> &'static str {
        match self {
            DeleteState::Idle => "idle",
            DeleteState::Validated => "validated",
            DeleteState::Authorized => "authorized",
            DeleteState::TeardownInvoked => "teardown_invoked",
            DeleteState::AwaitingCompletion => "awaiting_completion",
            DeleteState::Done => "done",
            DeleteState::Cancelled => "cancelled",
            DeleteState::Failed => "failed",
        }
    }
}

impl fmt::Display for DeleteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteReport {
    pub environment: Environment,
    pub stack_name: String,
    pub trail: Vec<DeleteState>,
    pub outcome: DeleteOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputsReport {
    pub record: StackOutputRecord,
    pub saved_to: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------

struct Trail<S> {
    env: Option<Environment>,
    states: Vec<S>,
}

impl<S: Copy + fmt::Display> Trail<S> {
    fn new(idle: S) -> Self {
        Self {
            env: None,
            states: vec![idle],
        }
    }

    fn enter(&mut self, state: S) {
        match self.env {
            Some(env) => info!(env = %env, state = %state, "transition"),
            None => info!(state = %state, "transition"),
        }
        self.states.push(state);
    }

    fn last(&self) -> Option<S> {
        self.states.last().copied()
    }
}

/// Enter the terminal state matching `outcome` and build the report.
fn finish(
    trail: &mut Trail<DeployState>,
    request: DeploymentRequest,
    stack_name: String,
    outcome: DeployOutcome,
) -> DeployReport {
    let terminal = match outcome {
        DeployOutcome::Cancelled => DeployState::Cancelled,
        _ => DeployState::Done,
    };
    trail.enter(terminal);
    DeployReport {
        request,
        stack_name,
        trail: trail.states.clone(),
        outcome,
    }
}

// ---------------------------------------------------------------------------
// StackLifecycle
// ---------------------------------------------------------------------------

pub struct StackLifecycle<'a> {
    root: &'a Path,
    config: &'a Config,
    provider: &'a dyn Provider,
    confirmation: &'a dyn ConfirmationProvider,
}

impl<'a> StackLifecycle<'a> {
    pub fn new(
        root: &'a Path,
        config: &'a Config,
        provider: &'a dyn Provider,
        confirmation: &'a dyn ConfirmationProvider,
    ) -> Self {
        Self {
            root,
            config,
            provider,
            confirmation,
        }
    }

    // -----------------------------------------------------------------------
    // Deploy
    // -----------------------------------------------------------------------

    pub fn deploy(&self, env_id: &str, flags: DeployFlags) -> Result<DeployReport> {
        let mut trail = Trail::new(DeployState::Idle);
        let result = self.run_deploy(env_id, flags, &mut trail);
        if let Err(e) = &result {
            error!(
                env = %env_id,
                from = %trail.last().unwrap_or(DeployState::Idle),
                "deploy failed: {e}"
            );
            trail.enter(DeployState::Failed);
        }
        result
    }

    fn run_deploy(
        &self,
        env_id: &str,
        flags: DeployFlags,
        trail: &mut Trail<DeployState>,
    ) -> Result<DeployReport> {
        let env = environment::validate(env_id)?;
        trail.env = Some(env);
        trail.enter(DeployState::Validated);

        let mut request = mode::select_mode(env, flags)?;
        let _lock = EnvironmentLock::acquire(self.root, env)?;
        let stack = self.config.stack_name(env);
        trail.enter(DeployState::ModeSelected);
        info!(env = %env, mode = %request.mode, skip_build = request.skip_build, "deploy mode selected");

        if request.mode == DeployMode::BuildOnly {
            self.provider.build(env)?;
            trail.enter(DeployState::Built);
            return Ok(finish(trail, request, stack, DeployOutcome::BuiltOnly));
        }

        match safeguard::authorize(env, Operation::Deploy, self.confirmation)? {
            Authorization::Authorized => request.confirmed = true,
            Authorization::Cancelled => {
                return Ok(finish(trail, request, stack, DeployOutcome::Cancelled));
            }
        }
        trail.enter(DeployState::Authorized);

        if request.runs_build() {
            self.provider.build(env)?;
            trail.enter(DeployState::Built);
        }

        if !request.mode.produces_outputs() {
            if !env.sync_recommended() {
                warn!(env = %env, "sync mode is intended for development");
            }
            self.provider.sync(env, &stack)?;
            trail.enter(DeployState::Invoked);
            return Ok(finish(trail, request, stack, DeployOutcome::SyncStopped));
        }

        if request.mode == DeployMode::Guided {
            self.provider.deploy_guided()?;
        } else {
            self.provider.deploy(env, &stack, !env.is_production())?;
        }
        trail.enter(DeployState::Invoked);

        let record = outputs::extract(self.provider, self.config, env)?;
        trail.enter(DeployState::OutputsExtracted);

        let path = OutputStore::new(self.root).write(&record)?;
        trail.enter(DeployState::Persisted);

        Ok(finish(
            trail,
            request,
            stack,
            DeployOutcome::Deployed { record, path },
        ))
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    pub fn delete(&self, env_id: &str) -> Result<DeleteReport> {
        let mut trail = Trail::new(DeleteState::Idle);
        let result = self.run_delete(env_id, &mut trail);
        if let Err(e) = &result {
            error!(
                env = %env_id,
                from = %trail.last().unwrap_or(DeleteState::Idle),
                "delete failed: {e}"
            );
            trail.enter(DeleteState::Failed);
        }
        result
    }

    fn run_delete(&self, env_id: &str, trail: &mut Trail<DeleteState>) -> Result<DeleteReport> {
        let env = environment::validate(env_id)?;
        trail.env = Some(env);
        trail.enter(DeleteState::Validated);

        let _lock = EnvironmentLock::acquire(self.root, env)?;
        let stack = self.config.stack_name(env);

        let report = |trail: &Trail<DeleteState>, outcome: DeleteOutcome| DeleteReport {
            environment: env,
            stack_name: stack.clone(),
            trail: trail.states.clone(),
            outcome,
        };

        if safeguard::authorize(env, Operation::Teardown, self.confirmation)?
            == Authorization::Cancelled
        {
            trail.enter(DeleteState::Cancelled);
            return Ok(report(&*trail, DeleteOutcome::Cancelled));
        }
        trail.enter(DeleteState::Authorized);

        self.provider.delete_stack(&stack)?;
        trail.enter(DeleteState::TeardownInvoked);

        trail.enter(DeleteState::AwaitingCompletion);
        self.provider.await_deletion(&stack)?;

        trail.enter(DeleteState::Done);
        Ok(report(&*trail, DeleteOutcome::Deleted))
    }

    // -----------------------------------------------------------------------
    // Outputs
    // -----------------------------------------------------------------------

    /// Query the stack's outputs; persist them only when `save` is set.
    pub fn outputs(&self, env_id: &str, save: bool) -> Result<OutputsReport> {
        let env = environment::validate(env_id)?;
        let record = outputs::extract(self.provider, self.config, env)?;
        let saved_to = if save {
            Some(OutputStore::new(self.root).write(&record)?)
        } else {
            None
        };
        Ok(OutputsReport { record, saved_to })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaverrError;
    use crate::paths;
    use crate::safeguard::FixedAnswer;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<String>>,
        fail_build: bool,
        fail_deploy: bool,
        fail_wait: bool,
        stack_missing: bool,
        outputs: Vec<(&'static str, &'static str)>,
    }

    impl Recording {
        fn with_outputs() -> Self {
            Self {
                outputs: vec![
                    ("ApiEndpoint", "https://api.example.com"),
                    ("UserPoolId", "pool-1"),
                    ("UserPoolClientId", "client-1"),
                ],
                ..Default::default()
            }
        }

        fn log(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Provider for Recording {
        fn build(&self, env: Environment) -> Result<()> {
            self.log(format!("build {env}"));
            if self.fail_build {
                return Err(SaverrError::BuildFailed("`sam build` exited with status 1".into()));
            }
            Ok(())
        }
        fn deploy(&self, env: Environment, stack: &str, auto_confirm: bool) -> Result<()> {
            self.log(format!("deploy {env} {stack} auto_confirm={auto_confirm}"));
            if self.fail_deploy {
                return Err(SaverrError::DeployFailed("`sam deploy` exited with status 1".into()));
            }
            Ok(())
        }
        fn deploy_guided(&self) -> Result<()> {
            self.log("deploy --guided".into());
            Ok(())
        }
        fn sync(&self, env: Environment, stack: &str) -> Result<()> {
            self.log(format!("sync {env} {stack}"));
            Ok(())
        }
        fn stack_exists(&self, stack: &str) -> Result<bool> {
            self.log(format!("exists {stack}"));
            Ok(!self.stack_missing)
        }
        fn describe_outputs(&self, stack: &str) -> Result<BTreeMap<String, String>> {
            self.log(format!("describe {stack}"));
            Ok(self
                .outputs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect())
        }
        fn delete_stack(&self, stack: &str) -> Result<()> {
            self.log(format!("delete {stack}"));
            Ok(())
        }
        fn await_deletion(&self, stack: &str) -> Result<()> {
            self.log(format!("wait {stack}"));
            if self.fail_wait {
                return Err(SaverrError::TeardownFailed("Waiter StackDeleteComplete failed".into()));
            }
            Ok(())
        }
        fn tail_logs(&self, log_group: &str) -> Result<()> {
            self.log(format!("tail {log_group}"));
            Ok(())
        }
    }

    struct NeverAsked;

    impl ConfirmationProvider for NeverAsked {
        fn ask(&self, prompt: &str) -> Result<String> {
            panic!("unexpected prompt: {prompt}");
        }
    }

    fn flags(build_only: bool, skip_build: bool, guided: bool, sync: bool) -> DeployFlags {
        DeployFlags {
            build_only,
            skip_build,
            guided,
            sync,
        }
    }

    #[test]
    fn staging_standard_deploy_walks_every_state() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);

        let report = lifecycle.deploy("staging", DeployFlags::default()).unwrap();

        assert_eq!(
            report.trail,
            vec![
                DeployState::Idle,
                DeployState::Validated,
                DeployState::ModeSelected,
                DeployState::Authorized,
                DeployState::Built,
                DeployState::Invoked,
                DeployState::OutputsExtracted,
                DeployState::Persisted,
                DeployState::Done,
            ]
        );
        assert_eq!(report.request.mode, DeployMode::Standard);
        assert!(report.request.confirmed);
        assert_eq!(
            provider.calls(),
            vec![
                "build staging",
                "deploy staging saverr-staging auto_confirm=true",
                "exists saverr-staging",
                "describe saverr-staging",
            ]
        );
        match report.outcome {
            DeployOutcome::Deployed { record, path } => {
                assert_eq!(record.api_endpoint, "https://api.example.com");
                assert_eq!(path, paths::output_record_path(dir.path(), Environment::Staging));
                assert!(path.exists());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn declined_production_deploy_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let store = OutputStore::new(dir.path());
        let prior = StackOutputRecord::empty(
            Environment::Production,
            "saverr-production".into(),
            "us-east-1".into(),
        );
        store.write(&prior).unwrap();
        let before = std::fs::read_to_string(store.path(Environment::Production)).unwrap();

        let provider = Recording::with_outputs();
        let answer = FixedAnswer::new("no");
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &answer);
        let report = lifecycle
            .deploy("production", DeployFlags::default())
            .unwrap();

        assert_eq!(report.outcome, DeployOutcome::Cancelled);
        assert_eq!(report.trail.last(), Some(&DeployState::Cancelled));
        assert!(!report.request.confirmed);
        assert!(provider.calls().is_empty());
        let after = std::fs::read_to_string(store.path(Environment::Production)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn confirmed_production_deploy_keeps_changeset_prompt() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let answer = FixedAnswer::new("yes");
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &answer);
        lifecycle
            .deploy("production", flags(false, true, false, false))
            .unwrap();
        assert_eq!(
            provider.calls()[0],
            "deploy production saverr-production auto_confirm=false"
        );
    }

    #[test]
    fn invalid_environment_fails_before_side_effects() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::default();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let err = lifecycle.deploy("prod", DeployFlags::default()).unwrap_err();
        assert!(matches!(err, SaverrError::InvalidEnvironment(ref s) if s == "prod"));
        assert!(provider.calls().is_empty());
        assert!(!dir.path().join(paths::SAVERR_DIR).exists());
    }

    #[test]
    fn contradictory_flags_fail_before_side_effects() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::default();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let err = lifecycle
            .deploy("development", flags(true, true, false, false))
            .unwrap_err();
        assert!(matches!(err, SaverrError::Config(_)));
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn build_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording {
            fail_build: true,
            ..Recording::with_outputs()
        };
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let err = lifecycle
            .deploy("development", DeployFlags::default())
            .unwrap_err();
        assert!(matches!(err, SaverrError::BuildFailed(_)));
        assert_eq!(provider.calls(), vec!["build development"]);
        assert!(!paths::output_record_path(dir.path(), Environment::Development).exists());
    }

    #[test]
    fn deploy_failure_skips_outputs() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording {
            fail_deploy: true,
            ..Recording::with_outputs()
        };
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let err = lifecycle
            .deploy("staging", DeployFlags::default())
            .unwrap_err();
        assert!(matches!(err, SaverrError::DeployFailed(_)));
        assert!(!provider.calls().iter().any(|c| c.starts_with("describe")));
        assert!(!paths::output_record_path(dir.path(), Environment::Staging).exists());
    }

    #[test]
    fn build_only_wins_and_skips_confirmation() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::default();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let report = lifecycle
            .deploy("production", flags(true, false, true, true))
            .unwrap();
        assert_eq!(report.outcome, DeployOutcome::BuiltOnly);
        assert_eq!(report.request.mode, DeployMode::BuildOnly);
        assert_eq!(provider.calls(), vec!["build production"]);
        assert_eq!(report.trail.last(), Some(&DeployState::Done));
    }

    #[test]
    fn sync_beats_guided_and_writes_no_record() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let report = lifecycle
            .deploy("development", flags(false, true, true, true))
            .unwrap();
        assert_eq!(report.outcome, DeployOutcome::SyncStopped);
        assert_eq!(provider.calls(), vec!["sync development saverr-development"]);
        assert!(!paths::output_record_path(dir.path(), Environment::Development).exists());
    }

    #[test]
    fn guided_deploy_extracts_outputs() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let report = lifecycle
            .deploy("development", flags(false, true, true, false))
            .unwrap();
        assert!(matches!(report.outcome, DeployOutcome::Deployed { .. }));
        assert_eq!(provider.calls()[0], "deploy --guided");
    }

    #[test]
    fn missing_stack_after_deploy_records_blanks() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording {
            stack_missing: true,
            ..Recording::with_outputs()
        };
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let report = lifecycle
            .deploy("staging", DeployFlags::default())
            .unwrap();
        match report.outcome {
            DeployOutcome::Deployed { record, .. } => {
                assert_eq!(record.api_endpoint, "");
                assert_eq!(record.user_pool_id, "");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn held_lock_blocks_deploy() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let _held = EnvironmentLock::acquire(dir.path(), Environment::Staging).unwrap();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);
        let err = lifecycle
            .deploy("staging", DeployFlags::default())
            .unwrap_err();
        assert!(matches!(err, SaverrError::EnvironmentLocked(_)));
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn delete_production_rejects_weak_phrase() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::default();
        let answer = FixedAnswer::new("yes");
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &answer);
        let report = lifecycle.delete("production").unwrap();
        assert_eq!(report.outcome, DeleteOutcome::Cancelled);
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn delete_waits_for_completion() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::default();
        let answer = FixedAnswer::new("delete production");
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &answer);
        let report = lifecycle.delete("production").unwrap();
        assert_eq!(report.outcome, DeleteOutcome::Deleted);
        assert_eq!(
            report.trail,
            vec![
                DeleteState::Idle,
                DeleteState::Validated,
                DeleteState::Authorized,
                DeleteState::TeardownInvoked,
                DeleteState::AwaitingCompletion,
                DeleteState::Done,
            ]
        );
        assert_eq!(
            provider.calls(),
            vec!["delete saverr-production", "wait saverr-production"]
        );
    }

    #[test]
    fn delete_wait_error_surfaces_verbatim() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording {
            fail_wait: true,
            ..Default::default()
        };
        let answer = FixedAnswer::new("yes");
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &answer);
        let err = lifecycle.delete("staging").unwrap_err();
        assert_eq!(
            err.to_string(),
            "teardown failed: Waiter StackDeleteComplete failed"
        );
    }

    #[test]
    fn delete_keeps_output_record() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let answer = FixedAnswer::new("yes");
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &answer);
        lifecycle.deploy("staging", DeployFlags::default()).unwrap();
        lifecycle.delete("staging").unwrap();
        assert!(paths::output_record_path(dir.path(), Environment::Staging).exists());
    }

    #[test]
    fn outputs_saves_only_on_request() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::default();
        let provider = Recording::with_outputs();
        let lifecycle = StackLifecycle::new(dir.path(), &cfg, &provider, &NeverAsked);

        let report = lifecycle.outputs("staging", false).unwrap();
        assert!(report.saved_to.is_none());
        assert!(!paths::output_record_path(dir.path(), Environment::Staging).exists());

        let report = lifecycle.outputs("staging", true).unwrap();
        assert_eq!(
            report.saved_to,
            Some(paths::output_record_path(dir.path(), Environment::Staging))
        );
        assert_eq!(report.record.user_pool_client_id, "client-1");
    }
}
