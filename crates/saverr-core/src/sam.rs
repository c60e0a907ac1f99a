//! [`Provider`] backed by the AWS SAM CLI and the AWS CLI.
//!
//! Long-running commands (build, deploy, sync, log tail) inherit the
//! terminal so the operator sees provider output live. Query and teardown
//! commands capture stderr, which is carried verbatim into the error.

use crate::config::Config;
use crate::environment::Environment;
use crate::error::{Result, SaverrError};
use crate::provider::Provider;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

const STACK_MISSING_MARKER: &str = "does not exist";

type ArmInterrupt = Box<dyn Fn(Arc<AtomicBool>)>;

// ---------------------------------------------------------------------------
// SamCli
// ---------------------------------------------------------------------------

pub struct SamCli {
    root: PathBuf,
    sam: String,
    aws: String,
    template: String,
    region: String,
    interrupted: Arc<AtomicBool>,
    arm_interrupt: Option<ArmInterrupt>,
}

impl SamCli {
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            sam: config.provider.sam.clone(),
            aws: config.provider.aws.clone(),
            template: config.provider.template.clone(),
            region: config.resolve_region(),
            interrupted: Arc::new(AtomicBool::new(false)),
            arm_interrupt: None,
        }
    }

    /// Register `arm` to run just before a command that only ends when the
    /// operator interrupts it (`sync`, `tail_logs`). It receives the flag an
    /// interrupt handler must set for the stop to count as clean.
    pub fn on_interruptible(mut self, arm: impl Fn(Arc<AtomicBool>) + 'static) -> Self {
        self.arm_interrupt = Some(Box::new(arm));
        self
    }

    fn sam_bin(&self) -> Result<PathBuf> {
        which::which(&self.sam).map_err(|_| SaverrError::ProviderNotInstalled("sam".to_string()))
    }

    fn aws_bin(&self) -> Result<PathBuf> {
        which::which(&self.aws).map_err(|_| SaverrError::ProviderNotInstalled("aws".to_string()))
    }

    fn command(&self, bin: &Path, args: &[String]) -> Command {
        debug!(cmd = %render(bin, args), cwd = %self.root.display(), "provider command");
        let mut cmd = Command::new(bin);
        cmd.args(args).current_dir(&self.root);
        cmd
    }

    fn run_inherited(&self, bin: &Path, args: &[String]) -> Result<ExitStatus> {
        self.command(bin, args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| SaverrError::ProviderSpawn(format!("{}: {e}", bin.display())))
    }

    fn run_captured(&self, bin: &Path, args: &[String]) -> Result<Output> {
        self.command(bin, args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| SaverrError::ProviderSpawn(format!("{}: {e}", bin.display())))
    }

    fn run_interruptible(&self, bin: &Path, args: &[String]) -> Result<ExitStatus> {
        if let Some(arm) = &self.arm_interrupt {
            arm(Arc::clone(&self.interrupted));
        }
        self.run_inherited(bin, args)
    }

    /// Only an interrupt the operator raised counts. A child killed by any
    /// other signal is a failure.
    fn stopped_by_operator(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    fn region_args(&self) -> [String; 2] {
        ["--region".to_string(), self.region.clone()]
    }

    fn describe_args(&self, stack: &str, query: &str, output: &str) -> Vec<String> {
        let mut args = strings(&["cloudformation", "describe-stacks", "--stack-name", stack]);
        args.extend(self.region_args());
        args.extend(strings(&["--query", query, "--output", output]));
        args
    }
}

impl Provider for SamCli {
    fn build(&self, env: Environment) -> Result<()> {
        let bin = self.sam_bin()?;
        let args = strings(&[
            "build",
            "--config-env",
            env.as_str(),
            "--template-file",
            self.template.as_str(),
        ]);
        let status = self.run_inherited(&bin, &args)?;
        if !status.success() {
            return Err(SaverrError::BuildFailed(exit_summary("sam build", &status)));
        }
        Ok(())
    }

    fn deploy(&self, env: Environment, stack: &str, auto_confirm: bool) -> Result<()> {
        let bin = self.sam_bin()?;
        let mut args = strings(&["deploy", "--config-env", env.as_str(), "--stack-name", stack]);
        args.extend(self.region_args());
        args.push("--no-fail-on-empty-changeset".to_string());
        if auto_confirm {
            args.push("--no-confirm-changeset".to_string());
        }
        let status = self.run_inherited(&bin, &args)?;
        if !status.success() {
            return Err(SaverrError::DeployFailed(exit_summary("sam deploy", &status)));
        }
        Ok(())
    }

    fn deploy_guided(&self) -> Result<()> {
        let bin = self.sam_bin()?;
        let status = self.run_inherited(&bin, &strings(&["deploy", "--guided"]))?;
        if !status.success() {
            return Err(SaverrError::DeployFailed(exit_summary(
                "sam deploy --guided",
                &status,
            )));
        }
        Ok(())
    }

    fn sync(&self, env: Environment, stack: &str) -> Result<()> {
        let bin = self.sam_bin()?;
        let mut args = strings(&[
            "sync",
            "--stack-name",
            stack,
            "--watch",
            "--config-env",
            env.as_str(),
            "--template-file",
            self.template.as_str(),
        ]);
        args.extend(self.region_args());
        let status = self.run_interruptible(&bin, &args)?;
        if status.success() || self.stopped_by_operator() {
            return Ok(());
        }
        Err(SaverrError::SyncFailed(exit_summary("sam sync", &status)))
    }

    fn stack_exists(&self, stack: &str) -> Result<bool> {
        let bin = self.aws_bin()?;
        let out = self.run_captured(&bin, &self.describe_args(stack, "Stacks[0].StackStatus", "text"))?;
        if out.status.success() {
            return Ok(true);
        }
        let stderr = String::from_utf8_lossy(&out.stderr);
        if is_missing_stack(&stderr) {
            return Ok(false);
        }
        Err(SaverrError::StackQueryFailed(stderr.trim().to_string()))
    }

    fn describe_outputs(&self, stack: &str) -> Result<BTreeMap<String, String>> {
        let bin = self.aws_bin()?;
        let out = self.run_captured(&bin, &self.describe_args(stack, "Stacks[0].Outputs", "json"))?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            if is_missing_stack(&stderr) {
                return Ok(BTreeMap::new());
            }
            return Err(SaverrError::StackQueryFailed(stderr.trim().to_string()));
        }
        parse_outputs(&String::from_utf8_lossy(&out.stdout))
    }

    fn delete_stack(&self, stack: &str) -> Result<()> {
        let bin = self.aws_bin()?;
        let mut args = strings(&["cloudformation", "delete-stack", "--stack-name", stack]);
        args.extend(self.region_args());
        let out = self.run_captured(&bin, &args)?;
        if !out.status.success() {
            return Err(SaverrError::TeardownFailed(
                String::from_utf8_lossy(&out.stderr).trim().to_string(),
            ));
        }
        Ok(())
    }

    fn await_deletion(&self, stack: &str) -> Result<()> {
        let bin = self.aws_bin()?;
        let mut args = strings(&[
            "cloudformation",
            "wait",
            "stack-delete-complete",
            "--stack-name",
            stack,
        ]);
        args.extend(self.region_args());
        let out = self.run_captured(&bin, &args)?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let detail = if stderr.trim().is_empty() {
                exit_summary("aws cloudformation wait stack-delete-complete", &out.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(SaverrError::TeardownFailed(detail));
        }
        Ok(())
    }

    fn tail_logs(&self, log_group: &str) -> Result<()> {
        let bin = self.aws_bin()?;
        let mut args = strings(&["logs", "tail", log_group, "--follow"]);
        args.extend(self.region_args());
        let status = self.run_interruptible(&bin, &args)?;
        if status.success() || self.stopped_by_operator() {
            return Ok(());
        }
        Err(SaverrError::LogsFailed(exit_summary("aws logs tail", &status)))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawOutput {
    output_key: String,
    #[serde(default)]
    output_value: Option<String>,
}

/// Parse `describe-stacks --query Stacks[0].Outputs --output json`. A stack
/// without outputs prints `null` (or nothing at all).
pub fn parse_outputs(stdout: &str) -> Result<BTreeMap<String, String>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(BTreeMap::new());
    }
    let raw: Vec<RawOutput> = serde_json::from_str(trimmed)?;
    Ok(raw
        .into_iter()
        .map(|o| (o.output_key, o.output_value.unwrap_or_default()))
        .collect())
}

fn is_missing_stack(stderr: &str) -> bool {
    stderr.contains(STACK_MISSING_MARKER)
}

fn exit_summary(what: &str, status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("`{what}` exited with status {code}"),
        None => format!("`{what}` was terminated by a signal"),
    }
}

fn render(bin: &Path, args: &[String]) -> String {
    let mut line = bin.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
