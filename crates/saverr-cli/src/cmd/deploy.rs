use crate::cmd::{install_interrupt_handler, load_config};
use crate::output::{print_fields, print_json};
use crate::prompts::confirmation_from;
use saverr_core::lifecycle::{DeployOutcome, DeployReport, StackLifecycle};
use saverr_core::mode::DeployFlags;
use saverr_core::sam::SamCli;
use std::path::Path;

pub fn run(
    root: &Path,
    env: &str,
    flags: DeployFlags,
    confirm: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let provider = SamCli::new(root, &config).on_interruptible(install_interrupt_handler);
    let confirmation = confirmation_from(confirm);

    let lifecycle = StackLifecycle::new(root, &config, &provider, confirmation.as_ref());
    let report = lifecycle.deploy(env, flags)?;

    if json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &DeployReport) {
    let env = report.request.environment;
    match &report.outcome {
        DeployOutcome::Deployed { record, path } => {
            println!("Deployed {} ({})", report.stack_name, report.request.mode);
            print_fields(&[
                ("api endpoint", record.api_endpoint.as_str()),
                ("user pool", record.user_pool_id.as_str()),
                ("user pool client", record.user_pool_client_id.as_str()),
                ("region", record.region.as_str()),
            ]);
            println!("Outputs saved to {}", path.display());
            if !record.is_complete() {
                eprintln!("warning: some stack outputs were missing and are recorded as empty");
            }
        }
        DeployOutcome::BuiltOnly => println!("Build complete for {env}; nothing deployed."),
        DeployOutcome::SyncStopped => println!("Sync for {} stopped.", report.stack_name),
        DeployOutcome::Cancelled => println!("Deployment to {env} cancelled."),
    }
}
