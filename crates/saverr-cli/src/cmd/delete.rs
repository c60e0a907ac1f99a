use crate::cmd::load_config;
use crate::output::print_json;
use crate::prompts::confirmation_from;
use saverr_core::lifecycle::{DeleteOutcome, StackLifecycle};
use saverr_core::sam::SamCli;
use std::path::Path;

pub fn run(root: &Path, env: &str, confirm: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let provider = SamCli::new(root, &config);
    let confirmation = confirmation_from(confirm);

    let lifecycle = StackLifecycle::new(root, &config, &provider, confirmation.as_ref());
    let report = lifecycle.delete(env)?;

    if json {
        return print_json(&report);
    }
    match report.outcome {
        DeleteOutcome::Deleted => println!("Deleted {}.", report.stack_name),
        DeleteOutcome::Cancelled => {
            println!("Deletion of {} cancelled.", report.stack_name)
        }
    }
    Ok(())
}
