use crate::cmd::load_config;
use crate::output::{print_fields, print_json};
use saverr_core::lifecycle::StackLifecycle;
use saverr_core::safeguard::FixedAnswer;
use saverr_core::sam::SamCli;
use std::path::Path;

pub fn run(root: &Path, env: &str, save: bool, json: bool) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let provider = SamCli::new(root, &config);
    // Read-only workflow: nothing here asks for confirmation.
    let no_prompt = FixedAnswer::new("");

    let lifecycle = StackLifecycle::new(root, &config, &provider, &no_prompt);
    let report = lifecycle.outputs(env, save)?;

    if json {
        return print_json(&report);
    }
    let record = &report.record;
    print_fields(&[
        ("environment", record.environment.as_str()),
        ("stack", record.stack_name.as_str()),
        ("api endpoint", record.api_endpoint.as_str()),
        ("user pool", record.user_pool_id.as_str()),
        ("user pool client", record.user_pool_client_id.as_str()),
        ("region", record.region.as_str()),
    ]);
    if let Some(path) = &report.saved_to {
        println!("Saved to {}", path.display());
    }
    Ok(())
}
