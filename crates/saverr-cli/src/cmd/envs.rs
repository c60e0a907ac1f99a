use crate::output::{print_json, print_table};
use saverr_core::environment::{Environment, Operation};

pub fn run(json: bool) -> anyhow::Result<()> {
    let describe = |env: Environment, op: Operation| {
        env.confirmation_policy(op)
            .required_phrase()
            .map(|p| format!("type '{p}'"))
            .unwrap_or_else(|| "none".to_string())
    };

    if json {
        let items: Vec<serde_json::Value> = Environment::all()
            .iter()
            .map(|&env| {
                serde_json::json!({
                    "environment": env,
                    "default": env == Environment::DEFAULT,
                    "deploy_confirmation": env.confirmation_policy(Operation::Deploy),
                    "deploy_phrase": env.confirmation_policy(Operation::Deploy).required_phrase(),
                    "delete_confirmation": env.confirmation_policy(Operation::Teardown),
                    "delete_phrase": env.confirmation_policy(Operation::Teardown).required_phrase(),
                    "sync_recommended": env.sync_recommended(),
                })
            })
            .collect();
        return print_json(&items);
    }

    let rows = Environment::all()
        .iter()
        .map(|&env| {
            let name = if env == Environment::DEFAULT {
                format!("{env} (default)")
            } else {
                env.to_string()
            };
            vec![
                name,
                describe(env, Operation::Deploy),
                describe(env, Operation::Teardown),
                if env.sync_recommended() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(&["ENVIRONMENT", "DEPLOY CONFIRM", "DELETE CONFIRM", "SYNC"], rows);
    Ok(())
}
