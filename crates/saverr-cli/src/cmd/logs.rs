use crate::cmd::{install_interrupt_handler, load_config};
use crate::output::{print_json, print_table};
use anyhow::Context;
use saverr_core::environment::{self, Environment};
use saverr_core::functions::{self, FunctionResolver};
use saverr_core::paths;
use saverr_core::provider::Provider;
use saverr_core::sam::SamCli;
use std::path::Path;

pub fn run(root: &Path, env: &str, alias: Option<&str>, json: bool) -> anyhow::Result<()> {
    let env = environment::validate(env)?;
    let config = load_config(root)?;
    let resolver = FunctionResolver::new(config.prefix());

    let Some(alias) = alias else {
        return print_catalog(&resolver, env, json);
    };

    let function = resolver.resolve(alias, env);
    let group = paths::log_group(&function);
    if functions::lookup(alias).is_none() {
        tracing::debug!(alias, "not a known alias; using it as the function name");
    }
    eprintln!("Tailing {group} (Ctrl-C to stop)");

    let provider = SamCli::new(root, &config).on_interruptible(install_interrupt_handler);
    provider
        .tail_logs(&group)
        .with_context(|| format!("failed to tail logs for {function}"))?;
    Ok(())
}

fn print_catalog(resolver: &FunctionResolver, env: Environment, json: bool) -> anyhow::Result<()> {
    if json {
        let items: Vec<serde_json::Value> = functions::CATALOG
            .iter()
            .map(|f| {
                serde_json::json!({
                    "domain": f.domain,
                    "alias": f.alias,
                    "function": resolver.qualified_name(f, env),
                })
            })
            .collect();
        return print_json(&items);
    }

    println!("Usage: saverr logs {env} <alias>\n");
    for (domain, entries) in functions::catalog_by_domain() {
        println!("{domain}");
        let rows = entries
            .into_iter()
            .map(|f| vec![format!("  {}", f.alias), resolver.qualified_name(f, env)])
            .collect();
        print_table(&["  ALIAS", "FUNCTION"], rows);
        println!();
    }
    Ok(())
}
