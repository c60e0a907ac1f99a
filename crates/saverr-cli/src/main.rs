mod cmd;
mod output;
mod prompts;
mod root;

use clap::{Parser, Subcommand};
use saverr_core::environment::Environment;
use saverr_core::mode::DeployFlags;
use saverr_core::SaverrError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "saverr",
    about = "Deploy, sync, tear down and inspect saverr environments",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .saverr/, template.yaml or .git/)
    #[arg(long, global = true, env = "SAVERR_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and deploy an environment's stack
    Deploy {
        /// development, staging or production
        #[arg(default_value = Environment::DEFAULT.as_str())]
        env: String,
        /// Build artifacts and stop
        #[arg(long)]
        build_only: bool,
        /// Deploy the last build without rebuilding
        #[arg(long)]
        skip_build: bool,
        /// Interactive deploy; the provider prompts for parameters
        #[arg(long)]
        guided: bool,
        /// Hot-reload: watch sources and push changes until interrupted
        #[arg(long)]
        sync: bool,
        /// Answer the confirmation prompt non-interactively
        #[arg(long, value_name = "PHRASE")]
        confirm: Option<String>,
    },

    /// Delete an environment's stack and wait for completion
    Delete {
        #[arg(default_value = Environment::DEFAULT.as_str())]
        env: String,
        /// Answer the confirmation prompt non-interactively
        #[arg(long, value_name = "PHRASE")]
        confirm: Option<String>,
    },

    /// Show the deployed stack's outputs
    Outputs {
        #[arg(default_value = Environment::DEFAULT.as_str())]
        env: String,
        /// Also write the output record to .saverr/outputs/<env>.json
        #[arg(long)]
        save: bool,
    },

    /// Follow a function's logs (omit the alias to list aliases)
    Logs {
        #[arg(default_value = Environment::DEFAULT.as_str())]
        env: String,
        /// Short alias (e.g. login) or a fully qualified function name
        alias: Option<String>,
    },

    /// List environments and their safety policy
    Envs,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Deploy {
            env,
            build_only,
            skip_build,
            guided,
            sync,
            confirm,
        } => cmd::deploy::run(
            &root,
            &env,
            DeployFlags {
                build_only,
                skip_build,
                guided,
                sync,
            },
            confirm,
            cli.json,
        ),
        Commands::Delete { env, confirm } => cmd::delete::run(&root, &env, confirm, cli.json),
        Commands::Outputs { env, save } => cmd::outputs::run(&root, &env, save, cli.json),
        Commands::Logs { env, alias } => cmd::logs::run(&root, &env, alias.as_deref(), cli.json),
        Commands::Envs => cmd::envs::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        if let Some(SaverrError::InvalidEnvironment(_)) = e.downcast_ref::<SaverrError>() {
            eprintln!("valid environments:");
            for env in Environment::all() {
                eprintln!("  {env}");
            }
        }
        std::process::exit(1);
    }
}
