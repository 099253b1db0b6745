/*!

This is the command line interface for the Kubernetes data sources. It runs the same lifecycle
Terraform does (configure the provider, validate, configure and read a data source) and prints
the result, which is useful for inspecting schemas and state without a Terraform run.

!*/

mod diagnostics;
mod list;
mod manifest;
mod read;
mod schema;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use provider::{K8sProvider, ProviderConfig};
use std::path::PathBuf;

/// Inspect and read the Kubernetes data sources of the Terraform provider.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to the kubeconfig file. When omitted, the KUBECONFIG environment variable and the
    /// in-cluster configuration are tried.
    #[clap(long = "kubeconfig")]
    kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use.
    #[clap(long = "context")]
    context: Option<String>,
    /// Do not connect to a cluster.
    #[clap(long = "offline")]
    offline: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// List the data sources served by the provider.
    List(list::List),
    /// Print the schema of the provider or of a data source as JSON.
    Schema(schema::Schema),
    /// Read an object through a data source and print the resulting state as JSON.
    Read(read::Read),
    /// Render a manifest data source from a configuration file and print the YAML.
    Manifest(manifest::Manifest),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let provider = K8sProvider::new();
    let provider_config = ProviderConfig {
        offline: Some(args.offline),
        kubeconfig: args.kubeconfig,
        context: args.context,
    };
    match args.command {
        Command::List(list) => list.run(&provider),
        Command::Schema(schema) => schema.run(&provider),
        Command::Read(read) => read.run(&provider, provider_config).await,
        Command::Manifest(manifest) => manifest.run(&provider).await,
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for the provider crates only.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("tfk8s_provider"), level)
                .init();
        }
    }
}
