// consul-kv-diff
// Compares a local KV JSON export with the Consul KV store

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use consul_kv_diff::core::{App, ConfigOverrides, DiffConfig, KvDiffError, Profile};
use consul_kv_diff::render::{render_report, OutputFormat};

//--------------------------------------------------------<<

/// Exit status when the two sides match
const EXIT_CLEAN: u8 = 0;
/// Exit status when differences were found
const EXIT_DIFFERENCES: u8 = 1;
/// Exit status for load, fetch, and configuration errors
const EXIT_ERROR: u8 = 2;

/// consul-kv-diff compares local KV JSON with Consul KV store.
#[derive(Parser, Debug)]
#[command(name = "consul-kv-diff")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  consul-kv-diff --local export.json
  consul-kv-diff --local export.json --consul-addr http://consul:8500
  consul-kv-diff --local export.json --datacenter us-east-1
  consul-kv-diff --local export.json --prefix app/production")]
struct Cli {
    /// Path to local KV JSON file (`consul kv export` format)
    #[arg(short, long)]
    local: PathBuf,

    /// Consul HTTP API address [default: http://127.0.0.1:8500]
    #[arg(long, env = "CONSUL_HTTP_ADDR")]
    consul_addr: Option<String>,

    /// Consul datacenter [default: dc1]
    #[arg(long)]
    datacenter: Option<String>,

    /// KV prefix to compare
    #[arg(long)]
    prefix: Option<String>,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long)]
    timeout: Option<u64>,

    /// YAML profile with connection settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ┌──────────────────────────────────────────────────────────────────────────────┐
// │                               MAIN ENTRY POINT                               │
// └──────────────────────────────────────────────────────────────────────────────┘

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let outcome = run(cli, &mut io::stdout()).await;
    if let Err(e) = &outcome {
        eprintln!("{}", error_message(e));
    }

    ExitCode::from(exit_status(&outcome))
}

/// Run one comparison and write the report to `out`
/// Returns whether differences were found
async fn run(cli: Cli, out: &mut impl Write) -> Result<bool> {
    let profile = cli
        .config
        .as_deref()
        .map(Profile::load)
        .transpose()
        .map_err(with_operation)?;

    let overrides = ConfigOverrides {
        consul_addr: cli.consul_addr,
        datacenter: cli.datacenter,
        prefix: cli.prefix,
        timeout_secs: cli.timeout,
        format: cli.format,
    };

    let config =
        DiffConfig::resolve(cli.local, profile.as_ref(), overrides).map_err(with_operation)?;
    let format = config.format;

    let app = App::new(config).context("creating Consul client")?;
    let result = app.run().await.map_err(with_operation)?;

    if !result.has_differences() {
        info!("No differences found");
    }

    render_report(&result, format, out).context("writing report")?;
    out.flush().context("writing report")?;

    Ok(result.has_differences())
}

/// Attach the failed operation so the message reads `Error <operation>: <cause>`
fn with_operation(e: KvDiffError) -> anyhow::Error {
    let operation = e.operation();
    anyhow::Error::new(e).context(operation)
}

fn error_message(e: &anyhow::Error) -> String {
    format!("Error {:#}", e)
}

fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(false) => EXIT_CLEAN,
        Ok(true) => EXIT_DIFFERENCES,
        Err(_) => EXIT_ERROR,
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbosity >= 2)
        .init();
}
