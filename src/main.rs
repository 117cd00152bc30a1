use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tfgrade::config::{Mode, RunConfig};
use tracing_subscriber::EnvFilter;

/// tfgrade — grading harness for the Terraform state migration challenge.
///
/// Checks the submitted scenario files offline, optionally runs live
/// Terraform verification, optionally checks evidence artifacts, and prints
/// a scored report. Exits 0 when the overall score is at least 60%.
#[derive(Parser, Debug)]
#[command(name = "tfgrade", version, about)]
struct Cli {
    /// Challenge directory containing the scenario folders.
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Run live Terraform verification.
    #[arg(long)]
    verify: bool,

    /// Check for evidence files.
    #[arg(long)]
    evidence: bool,

    /// Verification mode.
    #[arg(long, value_enum, default_value_t = Mode::Localstack)]
    mode: Mode,

    /// Run all checks (implies --verify and --evidence).
    #[arg(long)]
    all: bool,

    /// Enable verbose logging (sets RUST_LOG=debug).
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    tfgrade::runner::run(&config).await
}

fn resolve(cli: Cli) -> anyhow::Result<RunConfig> {
    let root = cli
        .dir
        .canonicalize()
        .with_context(|| format!("grading directory {} not found", cli.dir.display()))?;
    Ok(RunConfig::new(
        root,
        cli.verify,
        cli.evidence,
        cli.mode,
        cli.all,
    ))
}
