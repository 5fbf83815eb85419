//! `gofem-docs` — Generates the Gofem HTML package documentation.
//!
//! **Outputs:**
//! - `<out>/index.html` — Package index
//! - `<out>/xx<package>.html` — Per-package pages wrapping `godoc -html` output
//!
//! **Usage:**
//! ```
//! gofem-docs [--config <path>] [--out <path>] [--license <path>]
//!            [--package <id>]... [--keep-going] [--verbose] [--debug] [--json]
//! ```
//!
//! Exits non-zero if the documentation tool failed for any package.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use gofem_docs::config::Config;
use gofem_docs::generate;
use gofem_docs::report::GenerationReport;
use gofem_docs::runner::{ExternalTool, RunOptions};
use tracing_subscriber::EnvFilter;

/// Generate the Gofem package documentation site.
#[derive(Parser)]
#[command(
    name = "gofem-docs",
    about = "Generate the Gofem package documentation site"
)]
struct Args {
    /// TOML configuration file (defaults describe the Gofem repository).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the generated pages.
    #[arg(long)]
    out: Option<PathBuf>,

    /// License file embedded in every page footer.
    #[arg(long)]
    license: Option<PathBuf>,

    /// Only document these packages (repeatable).
    #[arg(long = "package", value_name = "ID")]
    packages: Vec<String>,

    /// Keep generating pages when the documentation tool fails.
    #[arg(long)]
    keep_going: bool,

    /// Log the captured output of every tool run.
    #[arg(long)]
    verbose: bool,

    /// Log every command line before it runs.
    #[arg(long)]
    debug: bool,

    /// Print the generation report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = resolve_config(&args)?;
    let tool = ExternalTool::new(
        &config.tool,
        RunOptions {
            verbose: args.verbose,
            debug: args.debug,
        },
    );
    let report = generate(&config, &tool)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print_summary(&report);
    }

    if !report.all_succeeded() {
        eprintln!(
            "Documentation tool failed for {} package(s).",
            report.failures()
        );
        process::exit(exit_code(&report));
    }

    Ok(())
}

/// Loads the configuration named by `--config` (or the defaults) and applies the flags.
fn resolve_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply(args, config)
}

/// Overrides `config` with the command-line flags.
fn apply(args: &Args, mut config: Config) -> Result<Config> {
    if let Some(out) = &args.out {
        config.out_dir = out.clone();
    }
    if let Some(license) = &args.license {
        config.license = license.clone();
    }
    config.keep_going |= args.keep_going;
    config.select(&args.packages)?;
    Ok(config)
}

fn print_summary(report: &GenerationReport) {
    println!("Documentation generated.");
    println!("  Index: {}", report.index.display());
    for pkg in &report.packages {
        let status = if pkg.succeeded { "ok" } else { "FAILED" };
        println!(
            "  [{}] {} -> {} ({} source links)",
            status,
            pkg.id,
            pkg.path.display(),
            pkg.links_rewritten
        );
    }
}

/// Process exit status: 1 when any tool run failed, 0 otherwise.
fn exit_code(report: &GenerationReport) -> i32 {
    if report.all_succeeded() {
        0
    } else {
        1
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
