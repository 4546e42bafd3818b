//! halfuzz — regenerates build rules and test configs for HAL function fuzzers.

mod commands;
mod manifest;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use halfuzz_core::CoreError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::generate::Outputs;
use manifest::{HalfuzzManifest, Settings};

/// Exit status when the build environment is not set up.
const EXIT_STARTUP: i32 = 2;

#[derive(Parser)]
#[command(name = "halfuzz", version, about = "HAL function fuzzer build rule and config generator")]
struct Cli {
    /// Android build root
    #[arg(long, global = true, env = "ANDROID_BUILD_TOP")]
    build_top: Option<PathBuf>,
    /// Read HAL targets from a TOML catalog instead of hardware/interfaces
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Render everything but only print the paths that would be written
    #[arg(long, global = true)]
    dry_run: bool,
    /// Log filter (e.g., warn, info, halfuzz_build=debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate func_fuzzer Android.bp files
    BuildRules,
    /// Regenerate func_fuzzer Android.mk and AndroidTest.xml files
    Configs,
    /// Regenerate build rules and configs
    All,
    /// List HAL targets and what would be generated for them
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(exit_code(&e));
    }
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<CoreError>() {
        Some(CoreError::MissingBuildTop) => EXIT_STARTUP,
        _ => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let manifest = HalfuzzManifest::find_and_load(&cwd)?.map(|(found, dir)| {
        tracing::debug!(dir = %dir.display(), "using {}", manifest::MANIFEST_FILE);
        found
    });
    let settings = Settings::resolve(
        cli.build_top.as_deref(),
        cli.catalog.as_deref(),
        manifest.as_ref(),
    )?;

    match cli.command {
        Commands::BuildRules => {
            commands::generate::run(&settings, Outputs::BuildRules, cli.dry_run)
        }
        Commands::Configs => commands::generate::run(&settings, Outputs::Configs, cli.dry_run),
        Commands::All => commands::generate::run(&settings, Outputs::All, cli.dry_run),
        Commands::List { json } => commands::list::run(&*settings.catalog, json),
    }
}
