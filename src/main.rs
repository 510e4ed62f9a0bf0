//! Gradient Card - style engine CLI for gradient border cards
//!
//! Composes, validates and audits card props from the command line.

use clap::{Parser, Subcommand};
use gradient_card::cli::{
    common::load_config, ComposeArgs, ConfigArgs, ContrastArgs, GlobalOptions, PresetsArgs,
    ValidateArgs,
};
use gradient_card::color::ResolverStrategy;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Gradient Card - compose and validate gradient border card styles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color resolver (overrides the config file)
    #[arg(long, global = true, value_name = "STRATEGY")]
    resolver: Option<ResolverStrategy>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a card and print its resolved styles
    Compose(ComposeArgs),
    /// Validate card props
    Validate(ValidateArgs),
    /// Compute the contrast ratio between two colors
    Contrast(ContrastArgs),
    /// List preset tables
    Presets(PresetsArgs),
    /// Show configuration
    Config(ConfigArgs),
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins, then `--verbose`, then the configured filter.
fn init_tracing(verbose: bool, configured: &str) {
    let fallback = if verbose { "debug" } else { configured };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.resolver) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(cli.verbose, "warn");
            eprintln!("Error: {e}");
            return e.exit_code().into();
        }
    };
    init_tracing(cli.verbose, &config.logging.filter);

    let global = GlobalOptions {
        config,
        config_path: cli.config.clone(),
    };
    tracing::debug!(resolver = %global.strategy(), "starting");

    let result = match &cli.command {
        Command::Compose(args) => args.execute(&global),
        Command::Validate(args) => args.execute(&global),
        Command::Contrast(args) => args.execute(&global),
        Command::Presets(args) => args.execute(),
        Command::Config(args) => args.execute(&global),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}
