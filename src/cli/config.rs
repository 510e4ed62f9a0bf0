//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult, GlobalOptions};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(global),
            ConfigCommand::Path => {
                let path = match &global.config_path {
                    Some(path) => path.clone(),
                    None => Config::config_file_path()
                        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?,
                };
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let config = &global.config;

        if self.json {
            print_json(config)
        } else {
            output_human_readable(config);
            Ok(())
        }
    }
}

fn output_human_readable(config: &Config) {
    println!("Configuration:");
    println!();
    println!("Resolver:");
    println!("  Strategy:    {}", config.resolver.strategy);
    println!();
    println!("Contrast:");
    println!("  Text color:  {}", config.contrast.text_color);
    println!();
    println!("Cache:");
    if config.cache.capacity == 0 {
        println!("  Capacity:    disabled");
    } else {
        println!("  Capacity:    {}", config.cache.capacity);
    }
    println!();
    println!("Logging:");
    println!("  Filter:      {}", config.logging.filter);
}
