//! Shared CLI types: errors, exit codes, global options and input loading.

use crate::color::{ColorResolver, ResolverStrategy};
use crate::compose::CardComposer;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsReporter, FanoutReporter, MemoryReporter, TracingReporter};
use crate::models::CardProps;
use anyhow::Context;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was processed but failed validation
    ValidationError = 1,
    /// Input could not be read or parsed
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}

/// A command failure with the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or parse failure (exit 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Loaded configuration, with `--resolver` already applied
    pub config: Config,
    /// Config file in use, from `--config` or the platform default
    pub config_path: Option<PathBuf>,
}

impl GlobalOptions {
    /// The effective resolver strategy.
    #[must_use]
    pub fn strategy(&self) -> ResolverStrategy {
        self.config.resolver.strategy
    }

    /// Builds the effective resolver.
    #[must_use]
    pub fn build_resolver(&self) -> Arc<dyn ColorResolver> {
        self.strategy().build()
    }

    /// Builds a composer whose diagnostics are both logged and collected.
    #[must_use]
    pub fn composer(&self) -> (CardComposer, Arc<MemoryReporter>) {
        let memory = Arc::new(MemoryReporter::new());
        let reporters: Vec<Arc<dyn DiagnosticsReporter>> =
            vec![memory.clone(), Arc::new(TracingReporter)];
        let composer =
            CardComposer::from_config(&self.config, Arc::new(FanoutReporter::new(reporters)));
        (composer, memory)
    }
}

/// Loads configuration from `path`, or from the platform default location.
///
/// A `resolver` override is applied before validation, so the contrast text
/// color must resolve with the strategy actually in use.
pub fn load_config(path: Option<&Path>, resolver: Option<ResolverStrategy>) -> CliResult<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?,
    };

    let mut config = Config::read_from(&path)
        .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
    if let Some(strategy) = resolver {
        config.resolver.strategy = strategy;
    }

    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))
        .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

    Ok(config)
}

/// Reads card props from a file, or from stdin when `path` is `-`.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
pub fn read_props(path: &Path) -> CliResult<CardProps> {
    let is_stdin = path.as_os_str() == "-";
    let content = if is_stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::io(format!("Failed to read props from stdin: {e}")))?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            CliError::io(format!("Failed to read props file {}: {e}", path.display()))
        })?
    };

    let is_toml = !is_stdin && path.extension().is_some_and(|ext| ext == "toml");
    let parsed = if is_toml {
        toml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| CliError::io(format!("Failed to parse props from {}: {e}", path.display())))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
