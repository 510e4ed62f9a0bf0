//! CLI command handlers for Gradient Card.
//!
//! This module provides headless, scriptable access to the style engine
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod compose;
pub mod config;
pub mod contrast;
pub mod presets;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, GlobalOptions};
pub use compose::ComposeArgs;
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use presets::PresetsArgs;
pub use validate::ValidateArgs;
