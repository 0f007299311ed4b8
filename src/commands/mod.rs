//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application
//! using the Command pattern.

pub mod command_traits;
pub mod convert_command;

pub use command_traits::Command;
pub use convert_command::ConvertCommand;
