//! Command pattern interfaces
//!
//! This module defines the Command interface implemented by every
//! CLI operation.

use crate::shapefile::errors::ShapeResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> ShapeResult<()>;
}
