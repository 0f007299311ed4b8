//! Utility modules for common functionality
//!
//! This module provides helpers used throughout the application.

pub mod logger;
pub mod progress;
pub mod path_utils;
pub(crate) mod string_utils;
pub mod format_utils;
