//! Seekable reader trait
//!
//! Both shapefile resources are read by jumping to header fields and record
//! offsets, so every decoder takes a reader that can also seek.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
///
/// Implemented for files opened from disk as well as in-memory cursors,
/// which lets the decoders be exercised without touching the file system.
pub trait SeekableReader: Read + Seek + Send + Sync {}

impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
