//! Low-level binary input
//!
//! Reader abstractions and byte-order strategies shared by the
//! geometry and attribute decoders.

pub mod seekable;
pub mod byte_order;
