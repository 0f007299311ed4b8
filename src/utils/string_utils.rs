//! String utility functions
//!
//! Utilities for working with fixed-width text from attribute tables.

/// Decodes a fixed-width field value
///
/// Decodes lossily as UTF-8 and strips the blank and null padding dBase
/// writers use to fill the column width, in any mix of the two.
pub fn decode_field(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer)
        .trim_matches(|c: char| c == ' ' || c == '\0')
        .to_string()
}
