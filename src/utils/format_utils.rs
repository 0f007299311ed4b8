//! Numeric formatting for document output

/// Digits after the decimal point for every coordinate
pub const COORDINATE_PRECISION: usize = 8;

/// Formats a coordinate as fixed-point with eight decimals
///
/// Rust formatting ignores the process locale, so the separator is always
/// a period.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.*}", COORDINATE_PRECISION, value)
}
