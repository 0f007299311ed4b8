//! Shapefile format constants
//!
//! Offsets, sizes and magic numbers for the geometry (`.shp`) and
//! attribute (`.dbf`) resources.

/// Geometry file header constants
pub mod shp {
    /// File code stored big-endian at offset 0
    pub const FILE_CODE: i32 = 9994;

    /// Version stored little-endian at offset 28
    pub const VERSION: i32 = 1000;

    /// Size of the main file header in bytes
    pub const HEADER_SIZE: u64 = 100;

    /// Offset of the big-endian file length (in 16-bit words)
    pub const FILE_LENGTH_OFFSET: u64 = 24;

    /// Size of each record header (record number + content length)
    pub const RECORD_HEADER_SIZE: u64 = 8;

    /// Lengths in the file are expressed in 16-bit words
    pub const WORD_SIZE: u64 = 2;
}

/// Attribute table constants
pub mod dbf {
    /// Offset of the little-endian record count
    pub const RECORD_COUNT_OFFSET: u64 = 4;

    /// Size of the fixed table header preceding the field descriptors
    pub const HEADER_SIZE: u64 = 32;

    /// Size of one field descriptor
    pub const FIELD_DESCRIPTOR_SIZE: usize = 32;

    /// Length of the null-padded field name inside a descriptor
    pub const FIELD_NAME_SIZE: usize = 11;

    /// Offset of the field type byte inside a descriptor
    pub const FIELD_TYPE_OFFSET: usize = 11;

    /// Offset of the field length byte inside a descriptor
    pub const FIELD_LENGTH_OFFSET: usize = 16;

    /// Offset of the decimal count byte inside a descriptor
    pub const FIELD_DECIMALS_OFFSET: usize = 17;

    /// Marks the end of the field descriptor array
    pub const HEADER_TERMINATOR: u8 = 0x0D;

    /// Deletion flag of a deleted record
    pub const RECORD_DELETED: u8 = b'*';
}

/// Conventional resource extensions
pub mod extensions {
    pub const GEOMETRY: &str = "shp";
    pub const ATTRIBUTES: &str = "dbf";
    pub const GPX: &str = "gpx";
}

/// Attribute fields holding the waypoint name, in lookup order
pub const NAME_FIELDS: [&str; 2] = ["nome", "name"];
