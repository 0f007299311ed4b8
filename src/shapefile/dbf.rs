//! Attribute table (`.dbf`) decoder

use byteorder::ReadBytesExt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::io::byte_order::{ByteOrderHandler, LittleEndianHandler};
use crate::io::seekable::SeekableReader;
use crate::shapefile::constants::dbf;
use crate::shapefile::errors::{ShapeError, ShapeResult};
use crate::utils::logger::Diagnostics;
use crate::utils::string_utils;

/// One column of the attribute table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfField {
    pub name: String,
    /// dBase type character (`C`, `N`, `F`, `D`, `L`, ...)
    pub field_type: char,
    pub length: usize,
    pub decimals: u8,
    /// Offset inside a record, counted after the deletion flag
    pub offset: usize,
}

/// An opened attribute table
pub struct DbfFile {
    reader: Box<dyn SeekableReader>,
    record_count: usize,
    header_length: u64,
    record_length: u64,
    fields: Vec<DbfField>,
}

impl DbfFile {
    /// Opens the attribute table at `path`
    ///
    /// Any failure to open the file is reported as a missing attribute source.
    pub fn open(path: &Path, diagnostics: Diagnostics) -> ShapeResult<Self> {
        let file = File::open(path).map_err(|e| {
            diagnostics.debug(format_args!("Cannot open {}: {}", path.display(), e));
            ShapeError::AttributeSourceMissing(path.to_path_buf())
        })?;
        diagnostics.debug(format_args!("Opened attribute file {}", path.display()));
        Self::from_reader(Box::new(BufReader::new(file)), diagnostics)
    }

    /// Decodes the table header and field descriptors from any seekable reader
    pub fn from_reader(mut reader: Box<dyn SeekableReader>, diagnostics: Diagnostics) -> ShapeResult<Self> {
        let little = LittleEndianHandler;

        reader.seek(SeekFrom::Start(dbf::RECORD_COUNT_OFFSET))?;
        let record_count = little.read_u32(reader.as_mut())? as usize;
        let header_length = little.read_u16(reader.as_mut())? as u64;
        let record_length = little.read_u16(reader.as_mut())? as u64;

        if header_length <= dbf::HEADER_SIZE {
            return Err(ShapeError::InvalidHeader(format!(
                "attribute header length {} is too short", header_length
            )));
        }
        if record_length == 0 {
            return Err(ShapeError::InvalidHeader("attribute record length is zero".to_string()));
        }

        let mut descriptors = vec![0u8; (header_length - dbf::HEADER_SIZE) as usize];
        reader.seek(SeekFrom::Start(dbf::HEADER_SIZE))?;
        reader.read_exact(&mut descriptors)?;

        let fields = Self::parse_fields(&descriptors)?;
        let used: usize = 1 + fields.iter().map(|f| f.length).sum::<usize>();
        if used as u64 > record_length {
            return Err(ShapeError::InvalidHeader(format!(
                "fields need {} bytes but records are {} bytes long", used, record_length
            )));
        }

        diagnostics.debug(format_args!("Num records: {}", record_count));
        diagnostics.debug(format_args!("Num fields: {}", fields.len()));
        for field in &fields {
            diagnostics.debug(format_args!("\t{}\t{}\t{}", field.name, field.length, field.decimals));
        }

        Ok(DbfFile {
            reader,
            record_count,
            header_length,
            record_length,
            fields,
        })
    }

    /// Parses 32-byte field descriptors up to the header terminator
    fn parse_fields(descriptors: &[u8]) -> ShapeResult<Vec<DbfField>> {
        let mut fields = Vec::new();
        let mut offset = 0;

        for chunk in descriptors.chunks(dbf::FIELD_DESCRIPTOR_SIZE) {
            if chunk[0] == dbf::HEADER_TERMINATOR {
                return Ok(fields);
            }
            if chunk.len() < dbf::FIELD_DESCRIPTOR_SIZE {
                break;
            }

            let mut raw_name = chunk[..dbf::FIELD_NAME_SIZE].to_vec();
            if let Some(nul) = raw_name.iter().position(|&b| b == 0) {
                raw_name.truncate(nul);
            }

            let length = chunk[dbf::FIELD_LENGTH_OFFSET] as usize;
            fields.push(DbfField {
                name: String::from_utf8_lossy(&raw_name).into_owned(),
                field_type: chunk[dbf::FIELD_TYPE_OFFSET] as char,
                length,
                decimals: chunk[dbf::FIELD_DECIMALS_OFFSET],
                offset,
            });
            offset += length;
        }

        Err(ShapeError::InvalidHeader("field descriptor terminator not found".to_string()))
    }

    /// Number of rows declared in the header, deleted rows included
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Column descriptors in table order
    pub fn fields(&self) -> &[DbfField] {
        &self.fields
    }

    /// Index of the column named exactly `name`
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Whether row `record` carries the deletion flag
    pub fn is_deleted(&mut self, record: usize) -> ShapeResult<bool> {
        self.seek_record(record)?;
        Ok(self.reader.read_u8()? == dbf::RECORD_DELETED)
    }

    /// Reads a column value as text, trimmed of padding
    pub fn read_string(&mut self, record: usize, field: usize) -> ShapeResult<String> {
        let descriptor = self.fields.get(field).ok_or_else(|| {
            ShapeError::GenericError(format!("attribute field #{} does not exist", field))
        })?;
        let (field_offset, length) = (descriptor.offset as u64, descriptor.length);

        let start = self.seek_record(record)?;
        self.reader.seek(SeekFrom::Start(start + 1 + field_offset))?;

        let mut buffer = vec![0u8; length];
        self.reader.read_exact(&mut buffer)?;
        Ok(string_utils::decode_field(&buffer))
    }

    /// Seeks to the deletion flag of row `record` and returns its offset
    fn seek_record(&mut self, record: usize) -> ShapeResult<u64> {
        if record >= self.record_count {
            return Err(ShapeError::MalformedRecord {
                index: record,
                reason: format!("only {} attribute rows available", self.record_count),
            });
        }
        let start = self.header_length + record as u64 * self.record_length;
        self.reader.seek(SeekFrom::Start(start))?;
        Ok(start)
    }
}
