//! Geometry (`.shp`) file decoder
//!
//! Reads the 100-byte main header and walks the record headers once to
//! build an index of record offsets. Vertices are only decoded on demand.

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::io::byte_order::{BigEndianHandler, ByteOrderHandler, LittleEndianHandler};
use crate::io::seekable::SeekableReader;
use crate::shapefile::constants::shp;
use crate::shapefile::errors::{ShapeError, ShapeResult};
use crate::shapefile::types::ShapeType;
use crate::utils::logger::Diagnostics;

/// Location of one record's content inside the geometry file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordEntry {
    /// Byte offset of the record content (after the record header)
    pub offset: u64,
    /// Content length in bytes
    pub length: u64,
}

/// Extent declared in the main file header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// An opened geometry file with its record index
pub struct ShpFile {
    reader: Box<dyn SeekableReader>,
    shape_type: ShapeType,
    extent: Extent,
    records: Vec<RecordEntry>,
}

impl ShpFile {
    /// Opens the geometry file at `path`
    ///
    /// Any failure to open the file is reported as a missing geometry source.
    pub fn open(path: &Path, diagnostics: Diagnostics) -> ShapeResult<Self> {
        let file = File::open(path).map_err(|e| {
            diagnostics.debug(format_args!("Cannot open {}: {}", path.display(), e));
            ShapeError::GeometrySourceMissing(path.to_path_buf())
        })?;
        diagnostics.debug(format_args!("Opened geometry file {}", path.display()));
        Self::from_reader(Box::new(BufReader::new(file)), diagnostics)
    }

    /// Decodes the header and record index from any seekable reader
    pub fn from_reader(mut reader: Box<dyn SeekableReader>, diagnostics: Diagnostics) -> ShapeResult<Self> {
        let big = BigEndianHandler;
        let little = LittleEndianHandler;

        reader.seek(SeekFrom::Start(0))?;
        let file_code = big.read_i32(reader.as_mut())?;
        if file_code != shp::FILE_CODE {
            return Err(ShapeError::InvalidHeader(format!(
                "unexpected geometry file code {}", file_code
            )));
        }

        reader.seek(SeekFrom::Start(shp::FILE_LENGTH_OFFSET))?;
        let length_words = big.read_i32(reader.as_mut())?;
        let version = little.read_i32(reader.as_mut())?;
        if version != shp::VERSION {
            return Err(ShapeError::InvalidHeader(format!(
                "unsupported geometry file version {}", version
            )));
        }

        let shape_type = ShapeType::from_code(little.read_i32(reader.as_mut())?);
        let extent = Extent {
            min_x: little.read_f64(reader.as_mut())?,
            min_y: little.read_f64(reader.as_mut())?,
            max_x: little.read_f64(reader.as_mut())?,
            max_y: little.read_f64(reader.as_mut())?,
        };

        let actual_length = reader.seek(SeekFrom::End(0))?;
        let declared_length = (length_words.max(0) as u64) * shp::WORD_SIZE;
        let end = if declared_length > actual_length {
            diagnostics.warn(format_args!(
                "Geometry header declares {} bytes but file has {}", declared_length, actual_length
            ));
            actual_length
        } else {
            declared_length
        };

        let records = Self::index_records(reader.as_mut(), end)?;

        diagnostics.debug(format_args!("SHP type: {}", shape_type));
        diagnostics.debug(format_args!("SHP file size: {} bytes", end));
        diagnostics.debug(format_args!("SHP extent: x [{}, {}], y [{}, {}]",
                                       extent.min_x, extent.max_x, extent.min_y, extent.max_y));
        diagnostics.debug(format_args!("Num records: {}", records.len()));

        Ok(ShpFile {
            reader,
            shape_type,
            extent,
            records,
        })
    }

    /// Walks the record headers between the main header and `end`
    fn index_records(reader: &mut dyn SeekableReader, end: u64) -> ShapeResult<Vec<RecordEntry>> {
        let big = BigEndianHandler;
        let mut records = Vec::new();
        let mut position = shp::HEADER_SIZE;

        while position + shp::RECORD_HEADER_SIZE <= end {
            reader.seek(SeekFrom::Start(position))?;
            let _record_number = big.read_i32(reader)?;
            let content_words = big.read_i32(reader)?;
            if content_words < 0 {
                return Err(ShapeError::MalformedRecord {
                    index: records.len(),
                    reason: format!("negative content length {}", content_words),
                });
            }

            let offset = position + shp::RECORD_HEADER_SIZE;
            let length = content_words as u64 * shp::WORD_SIZE;
            if offset + length > end {
                return Err(ShapeError::MalformedRecord {
                    index: records.len(),
                    reason: "record extends past end of file".to_string(),
                });
            }

            records.push(RecordEntry { offset, length });
            position = offset + length;
        }

        Ok(records)
    }

    /// Geometry type declared in the header
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Extent declared in the header
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of records in the file
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Index entry of record `index`
    pub fn record(&self, index: usize) -> Option<RecordEntry> {
        self.records.get(index).copied()
    }

    /// Reads the first vertex of record `index` as `(x, y)`
    pub fn point_at(&mut self, index: usize) -> ShapeResult<(f64, f64)> {
        let entry = self.record(index).ok_or_else(|| ShapeError::MalformedRecord {
            index,
            reason: format!("only {} records available", self.records.len()),
        })?;

        let little = LittleEndianHandler;
        self.reader.seek(SeekFrom::Start(entry.offset))?;
        let record_type = ShapeType::from_code(little.read_i32(self.reader.as_mut())?);

        match record_type {
            ShapeType::Null => Err(ShapeError::MalformedRecord {
                index,
                reason: "null shape has no vertex".to_string(),
            }),
            t if t.is_point() => {
                // shape type + X + Y
                if entry.length < 20 {
                    return Err(ShapeError::MalformedRecord {
                        index,
                        reason: format!("point record too short ({} bytes)", entry.length),
                    });
                }
                let x = little.read_f64(self.reader.as_mut())?;
                let y = little.read_f64(self.reader.as_mut())?;
                Ok((x, y))
            },
            other => Err(ShapeError::MalformedRecord {
                index,
                reason: format!("record shape type {} in a point file", other),
            }),
        }
    }
}
