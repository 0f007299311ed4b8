//! Shapefile fixtures written to disk

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::fs;
use std::path::{Path, PathBuf};

/// A point row: longitude (X), latitude (Y) and attribute values
pub struct Row<'a> {
    pub lon: f64,
    pub lat: f64,
    pub values: Vec<&'a str>,
}

pub fn row<'a>(lat: f64, lon: f64, values: &[&'a str]) -> Row<'a> {
    Row { lon, lat, values: values.to_vec() }
}

/// Writes a geometry file whose records are Point shapes (or bare headers for other types)
pub fn write_shp(path: &Path, shape_type: i32, points: &[(f64, f64)]) {
    let mut buffer = Vec::new();
    let total = 100 + points.len() * 28;

    buffer.write_i32::<BigEndian>(9994).unwrap();
    for _ in 0..5 {
        buffer.write_i32::<BigEndian>(0).unwrap();
    }
    buffer.write_i32::<BigEndian>((total / 2) as i32).unwrap();
    buffer.write_i32::<LittleEndian>(1000).unwrap();
    buffer.write_i32::<LittleEndian>(shape_type).unwrap();
    for _ in 0..8 {
        buffer.write_f64::<LittleEndian>(0.0).unwrap();
    }

    for (i, &(x, y)) in points.iter().enumerate() {
        buffer.write_i32::<BigEndian>(i as i32 + 1).unwrap();
        buffer.write_i32::<BigEndian>(10).unwrap();
        buffer.write_i32::<LittleEndian>(1).unwrap();
        buffer.write_f64::<LittleEndian>(x).unwrap();
        buffer.write_f64::<LittleEndian>(y).unwrap();
    }

    fs::write(path, buffer).unwrap();
}

/// Writes an attribute table of character fields, 32 bytes wide each
pub fn write_dbf(path: &Path, fields: &[&str], rows: &[Vec<&str>]) {
    const WIDTH: usize = 32;
    let mut buffer = Vec::new();

    buffer.write_u8(0x03).unwrap();
    buffer.extend_from_slice(&[122, 6, 30]);
    buffer.write_u32::<LittleEndian>(rows.len() as u32).unwrap();
    buffer.write_u16::<LittleEndian>((32 + 32 * fields.len() + 1) as u16).unwrap();
    buffer.write_u16::<LittleEndian>((1 + WIDTH * fields.len()) as u16).unwrap();
    buffer.extend_from_slice(&[0u8; 20]);

    for name in fields {
        let mut raw_name = [0u8; 11];
        raw_name[..name.len()].copy_from_slice(name.as_bytes());
        buffer.extend_from_slice(&raw_name);
        buffer.write_u8(b'C').unwrap();
        buffer.extend_from_slice(&[0u8; 4]);
        buffer.write_u8(WIDTH as u8).unwrap();
        buffer.extend_from_slice(&[0u8; 15]);
    }
    buffer.write_u8(0x0D).unwrap();

    for values in rows {
        buffer.write_u8(b' ').unwrap();
        for value in values {
            let mut cell = value.as_bytes().to_vec();
            cell.resize(WIDTH, b' ');
            buffer.extend_from_slice(&cell);
        }
    }

    fs::write(path, buffer).unwrap();
}

/// Writes `<dir>/<name>.shp` and `<dir>/<name>.dbf` and returns the base path
pub fn write_point_dataset(dir: &Path, name: &str, fields: &[&str], rows: &[Row]) -> PathBuf {
    let base = dir.join(name);
    let points: Vec<(f64, f64)> = rows.iter().map(|r| (r.lon, r.lat)).collect();
    let values: Vec<Vec<&str>> = rows.iter().map(|r| r.values.clone()).collect();

    write_shp(&base.with_extension("shp"), 1, &points);
    write_dbf(&base.with_extension("dbf"), fields, &values);
    base
}
