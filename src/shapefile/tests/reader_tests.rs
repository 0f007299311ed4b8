//! Tests for the paired reader

use crate::shapefile::{ShapeError, ShapeType, Shapefile};
use crate::utils::logger::Diagnostics;
use crate::utils::progress::ProgressTracker;
use super::test_utils::{
    dbf_bytes, dbf_file, point_shp_bytes, point_z_content, shp_bytes, shp_file,
};

fn paired(points: &[(f64, f64)], fields: &[(&str, u8)], rows: &[Vec<&str>]) -> Shapefile {
    Shapefile::from_parts(
        shp_file(point_shp_bytes(points)),
        dbf_file(dbf_bytes(fields, rows)),
        Diagnostics::silent(),
    )
        .unwrap()
}

#[test]
fn test_data_maps_x_to_longitude() {
    let mut shapefile = paired(
        &[(-46.63, -23.55), (-43.20, -22.90)],
        &[("name", 10)],
        &[vec!["A"], vec!["B"]],
    );

    let data = shapefile.data(None).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].latitude(), -23.55);
    assert_eq!(data[0].longitude(), -46.63);
    assert_eq!(data[0].name(), "A");
    assert_eq!(data[1].latitude(), -22.90);
    assert_eq!(data[1].name(), "B");
}

#[test]
fn test_nome_wins_over_name() {
    let mut shapefile = paired(
        &[(1.0, 2.0)],
        &[("name", 10), ("nome", 10)],
        &[vec!["english", "portugues"]],
    );

    assert_eq!(shapefile.name_field(), Some(1));
    assert_eq!(shapefile.data(None).unwrap()[0].name(), "portugues");
}

#[test]
fn test_name_used_without_nome() {
    let mut shapefile = paired(&[(1.0, 2.0)], &[("id", 3), ("name", 10)], &[vec!["7", "Ponte"]]);
    assert_eq!(shapefile.data(None).unwrap()[0].name(), "Ponte");
}

#[test]
fn test_sequential_names_without_name_field() {
    let mut shapefile = paired(
        &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)],
        &[("id", 3), ("NOME", 10)],
        &[vec!["a", "x"], vec!["b", "y"], vec!["c", "z"]],
    );

    assert_eq!(shapefile.name_field(), None);
    let names: Vec<String> = shapefile.data(None).unwrap()
        .iter()
        .map(|w| w.name().to_string())
        .collect();
    assert_eq!(names, vec!["1", "2", "3"]);
}

#[test]
fn test_order_is_preserved() {
    let points: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, -(i as f64))).collect();
    let labels: Vec<String> = (0..20).map(|i| format!("P{}", i)).collect();
    let rows: Vec<Vec<&str>> = labels.iter().map(|l| vec![l.as_str()]).collect();

    let mut shapefile = paired(&points, &[("name", 8)], &rows);
    let data = shapefile.data(None).unwrap();

    for (i, waypoint) in data.iter().enumerate() {
        assert_eq!(waypoint.longitude(), i as f64);
        assert_eq!(waypoint.latitude(), -(i as f64));
        assert_eq!(waypoint.name(), format!("P{}", i));
    }
}

#[test]
fn test_record_count_mismatch() {
    let points = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0)];
    let rows = vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"]];

    let result = Shapefile::from_parts(
        shp_file(point_shp_bytes(&points)),
        dbf_file(dbf_bytes(&[("name", 4)], &rows)),
        Diagnostics::silent(),
    );

    match result {
        Err(ShapeError::RecordCountMismatch { geometry, attributes }) => {
            assert_eq!(geometry, 5);
            assert_eq!(attributes, 4);
        },
        _ => panic!("expected a record count mismatch"),
    }
}

#[test]
fn test_polygon_is_rejected() {
    let result = Shapefile::from_parts(
        shp_file(shp_bytes(5, &[])),
        dbf_file(dbf_bytes(&[("name", 4)], &[])),
        Diagnostics::silent(),
    );
    assert!(matches!(result, Err(ShapeError::UnsupportedGeometryType(ShapeType::Polygon))));
}

#[test]
fn test_multipoint_is_rejected() {
    let result = Shapefile::from_parts(
        shp_file(shp_bytes(8, &[])),
        dbf_file(dbf_bytes(&[("name", 4)], &[])),
        Diagnostics::silent(),
    );
    assert!(matches!(result, Err(ShapeError::UnsupportedGeometryType(ShapeType::MultiPoint))));
}

#[test]
fn test_geometry_type_checked_before_count() {
    let result = Shapefile::from_parts(
        shp_file(shp_bytes(3, &[])),
        dbf_file(dbf_bytes(&[("name", 4)], &[vec!["a"]])),
        Diagnostics::silent(),
    );
    assert!(matches!(result, Err(ShapeError::UnsupportedGeometryType(ShapeType::PolyLine))));
}

#[test]
fn test_point_z_uses_x_and_y() {
    let shp = shp_file(shp_bytes(11, &[point_z_content(10.5, -5.25, 830.0)]));
    let mut shapefile = Shapefile::from_parts(
        shp,
        dbf_file(dbf_bytes(&[("nome", 4)], &[vec!["Z"]])),
        Diagnostics::silent(),
    ).unwrap();

    assert_eq!(shapefile.shape_type(), ShapeType::PointZ);
    let data = shapefile.data(None).unwrap();
    assert_eq!(data[0].latitude(), -5.25);
    assert_eq!(data[0].longitude(), 10.5);
}

#[test]
fn test_empty_dataset() {
    let mut shapefile = paired(&[], &[("name", 4)], &[]);

    assert_eq!(shapefile.record_count(), 0);
    assert!(shapefile.data(None).unwrap().is_empty());
}

#[test]
fn test_progress_advances_per_record() {
    let mut shapefile = paired(&[(1.0, 1.0), (2.0, 2.0)], &[("name", 4)], &[vec!["a"], vec!["b"]]);
    let tracker = ProgressTracker::new(2, "Reading records");

    shapefile.data(Some(&tracker)).unwrap();
    assert_eq!(tracker.position(), 2);
}

#[test]
fn test_debug_reporting_reads_deleted_rows() {
    let mut bytes = dbf_bytes(&[("name", 8)], &[vec!["A"], vec!["B"]]);
    bytes[32 + 32 + 1 + 9] = b'*';

    let mut shapefile = Shapefile::from_parts(
        shp_file(point_shp_bytes(&[(1.0, 1.0), (2.0, 2.0)])),
        dbf_file(bytes),
        Diagnostics::new(log::LevelFilter::Debug),
    ).unwrap();

    let names: Vec<String> = shapefile.data(None).unwrap()
        .iter()
        .map(|w| w.name().to_string())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}
