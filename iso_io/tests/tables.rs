//! Case table file round trips and loader diagnostics.

use iso_io::tables::{self, reference};
use iso_io::{CaseEntry, CaseTable, IsoIoError, Point3, TableVertex};
use tempfile::tempdir;

#[test]
fn test_reference_table_file_roundtrip() {
    let table = reference::tetrahedral();
    let dir = tempdir().unwrap();
    let path = dir.path().join("reference.tbl");

    tables::save_to_file(&table, &path).unwrap();
    let loaded = tables::load_from_file(&path).unwrap();

    assert_eq!(loaded.len(), table.len());
    assert_eq!(loaded, table);
}

#[test]
fn test_small_synthetic_table_roundtrip() {
    let mut builder = CaseTable::builder();
    builder
        .insert(
            0x0090_0901,
            CaseEntry::new(
                vec![
                    TableVertex::new(Point3::new(0.5, 0.0, 0.0), 0),
                    TableVertex::new(Point3::new(0.0, 0.5, 0.0), 0),
                    TableVertex::new(Point3::new(0.0, 0.0, -0.5), 0),
                ],
                vec![Point3::new(0.0, 0.0, 1.0)],
            ),
        )
        .unwrap();
    let table = builder.build();

    let mut buffer = Vec::new();
    tables::save(&table, &mut buffer).unwrap();
    let loaded = tables::load(buffer.as_slice()).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn test_loader_reports_offending_line() {
    let text = "\
# two good lines, then a broken one
g 0x10 0.5 0 0 0 0 0.5 0 0 0 0 -0.5 0
n 0x10 0 0 1
g 0x20 0.5 0 0 0 0 0.5 0 0 0 0 -0.5
";
    match tables::load(text.as_bytes()) {
        Err(IsoIoError::TableFormat { line, message }) => {
            assert_eq!(line, 4);
            assert!(message.contains("multiple of 12"), "{}", message);
        }
        other => panic!("expected a format error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = tables::load_from_file(dir.path().join("absent.tbl")).unwrap_err();
    assert!(matches!(err, IsoIoError::Io(_)));
}
