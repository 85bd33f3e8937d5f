use std::fs;

use tempfile::TempDir;

use crate::report::{LabelTree, header_table};
use crate::{Error, HEADER_SIZE, Header, read_header};

/// Writes a well-formed MRC file of exactly `total_size` bytes.
fn write_mrc(path: &std::path::Path, header: &Header, total_size: usize) {
    assert!(total_size >= HEADER_SIZE);
    let mut bytes = vec![0u8; total_size];
    let mut head = [0u8; HEADER_SIZE];
    header.encode_to_bytes(&mut head);
    bytes[..HEADER_SIZE].copy_from_slice(&head);
    fs::write(path, &bytes).unwrap();
}

fn cube_header() -> Header {
    let mut header = Header::new();
    header.nx = 10;
    header.ny = 10;
    header.nz = 10;
    header.mx = 10;
    header.my = 10;
    header.mz = 10;
    header.xlen = 10.0;
    header.ylen = 10.0;
    header.zlen = 10.0;
    header.set_label(0, "simulated density");
    header.set_label(1, "for reader tests");
    header
}

#[test]
fn reads_header_voxel_size_and_file_length() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cube.mrc");
    write_mrc(&path, &cube_header(), 1_048_576);

    let summary = read_header(&path).unwrap();

    assert_eq!(summary.size_on_disk, 1_048_576);
    assert_eq!(
        (summary.header.nx, summary.header.ny, summary.header.nz),
        (10, 10, 10)
    );
    assert_eq!(
        (
            summary.voxel_size.x,
            summary.voxel_size.y,
            summary.voxel_size.z
        ),
        (1.0, 1.0, 1.0)
    );

    let rendered = header_table(&summary).to_string();
    assert!(rendered.contains("1.0 MiB"));
    assert!(rendered.contains("10    10    10"));

    let tree = LabelTree::from_header(&summary.header);
    assert_eq!(tree.labels(), ["simulated density", "for reader tests"]);
}

#[test]
fn truncated_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stub.mrc");
    fs::write(&path, [0u8; 10]).unwrap();

    let err = read_header(&path).unwrap_err();
    assert!(matches!(err, Error::Truncated { .. }));
}

#[test]
fn garbage_header_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zeros.mrc");
    fs::write(&path, [0u8; HEADER_SIZE]).unwrap();

    let err = read_header(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidHeader { .. }));
}

#[test]
fn missing_file_is_a_cannot_open_error() {
    let err = read_header("/no/such/volume.mrc").unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}

#[test]
fn header_read_ignores_data_block_size() {
    // Header-only access: the declared extents can promise far more data
    // than the file holds and the read still succeeds.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("headless.mrc");
    write_mrc(&path, &cube_header(), HEADER_SIZE);

    let summary = read_header(&path).unwrap();
    assert_eq!(summary.size_on_disk, HEADER_SIZE as u64);
}
