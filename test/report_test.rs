use crate::report::{LabelTree, format_shape, format_spacing, header_table, human_filesize};
use crate::{Header, HeaderSummary, VoxelSize};

#[test]
fn human_filesize_bytes() {
    assert_eq!(human_filesize(0.0), "0.0 B");
    assert_eq!(human_filesize(1023.0), "1023.0 B");
}

#[test]
fn human_filesize_scales_by_1024() {
    assert_eq!(human_filesize(1024.0), "1.0 KiB");
    assert_eq!(human_filesize(1536.0), "1.5 KiB");
    assert_eq!(human_filesize(1048576.0), "1.0 MiB");
    assert_eq!(human_filesize(1024.0 * 1024.0 * 1024.0), "1.0 GiB");
}

#[test]
fn human_filesize_yobibyte_fallback() {
    assert_eq!(human_filesize(1024f64.powi(8)), "1.0YiB");
}

#[test]
fn human_filesize_negative_input() {
    assert_eq!(human_filesize(-2048.0), "-2.0 KiB");
}

#[test]
fn shape_renders_five_wide_fields() {
    let mut header = Header::new();
    header.nx = 128;
    header.ny = 256;
    header.nz = 64;
    assert_eq!(format_shape(&header), "  128   256    64");
}

#[test]
fn spacing_renders_three_decimals() {
    let voxel_size = VoxelSize {
        x: 1.0,
        y: 1.0,
        z: 2.5,
    };
    assert_eq!(format_spacing(voxel_size), "1.000 1.000 2.500");
}

#[test]
fn label_tree_keeps_order_and_drops_blanks() {
    let tree = LabelTree::new(
        ["first line", "second"]
            .into_iter()
            .map(str::to_owned),
    );
    assert_eq!(tree.labels(), ["first line", "second"]);
    assert_eq!(tree.to_string(), "|\n├── first line\n└── second");
}

#[test]
fn label_tree_empty_header_is_bare_root() {
    let tree = LabelTree::from_header(&Header::new());
    assert!(tree.labels().is_empty());
    assert_eq!(tree.to_string(), "|");
}

#[test]
fn table_contains_fixed_rows() {
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

    let summary = HeaderSummary {
        voxel_size: header.voxel_size(),
        header,
        size_on_disk: 1_048_576,
    };

    let rendered = header_table(&summary).to_string();
    assert!(rendered.contains("size on disk"));
    assert!(rendered.contains("1.0 MiB"));
    assert!(rendered.contains("image shape: nx | ny | nz"));
    assert!(rendered.contains("10    10    10"));
    assert!(rendered.contains("spacing (Å): dx | dy | dz"));
    assert!(rendered.contains("1.000 1.000 1.000"));
}
