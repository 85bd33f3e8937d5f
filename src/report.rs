use std::fmt;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};

use crate::{Header, HeaderSummary, VoxelSize};

/// Formats a byte count as a human-readable size with base-1024 prefixes.
///
/// Runs through the prefixes `"", Ki, Mi, Gi, Ti, Pi, Ei, Zi`, dividing by
/// 1024 until the value drops below 1024, and prints one decimal digit.
/// Values that exhaust every prefix fall back to `Yi`.
pub fn human_filesize(num: f64) -> String {
    let mut num = num;
    for unit in ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"] {
        if num.abs() < 1024.0 {
            return format!("{num:3.1} {unit}B");
        }
        num /= 1024.0;
    }
    format!("{num:.1}YiB")
}

/// The three image extents as 5-wide right-aligned integers.
pub fn format_shape(header: &Header) -> String {
    format!("{:5} {:5} {:5}", header.nx, header.ny, header.nz)
}

/// The three voxel spacings with 3 decimal digits each.
pub fn format_spacing(voxel_size: VoxelSize) -> String {
    format!(
        "{:.3} {:.3} {:.3}",
        voxel_size.x, voxel_size.y, voxel_size.z
    )
}

/// Builds the two-column header table: size on disk, image shape, and
/// voxel spacing, all right-aligned.
pub fn header_table(summary: &HeaderSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header([
        Cell::new("Attribute(s)").fg(Color::Cyan),
        Cell::new("Value(s)").fg(Color::Magenta),
    ]);

    let rows = [
        ("size on disk", human_filesize(summary.size_on_disk as f64)),
        ("image shape: nx | ny | nz", format_shape(&summary.header)),
        ("spacing (Å): dx | dy | dz", format_spacing(summary.voxel_size)),
    ];
    for (attribute, value) in rows {
        table.add_row([
            Cell::new(attribute).fg(Color::Cyan),
            Cell::new(value).fg(Color::Magenta),
        ]);
    }

    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

/// The header's non-empty labels as a rooted tree.
///
/// The root is an unlabeled `|` marker; each non-empty label becomes one
/// child, in slot order. Empty (all-padding) slots leave no gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTree {
    labels: Vec<String>,
}

impl LabelTree {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn from_header(header: &Header) -> Self {
        Self::new(header.labels())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl fmt::Display for LabelTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (i, label) in self.labels.iter().enumerate() {
            let branch = if i + 1 == self.labels.len() {
                "└── "
            } else {
                "├── "
            };
            write!(f, "\n{branch}{label}")?;
        }
        Ok(())
    }
}

/// Builds both artifacts and writes them to stdout: a blank line, the
/// table titled with the file name, then the label tree.
pub fn print_report(summary: &HeaderSummary, display_name: &str) {
    let table = header_table(summary);
    let labels = LabelTree::from_header(&summary.header);

    println!("\nHeader for {display_name}");
    println!("{table}");
    println!("{labels}");
}
