mod header;
mod reader;
pub mod report;

#[cfg(test)]
#[path = "../test/tests.rs"]
mod tests;
#[cfg(test)]
#[path = "../test/report_test.rs"]
mod report_test;
#[cfg(test)]
#[path = "../test/reader_test.rs"]
mod reader_test;

pub use header::{HEADER_SIZE, Header, LABEL_COUNT, LABEL_SIZE, VoxelSize};
pub use reader::{HeaderSummary, read_header};

use std::path::PathBuf;

/// Byte order of an MRC file, encoded in the MACHST machine stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEndian {
    LittleEndian,
    BigEndian,
}

impl FileEndian {
    /// Interprets the 4-byte MACHST field.
    ///
    /// The MRC2014 stamps are `0x44 0x44/0x41 0x00 0x00` for little-endian
    /// and `0x11 0x11 0x00 0x00` for big-endian. Anything unrecognized is
    /// treated as little-endian, which is what nearly all writers produce.
    #[inline]
    pub const fn from_machst(machst: &[u8; 4]) -> Self {
        match machst[0] {
            0x11 => Self::BigEndian,
            _ => Self::LittleEndian,
        }
    }
}

// Error type

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{}` is shorter than the {HEADER_SIZE}-byte MRC header", .path.display())]
    Truncated { path: PathBuf },
    #[error("`{}` does not contain a valid MRC header", .path.display())]
    InvalidHeader { path: PathBuf },
}
