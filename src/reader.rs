use std::fs::{self, File};
use std::io::ErrorKind;
use std::os::unix::fs::FileExt;
use std::path::Path;

use crate::{Error, HEADER_SIZE, Header, VoxelSize};

/// Everything the report needs from one file: the decoded header, the
/// derived voxel spacing, and the on-disk byte length.
#[derive(Debug, Clone, Copy)]
pub struct HeaderSummary {
    pub header: Header,
    pub voxel_size: VoxelSize,
    pub size_on_disk: u64,
}

/// Reads the fixed-size header of the MRC file at `path`.
///
/// Only the first [`HEADER_SIZE`] bytes are read, so the cost is constant
/// no matter how large the data block is. The file handle lives in an
/// inner scope and is released before the filesystem is queried for the
/// total byte length.
pub fn read_header(path: impl AsRef<Path>) -> Result<HeaderSummary, Error> {
    let path = path.as_ref();

    let header = {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut bytes = [0u8; HEADER_SIZE];
        file.read_exact_at(&mut bytes, 0)
            .map_err(|source| match source.kind() {
                ErrorKind::UnexpectedEof => Error::Truncated {
                    path: path.to_path_buf(),
                },
                _ => Error::Open {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        Header::decode_from_bytes(&bytes)
    };

    if !header.validate() {
        return Err(Error::InvalidHeader {
            path: path.to_path_buf(),
        });
    }

    let size_on_disk = fs::metadata(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    Ok(HeaderSummary {
        voxel_size: header.voxel_size(),
        header,
        size_on_disk,
    })
}
