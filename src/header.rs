use crate::FileEndian;

/// Size, in bytes, of the fixed MRC2014 main header.
pub const HEADER_SIZE: usize = 1024;
/// Number of free-text label slots in the header.
pub const LABEL_COUNT: usize = 10;
/// Width, in bytes, of one label slot.
pub const LABEL_SIZE: usize = 80;

/// The fixed-layout MRC2014 main header.
///
/// Field order matches the on-disk layout; numeric fields are decoded with
/// the byte order declared by `machst`.
#[repr(C, align(4))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    /// Number of columns in the 3D data array (fast axis)
    pub nx: i32,
    /// Number of rows in the 3D data array (medium axis)
    pub ny: i32,
    /// Number of sections in the 3D data array (slow axis)
    pub nz: i32,
    /// Data mode (voxel storage type); not interpreted by this crate
    pub mode: i32,
    /// Location of first column in unit cell
    pub nxstart: i32,
    /// Location of first row in unit cell
    pub nystart: i32,
    /// Location of first section in unit cell
    pub nzstart: i32,
    /// Sampling along X axis of unit cell
    pub mx: i32,
    /// Sampling along Y axis of unit cell
    pub my: i32,
    /// Sampling along Z axis of unit cell
    pub mz: i32,
    /// CELLA: cell edge length in Ångströms along X
    pub xlen: f32,
    /// CELLA: cell edge length in Ångströms along Y
    pub ylen: f32,
    /// CELLA: cell edge length in Ångströms along Z
    pub zlen: f32,
    /// CELLB: cell angle between Y and Z axes, degrees
    pub alpha: f32,
    /// CELLB: cell angle between X and Z axes, degrees
    pub beta: f32,
    /// CELLB: cell angle between X and Y axes, degrees
    pub gamma: f32,
    /// 1-based index of column axis (1,2,3 for X,Y,Z)
    pub mapc: i32,
    /// 1-based index of row axis
    pub mapr: i32,
    /// 1-based index of section axis
    pub maps: i32,
    /// Minimum density value
    pub dmin: f32,
    /// Maximum density value
    pub dmax: f32,
    /// Mean density value
    pub dmean: f32,
    /// Space group number; 0 implies 2D image or image stack
    pub ispg: i32,
    /// Size of the extended header following the main header, in bytes
    pub nsymbt: i32,
    /// Extra space; bytes 8-11 hold EXTTYP, 12-15 NVERSION
    pub extra: [u8; 100],
    /// Volume/phase origin in voxels
    pub origin: [f32; 3],
    /// Must contain "MAP " to identify the file type
    pub map: [u8; 4],
    /// Machine stamp encoding the byte order of the file
    pub machst: [u8; 4],
    /// RMS deviation of map from mean density
    pub rms: f32,
    /// Number of valid labels in `label` (0-10)
    pub nlabl: i32,
    /// 10 text labels of 80 bytes each
    pub label: [u8; LABEL_COUNT * LABEL_SIZE],
}

/// Physical spacing per axis in Ångströms, derived from CELLA / sampling.
///
/// A value of 0.0 means "unset" (the header carries no sampling for that
/// axis).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VoxelSize {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    /// Constructs a default header suitable for building fixtures.
    ///
    /// All dimensions are zero, cell angles are 90°, and the MAP stamp and
    /// little-endian machine stamp are preset.
    pub const fn new() -> Self {
        Self {
            nx: 0,
            ny: 0,
            nz: 0,
            mode: 2, // 32-bit floating point
            nxstart: 0,
            nystart: 0,
            nzstart: 0,
            mx: 0,
            my: 0,
            mz: 0,
            xlen: 1.0,
            ylen: 1.0,
            zlen: 1.0,
            alpha: 90.0,
            beta: 90.0,
            gamma: 90.0,
            mapc: 1,
            mapr: 2,
            maps: 3,
            dmin: f32::INFINITY,
            dmax: f32::NEG_INFINITY,
            dmean: f32::NEG_INFINITY,
            ispg: 1, // P1 space group.
            nsymbt: 0,
            extra: [0u8; 100],
            origin: [0.0; 3],
            map: *b"MAP ",
            machst: [0x44, 0x44, 0x00, 0x00], // Little-endian x86/AMD64.
            rms: -1.0,
            nlabl: 0,
            label: [0; LABEL_COUNT * LABEL_SIZE],
        }
    }

    /// True when the MAP stamp is present and the extents are non-negative.
    #[inline]
    pub fn validate(&self) -> bool {
        self.map == *b"MAP " && self.nx >= 0 && self.ny >= 0 && self.nz >= 0
    }

    /// Detect the file endianness from the MACHST machine stamp.
    #[inline]
    pub fn detect_endian(&self) -> FileEndian {
        FileEndian::from_machst(&self.machst)
    }

    /// Voxel spacing per axis: cell edge length divided by sampling.
    ///
    /// Axes with zero or negative sampling report 0.0 ("unset").
    pub fn voxel_size(&self) -> VoxelSize {
        let spacing = |len: f32, m: i32| if m > 0 { len / m as f32 } else { 0.0 };
        VoxelSize {
            x: spacing(self.xlen, self.mx),
            y: spacing(self.ylen, self.my),
            z: spacing(self.zlen, self.mz),
        }
    }

    /// Non-empty label texts in slot order.
    ///
    /// Each of the 10 fixed-width slots is stripped of trailing NUL and
    /// space padding; slots that are empty after stripping are skipped.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.label
            .chunks_exact(LABEL_SIZE)
            .map(|slot| {
                let end = slot
                    .iter()
                    .rposition(|&b| b != 0 && b != b' ')
                    .map_or(0, |i| i + 1);
                String::from_utf8_lossy(&slot[..end]).into_owned()
            })
            .filter(|text| !text.is_empty())
    }

    /// Decode a header from raw bytes.
    ///
    /// Endianness is detected from the MACHST field and applied to every
    /// numeric field; byte-string fields are copied verbatim.
    pub fn decode_from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let machst = [bytes[212], bytes[213], bytes[214], bytes[215]];
        let endian = FileEndian::from_machst(&machst);

        let word = |offset: usize| -> [u8; 4] {
            [
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ]
        };
        let i32_at = |offset: usize| -> i32 {
            match endian {
                FileEndian::LittleEndian => i32::from_le_bytes(word(offset)),
                FileEndian::BigEndian => i32::from_be_bytes(word(offset)),
            }
        };
        let f32_at = |offset: usize| -> f32 {
            match endian {
                FileEndian::LittleEndian => f32::from_le_bytes(word(offset)),
                FileEndian::BigEndian => f32::from_be_bytes(word(offset)),
            }
        };

        let mut header = Self::new();

        header.nx = i32_at(0);
        header.ny = i32_at(4);
        header.nz = i32_at(8);
        header.mode = i32_at(12);
        header.nxstart = i32_at(16);
        header.nystart = i32_at(20);
        header.nzstart = i32_at(24);
        header.mx = i32_at(28);
        header.my = i32_at(32);
        header.mz = i32_at(36);

        header.xlen = f32_at(40);
        header.ylen = f32_at(44);
        header.zlen = f32_at(48);
        header.alpha = f32_at(52);
        header.beta = f32_at(56);
        header.gamma = f32_at(60);

        header.mapc = i32_at(64);
        header.mapr = i32_at(68);
        header.maps = i32_at(72);

        header.dmin = f32_at(76);
        header.dmax = f32_at(80);
        header.dmean = f32_at(84);

        header.ispg = i32_at(88);
        header.nsymbt = i32_at(92);

        header.extra.copy_from_slice(&bytes[96..196]);

        header.origin[0] = f32_at(196);
        header.origin[1] = f32_at(200);
        header.origin[2] = f32_at(204);

        // MAP and MACHST are byte signatures, no endian conversion.
        header.map.copy_from_slice(&bytes[208..212]);
        header.machst.copy_from_slice(&bytes[212..216]);

        header.rms = f32_at(216);
        header.nlabl = i32_at(220);

        // Labels are ASCII, no endian conversion.
        header.label.copy_from_slice(&bytes[224..1024]);

        header
    }

    /// Encode the header to raw bytes with the byte order declared by
    /// its own MACHST field. The inverse of [`Header::decode_from_bytes`].
    pub fn encode_to_bytes(&self, out: &mut [u8; HEADER_SIZE]) {
        let endian = self.detect_endian();

        macro_rules! put_i32 {
            ($offset:expr, $value:expr) => {
                let bytes = match endian {
                    FileEndian::LittleEndian => $value.to_le_bytes(),
                    FileEndian::BigEndian => $value.to_be_bytes(),
                };
                out[$offset..$offset + 4].copy_from_slice(&bytes);
            };
        }
        macro_rules! put_f32 {
            ($offset:expr, $value:expr) => {
                let bytes = match endian {
                    FileEndian::LittleEndian => $value.to_le_bytes(),
                    FileEndian::BigEndian => $value.to_be_bytes(),
                };
                out[$offset..$offset + 4].copy_from_slice(&bytes);
            };
        }

        put_i32!(0, self.nx);
        put_i32!(4, self.ny);
        put_i32!(8, self.nz);
        put_i32!(12, self.mode);
        put_i32!(16, self.nxstart);
        put_i32!(20, self.nystart);
        put_i32!(24, self.nzstart);
        put_i32!(28, self.mx);
        put_i32!(32, self.my);
        put_i32!(36, self.mz);

        put_f32!(40, self.xlen);
        put_f32!(44, self.ylen);
        put_f32!(48, self.zlen);
        put_f32!(52, self.alpha);
        put_f32!(56, self.beta);
        put_f32!(60, self.gamma);

        put_i32!(64, self.mapc);
        put_i32!(68, self.mapr);
        put_i32!(72, self.maps);

        put_f32!(76, self.dmin);
        put_f32!(80, self.dmax);
        put_f32!(84, self.dmean);

        put_i32!(88, self.ispg);
        put_i32!(92, self.nsymbt);

        out[96..196].copy_from_slice(&self.extra);

        put_f32!(196, self.origin[0]);
        put_f32!(200, self.origin[1]);
        put_f32!(204, self.origin[2]);

        out[208..212].copy_from_slice(&self.map);
        out[212..216].copy_from_slice(&self.machst);

        put_f32!(216, self.rms);
        put_i32!(220, self.nlabl);

        out[224..1024].copy_from_slice(&self.label);
    }

    /// Writes `text` into label slot `index`, space-padded, and bumps
    /// `nlabl` if needed. Text longer than one slot is truncated.
    pub fn set_label(&mut self, index: usize, text: &str) {
        assert!(index < LABEL_COUNT);
        let slot = &mut self.label[index * LABEL_SIZE..(index + 1) * LABEL_SIZE];
        slot.fill(b' ');
        let bytes = text.as_bytes();
        let len = bytes.len().min(LABEL_SIZE);
        slot[..len].copy_from_slice(&bytes[..len]);
        if self.nlabl < (index + 1) as i32 {
            self.nlabl = (index + 1) as i32;
        }
    }
}
