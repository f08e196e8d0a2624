//! Multi-resolution ICO container assembly
//!
//! The container is the classic Windows icon layout: a 6-byte header, one
//! 16-byte directory entry per image and then the raw image payloads in
//! directory order. Payloads are embedded as-is (PNG in practice) and are
//! never decoded or re-encoded here.

use std::path::Path;

use log::info;

use crate::rendering::RasterImage;
use crate::{Error, Result};

/// Size of the `ICONDIR` header in bytes
pub const HEADER_SIZE: usize = 6;
/// Size of a single `ICONDIRENTRY` in bytes
pub const DIR_ENTRY_SIZE: usize = 16;
/// Largest edge length the directory can describe
pub const MAX_DIMENSION: u32 = 256;

const RESOURCE_TYPE_ICON: u16 = 1;
const COLOR_PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 32;

/// Decoded view of one directory record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirEntry {
    /// Width byte as stored (0 means 256)
    pub width: u8,
    /// Height byte as stored (0 means 256)
    pub height: u8,
    pub palette_size: u8,
    pub reserved: u8,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    /// Payload length in bytes
    pub byte_len: u32,
    /// Absolute offset of the payload within the container
    pub offset: u32,
}

impl IconDirEntry {
    /// Edge length in pixels, undoing the 256 => 0 encoding
    pub fn dimension(&self) -> u32 {
        if self.width == 0 {
            MAX_DIMENSION
        } else {
            u32::from(self.width)
        }
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.width);
        out.push(self.height);
        out.push(self.palette_size);
        out.push(self.reserved);
        out.extend_from_slice(&self.color_planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.byte_len.to_le_bytes());
        out.extend_from_slice(&self.offset.to_le_bytes());
    }
}

/// An assembled icon container
///
/// Built once by [`IconContainer::assemble`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconContainer {
    entries: Vec<IconDirEntry>,
    bytes: Vec<u8>,
}

impl IconContainer {
    /// Assemble `images`, in the given order, into one ICO blob.
    ///
    /// Fails with [`Error::InvalidInput`] when `images` is empty, when a
    /// dimension is outside `1..=256`, or when a payload is empty.
    pub fn assemble(images: &[RasterImage]) -> Result<Self> {
        if images.is_empty() {
            return Err(Error::InvalidInput(
                "icon container needs at least one image".into(),
            ));
        }
        let count = u16::try_from(images.len()).map_err(|_| {
            Error::InvalidInput(format!("too many images for one container: {}", images.len()))
        })?;

        for (index, image) in images.iter().enumerate() {
            if image.dimension == 0 || image.dimension > MAX_DIMENSION {
                return Err(Error::InvalidInput(format!(
                    "image {index} has dimension {}, expected 1..={MAX_DIMENSION}",
                    image.dimension
                )));
            }
            if image.bytes.is_empty() {
                return Err(Error::InvalidInput(format!("image {index} has an empty payload")));
            }
        }

        let directory_len = HEADER_SIZE + DIR_ENTRY_SIZE * images.len();
        let payload_len: usize = images.iter().map(|img| img.bytes.len()).sum();
        let total_len = directory_len + payload_len;
        if u32::try_from(total_len).is_err() {
            return Err(Error::InvalidInput(format!(
                "container of {total_len} bytes exceeds the 32-bit offset range"
            )));
        }

        let mut bytes = Vec::with_capacity(total_len);
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&RESOURCE_TYPE_ICON.to_le_bytes());
        bytes.extend_from_slice(&count.to_le_bytes());

        // Lengths and offsets fit in u32: the whole blob was checked above.
        let mut offset = directory_len as u32;
        let mut entries = Vec::with_capacity(images.len());
        for image in images {
            let edge = encode_dimension(image.dimension);
            let entry = IconDirEntry {
                width: edge,
                height: edge,
                palette_size: 0,
                reserved: 0,
                color_planes: COLOR_PLANES,
                bits_per_pixel: BITS_PER_PIXEL,
                byte_len: image.bytes.len() as u32,
                offset,
            };
            entry.encode_into(&mut bytes);
            offset += entry.byte_len;
            entries.push(entry);
        }

        for image in images {
            bytes.extend_from_slice(&image.bytes);
        }

        info!(
            "assembled icon container: {} image(s), {} bytes",
            entries.len(),
            bytes.len()
        );

        Ok(Self { entries, bytes })
    }

    /// Directory entries in container order
    pub fn entries(&self) -> &[IconDirEntry] {
        &self.entries
    }

    /// Number of embedded images
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an empty container cannot be assembled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Persist the container to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|e| Error::io(path, e))
    }
}

/// Directory byte for an edge length; 256 does not fit in a byte and is stored as 0.
fn encode_dimension(dimension: u32) -> u8 {
    if dimension == MAX_DIMENSION {
        0
    } else {
        dimension as u8
    }
}
