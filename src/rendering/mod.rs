//! Rendering: vector templates and the raster images produced from them

#[cfg(feature = "svg")]
pub mod raster;
pub mod templates;

pub use templates::Template;

/// A rendered square image and its encoded (PNG) payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Edge length in pixels
    pub dimension: u32,
    /// Encoded image bytes, opaque to the container assembler
    pub bytes: Vec<u8>,
}

impl RasterImage {
    pub fn new(dimension: u32, bytes: Vec<u8>) -> Self {
        Self { dimension, bytes }
    }
}
