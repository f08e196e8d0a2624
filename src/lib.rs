//! Favforge
//!
//! Generates the favicon and app-icon assets of a static website from two
//! built-in SVG templates: a multi-resolution `favicon.ico` (16x16 and
//! 32x32), an `apple-touch-icon.png` (180x180) and `icon-192.png` /
//! `icon-512.png` app icons.
//!
//! # Features
//!
//! - **svg** (default): `resvg`-backed [`Renderer`] used by the binary
//! - The ICO assembler ([`IconContainer`]) and the asset pipeline compile
//!   without any rendering backend
//!
//! # Example
//!
//! ```no_run
//! use favforge::GeneratorConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig {
//!     out_dir: "website".into(),
//! };
//!
//! let renderer = favforge::new_renderer()?;
//! let generated = favforge::generate_icons(&renderer, &config)?;
//! println!("wrote {} files", generated.files.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod assets;
pub mod container;
pub mod rendering;

pub use assets::{generate_icons, generate_icons_with, GeneratedAssets};
pub use container::{IconContainer, IconDirEntry};
pub use rendering::{RasterImage, Template};

/// Configuration for an icon generation run
///
/// The asset set itself is fixed; only the destination can change.
///
/// # Examples
///
/// ```
/// let cfg = favforge::GeneratorConfig::default();
/// assert_eq!(cfg.out_dir, std::path::PathBuf::from("website"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Existing directory that receives the generated files
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("website"),
        }
    }
}

/// Rasterizes vector markup
///
/// Implementations must emit a lossless encoded image (PNG) and support at
/// least the 16, 32, 180, 192 and 512 pixel square sizes.
pub trait Renderer {
    /// Render `markup` scaled to `width` x `height` pixels
    fn render(&self, markup: &str, width: u32, height: u32) -> Result<RasterImage>;
}

/// Create the default renderer backend
#[cfg(feature = "svg")]
pub fn new_renderer() -> Result<rendering::raster::SvgRenderer> {
    rendering::raster::SvgRenderer::new()
}
