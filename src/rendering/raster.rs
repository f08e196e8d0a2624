//! SVG rasterizer backed by resvg

use std::sync::Arc;

use log::debug;
use resvg::{tiny_skia, usvg};

use crate::rendering::RasterImage;
use crate::{Error, Renderer, Result};

/// Renders SVG markup to PNG using `resvg` and `tiny-skia`.
///
/// System fonts are loaded once on construction so `<text>` elements in the
/// templates resolve to a real monospace face.
pub struct SvgRenderer {
    options: usvg::Options<'static>,
}

impl SvgRenderer {
    pub fn new() -> Result<Self> {
        let mut options = usvg::Options::default();
        let fontdb = Arc::make_mut(&mut options.fontdb);
        fontdb.load_system_fonts();
        debug!("loaded {} font face(s) for SVG text", fontdb.len());
        Ok(Self { options })
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, markup: &str, width: u32, height: u32) -> Result<RasterImage> {
        let tree = usvg::Tree::from_str(markup, &self.options)
            .map_err(|e| Error::Render(format!("Failed to parse SVG: {}", e)))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("Failed to allocate {}x{} pixmap", width, height))
        })?;

        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|e| Error::Render(format!("Failed to encode PNG: {}", e)))?;
        debug!("rendered {}x{} ({} bytes)", width, height, png.len());

        Ok(RasterImage::new(width, png))
    }
}
