//! The fixed favicon/app-icon asset plan and the pipeline that produces it.
//!
//! Every step is fatal on failure: files written before the failing step are
//! left in place and `favicon.ico` is only written once both favicon renders
//! exist.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::container::IconContainer;
use crate::rendering::{RasterImage, Template};
use crate::{Error, GeneratorConfig, Renderer, Result};

/// One PNG output of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    /// Human label used in progress lines
    pub label: &'static str,
    pub file_name: &'static str,
    pub template: Template,
    /// Square edge length in pixels
    pub size: u32,
    /// Only kept on disk until the icon container is built
    pub intermediate: bool,
}

/// PNG renders, in the order they are produced.
pub static PNG_ASSETS: [AssetSpec; 5] = [
    AssetSpec {
        label: "favicon",
        file_name: "favicon-32.png",
        template: Template::Simplified,
        size: 32,
        intermediate: true,
    },
    AssetSpec {
        label: "favicon",
        file_name: "favicon-16.png",
        template: Template::Simplified,
        size: 16,
        intermediate: true,
    },
    AssetSpec {
        label: "apple-touch-icon",
        file_name: "apple-touch-icon.png",
        template: Template::Detailed,
        size: 180,
        intermediate: false,
    },
    AssetSpec {
        label: "icon-192",
        file_name: "icon-192.png",
        template: Template::Detailed,
        size: 192,
        intermediate: false,
    },
    AssetSpec {
        label: "icon-512",
        file_name: "icon-512.png",
        template: Template::Detailed,
        size: 512,
        intermediate: false,
    },
];

pub const FAVICON_ICO: &str = "favicon.ico";

/// Sizes packed into `favicon.ico`, smallest first
pub const FAVICON_SIZES: [u32; 2] = [16, 32];

/// Files left on disk after a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAssets {
    pub files: Vec<PathBuf>,
}

/// The intermediate favicon render of `size` from [`PNG_ASSETS`]
fn favicon_asset(size: u32) -> Result<&'static AssetSpec> {
    PNG_ASSETS
        .iter()
        .find(|a| a.intermediate && a.template == Template::Simplified && a.size == size)
        .ok_or_else(|| Error::InvalidInput(format!("no favicon render planned at {}px", size)))
}

/// Run the pipeline, reporting progress on stdout.
pub fn generate_icons(
    renderer: &dyn Renderer,
    config: &GeneratorConfig,
) -> Result<GeneratedAssets> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_icons_with(renderer, config, &mut out)
}

/// Run the pipeline, writing progress lines to `progress`.
pub fn generate_icons_with(
    renderer: &dyn Renderer,
    config: &GeneratorConfig,
    progress: &mut dyn Write,
) -> Result<GeneratedAssets> {
    let dir = config.out_dir.as_path();
    ensure_output_dir(dir)?;

    report(progress, "Generating icons...\n")?;

    let mut files = Vec::new();
    for asset in &PNG_ASSETS {
        report(
            progress,
            &format!("Creating {} ({}x{})...", asset.label, asset.size, asset.size),
        )?;
        let image = renderer.render(asset.template.markup(), asset.size, asset.size)?;
        let path = dir.join(asset.file_name);
        write_file(&path, &image.bytes)?;
        report(progress, &format!("✓ {} created", asset.file_name))?;
        if !asset.intermediate {
            files.push(path);
        }
    }

    report(progress, "\n✅ All PNG icons generated successfully!")?;
    report(progress, &format!("\nNow generating {}...", FAVICON_ICO))?;

    let mut images = Vec::with_capacity(FAVICON_SIZES.len());
    for size in FAVICON_SIZES {
        let path = dir.join(favicon_asset(size)?.file_name);
        let bytes = std::fs::read(&path).map_err(|e| Error::io(&path, e))?;
        images.push(RasterImage::new(size, bytes));
    }
    let container = IconContainer::assemble(&images)?;
    let ico_path = dir.join(FAVICON_ICO);
    container.write_to(&ico_path)?;
    debug!("wrote {}", ico_path.display());
    report(progress, &format!("✓ {} created", FAVICON_ICO))?;
    files.insert(0, ico_path);

    for size in FAVICON_SIZES {
        let path = dir.join(favicon_asset(size)?.file_name);
        std::fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        debug!("removed {}", path.display());
    }
    report(progress, "✓ Cleaned up temporary files")?;

    report(progress, "\n🎉 All icons generated successfully!")?;
    report(progress, "\nGenerated files:")?;
    let sizes = FAVICON_SIZES
        .iter()
        .map(|s| format!("{s}x{s}"))
        .collect::<Vec<_>>()
        .join(", ");
    report(progress, &format!("  - {} ({})", FAVICON_ICO, sizes))?;
    for asset in PNG_ASSETS.iter().filter(|a| !a.intermediate) {
        report(
            progress,
            &format!("  - {} ({}x{})", asset.file_name, asset.size, asset.size),
        )?;
    }

    Ok(GeneratedAssets { files })
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    let meta = std::fs::metadata(dir).map_err(|e| Error::io(dir, e))?;
    if !meta.is_dir() {
        return Err(Error::io(dir, std::io::Error::other("not a directory")));
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| Error::io(path, e))?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn report(progress: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(progress, "{}", line).map_err(|e| Error::io("<progress>", e))
}
