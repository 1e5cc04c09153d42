use crate::icon::{self, Capabilities};
use anyhow::{anyhow, Result};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Edge lengths written as standalone PNGs, in order.
pub const SIZES: [u32; 5] = [32, 128, 256, 512, 1024];
/// The one size that also gets a `@2x` variant.
pub const RETINA_SIZE: u32 = 128;
/// Frames bundled into `icon.ico`. ICO caps frames at 256 px.
pub const ICO_SIZES: [u32; 3] = [32, 128, 256];

const ICO_FILE: &str = "icon.ico";
const PNG_TO_ICO_URL: &str = "https://cloudconvert.com/png-to-ico";
const PNG_TO_ICNS_URL: &str = "https://cloudconvert.com/png-to-icns";

/// What happened to the multi-size container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOutcome {
    Written(PathBuf),
    /// Container encoding is switched off or not compiled in.
    Unavailable,
    /// Encoding or writing failed; the reason is for display only.
    Skipped(String),
}

#[derive(Debug)]
pub struct BuildReport {
    pub pngs: Vec<PathBuf>,
    pub container: ContainerOutcome,
}

/// `icons/` next to the crate manifest.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("icons")
}

/// Render the full placeholder icon set into `output_dir`, overwriting any
/// previous run.
///
/// A missing or failing container encoder only skips `icon.ico`; failing to
/// create the directory or write a PNG is an error.
pub fn build(output_dir: &Path, caps: Capabilities) -> Result<BuildReport> {
    if !caps.drawing {
        log::warn!("Built without the `glyph` feature; icons will be solid squares");
        println!("Warning: microphone drawing unavailable. Rebuild with `--features glyph`.");
        println!("Creating minimal fallback icons...");
    }

    std::fs::create_dir_all(output_dir)
        .map_err(|e| anyhow!("Failed to create {}: {e}", output_dir.display()))?;

    println!("Generating icons...");

    let mut pngs = Vec::with_capacity(SIZES.len() + 1);
    for size in SIZES {
        let path = output_dir.join(format!("{size}x{size}.png"));
        save_png(&icon::render_default(size, caps), &path)?;
        println!("  ✓ Created {}", path.display());
        pngs.push(path);

        if size == RETINA_SIZE {
            let path = output_dir.join(format!("{size}x{size}@2x.png"));
            save_png(&icon::render_default(size * 2, caps), &path)?;
            println!("  ✓ Created {}", path.display());
            pngs.push(path);
        }
    }

    println!("\nFor macOS .icns generation:");
    println!("  1. Install 'iconutil' (comes with Xcode)");
    println!("  2. Or use online converter: {PNG_TO_ICNS_URL}");
    println!("  3. Place the generated icon.icns in the icons/ folder");

    let container = write_ico(&output_dir.join(ICO_FILE), caps);
    match &container {
        ContainerOutcome::Written(path) => println!("\n  ✓ Created {}", path.display()),
        ContainerOutcome::Unavailable => {
            println!("\n  Note: Rebuild with `--features ico` to generate .ico files");
            println!("  Or use online converter: {PNG_TO_ICO_URL}");
        }
        ContainerOutcome::Skipped(reason) => {
            log::warn!("Skipped {ICO_FILE}: {reason}");
            println!("\n  ✗ Failed to create .ico: {reason}");
            println!("  You can use an online converter: {PNG_TO_ICO_URL}");
        }
    }

    println!("\n✓ Icon generation complete!");
    println!("\nIMPORTANT: These are placeholder icons.");
    println!("For production, replace with professionally designed icons.");

    Ok(BuildReport { pngs, container })
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| anyhow!("Failed to write {}: {e}", path.display()))
}

/// Best effort: every failure becomes `Skipped` with the reason.
#[cfg(feature = "ico")]
fn write_ico(path: &Path, caps: Capabilities) -> ContainerOutcome {
    if !caps.containers {
        return ContainerOutcome::Unavailable;
    }

    let renders: Vec<RgbaImage> = ICO_SIZES
        .iter()
        .map(|&size| icon::render_default(size, caps))
        .collect();

    match encode_ico(path, &renders) {
        Ok(()) => ContainerOutcome::Written(path.to_path_buf()),
        Err(e) => ContainerOutcome::Skipped(format!("{e:#}")),
    }
}

#[cfg(feature = "ico")]
fn encode_ico(path: &Path, renders: &[RgbaImage]) -> Result<()> {
    use image::codecs::ico::{IcoEncoder, IcoFrame};
    use image::ExtendedColorType;
    use std::io::{BufWriter, Write};

    let frames = renders
        .iter()
        .map(|img| {
            IcoFrame::as_png(
                img.as_raw(),
                img.width(),
                img.height(),
                ExtendedColorType::Rgba8,
            )
        })
        .collect::<image::ImageResult<Vec<_>>>()
        .map_err(|e| anyhow!("Failed to encode icon frames: {e}"))?;

    let file = std::fs::File::create(path)
        .map_err(|e| anyhow!("Failed to create {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    IcoEncoder::new(&mut out)
        .encode_images(&frames)
        .map_err(|e| anyhow!("Failed to write {}: {e}", path.display()))?;
    out.flush()
        .map_err(|e| anyhow!("Failed to write {}: {e}", path.display()))?;
    Ok(())
}

#[cfg(not(feature = "ico"))]
fn write_ico(_path: &Path, _caps: Capabilities) -> ContainerOutcome {
    ContainerOutcome::Unavailable
}
