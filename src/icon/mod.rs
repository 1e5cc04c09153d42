pub mod geometry;
pub mod shapes;

use geometry::Geometry;
use image::{Rgba, RgbaImage};

/// Indigo plate behind the microphone.
pub const BACKGROUND: Rgba<u8> = Rgba([99, 102, 241, 255]);
pub const FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Optional features the renderer and the icon set builder may rely on.
///
/// Resolved once in `main` and handed down, so the degraded paths can be
/// exercised by constructing the value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Draw the microphone glyph. When off, icons are solid `bg` squares.
    pub drawing: bool,
    /// Bundle renders into a multi-size `.ico` container.
    pub containers: bool,
}

impl Capabilities {
    /// Everything this build was compiled with.
    pub fn detect() -> Self {
        Self {
            drawing: cfg!(feature = "glyph"),
            containers: cfg!(feature = "ico"),
        }
    }
}

#[cfg(test)]
impl Capabilities {
    pub fn full() -> Self {
        Self {
            drawing: true,
            containers: true,
        }
    }
}

/// Render the icon at `size` with the stock colours.
pub fn render_default(size: u32, caps: Capabilities) -> RgbaImage {
    render(size, BACKGROUND, FOREGROUND, caps)
}

/// Render a `size` x `size` RGBA icon: a rounded indigo plate with a white
/// microphone (capsule, cradle arc, stand and base).
///
/// Everything outside the plate stays transparent. Sizes below ~8 px
/// truncate most proportions to zero and produce a degenerate glyph.
pub fn render(size: u32, bg: Rgba<u8>, fg: Rgba<u8>, caps: Capabilities) -> RgbaImage {
    if !caps.drawing {
        let Rgba([r, g, b, _]) = bg;
        return RgbaImage::from_pixel(size, size, Rgba([r, g, b, 255]));
    }

    let geo = Geometry::new(size);
    log::debug!("rendering {size}px icon: {geo:?}");

    let mut img = RgbaImage::new(size, size);
    let stroke = geo.stroke as f32;

    shapes::fill_rounded_rect(&mut img, geo.plate, geo.corner_radius as f32, bg);
    shapes::fill_ellipse(&mut img, geo.capsule, fg);
    shapes::stroke_arc(&mut img, geo.arc, 0.0, 180.0, stroke, fg);
    shapes::stroke_line(&mut img, geo.stand.0, geo.stand.1, stroke, fg);
    shapes::stroke_line(&mut img, geo.base.0, geo.base.1, stroke, fg);

    img
}
