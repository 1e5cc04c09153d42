//! Raster primitives. Each one tests pixel centres against the shape, so
//! edges are hard (no anti-aliasing) and results are exactly reproducible.
//!
//! `Bounds` are inclusive pixel bounds: a box from `x0` to `x1` covers the
//! continuous span `x0..x1 + 1`. Line endpoints are continuous coordinates.

use super::geometry::{Bounds, Point};
use image::{Rgba, RgbaImage};
use std::ops::Range;

/// Pixel indices whose centres may fall inside `lo..hi`, clipped to `0..limit`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil().max(0.0) as u32).min(limit);
    start..end.max(start)
}

/// Centre and radii of the ellipse inscribed in `b`.
fn ellipse_params(b: Bounds) -> (f32, f32, f32, f32) {
    let (left, right) = (b.x0, b.x1 + 1.0);
    let (top, bottom) = (b.y0, b.y1 + 1.0);
    (
        (left + right) / 2.0,
        (top + bottom) / 2.0,
        (right - left) / 2.0,
        (bottom - top) / 2.0,
    )
}

pub fn fill_rounded_rect(img: &mut RgbaImage, b: Bounds, radius: f32, color: Rgba<u8>) {
    let (left, top, right, bottom) = (b.x0, b.y0, b.x1 + 1.0, b.y1 + 1.0);
    if right <= left || bottom <= top {
        return;
    }
    let r = radius
        .min((right - left) / 2.0)
        .min((bottom - top) / 2.0)
        .max(0.0);

    let (w, h) = img.dimensions();
    for y in pixel_span(top, bottom, h) {
        let py = y as f32 + 0.5;
        if py < top || py >= bottom {
            continue;
        }
        for x in pixel_span(left, right, w) {
            let px = x as f32 + 0.5;
            if px < left || px >= right {
                continue;
            }
            // Distance past the inner rectangle whose corners are the arc centres.
            let dx = (left + r - px).max(px - (right - r)).max(0.0);
            let dy = (top + r - py).max(py - (bottom - r)).max(0.0);
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, color);
            }
        }
    }
}

pub fn fill_ellipse(img: &mut RgbaImage, b: Bounds, color: Rgba<u8>) {
    let (cx, cy, rx, ry) = ellipse_params(b);
    if !(rx > 0.0 && ry > 0.0) {
        return;
    }

    let (w, h) = img.dimensions();
    for y in pixel_span(cy - ry, cy + ry, h) {
        let ny = (y as f32 + 0.5 - cy) / ry;
        for x in pixel_span(cx - rx, cx + rx, w) {
            let nx = (x as f32 + 0.5 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Stroke part of the ellipse inscribed in `b`, `width` px thick, growing
/// inward from the outline.
///
/// Angles are in degrees, clockwise from 3 o'clock (image y points down), so
/// `0.0..180.0` is the lower half.
pub fn stroke_arc(
    img: &mut RgbaImage,
    b: Bounds,
    start_deg: f32,
    end_deg: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let (cx, cy, rx, ry) = ellipse_params(b);
    if !(rx > 0.0 && ry > 0.0) {
        return;
    }
    let (irx, iry) = (rx - width, ry - width);
    let hollow = irx > 0.0 && iry > 0.0;
    let start = start_deg.rem_euclid(360.0);
    let end = end_deg.rem_euclid(360.0);
    let full_turn = (end_deg - start_deg).abs() >= 360.0;

    let (w, h) = img.dimensions();
    for y in pixel_span(cy - ry, cy + ry, h) {
        let dy = y as f32 + 0.5 - cy;
        for x in pixel_span(cx - rx, cx + rx, w) {
            let dx = x as f32 + 0.5 - cx;

            let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
            if outer > 1.0 {
                continue;
            }
            if hollow && (dx / irx).powi(2) + (dy / iry).powi(2) < 1.0 {
                continue;
            }

            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            let in_sweep = full_turn
                || if start <= end {
                    angle >= start && angle <= end
                } else {
                    angle >= start || angle <= end
                };
            if in_sweep {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Straight segment `width` px thick with flat ends.
pub fn stroke_line(img: &mut RgbaImage, from: Point, to: Point, width: f32, color: Rgba<u8>) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len_sq = dx * dx + dy * dy;
    if !(len_sq > 0.0) {
        return;
    }
    let len = len_sq.sqrt();
    let half = width / 2.0;

    let (w, h) = img.dimensions();
    let xs = pixel_span(from.x.min(to.x) - half, from.x.max(to.x) + half, w);
    for y in pixel_span(from.y.min(to.y) - half, from.y.max(to.y) + half, h) {
        let vy = y as f32 + 0.5 - from.y;
        for x in xs.clone() {
            let vx = x as f32 + 0.5 - from.x;
            let t = (vx * dx + vy * dy) / len_sq;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let dist = (vx * dy - vy * dx).abs() / len;
            if dist <= half {
                img.put_pixel(x, y, color);
            }
        }
    }
}
