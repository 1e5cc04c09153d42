/// Inclusive pixel bounds of a shape, `(x0, y0)..=(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// Every coordinate of the glyph, derived from the canvas edge length.
///
/// Integer ratios truncate the way the artwork was originally laid out
/// (`size / 8`, `size / 6`, ...); only the arc and base spans scale by float
/// factors. Below ~8 px several ratios reach zero and the glyph degenerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub corner_radius: u32,
    pub stroke: u32,
    pub plate: Bounds,
    pub capsule: Bounds,
    pub arc: Bounds,
    pub stand: (Point, Point),
    pub base: (Point, Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Geometry {
    pub fn new(size: u32) -> Self {
        let s = i64::from(size);
        let margin = size / 8;
        let corner_radius = size / 6;
        let cx = size / 2;
        let cy = size / 2;

        // Capsule half-width and full height.
        let mic_width = size / 5;
        let mic_height = size / 3;
        let mic_top = i64::from(cy) - i64::from(mic_height / 2) - s / 10;

        let stroke = (size / 40).max(2);
        let fcx = cx as f32;

        let plate = Bounds {
            x0: margin as f32,
            y0: margin as f32,
            x1: size.saturating_sub(margin) as f32,
            y1: size.saturating_sub(margin) as f32,
        };

        let capsule = Bounds {
            x0: fcx - mic_width as f32,
            y0: mic_top as f32,
            x1: fcx + mic_width as f32,
            y1: (mic_top + i64::from(mic_height)) as f32,
        };

        // Cradle under the capsule: wider than the capsule, overlapping its bottom.
        let arc_width = mic_width as f32 * 1.8;
        let arc_height = mic_height as f32 * 0.8;
        let arc_top = (mic_top + i64::from(mic_height) - s / 20) as f32;
        let arc = Bounds {
            x0: fcx - arc_width,
            y0: arc_top,
            x1: fcx + arc_width,
            y1: arc_top + arc_height,
        };

        let stand_top = arc_top + arc_height;
        let stand_bottom = stand_top + (size / 8) as f32;
        let stand = (Point::new(fcx, stand_top), Point::new(fcx, stand_bottom));

        let base_width = mic_width as f32 * 1.2;
        let base = (
            Point::new(fcx - base_width, stand_bottom),
            Point::new(fcx + base_width, stand_bottom),
        );

        Self {
            corner_radius,
            stroke,
            plate,
            capsule,
            arc,
            stand,
            base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_never_below_two() {
        assert_eq!(Geometry::new(32).stroke, 2);
        assert_eq!(Geometry::new(79).stroke, 2);
        assert_eq!(Geometry::new(1024).stroke, 25);
        for size in 1..=2048 {
            assert!(Geometry::new(size).stroke >= 2, "size {size}");
        }
    }

    #[test]
    fn scales_monotonically_across_icon_sizes() {
        let sizes = [32, 128, 256, 512, 1024];
        for pair in sizes.windows(2) {
            let a = Geometry::new(pair[0]);
            let b = Geometry::new(pair[1]);
            // plate margin
            assert!(a.plate.x0 <= b.plate.x0);
            assert!(a.corner_radius <= b.corner_radius);
            assert!(a.stroke <= b.stroke);
            assert!(a.capsule.x1 - a.capsule.x0 <= b.capsule.x1 - b.capsule.x0);
            assert!(a.capsule.y1 - a.capsule.y0 <= b.capsule.y1 - b.capsule.y0);
            assert!(a.arc.x1 - a.arc.x0 <= b.arc.x1 - b.arc.x0);
        }
    }

    #[test]
    fn layout_at_256() {
        let g = Geometry::new(256);
        assert_eq!(g.plate, Bounds { x0: 32.0, y0: 32.0, x1: 224.0, y1: 224.0 });
        assert_eq!(g.corner_radius, 42);
        assert_eq!(g.stand.0.x, 128.0);
        assert_eq!(g.capsule, Bounds { x0: 77.0, y0: 61.0, x1: 179.0, y1: 146.0 });
        assert_eq!(g.arc.y0, 134.0);
        assert!((g.arc.x0 - 36.2).abs() < 1e-3);
        assert!((g.arc.y1 - 202.0).abs() < 1e-3);
        assert!((g.stand.1.y - 234.0).abs() < 1e-3);
        assert!((g.base.0.x - 66.8).abs() < 1e-3);
        assert!((g.base.1.x - 189.2).abs() < 1e-3);
    }

    #[test]
    fn tiny_sizes_truncate_to_zero() {
        let g = Geometry::new(4);
        assert_eq!(g.plate.x0, 0.0);
        assert_eq!(g.capsule.x0, g.capsule.x1);

        let g = Geometry::new(0);
        assert_eq!(g.plate.x1, 0.0);
    }
}
