//! Anti-aliased cell accumulator.
//!
//! Converts edges (line segments in pixel coordinates) into per-cell signed
//! area and cover deltas. Each row holds one `f32` per pixel plus two guard
//! cells; a running sum along a row yields the exact covered fraction of
//! every pixel, signed by winding direction.
//!
//! Edges must already be clipped horizontally to `[0, width]`. Vertical
//! clipping happens here: the parts of an edge above row 0 or below the last
//! row are dropped.

/// Cell accumulator sized for a `width` x `height` raster.
pub struct RasterizerCellsAa {
    acc: Vec<f32>,
    width: u32,
    height: u32,
    stride: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl RasterizerCellsAa {
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize + 2;
        Self {
            acc: vec![0.0; stride * height as usize],
            width,
            height,
            stride,
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether any cell has been touched since the last reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_y > self.max_y
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }
    #[inline]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Zero every touched cell and forget the bounding box.
    pub fn reset(&mut self) {
        if !self.is_empty() {
            for y in self.min_y..=self.max_y {
                self.clear_row(y as u32);
            }
        }
        self.forget_bounds();
    }

    /// Forget the bounding box without touching cells. Only valid once every
    /// touched row has been cleared.
    pub(crate) fn forget_bounds(&mut self) {
        self.min_x = i32::MAX;
        self.min_y = i32::MAX;
        self.max_x = i32::MIN;
        self.max_y = i32::MIN;
    }

    /// The raw accumulated deltas of row `y`, guard cells included.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let start = y as usize * self.stride;
        &self.acc[start..start + self.stride]
    }

    /// Zero the touched span of row `y`.
    pub fn clear_row(&mut self, y: u32) {
        if self.min_x > self.max_x {
            return;
        }
        let start = y as usize * self.stride;
        let x1 = self.min_x as usize;
        let x2 = (self.max_x as usize).min(self.stride - 1);
        self.acc[start + x1..=start + x2].fill(0.0);
    }

    /// Accumulate one edge. Horizontal edges contribute nothing.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if y1 == y2 || !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return;
        }
        let (dir, x1, y1, x2, y2) = if y1 < y2 {
            (1.0, x1, y1, x2, y2)
        } else {
            (-1.0, x2, y2, x1, y1)
        };

        let y_top = y1.max(0.0);
        let y_bottom = y2.min(self.height as f64);
        if y_top >= y_bottom {
            return;
        }

        let w = self.width as f64;
        let x_lo = x1.min(x2).clamp(0.0, w);
        let x_hi = x1.max(x2).clamp(0.0, w);
        let dxdy = (x2 - x1) / (y2 - y1);
        let mut x = (x1 + (y_top - y1) * dxdy).clamp(x_lo, x_hi);
        let ey1 = y_top as u32;
        let ey2 = y_bottom.ceil() as u32;

        for ey in ey1..ey2 {
            let top = (ey as f64).max(y_top);
            let bottom = ((ey + 1) as f64).min(y_bottom);
            let dy = bottom - top;
            let x_next = (x + dxdy * dy).clamp(x_lo, x_hi);
            self.render_hline(ey, x, x_next, (dy * dir) as f32);
            x = x_next;
        }

        let lo = x_lo.floor() as i32;
        let hi = x_hi.ceil() as i32 + 1;
        self.min_x = self.min_x.min(lo);
        self.max_x = self.max_x.max(hi);
        self.min_y = self.min_y.min(ey1 as i32);
        self.max_y = self.max_y.max(ey2 as i32 - 1);
    }

    /// Distribute a row-local edge piece running from `xa` to `xb` with
    /// vertical extent `d` (signed) over the cells it crosses.
    fn render_hline(&mut self, ey: u32, xa: f64, xb: f64, d: f32) {
        let (x1, x2) = if xa < xb { (xa, xb) } else { (xb, xa) };
        let start = ey as usize * self.stride;
        let row = &mut self.acc[start..start + self.stride];

        let x1_floor = x1.floor();
        let x1i = x1_floor as usize;
        let x2_ceil = x2.ceil();
        let x2i = x2_ceil as usize;

        // Everything in a single cell
        if x2i <= x1i + 1 {
            let mid = (0.5 * (xa + xb) - x1_floor) as f32;
            row[x1i] += d - d * mid;
            row[x1i + 1] += d * mid;
            return;
        }

        // Run of adjacent cells: trapezoid areas at both ends, linear between
        let s = (1.0 / (x2 - x1)) as f32;
        let f1 = (x1 - x1_floor) as f32;
        let a0 = 0.5 * s * (1.0 - f1) * (1.0 - f1);
        let f2 = (x2 - x2_ceil + 1.0) as f32;
        let am = 0.5 * s * f2 * f2;

        row[x1i] += d * a0;
        if x2i == x1i + 2 {
            row[x1i + 1] += d * (1.0 - a0 - am);
        } else {
            let a1 = s * (1.5 - f1);
            row[x1i + 1] += d * (a1 - a0);
            for cell in &mut row[x1i + 2..x2i - 1] {
                *cell += d * s;
            }
            let a2 = a1 + (x2i - x1i - 3) as f32 * s;
            row[x2i - 1] += d * (1.0 - a2 - am);
        }
        row[x2i] += d * am;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(cells: &RasterizerCellsAa, y: u32) -> Vec<f32> {
        let mut acc = 0.0;
        cells
            .row(y)
            .iter()
            .take(cells.width() as usize)
            .map(|d| {
                acc += d;
                acc
            })
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let cells = RasterizerCellsAa::new(10, 10);
        assert!(cells.is_empty());
        assert!(cells.row(3).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_horizontal_edge_is_ignored() {
        let mut cells = RasterizerCellsAa::new(10, 10);
        cells.line(0.0, 5.0, 10.0, 5.0);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_vertical_edge_on_pixel_boundary() {
        let mut cells = RasterizerCellsAa::new(10, 4);
        cells.line(3.0, 0.0, 3.0, 4.0);
        let cov = prefix(&cells, 1);
        assert_eq!(&cov[..3], &[0.0, 0.0, 0.0]);
        assert!(cov[3..].iter().all(|&c| c == 1.0));
    }

    #[test]
    fn test_vertical_edge_mid_pixel() {
        let mut cells = RasterizerCellsAa::new(10, 4);
        cells.line(3.5, 4.0, 3.5, 0.0);
        let cov = prefix(&cells, 2);
        assert_eq!(cov[2], 0.0);
        assert_eq!(cov[3], -0.5);
        assert_eq!(cov[4], -1.0);
    }

    #[test]
    fn test_unit_square_coverage() {
        let mut cells = RasterizerCellsAa::new(8, 8);
        cells.line(2.0, 2.0, 2.0, 4.0);
        cells.line(5.0, 4.0, 5.0, 2.0);
        for y in 0..8 {
            let cov = prefix(&cells, y);
            for (x, c) in cov.iter().enumerate() {
                let inside = (2..4).contains(&y) && (2..5).contains(&x);
                assert_eq!(c.abs(), if inside { 1.0 } else { 0.0 }, "({x},{y})");
            }
        }
    }

    #[test]
    fn test_diagonal_edge_conserves_area() {
        // Triangle (0,0) (6,0) (0,6): area 18
        let mut cells = RasterizerCellsAa::new(8, 8);
        cells.line(6.0, 0.0, 0.0, 6.0);
        cells.line(0.0, 6.0, 0.0, 0.0);
        let total: f32 = (0..8).flat_map(|y| prefix(&cells, y)).map(f32::abs).sum();
        assert!((total - 18.0).abs() < 1e-3, "{total}");
    }

    #[test]
    fn test_rows_outside_are_dropped() {
        let mut cells = RasterizerCellsAa::new(4, 4);
        cells.line(1.0, -10.0, 1.0, 2.0);
        cells.line(2.0, 3.0, 2.0, 40.0);
        assert_eq!(cells.min_y(), 0);
        assert_eq!(cells.max_y(), 3);
        assert_eq!(prefix(&cells, 0)[1], 1.0);
        assert_eq!(prefix(&cells, 3)[2], 1.0);
    }

    #[test]
    fn test_fully_outside_does_nothing() {
        let mut cells = RasterizerCellsAa::new(4, 4);
        cells.line(1.0, -10.0, 1.0, -2.0);
        cells.line(1.0, 4.0, 1.0, 9.0);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_reset_zeroes_cells() {
        let mut cells = RasterizerCellsAa::new(6, 6);
        cells.line(1.3, 0.2, 4.7, 5.9);
        assert!(!cells.is_empty());
        cells.reset();
        assert!(cells.is_empty());
        for y in 0..6 {
            assert!(cells.row(y).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_non_finite_edge_is_ignored() {
        let mut cells = RasterizerCellsAa::new(4, 4);
        cells.line(f64::NAN, 0.0, 1.0, 3.0);
        cells.line(0.0, f64::INFINITY, 1.0, 3.0);
        assert!(cells.is_empty());
    }
}
