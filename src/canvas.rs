//! Vector drawing surface.
//!
//! `Canvas` bundles the pipeline (rendering buffer, rasterizer, scanline,
//! renderer) behind a small immediate-mode API: pick a source color, fill or
//! stroke a shape, read pixels back or encode the surface as PNG.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::color::Rgba8;
use crate::ellipse::Ellipse;
use crate::error::{Error, Result};
use crate::path_storage::PathStorage;
use crate::pixfmt_rgba::{PixfmtRgba32, BPP};
use crate::rasterizer_scanline_aa::RasterizerScanlineAa;
use crate::renderer_base::RendererBase;
use crate::renderer_scanline::render_scanlines_aa_solid;
use crate::rendering_buffer::RenderingBuffer;
use crate::scanline_u::ScanlineU8;
use crate::stroke;

/// Line width used until `set_line_width` is called.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// An RGBA raster with anti-aliased fill and stroke operations.
///
/// Starts fully transparent. Every drawing call paints with the current
/// source color; stroke calls also use the current line width.
pub struct Canvas {
    rbuf: RenderingBuffer,
    ras: RasterizerScanlineAa,
    sl: ScanlineU8,
    source: Rgba8,
    line_width: f64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            rbuf: RenderingBuffer::new(width, height, BPP),
            ras: RasterizerScanlineAa::new(width, height),
            sl: ScanlineU8::new(),
            source: Rgba8::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    pub fn width(&self) -> u32 {
        self.rbuf.width()
    }

    pub fn height(&self) -> u32 {
        self.rbuf.height()
    }

    pub fn set_source(&mut self, color: Rgba8) {
        self.source = color;
    }

    pub fn source(&self) -> Rgba8 {
        self.source
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Cover the whole surface with the source color.
    pub fn paint(&mut self) {
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut self.rbuf));
        ren.clear(&self.source);
    }

    /// Fill a disc.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64) {
        self.ras.add_path(&mut Ellipse::circle(cx, cy, r), 0);
        self.render();
    }

    /// Fill several `(x, y, w, h)` rectangles as one shape.
    pub fn fill_rects(&mut self, rects: &[(f64, f64, f64, f64)]) {
        let mut path = PathStorage::new();
        for &(x, y, w, h) in rects {
            path.rect(x, y, w, h);
        }
        self.fill_path(&mut path);
    }

    /// Stroke a full circle outline with the current line width.
    pub fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64) {
        let mut path = PathStorage::new();
        stroke::stroke_circle(&mut path, cx, cy, r, self.line_width);
        self.fill_path(&mut path);
    }

    /// Stroke a straight segment with the current line width, butt caps.
    pub fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let mut path = PathStorage::new();
        stroke::stroke_line(&mut path, x1, y1, x2, y2, self.line_width);
        self.fill_path(&mut path);
    }

    /// Fill an arbitrary path with the non-zero rule.
    pub fn fill_path(&mut self, path: &mut PathStorage) {
        if path.is_empty() {
            return;
        }
        self.ras.add_path(path, 0);
        self.render();
    }

    fn render(&mut self) {
        let mut ren = RendererBase::new(PixfmtRgba32::new(&mut self.rbuf));
        render_scanlines_aa_solid(&mut self.ras, &mut self.sl, &mut ren, &self.source);
    }

    /// Read a pixel back, `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return None;
        }
        let row = self.rbuf.row_slice(y as u32);
        let off = x as usize * BPP;
        Some(Rgba8::new(row[off], row[off + 1], row[off + 2], row[off + 3]))
    }

    /// Copy the surface into an RGB image, dropping alpha.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let rgb: Vec<u8> = self
            .rbuf
            .as_bytes()
            .chunks_exact(BPP)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect();
        let len = rgb.len();
        RgbImage::from_raw(self.width(), self.height(), rgb).ok_or(Error::BufferSize {
            width: self.width(),
            height: self.height(),
            len,
        })
    }

    /// Encode the surface as an RGB PNG at `path`, replacing any existing file.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        self.to_rgb_image()?
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let c = Canvas::new(8, 4);
        assert_eq!(c.width(), 8);
        assert_eq!(c.height(), 4);
        assert_eq!(c.pixel(0, 0), Some(Rgba8::default()));
        assert_eq!(c.pixel(8, 0), None);
        assert_eq!(c.pixel(0, -1), None);
        assert_eq!(c.line_width(), DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_paint() {
        let mut c = Canvas::new(5, 5);
        c.set_source(Rgba8::BLACK);
        c.paint();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(c.pixel(x, y), Some(Rgba8::BLACK));
            }
        }
    }

    #[test]
    fn test_frame_of_rects_is_exact() {
        let (w, h, b) = (40.0, 30.0, 5.0);
        let mut c = Canvas::new(40, 30);
        c.set_source(Rgba8::BLACK);
        c.paint();
        let frame = Rgba8::rgb(234, 204, 255);
        c.set_source(frame);
        c.fill_rects(&[
            (0.0, 0.0, b, h),
            (0.0, 0.0, w, b),
            (0.0, h - b, w, b),
            (w - b, 0.0, b, h),
        ]);
        for y in 0..30 {
            for x in 0..40 {
                let in_frame = x < 5 || x >= 35 || y < 5 || y >= 25;
                let want = if in_frame { frame } else { Rgba8::BLACK };
                assert_eq!(c.pixel(x, y), Some(want), "({x},{y})");
            }
        }
    }

    #[test]
    fn test_fill_circle_center_color() {
        let mut c = Canvas::new(100, 100);
        c.set_source(Rgba8::BLACK);
        c.paint();
        let sun = Rgba8::rgb(255, 185, 71);
        c.set_source(sun);
        c.fill_circle(50.0, 95.0, 30.0);
        assert_eq!(c.pixel(50, 95), Some(sun));
        assert_eq!(c.pixel(50, 99), Some(sun));
        assert_eq!(c.pixel(50, 60), Some(Rgba8::BLACK));
    }

    #[test]
    fn test_stroke_line_covers_two_rows() {
        let mut c = Canvas::new(20, 10);
        c.set_source(Rgba8::BLACK);
        c.paint();
        let ink = Rgba8::rgb(31, 79, 209);
        c.set_source(ink);
        c.stroke_line(4.0, 5.0, 16.0, 5.0);
        assert_eq!(c.pixel(4, 4), Some(ink));
        assert_eq!(c.pixel(15, 5), Some(ink));
        assert_eq!(c.pixel(16, 5), Some(Rgba8::BLACK));
        assert_eq!(c.pixel(3, 5), Some(Rgba8::BLACK));
        assert_eq!(c.pixel(10, 3), Some(Rgba8::BLACK));
        assert_eq!(c.pixel(10, 6), Some(Rgba8::BLACK));
    }

    #[test]
    fn test_stroke_circle_leaves_interior() {
        let mut c = Canvas::new(100, 100);
        c.set_source(Rgba8::BLACK);
        c.paint();
        c.set_line_width(4.0);
        let gray = Rgba8::from_normalized(0.6, 0.6, 0.6);
        c.set_source(gray);
        c.stroke_circle(50.0, 50.0, 30.0);
        assert_eq!(c.pixel(50, 50), Some(Rgba8::BLACK));
        assert_eq!(c.pixel(79, 50), Some(gray));
        assert_eq!(c.pixel(20, 50), Some(gray));
        assert_eq!(c.pixel(85, 50), Some(Rgba8::BLACK));
    }

    #[test]
    fn test_to_rgb_image_drops_alpha() {
        let mut c = Canvas::new(3, 2);
        c.set_source(Rgba8::rgb(1, 2, 3));
        c.paint();
        let img = c.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [1, 2, 3]);
    }
}
