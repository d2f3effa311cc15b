//! RGBA pixel format with alpha blending.
//!
//! Reads and writes RGBA32 pixels (4 bytes per pixel, non-premultiplied
//! alpha) in a [`RenderingBuffer`]. Provides the `PixelFormat` trait and the
//! `PixfmtRgba32` implementation.

use crate::basics::CoverType;
use crate::color::Rgba8;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that can blend colors into a rendering buffer.
///
/// Coordinates passed in are assumed to be inside the buffer; clipping is the
/// job of [`RendererBase`](crate::renderer_base::RendererBase).
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Blend a horizontal span of `covers.len()` pixels starting at (x, y).
    fn blend_solid_hspan(&mut self, x: i32, y: i32, c: &Self::ColorType, covers: &[CoverType]);

    /// Overwrite a horizontal line of `len` pixels at (x, y) with color `c`.
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Self::ColorType;
}

// ============================================================================
// PixfmtRgba32: non-premultiplied RGBA, 8 bits per channel
// ============================================================================

/// Bytes per pixel.
pub const BPP: usize = 4;

/// Pixel format for non-premultiplied RGBA32. Component order R, G, B, A.
pub struct PixfmtRgba32<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtRgba32<'a> {
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        Self { rbuf }
    }

    #[inline]
    fn put_pix(p: &mut [u8], c: &Rgba8) {
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
        p[3] = c.a;
    }

    #[inline]
    fn blend_pix(p: &mut [u8], c: &Rgba8, alpha: u8) {
        p[0] = Rgba8::lerp(p[0], c.r, alpha);
        p[1] = Rgba8::lerp(p[1], c.g, alpha);
        p[2] = Rgba8::lerp(p[2], c.b, alpha);
        p[3] = Rgba8::lerp(p[3], 255, alpha);
    }
}

impl PixelFormat for PixfmtRgba32<'_> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let row = self.rbuf.row_slice(y as u32);
        let off = x as usize * BPP;
        Rgba8::new(row[off], row[off + 1], row[off + 2], row[off + 3])
    }

    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let start = x as usize * BPP;
        for p in row[start..start + len as usize * BPP].chunks_exact_mut(BPP) {
            Self::put_pix(p, c);
        }
    }

    fn blend_solid_hspan(&mut self, x: i32, y: i32, c: &Rgba8, covers: &[CoverType]) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let start = x as usize * BPP;
        let span = &mut row[start..start + covers.len() * BPP];
        for (p, &cover) in span.chunks_exact_mut(BPP).zip(covers) {
            let alpha = Rgba8::mult_cover(c.a, cover);
            if alpha == 255 {
                Self::put_pix(p, c);
            } else if alpha > 0 {
                Self::blend_pix(p, c, alpha);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
