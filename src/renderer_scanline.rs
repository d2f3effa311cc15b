//! Scanline rendering functions.
//!
//! The glue between rasterizer and renderer: sweep every scanline out of a
//! [`RasterizerScanlineAa`] and blend its spans in one solid color.

use crate::pixfmt_rgba::PixelFormat;
use crate::rasterizer_scanline_aa::{RasterizerScanlineAa, Scanline};
use crate::renderer_base::RendererBase;
use crate::scanline_u::ScanlineU8;

/// Render all scanlines of `ras` with a solid color.
pub fn render_scanlines_aa_solid<PF: PixelFormat>(
    ras: &mut RasterizerScanlineAa,
    sl: &mut ScanlineU8,
    ren: &mut RendererBase<PF>,
    color: &PF::ColorType,
) {
    if !ras.rewind_scanlines() {
        return;
    }
    while ras.sweep_scanline(sl) {
        let y = sl.y();
        for span in sl.spans() {
            ren.blend_solid_hspan(span.x, y, color, sl.span_covers(span));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
