//! Unpacked scanline container (ScanlineU8).
//!
//! Stores per-pixel coverage values in a flat array, with spans referencing
//! into it. Adjacent cells merge into one span; a gap starts a new one.

use crate::rasterizer_scanline_aa::Scanline;

/// A horizontal run within a scanline, referencing coverage data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanlineSpan {
    pub x: i32,
    pub len: u32,
    pub cover_offset: usize,
}

/// Unpacked scanline container with per-pixel u8 coverage values.
#[derive(Debug, Default)]
pub struct ScanlineU8 {
    y: i32,
    covers: Vec<u8>,
    spans: Vec<ScanlineSpan>,
}

impl ScanlineU8 {
    pub fn new() -> Self {
        Self::default()
    }

    /// The spans of the current scanline, left to right.
    pub fn spans(&self) -> &[ScanlineSpan] {
        &self.spans
    }

    /// The coverage values of `span`.
    pub fn span_covers(&self, span: &ScanlineSpan) -> &[u8] {
        &self.covers[span.cover_offset..span.cover_offset + span.len as usize]
    }
}

impl Scanline for ScanlineU8 {
    fn reset_spans(&mut self) {
        self.covers.clear();
        self.spans.clear();
    }

    fn add_cell(&mut self, x: i32, cover: u32) {
        let offset = self.covers.len();
        self.covers.push(cover.min(255) as u8);
        match self.spans.last_mut() {
            Some(span) if span.x + span.len as i32 == x => span.len += 1,
            _ => self.spans.push(ScanlineSpan {
                x,
                len: 1,
                cover_offset: offset,
            }),
        }
    }

    fn finalize(&mut self, y: i32) {
        self.y = y;
    }

    fn num_spans(&self) -> u32 {
        self.spans.len() as u32
    }

    fn y(&self) -> i32 {
        self.y
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_cells_merge() {
        let mut sl = ScanlineU8::new();
        sl.reset_spans();
        sl.add_cell(10, 64);
        sl.add_cell(11, 255);
        sl.add_cell(12, 128);
        sl.finalize(7);
        assert_eq!(sl.y(), 7);
        assert_eq!(sl.num_spans(), 1);
        let span = sl.spans()[0];
        assert_eq!(span.x, 10);
        assert_eq!(span.len, 3);
        assert_eq!(sl.span_covers(&span), &[64, 255, 128]);
    }

    #[test]
    fn test_gap_starts_new_span() {
        let mut sl = ScanlineU8::new();
        sl.add_cell(1, 255);
        sl.add_cell(5, 100);
        sl.add_cell(6, 50);
        assert_eq!(sl.num_spans(), 2);
        let second = sl.spans()[1];
        assert_eq!(second.x, 5);
        assert_eq!(sl.span_covers(&second), &[100, 50]);
    }

    #[test]
    fn test_reset_clears() {
        let mut sl = ScanlineU8::new();
        sl.add_cell(1, 255);
        sl.reset_spans();
        assert_eq!(sl.num_spans(), 0);
        assert!(sl.spans().is_empty());
    }
}
