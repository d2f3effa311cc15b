//! Rendering buffer: row-oriented access to owned pixel data.
//!
//! The buffer owns a tightly packed, top-down byte array. Rows are handed
//! out as slices, so every pixel access is bounds-checked by the slice.

/// Owned pixel storage with row access.
#[derive(Debug, Clone)]
pub struct RenderingBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl RenderingBuffer {
    /// Allocate a zero-filled buffer of `width * height` pixels,
    /// `bpp` bytes each.
    pub fn new(width: u32, height: u32, bpp: usize) -> Self {
        let stride = width as usize * bpp;
        Self {
            data: vec![0; stride * height as usize],
            width,
            height,
            stride,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Immutable slice for row `y`.
    ///
    /// Panics if `y >= height`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Mutable slice for row `y`.
    ///
    /// Panics if `y >= height`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.stride]
    }

    /// The whole buffer, row after row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let rb = RenderingBuffer::new(3, 2, 4);
        assert_eq!(rb.width(), 3);
        assert_eq!(rb.height(), 2);
        assert_eq!(rb.stride(), 12);
        assert_eq!(rb.as_bytes().len(), 24);
        assert!(rb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rows_are_disjoint() {
        let mut rb = RenderingBuffer::new(2, 3, 4);
        rb.row_slice_mut(1).fill(7);
        assert!(rb.row_slice(0).iter().all(|&b| b == 0));
        assert!(rb.row_slice(1).iter().all(|&b| b == 7));
        assert!(rb.row_slice(2).iter().all(|&b| b == 0));
        assert_eq!(rb.as_bytes()[8..16], [7; 8]);
    }

    #[test]
    fn test_empty_buffer() {
        let rb = RenderingBuffer::new(0, 0, 4);
        assert!(rb.as_bytes().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_row_out_of_bounds() {
        let rb = RenderingBuffer::new(2, 2, 4);
        let _ = rb.row_slice(2);
    }
}
