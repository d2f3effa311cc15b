//! Stroke outline generation.
//!
//! Turns center-line geometry into fillable polygons: a straight segment
//! becomes a butt-capped quadrilateral, a full circle becomes a ring made
//! of two opposite-wound contours.

use crate::ellipse::Ellipse;
use crate::path_storage::PathStorage;

/// Append the outline of a straight segment stroked with `width`, butt caps.
/// A zero-length segment produces nothing.
pub fn stroke_line(path: &mut PathStorage, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || width <= 0.0 {
        return;
    }
    let hw = width / 2.0;
    let nx = -dy / len * hw;
    let ny = dx / len * hw;
    path.move_to(x1 - nx, y1 - ny);
    path.line_to(x2 - nx, y2 - ny);
    path.line_to(x2 + nx, y2 + ny);
    path.line_to(x1 + nx, y1 + ny);
    path.close_polygon();
}

/// Append the outline of a full circle of radius `r` stroked with `width`.
///
/// The band spans `r - width/2 ..= r + width/2`; the inner contour is wound
/// opposite to the outer one, so the band fills under the non-zero rule.
pub fn stroke_circle(path: &mut PathStorage, cx: f64, cy: f64, r: f64, width: f64) {
    if width <= 0.0 {
        return;
    }
    let r = r.abs();
    let hw = width / 2.0;
    let outer = r + hw;
    let inner = r - hw;
    path.concat_path(&mut Ellipse::circle(cx, cy, outer), 0);
    if inner > 0.0 {
        let steps = Ellipse::circle(cx, cy, outer).num_steps();
        path.concat_path(
            &mut Ellipse::circle(cx, cy, inner)
                .with_steps(steps)
                .clockwise(true),
            0,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PI;

    #[test]
    fn test_horizontal_line_outline() {
        let mut p = PathStorage::new();
        stroke_line(&mut p, 100.0, 500.0, 2900.0, 500.0, 2.0);
        let pts: Vec<(f64, f64)> = p.vertices()[..4].iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(pts[0], (100.0, 499.0));
        assert_eq!(pts[1], (2900.0, 499.0));
        assert_eq!(pts[2], (2900.0, 501.0));
        assert_eq!(pts[3], (100.0, 501.0));
        assert!((p.signed_area().abs() - 2800.0 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let mut p = PathStorage::new();
        stroke_line(&mut p, 5.0, 5.0, 5.0, 5.0, 4.0);
        stroke_line(&mut p, 0.0, 0.0, 10.0, 0.0, 0.0);
        assert!(p.is_empty());
    }

    #[test]
    fn test_ring_area() {
        let mut p = PathStorage::new();
        stroke_circle(&mut p, 0.0, 0.0, 500.0, 4.0);
        let expected = PI * (502.0f64.powi(2) - 498.0f64.powi(2));
        let got = p.signed_area().abs();
        assert!((got - expected).abs() / expected < 0.01, "{got} vs {expected}");
    }

    #[test]
    fn test_thick_stroke_on_small_circle_is_a_disc() {
        let mut p = PathStorage::new();
        stroke_circle(&mut p, 0.0, 0.0, 1.0, 4.0);
        let expected = PI * 9.0;
        let got = p.signed_area().abs();
        assert!((got - expected).abs() / expected < 0.1);
    }
}
