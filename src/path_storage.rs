//! Path storage: a replayable container of vertex commands.
//!
//! Collects move_to / line_to / close commands, whole rectangles, and the
//! output of other vertex sources, then replays them as a [`VertexSource`].

use crate::basics::{
    is_end_poly, is_stop, is_vertex, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO,
    PATH_CMD_MOVE_TO, PATH_CMD_STOP, PATH_FLAGS_CLOSE, PATH_FLAGS_NONE,
};

/// A stored vertex: coordinates plus the command that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexD {
    pub x: f64,
    pub y: f64,
    pub cmd: u32,
}

impl VertexD {
    pub fn new(x: f64, y: f64, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

/// Vertex container with replay.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<VertexD>,
    iterator: usize,
}

impl PathStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_MOVE_TO));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Close the current contour. Does nothing if the last command already
    /// ended a polygon or the path is empty.
    pub fn close_polygon(&mut self) {
        if let Some(last) = self.vertices.last() {
            if is_vertex(last.cmd) {
                self.vertices.push(VertexD::new(
                    0.0,
                    0.0,
                    PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_NONE,
                ));
            }
        }
    }

    /// Add a closed axis-aligned rectangle with its top-left corner at (x, y).
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close_polygon();
    }

    /// Append every command of another vertex source.
    pub fn concat_path(&mut self, vs: &mut dyn VertexSource, path_id: u32) {
        let (mut x, mut y) = (0.0, 0.0);
        vs.rewind(path_id);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            if is_end_poly(cmd) {
                self.vertices.push(VertexD::new(0.0, 0.0, cmd));
            } else {
                self.vertices.push(VertexD::new(x, y, cmd));
            }
        }
    }

    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[VertexD] {
        &self.vertices
    }

    /// Shoelace area summed over every contour. Positive for contours that
    /// run clockwise on screen (y pointing down).
    pub fn signed_area(&self) -> f64 {
        let mut area = 0.0;
        let mut contour: Vec<(f64, f64)> = Vec::new();
        let mut flush = |contour: &mut Vec<(f64, f64)>| {
            for i in 0..contour.len() {
                let (x1, y1) = contour[i];
                let (x2, y2) = contour[(i + 1) % contour.len()];
                area += x1 * y2 - x2 * y1;
            }
            contour.clear();
        };
        for v in &self.vertices {
            if v.cmd == PATH_CMD_MOVE_TO {
                flush(&mut contour);
            }
            if is_vertex(v.cmd) {
                contour.push((v.x, v.y));
            }
        }
        flush(&mut contour);
        area / 2.0
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        let Some(v) = self.vertices.get(self.iterator) else {
            return PATH_CMD_STOP;
        };
        *x = v.x;
        *y = v.y;
        self.iterator += 1;
        v.cmd
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::is_close;
    use crate::ellipse::Ellipse;

    #[test]
    fn test_rect_commands() {
        let mut p = PathStorage::new();
        p.rect(0.0, 0.0, 50.0, 2000.0);
        assert_eq!(p.total_vertices(), 5);
        let cmds: Vec<u32> = p.vertices().iter().map(|v| v.cmd).collect();
        assert_eq!(cmds[0], PATH_CMD_MOVE_TO);
        assert!(cmds[1..4].iter().all(|&c| c == PATH_CMD_LINE_TO));
        assert!(is_close(cmds[4]));
        assert_eq!(p.signed_area(), 100_000.0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut p = PathStorage::new();
        p.close_polygon();
        assert!(p.is_empty());
        p.move_to(0.0, 0.0);
        p.line_to(1.0, 0.0);
        p.line_to(1.0, 1.0);
        p.close_polygon();
        p.close_polygon();
        assert_eq!(p.total_vertices(), 4);
    }

    #[test]
    fn test_replay() {
        let mut p = PathStorage::new();
        p.move_to(1.0, 2.0);
        p.line_to(3.0, 4.0);
        let (mut x, mut y) = (0.0, 0.0);
        p.rewind(0);
        assert_eq!(p.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
        assert_eq!((x, y), (1.0, 2.0));
        assert_eq!(p.vertex(&mut x, &mut y), PATH_CMD_LINE_TO);
        assert_eq!((x, y), (3.0, 4.0));
        assert_eq!(p.vertex(&mut x, &mut y), PATH_CMD_STOP);
        p.rewind(0);
        assert_eq!(p.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
    }

    #[test]
    fn test_concat_opposite_windings_cancel() {
        let mut p = PathStorage::new();
        p.concat_path(&mut Ellipse::circle(0.0, 0.0, 10.0).with_steps(32), 0);
        let single = p.signed_area();
        assert!(single.abs() > 300.0);
        p.concat_path(
            &mut Ellipse::circle(0.0, 0.0, 10.0).with_steps(32).clockwise(true),
            0,
        );
        assert!(p.signed_area().abs() < 1e-9);
    }
}
