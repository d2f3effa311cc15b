//! Ellipse vertex generator.
//!
//! Approximates an ellipse by a closed regular polygon. The step count is
//! derived from the mean radius so the chord error stays under 1/8 pixel.

use crate::basics::{
    uround, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CCW, PATH_FLAGS_CLOSE, PATH_FLAGS_CW, PI,
};

/// Closed polygon approximating an axis-aligned ellipse.
#[derive(Debug, Clone)]
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    num: u32,
    step: u32,
    cw: bool,
}

impl Ellipse {
    /// Ellipse with an automatically chosen step count, counter-clockwise
    /// in a y-down coordinate system.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            num: steps_for(rx, ry),
            step: 0,
            cw: false,
        }
    }

    /// Circle shorthand.
    pub fn circle(x: f64, y: f64, r: f64) -> Self {
        Self::new(x, y, r, r)
    }

    /// Reverse the winding direction.
    pub fn clockwise(mut self, cw: bool) -> Self {
        self.cw = cw;
        self
    }

    /// Force an explicit step count (at least 3).
    pub fn with_steps(mut self, num: u32) -> Self {
        self.num = num.max(3);
        self
    }

    pub fn num_steps(&self) -> u32 {
        self.num
    }
}

fn steps_for(rx: f64, ry: f64) -> u32 {
    let ra = (rx.abs() + ry.abs()) / 2.0;
    let da = (ra / (ra + 0.125)).acos() * 2.0;
    uround(2.0 * PI / da).max(3)
}

impl VertexSource for Ellipse {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step == self.num {
            self.step += 1;
            let orientation = if self.cw { PATH_FLAGS_CW } else { PATH_FLAGS_CCW };
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | orientation;
        }
        if self.step > self.num {
            return PATH_CMD_STOP;
        }
        let mut angle = self.step as f64 / self.num as f64 * 2.0 * PI;
        if self.cw {
            angle = 2.0 * PI - angle;
        }
        *x = self.x + angle.cos() * self.rx;
        *y = self.y + angle.sin() * self.ry;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
