//! Scene composition: sun, planet chain, guides and border.
//!
//! Composition is split in two. [`plan`] makes every random decision and
//! returns a [`Plan`] (plain geometry and colors); [`draw`] renders a plan
//! onto a [`Canvas`]. [`run`] ties both to the PNG round trip and the grain
//! pass.

use log::{debug, info};
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgba8;
use crate::config::{Config, GuideMode};
use crate::error::Result;
use crate::noise;
use crate::palette::{self, BODY_PALETTE, BORDER_PALETTE};

/// Vertical gap left between neighbouring bodies.
pub const PLANET_GAP: i64 = 20;

/// Number of planet placements attempted (indices `1..=PLANET_ATTEMPTS`).
pub const PLANET_ATTEMPTS: i64 = 19;

/// Smallest radius the first planet can draw.
pub const INITIAL_MIN_SIZE: i64 = 5;
/// Largest radius the first planet can draw.
pub const INITIAL_MAX_SIZE: i64 = 60;

/// `min_size` grows by this much per attempt.
pub const MIN_SIZE_STEP: i64 = 5;

/// `max_size` grows by this much times the attempt index.
pub const MAX_SIZE_STEP: i64 = 5;

/// Stroke width of orbit guides.
pub const ORBIT_LINE_WIDTH: f64 = 4.0;
/// Normalized gray level of orbit guides.
pub const ORBIT_GRAY: f64 = 0.6;

/// A filled disc. Every body sits on the vertical center line of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub center_y: i64,
    pub radius: i64,
    pub color: Rgba8,
}

/// Geometry of a proposed planet, before the border check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub center_y: i64,
    pub radius: i64,
}

/// Optional visual aid drawn under a planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// Full circle centered on the sun.
    Orbit { cx: f64, cy: f64, radius: f64 },
    /// Horizontal stroke at height `y`.
    Line { x1: f64, x2: f64, y: f64 },
}

/// An accepted planet and its guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub body: Body,
    pub guide: Option<Guide>,
}

/// Everything needed to draw a scene, with all randomness already spent.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub width: u32,
    pub height: u32,
    pub border: i64,
    pub sun: Body,
    pub planets: Vec<Placement>,
    pub border_color: Rgba8,
    /// Attempts skipped because the body would cross the top border.
    pub rejected: u32,
}

// ============================================================================
// PlacementCursor
// ============================================================================

/// Running state of the planet chain: the last accepted body and the
/// current radius bounds.
///
/// A rejected candidate leaves the last body in place, so the next proposal
/// starts from the same spot with wider bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementCursor {
    prev_center: i64,
    prev_radius: i64,
    prev_color: Rgba8,
    min_size: i64,
    max_size: i64,
}

impl PlacementCursor {
    /// Start a chain from the sun.
    pub fn new(sun: &Body) -> Self {
        Self {
            prev_center: sun.center_y,
            prev_radius: sun.radius,
            prev_color: sun.color,
            min_size: INITIAL_MIN_SIZE,
            max_size: INITIAL_MAX_SIZE,
        }
    }

    pub fn prev_center(&self) -> i64 {
        self.prev_center
    }

    pub fn prev_radius(&self) -> i64 {
        self.prev_radius
    }

    pub fn prev_color(&self) -> Rgba8 {
        self.prev_color
    }

    /// Current inclusive radius bounds.
    pub fn size_bounds(&self) -> (i64, i64) {
        (self.min_size, self.max_size)
    }

    /// Draw a radius within the bounds and place the body above the last one.
    pub fn propose<R: Rng + ?Sized>(&self, rng: &mut R) -> Candidate {
        let radius = rng.gen_range(self.min_size..=self.max_size);
        Candidate {
            center_y: self.place(radius),
            radius,
        }
    }

    /// Center of a body of `radius` stacked on top of the last one.
    pub fn place(&self, radius: i64) -> i64 {
        self.prev_center - self.prev_radius - 2 * radius - PLANET_GAP
    }

    /// A candidate is kept only if its top stays on or below the border.
    pub fn accepts(&self, candidate: &Candidate, border: i64) -> bool {
        candidate.center_y - candidate.radius >= border
    }

    /// Make an accepted body the new chain tip.
    pub fn advance(&mut self, candidate: &Candidate, color: Rgba8) {
        self.prev_center = candidate.center_y;
        self.prev_radius = candidate.radius;
        self.prev_color = color;
    }

    /// Widen the bounds after attempt `index` (1-based).
    pub fn grow(&mut self, index: i64) {
        self.min_size += MIN_SIZE_STEP;
        self.max_size += MAX_SIZE_STEP * index;
    }
}

// ============================================================================
// Planning
// ============================================================================

/// Make every random decision for a scene.
///
/// Draw order: sun color, then per attempt a radius and, if accepted, a body
/// color, then the border color.
pub fn plan<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Plan {
    let width = config.width as i64;
    let height = config.height as i64;
    let border = config.border as i64;
    let cx = width as f64 / 2.0;

    let sun = Body {
        center_y: height - border,
        radius: config.sun_radius as i64,
        color: palette::pick(&BODY_PALETTE, rng).unwrap_or(BODY_PALETTE[0]),
    };
    debug!(
        "sun at ({cx}, {}) radius {} color {:?}",
        sun.center_y, sun.radius, sun.color
    );

    let mut cursor = PlacementCursor::new(&sun);
    let mut planets = Vec::new();
    let mut rejected = 0;

    for index in 1..=PLANET_ATTEMPTS {
        let candidate = cursor.propose(rng);
        if cursor.accepts(&candidate, border) {
            let guide = match config.guide {
                GuideMode::None => None,
                GuideMode::Orbit => Some(Guide::Orbit {
                    cx,
                    cy: sun.center_y as f64,
                    radius: (height - candidate.center_y - border) as f64,
                }),
                GuideMode::Line => Some(Guide::Line {
                    x1: (border * 2) as f64,
                    x2: (width - border * 2) as f64,
                    y: candidate.center_y as f64,
                }),
            };
            let color = palette::pick_distinct(&BODY_PALETTE, cursor.prev_color(), rng)
                .unwrap_or(cursor.prev_color());
            let body = Body {
                center_y: candidate.center_y,
                radius: candidate.radius,
                color,
            };
            debug!(
                "planet {index}: center y {} radius {} color {:?}",
                body.center_y, body.radius, body.color
            );
            planets.push(Placement { body, guide });
            cursor.advance(&candidate, color);
        } else {
            debug!(
                "planet {index}: rejected, top {} crosses border {border}",
                candidate.center_y - candidate.radius
            );
            rejected += 1;
        }
        cursor.grow(index);
    }

    let border_color = palette::pick(&BORDER_PALETTE, rng).unwrap_or(BORDER_PALETTE[0]);

    Plan {
        width: config.width,
        height: config.height,
        border,
        sun,
        planets,
        border_color,
        rejected,
    }
}

/// The sun followed by every accepted planet, in chain order.
pub fn plan_bodies<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Vec<Body> {
    let plan = plan(config, rng);
    std::iter::once(plan.sun)
        .chain(plan.planets.iter().map(|p| p.body))
        .collect()
}

// ============================================================================
// Drawing
// ============================================================================

/// Render a plan onto a fresh canvas.
pub fn draw(plan: &Plan) -> Canvas {
    let mut canvas = Canvas::new(plan.width, plan.height);
    let cx = plan.width as f64 / 2.0;

    canvas.set_source(Rgba8::BLACK);
    canvas.paint();

    canvas.set_source(plan.sun.color);
    canvas.fill_circle(cx, plan.sun.center_y as f64, plan.sun.radius as f64);

    for placement in &plan.planets {
        match placement.guide {
            Some(Guide::Orbit { cx, cy, radius }) => {
                canvas.set_line_width(ORBIT_LINE_WIDTH);
                canvas.set_source(Rgba8::from_normalized(ORBIT_GRAY, ORBIT_GRAY, ORBIT_GRAY));
                canvas.stroke_circle(cx, cy, radius);
            }
            // Ruled lines keep whatever source and width are current: the
            // previous body's color at the default width.
            Some(Guide::Line { x1, x2, y }) => canvas.stroke_line(x1, y, x2, y),
            None => {}
        }
        let body = &placement.body;
        canvas.set_source(body.color);
        canvas.fill_circle(cx, body.center_y as f64, body.radius as f64);
    }

    let (w, h, b) = (plan.width as f64, plan.height as f64, plan.border as f64);
    canvas.set_source(plan.border_color);
    canvas.fill_rects(&[
        (0.0, 0.0, b, h),
        (0.0, 0.0, w, b),
        (0.0, h - b, w, b),
        (w - b, 0.0, b, h),
    ]);

    canvas
}

/// Plan and draw a scene.
pub fn compose<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Canvas {
    draw(&plan(config, rng))
}

/// Produce the final image: compose, write the PNG, then grain it in place.
pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<()> {
    info!(
        "composing {}x{} canvas (border {}, sun radius {}, guide {:?})",
        config.width, config.height, config.border, config.sun_radius, config.guide
    );
    let plan = plan(config, rng);
    info!(
        "placed {} planets, {} rejected at the border",
        plan.planets.len(),
        plan.rejected
    );
    let canvas = draw(&plan);

    canvas.write_png(&config.output)?;
    info!("wrote {}", config.output.display());

    noise::grain_file(&config.output, config.noise, rng)?;
    info!(
        "applied grain {} and rewrote {}",
        config.noise,
        config.output.display()
    );
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
