//! # solar-canvas
//!
//! Generative solar-system art. A sun rises from the bottom edge of a black
//! canvas, a chain of randomly sized planets stacks above it, an optional
//! orbit or ruled-line guide accompanies each planet, a pastel frame closes
//! the picture and a film-grain pass finishes it.
//!
//! ## Architecture
//!
//! Shapes go through a small anti-aliasing pipeline:
//!
//! 1. **Vertex Source**: ellipses, rectangles and stroke outlines emit path vertices
//! 2. **Scanline Rasterizer**: accumulates exact area coverage per cell
//! 3. **Scanline Container**: carries coverage spans for one row
//! 4. **Renderer**: clips spans and blends them into an RGBA buffer
//!
//! [`canvas::Canvas`] wraps that pipeline; [`composer`] decides what to draw
//! and [`noise`] grains the written PNG.

// Foundation types
pub mod basics;
pub mod color;
pub mod error;

// Geometry
pub mod ellipse;
pub mod path_storage;
pub mod stroke;

// Scanline rasterizer
pub mod rasterizer_cells_aa;
pub mod rasterizer_scanline_aa;
pub mod rasterizer_sl_clip;
pub mod scanline_u;

// Pixel format and renderers
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod renderer_scanline;
pub mod rendering_buffer;

// Drawing surface
pub mod canvas;

// Scene generation
pub mod composer;
pub mod config;
pub mod noise;
pub mod palette;

pub use canvas::Canvas;
pub use config::{Cli, Config, GuideMode};
pub use error::{Error, Result};
