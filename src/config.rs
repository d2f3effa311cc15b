//! Command-line options and the resolved generation parameters.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

/// File written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "Generative-Output.png";

/// Range the sun radius is drawn from when `--sunsize` is absent.
pub const SUN_RADIUS_RANGE: RangeInclusive<i32> = 200..=400;

#[derive(Parser, Debug, Clone)]
#[command(name = "solar-canvas")]
#[command(about = "Generative solar-system art: a sun, a chain of planets, a border and grain")]
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short = 'w', long, visible_alias = "wi", default_value_t = 3000)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, visible_alias = "he", default_value_t = 2000)]
    pub height: u32,

    /// Draw a circular orbit guide for every planet (wins over --line)
    #[arg(short = 'o', long, default_value_t = false)]
    pub orbit: bool,

    /// Draw a straight ruled line through every planet
    #[arg(short = 'l', long, visible_alias = "sl", default_value_t = false)]
    pub line: bool,

    /// Sun radius in pixels [default: random in 200..=400]
    #[arg(short = 's', long, visible_alias = "sun", allow_negative_numbers = true)]
    pub sunsize: Option<i32>,

    /// Border frame thickness in pixels
    #[arg(
        short = 'b',
        long,
        visible_alias = "bs",
        default_value_t = 50,
        allow_negative_numbers = true
    )]
    pub bordersize: i32,

    /// Grain intensity; each pixel is scaled by a factor in [1-n, 1+n]. 0 disables grain
    #[arg(short = 'n', long, default_value_t = 0.4, allow_negative_numbers = true)]
    pub noise: f64,

    /// Seed for the random generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Which guide, if any, accompanies each planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuideMode {
    #[default]
    None,
    /// Full circle around the sun center through the planet.
    Orbit,
    /// Horizontal line through the planet center.
    Line,
}

impl GuideMode {
    /// Orbit takes precedence when both flags are set.
    pub fn from_flags(orbit: bool, line: bool) -> Self {
        if orbit {
            GuideMode::Orbit
        } else if line {
            GuideMode::Line
        } else {
            GuideMode::None
        }
    }
}

/// Immutable generation parameters, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub border: i32,
    pub sun_radius: i32,
    pub noise: f64,
    pub guide: GuideMode,
    pub output: PathBuf,
}

impl Config {
    /// Resolve the command line, drawing the sun radius if none was given.
    pub fn resolve<R: Rng + ?Sized>(cli: &Cli, rng: &mut R) -> Self {
        let sun_radius = cli
            .sunsize
            .unwrap_or_else(|| rng.gen_range(SUN_RADIUS_RANGE));
        Self {
            width: cli.width,
            height: cli.height,
            border: cli.bordersize,
            sun_radius,
            noise: cli.noise,
            guide: GuideMode::from_flags(cli.orbit, cli.line),
            output: cli.output.clone(),
        }
    }
}

impl Default for Config {
    /// The command-line defaults with a mid-range sun.
    fn default() -> Self {
        Self {
            width: 3000,
            height: 2000,
            border: 50,
            sun_radius: 300,
            noise: 0.4,
            guide: GuideMode::None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
