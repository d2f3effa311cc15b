//! Fixed color palettes and random selection from them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::Rgba8;

/// Colors for the sun and the planets.
pub const BODY_PALETTE: [Rgba8; 14] = [
    Rgba8::rgb(217, 48, 48),
    Rgba8::rgb(255, 110, 25),
    Rgba8::rgb(255, 185, 71),
    Rgba8::rgb(255, 201, 25),
    Rgba8::rgb(113, 156, 6),
    Rgba8::rgb(67, 171, 2),
    Rgba8::rgb(69, 196, 120),
    Rgba8::rgb(45, 173, 131),
    Rgba8::rgb(33, 191, 189),
    Rgba8::rgb(34, 148, 214),
    Rgba8::rgb(31, 79, 209),
    Rgba8::rgb(108, 31, 209),
    Rgba8::rgb(191, 34, 212),
    Rgba8::rgb(212, 34, 141),
];

/// Pastel colors for the border frame.
pub const BORDER_PALETTE: [Rgba8; 5] = [
    Rgba8::rgb(234, 204, 255),
    Rgba8::rgb(255, 255, 255),
    Rgba8::rgb(255, 251, 171),
    Rgba8::rgb(207, 207, 207),
    Rgba8::rgb(173, 203, 255),
];

/// Uniformly choose a color. Returns `None` only for an empty palette.
pub fn pick<R: Rng + ?Sized>(palette: &[Rgba8], rng: &mut R) -> Option<Rgba8> {
    palette.choose(rng).copied()
}

/// Uniformly choose a color that differs from `previous`.
///
/// Draws are repeated until a different value comes up, so the result is
/// uniform over the remaining entries. Returns `None` when no entry differs.
pub fn pick_distinct<R: Rng + ?Sized>(
    palette: &[Rgba8],
    previous: Rgba8,
    rng: &mut R,
) -> Option<Rgba8> {
    if palette.iter().all(|&c| c == previous) {
        return None;
    }
    loop {
        let c = pick(palette, rng)?;
        if c != previous {
            return Some(c);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
