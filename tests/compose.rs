//! End-to-end generation through the PNG file.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use solar_canvas::composer::{self, PLANET_ATTEMPTS};
use solar_canvas::palette::{BODY_PALETTE, BORDER_PALETTE};
use solar_canvas::{Config, GuideMode};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("solar-canvas-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn config(output: PathBuf, guide: GuideMode, noise: f64) -> Config {
    Config {
        width: 400,
        height: 300,
        border: 10,
        sun_radius: 60,
        noise,
        guide,
        output,
    }
}

#[test]
fn writes_png_with_frame_and_sun() {
    let out = scratch("plain.png");
    let cfg = config(out.clone(), GuideMode::None, 0.0);

    // Same seed, same draws: the plan tells us what the file must contain.
    let plan = composer::plan(&cfg, &mut StdRng::seed_from_u64(42));
    composer::run(&cfg, &mut StdRng::seed_from_u64(42)).unwrap();

    let img = image::open(&out).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (400, 300));

    let frame = plan.border_color.to_rgb();
    assert!(BORDER_PALETTE.contains(&plan.border_color));
    for (x, y) in [(0, 0), (399, 0), (0, 299), (399, 299), (5, 150), (200, 295)] {
        assert_eq!(img.get_pixel(x, y).0, frame, "({x},{y})");
    }

    assert!(BODY_PALETTE.contains(&plan.sun.color));
    assert_eq!(img.get_pixel(200, 285).0, plan.sun.color.to_rgb());
    assert_eq!(img.get_pixel(20, 20).0, [0, 0, 0]);
    assert!(plan.planets.len() <= PLANET_ATTEMPTS as usize);

    std::fs::remove_file(&out).ok();
}

#[test]
fn orbit_guides_are_gray() {
    let out = scratch("orbit.png");
    let cfg = config(out.clone(), GuideMode::Orbit, 0.0);

    let plan = composer::plan(&cfg, &mut StdRng::seed_from_u64(7));
    composer::run(&cfg, &mut StdRng::seed_from_u64(7)).unwrap();
    let img = image::open(&out).unwrap().to_rgb8();

    // Leftmost point of the first orbit, well inside the 4px ring.
    let first = plan
        .planets
        .first()
        .expect("seed 7 places at least one planet");
    let r = (300 - first.body.center_y - 10) as u32;
    let sun_y = plan.sun.center_y as u32;
    assert!(r + 10 < 200, "orbit radius {r} reaches the left border");
    assert_eq!(img.get_pixel(200 - r, sun_y - 1).0, [153, 153, 153]);

    std::fs::remove_file(&out).ok();
}

#[test]
fn grain_changes_pixels_but_not_size() {
    let plain = scratch("grain-off.png");
    let grainy = scratch("grain-on.png");
    composer::run(
        &config(plain.clone(), GuideMode::Line, 0.0),
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();
    composer::run(
        &config(grainy.clone(), GuideMode::Line, 0.4),
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap();

    let a = image::open(&plain).unwrap().to_rgb8();
    let b = image::open(&grainy).unwrap().to_rgb8();
    assert_eq!(a.dimensions(), b.dimensions());
    assert_ne!(a, b);
    // Black stays black under any factor.
    assert_eq!(b.get_pixel(15, 150).0, [0, 0, 0]);

    std::fs::remove_file(&plain).ok();
    std::fs::remove_file(&grainy).ok();
}

#[test]
fn unwritable_output_is_reported() {
    let out = std::env::temp_dir()
        .join("solar-canvas-missing-dir")
        .join("nested")
        .join("out.png");
    let cfg = config(out, GuideMode::None, 0.0);
    let err = composer::run(&cfg, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, solar_canvas::Error::Write { .. }));
}
