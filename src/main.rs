//! Scripted navigation demo.
//!
//! Runs a short gesture sequence against a [`GlobeCamera`] in every scene
//! mode and logs the camera trajectory. Pass a TOML options file as the
//! first argument to try a preset; set `RUST_LOG=debug` (or `trace`) for
//! per-frame detail.

use std::path::Path;

use glam::DVec2;
use globe_nav::camera::{CameraControl, GlobeCamera};
use globe_nav::control::Knob;
use globe_nav::error::NavError;
use globe_nav::geometry::Ellipsoid;
use globe_nav::input::{PointerEvent, PointerKind, Rect, SurfaceRects};
use globe_nav::navigation::{NavCommand, Navigation, SceneMode};
use globe_nav::options::NavigationOptions;

const CANVAS: DVec2 = DVec2::new(1280.0, 720.0);
const FRAMES_PER_GESTURE: usize = 30;

/// Widget placed in the top-right corner of the canvas.
fn widget_surface() -> SurfaceRects {
    SurfaceRects {
        bounds: Rect::new(1060.0, 20.0, 200.0, 200.0),
        north_indicator: Rect::new(1150.0, 30.0, 20.0, 20.0),
    }
}

/// Client position `radius` pixels from the widget center at a screen
/// angle in degrees.
fn around_center(angle: f64, radius: f64) -> (f64, f64) {
    let (sin, cos) = angle.to_radians().sin_cos();
    (1160.0 + radius * cos, 120.0 + radius * sin)
}

fn drag<C: CameraControl>(
    nav: &mut Navigation<C>,
    mode: SceneMode,
    knob: Knob,
    path: &[(f64, f64)],
) {
    let surface = widget_surface();
    let Some((&first, rest)) = path.split_first() else {
        return;
    };
    let _ = nav.handle_pointer(
        &surface,
        Some(knob),
        &PointerEvent::mouse(PointerKind::Press, first.0, first.1),
    );
    for &(x, y) in rest {
        let _ = nav.handle_pointer(
            &surface,
            None,
            &PointerEvent::mouse(PointerKind::Move, x, y),
        );
        nav.update(mode);
    }
    let (x, y) = rest.last().copied().unwrap_or(first);
    let _ = nav.handle_pointer(
        &surface,
        None,
        &PointerEvent::mouse(PointerKind::Release, x, y),
    );
    for _ in 0..FRAMES_PER_GESTURE {
        nav.update(mode);
    }
}

fn report(nav: &Navigation<GlobeCamera>, label: &str) {
    let camera = nav.camera();
    log::info!(
        "{label:<14} position {:.1} heading {:.1}° magnitude {:.1}",
        camera.position(),
        camera.heading().to_degrees(),
        camera.magnitude()
    );
}

fn run_mode(options: &NavigationOptions, mode: SceneMode) -> Result<(), NavError> {
    let ellipsoid = options.reference_body.ellipsoid();
    let camera = GlobeCamera::new(mode, CANVAS, ellipsoid);
    let mut nav = Navigation::new(CANVAS, camera, options.clone())?;

    log::info!("--- {} ---", mode.name());
    report(&nav, "start");

    // Zoom ring: pull from the left side upward.
    let zoom: Vec<_> = (0..FRAMES_PER_GESTURE)
        .map(|i| around_center(180.0 + i as f64, 80.0))
        .collect();
    drag(&mut nav, mode, Knob::ZoomRing, &zoom);
    report(&nav, "after zoom");

    // Tilt ring: push the right side down.
    let tilt: Vec<_> = (0..FRAMES_PER_GESTURE)
        .map(|i| around_center(i as f64, 80.0))
        .collect();
    drag(&mut nav, mode, Knob::TiltRing, &tilt);
    report(&nav, "after tilt");

    // Joystick: hold toward the upper right.
    let pan = vec![around_center(-45.0, 30.0); FRAMES_PER_GESTURE];
    drag(&mut nav, mode, Knob::PanJoystick, &pan);
    report(&nav, "after pan");

    // Compass: grab the ring and turn it a quarter clockwise.
    let compass: Vec<_> = (0..=90)
        .step_by(3)
        .map(|i| around_center(f64::from(i), 90.0))
        .collect();
    drag(&mut nav, mode, Knob::NorthRing, &compass);
    report(&nav, "after compass");

    for _ in 0..4 {
        nav.execute(NavCommand::ZoomIn);
    }
    for _ in 0..FRAMES_PER_GESTURE {
        nav.update(mode);
    }
    report(&nav, "after zoom in");
    Ok(())
}

fn main() -> Result<(), NavError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let options = match std::env::args().nth(1) {
        Some(path) => NavigationOptions::load(Path::new(&path))?,
        None => NavigationOptions::default(),
    };
    if options.reference_body.ellipsoid() != Ellipsoid::WGS84 {
        log::info!("Using custom reference body {:?}", options.reference_body);
    }

    for mode in SceneMode::ALL {
        run_mode(&options, mode)?;
    }
    Ok(())
}
