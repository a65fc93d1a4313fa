//! Per-widget navigation controller: owns the control state, maps pointer
//! input onto it and drives a camera once per frame.
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use globe_nav::camera::GlobeCamera;
//! use globe_nav::geometry::Ellipsoid;
//! use globe_nav::navigation::{Navigation, SceneMode};
//! use globe_nav::options::NavigationOptions;
//!
//! let canvas = DVec2::new(1280.0, 720.0);
//! let camera = GlobeCamera::new(SceneMode::Scene3D, canvas, Ellipsoid::WGS84);
//! let mut nav = Navigation::new(canvas, camera, NavigationOptions::default())?;
//!
//! nav.state_mut().set_tilt_ring_angle(20.0);
//! nav.update(SceneMode::Scene3D);
//! assert!(nav.state().tilt_ring_angle() < 20.0);
//! # Ok::<(), globe_nav::error::NavError>(())
//! ```

mod command;
mod mode;

use glam::DVec2;

pub use command::{NavCommand, ZOOM_STEP};
pub use mode::SceneMode;

use crate::camera::CameraControl;
use crate::control::{decay, ControlListener, ControlState, Knob, SubscriptionId};
use crate::error::NavError;
use crate::geometry::Ellipsoid;
use crate::input::{
    DragArbiter, DragSession, PointerEvent, PointerGestureMapper,
    PresentationSurface, WidgetLayout,
};
use crate::options::NavigationOptions;
use crate::translate::{BodyScale, TranslateContext};

/// Navigation widget controller driving a camera `C`.
#[derive(Debug)]
pub struct Navigation<C> {
    state: ControlState,
    options: NavigationOptions,
    body: BodyScale,
    canvas: DVec2,
    layout: WidgetLayout,
    session: Option<DragSession>,
    mapper: PointerGestureMapper,
    camera: C,
}

fn check_canvas(canvas: DVec2) -> Result<(), NavError> {
    if canvas.is_finite() && canvas.x > 0.0 && canvas.y > 0.0 {
        Ok(())
    } else {
        Err(NavError::InvalidSurface(format!(
            "canvas must have a positive finite size, got {}x{}",
            canvas.x, canvas.y
        )))
    }
}

impl<C: CameraControl> Navigation<C> {
    /// Create a controller for a host canvas of `canvas` pixels.
    ///
    /// Fails before any state is created when the canvas size is unusable
    /// or the options are outside their documented domain.
    pub fn new(
        canvas: DVec2,
        camera: C,
        options: NavigationOptions,
    ) -> Result<Self, NavError> {
        check_canvas(canvas)?;
        options.validate()?;

        let body = BodyScale::new(options.reference_body.ellipsoid());
        log::info!(
            "Navigation ready: canvas {}x{}, body radius {}",
            canvas.x,
            canvas.y,
            body.ellipsoid().maximum_radius()
        );

        Ok(Self {
            state: ControlState::new(),
            options,
            body,
            canvas,
            layout: WidgetLayout::new(),
            session: None,
            mapper: PointerGestureMapper::new(),
            camera,
        })
    }

    /// Share "one drag at a time" with every other widget on `arbiter`.
    /// Dropping the controller mid-drag frees the arbiter.
    #[must_use]
    pub fn with_arbiter(mut self, arbiter: DragArbiter) -> Self {
        self.mapper = PointerGestureMapper::with_arbiter(arbiter);
        self
    }

    /// Run one frame: relax released knobs, then move the camera for
    /// `mode`.
    pub fn update(&mut self, mode: SceneMode) {
        decay::relax(&mut self.state, self.camera.heading());

        let ctx = TranslateContext {
            state: &self.state,
            options: &self.options,
            body: self.body,
            canvas: self.canvas,
        };
        mode.translator().update(&ctx, &mut self.camera);
    }

    /// Apply a pointer event. `knob` is the knob the presentation layer
    /// found under the pointer, if any.
    ///
    /// Returns `true` when the host should suppress the event's default
    /// action.
    pub fn handle_pointer(
        &mut self,
        surface: &dyn PresentationSurface,
        knob: Option<Knob>,
        event: &PointerEvent,
    ) -> bool {
        let north = self.state.north_ring_angle();
        let handled = self.mapper.handle(
            &mut self.session,
            &mut self.state,
            surface,
            &self.layout,
            knob,
            event,
        );

        let new_north = self.state.north_ring_angle();
        if new_north != north && self.options.motion.enable_rotate {
            self.camera.set_heading(new_north.to_radians());
        }
        handled
    }

    /// Execute a discrete command.
    pub fn execute(&mut self, command: NavCommand) {
        log::debug!("Executing {command:?}");
        command.apply(&mut self.state);
    }

    /// Execute the command bound to `key`. Returns `false` for unbound
    /// keys.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.options.keybindings.lookup(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Reference body used for heights, pivots and rotate rates.
    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        self.body.ellipsoid()
    }

    /// Replace the reference body; `None` restores WGS84.
    pub fn set_ellipsoid(&mut self, ellipsoid: Option<Ellipsoid>) {
        self.body = BodyScale::new(ellipsoid.unwrap_or(Ellipsoid::WGS84));
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    /// Replace the options after validating them. The reference body is
    /// reset to the one the options name.
    pub fn set_options(&mut self, options: NavigationOptions) -> Result<(), NavError> {
        options.validate()?;
        self.body = BodyScale::new(options.reference_body.ellipsoid());
        self.options = options;
        Ok(())
    }

    /// Host canvas size the translators cast center rays through.
    #[must_use]
    pub fn canvas(&self) -> DVec2 {
        self.canvas
    }

    /// Update the host canvas size.
    pub fn set_canvas(&mut self, canvas: DVec2) -> Result<(), NavError> {
        check_canvas(canvas)?;
        self.canvas = canvas;
        Ok(())
    }

    /// Fit the widget into a container of the given size. Returns `false`
    /// when nothing changed.
    pub fn resize(&mut self, parent_width: f64, parent_height: f64) -> bool {
        self.layout.resize(parent_width, parent_height)
    }

    /// Widget layout.
    #[must_use]
    pub fn layout(&self) -> &WidgetLayout {
        &self.layout
    }

    /// Control values and drag flags.
    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Mutable control values, for hosts driving knobs programmatically.
    pub fn state_mut(&mut self) -> &mut ControlState {
        &mut self.state
    }

    /// Register a change listener on the control state.
    pub fn subscribe(&mut self, listener: ControlListener) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The driven camera.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable access to the driven camera.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::camera::recording::{Command, RecordingCamera};
    use crate::camera::GlobeCamera;
    use crate::control::ControlChange;
    use crate::input::{PointerKind, Rect, SurfaceRects};

    const CANVAS: DVec2 = DVec2::new(800.0, 600.0);

    fn nav(options: NavigationOptions) -> Navigation<RecordingCamera> {
        let camera = RecordingCamera::above_plane(10_000.0);
        match Navigation::new(CANVAS, camera, options) {
            Ok(nav) => nav,
            Err(e) => unreachable!("construction failed: {e}"),
        }
    }

    fn surface() -> SurfaceRects {
        SurfaceRects {
            bounds: Rect::new(0.0, 0.0, 200.0, 200.0),
            north_indicator: Rect::new(90.0, 10.0, 20.0, 20.0),
        }
    }

    #[test]
    fn unusable_canvas_is_rejected() {
        for canvas in [DVec2::ZERO, DVec2::new(800.0, f64::NAN), DVec2::new(-1.0, 5.0)] {
            let result = Navigation::new(
                canvas,
                RecordingCamera::above_plane(1.0),
                NavigationOptions::default(),
            );
            assert!(matches!(result, Err(NavError::InvalidSurface(_))));
        }
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut options = NavigationOptions::default();
        options.limits.maximum_movement_ratio = 1.5;
        let result = Navigation::new(CANVAS, RecordingCamera::above_plane(1.0), options);
        assert!(matches!(result, Err(NavError::InvalidOptions(_))));

        let mut nav = nav(NavigationOptions::default());
        let mut options = NavigationOptions::default();
        options.rates.minimum_rotate_rate = -1.0;
        assert!(nav.set_options(options).is_err());
        assert!(nav.set_canvas(DVec2::new(0.0, 10.0)).is_err());
    }

    #[test]
    fn zoom_only_frame_in_2d_issues_one_zoom() {
        let mut options = NavigationOptions::default();
        options.motion.enable_translate = false;
        let mut nav = nav(options);
        nav.state_mut().set_zoom_ring_angle(10.0);

        nav.update(SceneMode::Scene2D);

        // Decay runs first, so the zoom is driven by the relaxed 9°.
        let zooms = nav.camera().zooms();
        assert_eq!(zooms.len(), 1);
        assert!((zooms[0] - 9_980.0 * 9.0 / 1440.0).abs() < 1e-9);
        assert_eq!(nav.camera().pans(), 0);
        assert!((nav.state().zoom_ring_angle() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn resting_knobs_issue_no_commands() {
        let mut nav = nav(NavigationOptions::default());
        for mode in SceneMode::ALL {
            nav.update(mode);
        }
        assert!(nav.camera().commands.is_empty());
    }

    #[test]
    fn disabled_motions_are_skipped() {
        let mut options = NavigationOptions::default();
        options.motion.enable_zoom = false;
        options.motion.enable_translate = false;
        options.motion.enable_tilt = false;
        let mut nav = nav(options);
        nav.state_mut().set_zoom_ring_angle(30.0);
        nav.state_mut().set_pointer_distance(30.0);
        nav.state_mut().set_tilt_ring_angle(30.0);

        nav.update(SceneMode::Scene3D);
        assert!(nav.camera().commands.is_empty());
    }

    #[test]
    fn compass_tracks_camera_heading_every_frame() {
        let mut nav = nav(NavigationOptions::default());
        nav.camera_mut().heading = FRAC_PI_2;
        nav.state_mut().set_north_ring_angle(10.0);
        nav.state_mut().set_dragging(Knob::NorthRing, true);
        nav.update(SceneMode::ColumbusView);
        assert!((nav.state().north_ring_angle() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn compass_drag_turns_the_camera() {
        let mut nav = nav(NavigationOptions::default());
        // Press on the north indicator straight above the center.
        let press = PointerEvent::mouse(PointerKind::Press, 100.0, 20.0);
        assert!(nav.handle_pointer(&surface(), Some(Knob::NorthRing), &press));
        // Pressing the indicator applies its angle, which is already zero.
        assert!(nav.camera().commands.is_empty());

        // Drag to the right of center: compass 90°.
        let drag = PointerEvent::mouse(PointerKind::Move, 180.0, 100.0);
        assert!(nav.handle_pointer(&surface(), None, &drag));
        let [Command::SetHeading(heading)] = nav.camera().commands[..] else {
            unreachable!("unexpected commands {:?}", nav.camera().commands);
        };
        assert!((heading - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn compass_drag_without_rotate_snaps_back() {
        let mut options = NavigationOptions::default();
        options.motion.enable_rotate = false;
        let mut nav = nav(options);

        let press = PointerEvent::mouse(PointerKind::Press, 100.0, 20.0);
        let drag = PointerEvent::mouse(PointerKind::Move, 180.0, 100.0);
        let _ = nav.handle_pointer(&surface(), Some(Knob::NorthRing), &press);
        let _ = nav.handle_pointer(&surface(), None, &drag);
        assert!((nav.state().north_ring_angle() - 90.0).abs() < 1e-9);
        assert!(nav.camera().commands.is_empty());

        nav.update(SceneMode::Scene3D);
        assert_eq!(nav.state().north_ring_angle(), 0.0);
    }

    #[test]
    fn drag_on_one_widget_does_not_leak_into_another() {
        let mut widget_a = nav(NavigationOptions::default());
        let mut widget_b = nav(NavigationOptions::default());
        let press = PointerEvent::mouse(PointerKind::Press, 20.0, 110.0);
        let drag = PointerEvent::mouse(PointerKind::Move, 30.0, 130.0);

        assert!(widget_a.handle_pointer(&surface(), Some(Knob::ZoomRing), &press));
        assert!(!widget_b.handle_pointer(&surface(), None, &drag));

        assert_eq!(widget_b.state().zoom_ring_angle(), 0.0);
        assert!(!widget_b.state().any_dragging());
        assert!(widget_a.drag_session().is_some());
        assert!(widget_b.drag_session().is_none());
    }

    #[test]
    fn shared_arbiter_allows_one_drag_across_widgets() {
        let arbiter = DragArbiter::new();
        let mut widget_a = nav(NavigationOptions::default()).with_arbiter(arbiter.clone());
        let mut widget_b = nav(NavigationOptions::default()).with_arbiter(arbiter);
        let press = PointerEvent::mouse(PointerKind::Press, 20.0, 110.0);

        assert!(widget_a.handle_pointer(&surface(), Some(Knob::ZoomRing), &press));
        assert!(!widget_b.handle_pointer(&surface(), Some(Knob::ZoomRing), &press));

        let release = PointerEvent::mouse(PointerKind::Release, 20.0, 110.0);
        let _ = widget_a.handle_pointer(&surface(), None, &release);
        assert!(widget_b.handle_pointer(&surface(), Some(Knob::ZoomRing), &press));
    }

    #[test]
    fn destroying_a_widget_mid_drag_frees_the_arbiter() {
        let arbiter = DragArbiter::new();
        let mut widget_a = nav(NavigationOptions::default()).with_arbiter(arbiter.clone());
        let mut widget_b = nav(NavigationOptions::default()).with_arbiter(arbiter.clone());
        let press = PointerEvent::mouse(PointerKind::Press, 20.0, 110.0);

        assert!(widget_a.handle_pointer(&surface(), Some(Knob::ZoomRing), &press));
        drop(widget_a);

        assert_eq!(arbiter.holder(), None);
        assert!(widget_b.handle_pointer(&surface(), Some(Knob::ZoomRing), &press));
    }

    #[test]
    fn key_bindings_execute_commands() {
        let mut nav = nav(NavigationOptions::default());
        assert!(nav.handle_key_press("Equal"));
        assert_eq!(nav.state().zoom_ring_angle(), ZOOM_STEP);
        assert!(nav.handle_key_press("Minus"));
        assert_eq!(nav.state().zoom_ring_angle(), 0.0);
        assert!(!nav.handle_key_press("KeyQ"));
    }

    #[test]
    fn zoom_in_command_moves_toward_the_surface() {
        let mut nav = nav(NavigationOptions::default());
        nav.execute(NavCommand::ZoomIn);
        nav.update(SceneMode::Scene2D);
        let zooms = nav.camera().zooms();
        assert_eq!(zooms.len(), 1);
        assert!(zooms[0] > 0.0);
    }

    #[test]
    fn ellipsoid_defaults_back_to_wgs84() {
        let mut nav = nav(NavigationOptions::default());
        nav.set_ellipsoid(Some(Ellipsoid::UNIT_SPHERE));
        assert_eq!(*nav.ellipsoid(), Ellipsoid::UNIT_SPHERE);
        nav.set_ellipsoid(None);
        assert_eq!(*nav.ellipsoid(), Ellipsoid::WGS84);
    }

    #[test]
    fn listeners_observe_decay() {
        let mut nav = nav(NavigationOptions::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _ = nav.subscribe(Box::new(move |change| {
            if let ControlChange::Value { new, .. } = change {
                sink.lock().unwrap().push(new);
            }
        }));

        nav.state_mut().set_zoom_ring_angle(40.0);
        nav.update(SceneMode::Scene2D);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!((seen[1] - 36.0).abs() < 1e-12);
    }

    #[test]
    fn globe_camera_tilts_in_3d() {
        let camera = GlobeCamera::new(SceneMode::Scene3D, CANVAS, Ellipsoid::WGS84);
        let mut nav = match Navigation::new(CANVAS, camera, NavigationOptions::default()) {
            Ok(nav) => nav,
            Err(e) => unreachable!("construction failed: {e}"),
        };
        let before = nav.camera().direction();
        nav.state_mut().set_tilt_ring_angle(30.0);
        nav.update(SceneMode::Scene3D);

        let after = nav.camera().direction();
        assert!(before.dot(after) < 1.0 - 1e-7);
        assert_eq!(nav.camera().constrained_axis(), None);
        assert!((after.length() - 1.0).abs() < 1e-12);
    }
}
