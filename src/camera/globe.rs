use std::f64::consts::{FRAC_PI_3, PI, TAU};

use glam::{DMat4, DQuat, DVec2, DVec3};

use super::CameraControl;
use crate::geometry::{east_north_up_to_fixed_frame, Ellipsoid, Ray, EPSILON3};
use crate::navigation::SceneMode;

/// Near plane distance used for pick rays and the projection matrix.
const ZNEAR: f64 = 1.0;
/// Far plane distance for the projection matrix.
const ZFAR: f64 = 1.0e10;
/// Tolerance for "the camera sits on the constrained axis".
const POLE_EPSILON: f64 = 1e-2;
/// Margin kept from the constrained poles after clamping a rotation.
const POLE_MARGIN: f64 = 1e-4;
/// Default eye distance, in body radii, for the initial views.
const DEFAULT_RADII_AWAY: f64 = 3.0;

/// Orthonormal camera frame in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    position: DVec3,
    direction: DVec3,
    up: DVec3,
    right: DVec3,
}

impl Frame {
    fn transformed(&self, matrix: &DMat4) -> Self {
        Self {
            position: matrix.transform_point3(self.position),
            direction: matrix.transform_vector3(self.direction),
            up: matrix.transform_vector3(self.up),
            right: matrix.transform_vector3(self.right),
        }
    }

    fn rotated(&self, rotation: DQuat) -> Self {
        let direction = (rotation * self.direction).normalize();
        let up = (rotation * self.up).normalize();
        Self {
            position: rotation * self.position,
            direction,
            up,
            right: direction.cross(up),
        }
    }
}

/// f64 camera over a reference body, usable in all three scene modes.
///
/// 3D and Columbus view use a perspective projection; 2D uses an
/// orthographic one whose half-width shrinks when zooming. In 2D and
/// Columbus view the map lies in the XY plane with +Y north and +Z up.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeCamera {
    mode: SceneMode,
    frame: Frame,
    fovy: f64,
    viewport: DVec2,
    half_width: f64,
    constrained_axis: Option<DVec3>,
    ellipsoid: Ellipsoid,
}

impl GlobeCamera {
    /// Camera with the default view for `mode`: looking straight down at
    /// the body from three radii away (3D), or at the whole map (2D and
    /// Columbus view).
    #[must_use]
    pub fn new(mode: SceneMode, viewport: DVec2, ellipsoid: Ellipsoid) -> Self {
        let radius = ellipsoid.maximum_radius();
        let distance = radius * DEFAULT_RADII_AWAY;
        let mut camera = Self {
            mode,
            frame: Frame {
                position: DVec3::Z * distance,
                direction: DVec3::NEG_Z,
                up: DVec3::Y,
                right: DVec3::X,
            },
            fovy: FRAC_PI_3,
            viewport,
            half_width: PI * radius,
            constrained_axis: None,
            ellipsoid,
        };
        if mode == SceneMode::Scene3D {
            camera.look_at(DVec3::X * distance, DVec3::ZERO, DVec3::Z);
        }
        camera
    }

    /// Place the eye at `position` looking at `target`. `up_hint` need not
    /// be orthogonal to the view direction; a hint parallel to it is
    /// replaced by a perpendicular axis.
    pub fn look_at(&mut self, position: DVec3, target: DVec3, up_hint: DVec3) {
        let Some(direction) = (target - position).try_normalize() else {
            return;
        };
        let right = direction
            .cross(up_hint)
            .try_normalize()
            .unwrap_or_else(|| direction.any_orthonormal_vector());
        self.frame = Frame {
            position,
            direction,
            up: right.cross(direction),
            right,
        };
    }

    /// Builder-style constrained axis.
    #[must_use]
    pub fn with_constrained_axis(mut self, axis: DVec3) -> Self {
        self.constrained_axis = Some(axis);
        self
    }

    /// Scene mode this camera projects for.
    #[must_use]
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.frame.up
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.frame.right
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    /// Update the viewport after the host canvas resized.
    pub fn set_viewport(&mut self, viewport: DVec2) {
        self.viewport = viewport;
    }

    /// Half-width of the 2D orthographic frustum in world units.
    #[must_use]
    pub fn ortho_half_width(&self) -> f64 {
        self.half_width
    }

    fn aspect(&self) -> f64 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    fn half_height(&self) -> f64 {
        self.half_width / self.aspect()
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_to_rh(self.frame.position, self.frame.direction, self.frame.up)
    }

    /// Combined view-projection matrix, `[0, 1]` depth range.
    #[must_use]
    pub fn view_projection(&self) -> DMat4 {
        let projection = match self.mode {
            SceneMode::Scene2D => {
                let half_height = self.half_height();
                DMat4::orthographic_rh(
                    -self.half_width,
                    self.half_width,
                    -half_height,
                    half_height,
                    ZNEAR,
                    ZFAR,
                )
            }
            SceneMode::ColumbusView | SceneMode::Scene3D => {
                DMat4::perspective_rh(self.fovy, self.aspect(), ZNEAR, ZFAR)
            }
        };
        projection * self.view_matrix()
    }

    /// Normalized device coordinates of a screen point, y up.
    fn ndc(&self, screen: DVec2) -> DVec2 {
        let size = self.viewport.max(DVec2::ONE);
        DVec2::new(
            2.0 / size.x * screen.x - 1.0,
            2.0 / size.y * (size.y - screen.y) - 1.0,
        )
    }

    /// East, north and up at the camera's ground point.
    fn local_axes(&self) -> (DVec3, DVec3, DVec3) {
        if self.mode != SceneMode::Scene3D
            || self.frame.position.length_squared() <= f64::EPSILON
        {
            return (DVec3::X, DVec3::Y, DVec3::Z);
        }
        let enu = east_north_up_to_fixed_frame(self.frame.position, &self.ellipsoid);
        (
            enu.x_axis.truncate(),
            enu.y_axis.truncate(),
            enu.z_axis.truncate(),
        )
    }

    fn local_frame(&self, transform: Option<&DMat4>) -> Frame {
        transform.map_or(self.frame, |t| self.frame.transformed(&t.inverse()))
    }

    /// Rotate `local` about `axis` (in the same frame) and store the result
    /// back in world space.
    fn rotate_frame(
        &mut self,
        local: Frame,
        axis: DVec3,
        angle: f64,
        transform: Option<&DMat4>,
    ) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        if !angle.is_finite() {
            return;
        }
        let rotated = local.rotated(DQuat::from_axis_angle(axis, -angle));
        self.frame = transform.map_or(rotated, |t| rotated.transformed(t));
    }
}

impl CameraControl for GlobeCamera {
    fn zoom_in(&mut self, distance: f64) {
        match self.mode {
            SceneMode::Scene2D => {
                // Shrink the larger frustum dimension, the one `magnitude`
                // measures, by exactly `distance`.
                let magnitude = self.magnitude() - distance;
                if magnitude > 0.0 {
                    self.half_width = 0.5 * magnitude * self.aspect().min(1.0);
                }
            }
            SceneMode::ColumbusView | SceneMode::Scene3D => {
                self.move_direction(self.frame.direction, distance);
            }
        }
    }

    fn move_right(&mut self, distance: f64) {
        self.move_direction(self.frame.right, distance);
    }

    fn move_up(&mut self, distance: f64) {
        self.move_direction(self.frame.up, distance);
    }

    fn move_direction(&mut self, direction: DVec3, distance: f64) {
        let step = direction * distance;
        if step.is_finite() {
            self.frame.position += step;
        }
    }

    fn rotate_right(&mut self, angle: f64) {
        let axis = self.constrained_axis.unwrap_or(self.frame.up);
        self.rotate_frame(self.frame, axis, angle, None);
    }

    fn rotate_up(&mut self, angle: f64, transform: Option<&DMat4>) {
        let local = self.local_frame(transform);
        let constrained = self.constrained_axis.and_then(DVec3::try_normalize);

        let (axis, angle) = match constrained {
            Some(pole) if local.position.length() > POLE_EPSILON => {
                let p = local.position.normalize();
                let at_north = p.abs_diff_eq(pole, POLE_EPSILON);
                let at_south = p.abs_diff_eq(-pole, POLE_EPSILON);
                if !at_north && !at_south {
                    let to_north = p.dot(pole).clamp(-1.0, 1.0).acos();
                    let to_south = p.dot(-pole).clamp(-1.0, 1.0).acos();
                    let angle = if angle > to_north {
                        to_north - POLE_MARGIN
                    } else if -angle > to_south {
                        POLE_MARGIN - to_south
                    } else {
                        angle
                    };
                    (pole.cross(p), angle)
                } else if (at_north && angle < 0.0) || (at_south && angle > 0.0) {
                    (local.right, angle)
                } else {
                    return;
                }
            }
            _ => (local.right, angle),
        };

        self.rotate_frame(local, axis, angle, transform);
    }

    fn pick_ray(&self, screen: DVec2) -> Ray {
        let ndc = self.ndc(screen);
        let frame = &self.frame;
        match self.mode {
            SceneMode::Scene2D => {
                let x = ndc.x * self.half_width;
                let y = ndc.y * self.half_height();
                Ray::new(
                    frame.position + frame.right * x + frame.up * y,
                    frame.direction,
                )
            }
            SceneMode::ColumbusView | SceneMode::Scene3D => {
                let tan_phi = (self.fovy * 0.5).tan();
                let tan_theta = self.aspect() * tan_phi;
                let offset = frame.direction * ZNEAR
                    + frame.right * (ndc.x * ZNEAR * tan_theta)
                    + frame.up * (ndc.y * ZNEAR * tan_phi);
                Ray::new(frame.position, offset.normalize())
            }
        }
    }

    fn magnitude(&self) -> f64 {
        match self.mode {
            SceneMode::Scene2D => 2.0 * self.half_width.max(self.half_height()),
            SceneMode::ColumbusView => self.frame.position.z.abs(),
            SceneMode::Scene3D => self.frame.position.length(),
        }
    }

    fn heading(&self) -> f64 {
        let (east, north, up) = self.local_axes();
        let frame = &self.frame;
        // Straight down (or up) the direction has no horizontal part.
        let reference = if (frame.direction.dot(up).abs() - 1.0).abs() < EPSILON3 {
            frame.up
        } else {
            frame.direction
        };
        reference.dot(east).atan2(reference.dot(north)).rem_euclid(TAU)
    }

    fn set_heading(&mut self, heading: f64) {
        if !heading.is_finite() {
            return;
        }
        let (_, _, up) = self.local_axes();
        let rotation = DQuat::from_axis_angle(up, self.heading() - heading);
        let turned = Frame {
            position: DVec3::ZERO,
            ..self.frame
        }
        .rotated(rotation);
        self.frame = Frame {
            position: self.frame.position,
            ..turned
        };
    }

    fn position(&self) -> DVec3 {
        self.frame.position
    }

    fn direction(&self) -> DVec3 {
        self.frame.direction
    }

    fn constrained_axis(&self) -> Option<DVec3> {
        self.constrained_axis
    }

    fn set_constrained_axis(&mut self, axis: Option<DVec3>) {
        self.constrained_axis = axis;
    }
}
