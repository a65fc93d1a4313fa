//! Camera-controller capability driven by the navigation translators.
//!
//! Translators only talk to a camera through [`CameraControl`]; hosts with
//! their own camera implement the trait, hosts without one use
//! [`GlobeCamera`].

/// Concrete f64 camera for 2D, Columbus view and 3D.
pub mod globe;
#[cfg(test)]
pub(crate) mod recording;

use glam::{DMat4, DVec2, DVec3};
pub use globe::GlobeCamera;

use crate::geometry::Ray;

/// Motion commands and queries a navigation translator issues per frame.
///
/// Distances are in world units, angles in radians. Screen points are
/// client pixels with the origin at the top-left.
pub trait CameraControl {
    /// Move toward the surface by `distance` (away when negative).
    fn zoom_in(&mut self, distance: f64);
    /// Translate along the camera's right vector.
    fn move_right(&mut self, distance: f64);
    /// Translate along the camera's up vector.
    fn move_up(&mut self, distance: f64);
    /// Translate along an arbitrary world direction.
    fn move_direction(&mut self, direction: DVec3, distance: f64);
    /// Orbit horizontally about the constrained axis, or the camera's up
    /// vector when none is set.
    fn rotate_right(&mut self, angle: f64);
    /// Orbit vertically. Positive angles move the camera toward the
    /// constrained axis. With `transform`, the orbit happens in that local
    /// frame (local to fixed), around its origin.
    fn rotate_up(&mut self, angle: f64, transform: Option<&DMat4>);

    /// Ray from the eye through a screen point.
    fn pick_ray(&self, screen: DVec2) -> Ray;
    /// Scalar distance measure used for zoom-rate shaping in 2D.
    fn magnitude(&self) -> f64;
    /// Heading in radians, clockwise from north.
    fn heading(&self) -> f64;
    /// Turn the camera in place to a new heading.
    fn set_heading(&mut self, heading: f64);
    /// Eye position in world space.
    fn position(&self) -> DVec3;
    /// Unit view direction in world space.
    fn direction(&self) -> DVec3;
    /// Axis vertical rotation is pinned around, if any.
    fn constrained_axis(&self) -> Option<DVec3>;
    /// Pin or release the vertical rotation axis.
    fn set_constrained_axis(&mut self, axis: Option<DVec3>);
}
