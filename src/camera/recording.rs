//! Camera double that records every motion command.

use glam::{DMat4, DVec2, DVec3};

use super::CameraControl;
use crate::geometry::Ray;

/// One recorded motion command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Command {
    ZoomIn(f64),
    MoveRight(f64),
    MoveUp(f64),
    Move(DVec3, f64),
    RotateRight(f64),
    RotateUp(f64, bool),
    SetHeading(f64),
}

/// Fixed-pose camera whose pick rays are parallel (one world unit per
/// pixel) and whose commands are only recorded, never applied.
#[derive(Debug, Clone)]
pub(crate) struct RecordingCamera {
    pub(crate) position: DVec3,
    pub(crate) direction: DVec3,
    pub(crate) magnitude: f64,
    pub(crate) heading: f64,
    pub(crate) constrained_axis: Option<DVec3>,
    pub(crate) commands: Vec<Command>,
}

impl RecordingCamera {
    /// Camera `height` above the XY plane, looking straight down.
    pub(crate) fn above_plane(height: f64) -> Self {
        Self {
            position: DVec3::Z * height,
            direction: DVec3::NEG_Z,
            magnitude: height,
            heading: 0.0,
            constrained_axis: None,
            commands: Vec::new(),
        }
    }

    pub(crate) fn zooms(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::ZoomIn(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn pans(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    Command::MoveRight(_)
                        | Command::MoveUp(_)
                        | Command::Move(..)
                        | Command::RotateRight(_)
                )
            })
            .count()
    }
}

impl CameraControl for RecordingCamera {
    fn zoom_in(&mut self, distance: f64) {
        self.commands.push(Command::ZoomIn(distance));
    }

    fn move_right(&mut self, distance: f64) {
        self.commands.push(Command::MoveRight(distance));
    }

    fn move_up(&mut self, distance: f64) {
        self.commands.push(Command::MoveUp(distance));
    }

    fn move_direction(&mut self, direction: DVec3, distance: f64) {
        self.commands.push(Command::Move(direction, distance));
    }

    fn rotate_right(&mut self, angle: f64) {
        self.commands.push(Command::RotateRight(angle));
    }

    fn rotate_up(&mut self, angle: f64, transform: Option<&DMat4>) {
        self.commands.push(Command::RotateUp(angle, transform.is_some()));
    }

    fn pick_ray(&self, screen: DVec2) -> Ray {
        Ray::new(
            self.position + DVec3::new(screen.x, -screen.y, 0.0),
            self.direction,
        )
    }

    fn magnitude(&self) -> f64 {
        self.magnitude
    }

    fn heading(&self) -> f64 {
        self.heading
    }

    fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
        self.commands.push(Command::SetHeading(heading));
    }

    fn position(&self) -> DVec3 {
        self.position
    }

    fn direction(&self) -> DVec3 {
        self.direction
    }

    fn constrained_axis(&self) -> Option<DVec3> {
        self.constrained_axis
    }

    fn set_constrained_axis(&mut self, axis: Option<DVec3>) {
        self.constrained_axis = axis;
    }
}
