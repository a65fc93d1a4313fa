use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::Ellipsoid;

/// Which reference body the camera navigates around.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceBody {
    /// The WGS84 Earth ellipsoid.
    #[default]
    Wgs84,
    /// A sphere of radius one.
    UnitSphere,
    /// An arbitrary triaxial ellipsoid.
    Custom {
        /// Semi-axis lengths along x, y and z.
        radii: [f64; 3],
    },
}

impl ReferenceBody {
    /// The ellipsoid this selection describes.
    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        match self {
            Self::Wgs84 => Ellipsoid::WGS84,
            Self::UnitSphere => Ellipsoid::UNIT_SPHERE,
            Self::Custom { radii } => Ellipsoid::new(DVec3::from_array(*radii)),
        }
    }
}
