use crate::translate::{
    ColumbusTranslator, ModeTranslator, Scene2DTranslator, Scene3DTranslator,
};

/// Rendering mode the camera motion is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneMode {
    /// Flat map under an orthographic camera.
    Scene2D,
    /// Oblique perspective view over the flat map.
    ColumbusView,
    /// Perspective view of the full ellipsoid.
    #[default]
    Scene3D,
}

impl SceneMode {
    /// Every mode.
    pub const ALL: [Self; 3] = [Self::Scene2D, Self::ColumbusView, Self::Scene3D];

    /// The translator that drives the camera in this mode.
    #[must_use]
    pub fn translator(self) -> &'static dyn ModeTranslator {
        match self {
            Self::Scene2D => &Scene2DTranslator,
            Self::ColumbusView => &ColumbusTranslator,
            Self::Scene3D => &Scene3DTranslator,
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scene2D => "2D",
            Self::ColumbusView => "Columbus view",
            Self::Scene3D => "3D",
        }
    }
}
