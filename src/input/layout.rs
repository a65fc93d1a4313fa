use glam::DVec2;

/// Unscaled widget size; knob geometry is authored at this size.
const BASE_WIDTH: f64 = 200.0;
const BASE_HEIGHT: f64 = 200.0;

/// Axis-aligned rectangle in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Whether `(x, y)` lies inside or on the edge.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Whether `(x, y)` lies strictly inside.
    #[must_use]
    pub fn contains_strict(&self, x: f64, y: f64) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }
}

/// Geometry queries the gesture mapper needs from the presentation layer.
pub trait PresentationSurface {
    /// Widget bounds in client coordinates.
    fn bounding_rect(&self) -> Rect;
    /// Bounds of the compass's north indicator in client coordinates.
    fn north_indicator_rect(&self) -> Rect;
}

/// Fixed rectangles, for hosts that track widget geometry themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRects {
    /// Widget bounds.
    pub bounds: Rect,
    /// North indicator bounds.
    pub north_indicator: Rect,
}

impl PresentationSurface for SurfaceRects {
    fn bounding_rect(&self) -> Rect {
        self.bounds
    }

    fn north_indicator_rect(&self) -> Rect {
        self.north_indicator
    }
}

/// Widget size and the center knob angles are measured from.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetLayout {
    size: DVec2,
    center: DVec2,
    last_parent: Option<(f64, f64)>,
}

impl WidgetLayout {
    /// Layout at the base 200×200 size.
    #[must_use]
    pub fn new() -> Self {
        let mut layout = Self {
            size: DVec2::new(BASE_WIDTH, BASE_HEIGHT),
            center: DVec2::new(BASE_WIDTH * 0.5, BASE_HEIGHT * 0.5),
            last_parent: None,
        };
        let _ = layout.resize(0.0, 0.0);
        layout
    }

    /// Fit the widget to its container. Returns `false` when the container
    /// size is unchanged.
    ///
    /// A zero dimension is derived from the other by the base aspect ratio;
    /// both zero falls back to the base size.
    pub fn resize(&mut self, parent_width: f64, parent_height: f64) -> bool {
        if self.last_parent == Some((parent_width, parent_height)) {
            return false;
        }

        let (width, height) = match (parent_width == 0.0, parent_height == 0.0) {
            (true, true) => (BASE_WIDTH, BASE_HEIGHT),
            (true, false) => {
                (BASE_WIDTH * (parent_height / BASE_HEIGHT), parent_height)
            }
            (false, true) => {
                (parent_width, BASE_HEIGHT * (parent_width / BASE_WIDTH))
            }
            (false, false) => (parent_width, parent_height),
        };

        let scale = DVec2::new(width / BASE_WIDTH, height / BASE_HEIGHT);
        self.size = DVec2::new(width, height);
        self.center = (scale * 100.0).max(DVec2::ONE);
        self.last_parent = Some((parent_width, parent_height));
        true
    }

    /// Widget size in pixels.
    #[must_use]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Knob center relative to the widget's top-left corner.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.center
    }
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self::new()
    }
}
