//! Reference-body geometry: ellipsoid conversions, ray intersection tests
//! and local frames.
//!
//! All math is `f64`; globe-scale coordinates (millions of meters) lose too
//! much precision in `f32`.

mod ellipsoid;
mod ray;
mod transforms;

pub use ellipsoid::{Cartographic, Ellipsoid};
pub use ray::{grazing_altitude_location, ray_ellipsoid, Interval, Ray};
pub use transforms::east_north_up_to_fixed_frame;

/// Tolerance for "approximately equal" control and camera values.
pub const EPSILON3: f64 = 1e-3;
/// Tolerance below which a movement is considered zero.
pub const EPSILON6: f64 = 1e-6;
