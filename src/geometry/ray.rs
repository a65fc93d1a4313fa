use glam::DVec3;

use super::Ellipsoid;

/// A half-line from `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: DVec3,
    /// Direction of travel; not required to be unit length.
    pub direction: DVec3,
}

impl Ray {
    /// Create a ray.
    #[must_use]
    pub const fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Parameter where the ray crosses the plane through the origin with
    /// the given normal. Infinite or NaN when the ray is parallel to it.
    #[must_use]
    pub fn plane_parameter(&self, normal: DVec3) -> f64 {
        -normal.dot(self.origin) / normal.dot(self.direction)
    }
}

/// Parametric interval `[start, stop]` along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Entry parameter.
    pub start: f64,
    /// Exit parameter.
    pub stop: f64,
}

/// Intersect a ray with an ellipsoid.
///
/// Returns the parametric interval the ray spends inside the body, or `None`
/// when it misses or only points away from it. Rays starting inside the
/// body report `start = 0`.
#[must_use]
pub fn ray_ellipsoid(ray: &Ray, ellipsoid: &Ellipsoid) -> Option<Interval> {
    let inverse_radii = ellipsoid.one_over_radii();
    let q = inverse_radii * ray.origin;
    let w = inverse_radii * ray.direction;

    let q2 = q.length_squared();
    let qw = q.dot(w);
    let w2 = w.length_squared();

    if q2 > 1.0 {
        // Outside: looking outward or tangent means no hit.
        if qw >= 0.0 {
            return None;
        }
        let qw2 = qw * qw;
        let difference = q2 - 1.0;
        let product = w2 * difference;

        if qw2 < product {
            None
        } else if qw2 > product {
            let discriminant = qw2 - product;
            // -qw > 0, so this sum avoids cancellation.
            let temp = -qw + discriminant.sqrt();
            let root0 = temp / w2;
            let root1 = difference / temp;
            Some(if root0 < root1 {
                Interval {
                    start: root0,
                    stop: root1,
                }
            } else {
                Interval {
                    start: root1,
                    stop: root0,
                }
            })
        } else {
            let root = (difference / w2).sqrt();
            Some(Interval {
                start: root,
                stop: root,
            })
        }
    } else if q2 < 1.0 {
        let difference = q2 - 1.0;
        let product = w2 * difference;
        let discriminant = qw * qw - product;
        let temp = -qw + discriminant.sqrt();
        Some(Interval {
            start: 0.0,
            stop: temp / w2,
        })
    } else if qw < 0.0 {
        Some(Interval {
            start: 0.0,
            stop: -qw / w2,
        })
    } else {
        None
    }
}

/// Point along a ray that passes closest to the ellipsoid.
///
/// Closest approach is measured in the ellipsoid's radii-scaled space,
/// which is exact for spheres. A ray heading away from the body grazes it at
/// its own origin. Returns `None` for a degenerate ray (zero direction) or
/// an origin at the body center.
#[must_use]
pub fn grazing_altitude_location(ray: &Ray, ellipsoid: &Ellipsoid) -> Option<DVec3> {
    let inverse_radii = ellipsoid.one_over_radii();
    let q = inverse_radii * ray.origin;
    let w = inverse_radii * ray.direction;

    let w2 = w.length_squared();
    if w2 <= f64::EPSILON || q.length_squared() <= f64::EPSILON {
        return None;
    }

    let t = (-q.dot(w) / w2).max(0.0);
    let location = ray.point_at(t);
    location.is_finite().then_some(location)
}
