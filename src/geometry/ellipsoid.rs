use glam::DVec3;

/// Positions closer than this to the center (in radii-scaled units) project
/// radially instead of along the geodetic normal.
const CENTER_TOLERANCE_SQUARED: f64 = 0.1;
/// Convergence threshold for the geodetic surface projection.
const PROJECTION_EPSILON: f64 = 1e-12;
const MAX_PROJECTION_ITERATIONS: usize = 64;

/// Geodetic position: longitude/latitude in radians, height in meters above
/// the ellipsoid surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartographic {
    /// Longitude in radians.
    pub longitude: f64,
    /// Geodetic latitude in radians.
    pub latitude: f64,
    /// Height above the surface (negative below it).
    pub height: f64,
}

impl Cartographic {
    /// Create a cartographic position from radians and a height.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }
}

/// Triaxial ellipsoid centered at the origin, the reference body the
/// navigation controller measures heights against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-axis lengths along x, y and z.
    radii: [f64; 3],
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid.
    pub const WGS84: Self = Self {
        radii: [6_378_137.0, 6_378_137.0, 6_356_752.314_245_179],
    };

    /// A sphere of radius one, used to make angle math radius-independent.
    pub const UNIT_SPHERE: Self = Self {
        radii: [1.0, 1.0, 1.0],
    };

    /// Create an ellipsoid from its three semi-axis lengths.
    #[must_use]
    pub fn new(radii: DVec3) -> Self {
        Self {
            radii: radii.to_array(),
        }
    }

    /// Semi-axis lengths.
    #[must_use]
    pub fn radii(&self) -> DVec3 {
        DVec3::from_array(self.radii)
    }

    /// Squared semi-axis lengths.
    #[must_use]
    pub fn radii_squared(&self) -> DVec3 {
        let r = self.radii();
        r * r
    }

    /// Component-wise reciprocal of the radii.
    #[must_use]
    pub fn one_over_radii(&self) -> DVec3 {
        DVec3::ONE / self.radii()
    }

    /// Component-wise reciprocal of the squared radii.
    #[must_use]
    pub fn one_over_radii_squared(&self) -> DVec3 {
        DVec3::ONE / self.radii_squared()
    }

    /// Largest semi-axis length.
    #[must_use]
    pub fn maximum_radius(&self) -> f64 {
        self.radii().max_element()
    }

    /// Smallest semi-axis length.
    #[must_use]
    pub fn minimum_radius(&self) -> f64 {
        self.radii().min_element()
    }

    /// Whether every radius is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.radii.iter().all(|r| r.is_finite() && *r > 0.0)
    }

    /// Outward unit normal of the surface through `position`.
    #[must_use]
    pub fn geodetic_surface_normal(&self, position: DVec3) -> DVec3 {
        (position * self.one_over_radii_squared()).normalize_or_zero()
    }

    /// Outward unit normal at a cartographic position.
    #[must_use]
    pub fn geodetic_surface_normal_cartographic(
        &self,
        cartographic: &Cartographic,
    ) -> DVec3 {
        let cos_lat = cartographic.latitude.cos();
        DVec3::new(
            cos_lat * cartographic.longitude.cos(),
            cos_lat * cartographic.longitude.sin(),
            cartographic.latitude.sin(),
        )
    }

    /// Convert a cartographic position to fixed-frame cartesian coordinates.
    #[must_use]
    pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3 {
        let n = self.geodetic_surface_normal_cartographic(cartographic);
        let k = self.radii_squared() * n;
        let gamma = n.dot(k).sqrt();
        k / gamma + n * cartographic.height
    }

    /// Convert a fixed-frame cartesian position to cartographic coordinates.
    ///
    /// Returns `None` at the ellipsoid center, where no geodetic normal
    /// exists.
    #[must_use]
    pub fn cartesian_to_cartographic(&self, position: DVec3) -> Option<Cartographic> {
        let surface = self.scale_to_geodetic_surface(position)?;
        let n = self.geodetic_surface_normal(surface);
        let h = position - surface;
        let height = h.dot(position).signum() * h.length();
        Some(Cartographic {
            longitude: n.y.atan2(n.x),
            latitude: n.z.clamp(-1.0, 1.0).asin(),
            height,
        })
    }

    /// Project `position` onto the surface along the geodetic normal.
    ///
    /// Newton iteration on the Lagrange multiplier of the closest-point
    /// problem. Positions near the center fall back to a radial projection.
    #[must_use]
    pub fn scale_to_geodetic_surface(&self, position: DVec3) -> Option<DVec3> {
        let one_over_radii = self.one_over_radii();
        let scaled = position * one_over_radii;
        let p2 = scaled * scaled;
        let squared_norm = p2.x + p2.y + p2.z;
        let ratio = (1.0 / squared_norm).sqrt();
        let intersection = position * ratio;

        if squared_norm < CENTER_TOLERANCE_SQUARED {
            return ratio.is_finite().then_some(intersection);
        }

        let inv_sq = self.one_over_radii_squared();
        let gradient = intersection * inv_sq * 2.0;
        let mut lambda =
            (1.0 - ratio) * position.length() / (0.5 * gradient.length());
        let mut correction = 0.0;
        let mut multiplier = DVec3::ONE;

        for _ in 0..MAX_PROJECTION_ITERATIONS {
            lambda -= correction;
            multiplier = DVec3::ONE / (DVec3::ONE + inv_sq * lambda);
            let m2 = multiplier * multiplier;
            let m3 = m2 * multiplier;
            let func = p2.dot(m2) - 1.0;
            if func.abs() <= PROJECTION_EPSILON {
                break;
            }
            let denominator = (p2 * m3 * inv_sq).element_sum();
            correction = func / (-2.0 * denominator);
        }

        let result = position * multiplier;
        result.is_finite().then_some(result)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;

    #[test]
    fn maximum_radius_is_equatorial_for_wgs84() {
        assert_eq!(Ellipsoid::WGS84.maximum_radius(), 6_378_137.0);
        assert_eq!(Ellipsoid::UNIT_SPHERE.maximum_radius(), 1.0);
    }

    #[test]
    fn cartographic_conversion_recovers_height() {
        let ellipsoid = Ellipsoid::WGS84;
        let carto = Cartographic::new(0.3, FRAC_PI_4, 12_345.0);
        let cartesian = ellipsoid.cartographic_to_cartesian(&carto);
        let back = ellipsoid
            .cartesian_to_cartographic(cartesian)
            .unwrap();
        assert!((back.longitude - 0.3).abs() < 1e-9);
        assert!((back.latitude - FRAC_PI_4).abs() < 1e-9);
        assert!((back.height - 12_345.0).abs() < 1e-4);
    }

    #[test]
    fn points_below_surface_have_negative_height() {
        let ellipsoid = Ellipsoid::WGS84;
        let inside = DVec3::new(6_000_000.0, 0.0, 0.0);
        let carto = ellipsoid.cartesian_to_cartographic(inside).unwrap();
        assert!((carto.height + 378_137.0).abs() < 1e-6);
    }

    #[test]
    fn center_has_no_cartographic_position() {
        assert!(Ellipsoid::WGS84
            .cartesian_to_cartographic(DVec3::ZERO)
            .is_none());
    }

    #[test]
    fn surface_normal_on_sphere_is_radial() {
        let n = Ellipsoid::UNIT_SPHERE
            .geodetic_surface_normal(DVec3::new(0.0, 3.0, 4.0));
        assert!((n - DVec3::new(0.0, 0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn invalid_radii_are_detected() {
        assert!(Ellipsoid::WGS84.is_valid());
        assert!(!Ellipsoid::new(DVec3::new(1.0, 0.0, 1.0)).is_valid());
        assert!(!Ellipsoid::new(DVec3::new(1.0, f64::NAN, 1.0)).is_valid());
    }
}
