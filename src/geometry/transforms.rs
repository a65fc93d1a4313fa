use glam::{DMat4, DVec3};

use super::Ellipsoid;

const POLE_EPSILON: f64 = 1e-14;

/// Local east-north-up frame at `origin`, expressed as a transform from the
/// local frame to the ellipsoid's fixed frame.
///
/// Columns are east, north, up (the geodetic normal) and the origin. At the
/// poles east is fixed to +Y so the frame stays well defined.
#[must_use]
pub fn east_north_up_to_fixed_frame(origin: DVec3, ellipsoid: &Ellipsoid) -> DMat4 {
    let (east, north, up) =
        if origin.x.abs() < POLE_EPSILON && origin.y.abs() < POLE_EPSILON {
            let sign = if origin.z < 0.0 { -1.0 } else { 1.0 };
            (DVec3::Y, DVec3::new(-sign, 0.0, 0.0), DVec3::new(0.0, 0.0, sign))
        } else {
            let up = ellipsoid.geodetic_surface_normal(origin);
            let east = DVec3::new(-origin.y, origin.x, 0.0).normalize();
            (east, up.cross(east), up)
        };

    DMat4::from_cols(
        east.extend(0.0),
        north.extend(0.0),
        up.extend(0.0),
        origin.extend(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_on_equator_points_up_radially() {
        let origin = DVec3::new(6_378_137.0, 0.0, 0.0);
        let frame = east_north_up_to_fixed_frame(origin, &Ellipsoid::WGS84);
        assert!((frame.transform_vector3(DVec3::Z) - DVec3::X).length() < 1e-12);
        assert!((frame.transform_vector3(DVec3::X) - DVec3::Y).length() < 1e-12);
        assert!((frame.transform_vector3(DVec3::Y) - DVec3::Z).length() < 1e-12);
        assert!((frame.transform_point3(DVec3::ZERO) - origin).length() < 1e-6);
    }

    #[test]
    fn frame_at_south_pole_is_right_handed() {
        let origin = DVec3::new(0.0, 0.0, -1.0);
        let frame = east_north_up_to_fixed_frame(origin, &Ellipsoid::UNIT_SPHERE);
        let east = frame.transform_vector3(DVec3::X);
        let north = frame.transform_vector3(DVec3::Y);
        let up = frame.transform_vector3(DVec3::Z);
        assert!((east.cross(north) - up).length() < 1e-12);
        assert_eq!(up, DVec3::NEG_Z);
    }
}
