//! Argument checks shared by ring generation and estimation.

use crate::{
    constants::{MAX_RADIUS_M, PRECISIONS},
    InvalidArgument,
};
use geo::geometry::Coord;

/// Checks that `coord` is a valid (latitude, longitude) pair.
///
/// Latitude must be in (-90, 90] and longitude in (-180, 180]. NaN
/// fails both checks.
pub fn coordinate(coord: Coord<f64>) -> Result<(), InvalidArgument> {
    let Coord { x: lon, y: lat } = coord;
    if !(lat > -90.0 && lat <= 90.0) {
        return Err(InvalidArgument::Latitude(lat));
    }
    if !(lon > -180.0 && lon <= 180.0) {
        return Err(InvalidArgument::Longitude(lon));
    }
    Ok(())
}

pub fn count(count: usize) -> Result<(), InvalidArgument> {
    if PRECISIONS.contains(&count) {
        Ok(())
    } else {
        Err(InvalidArgument::Count(count))
    }
}

pub fn radius(radius_m: f64) -> Result<(), InvalidArgument> {
    if radius_m > 0.0 && radius_m <= MAX_RADIUS_M {
        Ok(())
    } else {
        Err(InvalidArgument::Radius(radius_m))
    }
}

/// Validates a full (center, count, radius) request.
///
/// Precision is checked first, then the coordinate, then the radius.
pub fn request(center: Coord<f64>, n: usize, radius_m: f64) -> Result<(), InvalidArgument> {
    count(n)?;
    coordinate(center)?;
    radius(radius_m)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{coordinate, request, InvalidArgument};
    use geo::coord;

    const ISE: geo::Coord = coord! { x: 136.582085, y: 34.8503617 };

    #[test]
    fn test_valid_request() {
        for n in [4, 8, 16, 32, 64, 128] {
            assert_eq!(request(ISE, n, 50.0), Ok(()));
        }
        assert_eq!(request(ISE, 4, 1000.0), Ok(()));
        assert_eq!(request(ISE, 4, f64::MIN_POSITIVE), Ok(()));
    }

    #[test]
    fn test_rejects_bad_count() {
        for n in [0, 1, 2, 3, 5, 12, 256] {
            assert_eq!(request(ISE, n, 50.0), Err(InvalidArgument::Count(n)));
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(request(ISE, 4, 0.0), Err(InvalidArgument::Radius(0.0)));
        assert_eq!(request(ISE, 4, -1.0), Err(InvalidArgument::Radius(-1.0)));
        assert_eq!(
            request(ISE, 4, 1001.0),
            Err(InvalidArgument::Radius(1001.0))
        );
        assert!(matches!(
            request(ISE, 4, f64::NAN),
            Err(InvalidArgument::Radius(_))
        ));
    }

    #[test]
    fn test_coordinate_bounds() {
        assert_eq!(coordinate(coord! { x: 180.0, y: 90.0 }), Ok(()));
        assert_eq!(
            coordinate(coord! { x: 0.0, y: 91.0 }),
            Err(InvalidArgument::Latitude(91.0))
        );
        assert_eq!(
            coordinate(coord! { x: 0.0, y: -90.0 }),
            Err(InvalidArgument::Latitude(-90.0))
        );
        assert_eq!(
            coordinate(coord! { x: 181.0, y: 0.0 }),
            Err(InvalidArgument::Longitude(181.0))
        );
        assert_eq!(
            coordinate(coord! { x: -180.0, y: 0.0 }),
            Err(InvalidArgument::Longitude(-180.0))
        );
        assert!(matches!(
            coordinate(coord! { x: 0.0, y: f64::NAN }),
            Err(InvalidArgument::Latitude(_))
        ));
    }
}
