use crate::{constants::EARTH_RADIUS_M, math::RingIter, validate, SlopeError};
use geo::geometry::Coord;

/// Returns `count` coordinates evenly spaced on a circle of
/// `radius_m` meters around `center`.
///
/// The first point lies due north of `center` and the rest follow
/// clockwise. Longitudes are wrapped into (-180, 180].
///
/// # Errors
///
/// Returns [`SlopeError::InvalidArgument`] if `count` is not one of
/// 4, 8, 16, 32, 64, or 128, if `radius_m` is not in (0, 1000], or if
/// `center` is out of range.
pub fn ring(center: Coord<f64>, count: usize, radius_m: f64) -> Result<Vec<Coord<f64>>, SlopeError> {
    validate::request(center, count, radius_m)?;
    Ok(RingIter::new(center, count, radius_m, EARTH_RADIUS_M)
        .map(|(_, coord)| coord)
        .collect())
}
