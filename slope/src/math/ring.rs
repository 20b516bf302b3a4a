//! Points evenly spaced on a circle around a center, using the
//! spherical-earth destination point formula.
//!
//! Given a start `(φ, λ)`, bearing `θ`, and angular distance `δ`:
//!
//! ```text
//! φ' = asin(sin φ · cos δ + cos φ · sin δ · cos θ)
//! λ' = λ + atan2(sin θ · sin δ · cos φ, cos δ − sin φ · sin φ')
//! ```

use geo::{geometry::Coord, CoordFloat};
use num_traits::FromPrimitive;

/// Iterates over `count` points at `radius_m` from a center, starting
/// due north and stepping clockwise.
///
/// Yields `(bearing_deg, coord)` pairs. Callers are responsible for
/// validating their arguments; see [`crate::ring`] for the checked
/// entry point.
pub struct RingIter<T: CoordFloat = f64> {
    params: RingParams<T>,
    count: usize,
    current: usize,
}

#[derive(Clone, Copy)]
struct RingParams<T> {
    lat_sin: T,
    lat_cos: T,
    lon: T,
    delta_sin: T,
    delta_cos: T,
}

impl<T: CoordFloat + FromPrimitive> RingIter<T> {
    pub fn new(center: Coord<T>, count: usize, radius_m: T, earth_radius_m: T) -> Self {
        let (lat_sin, lat_cos) = center.y.to_radians().sin_cos();
        let (delta_sin, delta_cos) = (radius_m / earth_radius_m).sin_cos();
        Self {
            params: RingParams {
                lat_sin,
                lat_cos,
                lon: center.x.to_radians(),
                delta_sin,
                delta_cos,
            },
            count,
            current: 0,
        }
    }

    /// Bearing of the `index`th point, in degrees clockwise from north.
    fn bearing_deg(&self, index: usize) -> T {
        // Exact for the power-of-two counts we accept.
        let full = T::from_f64(360.0).unwrap();
        full * T::from_usize(index).unwrap() / T::from_usize(self.count).unwrap()
    }
}

impl<T: CoordFloat + FromPrimitive> Iterator for RingIter<T> {
    type Item = (T, Coord<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.count {
            let bearing_deg = self.bearing_deg(self.current);
            self.current += 1;
            Some((bearing_deg, destination(&self.params, bearing_deg)))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl<T: CoordFloat + FromPrimitive> ExactSizeIterator for RingIter<T> {}

fn destination<T: CoordFloat + FromPrimitive>(params: &RingParams<T>, bearing_deg: T) -> Coord<T> {
    let RingParams {
        lat_sin,
        lat_cos,
        lon,
        delta_sin,
        delta_cos,
    } = *params;
    let (theta_sin, theta_cos) = bearing_deg.to_radians().sin_cos();

    let lat = (lat_sin * delta_cos + lat_cos * delta_sin * theta_cos).asin();
    let lon = lon + (theta_sin * delta_sin * lat_cos).atan2(delta_cos - lat_sin * lat.sin());

    Coord {
        x: normalize_longitude(lon.to_degrees()),
        y: lat.to_degrees(),
    }
}

/// Wraps a longitude into (-180, 180].
fn normalize_longitude<T: CoordFloat + FromPrimitive>(lon: T) -> T {
    let half = T::from_f64(180.0).unwrap();
    let full = half + half;
    if lon > half {
        lon - full
    } else if lon <= -half {
        lon + full
    } else {
        lon
    }
}

/// Wraps a bearing into [0, 360).
pub(crate) fn normalize_bearing<T: CoordFloat + FromPrimitive>(bearing_deg: T) -> T {
    let full = T::from_f64(360.0).unwrap();
    let wrapped = bearing_deg % full;
    let wrapped = if wrapped < T::zero() {
        wrapped + full
    } else {
        wrapped
    };
    // A tiny negative input rounds up to exactly 360.
    if wrapped >= full {
        T::zero()
    } else {
        wrapped
    }
}
