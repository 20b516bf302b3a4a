use super::normalize_bearing;
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

/// A 2-D vector used to average (magnitude, bearing) pairs without
/// angle wrap-around errors.
///
/// `x` is the cosine component and `y` the sine component of the
/// bearing, so a bearing of 0° lies on the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneVector {
    pub x: f64,
    pub y: f64,
}

impl PlaneVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Returns the vector of length `magnitude` pointing along
    /// `bearing_deg`.
    ///
    /// A negative magnitude points the opposite way.
    pub fn from_polar(magnitude: f64, bearing_deg: f64) -> Self {
        let (sin, cos) = bearing_deg.to_radians().sin_cos();
        Self {
            x: magnitude * cos,
            y: magnitude * sin,
        }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns this vector's direction in degrees, in [0, 360).
    ///
    /// The zero vector has no direction; it reports 0.
    pub fn bearing_deg(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            normalize_bearing(self.y.atan2(self.x).to_degrees())
        }
    }
}

impl Add for PlaneVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for PlaneVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for PlaneVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::PlaneVector;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_polar() {
        let v = PlaneVector::from_polar(2.0, 90.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, 2.0, max_relative = 1e-12);
        assert_relative_eq!(v.length(), 2.0, max_relative = 1e-12);
        assert_relative_eq!(v.bearing_deg(), 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_magnitude_flips() {
        let v = PlaneVector::from_polar(-1.0, 45.0);
        assert_relative_eq!(v.bearing_deg(), 225.0, epsilon = 1e-12);
        assert_relative_eq!(v.length(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_bearing() {
        assert_eq!(PlaneVector::ZERO.bearing_deg(), 0.0);
        // Negative zero components must not leak through atan2 as 180°.
        let v = PlaneVector { x: -0.0, y: -0.0 };
        assert_eq!(v.bearing_deg(), 0.0);
        let v: PlaneVector = [0.0, 90.0, 180.0, 270.0]
            .iter()
            .map(|bearing| PlaneVector::from_polar(0.0, *bearing))
            .sum();
        assert_eq!(v.bearing_deg(), 0.0);
        assert_eq!(v.length(), 0.0);
    }

    #[test]
    fn test_sum_wraps_cleanly() {
        // Averaging 350° and 10° must point north, not south.
        let v: PlaneVector = [350.0, 10.0]
            .iter()
            .map(|bearing| PlaneVector::from_polar(1.0, *bearing))
            .sum();
        let bearing = v.bearing_deg();
        assert!(bearing < 1e-9 || bearing > 360.0 - 1e-9, "{bearing}");
    }
}
