use crate::{
    constants::EARTH_RADIUS_M,
    math::{PlaneVector, RingIter},
    validate, AltitudeSource, SlopeError,
};
use geo::geometry::Coord;
use log::{debug, warn};

/// Elevation change per meter in a given direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlopeVector {
    /// Rise over run. Negative values mean the ground falls away in
    /// the direction of `bearing_deg`.
    pub magnitude: f64,

    /// Compass direction, degrees clockwise from north in [0, 360).
    pub bearing_deg: f64,
}

impl SlopeVector {
    pub fn to_plane(self) -> PlaneVector {
        PlaneVector::from_polar(self.magnitude, self.bearing_deg)
    }
}

/// One altitude sample on the ring around a center.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    /// Position on the ring, 0 being due north.
    pub index: usize,

    pub coord: Coord<f64>,

    /// Ground elevation in meters, or `None` if the lookup failed.
    pub elevation_m: Option<f64>,

    pub slope: SlopeVector,
}

/// Slope estimate around a single center point.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeField {
    pub center: Coord<f64>,

    /// Ground elevation at `center`, in meters.
    pub center_elevation_m: f64,

    /// Distance from `center` to every sample, in meters.
    pub radius_m: f64,

    /// Ring samples in clockwise order starting due north.
    pub samples: Vec<SamplePoint>,

    /// Vector average of every sample's slope.
    pub average: SlopeVector,
}

impl SlopeField {
    pub fn builder() -> SlopeFieldBuilder {
        SlopeFieldBuilder {
            center: None,
            count: None,
            radius_m: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlopeFieldBuilder {
    /// Point to estimate slope around (required).
    center: Option<Coord<f64>>,

    /// Number of ring samples (required).
    count: Option<usize>,

    /// Ring radius in meters (required).
    radius_m: Option<f64>,
}

impl SlopeFieldBuilder {
    pub fn center(mut self, coord: Coord<f64>) -> Self {
        self.center = Some(coord);
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn radius(mut self, meters: f64) -> Self {
        self.radius_m = Some(meters);
        self
    }

    /// Samples altitude around the center and averages the resulting
    /// slopes.
    ///
    /// Lookups happen one at a time: the center first, then each ring
    /// point in clockwise order. A failed ring lookup is recorded as a
    /// missing elevation with zero slope and still counts toward the
    /// average.
    ///
    /// # Errors
    ///
    /// - [`SlopeError::Builder`] if a required parameter was not set.
    /// - [`SlopeError::InvalidArgument`] if the parameters are out of
    ///   range; no lookups are made.
    /// - [`SlopeError::Altitude`] if the center's altitude lookup
    ///   fails.
    pub fn build<A>(&self, source: &A) -> Result<SlopeField, SlopeError>
    where
        A: AltitudeSource + ?Sized,
    {
        let center = self.center.ok_or(SlopeError::Builder("center"))?;
        let count = self.count.ok_or(SlopeError::Builder("count"))?;
        let radius_m = self.radius_m.ok_or(SlopeError::Builder("radius"))?;
        validate::request(center, count, radius_m)?;

        let now = std::time::Instant::now();
        let center_elevation_m = source.altitude(center)?;

        let samples: Vec<SamplePoint> = RingIter::new(center, count, radius_m, EARTH_RADIUS_M)
            .enumerate()
            .map(|(index, (bearing_deg, coord))| {
                let elevation_m = match source.altitude(coord) {
                    Ok(elevation) => Some(elevation),
                    Err(e) => {
                        warn!("sample {index} at {}, {}: {e}", coord.y, coord.x);
                        None
                    }
                };
                let magnitude =
                    elevation_m.map_or(0.0, |elevation| (elevation - center_elevation_m) / radius_m);
                SamplePoint {
                    index,
                    coord,
                    elevation_m,
                    slope: SlopeVector {
                        magnitude,
                        bearing_deg,
                    },
                }
            })
            .collect();

        let average = average(samples.iter().map(|sample| sample.slope));

        debug!(
            "slope field; center: {:?}, count: {count}, radius: {radius_m}, missing: {}, average: {average:?}, exec: {:?}",
            center,
            samples.iter().filter(|s| s.elevation_m.is_none()).count(),
            now.elapsed()
        );

        Ok(SlopeField {
            center,
            center_elevation_m,
            radius_m,
            samples,
            average,
        })
    }
}

/// Shorthand for `SlopeField::builder().center(..).count(..).radius(..).build(..)`.
pub fn estimate<A>(
    center: Coord<f64>,
    count: usize,
    radius_m: f64,
    source: &A,
) -> Result<SlopeField, SlopeError>
where
    A: AltitudeSource + ?Sized,
{
    SlopeField::builder()
        .center(center)
        .count(count)
        .radius(radius_m)
        .build(source)
}

/// Returns the vector average of `slopes`.
///
/// Each slope is treated as a planar vector, the vectors are summed,
/// and the sum's length is divided by the number of slopes. The
/// result's bearing is the direction of the sum, or 0 when the sum is
/// zero.
pub fn average<I>(slopes: I) -> SlopeVector
where
    I: IntoIterator<Item = SlopeVector>,
{
    let (sum, n) = slopes
        .into_iter()
        .fold((PlaneVector::ZERO, 0_usize), |(sum, n), slope| {
            (sum + slope.to_plane(), n + 1)
        });
    if n == 0 {
        return SlopeVector::default();
    }
    SlopeVector {
        magnitude: sum.length() / n as f64,
        bearing_deg: sum.bearing_deg(),
    }
}
