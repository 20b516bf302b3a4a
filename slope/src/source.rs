use crate::AltitudeError;
use geo::geometry::Coord;

/// Something that can report ground altitude, in meters, at a
/// coordinate.
///
/// Lookups are synchronous and one coordinate at a time. Closures of
/// the form `Fn(Coord<f64>) -> Result<f64, AltitudeError>` implement
/// this trait.
pub trait AltitudeSource {
    fn altitude(&self, coord: Coord<f64>) -> Result<f64, AltitudeError>;
}

impl<F> AltitudeSource for F
where
    F: Fn(Coord<f64>) -> Result<f64, AltitudeError>,
{
    fn altitude(&self, coord: Coord<f64>) -> Result<f64, AltitudeError> {
        self(coord)
    }
}
