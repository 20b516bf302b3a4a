use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlopeError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("center altitude: {0}")]
    Altitude(#[from] AltitudeError),
}

/// A violated input constraint.
///
/// These are always raised before any altitude lookup or geometry
/// work takes place.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    #[error("precision must be one of 4, 8, 16, 32, 64, 128; got {0}")]
    Count(usize),

    #[error("radius must be in (0, 1000] meters; got {0}")]
    Radius(f64),

    #[error("latitude must be in (-90, 90]; got {0}")]
    Latitude(f64),

    #[error("longitude must be in (-180, 180]; got {0}")]
    Longitude(f64),
}

/// Failure reported by an [`AltitudeSource`](crate::AltitudeSource).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AltitudeError {
    #[error("altitude unavailable, {0}")]
    Unavailable(String),

    #[error("no altitude data found")]
    NoDataFound,
}
