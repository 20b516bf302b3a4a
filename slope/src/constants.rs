/// Spherical earth radius, in meters, used for all destination and
/// offset math.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Permitted number of ring samples.
pub const PRECISIONS: [usize; 6] = [4, 8, 16, 32, 64, 128];

/// Largest permitted sampling radius, in meters.
pub const MAX_RADIUS_M: f64 = 1000.0;
