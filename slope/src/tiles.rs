//! Coarse slope grid around a point.
//!
//! The grid is 5 × 5 tiles spaced 100 m apart and centered on the
//! origin. Each tile is estimated independently with a 4 sample, 50 m
//! ring.

use crate::{constants::EARTH_RADIUS_M, validate, AltitudeSource, SlopeError, SlopeField, SlopeVector};
use geo::geometry::Coord;
use log::debug;

/// Tile center offsets from the origin, in meters, along each axis.
pub const GRID_OFFSETS_M: [f64; 5] = [-200.0, -100.0, 0.0, 100.0, 200.0];

/// Distance from a tile's center to its edges, in meters.
pub const HALF_WIDTH_M: f64 = 50.0;

/// Ring samples per tile.
pub const TILE_COUNT: usize = 4;

/// Ring radius per tile, in meters.
pub const TILE_RADIUS_M: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TileRecord {
    pub center: Coord<f64>,

    /// Corners in (south-west, north-west, south-east, north-east)
    /// order.
    pub bounding_box: [Coord<f64>; 4],

    pub average: SlopeVector,
}

/// Estimates slope for every tile in the grid around `origin`.
///
/// Tiles are returned row by row, southernmost row first and west to
/// east within a row.
///
/// # Errors
///
/// The first fatal estimation error aborts the run; no partial grid
/// is returned.
pub fn sample<A>(origin: Coord<f64>, source: &A) -> Result<Vec<TileRecord>, SlopeError>
where
    A: AltitudeSource + ?Sized,
{
    validate::coordinate(origin)?;

    let now = std::time::Instant::now();
    let builder = SlopeField::builder()
        .count(TILE_COUNT)
        .radius(TILE_RADIUS_M);
    let mut records = Vec::with_capacity(GRID_OFFSETS_M.len() * GRID_OFFSETS_M.len());

    for d_lat in GRID_OFFSETS_M {
        for d_lon in GRID_OFFSETS_M {
            let center = offset(origin, d_lat, d_lon);
            let field = builder.clone().center(center).build(source)?;
            records.push(TileRecord {
                center,
                bounding_box: bounding_box(center),
                average: field.average,
            });
        }
    }

    debug!(
        "tiles; origin: {origin:?}, len: {}, exec: {:?}",
        records.len(),
        now.elapsed()
    );

    Ok(records)
}

/// Converts a ground distance to degrees of arc on the spherical
/// earth.
///
/// The same conversion is applied to both axes, so longitude offsets
/// are not widened by latitude.
pub fn meters_to_degrees(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_M).to_degrees()
}

fn offset(Coord { x, y }: Coord<f64>, d_lat_m: f64, d_lon_m: f64) -> Coord<f64> {
    Coord {
        x: x + meters_to_degrees(d_lon_m),
        y: y + meters_to_degrees(d_lat_m),
    }
}

fn bounding_box(center: Coord<f64>) -> [Coord<f64>; 4] {
    let h = HALF_WIDTH_M;
    [
        offset(center, -h, -h),
        offset(center, h, -h),
        offset(center, -h, h),
        offset(center, h, h),
    ]
}
