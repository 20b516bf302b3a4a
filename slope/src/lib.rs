//! # Terrain slope
//!
//! `slope` estimates how steeply the ground rises, and in which
//! direction, around a geographic point. Altitude is sampled at evenly
//! spaced points on a small circle around the point, each sample is
//! turned into a slope vector, and the vectors are averaged in the
//! plane.
//!
//! Altitude itself comes from an [`AltitudeSource`] supplied by the
//! caller.

pub mod constants;
mod error;
mod field;
pub mod math;
mod points;
mod source;
pub mod tiles;
pub mod validate;

pub use {
    crate::{
        error::{AltitudeError, InvalidArgument, SlopeError},
        field::{average, estimate, SamplePoint, SlopeField, SlopeFieldBuilder, SlopeVector},
        points::ring,
        source::AltitudeSource,
        tiles::TileRecord,
    },
    geo,
};
