mod plane;
mod ring;

pub use {plane::PlaneVector, ring::RingIter};
pub(crate) use ring::normalize_bearing;
