use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use slope::geo::geometry::Coord;
use std::{str::FromStr, time::Duration};

/// Estimate the average terrain slope around a point.
///
/// If LAT LON PRECISION RADIUS are not given, they are read as one
/// whitespace-separated line from stdin.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Yahoo! JAPAN application id.
    #[arg(long, env = "YAHOO_APPID", hide_env_values = true)]
    pub appid: String,

    /// Altitude API URL.
    #[arg(long, default_value = altitude::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Skip the tile grid and its JSON document.
    #[arg(long, default_value_t = false)]
    pub no_json: bool,

    /// Print the JSON document on a single line.
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// LAT LON PRECISION RADIUS
    #[arg(num_args = 4, value_names = ["LAT", "LON", "PRECISION", "RADIUS"], allow_negative_numbers = true)]
    pub request: Option<Vec<f64>>,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// A single slope estimation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub center: Coord<f64>,
    pub precision: usize,
    pub radius_m: f64,
}

impl TryFrom<&[f64]> for Request {
    type Error = AnyError;

    fn try_from(values: &[f64]) -> Result<Self, AnyError> {
        let [lat, lon, precision, radius_m] = values else {
            return Err(anyhow!(
                "expected 4 values (lat lon precision radius), got {}",
                values.len()
            ));
        };
        if precision.fract() != 0.0 || *precision < 0.0 || !precision.is_finite() {
            return Err(anyhow!("precision must be a whole number, got {precision}"));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let precision = *precision as usize;
        Ok(Self {
            center: Coord { x: *lon, y: *lat },
            precision,
            radius_m: *radius_m,
        })
    }
}

impl FromStr for Request {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, AnyError> {
        let values = s
            .split_whitespace()
            .map(f64::from_str)
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| anyhow!("not a valid lat lon precision radius, {e}"))?;
        Self::try_from(values.as_slice())
    }
}
