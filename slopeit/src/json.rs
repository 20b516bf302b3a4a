//! Packaging of the tile grid into the published JSON document.

use serde::Serialize;
use slope::{geo::geometry::Coord, TileRecord};

const NAME: &str = "Slope estimation";
const DESCRIPTION: &str = "Outputs the average slope around a point.";
const LICENSE: &str = "public domain";
const EXT_LICENSES: &str =
    "Web Services by Yahoo! JAPAN (https://developer.yahoo.co.jp/sitemap/)";

/// Example coordinates advertised in `koyo_params`.
const DEFAULT_LAT: &str = "34.8503617";
const DEFAULT_LON: &str = "136.582085";

#[derive(Debug, Serialize)]
pub struct Document {
    pub koyo_data_id: String,
    pub koyo_id: String,
    pub koyo_scale: String,
    pub koyo_data_params: Vec<Param<f64>>,
    pub content: Vec<Polygon>,
    pub entry_at: String,
    pub target_at: String,
    pub koyo_name: String,
    pub koyo_description: String,
    pub need_external: String,
    pub koyo_params: Vec<Param<String>>,
    pub koyo_scales: String,
    pub koyo_data_ids: String,
    pub version: String,
    pub license: String,
    pub ext_licenses: String,
    pub data_type: String,
    pub api_key: String,
    pub first_entry_at: String,
    pub last_entry_at: String,
    pub last_updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct Param<T> {
    pub key: String,
    pub value: T,
}

/// One tile, as a four corner polygon carrying the average slope
/// magnitude.
#[derive(Debug, Serialize)]
pub struct Polygon {
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// `[lat, lon]` corner pairs.
    pub coordinates: [[f64; 2]; 4],

    pub value: f64,
}

impl From<&TileRecord> for Polygon {
    fn from(tile: &TileRecord) -> Self {
        let corner = |Coord { x, y }: Coord<f64>| [y, x];
        Polygon {
            kind: "Polygon",
            coordinates: tile.bounding_box.map(corner),
            value: tile.average.magnitude,
        }
    }
}

impl Document {
    pub fn new(origin: Coord<f64>, tiles: &[TileRecord]) -> Self {
        let param = |key: &str, value| Param {
            key: key.to_owned(),
            value,
        };
        Self {
            koyo_data_id: String::new(),
            koyo_id: String::new(),
            koyo_scale: "1.0".to_owned(),
            koyo_data_params: vec![param("latitude", origin.y), param("longitude", origin.x)],
            content: tiles.iter().map(Polygon::from).collect(),
            entry_at: String::new(),
            target_at: String::new(),
            koyo_name: NAME.to_owned(),
            koyo_description: DESCRIPTION.to_owned(),
            need_external: String::new(),
            koyo_params: vec![
                Param {
                    key: "latitude".to_owned(),
                    value: DEFAULT_LAT.to_owned(),
                },
                Param {
                    key: "longitude".to_owned(),
                    value: DEFAULT_LON.to_owned(),
                },
            ],
            koyo_scales: "0.1".to_owned(),
            koyo_data_ids: String::new(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            license: LICENSE.to_owned(),
            ext_licenses: EXT_LICENSES.to_owned(),
            data_type: "0".to_owned(),
            api_key: String::new(),
            first_entry_at: String::new(),
            last_entry_at: String::new(),
            last_updated_at: String::new(),
        }
    }

    /// Serializes with four space indentation, or on a single line if
    /// `compact`.
    pub fn render(&self, compact: bool) -> Result<String, serde_json::Error> {
        if compact {
            return serde_json::to_string(self);
        }
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
