use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Marker rendered for a zone with no price observations, in both table and
/// JSON output.
pub const UNAVAILABLE: &str = "N/A";

/// One raw observation from the spot price history. Consumed during the
/// per-zone minimum reduction and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotPriceEntry {
    pub availability_zone: String,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

/// Minimum observed spot price for one availability zone, or `Unavailable`
/// when the lookback window held no observations for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZonePrice {
    Price(f64),
    Unavailable,
}

impl ZonePrice {
    pub fn as_price(&self) -> Option<f64> {
        match self {
            Self::Price(price) => Some(*price),
            Self::Unavailable => None,
        }
    }
}

impl std::fmt::Display for ZonePrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price(price) => write!(f, "{}", price),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

// Serialized as a bare number or the string "N/A", matching the table output.
impl Serialize for ZonePrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Price(price) => serializer.serialize_f64(*price),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for ZonePrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(price) => Ok(Self::Price(price)),
            Raw::Text(text) if text == UNAVAILABLE => Ok(Self::Unavailable),
            Raw::Text(text) => Err(de::Error::custom(format!(
                "expected a price or \"{}\", got \"{}\"",
                UNAVAILABLE, text
            ))),
        }
    }
}

/// Aggregated spot pricing for one region. The A/B/C columns cover the three
/// canonical zones `<region>a/b/c`; `min_price` and `min_price_zone` consider
/// every zone the region reported, including ones outside those three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "A")]
    pub zone_a: ZonePrice,
    #[serde(rename = "B")]
    pub zone_b: ZonePrice,
    #[serde(rename = "C")]
    pub zone_c: ZonePrice,
    #[serde(rename = "MinSpotPrice")]
    pub min_price: f64,
    #[serde(rename = "MinSpotPriceAZ")]
    pub min_price_zone: String,
}
