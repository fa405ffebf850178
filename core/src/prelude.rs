use serde::{Deserialize, Serialize};

/// Link direction of a telemetry fix, derived from its height code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkDirection {
    Up,
    Down,
}

impl LinkDirection {
    pub fn label(&self) -> &'static str {
        match self {
            LinkDirection::Up => "uplink",
            LinkDirection::Down => "downlink",
        }
    }
}

/// A single geo-positioned sample.
///
/// Fields are declared in the stored axis order (latitude first); markup
/// emission swaps to `lon,lat,height`, never the data model. `value` holds
/// the signal strength in the flat point pools and the resolved reception
/// time in the track collections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
    pub value: f64,
}

/// Common error type for ingest and rendering.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// The line does not match the telemetry grammar. Recoverable: the
    /// caller reports it and moves on to the next line.
    #[error("unrecognized telemetry line")]
    UnrecognizedLine,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PlotResult<T> = Result<T, PlotError>;
