use crate::prelude::{PlotError, PlotResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One successfully parsed telemetry record.
///
/// `resolved_time` is derived at parse time: the source tag's embedded
/// 10-digit base timestamp (when present) plus the relative offset, in
/// seconds. It is carried forward as the track-point value and never
/// re-derived downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub source_tag: String,
    pub relative_time_ms: f64,
    pub confidence_percent: u32,
    pub signal_strength: f64,
    pub satellite_id: u32,
    pub beam_id: u32,
    pub longitude: f64,
    pub latitude: f64,
    pub raw_height: i64,
    pub resolved_time: f64,
}

/// Compiled telemetry grammar, built once and reused across all lines.
///
/// Recognized fields, left to right: the `IRA:` record tag, the source
/// capture token, a relative time in milliseconds, an integer percentage,
/// a signal-strength decimal embedded in a run of digits/dots/pipes/
/// dashes, `sat:<int>`, `beam:<int>`, a signed `pos=<lon>/<lat>` pair and
/// a signed integer `alt=` height code. Unrelated tokens between the
/// recognized fields are skipped.
pub struct LineParser {
    grammar: Regex,
    base_time: Regex,
}

impl LineParser {
    pub fn new() -> PlotResult<Self> {
        let grammar = Regex::new(
            r"^IRA:\s+(?P<tag>\S+)\s+(?P<time>[+-]?\d+(?:\.\d+)?)\s+(?:\S+\s+)*?(?P<conf>\d+)%\s+[0-9.|-]*?(?P<level>[+-]?\d+\.\d+)[0-9.|-]*\s+(?:\S+\s+)*?sat:(?P<sat>\d+)\s+beam:(?P<beam>\d+)\s+(?:\S+\s+)*?pos=(?P<lon>[+-]?\d+(?:\.\d+)?)/(?P<lat>[+-]?\d+(?:\.\d+)?)\s+alt=(?P<alt>[+-]?\d+)",
        )
        .map_err(|e| PlotError::Internal(format!("telemetry grammar: {}", e)))?;
        let base_time = Regex::new(r"\d{10}")
            .map_err(|e| PlotError::Internal(format!("base-time pattern: {}", e)))?;
        Ok(Self { grammar, base_time })
    }

    /// Parse one raw line into a record, or report it unrecognized.
    ///
    /// No partial records: any field that fails to extract rejects the
    /// whole line.
    pub fn parse(&self, line: &str) -> PlotResult<ParsedRecord> {
        let caps = self
            .grammar
            .captures(line)
            .ok_or(PlotError::UnrecognizedLine)?;

        let source_tag = caps["tag"].to_string();
        let relative_time_ms: f64 = parse_field(&caps["time"])?;
        let confidence_percent: u32 = parse_field(&caps["conf"])?;
        let signal_strength: f64 = parse_field(&caps["level"])?;
        let satellite_id: u32 = parse_field(&caps["sat"])?;
        let beam_id: u32 = parse_field(&caps["beam"])?;
        let longitude: f64 = parse_field(&caps["lon"])?;
        let latitude: f64 = parse_field(&caps["lat"])?;
        let raw_height: i64 = parse_field(&caps["alt"])?;

        let base = self
            .base_time
            .find(&source_tag)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0);
        let resolved_time = base + relative_time_ms / 1000.0;

        Ok(ParsedRecord {
            source_tag,
            relative_time_ms,
            confidence_percent,
            signal_strength,
            satellite_id,
            beam_id,
            longitude,
            latitude,
            raw_height,
            resolved_time,
        })
    }
}

fn parse_field<T: std::str::FromStr>(text: &str) -> PlotResult<T> {
    text.parse().map_err(|_| PlotError::UnrecognizedLine)
}
