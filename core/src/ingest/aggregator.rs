use crate::ingest::classifier;
use crate::ingest::parser::{LineParser, ParsedRecord};
use crate::prelude::{GeoPoint, LinkDirection, PlotResult};
use log::warn;
use serde::Serialize;
use std::collections::HashMap;
use std::io::BufRead;

/// Ordered track points for one beam of one satellite.
#[derive(Debug, Clone)]
pub struct BeamTrack {
    pub beam_id: u32,
    pub points: Vec<GeoPoint>,
}

/// Tracks observed for one satellite, beams in first-seen order.
#[derive(Debug, Clone)]
pub struct SatelliteTracks {
    /// Zero-padded three-digit satellite id.
    pub label: String,
    pub beams: Vec<BeamTrack>,
    beam_slots: HashMap<u32, usize>,
}

impl SatelliteTracks {
    fn new(satellite_id: u32) -> Self {
        Self {
            label: format!("{:03}", satellite_id),
            beams: Vec::new(),
            beam_slots: HashMap::new(),
        }
    }
}

/// Satellite/beam track collection with deterministic iteration.
///
/// Each distinct (satellite, beam) pair gets a stable slot at first
/// sight; the slot vectors preserve first-seen order so rendering walks
/// the collection in input order without string-keyed nested maps.
#[derive(Debug, Clone, Default)]
pub struct TrackSet {
    pub satellites: Vec<SatelliteTracks>,
    sat_slots: HashMap<u32, usize>,
}

impl TrackSet {
    fn push(&mut self, satellite_id: u32, beam_id: u32, point: GeoPoint) {
        let sat_slot = match self.sat_slots.get(&satellite_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.satellites.len();
                self.satellites.push(SatelliteTracks::new(satellite_id));
                self.sat_slots.insert(satellite_id, slot);
                slot
            }
        };
        let satellite = &mut self.satellites[sat_slot];
        let beam_slot = match satellite.beam_slots.get(&beam_id) {
            Some(&slot) => slot,
            None => {
                let slot = satellite.beams.len();
                satellite.beams.push(BeamTrack {
                    beam_id,
                    points: Vec::new(),
                });
                satellite.beam_slots.insert(beam_id, slot);
                slot
            }
        };
        satellite.beams[beam_slot].points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}

/// All collections built by the single ingest pass: flat per-direction
/// point pools for heatmaps and per-direction satellite/beam tracks for
/// path rendering. Immutable once the pass ends.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    up_points: Vec<GeoPoint>,
    down_points: Vec<GeoPoint>,
    up_tracks: TrackSet,
    down_tracks: TrackSet,
}

impl Dataset {
    pub fn points(&self, direction: LinkDirection) -> &[GeoPoint] {
        match direction {
            LinkDirection::Up => &self.up_points,
            LinkDirection::Down => &self.down_points,
        }
    }

    pub fn tracks(&self, direction: LinkDirection) -> &TrackSet {
        match direction {
            LinkDirection::Up => &self.up_tracks,
            LinkDirection::Down => &self.down_tracks,
        }
    }

    /// Fold one classified record into both collections.
    ///
    /// The flat pool takes the signal strength as the point value, the
    /// track takes the resolved reception time. Both appends happen for
    /// every non-broken record, in input order.
    pub fn absorb(&mut self, record: &ParsedRecord, direction: LinkDirection, scaled_height: f64) {
        let sample = GeoPoint {
            lat: record.latitude,
            lon: record.longitude,
            height: scaled_height,
            value: record.signal_strength,
        };
        let track_point = GeoPoint {
            value: record.resolved_time,
            ..sample
        };
        match direction {
            LinkDirection::Up => {
                self.up_points.push(sample);
                self.up_tracks
                    .push(record.satellite_id, record.beam_id, track_point);
            }
            LinkDirection::Down => {
                self.down_points.push(sample);
                self.down_tracks
                    .push(record.satellite_id, record.beam_id, track_point);
            }
        }
    }
}

/// Counters describing one ingest pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Records classified and folded into the dataset.
    pub absorbed: usize,
    /// Parseable records whose height code fell outside both bands.
    pub broken: usize,
    /// Lines that did not match the telemetry grammar.
    pub unparsed: usize,
}

/// Fold every input line through parse, classify and absorb.
///
/// Unrecognized lines are reported and skipped; height codes outside
/// both direction bands are counted as broken and skipped. Neither
/// aborts the pass, so every line lands in exactly one of the absorbed,
/// broken or unparsed buckets.
pub fn fold_lines<R: BufRead>(parser: &LineParser, reader: R) -> PlotResult<(Dataset, IngestStats)> {
    let mut dataset = Dataset::default();
    let mut stats = IngestStats::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let record = match parser.parse(&line) {
            Ok(record) => record,
            Err(_) => {
                warn!("skipping unrecognized line {}: {}", number + 1, line);
                stats.unparsed += 1;
                continue;
            }
        };
        match classifier::classify(record.raw_height) {
            Some((direction, scaled_height)) => {
                dataset.absorb(&record, direction, scaled_height);
                stats.absorbed += 1;
            }
            None => stats.broken += 1,
        }
    }

    Ok((dataset, stats))
}
