use anyhow::Context;
use beamcore::ingest::{fold_lines, IngestStats, LineParser};
use beamcore::render::{DocumentAssembler, HeatmapRenderer, Renderer, TrackRenderer};
use beamcore::LinkDirection;
use clap::ValueEnum;
use log::info;
use std::io::{BufRead, Write};

pub const DEFAULT_GRID_DEGREES: f64 = 0.5;

/// Output mode selecting which collection is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Color-graded signal-strength markers on a fixed grid
    Heatmap,
    /// Downlink beam paths
    Beams,
    /// Uplink satellite tracks
    Tracks,
}

impl Mode {
    fn title(&self) -> &'static str {
        match self {
            Mode::Heatmap => "Signal heatmap",
            Mode::Beams => "Beam paths",
            Mode::Tracks => "Satellite tracks",
        }
    }
}

/// Counters surfaced to the caller after a run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub stats: IngestStats,
}

/// Batch pipeline: consume the reader to exhaustion, then render once.
pub struct Runner {
    mode: Mode,
    grid_degrees: f64,
    document_name: Option<String>,
}

impl Runner {
    pub fn new(mode: Mode, grid_degrees: f64, document_name: Option<String>) -> Self {
        Self {
            mode,
            grid_degrees,
            document_name,
        }
    }

    pub fn execute<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> anyhow::Result<RunSummary> {
        let parser = LineParser::new().context("compiling telemetry grammar")?;
        let (dataset, stats) = fold_lines(&parser, reader).context("ingesting telemetry")?;

        // Discard report goes out after input is exhausted and before the
        // first output byte.
        info!(
            "absorbed {} records, discarded {} broken, skipped {} unrecognized lines",
            stats.absorbed, stats.broken, stats.unparsed
        );

        let renderer: Box<dyn Renderer> = match self.mode {
            Mode::Heatmap => Box::new(HeatmapRenderer::new(self.grid_degrees)),
            Mode::Tracks => Box::new(TrackRenderer::new(LinkDirection::Up)),
            Mode::Beams => Box::new(TrackRenderer::new(LinkDirection::Down)),
        };
        let body = renderer.render(&dataset).context("rendering placemarks")?;

        let name = self
            .document_name
            .clone()
            .unwrap_or_else(|| self.mode.title().to_string());
        let document = DocumentAssembler::new(name).assemble(&body);
        writer
            .write_all(document.as_bytes())
            .context("writing document")?;

        Ok(RunSummary { stats })
    }
}
