use crate::ingest::aggregator::Dataset;
use crate::prelude::PlotResult;

pub mod document;
pub mod heatmap;
pub mod tracks;

pub use document::DocumentAssembler;
pub use heatmap::HeatmapRenderer;
pub use tracks::TrackRenderer;

/// Mode-specific markup renderer consuming the finished dataset.
pub trait Renderer {
    /// Emit the placemark fragments for one document body.
    fn render(&self, dataset: &Dataset) -> PlotResult<String>;
}
