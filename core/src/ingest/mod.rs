pub mod aggregator;
pub mod classifier;
pub mod parser;

pub use aggregator::{fold_lines, Dataset, IngestStats, TrackSet};
pub use classifier::classify;
pub use parser::{LineParser, ParsedRecord};
