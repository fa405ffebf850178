pub mod color;
pub mod quantize;

pub use color::heat_color;
pub use quantize::{cell_index, snap};
