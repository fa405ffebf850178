/// Integer index of the grid cell containing `value` at the given step.
///
/// Negative values fall into the cell below rather than truncating toward
/// zero, so a cell boundary at 0 does not favor the positive side.
pub fn cell_index(value: f64, step: f64) -> i64 {
    (value / step).floor() as i64
}

/// Snap a coordinate to the nearest lower grid boundary.
pub fn snap(value: f64, step: f64) -> f64 {
    cell_index(value, step) as f64 * step
}
