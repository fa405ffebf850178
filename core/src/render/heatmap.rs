use super::Renderer;
use crate::ingest::aggregator::Dataset;
use crate::math::{color, quantize};
use crate::prelude::{GeoPoint, LinkDirection, PlotResult};
use std::collections::HashMap;

/// Color-graded point markers bucketed on a fixed angular grid.
///
/// Each populated cell keeps the last point observed there; that point
/// supplies the marker position, label and the value driving the color.
/// Last-write-wins is the documented policy of this renderer, not
/// max-aggregation. The color scale runs from red at 0 to blue at the
/// largest retained cell value.
pub struct HeatmapRenderer {
    grid_degrees: f64,
}

impl HeatmapRenderer {
    pub fn new(grid_degrees: f64) -> Self {
        Self { grid_degrees }
    }

    fn render_pool(&self, label: &str, points: &[GeoPoint], out: &mut String) -> PlotResult<()> {
        let mut order: Vec<(i64, i64)> = Vec::new();
        let mut cells: HashMap<(i64, i64), GeoPoint> = HashMap::new();
        for point in points {
            let key = (
                quantize::cell_index(point.lat, self.grid_degrees),
                quantize::cell_index(point.lon, self.grid_degrees),
            );
            if cells.insert(key, *point).is_none() {
                order.push(key);
            }
        }
        if order.is_empty() {
            return Ok(());
        }

        let max = order
            .iter()
            .map(|key| cells[key].value)
            .fold(f64::NEG_INFINITY, f64::max);

        out.push_str(&format!("<Folder>\n<name>{}</name>\n", label));
        for key in &order {
            let point = &cells[key];
            let color = color::heat_color(point.value, max)?;
            out.push_str(&format!(
                "<Placemark>\n<name>{value}</name>\n<styleUrl>#markerMap</styleUrl>\n<Style><IconStyle><color>{color}</color></IconStyle></Style>\n<Point><coordinates>{lon},{lat},{height}</coordinates></Point>\n</Placemark>\n",
                value = point.value,
                color = color,
                lon = point.lon,
                lat = point.lat,
                height = point.height,
            ));
        }
        out.push_str("</Folder>\n");
        Ok(())
    }
}

impl Renderer for HeatmapRenderer {
    fn render(&self, dataset: &Dataset) -> PlotResult<String> {
        let mut out = String::new();
        for direction in [LinkDirection::Up, LinkDirection::Down] {
            self.render_pool(direction.label(), dataset.points(direction), &mut out)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{fold_lines, LineParser};
    use std::io::Cursor;

    fn dataset(input: &str) -> Dataset {
        let parser = LineParser::new().unwrap();
        let (dataset, _) = fold_lines(&parser, Cursor::new(input.to_string())).unwrap();
        dataset
    }

    #[test]
    fn distinct_cells_get_distinct_markers() {
        let input = "\
IRA: cap-x 1000.0 1 95% 10.00 sat:7 beam:2 pos=+000.200/+000.300 alt=0
IRA: cap-x 2000.0 1 95% 90.00 sat:7 beam:2 pos=+001.400/+001.600 alt=0
";
        let body = HeatmapRenderer::new(1.0).render(&dataset(input)).unwrap();
        assert_eq!(body.matches("<Placemark>").count(), 2);
        // 10 of 90 sits near the red end of the sweep, 90 of 90 is blue.
        assert!(body.contains("ffff7100"));
        assert!(body.contains("ff0000ff"));
        assert!(body.contains("<coordinates>0.2,0.3,0</coordinates>"));
        assert!(body.contains("<coordinates>1.4,1.6,0</coordinates>"));
    }

    #[test]
    fn last_point_wins_within_a_cell() {
        let input = "\
IRA: cap-x 1000.0 1 95% 10.00 sat:7 beam:2 pos=+000.200/+000.300 alt=0
IRA: cap-x 2000.0 1 95% 90.00 sat:7 beam:2 pos=+000.400/+000.600 alt=0
";
        let body = HeatmapRenderer::new(1.0).render(&dataset(input)).unwrap();
        assert_eq!(body.matches("<Placemark>").count(), 1);
        assert!(body.contains("<name>90</name>"));
        assert!(body.contains("<coordinates>0.4,0.6,0</coordinates>"));
        assert!(!body.contains("<name>10</name>"));
    }

    #[test]
    fn pools_render_under_direction_labels() {
        let input = "\
IRA: cap-x 1000.0 1 95% 10.00 sat:7 beam:2 pos=+000.200/+000.300 alt=700
IRA: cap-x 2000.0 1 95% 90.00 sat:7 beam:2 pos=+001.400/+001.600 alt=0
";
        let body = HeatmapRenderer::new(1.0).render(&dataset(input)).unwrap();
        assert!(body.contains("<name>uplink</name>"));
        assert!(body.contains("<name>downlink</name>"));
    }

    #[test]
    fn empty_dataset_renders_nothing() {
        let body = HeatmapRenderer::new(0.5)
            .render(&Dataset::default())
            .unwrap();
        assert!(body.is_empty());
    }
}
