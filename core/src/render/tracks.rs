use super::Renderer;
use crate::ingest::aggregator::Dataset;
use crate::prelude::{LinkDirection, PlotResult};

/// Connected line paths through each satellite/beam point sequence,
/// grouped under one labeled folder per satellite. Uplink tracks render
/// satellite motion; downlink tracks render beam footprints.
pub struct TrackRenderer {
    direction: LinkDirection,
}

impl TrackRenderer {
    pub fn new(direction: LinkDirection) -> Self {
        Self { direction }
    }
}

impl Renderer for TrackRenderer {
    fn render(&self, dataset: &Dataset) -> PlotResult<String> {
        let mut out = String::new();
        for satellite in &dataset.tracks(self.direction).satellites {
            out.push_str(&format!("<Folder>\n<name>Sat {}</name>\n", satellite.label));
            for beam in &satellite.beams {
                out.push_str(&format!(
                    "<Placemark>\n<name>beam {}</name>\n<styleUrl>#markerMap</styleUrl>\n<LineString>\n<tessellate>1</tessellate>\n<coordinates>\n",
                    beam.beam_id
                ));
                for point in &beam.points {
                    out.push_str(&format!("{},{},{}\n", point.lon, point.lat, point.height));
                }
                out.push_str("</coordinates>\n</LineString>\n</Placemark>\n");
            }
            out.push_str("</Folder>\n");
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
    fn one_path_per_satellite_beam_pair() {
        let input = "\
IRA: cap-1700000000-x 1000.0 1 95% 1.00 sat:7 beam:2 pos=+010.000/+001.000 alt=700
IRA: cap-1700000000-x 2000.0 1 95% 2.00 sat:7 beam:2 pos=+011.000/+002.000 alt=700
IRA: cap-1700000000-x 3000.0 1 95% 3.00 sat:7 beam:4 pos=+012.000/+003.000 alt=700
";
        let body = TrackRenderer::new(LinkDirection::Up)
            .render(&dataset(input))
            .unwrap();
        assert_eq!(body.matches("<Folder>").count(), 1);
        assert_eq!(body.matches("<LineString>").count(), 2);
        assert!(body.contains("<name>Sat 007</name>"));
        assert!(body.contains("<name>beam 2</name>"));
        assert!(body.contains("<name>beam 4</name>"));
    }

    #[test]
    fn coordinates_swap_to_longitude_first() {
        let input =
            "IRA: cap-1700000000-x 1500.0 1 95% 1.50 sat:7 beam:2 pos=+012.340/-045.670 alt=700\n";
        let body = TrackRenderer::new(LinkDirection::Up)
            .render(&dataset(input))
            .unwrap();
        assert!(body.contains("12.34,-45.67,700000\n"));
    }

    #[test]
    fn direction_selects_the_collection() {
        let input =
            "IRA: cap-1700000000-x 1500.0 1 95% 1.50 sat:7 beam:2 pos=+012.340/-045.670 alt=0\n";
        let data = dataset(input);
        let up = TrackRenderer::new(LinkDirection::Up).render(&data).unwrap();
        let down = TrackRenderer::new(LinkDirection::Down)
            .render(&data)
            .unwrap();
        assert!(up.is_empty());
        assert!(down.contains("<name>Sat 007</name>"));
    }

    #[test]
    fn path_points_follow_input_order() {
        let input = "\
IRA: cap-1700000000-x 1000.0 1 95% 1.00 sat:7 beam:2 pos=+010.000/+001.000 alt=700
IRA: cap-1700000000-x 2000.0 1 95% 2.00 sat:7 beam:2 pos=+011.000/+002.000 alt=700
IRA: cap-1700000000-x 3000.0 1 95% 3.00 sat:7 beam:2 pos=+010.500/+001.500 alt=700
";
        let body = TrackRenderer::new(LinkDirection::Up)
            .render(&dataset(input))
            .unwrap();
        let first = body.find("10,1,700000").unwrap();
        let second = body.find("11,2,700000").unwrap();
        let third = body.find("10.5,1.5,700000").unwrap();
        assert!(first < second && second < third);
    }
}
