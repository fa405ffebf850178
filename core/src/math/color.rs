use crate::prelude::{PlotError, PlotResult};

/// Hue span of the gradient: red at 0 sweeping to blue at two thirds of
/// the color wheel. The magenta segment is excluded so a low-to-high
/// reading stays monotonic.
const HUE_SPAN: f64 = 2.0 / 3.0;

/// Map a value in `[0, max]` to an opaque ARGB hex color.
///
/// Values above `max` clip to `max`; `heat_color(0.0, m)` is pure red
/// (`ffff0000`) and `heat_color(m, m)` is pure blue (`ff0000ff`).
pub fn heat_color(value: f64, max: f64) -> PlotResult<String> {
    if !(max > 0.0) {
        return Err(PlotError::InvalidInput(format!(
            "color scale requires a positive maximum, got {}",
            max
        )));
    }
    let clipped = if value > max { max } else { value };
    let (r, g, b) = hsv_to_rgb(clipped / max * HUE_SPAN, 1.0, 1.0)?;
    Ok(format!(
        "ff{:02x}{:02x}{:02x}",
        to_byte(r),
        to_byte(g),
        to_byte(b)
    ))
}

fn to_byte(component: f64) -> u8 {
    (component * 255.0).round() as u8
}

/// Standard six-sector HSV decomposition.
///
/// A sector index outside 0..=5 cannot occur for a hue clipped to
/// `[0, 2/3]`; hitting one signals a defect in the color law and fails
/// the run instead of emitting a wrong color.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> PlotResult<(f64, f64, f64)> {
    let sector = (h * 6.0).floor() as i64 % 6;
    let f = h * 6.0 - (h * 6.0).floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector {
        0 => Ok((v, t, p)),
        1 => Ok((q, v, p)),
        2 => Ok((p, v, t)),
        3 => Ok((p, q, v)),
        4 => Ok((t, p, v)),
        5 => Ok((v, p, q)),
        other => Err(PlotError::Internal(format!(
            "hue sector {} out of range",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_pure_red() {
        assert_eq!(heat_color(0.0, 90.0).unwrap(), "ffff0000");
        assert_eq!(heat_color(0.0, 1.0).unwrap(), "ffff0000");
    }

    #[test]
    fn max_maps_to_pure_blue() {
        assert_eq!(heat_color(90.0, 90.0).unwrap(), "ff0000ff");
        assert_eq!(heat_color(0.25, 0.25).unwrap(), "ff0000ff");
    }

    #[test]
    fn values_above_max_clip() {
        let at_max = heat_color(50.0, 50.0).unwrap();
        assert_eq!(heat_color(120.0, 50.0).unwrap(), at_max);
    }

    #[test]
    fn low_values_stay_near_red() {
        // 10/90 of the sweep lands in the first (red-to-yellow) sector.
        assert_eq!(heat_color(10.0, 90.0).unwrap(), "ffff7100");
    }

    #[test]
    fn midpoint_is_green() {
        // Half the sweep is a third of the wheel: pure green.
        assert_eq!(heat_color(45.0, 90.0).unwrap(), "ff00ff00");
    }

    #[test]
    fn negative_hue_fails_fast() {
        assert!(matches!(
            heat_color(-1.0, 90.0),
            Err(PlotError::Internal(_))
        ));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        assert!(heat_color(1.0, 0.0).is_err());
        assert!(heat_color(1.0, -4.0).is_err());
    }
}
