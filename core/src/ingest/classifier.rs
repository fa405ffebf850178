use crate::prelude::LinkDirection;

/// Height-code band for uplink fixes, exclusive bounds. The asymmetric
/// bands are a fixed contract of the capture format.
const UP_BAND: (i64, i64) = (600, 900);
/// Height-code band for downlink fixes, exclusive bounds.
const DOWN_BAND: (i64, i64) = (-100, 100);

/// Height codes scale to display units by a fixed factor of 1000.
const HEIGHT_SCALE: f64 = 1000.0;

/// Derive the link direction and scaled height from a raw height code.
///
/// Codes outside both bands carry no usable link-direction signal; the
/// record is dropped as broken rather than clamped into a band.
pub fn classify(raw_height: i64) -> Option<(LinkDirection, f64)> {
    let scaled = raw_height as f64 * HEIGHT_SCALE;
    if raw_height > UP_BAND.0 && raw_height < UP_BAND.1 {
        Some((LinkDirection::Up, scaled))
    } else if raw_height > DOWN_BAND.0 && raw_height < DOWN_BAND.1 {
        Some((LinkDirection::Down, scaled))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uplink_band_is_exclusive() {
        assert_eq!(classify(700), Some((LinkDirection::Up, 700_000.0)));
        assert_eq!(classify(601), Some((LinkDirection::Up, 601_000.0)));
        assert_eq!(classify(600), None);
        assert_eq!(classify(900), None);
    }

    #[test]
    fn downlink_band_straddles_zero() {
        assert_eq!(classify(0), Some((LinkDirection::Down, 0.0)));
        assert_eq!(classify(-99), Some((LinkDirection::Down, -99_000.0)));
        assert_eq!(classify(-100), None);
        assert_eq!(classify(100), None);
    }

    #[test]
    fn codes_between_bands_are_broken() {
        assert_eq!(classify(300), None);
        assert_eq!(classify(1200), None);
        assert_eq!(classify(-500), None);
    }
}
