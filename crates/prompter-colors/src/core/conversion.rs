use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the floating point coordinates to 24-bit representation.
///
/// This function rounds half away from zero and clamps to `0x00..=0xff`.
#[inline]
fn to_24bit(rgb: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    }

    [convert(rgb[0]), convert(rgb[1]), convert(rgb[2])]
}

/// Convert a unit fraction to a percentage between 0 and 100.
#[inline]
pub(crate) fn to_percent(value: Float) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue in degrees `0..360` for chromatic RGB coordinates with the
/// given maximum and minimum.
fn to_hue(rgb: &[Float; 3], max: Float, min: Float) -> Float {
    let [r, g, b] = *rgb;
    let delta = max - min;

    let sextant = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let hue = sextant * 60.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Place chroma and the second largest component into the hue's sextant and
/// lift all three components by the given offset.
fn from_chroma(hue: Float, chroma: Float, offset: Float) -> [u8; 3] {
    let sextant = hue / 60.0;
    let x = chroma * (1.0 - (sextant % 2.0 - 1.0).abs());

    let [r, g, b] = match (sextant.floor() as i64).rem_euclid(6) {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    to_24bit(&[r + offset, g + offset, b + offset])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB to hue, saturation, and value.
///
/// The hue is in degrees `0..360`, saturation and value are unit fractions.
/// Achromatic colors have hue and saturation zero.
pub(crate) fn rgb_to_hsv(rgb: &[u8; 3]) -> [Float; 3] {
    let rgb = from_24bit(rgb);
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);

    if max == min {
        return [0.0, 0.0, max];
    }

    [to_hue(&rgb, max, min), (max - min) / max, max]
}

/// Convert hue in degrees plus unit saturation and value to 24-bit RGB.
pub(crate) fn hsv_to_rgb(hsv: &[Float; 3]) -> [u8; 3] {
    let [hue, saturation, value] = *hsv;
    let chroma = value * saturation;
    from_chroma(hue, chroma, value - chroma)
}

/// Convert 24-bit RGB to hue, saturation, and lightness.
///
/// The hue is in degrees `0..360`, saturation and lightness are unit
/// fractions. Achromatic colors have hue and saturation zero.
pub(crate) fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let rgb = from_24bit(rgb);
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness];
    }

    let delta = max - min;
    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [to_hue(&rgb, max, min), saturation, lightness]
}

/// Convert hue in degrees plus unit saturation and lightness to 24-bit RGB.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let [hue, saturation, lightness] = *hsl;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    from_chroma(hue, chroma, lightness - chroma / 2.0)
}

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsv(&[255, 0, 0]), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0, 255, 0]), [120.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv(&[0, 0, 255]), [240.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsl(&[255, 0, 255]), [300.0, 1.0, 0.5]);

        assert_eq!(hsv_to_rgb(&[60.0, 1.0, 1.0]), [255, 255, 0]);
        assert_eq!(hsv_to_rgb(&[180.0, 1.0, 1.0]), [0, 255, 255]);
        assert_eq!(hsl_to_rgb(&[0.0, 1.0, 0.5]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(&[240.0, 1.0, 0.25]), [0, 0, 128]);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hsv(&[0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl(&[255, 255, 255]), [0.0, 0.0, 1.0]);
        assert_eq!(hsv_to_rgb(&[200.0, 0.0, 0.5]), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(&[17.0, 0.0, 1.0]), [255, 255, 255]);
    }
}
