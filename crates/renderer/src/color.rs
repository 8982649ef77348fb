//! Intensity-to-color mapping via the HSL color wheel.

use heatmap_common::Rgb;

/// Convert an HSL color to RGB.
///
/// `h`, `s` and `l` are in `[0, 1]`; channels come back as rounded bytes.
/// Standard piecewise conversion: achromatic shortcut when saturation is
/// zero, otherwise the two-ramp blend evaluated at `h + 1/3`, `h`,
/// `h - 1/3` for red, green and blue.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_ramp(p, q, h + 1.0 / 3.0);
    let g = hue_ramp(p, q, h);
    let b = hue_ramp(p, q, h - 1.0 / 3.0);

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// One channel of the piecewise HSL blend, with the offset wrapped into
/// `[0, 1]` first.
fn hue_ramp(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Map an intensity to its gradient color.
///
/// `value` is clamped to `[0, max]`, then mapped linearly onto the hue
/// position `1 - (1 - hue) - value·hue/max` at full saturation and half
/// lightness. The single `hue` parameter controls both the direction and
/// the span of the gradient: 0.5 spans orange to green, 0.8 orange to
/// violet.
pub fn value_to_color(value: f32, hue: f32, max: f32) -> Rgb {
    let clamped = value.clamp(0.0, max);
    hsl_to_rgb(1.0 - (1.0 - hue) - clamped * hue / max, 1.0, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(0.9, 0.0, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_clamp_saturates() {
        let hue = 0.5;
        let max = 100.0;
        assert_eq!(
            value_to_color(200.0, hue, max),
            value_to_color(100.0, hue, max)
        );
        assert_eq!(value_to_color(-5.0, hue, max), value_to_color(0.0, hue, max));
    }

    #[test]
    fn test_gradient_endpoints() {
        // Zero maps to the hue position itself, max to hue position zero
        // (red end of the wheel).
        assert_eq!(value_to_color(100.0, 0.5, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(value_to_color(0.0, 0.5, 100.0), hsl_to_rgb(0.5, 1.0, 0.5));
    }

    #[test]
    fn test_distinct_midpoints() {
        let low = value_to_color(10.0, 0.5, 100.0);
        let high = value_to_color(90.0, 0.5, 100.0);
        assert_ne!(low, high);
    }
}
