//! HSV → RGB conversion and the position colour wheel.

use embedded_graphics::pixelcolor::Rgb888;

use crate::position::Position;
use crate::tables::WHEEL_DEGREES_PER_POSITION;

/// Convert hue / saturation / value to an RGB colour.
///
/// * `hue` — degrees. Any finite value is wrapped into `[0, 360)`;
///   non-finite values are treated as 0.
/// * `saturation`, `value` — clamped to `[0, 1]` (NaN reads as 0).
///
/// Six-sector piecewise linear conversion keyed by `floor(hue / 60) mod 6`,
/// channels rounded to the nearest integer.
///
/// ```
/// use dial::{color::hsv_to_rgb, Rgb888};
///
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb888::new(255, 0, 0));
/// assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb888::new(0, 255, 0));
/// assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb888::new(0, 0, 255));
/// ```
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb888 {
    let s = unit(saturation);
    let v = unit(value);

    if s == 0.0 {
        let gray = to_channel(v);
        return Rgb888::new(gray, gray, gray);
    }

    let scaled = wrap_hue(hue) / 60.0;
    let sector = libm::floorf(scaled);
    let f = scaled - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    // `scaled` is in [0, 6), so the sector is 0..=5.
    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb888::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Fully saturated colour for a position, 22.5° of hue per detent.
pub fn wheel(position: Position) -> Rgb888 {
    hsv_to_rgb(position.get() as f32 * WHEEL_DEGREES_PER_POSITION, 1.0, 1.0)
}

fn unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue - libm::floorf(hue / 360.0) * 360.0;
    // Huge magnitudes lose precision in the subtraction above.
    if (0.0..360.0).contains(&wrapped) {
        wrapped
    } else {
        0.0
    }
}

fn to_channel(x: f32) -> u8 {
    (x * 255.0 + 0.5) as u8
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb888::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb888::new(0, 0, 255));
    }

    #[test]
    fn secondaries() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb888::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb888::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb888::new(255, 0, 255));
    }

    #[test]
    fn zero_saturation_is_gray() {
        for hue in [0.0, 45.0, 90.0, 200.0, 359.9] {
            assert_eq!(hsv_to_rgb(hue, 0.0, 1.0), Rgb888::new(255, 255, 255));
            assert_eq!(hsv_to_rgb(hue, 0.0, 0.5), Rgb888::new(128, 128, 128));
            assert_eq!(hsv_to_rgb(hue, 0.0, 0.0), Rgb888::new(0, 0, 0));
        }
    }

    #[test]
    fn zero_value_is_black() {
        assert_eq!(hsv_to_rgb(77.0, 1.0, 0.0), Rgb888::new(0, 0, 0));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(480.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn out_of_domain_inputs_are_clamped() {
        assert_eq!(hsv_to_rgb(0.0, 2.0, 7.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(f32::NAN, 1.0, 1.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(f32::INFINITY, 1.0, 1.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(0.0, f32::NAN, 1.0), Rgb888::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 1.0, -1.0), Rgb888::new(0, 0, 0));
    }

    #[test]
    fn mid_sector_interpolates() {
        // Hue 30° is halfway between red and yellow.
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), Rgb888::new(255, 128, 0));
    }

    #[test]
    fn huge_hues_stay_in_range() {
        assert_eq!(wrap_hue(-1.0e30), 0.0);
        assert_eq!(hsv_to_rgb(-1.0e30, 1.0, 1.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0e30, 1.0, 1.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(f32::MIN, 1.0, 1.0), Rgb888::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(f32::MAX, 0.0, 1.0), Rgb888::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(-1.0e-30, 1.0, 1.0), Rgb888::new(255, 0, 0));
    }

    #[test]
    fn wheel_starts_red_and_hits_primaries() {
        let p = |raw| Position::new(raw).unwrap();
        assert_eq!(wheel(p(0)), Rgb888::new(255, 0, 0));
        // 8 × 22.5° = 180° (cyan), 4 × 22.5° = 90°.
        assert_eq!(wheel(p(8)), Rgb888::new(0, 255, 255));
        assert_eq!(wheel(p(4)), Rgb888::new(128, 255, 0));
    }

    #[test]
    fn wheel_is_total() {
        for position in Position::ALL {
            let _ = wheel(position);
        }
    }
}
