//! Color model: hex/RGB/HSV conversion and pure predicates over HSV triples.
//!
//! Everything here is stateless. HSV values are derived fresh from a hex
//! string on every scoring call and never cached. Malformed hex input
//! degrades to black rather than failing — callers must tolerate the
//! silently-defaulted `{0, 0, 0}`.

// ---------------------------------------------------------------------------
// Neutral bands
// ---------------------------------------------------------------------------

/// Saturation below which any hue reads as neutral (gray/white/black).
pub const NEUTRAL_SATURATION_MAX: f64 = 20.0;

/// Navy band: hue range treated as neutral at moderate saturation.
pub const NAVY_HUE_MIN: f64 = 210.0;
pub const NAVY_HUE_MAX: f64 = 240.0;
pub const NAVY_SATURATION_MAX: f64 = 60.0;

/// Beige/tan band: hue range treated as neutral at low-moderate saturation.
pub const BEIGE_HUE_MIN: f64 = 30.0;
pub const BEIGE_HUE_MAX: f64 = 50.0;
pub const BEIGE_SATURATION_MAX: f64 = 40.0;

// ---------------------------------------------------------------------------
// Hue-relationship thresholds
// ---------------------------------------------------------------------------

/// Lower bound of the "opposite hues" window for complementarity.
pub const COMPLEMENTARY_DIFF_MIN: f64 = 150.0;
/// Upper bound of the "opposite hues" window for complementarity.
pub const COMPLEMENTARY_DIFF_MAX: f64 = 210.0;
/// Maximum hue difference for two colors to count as analogous.
pub const ANALOGOUS_DIFF_MAX: f64 = 60.0;

// ---------------------------------------------------------------------------
// Value objects
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSV triple: hue in `[0, 360)` degrees (integer-rounded), saturation
/// and value as percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Parse a `#RRGGBB` (or `RRGGBB`) hex string, case-insensitive.
///
/// Any parse failure — wrong length, non-hex digits, empty input — yields
/// black instead of an error.
///
/// # Examples
///
/// ```
/// use fitcheck_core::color::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#FF8000").r, 255);
/// assert_eq!(hex_to_rgb("not a color").r, 0);
/// ```
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Rgb { r: 0, g: 0, b: 0 };
    }
    // Length and digit checks above make these parses infallible.
    let r = u8::from_str_radix(&digits[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&digits[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&digits[4..6], 16).unwrap_or(0);
    Rgb { r, g, b }
}

/// Standard RGB -> HSV conversion.
///
/// Hue is computed via the max-channel case split, rounded to the nearest
/// integer degree, and normalized into `[0, 360)`. Saturation and value are
/// percentages derived from the max/min channel spread.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let raw_hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let hue = raw_hue.round().rem_euclid(360.0);
    let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    let value = max * 100.0;

    Hsv {
        hue,
        saturation,
        value,
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether a color reads as neutral (safe to combine with anything).
///
/// True for low saturation regardless of hue, for the navy band at moderate
/// saturation, and for the beige/tan band at low-moderate saturation. The
/// three bands are fixed constants, not configurable.
pub fn is_neutral(hsv: Hsv) -> bool {
    if hsv.saturation < NEUTRAL_SATURATION_MAX {
        return true;
    }
    if (NAVY_HUE_MIN..=NAVY_HUE_MAX).contains(&hsv.hue) && hsv.saturation < NAVY_SATURATION_MAX {
        return true;
    }
    (BEIGE_HUE_MIN..=BEIGE_HUE_MAX).contains(&hsv.hue) && hsv.saturation < BEIGE_SATURATION_MAX
}

/// Whether two hues sit (approximately) opposite on the color wheel.
///
/// The `>= 330` / `<= 30` branches also admit near-identical hues; that
/// overlap is intentional and must be preserved as-is.
pub fn are_complementary(a: Hsv, b: Hsv) -> bool {
    let diff = (a.hue - b.hue).abs();
    (COMPLEMENTARY_DIFF_MIN..=COMPLEMENTARY_DIFF_MAX).contains(&diff)
        || diff >= 330.0
        || diff <= 30.0
}

/// Whether two hues are close enough to read as analogous.
pub fn are_analogous(a: Hsv, b: Hsv) -> bool {
    (a.hue - b.hue).abs() <= ANALOGOUS_DIFF_MAX
}

/// Tonal contrast between two colors, in `[0, 1]`.
///
/// `(|Δvalue| + |Δsaturation|) / 200`.
pub fn contrast(a: Hsv, b: Hsv) -> f64 {
    ((a.value - b.value).abs() + (a.saturation - b.saturation).abs()) / 200.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
