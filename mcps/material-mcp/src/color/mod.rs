//! Perceptual color primitives
//!
//! The color core never does color-space math directly. Everything it needs
//! (hue/chroma/tone extraction, tone-to-color projection, luminance by tone)
//! goes through the [`ColorSpace`] capability so palette derivation, scheme
//! binding and contrast validation can be exercised against any backend.
//!
//! The production backend is [`HctColorSpace`].

mod hct;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{ColorError, ColorResult};

pub use hct::HctColorSpace;

/// The 13 standard tone stops of a Material tonal palette, ascending
pub const CANONICAL_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid regex"));

// ============================================================================
// Argb
// ============================================================================

/// An opaque sRGB color packed as `0xAARRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Pack 8-bit channels into an opaque color
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Argb(0xFF00_0000 | (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue))
    }

    /// Parse a strict `#RRGGBB` hex string
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        if !HEX_COLOR.is_match(hex) {
            return Err(ColorError::InvalidColorInput(hex.to_string()));
        }

        let rgb = u32::from_str_radix(&hex[1..], 16)
            .map_err(|_| ColorError::InvalidColorInput(hex.to_string()))?;

        Ok(Argb(0xFF00_0000 | rgb))
    }

    pub fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// ============================================================================
// Tone / Hct
// ============================================================================

/// Perceptual lightness in [0, 100]: 0 is black, 100 is white
///
/// Construction validates the range; out-of-range values are rejected rather
/// than clamped.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Tone(f64);

impl Tone {
    pub const BLACK: Tone = Tone(0.0);
    pub const WHITE: Tone = Tone(100.0);

    pub fn new(value: f64) -> ColorResult<Self> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Tone(value))
        } else {
            Err(ColorError::ToneOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<u8> for Tone {
    /// Canonical stops are integers; anything above 100 saturates to white.
    fn from(value: u8) -> Self {
        Tone(f64::from(value.min(100)))
    }
}

/// Hue (degrees), chroma and tone of a color
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hct {
    pub hue: f64,
    pub chroma: f64,
    pub tone: f64,
}

// ============================================================================
// ColorSpace capability
// ============================================================================

/// Perceptual color primitive consumed by the color core
///
/// Implementations must be pure: the same inputs always yield the same output,
/// and `tone_to_argb` must keep perceptual lightness monotonic in `tone` for a
/// fixed hue and chroma.
pub trait ColorSpace: Send + Sync + fmt::Debug {
    /// Short identifier reported by the version tool
    fn name(&self) -> &'static str;

    /// Decompose a color into hue, chroma and tone
    fn hct_from_argb(&self, argb: Argb) -> Hct;

    /// Project a hue/chroma/tone triple into sRGB, reducing chroma as needed
    /// to stay in gamut while holding tone fixed
    fn tone_to_argb(&self, hue: f64, chroma: f64, tone: f64) -> Argb;

    /// Relative luminance Y in [0, 100] of a tone
    fn luminance_from_tone(&self, tone: f64) -> f64;

    /// Inverse of [`ColorSpace::luminance_from_tone`]; not clamped
    fn tone_from_luminance(&self, luminance: f64) -> f64;

    /// WCAG contrast ratio between two tones, in [1, 21]
    fn contrast_ratio_by_tone(&self, tone_a: f64, tone_b: f64) -> f64 {
        let y_a = self.luminance_from_tone(tone_a.clamp(0.0, 100.0));
        let y_b = self.luminance_from_tone(tone_b.clamp(0.0, 100.0));
        ratio_of_luminances(y_a, y_b)
    }
}

/// WCAG contrast ratio of two relative luminances on the 0-100 scale
pub fn ratio_of_luminances(y_a: f64, y_b: f64) -> f64 {
    let lighter = y_a.max(y_b);
    let darker = y_a.min(y_b);
    (lighter + 5.0) / (darker + 5.0)
}

// ============================================================================
// Test backend
// ============================================================================
