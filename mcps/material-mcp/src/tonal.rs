//! Tonal palette generation
//!
//! Derives the six Material tonal palettes from one seed color using the
//! core-palette rules: the seed's hue drives every chromatic axis, secondary
//! and tertiary are desaturated (tertiary is also rotated by 60 degrees), the
//! neutrals are near-achromatic and error is a fixed red.

use std::sync::Arc;

use serde::Serialize;

use crate::color::{Argb, ColorSpace, Hct, Tone, CANONICAL_TONES};
use crate::error::ColorResult;

const PRIMARY_MIN_CHROMA: f64 = 48.0;
const SECONDARY_CHROMA: f64 = 16.0;
const TERTIARY_HUE_SHIFT: f64 = 60.0;
const TERTIARY_CHROMA: f64 = 24.0;
const NEUTRAL_CHROMA: f64 = 4.0;
const NEUTRAL_VARIANT_CHROMA: f64 = 8.0;
const ERROR_HUE: f64 = 25.0;
const ERROR_CHROMA: f64 = 84.0;

/// One of the six color axes of a Material theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteAxis {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

impl PaletteAxis {
    pub const ALL: [PaletteAxis; 6] = [
        PaletteAxis::Primary,
        PaletteAxis::Secondary,
        PaletteAxis::Tertiary,
        PaletteAxis::Neutral,
        PaletteAxis::NeutralVariant,
        PaletteAxis::Error,
    ];

    /// Palette key used in `--md-sys-color-<key>-<tone>` variables
    pub fn palette_key(self) -> &'static str {
        match self {
            PaletteAxis::NeutralVariant => "neutralVariant",
            other => other.css_name(),
        }
    }

    /// Kebab-case name used for Tailwind keys
    pub fn css_name(self) -> &'static str {
        match self {
            PaletteAxis::Primary => "primary",
            PaletteAxis::Secondary => "secondary",
            PaletteAxis::Tertiary => "tertiary",
            PaletteAxis::Neutral => "neutral",
            PaletteAxis::NeutralVariant => "neutral-variant",
            PaletteAxis::Error => "error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteAxis::Primary => "Primary",
            PaletteAxis::Secondary => "Secondary",
            PaletteAxis::Tertiary => "Tertiary",
            PaletteAxis::Neutral => "Neutral",
            PaletteAxis::NeutralVariant => "Neutral Variant",
            PaletteAxis::Error => "Error",
        }
    }
}

/// A hue/chroma pair addressable at any tone in [0, 100]
#[derive(Clone, Debug)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    space: Arc<dyn ColorSpace>,
}

impl TonalPalette {
    pub fn new(space: Arc<dyn ColorSpace>, hue: f64, chroma: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            chroma: chroma.max(0.0),
            space,
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Color of this palette at `tone`
    pub fn tone(&self, tone: Tone) -> Argb {
        self.space.tone_to_argb(self.hue, self.chroma, tone.value())
    }

    /// The 13 canonical stops, tone-ascending
    pub fn canonical(&self) -> Vec<Argb> {
        CANONICAL_TONES
            .iter()
            .map(|&t| self.tone(Tone::from(t)))
            .collect()
    }
}

/// The six palettes derived from one seed
#[derive(Clone, Debug)]
pub struct CorePalettes {
    pub seed: Argb,
    pub seed_hct: Hct,
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl CorePalettes {
    pub fn palette(&self, axis: PaletteAxis) -> &TonalPalette {
        match axis {
            PaletteAxis::Primary => &self.primary,
            PaletteAxis::Secondary => &self.secondary,
            PaletteAxis::Tertiary => &self.tertiary,
            PaletteAxis::Neutral => &self.neutral,
            PaletteAxis::NeutralVariant => &self.neutral_variant,
            PaletteAxis::Error => &self.error,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaletteAxis, &TonalPalette)> + '_ {
        PaletteAxis::ALL
            .into_iter()
            .map(move |axis| (axis, self.palette(axis)))
    }
}

/// Derive all six palettes from a seed color
pub fn generate_palette(space: &Arc<dyn ColorSpace>, seed: Argb) -> CorePalettes {
    let seed_hct = space.hct_from_argb(seed);
    let hue = seed_hct.hue;
    let palette = |hue: f64, chroma: f64| TonalPalette::new(Arc::clone(space), hue, chroma);

    CorePalettes {
        seed,
        seed_hct,
        primary: palette(hue, seed_hct.chroma.max(PRIMARY_MIN_CHROMA)),
        secondary: palette(hue, SECONDARY_CHROMA),
        tertiary: palette(hue + TERTIARY_HUE_SHIFT, TERTIARY_CHROMA),
        neutral: palette(hue, NEUTRAL_CHROMA),
        neutral_variant: palette(hue, NEUTRAL_VARIANT_CHROMA),
        error: palette(ERROR_HUE, ERROR_CHROMA),
    }
}

/// Parse a `#RRGGBB` seed and derive its palettes
pub fn generate_palette_from_hex(space: &Arc<dyn ColorSpace>, seed: &str) -> ColorResult<CorePalettes> {
    let seed = Argb::from_hex(seed)?;
    Ok(generate_palette(space, seed))
}

// ============================================================================
// Serializable views
// ============================================================================

/// A single tone stop
#[derive(Debug, Clone, Serialize)]
pub struct ToneSwatch {
    pub tone: f64,
    pub color: Argb,
}

/// Serializable summary of one palette
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSnapshot {
    pub axis: PaletteAxis,
    pub hue: f64,
    pub chroma: f64,
    pub tones: Vec<ToneSwatch>,
}

impl PaletteSnapshot {
    /// Canonical stops plus any extra tones, sorted ascending without duplicates
    pub fn capture(axis: PaletteAxis, palette: &TonalPalette, extra: &[Tone]) -> Self {
        let mut stops: Vec<Tone> = CANONICAL_TONES.iter().map(|&t| Tone::from(t)).collect();
        stops.extend_from_slice(extra);
        stops.sort_by(|a, b| a.value().total_cmp(&b.value()));
        stops.dedup();

        Self {
            axis,
            hue: palette.hue(),
            chroma: palette.chroma(),
            tones: stops
                .into_iter()
                .map(|tone| ToneSwatch {
                    tone: tone.value(),
                    color: palette.tone(tone),
                })
                .collect(),
        }
    }
}
