//! HCT backend for [`ColorSpace`]
//!
//! Hue and chroma come from CAM16, tone is CIE L*. All conversions and the
//! gamut-mapping solver are delegated to the `material-colors` crate.

use material_colors::color::{lstar_from_y, y_from_lstar, Argb as McArgb};
use material_colors::hct::{Hct as McHct, HctSolver};

use super::{Argb, ColorSpace, Hct};

/// Production color space: Material's hue/chroma/tone model
#[derive(Debug, Default, Clone, Copy)]
pub struct HctColorSpace;

impl HctColorSpace {
    pub fn new() -> Self {
        Self
    }
}

fn to_material(argb: Argb) -> McArgb {
    McArgb::new(0xFF, argb.red(), argb.green(), argb.blue())
}

fn from_material(argb: McArgb) -> Argb {
    Argb::from_rgb(argb.red, argb.green, argb.blue)
}

impl ColorSpace for HctColorSpace {
    fn name(&self) -> &'static str {
        "hct"
    }

    fn hct_from_argb(&self, argb: Argb) -> Hct {
        let hct = McHct::new(to_material(argb));
        Hct {
            hue: hct.get_hue(),
            chroma: hct.get_chroma(),
            tone: hct.get_tone(),
        }
    }

    fn tone_to_argb(&self, hue: f64, chroma: f64, tone: f64) -> Argb {
        // The solver holds hue and tone and reduces chroma to the sRGB boundary
        from_material(HctSolver::solve_to_argb(hue, chroma.max(0.0), tone.clamp(0.0, 100.0)))
    }

    fn luminance_from_tone(&self, tone: f64) -> f64 {
        y_from_lstar(tone)
    }

    fn tone_from_luminance(&self, luminance: f64) -> f64 {
        lstar_from_y(luminance)
    }
}
