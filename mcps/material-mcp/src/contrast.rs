//! WCAG contrast validation on perceptual tones
//!
//! Ratios come from the [`ColorSpace`]'s luminance-by-tone function. Besides
//! plain validation this module searches for a foreground tone that reaches a
//! target ratio against a fixed background, in two stages:
//!
//! 1. [`ContrastValidator::try_find_tone`] only succeeds when the target is
//!    reachable inside [0, 100].
//! 2. [`ContrastValidator::find_closest_tone`] always yields a tone, falling
//!    back to the extreme of the search direction.
//!
//! [`ContrastValidator::find_accessible_foreground`] chains both so it never
//! comes back empty; callers compare `achieved_ratio` against their target.

use std::fmt;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::{ratio_of_luminances, ColorSpace, Tone};
use crate::error::{ColorError, ColorResult};

// ============================================================================
// Thresholds
// ============================================================================

/// WCAG AA, normal text
pub const AA_NORMAL: f64 = 4.5;
/// WCAG AA, large text
pub const AA_LARGE: f64 = 3.0;
/// WCAG AAA, normal text
pub const AAA_NORMAL: f64 = 7.0;
/// WCAG AAA, large text
pub const AAA_LARGE: f64 = 4.5;
/// Floor for any interactive element
pub const MINIMUM: f64 = 3.0;
/// Black on white
pub const MAX_RATIO: f64 = 21.0;

/// Text at or above this size counts as large
pub const LARGE_TEXT_PX: f64 = 24.0;
/// Bold text at or above this size counts as large
pub const LARGE_BOLD_TEXT_PX: f64 = 18.5;

/// Allowed undershoot of the realised ratio in the safe search
const SEARCH_TOLERANCE: f64 = 0.04;
/// Nudge applied to a found tone to absorb rounding downstream
const TONE_NUDGE: f64 = 0.4;

pub const RECOMMEND_LARGE_TEXT: &str =
    "Use only for large text (18pt+/24px+ or 14pt+/18.5px+ bold)";
pub const RECOMMEND_DECORATIVE: &str =
    "Use only for decorative elements or adjust colors for better contrast";
pub const RECOMMEND_ADJUST: &str = "Colors fail all WCAG requirements. Adjust immediately.";

// ============================================================================
// Result types
// ============================================================================

/// Overall WCAG level, ordered worst to best
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum WcagLevel {
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Fail => "FAIL",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which thresholds a ratio clears
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagPasses {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl WcagPasses {
    fn for_ratio(ratio: f64) -> Self {
        Self {
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}

/// Outcome of validating one foreground/background pair
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Rounded to two decimals; flags are computed on the exact ratio
    pub ratio: f64,
    pub passes: WcagPasses,
    pub level: WcagLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Direction of a tone search relative to the background
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDirection {
    Lighter,
    Darker,
}

/// How the accessible tone was obtained
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentMethod {
    Lighter,
    Darker,
    None,
}

impl From<SearchDirection> for AdjustmentMethod {
    fn from(direction: SearchDirection) -> Self {
        match direction {
            SearchDirection::Lighter => AdjustmentMethod::Lighter,
            SearchDirection::Darker => AdjustmentMethod::Darker,
        }
    }
}

/// Best-effort foreground tone for a background
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibleColor {
    pub original_tone: f64,
    pub adjusted_tone: f64,
    pub achieved_ratio: f64,
    pub method: AdjustmentMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSizeCategory {
    Small,
    Large,
}

/// Contrast verdict for a specific text size
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSizeValidation {
    pub is_accessible: bool,
    pub text_size_category: TextSizeCategory,
    pub wcag_level: WcagLevel,
    pub required_ratio: f64,
}

/// WCAG large-text rule: 24px and up, or 18.5px and up when bold
pub fn is_large_text(font_size_px: f64, is_bold: bool) -> bool {
    font_size_px >= LARGE_TEXT_PX || (font_size_px >= LARGE_BOLD_TEXT_PX && is_bold)
}

fn classify(ratio: f64) -> (WcagPasses, WcagLevel, Option<String>) {
    let passes = WcagPasses::for_ratio(ratio);

    if passes.aaa_normal {
        return (passes, WcagLevel::Aaa, None);
    }
    if passes.aa_normal {
        return (passes, WcagLevel::Aa, None);
    }

    let recommendation = if passes.aa_large {
        RECOMMEND_LARGE_TEXT
    } else if passes.aaa_large || ratio >= MINIMUM {
        RECOMMEND_DECORATIVE
    } else {
        RECOMMEND_ADJUST
    };

    (passes, WcagLevel::Fail, Some(recommendation.to_string()))
}

fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

// ============================================================================
// Validator
// ============================================================================

/// Contrast checks backed by a [`ColorSpace`]
#[derive(Clone, Debug)]
pub struct ContrastValidator {
    space: Arc<dyn ColorSpace>,
}

impl ContrastValidator {
    pub fn new(space: Arc<dyn ColorSpace>) -> Self {
        Self { space }
    }

    pub fn space(&self) -> &Arc<dyn ColorSpace> {
        &self.space
    }

    /// Exact ratio between two validated tones
    pub fn ratio(&self, foreground: Tone, background: Tone) -> f64 {
        self.space
            .contrast_ratio_by_tone(foreground.value(), background.value())
    }

    /// Classify a foreground/background pair against the WCAG thresholds
    pub fn validate_contrast(&self, foreground: f64, background: f64) -> ColorResult<ContrastResult> {
        let ratio = self.ratio(Tone::new(foreground)?, Tone::new(background)?);
        let (passes, level, recommendation) = classify(ratio);

        Ok(ContrastResult {
            ratio: round_ratio(ratio),
            passes,
            level,
            recommendation,
        })
    }

    /// Tone reaching `ratio` against `background` in `direction`, if one exists
    /// inside [0, 100]
    pub fn try_find_tone(
        &self,
        background: Tone,
        ratio: f64,
        direction: SearchDirection,
    ) -> Option<f64> {
        let background_y = self.space.luminance_from_tone(background.value());

        let (target_y, nudge) = match direction {
            SearchDirection::Lighter => (ratio * (background_y + 5.0) - 5.0, TONE_NUDGE),
            SearchDirection::Darker => ((background_y + 5.0) / ratio - 5.0, -TONE_NUDGE),
        };

        let realised = ratio_of_luminances(target_y, background_y);
        if realised < ratio && (realised - ratio).abs() > SEARCH_TOLERANCE {
            return None;
        }

        let tone = self.space.tone_from_luminance(target_y) + nudge;
        (0.0..=100.0).contains(&tone).then_some(tone)
    }

    /// Like [`Self::try_find_tone`], but settles for the direction's extreme
    /// when the target is out of reach
    pub fn find_closest_tone(&self, background: Tone, ratio: f64, direction: SearchDirection) -> f64 {
        self.try_find_tone(background, ratio, direction)
            .unwrap_or(match direction {
                SearchDirection::Lighter => Tone::WHITE.value(),
                SearchDirection::Darker => Tone::BLACK.value(),
            })
    }

    /// Find a foreground tone for `background` that reaches `target_ratio`
    ///
    /// Searches the preferred direction first, then the other one; if neither
    /// reaches the target, returns whichever extreme gives the higher ratio.
    pub fn find_accessible_foreground(
        &self,
        background: f64,
        target_ratio: f64,
        prefer_darker: bool,
    ) -> ColorResult<AccessibleColor> {
        let background = Tone::new(background)?;
        if !target_ratio.is_finite() || !(1.0..=MAX_RATIO).contains(&target_ratio) {
            return Err(ColorError::InvalidContrastRatio(target_ratio));
        }

        let original_tone = if prefer_darker { 20.0 } else { 80.0 };
        let ratio_of = |tone: f64| {
            self.space
                .contrast_ratio_by_tone(tone, background.value())
        };

        // Every pairing satisfies a 1:1 target
        if target_ratio <= 1.0 {
            return Ok(AccessibleColor {
                original_tone,
                adjusted_tone: original_tone,
                achieved_ratio: ratio_of(original_tone),
                method: AdjustmentMethod::None,
            });
        }

        let order = if prefer_darker {
            [SearchDirection::Darker, SearchDirection::Lighter]
        } else {
            [SearchDirection::Lighter, SearchDirection::Darker]
        };

        for direction in order {
            if let Some(tone) = self.try_find_tone(background, target_ratio, direction) {
                return Ok(AccessibleColor {
                    original_tone,
                    adjusted_tone: tone,
                    achieved_ratio: ratio_of(tone),
                    method: direction.into(),
                });
            }
        }

        let lighter = self.find_closest_tone(background, target_ratio, SearchDirection::Lighter);
        let darker = self.find_closest_tone(background, target_ratio, SearchDirection::Darker);
        let (lighter_ratio, darker_ratio) = (ratio_of(lighter), ratio_of(darker));

        tracing::debug!(
            background = background.value(),
            target_ratio,
            lighter_ratio,
            darker_ratio,
            "Target contrast unreachable, using closest tone"
        );

        let (adjusted_tone, achieved_ratio, method) = if lighter_ratio >= darker_ratio {
            (lighter, lighter_ratio, AdjustmentMethod::Lighter)
        } else {
            (darker, darker_ratio, AdjustmentMethod::Darker)
        };

        Ok(AccessibleColor {
            original_tone,
            adjusted_tone,
            achieved_ratio,
            method,
        })
    }

    /// Validate a pair for a concrete text size
    pub fn validate_for_text_size(
        &self,
        foreground: f64,
        background: f64,
        font_size_px: f64,
        is_bold: bool,
    ) -> ColorResult<TextSizeValidation> {
        let validation = self.validate_contrast(foreground, background)?;
        let large = is_large_text(font_size_px, is_bold);

        Ok(TextSizeValidation {
            is_accessible: if large {
                validation.passes.aa_large
            } else {
                validation.passes.aa_normal
            },
            text_size_category: if large {
                TextSizeCategory::Large
            } else {
                TextSizeCategory::Small
            },
            wcag_level: validation.level,
            required_ratio: if large { AA_LARGE } else { AA_NORMAL },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::testing::LinearColorSpace;
    use crate::color::HctColorSpace;

    /// Luminance equals tone, so ratios are (max + 5) / (min + 5)
    fn linear() -> ContrastValidator {
        ContrastValidator::new(Arc::new(LinearColorSpace))
    }

    fn lab() -> ContrastValidator {
        ContrastValidator::new(Arc::new(HctColorSpace::new()))
    }

    #[test]
    fn test_classification_boundaries() {
        let v = linear();

        let aaa = v.validate_contrast(30.0, 0.0).unwrap();
        assert_eq!(aaa.ratio, 7.0);
        assert_eq!(aaa.level, WcagLevel::Aaa);
        assert!(aaa.recommendation.is_none());

        let aa = v.validate_contrast(17.5, 0.0).unwrap();
        assert_eq!(aa.ratio, 4.5);
        assert_eq!(aa.level, WcagLevel::Aa);
        assert!(!aa.passes.aaa_normal);
        assert!(aa.passes.aaa_large);

        let large_only = v.validate_contrast(12.5, 0.0).unwrap();
        assert_eq!(large_only.level, WcagLevel::Fail);
        assert_eq!(large_only.recommendation.as_deref(), Some(RECOMMEND_LARGE_TEXT));

        let failing = v.validate_contrast(5.0, 0.0).unwrap();
        assert_eq!(failing.ratio, 2.0);
        assert_eq!(failing.recommendation.as_deref(), Some(RECOMMEND_ADJUST));
    }

    #[test]
    fn test_equal_tones_fail_with_recommendation() {
        let result = lab().validate_contrast(50.0, 50.0).unwrap();
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.level, WcagLevel::Fail);
        assert!(!result.recommendation.unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_tones_rejected() {
        let v = lab();
        assert_eq!(
            v.validate_contrast(-1.0, 50.0),
            Err(ColorError::ToneOutOfRange(-1.0))
        );
        assert_eq!(
            v.validate_contrast(50.0, 100.1),
            Err(ColorError::ToneOutOfRange(100.1))
        );
        assert!(v.find_accessible_foreground(150.0, 4.5, true).is_err());
        assert!(v.validate_for_text_size(50.0, -3.0, 16.0, false).is_err());
    }

    #[test]
    fn test_symmetry_self_contrast_and_level_consistency() {
        let v = lab();
        for a in (0..=100).step_by(5) {
            for b in (0..=100).step_by(5) {
                let (a, b) = (f64::from(a), f64::from(b));
                let forward = v.validate_contrast(a, b).unwrap();
                let backward = v.validate_contrast(b, a).unwrap();
                assert_eq!(forward.ratio, backward.ratio);
                assert!(forward.ratio >= 1.0);
                if forward.level == WcagLevel::Aaa {
                    assert!(forward.passes.aa_normal);
                }
            }
            let own = v.validate_contrast(f64::from(a), f64::from(a)).unwrap();
            assert_eq!(own.ratio, 1.0);
        }
    }

    #[test]
    fn test_tone_40_against_white() {
        let result = lab().validate_contrast(100.0, 40.0).unwrap();
        assert!((result.ratio - 6.46).abs() < 0.02);
        assert_eq!(result.level, WcagLevel::Aa);
    }

    #[test]
    fn test_safe_search() {
        let v = linear();
        let black = Tone::BLACK;

        let lighter = v.try_find_tone(black, 4.5, SearchDirection::Lighter).unwrap();
        assert!((lighter - 17.9).abs() < 1e-9);

        // nothing is darker than black
        assert_eq!(v.try_find_tone(black, 4.5, SearchDirection::Darker), None);
        assert_eq!(v.find_closest_tone(black, 4.5, SearchDirection::Darker), 0.0);
        assert_eq!(
            v.find_closest_tone(Tone::WHITE, 4.5, SearchDirection::Lighter),
            100.0
        );
    }

    #[test]
    fn test_prefers_requested_direction() {
        let v = lab();

        let darker = v.find_accessible_foreground(90.0, AA_NORMAL, true).unwrap();
        assert_eq!(darker.method, AdjustmentMethod::Darker);
        assert_eq!(darker.original_tone, 20.0);
        assert!(darker.adjusted_tone < 90.0);
        assert!(darker.achieved_ratio >= AA_NORMAL);

        let lighter = v.find_accessible_foreground(10.0, AA_NORMAL, false).unwrap();
        assert_eq!(lighter.method, AdjustmentMethod::Lighter);
        assert_eq!(lighter.original_tone, 80.0);
        assert!(lighter.adjusted_tone > 10.0);
        assert!(lighter.achieved_ratio >= AA_NORMAL);
    }

    #[test]
    fn test_falls_back_to_other_direction() {
        // nothing darker than tone 5 reaches 4.5, lighter does
        let result = lab().find_accessible_foreground(5.0, AA_NORMAL, true).unwrap();
        assert_eq!(result.method, AdjustmentMethod::Lighter);
        assert!(result.achieved_ratio >= AA_NORMAL);
    }

    #[test]
    fn test_unreachable_target_returns_best_effort() {
        let result = lab().find_accessible_foreground(50.0, MAX_RATIO, true).unwrap();
        assert_eq!(result.method, AdjustmentMethod::Darker);
        assert_eq!(result.adjusted_tone, 0.0);
        assert!(result.achieved_ratio < MAX_RATIO);
    }

    #[test]
    fn test_always_returns_tone_in_range() {
        let v = lab();
        for background in 0..=100 {
            for target in [1.0, 1.5, 3.0, 4.5, 7.0, 10.0, 15.0, 21.0] {
                for prefer_darker in [true, false] {
                    let result = v
                        .find_accessible_foreground(f64::from(background), target, prefer_darker)
                        .unwrap();
                    assert!(
                        (0.0..=100.0).contains(&result.adjusted_tone),
                        "bg {background} target {target}: {}",
                        result.adjusted_tone
                    );
                    assert!(result.achieved_ratio >= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_trivial_target_keeps_original() {
        let result = lab().find_accessible_foreground(40.0, 1.0, false).unwrap();
        assert_eq!(result.method, AdjustmentMethod::None);
        assert_eq!(result.adjusted_tone, 80.0);
    }

    #[test]
    fn test_invalid_target_ratio() {
        let v = lab();
        assert_eq!(
            v.find_accessible_foreground(50.0, 0.5, true),
            Err(ColorError::InvalidContrastRatio(0.5))
        );
        assert!(v.find_accessible_foreground(50.0, 22.0, true).is_err());
        assert!(v.find_accessible_foreground(50.0, f64::NAN, true).is_err());
    }

    #[test]
    fn test_large_text_rule() {
        assert!(is_large_text(24.0, false));
        assert!(is_large_text(18.5, true));
        assert!(!is_large_text(18.5, false));
        assert!(!is_large_text(18.0, true));
        assert!(!is_large_text(16.0, false));
    }

    #[test]
    fn test_text_size_changes_required_ratio() {
        let v = linear();
        // ratio 3.5: enough for large text only
        let small = v.validate_for_text_size(12.5, 0.0, 16.0, false).unwrap();
        assert!(!small.is_accessible);
        assert_eq!(small.text_size_category, TextSizeCategory::Small);
        assert_eq!(small.required_ratio, AA_NORMAL);

        let large = v.validate_for_text_size(12.5, 0.0, 24.0, false).unwrap();
        assert!(large.is_accessible);
        assert_eq!(large.text_size_category, TextSizeCategory::Large);
        assert_eq!(large.required_ratio, AA_LARGE);
        assert_eq!(large.wcag_level, WcagLevel::Fail);
    }

    #[test]
    fn test_level_ordering() {
        assert!(WcagLevel::Fail < WcagLevel::Aa);
        assert!(WcagLevel::Aa < WcagLevel::Aaa);
        assert_eq!(
            serde_json::to_string(&WcagLevel::Fail).unwrap(),
            "\"FAIL\""
        );
    }
}
