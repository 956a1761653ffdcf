//! Accessibility report over the key foreground/background role pairs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::contrast::{ContrastResult, ContrastValidator, WcagLevel};
use crate::error::ColorResult;

pub const AA_UPGRADE_NOTE: &str =
    "All combinations pass WCAG AA. Consider improving to AAA for enhanced accessibility.";
pub const AAA_NOTE: &str = "Excellent! All combinations pass WCAG AAA standards.";

/// Tones of the roles checked by the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemeTones {
    pub primary: f64,
    pub on_primary: f64,
    pub secondary: f64,
    pub on_secondary: f64,
    pub surface: f64,
    pub on_surface: f64,
    pub background: f64,
    pub on_background: f64,
    pub error: f64,
    pub on_error: f64,
}

impl SchemeTones {
    /// (pair name, foreground, background) in report order
    fn pairs(&self) -> [(&'static str, f64, f64); 5] {
        [
            ("Primary/OnPrimary", self.on_primary, self.primary),
            ("Secondary/OnSecondary", self.on_secondary, self.secondary),
            ("Surface/OnSurface", self.on_surface, self.surface),
            ("Background/OnBackground", self.on_background, self.background),
            ("Error/OnError", self.on_error, self.error),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub name: &'static str,
    pub foreground: f64,
    pub background: f64,
    pub validation: ContrastResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    pub overall_rating: WcagLevel,
    pub combinations: Vec<ReportEntry>,
    pub recommendations: Vec<String>,
}

/// Validate the five role pairs and roll them up into one rating
///
/// The overall rating is the worst individual level. Failing pairs contribute
/// their own recommendation; a clean AA or AAA result gets a single note.
pub fn generate_accessibility_report(
    validator: &ContrastValidator,
    tones: &SchemeTones,
) -> ColorResult<AccessibilityReport> {
    let combinations = tones
        .pairs()
        .into_iter()
        .map(|(name, foreground, background)| -> ColorResult<ReportEntry> {
            Ok(ReportEntry {
                name,
                foreground,
                background,
                validation: validator.validate_contrast(foreground, background)?,
            })
        })
        .collect::<ColorResult<Vec<_>>>()?;

    let overall_rating = combinations
        .iter()
        .map(|entry| entry.validation.level)
        .min()
        .unwrap_or(WcagLevel::Fail);

    let mut recommendations: Vec<String> = combinations
        .iter()
        .filter(|entry| entry.validation.level == WcagLevel::Fail)
        .filter_map(|entry| {
            entry
                .validation
                .recommendation
                .as_ref()
                .map(|rec| format!("{}: {}", entry.name, rec))
        })
        .collect();

    if recommendations.is_empty() {
        match overall_rating {
            WcagLevel::Aa => recommendations.push(AA_UPGRADE_NOTE.to_string()),
            WcagLevel::Aaa => recommendations.push(AAA_NOTE.to_string()),
            WcagLevel::Fail => {}
        }
    }

    Ok(AccessibilityReport {
        overall_rating,
        combinations,
        recommendations,
    })
}
