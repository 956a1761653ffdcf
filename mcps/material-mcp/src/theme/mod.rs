//! Theme assembly
//!
//! [`ThemeEngine::generate_theme`] runs the whole pipeline for one seed:
//! palettes, light (and optionally dark) schemes, accessibility reports and
//! the serialized CSS / Tailwind text. Nothing is cached between calls.

mod css;
mod tailwind;

use std::sync::{Arc, LazyLock};

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::{Argb, ColorSpace, HctColorSpace};
use crate::contrast::{ContrastValidator, WcagLevel};
use crate::error::ColorResult;
use crate::report::{generate_accessibility_report, AccessibilityReport};
use crate::scheme::{build_scheme, ColorScheme, SchemeMode};
use crate::tonal::{generate_palette, CorePalettes};

pub use css::render_css;
pub use tailwind::render_tailwind;

pub const DEFAULT_THEME_NAME: &str = "custom";

static NAME_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("Invalid regex"));

/// Which serialized texts to produce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Css,
    Tailwind,
    Both,
}

impl OutputFormat {
    pub fn includes_tailwind(self) -> bool {
        matches!(self, OutputFormat::Tailwind | OutputFormat::Both)
    }
}

/// Lowercase and replace anything outside `[a-z0-9-]` with `-`
pub fn sanitize_name(name: &str) -> String {
    NAME_DISALLOWED
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Inputs to [`ThemeEngine::generate_theme`]
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOptions {
    pub seed_color: String,
    pub name: Option<String>,
    pub dark_mode: bool,
    pub output_format: OutputFormat,
    /// Accepted and echoed back; does not alter palette derivation
    pub contrast_level: Option<f64>,
}

impl ThemeOptions {
    pub fn new(seed_color: impl Into<String>) -> Self {
        Self {
            seed_color: seed_color.into(),
            name: None,
            dark_mode: true,
            output_format: OutputFormat::Css,
            contrast_level: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_contrast_level(mut self, contrast_level: f64) -> Self {
        self.contrast_level = Some(contrast_level);
        self
    }
}

/// Canonical stops of every axis, tone-ascending
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePalettes {
    pub primary: Vec<Argb>,
    pub secondary: Vec<Argb>,
    pub tertiary: Vec<Argb>,
    pub neutral: Vec<Argb>,
    pub neutral_variant: Vec<Argb>,
    pub error: Vec<Argb>,
}

impl From<&CorePalettes> for ThemePalettes {
    fn from(palettes: &CorePalettes) -> Self {
        Self {
            primary: palettes.primary.canonical(),
            secondary: palettes.secondary.canonical(),
            tertiary: palettes.tertiary.canonical(),
            neutral: palettes.neutral.canonical(),
            neutral_variant: palettes.neutral_variant.canonical(),
            error: palettes.error.canonical(),
        }
    }
}

/// Combined verdict plus the per-mode reports it was derived from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeAccessibility {
    pub wcag_compliance: WcagLevel,
    pub light_theme: AccessibilityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<AccessibilityReport>,
    pub recommendations: Vec<String>,
}

impl ThemeAccessibility {
    /// Worst rating wins; recommendations are prefixed with their mode
    pub fn combine(light: AccessibilityReport, dark: Option<AccessibilityReport>) -> Self {
        let wcag_compliance = dark
            .as_ref()
            .map_or(light.overall_rating, |dark| {
                light.overall_rating.min(dark.overall_rating)
            });

        let mut recommendations: Vec<String> = light
            .recommendations
            .iter()
            .map(|rec| format!("Light theme: {}", rec))
            .collect();
        if let Some(dark) = &dark {
            recommendations.extend(
                dark.recommendations
                    .iter()
                    .map(|rec| format!("Dark theme: {}", rec)),
            );
        }

        Self {
            wcag_compliance,
            light_theme: light,
            dark_theme: dark,
            recommendations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTheme {
    pub name: String,
    pub seed_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_level: Option<f64>,
    pub palette: ThemePalettes,
    pub css: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<String>,
    pub accessibility: ThemeAccessibility,
}

/// Stateless theme pipeline over a [`ColorSpace`]
#[derive(Debug, Clone)]
pub struct ThemeEngine {
    validator: ContrastValidator,
}

impl ThemeEngine {
    pub fn new(space: Arc<dyn ColorSpace>) -> Self {
        Self {
            validator: ContrastValidator::new(space),
        }
    }

    pub fn space(&self) -> &Arc<dyn ColorSpace> {
        self.validator.space()
    }

    pub fn validator(&self) -> &ContrastValidator {
        &self.validator
    }

    /// Accessibility report for a resolved scheme, using measured role tones
    pub fn scheme_report(&self, scheme: &ColorScheme) -> ColorResult<AccessibilityReport> {
        let tones = scheme.report_tones(self.space().as_ref())?;
        generate_accessibility_report(&self.validator, &tones)
    }

    pub fn generate_theme(&self, options: &ThemeOptions) -> ColorResult<GeneratedTheme> {
        // Malformed seeds fail here, before any palette work
        let seed = Argb::from_hex(&options.seed_color)?;

        let name = options
            .name
            .as_deref()
            .map(sanitize_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());

        tracing::info!(
            seed = %seed,
            theme = %name,
            dark_mode = options.dark_mode,
            output_format = ?options.output_format,
            "Generating theme"
        );

        let palettes = generate_palette(self.space(), seed);
        let light = build_scheme(&palettes, SchemeMode::Light)?;
        let dark = options
            .dark_mode
            .then(|| build_scheme(&palettes, SchemeMode::Dark))
            .transpose()?;

        let light_report = self.scheme_report(&light)?;
        let dark_report = dark
            .as_ref()
            .map(|scheme| self.scheme_report(scheme))
            .transpose()?;

        let css = render_css(&name, &palettes, &light, dark.as_ref());
        let tailwind = options
            .output_format
            .includes_tailwind()
            .then(|| render_tailwind(&name, &palettes));

        let accessibility = ThemeAccessibility::combine(light_report, dark_report);

        tracing::debug!(
            theme = %name,
            compliance = %accessibility.wcag_compliance,
            recommendations = accessibility.recommendations.len(),
            "Theme generated"
        );

        Ok(GeneratedTheme {
            name,
            seed_color: options.seed_color.clone(),
            contrast_level: options.contrast_level,
            palette: ThemePalettes::from(&palettes),
            css,
            tailwind,
            accessibility,
        })
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(Arc::new(HctColorSpace::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::testing::LinearColorSpace;
    use crate::error::ColorError;
    use crate::report::AAA_NOTE;

    fn linear_engine() -> ThemeEngine {
        ThemeEngine::new(Arc::new(LinearColorSpace))
    }

    fn report(rating: WcagLevel, recommendations: &[&str]) -> AccessibilityReport {
        AccessibilityReport {
            overall_rating: rating,
            combinations: Vec::new(),
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("My Theme!"), "my-theme-");
        assert_eq!(sanitize_name("ocean-blue-2"), "ocean-blue-2");
        assert_eq!(sanitize_name("Ünïcode"), "-n-code");
    }

    #[test]
    fn test_combine_takes_worst_rating() {
        let combined = ThemeAccessibility::combine(
            report(WcagLevel::Aaa, &["a"]),
            Some(report(WcagLevel::Aa, &["b"])),
        );
        assert_eq!(combined.wcag_compliance, WcagLevel::Aa);
        assert_eq!(
            combined.recommendations,
            vec!["Light theme: a".to_string(), "Dark theme: b".to_string()]
        );

        let failing = ThemeAccessibility::combine(
            report(WcagLevel::Fail, &[]),
            Some(report(WcagLevel::Aaa, &[])),
        );
        assert_eq!(failing.wcag_compliance, WcagLevel::Fail);
    }

    #[test]
    fn test_combine_light_only() {
        let combined = ThemeAccessibility::combine(report(WcagLevel::Aaa, &[AAA_NOTE]), None);
        assert_eq!(combined.wcag_compliance, WcagLevel::Aaa);
        assert!(combined.dark_theme.is_none());
        assert_eq!(combined.recommendations.len(), 1);
    }

    #[test]
    fn test_invalid_seed_fails_without_output() {
        let result = linear_engine().generate_theme(&ThemeOptions::new("bad-color"));
        assert_eq!(
            result.unwrap_err(),
            ColorError::InvalidColorInput("bad-color".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        let theme = linear_engine()
            .generate_theme(&ThemeOptions::new("#6450a4"))
            .unwrap();
        assert_eq!(theme.name, DEFAULT_THEME_NAME);
        assert!(theme.tailwind.is_none());
        assert!(theme.accessibility.dark_theme.is_some());
        assert!(theme.css.contains("[data-theme=\"custom-dark\"]"));
        assert_eq!(theme.palette.primary.len(), 13);
        assert_eq!(theme.palette.neutral_variant.len(), 13);
        assert!(theme.contrast_level.is_none());
    }

    #[test]
    fn test_options_are_honoured() {
        let options = ThemeOptions::new("#6450a4")
            .with_name("Brand Colors")
            .with_dark_mode(false)
            .with_output_format(OutputFormat::Both)
            .with_contrast_level(0.5);
        let theme = linear_engine().generate_theme(&options).unwrap();

        assert_eq!(theme.name, "brand-colors");
        assert_eq!(theme.contrast_level, Some(0.5));
        assert!(theme.tailwind.unwrap().contains("md-primary"));
        assert!(theme.accessibility.dark_theme.is_none());
        assert!(!theme.css.contains("prefers-color-scheme"));
        assert!(theme
            .accessibility
            .recommendations
            .iter()
            .all(|rec| rec.starts_with("Light theme: ")));
    }

    #[test]
    fn test_empty_name_falls_back() {
        let options = ThemeOptions::new("#6450a4").with_name("");
        let theme = linear_engine().generate_theme(&options).unwrap();
        assert_eq!(theme.name, DEFAULT_THEME_NAME);
    }

    #[test]
    fn test_output_format_serde() {
        assert_eq!(
            serde_json::from_str::<OutputFormat>("\"both\"").unwrap(),
            OutputFormat::Both
        );
        assert!(OutputFormat::Tailwind.includes_tailwind());
        assert!(!OutputFormat::Css.includes_tailwind());
    }
}
