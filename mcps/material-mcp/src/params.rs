//! Parameter types for Material MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::SchemeTones;
use crate::scheme::SchemeMode;
use crate::theme::OutputFormat;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateThemeParams {
    #[schemars(description = "Seed color as a #RRGGBB hex string")]
    pub seed_color: String,

    #[schemars(description = "Theme name (lowercased, non [a-z0-9-] characters become '-')")]
    #[serde(default)]
    pub name: Option<String>,

    #[schemars(description = "Also emit a dark scheme and report (default true)")]
    #[serde(default)]
    pub dark_mode: Option<bool>,

    #[schemars(description = "Serialized output: css, tailwind or both (default css)")]
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    #[schemars(description = "Contrast level; echoed back, does not change the palette")]
    #[serde(default)]
    pub contrast_level: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePaletteParams {
    #[schemars(description = "Seed color as a #RRGGBB hex string")]
    pub seed_color: String,

    #[schemars(description = "Additional tones in [0, 100] to sample besides the 13 canonical stops")]
    #[serde(default)]
    pub extra_tones: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSchemeParams {
    #[schemars(description = "Seed color as a #RRGGBB hex string")]
    pub seed_color: String,

    #[schemars(description = "light or dark (default light)")]
    #[serde(default)]
    pub mode: Option<SchemeMode>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateContrastParams {
    #[schemars(description = "Foreground tone in [0, 100]")]
    pub foreground_tone: f64,

    #[schemars(description = "Background tone in [0, 100]")]
    pub background_tone: f64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindAccessibleColorParams {
    #[schemars(description = "Background tone in [0, 100]")]
    pub background_tone: f64,

    #[schemars(description = "Target contrast ratio in [1, 21] (default from config, 4.5)")]
    #[serde(default)]
    pub target_ratio: Option<f64>,

    #[schemars(description = "Search darker tones first (default from config, true)")]
    #[serde(default)]
    pub prefer_darker: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTextSizeParams {
    #[schemars(description = "Foreground tone in [0, 100]")]
    pub foreground_tone: f64,

    #[schemars(description = "Background tone in [0, 100]")]
    pub background_tone: f64,

    #[schemars(description = "Font size in px (default 16)")]
    #[serde(default)]
    pub font_size: Option<f64>,

    #[schemars(description = "Whether the text is bold (default false)")]
    #[serde(default)]
    pub is_bold: Option<bool>,
}

/// Either a seed color (report over its generated scheme) or explicit tones
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReportParams {
    #[schemars(description = "Seed color as a #RRGGBB hex string; mutually exclusive with tones")]
    #[serde(default)]
    pub seed_color: Option<String>,

    #[schemars(description = "Scheme mode used with seedColor (default light)")]
    #[serde(default)]
    pub mode: Option<SchemeMode>,

    #[schemars(description = "Explicit role tones; mutually exclusive with seedColor")]
    #[serde(default)]
    pub tones: Option<SchemeTones>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_and_defaults() {
        let params: GenerateThemeParams = serde_json::from_value(serde_json::json!({
            "seedColor": "#6750A4",
            "darkMode": false,
            "outputFormat": "both"
        }))
        .unwrap();
        assert_eq!(params.seed_color, "#6750A4");
        assert_eq!(params.dark_mode, Some(false));
        assert_eq!(params.output_format, Some(OutputFormat::Both));
        assert!(params.name.is_none());
        assert!(params.contrast_level.is_none());
    }

    #[test]
    fn test_report_params_accept_tones() {
        let params: AccessibilityReportParams = serde_json::from_value(serde_json::json!({
            "tones": {
                "primary": 40.0, "onPrimary": 100.0,
                "secondary": 40.0, "onSecondary": 100.0,
                "surface": 99.0, "onSurface": 10.0,
                "background": 99.0, "onBackground": 10.0,
                "error": 40.0, "onError": 100.0
            }
        }))
        .unwrap();
        assert!(params.seed_color.is_none());
        assert_eq!(params.tones.unwrap().on_surface, 10.0);
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let result: Result<GenerateThemeParams, _> = serde_json::from_value(serde_json::json!({
            "seedColor": "#6750A4",
            "outputFormat": "scss"
        }));
        assert!(result.is_err());
    }
}
