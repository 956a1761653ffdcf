//! Tool handlers
//!
//! Each handler resolves optional arguments against the configured defaults,
//! runs the color core and serializes the result. Color errors caused by the
//! caller's input become `invalid_params`; anything else is `internal_error`.

use mcp_common::{
    internal_error, invalid_params, json_success, CallToolResult, IntoMcpError, McpError,
    McpResult, ResultExt,
};
use serde::Serialize;

use crate::color::{Argb, Hct, Tone};
use crate::config::MaterialConfig;
use crate::contrast::AccessibleColor;
use crate::error::ColorError;
use crate::params::*;
use crate::report::generate_accessibility_report;
use crate::scheme::{build_scheme, ColorScheme, SchemeMode};
use crate::theme::{ThemeEngine, ThemeOptions};
use crate::tonal::{generate_palette, PaletteSnapshot};

const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

// ============================================================================
// Error Mapping
// ============================================================================

fn color_error_to_mcp(err: ColorError) -> McpError {
    if err.is_input_error() {
        invalid_params(err.to_string())
    } else {
        tracing::error!(error = %err, "Color pipeline invariant violated");
        internal_error(err.to_string())
    }
}

impl IntoMcpError for ColorError {
    fn into_mcp_error(self) -> McpError {
        color_error_to_mcp(self)
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteResponse {
    seed_color: Argb,
    seed_hct: Hct,
    color_space: &'static str,
    palettes: Vec<PaletteSnapshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemeResponse {
    seed_color: Argb,
    #[serde(flatten)]
    scheme: ColorScheme,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessibleColorResponse {
    #[serde(flatten)]
    result: AccessibleColor,
    target_ratio: f64,
    meets_target: bool,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn generate_theme(
    engine: &ThemeEngine,
    config: &MaterialConfig,
    params: GenerateThemeParams,
) -> McpResult<CallToolResult> {
    let defaults = &config.theme;
    let mut options = ThemeOptions::new(params.seed_color)
        .with_name(params.name.unwrap_or_else(|| defaults.default_name.clone()))
        .with_dark_mode(params.dark_mode.unwrap_or(defaults.dark_mode))
        .with_output_format(params.output_format.unwrap_or(defaults.output_format));
    if let Some(level) = params.contrast_level {
        options = options.with_contrast_level(level);
    }

    let theme = engine.generate_theme(&options).to_mcp_err()?;
    json_success(&theme)
}

pub fn generate_palette_tool(
    engine: &ThemeEngine,
    params: GeneratePaletteParams,
) -> McpResult<CallToolResult> {
    let seed = Argb::from_hex(&params.seed_color).to_mcp_err()?;
    let extra = params
        .extra_tones
        .iter()
        .map(|&tone| Tone::new(tone))
        .collect::<Result<Vec<_>, _>>()
        .to_mcp_err()?;

    tracing::debug!(seed = %seed, extra_tones = extra.len(), "Generating palette");

    let palettes = generate_palette(engine.space(), seed);
    let snapshots = palettes
        .iter()
        .map(|(axis, palette)| PaletteSnapshot::capture(axis, palette, &extra))
        .collect();

    json_success(&PaletteResponse {
        seed_color: seed,
        seed_hct: palettes.seed_hct,
        color_space: engine.space().name(),
        palettes: snapshots,
    })
}

pub fn generate_scheme(
    engine: &ThemeEngine,
    params: GenerateSchemeParams,
) -> McpResult<CallToolResult> {
    let seed = Argb::from_hex(&params.seed_color).to_mcp_err()?;
    let mode = params.mode.unwrap_or(SchemeMode::Light);

    tracing::debug!(seed = %seed, mode = mode.label(), "Building scheme");

    let palettes = generate_palette(engine.space(), seed);
    let scheme = build_scheme(&palettes, mode).to_mcp_err()?;

    json_success(&SchemeResponse {
        seed_color: seed,
        scheme,
    })
}

pub fn validate_contrast(
    engine: &ThemeEngine,
    params: ValidateContrastParams,
) -> McpResult<CallToolResult> {
    let result = engine
        .validator()
        .validate_contrast(params.foreground_tone, params.background_tone)
        .to_mcp_err()?;
    json_success(&result)
}

pub fn find_accessible_color(
    engine: &ThemeEngine,
    config: &MaterialConfig,
    params: FindAccessibleColorParams,
) -> McpResult<CallToolResult> {
    let defaults = &config.accessibility;
    let target_ratio = params.target_ratio.unwrap_or(defaults.target_ratio);
    let prefer_darker = params.prefer_darker.unwrap_or(defaults.prefer_darker);

    let result = engine
        .validator()
        .find_accessible_foreground(params.background_tone, target_ratio, prefer_darker)
        .to_mcp_err()?;

    if result.achieved_ratio < target_ratio {
        tracing::info!(
            background = params.background_tone,
            target_ratio,
            achieved = result.achieved_ratio,
            "Returning best-effort tone below target ratio"
        );
    }

    json_success(&AccessibleColorResponse {
        meets_target: result.achieved_ratio >= target_ratio,
        target_ratio,
        result,
    })
}

pub fn validate_text_size(
    engine: &ThemeEngine,
    params: ValidateTextSizeParams,
) -> McpResult<CallToolResult> {
    let font_size = params.font_size.unwrap_or(DEFAULT_FONT_SIZE_PX);
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(invalid_params(format!(
            "Font size {} is invalid: expected a positive number of px",
            font_size
        )));
    }

    let result = engine
        .validator()
        .validate_for_text_size(
            params.foreground_tone,
            params.background_tone,
            font_size,
            params.is_bold.unwrap_or(false),
        )
        .to_mcp_err()?;
    json_success(&result)
}

pub fn accessibility_report(
    engine: &ThemeEngine,
    params: AccessibilityReportParams,
) -> McpResult<CallToolResult> {
    let tones = match (params.seed_color, params.tones) {
        (Some(seed), None) => {
            let seed = Argb::from_hex(&seed).to_mcp_err()?;
            let mode = params.mode.unwrap_or(SchemeMode::Light);
            let palettes = generate_palette(engine.space(), seed);
            let scheme = build_scheme(&palettes, mode).to_mcp_err()?;
            scheme
                .report_tones(engine.space().as_ref())
                .to_mcp_err()?
        }
        (None, Some(tones)) => tones,
        (Some(_), Some(_)) => {
            return Err(invalid_params(
                "Provide either seedColor or tones, not both",
            ))
        }
        (None, None) => return Err(invalid_params("Provide seedColor or tones")),
    };

    let report = generate_accessibility_report(engine.validator(), &tones).to_mcp_err()?;
    json_success(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_common::first_text;
    use rmcp::model::ErrorCode;

    fn engine() -> ThemeEngine {
        ThemeEngine::default()
    }

    fn body(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(first_text(result).unwrap()).unwrap()
    }

    #[test]
    fn test_error_mapping() {
        let input = color_error_to_mcp(ColorError::ToneOutOfRange(120.0));
        assert_eq!(input.code, ErrorCode::INVALID_PARAMS);
        assert!(input.message.contains("120"));

        let internal = color_error_to_mcp(ColorError::IncompleteScheme("on-error".into()));
        assert_eq!(internal.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_theme_uses_config_defaults() {
        let mut config = MaterialConfig::default();
        config.theme.default_name = "Brand Kit".to_string();
        config.theme.dark_mode = false;

        let result = generate_theme(
            &engine(),
            &config,
            GenerateThemeParams {
                seed_color: "#0061A4".to_string(),
                name: None,
                dark_mode: None,
                output_format: None,
                contrast_level: None,
            },
        )
        .unwrap();

        let json = body(&result);
        assert_eq!(json["name"], "brand-kit");
        assert!(json["accessibility"].get("darkTheme").is_none());
        assert!(json.get("tailwind").is_none());
    }

    #[test]
    fn test_palette_rejects_bad_extra_tone() {
        let err = generate_palette_tool(
            &engine(),
            GeneratePaletteParams {
                seed_color: "#0061A4".to_string(),
                extra_tones: vec![50.0, 101.0],
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_palette_response_shape() {
        let result = generate_palette_tool(
            &engine(),
            GeneratePaletteParams {
                seed_color: "#0061A4".to_string(),
                extra_tones: vec![35.0],
            },
        )
        .unwrap();

        let json = body(&result);
        assert_eq!(json["colorSpace"], "hct");
        let palettes = json["palettes"].as_array().unwrap();
        assert_eq!(palettes.len(), 6);
        assert_eq!(palettes[4]["axis"], "neutralVariant");
        assert_eq!(palettes[0]["tones"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn test_find_accessible_color_reports_target() {
        let config = MaterialConfig::default();
        let result = find_accessible_color(
            &engine(),
            &config,
            FindAccessibleColorParams {
                background_tone: 50.0,
                target_ratio: Some(21.0),
                prefer_darker: None,
            },
        )
        .unwrap();

        let json = body(&result);
        assert_eq!(json["targetRatio"], 21.0);
        assert_eq!(json["meetsTarget"], false);
        assert_eq!(json["method"], "darker");
        assert_eq!(json["originalTone"], 20.0);
    }

    #[test]
    fn test_text_size_rejects_non_positive_font() {
        let err = validate_text_size(
            &engine(),
            ValidateTextSizeParams {
                foreground_tone: 10.0,
                background_tone: 90.0,
                font_size: Some(0.0),
                is_bold: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_report_requires_exactly_one_source() {
        let neither = accessibility_report(
            &engine(),
            AccessibilityReportParams {
                seed_color: None,
                mode: None,
                tones: None,
            },
        );
        assert_eq!(neither.unwrap_err().code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_report_from_seed_dark_mode() {
        let result = accessibility_report(
            &engine(),
            AccessibilityReportParams {
                seed_color: Some("#6750A4".to_string()),
                mode: Some(SchemeMode::Dark),
                tones: None,
            },
        )
        .unwrap();

        let json = body(&result);
        assert_eq!(json["combinations"].as_array().unwrap().len(), 5);
        assert_eq!(json["overallRating"], "AAA");
    }
}
