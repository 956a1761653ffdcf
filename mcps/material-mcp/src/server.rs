//! MCP server exposing theme generation and contrast validation
//!
//! Tools are thin wrappers over [`crate::handlers`]. The server holds only
//! immutable state (engine and config), so concurrent calls need no locking.

use std::sync::Arc;

use mcp_common::{async_trait, json_success, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::MaterialConfig;
use crate::handlers;
use crate::params::*;
use crate::theme::ThemeEngine;

const SERVER_NAME: &str = "material";

const INSTRUCTIONS: &str = "Material Design 3 theme server - derives tonal palettes and \
     light/dark color schemes from a seed color, emits CSS variables and Tailwind config, \
     and validates WCAG contrast between tones.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    color_space: &'static str,
    tools: Vec<String>,
    capabilities: [&'static str; 4],
}

/// The Material MCP Server
#[derive(Clone)]
pub struct MaterialMcpServer {
    engine: ThemeEngine,
    config: Arc<MaterialConfig>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl MaterialMcpServer {
    pub fn new() -> Self {
        Self::with_config(MaterialConfig::default())
    }

    pub fn with_config(config: MaterialConfig) -> Self {
        Self::with_engine(ThemeEngine::default(), config)
    }

    /// Server over a specific engine, e.g. one backed by another color space
    pub fn with_engine(engine: ThemeEngine, config: MaterialConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    pub fn config(&self) -> &MaterialConfig {
        &self.config
    }

    #[tool(
        description = "Generate a complete Material Design 3 theme from a seed color: tonal palettes, CSS custom properties, optional Tailwind config and a WCAG accessibility report for the light and dark schemes"
    )]
    async fn generate_theme(
        &self,
        Parameters(params): Parameters<GenerateThemeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::generate_theme(&self.engine, &self.config, params)
    }

    #[tool(
        description = "Generate the six Material tonal palettes (primary, secondary, tertiary, neutral, neutral variant, error) for a seed color at the 13 canonical tones plus any extra tones"
    )]
    async fn generate_palette(
        &self,
        Parameters(params): Parameters<GeneratePaletteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::generate_palette_tool(&self.engine, params)
    }

    #[tool(
        description = "Build the light or dark Material color scheme for a seed color: every role with its palette, tone and hex color"
    )]
    async fn generate_scheme(
        &self,
        Parameters(params): Parameters<GenerateSchemeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::generate_scheme(&self.engine, params)
    }

    #[tool(
        description = "Compute the WCAG contrast ratio between a foreground and a background tone and classify it as AAA, AA or FAIL"
    )]
    async fn validate_contrast(
        &self,
        Parameters(params): Parameters<ValidateContrastParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::validate_contrast(&self.engine, params)
    }

    #[tool(
        description = "Find a foreground tone that reaches a target contrast ratio against a background tone. Always returns the best achievable tone; check meetsTarget"
    )]
    async fn find_accessible_color(
        &self,
        Parameters(params): Parameters<FindAccessibleColorParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::find_accessible_color(&self.engine, &self.config, params)
    }

    #[tool(
        description = "Check whether a foreground/background tone pair is accessible for a given font size and weight (large text needs 3.0, normal text 4.5)"
    )]
    async fn validate_text_size(
        &self,
        Parameters(params): Parameters<ValidateTextSizeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::validate_text_size(&self.engine, params)
    }

    #[tool(
        description = "WCAG report over the primary, secondary, surface, background and error role pairs, either for a seed color's scheme or for explicit tones"
    )]
    async fn accessibility_report(
        &self,
        Parameters(params): Parameters<AccessibilityReportParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::accessibility_report(&self.engine, params)
    }

    #[tool(description = "Get server name, version, color backend and available tools")]
    async fn get_version(&self) -> Result<CallToolResult, McpError> {
        let mut tools: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        tools.sort();

        json_success(&VersionInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            color_space: self.engine.space().name(),
            tools,
            capabilities: ["palettes", "schemes", "css-tailwind-export", "wcag-validation"],
        })
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for MaterialMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for MaterialMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for MaterialMcpServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        tracing::debug!(tool = name, "Embedded tool call");

        match name {
            "generate_theme" => {
                let params: GenerateThemeParams = serde_json::from_value(params)?;
                self.generate_theme(Parameters(params)).await.map_err(Into::into)
            }
            "generate_palette" => {
                let params: GeneratePaletteParams = serde_json::from_value(params)?;
                self.generate_palette(Parameters(params)).await.map_err(Into::into)
            }
            "generate_scheme" => {
                let params: GenerateSchemeParams = serde_json::from_value(params)?;
                self.generate_scheme(Parameters(params)).await.map_err(Into::into)
            }
            "validate_contrast" => {
                let params: ValidateContrastParams = serde_json::from_value(params)?;
                self.validate_contrast(Parameters(params)).await.map_err(Into::into)
            }
            "find_accessible_color" => {
                let params: FindAccessibleColorParams = serde_json::from_value(params)?;
                self.find_accessible_color(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            "validate_text_size" => {
                let params: ValidateTextSizeParams = serde_json::from_value(params)?;
                self.validate_text_size(Parameters(params)).await.map_err(Into::into)
            }
            "accessibility_report" => {
                let params: AccessibilityReportParams = serde_json::from_value(params)?;
                self.accessibility_report(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            "get_version" => self.get_version().await.map_err(Into::into),
            _ => Err(EmbeddableError::UnknownTool(name.to_string())),
        }
    }
}
