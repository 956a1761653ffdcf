//! Tracing setup for stdio MCP servers
//!
//! Logs always go to stderr; stdout belongs to the MCP transport.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the log layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON, any other value (or none) yields `None`
    pub fn from_env() -> Option<Self> {
        std::env::var("LOG_FORMAT")
            .ok()
            .filter(|v| v.eq_ignore_ascii_case("json"))
            .map(|_| LogFormat::Json)
    }
}

/// Defaults applied when `RUST_LOG` / `LOG_FORMAT` are unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingOptions {
    /// Level for the server's own crate, e.g. `info` or `debug`
    pub level: String,
    pub format: LogFormat,
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl TracingOptions {
    /// Directive enabling `level` for `crate_name`
    pub fn directive(&self, crate_name: &str) -> String {
        format!("{}={}", crate_name, self.level)
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` directives are combined with `<crate_name>=<level>`; the
/// `LOG_FORMAT` environment variable takes precedence over `options.format`.
/// Fails if the level does not parse or a subscriber is already installed.
pub fn init_tracing(crate_name: &str, options: &TracingOptions) -> anyhow::Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive(options.directive(crate_name).parse()?);
    let format = LogFormat::from_env().unwrap_or(options.format);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        let options = TracingOptions {
            level: "debug".to_string(),
            format: LogFormat::Json,
        };
        assert_eq!(options.directive("material_mcp"), "material_mcp=debug");
        assert_eq!(
            TracingOptions::default().directive("material_mcp"),
            "material_mcp=info"
        );
    }

    #[test]
    fn test_log_format_from_toml_value() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
