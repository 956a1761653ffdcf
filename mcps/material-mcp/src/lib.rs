//! Material MCP Library
//!
//! Material Design 3 theme generation with WCAG contrast validation.
//! A seed color is expanded into six tonal palettes, bound to light and dark
//! color schemes, checked against WCAG thresholds and serialized as CSS
//! custom properties or a Tailwind config.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use material_mcp::{ThemeEngine, ThemeOptions};
//!
//! let engine = ThemeEngine::default();
//! let theme = engine.generate_theme(&ThemeOptions::new("#6750A4"))?;
//! println!("{}", theme.css);
//! ```

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod handlers;
pub mod params;
pub mod report;
pub mod scheme;
pub mod server;
pub mod theme;
pub mod tonal;

pub use color::{Argb, ColorSpace, HctColorSpace, Tone};
pub use config::MaterialConfig;
pub use contrast::{ContrastResult, ContrastValidator, WcagLevel};
pub use error::{ColorError, ColorResult};
pub use report::{generate_accessibility_report, AccessibilityReport, SchemeTones};
pub use scheme::{build_scheme, ColorScheme, SchemeMode, SchemeRole};
pub use server::MaterialMcpServer;
pub use theme::{GeneratedTheme, OutputFormat, ThemeEngine, ThemeOptions};
pub use tonal::{generate_palette, CorePalettes, PaletteAxis, TonalPalette};
