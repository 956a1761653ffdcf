//! Error types for the color core
//!
//! Every color-science operation fails fast with a [`ColorError`] instead of
//! returning sentinel values. The best-effort contrast search in
//! [`crate::contrast`] is the one place that never fails on valid input.

use thiserror::Error;

/// Errors raised by palette derivation, scheme binding and contrast validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Seed color does not match `#RRGGBB`
    #[error("Invalid color input '{0}': expected a hex color in the form #RRGGBB")]
    InvalidColorInput(String),

    /// Tone argument outside [0, 100]
    #[error("Tone {0} is out of range: tones must lie within [0, 100]")]
    ToneOutOfRange(f64),

    /// Target contrast ratio outside [1, 21]
    #[error("Contrast ratio {0} is out of range: ratios must lie within [1, 21]")]
    InvalidContrastRatio(f64),

    /// A scheme role has no resolved color
    #[error("Incomplete scheme: role '{0}' has no resolved color")]
    IncompleteScheme(String),
}

/// Result alias for color-core operations
pub type ColorResult<T> = Result<T, ColorError>;

impl ColorError {
    /// Whether the error was caused by caller input rather than an internal bug
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ColorError::IncompleteScheme(_))
    }
}
