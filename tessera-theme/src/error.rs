//! Error types shared by the builder, projector and store.

use thiserror::Error;

/// Errors raised while turning user input into a theme.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// A seed or custom color could not be represented as 24-bit RGB.
    #[error("invalid color `{input}`: {reason}")]
    InvalidColor {
        /// The offending input, as written by the caller.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },
    /// A custom color definition carried an invalid value.
    #[error("custom color `{name}` is invalid: {source}")]
    InvalidCustomColor {
        /// Name of the custom color definition.
        name: String,
        /// The underlying color error.
        source: Box<ThemeError>,
    },
    /// Contrast level outside `[-1.0, 1.0]` or not finite.
    #[error("contrast level {0} is outside [-1.0, 1.0]")]
    InvalidContrast(f64),
    /// A token name outside the canonical list.
    #[error("unknown token `{0}`")]
    UnknownToken(String),
    /// A variant name that strict parsing does not recognize.
    #[error("unsupported variant `{0}`")]
    UnsupportedVariant(String),
}

impl ThemeError {
    pub(crate) fn invalid_color(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason,
        }
    }

    /// Returns `true` for errors caused by a malformed color value.
    pub fn is_invalid_color(&self) -> bool {
        matches!(
            self,
            Self::InvalidColor { .. } | Self::InvalidCustomColor { .. }
        )
    }
}
