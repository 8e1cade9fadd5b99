//! Error types for palette operations.
//!
//! Lookup misses are normally handled with a caller-supplied default (see
//! [`crate::palette::lookup`]); the variants here cover the places where an
//! `Option` is the wrong shape, such as hex parsing and the probe CLI.

use std::fmt;
use std::io;

/// Result type alias for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Error type for palette parsing and I/O paths.
#[derive(Debug)]
pub enum PaletteError {
    /// A hex color string could not be parsed.
    InvalidHex { input: String, reason: String },

    /// A color name is not present in the palette.
    UnknownName { name: String },

    /// Underlying I/O failure while reading configuration or writing logs.
    Io(io::Error),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidHex { input, reason } => {
                write!(f, "Invalid hex color {:?}: {}", input, reason)
            }
            PaletteError::UnknownName { name } => {
                write!(f, "No palette color named {:?}", name)
            }
            PaletteError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PaletteError {
    fn from(err: io::Error) -> Self {
        PaletteError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_include_offending_input() {
        let err = PaletteError::InvalidHex {
            input: "#12".to_string(),
            reason: "expected 6 or 8 hex digits".to_string(),
        };
        assert!(err.to_string().contains("#12"));

        let err = PaletteError::UnknownName {
            name: "Octarine".to_string(),
        };
        assert!(err.to_string().contains("Octarine"));
    }
}
