//! Error types for path parsing, color parsing, and definition loading.

use std::path::PathBuf;

/// Error returned when a semantic path string cannot be parsed.
///
/// Paths use exactly two segments joined by `.`, category first
/// (e.g. `"status.success"`). Anything else is rejected here rather than
/// probed dynamically at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The string does not have the `category.slot` shape.
    InvalidShape { path: String },
    /// The category segment is not a known semantic category.
    UnknownCategory { category: String },
    /// The slot segment does not exist within the (valid) category.
    UnknownSlot { category: String, slot: String },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::InvalidShape { path } => {
                write!(f, "invalid semantic path '{}': expected 'category.slot'", path)
            }
            PathError::UnknownCategory { category } => {
                write!(f, "unknown semantic category '{}'", category)
            }
            PathError::UnknownSlot { category, slot } => {
                write!(f, "unknown slot '{}' in semantic category '{}'", slot, category)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Error returned when a color encoding cannot be parsed.
///
/// Supported encodings are `#RGB`, `#RRGGBB`, and `rgba(r, g, b, a)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Malformed hex color (wrong length or non-hex digits).
    InvalidHex { value: String },
    /// Malformed `rgba(...)` expression.
    InvalidRgba { value: String },
    /// A numeric component fell outside its allowed range.
    OutOfRange { value: String, component: String },
    /// The value matches no supported encoding at all.
    UnknownFormat { value: String },
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::InvalidHex { value } => {
                write!(f, "invalid hex color '{}' (expected #RGB or #RRGGBB)", value)
            }
            ColorError::InvalidRgba { value } => {
                write!(f, "invalid rgba color '{}' (expected rgba(r, g, b, a))", value)
            }
            ColorError::OutOfRange { value, component } => {
                write!(f, "component '{}' out of range in color '{}'", component, value)
            }
            ColorError::UnknownFormat { value } => {
                write!(f, "unrecognized color encoding '{}'", value)
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// Error type for loading custom color mappings and configuration patches.
#[derive(Debug)]
pub enum DefinitionError {
    /// YAML parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },
    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "failed to parse {}: {}", p.display(), message)
                } else {
                    write!(f, "failed to parse definition: {}", message)
                }
            }
            DefinitionError::Load { message } => {
                write!(f, "failed to load definition: {}", message)
            }
        }
    }
}

impl std::error::Error for DefinitionError {}
