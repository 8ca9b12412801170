use std::{fmt, io};

use crate::export::Format;

/// Errors raised by oxtheme
#[derive(Debug)]
pub enum Error {
    /// A color name is not in the registry
    UnknownColor {
        /// The name that was looked up
        name: String,
        /// Sorted list of the registry names
        valid: Vec<&'static str>,
    },
    /// A palette name is not in the catalog
    UnknownPalette {
        /// The name that was looked up
        name: String,
        /// Sorted list of the valid names
        valid: Vec<&'static str>,
    },
    /// A preset name is not in the catalog
    UnknownPreset {
        /// The name that was looked up
        name: String,
        /// Sorted list of the valid names
        valid: Vec<&'static str>,
    },
    /// A journal name has no export profile
    UnknownProfile {
        /// The name that was looked up
        name: String,
        /// Sorted list of the valid names
        valid: Vec<&'static str>,
    },
    /// A base style name is not recognized
    UnknownStyle {
        /// The name that was looked up
        name: String,
        /// Sorted list of the valid names
        valid: Vec<&'static str>,
    },
    /// A parameter value is out of its domain
    /// (non-positive scale, resolution or size, out of range opacity, unknown format or corner...)
    InvalidConfig(String),
    /// The format is supported, but no rendering backend is available for it
    NoBackend(Format),
    /// Writing the output file failed
    Io(io::Error),
    /// The rendering backend failed to produce the output
    Render(String),
}

impl Error {
    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(feature = "pxl")]
impl From<oxtheme_pxl::Error> for Error {
    fn from(err: oxtheme_pxl::Error) -> Self {
        match err {
            oxtheme_pxl::Error::Io(err) => Error::Io(err),
            err => Error::Render(err.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColor { name, valid } => {
                write!(f, "Color '{name}' not found. Available colors: {}", valid.join(", "))
            }
            Error::UnknownPalette { name, valid } => {
                write!(f, "Palette '{name}' not found. Available palettes: {}", valid.join(", "))
            }
            Error::UnknownPreset { name, valid } => {
                write!(f, "Preset '{name}' not found. Available presets: {}", valid.join(", "))
            }
            Error::UnknownProfile { name, valid } => {
                write!(f, "Journal '{name}' not found. Available: {}", valid.join(", "))
            }
            Error::UnknownStyle { name, valid } => {
                write!(f, "Base style '{name}' not found. Available styles: {}", valid.join(", "))
            }
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Error::NoBackend(format) => {
                write!(f, "No rendering backend available for format '{format}'")
            }
            Error::Io(err) => write!(f, "IO error: {err}"),
            Error::Render(msg) => write!(f, "Rendering error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type of oxtheme operations
pub type Result<T> = std::result::Result<T, Error>;
