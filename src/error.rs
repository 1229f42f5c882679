//! Error types for INI parsing, document mutation, and file I/O.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: a parameter line before any section header, or a line that
//!   is neither blank, a comment, a section header, nor a parameter
//! - **Immutability Errors**: mutation of a frozen [`Document`](crate::Document)
//! - **Option Errors**: an empty comment delimiter or separator
//! - **I/O Errors**: reading or writing failures, and writes with no destination
//!
//! Parse errors carry the 1-based line number and the raw offending line text.
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{from_str, Error};
//!
//! let err = from_str("not a valid line at all").unwrap_err();
//! assert!(matches!(err, Error::UnrecognizedLine { .. }));
//! assert_eq!(err.line_content(), Some("not a valid line at all"));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter line appeared before the first section header.
    #[error("parameter encountered before first section")]
    ParameterBeforeSection { line: usize, content: String },

    /// A line matched none of the recognized shapes.
    #[error("could not parse line '{content}'")]
    UnrecognizedLine { line: usize, content: String },

    /// Mutation attempted on a frozen document or section.
    #[error("can't modify frozen document")]
    Frozen,

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A comment delimiter or separator that cannot classify lines.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// `IniFile::write` was called without a destination path.
    #[error("no destination path bound to this file")]
    MissingPath,
}

impl Error {
    /// Creates the "parameter before first section" error for the given line.
    pub fn parameter_before_section(line: usize, content: &str) -> Self {
        Error::ParameterBeforeSection {
            line,
            content: content.to_string(),
        }
    }

    /// Creates the "could not parse line" error for the given line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::Error;
    ///
    /// let err = Error::unrecognized_line(3, "garbage");
    /// assert_eq!(err.to_string(), "could not parse line 'garbage'");
    /// assert_eq!(err.line_number(), Some(3));
    /// ```
    pub fn unrecognized_line(line: usize, content: &str) -> Self {
        Error::UnrecognizedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while classifying input lines.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::ParameterBeforeSection { .. } | Error::UnrecognizedLine { .. }
        )
    }

    /// The raw text of the offending line, for parse errors.
    #[must_use]
    pub fn line_content(&self) -> Option<&str> {
        match self {
            Error::ParameterBeforeSection { content, .. }
            | Error::UnrecognizedLine { content, .. } => Some(content),
            _ => None,
        }
    }

    /// The 1-based number of the offending line, for parse errors.
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Error::ParameterBeforeSection { line, .. } | Error::UnrecognizedLine { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_accessors() {
        let err = Error::parameter_before_section(1, "key = val");
        assert!(err.is_parse_error());
        assert_eq!(err.line_number(), Some(1));
        assert_eq!(err.line_content(), Some("key = val"));
        assert_eq!(err.to_string(), "parameter encountered before first section");
    }

    #[test]
    fn test_non_parse_errors() {
        assert!(!Error::Frozen.is_parse_error());
        assert_eq!(Error::Frozen.line_content(), None);
        assert_eq!(Error::MissingPath.line_number(), None);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err, Error::Io("gone".to_string()));
    }
}
