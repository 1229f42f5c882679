//! Configuration options for INI parsing and serialization.
//!
//! [`IniOptions`] carries the two characters (or strings) that shape the
//! format: the comment delimiter and the key/value separator.
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{from_str_with_options, IniOptions};
//!
//! let options = IniOptions::new().with_comment("#").with_separator(":");
//! let doc = from_str_with_options("[server]\nport: 8080 # default\n", &options).unwrap();
//!
//! assert_eq!(doc.section("server").and_then(|s| s.get("port")), Some("8080"));
//! assert_eq!(doc.parameter_comment("server", "port"), Some("default"));
//! ```

use crate::{Error, Result};

/// Default comment delimiter.
pub const DEFAULT_COMMENT: &str = ";";

/// Default key/value separator.
pub const DEFAULT_SEPARATOR: &str = "=";

/// Configuration options for INI parsing and serialization.
///
/// Both fields may hold more than one character, but neither may be empty.
/// They are fixed once a [`Parser`](crate::Parser) or
/// [`IniFile`](crate::IniFile) is built.
///
/// # Examples
///
/// ```rust
/// use inifile::IniOptions;
///
/// let options = IniOptions::new();
/// assert_eq!(options.comment, ";");
/// assert_eq!(options.separator, "=");
///
/// let options = IniOptions::hash_comments();
/// assert_eq!(options.comment, "#");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniOptions {
    pub comment: String,
    pub separator: String,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            comment: DEFAULT_COMMENT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl IniOptions {
    /// Creates default options (`;` comments, `=` separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for files that use `#` comments.
    #[must_use]
    pub fn hash_comments() -> Self {
        IniOptions {
            comment: "#".to_string(),
            ..Default::default()
        }
    }

    /// Sets the comment delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::IniOptions;
    ///
    /// let options = IniOptions::new().with_comment("//");
    /// assert_eq!(options.comment, "//");
    /// ```
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the key/value separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Checks that both delimiters are non-empty.
    ///
    /// An empty comment delimiter would prefix every line, and an empty
    /// separator would leave every parameter without a name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] naming the empty delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::{Error, IniOptions};
    ///
    /// assert!(IniOptions::new().validate().is_ok());
    /// assert!(matches!(
    ///     IniOptions::new().with_comment("").validate(),
    ///     Err(Error::InvalidOptions(_))
    /// ));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.comment.is_empty() {
            return Err(Error::InvalidOptions(
                "comment delimiter must not be empty".to_string(),
            ));
        }
        if self.separator.is_empty() {
            return Err(Error::InvalidOptions(
                "separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
