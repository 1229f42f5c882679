//! # inifile
//!
//! A comment-aware INI document model with a line-oriented parser and
//! serializer.
//!
//! ## What it handles
//!
//! - **Sections**: `[name]` headers; names are trimmed and case-sensitive
//! - **Parameters**: `name = value` lines, split on the first separator
//! - **Comments**: comment blocks before a section header are kept as that
//!   section's leading comments; `name = value ; note` keeps `note` as the
//!   parameter's comment
//! - **Custom delimiters**: comment and separator strings are configurable
//!   through [`IniOptions`]
//!
//! Not supported: nested sections, multi-line values, or quoting.
//!
//! ## Quick Start
//!
//! ```rust
//! use inifile::{from_str, to_string};
//!
//! let text = "\
//! ; database settings
//! [database]
//! host = localhost ; dev only
//! port = 5432
//! ";
//!
//! let mut doc = from_str(text).unwrap();
//! assert_eq!(doc.leading_comments("database"), ["database settings"]);
//! assert_eq!(doc.parameter_comment("database", "host"), Some("dev only"));
//!
//! doc.section_mut("database").unwrap().insert("port", "6432").unwrap();
//! assert_eq!(to_string(&doc), "[database]\nhost = localhost\nport = 6432\n\n");
//! ```
//!
//! ## Comments Are Not Written Back
//!
//! The serializer emits sections and parameters only. Parsing and then
//! writing a commented file drops its comments; the comment stores remain
//! available in memory for as long as the [`Document`] lives.
//!
//! ## Errors
//!
//! Parsing fails on a parameter line before the first section header, and on
//! a line that is none of blank, comment, section header, or parameter. See
//! [`Error`].
//!
//! ## Files
//!
//! [`IniFile`] binds a document to a path for load/write/restore cycles. A
//! missing file loads as an empty document.

pub mod de;
pub mod document;
pub mod error;
pub mod file;
pub mod options;
pub mod section;
pub mod ser;

pub use de::{Line, Parser};
pub use document::Document;
pub use error::{Error, Result};
pub use file::IniFile;
pub use options::IniOptions;
pub use section::Section;
pub use ser::Serializer;

use std::io;
use std::path::Path;

/// Parse INI text with the default options.
///
/// # Examples
///
/// ```rust
/// use inifile::from_str;
///
/// let doc = from_str("[a]\nkey = value\n").unwrap();
/// assert_eq!(doc.section("a").and_then(|s| s.get("key")), Some("value"));
/// ```
///
/// # Errors
///
/// Returns a parse error for the first line that cannot be classified, or for
/// a parameter before the first section.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_options(s, &IniOptions::default())
}

/// Parse INI text with custom options.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &IniOptions) -> Result<Document> {
    from_lines_with_options(s.lines(), options)
}

/// Parse a sequence of lines with the default options.
///
/// # Examples
///
/// ```rust
/// use inifile::from_lines;
///
/// let doc = from_lines(vec!["[a]", "x = 1"]).unwrap();
/// assert!(doc.has_section("a"));
/// ```
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines<I, S>(lines: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    from_lines_with_options(lines, &IniOptions::default())
}

/// Parse a sequence of lines with custom options.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_lines_with_options<I, S>(lines: I, options: &IniOptions) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new(options)?.parse(lines)
}

/// Parse INI text from an I/O stream with the default options.
///
/// # Examples
///
/// ```rust
/// use inifile::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[a]\nx = 1\n")).unwrap();
/// assert_eq!(doc.section("a").and_then(|s| s.get("x")), Some("1"));
/// ```
///
/// # Errors
///
/// Returns an I/O error if reading fails (including invalid UTF-8), or a
/// parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Document> {
    from_reader_with_options(reader, &IniOptions::default())
}

/// Parse INI text from an I/O stream with custom options.
///
/// # Errors
///
/// See [`from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R: io::Read>(reader: R, options: &IniOptions) -> Result<Document> {
    file::parse_reader(io::BufReader::new(reader), options)
}

/// Parse the file at `path` with the default options.
///
/// A path that does not name an existing regular file yields an empty
/// document.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read, or a parse
/// error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    from_path_with_options(path, &IniOptions::default())
}

/// Parse the file at `path` with custom options.
///
/// # Errors
///
/// See [`from_path`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path_with_options(path: impl AsRef<Path>, options: &IniOptions) -> Result<Document> {
    file::read_path(path.as_ref(), options)
}

/// Render a document as INI lines with the default options.
#[must_use]
pub fn to_lines(document: &Document) -> Vec<String> {
    to_lines_with_options(document, &IniOptions::default())
}

/// Render a document as INI lines with custom options.
#[must_use]
pub fn to_lines_with_options(document: &Document, options: &IniOptions) -> Vec<String> {
    let mut serializer = Serializer::new(options);
    serializer.serialize_document(document);
    serializer.into_lines()
}

/// Render a document as INI text with the default options.
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_options(document, &IniOptions::default())
}

/// Render a document as INI text with custom options.
#[must_use]
pub fn to_string_with_options(document: &Document, options: &IniOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize_document(document);
    serializer.into_inner()
}

/// Write a document to `writer` with the default options.
///
/// # Examples
///
/// ```rust
/// use inifile::{from_str, to_writer};
///
/// let doc = from_str("[a]\nx = 1\n").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[a]\nx = 1\n\n");
/// ```
///
/// # Errors
///
/// Returns an I/O error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, document: &Document) -> Result<()> {
    to_writer_with_options(writer, document, &IniOptions::default())
}

/// Write a document to `writer` with custom options.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    document: &Document,
    options: &IniOptions,
) -> Result<()> {
    let text = to_string_with_options(document, options);
    writer.write_all(text.as_bytes())?;
    Ok(())
}
