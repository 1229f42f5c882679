//! INI serialization.
//!
//! This module provides the [`Serializer`] that renders a [`Document`] as INI
//! lines. Each section becomes a `[name]` header, then one
//! `name <separator> value` line per parameter, then a blank line.
//!
//! Comments are **not** written. A document parsed from commented text loses
//! its comments when written back out.
//!
//! ## Usage
//!
//! ```rust
//! use inifile::{from_str, to_string};
//!
//! let doc = from_str("; gone on write\n[a]\nx=1\n").unwrap();
//! assert_eq!(to_string(&doc), "[a]\nx = 1\n\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use inifile::{from_str, IniOptions, Serializer};
//!
//! let doc = from_str("[a]\nx = 1\n").unwrap();
//! let options = IniOptions::new().with_separator(":");
//! let mut serializer = Serializer::new(&options);
//! serializer.serialize_document(&doc);
//!
//! assert_eq!(serializer.into_lines(), vec!["[a]", "x : 1", ""]);
//! ```

use crate::{Document, IniOptions};

/// Renders documents into INI lines.
pub struct Serializer<'o> {
    lines: Vec<String>,
    options: &'o IniOptions,
}

impl<'o> Serializer<'o> {
    #[must_use]
    pub fn new(options: &'o IniOptions) -> Self {
        Serializer {
            lines: Vec::with_capacity(32),
            options,
        }
    }

    /// Appends the lines for every section of `document`.
    pub fn serialize_document(&mut self, document: &Document) {
        for name in document.sections() {
            self.lines.push(format!("[{}]", name));
            if let Some(section) = document.section(name) {
                for (param, value) in section.iter() {
                    self.lines
                        .push(format!("{} {} {}", param, self.options.separator, value));
                }
            }
            self.lines.push(String::new());
        }
        tracing::debug!(
            sections = document.len(),
            lines = self.lines.len(),
            "serialized INI document"
        );
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// The accumulated lines as text, each terminated by `\n`.
    #[must_use]
    pub fn into_inner(self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut output = String::with_capacity(capacity);
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}
