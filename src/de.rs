//! INI parsing.
//!
//! This module provides the line classifier and the [`Parser`] that feeds
//! classified lines into a [`Document`].
//!
//! ## Line Shapes
//!
//! Every input line is matched against these shapes, in this order:
//!
//! 1. **Blank or comment**: nothing but whitespace, or a comment delimiter after
//!    optional leading whitespace
//! 2. **Section header**: `[name]` after optional leading whitespace; anything
//!    after the closing bracket is ignored
//! 3. **Parameter**: contains the separator; the first occurrence splits the
//!    name from the value
//!
//! A line matching none of them is an error. The order matters: `;key = value`
//! is a comment and `[a] = b` is a section header.
//!
//! ## Comment Attribution
//!
//! Comment lines accumulate in a pending buffer. A section header takes the
//! buffer as its leading comment block; a parameter line discards it. Text after
//! the comment delimiter on a parameter line becomes that parameter's comment.
//!
//! ```rust
//! use inifile::from_str;
//!
//! let doc = from_str(";lead1\n;lead2\n[S]\nkey = val ;inline\n").unwrap();
//! assert_eq!(doc.leading_comments("S"), ["lead1", "lead2"]);
//! assert_eq!(doc.section("S").and_then(|s| s.get("key")), Some("val"));
//! assert_eq!(doc.parameter_comment("S", "key"), Some("inline"));
//! ```

use crate::{Document, Error, IniOptions, Result};
use std::mem;

/// The shape of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Comment line; holds the trimmed text after the delimiter.
    Comment(&'a str),
    /// Section header; holds the trimmed name.
    Section(&'a str),
    /// Parameter line with its trimmed name, value, and trailing comment.
    Parameter {
        name: &'a str,
        value: &'a str,
        comment: Option<&'a str>,
    },
}

impl<'a> Line<'a> {
    /// Classifies `line`, or returns `None` if it matches no known shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::{IniOptions, Line};
    ///
    /// let options = IniOptions::default();
    /// assert_eq!(Line::classify("  ; note", &options), Some(Line::Comment("note")));
    /// assert_eq!(Line::classify("[core]", &options), Some(Line::Section("core")));
    /// assert_eq!(
    ///     Line::classify("a = b ; c", &options),
    ///     Some(Line::Parameter { name: "a", value: "b", comment: Some("c") })
    /// );
    /// assert_eq!(Line::classify("garbage", &options), None);
    /// ```
    #[must_use]
    pub fn classify(line: &'a str, options: &IniOptions) -> Option<Self> {
        let rest = line.trim_start();
        if rest.is_empty() {
            return Some(Line::Blank);
        }
        if let Some(text) = rest.strip_prefix(options.comment.as_str()) {
            return Some(Line::Comment(text.trim()));
        }
        if let Some(name) = section_name(rest) {
            return Some(Line::Section(name));
        }
        parameter(line, options)
    }
}

fn section_name(rest: &str) -> Option<&str> {
    let inner = rest.strip_prefix('[')?;
    let close = inner.find(']')?;
    let name = inner[..close].trim();
    (!name.is_empty()).then_some(name)
}

fn parameter<'a>(line: &'a str, options: &IniOptions) -> Option<Line<'a>> {
    let (name, value) = line.split_once(options.separator.as_str())?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if value.trim().is_empty() {
        return Some(Line::Parameter {
            name,
            value: "",
            comment: None,
        });
    }

    // Only the first delimited segment is kept as the comment.
    let mut segments = value.split(options.comment.as_str());
    let value = segments.next().unwrap_or_default();
    let comment = segments
        .next()
        .map(str::trim)
        .filter(|comment| !comment.is_empty());

    Some(Line::Parameter {
        name,
        value: value.trim(),
        comment,
    })
}

/// Line-by-line INI parser.
///
/// Tracks the current section and the pending comment block across lines.
/// Feed it with [`Parser::parse_line`] and collect the result with
/// [`Parser::finish`], or hand it a whole line source with [`Parser::parse`].
///
/// # Examples
///
/// ```rust
/// use inifile::{IniOptions, Parser};
///
/// let options = IniOptions::default();
/// let mut parser = Parser::new(&options).unwrap();
/// parser.parse_line("[server]").unwrap();
/// parser.parse_line("port = 8080").unwrap();
///
/// let doc = parser.finish();
/// assert_eq!(doc.section("server").and_then(|s| s.get("port")), Some("8080"));
/// ```
#[derive(Debug)]
pub struct Parser<'o> {
    options: &'o IniOptions,
    document: Document,
    current_section: Option<String>,
    unmatched_comments: Vec<String>,
    line_number: usize,
}

impl<'o> Parser<'o> {
    /// Creates a parser for the given delimiters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if either delimiter is empty.
    pub fn new(options: &'o IniOptions) -> Result<Self> {
        options.validate()?;
        Ok(Parser {
            options,
            document: Document::new(),
            current_section: None,
            unmatched_comments: Vec::new(),
            line_number: 0,
        })
    }

    /// Parses every line of `lines` and returns the finished document.
    ///
    /// # Errors
    ///
    /// Stops at the first line that fails to parse.
    pub fn parse<I, S>(mut self, lines: I) -> Result<Document>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.parse_line(line.as_ref())?;
        }
        Ok(self.finish())
    }

    /// Classifies one line and applies it to the document.
    ///
    /// A trailing `\n` or `\r\n` is ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::ParameterBeforeSection`] for a parameter line before any header
    /// - [`Error::UnrecognizedLine`] for a line that matches no shape
    pub fn parse_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match Line::classify(line, self.options) {
            Some(Line::Blank) => {}
            Some(Line::Comment(text)) => {
                if !text.is_empty() {
                    self.unmatched_comments.push(text.to_string());
                }
            }
            Some(Line::Section(name)) => {
                tracing::trace!(line = self.line_number, section = name, "section header");
                self.document.section_mut(name)?;
                if !self.unmatched_comments.is_empty() {
                    let comments = mem::take(&mut self.unmatched_comments);
                    self.document.append_leading_comments(name, comments);
                }
                self.current_section = Some(name.to_string());
            }
            Some(Line::Parameter {
                name,
                value,
                comment,
            }) => {
                let Some(section) = self.current_section.as_deref() else {
                    return Err(Error::parameter_before_section(self.line_number, line));
                };
                tracing::trace!(line = self.line_number, section, param = name, "parameter");
                self.unmatched_comments.clear();
                if let Some(comment) = comment {
                    self.document.set_parameter_comment(section, name, comment)?;
                }
                self.document.section_mut(section)?.insert(name, value)?;
            }
            None => {
                tracing::debug!(line = self.line_number, "unrecognized line");
                return Err(Error::unrecognized_line(self.line_number, line));
            }
        }

        Ok(())
    }

    /// Ends the parse. Comments after the last parameter are dropped.
    #[must_use]
    pub fn finish(self) -> Document {
        tracing::debug!(
            lines = self.line_number,
            sections = self.document.len(),
            "parsed INI document"
        );
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Option<Line<'_>> {
        Line::classify(line, &IniOptions::default())
    }

    fn parse(text: &str) -> Result<Document> {
        Parser::new(&IniOptions::default())?.parse(text.lines())
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), Some(Line::Blank));
        assert_eq!(classify("   \t"), Some(Line::Blank));
    }

    #[test]
    fn test_comment_wins_over_parameter() {
        assert_eq!(classify(";key = value"), Some(Line::Comment("key = value")));
        assert_eq!(classify("   ;   padded  "), Some(Line::Comment("padded")));
        assert_eq!(classify(";"), Some(Line::Comment("")));
    }

    #[test]
    fn test_section_wins_over_parameter() {
        assert_eq!(classify("[a] = b"), Some(Line::Section("a")));
        assert_eq!(classify("  [ spaced name ] trailing"), Some(Line::Section("spaced name")));
    }

    #[test]
    fn test_empty_brackets_are_not_a_section() {
        assert_eq!(classify("[]"), None);
        assert_eq!(classify("[  ]"), None);
        assert_eq!(classify("[unclosed"), None);
    }

    #[test]
    fn test_parameter_shapes() {
        assert_eq!(
            classify("  key   =   some value  "),
            Some(Line::Parameter {
                name: "key",
                value: "some value",
                comment: None
            })
        );
        assert_eq!(
            classify("url = a=b"),
            Some(Line::Parameter {
                name: "url",
                value: "a=b",
                comment: None
            })
        );
        assert_eq!(
            classify("key =   "),
            Some(Line::Parameter {
                name: "key",
                value: "",
                comment: None
            })
        );
        assert_eq!(
            classify("key = value ;"),
            Some(Line::Parameter {
                name: "key",
                value: "value",
                comment: None
            })
        );
    }

    #[test]
    fn test_missing_parameter_name() {
        assert_eq!(classify("= value"), None);
        assert_eq!(classify("   =value"), None);
    }

    #[test]
    fn test_comment_stops_at_second_delimiter() {
        assert_eq!(
            classify("path = a;b;c"),
            Some(Line::Parameter {
                name: "path",
                value: "a",
                comment: Some("b")
            })
        );
        assert_eq!(
            classify("path = a ; ;c"),
            Some(Line::Parameter {
                name: "path",
                value: "a",
                comment: None
            })
        );
    }

    #[test]
    fn test_custom_delimiters() {
        let options = IniOptions::new().with_comment("//").with_separator(":=");
        assert_eq!(
            Line::classify("key := v // note", &options),
            Some(Line::Parameter {
                name: "key",
                value: "v",
                comment: Some("note")
            })
        );
        assert_eq!(Line::classify("// c", &options), Some(Line::Comment("c")));
        assert_eq!(Line::classify("key = v", &options), None);
    }

    #[test]
    fn test_crlf_lines() {
        let options = IniOptions::default();
        let mut parser = Parser::new(&options).unwrap();
        parser.parse_line("[s]\r\n").unwrap();
        parser.parse_line("k = v\r\n").unwrap();
        let doc = parser.finish();
        assert_eq!(doc.section("s").and_then(|s| s.get("k")), Some("v"));
    }

    #[test]
    fn test_comment_block_moves_to_next_section() {
        let doc = parse(";a\n\n;b\n[one]\nk = v\n;c\n[two]\n").unwrap();
        assert_eq!(doc.leading_comments("one"), ["a", "b"]);
        assert_eq!(doc.leading_comments("two"), ["c"]);
    }

    #[test]
    fn test_parameter_discards_pending_comments() {
        let doc = parse("[S]\n;orphan\nkey=val\n[T]\n").unwrap();
        assert!(!doc.has_leading_comments("S"));
        assert!(!doc.has_leading_comments("T"));
        assert!(!doc.has_parameter_comment("S", "key"));
    }

    #[test]
    fn test_reopened_section_merges() {
        let doc = parse("[a]\nx = 1\n[b]\ny = 2\n[a]\nz = 3\n").unwrap();
        assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(doc.section("a").map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_trailing_comments_are_dropped() {
        let doc = parse("[a]\nx = 1\n; tail\n").unwrap();
        assert!(!doc.has_leading_comments("a"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_errors_report_line_numbers() {
        let err = parse("\n; c\nkey = val\n").unwrap_err();
        assert_eq!(err, Error::parameter_before_section(3, "key = val"));

        let err = parse("[a]\nx = 1\nnonsense\n").unwrap_err();
        assert_eq!(err, Error::unrecognized_line(3, "nonsense"));
    }

    #[test]
    fn test_no_sections_is_empty_document() {
        let doc = parse("; only comments\n\n").unwrap();
        assert!(doc.is_empty());
    }
}
