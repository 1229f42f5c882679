//! The in-memory INI document.
//!
//! A [`Document`] maps section names to [`Section`]s in first-seen order and
//! keeps two comment stores next to the data:
//!
//! - **leading comments**: comment lines found before a section header, keyed by
//!   that section
//! - **parameter comments**: the trailing comment of a parameter line, keyed by
//!   section and parameter
//!
//! Comments do not take part in equality and are not written back out by the
//! serializer.
//!
//! ## Implicit Section Creation
//!
//! [`Document::section_mut`] is a lookup-or-insert accessor: asking for a
//! section that does not exist creates it empty. Use [`Document::section`] for
//! a read without side effects.
//!
//! ```rust
//! use inifile::Document;
//!
//! let mut doc = Document::new();
//! assert!(!doc.has_section("server"));
//!
//! doc.section_mut("server").unwrap().insert("port", "8080").unwrap();
//! assert!(doc.has_section("server"));
//! assert_eq!(doc.section("server").and_then(|s| s.get("port")), Some("8080"));
//! ```
//!
//! ## Freezing
//!
//! ```rust
//! use inifile::{Document, Error};
//!
//! let mut doc = Document::new();
//! doc.section_mut("a").unwrap().insert("k", "v").unwrap();
//! doc.freeze();
//!
//! assert_eq!(doc.section_mut("b").unwrap_err(), Error::Frozen);
//! assert_eq!(doc.section_mut("a").unwrap().insert("k", "w"), Err(Error::Frozen));
//! ```

use crate::{Error, Result, Section};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A parsed or programmatically built INI document.
///
/// `Clone` copies everything, including comments and the frozen state. Use
/// [`Document::duplicate`] for an unfrozen copy of the data alone.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: IndexMap<String, Section>,
    leading_comments: IndexMap<String, Vec<String>>,
    parameter_comments: IndexMap<String, IndexMap<String, String>>,
    frozen: bool,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document::default()
    }

    /// Returns the named section, creating it empty if it does not exist.
    ///
    /// The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the document is frozen and the section
    /// would have to be created. Existing sections of a frozen document are
    /// returned, but refuse mutation themselves.
    pub fn section_mut(&mut self, name: impl Into<String>) -> Result<&mut Section> {
        let name = section_key(name.into());
        if self.frozen && !self.sections.contains_key(&name) {
            return Err(Error::Frozen);
        }
        Ok(self.sections.entry(name).or_insert_with(Section::new))
    }

    /// Returns the named section without creating it.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name.trim())
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name.trim())
    }

    /// Removes a section along with its comments.
    ///
    /// Returns `Ok(None)` if there was no such section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the document is frozen.
    pub fn remove_section(&mut self, name: &str) -> Result<Option<Section>> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        let name = name.trim();
        self.leading_comments.shift_remove(name);
        self.parameter_comments.shift_remove(name);
        Ok(self.sections.shift_remove(name))
    }

    /// Returns an iterator over section names, in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns an iterator over `(section, parameter, value)` triples in
    /// section-then-parameter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::from_str;
    ///
    /// let doc = from_str("[a]\nx = 1\ny = 2\n[b]\nz = 3\n").unwrap();
    /// let triples: Vec<_> = doc.iter().collect();
    /// assert_eq!(
    ///     triples,
    ///     vec![("a", "x", "1"), ("a", "y", "2"), ("b", "z", "3")]
    /// );
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.sections.iter().flat_map(|(section, params)| {
            params
                .iter()
                .map(move |(param, value)| (section.as_str(), param, value))
        })
    }

    /// Calls `f` for every `(section, parameter, value)` triple.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str, &str),
    {
        for (section, param, value) in self.iter() {
            f(section, param, value);
        }
    }

    /// Calls `f` for every section name.
    pub fn for_each_section<F>(&self, mut f: F)
    where
        F: FnMut(&str),
    {
        for section in self.sections() {
            f(section);
        }
    }

    /// Sections whose name matches `pattern`, in document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::from_str;
    /// use regex::Regex;
    ///
    /// let doc = from_str("[db.main]\n[db.replica]\n[cache]\n").unwrap();
    /// let pattern = Regex::new(r"^db\.").unwrap();
    /// let names: Vec<_> = doc.matching_sections(&pattern).map(|(n, _)| n).collect();
    /// assert_eq!(names, vec!["db.main", "db.replica"]);
    /// ```
    pub fn matching_sections<'a>(
        &'a self,
        pattern: &'a Regex,
    ) -> impl Iterator<Item = (&'a str, &'a Section)> + 'a {
        self.sections
            .iter()
            .filter(move |(name, _)| pattern.is_match(name))
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Comment lines that preceded the section's header. Empty if none.
    #[must_use]
    pub fn leading_comments(&self, section: &str) -> &[String] {
        self.leading_comments
            .get(section.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn has_leading_comments(&self, section: &str) -> bool {
        !self.leading_comments(section).is_empty()
    }

    /// The trailing comment attached to a parameter, if any.
    #[must_use]
    pub fn parameter_comment(&self, section: &str, param: &str) -> Option<&str> {
        self.parameter_comments
            .get(section.trim())
            .and_then(|comments| comments.get(param.trim()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_parameter_comment(&self, section: &str, param: &str) -> bool {
        self.parameter_comment(section, param).is_some()
    }

    /// Replaces the leading comments of a section. An empty list clears them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the document is frozen.
    pub fn set_leading_comments(&mut self, section: &str, comments: Vec<String>) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        let section = section_key(section.to_string());
        if comments.is_empty() {
            self.leading_comments.shift_remove(&section);
        } else {
            self.leading_comments.insert(section, comments);
        }
        Ok(())
    }

    /// Sets the trailing comment of a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the document is frozen.
    pub fn set_parameter_comment(
        &mut self,
        section: &str,
        param: &str,
        comment: impl Into<String>,
    ) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        self.parameter_comments
            .entry(section_key(section.to_string()))
            .or_default()
            .insert(param.trim().to_string(), comment.into());
        Ok(())
    }

    /// Appends parsed comment lines to a section's leading block.
    pub(crate) fn append_leading_comments(&mut self, section: &str, comments: Vec<String>) {
        self.leading_comments
            .entry(section.to_string())
            .or_default()
            .extend(comments);
    }

    /// Makes the document and all of its sections permanently read-only.
    pub fn freeze(&mut self) {
        self.frozen = true;
        for section in self.sections.values_mut() {
            section.freeze();
        }
    }

    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// An unfrozen copy of the section data, without any comments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::from_str;
    ///
    /// let mut doc = from_str(";note\n[a]\nk = v\n").unwrap();
    /// doc.freeze();
    ///
    /// let mut copy = doc.duplicate();
    /// assert_eq!(copy, doc);
    /// assert!(!copy.is_frozen());
    /// assert!(!copy.has_leading_comments("a"));
    /// copy.section_mut("a").unwrap().insert("k", "changed").unwrap();
    /// assert_eq!(doc.section("a").and_then(|s| s.get("k")), Some("v"));
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Document {
            sections: self
                .sections
                .iter()
                .map(|(name, section)| (name.clone(), section.thawed()))
                .collect(),
            ..Document::default()
        }
    }

    /// Merges `other` into this document.
    ///
    /// Parameters from `other` overwrite same-named parameters here; sections
    /// are created as needed. Comments from `other` are copied only where this
    /// document has none for the same key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if this document is frozen.
    pub fn merge(&mut self, other: &Document) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        for (name, params) in &other.sections {
            let section = self.section_mut(name.as_str())?;
            for (param, value) in params.iter() {
                section.insert(param, value)?;
            }
        }
        for (name, comments) in &other.leading_comments {
            if !self.has_leading_comments(name) {
                self.leading_comments.insert(name.clone(), comments.clone());
            }
        }
        for (name, comments) in &other.parameter_comments {
            let target = self.parameter_comments.entry(name.clone()).or_default();
            for (param, comment) in comments {
                target
                    .entry(param.clone())
                    .or_insert_with(|| comment.clone());
            }
        }
        Ok(())
    }

    /// The section data as plain nested maps.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, IndexMap<String, String>> {
        self.sections
            .iter()
            .map(|(name, section)| (name.clone(), section.to_map()))
            .collect()
    }
}

fn section_key(name: String) -> String {
    if name.trim().len() == name.len() {
        name
    } else {
        name.trim().to_string()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Document {}

/// Collects sections into a new, unfrozen document. Frozen sections are
/// thawed on the way in.
impl FromIterator<(String, Section)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Section)>>(iter: T) -> Self {
        Document {
            sections: iter
                .into_iter()
                .map(|(name, section)| (section_key(name), section.into_thawed()))
                .collect(),
            ..Document::default()
        }
    }
}

impl From<IndexMap<String, IndexMap<String, String>>> for Document {
    fn from(map: IndexMap<String, IndexMap<String, String>>) -> Self {
        map.into_iter()
            .map(|(name, params)| (name, Section::from(params)))
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in crate::to_lines(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::<String, Section>::deserialize(deserializer)
            .map(|sections| sections.into_iter().collect())
    }
}
