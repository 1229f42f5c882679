//! Ordered parameter map for a single INI section.
//!
//! [`Section`] wraps an [`IndexMap`] so parameters keep their first-seen order,
//! which makes serialization deterministic. A section can be frozen (normally
//! through [`Document::freeze`](crate::Document::freeze)); afterwards every
//! mutating method returns [`Error::Frozen`].
//!
//! ## Examples
//!
//! ```rust
//! use inifile::Section;
//!
//! let mut section = Section::new();
//! section.insert("host", "localhost").unwrap();
//! section.insert("port", "8080").unwrap();
//!
//! let keys: Vec<_> = section.keys().collect();
//! assert_eq!(keys, vec!["host", "port"]);
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered map of parameter names to string values.
///
/// Equality compares the parameters only; the frozen flag is ignored.
#[derive(Debug, Clone, Default)]
pub struct Section {
    params: IndexMap<String, String>,
    frozen: bool,
}

impl Section {
    /// Creates an empty `Section`.
    #[must_use]
    pub fn new() -> Self {
        Section::default()
    }

    /// Inserts a parameter, returning the previous value if there was one.
    ///
    /// The name is trimmed of surrounding whitespace. Re-inserting an existing
    /// name keeps its original position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the section is frozen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::Section;
    ///
    /// let mut section = Section::new();
    /// assert_eq!(section.insert(" key ", "a").unwrap(), None);
    /// assert_eq!(section.insert("key", "b").unwrap(), Some("a".to_string()));
    /// assert_eq!(section.get("key"), Some("b"));
    /// ```
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        self.ensure_mutable()?;
        let name = name.into();
        let name = if name.trim().len() == name.len() {
            name
        } else {
            name.trim().to_string()
        };
        Ok(self.params.insert(name, value.into()))
    }

    /// Returns the value of the named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns `true` if the section holds the named parameter.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Removes a parameter, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the section is frozen.
    pub fn remove(&mut self, name: &str) -> Result<Option<String>> {
        self.ensure_mutable()?;
        Ok(self.params.shift_remove(name))
    }

    /// Removes every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the section is frozen.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_mutable()?;
        self.params.clear();
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns an iterator over parameter names, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.keys().map(String::as_str)
    }

    /// Returns an iterator over values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.values().map(String::as_str)
    }

    /// Returns an iterator over `(name, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` once the section has been frozen.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }

    /// A copy of the parameters that is never frozen.
    pub(crate) fn thawed(&self) -> Self {
        Section {
            params: self.params.clone(),
            frozen: false,
        }
    }

    pub(crate) fn into_thawed(mut self) -> Self {
        self.frozen = false;
        self
    }

    pub(crate) fn to_map(&self) -> IndexMap<String, String> {
        self.params.clone()
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.frozen {
            Err(Error::Frozen)
        } else {
            Ok(())
        }
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for Section {}

impl From<IndexMap<String, String>> for Section {
    fn from(params: IndexMap<String, String>) -> Self {
        params.into_iter().collect()
    }
}

impl FromIterator<(String, String)> for Section {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Section {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.trim().to_string(), v))
                .collect(),
            frozen: false,
        }
    }
}

impl IntoIterator for Section {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.params.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::<String, String>::deserialize(deserializer).map(Section::from)
    }
}
