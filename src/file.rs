//! Path-bound INI documents.
//!
//! [`IniFile`] pairs a [`Document`] with the file it came from and the
//! [`IniOptions`] used to read it, so the document can be written back or
//! reloaded.
//!
//! A path that does not name an existing regular file loads as an empty
//! document; the first [`IniFile::write`] then creates it.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use inifile::{IniFile, IniOptions};
//!
//! let mut file = IniFile::load("settings.ini", IniOptions::default())?;
//! file.section_mut("window")?.insert("width", "800")?;
//! file.write()?;
//!
//! // Later writes follow the new path.
//! file.write_to("backup.ini")?;
//! file.write()?;
//! # Ok::<(), inifile::Error>(())
//! ```

use crate::{Document, Error, IniOptions, Parser, Result};
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// A [`Document`] bound to a file path and fixed parsing options.
#[derive(Debug, Clone)]
pub struct IniFile {
    path: Option<PathBuf>,
    options: IniOptions,
    document: Document,
}

impl IniFile {
    /// Reads `path` into a new `IniFile`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read, or a parse
    /// error if its content is not valid INI. A missing file is not an error.
    pub fn load(path: impl AsRef<Path>, options: IniOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = read_path(&path, &options)?;
        Ok(IniFile {
            path: Some(path),
            options,
            document,
        })
    }

    /// Wraps an existing document. No path is bound until [`IniFile::write_to`].
    #[must_use]
    pub fn from_document(document: Document, options: IniOptions) -> Self {
        IniFile {
            path: None,
            options,
            document,
        }
    }

    /// Reads a document from any buffered reader. No path is bound.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading fails, or a parse error.
    pub fn from_reader<R: BufRead>(reader: R, options: IniOptions) -> Result<Self> {
        let document = parse_reader(reader, &options)?;
        Ok(IniFile::from_document(document, options))
    }

    /// The path that [`IniFile::write`] and [`IniFile::restore`] use.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Writes the document to the bound path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPath`] if no path is bound, or an I/O error.
    pub fn write(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(Error::MissingPath)?;
        self.write_file(path)
    }

    /// Writes the document to `path` and binds it for later writes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.write_file(path)?;
        if self.path.as_deref() != Some(path) {
            tracing::debug!(path = %path.display(), "rebinding INI file path");
            self.path = Some(path.to_path_buf());
        }
        Ok(())
    }

    /// Re-reads the bound path, discarding in-memory changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frozen`] if the document is frozen,
    /// [`Error::MissingPath`] if no path is bound, or a read/parse error.
    pub fn restore(&mut self) -> Result<()> {
        if self.document.is_frozen() {
            return Err(Error::Frozen);
        }
        let path = self.path.as_deref().ok_or(Error::MissingPath)?;
        self.document = read_path(path, &self.options)?;
        Ok(())
    }

    fn write_file(&self, path: &Path) -> Result<()> {
        let mut writer = io::BufWriter::new(fs::File::create(path)?);
        crate::to_writer_with_options(&mut writer, &self.document, &self.options)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), "wrote INI file");
        Ok(())
    }
}

impl Deref for IniFile {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.document
    }
}

impl DerefMut for IniFile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.document
    }
}

pub(crate) fn read_path(path: &Path, options: &IniOptions) -> Result<Document> {
    options.validate()?;
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no INI file at path, starting empty");
        return Ok(Document::new());
    }
    let reader = BufReader::new(fs::File::open(path)?);
    let document = parse_reader(reader, options)?;
    tracing::debug!(path = %path.display(), sections = document.len(), "loaded INI file");
    Ok(document)
}

pub(crate) fn parse_reader<R: BufRead>(reader: R, options: &IniOptions) -> Result<Document> {
    let mut parser = Parser::new(options)?;
    for line in reader.lines() {
        parser.parse_line(&line?)?;
    }
    Ok(parser.finish())
}
