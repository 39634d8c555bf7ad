//! Document source abstraction.
//!
//! The resolver reads category index documents through [`DocumentSource`] so
//! that slug and tree logic can be tested without a filesystem fixture.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name of a category index document.
pub const DEFAULT_INDEX_NAME: &str = "index.md";

/// Semantic error categories for document reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// Index document does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// File exists but is not valid UTF-8.
    InvalidUtf8,
    /// Category id cannot be mapped to a path.
    InvalidPath,
    /// Other I/O failure.
    Other,
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotFound => "Not found",
            Self::PermissionDenied => "Permission denied",
            Self::InvalidUtf8 => "Invalid UTF-8",
            Self::InvalidPath => "Invalid path",
            Self::Other => "Error",
        };
        f.write_str(s)
    }
}

/// Error reading a category index document.
#[derive(Debug, thiserror::Error)]
#[error("{kind} (path: {})", .path.display())]
pub struct SourceError {
    /// Semantic error category.
    pub kind: SourceErrorKind,
    /// Path of the document that failed.
    pub path: PathBuf,
    #[source]
    source: Option<io::Error>,
}

impl SourceError {
    /// Create a new error without an underlying cause.
    #[must_use]
    pub fn new(kind: SourceErrorKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            source: None,
        }
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceErrorKind::NotFound, path)
    }

    /// Create an error from an I/O error.
    #[must_use]
    pub fn io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => SourceErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData => SourceErrorKind::InvalidUtf8,
            _ => SourceErrorKind::Other,
        };
        Self {
            kind,
            path: path.into(),
            source: Some(err),
        }
    }
}

/// Read access to category index documents.
pub trait DocumentSource {
    /// Read the index document of a category.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the document is missing or unreadable.
    fn read_index(&self, category_id: &str) -> Result<String, SourceError>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn read_index(&self, category_id: &str) -> Result<String, SourceError> {
        (**self).read_index(category_id)
    }
}

/// Filesystem source reading `<root>/<category>/<index_name>`.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
    index_name: String,
}

impl FsSource {
    /// Create a source rooted at the documents directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_name: DEFAULT_INDEX_NAME.to_owned(),
        }
    }

    /// Use a different index document file name.
    #[must_use]
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Documents root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a category's index document.
    #[must_use]
    pub fn index_path(&self, category_id: &str) -> PathBuf {
        self.root.join(category_id).join(&self.index_name)
    }
}

impl DocumentSource for FsSource {
    fn read_index(&self, category_id: &str) -> Result<String, SourceError> {
        let path = self.index_path(category_id);
        if category_id.is_empty()
            || category_id.contains(['/', '\\'])
            || category_id == "."
            || category_id == ".."
        {
            return Err(SourceError::new(SourceErrorKind::InvalidPath, path));
        }
        std::fs::read_to_string(&path).map_err(|e| SourceError::io(e, path))
    }
}

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{DocumentSource, SourceError, SourceErrorKind};

    /// In-memory document source for tests.
    ///
    /// Categories without registered content read as not found.
    #[derive(Debug, Default)]
    pub struct MockSource {
        documents: HashMap<String, Result<String, SourceErrorKind>>,
    }

    impl MockSource {
        /// Create an empty mock source.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Register index content for a category.
        #[must_use]
        pub fn with_index(mut self, category_id: &str, content: impl Into<String>) -> Self {
            self.documents
                .insert(category_id.to_owned(), Ok(content.into()));
            self
        }

        /// Make reading a category's index fail with the given kind.
        #[must_use]
        pub fn with_error(mut self, category_id: &str, kind: SourceErrorKind) -> Self {
            self.documents.insert(category_id.to_owned(), Err(kind));
            self
        }
    }

    impl DocumentSource for MockSource {
        fn read_index(&self, category_id: &str) -> Result<String, SourceError> {
            let path = PathBuf::from(category_id).join(super::DEFAULT_INDEX_NAME);
            match self.documents.get(category_id) {
                Some(Ok(content)) => Ok(content.clone()),
                Some(Err(kind)) => Err(SourceError::new(*kind, path)),
                None => Err(SourceError::not_found(path)),
            }
        }
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;
