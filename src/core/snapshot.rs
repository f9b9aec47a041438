//! Snapshot of the schema taken before a regeneration, and the virtual
//! documents used to diff it against the file on disk.
//!
//! Documents live under the `i18n-schema:` scheme:
//!
//! - `i18n-schema:old.json` is the retained snapshot
//! - `i18n-schema:<schema file name>` is the schema as currently on disk

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use thiserror::Error;

pub const SCHEME: &str = "i18n-schema";

/// Path of the snapshot document inside [`SCHEME`].
pub const OLD_DOCUMENT: &str = "old.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no previous schema snapshot is available")]
    NoSnapshot,
    #[error("unknown schema document: {0}")]
    UnknownDocument(String),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Schema content as it was right before the latest regeneration attempt.
///
/// `None` means there was nothing to capture: either no attempt has run
/// yet, or the schema file did not exist.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    content: Option<String>,
}

impl Snapshot {
    /// Overwrite the stored content.
    pub fn capture(&mut self, content: Option<String>) {
        self.content = content;
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn exists(&self) -> bool {
        self.content.is_some()
    }
}

/// A rendered virtual document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub uri: String,
    pub content: String,
}

/// The two addressable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDocument {
    Old,
    Current,
}

/// Serves [`SchemaDocument`]s for one schema file.
pub struct ContentProvider<'a> {
    snapshot: &'a Snapshot,
    schema_path: &'a Path,
}

impl<'a> ContentProvider<'a> {
    pub fn new(snapshot: &'a Snapshot, schema_path: &'a Path) -> Self {
        Self {
            snapshot,
            schema_path,
        }
    }

    /// File name the current schema is addressed by.
    pub fn current_name(&self) -> String {
        self.schema_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn uri(&self, document: SchemaDocument) -> String {
        match document {
            SchemaDocument::Old => format!("{}:{}", SCHEME, OLD_DOCUMENT),
            SchemaDocument::Current => format!("{}:{}", SCHEME, self.current_name()),
        }
    }

    /// Map a document path (with or without the scheme prefix).
    pub fn resolve(&self, path: &str) -> Result<SchemaDocument, ContentError> {
        let path = path
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(path);

        if path == OLD_DOCUMENT {
            Ok(SchemaDocument::Old)
        } else if !path.is_empty() && path == self.current_name() {
            Ok(SchemaDocument::Current)
        } else {
            Err(ContentError::UnknownDocument(path.to_string()))
        }
    }

    pub async fn provide(&self, document: SchemaDocument) -> Result<String, ContentError> {
        match document {
            SchemaDocument::Old => self
                .snapshot
                .content()
                .map(str::to_string)
                .ok_or(ContentError::NoSnapshot),
            SchemaDocument::Current => tokio::fs::read_to_string(self.schema_path)
                .await
                .map_err(|source| ContentError::Read {
                    path: self.schema_path.to_path_buf(),
                    source,
                }),
        }
    }

    /// Resolve and read a document by path.
    pub async fn provide_content(&self, path: &str) -> Result<String, ContentError> {
        self.provide(self.resolve(path)?).await
    }

    pub async fn document(&self, document: SchemaDocument) -> Result<Document, ContentError> {
        Ok(Document {
            uri: self.uri(document),
            content: self.provide(document).await?,
        })
    }
}
