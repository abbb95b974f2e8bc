use super::normalizer::join_pages;
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest document accepted by default (10 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLimits {
    pub max_bytes: u64,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    #[error("document is {size} bytes, above the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
    #[error("document is empty")]
    Empty,
    #[error("document text is not valid UTF-8")]
    NotUtf8,
}

/// Supplies the plain text of one document. Decoding (PDF text layers,
/// OCR) happens behind this seam; the pipeline only awaits the result once.
pub trait DocumentSource {
    /// Name reported as the briefing's source file.
    fn identifier(&self) -> &str;

    fn load_text(&self) -> impl Future<Output = Result<String, DocumentError>> + Send;
}

/// Text already held in memory, one entry per page.
#[derive(Debug, Clone)]
pub struct InlineDocument {
    identifier: String,
    pages: Vec<String>,
}

impl InlineDocument {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self::from_pages(identifier, vec![text.into()])
    }

    pub fn from_pages(identifier: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            pages,
        }
    }
}

impl DocumentSource for InlineDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn load_text(&self) -> impl Future<Output = Result<String, DocumentError>> + Send {
        let text = join_pages(&self.pages);
        async move {
            if text.is_empty() {
                Err(DocumentError::Empty)
            } else {
                Ok(text)
            }
        }
    }
}

/// UTF-8 text export of a document on disk. Form feeds mark page breaks.
#[derive(Debug, Clone)]
pub struct TextFileDocument {
    path: PathBuf,
    identifier: String,
    limits: DocumentLimits,
}

impl TextFileDocument {
    pub fn new(path: impl AsRef<Path>, limits: DocumentLimits) -> Self {
        let path = path.as_ref().to_path_buf();
        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            identifier,
            limits,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

impl DocumentSource for TextFileDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn load_text(&self) -> impl Future<Output = Result<String, DocumentError>> + Send {
        let path = self.path.clone();
        let limit = self.limits.max_bytes;
        async move {
            let size = tokio::fs::metadata(&path).await?.len();
            if size == 0 {
                return Err(DocumentError::Empty);
            }
            if size > limit {
                return Err(DocumentError::TooLarge { size, limit });
            }

            let bytes = tokio::fs::read(&path).await?;
            let raw = String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8)?;
            let pages: Vec<&str> = raw.split('\u{000c}').collect();
            let text = join_pages(&pages);
            if text.is_empty() {
                Err(DocumentError::Empty)
            } else {
                Ok(text)
            }
        }
    }
}
