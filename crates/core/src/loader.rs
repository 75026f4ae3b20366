use crate::error::DocumentLoadError;
use crate::extractor::{LopdfExtractor, PdfExtractor};
use crate::models::DocumentFingerprint;
use crate::store::DocumentStore;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default document location, resolved against the working directory.
pub const DEFAULT_DOCUMENT_PATH: &str = "ml_intro.pdf";

/// Loads `path` with the lopdf extractor.
///
/// A path that does not exist yields an empty store rather than an error;
/// callers must check [`DocumentStore::is_empty`] and stop serving queries.
/// A file that exists but cannot be parsed is an error.
pub fn load(path: &Path) -> Result<DocumentStore, DocumentLoadError> {
    load_with(&LopdfExtractor, path)
}

pub fn load_with<E>(extractor: &E, path: &Path) -> Result<DocumentStore, DocumentLoadError>
where
    E: PdfExtractor + ?Sized,
{
    if !path.exists() {
        warn!(path = %path.display(), "document not found");
        return Ok(DocumentStore::empty());
    }

    // Read once; the same bytes feed the checksum and the parser.
    let bytes = fs::read(path)?;
    let fingerprint = build_document_fingerprint(path, &bytes)?;
    let extracted = extractor.extract_pages(&bytes)?;
    let total_pages = extracted.len();
    let store = DocumentStore::new(Some(fingerprint), extracted);

    info!(
        path = %path.display(),
        total_pages,
        text_pages = store.len(),
        "document loaded"
    );

    Ok(store)
}

pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn build_document_fingerprint(
    path: &Path,
    bytes: &[u8],
) -> Result<DocumentFingerprint, DocumentLoadError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DocumentLoadError::MissingFileName(path.display().to_string()))?;

    Ok(DocumentFingerprint {
        document_title: name.to_string(),
        source_path: path.to_string_lossy().to_string(),
        checksum: digest_bytes(bytes),
        loaded_at: Utc::now(),
    })
}
