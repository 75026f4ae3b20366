pub mod cache;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod retriever;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::DocumentCache;
pub use error::{DocumentLoadError, Result};
pub use extractor::{LopdfExtractor, PageText, PdfExtractor};
pub use loader::{digest_bytes, load, load_with, DEFAULT_DOCUMENT_PATH};
pub use models::{Answer, DocumentFingerprint};
pub use retriever::{retrieve, truncate_chars, ANSWER_MAX_CHARS};
pub use store::DocumentStore;
