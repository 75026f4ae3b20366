use crate::error::DocumentLoadError;
use crate::extractor::{LopdfExtractor, PdfExtractor};
use crate::loader::load_with;
use crate::store::DocumentStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Process-lifetime memo of [`crate::load`] results, keyed by path.
///
/// Entries are never invalidated. Failed loads are not stored, so the next
/// call for the same path parses again.
pub struct DocumentCache<E = LopdfExtractor> {
    extractor: E,
    entries: Mutex<HashMap<PathBuf, Arc<DocumentStore>>>,
}

impl DocumentCache<LopdfExtractor> {
    pub fn new() -> Self {
        Self::with_extractor(LopdfExtractor)
    }
}

impl Default for DocumentCache<LopdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PdfExtractor> DocumentCache<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<DocumentStore>, DocumentLoadError> {
        if let Some(store) = self.lock().get(path) {
            debug!(path = %path.display(), "document cache hit");
            return Ok(Arc::clone(store));
        }

        // Parsing happens outside the lock. Two racing first calls may both
        // parse; the first insert wins and both get the same Arc back.
        let loaded = Arc::new(load_with(&self.extractor, path)?);
        let mut entries = self.lock();
        let store = entries.entry(path.to_path_buf()).or_insert(loaded);
        Ok(Arc::clone(store))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<DocumentStore>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentCache;
    use crate::error::DocumentLoadError;
    use crate::extractor::{PageText, PdfExtractor};
    use std::fs;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[derive(Default)]
    struct CountingExtractor {
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl PdfExtractor for CountingExtractor {
        fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<PageText>, DocumentLoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(DocumentLoadError::PdfParse("forced failure".to_string()));
            }
            Ok(vec![PageText {
                number: 1,
                text: String::from_utf8_lossy(pdf).to_string(),
            }])
        }
    }

    #[test]
    fn same_path_is_parsed_once() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"placeholder")?;
        let cache = DocumentCache::with_extractor(CountingExtractor::default());

        let first = cache.get_or_load(&path)?;
        let second = cache.get_or_load(&path)?;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.extractor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[test]
    fn distinct_paths_get_distinct_entries() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        fs::write(&a, b"a")?;
        fs::write(&b, b"b")?;
        let cache = DocumentCache::with_extractor(CountingExtractor::default());

        let store_a = cache.get_or_load(&a)?;
        let store_b = cache.get_or_load(&b)?;

        assert_ne!(store_a.pages()[0].text, store_b.pages()[0].text);
        assert_eq!(cache.extractor.calls.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[test]
    fn failed_load_is_retried() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("flaky.pdf");
        fs::write(&path, b"placeholder")?;
        let cache = DocumentCache::with_extractor(CountingExtractor::default());
        cache.extractor.fail.store(true, Ordering::SeqCst);

        assert!(cache.get_or_load(&path).is_err());
        assert!(cache.is_empty());

        cache.extractor.fail.store(false, Ordering::SeqCst);
        let store = cache.get_or_load(&path)?;

        assert_eq!(store.len(), 1);
        assert_eq!(cache.extractor.calls.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[test]
    fn missing_file_is_cached_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("missing.pdf");
        let cache = DocumentCache::with_extractor(CountingExtractor::default());

        let store = cache.get_or_load(&path)?;
        let again = cache.get_or_load(&path)?;

        assert!(store.is_empty());
        assert!(Arc::ptr_eq(&store, &again));
        assert_eq!(cache.extractor.calls.load(Ordering::SeqCst), 0);
        Ok(())
    }
}
