use crate::extractor::PageText;
use crate::models::DocumentFingerprint;

/// Ordered, immutable page texts of one loaded document.
///
/// Pages with empty text never make it in; whitespace-only pages are kept.
/// A store for a file that does not exist is empty and has no fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    fingerprint: Option<DocumentFingerprint>,
    pages: Vec<PageText>,
}

impl DocumentStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(fingerprint: Option<DocumentFingerprint>, pages: Vec<PageText>) -> Self {
        let pages = pages.into_iter().filter(|page| !page.is_empty()).collect();
        Self { fingerprint, pages }
    }

    /// Builds a store from bare strings, numbering pages from 1 in the order
    /// given. Empty entries still consume a page number.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| PageText {
                number: (index + 1) as u32,
                text: text.into(),
            })
            .collect();
        Self::new(None, pages)
    }

    pub fn fingerprint(&self) -> Option<&DocumentFingerprint> {
        self.fingerprint.as_ref()
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    pub fn first(&self) -> Option<&PageText> {
        self.pages.first()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageText> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a DocumentStore {
    type Item = &'a PageText;
    type IntoIter = std::slice::Iter<'a, PageText>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
