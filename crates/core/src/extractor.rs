use crate::error::DocumentLoadError;
use lopdf::Document;
use tracing::debug;

/// Text of one page, numbered from 1 in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

impl PageText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Source of per-page text for PDF bytes.
///
/// Implementations return every page they could read, in page order, empty
/// ones included. Filtering is the loader's job.
pub trait PdfExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<PageText>, DocumentLoadError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<PageText>, DocumentLoadError> {
        let document =
            Document::load_mem(pdf).map_err(|error| DocumentLoadError::PdfParse(error.to_string()))?;

        // get_pages is a BTreeMap keyed by page number, so iteration is page order.
        let mut pages = Vec::new();
        for (page_no, _page_id) in document.get_pages() {
            let mut text = document
                .extract_text(&[page_no])
                .map_err(|error| DocumentLoadError::PdfParse(error.to_string()))?;

            // lopdf terminates every text object with a newline; only that one is dropped.
            if text.ends_with('\n') {
                text.pop();
            }

            debug!(page = page_no, chars = text.chars().count(), "extracted page text");
            pages.push(PageText {
                number: page_no,
                text,
            });
        }

        Ok(pages)
    }
}
