use crate::models::Answer;
use crate::store::DocumentStore;

/// Upper bound, in characters, on the text returned for a query.
pub const ANSWER_MAX_CHARS: usize = 500;

/// Picks the page that answers `query` and returns its leading text.
///
/// Pages are scanned in order and the first one containing `query`
/// (case-insensitively) wins. With no match the first page is used. An empty
/// query is contained in every page, so it also resolves to the first page.
/// An empty store yields an empty answer.
pub fn retrieve(query: &str, store: &DocumentStore) -> Answer {
    let needle = query.to_lowercase();

    let page = store
        .iter()
        .find(|page| page.text.to_lowercase().contains(&needle))
        .or_else(|| store.first());

    match page {
        Some(page) => Answer::new(truncate_chars(&page.text, ANSWER_MAX_CHARS)),
        None => Answer::default(),
    }
}

pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
