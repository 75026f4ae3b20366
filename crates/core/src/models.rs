use chrono::{DateTime, Utc};
use std::fmt;

/// Identity of the file a [`crate::DocumentStore`] was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFingerprint {
    pub document_title: String,
    pub source_path: String,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Text handed back for a query. Carries no page number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
