use crate::page::Banner;
use pdf_qa_core::{DocumentLoadError, DocumentStore};
use std::path::Path;
use std::sync::Arc;

/// Whether this process can answer questions.
///
/// Decided once at startup. A halted session stays halted.
#[derive(Debug, Clone)]
pub enum Session {
    Ready { store: Arc<DocumentStore> },
    Halted { reason: String },
}

impl Session {
    pub fn from_load(path: &Path, loaded: Result<Arc<DocumentStore>, DocumentLoadError>) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        match loaded {
            Ok(store) if !store.is_empty() => Session::Ready { store },
            Ok(store) if store.fingerprint().is_none() => Session::Halted {
                reason: format!("PDF not found. Keep {name} in the same folder."),
            },
            Ok(_) => Session::Halted {
                reason: format!("No extractable text found in {name}."),
            },
            Err(error) => Session::Halted {
                reason: format!("Failed to load {name}: {error}"),
            },
        }
    }

    pub fn banner(&self) -> Banner {
        match self {
            Session::Ready { store } => Banner::Loaded { pages: store.len() },
            Session::Halted { reason } => Banner::Halted {
                message: reason.clone(),
            },
        }
    }

    pub fn store(&self) -> Option<&Arc<DocumentStore>> {
        match self {
            Session::Ready { store } => Some(store),
            Session::Halted { .. } => None,
        }
    }
}
