use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("path has no file name: {0}")]
    MissingFileName(String),
}

pub type Result<T, E = DocumentLoadError> = std::result::Result<T, E>;
