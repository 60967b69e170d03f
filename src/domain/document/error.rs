use super::model::FileKind;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Error reading text file: {0}")]
    Decode(String),
    #[error("Error reading {}: {reason}", .kind.description())]
    Malformed { kind: FileKind, reason: String },
    #[error("Unsupported file type: {0}. Supported formats: TXT, PDF, CSV, Excel")]
    UnsupportedKind(String),
}

impl ExtractionError {
    pub(crate) fn malformed(kind: FileKind, reason: impl ToString) -> Self {
        ExtractionError::Malformed {
            kind,
            reason: reason.to_string(),
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedKind(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::UnprocessableEntity(err.to_string()),
        }
    }
}
