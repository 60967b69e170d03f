pub mod error;
pub mod extractor;
pub mod model;

pub use error::ExtractionError;
pub use extractor::extract;
pub use model::{ExtractedText, FileKind, SourceDocument};
