use serde::{Deserialize, Serialize};

use super::error::ExtractionError;

/// Kind of an uploaded document, derived from its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    PlainText,
    Pdf,
    Csv,
    Spreadsheet,
}

impl FileKind {
    /// Resolve the kind from a file name, matching the extension case-insensitively.
    /// Accepted extensions: txt, pdf, csv, xlsx, xls.
    pub fn from_filename(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(FileKind::PlainText),
            "pdf" => Ok(FileKind::Pdf),
            "csv" => Ok(FileKind::Csv),
            "xlsx" | "xls" => Ok(FileKind::Spreadsheet),
            _ => Err(ExtractionError::UnsupportedKind(file_name.to_string())),
        }
    }

    /// Human readable label used in error messages
    pub fn description(&self) -> &'static str {
        match self {
            FileKind::PlainText => "text file",
            FileKind::Pdf => "PDF",
            FileKind::Csv => "CSV file",
            FileKind::Spreadsheet => "Excel file",
        }
    }
}

/// An uploaded payload together with its declared kind.
/// Consumed once by extraction.
#[derive(Debug)]
pub struct SourceDocument {
    pub file_name: String,
    pub kind: FileKind,
    bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, kind: FileKind, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
            bytes,
        }
    }

    /// Build a document whose kind comes from the file extension
    pub fn from_upload(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ExtractionError> {
        let file_name = file_name.into();
        let kind = FileKind::from_filename(&file_name)?;
        Ok(Self::new(file_name, kind, bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn extract(self) -> Result<ExtractedText, ExtractionError> {
        super::extractor::extract(&self.bytes, self.kind)
    }
}

/// Plain text recovered from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
