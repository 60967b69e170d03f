use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use super::error::ExtractionError;
use super::model::{ExtractedText, FileKind};

/// Placeholder rendered for empty table cells
const MISSING_CELL: &str = "NaN";

/// Convert an uploaded payload of a known kind into plain text
pub fn extract(payload: &[u8], kind: FileKind) -> Result<ExtractedText, ExtractionError> {
    let text = match kind {
        FileKind::PlainText => extract_plain_text(payload)?,
        FileKind::Pdf => extract_pdf(payload)?,
        FileKind::Csv => extract_csv(payload)?,
        FileKind::Spreadsheet => extract_spreadsheet(payload)?,
    };

    tracing::debug!(
        kind = ?kind,
        payload_size = payload.len(),
        text_length = text.chars().count(),
        "Document text extracted"
    );

    Ok(ExtractedText::new(text))
}

fn extract_plain_text(payload: &[u8]) -> Result<String, ExtractionError> {
    String::from_utf8(payload.to_vec()).map_err(|e| ExtractionError::Decode(e.to_string()))
}

/// Pages are joined in order, each followed by a newline, and the result trimmed
fn extract_pdf(payload: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs instead of returning an error
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(payload))
        .map_err(|_| ExtractionError::malformed(FileKind::Pdf, "document could not be parsed"))?
        .map_err(|e| ExtractionError::malformed(FileKind::Pdf, e))?;

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }

    Ok(text.trim().to_string())
}

/// First record is the header row. Rows shorter than the header are padded,
/// rows longer than it are rejected.
fn extract_csv(payload: &[u8]) -> Result<String, ExtractionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(payload);

    let headers: Vec<String> = header_labels(
        reader
            .headers()
            .map_err(|e| ExtractionError::malformed(FileKind::Csv, e))?
            .iter()
            .map(str::to_string),
    );

    if headers.is_empty() {
        return Err(ExtractionError::malformed(
            FileKind::Csv,
            "No columns to parse from file",
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractionError::malformed(FileKind::Csv, e))?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(ExtractionError::malformed(
                FileKind::Csv,
                format!(
                    "Expected {} fields in line {}, saw {}",
                    headers.len(),
                    line,
                    record.len()
                ),
            ));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(render_table(&headers, &rows))
}

/// Reads the first worksheet; its first row is the header row
fn extract_spreadsheet(payload: &[u8]) -> Result<String, ExtractionError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(payload))
        .map_err(|e| ExtractionError::malformed(FileKind::Spreadsheet, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractionError::malformed(FileKind::Spreadsheet, "workbook has no worksheets"))?
        .map_err(|e| ExtractionError::malformed(FileKind::Spreadsheet, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_labels(header_row.iter().map(|cell| match cell {
            Data::Empty => String::new(),
            other => cell_text(other),
        })),
        None => {
            return Err(ExtractionError::malformed(
                FileKind::Spreadsheet,
                "No columns to parse from file",
            ))
        }
    };

    let body: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(render_table(&headers, &body))
}

/// Blank header cells are labelled `Unnamed: <column index>`
fn header_labels(labels: impl Iterator<Item = String>) -> Vec<String> {
    labels
        .enumerate()
        .map(|(col, label)| {
            if label.trim().is_empty() {
                format!("Unnamed: {}", col)
            } else {
                label
            }
        })
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => MISSING_CELL.to_string(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::Error(e) => e.to_string(),
    }
}

/// Render rows as right-aligned, space separated columns without index labels.
/// Short rows are padded with the missing-cell placeholder.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let cell = |row: &[String], col: usize| -> String {
        match row.get(col) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => MISSING_CELL.to_string(),
        }
    };

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            std::iter::once(headers)
                .chain(rows.iter().map(Vec::as_slice))
                .map(|row| cell(row, col).chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(headers)
        .chain(rows.iter().map(Vec::as_slice))
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(col, width)| format!("{:>width$}", cell(row, col), width = width))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
