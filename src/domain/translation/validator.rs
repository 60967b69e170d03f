use super::error::ValidationError;

/// Minimum length of the text once surrounding whitespace is stripped
pub const MIN_CHARS: usize = 3;
/// Maximum length of the text as submitted, whitespace included
pub const MAX_CHARS: usize = 10_000;

/// Check text before it is sent to the translation backend.
///
/// The lower bound applies to the trimmed text while the upper bound applies
/// to the raw text, so padding counts against the limit but not towards the
/// minimum. Lengths are counted in characters.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    if text.trim().chars().count() < MIN_CHARS {
        return Err(ValidationError::TooShort);
    }

    if text.chars().count() > MAX_CHARS {
        return Err(ValidationError::TooLong);
    }

    Ok(())
}
