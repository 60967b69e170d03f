pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

/// Number of characters shown when echoing long texts back to the caller
pub const PREVIEW_CHARS: usize = 500;

/// First `PREVIEW_CHARS` characters, followed by "..." when the text is longer
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
