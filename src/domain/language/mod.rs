pub mod table;

pub use table::{find_by_code, find_by_name, LanguageEntry, DEFAULT_LANGUAGE, LANGUAGES};
