pub mod document;
pub mod language;
pub mod shared;
pub mod translation;
