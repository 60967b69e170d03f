pub mod document;
pub mod health;
pub mod language;
pub mod translation;
pub mod upload;
