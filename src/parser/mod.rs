mod import_extractor;

pub use import_extractor::{extract_module_names, read_source};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("File is not valid UTF-8")]
    DecodeError,
}

/// True when `name` could be reported as an external module: non-empty,
/// not relative or absolute, and made only of package identifier characters.
pub fn is_module_name(name: &str) -> bool {
    match name.chars().next() {
        None | Some('.') | Some('/') | Some('\\') => false,
        Some(_) => name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '@' | '/')),
    }
}
