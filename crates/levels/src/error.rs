//! Error types for the levels crate

use sokoban_core::SokobanError;

/// Level-specific error types
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    /// A grid row contains a character outside the level alphabet
    #[error("Unknown character {character:?} at line {line_number}, column {column}: '{line}'")]
    UnrecognizedCharacter {
        character: char,
        line_number: usize,
        column: usize,
        line: String,
    },

    /// A grid row appears before any `;` separator opened a level
    #[error("Grid row before any level separator at line {line_number}: '{line}'")]
    RowBeforeLevel { line_number: usize, line: String },

    /// Level file not found
    #[error("Level file not found: {0}")]
    NotFound(String),
}

impl From<LevelError> for SokobanError {
    fn from(err: LevelError) -> Self {
        match err {
            LevelError::FileError(e) => SokobanError::Io(e),
            LevelError::NotFound(path) => SokobanError::NotFound(path),
            other => SokobanError::InvalidData(other.to_string()),
        }
    }
}

/// Result type for level operations
pub type Result<T> = std::result::Result<T, LevelError>;
