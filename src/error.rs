//! Error types for the Hill cipher library.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Errors produced by the Hill cipher library.
///
/// Every failure is detected before any block is transformed, so an error
/// never comes with partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key row count differs from its column count.
    #[error("Key matrix is {rows}x{cols}; a key must be square")]
    NotSquare {
        /// Number of rows in the rejected key.
        rows: usize,
        /// Number of columns in the rejected key.
        cols: usize,
    },

    /// Key is square but its dimension is not the supported block size.
    #[error("Key dimension {found} is not supported; expected {expected}")]
    UnsupportedDimension {
        /// Dimension of the rejected key.
        found: usize,
        /// The supported block size.
        expected: usize,
    },

    /// Determinant shares a factor with 26, so the key has no inverse mod 26.
    #[error("Key determinant {determinant} (mod 26) is not invertible modulo 26")]
    NotInvertibleMod26 {
        /// Determinant of the key, reduced into [0, 26).
        determinant: i64,
    },

    /// Message contains a character outside the Latin alphabet.
    #[error("Character {character:?} at position {position} is not a letter")]
    NonAlphabeticCharacter {
        /// The offending character.
        character: char,
        /// Character (not byte) position within the message.
        position: usize,
    },

    /// Operand shapes do not line up for a matrix operation.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The length the operation required.
        expected: usize,
        /// The length it was given.
        found: usize,
    },

    /// Symbol has no position in the alphabet.
    #[error("Symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),
}
