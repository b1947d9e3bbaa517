//! The 26-letter Latin alphabet and its index mapping.

use crate::error::{CipherError, Result};

/// Number of symbols in the alphabet, and the cipher modulus.
pub const ALPHABET_LEN: usize = 26;

/// Ordered alphabet; a symbol's position is its numeric value.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Returns the alphabet index of `symbol`, ignoring case.
///
/// # Errors
/// Returns [`CipherError::UnknownSymbol`] if `symbol` is not an ASCII letter.
///
/// # Examples
///
/// ```
/// use hillcipher::alphabet::index_of;
///
/// assert_eq!(index_of('a').unwrap(), 0);
/// assert_eq!(index_of('Z').unwrap(), 25);
/// assert!(index_of('!').is_err());
/// ```
pub fn index_of(symbol: char) -> Result<u8> {
    let lower = symbol.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() {
        return Err(CipherError::UnknownSymbol(symbol));
    }
    Ok(lower as u8 - b'a')
}

/// Returns the symbol at `index`.
///
/// `index` must already be reduced into `[0, 26)`; see
/// [`normalize_mod26`](crate::modular::normalize_mod26).
///
/// # Panics
/// Panics if `index >= 26`.
pub fn symbol_at(index: usize) -> char {
    ALPHABET[index]
}
