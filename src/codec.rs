//! Conversion between messages and block grids.
//!
//! A message is laid out column-major: characters fill the first column top
//! to bottom, then the next column, so each column holds one block.

use crate::alphabet::{index_of, symbol_at};
use crate::error::{CipherError, Result};
use crate::matrix::Matrix;
use crate::modular::normalize_mod26;

/// Symbol appended to messages that do not fill their last block.
pub const FILLER: char = 'x';

/// Checks that every character of `message` is an ASCII letter.
///
/// # Errors
/// Returns [`CipherError::NonAlphabeticCharacter`] for the first offending
/// character.
pub fn validate_message(message: &str) -> Result<()> {
    match message
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphabetic())
    {
        Some((position, character)) => Err(CipherError::NonAlphabeticCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Encodes `message` into a `block_size`-row grid, padding with [`FILLER`].
///
/// # Errors
/// Returns [`CipherError::UnknownSymbol`] if a character is not a letter.
///
/// # Examples
///
/// ```
/// use hillcipher::codec::encode;
/// use hillcipher::Matrix;
///
/// // "cat" pads to "catx": columns (c, a) and (t, x).
/// let grid = encode("cat", 2).unwrap();
/// assert_eq!(grid, Matrix::from([[2, 19], [0, 23]]));
/// ```
pub fn encode(message: &str, block_size: usize) -> Result<Matrix> {
    encode_with_filler(message, block_size, FILLER)
}

/// Same as [`encode`] with an explicit padding symbol.
///
/// # Panics
/// Panics if `block_size` is zero.
pub fn encode_with_filler(message: &str, block_size: usize, filler: char) -> Result<Matrix> {
    assert!(block_size > 0, "block size must be positive");

    let mut symbols = message
        .chars()
        .map(index_of)
        .collect::<Result<Vec<u8>>>()?;
    let fill = index_of(filler)?;
    while !symbols.len().is_multiple_of(block_size) {
        symbols.push(fill);
    }

    let num_blocks = symbols.len() / block_size;
    let mut grid = Matrix::new(block_size, num_blocks);
    for (i, &s) in symbols.iter().enumerate() {
        grid.set(i % block_size, i / block_size, s as i64);
    }
    Ok(grid)
}

/// Reads `grid` column-major back into lowercase text.
///
/// Entries are reduced mod 26 first, so an unreduced grid decodes the same
/// as its reduced form. Padding is left in place.
pub fn decode(grid: &Matrix) -> String {
    let mut out = String::with_capacity(grid.rows() * grid.cols());
    for c in 0..grid.cols() {
        for r in 0..grid.rows() {
            out.push(symbol_at(normalize_mod26(grid.get(r, c)) as usize));
        }
    }
    out
}
