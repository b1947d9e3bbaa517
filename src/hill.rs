//! HillCipher: validated key plus the encrypt/decrypt pipelines.
//!
//! Both directions run the same pipeline:
//!
//! ```text
//! validate message → encode (pad, column-major grid) → key × each column → mod 26 → decode
//! ```
//!
//! Decryption uses the key's inverse mod 26, computed once when the cipher
//! is built.

use tracing::{debug, trace, warn};

use crate::alphabet::index_of;
use crate::codec::{decode, encode_with_filler, validate_message, FILLER};
use crate::error::Result;
use crate::key::validate_key;
use crate::matrix::Matrix;

/// Hill cipher bound to one validated key.
///
/// Construction is the only fallible step for the key; once built, a
/// `HillCipher` can encrypt and decrypt any alphabetic message. It holds no
/// mutable state and can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: Matrix,
    inverse: Matrix,
    filler: char,
}

impl HillCipher {
    /// Creates a cipher for `key`, padding with `'x'`.
    ///
    /// # Errors
    /// Returns the first failure of [`validate_key`]: `NotSquare`,
    /// `UnsupportedDimension` or `NotInvertibleMod26`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcipher::{HillCipher, Matrix};
    ///
    /// let cipher = HillCipher::new(&Matrix::from([[3, 3], [2, 5]])).unwrap();
    /// assert_eq!(cipher.encrypt("help").unwrap(), "hiat");
    /// assert_eq!(cipher.decrypt("hiat").unwrap(), "help");
    /// ```
    ///
    /// ```
    /// use hillcipher::{HillCipher, Matrix};
    ///
    /// // Determinant 4 is even: no inverse mod 26.
    /// assert!(HillCipher::new(&Matrix::from([[2, 0], [0, 2]])).is_err());
    /// ```
    pub fn new(key: &Matrix) -> Result<Self> {
        Self::with_filler(key, FILLER)
    }

    /// Creates a cipher for `key` that pads short blocks with `filler`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), plus `UnknownSymbol` if `filler` is not a
    /// letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcipher::{HillCipher, Matrix};
    ///
    /// let cipher = HillCipher::with_filler(&Matrix::from([[3, 3], [2, 5]]), 'q').unwrap();
    /// assert_eq!(cipher.decrypt(&cipher.encrypt("abc").unwrap()).unwrap(), "abcq");
    /// ```
    pub fn with_filler(key: &Matrix, filler: char) -> Result<Self> {
        if let Err(err) = validate_key(key) {
            warn!(rows = key.rows(), cols = key.cols(), error = %err, "rejected key");
            return Err(err);
        }
        index_of(filler)?;

        let key = key.normalized_mod26();
        let inverse = key.inverse_mod26()?;
        trace!(?key, ?inverse, "key inverted mod 26");
        debug!(block_size = key.rows(), %filler, "hill cipher ready");

        Ok(HillCipher {
            key,
            inverse,
            filler: filler.to_ascii_lowercase(),
        })
    }

    /// Encrypts `message`.
    ///
    /// The message is lowercased and padded to a whole number of blocks;
    /// the ciphertext has the padded length.
    ///
    /// # Errors
    /// Returns `NonAlphabeticCharacter` if `message` contains anything but
    /// ASCII letters.
    pub fn encrypt(&self, message: &str) -> Result<String> {
        self.transform(&self.key, message, "encrypt")
    }

    /// Decrypts `ciphertext`.
    ///
    /// Padding added during encryption is returned as-is.
    ///
    /// # Errors
    /// Returns `NonAlphabeticCharacter` if `ciphertext` contains anything
    /// but ASCII letters.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.transform(&self.inverse, ciphertext, "decrypt")
    }

    /// The key, reduced into `[0, 26)`.
    pub fn key(&self) -> &Matrix {
        &self.key
    }

    /// The decryption matrix (inverse of the key mod 26).
    pub fn inverse_key(&self) -> &Matrix {
        &self.inverse
    }

    /// Letters per block.
    pub fn block_size(&self) -> usize {
        self.key.rows()
    }

    /// Padding symbol.
    pub fn filler(&self) -> char {
        self.filler
    }

    fn transform(&self, matrix: &Matrix, text: &str, direction: &'static str) -> Result<String> {
        validate_message(text)?;
        let grid = encode_with_filler(text, self.block_size(), self.filler)?;
        debug!(direction, len = text.len(), blocks = grid.cols(), "transforming");

        let out = matrix.mul_columns(&grid)?.normalized_mod26();
        Ok(decode(&out))
    }
}

/// Encrypts `message` with `key`.
///
/// Key problems are reported before message problems.
///
/// # Errors
/// Any [`CipherError`](crate::CipherError) key variant from
/// [`validate_key`], or `NonAlphabeticCharacter`.
///
/// # Examples
///
/// ```
/// use hillcipher::{encrypt, Matrix};
///
/// let key = Matrix::from([[1, 3], [2, 5]]);
/// assert_eq!(encrypt(&key, "message").unwrap(), "ysuwsevt");
/// ```
pub fn encrypt(key: &Matrix, message: &str) -> Result<String> {
    HillCipher::new(key)?.encrypt(message)
}

/// Decrypts `ciphertext` with `key`.
///
/// # Errors
/// Same as [`encrypt`].
///
/// # Examples
///
/// ```
/// use hillcipher::{decrypt, Matrix};
///
/// let key = Matrix::from([[1, 3], [2, 5]]);
/// assert_eq!(decrypt(&key, "ysuwsevt").unwrap(), "messagex");
/// ```
pub fn decrypt(key: &Matrix, ciphertext: &str) -> Result<String> {
    HillCipher::new(key)?.decrypt(ciphertext)
}
