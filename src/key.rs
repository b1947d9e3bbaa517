//! Key validation.

use crate::error::{CipherError, Result};
use crate::matrix::Matrix;
use crate::modular::{gcd, normalize_mod26, MODULUS};

/// Number of letters per block, and the only supported key dimension.
pub const BLOCK_SIZE: usize = 2;

/// Checks that `key` can be used for both encryption and decryption.
///
/// Checks run in order and the first failure is returned:
/// 1. the key is square, else [`CipherError::NotSquare`];
/// 2. its dimension is [`BLOCK_SIZE`], else
///    [`CipherError::UnsupportedDimension`];
/// 3. the determinant of the key reduced mod 26 is coprime with 26, else
///    [`CipherError::NotInvertibleMod26`].
///
/// # Examples
///
/// ```
/// use hillcipher::{validate_key, CipherError, Matrix};
///
/// assert!(validate_key(&Matrix::from([[3, 3], [2, 5]])).is_ok());
/// assert_eq!(
///     validate_key(&Matrix::from([[2, 0], [0, 1]])),
///     Err(CipherError::NotInvertibleMod26 { determinant: 2 })
/// );
/// ```
pub fn validate_key(key: &Matrix) -> Result<()> {
    if !key.is_square() {
        return Err(CipherError::NotSquare {
            rows: key.rows(),
            cols: key.cols(),
        });
    }
    if key.rows() != BLOCK_SIZE {
        return Err(CipherError::UnsupportedDimension {
            found: key.rows(),
            expected: BLOCK_SIZE,
        });
    }

    let determinant = normalize_mod26(key.normalized_mod26().determinant());
    if determinant == 0 || gcd(determinant, MODULUS) != 1 {
        return Err(CipherError::NotInvertibleMod26 { determinant });
    }
    Ok(())
}
