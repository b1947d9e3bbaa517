//! Hill cipher engine.
//!
//! The Hill cipher is a classical polygraphic substitution cipher. Letters
//! are mapped to `0..26`, grouped into blocks of `n` letters, and each block
//! is multiplied by an invertible `n×n` key matrix modulo 26. Decryption
//! multiplies by the key's inverse mod 26.
//!
//! This crate validates 2×2 keys and messages over the 26 lowercase Latin
//! letters. It is a teaching implementation and offers no security.
//!
//! # Architecture
//!
//! ```text
//! alphabet  (letter <-> index)      modular  (mod 26 reduction, inverses)
//!       \                              /
//!      codec  (message <-> grid)   matrix  (determinant, adjugate, products)
//!            \                      /   \
//!             \                    /    key  (validation gate)
//!              \                  /     /
//!               HillCipher  (encrypt / decrypt pipelines)
//! ```
//!
//! # Examples
//!
//! ```
//! use hillcipher::{decrypt, encrypt, Matrix};
//!
//! let key = Matrix::from([[3, 3], [2, 5]]);
//!
//! let ciphertext = encrypt(&key, "help").unwrap();
//! assert_eq!(ciphertext, "hiat");
//! assert_eq!(decrypt(&key, &ciphertext).unwrap(), "help");
//! ```
//!
//! Odd-length messages are padded with `'x'`, which survives decryption:
//!
//! ```
//! use hillcipher::{HillCipher, Matrix};
//!
//! let cipher = HillCipher::new(&Matrix::from([[1, 3], [2, 5]])).unwrap();
//! let ciphertext = cipher.encrypt("message").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "messagex");
//! ```
//!
//! # Features
//!
//! - `parallel`: multiply grid columns on the rayon thread pool.

#![deny(clippy::all)]

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod key;
pub mod matrix;
pub mod modular;

mod hill;

pub use error::{CipherError, Result};
pub use hill::{decrypt, encrypt, HillCipher};
pub use key::{validate_key, BLOCK_SIZE};
pub use matrix::Matrix;
