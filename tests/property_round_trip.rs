//! Property tests for the encrypt/decrypt pipelines.
//!
//! Covers round trips, padding, determinant rejection and key
//! normalization over randomly drawn keys and messages.

mod common;

use common::{
    arb_even_message, arb_key, arb_message, arb_valid_key, init_test_logging,
    test_proptest_config,
};
use hillcipher::modular::normalize_mod26;
use hillcipher::{decrypt, encrypt, validate_key, CipherError, HillCipher, Matrix};
use proptest::prelude::*;

proptest! {
    #![proptest_config(test_proptest_config(256))]

    /// decrypt(k, encrypt(k, m)) == lowercase(m) for block-aligned m.
    #[test]
    fn round_trip_even_length(key in arb_valid_key(), message in arb_even_message()) {
        init_test_logging();
        let ciphertext = encrypt(&key, &message).unwrap();
        prop_assert_eq!(decrypt(&key, &ciphertext).unwrap(), message);
    }

    /// Mixed case input round trips to its lowercase form, plus padding.
    #[test]
    fn round_trip_any_length(key in arb_valid_key(), message in arb_message()) {
        let cipher = HillCipher::new(&key).unwrap();
        let plaintext = cipher.decrypt(&cipher.encrypt(&message).unwrap()).unwrap();

        let mut expected = message.to_ascii_lowercase();
        if expected.len() % 2 == 1 {
            expected.push('x');
        }
        prop_assert_eq!(plaintext, expected);
    }

    /// Ciphertext length is the message length rounded up to a whole block.
    #[test]
    fn ciphertext_length(key in arb_valid_key(), message in arb_message()) {
        let ciphertext = encrypt(&key, &message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len() + message.len() % 2);
        prop_assert!(ciphertext.chars().all(|c| c.is_ascii_lowercase()));
    }

    /// Encryption is also the inverse of decryption.
    #[test]
    fn decrypt_then_encrypt(key in arb_valid_key(), message in arb_even_message()) {
        let plaintext = decrypt(&key, &message).unwrap();
        prop_assert_eq!(encrypt(&key, &plaintext).unwrap(), message);
    }

    /// A key is accepted exactly when its determinant is a unit mod 26.
    #[test]
    fn determinant_gate(key in arb_key()) {
        let det = normalize_mod26(key.determinant());
        let result = validate_key(&key);
        if det % 2 == 0 || det == 13 {
            prop_assert_eq!(result, Err(CipherError::NotInvertibleMod26 { determinant: det }));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Keys equal mod 26 produce identical ciphertext.
    #[test]
    fn key_normalization(key in arb_valid_key(), message in arb_message()) {
        let reduced = key.normalized_mod26();
        prop_assert_eq!(encrypt(&key, &message), encrypt(&reduced, &message));
    }

    /// The stored inverse really inverts the key mod 26.
    #[test]
    fn inverse_is_inverse(key in arb_valid_key()) {
        let cipher = HillCipher::new(&key).unwrap();
        let product = cipher.inverse_key().mul_columns(cipher.key()).unwrap().normalized_mod26();
        prop_assert_eq!(product, Matrix::from([[1, 0], [0, 1]]));
    }

    /// Any non-letter in the message is reported with its position.
    #[test]
    fn non_letter_rejected(
        key in arb_valid_key(),
        prefix in "[a-z]{0,10}",
        bad in "[0-9 .,!?-]",
        suffix in "[a-z]{0,10}",
    ) {
        let message = format!("{}{}{}", prefix, bad, suffix);
        let character = bad.chars().next().unwrap();
        let expected = Err(CipherError::NonAlphabeticCharacter {
            character,
            position: prefix.len(),
        });
        prop_assert_eq!(encrypt(&key, &message), expected.clone());
        prop_assert_eq!(decrypt(&key, &message), expected);
    }
}
