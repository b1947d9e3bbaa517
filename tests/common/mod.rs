#![allow(dead_code)]
//! Shared integration test utilities.

use hillcipher::Matrix;
use proptest::prelude::*;
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `hillcipher=debug`.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hillcipher=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Proptest configuration with `cases` successful cases.
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Any 2×2 key, valid or not, with entries in `-60..60`.
pub fn arb_key() -> impl Strategy<Value = Matrix> {
    prop::array::uniform4(-60i64..60).prop_map(|[a, b, c, d]| Matrix::from([[a, b], [c, d]]))
}

/// 2×2 keys whose determinant is a unit mod 26.
pub fn arb_valid_key() -> impl Strategy<Value = Matrix> {
    arb_key().prop_filter("determinant must be invertible mod 26", |k| {
        let det = k.determinant().rem_euclid(26);
        det % 2 == 1 && det != 13
    })
}

/// Mixed-case alphabetic messages of length `0..64`.
pub fn arb_message() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,64}"
}

/// Lowercase messages of even length.
pub fn arb_even_message() -> impl Strategy<Value = String> {
    "[a-z]{0,32}".prop_map(|s| {
        let mut s = s;
        if s.len() % 2 == 1 {
            s.pop();
        }
        s
    })
}
