//! Standard fixture values shared across tests.
//!
//! The hex strings are placeholder credential material, not real
//! hashes; each has the exact length its column requires.

/// 32-character lowercase hex activation token.
pub static TEST_ACTIVATION_TOKEN: &str = "0123456789abcdef0123456789abcdef";

/// 128-character lowercase hex password hash.
pub static TEST_PASSWORD_HASH: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// 64-character lowercase hex password salt.
pub static TEST_PASSWORD_SALT: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub static TEST_EMAIL: &str = "nancy@example.com";

pub static TEST_USERNAME: &str = "nancy";

pub static TEST_LOCATION: &str = "Albuquerque";
