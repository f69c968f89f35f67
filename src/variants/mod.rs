//! Concrete named encodings: one unit-struct variant per encoding, with
//! its cached lookup table, plus the module-level convenience functions.

pub mod base32;
pub mod base64;
pub mod base64url;
pub mod crockford;
pub mod hex;
pub mod z85;
