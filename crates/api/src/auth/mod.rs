//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- Opaque session token generation and hashing.
//! - [`session`] -- The session authenticator mapping tokens to users.

pub mod password;
pub mod session;
pub mod token;
