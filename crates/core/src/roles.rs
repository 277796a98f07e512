//! Well-known role name constants.

/// Role given to every self-registered account. The client cannot choose it.
pub const ROLE_DEFAULT: &str = "usuario";
