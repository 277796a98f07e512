//! Request gating extractors.
//!
//! - [`auth::RequireAuth`] -- Resolves the session cookie to the logged-in
//!   user, or redirects to the login page.

pub mod auth;
