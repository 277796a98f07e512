//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod flash;
pub mod roles;
pub mod types;
