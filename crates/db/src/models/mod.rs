//! Domain model structs and DTOs.
//!
//! Each record submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` form DTO with the front end's field names
//! - The [`Resource`](crate::repositories::crud::Resource) and
//!   [`WriteFields`](crate::repositories::crud::WriteFields) impls

pub mod chair;
pub mod computer;
pub mod dashboard;
pub mod folder;
pub mod motor;
pub mod session;
pub mod user;
