//! User account model, form DTOs and write DTOs.

use inventario_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::repositories::crud::{Resource, SqliteQueryAs, WriteFields};

/// Full user row from the `users` table.
///
/// The password hash is never serialized, so a `User` can be handed to a view
/// as-is.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "rol")]
    pub role: String,
}

/// Self-registration form. A submitted `rol` is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre is required"))]
    pub name: String,
    #[serde(rename = "correo")]
    #[validate(email(message = "correo must be an email address"))]
    pub email: String,
    #[serde(rename = "contrasena")]
    #[validate(length(min = 1, message = "contrasena is required"))]
    pub password: String,
}

/// Edit form. An empty or missing `contrasena` keeps the stored hash.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditUser {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre is required"))]
    pub name: String,
    #[serde(rename = "correo")]
    #[validate(email(message = "correo must be an email address"))]
    pub email: String,
    #[serde(rename = "contrasena", default)]
    pub password: Option<String>,
    #[serde(rename = "rol")]
    #[validate(length(min = 1, message = "rol is required"))]
    pub role: String,
}

impl EditUser {
    /// The new plaintext password, if one was actually supplied.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// DTO for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for updating a user. `password_hash: None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
}

impl Resource for User {
    const ENTITY: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, name, email, password_hash, role";

    type Create = CreateUser;
    type Update = UpdateUser;

    fn id(&self) -> DbId {
        self.id
    }
}

impl WriteFields for CreateUser {
    fn columns(&self) -> Vec<&'static str> {
        vec!["name", "email", "password_hash", "role"]
    }

    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.name.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
            .bind(self.role.as_str())
    }
}

impl WriteFields for UpdateUser {
    fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["name", "email"];
        if self.password_hash.is_some() {
            columns.push("password_hash");
        }
        columns.push("role");
        columns
    }

    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        let mut query = query.bind(self.name.as_str()).bind(self.email.as_str());
        if let Some(hash) = &self.password_hash {
            query = query.bind(hash.as_str());
        }
        query.bind(self.role.as_str())
    }
}
