//! Folder inventory model and form DTO.

use inventario_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::repositories::crud::{Resource, SqliteQueryAs, WriteFields};

/// A row from the `folders` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Folder {
    pub id: DbId,
    pub color: String,
    #[serde(rename = "tamaño")]
    pub size: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FolderInput {
    #[validate(length(min = 1, message = "color is required"))]
    pub color: String,
    #[serde(rename = "tamaño")]
    #[validate(length(min = 1, message = "tamaño is required"))]
    pub size: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl Resource for Folder {
    const ENTITY: &'static str = "Folder";
    const TABLE: &'static str = "folders";
    const COLUMNS: &'static str = "id, color, size, quantity";

    type Create = FolderInput;
    type Update = FolderInput;

    fn id(&self) -> DbId {
        self.id
    }
}

impl WriteFields for FolderInput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["color", "size", "quantity"]
    }

    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.color.as_str())
            .bind(self.size.as_str())
            .bind(self.quantity)
    }
}
