//! Computer inventory model and form DTO.

use inventario_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::repositories::crud::{Resource, SqliteQueryAs, WriteFields};

/// A row from the `computers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Computer {
    pub id: DbId,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

/// Submitted add/edit form. Every field is overwritten on edit.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ComputerInput {
    #[serde(rename = "marca")]
    #[validate(length(min = 1, message = "marca is required"))]
    pub brand: String,
    #[serde(rename = "modelo")]
    #[validate(length(min = 1, message = "modelo is required"))]
    pub model: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl Resource for Computer {
    const ENTITY: &'static str = "Computer";
    const TABLE: &'static str = "computers";
    const COLUMNS: &'static str = "id, brand, model, quantity";

    type Create = ComputerInput;
    type Update = ComputerInput;

    fn id(&self) -> DbId {
        self.id
    }
}

impl WriteFields for ComputerInput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["brand", "model", "quantity"]
    }

    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.brand.as_str())
            .bind(self.model.as_str())
            .bind(self.quantity)
    }
}
