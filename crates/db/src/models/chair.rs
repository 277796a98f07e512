//! Chair inventory model and form DTO.

use inventario_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::repositories::crud::{Resource, SqliteQueryAs, WriteFields};

/// A row from the `chairs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Chair {
    pub id: DbId,
    #[serde(rename = "tipo")]
    pub kind: String,
    pub material: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChairInput {
    #[serde(rename = "tipo")]
    #[validate(length(min = 1, message = "tipo is required"))]
    pub kind: String,
    #[validate(length(min = 1, message = "material is required"))]
    pub material: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl Resource for Chair {
    const ENTITY: &'static str = "Chair";
    const TABLE: &'static str = "chairs";
    const COLUMNS: &'static str = "id, kind, material, quantity";

    type Create = ChairInput;
    type Update = ChairInput;

    fn id(&self) -> DbId {
        self.id
    }
}

impl WriteFields for ChairInput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["kind", "material", "quantity"]
    }

    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.kind.as_str())
            .bind(self.material.as_str())
            .bind(self.quantity)
    }
}
