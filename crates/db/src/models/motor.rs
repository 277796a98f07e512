//! Motor inventory model and form DTO.
//!
//! `power` is free text (e.g. `"5 HP"`), not a number.

use inventario_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::repositories::crud::{Resource, SqliteQueryAs, WriteFields};

/// A row from the `motors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Motor {
    pub id: DbId,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "potencia")]
    pub power: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MotorInput {
    #[serde(rename = "tipo")]
    #[validate(length(min = 1, message = "tipo is required"))]
    pub kind: String,
    #[serde(rename = "potencia")]
    #[validate(length(min = 1, message = "potencia is required"))]
    pub power: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl Resource for Motor {
    const ENTITY: &'static str = "Motor";
    const TABLE: &'static str = "motors";
    const COLUMNS: &'static str = "id, kind, power, quantity";

    type Create = MotorInput;
    type Update = MotorInput;

    fn id(&self) -> DbId {
        self.id
    }
}

impl WriteFields for MotorInput {
    fn columns(&self) -> Vec<&'static str> {
        vec!["kind", "power", "quantity"]
    }

    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.kind.as_str())
            .bind(self.power.as_str())
            .bind(self.quantity)
    }
}
