//! Generic CRUD repository shared by every record type.
//!
//! A record type describes its table once through [`Resource`]; its write
//! DTOs describe which columns they set through [`WriteFields`]. The
//! [`CrudRepo`] methods then build the SQL from those descriptions, so the
//! five record types share one implementation of list/get/count/create/
//! update/delete.
//!
//! Every write runs inside its own transaction. On error the transaction is
//! dropped (rolled back) and the error is returned to the caller.

use std::marker::PhantomData;

use inventario_core::types::DbId;
use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

use crate::DbPool;

/// A `query_as` builder over SQLite, as handed to [`WriteFields::bind_to`].
pub type SqliteQueryAs<'q, O> = QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;

/// A table-backed record type.
pub trait Resource: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Human-readable entity name used in `NotFound` errors.
    const ENTITY: &'static str;
    /// Table name.
    const TABLE: &'static str;
    /// Column list selected for every query, `id` first.
    const COLUMNS: &'static str;

    /// DTO accepted by [`CrudRepo::create`].
    type Create: WriteFields;
    /// DTO accepted by [`CrudRepo::update`].
    type Update: WriteFields;

    fn id(&self) -> DbId;
}

/// A set of column values to write.
pub trait WriteFields: Send + Sync {
    /// Columns written, in the order [`bind_to`](Self::bind_to) binds them.
    fn columns(&self) -> Vec<&'static str>;

    /// Bind one value per entry of [`columns`](Self::columns).
    fn bind_to<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O>;
}

/// Provides CRUD operations for any [`Resource`].
pub struct CrudRepo<R>(PhantomData<R>);

impl<R: Resource> CrudRepo<R> {
    /// List all rows in creation order.
    pub async fn list(pool: &DbPool) -> Result<Vec<R>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} ORDER BY id", R::COLUMNS, R::TABLE);
        sqlx::query_as::<_, R>(&query).fetch_all(pool).await
    }

    /// Find a row by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<R>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = ?", R::COLUMNS, R::TABLE);
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all rows.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Insert a new row, returning it with its freshly assigned id.
    pub async fn create(pool: &DbPool, input: &R::Create) -> Result<R, sqlx::Error> {
        let columns = input.columns();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING {}",
            R::TABLE,
            columns.join(", "),
            R::COLUMNS,
        );

        let mut tx = pool.begin().await?;
        let row = input
            .bind_to(sqlx::query_as::<_, R>(&query))
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Overwrite the columns named by `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &R::Update,
    ) -> Result<Option<R>, sqlx::Error> {
        let assignments = input
            .columns()
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE {} SET {assignments} WHERE id = ? RETURNING {}",
            R::TABLE,
            R::COLUMNS,
        );

        let mut tx = pool.begin().await?;
        let row = input
            .bind_to(sqlx::query_as::<_, R>(&query))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Delete a row. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = ?", R::TABLE);

        let mut tx = pool.begin().await?;
        let result = sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
