//! SQLite-backed item storage.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use stockwatch_domain::common::{format_datetime, parse_datetime};
use stockwatch_domain::{Category, Item, ItemId, ItemName, Threshold};
use uuid::Uuid;

use crate::infrastructure::ports::{ItemRepo, RepoError};

const ITEM_COLUMNS: &str = "id, name, quantity, category, threshold, date_added";

/// SQLite implementation of the item collection.
///
/// One row per item. Rows are listed in `rowid` order, which follows
/// insertion order.
pub struct SqliteItemRepo {
    pool: SqlitePool,
}

impl SqliteItemRepo {
    /// Open (or create) the database file at `db_path`.
    pub async fn open(db_path: &str) -> Result<Self, RepoError> {
        Self::connect(&format!("sqlite:{}?mode=rwc", db_path)).await
    }

    /// Connect using a full connection string, e.g. `sqlite:inventory.db?mode=rwc`
    /// or `sqlite::memory:`.
    pub async fn connect(database_url: &str) -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| RepoError::database("items.connect", e))?
            .create_if_missing(true);

        // Every connection to `:memory:` gets its own database, so pin the pool
        // to a single connection that is never recycled.
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("items.connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                category TEXT NOT NULL,
                threshold INTEGER NOT NULL DEFAULT 5,
                date_added TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("items.schema", e))?;

        tracing::debug!(database_url, "Item store ready");

        Ok(Self { pool })
    }
}

fn item_from_row(row: &SqliteRow) -> Result<Item, RepoError> {
    let id: String = row.try_get("id").map_err(RepoError::serialization)?;
    let name: String = row.try_get("name").map_err(RepoError::serialization)?;
    let quantity: i64 = row.try_get("quantity").map_err(RepoError::serialization)?;
    let category: String = row.try_get("category").map_err(RepoError::serialization)?;
    let threshold: i64 = row.try_get("threshold").map_err(RepoError::serialization)?;
    let date_added: String = row.try_get("date_added").map_err(RepoError::serialization)?;

    let id = Uuid::parse_str(&id).map_err(RepoError::serialization)?;
    let quantity = u32::try_from(quantity).map_err(|_| {
        RepoError::serialization(format!("item {} has invalid quantity {}", id, quantity))
    })?;
    let threshold = u32::try_from(threshold).map_err(|_| {
        RepoError::serialization(format!("item {} has invalid threshold {}", id, threshold))
    })?;

    Ok(Item {
        id: ItemId::from_uuid(id),
        name: ItemName::new(name).map_err(RepoError::serialization)?,
        quantity,
        category: Category::from_str(&category).map_err(RepoError::serialization)?,
        threshold: Threshold::new(threshold).map_err(RepoError::serialization)?,
        date_added: parse_datetime(&date_added).map_err(RepoError::serialization)?,
    })
}

#[async_trait]
impl ItemRepo for SqliteItemRepo {
    async fn create(&self, item: Item) -> Result<Item, RepoError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, quantity, category, threshold, date_added)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.to_string())
        .bind(item.name.as_str())
        .bind(i64::from(item.quantity))
        .bind(item.category.as_str())
        .bind(i64::from(item.threshold.value()))
        .bind(format_datetime(&item.date_added))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("items.insert", e))?;

        Ok(item)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        let row = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("items.get", e))?;

        row.as_ref().map(item_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Item>, RepoError> {
        let rows = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("items.list", e))?;

        rows.iter().map(item_from_row).collect()
    }

    async fn update_quantity(
        &self,
        id: ItemId,
        quantity: u32,
    ) -> Result<Option<Item>, RepoError> {
        let row = sqlx::query(&format!(
            "UPDATE items SET quantity = ? WHERE id = ? RETURNING {ITEM_COLUMNS}"
        ))
        .bind(i64::from(quantity))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("items.update_quantity", e))?;

        row.as_ref().map(item_from_row).transpose()
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("items.delete", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(item_id = %id, "Delete of unknown item ignored");
        }
        Ok(())
    }
}
