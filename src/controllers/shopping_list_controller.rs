use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::ShoppingItemRecord;
use crate::models::api::{ManualEntry, ShoppingListEntry};

/// Store a manual shopping-list entry
///
/// Entries with a blank name, quantity or unit are not stored and yield
/// `Ok(None)`. Accepted entries return the new row ID.
pub async fn add_shopping_item(pool: &SqlitePool, entry: &ManualEntry) -> Result<Option<i64>> {
    let Some(accepted) = entry.validate() else {
        debug!(name = %entry.name, "skipping manual shopping entry with blank field");
        return Ok(None);
    };

    let item_id = sqlx::query("INSERT INTO shopping_items (name, quantity, unit) VALUES (?, ?, ?)")
        .bind(&accepted.name)
        .bind(accepted.quantity)
        .bind(&accepted.unit)
        .execute(pool)
        .await?
        .last_insert_rowid();

    info!(item_id, name = %accepted.name, "added shopping item");

    Ok(Some(item_id))
}

/// Get the manual shopping list in the order entries were added
pub async fn get_shopping_items(pool: &SqlitePool) -> Result<Vec<ShoppingListEntry>> {
    let items = sqlx::query_as::<_, ShoppingItemRecord>(
        "SELECT id, name, quantity, unit, created_at FROM shopping_items ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(items.into_iter().map(ShoppingListEntry::from).collect())
}
