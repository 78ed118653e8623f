use sqlx::prelude::FromRow;

use crate::models::api::ShoppingListEntry;

#[derive(Debug, Clone, FromRow)]
pub struct ShoppingItemRecord {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub created_at: String,
}

impl From<ShoppingItemRecord> for ShoppingListEntry {
    fn from(record: ShoppingItemRecord) -> Self {
        ShoppingListEntry {
            name: record.name,
            quantity: record.quantity,
            unit: record.unit,
        }
    }
}
