use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RecipeRecord {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    /// Steps joined with newlines
    pub instructions: Option<String>,
    pub created_at: String,
}
