use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealCartError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(i64),
}

pub type Result<T> = std::result::Result<T, MealCartError>;
